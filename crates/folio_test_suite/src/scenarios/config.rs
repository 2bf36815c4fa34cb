//! Configuration scenarios

use crate::harness::Setup;
use crate::runner::TestSuite;
use folio_app::AppConfig;

fn tuned(source: &str) -> Setup {
    match AppConfig::from_toml_str(source) {
        Ok(config) => Setup {
            config,
            ..Setup::default()
        },
        Err(err) => {
            tracing::error!("scenario config rejected: {}", err);
            Setup::default()
        }
    }
}

pub fn suite() -> TestSuite {
    let mut suite = TestSuite::new("config");

    suite.add("roundtrip", |ctx| {
        let config = ctx.dock().config().clone();
        let app = AppConfig {
            dock: config,
            ..AppConfig::default()
        };
        match app.to_toml_string().and_then(|text| AppConfig::from_toml_str(&text)) {
            Ok(parsed) => ctx.check_eq(parsed, app, "parsed config"),
            Err(err) => ctx.check(false, format!("roundtrip failed: {err}")),
        }
    });

    suite.add("invalid_values_rejected", |ctx| {
        for source in [
            "[dock]\nspread = 0.0",
            "[dock]\nmax_scale = 0.5",
            "[dock]\nmax_lift = -1.0",
            "[dock]\ncenter_line_ratio = 1.5",
            "[page]\nreveal_threshold = 2.0",
        ] {
            ctx.check(
                AppConfig::from_toml_str(source).is_err(),
                format!("accepted {source:?}"),
            );
        }
    });

    suite.add_with(
        "custom_magnification",
        tuned("[dock]\nmax_lift = 30.0\nmax_scale = 1.5\n"),
        |ctx| {
            let line = ctx.center_line();
            ctx.pointer_enter(40.0, line);
            ctx.tick();
            ctx.check_eq(ctx.host.item(0).lift.clone(), "30.00px".to_string(), "lift");
            ctx.check_eq(ctx.host.item(0).scale.clone(), "1.500".to_string(), "scale");
        },
    );

    suite
}
