//! Influence field scenarios

use crate::runner::TestSuite;
use folio_core::Point;
use folio_dock::InfluenceField;

pub fn suite() -> TestSuite {
    let mut suite = TestSuite::new("influence");

    suite.add("bounded_everywhere", |ctx| {
        let config = ctx.dock().config().clone();
        let line = ctx.center_line();
        for step in 0..=40 {
            let x = -100.0 + step as f32 * 15.0;
            for dy in [-400.0, -78.0, -10.0, 0.0, 10.0, 78.0, 400.0] {
                let field =
                    InfluenceField::compute(ctx.dock().geometry(), &config, Point::new(x, line + dy));
                let in_range = field.values().iter().all(|e| (0.0..=1.0).contains(e));
                ctx.check(in_range, format!("influence out of [0, 1] at ({x}, {dy})"));
            }
        }
    });

    suite.add("unit_on_center", |ctx| {
        let config = ctx.dock().config().clone();
        let line = ctx.center_line();
        let field = InfluenceField::compute(ctx.dock().geometry(), &config, Point::new(120.0, line));
        ctx.check_eq(field.vertical(), 1.0, "vertical term on the center line");
        ctx.check_eq(field.get(1), Some(1.0), "influence over item 1");
    });

    suite.add("five_items_pointer_at_200", |ctx| {
        let line = ctx.center_line();
        ctx.pointer_enter(200.0, line);
        ctx.tick();

        let field = InfluenceField::compute(
            ctx.dock().geometry(),
            ctx.dock().config(),
            ctx.dock().pointer(),
        );
        ctx.check_eq(field.strongest().map(|(i, _)| i), Some(2), "strongest item");
        let e = field.get(2).unwrap_or(0.0);
        ctx.check((e - field.vertical()).abs() < 1e-4, "item 2 influence equals the vertical term");
        ctx.check_eq(ctx.dock().hot_item(), Some(2), "hot item");
        ctx.check_eq(ctx.host.hot_items(), vec![2], "rendered hot items");
        ctx.check_eq(ctx.host.item(2).lift.clone(), "20.00px".to_string(), "item 2 lift");
        ctx.check_eq(ctx.host.item(2).scale.clone(), "1.400".to_string(), "item 2 scale");
    });

    suite.add("falloff_with_vertical_distance", |ctx| {
        let line = ctx.center_line();
        ctx.pointer_enter(200.0, line - 78.0);
        ctx.tick();
        // exp(-1) ~ 0.368: raised but well short of full lift
        let style = ctx.dock().styles()[2];
        ctx.check(style.raised, "item 2 raised one vertical spread away");
        ctx.check((style.lift - 20.0 * (-1.0f32).exp()).abs() < 1e-3, "item 2 lift at exp(-1)");
    });

    suite
}
