//! Wave and hot item scenarios

use crate::runner::TestSuite;
use folio_dock::{HotSelector, InfluenceField};

pub fn suite() -> TestSuite {
    let mut suite = TestSuite::new("wave");

    suite.add("bounded_styles_across_sweep", |ctx| {
        let line = ctx.center_line();
        let (max_lift, max_scale) = {
            let config = ctx.dock().config();
            (config.max_lift, config.max_scale)
        };
        ctx.pointer_enter(0.0, line);
        for step in 0..60 {
            let x = step as f32 * 7.0;
            ctx.pointer_move(x, line - 20.0, None);
            ctx.tick();

            let styles = ctx.dock().styles().to_vec();
            for style in styles {
                ctx.check(
                    (0.0..=max_lift).contains(&style.lift),
                    format!("lift {} out of range at x={x}", style.lift),
                );
                ctx.check(
                    (1.0..=max_scale).contains(&style.scale),
                    format!("scale {} out of range at x={x}", style.scale),
                );
            }
            let hot = ctx.host.hot_items();
            ctx.check(hot.len() <= 1, format!("{} hot items at x={x}", hot.len()));
        }
    });

    suite.add("close_challenger_does_not_switch", |ctx| {
        let config = ctx.dock().config().clone();
        let mut selector = HotSelector::new();
        selector.update(&InfluenceField::from_values(1.0, [0.0, 0.6, 0.4]), &config);
        ctx.check_eq(selector.current(), Some(1), "initial hot item");

        let hot = selector.update(&InfluenceField::from_values(1.0, [0.0, 0.50, 0.53]), &config);
        ctx.check_eq(hot, Some(1), "hot item after a 0.03 lead");

        let hot = selector.update(&InfluenceField::from_values(1.0, [0.0, 0.50, 0.56]), &config);
        ctx.check_eq(hot, Some(2), "hot item after a 0.06 lead");
    });

    suite.add("pointer_between_neighbours_keeps_hot", |ctx| {
        let line = ctx.center_line();
        ctx.pointer_enter(120.0, line);
        ctx.tick();
        ctx.check_eq(ctx.dock().hot_item(), Some(1), "hot item over 120");

        // Just past the midpoint item 2 leads by less than the margin
        ctx.pointer_move(161.0, line, None);
        ctx.ticks(60);
        ctx.check_eq(ctx.dock().hot_item(), Some(1), "hot item near the midpoint");

        ctx.pointer_move(200.0, line, None);
        ctx.ticks(60);
        ctx.check_eq(ctx.dock().hot_item(), Some(2), "hot item over 200");
        ctx.check_eq(ctx.host.hot_items(), vec![2], "rendered hot items");
    });

    suite.add("reset_is_idempotent", |ctx| {
        let line = ctx.center_line();
        ctx.pointer_enter(280.0, line);
        ctx.ticks(3);

        ctx.app.dock_mut().stop(&mut ctx.host);
        let once: Vec<_> = ctx.host.items().cloned().collect();
        ctx.app.dock_mut().stop(&mut ctx.host);
        let twice: Vec<_> = ctx.host.items().cloned().collect();

        ctx.check(once.iter().all(|item| item.is_rest()), "items at rest after one reset");
        ctx.check_eq(once, twice, "state after a second reset");
        ctx.check_eq(ctx.dock().hot_item(), None, "hot item after reset");
    });

    suite
}
