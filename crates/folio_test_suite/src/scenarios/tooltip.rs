//! Tooltip scenarios

use crate::runner::TestSuite;

pub fn suite() -> TestSuite {
    let mut suite = TestSuite::new("tooltip");

    suite.add("follows_hovered_item", |ctx| {
        let line = ctx.center_line();
        ctx.pointer_enter(200.0, line);
        ctx.pointer_move(200.0, line, Some(2));

        let tooltip = ctx.host.tooltip().clone();
        ctx.check(tooltip.visible, "visible over an item");
        ctx.check_eq(tooltip.text.as_str(), "Item 2", "label");
        ctx.check_eq(tooltip.left.as_str(), "200.0px", "offset from the dock's left edge");

        ctx.pointer_move(280.0, line, Some(3));
        ctx.check_eq(ctx.host.tooltip().left.clone(), "280.0px".to_string(), "moved offset");
    });

    suite.add("unlabelled_item_hides", |ctx| {
        let line = ctx.center_line();
        ctx.host.clear_label(1);
        ctx.host.set_label(2, "   ");

        ctx.pointer_move(200.0, line, Some(0));
        ctx.check(ctx.host.tooltip().visible, "visible over a labelled item");
        ctx.pointer_move(120.0, line, Some(1));
        ctx.check(!ctx.host.tooltip().visible, "hidden without a label");
        ctx.pointer_move(200.0, line, Some(2));
        ctx.check(!ctx.host.tooltip().visible, "hidden with a blank label");
    });

    suite.add("focus_places_tooltip", |ctx| {
        ctx.host.set_label(1, "Perfil");
        ctx.focus_in(1);
        let tooltip = ctx.host.tooltip().clone();
        ctx.check(tooltip.visible, "visible on focus");
        ctx.check_eq(tooltip.text.as_str(), "Perfil", "label");
        ctx.check_eq(tooltip.left.as_str(), "120.0px", "offset");

        ctx.focus_out();
        ctx.check(!ctx.host.tooltip().visible, "hidden when focus leaves");
    });

    suite.add("leave_hides", |ctx| {
        let line = ctx.center_line();
        ctx.pointer_move(40.0, line, Some(0));
        ctx.pointer_leave();
        ctx.check(!ctx.host.tooltip().visible, "hidden after leave");
        ctx.check(!ctx.dock().tooltip_visible(), "engine agrees");
    });

    suite
}
