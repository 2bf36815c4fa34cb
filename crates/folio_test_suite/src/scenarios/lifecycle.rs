//! Frame loop lifecycle scenarios

use crate::harness::Setup;
use crate::runner::TestSuite;
use folio_platform::prelude::*;

pub fn suite() -> TestSuite {
    let mut suite = TestSuite::new("lifecycle");

    suite.add("leave_resets_and_stops", |ctx| {
        let line = ctx.center_line();
        ctx.pointer_enter(200.0, line);
        ctx.ticks(4);
        ctx.check(ctx.dock().is_active(), "active while hovered");

        ctx.pointer_leave();
        ctx.check(!ctx.dock().is_active(), "idle after leave");
        ctx.check_eq(ctx.host.pending_frames(), 0, "pending frames after leave");
        let at_rest = ctx.host.items().all(|item| item.is_rest());
        ctx.check(at_rest, "items at rest after leave");
        ctx.check(ctx.host.hot_items().is_empty(), "no hot item after leave");
        let ran = ctx.ticks(5);
        ctx.check_eq(ran, 0, "frames run after leave");
    });

    suite.add("one_frame_pending_while_active", |ctx| {
        let line = ctx.center_line();
        ctx.pointer_enter(40.0, line);
        for step in 0..10 {
            ctx.pointer_move(40.0 + step as f32 * 30.0, line, None);
            ctx.check_eq(ctx.host.pending_frames(), 1, "pending frames");
            ctx.tick();
        }
    });

    suite.add("stale_frame_ignored", |ctx| {
        let line = ctx.center_line();
        ctx.pointer_enter(200.0, line);
        let due = ctx.host.take_due_frames();
        let Some(&handle) = due.first() else {
            ctx.check(false, "no frame requested on enter");
            return;
        };
        let first = ctx.send(Event::Frame(handle));
        let second = ctx.send(Event::Frame(handle));
        ctx.check(first, "first delivery runs");
        ctx.check(!second, "second delivery ignored");

        ctx.pointer_leave();
        let late = ctx.send(Event::Frame(handle));
        ctx.check(!late, "delivery after leave ignored");
        let at_rest = ctx.host.items().all(|item| item.is_rest());
        ctx.check(at_rest, "items stay at rest");
    });

    suite.add("touch_and_pen_ignored", |ctx| {
        let line = ctx.center_line();
        for kind in [PointerKind::Touch, PointerKind::Pen, PointerKind::Other] {
            ctx.pointer_enter_with(200.0, line, kind);
        }
        ctx.check(!ctx.dock().is_active(), "wave inactive for non-hover pointers");
        ctx.check_eq(ctx.host.pending_frames(), 0, "pending frames");
    });

    suite.add("focus_activates_and_releases", |ctx| {
        ctx.focus_in(3);
        ctx.tick();
        ctx.check(ctx.dock().is_active(), "active on focus");
        ctx.check_eq(ctx.dock().hot_item(), Some(3), "focused item is hot");

        ctx.host.set_focus_within(true);
        ctx.focus_out();
        ctx.check(ctx.dock().is_active(), "still active while focus stays in the dock");

        ctx.host.set_focus_within(false);
        ctx.focus_out();
        ctx.check(!ctx.dock().is_active(), "idle once focus leaves the dock");
        let at_rest = ctx.host.items().all(|item| item.is_rest());
        ctx.check(at_rest, "items at rest");
    });

    suite.add_with("reduced_motion_never_activates", Setup::reduced_motion(), |ctx| {
        let items = ctx.host.items().count();
        ctx.check_eq(ctx.host.style_writes(), items, "one reset at start");
        ctx.check(!ctx.host.tooltip().visible, "tooltip hidden");

        let line = ctx.center_line();
        ctx.pointer_enter(200.0, line);
        ctx.pointer_move(120.0, line, Some(1));
        ctx.focus_in(2);
        ctx.ticks(3);

        ctx.check(!ctx.dock().is_enabled(), "engine disabled");
        ctx.check(!ctx.dock().is_active(), "wave inactive");
        ctx.check_eq(ctx.host.pending_frames(), 0, "pending frames");
        ctx.check_eq(ctx.host.style_writes(), items, "no writes after start");
    });

    suite.add_with("missing_dock_is_noop", Setup::without_dock(), |ctx| {
        let pointer = ctx.pointer_enter(200.0, 752.0);
        let focus = ctx.focus_in(0);
        ctx.check(!pointer, "pointer not consumed");
        ctx.check(!focus, "focus not consumed");
        ctx.check_eq(ctx.host.pending_frames(), 0, "pending frames");
        let click = ctx.click_id("dock-theme");
        ctx.check(click, "page still handles clicks");
    });

    suite.add("scroll_refreshes_geometry", |ctx| {
        ctx.host.move_layout(0.0, -200.0);
        ctx.send(Event::Viewport(ViewportEvent::Scrolled { scroll_y: 200.0 }));

        let line = ctx.center_line();
        ctx.pointer_enter(360.0, line);
        ctx.tick();
        ctx.check_eq(ctx.dock().hot_item(), Some(4), "hot item after scroll");
        ctx.check_eq(ctx.host.item(4).lift.clone(), "20.00px".to_string(), "full lift");
    });

    suite
}
