//! Input handling — maps key/mouse/timer events to selector calls.
//!
//! The list is the selector's host, so every change to its scroll position
//! made here is reported back through `on_list_scrolled`, and every change
//! to its rows is preceded by `on_list_reloaded`.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::core::{GesturePhase, Point, TickId};

use super::state::AppState;

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    let page = state.list_area.height.max(1) as isize;
    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Char('r') => reload_list(state),
        KeyCode::Char('c') => {
            state.selector.host_mut().clear_selection();
            state.status_message = Some("Selection cleared".into());
        }
        KeyCode::Esc => state.selector.on_touch_cancelled(),
        KeyCode::Up | KeyCode::Char('k') => scroll_list(state, -1),
        KeyCode::Down | KeyCode::Char('j') => scroll_list(state, 1),
        KeyCode::PageUp => scroll_list(state, -page),
        KeyCode::PageDown => scroll_list(state, page),
        KeyCode::Home => scroll_list(state, isize::MIN / 2),
        KeyCode::End => scroll_list(state, isize::MAX / 2),
        _ => {}
    }
}

/// Process a mouse event.  Left button down/drag/up is the touch stream.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let point = list_point(state.list_area, mouse.column, mouse.row);
    let wheel = state.config.wheel_lines as isize;
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if !point_in_rect(state.list_area, mouse.column, mouse.row) {
                return;
            }
            let geometry = state.list().geometry();
            state.selector.on_touch_began(point, &geometry);
            state.status_message = None;
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let geometry = state.list().geometry();
            state.selector.on_touch_moved(point, &geometry);
        }
        MouseEventKind::Up(MouseButton::Left) => state.selector.on_touch_ended(),
        MouseEventKind::ScrollUp => scroll_list(state, -wheel),
        MouseEventKind::ScrollDown => scroll_list(state, wheel),
        _ => {}
    }
}

/// Forward an auto-scroll tick; the resulting request is applied by
/// [`flush_scroll_requests`].
pub fn handle_auto_scroll_tick(state: &mut AppState, tick: TickId) {
    state.selector.on_auto_scroll_tick(tick);
}

/// Apply scroll requested by the selector and report it back.
pub fn flush_scroll_requests(state: &mut AppState) {
    if let Some(delta) = state.selector.host_mut().take_pending_scroll() {
        scroll_list(state, delta);
    }
}

/// Record the list's row area after a draw or resize.
pub fn sync_viewport(state: &mut AppState, area: Rect) {
    let resized = state.list_area.height != area.height;
    state.list_area = area;
    if resized && state.selector.host_mut().set_viewport_height(area.height as usize) {
        let geometry = state.list().geometry();
        state.selector.on_list_scrolled(&geometry);
    }
}

fn scroll_list(state: &mut AppState, delta: isize) {
    if state.selector.host_mut().scroll_by(delta) {
        let geometry = state.list().geometry();
        state.selector.on_list_scrolled(&geometry);
    }
}

fn reload_list(state: &mut AppState) {
    let was_tracking = state.selector.phase() == GesturePhase::Tracking;
    state.selector.on_list_reloaded();
    state.selector.host_mut().reload();
    state.status_message = Some(if was_tracking {
        "List reloaded (stroke cancelled)".into()
    } else {
        "List reloaded".into()
    });
}

/// Cell centre relative to the list's row area.  May lie outside it while
/// dragging past an edge.
fn list_point(area: Rect, column: u16, row: u16) -> Point {
    Point::new(
        f64::from(column) - f64::from(area.x) + 0.5,
        f64::from(row) - f64::from(area.y) + 0.5,
    )
}

fn point_in_rect(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
