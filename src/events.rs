use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use crate::app::App;

/// Handle a key event. Returns true when the app should quit.
pub fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => true,
        (_, KeyCode::Esc) => true,

        // Enter activates send, same as clicking the button.
        (_, KeyCode::Enter) => {
            app.activate_send();
            false
        }

        // Log scrolling.
        (_, KeyCode::PageUp) => {
            app.scroll_log_up(5);
            false
        }
        (_, KeyCode::PageDown) => {
            app.scroll_log_down(5);
            false
        }

        // Everything else goes to the input field.
        _ => {
            app.feed_input(Event::Key(KeyEvent::new(code, modifiers)));
            false
        }
    }
}

/// Handle a mouse event: wheel scrolls the log, left click on the send
/// button activates send.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.scroll_log_up(3),
        MouseEventKind::ScrollDown => app.scroll_log_down(3),
        MouseEventKind::Down(MouseButton::Left) => {
            let clicked = app
                .controller
                .as_ref()
                .is_some_and(|c| c.send.hit(mouse.column, mouse.row));
            if clicked {
                debug!(column = mouse.column, row = mouse.row, "send button clicked");
                app.activate_send();
            }
        }
        _ => {}
    }
}
