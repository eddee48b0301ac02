use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders},
    Frame,
};

use crate::app::App;

/// Draw the whole screen: the chat log on top, the input row (textarea plus
/// send button) pinned to the bottom.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Chat log
            Constraint::Length(3), // Input row
        ])
        .split(f.area());

    let input_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(10)])
        .split(chunks[1]);

    match &mut app.controller {
        Some(controller) => {
            controller.log.render(f, chunks[0]);
            controller.input.render(f, input_row[0]);
            controller.send.render(f, input_row[1]);
        }
        None => {
            // No attached controller: draw the empty frames only. The UI
            // stays visibly inert rather than reporting an error.
            f.render_widget(
                Block::default().borders(Borders::ALL).title("Chat"),
                chunks[0],
            );
            f.render_widget(
                Block::default().borders(Borders::ALL).title("Input"),
                chunks[1],
            );
        }
    }
}
