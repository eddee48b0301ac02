use crossterm::event::Event;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};
use tui_textarea::TextArea;

/// Who produced a chat entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One rendered line in the chat log. Immutable after creation, never
/// deleted; lives only as long as the log it sits in.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatEntry {
    pub role: Role,
    pub text: String,
}

impl ChatEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }

    /// The line as shown in the log. The text is inserted verbatim,
    /// untrimmed; terminal cells render it literally, so there is no
    /// markup to escape.
    pub fn display_line(&self) -> String {
        match self.role {
            Role::User => format!("You: {}", self.text),
            Role::Assistant => format!("AI: {}", self.text),
        }
    }
}

/// Append-only scrollable output log with a scrollbar.
pub struct ChatLog {
    pub entries: Vec<ChatEntry>,
    pub scroll_position: usize,
    pub max_scroll: usize,
}

impl ChatLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            scroll_position: 0,
            max_scroll: 0,
        }
    }

    /// Push an entry and snap the view to the newest content.
    pub fn append(&mut self, entry: ChatEntry) {
        self.entries.push(entry);
        self.update_max_scroll();
        self.scroll_to_bottom();
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_position = self.scroll_position.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_position = (self.scroll_position + lines).min(self.max_scroll);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_position = self.max_scroll;
    }

    fn update_max_scroll(&mut self) {
        // One scroll step per entry; wrapped lines are handled by the
        // Paragraph widget itself.
        self.max_scroll = self.entries.len().saturating_sub(1);
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        // Leave the rightmost column for the scrollbar.
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let lines: Vec<Line> = self
            .entries
            .iter()
            .map(|entry| {
                let style = match entry.role {
                    Role::User => Style::default().fg(Color::Cyan),
                    Role::Assistant => Style::default().fg(Color::Green),
                };
                Line::from(Span::styled(entry.display_line(), style))
            })
            .collect();

        let paragraph = Paragraph::new(Text::from(lines))
            .block(Block::default().borders(Borders::ALL).title("Chat"))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_position as u16, 0));

        f.render_widget(paragraph, chunks[0]);

        if self.max_scroll > 0 {
            let mut scrollbar_state =
                ScrollbarState::new(self.max_scroll).position(self.scroll_position);
            let scrollbar = Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));
            f.render_stateful_widget(scrollbar, chunks[1], &mut scrollbar_state);
        }
    }
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

/// The text input control, wrapping a textarea.
pub struct InputField {
    textarea: TextArea<'static>,
}

impl InputField {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_block(Block::default().borders(Borders::ALL).title("Input"));
        Self { textarea }
    }

    /// Current text, untrimmed, exactly as typed.
    pub fn value(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Reset to an empty field.
    pub fn clear(&mut self) {
        let mut textarea = TextArea::default();
        textarea.set_block(Block::default().borders(Borders::ALL).title("Input"));
        self.textarea = textarea;
    }

    /// Forward a terminal event (keystroke) into the textarea.
    pub fn input(&mut self, event: Event) {
        self.textarea.input(event);
    }

    /// Insert text directly, for paste events.
    pub fn insert_str(&mut self, text: &str) {
        self.textarea.insert_str(text);
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        f.render_widget(&self.textarea, area);
    }
}

impl Default for InputField {
    fn default() -> Self {
        Self::new()
    }
}

/// The clickable send control. Remembers where it was last drawn so mouse
/// clicks can be hit-tested against it.
pub struct SendButton {
    area: Option<Rect>,
}

impl SendButton {
    pub fn new() -> Self {
        Self { area: None }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        self.area = Some(area);
        let button = Paragraph::new("Send")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(button, area);
    }

    /// Whether a click at the given cell lands on the button. False until
    /// the button has been drawn at least once.
    pub fn hit(&self, column: u16, row: u16) -> bool {
        self.area
            .is_some_and(|rect| rect.contains(Position { x: column, y: row }))
    }
}

impl Default for SendButton {
    fn default() -> Self {
        Self::new()
    }
}
