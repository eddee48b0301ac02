use crossterm::event::{KeyCode, KeyModifiers};

use stubchat::app::App;
use stubchat::controller::Screen;
use stubchat::events::handle_key_event;
use stubchat::widgets::{InputField, SendButton};

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        let quit = handle_key_event(app, KeyCode::Char(ch), KeyModifiers::NONE);
        assert!(!quit);
    }
}

fn log_lines(app: &App) -> Vec<String> {
    app.controller
        .as_ref()
        .map(|c| c.log.entries.iter().map(|e| e.display_line()).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn typed_characters_reach_the_input_field() {
    let mut app = App::new();
    type_text(&mut app, "hi there");

    let value = app.controller.as_ref().unwrap().input.value();
    assert_eq!(value, "hi there");
    assert!(log_lines(&app).is_empty());
}

#[tokio::test]
async fn enter_sends_the_message() {
    let mut app = App::new();
    type_text(&mut app, "hello");

    let quit = handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    assert!(!quit);

    assert_eq!(log_lines(&app), vec!["You: hello".to_string()]);
    assert_eq!(app.controller.as_ref().unwrap().input.value(), "");
}

#[tokio::test]
async fn enter_on_blank_input_does_nothing() {
    let mut app = App::new();
    type_text(&mut app, "   ");

    handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);

    assert!(log_lines(&app).is_empty());
    assert_eq!(app.controller.as_ref().unwrap().input.value(), "   ");
}

#[tokio::test]
async fn quit_keys_request_exit() {
    let mut app = App::new();
    assert!(handle_key_event(&mut app, KeyCode::Esc, KeyModifiers::NONE));
    assert!(handle_key_event(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL));
}

#[tokio::test]
async fn page_keys_scroll_without_changing_entries() {
    let mut app = App::new();
    type_text(&mut app, "msg");
    handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);

    handle_key_event(&mut app, KeyCode::PageUp, KeyModifiers::NONE);
    handle_key_event(&mut app, KeyCode::PageDown, KeyModifiers::NONE);

    assert_eq!(log_lines(&app).len(), 1);
}

#[tokio::test]
async fn paste_lands_in_the_input_field() {
    let mut app = App::new();
    app.feed_paste("pasted text");

    assert_eq!(app.controller.as_ref().unwrap().input.value(), "pasted text");
}

#[tokio::test]
async fn activation_without_controls_is_harmless() {
    // Output log missing: the controller never attaches, and simulated
    // activations fall through without effect or panic.
    let screen = Screen {
        input: Some(InputField::new()),
        send: Some(SendButton::new()),
        output: None,
    };
    let mut app = App::with_screen(screen);
    assert!(app.controller.is_none());

    type_text(&mut app, "hello");
    handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    app.drain_widget_events();

    assert!(log_lines(&app).is_empty());
}
