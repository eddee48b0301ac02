use tokio::sync::mpsc;
use tracing::debug;

use crate::controller::{Controller, Screen, WidgetEvent};

/// Top-level state for the running application.
pub struct App {
    pub controller: Option<Controller>,
    reply_rx: mpsc::Receiver<WidgetEvent>,
}

impl App {
    pub fn new() -> Self {
        Self::with_screen(Screen::with_defaults())
    }

    /// Build the app around a specific set of resolved controls. The
    /// controller only attaches when all controls are present.
    pub fn with_screen(screen: Screen) -> Self {
        let (reply_tx, reply_rx) = mpsc::channel(100);
        let controller = Controller::attach(screen, reply_tx);
        if controller.is_none() {
            debug!("running without an attached chat controller");
        }
        Self {
            controller,
            reply_rx,
        }
    }

    /// Apply any reply events that have arrived since the last tick.
    /// Non-blocking; called once per UI loop iteration.
    pub fn drain_widget_events(&mut self) {
        while let Ok(event) = self.reply_rx.try_recv() {
            if let Some(controller) = &mut self.controller {
                controller.apply(event);
            }
        }
    }

    /// Trigger the send action. Without an attached controller this does
    /// nothing and raises no error.
    pub fn activate_send(&mut self) {
        if let Some(controller) = &mut self.controller {
            controller.activate();
        }
    }

    pub fn feed_input(&mut self, event: crossterm::event::Event) {
        if let Some(controller) = &mut self.controller {
            controller.input.input(event);
        }
    }

    pub fn feed_paste(&mut self, data: &str) {
        if let Some(controller) = &mut self.controller {
            controller.input.insert_str(data);
        }
    }

    pub fn scroll_log_up(&mut self, lines: usize) {
        if let Some(controller) = &mut self.controller {
            controller.log.scroll_up(lines);
        }
    }

    pub fn scroll_log_down(&mut self, lines: usize) {
        if let Some(controller) = &mut self.controller {
            controller.log.scroll_down(lines);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
