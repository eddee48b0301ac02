use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tokio::time::{sleep, Duration};
use tracing::debug;

use crate::constants::{PLACEHOLDER_REPLY, REPLY_DELAY_MS};
use crate::widgets::{ChatEntry, ChatLog, InputField, SendButton};

/// Events delivered back to the UI loop from deferred work.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    /// A reply timer elapsed; append this text as the assistant.
    AssistantReply(String),
}

/// The three addressable controls the chat widget needs, each possibly
/// absent. Resolution happens once at startup; there is no re-check or
/// late binding.
#[derive(Default)]
pub struct Screen {
    pub input: Option<InputField>,
    pub send: Option<SendButton>,
    pub output: Option<ChatLog>,
}

impl Screen {
    /// Resolve all three controls.
    pub fn with_defaults() -> Self {
        Self {
            input: Some(InputField::new()),
            send: Some(SendButton::new()),
            output: Some(ChatLog::new()),
        }
    }
}

/// Translates a send activation into appends on the chat log: the user's
/// line immediately, then a placeholder assistant line after a fixed delay.
pub struct Controller {
    pub input: InputField,
    pub send: SendButton,
    pub log: ChatLog,
    reply_tx: mpsc::Sender<WidgetEvent>,
    // Outstanding reply timers. Tracked so a future clear-conversation
    // feature could cancel them; nothing cancels them today.
    pending_replies: Vec<AbortHandle>,
}

impl Controller {
    /// Wire the widget up, or decline if any control is missing. A missing
    /// control means the send action never attaches; the UI stays inert and
    /// nothing is reported to the user.
    pub fn attach(screen: Screen, reply_tx: mpsc::Sender<WidgetEvent>) -> Option<Self> {
        match (screen.input, screen.send, screen.output) {
            (Some(input), Some(send), Some(output)) => Some(Self {
                input,
                send,
                log: output,
                reply_tx,
                pending_replies: Vec::new(),
            }),
            _ => {
                debug!("chat controls missing, send handler not attached");
                None
            }
        }
    }

    /// The send action. Whitespace-only input is a no-op that leaves the
    /// field untouched; otherwise the untrimmed text is appended to the
    /// log, the field is cleared immediately, and the assistant reply is
    /// put on a timer. Fire-and-forget: returns without awaiting anything.
    pub fn activate(&mut self) {
        let message = self.input.value();
        if message.trim().is_empty() {
            return;
        }

        debug!(len = message.len(), "send activated");
        // Appends auto-scroll the log to its newest entry.
        self.log.append(ChatEntry::user(message));
        self.input.clear();
        self.schedule_reply();
    }

    fn schedule_reply(&mut self) {
        let tx = self.reply_tx.clone();
        let handle = tokio::spawn(async move {
            sleep(Duration::from_millis(REPLY_DELAY_MS)).await;
            // A closed receiver means the app is shutting down.
            let _ = tx
                .send(WidgetEvent::AssistantReply(PLACEHOLDER_REPLY.to_string()))
                .await;
        });
        self.pending_replies.push(handle.abort_handle());
    }

    /// Apply an event drained from the reply channel.
    pub fn apply(&mut self, event: WidgetEvent) {
        match event {
            WidgetEvent::AssistantReply(text) => {
                self.log.append(ChatEntry::assistant(text));
            }
        }
    }

    /// Reply timers scheduled so far, fired or not.
    pub fn scheduled_reply_count(&self) -> usize {
        self.pending_replies.len()
    }
}
