// Fixed values for the chat widget, plus env-overridable paths.

use std::env;

/// How long to wait before appending the placeholder assistant reply.
pub const REPLY_DELAY_MS: u64 = 1000;

/// There is no model behind the assistant; every send gets this canned line.
pub const PLACEHOLDER_REPLY: &str = "Response is not implemented yet.";

// Use lazy_static to initialize static variables safely.
lazy_static::lazy_static! {
    // Default log file path. Stdout belongs to the terminal UI, so logs go
    // to a file; override with STUBCHAT_LOG or --log-file.
    pub static ref LOG_FILE: String =
        env::var("STUBCHAT_LOG").unwrap_or_else(|_| "stubchat.log".to_string());
}
