//! Outbound notification capability.
//!
//! The core never performs telephony or shows dialogs itself; hosts inject a
//! `Notifier` that decides how a message reaches the user.

use log::info;
use std::cell::RefCell;

/// Sink for user-facing messages raised by the core.
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

/// Builds the message shown when a phone number is tapped.
pub fn dialing_message(phone: &str) -> String {
    format!("Dialing {phone}...")
}

/// Notifier that records a metadata-only log event.
///
/// Message text is not logged since it can carry a phone number.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        info!(
            "event=notify module=notify status=ok message_chars={}",
            message.chars().count()
        );
    }
}

/// Notifier that keeps every message for later display.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns recorded messages in arrival order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// Drains recorded messages.
    pub fn take_messages(&self) -> Vec<String> {
        self.messages.take()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
