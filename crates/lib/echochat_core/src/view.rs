//! Chat view state.
//!
//! Front ends keep one [`ChatView`] per session and feed it events:
//! `submit` when the user sends, then exactly one of `receive_response` or
//! `receive_failure`, then `finalize`. Rendering only reads the state.

use log::debug;

use crate::echo::is_submittable;
use crate::models::{ChatMessage, ChatRequest, ChatResponse};

/// Bot text used when a failure carries no description.
pub const FAILURE_FALLBACK: &str = "Sorry, something went wrong. Please try again.";

/// Builds the bot text for a failed exchange.
pub fn failure_text(detail: Option<&str>) -> String {
    match detail.map(str::trim) {
        Some(detail) if !detail.is_empty() => format!("Sorry, something went wrong: {detail}"),
        _ => FAILURE_FALLBACK.to_string(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChatView {
    input: String,
    messages: Vec<ChatMessage>,
    busy: bool,
    input_focused: bool,
}

impl ChatView {
    pub fn new() -> Self {
        Self {
            input_focused: true,
            ..Self::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the draft text. Ignored while a request is in flight.
    pub fn set_input(&mut self, text: impl Into<String>) {
        if self.busy {
            return;
        }
        self.input = text.into();
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while a request is in flight; the busy indicator is shown and
    /// input controls are disabled.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn controls_enabled(&self) -> bool {
        !self.busy
    }

    pub fn input_focused(&self) -> bool {
        self.input_focused
    }

    /// Accepts the current draft.
    ///
    /// Returns the request to send, or `None` when the draft is blank or a
    /// request is already in flight. On acceptance the user message is
    /// appended, the draft cleared and the view marked busy.
    pub fn submit(&mut self) -> Option<ChatRequest> {
        if self.busy {
            debug!("submit ignored: request already in flight");
            return None;
        }
        if !is_submittable(&self.input) {
            debug!("submit ignored: empty input");
            return None;
        }

        let text = std::mem::take(&mut self.input);
        self.messages.push(ChatMessage::user(text.clone()));
        self.busy = true;
        self.input_focused = false;
        Some(ChatRequest::new(text))
    }

    pub fn receive_response(&mut self, response: ChatResponse) {
        self.messages.push(ChatMessage::bot(response.bot_response));
    }

    pub fn receive_failure(&mut self, detail: Option<&str>) {
        self.messages.push(ChatMessage::bot(failure_text(detail)));
    }

    /// Ends the exchange: clears busy and returns focus to the input.
    pub fn finalize(&mut self) {
        self.busy = false;
        self.input_focused = true;
    }
}
