//! Plain-text rendering of the chat view.

use std::io::Write;

use echochat_core::models::{ChatMessage, Sender};
use echochat_core::view::ChatView;

pub fn bubble(message: &ChatMessage) -> String {
    let prefix = match message.sender() {
        Sender::User => "you",
        Sender::Bot => "bot",
    };
    format!("{prefix}> {}", message.text())
}

/// Prints messages appended since the previous call.
#[derive(Debug, Default)]
pub struct Renderer {
    shown: usize,
}

impl Renderer {
    pub fn render(&mut self, view: &ChatView, out: &mut impl Write) -> std::io::Result<()> {
        for message in view.messages().iter().skip(self.shown) {
            writeln!(out, "{}", bubble(message))?;
        }
        self.shown = view.messages().len();
        out.flush()
    }
}
