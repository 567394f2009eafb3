//! One chat session: a view plus the transport it talks through.

use echochat_core::models::ChatRequest;
use echochat_core::view::ChatView;
use log::warn;

use crate::transport::ChatTransport;

/// What happened to a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input or a request already in flight; nothing was sent.
    Ignored,
    Replied,
    Failed,
}

pub struct ChatSession<T> {
    transport: T,
    view: ChatView,
}

impl<T: ChatTransport> ChatSession<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            view: ChatView::new(),
        }
    }

    pub fn view(&self) -> &ChatView {
        &self.view
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.view.set_input(text);
    }

    /// Accepts the current input. The view is busy until [`complete`] runs.
    ///
    /// [`complete`]: ChatSession::complete
    pub fn begin(&mut self) -> Option<ChatRequest> {
        self.view.submit()
    }

    /// Sends `request`, records the reply or failure, then finalizes the view.
    pub async fn complete(&mut self, request: ChatRequest) -> SubmitOutcome {
        let outcome = match self.transport.send(&request).await {
            Ok(response) => {
                self.view.receive_response(response);
                SubmitOutcome::Replied
            }
            Err(e) => {
                warn!("chat request failed: {e}");
                self.view.receive_failure(Some(&e.to_string()));
                SubmitOutcome::Failed
            }
        };
        self.view.finalize();
        outcome
    }

    /// [`begin`] followed by [`complete`].
    ///
    /// [`begin`]: ChatSession::begin
    /// [`complete`]: ChatSession::complete
    pub async fn submit(&mut self) -> SubmitOutcome {
        match self.begin() {
            Some(request) => self.complete(request).await,
            None => SubmitOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use echochat_core::echo;
    use echochat_core::models::{ChatResponse, Sender};

    use super::*;
    use crate::error::ClientError;

    /// Answers like the real endpoint, or fails with a fixed error.
    struct FakeTransport {
        calls: Arc<AtomicUsize>,
        fail_with: Option<String>,
    }

    impl FakeTransport {
        fn echoing() -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let transport = Self {
                calls: calls.clone(),
                fail_with: None,
            };
            (transport, calls)
        }

        fn failing(detail: &str) -> (Self, Arc<AtomicUsize>) {
            let (mut transport, calls) = Self::echoing();
            transport.fail_with = Some(detail.to_string());
            (transport, calls)
        }
    }

    #[async_trait]
    impl ChatTransport for FakeTransport {
        async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(detail) = &self.fail_with {
                return Err(ClientError::Decode(detail.clone()));
            }
            let body = serde_json::to_value(request)
                .map_err(|e| ClientError::Decode(e.to_string()))?;
            echo::handle(&body).map_err(|e| ClientError::Status {
                status: 400,
                detail: e.to_string(),
            })
        }
    }

    #[tokio::test]
    async fn hello_there_renders_two_bubbles() {
        let (transport, calls) = FakeTransport::echoing();
        let mut session = ChatSession::new(transport);

        session.set_input("Hello there!");
        assert_eq!(session.submit().await, SubmitOutcome::Replied);

        let messages = session.view().messages();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender(), Sender::User);
        assert_eq!(messages[0].text(), "Hello there!");
        assert_eq!(messages[1].sender(), Sender::Bot);
        assert_eq!(messages[1].text(), "You said: 'Hello there!'");
        assert!(session.view().controls_enabled());
    }

    #[tokio::test]
    async fn whitespace_input_sends_nothing() {
        let (transport, calls) = FakeTransport::echoing();
        let mut session = ChatSession::new(transport);

        session.set_input("   ");
        assert_eq!(session.submit().await, SubmitOutcome::Ignored);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(session.view().messages().is_empty());
    }

    #[tokio::test]
    async fn network_failure_renders_one_bot_message() {
        let (transport, calls) = FakeTransport::failing("socket hang up");
        let mut session = ChatSession::new(transport);

        session.set_input("hi");
        assert_eq!(session.submit().await, SubmitOutcome::Failed);

        let messages = session.view().messages();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].sender(), Sender::Bot);
        assert!(messages[1].text().contains("socket hang up"));
        assert!(session.view().controls_enabled());
        assert!(session.view().input_focused());
    }

    #[tokio::test]
    async fn begin_blocks_overlapping_submissions() {
        let (transport, calls) = FakeTransport::echoing();
        let mut session = ChatSession::new(transport);

        session.set_input("one");
        let request = session.begin().expect("accepted");
        assert!(session.view().is_busy());

        session.set_input("two");
        assert_eq!(session.submit().await, SubmitOutcome::Ignored);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(session.complete(request).await, SubmitOutcome::Replied);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(session.view().messages().len(), 2);
    }
}
