//! # echochat_client
//!
//! Talks to `POST /api/chat` and drives a [`ChatView`] through one exchange
//! per submission.
//!
//! [`ChatView`]: echochat_core::view::ChatView

pub mod error;
pub mod session;
pub mod transport;

pub use error::ClientError;
pub use session::{ChatSession, SubmitOutcome};
pub use transport::{ChatTransport, HttpTransport};
