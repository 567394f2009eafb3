//! Send and interactive chat commands.

use echochat_client::{ChatSession, HttpTransport, SubmitOutcome};
use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render::Renderer;
use crate::{Error, Result};

/// Sends `text` once. Blank text is ignored; a failed exchange is printed
/// and then reported as an error so the exit status is non-zero.
pub async fn send_once(url: &str, text: String) -> Result<()> {
    let mut session = ChatSession::new(HttpTransport::new(url)?);
    let mut renderer = Renderer::default();

    session.set_input(text);
    let outcome = session.submit().await;
    renderer.render(session.view(), &mut std::io::stdout().lock())?;

    match outcome {
        SubmitOutcome::Failed => Err(Error::Custom("chat request failed".into())),
        SubmitOutcome::Replied | SubmitOutcome::Ignored => Ok(()),
    }
}

/// Reads stdin line by line, one submission per line, until EOF.
pub async fn interactive(url: &str) -> Result<()> {
    let transport = HttpTransport::new(url)?;
    info!("chatting with {}", transport.endpoint());

    let mut session = ChatSession::new(transport);
    let mut renderer = Renderer::default();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        session.set_input(line);
        let Some(request) = session.begin() else {
            continue;
        };

        renderer.render(session.view(), &mut std::io::stdout().lock())?;
        if session.view().is_busy() {
            eprintln!("bot is typing…");
        }

        session.complete(request).await;
        renderer.render(session.view(), &mut std::io::stdout().lock())?;
    }

    Ok(())
}
