use clap::{Parser, Subcommand};

pub const DEFAULT_URL: &str = "http://127.0.0.1:3000";

#[derive(Parser, Debug)]
#[command(name = "echochat", version, about = "Terminal client for the Echochat server")]
pub struct Cli {
    /// Base URL of the Echochat server.
    #[arg(long, global = true, env = "ECHOCHAT_URL", default_value = DEFAULT_URL)]
    pub url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the CLI version.
    Version,

    /// Send one message and print the exchange.
    Send {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Chat interactively, one message per line of stdin.
    Chat,
}
