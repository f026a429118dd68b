use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the listeners and block until a signal or a fatal error (default).
    Serve,
    /// Print the default configuration as TOML.
    GenerateConfig,
    /// Write a development key and certificate to `server.ssl.self_signed_dir`.
    SelfSigned,
}
