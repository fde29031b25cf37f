use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "wikidoc")]
#[command(about = "Generate a markdown wiki page for a source file with a Groq-hosted LLM")]
#[command(version)]
pub struct Args {
    /// File to document (prompted for if not provided)
    pub file: Option<String>,

    /// Model name (defaults to $GROQ_MODEL, then llama-3.1-8b-instant)
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Print the documentation without saving it under docs/
    #[arg(long)]
    pub no_save: bool,

    /// Suppress status messages
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List recognized file extensions and their type labels
    Types,
}
