use clap::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "ytscan",
    about = "Search the web for YouTube videos and print their transcripts",
    version = env!("GIT_DESCRIBE"),
)]
pub struct Cli {
    /// Search query (prompts interactively if omitted)
    pub query: Option<String>,

    /// Preferred caption language
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Number of search results to request
    #[arg(short = 'n', long)]
    pub results: Option<usize>,

    /// Output format: text (default), json
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Show config and lookup metadata on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
