use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use eyre::Result;
use log::{debug, info};

mod cli;

use cli::{Cli, OutputFormat};

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytscan.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytscan")
        .join("logs")
}

fn build_after_help() -> String {
    format!(
        "\nConfig file: {}\nLogs are written to: {}",
        ytscan::config::config_path().display(),
        log_dir().join("ytscan.log").display()
    )
}

/// Read one query line, treating Ctrl-C or stdin EOF as an abort
async fn prompt_query() -> Result<Option<String>> {
    print!("Enter search query: ");
    io::stdout().flush()?;

    let read_line = tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        let bytes = io::stdin().lock().read_line(&mut line)?;
        Ok::<_, io::Error>((bytes, line))
    });

    tokio::select! {
        _ = tokio::signal::ctrl_c() => Ok(None),
        result = read_line => {
            let (bytes, line) = result??;
            if bytes == 0 {
                return Ok(None);
            }
            Ok(Some(line.trim().to_string()))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let after_help = build_after_help();
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    // Load config file (non-fatal if missing/invalid)
    let config = ytscan::config::Config::load().unwrap_or_default();

    // Apply config defaults (CLI flags take priority)
    let lang = cli
        .lang
        .clone()
        .or_else(|| config.default_lang.clone())
        .unwrap_or_else(|| "en".to_string());
    let limit = cli.results.or(config.default_results).unwrap_or(10);
    let format = cli.format.unwrap_or(match config.default_format.as_deref() {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    });

    if cli.verbose {
        let config_path = ytscan::config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
        eprintln!("Language: {lang}");
        eprintln!("Results: {limit}");
    }

    let query = match cli.query.clone() {
        Some(q) => q,
        None => match prompt_query().await? {
            Some(q) => q,
            None => {
                println!("\nUser aborted.");
                return Ok(());
            }
        },
    };
    debug!("Query: {query:?}");

    let client = reqwest::Client::new();

    let urls = ytscan::search::search_videos(&client, &query, limit).await;
    if urls.is_empty() {
        println!("No video URLs found.");
        return Ok(());
    }
    info!("Search returned {} video URLs", urls.len());

    let mut blocks = Vec::new();
    for url in &urls {
        if format == OutputFormat::Text {
            println!("\nProcessing video: {url}");
        }

        let transcript = ytscan::transcript::fetch_display(&client, url, &lang).await;

        match format {
            OutputFormat::Text => println!("{}", ytscan::output::render_block(url, &transcript)),
            OutputFormat::Json => blocks.push(ytscan::output::VideoBlock {
                url: url.clone(),
                transcript,
            }),
        }
    }

    if format == OutputFormat::Json {
        println!("{}", ytscan::output::render_json(&blocks)?);
    }

    Ok(())
}
