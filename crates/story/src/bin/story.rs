use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use story::{AppConfig, StoryPipeline, StoryResponse};
use summarize::{Language, LanguageResources};

/// Film and TV story summarizer.
#[derive(Parser, Debug)]
#[command(name = "story")]
#[command(version)]
#[command(about = "Summarize the story of a film or TV series from Wikipedia")]
struct Cli {
    /// Path to a JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Summarize one title and exit instead of prompting.
    #[arg(short, long)]
    title: Option<String>,

    /// Print responses as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load(cli.config.as_deref())?;
    let resources = Arc::new(LanguageResources::load(Language::English));
    let pipeline = StoryPipeline::from_config(&config, resources)?;

    if let Some(title) = cli.title {
        let response = pipeline.respond(&title).await;
        print_response(&response, cli.json)?;
        return Ok(match response {
            StoryResponse::Summary(_) => ExitCode::SUCCESS,
            StoryResponse::Error(_) => ExitCode::FAILURE,
        });
    }

    println!("Enter movie/drama title (or 'quit' to exit):");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let title = line.trim();
        if title.eq_ignore_ascii_case("quit") {
            break;
        }

        let response = pipeline.respond(title).await;
        print_response(&response, cli.json)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn print_response(response: &StoryResponse, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
    } else {
        println!("{}", render(response));
    }
    Ok(())
}

/// Plain-text form of a response for the terminal.
fn render(response: &StoryResponse) -> String {
    match response {
        StoryResponse::Summary(story) => format!(
            "\nTitle: {}\nGenre: {}, Year: {}\nSummary: {}\n",
            story.title, story.genre, story.year, story.summary
        ),
        StoryResponse::Error(err) if err.kind.is_warning() => format!("Warning: {}", err.error),
        StoryResponse::Error(err) => format!("Error: {}", err.error),
    }
}
