use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use trisum::ai::GeminiClient;
use trisum::core::{AppConfig, Language};
use trisum::shell::{EMPTY_INPUT_NOTICE, Shell, ShellState};
use trisum::views;

#[derive(Parser)]
#[command(
    name = "trisum",
    about = "Generate three citation-scored summaries of any text"
)]
struct Cli {
    /// Read the text to summarize from this file instead of starting a session
    file: Option<PathBuf>,

    /// Output language for the generated summaries
    #[arg(long, value_enum)]
    language: Option<Language>,

    /// Gemini model identifier (falls back to GEMINI_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Gemini API key (falls back to GEMINI_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Print the records as JSON instead of rendered cards (one-shot only)
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    trisum::setup_logging();

    let mut config = AppConfig::from_env();
    if let Some(api_key) = cli.api_key {
        config.gemini_api_key = Some(api_key);
    }
    if let Some(model) = cli.model {
        config.gemini_model = Some(model);
    }

    let client = GeminiClient::from_config(&config)?;
    let mut shell = Shell::new(client, cli.language.unwrap_or_default());

    let stdin = io::stdin();
    let one_shot_text = match &cli.file {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
        ),
        None if !stdin.is_terminal() => {
            let mut text = String::new();
            stdin
                .lock()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Some(text)
        }
        None => None,
    };

    match one_shot_text {
        Some(text) => run_once(&mut shell, &text, cli.json).await,
        None => run_session(&mut shell).await,
    }
}

/// Summarizes a single text and exits. Rendered cards (or JSON) go to
/// stdout; progress and errors go to stderr.
async fn run_once(shell: &mut Shell<GeminiClient>, text: &str, json: bool) -> Result<()> {
    let Some(pending) = shell.submit(text) else {
        anyhow::bail!("{}", shell.notice().unwrap_or(EMPTY_INPUT_NOTICE));
    };

    eprintln!("{}", views::render_loading());
    let outcome = shell.run(&pending).await;
    shell.settle(pending, outcome);

    match shell.state() {
        ShellState::Results(records) => {
            if json {
                println!("{}", serde_json::to_string_pretty(records)?);
            } else {
                println!("{}", views::render_results(records));
            }
            Ok(())
        }
        ShellState::Error(message) => {
            eprintln!("{}", views::render_error(message));
            std::process::exit(1);
        }
        ShellState::Idle | ShellState::Loading => Ok(()),
    }
}

/// Long-lived interactive session: read a text block, summarize, render,
/// repeat until `:quit` or end of input.
async fn run_session(shell: &mut Shell<GeminiClient>) -> Result<()> {
    println!("trisum - paste text, get three citation-scored summaries.");
    println!("Finish a text with an empty line. Commands: :language <english|serbian>, :quit");
    println!();
    println!("{}", views::render_state(shell.state()));

    let stdin = io::stdin();
    loop {
        println!();
        print!("> ");
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(block) = read_block(&mut stdin.lock())? else {
            break;
        };

        if let Some(command) = block.trim().strip_prefix(':') {
            if !apply_command(shell, command) {
                break;
            }
            continue;
        }

        let Some(pending) = shell.submit(&block) else {
            if let Some(notice) = shell.notice() {
                println!("{notice}");
            }
            continue;
        };

        println!("{}", views::render_state(shell.state()));
        let outcome = shell.run(&pending).await;
        shell.settle(pending, outcome);

        println!();
        println!("{}", views::render_state(shell.state()));
    }

    shell.shutdown();
    Ok(())
}

/// Reads one submission: lines up to the first empty line. A leading
/// `:command` line is returned on its own. Returns `None` at end of input.
fn read_block(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut block = String::new();
    let mut saw_line = false;

    loop {
        let mut line = String::new();
        let bytes = input.read_line(&mut line).context("failed to read input")?;
        if bytes == 0 {
            return Ok(if saw_line { Some(block) } else { None });
        }

        if !saw_line && line.trim_start().starts_with(':') {
            return Ok(Some(line));
        }
        saw_line = true;

        if line.trim().is_empty() {
            return Ok(Some(block));
        }
        block.push_str(&line);
    }
}

/// Applies a `:command`. Returns false when the session should end.
fn apply_command(shell: &mut Shell<GeminiClient>, command: &str) -> bool {
    let mut parts = command.split_whitespace();
    match parts.next() {
        Some("quit" | "q") => false,
        Some("language") => {
            match parts.next().map(|value| Language::from_str(value, true)) {
                Some(Ok(language)) => {
                    shell.set_language(language);
                    println!("Language set to {language}.");
                }
                Some(Err(_)) | None => println!("Usage: :language <english|serbian>"),
            }
            true
        }
        _ => {
            println!("Unknown command. Available: :language <english|serbian>, :quit");
            true
        }
    }
}
