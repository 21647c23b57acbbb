//! revue — AI-assisted commit review CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use revue::config;
use revue::diff;
use revue::env;
use revue::orchestrator;
use revue::providers;

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Command, ContextArgs, ReviewArgs};
use config::Config;
use env::Env;
use orchestrator::ReviewOrchestrator;
use providers::CompletionProvider;
use providers::openai::OpenAiProvider;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Review(args) => run_review(args).await,
        Command::Context(args) => run_context(args).await,
    }
}

/// Review a commit and print the final review to stdout.
async fn run_review(args: ReviewArgs) -> Result<()> {
    let repo_root = diff::git::find_repo_root(&args.path)
        .await
        .context("failed to locate the repository")?;

    // Load config, then apply CLI overrides
    let env = Env::real();
    let mut config = Config::load(&repo_root, &env)?;
    if let Some(model) = args.model {
        config.provider.model = model;
    }
    if let Some(temperature) = args.temperature {
        config.provider.temperature = temperature;
    }

    let commit = diff::collect_commit(&repo_root, &args.commit)
        .await
        .with_context(|| format!("failed to read commit {}", args.commit))?;

    // Fails before any request goes out when no credential is configured
    let provider: Arc<dyn CompletionProvider> =
        Arc::new(OpenAiProvider::new(config.provider.clone())?);

    let requests = orchestrator::messages::plan_review_requests(&commit);
    cli::print_run_header(&commit, requests.len(), args.verbose);

    let orchestrator = ReviewOrchestrator::new(provider, args.verbose);
    let result = orchestrator.run(&commit).await.context("review failed")?;

    if result.chunks_failed > 0 {
        eprintln!(
            "Warning: {} of {} chunk request(s) produced no review — the result is incomplete",
            result.chunks_failed, result.chunks_total,
        );
    }

    println!("{}", result.review);
    Ok(())
}

/// Print every review request for a commit without calling the API.
async fn run_context(args: ContextArgs) -> Result<()> {
    let repo_root = diff::git::find_repo_root(&args.path)
        .await
        .context("failed to locate the repository")?;

    let commit = diff::collect_commit(&repo_root, &args.commit)
        .await
        .with_context(|| format!("failed to read commit {}", args.commit))?;

    let requests = orchestrator::messages::plan_review_requests(&commit);
    let total = requests.len();
    for (index, request) in requests.iter().enumerate() {
        println!("request {}/{total}", index + 1);
        for message in request {
            println!("{}: {}", message.role, message.content);
        }
        println!();
    }

    Ok(())
}
