//! Review orchestration: chunked requests, aggregation, and summarization.
//!
//! Drives one completion request per diff chunk, strictly in order, then
//! turns the collected partial reviews into the final review.

pub mod messages;
pub mod summarizer;

use std::sync::Arc;

use colored::Colorize;
use thiserror::Error;

use crate::models::{ChatMessage, CommitContext};
use crate::providers::{CompletionProvider, ProviderError};

/// Errors from the orchestrator.
#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("commit title is empty")]
    MissingTitle,

    #[error("no reviews were generated")]
    NoReviews,

    #[error("failed to summarize partial reviews: {0}")]
    Summary(#[from] ProviderError),
}

/// Result of a review run, including how many chunk requests failed.
#[derive(Debug)]
pub struct ReviewResult {
    /// The final review text.
    pub review: String,
    /// Number of chunk requests issued.
    pub chunks_total: usize,
    /// Number of chunk requests that produced no partial review.
    pub chunks_failed: usize,
}

/// Drives the sequential review pipeline for one commit.
pub struct ReviewOrchestrator {
    provider: Arc<dyn CompletionProvider>,
    verbose: bool,
}

impl ReviewOrchestrator {
    /// Create a new orchestrator.
    pub fn new(provider: Arc<dyn CompletionProvider>, verbose: bool) -> Self {
        Self { provider, verbose }
    }

    /// Run the full pipeline: chunk the diff, request a review per chunk,
    /// aggregate, and summarize when more than one partial came back.
    ///
    /// Requests go out one at a time; each request's messages are built
    /// fresh. A failed chunk is logged and skipped, so the run degrades
    /// to partial coverage instead of aborting. Zero collected reviews
    /// fail the run, as does a failed summarization.
    pub async fn run(&self, commit: &CommitContext) -> Result<ReviewResult, OrchestratorError> {
        if commit.title.trim().is_empty() {
            return Err(OrchestratorError::MissingTitle);
        }

        let requests = messages::plan_review_requests(commit);
        let chunks_total = requests.len();

        let mut partials: Vec<String> = Vec::new();
        for (index, request) in requests.iter().enumerate() {
            if self.verbose {
                dump_messages(&format!("request {}/{chunks_total}", index + 1), request);
            }
            match self.provider.complete(request).await {
                Ok(partial) => partials.push(partial),
                Err(e) => {
                    eprintln!(
                        "Warning: chunk {}/{chunks_total} produced no review: {e}",
                        index + 1
                    );
                }
            }
        }

        let chunks_failed = chunks_total - partials.len();
        if self.verbose {
            eprintln!(
                "{}",
                format!(
                    "collected {} partial review(s), {chunks_failed} failed",
                    partials.len()
                )
                .dimmed()
            );
        }

        if partials.is_empty() {
            return Err(OrchestratorError::NoReviews);
        }

        let review = if partials.len() == 1 {
            partials.remove(0)
        } else {
            summarizer::summarize(self.provider.as_ref(), &partials, self.verbose).await?
        };

        Ok(ReviewResult {
            review,
            chunks_total,
            chunks_failed,
        })
    }
}

/// Print a request's messages to stderr as dimmed role-tagged blocks.
pub(crate) fn dump_messages(label: &str, messages: &[ChatMessage]) {
    eprintln!("{}", format!("--- {label} ---").dimmed());
    for message in messages {
        eprintln!("{}", format!("[{}]", message.role).dimmed());
        eprintln!("{}", message.content.dimmed());
    }
}
