//! Final summarization pass over the collected partial reviews.

use crate::providers::CompletionProvider;

use super::{OrchestratorError, messages};

/// Merge the partial reviews into one review with a single completion
/// call.
///
/// The partials are joined in chunk order before being embedded in the
/// summary request. A failed call fails the whole run; partial reviews
/// are never returned unsummarized.
pub async fn summarize(
    provider: &dyn CompletionProvider,
    partials: &[String],
    verbose: bool,
) -> Result<String, OrchestratorError> {
    let request = messages::summary_messages(partials);
    if verbose {
        super::dump_messages("summary request", &request);
    }
    Ok(provider.complete(&request).await?)
}
