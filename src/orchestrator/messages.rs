//! Prompt construction for review and summary requests.
//!
//! Everything in this module is pure: the same commit context always
//! produces the same message sequences, so the `context` subcommand can
//! print exactly what a review run would send.

use crate::constants::{MAX_CONTENT_SIZE, PARTIAL_REVIEW_SEPARATOR, REVIEW_CHAR_LIMIT};
use crate::diff::chunker;
use crate::models::{ChatMessage, CommitContext};

/// Diff segment used when the commit has an empty diff, so the request
/// still tells the model explicitly that nothing changed.
pub const EMPTY_DIFF_NOTICE: &str = "(no changes: this commit has an empty diff)";

const REVIEW_PERSONA: &str = "You are a code change reviewer for an open \
source project. Provide feedback on the code changes you are given. Do not \
introduce yourself. Focus only on the top 10 (not more) negative findings \
and on what needs to be changed or improved and how.";

const SUMMARY_PERSONA: &str = "You are a code change reviewer for an open \
source project. Combine the reviews provided by other reviewers. Do not \
introduce yourself. Do not add intro statements or conclusions. Do not lose \
information from the reviews. Do not mention any reviewers and pretend that \
you are the only reviewer.";

/// Messages for one chunk's review request.
///
/// Order is fixed: persona, task, optional description, the diff chunk,
/// and the command that triggers the model's answer. A blank description
/// contributes no message.
pub fn review_messages(commit: &CommitContext, chunk: &str) -> Vec<ChatMessage> {
    let mut messages = vec![
        ChatMessage::system(REVIEW_PERSONA),
        ChatMessage::user(review_task(&commit.title)),
    ];
    if !commit.description.trim().is_empty() {
        messages.push(ChatMessage::user(review_description(&commit.description)));
    }
    messages.push(ChatMessage::user(review_diff_chunk(chunk)));
    messages.push(ChatMessage::user(review_command()));
    messages
}

/// Plan every request a review run will send, one per diff chunk.
///
/// An empty diff still plans a single request carrying
/// [`EMPTY_DIFF_NOTICE`], so a commit with no textual changes is
/// reviewed from its title and description rather than silently skipped.
pub fn plan_review_requests(commit: &CommitContext) -> Vec<Vec<ChatMessage>> {
    let chunks = chunker::chunk_diff(&commit.diff, MAX_CONTENT_SIZE);
    if chunks.is_empty() {
        return vec![review_messages(commit, EMPTY_DIFF_NOTICE)];
    }
    chunks
        .iter()
        .map(|chunk| review_messages(commit, chunk))
        .collect()
}

/// Messages for the final summarization request.
pub fn summary_messages(partials: &[String]) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SUMMARY_PERSONA),
        ChatMessage::user(summary_task(partials)),
    ]
}

fn review_task(title: &str) -> String {
    format!(
        "The change has the following title: {title}.\n\n\
         Your task is:\n\
         - Review the code changes and provide feedback.\n\
         - Check for bugs and highlight them.\n\
         - Verify that the changes do what the title and description say.\n\
         - Sort issues from major to minor.\n\
         - Check adherence to best practices: readability, maintainability, \
         documentation, consistent naming and style, modular functions.\n\
         - Analyze performance and point out potential bottlenecks or more \
         efficient algorithms.\n\
         - Assess test coverage: missing or outdated unit tests, untested \
         edge cases.\n\
         - Evaluate reusability: prefer existing libraries and reusable \
         components over one-off code.\n\
         - Provide security recommendations, if applicable.\n\
         - Check that the commit message clearly describes the changes.\n\
         - Provide feedback as a numbered list.\n\
         - Focus only on the negative parts.\n\n\
         Do not provide feedback yet. I will follow up with a description of \
         the change in a new message."
    )
}

fn review_description(description: &str) -> String {
    format!(
        "A description was provided to help you understand why these changes \
         were made:\n\
         -----\n\
         {}\n\
         -----\n\
         Do not provide feedback yet. I will follow up with a diff of the \
         change in a new message.",
        truncate_chars(description, MAX_CONTENT_SIZE)
    )
}

fn review_diff_chunk(chunk: &str) -> String {
    format!(
        "The following diff segment was provided:\n\
         -----\n\
         {}\n\
         -----\n\
         Do not provide feedback yet. I will follow up with more of the diff \
         or with a final instruction in a new message.",
        truncate_chars(chunk, MAX_CONTENT_SIZE)
    )
}

fn review_command() -> String {
    format!(
        "All code changes have been provided. Please give me your code review \
         based on all the changes, context and title provided. Make it \
         succinct and to the point, using less than {REVIEW_CHAR_LIMIT} \
         characters. Report only the top 10 (up to) most severe issues as a \
         numbered list sorted from most to least severe. Add a severity level \
         in [] in front of each issue (low|med|high)."
    )
}

fn summary_task(partials: &[String]) -> String {
    let joined = partials.join(PARTIAL_REVIEW_SEPARATOR);
    format!(
        "Reviews:\n\
         -----\n\
         {}\n\
         -----\n\
         Combine the reviews. Do not add intro statements or conclusions. Do \
         not lose information from the original reviews. Report only the top \
         10 (up to) most severe issues as a numbered list sorted from most to \
         least severe, keeping each issue's severity level.",
        truncate_chars(&joined, MAX_CONTENT_SIZE)
    )
}

/// Cut `text` to at most `max_chars` characters, on a char boundary.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((offset, _)) => &text[..offset],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use pretty_assertions::assert_eq;

    fn commit(title: &str, description: &str, diff: &str) -> CommitContext {
        CommitContext {
            title: title.to_string(),
            description: description.to_string(),
            changed_files: Vec::new(),
            diff: diff.to_string(),
        }
    }

    #[test]
    fn review_messages_are_idempotent() {
        let ctx = commit("Add parser", "Handles nested input.", "+fn parse() {}");
        let first = review_messages(&ctx, "+fn parse() {}");
        let second = review_messages(&ctx, "+fn parse() {}");
        assert_eq!(first, second);
    }

    #[test]
    fn review_request_shape_with_description() {
        let ctx = commit("Add parser", "Handles nested input.", "+x");
        let messages = review_messages(&ctx, "+x");

        let roles: Vec<Role> = messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![Role::System, Role::User, Role::User, Role::User, Role::User]
        );
        assert_eq!(messages[0].content, REVIEW_PERSONA);
        assert!(messages[1].content.contains("Add parser"));
        assert!(messages[2].content.contains("Handles nested input."));
        assert!(messages[3].content.contains("+x"));
        assert!(
            messages[4]
                .content
                .starts_with("All code changes have been provided.")
        );
    }

    #[test]
    fn blank_description_adds_no_message() {
        let ctx = commit("Add parser", "", "+x");
        assert_eq!(review_messages(&ctx, "+x").len(), 4);

        let ctx = commit("Add parser", "  \n ", "+x");
        assert_eq!(review_messages(&ctx, "+x").len(), 4);
    }

    #[test]
    fn description_is_truncated_to_exact_limit() {
        let long = "q".repeat(MAX_CONTENT_SIZE + 1_000);
        let ctx = commit("Add parser", &long, "+x");
        let messages = review_messages(&ctx, "+x");

        let kept = messages[2].content.chars().filter(|c| *c == 'q').count();
        assert_eq!(kept, MAX_CONTENT_SIZE);
    }

    #[test]
    fn oversized_chunk_is_truncated_defensively() {
        let ctx = commit("Add parser", "", "ignored");
        let huge_chunk = "z".repeat(MAX_CONTENT_SIZE + 10);
        let messages = review_messages(&ctx, &huge_chunk);

        let kept = messages[2].content.chars().filter(|c| *c == 'z').count();
        assert_eq!(kept, MAX_CONTENT_SIZE);
    }

    #[test]
    fn command_bounds_the_response() {
        let ctx = commit("Add parser", "", "+x");
        let messages = review_messages(&ctx, "+x");
        let command = &messages.last().unwrap().content;

        assert!(command.contains(&REVIEW_CHAR_LIMIT.to_string()));
        assert!(command.contains("(low|med|high)"));
        assert!(command.contains("most to least severe"));
    }

    #[test]
    fn plan_single_request_for_short_diff() {
        let ctx = commit("Add parser", "", "+short diff");
        let plan = plan_review_requests(&ctx);
        assert_eq!(plan.len(), 1);
        assert!(plan[0][2].content.contains("+short diff"));
    }

    #[test]
    fn plan_one_request_per_chunk_in_order() {
        let diff = format!(
            "{}{}{}",
            "a".repeat(MAX_CONTENT_SIZE),
            "b".repeat(MAX_CONTENT_SIZE),
            "c".repeat(MAX_CONTENT_SIZE)
        );
        let ctx = commit("Big change", "", &diff);
        let plan = plan_review_requests(&ctx);

        assert_eq!(plan.len(), 3);
        assert!(plan[0][2].content.contains("aaa"));
        assert!(plan[1][2].content.contains("bbb"));
        assert!(plan[2][2].content.contains("ccc"));
    }

    #[test]
    fn empty_diff_plans_one_request_with_notice() {
        let ctx = commit("Fix null pointer", "", "");
        let plan = plan_review_requests(&ctx);

        assert_eq!(plan.len(), 1);
        assert!(plan[0][2].content.contains(EMPTY_DIFF_NOTICE));
        assert!(
            plan[0]
                .last()
                .unwrap()
                .content
                .starts_with("All code changes have been provided.")
        );
    }

    #[test]
    fn summary_messages_join_with_separator() {
        let partials = vec!["first review".to_string(), "second review".to_string()];
        let messages = summary_messages(&partials);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, SUMMARY_PERSONA);
        assert!(messages[1].content.contains("first review---\nsecond review"));
    }

    #[test]
    fn summary_is_truncated_to_limit() {
        let partials = vec![
            "q".repeat(MAX_CONTENT_SIZE),
            "q".repeat(MAX_CONTENT_SIZE),
        ];
        let messages = summary_messages(&partials);

        let kept = messages[1].content.chars().filter(|c| *c == 'q').count();
        assert_eq!(kept, MAX_CONTENT_SIZE);
    }

    #[test]
    fn summary_messages_are_idempotent() {
        let partials = vec!["one".to_string(), "two".to_string()];
        assert_eq!(summary_messages(&partials), summary_messages(&partials));
    }

    #[test]
    fn truncate_keeps_short_text_intact() {
        assert_eq!(truncate_chars("short", 100), "short");
        assert_eq!(truncate_chars("exact", 5), "exact");
    }

    #[test]
    fn truncate_cuts_to_char_count() {
        assert_eq!(truncate_chars("abcdef", 4), "abcd");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        let crabs = "🦀".repeat(10);
        assert_eq!(truncate_chars(&crabs, 3), "🦀🦀🦀");
    }
}
