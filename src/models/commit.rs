//! Commit input types.

/// Everything the review pipeline reads about one commit.
///
/// Assembled once by the git collaborator before a run and never
/// mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct CommitContext {
    /// Subject line of the commit.
    pub title: String,
    /// Commit body; may be empty.
    pub description: String,
    /// Paths touched by the commit, in git's reporting order.
    pub changed_files: Vec<String>,
    /// Unified diff against the first parent (whole tree for a root
    /// commit).
    pub diff: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fully_empty() {
        let commit = CommitContext::default();
        assert!(commit.title.is_empty());
        assert!(commit.description.is_empty());
        assert!(commit.changed_files.is_empty());
        assert!(commit.diff.is_empty());
    }
}
