//! Diff engine: git CLI wrapper and chunk splitting.

pub mod chunker;
pub mod git;

use std::path::Path;
use thiserror::Error;

use crate::models::CommitContext;

/// Errors from the diff engine.
#[derive(Error, Debug)]
pub enum DiffError {
    #[error("git command failed: {0}")]
    GitError(String),
}

/// Assemble the [`CommitContext`] for `rev`.
///
/// Runs four git reads in sequence. A one-shot CLI run resolves a
/// stable ref, so the reads are not raced against ref movement.
pub async fn collect_commit(repo_root: &Path, rev: &str) -> Result<CommitContext, DiffError> {
    let title = git::commit_title(repo_root, rev).await?;
    let description = git::commit_description(repo_root, rev).await?;
    let changed_files = git::changed_files(repo_root, rev).await?;
    let diff = git::commit_diff(repo_root, rev).await?;

    Ok(CommitContext {
        title,
        description,
        changed_files,
        diff,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn git(p: &Path, args: &[&str]) {
        let out = tokio::process::Command::new("git")
            .args(args)
            .current_dir(p)
            .output()
            .await
            .unwrap();
        assert!(out.status.success(), "git {args:?} failed");
    }

    #[tokio::test]
    async fn collect_commit_assembles_all_fields() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path();
        git(p, &["init", "-q"]).await;
        git(p, &["config", "user.email", "test@test.com"]).await;
        git(p, &["config", "user.name", "Test"]).await;
        std::fs::write(p.join("lib.rs"), "fn a() {}\n").unwrap();
        git(p, &["add", "."]).await;
        git(p, &["commit", "-q", "-m", "base"]).await;
        std::fs::write(p.join("lib.rs"), "fn a() {}\nfn b() {}\n").unwrap();
        git(p, &["add", "."]).await;
        git(
            p,
            &["commit", "-q", "-m", "Add b", "-m", "Second helper function."],
        )
        .await;

        let commit = collect_commit(p, "HEAD").await.unwrap();
        assert_eq!(commit.title, "Add b");
        assert_eq!(commit.description, "Second helper function.");
        assert_eq!(commit.changed_files, vec!["lib.rs".to_string()]);
        assert!(commit.diff.contains("+fn b() {}"), "got: {}", commit.diff);
    }

    #[tokio::test]
    async fn collect_commit_outside_repo_errors() {
        let dir = tempfile::tempdir().unwrap();
        let result = collect_commit(dir.path(), "HEAD").await;
        assert!(matches!(result, Err(DiffError::GitError(_))));
    }
}
