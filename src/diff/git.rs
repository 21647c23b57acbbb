//! Git CLI wrapper for reading commit details.
//!
//! Shells out to `git` via `tokio::process::Command`.

use std::path::{Path, PathBuf};

use super::DiffError;

/// Run a git subcommand in `repo_root` and return its stdout.
async fn run_git(repo_root: &Path, args: &[&str], action: &str) -> Result<String, DiffError> {
    let output = tokio::process::Command::new("git")
        .args(args)
        .current_dir(repo_root)
        .output()
        .await
        .map_err(|e| DiffError::GitError(format!("failed to run git: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(DiffError::GitError(format!(
            "{action} failed (exit {}): {stderr}",
            output.status
        )));
    }

    String::from_utf8(output.stdout)
        .map_err(|e| DiffError::GitError(format!("git output is not valid UTF-8: {e}")))
}

/// Subject line of `rev`'s commit message.
pub async fn commit_title(repo_root: &Path, rev: &str) -> Result<String, DiffError> {
    let out = run_git(
        repo_root,
        &["show", "--pretty=format:%s", "-s", rev],
        "git show",
    )
    .await?;
    Ok(out.trim().to_string())
}

/// Body of `rev`'s commit message; empty when the commit has none.
pub async fn commit_description(repo_root: &Path, rev: &str) -> Result<String, DiffError> {
    let out = run_git(
        repo_root,
        &["show", "--pretty=format:%b", "-s", rev],
        "git show",
    )
    .await?;
    Ok(out.trim().to_string())
}

/// Unified diff that `rev` introduced, taken against its first parent.
///
/// A root commit has no parent to diff against, so the parent form
/// fails and we fall back to the patch `git show` prints for it.
pub async fn commit_diff(repo_root: &Path, rev: &str) -> Result<String, DiffError> {
    let parent = format!("{rev}^");
    match run_git(repo_root, &["diff", &parent, rev], "git diff").await {
        Ok(diff) => Ok(diff),
        Err(_) => run_git(repo_root, &["show", "--pretty=format:", rev], "git show").await,
    }
}

/// Paths touched by `rev`, in git's reporting order.
pub async fn changed_files(repo_root: &Path, rev: &str) -> Result<Vec<String>, DiffError> {
    let parent = format!("{rev}^");
    let out = match run_git(
        repo_root,
        &["diff", "--name-only", &parent, rev],
        "git diff",
    )
    .await
    {
        Ok(out) => out,
        Err(_) => {
            run_git(
                repo_root,
                &["show", "--pretty=format:", "--name-only", rev],
                "git show",
            )
            .await?
        }
    };
    Ok(out
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Find the root of the git repository containing `start_dir`.
pub async fn find_repo_root(start_dir: &Path) -> Result<PathBuf, DiffError> {
    let output = tokio::process::Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(start_dir)
        .output()
        .await
        .map_err(|e| DiffError::GitError(format!("failed to run git: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(DiffError::GitError(format!(
            "not a git repository: {stderr}"
        )));
    }

    let root = String::from_utf8_lossy(&output.stdout);
    Ok(PathBuf::from(root.trim()))
}
