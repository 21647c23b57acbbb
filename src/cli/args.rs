//! Clap argument types and validation.

use clap::Parser;
use std::path::PathBuf;

use revue::config::TEMPERATURE_RANGE;

/// AI-assisted review of a git commit.
#[derive(Parser, Debug)]
#[command(name = "revue", version = revue::constants::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Review a commit and print the generated review.
    Review(ReviewArgs),

    /// Print the review requests for a commit without calling the API.
    Context(ContextArgs),
}

/// Arguments for the `review` subcommand.
#[derive(Parser, Debug)]
pub struct ReviewArgs {
    /// Commit to review (hash, tag, or any git revision).
    pub commit: String,

    /// Path to the repository or a directory inside it (default: current directory).
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Chat model to use, overriding config.
    #[arg(long)]
    pub model: Option<String>,

    /// Sampling temperature in [0.0, 2.0], overriding config.
    #[arg(long, value_parser = parse_temperature)]
    pub temperature: Option<f32>,

    /// Print every request's messages to stderr before sending it.
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

/// Arguments for the `context` subcommand.
#[derive(Parser, Debug)]
pub struct ContextArgs {
    /// Commit to assemble review requests for.
    pub commit: String,

    /// Path to the repository or a directory inside it (default: current directory).
    #[arg(long, default_value = ".")]
    pub path: PathBuf,
}

/// Parse and range-check a `--temperature` value.
fn parse_temperature(value: &str) -> Result<f32, String> {
    let temperature: f32 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if !TEMPERATURE_RANGE.contains(&temperature) {
        return Err(format!("temperature must be within {TEMPERATURE_RANGE:?}"));
    }
    Ok(temperature)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_requires_commit() {
        assert!(Cli::try_parse_from(["revue", "review"]).is_err());
    }

    #[test]
    fn review_parses_commit_and_defaults() {
        let cli = Cli::try_parse_from(["revue", "review", "HEAD"]).unwrap();
        match cli.command {
            Command::Review(args) => {
                assert_eq!(args.commit, "HEAD");
                assert_eq!(args.path, PathBuf::from("."));
                assert!(args.model.is_none());
                assert!(args.temperature.is_none());
                assert!(!args.verbose);
            }
            _ => panic!("expected review command"),
        }
    }

    #[test]
    fn review_parses_flags() {
        let cli = Cli::try_parse_from([
            "revue",
            "review",
            "abc123",
            "--path",
            "/tmp/repo",
            "--model",
            "gpt-4o-mini",
            "--temperature",
            "0.4",
            "--verbose",
        ])
        .unwrap();
        match cli.command {
            Command::Review(args) => {
                assert_eq!(args.commit, "abc123");
                assert_eq!(args.path, PathBuf::from("/tmp/repo"));
                assert_eq!(args.model.as_deref(), Some("gpt-4o-mini"));
                assert_eq!(args.temperature, Some(0.4));
                assert!(args.verbose);
            }
            _ => panic!("expected review command"),
        }
    }

    #[test]
    fn verbose_short_flag() {
        let cli = Cli::try_parse_from(["revue", "review", "HEAD", "-v"]).unwrap();
        match cli.command {
            Command::Review(args) => assert!(args.verbose),
            _ => panic!("expected review command"),
        }
    }

    #[test]
    fn temperature_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["revue", "review", "HEAD", "--temperature", "2.5"]).is_err());
        assert!(Cli::try_parse_from(["revue", "review", "HEAD", "--temperature", "-1"]).is_err());
    }

    #[test]
    fn temperature_must_be_numeric() {
        assert!(Cli::try_parse_from(["revue", "review", "HEAD", "--temperature", "warm"]).is_err());
    }

    #[test]
    fn temperature_bounds_are_inclusive() {
        assert_eq!(parse_temperature("0.0").unwrap(), 0.0);
        assert_eq!(parse_temperature("2.0").unwrap(), 2.0);
        assert!(parse_temperature("2.0001").is_err());
    }

    #[test]
    fn context_parses_commit_and_path() {
        let cli =
            Cli::try_parse_from(["revue", "context", "HEAD~2", "--path", "/srv/repo"]).unwrap();
        match cli.command {
            Command::Context(args) => {
                assert_eq!(args.commit, "HEAD~2");
                assert_eq!(args.path, PathBuf::from("/srv/repo"));
            }
            _ => panic!("expected context command"),
        }
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["revue", "audit", "HEAD"]).is_err());
    }
}
