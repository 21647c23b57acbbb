//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and review limits so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "revue";

/// Crate version, surfaced by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (e.g. `.revue.toml` in repo root).
pub const CONFIG_FILENAME: &str = ".revue.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "revue";

/// Default chat-completions endpoint base.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default chat model when neither config nor env names one.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Default sampling temperature. Zero keeps review output stable
/// across runs of the same commit.
pub const DEFAULT_TEMPERATURE: f32 = 0.0;


// ── Review limits ────────────────────────────────────────────────────

/// Upper bound, in characters, for any single message segment sent to
/// the completion service. Diffs are chunked at exactly this size;
/// descriptions and joined partial reviews are truncated to it.
pub const MAX_CONTENT_SIZE: usize = 11_538;

/// Response length bound quoted to the model in the review command.
pub const REVIEW_CHAR_LIMIT: usize = 3_000;

/// Separator placed between partial reviews before summarization.
pub const PARTIAL_REVIEW_SEPARATOR: &str = "---\n";


// ── Environment variable names ──────────────────────────────────────

pub const ENV_MODEL: &str = "REVUE_MODEL";
pub const ENV_API_KEY: &str = "REVUE_API_KEY";
pub const ENV_BASE_URL: &str = "REVUE_BASE_URL";
pub const ENV_TEMPERATURE: &str = "REVUE_TEMPERATURE";

/// Fallback credential variable honored when `REVUE_API_KEY` is unset.
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
