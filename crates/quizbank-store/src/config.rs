//! Application configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizbank configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizbankConfig {
    /// Path to the question bank JSON file.
    #[serde(default = "default_questions_path")]
    pub questions_path: PathBuf,
    /// Path to the progress JSON file.
    #[serde(default = "default_progress_path")]
    pub progress_path: PathBuf,
    /// Student id used when none is supplied.
    #[serde(default = "default_student")]
    pub default_student: String,
    /// Directory where submission reports are written.
    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,
}

fn default_questions_path() -> PathBuf {
    PathBuf::from("questions.json")
}
fn default_progress_path() -> PathBuf {
    PathBuf::from("progress.json")
}
fn default_student() -> String {
    "guest".to_string()
}
fn default_report_dir() -> PathBuf {
    PathBuf::from("./quizbank-reports")
}

impl Default for QuizbankConfig {
    fn default() -> Self {
        Self {
            questions_path: default_questions_path(),
            progress_path: default_progress_path(),
            default_student: default_student(),
            report_dir: default_report_dir(),
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizbank.toml` in the current directory
/// 2. `~/.config/quizbank/config.toml`
///
/// Environment variable overrides: `QUIZBANK_QUESTIONS_PATH`,
/// `QUIZBANK_PROGRESS_PATH`.
pub fn load_config() -> Result<QuizbankConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizbankConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizbank.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizbankConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizbankConfig::default(),
    };

    // Apply env var overrides
    if let Ok(p) = std::env::var("QUIZBANK_QUESTIONS_PATH") {
        config.questions_path = PathBuf::from(p);
    }
    if let Ok(p) = std::env::var("QUIZBANK_PROGRESS_PATH") {
        config.progress_path = PathBuf::from(p);
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizbank"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard, OnceLock};

    // Serializes tests that set or depend on QUIZBANK_* process env vars.
    fn env_guard() -> MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
    }

    #[test]
    fn default_config() {
        let config = QuizbankConfig::default();
        assert_eq!(config.questions_path, PathBuf::from("questions.json"));
        assert_eq!(config.progress_path, PathBuf::from("progress.json"));
        assert_eq!(config.default_student, "guest");
    }

    #[test]
    fn parse_partial_config_fills_defaults() {
        let toml_str = r#"
questions_path = "banks/physics.json"
"#;
        let config: QuizbankConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.questions_path, PathBuf::from("banks/physics.json"));
        assert_eq!(config.progress_path, PathBuf::from("progress.json"));
    }

    #[test]
    fn load_explicit_path() {
        let _guard = env_guard();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizbank.toml");
        std::fs::write(
            &path,
            r#"
progress_path = "state/progress.json"
default_student = "demo"
"#,
        )
        .unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.progress_path, PathBuf::from("state/progress.json"));
        assert_eq!(config.default_student, "demo");
    }

    #[test]
    fn load_missing_explicit_path_fails() {
        assert!(load_config_from(Some(Path::new("no-such.toml"))).is_err());
    }

    #[test]
    fn env_vars_override_loaded_config() {
        let _guard = env_guard();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizbank.toml");
        std::fs::write(
            &path,
            r#"
questions_path = "from-file.json"
progress_path = "from-file-progress.json"
"#,
        )
        .unwrap();

        std::env::set_var("QUIZBANK_QUESTIONS_PATH", "banks/override.json");
        std::env::set_var("QUIZBANK_PROGRESS_PATH", "state/override-progress.json");
        let config = load_config_from(Some(&path));
        std::env::remove_var("QUIZBANK_QUESTIONS_PATH");
        std::env::remove_var("QUIZBANK_PROGRESS_PATH");

        let config = config.unwrap();
        assert_eq!(config.questions_path, PathBuf::from("banks/override.json"));
        assert_eq!(
            config.progress_path,
            PathBuf::from("state/override-progress.json")
        );
    }
}
