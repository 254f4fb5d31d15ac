// CareCompanion — Runtime configuration
//
// Where the slot database lives and how strictly corrupt slots are treated.
// Values come from CLI flags or environment, falling back to the platform
// data directory.

use std::path::{Path, PathBuf};

use crate::store::CorruptionPolicy;

/// Directory name under the platform data dir.
const APP_DIR: &str = "carecompanion";

/// File name of the slot database inside the data dir.
const DB_FILE: &str = "carecompanion.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub corruption_policy: CorruptionPolicy,
}

impl Config {
    /// Resolve configuration. `data_dir` overrides the platform default.
    pub fn resolve(data_dir: Option<PathBuf>, strict: bool) -> Self {
        let corruption_policy = if strict {
            CorruptionPolicy::Strict
        } else {
            CorruptionPolicy::Lenient
        };
        Self {
            data_dir: data_dir.unwrap_or_else(default_data_dir),
            corruption_policy,
        }
    }

    /// Path to the slot database file.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::resolve(None, false)
    }
}

/// Default directory for CareCompanion data files.
pub fn default_data_dir() -> PathBuf {
    let base = dirs_next::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_DIR)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = Config::resolve(Some(PathBuf::from("/tmp/cc-test")), false);
        assert_eq!(config.data_dir(), Path::new("/tmp/cc-test"));
        assert_eq!(config.db_path(), PathBuf::from("/tmp/cc-test/carecompanion.db"));
    }

    #[test]
    fn test_default_is_lenient_under_platform_dir() {
        let config = Config::default();
        assert_eq!(config.corruption_policy, CorruptionPolicy::Lenient);
        assert!(config.data_dir().ends_with(APP_DIR));
    }

    #[test]
    fn test_strict_flag_selects_strict_policy() {
        let config = Config::resolve(None, true);
        assert_eq!(config.corruption_policy, CorruptionPolicy::Strict);
    }
}
