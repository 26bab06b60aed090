//! Engine configuration

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// file name of the rank table written by the build script
pub const RANK_TABLE_FILENAME: &str = "hand_ranks.dat";
/// file name of the board tables written by the build script
pub const BOARD_TABLE_FILENAME: &str = "boards.dat";

/// Where to find the lookup tables and how many workers to run
///
/// Every field is optional in JSON, missing fields take their default.
///
/// # Example
///
/// ```
/// use holdem_equity::config::EngineConfig;
/// let config = EngineConfig::from_json(r#"{ "threads": 2 }"#).unwrap();
/// assert_eq!(config.threads, 2);
/// assert!(config.rank_table.ends_with("hand_ranks.dat"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rank_table: PathBuf,
    pub board_table: PathBuf,
    /// worker threads per query, 0 is treated as 1
    pub threads: usize,
}

impl Default for EngineConfig {
    /// Tables generated for this build, one thread per cpu
    fn default() -> Self {
        let out_dir = Path::new(env!("OUT_DIR"));
        EngineConfig {
            rank_table: out_dir.join(RANK_TABLE_FILENAME),
            board_table: out_dir.join(BOARD_TABLE_FILENAME),
            threads: num_cpus::get(),
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<EngineConfig>(json).map(EngineConfig::normalized)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: EngineConfig = serde_json::from_reader(reader)?;
        Ok(config.normalized())
    }

    fn normalized(mut self) -> Self {
        self.threads = self.threads.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert!(config.threads >= 1);
    }

    #[test]
    fn test_zero_threads() {
        let config = EngineConfig::from_json(r#"{"threads": 0, "rank_table": "/tmp/ranks.dat"}"#).unwrap();
        assert_eq!(config.threads, 1);
        assert_eq!(config.rank_table, PathBuf::from("/tmp/ranks.dat"));
        assert!(config.board_table.ends_with(BOARD_TABLE_FILENAME));
    }

    #[test]
    fn test_bad_json() {
        assert!(EngineConfig::from_json(r#"{"threads": "many"}"#).is_err());
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("holdem_equity_config_{}.json", std::process::id()));
        std::fs::write(&path, r#"{"threads": 3}"#).unwrap();
        let config = EngineConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.threads, 3);
        assert!(EngineConfig::from_file("/nonexistent/engine.json").is_err());
    }
}
