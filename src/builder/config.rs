//! Builder Configuration
//!
//! Defines the configuration used by the [`TreeBuilder`](crate::builder::TreeBuilder)
//! and its JSON representation.
use crate::errors::InfoTreeError;
use crate::metrics::EntropyMethod;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_parallel() -> bool {
    false
}
fn default_num_threads() -> Option<usize> {
    None
}

/// Configuration for the `TreeBuilder`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InductionConfig {
    /// Entropy formula used for every class entropy computation.
    #[serde(default)]
    pub entropy: EntropyMethod,
    /// Evaluate the candidate attributes of a node on a thread pool.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    /// Number of threads when `parallel` is set, all available if `None`.
    #[serde(default = "default_num_threads")]
    pub num_threads: Option<usize>,
}

impl Default for InductionConfig {
    fn default() -> Self {
        InductionConfig {
            entropy: EntropyMethod::Binary,
            parallel: default_parallel(),
            num_threads: default_num_threads(),
        }
    }
}

impl InductionConfig {
    /// Check the values that serde cannot rule out.
    pub fn validate(&self) -> Result<(), InfoTreeError> {
        if self.num_threads == Some(0) {
            return Err(InfoTreeError::InvalidParameter(
                "num_threads".to_string(),
                "a positive number of threads".to_string(),
                "0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Reading and writing a configuration as JSON.
pub trait ConfigIO: Serialize + DeserializeOwned + Sized {
    /// Write the JSON configuration to `path`, replacing any existing file.
    fn save_config<P: AsRef<Path>>(&self, path: P) -> Result<(), InfoTreeError> {
        fs::write(path, self.json_dump()?).map_err(|e| InfoTreeError::UnableToWrite(e.to_string()))
    }

    /// The configuration as a compact JSON string.
    fn json_dump(&self) -> Result<String, InfoTreeError> {
        serde_json::to_string(self).map_err(|e| InfoTreeError::UnableToWrite(e.to_string()))
    }

    /// Parse a JSON configuration. Missing fields take their defaults.
    fn from_json(json_str: &str) -> Result<Self, InfoTreeError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| InfoTreeError::UnableToRead(e.to_string()))
    }

    /// Read and parse the JSON configuration stored at `path`.
    fn load_config<P: AsRef<Path>>(path: P) -> Result<Self, InfoTreeError> {
        let json_str = fs::read_to_string(path).map_err(|e| InfoTreeError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl ConfigIO for InductionConfig {}
