use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path, time::Duration};

use crate::{Error, Result};

/// Selects which sentence parser adapter supplies trees.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParserConfig {
    /// Remote CoreNLP annotation server.
    CoreNlpServer(CoreNlpConfig),
    /// In-process reader for already-bracketed input lines.
    Bracketed,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig::CoreNlpServer(CoreNlpConfig::default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreNlpConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_annotators")]
    pub annotators: String,

    #[serde(default = "default_request_timeout", with = "duration_ms")]
    pub request_timeout: Duration,
}

impl Default for CoreNlpConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            annotators: default_annotators(),
            request_timeout: default_request_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:9000".to_string()
}

fn default_annotators() -> String {
    "tokenize,ssplit,pos,parse".to_string()
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

/// Loads a parser configuration from a JSON file.
pub fn load_config(path: impl AsRef<Path>) -> Result<ParserConfig> {
    let file = File::open(path.as_ref())
        .map_err(|e| Error::internal(format!("Failed to open config file: {}", e)))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| Error::internal(format!("Failed to parse config file: {}", e)))
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
