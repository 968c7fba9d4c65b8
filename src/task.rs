use serde::{Deserialize, Serialize};
use std::path::Path;

/// A saved conversion job. CLI arguments override values loaded from here.
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct Task {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Initial timeline offset in seconds
    pub offset: Option<u64>,
}

impl Task {
    pub fn load(path: Option<&str>) -> anyhow::Result<Option<Self>> {
        if let Some(path) = path {
            let contents = std::fs::read_to_string(path)?;
            let task: Task = serde_json::from_str(&contents)?;
            Ok(Some(task))
        } else {
            Ok(None)
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
