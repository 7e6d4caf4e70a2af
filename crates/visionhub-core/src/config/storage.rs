//! Media storage configuration.

use serde::{Deserialize, Serialize};

/// Local media storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for stored media files.
    #[serde(default = "default_media_root")]
    pub media_root: String,
    /// Maximum upload size in bytes (default 20 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            media_root: default_media_root(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_media_root() -> String {
    "./data/media".to_string()
}

fn default_max_upload() -> u64 {
    20_971_520 // 20 MB
}
