//! Browser-extension manifest fragment for the generated icons
//!
//! Extension manifests reference their toolbar icons through an `"icons"`
//! object keyed by pixel size:
//!
//! ```json
//! { "icons": { "16": "icons/icon16.png", "48": "icons/icon48.png" } }
//! ```
//!
//! This module builds that object so it can be pasted into `manifest.json`.

use crate::error::{IconError, IconResult};
use serde::Serialize;
use std::{collections::BTreeMap, path::Path};

pub const MANIFEST_FILE_NAME: &str = "manifest-icons.json";

/// Root of the manifest fragment
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct IconsManifest {
    /// Icon paths relative to the extension root, keyed by size.
    ///
    /// Keys are stored as numbers so they sort 16, 48, 128 rather than
    /// lexically; serde_json writes integer map keys as strings.
    pub icons: BTreeMap<u32, String>,
}

impl IconsManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an icon living at `<dir_name>/<file_name>`
    pub fn add_icon(&mut self, size: u32, dir_name: &str, file_name: &str) {
        let path = if dir_name.is_empty() {
            file_name.to_string()
        } else {
            format!("{dir_name}/{file_name}")
        };
        self.icons.insert(size, path);
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn to_json(&self) -> IconResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the fragment as pretty-printed JSON to `path`
    pub fn write_to_file(&self, path: &Path) -> IconResult<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| IconError::io(path, e))
    }
}
