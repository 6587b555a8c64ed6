//! icons.json data model
//!
//! A small catalog written next to the generated icons so build tooling can
//! pick each file up by role without hard-coding sizes.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// File name of the manifest inside the output directory
pub const MANIFEST_FILENAME: &str = "icons.json";

/// Root structure of an icons.json file
#[derive(Serialize, Debug, Clone)]
pub struct IconManifest {
    /// One entry per generated icon, in the order the files were written
    pub images: Vec<IconEntry>,

    /// Versioning and authorship information
    pub info: Info,
}

/// A single generated icon
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    /// The PNG file name, relative to the manifest
    pub filename: String,

    /// Pixel dimensions (e.g., "1024x1024", "48x48")
    pub size: String,

    /// What the icon is used for (e.g., "app icon", "web favicon")
    pub role: String,

    /// PNG color type, "rgb" or "rgba"
    #[serde(rename = "color-mode")]
    pub color_mode: String,
}

/// Versioning and authorship information
#[derive(Serialize, Debug, Clone)]
pub struct Info {
    /// The manifest format version (always 1)
    pub version: u8,

    /// The tool that wrote the manifest
    pub author: String,
}

impl IconManifest {
    /// Creates an empty manifest with the specified author
    pub fn new(author: String) -> Self {
        Self {
            images: Vec::new(),
            info: Info { version: 1, author },
        }
    }

    /// Adds an icon entry to the manifest
    pub fn add_image(&mut self, image: IconEntry) {
        self.images.push(image);
    }
}

impl IconEntry {
    /// Creates an entry for a square icon of `size` pixels
    pub fn new(filename: String, size: u32, role: String, color_mode: String) -> Self {
        Self {
            filename,
            size: format!("{size}x{size}"),
            role,
            color_mode,
        }
    }
}

/// Write `icons.json` into `dir`
///
/// # Errors
/// Returns an error if JSON serialization or the file write fails.
pub fn write_manifest(dir: &Path, manifest: &IconManifest) -> Result<()> {
    let json =
        serde_json::to_string_pretty(manifest).context("Failed to serialize icons.json")?;

    std::fs::write(dir.join(MANIFEST_FILENAME), json).context("Failed to write icons.json")?;
    Ok(())
}
