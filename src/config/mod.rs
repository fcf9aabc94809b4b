// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration system for chordy.
//!
//! This module provides the editor settings loaded once at startup:
//! the seed song shape, the starting resolution, and the export path.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::chart::Resolution;

/// Editor configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorConfig {
    /// Starting song title
    #[serde(default = "default_title")]
    pub title: String,
    /// Names of the sections a new song starts with
    #[serde(default = "default_sections")]
    pub sections: Vec<String>,
    /// Empty bars seeded into each new section
    #[serde(default = "default_bars_per_section")]
    pub bars_per_section: usize,
    /// Empty bars appended per add-bars command
    #[serde(default = "default_bar_batch")]
    pub bar_batch: usize,
    /// Starting resolution for entered chords
    #[serde(default)]
    pub resolution: Resolution,
    /// Path the chart text export is written to
    #[serde(default = "default_export_path")]
    pub export_path: String,
}

fn default_title() -> String {
    "Title".to_string()
}
fn default_sections() -> Vec<String> {
    vec!["Verse".to_string(), "Chorus".to_string()]
}
fn default_bars_per_section() -> usize {
    4
}
fn default_bar_batch() -> usize {
    4
}
fn default_export_path() -> String {
    "chart.txt".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            sections: default_sections(),
            bars_per_section: default_bars_per_section(),
            bar_batch: default_bar_batch(),
            resolution: Resolution::default(),
            export_path: default_export_path(),
        }
    }
}

impl EditorConfig {
    /// Load editor configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config = Self::from_yaml(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse editor configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Reject configurations that would produce an unusable editor
    pub fn validate(&self) -> Result<()> {
        if self.bars_per_section == 0 {
            bail!("bars_per_section must be at least 1");
        }
        if self.bar_batch == 0 {
            bail!("bar_batch must be at least 1");
        }
        if self.sections.is_empty() {
            bail!("at least one starting section is required");
        }
        Ok(())
    }
}
