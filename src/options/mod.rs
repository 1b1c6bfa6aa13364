//! Centralized timing and scene options with TOML preset support.
//!
//! All tweakable settings (loader timing, page reveal, scene composition,
//! swarm placement) are consolidated here. Options serialize to/from TOML
//! so a host can ship presets alongside its assets.

mod loader;
mod page;
mod scene;
mod swarm;

use std::path::Path;

pub use loader::LoaderOptions;
pub use page::PageOptions;
pub use scene::{
    BearOptions, BounceOptions, GlobeOptions, HeadsetOptions, SceneOptions,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use swarm::SwarmOptions;

use crate::error::ShowcaseError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[loader]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Loading-screen simulator.
    pub loader: LoaderOptions,
    /// Page reveal timing.
    pub page: PageOptions,
    /// 3D scene composition.
    pub scene: SceneOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ShowcaseError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, ShowcaseError> {
        toml::from_str(content)
            .map_err(|e| ShowcaseError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ShowcaseError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ShowcaseError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[loader]
tick_interval_ms = 100

[scene.swarm]
count = 10
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.loader.tick_interval_ms, 100);
        assert_eq!(opts.scene.swarm.count, 10);
        // Everything else should be default
        assert_eq!(opts.loader.status_messages.len(), 4);
        assert_eq!(opts.page.minimum_duration_ms, 2000);
        assert_eq!(opts.scene.bears.len(), 3);
        assert_eq!(opts.scene.swarm.exclusion_half_extents, [4.0, 4.0]);
    }

    #[test]
    fn bears_parse_from_array_of_tables() {
        let toml_str = r"
[[scene.bears]]
position = [1.0, -2.0, 3.0]
delay = 0.25
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.scene.bears.len(), 1);
        assert_eq!(opts.scene.bears[0].position, [1.0, -2.0, 3.0]);
        assert_eq!(opts.scene.bears[0].delay, 0.25);
        assert_eq!(opts.scene.bears[0].scale, 0.1);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml("[loader\ntick = ").unwrap_err();
        assert!(matches!(err, ShowcaseError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("xr-showcase-options-{}", std::process::id()));
        let path = dir.join("presets").join("calm.toml");
        let mut opts = Options::default();
        opts.scene.globe.speed = 0.1;
        opts.scene.seed = Some(9);
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(
            Options::list_presets(&dir.join("presets")),
            vec!["calm".to_owned()]
        );
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Options::load(Path::new("/definitely/not/here.toml"))
            .unwrap_err();
        assert!(matches!(err, ShowcaseError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("loader"));
        assert!(props.contains_key("page"));
        assert!(props.contains_key("scene"));

        // Skipped fields should be absent
        let loader = &props["loader"]["properties"];
        assert!(loader.get("tick_interval_ms").is_some());
        assert!(loader.get("status_messages").is_none());
        let increment = &loader["increment_range"]["items"];
        assert_eq!(increment["minimum"], 0.1);

        let scene = &props["scene"]["properties"];
        assert!(scene.get("globe").is_some());
        assert!(scene.get("bears").is_none());
        assert!(scene.get("seed").is_none());
    }
}
