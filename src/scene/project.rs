use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::animation::ease::Ease;
use crate::animation::track::{Track, sort_keyframes};
use crate::foundation::error::{TempoError, TempoResult};
use crate::scene::config::AnimationConfig;
use crate::scene::defaults::default_config;
use crate::scene::property::PropertyPath;

/// Property prefixes of track kinds that no longer exist. Tracks bound under them are dropped on
/// load.
pub const LEGACY_TRACK_PREFIXES: [&str; 1] = ["rotation."];

const NOT_A_CONFIG: &str = "the selected file is not a valid configuration";

/// The current project: one [`AnimationConfig`] plus load/save.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Project {
    config: AnimationConfig,
}

impl Project {
    /// Wrap an existing config.
    pub fn new(config: AnimationConfig) -> Self {
        Self { config }
    }

    /// Current config.
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Replace the current config.
    pub fn set_config(&mut self, config: AnimationConfig) {
        self.config = config;
    }

    /// Consume the project, returning its config.
    pub fn into_config(self) -> AnimationConfig {
        self.config
    }

    /// Parse a project from a JSON reader.
    pub fn from_reader<R: Read>(mut r: R) -> TempoResult<Self> {
        let mut text = String::new();
        r.read_to_string(&mut text)
            .map_err(|e| TempoError::import(format!("read project JSON: {e}")))?;
        text.parse()
    }

    /// Parse a project from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TempoResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TempoError::import(format!("open project JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Replace the current config with the one in `text`. On failure the current config is
    /// left untouched.
    pub fn import_str(&mut self, text: &str) -> TempoResult<()> {
        let config = parse_config(text)?;
        self.config = config;
        Ok(())
    }

    /// Pretty JSON of the current config.
    pub fn to_json_pretty(&self) -> TempoResult<String> {
        to_json_pretty(&self.config)
    }

    /// Write the current config to `path` as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> TempoResult<()> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;
        std::fs::write(path, json).map_err(|e| {
            TempoError::Other(anyhow::anyhow!("write project JSON '{}': {e}", path.display()))
        })
    }
}

impl FromStr for Project {
    type Err = TempoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_config(s).map(Self::new)
    }
}

/// Serialize a config in the project file shape (2-space indented JSON).
pub fn to_json_pretty(config: &AnimationConfig) -> TempoResult<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Parse, migrate and validate a project file.
#[tracing::instrument(skip(text), fields(bytes = text.len()))]
pub fn parse_config(text: &str) -> TempoResult<AnimationConfig> {
    let mut doc: Value = serde_json::from_str(text)
        .map_err(|e| TempoError::import(format!("{NOT_A_CONFIG}: {e}")))?;
    let obj = doc
        .as_object_mut()
        .ok_or_else(|| TempoError::import(format!("{NOT_A_CONFIG}: expected a JSON object")))?;

    check_required(obj)?;
    fill_missing_sections(obj)?;
    migrate_tracks(obj);

    let mut config: AnimationConfig = serde_json::from_value(doc)
        .map_err(|e| TempoError::import(format!("{NOT_A_CONFIG}: {e}")))?;
    normalize_tracks(&mut config.tracks);
    config
        .validate()
        .map_err(|e| TempoError::import(format!("{NOT_A_CONFIG}: {e}")))?;

    tracing::info!(
        tracks = config.tracks.len(),
        duration = config.duration,
        shader = %config.shaders.active_shader,
        "project loaded"
    );
    Ok(config)
}

fn check_required(obj: &Map<String, Value>) -> TempoResult<()> {
    let duration_ok = obj
        .get("duration")
        .and_then(Value::as_f64)
        .is_some_and(|d| d != 0.0);
    let text_ok = obj.get("text").is_some_and(Value::is_object);
    let tracks_ok = obj.get("tracks").is_some_and(Value::is_array);

    let missing: Vec<&str> = [
        ("duration", duration_ok),
        ("text", text_ok),
        ("tracks", tracks_ok),
    ]
    .into_iter()
    .filter(|(_, ok)| !ok)
    .map(|(key, _)| key)
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(TempoError::import(format!(
            "{NOT_A_CONFIG}: missing or empty {}",
            missing.join(", ")
        )))
    }
}

fn fill_missing_sections(obj: &mut Map<String, Value>) -> TempoResult<()> {
    let defaults = default_config();
    if !obj.get("background").is_some_and(Value::is_object) {
        tracing::debug!("background missing, using default");
        obj.insert("background".into(), serde_json::to_value(defaults.background)?);
    }
    if !obj.get("shaders").is_some_and(Value::is_object) {
        tracing::debug!("shaders missing, using defaults");
        obj.insert("shaders".into(), serde_json::to_value(defaults.shaders)?);
    }
    Ok(())
}

fn is_legacy_property(property: &str) -> bool {
    LEGACY_TRACK_PREFIXES.iter().any(|p| property.starts_with(p))
}

fn migrate_tracks(obj: &mut Map<String, Value>) {
    let Some(Value::Array(tracks)) = obj.get_mut("tracks") else {
        return;
    };

    tracks.retain(|t| {
        let property = t.get("property").and_then(Value::as_str).unwrap_or_default();
        let keep = !is_legacy_property(property);
        if !keep {
            tracing::warn!(property, "dropping legacy track");
        }
        keep
    });

    for track in tracks.iter_mut().filter_map(Value::as_object_mut) {
        if !track.contains_key("id") {
            if let Some(property) = track.get("property").cloned() {
                track.insert("id".into(), property);
            }
        }
        let track_id = track
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();

        let Some(Value::Array(keyframes)) = track.get_mut("keyframes") else {
            continue;
        };
        for kf in keyframes.iter_mut().filter_map(Value::as_object_mut) {
            let known = kf
                .get("easing")
                .and_then(Value::as_str)
                .and_then(Ease::from_key)
                .is_some();
            if !known {
                tracing::warn!(track = %track_id, easing = ?kf.get("easing"), "defaulting keyframe easing to linear");
                kf.insert("easing".into(), Value::from(Ease::Linear.key()));
            }
        }
    }
}

/// Rewrite known bindings into canonical dotted form and put keyframes in time order.
fn normalize_tracks(tracks: &mut [Track]) {
    for track in tracks {
        if let Some(path) = PropertyPath::parse(&track.property) {
            let dotted = path.to_dotted();
            if dotted != track.property {
                tracing::debug!(track = %track.id, from = %track.property, to = %dotted, "normalizing binding");
                track.property = dotted;
            }
        }
        sort_keyframes(&mut track.keyframes);
    }
}

/// Fit a config restored from an older session onto the current default track set.
///
/// Every default track is kept with its current label and range; a matching track (by id)
/// contributes its binding and keyframes. Tracks unknown to the defaults and legacy tracks are
/// dropped.
pub fn reconcile_with_defaults(config: &AnimationConfig) -> AnimationConfig {
    let tracks = default_config()
        .tracks
        .into_iter()
        .map(|default| match config.track_by_id(&default.id) {
            Some(existing) if !existing.keyframes.is_empty() => {
                let property = if existing.property.is_empty() {
                    default.property.clone()
                } else {
                    existing.property.clone()
                };
                Track {
                    property,
                    keyframes: existing.keyframes.clone(),
                    ..default
                }
            }
            _ => default,
        })
        .filter(|t| !is_legacy_property(&t.property))
        .collect();
    config.with_tracks(tracks)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/project.rs"]
mod tests;
