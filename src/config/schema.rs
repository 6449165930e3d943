use serde::Deserialize;

use crate::geofence::{Coordinate, PointOfInterest};
use crate::storage::FileStore;

/// Top-level engine settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/setlist/config.toml` or `~/.config/setlist/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SETLIST__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub playlist: PlaylistSettings,
    pub geofence: GeofenceSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage: StorageSettings::default(),
            playlist: PlaylistSettings::default(),
            geofence: GeofenceSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Where slot files live. When unset, the data directory is
    /// resolved from `SETLIST_DATA_DIR` or XDG defaults.
    pub data_dir: Option<String>,
}

impl StorageSettings {
    /// Open the slot store for these settings: the configured
    /// directory when set, otherwise the environment default.
    pub fn open_store(&self) -> Option<FileStore> {
        match &self.data_dir {
            Some(dir) => Some(FileStore::new(dir)),
            None => FileStore::open_default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaylistSettings {
    /// Name a fresh playlist starts with before the user renames it.
    pub default_name: String,
}

impl Default for PlaylistSettings {
    fn default() -> Self {
        Self {
            default_name: "My Awesome Playlist".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeofenceSettings {
    /// The points of interest evaluated against location fixes.
    pub points: Vec<PoiSetting>,
}

impl Default for GeofenceSettings {
    fn default() -> Self {
        Self {
            points: vec![
                PoiSetting {
                    id: "poi1".into(),
                    title: "Music Plaza".into(),
                    description: "Discover trending playlists".into(),
                    latitude: 14.5995,
                    longitude: 120.9842,
                    radius_m: 100.0,
                },
                PoiSetting {
                    id: "poi2".into(),
                    title: "Rock Arena".into(),
                    description: "Classic rock collection".into(),
                    latitude: 14.6042,
                    longitude: 120.9822,
                    radius_m: 100.0,
                },
                PoiSetting {
                    id: "poi3".into(),
                    title: "Jazz Corner".into(),
                    description: "Smooth jazz favorites".into(),
                    latitude: 14.5950,
                    longitude: 120.9900,
                    radius_m: 100.0,
                },
            ],
        }
    }
}

impl GeofenceSettings {
    /// Materialize the configured points for the evaluator.
    pub fn points_of_interest(&self) -> Vec<PointOfInterest> {
        self.points
            .iter()
            .map(|p| PointOfInterest {
                id: p.id.clone(),
                title: p.title.clone(),
                description: p.description.clone(),
                coordinate: Coordinate {
                    latitude: p.latitude,
                    longitude: p.longitude,
                },
                geofence_radius: p.radius_m,
            })
            .collect()
    }
}

/// One configured point of interest, flattened for TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct PoiSetting {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Geofence radius in meters.
    pub radius_m: f64,
}
