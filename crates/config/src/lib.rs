//! Configuration models and loaders for constellation manifests and body tables.

use std::fs::File;
use std::path::{Path, PathBuf};

use nominal_bodies::{BodyCatalog, BodyConstants};
use nominal_constellation::{
    ConfigurationError, ConstellationParams, LayoutStrategy, ReferenceOrbit, WalkerDelta,
};
use nominal_core::units::{deg_to_rad, km_to_m};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Layout strategy named in a manifest.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Coplanar,
    CoplanarCircular,
    WalkerDelta,
}

/// One constellation as written in a YAML or TOML manifest (km and degrees).
#[derive(Debug, Deserialize, Clone)]
pub struct ConstellationManifest {
    pub name: String,
    #[serde(default = "default_body")]
    pub body: String,
    pub strategy: StrategyKind,
    pub satellites: usize,
    #[serde(default)]
    pub planes: Option<usize>,
    #[serde(default)]
    pub spacing: Option<f64>,
    pub semi_major_axis_km: f64,
    #[serde(default)]
    pub eccentricity: Option<f64>,
    pub inclination_deg: f64,
    #[serde(default)]
    pub raan_deg: Option<f64>,
    #[serde(default)]
    pub arg_periapsis_deg: Option<f64>,
    #[serde(default)]
    pub true_anomaly_offset_deg: Option<f64>,
}

fn default_body() -> String {
    "EARTH".to_string()
}

impl ConstellationManifest {
    /// Reference orbit in SI units.
    pub fn reference_orbit(&self) -> ReferenceOrbit {
        ReferenceOrbit {
            semi_major_axis_m: km_to_m(self.semi_major_axis_km),
            eccentricity: self.eccentricity.unwrap_or(0.0),
            inclination_rad: deg_to_rad(self.inclination_deg),
            raan_rad: deg_to_rad(self.raan_deg.unwrap_or(0.0)),
            arg_periapsis_rad: deg_to_rad(self.arg_periapsis_deg.unwrap_or(0.0)),
            true_anomaly_offset_rad: deg_to_rad(self.true_anomaly_offset_deg.unwrap_or(0.0)),
        }
    }

    /// Layout strategy; Walker-Delta defaults to one plane and unit spacing.
    pub fn layout(&self) -> Result<LayoutStrategy, ConfigError> {
        let strategy = match self.strategy {
            StrategyKind::Coplanar => LayoutStrategy::Coplanar,
            StrategyKind::CoplanarCircular => LayoutStrategy::CoplanarCircular,
            StrategyKind::WalkerDelta => {
                let defaults = WalkerDelta::default();
                let walker = WalkerDelta::new(
                    self.planes.unwrap_or(defaults.planes()),
                    self.spacing.unwrap_or(defaults.relative_spacing()),
                )
                .map_err(|source| self.invalid(source))?;
                LayoutStrategy::WalkerDelta(walker)
            }
        };
        Ok(strategy)
    }

    fn invalid(&self, source: ConfigurationError) -> ConfigError {
        ConfigError::Invalid {
            name: self.name.clone(),
            source,
        }
    }
}

impl TryFrom<&ConstellationManifest> for ConstellationParams {
    type Error = ConfigError;

    fn try_from(manifest: &ConstellationManifest) -> Result<Self, Self::Error> {
        ConstellationParams::new(manifest.satellites, manifest.reference_orbit())
            .map_err(|source| manifest.invalid(source))
    }
}

/// Custom body definition used to extend the built-in constants table.
#[derive(Debug, Deserialize, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub mu_m3_s2: f64,
    #[serde(default)]
    pub equatorial_radius_m: Option<f64>,
    #[serde(default)]
    pub flattening: Option<f64>,
    #[serde(default)]
    pub j2: Option<f64>,
}

impl From<BodyConfig> for BodyConstants {
    fn from(config: BodyConfig) -> Self {
        let mut body = BodyConstants::new(&config.name, config.mu_m3_s2);
        body.equatorial_radius_m = config.equatorial_radius_m;
        body.flattening = config.flattening;
        body.zonal[0] = config.j2;
        if let (Some(req), Some(f)) = (config.equatorial_radius_m, config.flattening) {
            body.polar_radius_m = Some(req * (1.0 - f));
        }
        body
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("constellation `{name}` is invalid: {source}")]
    Invalid {
        name: String,
        #[source]
        source: ConfigurationError,
    },
    #[error("body `{name}` has a non-positive gravitational parameter ({mu_m3_s2})")]
    InvalidBody { name: String, mu_m3_s2: f64 },
}

/// Load constellation manifests from a YAML list, a TOML file, or a directory of TOML files.
pub fn load_constellations<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<ConstellationManifest>, ConfigError> {
    load_records(path)
}

/// Load custom body definitions.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    let bodies: Vec<BodyConfig> = load_records(path)?;
    if let Some(bad) = bodies
        .iter()
        .find(|body| !(body.mu_m3_s2.is_finite() && body.mu_m3_s2 > 0.0))
    {
        return Err(ConfigError::InvalidBody {
            name: bad.name.clone(),
            mu_m3_s2: bad.mu_m3_s2,
        });
    }
    Ok(bodies)
}

/// Built-in bodies plus the custom ones at `path`; custom entries replace built-ins of the same name.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<BodyCatalog, ConfigError> {
    let mut catalog = BodyCatalog::builtin().clone();
    for body in load_bodies(path)? {
        catalog.insert(body.into());
    }
    Ok(catalog)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        debug!(path = %path.display(), "reading TOML record");
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        debug!(path = %path.display(), "reading YAML records");
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    debug!(dir = %dir.display(), files = entries.len(), "reading TOML directory");

    let mut records = Vec::with_capacity(entries.len());
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        records.push(toml::from_str(&contents)?);
    }
    Ok(records)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}
