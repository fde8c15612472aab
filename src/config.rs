use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/";

/// File the results are written to when the user opts in.
pub const RESULTS_FILE: &str = "gmaps_test_results.json";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeocodingQuery {
    pub address: String,
}

impl Default for GeocodingQuery {
    fn default() -> Self {
        Self {
            address: "Jakarta".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlacesQuery {
    pub query: String,
}

impl Default for PlacesQuery {
    fn default() -> Self {
        Self {
            query: "restaurants in Jakarta".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DirectionsQuery {
    pub origin: String,
    pub destination: String,
}

impl Default for DirectionsQuery {
    fn default() -> Self {
        Self {
            origin: "Jakarta".to_string(),
            destination: "Bandung".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DistanceMatrixQuery {
    pub origins: String,
    pub destinations: String,
}

impl Default for DistanceMatrixQuery {
    fn default() -> Self {
        Self {
            origins: "Jakarta".to_string(),
            destinations: "Surabaya".to_string(),
        }
    }
}

/// Service root and the fixed sample queries sent to each endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub geocoding: GeocodingQuery,
    pub places: PlacesQuery,
    pub directions: DirectionsQuery,
    pub distance_matrix: DistanceMatrixQuery,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            geocoding: GeocodingQuery::default(),
            places: PlacesQuery::default(),
            directions: DirectionsQuery::default(),
            distance_matrix: DistanceMatrixQuery::default(),
        }
    }
}

/// Load sample-query overrides from a TOML file. Missing keys keep their defaults.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("Failed to parse config: {}", path.display()))?;
    Ok(config)
}
