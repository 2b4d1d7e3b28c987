//! Catalog of configured bodies and scene definitions.
//!
//! The catalog holds the hand-maintained orbital data (eccentricities from
//! the NSSDC planetary factsheet, perihelion dates from JPL Horizons) plus
//! the scene grouping. A YAML file with the same shape can replace the
//! built-in solar system, see `configs/solar_system.yaml`.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::body::Body;
use crate::calendar::Date;
use crate::kepler::{ElementsError, OrbitalElements};
use crate::render::SceneSpec;

/// One body's configuration. `period_days` and `semi_major_axis_au` are the
/// stored factsheet values; online runs replace them with freshly fetched
/// provider data.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub symbol: char,
    pub eccentricity: f64,
    pub perihelion: Date,
    pub period_days: f64,
    pub semi_major_axis_au: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Catalog {
    pub bodies: Vec<BodyConfig>,
    pub scenes: Vec<SceneSpec>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("body {name}: {source}")]
    Elements {
        name: String,
        source: ElementsError,
    },
    #[error("bodies {first} and {second} share render symbol '{symbol}'")]
    DuplicateSymbol {
        first: String,
        second: String,
        symbol: char,
    },
    #[error("scene '{scene}' references unknown body '{body}'")]
    UnknownSceneBody { scene: String, body: String },
    #[error("scene '{scene}' has a non-positive half-range of {half_range_au} AU")]
    SceneHalfRange { scene: String, half_range_au: f64 },
    #[error("scene '{scene}' has a zero-sized grid ({width}x{height})")]
    SceneGrid {
        scene: String,
        width: usize,
        height: usize,
    },
}

/// Load and validate a catalog from a YAML file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let reader = File::open(path)?;
    let catalog: Catalog = serde_yaml::from_reader(reader)?;
    catalog.validate()?;
    Ok(catalog)
}

impl BodyConfig {
    /// Build the immutable body, substituting provider-supplied period and
    /// semi-major axis when given. Element range violations surface here,
    /// before any state is derived.
    pub fn to_body(
        &self,
        period_days: f64,
        semi_major_axis_au: f64,
    ) -> Result<Body, CatalogError> {
        let elements = OrbitalElements::new(
            semi_major_axis_au,
            self.eccentricity,
            period_days,
            self.perihelion,
        )
        .map_err(|source| CatalogError::Elements {
            name: self.name.clone(),
            source,
        })?;
        Ok(Body {
            name: self.name.clone(),
            symbol: self.symbol,
            elements,
        })
    }

    /// Build the body from the catalog's stored factsheet values.
    pub fn to_body_offline(&self) -> Result<Body, CatalogError> {
        self.to_body(self.period_days, self.semi_major_axis_au)
    }
}

impl Catalog {
    /// Check element ranges, symbol uniqueness, scene geometry (positive
    /// half-range, non-empty grid), and that every scene body resolves.
    /// Fatal before any rendering.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for body in &self.bodies {
            body.to_body_offline()?;
        }
        for (i, body) in self.bodies.iter().enumerate() {
            if let Some(other) = self.bodies[..i].iter().find(|b| b.symbol == body.symbol) {
                return Err(CatalogError::DuplicateSymbol {
                    first: other.name.clone(),
                    second: body.name.clone(),
                    symbol: body.symbol,
                });
            }
        }
        for scene in &self.scenes {
            if !(scene.half_range_au > 0.0) {
                return Err(CatalogError::SceneHalfRange {
                    scene: scene.label.clone(),
                    half_range_au: scene.half_range_au,
                });
            }
            if scene.width == 0 || scene.height == 0 {
                return Err(CatalogError::SceneGrid {
                    scene: scene.label.clone(),
                    width: scene.width,
                    height: scene.height,
                });
            }
            for name in &scene.bodies {
                if !self
                    .bodies
                    .iter()
                    .any(|b| b.name.eq_ignore_ascii_case(name))
                {
                    return Err(CatalogError::UnknownSceneBody {
                        scene: scene.label.clone(),
                        body: name.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// The reference catalog: the eight major planets with the dual
    /// inner/outer view. Mars renders as 'R' because 'M' is taken by Mercury.
    pub fn solar_system() -> Self {
        let planet = |name: &str,
                      symbol: char,
                      eccentricity: f64,
                      perihelion: (u32, u32, i32),
                      period_days: f64,
                      semi_major_axis_au: f64| BodyConfig {
            name: name.to_string(),
            symbol,
            eccentricity,
            perihelion: Date::new(perihelion.0, perihelion.1, perihelion.2),
            period_days,
            semi_major_axis_au,
        };

        Self {
            bodies: vec![
                planet("Mercury", 'M', 0.2056, (3, 6, 2025), 87.97, 0.387),
                planet("Venus", 'V', 0.0068, (20, 2, 2025), 224.70, 0.723),
                planet("Earth", 'E', 0.0167, (4, 1, 2025), 365.25, 1.0),
                planet("Mars", 'R', 0.0934, (9, 5, 2024), 686.98, 1.524),
                planet("Jupiter", 'J', 0.0489, (21, 1, 2023), 4332.59, 5.203),
                planet("Saturn", 'S', 0.0565, (29, 11, 2032), 10759.22, 9.537),
                planet("Uranus", 'U', 0.0463, (19, 8, 2050), 30688.5, 19.19),
                planet("Neptune", 'N', 0.0086, (4, 9, 2042), 60182.0, 30.07),
            ],
            scenes: vec![
                SceneSpec {
                    label: "INNER SOLAR SYSTEM".to_string(),
                    half_range_au: 3.5,
                    bodies: ["Mercury", "Venus", "Earth", "Mars"]
                        .map(String::from)
                        .to_vec(),
                    width: crate::render::DEFAULT_GRID_WIDTH,
                    height: crate::render::DEFAULT_GRID_HEIGHT,
                },
                SceneSpec {
                    label: "OUTER SOLAR SYSTEM".to_string(),
                    half_range_au: 35.0,
                    bodies: ["Jupiter", "Saturn", "Uranus", "Neptune"]
                        .map(String::from)
                        .to_vec(),
                    width: crate::render::DEFAULT_GRID_WIDTH,
                    height: crate::render::DEFAULT_GRID_HEIGHT,
                },
            ],
        }
    }
}
