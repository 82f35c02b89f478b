//! Display preferences loaded from TOML.
//!
//! A preferences file chooses, per dimension, the unit quantities are rendered in, plus the number of decimals:
//!
//! ```toml
//! precision = 3
//!
//! [units]
//! length = "ft"
//! speed = "knots"
//! temperature = "°C"
//! ```
//!
//! Keys under `[units]` are dimension names (`Unit::NAME` of each unit enumeration); values are any accepted
//! spelling of a unit of that dimension. Both are checked when the file is loaded, so a typo fails early instead of
//! silently falling back to the standard unit.

use physq_core::acceleration::AccelerationUnit;
use physq_core::angle::AngleUnit;
use physq_core::area::AreaUnit;
use physq_core::energy::EnergyUnit;
use physq_core::force::ForceUnit;
use physq_core::frequency::FrequencyUnit;
use physq_core::length::LengthUnit;
use physq_core::mass::MassUnit;
use physq_core::mass_density::MassDensityUnit;
use physq_core::power::PowerUnit;
use physq_core::pressure::PressureUnit;
use physq_core::speed::SpeedUnit;
use physq_core::temperature::TemperatureUnit;
use physq_core::time::TimeUnit;
use physq_core::volume::VolumeUnit;
use physq_core::{Quantity, Unit, UnknownUnitError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Largest accepted `precision`; `f64` carries at most 17 significant decimal digits.
pub const MAX_PRECISION: usize = 17;

/// Precision used when the file does not set one.
pub const DEFAULT_PRECISION: usize = 6;

/// File name searched by [`DisplayPreferences::from_default_location`].
pub const CONFIG_FILE_NAME: &str = "physq.toml";

/// Errors raised while loading display preferences.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid TOML or does not have the expected shape.
    #[error("failed to parse display preferences: {0}")]
    Parse(#[from] toml::de::Error),

    /// A `[units]` key names no known dimension.
    #[error("unknown dimension '{0}' in [units]")]
    UnknownDimension(String),

    /// A `[units]` value is not a spelling of any unit of its dimension.
    #[error(transparent)]
    UnknownUnit(#[from] UnknownUnitError),

    /// `precision` is larger than [`MAX_PRECISION`].
    #[error("precision {0} exceeds the maximum of {max}", max = MAX_PRECISION)]
    Precision(usize),

    /// None of the searched locations holds a preferences file.
    #[error("no {name} found in standard locations", name = CONFIG_FILE_NAME)]
    NotFound,
}

/// Resolves a spelling to the canonical abbreviation of a unit of `U`.
type Canonicalize = fn(&str) -> Result<&'static str, UnknownUnitError>;

fn canonicalize<U: Unit>(spelling: &str) -> Result<&'static str, UnknownUnitError> {
    U::parse(spelling)
        .map(|unit| unit.abbreviation())
        .ok_or_else(|| UnknownUnitError::new::<U>(spelling))
}

/// Every dimension a preferences file may name.
const KNOWN_DIMENSIONS: &[(&str, Canonicalize)] = &[
    (LengthUnit::NAME, canonicalize::<LengthUnit>),
    (AreaUnit::NAME, canonicalize::<AreaUnit>),
    (VolumeUnit::NAME, canonicalize::<VolumeUnit>),
    (TimeUnit::NAME, canonicalize::<TimeUnit>),
    (FrequencyUnit::NAME, canonicalize::<FrequencyUnit>),
    (SpeedUnit::NAME, canonicalize::<SpeedUnit>),
    (AccelerationUnit::NAME, canonicalize::<AccelerationUnit>),
    (AngleUnit::NAME, canonicalize::<AngleUnit>),
    (MassUnit::NAME, canonicalize::<MassUnit>),
    (MassDensityUnit::NAME, canonicalize::<MassDensityUnit>),
    (ForceUnit::NAME, canonicalize::<ForceUnit>),
    (EnergyUnit::NAME, canonicalize::<EnergyUnit>),
    (PowerUnit::NAME, canonicalize::<PowerUnit>),
    (PressureUnit::NAME, canonicalize::<PressureUnit>),
    (TemperatureUnit::NAME, canonicalize::<TemperatureUnit>),
];

/// On-disk layout.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PreferencesFile {
    #[serde(default = "default_precision")]
    precision: usize,
    #[serde(default)]
    units: BTreeMap<String, String>,
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

/// Preferred display units per dimension and the number of decimals to print.
///
/// Dimensions without a preference render in their standard unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPreferences {
    precision: usize,
    /// Dimension name to canonical unit abbreviation.
    units: BTreeMap<&'static str, &'static str>,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            units: BTreeMap::new(),
        }
    }
}

impl DisplayPreferences {
    /// Load display preferences from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let preferences = Self::from_toml_str(&content)?;
        log::debug!("loaded display preferences from {}", path.display());
        Ok(preferences)
    }

    /// Parse display preferences from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: PreferencesFile = toml::from_str(content)?;
        let mut preferences = Self::default().with_precision(file.precision)?;

        for (dimension, spelling) in &file.units {
            let &(name, canonicalize) = KNOWN_DIMENSIONS
                .iter()
                .find(|(name, _)| *name == dimension.as_str())
                .ok_or_else(|| {
                    log::warn!("rejecting display unit for unknown dimension '{}'", dimension);
                    ConfigError::UnknownDimension(dimension.clone())
                })?;
            let abbreviation = canonicalize(spelling).map_err(|err| {
                log::warn!("rejecting display unit '{}' for {}", spelling, name);
                err
            })?;
            preferences.units.insert(name, abbreviation);
        }

        Ok(preferences)
    }

    /// Load display preferences from the default location.
    ///
    /// Searches for `physq.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, ConfigError> {
        Self::from_search_paths(&[
            PathBuf::from(CONFIG_FILE_NAME),
            Path::new("config").join(CONFIG_FILE_NAME),
            Path::new("..").join(CONFIG_FILE_NAME),
        ])
    }

    fn from_search_paths(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        for path in paths {
            if path.exists() {
                log::info!("using display preferences at {}", path.display());
                return Self::from_file(path);
            }
        }
        Err(ConfigError::NotFound)
    }

    /// Number of decimals printed by [`DisplayPreferences::format`].
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Replace the precision.
    pub fn with_precision(mut self, precision: usize) -> Result<Self, ConfigError> {
        if precision > MAX_PRECISION {
            return Err(ConfigError::Precision(precision));
        }
        self.precision = precision;
        Ok(self)
    }

    /// Set the preferred unit of `U`'s dimension.
    pub fn with_unit<U: Unit>(mut self, unit: U) -> Self {
        self.units.insert(U::NAME, unit.abbreviation());
        self
    }

    /// The preferred unit of `U`'s dimension, or its standard unit.
    pub fn unit_for<U: Unit>(&self) -> U {
        self.units
            .get(U::NAME)
            .and_then(|abbreviation| U::parse(abbreviation))
            .unwrap_or(U::STANDARD)
    }

    /// Render `quantity` in its preferred unit with the configured precision.
    pub fn format<Q: Quantity>(&self, quantity: &Q) -> String {
        quantity.print(self.unit_for::<Q::Unit>(), self.precision)
    }
}
