//! Top-level application configuration.

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use dv01_analytics::FixedRateInstrument;
use dv01_curves::ZeroCurve;

use crate::curve::CurveConfig;
use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};
use crate::instrument::InstrumentConfig;
use crate::report::{PlotConfig, RiskConfig};

fn default_instruments() -> Vec<InstrumentConfig> {
    vec![
        InstrumentConfig::five_year_bond(),
        InstrumentConfig::five_year_swap_leg(),
    ]
}

/// Everything the calculator needs for one run.
///
/// Every section is optional in a TOML file; missing sections take the
/// built-in defaults.
///
/// # Example
///
/// ```rust
/// use dv01_config::AppConfig;
///
/// let config = AppConfig::from_toml_str(
///     r#"
///     [risk]
///     bump_bps = 0.5
///
///     [[instruments]]
///     name = "2Y Semi Bond"
///     kind = "bond"
///     maturity = 2.0
///     frequency = 2
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(config.risk.bump_bps, 0.5);
/// assert_eq!(config.instruments.len(), 1);
/// assert_eq!(config.curve.points.len(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Curve table and interpolation.
    #[serde(default)]
    pub curve: CurveConfig,

    /// DV01 settings.
    #[serde(default)]
    pub risk: RiskConfig,

    /// Chart settings.
    #[serde(default)]
    pub plot: PlotConfig,

    /// Instruments to report.
    #[serde(default = "default_instruments")]
    pub instruments: Vec<InstrumentConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            curve: CurveConfig::default(),
            risk: RiskConfig::default(),
            plot: PlotConfig::default(),
            instruments: default_instruments(),
        }
    }
}

impl AppConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        info!(
            "loaded configuration from {} ({} curve points, {} instruments)",
            path.display(),
            config.curve.points.len(),
            config.instruments.len()
        );
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                debug!("no configuration file given, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Builds the configured zero curve.
    pub fn build_curve(&self) -> ConfigResult<ZeroCurve> {
        Ok(self.curve.build_curve()?)
    }

    /// Returns `(name, instrument)` pairs in configuration order.
    #[must_use]
    pub fn instruments(&self) -> Vec<(&str, FixedRateInstrument)> {
        self.instruments
            .iter()
            .map(|i| (i.name.as_str(), i.to_instrument()))
            .collect()
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        errors.extend(self.curve.validate().into_iter().map(|e| e.nested("curve")));
        errors.extend(self.risk.validate().into_iter().map(|e| e.nested("risk")));
        errors.extend(self.plot.validate().into_iter().map(|e| e.nested("plot")));

        for (i, inst) in self.instruments.iter().enumerate() {
            let prefix = format!("instruments[{i}]");
            errors.extend(inst.validate().into_iter().map(|e| e.nested(&prefix)));
        }

        errors
    }
}
