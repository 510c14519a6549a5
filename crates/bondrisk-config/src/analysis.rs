//! Analysis configuration types.
//!
//! One file drives every command of the CLI: the bond to price, the yield
//! grid for the price curve, the early-sale scenario and display settings.
//! Every field has a default, so an empty file is a valid configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use bondrisk_analytics::pricing::yield_grid;
use bondrisk_analytics::scenario::SaleScenario;
use bondrisk_core::{BondParameters, BondRiskResult, Yield};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

// =============================================================================
// BOND
// =============================================================================

/// Bond priced by default, and the yield it is priced at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BondConfig {
    /// Coupon rate per period.
    pub coupon: f64,
    /// Periods to maturity.
    pub maturity: u32,
    /// Face amount.
    pub principal: f64,
    /// Per-period yield.
    #[serde(rename = "yield")]
    pub yield_value: f64,
}

impl Default for BondConfig {
    fn default() -> Self {
        Self {
            coupon: 0.05,
            maturity: 30,
            principal: 100.0,
            yield_value: 0.05,
        }
    }
}

impl BondConfig {
    /// Validated bond parameters.
    pub fn parameters(&self) -> BondRiskResult<BondParameters> {
        BondParameters::new(self.coupon, self.maturity, self.principal)
    }
}

// =============================================================================
// CURVE
// =============================================================================

/// Yield grid for the yield/price curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    /// First yield.
    pub start: f64,
    /// Spacing between yields.
    pub step: f64,
    /// Number of yields.
    pub count: usize,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            start: 0.01,
            step: 0.01,
            count: 10,
        }
    }
}

impl CurveConfig {
    /// Largest number of yields a grid may hold.
    pub const MAX_POINTS: usize = 10_000;

    /// Smallest yield on the grid. The grid is linear, so this is an endpoint.
    pub fn lowest_yield(&self) -> f64 {
        let last = self.start + self.step * self.count.saturating_sub(1) as f64;
        self.start.min(last)
    }

    /// The yields described by this grid.
    pub fn yields(&self) -> Vec<f64> {
        yield_grid(self.start, self.step, self.count)
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

/// Display settings. Values are rounded only when shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Decimal places for prices.
    pub price_precision: u32,
    /// Decimal places for durations.
    pub duration_precision: u32,
    /// Width in characters of the longest chart bar.
    pub bar_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            price_precision: 2,
            duration_precision: 2,
            bar_width: 50,
        }
    }
}

// =============================================================================
// ANALYSIS CONFIGURATION
// =============================================================================

/// Top-level configuration.
///
/// # Example
///
/// ```rust
/// use bondrisk_config::{AnalysisConfig, Validate};
///
/// let config = AnalysisConfig::from_toml_str(
///     r#"
///     [bond]
///     coupon = 0.04
///
///     [scenario]
///     yield_at_sale = 0.06
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(config.bond.coupon, 0.04);
/// assert_eq!(config.bond.maturity, 30);
/// assert_eq!(config.scenario.maturity_at_sale, 28);
/// assert!(config.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Default bond and yield.
    pub bond: BondConfig,
    /// Yield grid.
    pub curve: CurveConfig,
    /// Early-sale scenario.
    pub scenario: SaleScenario,
    /// Display settings.
    pub output: OutputConfig,
}

impl AnalysisConfig {
    /// Loads and validates a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let config = match extension.as_str() {
            "toml" => Self::from_toml_str(&contents)?,
            "json" => Self::from_json_str(&contents)?,
            other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
        };

        config.validate_or_error()?;
        log::debug!("loaded analysis configuration from {}", path.display());
        Ok(config)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                log::debug!("no configuration file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parses TOML. Does not validate.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parses JSON. Does not validate.
    pub fn from_json_str(s: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn check_rate(errors: &mut Vec<ValidationError>, field: &str, value: f64) {
    if Yield::new(value).is_err() {
        errors.push(ValidationError::new(
            field,
            format!("{value} must be finite and greater than -1"),
        ));
    }
}

fn check_non_negative(errors: &mut Vec<ValidationError>, field: &str, value: f64) {
    if !value.is_finite() || value < 0.0 {
        errors.push(ValidationError::new(
            field,
            format!("{value} must be finite and non-negative"),
        ));
    }
}

impl Validate for AnalysisConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        check_non_negative(&mut errors, "bond.coupon", self.bond.coupon);
        check_non_negative(&mut errors, "bond.principal", self.bond.principal);
        check_rate(&mut errors, "bond.yield", self.bond.yield_value);
        if self.bond.maturity == 0 {
            errors.push(ValidationError::new("bond.maturity", "must be at least 1"));
        }

        if self.curve.count == 0 || self.curve.count > CurveConfig::MAX_POINTS {
            errors.push(ValidationError::new(
                "curve.count",
                format!("must be between 1 and {}", CurveConfig::MAX_POINTS),
            ));
        }
        if !self.curve.step.is_finite() {
            errors.push(ValidationError::new("curve.step", "must be finite"));
        }
        let lowest = self.curve.lowest_yield();
        if Yield::new(lowest).is_err() {
            errors.push(ValidationError::new(
                "curve",
                format!("grid reaches yield {lowest}, which is not greater than -1"),
            ));
        }

        let scenario = &self.scenario;
        check_non_negative(&mut errors, "scenario.coupon", scenario.coupon);
        check_non_negative(&mut errors, "scenario.principal", scenario.principal);
        check_rate(&mut errors, "scenario.yield_at_purchase", scenario.yield_at_purchase);
        check_rate(&mut errors, "scenario.yield_at_sale", scenario.yield_at_sale);
        if scenario.maturity_at_sale == 0 || scenario.maturity_at_sale > scenario.maturity_at_purchase
        {
            errors.push(ValidationError::new(
                "scenario.maturity_at_sale",
                format!(
                    "must be between 1 and maturity_at_purchase ({})",
                    scenario.maturity_at_purchase
                ),
            ));
        }

        if self.output.bar_width == 0 {
            errors.push(ValidationError::new("output.bar_width", "must be at least 1"));
        }
        if self.output.price_precision > 12 || self.output.duration_precision > 12 {
            errors.push(ValidationError::new(
                "output",
                "precision cannot exceed 12 decimal places",
            ));
        }

        errors
    }
}
