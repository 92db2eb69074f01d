//! Environment-driven demo configuration.
//!
//! | variable | meaning | default |
//! |---|---|---|
//! | `SHAPEFORGE_COUNT` | shapes per generator | `1` |
//! | `SHAPEFORGE_SQUARES` | squares per generator | `0` |
//! | `SHAPEFORGE_FILL` | fill symbol for the filled generator | `#` |
//! | `SHAPEFORGE_MIN_SIZE` | smallest side | `2` |
//! | `SHAPEFORGE_MAX_SIZE` | largest side | `6` |
//! | `SHAPEFORGE_SEED` | deterministic seed | unset (entropy) |
//! | `SHAPEFORGE_REPORT` | `text` or `json` | `text` |
//!
//! Malformed numbers and formats fall back to their defaults with a warning.
//! An empty fill or inverted size range is an error.

use core::str::FromStr;

use shapeforge_core::{DimensionBounds, FillSymbol, ShapeResult};
use shapeforge_shapes::ReportFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub count: usize,
    pub squares: usize,
    pub fill: FillSymbol,
    pub bounds: DimensionBounds,
    pub seed: Option<u64>,
    pub report: ReportFormat,
}

impl DemoConfig {
    pub fn from_env() -> ShapeResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ShapeResult<Self> {
        let count = parse_or(&lookup, "SHAPEFORGE_COUNT", 1);
        let squares = parse_or(&lookup, "SHAPEFORGE_SQUARES", 0);
        let min = parse_or(&lookup, "SHAPEFORGE_MIN_SIZE", 2);
        let max = parse_or(&lookup, "SHAPEFORGE_MAX_SIZE", 6);
        let seed = lookup("SHAPEFORGE_SEED").and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                tracing::warn!(value = %raw, "SHAPEFORGE_SEED is not a u64; using entropy");
                None
            }
        });

        let fill = match lookup("SHAPEFORGE_FILL") {
            None => FillSymbol::default(),
            Some(raw) => FillSymbol::parse(&raw)?,
        };

        let report = match lookup("SHAPEFORGE_REPORT") {
            None => ReportFormat::default(),
            Some(raw) => ReportFormat::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "unknown SHAPEFORGE_REPORT; using text");
                ReportFormat::default()
            }),
        };

        Ok(Self {
            count,
            squares,
            fill,
            bounds: DimensionBounds::uniform(min, max)?,
            seed,
            report,
        })
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            count: 1,
            squares: 0,
            fill: FillSymbol::default(),
            bounds: DimensionBounds::default(),
            seed: None,
            report: ReportFormat::default(),
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + core::fmt::Display + Copy,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, %default, "malformed value; using default");
            default
        }),
    }
}
