//! Configuration loading for scicalc
//!
//! Priority (highest to lowest):
//! 1. Command-line flags (applied by the caller via [`Settings::apply_overrides`])
//! 2. Environment variables prefixed `SCICALC_`
//! 3. Explicit `--config` file (toml, yaml or json)
//! 4. `scicalc.toml` in the working directory
//! 5. Built-in defaults

use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "scicalc.toml";

/// Prefix for environment overrides, e.g. `SCICALC_ANGLE_MODE=degrees`
pub const ENV_PREFIX: &str = "SCICALC_";

/// Most decimals an f64 can meaningfully show
pub const MAX_PRECISION: usize = 17;

/// Unit of trig inputs and inverse-trig outputs at the host level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    #[default]
    Radians,
    Degrees,
}

impl AngleMode {
    pub fn label(self) -> &'static str {
        match self {
            AngleMode::Radians => "RAD",
            AngleMode::Degrees => "DEG",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Angle unit used by the host for trig operations
    pub angle_mode: AngleMode,
    /// Decimal places after the point for ordinary results
    pub precision: usize,
    /// Colored terminal output
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            angle_mode: AngleMode::Radians,
            precision: 10,
            color: true,
        }
    }
}

impl Settings {
    /// Load settings using the working directory for the default config file
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_from(Path::new("."), explicit)
    }

    /// Load settings with `dir` as the location of the default config file
    pub fn load_from(dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(dir.join(DEFAULT_CONFIG_FILE)));

        if let Some(path) = explicit {
            figment = merge_file(figment, path)?;
        }

        let settings: Settings = figment
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .context("Failed to load configuration")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            bail!(
                "precision must be at most {}, got {}",
                MAX_PRECISION,
                self.precision
            );
        }
        Ok(())
    }

    /// Apply command-line flags on top of loaded settings
    pub fn apply_overrides(
        &mut self,
        degrees: bool,
        no_color: bool,
        precision: Option<usize>,
    ) -> Result<()> {
        if degrees {
            self.angle_mode = AngleMode::Degrees;
        }
        if no_color {
            self.color = false;
        }
        if let Some(p) = precision {
            self.precision = p;
        }
        self.validate()
    }
}

/// Merge an explicitly requested config file, format chosen by extension
fn merge_file(figment: Figment, path: &Path) -> Result<Figment> {
    if !path.exists() {
        bail!("Config file not found: {}", path.display());
    }
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .context("Config file must have an extension")?;

    let figment = match extension {
        "toml" => figment.merge(Toml::file(path)),
        "yaml" | "yml" => figment.merge(Yaml::file(path)),
        "json" => figment.merge(Json::file(path)),
        _ => bail!("Unsupported config file format: {}", extension),
    };
    Ok(figment)
}
