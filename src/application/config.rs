//! Recognized options for a simulation run.
//!
//! Options come from an optional JSON file; anything left out falls back
//! to the defaults below.

use std::{fs, path::Path, str::FromStr};

use anyhow::{Context, Result, bail, ensure};
use serde::Deserialize;

use crate::domain::Algorithm;

/// Straight RGBA color, parsed from `#RRGGBB` or `#RRGGBBAA`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba(pub [u8; 4]);

impl FromStr for Rgba {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some(hex) = s.strip_prefix('#') else {
            bail!("color {s:?} must start with '#'");
        };
        ensure!(
            matches!(hex.len(), 6 | 8) && hex.bytes().all(|b| b.is_ascii_hexdigit()),
            "color {s:?} must be #RRGGBB or #RRGGBBAA"
        );

        let mut rgba = [u8::MAX; 4];
        for (channel, pair) in rgba.iter_mut().zip(hex.as_bytes().chunks(2)) {
            // `pair` is two hex digits, checked above
            let digits = std::str::from_utf8(pair)?;
            *channel = u8::from_str_radix(digits, 16)
                .with_context(|| format!("color {s:?} has invalid hex digits"))?;
        }
        Ok(Self(rgba))
    }
}

/// Simulation options with the classic defaults: 20px cells, 60 fps,
/// one generation every 20 ticks.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Pixel edge length of a cell
    pub cell_size: u32,
    /// Target loop rate
    pub fps: u32,
    /// Loop iterations per generation
    pub update_frequency: u32,
    pub alive_color: String,
    pub dead_color: String,
    pub grid_color: String,
    pub algorithm: Algorithm,
    /// Randomizer seed; entropy when absent
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_size: 20,
            fps: 60,
            update_frequency: 20,
            alive_color: "#CC9999".to_owned(),
            dead_color: "#000000".to_owned(),
            grid_color: "#282828".to_owned(),
            algorithm: Algorithm::Serial,
            seed: None,
        }
    }
}

/// The three surface colors, validated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub alive: Rgba,
    pub dead: Rgba,
    pub grid: Rgba,
}

impl Config {
    /// Load options from a JSON file and validate them
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell_size must be greater than zero");
        ensure!(self.fps > 0, "fps must be greater than zero");
        ensure!(
            self.update_frequency > 0,
            "update_frequency must be greater than zero"
        );
        self.palette()?;
        Ok(())
    }

    pub fn palette(&self) -> Result<Palette> {
        Ok(Palette {
            alive: self.alive_color.parse().context("alive_color")?,
            dead: self.dead_color.parse().context("dead_color")?,
            grid: self.grid_color.parse().context("grid_color")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.fps, 60);
        assert_eq!(config.update_frequency, 20);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "fps": 30, "algorithm": "parallel" }"#).unwrap();
        assert_eq!(config.fps, 30);
        assert_eq!(config.algorithm, Algorithm::Parallel);
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.alive_color, "#CC9999");
    }

    #[test]
    fn test_rejects_zero_values() {
        assert!(Config::from_json(r#"{ "cell_size": 0 }"#).is_err());
        assert!(Config::from_json(r#"{ "fps": 0 }"#).is_err());
        assert!(Config::from_json(r#"{ "update_frequency": 0 }"#).is_err());
    }

    #[test]
    fn test_rejects_unknown_fields() {
        assert!(Config::from_json(r#"{ "cellSize": 10 }"#).is_err());
    }

    #[test]
    fn test_rejects_bad_colors() {
        assert!(Config::from_json(r##"{ "alive_color": "red" }"##).is_err());
        assert!(Config::from_json(r##"{ "dead_color": "#12345" }"##).is_err());
        assert!(Config::from_json(r##"{ "grid_color": "#GG0000" }"##).is_err());
    }

    #[test]
    fn test_rejects_signed_color_digits() {
        assert!("#+F+F+F".parse::<Rgba>().is_err());
        assert!("#-1FFFF".parse::<Rgba>().is_err());
        assert!(Config::from_json(r##"{ "alive_color": "#+F+F+F" }"##).is_err());
    }

    #[test]
    fn test_parse_colors() {
        assert_eq!("#CC9999".parse::<Rgba>().unwrap(), Rgba([0xCC, 0x99, 0x99, 0xFF]));
        assert_eq!("#00000080".parse::<Rgba>().unwrap(), Rgba([0, 0, 0, 0x80]));
    }

    #[test]
    fn test_palette_from_defaults() {
        let palette = Config::default().palette().unwrap();
        assert_eq!(palette.dead, Rgba([0, 0, 0, 255]));
        assert_eq!(palette.grid, Rgba([0x28, 0x28, 0x28, 255]));
    }
}
