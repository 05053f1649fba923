use std::ffi::OsString;
use std::str::FromStr;

use clap::Parser;
use thiserror::Error;

use crate::geometry::Grid;

pub const DEFAULT_WIDTH: u16 = 25;
pub const DEFAULT_HEIGHT: u16 = 20;
pub const MIN_SIDE: u16 = 4;
pub const MAX_SIDE: u16 = 200;

pub const USAGE: &str = "Usage: snake [options]
Options:
 -d [width]x[height]\tdefine dimensions of the screen

Default dimensions are 25x20";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Args(String),

    #[error("malformed dimensions `{0}`, expected WIDTHxHEIGHT")]
    MalformedDimensions(String),

    #[error(
        "dimensions {}x{} out of range, each side must be {} to {}",
        .width, .height, MIN_SIDE, MAX_SIDE
    )]
    OutOfRange { width: u16, height: u16 },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u16,
    pub height: u16,
}

impl FromStr for Dimensions {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ConfigError::MalformedDimensions(s.to_string());
        let (w, h) = s.split_once(|c| c == 'x' || c == 'X').ok_or_else(malformed)?;
        let width = w.trim().parse::<u16>().map_err(|_| malformed())?;
        let height = h.trim().parse::<u16>().map_err(|_| malformed())?;

        let in_range = |side: u16| (MIN_SIDE..=MAX_SIDE).contains(&side);
        if !in_range(width) || !in_range(height) {
            return Err(ConfigError::OutOfRange { width, height });
        }
        Ok(Dimensions { width, height })
    }
}

/// The only accepted flag is `-d`; anything else, `-h` included, is a usage error.
#[derive(Parser, Debug)]
#[command(name = "snake", disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Grid size, e.g. 30x20
    #[arg(short = 'd', value_name = "WIDTHxHEIGHT")]
    dimensions: Option<Dimensions>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub width: u16,
    pub height: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config { width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT }
    }
}

impl Config {
    /// Parse a full argument list, program name first.
    pub fn from_args<I, T>(args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Args::try_parse_from(args).map_err(|e| ConfigError::Args(e.to_string()))?;
        Ok(match args.dimensions {
            Some(Dimensions { width, height }) => Config { width, height },
            None => Config::default(),
        })
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.width as i32, self.height as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_defaults() {
        let config = Config::from_args(["snake"]).unwrap();
        assert_eq!(config, Config { width: 25, height: 20 });
        assert_eq!(config.grid(), Grid::new(25, 20));
    }

    #[test]
    fn dimensions_flag_is_parsed() {
        let config = Config::from_args(["snake", "-d", "30x20"]).unwrap();
        assert_eq!(config, Config { width: 30, height: 20 });
    }

    #[test]
    fn malformed_dimensions_are_rejected() {
        for bad in ["30", "x20", "30x", "axb", "30x-2", "30*20"].iter() {
            assert!(Config::from_args(["snake", "-d", *bad]).is_err(), "{}", bad);
            assert!(bad.parse::<Dimensions>().is_err());
        }
    }

    #[test]
    fn out_of_range_dimensions_are_rejected() {
        assert!(matches!(
            "3x20".parse::<Dimensions>(),
            Err(ConfigError::OutOfRange { width: 3, height: 20 })
        ));
        assert!("20x201".parse::<Dimensions>().is_err());
        assert!("4x4".parse::<Dimensions>().is_ok());
    }

    #[test]
    fn wrong_argument_count_is_rejected() {
        assert!(matches!(Config::from_args(["snake", "-d"]), Err(ConfigError::Args(_))));
        assert!(matches!(Config::from_args(["snake", "30x20"]), Err(ConfigError::Args(_))));
        assert!(Config::from_args(["snake", "-d", "30x20", "-d", "10x10"]).is_err());
    }

    #[test]
    fn help_flags_are_usage_errors() {
        assert!(matches!(Config::from_args(["snake", "-h"]), Err(ConfigError::Args(_))));
        assert!(matches!(Config::from_args(["snake", "--help"]), Err(ConfigError::Args(_))));
        assert!(matches!(Config::from_args(["snake", "-V"]), Err(ConfigError::Args(_))));
    }
}
