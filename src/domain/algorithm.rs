//! Selects how a generation is computed.

use super::{Grid, rules};
use serde::Deserialize;

/// Evolution strategy. Both produce identical generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Column by column on the calling thread
    #[default]
    Serial,
    /// Columns spread over the rayon pool, joined before returning
    Parallel,
}

impl Algorithm {
    pub fn all() -> [Algorithm; 2] {
        [Algorithm::Serial, Algorithm::Parallel]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "serial",
            Algorithm::Parallel => "parallel",
        }
    }

    /// Compute the generation after `grid`
    pub fn step(&self, grid: &Grid) -> Grid {
        match self {
            Algorithm::Serial => rules::step(grid),
            Algorithm::Parallel => rules::step_parallel(grid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_serial() {
        assert_eq!(Algorithm::default(), Algorithm::Serial);
    }

    #[test]
    fn test_deserializes_lowercase_names() {
        for algorithm in Algorithm::all() {
            let json = format!("\"{}\"", algorithm.name());
            let parsed: Algorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, algorithm);
        }
    }
}
