//! Predictor configuration.

use std::str::FromStr;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::predictor::*;

/// The largest table index width accepted by [PredictorConfig::validate].
pub const MAX_INDEX_BITS: u32 = 28;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{what} must be between 1 and {max} bits (got {bits})")]
    BadWidth { what: &'static str, bits: u32, max: u32 },

    #[error("unknown predictor type '{0}'")]
    UnknownKind(String),

    #[error("malformed number '{0}' in predictor configuration")]
    BadNumber(String),

    #[error("too many parameters for predictor type '{0}'")]
    TooManyParameters(String),
}

/// The available prediction schemes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PredictorKind {
    Static,
    Gshare,
    Tournament,
    Custom,
}
impl PredictorKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Static => "Static",
            Self::Gshare => "Gshare",
            Self::Tournament => "Tournament",
            Self::Custom => "Custom",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PredictorConfig {
    pub kind: PredictorKind,

    /// Number of bits of global history
    pub ghistory_bits: u32,

    /// Number of bits of local history
    pub lhistory_bits: u32,

    /// Number of program counter bits used to select a local history
    pub pc_index_bits: u32,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            kind: PredictorKind::Static,
            ghistory_bits: 14,
            lhistory_bits: 10,
            pc_index_bits: 10,
        }
    }
}

impl PredictorConfig {
    pub fn new(kind: PredictorKind) -> Self {
        Self { kind, ..Default::default() }
    }

    pub fn gshare(ghistory_bits: u32) -> Self {
        Self { ghistory_bits, ..Self::new(PredictorKind::Gshare) }
    }

    pub fn tournament(ghistory_bits: u32, lhistory_bits: u32, pc_index_bits: u32)
        -> Self
    {
        Self {
            kind: PredictorKind::Tournament,
            ghistory_bits,
            lhistory_bits,
            pc_index_bits,
        }
    }

    pub fn custom(ghistory_bits: u32) -> Self {
        Self { ghistory_bits, ..Self::new(PredictorKind::Custom) }
    }

    /// Returns the width and name of every table index used by this scheme.
    fn index_widths(&self) -> Vec<(&'static str, u32)> {
        match self.kind {
            PredictorKind::Static => vec![],
            PredictorKind::Gshare => vec![("global history", self.ghistory_bits)],
            PredictorKind::Tournament => vec![
                ("global history", self.ghistory_bits),
                ("local history", self.lhistory_bits),
                ("pc index", self.pc_index_bits),
            ],
            PredictorKind::Custom => vec![
                ("global history", self.ghistory_bits),
            ],
        }
    }

    /// Check that every table this scheme allocates can be indexed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let extra = match self.kind {
            PredictorKind::Custom => SKEWED_EXTRA_INDEX_BITS,
            _ => 0,
        };
        for (what, bits) in self.index_widths() {
            let max = MAX_INDEX_BITS - extra;
            if bits == 0 || bits > max {
                return Err(ConfigError::BadWidth { what, bits, max });
            }
        }
        Ok(())
    }

    /// Returns the total number of table entries allocated by this scheme.
    ///
    /// Only meaningful for a configuration that passes [Self::validate];
    /// wider tables saturate to `usize::MAX`.
    pub fn table_entries(&self) -> usize {
        if self.validate().is_err() {
            return usize::MAX;
        }
        match self.kind {
            PredictorKind::Static => 0,
            PredictorKind::Gshare => 1 << self.ghistory_bits,
            PredictorKind::Tournament => {
                // Local patterns, local counters, global counters, chooser
                (1 << self.pc_index_bits) + (1 << self.lhistory_bits)
                    + 2 * (1 << self.ghistory_bits)
            },
            PredictorKind::Custom => {
                3 * (1 << (self.ghistory_bits + SKEWED_EXTRA_INDEX_BITS))
            },
        }
    }

    /// Validate this configuration and allocate the selected predictor.
    pub fn build(self) -> Result<Predictor, ConfigError> {
        self.validate()?;
        let p: Predictor = match self.kind {
            PredictorKind::Static => StaticPredictor.into(),
            PredictorKind::Gshare => GsharePredictor::new(self.ghistory_bits).into(),
            PredictorKind::Tournament => TournamentPredictor::new(
                self.ghistory_bits, self.lhistory_bits, self.pc_index_bits
            ).into(),
            PredictorKind::Custom => SkewedPredictor::new(self.ghistory_bits).into(),
        };
        debug!(kind = self.kind.name(), entries = self.table_entries(),
            "allocated predictor tables");
        Ok(p)
    }
}

impl std::fmt::Display for PredictorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            PredictorKind::Static => write!(f, "static"),
            PredictorKind::Gshare => write!(f, "gshare:{}", self.ghistory_bits),
            PredictorKind::Tournament => write!(f, "tournament:{}:{}:{}",
                self.ghistory_bits, self.lhistory_bits, self.pc_index_bits),
            PredictorKind::Custom => write!(f, "custom:{}", self.ghistory_bits),
        }
    }
}

/// Parses the compact driver spelling: `static`, `gshare:<ghist>`,
/// `tournament:<ghist>:<lhist>:<pcidx>` and `custom[:<ghist>]`.
///
/// Omitted parameters keep their default values. The result is checked
/// with [PredictorConfig::validate].
impl FromStr for PredictorConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(':');
        let name = parts.next().unwrap_or_default().to_ascii_lowercase();
        let nums = parts.map(|p| {
            p.parse::<u32>().map_err(|_| ConfigError::BadNumber(p.to_string()))
        }).collect::<Result<Vec<u32>, _>>()?;

        let (kind, max_params) = match name.as_str() {
            "static" => (PredictorKind::Static, 0),
            "gshare" => (PredictorKind::Gshare, 1),
            "tournament" => (PredictorKind::Tournament, 3),
            "custom" => (PredictorKind::Custom, 1),
            _ => return Err(ConfigError::UnknownKind(name)),
        };
        if nums.len() > max_params {
            return Err(ConfigError::TooManyParameters(name));
        }

        let mut cfg = Self::new(kind);
        let fields = [
            &mut cfg.ghistory_bits,
            &mut cfg.lhistory_bits,
            &mut cfg.pc_index_bits,
        ];
        for (field, val) in fields.into_iter().zip(nums) {
            *field = val;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}
