// src/config/mod.rs - Verifier configuration

//! Configuration module for verifier settings

use serde::{Deserialize, Serialize};

use crate::cuckoo::keys::KeyMode;
use crate::cuckoo::verify::Verifier;
use crate::cuckoo::{CuckooParams, EdgeType, ParamsError, DEFAULT_EDGE_BITS, DEFAULT_PROOF_SIZE};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Verifier settings as supplied by caller configuration
pub struct Config {
    /// log2 of the per-side node space
    pub edge_bits: u32,
    /// Required cycle length (even, at least 12)
    pub proof_size: usize,
    /// Use the two-word SipHash-compatible keying transform
    pub legacy_keying: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            edge_bits: DEFAULT_EDGE_BITS,
            proof_size: DEFAULT_PROOF_SIZE,
            legacy_keying: false,
        }
    }
}

impl Config {
    /// Keying mode selected by this configuration
    pub fn key_mode(&self) -> KeyMode {
        if self.legacy_keying {
            KeyMode::Legacy
        } else {
            KeyMode::Standard
        }
    }

    /// Validate into typed graph parameters
    pub fn params<T: EdgeType>(&self) -> Result<CuckooParams<T>, ParamsError> {
        CuckooParams::new(self.edge_bits, self.proof_size, self.key_mode())
    }

    /// Build a verifier for these settings, failing fast on an unusable
    /// parameter combination
    pub fn verifier<T: EdgeType>(&self) -> Result<Verifier<T>, ParamsError> {
        Ok(Verifier::new(self.params()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.edge_bits, 30);
        assert_eq!(config.proof_size, 42);
        assert!(!config.legacy_keying);
        assert_eq!(config.key_mode(), KeyMode::Standard);
        assert!(config.verifier::<u32>().is_ok());
    }

    #[test]
    fn test_legacy_flag_selects_mode() {
        let config = Config {
            legacy_keying: true,
            ..Config::default()
        };
        assert_eq!(config.key_mode(), KeyMode::Legacy);
        let verifier = config.verifier::<u32>().unwrap();
        assert_eq!(verifier.params().key_mode(), KeyMode::Legacy);
    }

    #[test]
    fn test_invalid_settings_fail_fast() {
        let config = Config {
            edge_bits: 40,
            ..Config::default()
        };
        assert!(config.params::<u32>().is_err());
        assert!(config.params::<u64>().is_ok());
    }
}
