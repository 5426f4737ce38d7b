// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! JSON configuration for the `gw` tool.

use std::fs;
use std::path::{Path, PathBuf};

use gw_math::{Prng, SeedError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rendering of command results on stdout.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines and tables.
    #[default]
    Text,
    /// One JSON document per invocation.
    Json,
}

/// Settings loaded from `--config`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GwConfig {
    /// Hex-encoded seed bytes; at least [`Prng::SEED_SIZE`] bytes once decoded.
    pub seed: Option<String>,
    /// 64-bit seed expanded with SplitMix64 when `seed` is absent.
    pub seed_u64: u64,
    /// Default output format.
    pub format: OutputFormat,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for GwConfig {
    fn default() -> Self {
        Self {
            seed: None,
            seed_u64: 0,
            format: OutputFormat::Text,
            log_filter: "warn".to_owned(),
        }
    }
}

/// Error type for loading configuration and resolving seeds.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The config file is not valid JSON for [`GwConfig`].
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A seed string is not hexadecimal.
    #[error("seed is not valid hex: {0}")]
    SeedHex(#[from] hex::FromHexError),
    /// Decoded seed bytes were rejected by the generator.
    #[error(transparent)]
    Seed(#[from] SeedError),
}

impl GwConfig {
    /// Reads and parses a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let bytes = fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&bytes)
    }

    /// Parses a config document. An empty document yields the defaults.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Builds the generator this configuration describes.
    ///
    /// `seed_override` (from `--seed`) wins over the file's `seed`, which in
    /// turn wins over `seed_u64`.
    pub fn prng(&self, seed_override: Option<&str>) -> Result<Prng, ConfigError> {
        match seed_override.or(self.seed.as_deref()) {
            Some(hex_seed) => prng_from_hex(hex_seed),
            None => Ok(Prng::from_seed_u64(self.seed_u64)),
        }
    }
}

/// Decodes a hex seed (optional `0x` prefix) and seeds a fresh generator.
pub fn prng_from_hex(text: &str) -> Result<Prng, ConfigError> {
    let text = text.trim();
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    let bytes = hex::decode(digits)?;
    let mut prng = Prng::new();
    prng.seed_from_slice(&bytes)?;
    Ok(prng)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn hex_seed(fill: u8, len: usize) -> String {
        hex::encode(vec![fill; len])
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(GwConfig::from_json(b"").unwrap(), GwConfig::default());
        assert_eq!(GwConfig::from_json(b"{}").unwrap(), GwConfig::default());
        assert_eq!(GwConfig::default().log_filter, "warn");
    }

    #[test]
    fn fields_parse_from_json() {
        let cfg = GwConfig::from_json(
            br#"{"seed_u64": 42, "format": "json", "log_filter": "gw_math=debug"}"#,
        )
        .unwrap();
        assert_eq!(cfg.seed_u64, 42);
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(cfg.log_filter, "gw_math=debug");
        assert_eq!(cfg.prng(None).unwrap(), Prng::from_seed_u64(42));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = GwConfig::from_json(br#"{"sed": 1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn override_beats_file_seed() {
        let cfg = GwConfig {
            seed: Some(hex_seed(0x11, 64)),
            ..GwConfig::default()
        };
        let from_file = cfg.prng(None).unwrap();
        let overridden = cfg.prng(Some(&hex_seed(0x22, 64))).unwrap();
        assert_eq!(from_file, Prng::from_seed_bytes(&[0x11; 64]));
        assert_eq!(overridden, Prng::from_seed_bytes(&[0x22; 64]));
    }

    #[test]
    fn hex_seed_errors() {
        assert!(matches!(
            prng_from_hex("zz").unwrap_err(),
            ConfigError::SeedHex(_)
        ));
        let short = prng_from_hex(&hex_seed(1, 8)).unwrap_err();
        assert!(matches!(
            short,
            ConfigError::Seed(SeedError::TooShort { needed: 64, got: 8 })
        ));
        assert_eq!(short.to_string(), "seed requires 64 bytes, got 8");
        let prefixed = format!("0x{}", hex_seed(3, 64));
        assert_eq!(
            prng_from_hex(&prefixed).unwrap(),
            Prng::from_seed_bytes(&[3; 64])
        );
    }
}
