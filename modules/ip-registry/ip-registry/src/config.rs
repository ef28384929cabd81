//! Configuration for the IP Registry module.

use std::path::Path;

use anyhow::{Context, ensure};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Configuration for the IP Registry module.
///
/// Supplies the initial fee and capacity; both can later be changed at
/// runtime once the authority contract is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IpRegistryConfig {
    /// Amount transferred from registrant to authority on each registration.
    /// Default: 100
    pub registration_fee: u64,

    /// Maximum number of artworks the registry accepts. Must be > 0.
    /// Default: 1 000 000
    pub max_artworks: u64,
}

impl Default for IpRegistryConfig {
    fn default() -> Self {
        Self {
            registration_fee: 100,
            max_artworks: 1_000_000,
        }
    }
}

impl IpRegistryConfig {
    /// Prefix of environment variables overriding config keys,
    /// e.g. `IP_REGISTRY__REGISTRATION_FEE`.
    pub const ENV_PREFIX: &'static str = "IP_REGISTRY__";

    /// Layered load: defaults, then the YAML file (if given), then env.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, a layer fails to parse,
    /// or the merged config does not pass [`Self::validate`].
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            ensure!(
                path.is_file(),
                "config file does not exist: {}",
                path.display()
            );
            figment = figment.merge(Yaml::file(path));
        }

        figment = figment.merge(Env::prefixed(Self::ENV_PREFIX));
        Self::from_figment(&figment)
    }

    /// Extracts and validates the config from an already assembled figment.
    ///
    /// # Errors
    ///
    /// Returns an error on extraction failure or invalid values.
    pub fn from_figment(figment: &Figment) -> anyhow::Result<Self> {
        let cfg: Self = figment
            .extract()
            .context("failed to parse ip-registry configuration")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// # Errors
    ///
    /// Returns an error if `max_artworks` is zero.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.max_artworks > 0, "max_artworks must be greater than 0");
        Ok(())
    }
}
