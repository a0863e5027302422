use serde::Serialize;

pub const SEED_ENV: &str = "SLOTLINE_SEED";

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {key}: {value:?} is not an unsigned 64-bit integer")]
    InvalidSeed { key: &'static str, value: String },
}

/// Resolve configuration: defaults, then `SLOTLINE_SEED`, then `--seed`.
pub fn load_with_sources(cli_seed: Option<u64>) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.trim().is_empty()
    {
        cfg.seed = Some(
            seed.trim()
                .parse()
                .map_err(|_| ConfigError::InvalidSeed {
                    key: SEED_ENV,
                    value: seed.clone(),
                })?,
        );
        sources.seed = ValueSource::Env;
    }

    if let Some(seed) = cli_seed {
        cfg.seed = Some(seed);
        sources.seed = ValueSource::Cli;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}
