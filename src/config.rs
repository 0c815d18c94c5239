use {
    serde::Deserialize,
    std::time::Duration,
    thiserror::Error,
};

pub const DEFAULT_RESET_KEY: &str = "C-g";
pub const DEFAULT_CHAIN_TIMEOUT: Duration = Duration::from_millis(5000);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not parse the bindings configuration")]
    Parse(#[source] toml::de::Error),
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct BindingsConfig {
    /// The chord that aborts a partially entered key chain.
    pub reset_key: String,
    /// How long a partially entered key chain stays active without input.
    pub chain_timeout_ms: u64,
}

impl Default for BindingsConfig {
    fn default() -> Self {
        Self {
            reset_key: DEFAULT_RESET_KEY.to_string(),
            chain_timeout_ms: DEFAULT_CHAIN_TIMEOUT.as_millis() as u64,
        }
    }
}

impl BindingsConfig {
    pub fn chain_timeout(&self) -> Duration {
        Duration::from_millis(self.chain_timeout_ms)
    }
}

pub fn parse_config(input: &str) -> Result<BindingsConfig, ConfigError> {
    toml::from_str(input).map_err(ConfigError::Parse)
}
