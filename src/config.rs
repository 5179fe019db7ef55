use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Read HOST/PORT from the environment, falling back to the service's
    /// well-known port when PORT is unset.
    pub fn from_env(default_port: u16) -> anyhow::Result<Self> {
        Self::from_vars(
            std::env::var("HOST").ok(),
            std::env::var("PORT").ok(),
            default_port,
        )
    }

    fn from_vars(
        host: Option<String>,
        port: Option<String>,
        default_port: u16,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            host: host.unwrap_or_else(|| "127.0.0.1".to_string()),
            port: match port {
                Some(raw) => raw.parse().context("PORT must be a valid number")?,
                None => default_port,
            },
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
