use std::env;
use std::net::{IpAddr, SocketAddr};

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("SENTIR_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("SENTIR_PORT").unwrap_or_else(|| "8000".to_string());

        Ok(Config {
            host: host
                .parse()
                .with_context(|| format!("invalid SENTIR_HOST '{host}'"))?,
            port: port
                .parse()
                .with_context(|| format!("invalid SENTIR_PORT '{port}'"))?,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
