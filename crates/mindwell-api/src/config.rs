use std::env;
use std::net::SocketAddr;

use mindwell_support::language::Language;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Service configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Companion language when a request does not name one.
    pub default_language: Language,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind_addr = lookup("MINDWELL_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .map_err(|e| eyre::eyre!("invalid MINDWELL_BIND_ADDR '{bind_addr}': {e}"))?;

        let default_language = match lookup("MINDWELL_DEFAULT_LANGUAGE") {
            Some(code) => code
                .parse()
                .map_err(|e| eyre::eyre!("invalid MINDWELL_DEFAULT_LANGUAGE: {e}"))?,
            None => Language::default(),
        };

        Ok(Self {
            bind_addr,
            default_language,
        })
    }
}
