//! The configuration structs used to build the AppConfig, and their impls.
use std::{net::SocketAddr, path::PathBuf};

use serde::Deserialize;
use strum_macros::AsRefStr;

use crate::config::ConfigError;
use crate::model::CapacityPolicy;

// ###################################
// ->   STRUCTS
// ###################################
#[derive(AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub net_config: NetConfig,
    #[serde(default)]
    pub roster_config: RosterConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct NetConfig {
    pub host: [u8; 4],
    pub app_port: u16,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct RosterConfig {
    /// Seed roster to load instead of the built-in one.
    pub seed_file: Option<PathBuf>,
    #[serde(default)]
    pub capacity_policy: CapacityPolicy,
}

// ###################################
// ->   IMPLs
// ###################################
impl NetConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.app_port))
    }
}

// ###################################
// ->   TRY FROMs
// ###################################
impl TryFrom<String> for Environment {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            _ => Err(Self::Error::StringToEnvironmentFail(value)),
        }
    }
}
