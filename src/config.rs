//! Runtime configuration.
//!
//! Built from `--flag value` command-line pairs, falling back to environment
//! variables, then to defaults.

use anyhow::Result;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_LATENCY_MS: u64 = 800;

pub const ENV_BIND: &str = "CONTACTS_BIND";
pub const ENV_DATA_DIR: &str = "CONTACTS_DATA_DIR";
pub const ENV_LATENCY_MS: &str = "CONTACTS_LATENCY_MS";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Where the file store lives. `None` keeps everything in memory.
    pub data_dir: Option<PathBuf>,
    /// Upper bound of the simulated network delay.
    pub max_latency: Duration,
}

impl Config {
    pub fn from_env_and_args() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_sources(&args, |name| std::env::var(name).ok())
    }

    /// Flags win over environment values, which win over defaults.
    pub fn from_sources<F>(args: &[String], env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut bind = env(ENV_BIND);
        let mut data_dir = env(ENV_DATA_DIR);
        let mut latency = env(ENV_LATENCY_MS);

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            let slot = match flag {
                "--bind" => &mut bind,
                "--data-dir" => &mut data_dir,
                "--latency-ms" => &mut latency,
                _ => {
                    return Err(anyhow::anyhow!("Unknown argument: {}", flag));
                }
            };
            let value = args
                .get(i + 1)
                .ok_or_else(|| anyhow::anyhow!("Missing value for {}", flag))?;
            *slot = Some(value.clone());
            i += 2;
        }

        let bind_addr = bind
            .as_deref()
            .unwrap_or(DEFAULT_BIND)
            .parse::<SocketAddr>()
            .map_err(|e| anyhow::anyhow!("Invalid bind address: {}", e))?;

        let latency_ms = match latency {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|e| anyhow::anyhow!("Invalid latency '{}': {}", raw, e))?,
            None => DEFAULT_LATENCY_MS,
        };

        Ok(Self {
            bind_addr,
            data_dir: data_dir.filter(|d| !d.is_empty()).map(PathBuf::from),
            max_latency: Duration::from_millis(latency_ms),
        })
    }
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {} [--bind <addr:port>] [--data-dir <path>] [--latency-ms <n>]\n\
         Environment: {}, {}, {}",
        program, ENV_BIND, ENV_DATA_DIR, ENV_LATENCY_MS
    )
}
