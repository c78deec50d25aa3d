use std::path::PathBuf;

use structopt::StructOpt;

use crate::engine::DelayConfig;
use crate::error::ConfigError;

/// Process settings. Every flag can also come from the environment (and
/// thus from `.env`).
#[derive(Debug, Clone, StructOpt)]
#[structopt(name = "cpn-emulator", about = "CPN order service emulator")]
pub struct Settings {
    /// HTTP listen port
    #[structopt(long, env = "EMULATOR_PORT", default_value = "8080")]
    pub port: u16,

    /// Minimum response delay in milliseconds
    #[structopt(long, env = "EMULATOR_DELAY_MIN", default_value = "100")]
    pub min_delay: i64,

    /// Maximum response delay in milliseconds (at most 10000)
    #[structopt(long, env = "EMULATOR_DELAY_MAX", default_value = "500")]
    pub max_delay: i64,

    /// JSON file with the coupon catalog
    #[structopt(
        long,
        env = "EMULATOR_CATALOG",
        default_value = "resources/cpn-list.json",
        parse(from_os_str)
    )]
    pub catalog: PathBuf,
}

impl Settings {
    pub fn delay(&self) -> Result<DelayConfig, ConfigError> {
        DelayConfig::new(self.min_delay, self.max_delay)
    }
}
