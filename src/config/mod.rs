use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "country-preview")]
#[command(about = "Serves enriched country records joined from static reference data")]
pub struct CliConfig {
    /// Directory holding the five reference JSON files
    #[arg(long, default_value = "./ref")]
    pub ref_path: String,

    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, default_value = "8000")]
    pub port: u16,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn ref_path(&self) -> &str {
        &self.ref_path
    }

    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("ref_path", &self.ref_path)?;
        validate_non_empty_string("host", &self.host)?;
        Ok(())
    }
}
