use crate::config::DEFAULT_CDSAPIRC_PATH;
use crate::core::loader::CredentialLoader;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "cds-client-util")]
#[command(about = "Initialize a CDS API client from a .cdsapirc file")]
pub struct CliConfig {
    #[arg(long, env = "CDSAPI_RC", default_value = DEFAULT_CDSAPIRC_PATH)]
    pub cdsapirc: PathBuf,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn loader(&self) -> CredentialLoader {
        CredentialLoader::new(Some(self.cdsapirc.clone()))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("cdsapirc", &self.cdsapirc.to_string_lossy())
    }
}
