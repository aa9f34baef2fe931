use crate::configuration::Configuration;
use clap::Parser;

/// Runtime settings, taken from the command line with environment-variable
/// fallbacks. `main` loads `.env` before parsing, so entries there count as
/// environment variables too.
#[derive(Debug, Clone, Parser)]
#[command(about = "HTTP service that books service appointments")]
pub struct ConfigurationHandler {
    /// Shared secret callers must present in the x-api-key header
    #[arg(long, env = "API_KEY")]
    api_key: String,

    /// Port the server listens on
    #[arg(long, env = "PORT", default_value = "3000")]
    port: String,

    /// PostgreSQL connection string. When absent, bookings live in process
    /// memory and are lost on restart
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

impl ConfigurationHandler {
    pub fn parse_arguments() -> Self {
        Self::parse()
    }
}

impl Configuration for ConfigurationHandler {
    fn api_key(&self) -> String {
        self.api_key.clone()
    }

    fn port(&self) -> String {
        self.port.clone()
    }

    fn database_url(&self) -> Option<String> {
        self.database_url.clone()
    }
}
