use clap::Parser;

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "pawlog", version, about = "Pet activity tracker API", long_about = None)]
pub struct Cli {
    /// Config file path (YAML, TOML or JSON; optional)
    #[arg(short, long, default_value = "config.yaml")]
    pub config: String,

    /// Override the listen address
    #[arg(long)]
    pub host: Option<String>,

    /// Override the listen port (takes precedence over PORT)
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl Cli {
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(ref host) = self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}
