use crate::args::Cli;
use crate::config::ScannerConfig;
use crate::server::run_server;
use clap::Parser;
use tracing::info;

pub struct Application {
    config: ScannerConfig,
}

impl Application {
    /// Parse the command line (with env fallbacks) into a validated config.
    pub fn init() -> anyhow::Result<Application> {
        let cli = Cli::parse();
        let config = ScannerConfig::setup(cli)?;
        Ok(Application { config })
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    pub async fn run(self) -> anyhow::Result<()> {
        info!("Starting DEX scanner");
        info!("  Listen: {}", self.config.listen_addr);
        info!("  Quote API: {}", self.config.quote_api_url);
        info!("  Slippage: {}bps", self.config.slippage_bps);
        info!("  Timeout: {:?}", self.config.timeout);
        info!("  Price scale: {:?}", self.config.scale);
        run_server(self.config).await
    }
}
