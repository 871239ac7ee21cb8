use crate::app::AnalysisView;
use crate::args::Cli;
use crate::config::Config;
use crate::logging;
use crate::presentation::renderers::TuiRenderer;
use anyhow::{Context, Result};
use sentra_client::AnalysisClient;

/// Resolve configuration, build the client, then hand the terminal to the UI.
///
/// Everything that can fail because of bad input fails here, before the
/// terminal is switched into raw mode.
pub async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_cli(&cli);
    config.validate()?;

    let client =
        AnalysisClient::new(config.client_config()).context("invalid service configuration")?;

    logging::init(&config.log_file(), config.logging.level)?;
    tracing::info!(endpoint = %client.url(), "starting sentra");

    let endpoint = client.url().to_string();
    let view = AnalysisView::new(client, endpoint);
    TuiRenderer::new(view).run().await
}
