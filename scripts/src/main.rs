use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use scripts::{
    cli::Cli,
    deploy::{run, ArtifactDeployer},
    errors::ScriptError,
    output_writer::write_deployment_summary,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file
    dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .pretty()
        .with_writer(std::io::stderr)
        .init();

    match deploy_contracts(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Deployment failed: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Deploy all the contracts
async fn deploy_contracts(cli: Cli) -> Result<(), ScriptError> {
    let config = cli.into_config()?;
    info!("Deploying contracts with {config:?}");

    let deployer = ArtifactDeployer::from_config(&config)?;
    let summary = run(&deployer, config.gas_limit).await?;
    info!(
        "Deployed with success, Vault: {}, Factory: {}",
        summary.vault, summary.factory
    );

    if let Some(output) = &config.output {
        write_deployment_summary(output, &summary)?;
        info!("Wrote deployed addresses to {}", output.display());
    }

    Ok(())
}
