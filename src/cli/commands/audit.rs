//! The audit command: resolve configuration and credentials, then run
//! the pipeline against the GitHub API.

use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::adapters::github::GitHubClient;
use crate::cli::types::Cli;
use crate::domain::errors::AuditResult;
use crate::domain::models::Classification;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::credentials;
use crate::services::AuditPipeline;

/// Run a complete audit, writing reports to the working directory.
pub async fn execute(cli: &Cli) -> Result<Classification> {
    Ok(run(cli).await?)
}

/// The audit with every failure expressed as an [`AuditError`](crate::domain::errors::AuditError).
pub async fn run(cli: &Cli) -> AuditResult<Classification> {
    debug!(started_at = %chrono::Local::now(), "[START] Command line argument processing and validation");
    let config = ConfigLoader::resolve(&cli.overrides())?;
    debug!("[END] Command line argument processing and validation");

    let token = credentials::resolve_token()?;
    let client = GitHubClient::from_env(token);
    debug!(api = %client.base_url(), "GitHub client ready");

    let pipeline = AuditPipeline::new(Arc::new(client), config, ".");
    let classification = pipeline.run().await?;

    debug!(finished_at = %chrono::Local::now(), "audit complete");
    Ok(classification)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::AuditError;
    use crate::infrastructure::config::ConfigError;
    use clap::Parser;

    #[tokio::test]
    async fn test_unreadable_config_is_a_config_error() {
        let cli = Cli::try_parse_from(["gpg-audit", "--config", "/nonexistent/gpg-audit.json"]).unwrap();

        let err = run(&cli).await.unwrap_err();

        assert!(matches!(
            err,
            AuditError::Config(ConfigError::UnreadableConfigFile { .. })
        ));
    }

    #[tokio::test]
    async fn test_config_error_keeps_its_message_through_anyhow() {
        let cli = Cli::try_parse_from(["gpg-audit", "--config", "/nonexistent/gpg-audit.json"]).unwrap();

        let err = execute(&cli).await.unwrap_err();

        assert!(err.to_string().contains("/nonexistent/gpg-audit.json"));
        assert!(err.downcast_ref::<AuditError>().is_some());
    }
}
