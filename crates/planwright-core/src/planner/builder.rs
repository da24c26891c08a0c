//! Builder for creating and configuring Planner instances.

use std::sync::Arc;

use log::{debug, info};

use super::Planner;
use crate::{
    config::LlmConfig,
    error::{PlannerError, Result},
    llm::{CompletionClient, create_client},
    parser::{ResponseGrammar, default_grammars},
};

/// Builder for creating and configuring Planner instances.
#[derive(Default)]
pub struct PlannerBuilder {
    config: Option<LlmConfig>,
    client: Option<Arc<dyn CompletionClient>>,
    grammars: Option<Vec<Box<dyn ResponseGrammar>>>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the model configuration used to create the HTTP client.
    ///
    /// If not specified, [`LlmConfig::default`] is used, which carries no
    /// credential.
    pub fn with_config(mut self, config: LlmConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Uses the given completion client instead of creating one from the
    /// configuration.
    pub fn with_client(mut self, client: Arc<dyn CompletionClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Replaces the reply grammars tried by the parser.
    pub fn with_grammars(mut self, grammars: Vec<Box<dyn ResponseGrammar>>) -> Self {
        self.grammars = Some(grammars);
        self
    }

    /// Builds the configured planner instance.
    ///
    /// A configuration without a credential is not an error: the planner is
    /// built without a client and every generation degrades to the fallback
    /// plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` if the HTTP client cannot be
    /// created.
    pub fn build(self) -> Result<Planner> {
        let client = match self.client {
            Some(client) => Some(client),
            None => {
                let config = self.config.unwrap_or_default();
                if config.has_credential() {
                    let client = create_client(&config).map_err(|e| {
                        PlannerError::configuration(format!("failed to create model client: {e}"))
                    })?;
                    debug!("build: using model {} at {}", config.model, config.base_url);
                    Some(client)
                } else {
                    info!("build: no API key configured, plans will use the fallback breakdown");
                    None
                }
            }
        };

        let grammars = self.grammars.unwrap_or_else(default_grammars);
        Ok(Planner::new(client, grammars))
    }
}
