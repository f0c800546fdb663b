// Application state shared by every handler and middleware

use std::sync::Arc;
use crate::api::middleware::auth::{Authenticator, PassThrough, StaticTokenAuthenticator};
use crate::config::environment::EnvironmentVariables;

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub authenticator: Arc<dyn Authenticator>,
}

impl AppState {
    /// Builds state from a loaded configuration, picking the authenticator it asks for
    pub fn new(environment: EnvironmentVariables) -> Self {
        let authenticator: Arc<dyn Authenticator> = match &environment.auth_token {
            Some(token) => Arc::new(StaticTokenAuthenticator::new(token.clone())),
            None => Arc::new(PassThrough),
        };

        Self {
            environment: Arc::new(environment),
            authenticator,
        }
    }

    /// Loads configuration from the process environment and `.env`
    pub fn from_env() -> anyhow::Result<Self> {
        let environment: EnvironmentVariables = EnvironmentVariables::load()?;
        Ok(Self::new(environment))
    }

    /// Replaces the authenticator without touching route registration
    pub fn with_authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = authenticator;
        self
    }
}
