//! Connection settings shared by every command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use directories::ProjectDirs;

use poweroffice_api::{ApiClient, ReqwestTransport};
use poweroffice_core::{Credentials, Endpoints, Mode, Session};
use poweroffice_file::FileStore;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Application key issued to the integration
    #[arg(long, env = "POWEROFFICE_APPLICATION_KEY", hide_env_values = true, global = true)]
    pub application_key: Option<String>,

    /// Client key issued by the PowerOffice customer
    #[arg(long, env = "POWEROFFICE_CLIENT_KEY", hide_env_values = true, global = true)]
    pub client_key: Option<String>,

    /// Use the demo environment instead of production
    #[arg(
        long,
        env = "POWEROFFICE_TEST_MODE",
        default_value_t = true,
        action = clap::ArgAction::Set,
        value_parser = clap::builder::BoolishValueParser::new(),
        global = true
    )]
    pub test_mode: bool,

    /// Session file (defaults to the platform data directory)
    #[arg(long, env = "POWEROFFICE_STORE_PATH", global = true)]
    pub store_path: Option<PathBuf>,

    /// Override the auth host (requires --api-url)
    #[arg(long, env = "POWEROFFICE_AUTH_URL", requires = "api_url", global = true)]
    pub auth_url: Option<String>,

    /// Override the API host (requires --auth-url)
    #[arg(long, env = "POWEROFFICE_API_URL", requires = "auth_url", global = true)]
    pub api_url: Option<String>,
}

impl ConfigArgs {
    pub fn store_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.store_path {
            return Ok(path.clone());
        }

        let dirs = ProjectDirs::from("", "", "poweroffice")
            .context("Could not determine data directory")?;
        Ok(dirs.data_dir().join("session.json"))
    }

    pub fn endpoints(&self) -> Result<Endpoints> {
        match (&self.auth_url, &self.api_url) {
            (Some(auth), Some(api)) => {
                Endpoints::custom(auth, api).context("Invalid endpoint override")
            }
            _ => Ok(Endpoints::for_mode(Mode::from_test_flag(self.test_mode))),
        }
    }

    /// Credentials are only needed for grants; other commands run without.
    pub fn credentials(&self) -> Result<Credentials> {
        let application_key = self
            .application_key
            .clone()
            .context("Missing application key. Set POWEROFFICE_APPLICATION_KEY or pass --application-key.")?;
        let client_key = self
            .client_key
            .clone()
            .context("Missing client key. Set POWEROFFICE_CLIENT_KEY or pass --client-key.")?;

        Ok(Credentials::new(application_key, client_key))
    }

    pub fn session(&self) -> Result<Session> {
        Ok(Session::new(FileStore::new(self.store_path()?)))
    }

    /// Build a client that can run grants.
    pub fn client(&self) -> Result<ApiClient> {
        self.build_client(self.credentials()?)
    }

    /// Build a client for commands that only use the stored session.
    ///
    /// Missing keys are tolerated; any grant attempted through this client
    /// is rejected by the token endpoint.
    pub fn session_client(&self) -> Result<ApiClient> {
        let credentials = self
            .credentials()
            .unwrap_or_else(|_| Credentials::new("", ""));
        self.build_client(credentials)
    }

    pub fn has_credentials(&self) -> bool {
        self.application_key.is_some() && self.client_key.is_some()
    }

    fn build_client(&self, credentials: Credentials) -> Result<ApiClient> {
        Ok(ApiClient::with_endpoints(
            ReqwestTransport::new(),
            self.session()?,
            credentials,
            self.endpoints()?,
        ))
    }
}
