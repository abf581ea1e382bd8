//! CLI runner - executes commands

use crate::cli::commands::{ApiKeyCommands, Cli, Commands, ServiceAccountCommands};
use crate::config::{ClientConfig, Credentials};
use crate::error::{Error, Result};
use crate::http::ConfluentClient;
use crate::iam::NewApiKey;
use serde::Serialize;
use serde_json::json;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = self.client()?;
        match &self.cli.command {
            Commands::ServiceAccount(command) => self.service_account(&client, command).await,
            Commands::ApiKey(command) => self.api_key(&client, command).await,
        }
    }

    fn client(&self) -> Result<ConfluentClient> {
        let api_key = self.cli.api_key.as_deref().ok_or_else(|| {
            Error::credentials("API key not provided (use --api-key or CONFLUENT_CLOUD_API_KEY)")
        })?;
        let api_secret = self.cli.api_secret.as_deref().ok_or_else(|| {
            Error::credentials(
                "API secret not provided (use --api-secret or CONFLUENT_CLOUD_API_SECRET)",
            )
        })?;

        let config = ClientConfig::builder()
            .base_url(&self.cli.base_url)
            .build();
        ConfluentClient::with_config(Credentials::new(api_key, api_secret)?, config)
    }

    async fn service_account(
        &self,
        client: &ConfluentClient,
        command: &ServiceAccountCommands,
    ) -> Result<()> {
        let api = client.service_accounts();
        match command {
            ServiceAccountCommands::List => {
                let accounts = api.list_all().await?;
                self.print_json(&accounts)
            }
            ServiceAccountCommands::Show { id } => {
                let account = api.get(id).await?;
                self.print_json(&account)
            }
            ServiceAccountCommands::Create {
                display_name,
                description,
            } => {
                let account = api.create(display_name, description.as_deref()).await?;
                self.print_json(&account)
            }
            ServiceAccountCommands::Update { id, description } => {
                let account = api.update(id, description).await?;
                self.print_json(&account)
            }
            ServiceAccountCommands::Delete { id } => {
                api.delete(id).await?;
                self.print_json(&json!({ "id": id, "deleted": true }))
            }
        }
    }

    async fn api_key(&self, client: &ConfluentClient, command: &ApiKeyCommands) -> Result<()> {
        let api = client.api_keys();
        match command {
            ApiKeyCommands::List { owner } => {
                let keys = api.list_all(owner.as_deref()).await?;
                self.print_json(&keys)
            }
            ApiKeyCommands::Show { id } => {
                let key = api.get(id).await?;
                self.print_json(&key)
            }
            ApiKeyCommands::Create {
                owner,
                resource,
                display_name,
                description,
            } => {
                let mut new_key = NewApiKey::new(owner, resource);
                if let Some(name) = display_name {
                    new_key = new_key.display_name(name);
                }
                if let Some(text) = description {
                    new_key = new_key.description(text);
                }
                let key = api.create(new_key).await?;
                self.print_json(&key)
            }
            ApiKeyCommands::Delete { id } => {
                api.delete(id).await?;
                self.print_json(&json!({ "id": id, "deleted": true }))
            }
        }
    }

    fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        let text = if self.cli.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        println!("{text}");
        Ok(())
    }
}
