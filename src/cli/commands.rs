//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// Confluent Cloud SDK CLI
#[derive(Parser, Debug)]
#[command(name = "ccloud-sdk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Cloud API key
    #[arg(
        long,
        global = true,
        env = "CONFLUENT_CLOUD_API_KEY",
        hide_env_values = true
    )]
    pub api_key: Option<String>,

    /// Cloud API secret
    #[arg(
        long,
        global = true,
        env = "CONFLUENT_CLOUD_API_SECRET",
        hide_env_values = true
    )]
    pub api_secret: Option<String>,

    /// Base URL of the management API
    #[arg(long, global = true, default_value = crate::config::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage service accounts
    #[command(subcommand)]
    ServiceAccount(ServiceAccountCommands),

    /// Manage API keys
    #[command(subcommand)]
    ApiKey(ApiKeyCommands),
}

/// Service account operations
#[derive(Subcommand, Debug)]
pub enum ServiceAccountCommands {
    /// List all service accounts
    List,

    /// Show one service account
    Show {
        /// Service account id (sa-xxxxx)
        id: String,
    },

    /// Create a service account
    Create {
        /// Display name
        display_name: String,

        /// Description (defaults to the title-cased display name)
        #[arg(long)]
        description: Option<String>,
    },

    /// Update the description of a service account
    Update {
        /// Service account id (sa-xxxxx)
        id: String,

        /// New description
        description: String,
    },

    /// Delete a service account
    Delete {
        /// Service account id (sa-xxxxx)
        id: String,
    },
}

/// API key operations
#[derive(Subcommand, Debug)]
pub enum ApiKeyCommands {
    /// List API keys, optionally for one owner
    List {
        /// Owner id to filter on (sa-xxxxx)
        #[arg(long)]
        owner: Option<String>,
    },

    /// Show one API key (never includes the secret)
    Show {
        /// API key id
        id: String,
    },

    /// Create an API key; prints the one-time secret
    Create {
        /// Owner id (sa-xxxxx)
        #[arg(long)]
        owner: String,

        /// Resource id the key grants access to (lkc-xxxxx)
        #[arg(long)]
        resource: String,

        /// Display name (defaults to owner::resource)
        #[arg(long)]
        display_name: Option<String>,

        /// Description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an API key
    Delete {
        /// API key id
        id: String,
    },
}
