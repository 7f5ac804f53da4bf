//! `vendorfront` CLI: vendor profile and catalog product management.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use vendorfront_catalog::{DraftSession, assemble, submit, upload_batch};
use vendorfront_client::config::{API_BASE_URL_VAR, API_TOKEN_VAR, HTTP_TIMEOUT_VAR};
use vendorfront_client::draft_file::{PendingUploads, read_upload_files};
use vendorfront_client::render::{product_list_text, profile_text};
use vendorfront_client::{ApiClient, ClientConfig, DraftFile};
use vendorfront_core::VendorId;

#[derive(Parser)]
#[command(name = "vendorfront")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API base URL (falls back to VENDORFRONT_API_BASE_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Bearer token (falls back to VENDORFRONT_API_TOKEN)
    #[arg(long)]
    token: Option<String>,

    /// Request timeout in seconds (falls back to VENDORFRONT_HTTP_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Vendor store profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Catalog products
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Print the current vendor profile
    Show {
        /// Print the raw JSON profile
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List a vendor's products
    List {
        #[arg(long)]
        vendor: String,
        /// Print the raw JSON list
        #[arg(long)]
        json: bool,
    },
    /// Upload images, assemble and create a product from a draft file
    Create { draft: PathBuf },
    /// Print the payload a draft file would submit, without sending it
    Preview { draft: PathBuf },
}

impl Cli {
    fn config(&self) -> Result<ClientConfig> {
        let from_flags = |key: &str| match key {
            API_BASE_URL_VAR => self.api_url.clone(),
            API_TOKEN_VAR => self.token.clone(),
            HTTP_TIMEOUT_VAR => self.timeout_secs.map(|s| s.to_string()),
            _ => None,
        };
        let config =
            ClientConfig::from_lookup(|key| from_flags(key).or_else(|| std::env::var(key).ok()))?;
        Ok(config)
    }

    fn client(&self) -> Result<ApiClient> {
        Ok(ApiClient::new(&self.config()?)?)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    vendorfront_observability::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Profile {
            action: ProfileAction::Show { json },
        } => {
            let profile = cli.client()?.fetch_vendor_profile().await?;
            if *json {
                print_json(&profile)?;
            } else {
                println!("{}", profile_text(&profile));
            }
        }
        Commands::Products { action } => match action {
            ProductAction::List { vendor, json } => {
                let vendor: VendorId = vendor.parse()?;
                let products = cli.client()?.fetch_products(&vendor).await?;
                if *json {
                    print_json(&products)?;
                } else {
                    println!("{}", product_list_text(&products));
                }
            }
            ProductAction::Preview { draft } => {
                let (session, _) = load_draft(draft)?;
                print_json(&assemble(&session)?)?;
            }
            ProductAction::Create { draft } => {
                let client = cli.client()?;
                let (mut session, pending) = load_draft(draft)?;

                for batch in pending {
                    let files = read_upload_files(&batch.paths)?;
                    let count = upload_batch(&mut session, batch.draft_id, &files, &client)
                        .await
                        .context("image upload failed")?;
                    tracing::info!(draft_id = %batch.draft_id, count, "images uploaded");
                }

                let created = submit(&mut session, &client)
                    .await
                    .context("product creation failed")?;
                print_json(&created)?;
            }
        },
    }

    Ok(())
}

fn load_draft(path: &Path) -> Result<(DraftSession, Vec<PendingUploads>)> {
    let root = path.parent().unwrap_or_else(|| Path::new("."));
    let file = DraftFile::load(path)?;
    Ok(file.into_session(root)?)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
