//! CLI administration tool for qr-fire.
//!
//! Registers and inspects slugs and runs database diagnostics without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Register a slug (prompts for missing values)
//! cargo run --bin admin -- slug create --slug "Wow Doge" --url https://example.com
//!
//! # Show where a slug redirects
//! cargo run --bin admin -- slug resolve wow-doge
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`qr_fire::config`].

use qr_fire::application::services::{Outcome, RedirectResolver, RegistrationError, SlugRegistry};
use qr_fire::config::{self, Config};
use qr_fire::domain::entities::SlugCandidate;
use qr_fire::server::build_store;
use qr_fire::utils::public_url::build_public_url;
use qr_fire::utils::slug::sanitize_slug;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};

/// CLI tool for managing qr-fire.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage slugs
    Slug {
        #[command(subcommand)]
        action: SlugAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Slug subcommands.
#[derive(Subcommand)]
enum SlugAction {
    /// Register a new slug
    Create {
        /// Slug, sanitized before registration (e.g. "Wow Doge" becomes "wow-doge")
        #[arg(short, long)]
        slug: Option<String>,

        /// Destination URL
        #[arg(short, long)]
        url: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show where a slug redirects
    Resolve {
        /// Slug, looked up exactly as given
        slug: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check store connection
    Check,

    /// Show store info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Slug { action } => handle_slug_action(action, &config).await?,
        Commands::Db { action } => handle_db_action(action, &config).await?,
    }

    Ok(())
}

/// Dispatches slug commands.
async fn handle_slug_action(action: SlugAction, config: &Config) -> Result<()> {
    match action {
        SlugAction::Create { slug, url, yes } => create_slug(config, slug, url, yes).await,
        SlugAction::Resolve { slug } => resolve_slug(config, &slug).await,
    }
}

/// Registers a slug with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for slug and URL (or use provided)
/// 2. Sanitize the slug and show the result
/// 3. Confirm (unless `--yes`)
/// 4. Register through [`SlugRegistry`]
async fn create_slug(
    config: &Config,
    slug: Option<String>,
    url: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔥 Register Slug".bright_blue().bold());
    println!();

    let raw_slug = match slug {
        Some(s) => s,
        None => Input::new().with_prompt("Slug").interact_text()?,
    };
    let destination = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Destination URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    let slug = sanitize_slug(&raw_slug);
    if slug != raw_slug {
        println!("{} {} → {}", "✨ Sanitized".green(), raw_slug, slug.cyan());
    }

    println!();
    println!("{}", "Slug details:".bright_white().bold());
    println!("  Slug:      {}", slug.cyan());
    println!("  URL:       {}", destination.bright_yellow());
    println!(
        "  Short URL: {}",
        build_public_url(&config.public_origin, Some(&slug)).bright_white()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Register this slug?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let registry = SlugRegistry::new(build_store(config).await?);

    match registry
        .create(SlugCandidate::new(slug.clone(), destination))
        .await
    {
        Ok(id) => {
            println!("{}", "✅ Slug registered!".green().bold());
            println!("  ID: {}", id.to_string().bright_black());
            println!();
            Ok(())
        }
        Err(RegistrationError::DuplicateSlug(_)) => {
            println!("{}", "⚠️  This slug is already taken".yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to register slug: {}", e)),
    }
}

/// Resolves a slug exactly as the redirect endpoint would.
async fn resolve_slug(config: &Config, slug: &str) -> Result<()> {
    let resolver = RedirectResolver::new(build_store(config).await?);

    match resolver
        .resolve(slug)
        .await
        .map_err(|e| anyhow::anyhow!("Store error: {}", e))?
    {
        Outcome::Redirect(url) => {
            println!("  {} → {}", slug.cyan(), url.bright_yellow());
        }
        Outcome::NotFound => {
            println!("{}", format!("  '{}' not found", slug).yellow());
        }
    }

    Ok(())
}

/// Handles store diagnostic commands.
async fn handle_db_action(action: DbAction, config: &Config) -> Result<()> {
    let store = build_store(config).await?;

    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking store connection...".bright_blue());

            store
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Store check failed: {}", e))?;

            println!("{}", "✅ Store connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Store Information".bright_blue().bold());
            println!();

            let count = store
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count slugs: {}", e))?;

            println!("  Backend: {}", config.store_backend.to_string().bright_white());
            println!("  Slugs:   {}", count.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
