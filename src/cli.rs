//! # SALONCTL CLI
//!
//! Command-line interface for the salon booking backend and the site's route table.
//!
//! ## Usage
//!
//! ```bash
//! # List salons matching a filter
//! salonctl salons list --filter status=active
//!
//! # Block a time slot
//! salonctl slots block 42 --reason "staff meeting"
//!
//! # Block every slot in a range
//! salonctl slots block-range --data '{"start":"2026-10-20T09:00:00","end":"2026-10-20T12:00:00"}'
//!
//! # Walk the site's routes and show where the viewport lands
//! salonctl navigate / /about /contact
//! ```
//!
//! The backend location comes from `SALON_API_BASE_URL` (a `.env` file in the
//! working directory is honored) or `--base-url`.

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use paths::Operation;
use salon_booking_client::config::load_config;
use salon_booking_client::observability::{logging, metrics};
use salon_booking_client::router::{app_routes, Navigator, ScrollPosition};
use salon_booking_client::{QueryParams, SalonApi};
use serde_json::Value;
use tracing::debug;

/// Salon booking backend CLI
#[derive(Parser)]
#[command(name = "salonctl")]
#[command(about = "Salon booking backend CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Backend base URL (overrides SALON_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Print Prometheus metrics after the command completes
    #[arg(long, global = true)]
    print_metrics: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Salon operations
    Salons {
        #[command(subcommand)]
        command: SalonCommands,
    },
    /// Time slot operations
    Slots {
        #[command(subcommand)]
        command: SlotCommands,
    },
    /// Show every backend operation with its method and path
    Operations,
    /// Show the site's route table
    Routes,
    /// Navigate through site paths in order and report view and scroll position
    Navigate {
        /// Paths to visit, e.g. `/ /about`; `back` and `forward` walk history
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

#[derive(Subcommand)]
enum SalonCommands {
    /// List salons
    List {
        /// Filter as key=value, repeatable
        #[arg(short, long = "filter", value_parser = parse_filter)]
        filters: Vec<(String, String)>,
    },
    /// Show one salon
    Get { id: String },
    /// Create a salon from a JSON representation
    Create {
        #[arg(short, long, value_parser = parse_json)]
        data: Value,
    },
    /// Replace a salon with a complete JSON representation
    Update {
        id: String,
        #[arg(short, long, value_parser = parse_json)]
        data: Value,
    },
    /// Delete a salon
    Delete { id: String },
}

#[derive(Subcommand)]
enum SlotCommands {
    /// List time slots
    List {
        /// Filter as key=value, repeatable
        #[arg(short, long = "filter", value_parser = parse_filter)]
        filters: Vec<(String, String)>,
    },
    /// Generate time slots on the server
    Generate {
        #[arg(short, long, value_parser = parse_json)]
        data: Value,
    },
    /// Block one time slot
    Block {
        id: String,
        #[arg(short, long)]
        reason: String,
    },
    /// Unblock one time slot
    Unblock { id: String },
    /// Block every slot in a date/time range
    BlockRange {
        #[arg(short, long, value_parser = parse_json)]
        data: Value,
    },
    /// Unblock every slot in a date/time range
    UnblockRange {
        #[arg(short, long, value_parser = parse_json)]
        data: Value,
    },
}

fn parse_filter(raw: &str) -> Result<(String, String)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("filter must be key=value, got {raw}"))?;
    Ok((key.to_string(), value.to_string()))
}

fn parse_json(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).context("--data must be valid JSON")
}

fn print_json(value: &Value) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to render response")?
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Configure rustls crypto provider FIRST, before any client is built
    // Fails only if a provider is already installed, which is fine
    let provider_installed = rustls::crypto::ring::default_provider()
        .install_default()
        .is_ok();

    let dotenv = dotenvy::dotenv();
    logging::init_tracing();
    debug!(
        "rustls provider installed: {}, .env loaded: {}",
        provider_installed,
        dotenv.is_ok()
    );

    let cli = Cli::parse();
    metrics::register_metrics()?;

    let mut config = load_config();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    match cli.command {
        Commands::Salons { command } => {
            let api = SalonApi::from_config(&config)?;
            run_salon_command(&api, command).await?;
        }
        Commands::Slots { command } => {
            let api = SalonApi::from_config(&config)?;
            run_slot_command(&api, command).await?;
        }
        Commands::Operations => {
            for operation in Operation::ALL {
                println!(
                    "{:<34} {:<7} {}",
                    operation.name(),
                    operation.method().as_str(),
                    operation.route_template()
                );
            }
        }
        Commands::Routes => {
            let table = app_routes()?;
            for entry in table.entries() {
                println!("{:<12} {}", entry.path(), entry.name());
            }
        }
        Commands::Navigate { paths } => navigate(&paths).await?,
    }

    if cli.print_metrics {
        print!("{}", metrics::gather_metrics()?);
    }
    Ok(())
}

async fn run_salon_command(api: &SalonApi, command: SalonCommands) -> Result<()> {
    let salons = api.salons();
    match command {
        SalonCommands::List { filters } => {
            let params: QueryParams = filters.into_iter().collect();
            print_json(&salons.get_salons(&params).await?)?;
        }
        SalonCommands::Get { id } => print_json(&salons.get_salon(id).await?)?,
        SalonCommands::Create { data } => print_json(&salons.create_salon(&data).await?)?,
        SalonCommands::Update { id, data } => {
            print_json(&salons.update_salon(id, &data).await?)?;
        }
        SalonCommands::Delete { id } => {
            salons.delete_salon(id.as_str()).await?;
            println!("Deleted salon {id}");
        }
    }
    Ok(())
}

async fn run_slot_command(api: &SalonApi, command: SlotCommands) -> Result<()> {
    let slots = api.time_slots();
    let response = match command {
        SlotCommands::List { filters } => {
            let params: QueryParams = filters.into_iter().collect();
            slots.get_time_slots(&params).await?
        }
        SlotCommands::Generate { data } => slots.generate_time_slots(&data).await?,
        SlotCommands::Block { id, reason } => slots.block_time_slot(id, &reason).await?,
        SlotCommands::Unblock { id } => slots.unblock_time_slot(id).await?,
        SlotCommands::BlockRange { data } => slots.block_time_range(&data).await?,
        SlotCommands::UnblockRange { data } => slots.unblock_time_range(&data).await?,
    };
    print_json(&response)
}

async fn navigate(paths: &[String]) -> Result<()> {
    let mut navigator = Navigator::new(Arc::new(app_routes()?));
    // Simulated viewport: each page is scrolled a little before leaving it
    let mut viewport = ScrollPosition::TOP;

    for step in paths {
        let leaving = ScrollPosition::new(0.0, viewport.top + 120.0);
        let navigation = match step.as_str() {
            "back" => navigator.back(leaving).await?,
            "forward" => navigator.forward(leaving).await?,
            path => Some(navigator.push(path, leaving).await?),
        };
        match navigation {
            Some(navigation) => {
                viewport = navigation.scroll;
                println!(
                    "{:<10} -> {:<10} {:<12} scroll=({}, {})",
                    step,
                    navigation.route,
                    navigation.view.title,
                    navigation.scroll.left,
                    navigation.scroll.top
                );
            }
            None => println!("{step:<10} -> (no history entry)"),
        }
    }
    Ok(())
}
