//! # dnsrec
//!
//! Loads the static records declared in a config file into a record
//! collection and prints them grouped by owner name.

mod bootstrap;

use clap::Parser;
use dnsrec_domain::{RecordCollection, ResourceRecord};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "dnsrec")]
#[command(version)]
#[command(about = "Inspect statically configured DNS records")]
struct Cli {
    /// Path to the TOML config file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    /// Only show records owned by this name
    #[arg(short = 'n', long)]
    name: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.log_level)?;
    bootstrap::init_logging(&config.logging);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        records = config.records.len(),
        default_domain = config.default_domain.as_deref().unwrap_or("-"),
        "Configuration loaded"
    );

    let collection = config.build_collection()?;
    info!(
        records = collection.len(),
        names = collection.names().count(),
        "Record collection built"
    );

    match cli.name {
        Some(name) => print_name(&collection, &name),
        None => {
            let mut names = collection.get_names();
            names.sort();
            for name in &names {
                print_name(&collection, name);
            }
        }
    }

    Ok(())
}

fn print_name(collection: &RecordCollection<ResourceRecord>, name: &str) {
    let records = collection.records_by_name(name);
    if records.is_empty() {
        warn!(name, "No records found");
        return;
    }

    println!("{}", name.to_lowercase());
    for record in records {
        let record = record.borrow();
        let address = record.address.as_ref().map(|a| a.as_str()).unwrap_or("-");
        println!(
            "  {:<6} {:>6}  {}",
            record.record_type.as_str(),
            record.ttl,
            address
        );
    }
}
