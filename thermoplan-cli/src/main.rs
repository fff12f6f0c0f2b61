//! thermoplan data pack inspector.
//!
//! Opens a pack file and prints what is inside:
//!   thermoplan info base.pack
//!   thermoplan ls base.pack fuels
//!   thermoplan show base.pack fuels f1
//!
//! The harness is read-only; packs are never modified.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use thermoplan_model::ModelType;
use thermoplan_pack::DataPack;

#[derive(Parser, Debug)]
#[command(name = "thermoplan")]
#[command(about = "Inspect thermoplan data packs")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show per-category document counts
    Info {
        pack: PathBuf,
        /// Print a machine-readable JSON summary
        #[arg(long)]
        json: bool,
    },
    /// List document ids in a category
    Ls { pack: PathBuf, category: String },
    /// Print a single document
    Show {
        pack: PathBuf,
        category: String,
        id: String,
    },
}

#[derive(Serialize)]
struct PackSummary {
    entries: usize,
    categories: Vec<CategoryCount>,
}

#[derive(Serialize)]
struct CategoryCount {
    category: String,
    documents: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    match args.command {
        Command::Info { pack, json } => info(&pack, json),
        Command::Ls { pack, category } => ls(&pack, &category),
        Command::Show { pack, category, id } => show(&pack, &category, &id),
    }
}

fn open_pack(path: &Path) -> Result<DataPack> {
    DataPack::load(path).with_context(|| format!("cannot open pack {}", path.display()))
}

fn parse_category(name: &str) -> Result<ModelType> {
    match ModelType::from_dir(name) {
        Some(category) => Ok(category),
        None => {
            let known: Vec<&str> = ModelType::ALL.iter().map(|t| t.dir()).collect();
            bail!("unknown category {name:?}; known: {}", known.join(", "))
        }
    }
}

fn info(path: &Path, json: bool) -> Result<()> {
    let pack = open_pack(path)?;
    let summary = PackSummary {
        entries: pack.len(),
        categories: ModelType::ALL
            .iter()
            .map(|category| CategoryCount {
                category: category.dir().to_string(),
                documents: pack.ids(*category).len(),
            })
            .filter(|c| c.documents > 0)
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{} ({} entries)", path.display(), summary.entries);
        for count in &summary.categories {
            println!("  {:<20} {}", count.category, count.documents);
        }
    }
    Ok(())
}

fn ls(path: &Path, category: &str) -> Result<()> {
    let category = parse_category(category)?;
    let pack = open_pack(path)?;
    let mut ids = pack.ids(category);
    ids.sort();
    for id in ids {
        // A document's display name, when it has one.
        match pack.read(category, &id).and_then(|doc| {
            doc.get("name").and_then(Value::as_str).map(str::to_string)
        }) {
            Some(name) => println!("{id}  {name}"),
            None => println!("{id}"),
        }
    }
    Ok(())
}

fn show(path: &Path, category: &str, id: &str) -> Result<()> {
    let category = parse_category(category)?;
    let pack = open_pack(path)?;
    match pack.read(category, id) {
        Some(doc) => {
            println!("{}", serde_json::to_string_pretty(&Value::Object(doc))?);
            Ok(())
        }
        None => bail!("no document at {}/{id}", category.dir()),
    }
}
