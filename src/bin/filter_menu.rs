use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use hall_risk::config::Tables;
use hall_risk::data::exclusion::{partition, Partition};
use hall_risk::data::loader::{filtered_sibling, load_items, write_json};

/// Exit status for any fatal filtering error.
const EXIT_FAILURE: u8 = 2;

/// How many removed item names to list.
const REMOVED_PREVIEW: usize = 20;

/// Drop cereals, sauces/condiments and pickles from a menu item JSON array.
#[derive(Parser)]
#[command(name = "filter_menu")]
struct Args {
    /// Menu items JSON produced by `import_menu`.
    #[arg(long, short, default_value = "menuItems.json")]
    input: PathBuf,

    /// Output path [default: `<input stem>.filtered.json` next to the input].
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// JSON file overriding the built-in keyword tables.
    #[arg(long)]
    tables: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error filtering menu items: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let tables = Tables::load(args.tables.as_deref())?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| filtered_sibling(&args.input));

    let items = load_items(&args.input)?;
    let result = partition(items, &tables.exclusion_terms);
    write_json(&output, &result.kept)?;

    report(&result, &output);
    Ok(())
}

fn report(result: &Partition, output: &Path) {
    println!("Total items: {}", result.total());
    println!("Kept items:  {}", result.kept.len());
    println!("Removed items: {}", result.removed.len());
    println!("Wrote {}", output.display());

    if !result.removed.is_empty() {
        println!("\nFirst {REMOVED_PREVIEW} removed item names:");
        for (i, item) in result.removed.iter().take(REMOVED_PREVIEW).enumerate() {
            let name = match item.display_name() {
                "" => "<no name>",
                n => n,
            };
            println!("{}. {name}", i + 1);
        }
    }
}
