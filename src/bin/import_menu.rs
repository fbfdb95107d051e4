use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use hall_risk::data::loader::{import_file, write_json};

/// Convert scraped dining-hall rows into a deduplicated menu item JSON array.
#[derive(Parser)]
#[command(name = "import_menu")]
struct Args {
    /// Scraped table (.csv or .parquet).
    #[arg(long, short, default_value = "vt_dining_allergy_nutrition.csv")]
    input: PathBuf,

    /// Output JSON array.
    #[arg(long, short, default_value = "menuItems.json")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let items = import_file(&args.input)
        .with_context(|| format!("importing {}", args.input.display()))?;
    write_json(&args.output, &items)?;

    println!("Created {} with {} items", args.output.display(), items.len());
    Ok(())
}
