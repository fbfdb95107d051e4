use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::print_batches;
use parquet::arrow::ArrowWriter;

const COLUMNS: [&str; 4] = ["hall_name", "item_name", "allergens_inline", "ingredients_text"];

/// (hall, item, allergens, ingredients). Includes a duplicate, a nameless row
/// and items the exclusion filter removes.
const ROWS: &[[&str; 4]] = &[
    ["D2", "Pad Thai", "Peanuts; Soy, Egg", "rice noodles, peanuts, tamarind, egg. May contain shellfish."],
    ["D2", "Garden Salad", "", "romaine, tomato, cucumber"],
    ["D2", "Buttermilk Pancakes", "Milk, Eggs, Wheat", "flour, buttermilk, eggs, maple syrup"],
    ["D2", "Pad Thai", "Sesame", "duplicate row, ignored"],
    ["Owens Food Court", "Fried Shrimp Basket", "Shellfish; Wheat", "shrimp, breading. Cooked in a shared fryer with fish."],
    ["Owens Food Court", "Honey Nut Cereal", "Tree Nuts, Wheat", "whole grain oats, honey, almonds"],
    ["Owens Food Court", "Cheese Pizza", "Milk; Wheat; Soy", "dough, mozzarella, tomato sauce"],
    ["Turners", "Sesame Tofu Bowl", "Soy, Sesame, Gluten", "tofu, sesame seeds, soy glaze. Made in a facility that also processes peanuts and tree nuts. Cannot guarantee allergen-free."],
    ["Turners", "Fruit Cup", "", "melon, grapes, pineapple"],
    ["Turners", "Dill Pickle Spear", "", "cucumber, vinegar, dill"],
    ["", "Mystery Special", "Fish", "chef's choice"],
    ["West End Market", "Crab Cake Sandwich", "Shellfish, Fish, Eggs, Milk, Wheat, Mustard", "crab, cod, egg, brioche. Prepared on the same equipment as peanut items; cross-contamination possible."],
];

fn write_csv(path: &str) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    writer.write_record(COLUMNS)?;
    for row in ROWS {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn sample_batch() -> Result<RecordBatch> {
    let schema = Arc::new(Schema::new(
        COLUMNS
            .iter()
            .map(|name| Field::new(*name, DataType::Utf8, true))
            .collect::<Vec<_>>(),
    ));

    let column = |i: usize| -> ArrayRef {
        Arc::new(StringArray::from(
            ROWS.iter()
                .map(|row| (!row[i].is_empty()).then_some(row[i]))
                .collect::<Vec<Option<&str>>>(),
        ))
    };

    let batch = RecordBatch::try_new(
        schema,
        vec![column(0), column(1), column(2), column(3)],
    )?;
    Ok(batch)
}

fn write_parquet(path: &str, batch: &RecordBatch) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(batch)?;
    writer.close()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let csv_path = "sample_menu.csv";
    let parquet_path = "sample_menu.parquet";

    write_csv(csv_path)?;
    let batch = sample_batch()?;
    write_parquet(parquet_path, &batch)?;
    print_batches(&[batch])?;

    println!("Wrote {} rows to {csv_path} and {parquet_path}", ROWS.len());
    Ok(())
}
