use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Serialize;

use super::model::{MenuItem, MenuRow};
use crate::error::{MenuError, Result};

// ---------------------------------------------------------------------------
// Tabular input: dispatch by extension
// ---------------------------------------------------------------------------

/// Read raw scraped rows from a tabular file.
///
/// Supported formats:
/// * `.csv`     – header row with `hall_name`, `item_name`, `allergens_inline`,
///   `ingredients_text` (extra columns ignored)
/// * `.parquet` – string columns with the same names
pub fn read_rows(path: &Path) -> Result<Vec<MenuRow>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => read_csv_rows(path),
        "parquet" | "pq" => read_parquet_rows(path),
        other => Err(MenuError::UnsupportedFormat(other.to_string())),
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| MenuError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}

fn read_csv_rows(path: &Path) -> Result<Vec<MenuRow>> {
    // Scraped rows may be short; missing trailing cells read as absent.
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(open(path)?);
    reader
        .deserialize::<MenuRow>()
        .enumerate()
        .map(|(row_no, rec)| {
            rec.map_err(|e| MenuError::malformed(path, format!("CSV row {row_no}: {e}")))
        })
        .collect()
}

fn read_parquet_rows(path: &Path) -> Result<Vec<MenuRow>> {
    let malformed = |e: &dyn std::fmt::Display| MenuError::malformed(path, e);

    let builder = ParquetRecordBatchReaderBuilder::try_new(open(path)?)
        .map_err(|e| malformed(&e))?;
    let reader = builder.build().map_err(|e| malformed(&e))?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result.map_err(|e| malformed(&e))?;
        let schema = batch.schema();
        let column = |name: &str| schema.index_of(name).ok().map(|i| batch.column(i));

        let hall = column("hall_name");
        let item = column("item_name");
        let allergens = column("allergens_inline");
        let ingredients = column("ingredients_text");

        for row in 0..batch.num_rows() {
            rows.push(MenuRow {
                hall_name: string_cell(hall, row),
                item_name: string_cell(item, row),
                allergens_inline: string_cell(allergens, row),
                ingredients_text: string_cell(ingredients, row),
            });
        }
    }
    Ok(rows)
}

/// Read a string cell; nulls, empty strings and non-string columns give `None`.
fn string_cell(col: Option<&ArrayRef>, row: usize) -> Option<String> {
    let col = col?;
    if col.is_null(row) {
        return None;
    }
    let value = match col.data_type() {
        DataType::Utf8 => col.as_string::<i32>().value(row),
        DataType::LargeUtf8 => col.as_string::<i64>().value(row),
        _ => return None,
    };
    (!value.is_empty()).then(|| value.to_string())
}

// ---------------------------------------------------------------------------
// Import: rows → deduplicated menu items
// ---------------------------------------------------------------------------

/// Split an inline allergen cell on `;` or `,`, trimming and dropping empties.
pub fn parse_allergens(text: Option<&str>) -> Vec<String> {
    let Some(text) = text else {
        return Vec::new();
    };
    text.split([';', ','])
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect()
}

/// Turn raw rows into menu items.
///
/// Rows without a hall or item name are skipped. The first row for a given
/// `(hall, item)` pair wins; ids are 1-based in acceptance order.
pub fn import_rows<I>(rows: I) -> Vec<MenuItem>
where
    I: IntoIterator<Item = MenuRow>,
{
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut items: Vec<MenuItem> = Vec::new();

    for row in rows {
        let (Some(hall), Some(name)) = (row.hall_name, row.item_name) else {
            log::debug!("Skipping row without hall or item name");
            continue;
        };
        if hall.is_empty() || name.is_empty() {
            log::debug!("Skipping row without hall or item name");
            continue;
        }
        if !seen.insert((hall.clone(), name.clone())) {
            log::debug!("Dropping duplicate {hall}::{name}");
            continue;
        }

        items.push(MenuItem {
            id: items.len() as u64 + 1,
            hall_name: hall,
            item_name: name,
            allergens: parse_allergens(row.allergens_inline.as_deref()),
            ingredients: row.ingredients_text.unwrap_or_default(),
            ..Default::default()
        });
    }
    items
}

/// Read a tabular file and import it.
pub fn import_file(path: &Path) -> Result<Vec<MenuItem>> {
    let rows = read_rows(path)?;
    let n_rows = rows.len();
    let items = import_rows(rows);
    log::info!(
        "Imported {} items from {} rows of {}",
        items.len(),
        n_rows,
        path.display()
    );
    Ok(items)
}

// ---------------------------------------------------------------------------
// JSON artifacts
// ---------------------------------------------------------------------------

/// Expected JSON schema:
///
/// ```json
/// [
///   { "id": 1, "hallName": "D2", "itemName": "Pad Thai",
///     "allergens": ["peanuts"], "ingredients": "rice noodles, ..." },
///   ...
/// ]
/// ```
pub fn load_items(path: &Path) -> Result<Vec<MenuItem>> {
    let text = std::fs::read_to_string(path).map_err(|source| MenuError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|e| MenuError::malformed(path, e))
}

/// Write `value` as pretty JSON.
///
/// The JSON goes to a sibling temp file that is renamed over `path` once fully
/// written, so a failed run never leaves a partial artifact behind.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let write_err = |source: std::io::Error| MenuError::Write {
        path: path.to_path_buf(),
        source,
    };
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| write_err(std::io::Error::other(e)))?;

    let tmp = temp_sibling(path);
    std::fs::write(&tmp, text).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        write_err(e)
    })?;
    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        write_err(e)
    })
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// `dir/menuItems.json` → `dir/menuItems.filtered.json`.
pub fn filtered_sibling(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("menuItems");
    path.with_file_name(format!("{stem}.filtered.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(hall: &str, item: &str, allergens: Option<&str>, ingredients: Option<&str>) -> MenuRow {
        let cell = |s: &str| (!s.is_empty()).then(|| s.to_string());
        MenuRow {
            hall_name: cell(hall),
            item_name: cell(item),
            allergens_inline: allergens.map(str::to_string),
            ingredients_text: ingredients.map(str::to_string),
        }
    }

    #[test]
    fn allergens_split_on_both_separators() {
        assert_eq!(
            parse_allergens(Some("peanuts; Milk,egg")),
            vec!["peanuts", "Milk", "egg"]
        );
        assert_eq!(parse_allergens(Some(" ;, ,")), Vec::<String>::new());
        assert_eq!(parse_allergens(None), Vec::<String>::new());
    }

    #[test]
    fn rows_without_names_are_skipped() {
        let items = import_rows(vec![
            row("", "Toast", None, None),
            row("D2", "", None, None),
            row("D2", "Toast", None, None),
        ]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_name, "Toast");
        assert_eq!(items[0].ingredients, "");
    }

    #[test]
    fn first_duplicate_wins_and_ids_are_sequential() {
        let items = import_rows(vec![
            row("D2", "Soup", Some("milk"), Some("cream")),
            row("Owens", "Soup", None, None),
            row("D2", "Soup", Some("soy"), Some("tofu")),
            row("D2", "Salad", None, None),
        ]);
        let ids: Vec<u64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(items[0].allergens, vec!["milk"]);
        assert_eq!(items[0].ingredients, "cream");
        assert_eq!(items[2].item_name, "Salad");
    }

    #[test]
    fn short_csv_rows_keep_their_leading_cells() {
        let tmp = tempfile::tempdir().expect("tmpdir");
        let path = tmp.path().join("menu.csv");
        std::fs::write(
            &path,
            "hall_name,item_name,allergens_inline,ingredients_text\n\
             D2,Soup,milk\n\
             Owens\n\
             D2,Toast,wheat,bread\n",
        )
        .unwrap();

        let items = import_file(&path).expect("import");
        let names: Vec<&str> = items.iter().map(|i| i.item_name.as_str()).collect();
        assert_eq!(names, vec!["Soup", "Toast"]);
        assert_eq!(items[0].allergens, vec!["milk"]);
        assert_eq!(items[0].ingredients, "");
    }

    #[test]
    fn failed_write_leaves_no_temp_file() {
        let tmp = tempfile::tempdir().expect("tmpdir");

        let missing_dir = tmp.path().join("absent").join("menuItems.json");
        let err = write_json(&missing_dir, &[1, 2, 3]).unwrap_err();
        assert!(matches!(err, MenuError::Write { .. }));
        assert!(!temp_sibling(&missing_dir).exists());

        // Renaming a file over a non-empty directory fails after the temp write.
        let dir_target = tmp.path().join("taken.json");
        std::fs::create_dir(&dir_target).unwrap();
        std::fs::write(dir_target.join("keep"), "x").unwrap();
        let err = write_json(&dir_target, &[1, 2, 3]).unwrap_err();
        assert!(matches!(err, MenuError::Write { .. }));
        assert!(!temp_sibling(&dir_target).exists());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = read_rows(Path::new("menu.xlsx")).unwrap_err();
        assert!(matches!(err, MenuError::UnsupportedFormat(ext) if ext == "xlsx"));
    }

    #[test]
    fn filtered_sibling_keeps_directory() {
        assert_eq!(
            filtered_sibling(Path::new("out/menuItems.json")),
            PathBuf::from("out/menuItems.filtered.json")
        );
    }
}
