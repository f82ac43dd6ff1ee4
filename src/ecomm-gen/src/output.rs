use std::path::Path;

use serde::Serialize;
use strum_macros::Display;

use crate::error::Result;

pub const BACKFILL_SUFFIX: &str = "backfill";

#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Entity {
    Customers,
    Products,
    Orders,
    OrderItems,
}

/// `customers_backfill.csv`, `order_items_20240601.csv`, etc.
pub fn file_name(entity: Entity, suffix: &str) -> String {
    format!("{entity}_{suffix}.csv")
}

/// Writes `columns` as a header row followed by one row per record. Records are
/// serialized in field declaration order, so `columns` must list the fields in
/// that same order. Existing files are truncated; missing directories are not
/// created.
pub fn write_csv<T: Serialize>(path: &Path, columns: &[&str], records: &[T]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    wtr.write_record(columns)?;
    for rec in records {
        wtr.serialize(rec)?;
    }
    wtr.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::env::temp_dir;
    use std::fs;

    use serde::Serialize;
    use uuid::Uuid;

    use super::*;
    use crate::error::EcommGenError;

    #[derive(Serialize)]
    struct Row {
        id: u32,
        name: &'static str,
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            file_name(Entity::Customers, BACKFILL_SUFFIX),
            "customers_backfill.csv"
        );
        assert_eq!(
            file_name(Entity::OrderItems, "20240601"),
            "order_items_20240601.csv"
        );
    }

    #[test]
    fn test_write_csv_overwrites() -> Result<()> {
        let path = temp_dir().join(format!("{}.csv", Uuid::new_v4()));

        write_csv(&path, &["id", "name"], &[Row { id: 1, name: "a" }, Row {
            id: 2,
            name: "b, c",
        }])?;
        assert_eq!(fs::read_to_string(&path)?, "id,name\n1,a\n2,\"b, c\"\n");

        write_csv::<Row>(&path, &["id", "name"], &[])?;
        assert_eq!(fs::read_to_string(&path)?, "id,name\n");

        fs::remove_file(&path)?;
        Ok(())
    }

    #[test]
    fn test_write_csv_missing_dir() {
        let path = temp_dir()
            .join(Uuid::new_v4().to_string())
            .join("rows.csv");

        let res = write_csv(&path, &["id", "name"], &[Row { id: 1, name: "a" }]);
        assert!(matches!(res, Err(EcommGenError::CSVError(_))));
        assert!(!path.exists());
    }
}
