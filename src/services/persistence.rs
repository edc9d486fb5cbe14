//! JSON persistence for lookup tables and depth grids

use crate::error::PipelineError;
use depth_ramp::{DepthGrid, DepthLookupTable, Rgb};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Serializes a table as `{"R,G,B": depth}` in calibration order
struct LookupJson<'a>(&'a DepthLookupTable);

impl Serialize for LookupJson<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(color, depth)| (color.to_string(), depth)))
    }
}

/// Raw key/depth pairs in document order
struct LookupEntries(Vec<(String, f64)>);

impl<'de> Deserialize<'de> for LookupEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = LookupEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping \"R,G,B\" keys to depths")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, f64>()? {
                    entries.push(entry);
                }
                Ok(LookupEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Encode a lookup table as pretty JSON
pub fn lookup_to_json(table: &DepthLookupTable) -> Result<String, PipelineError> {
    serde_json::to_string_pretty(&LookupJson(table))
        .map_err(|e| PipelineError::MalformedLookupTable(e.to_string()))
}

/// Decode a lookup table, validating every key
pub fn lookup_from_json(content: &str) -> Result<DepthLookupTable, PipelineError> {
    let LookupEntries(entries) = serde_json::from_str(content)
        .map_err(|e| PipelineError::MalformedLookupTable(e.to_string()))?;

    entries
        .into_iter()
        .map(|(key, depth)| {
            key.parse::<Rgb>()
                .map(|color| (color, depth))
                .map_err(|e| PipelineError::MalformedLookupTable(format!("key {key:?}: {e}")))
        })
        .collect()
}

pub fn save_lookup(table: &DepthLookupTable, path: &Path) -> Result<(), PipelineError> {
    let json = lookup_to_json(table)?;
    ensure_parent(path)?;
    std::fs::write(path, json)?;
    tracing::debug!(path = %path.display(), entries = table.len(), "Wrote lookup table");
    Ok(())
}

pub fn load_lookup(path: &Path) -> Result<DepthLookupTable, PipelineError> {
    let content = std::fs::read_to_string(path)?;
    let table = lookup_from_json(&content)?;
    tracing::debug!(path = %path.display(), entries = table.len(), "Loaded lookup table");
    Ok(table)
}

/// Encode a grid as a compact array of rows, `null` for missing cells
pub fn grid_to_json(grid: &DepthGrid) -> Result<String, PipelineError> {
    serde_json::to_string(&grid.to_rows())
        .map_err(|e| PipelineError::MalformedPersistedGrid(e.to_string()))
}

/// Decode a grid; it must have at least one row and one column, and all
/// rows equal length
pub fn grid_from_json(content: &str) -> Result<DepthGrid, PipelineError> {
    let rows = serde_json::from_str(content)
        .map_err(|e| PipelineError::MalformedPersistedGrid(e.to_string()))?;
    grid_from_rows(rows)
}

pub fn save_grid(grid: &DepthGrid, path: &Path) -> Result<(), PipelineError> {
    ensure_parent(path)?;
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, &grid.to_rows())
        .map_err(|e| PipelineError::MalformedPersistedGrid(e.to_string()))?;
    writer.flush()?;
    tracing::debug!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "Wrote heightmap"
    );
    Ok(())
}

pub fn load_grid(path: &Path) -> Result<DepthGrid, PipelineError> {
    let reader = BufReader::new(File::open(path)?);
    let rows = serde_json::from_reader(reader)
        .map_err(|e| PipelineError::MalformedPersistedGrid(e.to_string()))?;
    let grid = grid_from_rows(rows)?;
    tracing::debug!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "Loaded heightmap"
    );
    Ok(grid)
}

fn grid_from_rows(rows: Vec<Vec<Option<f64>>>) -> Result<DepthGrid, PipelineError> {
    let grid = DepthGrid::from_rows(rows)
        .map_err(|e| PipelineError::MalformedPersistedGrid(e.to_string()))?;
    if grid.height() == 0 {
        return Err(PipelineError::MalformedPersistedGrid(
            "grid has no rows".to_string(),
        ));
    }
    if grid.width() == 0 {
        return Err(PipelineError::MalformedPersistedGrid(
            "grid has no columns".to_string(),
        ));
    }
    Ok(grid)
}

fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_table() -> DepthLookupTable {
        let mut table = DepthLookupTable::new();
        table.insert(Rgb::new(0, 0, 0), -500.0);
        table.insert(Rgb::new(10, 20, 30), -499.0);
        table.insert(Rgb::new(255, 255, 255), 160.0);
        table
    }

    #[test]
    fn test_lookup_json_keeps_calibration_order() {
        let json = lookup_to_json(&sample_table()).unwrap();
        assert_eq!(
            json,
            "{\n  \"0,0,0\": -500.0,\n  \"10,20,30\": -499.0,\n  \"255,255,255\": 160.0\n}"
        );
    }

    #[test]
    fn test_lookup_reads_back_in_document_order() {
        let table = lookup_from_json(r#"{"9,9,9": 1.5, "1,2,3": -2}"#).unwrap();
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(
            entries,
            vec![(Rgb::new(9, 9, 9), 1.5), (Rgb::new(1, 2, 3), -2.0)]
        );
    }

    #[test]
    fn test_lookup_bad_key_is_rejected() {
        for json in [
            r#"{"1,2": 0.0}"#,
            r#"{"1,2,300": 0.0}"#,
            r#"{"red": 0.0}"#,
        ] {
            let err = lookup_from_json(json).unwrap_err();
            assert!(
                matches!(err, PipelineError::MalformedLookupTable(_)),
                "{json}: {err}"
            );
        }
    }

    #[test]
    fn test_lookup_non_numeric_depth_is_rejected() {
        let err = lookup_from_json(r#"{"1,2,3": "deep"}"#).unwrap_err();
        assert!(matches!(err, PipelineError::MalformedLookupTable(_)));

        let err = lookup_from_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, PipelineError::MalformedLookupTable(_)));
    }

    #[test]
    fn test_lookup_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lut").join("color_to_depth.json");

        save_lookup(&sample_table(), &path).unwrap();
        assert_eq!(load_lookup(&path).unwrap(), sample_table());
    }

    #[test]
    fn test_grid_json_uses_null_for_missing() {
        let grid = DepthGrid::from_rows(vec![vec![Some(1.5), None], vec![None, Some(-2.0)]])
            .unwrap();
        assert_eq!(grid_to_json(&grid).unwrap(), "[[1.5,null],[null,-2.0]]");
    }

    #[test]
    fn test_grid_ragged_is_rejected() {
        let err = grid_from_json("[[1.0, 2.0], [3.0]]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed persisted grid: row 1 has 1 cells, expected 2"
        );
    }

    #[test]
    fn test_grid_empty_and_non_array_rejected() {
        for json in ["[]", "[[], []]", "{}", "[1, 2]", "[[\"a\"]]"] {
            let err = grid_from_json(json).unwrap_err();
            assert!(
                matches!(err, PipelineError::MalformedPersistedGrid(_)),
                "{json}: {err}"
            );
        }
    }

    #[test]
    fn test_grid_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("heightmap.json");
        let grid = DepthGrid::from_rows(vec![
            vec![Some(-12.25), None, Some(0.0)],
            vec![Some(3.0), Some(4.5), None],
        ])
        .unwrap();

        save_grid(&grid, &path).unwrap();
        assert_eq!(load_grid(&path).unwrap(), grid);
    }
}
