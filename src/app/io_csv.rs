// Primitives for reading and writing the semicolon-delimited tally tables.

use std::fs::File;

use csv::StringRecord;
use log::debug;
use snafu::prelude::*;

use zone_normalizer::{normalize, CorrectionTable};

use crate::app::*;

pub struct MapStats {
    pub rows: usize,
    pub mapped: usize,
    pub passed_through: usize,
}

/// Rewrites the zone column of a tally export in place, leaving every other
/// column untouched. Labels without a correction entry come through unchanged.
pub fn map_zone_column(
    path: &str,
    out_path: &str,
    zone_column: &str,
    table: &CorrectionTable,
) -> AppResult<MapStats> {
    let mut rdr = open_table(path)?;
    let header = rdr
        .headers()
        .context(CsvOpenSnafu { path })?
        .clone();
    let zone_idx = zone_column_index(&header, zone_column, path)?;

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(out_path)
        .context(CsvWriteSnafu { path: out_path })?;
    wtr.write_record(&header)
        .context(CsvWriteSnafu { path: out_path })?;

    let mut stats = MapStats {
        rows: 0,
        mapped: 0,
        passed_through: 0,
    };
    for line_r in rdr.records() {
        let line = line_r.context(CsvLineParseSnafu { path })?;
        let fields: Vec<String> = line
            .iter()
            .enumerate()
            .map(|(idx, field)| {
                if idx == zone_idx {
                    // A table hit is a hit even when the canonical name
                    // happens to equal the raw cell.
                    match table.get(&normalize(field)) {
                        Some(canonical) => {
                            stats.mapped += 1;
                            canonical.to_string()
                        }
                        None => {
                            debug!("map_zone_column: no correction entry for {:?}", field);
                            stats.passed_through += 1;
                            field.to_string()
                        }
                    }
                } else {
                    field.to_string()
                }
            })
            .collect();
        debug!("map_zone_column: row {:?} -> {:?}", stats.rows, fields);
        wtr.write_record(&fields)
            .context(CsvWriteSnafu { path: out_path })?;
        stats.rows += 1;
    }
    wtr.flush().context(WritingOutputSnafu { path: out_path })?;
    Ok(stats)
}

// The exports are unquoted (pandas QUOTE_NONE style), so quote interpretation
// is turned off to keep stray quote characters inside the labels literal.
pub fn open_table(path: &str) -> AppResult<csv::Reader<File>> {
    csv::ReaderBuilder::new()
        .delimiter(b';')
        .quoting(false)
        .from_path(path)
        .context(CsvOpenSnafu { path })
}

pub fn zone_column_index(
    header: &StringRecord,
    zone_column: &str,
    path: &str,
) -> AppResult<usize> {
    header
        .iter()
        .position(|name| name == zone_column)
        .context(MissingZoneColumnSnafu {
            column: zone_column,
            path,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_input(dir: &tempfile::TempDir, contents: &str) -> String {
        let path = dir.path().join("tally.csv");
        std::fs::write(&path, contents).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn maps_known_labels_and_passes_through_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "SERIE;ZONA;VOTOS\nAAA;cordón  norte;12\nAAB;unknown zone;3\n");
        let out = dir.path().join("out.csv");
        let table = CorrectionTable::montevideo();

        let stats =
            map_zone_column(&input, out.to_str().unwrap(), "ZONA", &table).unwrap();
        assert_eq!(stats.rows, 2);
        assert_eq!(stats.mapped, 1);
        assert_eq!(stats.passed_through, 1);

        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written, "SERIE;ZONA;VOTOS\nAAA;Cordón;12\nAAB;unknown zone;3\n");
    }

    #[test]
    fn hit_with_identical_canonical_name_counts_as_mapped() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "SERIE;ZONA\nAAA;Cordón\n");
        let out = dir.path().join("out.csv");
        // "Cordón" resolves to itself; still a table hit, not a pass-through.
        let table = CorrectionTable::from_pairs(vec![(
            "CORDON".to_string(),
            "Cordón".to_string(),
        )]);

        let stats =
            map_zone_column(&input, out.to_str().unwrap(), "ZONA", &table).unwrap();
        assert_eq!(stats.mapped, 1);
        assert_eq!(stats.passed_through, 0);

        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written, "SERIE;ZONA\nAAA;Cordón\n");
    }

    #[test]
    fn missing_zone_column_aborts_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "SERIE;VOTOS\nAAA;12\n");
        let out = dir.path().join("out.csv");
        let table = CorrectionTable::montevideo();

        let res = map_zone_column(&input, out.to_str().unwrap(), "ZONA", &table);
        assert!(matches!(res, Err(AppError::MissingZoneColumn { .. })));
        assert!(!out.exists());
    }

    #[test]
    fn missing_input_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.csv");
        let table = CorrectionTable::montevideo();

        let res = map_zone_column("/does/not/exist.csv", out.to_str().unwrap(), "ZONA", &table);
        assert!(matches!(res, Err(AppError::CsvOpen { .. })));
    }
}
