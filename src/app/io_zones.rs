// Extraction of the distinct zone labels seen in a tally export. Used to
// curate the correction entries: the output is a stable, normalized list
// that can be diffed between electoral cycles.

use std::collections::BTreeSet;
use std::fs;

use snafu::prelude::*;

use zone_normalizer::normalize;

use crate::app::io_csv::{open_table, zone_column_index};
use crate::app::*;

pub fn extract_zones(path: &str, out_path: &str, zone_column: &str) -> AppResult<usize> {
    let mut rdr = open_table(path)?;
    let header = rdr.headers().context(CsvOpenSnafu { path })?.clone();
    let zone_idx = zone_column_index(&header, zone_column, path)?;

    // BTreeSet deduplicates and keeps the labels sorted.
    let mut zones: BTreeSet<String> = BTreeSet::new();
    for line_r in rdr.records() {
        let line = line_r.context(CsvLineParseSnafu { path })?;
        let raw = line.get(zone_idx).unwrap_or("");
        let normalized = normalize(raw);
        if !normalized.is_empty() {
            zones.insert(normalized);
        }
    }

    let mut contents = String::new();
    for zone in zones.iter() {
        contents.push_str(zone);
        contents.push('\n');
    }
    fs::write(out_path, contents).context(WritingOutputSnafu { path: out_path })?;
    Ok(zones.len())
}
