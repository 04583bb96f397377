use log::info;

use snafu::Snafu;

use zone_normalizer::CorrectionTable;

use crate::args::{Args, Command};

pub mod io_csv;
pub mod io_geojson;
pub mod io_zones;

#[derive(Debug, Snafu)]
pub enum AppError {
    #[snafu(display("Error opening table {path}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Error reading a row of {path}"))]
    CsvLineParse { source: csv::Error, path: String },
    #[snafu(display("Error writing table {path}"))]
    CsvWrite { source: csv::Error, path: String },
    #[snafu(display("No column named {column} in the header of {path}"))]
    MissingZoneColumn { column: String, path: String },
    #[snafu(display("Error opening {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("No 'features' array in {path}"))]
    MissingFeatures { path: String },
    #[snafu(display("Error serializing {path}"))]
    SerializingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error writing {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
}

pub type AppResult<T> = Result<T, AppError>;

pub fn run(args: &Args) -> AppResult<()> {
    match &args.command {
        Command::MapZones {
            input,
            out,
            zone_column,
        } => {
            let table = CorrectionTable::montevideo();
            let stats = io_csv::map_zone_column(input, out, zone_column, &table)?;
            info!(
                "map-zones: {} rows processed, {} labels mapped, {} passed through",
                stats.rows, stats.mapped, stats.passed_through
            );
        }
        Command::LabelBarrios { input, out } => {
            let stats = io_geojson::label_features(input, out)?;
            info!(
                "label-barrios: {} features labeled, {} with an uncatalogued id, {} without the id key",
                stats.labeled, stats.unknown_id, stats.missing_key
            );
        }
        Command::ExtractZones {
            input,
            out,
            zone_column,
        } => {
            let count = io_zones::extract_zones(input, out, zone_column)?;
            info!("extract-zones: {} unique labels written", count);
        }
    }
    Ok(())
}
