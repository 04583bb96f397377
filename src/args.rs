use clap::{Parser, Subcommand};

/// Reconciles Montevideo electoral zone labels with the official barrios.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,

    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Replaces the zone column of a tally export with canonical barrio names.
    MapZones {
        /// (file path) The semicolon-delimited tally export to read.
        #[clap(short, long, value_parser)]
        input: String,

        /// (file path) Where the mapped table will be written, same shape as the input.
        #[clap(short, long, value_parser)]
        out: String,

        /// (default ZONA) The name of the column holding the zone labels.
        #[clap(long, value_parser, default_value = "ZONA")]
        zone_column: String,
    },

    /// Attaches the official barrio name to each feature of the boundaries GeoJSON.
    LabelBarrios {
        /// (file path) The GeoJSON document with the barrio polygons. Each feature
        /// is expected to carry an integer NROBARRIO property.
        #[clap(short, long, value_parser)]
        input: String,

        /// (file path) Where the labeled document will be written.
        #[clap(short, long, value_parser)]
        out: String,
    },

    /// Extracts the unique zone labels of a tally export, normalized and sorted.
    ExtractZones {
        /// (file path) The semicolon-delimited tally export to read.
        #[clap(short, long, value_parser)]
        input: String,

        /// (file path) Where the labels will be written, one per line.
        #[clap(short, long, value_parser)]
        out: String,

        /// (default ZONA) The name of the column holding the zone labels.
        #[clap(long, value_parser, default_value = "ZONA")]
        zone_column: String,
    },
}
