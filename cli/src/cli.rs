use std::path::PathBuf;

use geoflat::Mode;

/// Print GeoJSON coordinates as "<x> <y>" lines (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "geoflat", version, about)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Geometry mode: linestring|l|ls, polygon|p|poly, multipolygon|m|mp
    #[arg(short, long, default_value = "polygon")]
    pub mode: Mode,

    /// Output file, defaults to stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Input GeoJSON files, read in order; none or "-" reads stdin
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub inputs: Vec<PathBuf>,
}

impl Cli {
    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
