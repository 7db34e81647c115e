use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use jsnames_naming::NamingMode;

/// CLI arguments for the jsnames binary.
#[derive(Parser, Debug)]
#[command(
    name = "jsnames",
    version,
    about = "Give anonymous JavaScript functions stable, debuggable names"
)]
pub struct CliArgs {
    /// Script to rename.
    pub input: PathBuf,

    /// Write the renamed script here instead of stdout.
    #[arg(short = 'o', long = "out")]
    pub out: Option<PathBuf>,

    /// Name map from an earlier run; its names are reused for the same paths.
    #[arg(long = "previous-map")]
    pub previous_map: Option<PathBuf>,

    /// Write the final name map here.
    #[arg(long = "map-out")]
    pub map_out: Option<PathBuf>,

    /// Encoding of --previous-map and --map-out.
    #[arg(long = "map-format", value_enum, default_value_t = MapFormat::Text, ignore_case = true)]
    pub map_format: MapFormat,

    /// Naming strategy. Overrides the configuration file.
    #[arg(long, value_enum, ignore_case = true)]
    pub mode: Option<Mode>,

    /// Print without optional whitespace.
    #[arg(long)]
    pub compact: bool,

    /// JSON configuration file with `prefix`, `reservedNames` and `mode`.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum MapFormat {
    /// One `name:path` entry per line.
    #[default]
    Text,
    /// A JSON object mapping names to paths.
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Short synthetic names plus a name map.
    Mapped,
    /// Names spelled after the qualified path.
    Unmapped,
}

impl From<Mode> for NamingMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Mapped => NamingMode::Mapped,
            Mode::Unmapped => NamingMode::Unmapped,
        }
    }
}
