use clap::{AppSettings, Clap};
use std::path::PathBuf;

#[derive(Debug, Clap, Clone)]
#[clap(
    version = "0.1.0",
    name = "colormatch",
    about = "A color/text matching reaction game for the terminal"
)]
#[clap(setting = AppSettings::ColoredHelp)]
pub struct GameOpts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Keep the stats in memory only instead of persisting them to a stats file
    #[clap(short, long, conflicts_with = "statsfile")]
    pub volatile: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Set the seed of the prompt source to make the session reproducible
    #[clap(short, long)]
    pub seed: Option<u64>,

    /// Set path to the JSON file holding the persisted stats [default: colormatch_stats.json]
    #[clap(parse(from_os_str), long)]
    pub statsfile: Option<PathBuf>,

    /// Set the real-time duration of one countdown tick in seconds, should be in the range
    /// [0.05, 10.0]
    #[clap(short, long, default_value = "1.0")]
    pub tick_interval: f64,
}
