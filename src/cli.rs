use std::path::PathBuf;

use clap::Parser;

/// Interactive dashboard of launch outcomes by site and payload mass.
#[derive(Debug, Parser)]
#[command(name = "launch-dash", version, about)]
pub struct Cli {
    /// Launch table to load (.csv, .json or .parquet)
    #[arg(value_name = "FILE", default_value = "spacex_launch_dash.csv")]
    pub data: PathBuf,

    /// Initial window width in points
    #[arg(long, default_value_t = 1200.0)]
    pub width: f32,

    /// Initial window height in points
    #[arg(long, default_value_t = 900.0)]
    pub height: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_dash_csv() {
        let cli = Cli::try_parse_from(["launch-dash"]).unwrap();
        assert_eq!(cli.data, PathBuf::from("spacex_launch_dash.csv"));
        assert_eq!((cli.width, cli.height), (1200.0, 900.0));
    }

    #[test]
    fn accepts_path_and_window_size() {
        let cli =
            Cli::try_parse_from(["launch-dash", "launches.parquet", "--width", "800"]).unwrap();
        assert_eq!(cli.data, PathBuf::from("launches.parquet"));
        assert_eq!(cli.width, 800.0);
    }
}
