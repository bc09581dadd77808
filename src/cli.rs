//! Command-line flags

use crate::visualizers::VisualizerKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "tutortty")]
#[command(about = "Learn data structures in the terminal, with an AI tutor")]
#[command(version)]
pub struct Args {
    /// Backend base URL (overrides the config file and TUTORTTY_API_URL)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Config file path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Where to write the log
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Open straight into a visualizer, no sign-in needed
    #[arg(short, long, value_enum)]
    pub visualizer: Option<VisualizerKind>,

    /// Initial values for --visualizer, e.g. 5,3,8
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, requires = "visualizer")]
    pub values: Option<Vec<i64>>,

    /// Forget the stored profile and start with the setup wizard
    #[arg(long)]
    pub logout: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visualizer_with_values() {
        let args =
            Args::try_parse_from(["tutortty", "--visualizer", "tree", "--values", "5,3,-8"]).unwrap();
        assert_eq!(args.visualizer, Some(VisualizerKind::Tree));
        assert_eq!(args.values, Some(vec![5, 3, -8]));
    }

    #[test]
    fn test_kebab_case_visualizer_names() {
        let args = Args::try_parse_from(["tutortty", "-v", "linked-list"]).unwrap();
        assert_eq!(args.visualizer, Some(VisualizerKind::LinkedList));
    }

    #[test]
    fn test_values_require_visualizer() {
        assert!(Args::try_parse_from(["tutortty", "--values", "1,2"]).is_err());
    }

    #[test]
    fn test_verify_command() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
