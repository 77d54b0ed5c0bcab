//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chartify_motion")]
#[command(author, version, about = "Animated bar, line and pie charts")]
pub struct Cli {
    /// JSON file with chart sizes, margins and transition length
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn config_path_is_optional() {
        let cli = Cli::try_parse_from(["chartify_motion"]).unwrap();
        assert!(cli.config.is_none());

        let cli = Cli::try_parse_from(["chartify_motion", "charts.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("charts.json")));
    }

    #[test]
    fn help_is_not_read_as_a_path() {
        let err = Cli::try_parse_from(["chartify_motion", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn extra_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["chartify_motion", "a.json", "b.json"]).is_err());
    }
}
