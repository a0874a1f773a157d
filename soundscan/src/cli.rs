use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about("List and summarize the WAV files in an audio directory")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("samples")
                .long("samples")
                .help("Also print the decoded sample buffer of each file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("directory")
                .value_name("DIRECTORY")
                .help("Directory to scan (defaults to the 'audio' directory next to the executable)")
                .value_parser(value_parser!(PathBuf)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn samples_flag_defaults_to_off() {
        let matches = build_cli().get_matches_from(["soundscan"]);
        assert!(!matches.get_flag("samples"));
        assert!(matches.get_one::<PathBuf>("directory").is_none());
    }

    #[test]
    fn directory_argument_is_captured() {
        let matches = build_cli().get_matches_from(["soundscan", "--samples", "library"]);
        assert!(matches.get_flag("samples"));
        assert_eq!(
            matches.get_one::<PathBuf>("directory"),
            Some(&PathBuf::from("library"))
        );
    }
}
