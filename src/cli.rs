use std::path::PathBuf;

use apcsv_to_wav::convert::DEFAULT_DELIMITER;
use clap::{value_parser, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .about("CSV to WAV")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Report rows that are discarded")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("rate")
                .short('r')
                .long("rate")
                .value_name("HZ")
                .help("Sample rate in Hz, overrides the rate inferred from the timestamps")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("delim")
                .short('d')
                .long("delim")
                .value_name("DELIM")
                .help("Column delimiter")
                .default_value(DEFAULT_DELIMITER),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .value_name("DIR")
                .help("Directory where the WAV file is written [default: current directory]")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print a JSON summary instead of progress messages")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verify")
                .long("verify")
                .help("Decode the written file and check its rate and length")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("csvfile")
                .value_name("CSVFILE")
                .help("Delimited timestamp/value export")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_delimiter_and_output_dir() {
        let matches = build_cli().try_get_matches_from(["apcsv-to-wav", "in.csv"]).unwrap();
        assert_eq!(matches.get_one::<String>("delim").unwrap(), ",");
        assert!(matches.get_one::<PathBuf>("output-dir").is_none());
        assert!(matches.get_one::<u32>("rate").is_none());
        assert!(!matches.get_flag("verbose"));
    }

    #[test]
    fn parses_short_options() {
        let matches = build_cli()
            .try_get_matches_from(["apcsv-to-wav", "-r", "8000", "-d", ";", "--verbose", "in.csv"])
            .unwrap();
        assert_eq!(*matches.get_one::<u32>("rate").unwrap(), 8_000);
        assert_eq!(matches.get_one::<String>("delim").unwrap(), ";");
        assert!(matches.get_flag("verbose"));
    }

    #[test]
    fn rejects_zero_rate() {
        assert!(build_cli()
            .try_get_matches_from(["apcsv-to-wav", "--rate", "0", "in.csv"])
            .is_err());
    }

    #[test]
    fn requires_input_file() {
        assert!(build_cli().try_get_matches_from(["apcsv-to-wav"]).is_err());
    }
}
