use super::{Cli, Commands, OutputFormat};
use clap::{CommandFactory, Parser};

#[test]
fn cli_help_includes_required_top_level_commands() {
    let mut command = Cli::command();
    let help = command.render_long_help().to_string();
    assert!(help.contains("digest"));
    assert!(help.contains("year"));
    assert!(help.contains("days"));
}

#[test]
fn cli_parses_digest_with_repeated_filters() {
    let cli = Cli::try_parse_from([
        "mince",
        "digest",
        "--input",
        "records.json",
        "--include",
        "id",
        "--include",
        "name",
        "--format",
        "json",
    ])
    .expect("digest must parse");
    match cli.command {
        Commands::Digest(command) => {
            assert_eq!(command.include_keys, vec!["id".to_string(), "name".to_string()]);
            assert!(command.exclude_keys.is_empty());
            assert_eq!(command.format, OutputFormat::Json);
            assert!(!command.canonical);
        }
        _ => panic!("expected digest"),
    }
}

#[test]
fn cli_parses_year_bounds() {
    let cli = Cli::try_parse_from(["mince", "year", "54", "--shift", "1953", "--gte", "1950"])
        .expect("year must parse");
    match cli.command {
        Commands::Year(command) => {
            assert_eq!(command.value, "54");
            assert_eq!(command.shift, Some(1953));
            assert_eq!(command.gte, Some(1950));
            assert_eq!(command.lte, None);
        }
        _ => panic!("expected year"),
    }
}

#[test]
fn cli_counts_verbose_flags_anywhere() {
    let cli = Cli::try_parse_from(["mince", "days", "--start", "2022-10-31", "-vv"])
        .expect("days must parse");
    assert_eq!(cli.verbose, 2);
    match cli.command {
        Commands::Days(command) => {
            assert_eq!(command.start, "2022-10-31");
            assert!(command.stop.is_none());
        }
        _ => panic!("expected days"),
    }
}

#[test]
fn cli_rejects_digest_without_input() {
    assert!(Cli::try_parse_from(["mince", "digest"]).is_err());
}
