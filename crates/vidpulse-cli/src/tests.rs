use super::*;
use vidpulse_core::VideoRecord;

#[test]
fn parses_categories_command() {
    let cli = Cli::try_parse_from(["vidpulse-cli", "categories"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Categories));
}

#[test]
fn parses_trending_command_with_name() {
    let cli = Cli::try_parse_from(["vidpulse-cli", "trending", "Film & Animation"])
        .expect("expected valid cli args");
    match cli.command {
        Commands::Trending { category, json } => {
            assert_eq!(category, "Film & Animation");
            assert!(!json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_trending_json_flag() {
    let cli = Cli::try_parse_from(["vidpulse-cli", "trending", "Music", "--json"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Trending { json: true, .. }));
}

#[test]
fn trending_requires_a_category() {
    assert!(Cli::try_parse_from(["vidpulse-cli", "trending"]).is_err());
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["vidpulse-cli"]).is_err());
}

#[test]
fn format_record_includes_every_field() {
    let record = VideoRecord::new("abc", "Title", 1234).with_top_comment(5, "hello");
    let text = commands::format_record(&record);
    assert!(text.contains("Title"));
    assert!(text.contains("1234 views"));
    assert!(text.contains("https://www.youtube.com/watch?v=abc"));
    assert!(text.contains("(5 likes): hello"));
}
