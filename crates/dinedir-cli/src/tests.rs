use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["dinedir-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(cli.data.is_none());
}

#[test]
fn parses_list_defaults() {
    let cli = Cli::try_parse_from(["dinedir-cli", "list"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::List {
            page: 1,
            page_size: None,
            json: false,
            ..
        })
    ));
}

#[test]
fn parses_repeated_facet_flags() {
    let cli = Cli::try_parse_from([
        "dinedir-cli",
        "list",
        "--category",
        "cafe",
        "--category",
        "bar",
        "--district",
        "north_shore",
        "--price",
        "2",
        "--feature",
        "outdoor_seating",
        "--query",
        "tacos",
        "--open-now",
        "--page",
        "3",
        "--page-size",
        "12",
    ])
    .expect("expected valid cli args");

    let Some(Commands::List {
        filters,
        page,
        page_size,
        ..
    }) = cli.command
    else {
        panic!("expected list command");
    };
    assert_eq!(filters.categories, vec!["cafe", "bar"]);
    assert_eq!(filters.districts, vec!["north_shore"]);
    assert_eq!(filters.prices, vec![2]);
    assert_eq!(filters.features, vec!["outdoor_seating"]);
    assert_eq!(filters.query.as_deref(), Some("tacos"));
    assert!(filters.open_now);
    assert_eq!(page, 3);
    assert_eq!(page_size, Some(12));
}

#[test]
fn price_outside_scale_is_rejected() {
    assert!(Cli::try_parse_from(["dinedir-cli", "list", "--price", "5"]).is_err());
    assert!(Cli::try_parse_from(["dinedir-cli", "list", "--price", "0"]).is_err());
}

#[test]
fn parses_facets_with_json() {
    let cli = Cli::try_parse_from(["dinedir-cli", "facets", "--feature", "live_music", "--json"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Facets { ref filters, json: true }) if filters.features == ["live_music"]
    ));
}

#[test]
fn parses_show_with_id() {
    let cli = Cli::try_parse_from(["dinedir-cli", "show", "r01"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Show { ref id, json: false }) if id == "r01"
    ));
}

#[test]
fn show_requires_id() {
    assert!(Cli::try_parse_from(["dinedir-cli", "show"]).is_err());
}

#[test]
fn data_override_is_global() {
    let cli = Cli::try_parse_from(["dinedir-cli", "list", "--data", "/tmp/places.json"])
        .expect("expected valid cli args");
    assert_eq!(cli.data, Some(PathBuf::from("/tmp/places.json")));
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}
