use anyhow::{ensure, Result};

use knp_json::knp::{
    config::{EosMarker, KnpParserConfig},
    document::split_sentences,
    header_parser::parse_header,
    line_filter::filter_lines,
    node_grouper::group_nodes,
    parser::parse_knp,
    parser_helper::DependencyType,
};

#[test]
fn test_filter_lines() -> Result<()> {
    let lines = ["  # S-ID:1 ", "", "   ", "* -1D", "EOS", "* 0D"];

    let filtered = filter_lines(&lines, &EosMarker::default())?;
    assert_eq!(filtered, vec!["# S-ID:1", "* -1D"]);

    Ok(())
}

#[test]
fn test_filter_lines_drops_eos_prefixed_lines() -> Result<()> {
    let eos = EosMarker::new("EOS")?;
    let lines = ["EOS?", "a", "EOS"];

    assert_eq!(filter_lines(&lines, &eos)?, vec!["a"]);

    Ok(())
}

#[test]
fn test_filter_lines_error_marker() {
    let lines = ["# S-ID:1", ";; Cannot make mrph", "EOS"];

    let err = filter_lines(&lines, &EosMarker::default()).unwrap_err();
    assert!(err.to_string().contains(";; Cannot make mrph"));
}

#[test]
fn test_invalid_eos_pattern() {
    assert!(EosMarker::new("EOS(").is_err());
    assert!(KnpParserConfig::new("[", false).is_err());
    assert!(EosMarker::new("").is_err());
    assert!(KnpParserConfig::new("", false).is_err());
}

#[test]
fn test_filter_lines_error_marker_not_hidden_by_eos_prefix() -> Result<()> {
    let lines = ["# S-ID:1", ";; error", "* -1D"];

    let eos = EosMarker::new(";")?;
    let err = filter_lines(&lines, &eos).unwrap_err();
    assert!(err.to_string().contains(";; error"));

    let config = KnpParserConfig::new(";", false)?;
    let err = parse_knp(&lines, &config, |line| Ok(line.to_owned())).unwrap_err();
    assert!(format!("{:#}", err).contains(";; error"));

    Ok(())
}

#[test]
fn test_group_nodes() -> Result<()> {
    let lines = ["+ a", "1", "2", "+ b", "+ c", "3"];

    let nodes = group_nodes("+", &lines, |lines| Ok(lines.len()))?;
    assert_eq!(nodes, vec![3, 1, 2]);

    let nodes = group_nodes("+", &[], |lines| Ok(lines.len()))?;
    assert!(nodes.is_empty());

    Ok(())
}

#[test]
fn test_group_nodes_boundary_violation() {
    let lines = ["1", "+ a"];

    let err = group_nodes("+", &lines, |lines| Ok(lines.len())).unwrap_err();
    assert!(err.to_string().contains("\"1\""));
}

#[test]
fn test_group_nodes_stops_at_first_failure() {
    let lines = ["* a", "* b", "* c"];
    let mut visited = Vec::new();

    let result = group_nodes("*", &lines, |lines| {
        visited.push(lines[0]);
        ensure!(lines[0] != "* b", "bad node");
        Ok(())
    });

    assert!(result.is_err());
    assert_eq!(visited, vec!["* a", "* b"]);
}

#[test]
fn test_group_nodes_long_input() -> Result<()> {
    let lines: Vec<&str> = std::iter::repeat("+ a").take(200_000).collect();

    let nodes = group_nodes("+", &lines, |_| Ok(()))?;
    assert_eq!(nodes.len(), 200_000);

    Ok(())
}

#[test]
fn test_parse_header() -> Result<()> {
    let header = parse_header("* 12P <並キ:名><区切:0-0>  ")?.unwrap();
    assert_eq!(header.parent, 12);
    assert_eq!(header.dependency_type, DependencyType::P);
    assert_eq!(header.fstring, "<並キ:名><区切:0-0>");

    let header = parse_header("+ -1A")?.unwrap();
    assert_eq!(header.parent, -1);
    assert_eq!(header.dependency_type, DependencyType::A);
    assert_eq!(header.fstring, "");

    assert_eq!(parse_header("+")?, None);
    assert_eq!(parse_header("+ D")?, None);
    assert_eq!(parse_header("+ 1X")?, None);

    Ok(())
}

#[test]
fn test_parse_header_parent_overflow() {
    assert!(parse_header("+ 99999999999D").is_err());
}

#[test]
fn test_split_sentences() {
    let lines = ["# S-ID:1", "* -1D", "EOS", "# S-ID:2", " EOS ", "", "  "];

    let sentences = split_sentences(&lines, &EosMarker::default());
    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0], &["# S-ID:1", "* -1D", "EOS"]);
    assert_eq!(sentences[1], &["# S-ID:2", " EOS "]);

    let lines = ["# S-ID:1", "* -1D"];
    assert_eq!(split_sentences(&lines, &EosMarker::default()).len(), 1);
}
