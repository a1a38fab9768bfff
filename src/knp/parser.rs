use anyhow::{ensure, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::knp::{
    config::KnpParserConfig,
    feature_parser::parse_features,
    header_parser::parse_header,
    line_filter::filter_lines,
    node_grouper::group_nodes,
    parser_helper::{BList, Bunsetsu, Tag},
};

// 1 文分の行を解析する
pub fn parse_knp<M, S, F>(
    lines: &[S],
    config: &KnpParserConfig,
    parse_morpheme: F,
) -> Result<BList<M>>
where
    S: AsRef<str>,
    F: Fn(&str) -> Result<M>,
{
    let lines = filter_lines(lines, &config.eos)?;

    let comment = lines.iter().find(|line| line.starts_with('#'));
    let sid = comment.map(|c| parse_sid(c)).unwrap_or_default();

    // 先頭は文全体の行 ("# S-ID:...")
    let bunsetsu_lines = lines.get(1..).unwrap_or(&[]);

    let bunsetsu = group_nodes("*", bunsetsu_lines, |lines| {
        parse_bunsetsu(lines, config, &parse_morpheme)
    })?;

    Ok(BList {
        eos: config.eos.as_str().to_owned(),
        comment: comment.map(|c| c.to_string()),
        sid,
        bunsetsu,
    })
}

fn parse_sid(comment: &str) -> String {
    static REGEX_SID: Lazy<Regex> = Lazy::new(|| Regex::new(r"S-ID:(\S+)").unwrap());

    REGEX_SID
        .captures(comment)
        .map(|caps| caps[1].to_owned())
        .unwrap_or_default()
}

fn parse_bunsetsu<M, F>(
    lines: &[&str],
    config: &KnpParserConfig,
    parse_morpheme: &F,
) -> Result<Bunsetsu<M>>
where
    F: Fn(&str) -> Result<M>,
{
    static REGEX_REPNAME: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"正規化代表表記:([^>]+)").unwrap());

    let header = parse_header(lines[0])?
        .with_context(|| format!("Invalid bunsetsu: {:?}", lines))?;

    let tag_lines = &lines[1..];
    ensure!(!tag_lines.is_empty(), "Bunsetsu has no tags: {:?}", lines);

    let tags = group_nodes("+", tag_lines, |lines| parse_tag(lines, config, parse_morpheme))
        .with_context(|| format!("Failed to parse bunsetsu: {:?}", lines[0]))?;

    let repname = REGEX_REPNAME
        .captures(header.fstring)
        .map(|caps| caps[1].to_owned());

    Ok(Bunsetsu {
        parent: header.parent,
        dependency_type: header.dependency_type,
        fstring: header.fstring.to_owned(),
        repname,
        tags,
    })
}

fn parse_tag<M, F>(
    lines: &[&str],
    config: &KnpParserConfig,
    parse_morpheme: &F,
) -> Result<Tag<M>>
where
    F: Fn(&str) -> Result<M>,
{
    let header = parse_header(lines[0])?
        .with_context(|| format!("Invalid tag: {:?}", lines))?;

    let morphemes = lines[1..]
        .iter()
        .map(|&line| {
            parse_morpheme(line).with_context(|| format!("Failed to parse morpheme: {:?}", line))
        })
        .collect::<Result<Vec<_>>>()?;

    let features = parse_features(header.fstring, false, config.normalize_writer_reader)
        .with_context(|| format!("Failed to parse features: {:?}", lines[0]))?;

    Ok(Tag {
        parent: header.parent,
        dependency_type: header.dependency_type,
        fstring: header.fstring.to_owned(),
        morphemes,
        features: features.map,
        rels: features.rels,
        pas: features.pas,
    })
}
