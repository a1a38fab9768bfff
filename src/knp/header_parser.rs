use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::knp::parser_helper::DependencyType;

#[derive(Debug, Clone, PartialEq)]
pub struct Header<'a> {
    pub parent: i32,
    pub dependency_type: DependencyType,
    pub fstring: &'a str,
}

// "* 1D <...>" / "+ -1D <...>"
//
// 一致しなければ None
pub fn parse_header(line: &str) -> Result<Option<Header<'_>>> {
    static REGEX_HEADER: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^\S+ (-?\d+)([DPIA])(.*)$").unwrap());

    // "*" や "+" だけの行
    if line.chars().count() == 1 {
        return Ok(None);
    }

    let caps = match REGEX_HEADER.captures(line) {
        Some(caps) => caps,
        None => return Ok(None),
    };

    let parent = caps[1]
        .parse()
        .with_context(|| format!("Invalid parent index: {:?}", line))?;
    let dependency_type = DependencyType::of(&caps[2])?;
    let fstring = caps.get(3).map_or("", |m| m.as_str().trim());

    Ok(Some(Header {
        parent,
        dependency_type,
        fstring,
    }))
}
