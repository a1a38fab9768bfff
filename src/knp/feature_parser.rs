use anyhow::Result;

use crate::knp::{
    parser_helper::Features,
    pas_parser::{parse_pas, CASE_ANALYSIS_KEY},
    rel_parser::parse_rel,
};

// "<文頭><ガ><係:未格><rel type=... />" を解析する
//
// 知らない形の素性はそのまま key/value として map に入れる
pub fn parse_features(
    fstring: &str,
    ignore_first_character: bool,
    normalize_writer_reader: bool,
) -> Result<Features> {
    let mut fstring = fstring.trim_end();

    if ignore_first_character {
        let mut chars = fstring.chars();
        chars.next();
        fstring = chars.as_str();
    }

    let fstring = fstring.strip_prefix('<').unwrap_or(fstring);
    let fstring = fstring.strip_suffix('>').unwrap_or(fstring);

    let mut features = Features::default();

    for fragment in fstring.split("><") {
        if fragment.is_empty() {
            continue;
        }

        if fragment.starts_with("rel") {
            if let Some(rel) = parse_rel(fragment, normalize_writer_reader) {
                features.rels.push(rel);
            }
            continue;
        }

        let (key, value) = fragment.split_once(':').unwrap_or((fragment, ""));

        if key == CASE_ANALYSIS_KEY {
            features.pas = parse_pas(value)?;
        }

        features.map.insert(key.to_owned(), value.to_owned());
    }

    Ok(features)
}
