use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::knp::parser_helper::Rel;

// target が未定であることを表す
pub const UNSET_TARGET: &str = "？";

static WRITER_READER: &[&str] = &["著者", "読者"];

static PERSON_TO_WRITER_READER: &[(&str, &str)] = &[("一人称", "著者"), ("二人称", "読者")];

// rel type="ガ" mode="？" target="太郎" sid="1" id="0"/
pub fn parse_rel(fragment: &str, normalize_writer_reader: bool) -> Option<Rel> {
    static REGEX_REL: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r#"rel type="([^\s"]+?)"(?: mode="([^\s"]+?)")? target="([^\s"]*?)"(?: sid="([^\s"]*?)" id="(-?\d+)")?"#,
        )
        .unwrap()
    });

    let candidates: Vec<Captures> = REGEX_REL.captures_iter(fragment).collect();

    if let Some(rel) = candidates.iter().find_map(|caps| {
        if count_groups(caps) >= 4 && target_of(caps) != UNSET_TARGET {
            to_rel(caps, target_of(caps).to_owned())
        } else {
            None
        }
    }) {
        return Some(rel);
    }

    if !normalize_writer_reader {
        return None;
    }

    candidates.iter().find_map(|caps| {
        let target = target_of(caps);
        if count_groups(caps) >= 3
            && target != UNSET_TARGET
            && (WRITER_READER.contains(&target) || person_to_writer_reader(target).is_some())
        {
            let target = person_to_writer_reader(target).unwrap_or(target);
            to_rel(caps, target.to_owned())
        } else {
            None
        }
    })
}

fn person_to_writer_reader(target: &str) -> Option<&'static str> {
    PERSON_TO_WRITER_READER
        .iter()
        .find(|(person, _)| *person == target)
        .map(|(_, normalized)| *normalized)
}

// 実際に一致したグループの数 (全体は除く)
//
// type と target は必ず一致するので，mode か sid/id のどちらかがないと 3 に届かない
// mode のない外界照応 (rel type="ガ" target="一人称"/) は著者・読者への正規化の対象外
fn count_groups(caps: &Captures) -> usize {
    caps.iter().skip(1).filter(|m| m.is_some()).count()
}

fn target_of<'a>(caps: &Captures<'a>) -> &'a str {
    caps.get(3).map_or("", |m| m.as_str())
}

// id が i32 に収まらないものは一致しなかったものとみなす
fn to_rel(caps: &Captures, target: String) -> Option<Rel> {
    let group = |i: usize| caps.get(i).map(|m| m.as_str().to_owned());

    let id = match caps.get(5) {
        Some(m) => Some(m.as_str().parse().ok()?),
        None => None,
    };

    Some(Rel {
        rel_type: group(1).unwrap_or_default(),
        target,
        sid: group(4),
        mode: group(2),
        id,
    })
}
