use std::collections::BTreeMap;

use anyhow::{Context, Result};

use crate::knp::parser_helper::{Argument, Pas};

pub const CASE_ANALYSIS_KEY: &str = "格解析結果";

// "食べる/たべる:動2:ガ/C/太郎/0/0/1;ヲ/U/-/-/-/-"
//
// 格フレームの値がないもの (":" が 2 つ未満) は None
pub fn parse_pas(value: &str) -> Result<Option<Pas>> {
    let segments: Vec<&str> = value.split(':').collect();
    if segments.len() < 3 {
        return Ok(None);
    }

    let cfid = format!("{}{}", segments[0], segments[1]);

    let rest = segments[2..].concat();

    let mut args = BTreeMap::new();
    for group in rest.split(';') {
        let fields: Vec<&str> = group.split('/').collect();

        // U: 格要素なし, -: 未解析
        if fields.len() <= 5 || fields[1] == "U" || fields[1] == "-" {
            continue;
        }

        let tid = fields[3]
            .parse()
            .with_context(|| format!("Invalid argument index in {:?}", group))?;

        args.insert(
            fields[0].to_owned(),
            Argument {
                case: fields[0].to_owned(),
                arg_type: fields[1].to_owned(),
                word: fields[2].to_owned(),
                tid,
                sid: fields[5].to_owned(),
            },
        );
    }

    Ok(Some(Pas { cfid, args }))
}
