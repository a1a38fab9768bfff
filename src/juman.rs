// Juman 形式の形態素行
//
// 表層形 読み 見出し語 品詞 品詞ID 品詞細分類 細分類ID 活用型 活用型ID 活用形 活用形ID 意味情報 素性
// 太郎 たろう 太郎 名詞 6 人名 5 * 0 * 0 "代表表記:太郎/たろう" <漢字><文頭>
//
// 空白は "\ " と書かれる

use std::collections::BTreeMap;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::knp::feature_parser::parse_features;

const FIELD_COUNT: usize = 11;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Morpheme {
    pub surface: String, // 表層形
    pub reading: String, // 読み
    pub base: String,    // 見出し語

    pub pos: String, // 品詞
    pub pos_id: i32,
    pub subpos: String, // 品詞細分類
    pub subpos_id: i32,
    pub conj_type: String, // 活用型
    pub conj_type_id: i32,
    pub conj_form: String, // 活用形
    pub conj_form_id: i32,

    pub semantic_info: Option<String>, // 意味情報 (NIL なら None)
    pub fstring: String,
    pub features: BTreeMap<String, String>,
}

pub fn parse_juman_line(line: &str) -> Result<Morpheme> {
    let (fields, rest) = split_fields(line.trim(), FIELD_COUNT);
    ensure!(
        fields.len() == FIELD_COUNT,
        "Morpheme line has too few fields: {:?}",
        line
    );

    let id = |i: usize| -> Result<i32> {
        fields[i]
            .parse()
            .with_context(|| format!("Invalid id {:?} in {:?}", fields[i], line))
    };

    let (semantic_info, fstring) = split_semantic_info(rest);

    let features = parse_features(fstring, false, false)?.map;

    Ok(Morpheme {
        surface: fields[0].clone(),
        reading: fields[1].clone(),
        base: fields[2].clone(),
        pos: fields[3].clone(),
        pos_id: id(4)?,
        subpos: fields[5].clone(),
        subpos_id: id(6)?,
        conj_type: fields[7].clone(),
        conj_type_id: id(8)?,
        conj_form: fields[9].clone(),
        conj_form_id: id(10)?,
        semantic_info,
        fstring: fstring.to_owned(),
        features,
    })
}

// 先頭から count 個の空白区切りのフィールドを取り出し，残りを返す
fn split_fields(line: &str, count: usize) -> (Vec<String>, &str) {
    let mut fields = Vec::new();
    let mut field = String::new();

    let mut chars = line.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' if matches!(chars.peek(), Some(&(_, ' '))) => {
                chars.next();
                field.push(' ');
            }

            ' ' => {
                fields.push(std::mem::take(&mut field));
                if fields.len() == count {
                    return (fields, line[(i + 1)..].trim_start());
                }
                // 連続する空白は 1 つの区切りとみなす
                while matches!(chars.peek(), Some(&(_, ' '))) {
                    chars.next();
                }
            }

            c => field.push(c),
        }
    }

    if !field.is_empty() {
        fields.push(field);
    }

    (fields, "")
}

// "\"代表表記:太郎/たろう\" <漢字>" => (Some("代表表記:太郎/たろう"), "<漢字>")
fn split_semantic_info(rest: &str) -> (Option<String>, &str) {
    if let Some(quoted) = rest.strip_prefix('"') {
        if let Some(end) = quoted.find('"') {
            return (
                Some(quoted[..end].to_owned()),
                quoted[(end + 1)..].trim_start(),
            );
        }
    }

    if let Some(after) = rest.strip_prefix("NIL") {
        return (None, after.trim_start());
    }

    (None, rest)
}
