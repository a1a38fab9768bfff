use std::collections::BTreeMap;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

// 1 文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BList<M> {
    pub eos: String,             // 文末記号
    pub comment: Option<String>, // "# S-ID:..." 行
    pub sid: String,             // 文 ID (なければ空)
    pub bunsetsu: Vec<Bunsetsu<M>>,
}

// 文節
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bunsetsu<M> {
    pub parent: i32, // 係り先 (-1 は係り先なし)
    pub dependency_type: DependencyType,
    pub fstring: String,
    pub repname: Option<String>, // 正規化代表表記
    pub tags: Vec<Tag<M>>,
}

// 基本句
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag<M> {
    pub parent: i32,
    pub dependency_type: DependencyType,
    pub fstring: String,
    pub morphemes: Vec<M>,
    pub features: BTreeMap<String, String>,
    pub rels: Vec<Rel>,
    pub pas: Option<Pas>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DependencyType {
    D, // 通常の係り受け
    P, // 並列
    I, // 部分並列
    A, // 同格
}

impl DependencyType {
    pub fn of(name: &str) -> Result<Self> {
        match name {
            "D" => Ok(Self::D),
            "P" => Ok(Self::P),
            "I" => Ok(Self::I),
            "A" => Ok(Self::A),
            name => bail!("Unknown dependency type: {}", name),
        }
    }
}

// <rel type="ガ" target="太郎" sid="1" id="0"/>
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rel {
    pub rel_type: String,
    pub target: String,
    pub sid: Option<String>,
    pub mode: Option<String>,
    pub id: Option<i32>,
}

// 述語項構造
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pas {
    pub cfid: String, // 格フレーム ID
    pub args: BTreeMap<String, Argument>,
}

// ガ/C/太郎/0/0/1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    pub case: String,     // 格
    pub arg_type: String, // C, N, O, D, E など
    pub word: String,     // 項の表記
    pub tid: i32,         // 基本句番号
    pub sid: String,      // 文 ID
}

// 素性文字列の解析結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Features {
    pub map: BTreeMap<String, String>,
    pub rels: Vec<Rel>,
    pub pas: Option<Pas>,
}
