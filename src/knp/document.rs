use anyhow::{Context, Result};

use crate::knp::{
    config::{EosMarker, KnpParserConfig},
    parser::parse_knp,
    parser_helper::BList,
};

// 複数文からなる出力を文ごとに分ける (各文は文末記号の行を含む)
pub fn split_sentences<'a, S: AsRef<str>>(lines: &'a [S], eos: &EosMarker) -> Vec<&'a [S]> {
    let mut sentences = Vec::new();
    let mut lines = lines;

    while !lines.is_empty() {
        match lines.iter().position(|line| eos.is_match(line.as_ref().trim())) {
            Some(i) => {
                sentences.push(&lines[..=i]);
                lines = &lines[(i + 1)..];
            }

            // 文末記号のないまま終わっている
            None => {
                if lines.iter().any(|line| !line.as_ref().trim().is_empty()) {
                    sentences.push(lines);
                }
                break;
            }
        }
    }

    sentences
}

pub fn parse_knp_document<M, F>(
    text: &str,
    config: &KnpParserConfig,
    parse_morpheme: F,
) -> Result<Vec<BList<M>>>
where
    F: Fn(&str) -> Result<M>,
{
    let lines: Vec<&str> = text.lines().collect();

    split_sentences(&lines, &config.eos)
        .into_iter()
        .enumerate()
        .map(|(i, sentence)| {
            parse_knp(sentence, config, &parse_morpheme)
                .with_context(|| format!("Failed to parse sentence {}", i))
        })
        .collect()
}
