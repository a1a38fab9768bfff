use anyhow::{ensure, Context, Result};
use regex::Regex;

#[derive(Debug, Clone)]
pub struct EosMarker {
    text: String,
    regex: Regex,
}

impl EosMarker {
    pub fn new(text: &str) -> Result<Self> {
        ensure!(!text.is_empty(), "End-of-sentence pattern is empty");

        let regex = Regex::new(&format!("^(?:{})$", text))
            .with_context(|| format!("Invalid end-of-sentence pattern: {:?}", text))?;

        Ok(EosMarker {
            text: text.to_owned(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    // 行全体が一致するか
    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

impl Default for EosMarker {
    fn default() -> Self {
        EosMarker {
            text: "EOS".to_owned(),
            regex: Regex::new("^(?:EOS)$").unwrap(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct KnpParserConfig {
    pub eos: EosMarker,

    // rel の target を 著者/読者 に正規化して拾うか
    pub normalize_writer_reader: bool,
}

impl KnpParserConfig {
    pub fn new(eos: &str, normalize_writer_reader: bool) -> Result<Self> {
        Ok(KnpParserConfig {
            eos: EosMarker::new(eos)?,
            normalize_writer_reader,
        })
    }
}
