use anyhow::{bail, Result};

use crate::knp::config::EosMarker;

// 前後の空白を除き，空行を飛ばし，文末記号より後ろを捨てる
// ";;" で始まる行は KNP 側のエラーなので通さない
pub fn filter_lines<'a, S: AsRef<str>>(lines: &'a [S], eos: &EosMarker) -> Result<Vec<&'a str>> {
    let lines: Vec<&str> = lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty())
        .take_while(|line| !eos.is_match(line))
        .collect();

    // 文末記号の指定によらずエラー行は見逃さない
    if let Some(line) = lines.iter().find(|line| line.starts_with(";;")) {
        bail!("KNP reported an error: {:?}", line);
    }

    Ok(lines
        .into_iter()
        .filter(|line| !line.starts_with(eos.as_str()))
        .collect())
}
