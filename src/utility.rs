use anyhow::{ensure, Context, Result};
use encoding_rs::Encoding;

// KNP の出力は EUC-JP のこともある
pub fn decode_text(bytes: &[u8], label: &str) -> Result<String> {
    let encoding = Encoding::for_label(label.as_bytes())
        .with_context(|| format!("Unknown encoding: {}", label))?;

    let (text, _, had_errors) = encoding.decode(bytes);
    ensure!(!had_errors, "Input is not valid {}", encoding.name());

    Ok(text.into_owned())
}
