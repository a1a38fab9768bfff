use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use std::{
    env,
    fs::{self, File},
    io::{self, BufWriter, Read, Write},
};

use knp_json::{
    juman::parse_juman_line,
    knp::{config::KnpParserConfig, document::split_sentences, parser::parse_knp},
    utility::decode_text,
};

struct Args {
    input_path: Option<String>,
    output_path: Option<String>,
    eos: String,
    encoding: String,
    normalize_writer_reader: bool,
    pretty: bool,
}

fn get_args() -> Result<Option<Args>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optopt("o", "output", "write JSON to FILE instead of stdout", "FILE");
    opts.optopt("", "eos", "end-of-sentence pattern (default: EOS)", "PATTERN");
    opts.optopt("", "encoding", "input encoding (default: utf-8)", "LABEL");
    opts.optflag("", "writer-reader", "normalize rel targets to 著者/読者");
    opts.optflag("", "pretty", "pretty-print JSON");
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") {
        eprint!("{}", opts.usage("Usage: knp-json [options] [INPUT]"));
        return Ok(None);
    }

    Ok(Some(Args {
        input_path: matches.free.get(0).cloned(),
        output_path: matches.opt_str("o"),
        eos: matches.opt_str("eos").unwrap_or_else(|| "EOS".to_owned()),
        encoding: matches
            .opt_str("encoding")
            .unwrap_or_else(|| "utf-8".to_owned()),
        normalize_writer_reader: matches.opt_present("writer-reader"),
        pretty: matches.opt_present("pretty"),
    }))
}

fn main() -> Result<()> {
    let args = match get_args()? {
        Some(args) => args,
        None => return Ok(()),
    };

    let config = KnpParserConfig::new(&args.eos, args.normalize_writer_reader)?;

    let bytes = match &args.input_path {
        Some(path) => fs::read(path).with_context(|| format!("Failed to read {}", path))?,
        None => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .context("Failed to read stdin")?;
            bytes
        }
    };
    let text = decode_text(&bytes, &args.encoding)?;

    let lines: Vec<&str> = text.lines().collect();
    let sentences = split_sentences(&lines, &config.eos);

    eprintln!("Processing {} sentences...", sentences.len());

    let pb = create_progress_bar(sentences.len() as u64);
    let mut parsed = Vec::with_capacity(sentences.len());
    for (i, sentence) in sentences.into_iter().enumerate().progress_with(pb) {
        let blist = parse_knp(sentence, &config, parse_juman_line)
            .with_context(|| format!("Failed to parse sentence {}: {:?}", i, sentence.first()))?;
        parsed.push(blist);
    }

    let writer: Box<dyn Write> = match &args.output_path {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create {}", path))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);

    if args.pretty {
        serde_json::to_writer_pretty(&mut writer, &parsed)?;
    } else {
        serde_json::to_writer(&mut writer, &parsed)?;
    }
    writeln!(writer)?;
    writer.flush()?;

    eprintln!("Finished.");

    Ok(())
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}
