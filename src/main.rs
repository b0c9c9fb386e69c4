//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use hufftree::tools::cli::{opts_init, parse_bits, parse_message, parse_weights, HuffOpts, Mode};
use hufftree::tools::freq_count::symbol_freqs;
use hufftree::{build_tree, decode, encode, Error, Result};

fn main() -> Result<()> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    let options = opts_init();

    //----- Figure out what we need to do and go do it
    let result = match options.op_mode {
        Mode::Encode => run_encode(&options),
        Mode::Decode => run_decode(&options),
    };

    if let Err(e) = &result {
        error!("{}", e);
    }
    info!("Done.\n");
    result
}

/// Decode mode: build the tree from the weighted alphabet, drive the
/// input bits through it, and print the symbols they spell.
fn run_decode(opts: &HuffOpts) -> Result<()> {
    let weights = match &opts.weights {
        Some(w) => parse_weights(w)?,
        None => {
            return Err(Error::Config(
                "decoding needs a weighted alphabet (-w \"A:5,B:2,C:1\")".to_string(),
            ))
        }
    };
    let tree = build_tree(&weights)?;

    let bits = parse_bits(opts.input.as_deref().unwrap_or(""))?;
    let symbols = decode(&bits, &tree)?;
    println!("{}", symbols.join(" "));
    Ok(())
}

/// Encode mode: the alphabet comes from -w, or failing that from the
/// message's own symbol frequencies. Prints the concatenated codes as one
/// digit string.
fn run_encode(opts: &HuffOpts) -> Result<()> {
    let message = parse_message(opts.input.as_deref().unwrap_or(""));
    let weights = match &opts.weights {
        Some(w) => parse_weights(w)?,
        None => symbol_freqs(&message),
    };
    let tree = build_tree(&weights)?;

    let bits = encode(&message, &tree)?;
    let text: String = bits.iter().map(|&b| (b'0' + b) as char).collect();
    println!("{}", text);
    Ok(())
}
