use std::{fmt::Display, fmt::Formatter};

use clap::Parser;
use log::{info, warn};

use crate::error::{Error, Result};

/// Encode or Decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Builds weighted prefix-code trees and drives bit sequences through them",
    long_about = None)]
pub struct Args {
    /// Input to process: a digit string to decode (e.g. 011010010), or
    /// comma/space separated symbols to encode
    #[clap()]
    input: Option<String>,

    /// Decode the input bits against the weighted alphabet
    #[clap(short = 'd', long = "decode")]
    decode: bool,

    /// Encode the input symbols against the weighted alphabet
    #[clap(short = 'e', long = "encode")]
    encode: bool,

    /// The weighted alphabet as symbol:weight pairs, e.g. "A:5,B:2,C:1"
    #[clap(short = 'w', long = "weights")]
    weights: Option<String>,

    /// Sets verbosity. -v 0 is silent, -v 5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

/// Everything the run functions need, filled in from the command line.
#[derive(Debug)]
pub struct HuffOpts {
    /// Encode or decode the input
    pub op_mode: Mode,
    /// The weighted alphabet, still in symbol:weight text form
    pub weights: Option<String>,
    /// The raw input: bit digits to decode, or symbols to encode
    pub input: Option<String>,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            op_mode: Mode::Decode,
            weights: None,
            input: None,
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Put command line information from CLAP into our internal structure.
pub fn opts_init() -> HuffOpts {
    let args = Args::parse();
    let mut opts = HuffOpts::new();

    if args.encode {
        opts.op_mode = Mode::Encode
    };
    if args.decode {
        opts.op_mode = Mode::Decode
    };
    opts.weights = args.weights;
    opts.input = args.input;

    // Set the log level
    match args.v {
        0 => log::set_max_level(log::LevelFilter::Off),
        1 => log::set_max_level(log::LevelFilter::Error),
        2 => log::set_max_level(log::LevelFilter::Warn),
        3 => log::set_max_level(log::LevelFilter::Info),
        4 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    };

    // Below we report initialization status to the user
    info!("---- Hufftree Initialization Start ----",);
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    match &opts.input {
        Some(s) => info!("Input is {}", s),
        None => warn!("No input given"),
    }
    if let Some(w) = &opts.weights {
        info!("Alphabet weights are {}", w)
    };
    info!("---- Hufftree Initialization End ----\n");

    opts
}

/// Parse a weighted alphabet like "A:5,B:2,C:1" into symbol/weight pairs.
/// Symbols are free text; weights must be unsigned integers.
pub fn parse_weights(spec: &str) -> Result<Vec<(String, u32)>> {
    let mut pairs = Vec::new();
    for entry in spec.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (symbol, weight) = entry
            .split_once(':')
            .ok_or_else(|| Error::Config(format!("weight entry '{}' is not symbol:weight", entry)))?;
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(Error::Config(format!(
                "weight entry '{}' has an empty symbol",
                entry
            )));
        }
        let weight = weight.trim().parse::<u32>().map_err(|_| {
            Error::Config(format!("weight in '{}' is not an unsigned integer", entry))
        })?;
        pairs.push((symbol.to_string(), weight));
    }
    if pairs.is_empty() {
        return Err(Error::Config("no symbol:weight pairs given".to_string()));
    }
    Ok(pairs)
}

/// Turn a digit string like "011010010" into bit directives. Every digit
/// passes through as its numeric value; the decoder is what rejects
/// anything outside 0 and 1. Commas and whitespace are separators.
pub fn parse_bits(text: &str) -> Result<Vec<u8>> {
    let mut bits = Vec::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '0'..='9' => bits.push(c as u8 - b'0'),
            ',' => {}
            c if c.is_whitespace() => {}
            other => return Err(Error::Config(format!("'{}' is not a bit digit", other))),
        }
    }
    Ok(bits)
}

/// Split an encode-mode message into symbol tokens. Commas and whitespace
/// both separate; empty tokens are dropped.
pub fn parse_message(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_weights_test() {
        let pairs = parse_weights("A:5,B:2,C:1").unwrap();
        assert_eq!(
            pairs,
            vec![
                ("A".to_string(), 5),
                ("B".to_string(), 2),
                ("C".to_string(), 1)
            ]
        );
        // Spaces around entries and colons are tolerated.
        let pairs = parse_weights(" up : 4 , down : 1 ").unwrap();
        assert_eq!(pairs, vec![("up".to_string(), 4), ("down".to_string(), 1)]);
    }

    #[test]
    fn parse_weights_bad_test() {
        assert!(parse_weights("").is_err());
        assert!(parse_weights("A").is_err());
        assert!(parse_weights("A:x").is_err());
        assert!(parse_weights(":5").is_err());
    }

    #[test]
    fn parse_bits_test() {
        assert_eq!(parse_bits("0110").unwrap(), vec![0, 1, 1, 0]);
        assert_eq!(parse_bits("0, 1 1").unwrap(), vec![0, 1, 1]);
        assert_eq!(parse_bits("").unwrap(), vec![]);
    }

    #[test]
    fn parse_bits_passthrough_test() {
        // Non-binary digits are not caught here. The decoder reports them
        // as invalid bits so the caller sees which value was bad.
        assert_eq!(parse_bits("021").unwrap(), vec![0, 2, 1]);
        assert!(parse_bits("01x0").is_err());
    }

    #[test]
    fn parse_message_test() {
        assert_eq!(parse_message("A,B, C  D"), vec!["A", "B", "C", "D"]);
        assert!(parse_message("").is_empty());
    }
}
