//! Vigenère CLI - Command line interface for encoding, decoding and
//! password generation.
//!
//! Argument-count violations are rejected by the parser with exit status 2
//! before any cipher work happens. Cipher errors exit with status 1.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use vigenere_cipher::{derive_password, Alphabet, AlphabetConfig, Cipher, DEFAULT_PASSWORD_LENGTH};

const AFTER_HELP: &str = "\
When the keyword is shorter than the text it is repeated as many times as
needed. Remember only the base keyword; the repetition is handled for you.

The default alphabet holds lowercase and uppercase letters, '#', digits and
/\\.,!@$%^&*(). Any other character, including a space, is rejected. Encoded
text can only be decoded with the same alphabet it was encoded with.

Examples:
  vigenere -e BASEWORD KEYWORD
  vigenere -d ENCODED KEYWORD
  vigenere -g BASEWORD KEYWORD [LENGTH]";

#[derive(Parser, Debug)]
#[command(name = "vigenere")]
#[command(about = "Vigenère cipher - encode, decode and generate passwords")]
#[command(after_help = AFTER_HELP)]
#[command(version)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["encode", "decode", "generate"]),
))]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Encode BASE with KEYWORD (remember the keyword).
    #[arg(short, long, num_args = 2, value_names = ["BASE", "KEYWORD"])]
    encode: Option<Vec<String>>,

    /// Decode ENCODED with the KEYWORD it was encoded with.
    #[arg(short, long, num_args = 2, value_names = ["ENCODED", "KEYWORD"])]
    decode: Option<Vec<String>>,

    /// Shuffle BASE and KEYWORD, encode, and sample a password of LENGTH (default 10).
    #[arg(
        short,
        long,
        num_args = 2..=3,
        value_names = ["BASE", "KEYWORD", "LENGTH"],
        allow_negative_numbers = true
    )]
    generate: Option<Vec<String>>,

    /// Use these symbols, in order, as the alphabet.
    #[arg(long, value_name = "SYMBOLS", conflicts_with = "alphabet_file")]
    alphabet: Option<String>,

    /// Load the alphabet from a JSON file ({"version": 1, "symbols": "..."}).
    #[arg(long, value_name = "PATH")]
    alphabet_file: Option<PathBuf>,
}

/// The single operation requested on the command line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Encode { text: String, keyword: String },
    Decode { text: String, keyword: String },
    Generate {
        base: String,
        keyword: String,
        length: Option<String>,
    },
}

impl Cli {
    fn operation(&self) -> Result<Command> {
        // The parser guarantees exactly one mode and its value count
        if let Some([text, keyword]) = self.encode.as_deref() {
            return Ok(Command::Encode {
                text: text.clone(),
                keyword: keyword.clone(),
            });
        }
        if let Some([text, keyword]) = self.decode.as_deref() {
            return Ok(Command::Decode {
                text: text.clone(),
                keyword: keyword.clone(),
            });
        }
        match self.generate.as_deref() {
            Some([base, keyword, rest @ ..]) => Ok(Command::Generate {
                base: base.clone(),
                keyword: keyword.clone(),
                length: rest.first().cloned(),
            }),
            _ => anyhow::bail!("Wrong number of arguments (too many or too few)"),
        }
    }

    fn alphabet(&self) -> Result<Alphabet> {
        if let Some(symbols) = &self.alphabet {
            return Alphabet::new(symbols).context("Invalid --alphabet");
        }
        if let Some(path) = &self.alphabet_file {
            let config = AlphabetConfig::load(path)
                .with_context(|| format!("Failed to read alphabet file {}", path.display()))?;
            return config.into_alphabet().context("Invalid alphabet file");
        }
        Ok(Alphabet::default())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let output = run(&cli)?;
    println!("{}", output);

    Ok(())
}

/// Execute the requested command and return the text to print.
fn run(cli: &Cli) -> Result<String> {
    let alphabet = cli.alphabet()?;
    debug!("Using alphabet of {} symbols", alphabet.len());
    let cipher = Cipher::new(alphabet);

    match cli.operation()? {
        Command::Encode { text, keyword } => cmd_encode(&cipher, &text, &keyword),
        Command::Decode { text, keyword } => cmd_decode(&cipher, &text, &keyword),
        Command::Generate {
            base,
            keyword,
            length,
        } => cmd_generate(&cipher, &base, &keyword, length.as_deref()),
    }
}

fn cmd_encode(cipher: &Cipher, text: &str, keyword: &str) -> Result<String> {
    let encoded = cipher
        .encode(text, keyword)
        .context("Failed to encode text")?;
    Ok(format!("Encoded text: {}", encoded))
}

fn cmd_decode(cipher: &Cipher, text: &str, keyword: &str) -> Result<String> {
    let decoded = cipher
        .decode(text, keyword)
        .context("Failed to decode text")?;
    Ok(format!("Decoded text: {}", decoded))
}

fn cmd_generate(
    cipher: &Cipher,
    base: &str,
    keyword: &str,
    length: Option<&str>,
) -> Result<String> {
    let length = parse_length(length);
    let password = derive_password(cipher, base, keyword, length)
        .context("Failed to generate password")?;
    Ok(format!(
        "Password generated successfully.\nYour password: {}",
        password.expose()
    ))
}

/// Parse the optional password length, falling back to the default when it
/// is absent or not a non-negative integer.
fn parse_length(raw: Option<&str>) -> usize {
    match raw {
        None => DEFAULT_PASSWORD_LENGTH,
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!(
                "Wrong length {:?} ({}). Assuming default length - {}",
                raw, e, DEFAULT_PASSWORD_LENGTH
            );
            DEFAULT_PASSWORD_LENGTH
        }),
    }
}
