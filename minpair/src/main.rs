use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use minpair::ContrastArgs;
use minpair_core::{Classifier, Config, RecordFormat, Tokenizer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "minpair", version, about = "Find minimal pairs in IPA word lists")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show how transcriptions are tokenized and split into syllables
    Analyse {
        #[arg(required = true)]
        ipa: Vec<String>,
        /// Print the parsed syllables as JSON
        #[arg(long)]
        json: bool,
        /// TOML configuration file (for extra symbols)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Check whether two transcriptions form a minimal pair
    ///
    /// Every phoneme contrast is reported; confusable groups are not applied.
    Check {
        first: String,
        second: String,
        #[command(flatten)]
        options: ContrastArgs,
    },
    /// Find every minimal pair in a word list
    Generate {
        /// Word records: JSON array of {text, ipa} or text<TAB>ipa lines
        input: PathBuf,
        /// Input format; guessed from the extension when omitted
        #[arg(long, value_name = "FORMAT")]
        input_format: Option<RecordFormat>,
        /// Output format: json or tsv
        #[arg(long, default_value = "json")]
        format: RecordFormat,
        /// Write pairs here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        #[command(flatten)]
        options: ContrastArgs,
    },
    /// Print the built-in confusable groups as a filter file
    Filters,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Analyse { ipa, json, config } => {
            let cfg = match config {
                Some(path) => Config::load_toml(path)?,
                None => Config::default(),
            };
            let tokenizer = Tokenizer::from_config(&cfg);
            if json {
                println!("{}", minpair::analyse_json(&tokenizer, &ipa)?);
            } else {
                println!("{}", minpair::analyse(&tokenizer, &ipa));
            }
        }
        Command::Check {
            first,
            second,
            options,
        } => {
            let cfg = options.check_config()?;
            let tokenizer = Tokenizer::from_config(&cfg);
            let classifier = Classifier::new(&cfg);
            println!("{}", minpair::check(&classifier, &tokenizer, &first, &second));
        }
        Command::Generate {
            input,
            input_format,
            format,
            output,
            options,
        } => {
            let cfg = options.config()?;
            let tokenizer = Tokenizer::from_config(&cfg);
            let generator = options.generator(&cfg)?;
            let words = minpair::load_words(&input, input_format, &tokenizer)?;
            tracing::info!(
                words = words.len(),
                comparisons = minpair_core::comparison_count(words.len()),
                "searching for minimal pairs"
            );
            let pairs = minpair::generate(&generator, &words);
            if let Some(text) = minpair::write_pairs(&pairs, format, output.as_deref())? {
                println!("{text}");
            }
        }
        Command::Filters => print!("{}", minpair::filters_template()),
    }
    Ok(())
}
