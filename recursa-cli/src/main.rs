use clap::{Parser, Subcommand};
use recursa_core::{
    MagicConfig, MagicTrace, Strategy, WordsConfig, demonstration_inputs, fibonacci_with_seeds_by,
    from_roman, gcd, magic_number_with, subtraction_steps, to_roman, to_words_by, to_words_with,
};
use serde::Serialize;
use std::process;
use tracing::Level;

/// Deepest recursion the CLI will attempt before asking for the iterative form.
const MAX_RECURSION_DEPTH: u64 = 10_000;

fn check_depth(strategy: Strategy, depth: u64) -> anyhow::Result<()> {
    if strategy == Strategy::Recursive && depth > MAX_RECURSION_DEPTH {
        anyhow::bail!(
            "recursive strategy would recurse {depth} calls deep (limit {MAX_RECURSION_DEPTH}); use --strategy iterative"
        );
    }
    Ok(())
}

/// A CLI tool to run the recursa-core recursion exercises.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output format (summary or json)
    #[arg(short, long, global = true, default_value = "summary")]
    format: OutputFormat,

    /// Log each step of the computation to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Greatest common divisor of two integers
    Gcd {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
        /// iterative or recursive
        #[arg(short, long, default_value_t = Strategy::Iterative)]
        strategy: Strategy,
    },
    /// The n-th term of a Fibonacci sequence
    Fib {
        /// Position in the sequence, starting at 1
        #[arg(allow_negative_numbers = true)]
        n: i64,
        /// First term of the sequence
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        seed1: i64,
        /// Second term of the sequence
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        seed2: i64,
        /// iterative or recursive
        #[arg(short, long, default_value_t = Strategy::Iterative)]
        strategy: Strategy,
    },
    /// Convert an integer to a Roman numeral
    Roman {
        #[arg(allow_negative_numbers = true)]
        value: i64,
        /// iterative or recursive
        #[arg(short, long, default_value_t = Strategy::Recursive)]
        strategy: Strategy,
    },
    /// Convert a Roman numeral back to an integer
    FromRoman { numeral: String },
    /// Spell an integer out in English words
    Words {
        #[arg(allow_negative_numbers = true)]
        value: i64,
        /// Token placed between words
        #[arg(long, default_value = "_")]
        separator: String,
        /// iterative or recursive
        #[arg(short, long, default_value_t = Strategy::Recursive)]
        strategy: Strategy,
    },
    /// Follow the letter-count chain of an integer to the magic number
    Magic {
        #[arg(allow_negative_numbers = true)]
        value: i64,
        /// Token placed between words
        #[arg(long, default_value = "_")]
        separator: String,
        /// Give up after this many steps
        #[arg(long, default_value_t = recursa_core::config::DEFAULT_MAX_STEPS)]
        max_steps: usize,
    },
    /// Spell out the fixed battery of sample integers, one per line
    Demo {
        /// Token placed between words
        #[arg(long, default_value = "_")]
        separator: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
enum OutputFormat {
    Summary,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(OutputFormat::Summary),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid format: {s}")),
        }
    }
}

#[derive(Serialize)]
struct GcdOutput {
    a: i64,
    b: i64,
    strategy: Strategy,
    gcd: u64,
}

#[derive(Serialize)]
struct FibonacciOutput {
    n: i64,
    seed1: i64,
    seed2: i64,
    strategy: Strategy,
    value: i64,
}

#[derive(Serialize)]
struct RomanOutput {
    value: i64,
    numeral: String,
}

#[derive(Serialize)]
struct WordsOutput {
    value: i64,
    words: String,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let Some(command) = args.command else {
        return Ok(());
    };

    match command {
        Commands::Gcd { a, b, strategy } => {
            check_depth(strategy, subtraction_steps(a, b))?;
            let output = GcdOutput {
                a,
                b,
                strategy,
                gcd: gcd(a, b, strategy),
            };
            match args.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
                OutputFormat::Summary => println!("{}", output.gcd),
            }
        }
        Commands::Fib {
            n,
            seed1,
            seed2,
            strategy,
        } => {
            check_depth(strategy, n.max(0).unsigned_abs())?;
            let output = FibonacciOutput {
                n,
                seed1,
                seed2,
                strategy,
                value: fibonacci_with_seeds_by(n, seed1, seed2, strategy),
            };
            match args.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
                OutputFormat::Summary => println!("{}", output.value),
            }
        }
        Commands::Roman { value, strategy } => {
            let output = RomanOutput {
                value,
                numeral: to_roman(value, strategy)?,
            };
            match args.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
                OutputFormat::Summary => println!("{}", output.numeral),
            }
        }
        Commands::FromRoman { numeral } => {
            let output = RomanOutput {
                value: from_roman(&numeral)?,
                numeral,
            };
            match args.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
                OutputFormat::Summary => println!("{}", output.value),
            }
        }
        Commands::Words {
            value,
            separator,
            strategy,
        } => {
            let config = WordsConfig::new(separator);
            config.validate()?;
            let output = WordsOutput {
                value,
                words: to_words_by(value, &config, strategy),
            };
            match args.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
                OutputFormat::Summary => println!("{}", output.words),
            }
        }
        Commands::Magic {
            value,
            separator,
            max_steps,
        } => {
            let config = MagicConfig::default()
                .with_words(WordsConfig::new(separator))
                .with_max_steps(max_steps);
            let trace: MagicTrace = magic_number_with(value, &config)?;
            match args.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&trace)?),
                OutputFormat::Summary => print!("{trace}"),
            }
        }
        Commands::Demo { separator } => {
            let config = WordsConfig::new(separator);
            config.validate()?;
            let outputs: Vec<WordsOutput> = demonstration_inputs()
                .into_iter()
                .map(|value| WordsOutput {
                    value,
                    words: to_words_with(value, &config),
                })
                .collect();
            match args.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outputs)?),
                OutputFormat::Summary => {
                    for output in outputs {
                        println!("{}", output.words);
                    }
                }
            }
        }
    }

    Ok(())
}
