use std::fs;

use clap::Parser;
use rpncalc::{error::Error, evaluate, evaluate_postfix, to_postfix};
use tracing_subscriber::EnvFilter;

/// rpncalc evaluates arithmetic expressions by converting them to Reverse
/// Polish notation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read expressions from a file, one per line, instead of taking a single
    /// expression.
    #[arg(short, long)]
    file: bool,

    /// Print the postfix form of each expression instead of its value.
    #[arg(short, long, conflicts_with = "rpn")]
    postfix: bool,

    /// Treat the input as postfix notation and evaluate it directly.
    #[arg(short, long)]
    rpn: bool,

    contents: String,
}

impl Args {
    fn run(&self, expression: &str) -> Result<String, Error> {
        if self.postfix {
            to_postfix(expression)
        } else if self.rpn {
            evaluate_postfix(expression).map(|v| v.to_string())
        } else {
            evaluate(expression).map(|v| v.to_string())
        }
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    let expressions: Vec<&str> = if args.file {
        script.lines().map(str::trim).filter(|line| !line.is_empty()).collect()
    } else {
        vec![script.as_str()]
    };

    let mut failed = false;
    for expression in expressions {
        match args.run(expression) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                eprintln!("{expression}: {e}");
                failed = true;
            },
        }
    }

    if failed {
        std::process::exit(1);
    }
}
