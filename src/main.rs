use std::fs;

use clap::Parser;
use reducta::evaluate;

/// reducta evaluates a flat infix arithmetic expression (`+ - * / ^`, no
/// parentheses) and prints the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reducta to read the expression from a file instead of the
    /// command line. Lines are concatenated token-wise.
    #[arg(short, long)]
    file: bool,

    /// Prints every discovered token on its own line before evaluating.
    #[arg(short, long)]
    tokens: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match evaluate(&expression, args.tokens) {
        Ok(result) => println!("{result:.6}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
