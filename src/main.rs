use std::fs;
use std::io::{stdin, stdout};
use std::process::ExitCode;

use clap::Parser;
use monkey_interpreter::environment::Environment;
use monkey_interpreter::interpreter;
use monkey_interpreter::object::Object;

/// Interpreter for the Monkey programming language. Without arguments it
/// starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate the given source text instead of a file.
    #[arg(short, long, conflicts_with = "file")]
    eval: Option<String>,

    /// Script to evaluate.
    file: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let source = match (args.eval, args.file) {
        (Some(source), _) => source,
        (None, Some(path)) => match fs::read_to_string(&path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        (None, None) => {
            println!("Hello! This is the Monkey programming language!");
            println!("Feel free to type in commands");
            return match interpreter::start(stdin(), stdout()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("{}", e);
                    ExitCode::FAILURE
                }
            };
        }
    };

    let mut env = Environment::new();
    match interpreter::run(&source, &mut env, &mut stdout()) {
        Ok(Some(obj @ Object::Error(_))) => {
            eprintln!("{}", obj.inspect());
            ExitCode::FAILURE
        },
        Ok(Some(obj)) => {
            println!("{}", obj.inspect());
            ExitCode::SUCCESS
        },
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
