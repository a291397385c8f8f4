use std::io::{BufRead, BufReader, Read, Write};

use log::warn;

use crate::environment::Environment;
use crate::error::{Error, Result};
use crate::evaluator::evaluate;
use crate::object::Object;
use crate::parser::parse;

const PROMPT: &str = ">> ";

const MONKEY_FACE: &str=
r#"            __,__
   .--.  .-"     "-.  .--.
  / .. \/  .-. .-.  \/ .. \
 | |  '|  /   Y   \  |'  | |
 | \   \  \ 0 | 0 /  /   / |
  \ '- ,\.-"""""""-./, -' /
   ''-' /_   ^ ^   _\ '-''
       |  \._   _./  |
       \   \ '~' /   /
        '._ '-=-' _.'
           '-----'
"#;

/// Parses and evaluates one source text against `env`, with `puts` writing
/// to `out`. Diagnostics are returned as [`Error::Parse`] and nothing is
/// evaluated in that case.
pub fn run<W: Write>(source: &str, env: &mut Environment, out: &mut W) -> Result<Option<Object>> {
    let (program, errors) = parse(source);
    if !errors.is_empty() {
        return Err(Error::Parse(errors));
    }
    Ok(evaluate(env, &program, out))
}

/// Line-at-a-time REPL. One environment is reused for every line, so
/// bindings made on one line are visible on the next. Returns at end of input.
pub fn start<R: Read, W: Write>(reader: R, mut writer: W) -> Result<()> {
    let mut env = Environment::new();
    let mut reader = BufReader::new(reader);
    loop {
        write!(writer, "{}", PROMPT)?;
        writer.flush()?;
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            writeln!(writer)?;
            return Ok(());
        }

        match run(&line, &mut env, &mut writer) {
            Ok(Some(obj)) => writeln!(writer, "{}", obj.inspect())?,
            Ok(None) => {},
            Err(Error::Parse(errs)) => {
                warn!("{} parser error(s) on input line", errs.len());
                print_parser_errors(&mut writer, &errs)?;
            },
            Err(err) => return Err(err),
        }
    }
}

fn print_parser_errors<W: Write>(mut writer: W, errs: &[String]) -> Result<()> {
    write!(writer, "{}", MONKEY_FACE)?;
    writeln!(writer, "Woops! We ran into some monkey business here!")?;
    writeln!(writer, " parser errors:")?;
    for msg in errs {
        writeln!(writer, "\t{}", msg)?;
    }
    writer.flush()?;
    Ok(())
}
