use std::fmt;
use std::fmt::Formatter;
use std::io::Write;

use crate::evaluator::new_error;
use crate::object::{Object, NULL};

/// Native function. Anything it prints goes to `out`.
pub type BuiltinFn = fn(args: Vec<Object>, out: &mut dyn Write) -> Object;

/// A native function reachable by name from interpreted code.
#[derive(Clone, Copy)]
pub struct BuiltinFunction {
    name: &'static str,
    func: BuiltinFn
}

impl fmt::Display for BuiltinFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for BuiltinFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BuiltinFunction({})", self.name)
    }
}

impl BuiltinFunction {
    pub fn look_up(name: &str) -> Option<Self> {
        let (name, func): (&'static str, BuiltinFn) = match name {
            "len" => ("len", len as BuiltinFn),
            "first" => ("first", first as BuiltinFn),
            "last" => ("last", last as BuiltinFn),
            "rest" => ("rest", rest as BuiltinFn),
            "push" => ("push", push as BuiltinFn),
            "puts" => ("puts", puts as BuiltinFn),
            _ => return None,
        };
        Some(Self { name, func })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn call(&self, args: Vec<Object>, out: &mut dyn Write) -> Object {
        (self.func)(args, out)
    }
}

fn check_arity(args: &[Object], want: usize) -> Option<Object> {
    if args.len() != want {
        Some(new_error(format!("wrong number of arguments. got={}, want={}", args.len(), want)))
    } else {
        None
    }
}

fn len(args: Vec<Object>, _out: &mut dyn Write) -> Object {
    if let Some(err) = check_arity(&args, 1) {
        return err;
    }

    match &args[0] {
        Object::Array(v) => Object::Integer(v.len() as i64),
        Object::String(s) => Object::Integer(s.chars().count() as i64),
        other => new_error(format!("argument to \"len\" not supported, got {}", other.type_name()))
    }
}

fn array_argument<'a>(name: &str, args: &'a [Object], want: usize) -> Result<&'a [Object], Object> {
    if let Some(err) = check_arity(args, want) {
        return Err(err);
    }
    match &args[0] {
        Object::Array(elements) => Ok(elements.as_slice()),
        other => Err(new_error(format!("argument to \"{}\" must be ARRAY, got {}", name, other.type_name()))),
    }
}

fn first(args: Vec<Object>, _out: &mut dyn Write) -> Object {
    match array_argument("first", &args, 1) {
        Ok(elements) => elements.first().cloned().unwrap_or(NULL),
        Err(err) => err,
    }
}

fn last(args: Vec<Object>, _out: &mut dyn Write) -> Object {
    match array_argument("last", &args, 1) {
        Ok(elements) => elements.last().cloned().unwrap_or(NULL),
        Err(err) => err,
    }
}

fn rest(args: Vec<Object>, _out: &mut dyn Write) -> Object {
    match array_argument("rest", &args, 1) {
        Ok([]) => NULL,
        Ok([_, tail @ ..]) => Object::array(tail.to_vec()),
        Err(err) => err,
    }
}

fn push(args: Vec<Object>, _out: &mut dyn Write) -> Object {
    match array_argument("push", &args, 2) {
        Ok(elements) => {
            let mut pushed = Vec::with_capacity(elements.len() + 1);
            pushed.extend_from_slice(elements);
            pushed.push(args[1].clone());
            Object::array(pushed)
        },
        Err(err) => err,
    }
}

fn puts(args: Vec<Object>, out: &mut dyn Write) -> Object {
    for arg in args {
        if let Err(e) = writeln!(out, "{}", arg.inspect()) {
            return new_error(format!("could not write output: {}", e));
        }
    }
    NULL
}
