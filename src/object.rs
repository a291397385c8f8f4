use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Formatter;
use std::rc::Rc;

use crate::ast::{BlockStatement, Identifier};
use crate::builtin::BuiltinFunction;
use crate::environment::{FrameId, Trace, Tracer};

pub const TRUE: Object = Object::Boolean(true);
pub const FALSE: Object = Object::Boolean(false);
pub const NULL: Object = Object::Null;

/// Key under which a hash stores a pair. It carries the whole key value, so
/// two distinct keys never share a slot.
#[derive(Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    String(String),
}

#[derive(Clone, Debug)]
pub struct HashPair {
    pub key: Object,
    pub value: Object,
}

/// A user-defined function together with the frame it was created in.
#[derive(Debug)]
pub struct Function {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: FrameId,
}

/// Runtime value. Heap variants sit behind `Rc` so that cloning an object
/// keeps its identity, which is what `==` compares for non-integers.
#[derive(Clone, Debug)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    String(Rc<str>),
    Null,
    Array(Rc<Vec<Object>>),
    Hash(Rc<BTreeMap<HashKey, HashPair>>),
    Function(Rc<Function>),
    Builtin(BuiltinFunction),
    ReturnValue(Box<Object>),
    Error(String),
}

impl Object {
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::String(_) => "STRING",
            Object::Null => "NULL",
            Object::Array(_) => "ARRAY",
            Object::Hash(_) => "HASH",
            Object::Function(_) => "FUNCTION",
            Object::Builtin(_) => "BUILTIN",
            Object::ReturnValue(_) => "RETURN_VALUE",
            Object::Error(_) => "ERROR",
        }
    }

    pub fn string(value: &str) -> Self {
        Object::String(Rc::from(value))
    }

    pub fn array(elements: Vec<Object>) -> Self {
        Object::Array(Rc::new(elements))
    }

    pub fn from_bool(value: bool) -> Self {
        if value { TRUE } else { FALSE }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// `Null` and `false` are falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Null | Object::Boolean(false))
    }

    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Object::Integer(i) => Some(HashKey::Integer(*i)),
            Object::Boolean(b) => Some(HashKey::Boolean(*b)),
            Object::String(s) => Some(HashKey::String(s.to_string())),
            _ => None,
        }
    }

    /// Identity comparison. Booleans and null are singletons, so for them it
    /// coincides with value equality; heap values are equal only when they
    /// are the same allocation.
    pub fn same_instance(&self, other: &Object) -> bool {
        match (self, other) {
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::Null, Object::Null) => true,
            (Object::String(a), Object::String(b)) => Rc::ptr_eq(a, b),
            (Object::Array(a), Object::Array(b)) => Rc::ptr_eq(a, b),
            (Object::Hash(a), Object::Hash(b)) => Rc::ptr_eq(a, b),
            (Object::Function(a), Object::Function(b)) => Rc::ptr_eq(a, b),
            (Object::Builtin(a), Object::Builtin(b)) => a.name() == b.name(),
            _ => false,
        }
    }

    /// Display form, as shown by the REPL and by `puts`.
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl Trace for Object {
    fn trace(&self, tracer: &mut Tracer) {
        match self {
            Object::Function(func) => tracer.mark(func.env),
            Object::Array(elements) => {
                for element in elements.iter() {
                    element.trace(tracer);
                }
            },
            Object::Hash(pairs) => {
                for pair in pairs.values() {
                    pair.value.trace(tracer);
                }
            },
            Object::ReturnValue(obj) => obj.trace(tracer),
            _ => {},
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(i) => write!(f, "{}", i),
            Object::Boolean(b) => write!(f, "{}", b),
            Object::String(s) => write!(f, "{}", s),
            Object::Null => write!(f, "null"),
            Object::Array(arr) => write!(f, "[{}]",
                arr.iter().map(|e| e.to_string()).collect::<Vec<_>>().join(", ")),
            Object::Hash(hash) => write!(f, "{{{}}}",
                hash.values().map(|pair| format!("{}: {}", pair.key, pair.value)).collect::<Vec<_>>().join(", ")),
            Object::Function(func) => write!(f, "fn({}) {{\n{}\n}}",
                func.parameters.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(", "),
                func.body),
            Object::Builtin(_) => write!(f, "builtin function"),
            Object::ReturnValue(obj) => write!(f, "{}", obj),
            Object::Error(msg) => write!(f, "ERROR: {}", msg),
        }
    }
}
