use std::collections::BTreeMap;
use std::io::Write;
use std::mem;
use std::rc::Rc;

use log::debug;

use crate::ast::{BlockStatement, Expression, Identifier, Node, Program, Statement};
use crate::builtin::BuiltinFunction;
use crate::environment::{Environment, FrameId};
use crate::object::{Function, HashPair, Object, NULL};

/// Tree-walking evaluator over one environment, currently positioned on one
/// of its frames.
///
/// Runtime errors and `return` travel as ordinary values
/// (`Object::Error`, `Object::ReturnValue`): every step checks what its
/// children produced and forwards those signals without evaluating further.
pub struct Evaluator<'a, W: Write> {
    env: &'a mut Environment,
    frame: FrameId,
    out: &'a mut W,
}

impl<'a, W: Write> Evaluator<'a, W> {
    /// Starts on the global frame of `env`. Output from `puts` goes to `out`.
    pub fn new(env: &'a mut Environment, out: &'a mut W) -> Self {
        let frame = env.global();
        Self { env, frame, out }
    }

    pub fn get(&self, key: &str) -> Option<Object> {
        self.env.get(self.frame, key)
    }

    fn set(&mut self, key: &str, value: Object) {
        self.env.set(self.frame, key, value)
    }

    /// Evaluates any node. `None` means the node produced no value, which
    /// happens for `let` and for programs or blocks that end in one.
    pub fn eval(&mut self, node: Node) -> Option<Object> {
        match node {
            Node::Program(program) => self.eval_program(program),
            Node::Statement(stmt) => self.eval_statement(stmt),
            Node::Block(block) => self.eval_block_statement(block),
            Node::Expression(exp) => Some(self.eval_expression(exp)),
        }
    }

    fn eval_program(&mut self, program: &Program) -> Option<Object> {
        let mut result = None;

        for stmt in &program.statements {
            result = self.eval_statement(stmt);

            match result {
                Some(Object::ReturnValue(ret)) => return Some(*ret),
                Some(Object::Error(err)) => return Some(Object::Error(err)),
                _ => {}
            }
        }
        result
    }

    fn eval_block_statement(&mut self, block: &BlockStatement) -> Option<Object> {
        let mut result = None;

        for stmt in &block.statements {
            result = self.eval_statement(stmt);

            if let Some(Object::ReturnValue(_) | Object::Error(_)) = result {
                return result;
            }
        }
        result
    }

    fn eval_statement(&mut self, stmt: &Statement) -> Option<Object> {
        match stmt {
            Statement::ExpressionStatement(exp) => Some(self.eval_expression(exp)),
            Statement::ReturnStatement(r) => {
                let val = self.eval_expression(r);
                if val.is_error() {
                    return Some(val);
                }
                Some(Object::ReturnValue(Box::new(val)))
            },
            Statement::LetStatement { identifier, value } => {
                let val = self.eval_expression(value);
                if val.is_error() {
                    return Some(val);
                }
                self.set(&identifier.value, val);
                None
            },
        }
    }

    fn eval_expression(&mut self, exp: &Expression) -> Object {
        match exp {
            Expression::Integer(i) => Object::Integer(*i),
            Expression::String(s) => Object::string(s),
            Expression::Boolean(b) => Object::from_bool(*b),
            Expression::Identifier(ident) => self.eval_identifier(ident),
            Expression::PrefixExpression { operation, right } => {
                let right = self.eval_expression(right);
                if right.is_error() {
                    return right;
                }
                eval_prefix_expression(operation, right)
            },
            Expression::InfixExpression { operation, left, right } => {
                let left = self.eval_expression(left);
                if left.is_error() {
                    return left;
                }
                let right = self.eval_expression(right);
                if right.is_error() {
                    return right;
                }
                eval_infix_expression(operation, left, right)
            },
            Expression::IfExpression { condition, consequence, alternative } => {
                self.eval_if_expression(condition, consequence, alternative.as_ref())
            },
            Expression::Function { parameters, body } => {
                Object::Function(Rc::new(Function {
                    parameters: parameters.clone(),
                    body: body.clone(),
                    env: self.env.capture(self.frame),
                }))
            },
            Expression::CallExpression { function, arguments } => {
                let function = self.eval_expression(function);
                if function.is_error() {
                    return function;
                }
                match self.eval_expressions(arguments) {
                    Ok(args) => self.apply_function(function, args),
                    Err(err) => err,
                }
            },
            Expression::Array(exps) => {
                match self.eval_expressions(exps) {
                    Ok(elements) => Object::array(elements),
                    Err(err) => err,
                }
            },
            Expression::IndexExpression { left, index } => {
                let left = self.eval_expression(left);
                if left.is_error() {
                    return left;
                }
                let index = self.eval_expression(index);
                if index.is_error() {
                    return index;
                }
                eval_index_expression(left, index)
            },
            Expression::Hash(pairs) => self.eval_hash_literal(pairs),
        }
    }

    fn eval_if_expression(
        &mut self,
        condition: &Expression,
        consequence: &BlockStatement,
        alternative: Option<&BlockStatement>,
    ) -> Object {
        let condition = self.eval_expression(condition);
        if condition.is_error() {
            return condition;
        }

        let branch = if condition.is_truthy() {
            Some(consequence)
        } else {
            alternative
        };
        match branch {
            Some(block) => self.eval_block_statement(block).unwrap_or(NULL),
            None => NULL,
        }
    }

    // User bindings shadow builtins.
    fn eval_identifier(&self, identifier: &Identifier) -> Object {
        match self.get(&identifier.value) {
            Some(obj) => obj,
            None => match BuiltinFunction::look_up(&identifier.value) {
                Some(builtin) => Object::Builtin(builtin),
                None => new_error(format!("identifier not found: {}", identifier.value))
            }
        }
    }

    /// Evaluates left to right, stopping at the first error.
    fn eval_expressions(&mut self, exps: &[Expression]) -> Result<Vec<Object>, Object> {
        let mut result = Vec::with_capacity(exps.len());

        for exp in exps {
            let evaluated = self.eval_expression(exp);
            if evaluated.is_error() {
                return Err(evaluated);
            }
            result.push(evaluated);
        }
        Ok(result)
    }

    fn eval_hash_literal(&mut self, pairs: &[(Expression, Expression)]) -> Object {
        let mut hash = BTreeMap::new();
        for (key_exp, value_exp) in pairs {
            let key = self.eval_expression(key_exp);
            if key.is_error() {
                return key;
            }

            let hash_key = match key.hash_key() {
                Some(hash_key) => hash_key,
                None => return new_error(format!("unusable as hash key: {}", key.type_name())),
            };

            let value = self.eval_expression(value_exp);
            if value.is_error() {
                return value;
            }

            hash.insert(hash_key, HashPair { key, value });
        }
        Object::Hash(Rc::new(hash))
    }

    fn apply_function(&mut self, function: Object, args: Vec<Object>) -> Object {
        debug!("applying {} to {} argument(s)", function.type_name(), args.len());
        match function {
            Object::Function(func) => {
                if func.parameters.len() != args.len() {
                    return new_error(format!("wrong number of arguments: want={}, got={}",
                        func.parameters.len(), args.len()));
                }

                let frame = self.env.new_enclosed(func.env);
                for (param, arg) in func.parameters.iter().zip(args) {
                    self.env.set(frame, param.value.as_str(), arg);
                }

                let caller = mem::replace(&mut self.frame, frame);
                let result = match self.eval_block_statement(&func.body) {
                    Some(Object::ReturnValue(ret)) => *ret,
                    Some(other) => other,
                    None => NULL,
                };
                self.frame = caller;

                self.env.release(frame, &result);
                result
            },
            Object::Builtin(bf) => bf.call(args, &mut *self.out),
            other => new_error(format!("not a function: {}", other.type_name())),
        }
    }
}

/// Evaluates a program against a caller-owned environment, so top-level
/// bindings survive between calls. Call frames nothing can reach any more
/// are reclaimed before returning.
pub fn evaluate<W: Write>(env: &mut Environment, program: &Program, out: &mut W) -> Option<Object> {
    let result = Evaluator::new(env, out).eval(Node::Program(program));
    env.collect(result.as_ref());
    result
}

pub fn new_error(msg: String) -> Object {
    Object::Error(msg)
}

fn eval_prefix_expression(operation: &str, right: Object) -> Object {
    match operation {
        "!" => Object::from_bool(!right.is_truthy()),
        "-" => eval_minus_prefix_expression(right),
        _ => new_error(format!("unknown operator: {}{}", operation, right.type_name())),
    }
}

fn eval_minus_prefix_expression(right: Object) -> Object {
    match right {
        Object::Integer(i) => Object::Integer(i.wrapping_neg()),
        _ => new_error(format!("unknown operator: -{}", right.type_name())),
    }
}

fn eval_infix_expression(operation: &str, left: Object, right: Object) -> Object {
    match (&left, &right) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix_expression(operation, *l, *r),
        // identity, not structural equality
        _ if operation == "==" => Object::from_bool(left.same_instance(&right)),
        _ if operation == "!=" => Object::from_bool(!left.same_instance(&right)),
        _ if left.type_name() != right.type_name() => new_error(format!("type mismatch: {} {} {}",
            left.type_name(), operation, right.type_name())),
        (Object::String(l), Object::String(r)) if operation == "+" => {
            Object::string(&format!("{}{}", l, r))
        },
        _ => new_error(format!("unknown operator: {} {} {}", left.type_name(), operation, right.type_name())),
    }
}

fn eval_integer_infix_expression(operation: &str, left: i64, right: i64) -> Object {
    match operation {
        "+" => Object::Integer(left.wrapping_add(right)),
        "-" => Object::Integer(left.wrapping_sub(right)),
        "*" => Object::Integer(left.wrapping_mul(right)),
        "/" => match right {
            0 => new_error("division by zero".to_string()),
            _ => Object::Integer(left.wrapping_div(right)),
        },
        "<" => Object::from_bool(left < right),
        ">" => Object::from_bool(left > right),
        "==" => Object::from_bool(left == right),
        "!=" => Object::from_bool(left != right),
        _ => new_error(format!("unknown operator: INTEGER {} INTEGER", operation)),
    }
}

fn eval_index_expression(left: Object, index: Object) -> Object {
    match (&left, &index) {
        (Object::Array(arr), Object::Integer(i)) => eval_array_index(arr, *i),
        (Object::Hash(hash), _) => match index.hash_key() {
            Some(key) => hash.get(&key).map(|pair| pair.value.clone()).unwrap_or(NULL),
            None => new_error(format!("unusable as hash key: {}", index.type_name())),
        },
        _ => new_error(format!("index operator not supported: {}", left.type_name())),
    }
}

fn eval_array_index(arr: &[Object], index: i64) -> Object {
    usize::try_from(index)
        .ok()
        .and_then(|i| arr.get(i))
        .cloned()
        .unwrap_or(NULL)
}
