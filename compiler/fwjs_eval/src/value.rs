//! Runtime values.

use std::fmt;
use std::rc::Rc;

use fwjs_ir::{Literal, Name, SharedExpr};

use crate::Environment;

/// A runtime value.
///
/// Closures are reference counted: cloning a `Value::Closure` clones the
/// handle, and equality between closures is identity of the allocation.
#[derive(Clone)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Null,
    Closure(Rc<ClosureValue>),
}

impl Value {
    /// Build a closure over `env`.
    pub fn closure(params: Vec<Name>, body: SharedExpr, env: Environment) -> Self {
        Value::Closure(Rc::new(ClosureValue { params, body, env }))
    }

    /// Name of the value's variant, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Bool(_) => "bool",
            Value::Null => "null",
            Value::Closure(_) => "function",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Value {}

impl From<Literal> for Value {
    fn from(lit: Literal) -> Self {
        match lit {
            Literal::Int(n) => Value::Int(n),
            Literal::Bool(b) => Value::Bool(b),
            Literal::Null => Value::Null,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
            Value::Closure(c) => write!(f, "<function/{}>", c.arity()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Null => f.write_str("Null"),
            Value::Closure(c) => c.fmt(f),
        }
    }
}

/// A function value: parameters, shared body and the defining environment.
pub struct ClosureValue {
    params: Vec<Name>,
    body: SharedExpr,
    env: Environment,
}

impl ClosureValue {
    #[inline]
    pub fn params(&self) -> &[Name] {
        &self.params
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    #[inline]
    pub fn body(&self) -> &SharedExpr {
        &self.body
    }

    /// The environment the closure was declared in.
    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }
}

// The captured environment may contain this closure, so it is left out.
impl fmt::Debug for ClosureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
