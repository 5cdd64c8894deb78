use crate::error;
use crate::lang::ast::Literal;
use crate::lang::Error;
use std::convert::TryFrom;

/// ## Queue value

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Val {
    Integer(i64),
    String(String),
}

impl Val {
    /// Text used when a value takes part in string concatenation.
    pub fn to_text(&self) -> std::borrow::Cow<'_, str> {
        match self {
            Val::Integer(n) => n.to_string().into(),
            Val::String(s) => s.as_str().into(),
        }
    }

    /// Parse external input: integers become `Integer`, anything else is kept verbatim.
    pub fn from_input(s: &str) -> Val {
        match s.trim().parse::<i64>() {
            Ok(n) => Val::Integer(n),
            Err(_) => Val::String(s.to_string()),
        }
    }
}

impl From<Literal> for Val {
    fn from(lit: Literal) -> Val {
        match lit {
            Literal::Integer(n) => Val::Integer(n),
            Literal::String(s) => Val::String(s),
        }
    }
}

impl TryFrom<&Val> for i64 {
    type Error = Error;
    fn try_from(val: &Val) -> Result<Self, Self::Error> {
        match val {
            Val::Integer(n) => Ok(*n),
            Val::String(_) => Err(error!(OperationMismatch)),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            Val::String(s) => write!(f, "{}", s),
        }
    }
}
