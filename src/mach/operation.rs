use super::Val;
use crate::error;
use crate::lang::ast::Relation;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Arithmetic and comparison
///
/// Integer arithmetic wraps on overflow.

pub struct Operation {}

impl Operation {
    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => Ok(Integer(l.wrapping_add(r))),
            (l, r) => {
                let mut s = l.to_text().into_owned();
                s.push_str(&r.to_text());
                Ok(String(s))
            }
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => Ok(Integer(l.wrapping_sub(r))),
            _ => Err(error!(OperationMismatch)),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => Ok(Integer(l.wrapping_mul(r))),
            _ => Err(error!(OperationMismatch)),
        }
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(_), Integer(0)) => Err(error!(DivisionByZero)),
            (Integer(l), Integer(r)) => Ok(Integer(l.wrapping_div(r))),
            _ => Err(error!(OperationMismatch)),
        }
    }

    pub fn remainder(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(_), Integer(0)) => Err(error!(DivisionByZero)),
            (Integer(l), Integer(r)) => Ok(Integer(l.wrapping_rem(r))),
            _ => Err(error!(OperationMismatch)),
        }
    }

    /// Compare the integer projections of two values.
    pub fn compare(lhs: &Val, rhs: &Val, relation: Relation) -> Result<bool> {
        let l = i64::try_from(lhs)?;
        let r = i64::try_from(rhs)?;
        Ok(match relation {
            Relation::Equal => l == r,
            Relation::NotEqual => l != r,
            Relation::Less => l < r,
            Relation::Greater => l > r,
        })
    }
}
