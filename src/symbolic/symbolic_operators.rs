//! # Operator Registry
//!
//! The closed sets of unary and binary operator kinds the expression tree is built from.
//! Each kind carries a fixed display name (used by the renderers and by the by-name lookup)
//! and a numeric evaluation rule over `f64`.
//!
//! | unary        | name | binary     | name |
//! |--------------|------|------------|------|
//! | `Sin`        | sin  | `Add`      | +    |
//! | `Cos`        | cos  | `Subtract` | -    |
//! | `Log10`      | lg   | `Multiply` | *    |
//! | `NaturalLog` | ln   | `Divide`   | /    |
//! | `Negate`     | -    | `Power`    | ^    |
//!
//! Only `Divide` can fail: a right operand exactly equal to zero is reported as
//! [`ArithmeticError::DivisionByZero`]. Logarithms are not domain-checked, a non-positive
//! argument yields NaN or -inf just like `f64::ln`/`f64::log10` do; the case is logged.

use crate::symbolic::symbolic_errors::{ArithmeticError, EvalError};
use log::warn;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Functions of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString)]
pub enum UnaryOp {
    #[strum(serialize = "sin")]
    Sin,
    #[strum(serialize = "cos")]
    Cos,
    /// decimal logarithm
    #[strum(serialize = "lg")]
    Log10,
    #[strum(serialize = "ln")]
    NaturalLog,
    #[strum(serialize = "-")]
    Negate,
}

/// Functions of two arguments (infix operators).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString)]
pub enum BinaryOp {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Subtract,
    #[strum(serialize = "*")]
    Multiply,
    #[strum(serialize = "/")]
    Divide,
    #[strum(serialize = "^")]
    Power,
}

impl UnaryOp {
    /// Display name of the operator, e.g. `"lg"` for [`UnaryOp::Log10`].
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Looks the operator up by its display name.
    pub fn from_name(name: &str) -> Result<UnaryOp, EvalError> {
        UnaryOp::from_str(name).map_err(|_| EvalError::UnsupportedOperator(name.to_string()))
    }

    /// Every unary operator in declaration order.
    pub fn all() -> Vec<UnaryOp> {
        UnaryOp::iter().collect()
    }

    /// Numeric value of the operator applied to `value`.
    pub fn eval(&self, value: f64) -> f64 {
        match self {
            UnaryOp::Sin => value.sin(),
            UnaryOp::Cos => value.cos(),
            UnaryOp::Log10 => {
                if value <= 0.0 {
                    warn!("lg evaluated outside of its domain: lg({})", value);
                }
                value.log10()
            }
            UnaryOp::NaturalLog => {
                if value <= 0.0 {
                    warn!("ln evaluated outside of its domain: ln({})", value);
                }
                value.ln()
            }
            UnaryOp::Negate => -value,
        }
    }
}

impl BinaryOp {
    /// Display name of the operator, e.g. `"^"` for [`BinaryOp::Power`].
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Looks the operator up by its display name.
    pub fn from_name(name: &str) -> Result<BinaryOp, EvalError> {
        BinaryOp::from_str(name).map_err(|_| EvalError::UnsupportedOperator(name.to_string()))
    }

    /// Every binary operator in declaration order.
    pub fn all() -> Vec<BinaryOp> {
        BinaryOp::iter().collect()
    }

    /// Numeric value of `left <op> right`.
    pub fn eval(&self, left: f64, right: f64) -> Result<f64, EvalError> {
        match self {
            BinaryOp::Add => Ok(left + right),
            BinaryOp::Subtract => Ok(left - right),
            BinaryOp::Multiply => Ok(left * right),
            BinaryOp::Divide => {
                if right == 0.0 {
                    Err(EvalError::Arithmetic(ArithmeticError::DivisionByZero))
                } else {
                    Ok(left / right)
                }
            }
            BinaryOp::Power => Ok(left.powf(right)),
        }
    }
}
