//! Text output of expressions: infix notation through [`std::fmt::Display`] and a TeX flavour
//! through [`Expr::to_tex`].
//!
//! Infix rules:
//! - constant: decimal value, `-3`
//! - variable: `symbol_index`, `x_0`
//! - unary application: `name(argument)`, `sin(x_0)`, `-(x_0)`
//! - binary application: `left name right`, where a side is parenthesized only when it is itself
//!   a binary application: `(x_0 + 1) * x_1`
//!
//! TeX output only differs for unary applications, which are wrapped as `$name(argument)$` with
//! the argument in infix form. Every other shape renders as infix.

use crate::symbolic::symbolic_engine::{Expr, Variable};
use std::fmt;

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}_{}", self.symbol, self.index)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Const(val) => write!(f, "{}", val),
            Expr::Var(var) => write!(f, "{}", var),
            Expr::Unary(op, arg) => write!(f, "{}({})", op, arg),
            Expr::Binary(op, lhs, rhs) => {
                write_operand(f, lhs)?;
                write!(f, " {} ", op)?;
                write_operand(f, rhs)
            }
        }
    }
}

fn write_operand(f: &mut fmt::Formatter, operand: &Expr) -> fmt::Result {
    if operand.is_binary() {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

impl Expr {
    /// Infix text of the expression, same as `to_string()`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Typeset text of the expression.
    ///
    /// # Examples
    /// ```
    /// use RustedSymDiff::symbolic::symbolic_engine::Expr;
    /// let x = Expr::var('x', 0);
    /// assert_eq!(x.clone().sin().to_tex(), "$sin(x_0)$");
    /// assert_eq!((x + Expr::Const(1)).to_tex(), "x_0 + 1");
    /// ```
    pub fn to_tex(&self) -> String {
        match self {
            Expr::Unary(op, arg) => format!("${}({})$", op, arg),
            _ => self.to_string(),
        }
    }
}
