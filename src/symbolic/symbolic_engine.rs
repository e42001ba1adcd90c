//! # Symbolic Engine Module
//!
//! The expression model of the crate: an immutable tree over integer constants and indexed
//! variables, combined by the unary and binary operators of the
//! [operator registry](crate::symbolic::symbolic_operators).
//!
//! ## Main Structures and Methods
//!
//! ### `Expr` Enum
//! - **Constants**: `Const(i64)` - integer literals
//! - **Variables**: `Var(Variable)` - a symbol plus an integer index, `x_0` and `x_1` are different
//! - **Unary applications**: `Unary(UnaryOp, Box<Expr>)` - `sin`, `cos`, `lg`, `ln`, negation
//! - **Binary applications**: `Binary(BinaryOp, Box<Expr>, Box<Expr>)` - `+ - * / ^`
//!
//! ### Builders
//! - `Expr::var('x', 0)`, `indexed_var!('x', 0)`, `Expr::IndexedVars(n, 'x')` - variables
//! - `Expr::Const(n)` or `Expr::from(n)` - constants
//! - `+`, `-`, `*`, `/` and unary `-` operators on `Expr`, `l - r` being `l + -(r)`
//! - `sin()`, `cos()`, `ln()`, `lg()`, `sqrt()`, `square()`, `pow()`
//!
//! Every transform (`diff`, `simplify`, `substitute_variable`, ...) takes `&self` and builds a
//! new tree, the input is never modified. Equality is structural.
//!
//! ## Example
//! ```
//! use RustedSymDiff::symbolic::symbolic_engine::Expr;
//! let x = Expr::var('x', 0);
//! let f = x.clone() + x.sin();
//! assert_eq!(f.to_string(), "x_0 + sin(x_0)");
//! ```

use crate::symbolic::symbolic_errors::EvalError;
use crate::symbolic::symbolic_operators::{BinaryOp, UnaryOp};
use itertools::Itertools;

/// Identity of a variable: a one-character name and an integer index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    pub symbol: char,
    pub index: i32,
}

impl Variable {
    pub fn new(symbol: char, index: i32) -> Self {
        Variable { symbol, index }
    }
}

/// Core symbolic expression enum: an abstract syntax tree of an arithmetic formula.
///
/// Each node exclusively owns its children through `Box<Expr>`, so trees are finite and acyclic
/// by construction.
///
/// # Examples
/// ```
/// use RustedSymDiff::symbolic::symbolic_engine::{Expr, Variable};
/// use RustedSymDiff::symbolic::symbolic_operators::BinaryOp;
/// let expr = Expr::Binary(
///     BinaryOp::Add,
///     Box::new(Expr::Var(Variable::new('x', 0))),
///     Box::new(Expr::Const(2)),
/// );
/// assert_eq!(expr, Expr::var('x', 0) + Expr::Const(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Integer literal
    Const(i64),
    /// Indexed variable, e.g. `x_0`
    Var(Variable),
    /// Function of one argument: `op(arg)`
    Unary(UnaryOp, Box<Expr>),
    /// Infix operation: `lhs op rhs`
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Binary(BinaryOp::Add, self.boxed(), rhs.boxed())
    }
}

/// `l - r` builds `l + -(r)`, a `Subtract` node is only made explicitly with [`Expr::binary`].
impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Binary(BinaryOp::Add, self.boxed(), (-rhs).boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Binary(BinaryOp::Multiply, self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Binary(BinaryOp::Divide, self.boxed(), rhs.boxed())
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Unary(UnaryOp::Negate, self.boxed())
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Const(value)
    }
}

impl From<Variable> for Expr {
    fn from(var: Variable) -> Self {
        Expr::Var(var)
    }
}

impl Expr {
    /// BASIC FEATURES

    /// Creates the variable `symbol_index`.
    pub fn var(symbol: char, index: i32) -> Expr {
        Expr::Var(Variable::new(symbol, index))
    }

    /// Creates `num_vars` variables sharing one symbol: `x_0, x_1, ...`
    ///
    /// # Returns
    /// Tuple of the expressions and the matching variable identities
    pub fn IndexedVars(num_vars: usize, symbol: char) -> (Vec<Expr>, Vec<Variable>) {
        let vars: Vec<Variable> = (0..num_vars)
            .map(|i| Variable::new(symbol, i as i32))
            .collect();
        let exprs = vars.iter().map(|v| Expr::Var(*v)).collect();
        (exprs, vars)
    }

    pub fn unary(op: UnaryOp, arg: Expr) -> Expr {
        Expr::Unary(op, arg.boxed())
    }

    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary(op, lhs.boxed(), rhs.boxed())
    }

    /// Applies the unary operator with display name `name`, e.g. `"lg"`.
    pub fn apply_unary(name: &str, arg: Expr) -> Result<Expr, EvalError> {
        Ok(Expr::unary(UnaryOp::from_name(name)?, arg))
    }

    /// Applies the binary operator with display name `name`, e.g. `"^"`.
    pub fn apply_binary(name: &str, lhs: Expr, rhs: Expr) -> Result<Expr, EvalError> {
        Ok(Expr::binary(BinaryOp::from_name(name)?, lhs, rhs))
    }

    /// Convenience method to wrap expression in Box for recursive structures.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    pub fn sin(self) -> Expr {
        Expr::Unary(UnaryOp::Sin, self.boxed())
    }

    pub fn cos(self) -> Expr {
        Expr::Unary(UnaryOp::Cos, self.boxed())
    }

    /// Natural logarithm ln(self)
    pub fn ln(self) -> Expr {
        Expr::Unary(UnaryOp::NaturalLog, self.boxed())
    }

    /// Decimal logarithm lg(self)
    pub fn lg(self) -> Expr {
        Expr::Unary(UnaryOp::Log10, self.boxed())
    }

    /// Creates power expression self^rhs.
    pub fn pow(self, rhs: Expr) -> Expr {
        Expr::Binary(BinaryOp::Power, self.boxed(), rhs.boxed())
    }

    /// self^2
    pub fn square(self) -> Expr {
        self.pow(Expr::Const(2))
    }

    /// Square root, built as `self ^ (1 / 2)`. No simplification is done.
    pub fn sqrt(self) -> Expr {
        self.pow(Expr::Const(1) / Expr::Const(2))
    }

    /// Checks if expression is a constant.
    pub fn is_const(&self) -> bool {
        matches!(self, Expr::Const(_))
    }

    /// If the expression is a constant, returns its value.
    pub fn as_const(&self) -> Option<i64> {
        match self {
            Expr::Const(value) => Some(*value),
            _ => None,
        }
    }

    /// Checks if expression is exactly the constant `value`.
    pub fn is_const_eq(&self, value: i64) -> bool {
        self.as_const() == Some(value)
    }

    /// Checks if expression is a binary application of any operator.
    pub fn is_binary(&self) -> bool {
        matches!(self, Expr::Binary(..))
    }

    //___________________________________SUBSTITUTION____________________________________

    /// Replaces every occurrence of `var` with a copy of `replacement`.
    pub fn substitute_variable(&self, var: &Variable, replacement: &Expr) -> Expr {
        match self {
            Expr::Var(v) if v == var => replacement.clone(),
            Expr::Const(_) | Expr::Var(_) => self.clone(),
            Expr::Unary(op, arg) => Expr::Unary(*op, arg.substitute_variable(var, replacement).boxed()),
            Expr::Binary(op, lhs, rhs) => Expr::Binary(
                *op,
                lhs.substitute_variable(var, replacement).boxed(),
                rhs.substitute_variable(var, replacement).boxed(),
            ),
        }
    }

    /// Substitutes a variable with a constant value throughout the expression.
    pub fn set_variable(&self, var: &Variable, value: i64) -> Expr {
        self.substitute_variable(var, &Expr::Const(value))
    }

    /// check if the expression contains a variable
    pub fn contains_variable(&self, var: &Variable) -> bool {
        match self {
            Expr::Var(v) => v == var,
            Expr::Const(_) => false,
            Expr::Unary(_, arg) => arg.contains_variable(var),
            Expr::Binary(_, lhs, rhs) => lhs.contains_variable(var) || rhs.contains_variable(var),
        }
    }

    /// All variables of the expression, sorted by symbol then index, without duplicates.
    pub fn variables(&self) -> Vec<Variable> {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);
        vars.into_iter().sorted().dedup().collect()
    }

    fn collect_variables(&self, vars: &mut Vec<Variable>) {
        match self {
            Expr::Var(v) => vars.push(*v),
            Expr::Const(_) => {}
            Expr::Unary(_, arg) => arg.collect_variables(vars),
            Expr::Binary(_, lhs, rhs) => {
                lhs.collect_variables(vars);
                rhs.collect_variables(vars);
            }
        }
    }
}

//___________________________________MACROS____________________________________

/// Macro to create an indexed variable
/// Usage: indexed_var!('x', 0) -> creates x_0
#[macro_export]
macro_rules! indexed_var {
    ($symbol:expr, $index:expr) => {
        $crate::symbolic::symbolic_engine::Expr::var($symbol, $index)
    };
}

/// Macro to create a run of indexed variables
/// Usage: indexed_vars!(3, 'x') -> creates x_0, x_1, x_2
#[macro_export]
macro_rules! indexed_vars {
    ($count:expr, $symbol:expr) => {
        $crate::symbolic::symbolic_engine::Expr::IndexedVars($count, $symbol)
    };
}
