//! # Symbolic Expression Simplification Module
//!
//! A small rewrite system over expression trees, mostly meant to clean up the literal output of
//! [`Expr::diff`] (`x * 1`, `0 + y`, `-(3)` and the like).
//!
//! ## Strategy
//!
//! `simplify` is a **single pass over the root shape only**. The rules of [`RULES`] are tried in
//! order against the root of the tree and the first one that matches produces the result. A
//! unary root with no more specific match gets its argument simplified, this is the only place
//! where simplification descends into the tree. Binary roots that match no rule are returned as
//! they are, reducible subtrees inside them stay untouched:
//!
//! ```
//! use RustedSymDiff::symbolic::symbolic_engine::Expr;
//! let x = Expr::var('x', 0);
//! let inner = (x.clone() * Expr::Const(1)) + x.clone();
//! assert_eq!(inner.simplify(), inner);
//! ```
//!
//! One pass therefore does not guarantee an irreducible result. `simplify_repeatedly` reapplies
//! the pass at the root until the tree stops changing, it still never enters binary subtrees.
//!
//! ## Rules, in priority order
//! 1. `x * 1`, `1 * x` -> `simplify(x)`, x not a constant
//! 2. `x * 0`, `0 * x` -> `0`, x not a constant
//! 3. `n * m` -> the product, when it fits in `i64`
//! 4. `x * -1`, `-1 * x` -> `-(x)`, x not a constant
//! 5. `0 / x` -> `0`
//! 6. `x + 0`, `0 + x` -> `x`
//! 7. `-(n)` -> the negated constant, when it fits in `i64`
//! 8. `op(x)` -> `op(simplify(x))`

use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_operators::{BinaryOp, UnaryOp};
use log::trace;

/// One guarded rewrite: `rewrite` returns `None` when the root of the tree does not have the
/// shape the rule handles.
#[derive(Clone, Copy)]
pub struct SimplificationRule {
    pub name: &'static str,
    pub rewrite: fn(&Expr) -> Option<Expr>,
}

/// The rewrite rules in priority order, first match wins.
pub const RULES: &[SimplificationRule] = &[
    SimplificationRule {
        name: "multiply_by_one",
        rewrite: multiply_by_one,
    },
    SimplificationRule {
        name: "multiply_by_zero",
        rewrite: multiply_by_zero,
    },
    SimplificationRule {
        name: "fold_constant_product",
        rewrite: fold_constant_product,
    },
    SimplificationRule {
        name: "multiply_by_minus_one",
        rewrite: multiply_by_minus_one,
    },
    SimplificationRule {
        name: "zero_dividend",
        rewrite: zero_dividend,
    },
    SimplificationRule {
        name: "add_zero",
        rewrite: add_zero,
    },
    SimplificationRule {
        name: "negate_constant",
        rewrite: negate_constant,
    },
    SimplificationRule {
        name: "simplify_unary_argument",
        rewrite: simplify_unary_argument,
    },
];

/// For `Multiply(a, b)` where one side is `Const(value)` and the other side is not a constant,
/// returns the non-constant side. The right side is checked first.
fn other_factor(expr: &Expr, value: i64) -> Option<&Expr> {
    match expr {
        Expr::Binary(BinaryOp::Multiply, lhs, rhs) => {
            if rhs.is_const_eq(value) && !lhs.is_const() {
                Some(lhs.as_ref())
            } else if lhs.is_const_eq(value) && !rhs.is_const() {
                Some(rhs.as_ref())
            } else {
                None
            }
        }
        _ => None,
    }
}

fn multiply_by_one(expr: &Expr) -> Option<Expr> {
    other_factor(expr, 1).map(|x| x.simplify())
}

fn multiply_by_zero(expr: &Expr) -> Option<Expr> {
    other_factor(expr, 0).map(|_| Expr::Const(0))
}

fn fold_constant_product(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Binary(BinaryOp::Multiply, lhs, rhs) => {
            let product = lhs.as_const()?.checked_mul(rhs.as_const()?)?;
            Some(Expr::Const(product))
        }
        _ => None,
    }
}

fn multiply_by_minus_one(expr: &Expr) -> Option<Expr> {
    other_factor(expr, -1).map(|x| -x.clone())
}

fn zero_dividend(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Binary(BinaryOp::Divide, lhs, _) if lhs.is_const_eq(0) => Some(Expr::Const(0)),
        _ => None,
    }
}

fn add_zero(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Binary(BinaryOp::Add, lhs, rhs) => {
            if rhs.is_const_eq(0) {
                Some(lhs.as_ref().clone())
            } else if lhs.is_const_eq(0) {
                Some(rhs.as_ref().clone())
            } else {
                None
            }
        }
        _ => None,
    }
}

fn negate_constant(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Unary(UnaryOp::Negate, arg) => Some(Expr::Const(arg.as_const()?.checked_neg()?)),
        _ => None,
    }
}

fn simplify_unary_argument(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Unary(op, arg) => Some(Expr::unary(*op, arg.simplify())),
        _ => None,
    }
}

impl Expr {
    //___________________________________SIMPLIFICATION____________________________________

    /// Applies the first rule of [`RULES`] that matches the root of the expression.
    ///
    /// Returns an equal copy when no rule matches. Never fails.
    ///
    /// # Examples
    /// ```
    /// use RustedSymDiff::symbolic::symbolic_engine::Expr;
    /// let x = Expr::var('x', 0);
    /// assert_eq!((x.clone().cos() * Expr::Const(1)).simplify(), x.clone().cos());
    /// assert_eq!((Expr::Const(0) + x.clone()).simplify(), x);
    /// ```
    pub fn simplify(&self) -> Expr {
        for rule in RULES {
            if let Some(simplified) = (rule.rewrite)(self) {
                trace!("rule {} rewrote {} into {}", rule.name, self, simplified);
                return simplified;
            }
        }
        self.clone()
    }

    /// Name of the rule `simplify` would apply at the root, `None` if the expression would be
    /// returned unchanged.
    pub fn matching_rule(&self) -> Option<&'static str> {
        RULES
            .iter()
            .find(|rule| (rule.rewrite)(self).is_some())
            .map(|rule| rule.name)
    }

    /// Repeats `simplify` until the result stops changing, at most `max_passes` times.
    pub fn simplify_repeatedly(&self, max_passes: usize) -> Expr {
        let mut current = self.clone();
        for pass in 0..max_passes {
            let next = current.simplify();
            if next == current {
                trace!("simplification settled after {} passes", pass);
                break;
            }
            current = next;
        }
        current
    }
}
