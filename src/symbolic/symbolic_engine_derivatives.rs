//! # Symbolic Engine Derivatives Module
//!
//! Analytical differentiation of expression trees.
//!
//! `diff` is a plain structural recursion: one rule per node shape, no fixpoint iteration, no
//! simplification of the produced tree. The output keeps the literal algebraic form of each rule
//! (`x * 1`, `0 + ...` and so on), [`Expr::simplify`] is the separate step that cleans it up.
//!
//! ## Rules
//! - constant: `0`
//! - variable: `1` for the target variable (same symbol and index), `0` otherwise
//! - unary `op(u)`: chain rule `outer(u) * u'` with
//!   - `sin(u)` -> `cos(u)`
//!   - `cos(u)` -> `-(sin(u))`
//!   - `lg(u)`, `ln(u)` -> `1 / u`, the `1 / ln(10)` factor of `lg` is not applied
//!   - `-(u)` -> `-1`
//! - `u + v` -> `u' + v'`, `u - v` -> `u' - v'` (a `Subtract` node, the `-` operator on `Expr`
//!   builds `u + -(v)` instead)
//! - `u * v` -> `(u' * v) + (u * v')`
//! - `u / v` -> `((u' * v) + -(u * v')) / (v * v)`
//! - `u ^ v` -> `(u ^ v) * (v * ln(u))'`, logarithmic differentiation
//!
//! ## Key Methods
//! - `diff(&var)` - derivative with respect to one variable
//! - `diff_multi_args(&vars)`, `diff_multi()` - gradients
//! - `par_diff_multi_args(&vars)` - gradient with the partial derivatives computed in parallel
//! - `n_th_derivative(&var, n)` - repeated differentiation with simplification between steps
//! - `compare_num1D(...)` - check a derivative against finite differences

use crate::symbolic::symbolic_engine::{Expr, Variable};
use crate::symbolic::symbolic_errors::EvalError;
use crate::symbolic::symbolic_eval::Environment;
use crate::symbolic::symbolic_operators::{BinaryOp, UnaryOp};
use crate::symbolic::utils::{linspace, norm, numerical_derivative};
use log::debug;
use rayon::prelude::*;

/// Derivative of the function `op` itself, taken at the undifferentiated argument.
fn outer_derivative(op: UnaryOp, arg: &Expr) -> Expr {
    match op {
        UnaryOp::Sin => arg.clone().cos(),
        UnaryOp::Cos => -(arg.clone().sin()),
        UnaryOp::Log10 | UnaryOp::NaturalLog => Expr::Const(1) / arg.clone(),
        UnaryOp::Negate => Expr::Const(-1),
    }
}

fn derivative(expr: &Expr, var: &Variable) -> Expr {
    match expr {
        Expr::Const(_) => Expr::Const(0),
        Expr::Var(v) => {
            if v == var {
                Expr::Const(1)
            } else {
                Expr::Const(0)
            }
        }
        Expr::Unary(op, arg) => outer_derivative(*op, arg) * derivative(arg, var),
        Expr::Binary(op, lhs, rhs) => {
            let (u, v) = (lhs.as_ref(), rhs.as_ref());
            match op {
                BinaryOp::Add => derivative(u, var) + derivative(v, var),
                BinaryOp::Subtract => {
                    Expr::binary(BinaryOp::Subtract, derivative(u, var), derivative(v, var))
                }
                BinaryOp::Multiply => {
                    derivative(u, var) * v.clone() + u.clone() * derivative(v, var)
                }
                BinaryOp::Divide => {
                    let numerator =
                        derivative(u, var) * v.clone() + -(u.clone() * derivative(v, var));
                    numerator / (v.clone() * v.clone())
                }
                BinaryOp::Power => {
                    let log_form = v.clone() * u.clone().ln();
                    expr.clone() * derivative(&log_form, var)
                }
            }
        }
    }
}

impl Expr {
    /// DIFFERENTIATION

    /// Computes the analytical derivative of the expression with respect to `var`.
    ///
    /// Never fails and never simplifies: see the module documentation for the exact form of
    /// each rule.
    ///
    /// # Examples
    /// ```
    /// use RustedSymDiff::symbolic::symbolic_engine::{Expr, Variable};
    /// let x = Expr::var('x', 0);
    /// let f = x.clone() + x.sin();
    /// let df = f.diff(&Variable::new('x', 0));
    /// assert_eq!(df.to_string(), "1 + (cos(x_0) * 1)");
    /// ```
    pub fn diff(&self, var: &Variable) -> Expr {
        debug!("differentiating {} with respect to {}", self, var);
        derivative(self, var)
    }

    /// Partial derivatives with respect to each of `vars`, in that order.
    pub fn diff_multi_args(&self, vars: &[Variable]) -> Vec<Expr> {
        debug!("differentiating {} with respect to {} variables", self, vars.len());
        vars.iter().map(|var| derivative(self, var)).collect()
    }

    /// Partial derivatives with respect to every variable of the expression, in the order of
    /// [`Expr::variables`].
    pub fn diff_multi(&self) -> Vec<Expr> {
        self.diff_multi_args(&self.variables())
    }

    /// Same as [`Expr::diff_multi_args`], the partial derivatives are computed on the rayon
    /// thread pool.
    pub fn par_diff_multi_args(&self, vars: &[Variable]) -> Vec<Expr> {
        debug!(
            "differentiating {} with respect to {} variables in parallel",
            self,
            vars.len()
        );
        vars.par_iter().map(|var| derivative(self, var)).collect()
    }

    /// Computes the nth derivative, simplifying after every differentiation.
    ///
    /// `n == 0` returns a copy of the expression.
    pub fn n_th_derivative(&self, var: &Variable, n: usize) -> Expr {
        let mut expr = self.clone();
        for _ in 0..n {
            expr = derivative(&expr, var).simplify();
        }
        expr
    }

    /// Validates the analytical derivative against a central finite difference.
    ///
    /// Both are evaluated on `num_values` points evenly spaced over `[start, end]`, the other
    /// variables taking their values from `env`. The step of the finite difference is
    /// `1e-4 * (end - start) / (num_values - 1)`, or `1e-4 * (end - start)` for a single point.
    ///
    /// # Returns
    /// Tuple of (norm of the difference, norm < max_norm)
    ///
    /// # Errors
    /// `EvalError::EmptyDomain` when `num_values` is 0, otherwise the first evaluation error.
    pub fn compare_num1D(
        &self,
        var: &Variable,
        env: &Environment,
        start: f64,
        end: f64,
        num_values: usize,
        max_norm: f64,
    ) -> Result<(f64, bool), EvalError> {
        if num_values == 0 {
            return Err(EvalError::EmptyDomain);
        }
        let analytical = self.diff(var);
        let domain = linspace(start, end, num_values);
        let step = (1.0 / 1e4) * (end - start) / (num_values.max(2) as f64 - 1.0);

        let at = |expr: &Expr, x: f64| -> Result<f64, EvalError> {
            let mut env = env.clone();
            env.insert(*var, x);
            expr.eval_expression(&env)
        };

        let analytical_values = domain
            .iter()
            .map(|&x| at(&analytical, x))
            .collect::<Result<Vec<f64>, EvalError>>()?;
        let numerical_values = numerical_derivative(|x| at(self, x), &domain, step)?;
        let norm_val = norm(&analytical_values, &numerical_values);
        Ok((norm_val, norm_val < max_norm))
    }
}
