//! # Numeric evaluation
//!
//! Two ways to get numbers out of a tree:
//! - `eval_expression(&env)` walks the tree once with an [`Environment`] that maps variables
//!   to values. Cheap for one-off evaluation.
//! - `lambdify(&vars)` compiles the tree into a boxed closure taking the values of `vars` in
//!   order. Variables missing from `vars` are reported once, at compile time, and the closure can
//!   then be called repeatedly (and from several threads, it is `Send + Sync`).
//!
//! Both report a zero divisor as [`ArithmeticError::DivisionByZero`] and never turn it into an
//! infinity or NaN. The divisor is evaluated before the dividend, so `anything / 0` fails with an
//! arithmetic error whatever `anything` contains.

use crate::symbolic::symbolic_engine::{Expr, Variable};
use crate::symbolic::symbolic_errors::{ArithmeticError, EvalError};
use crate::symbolic::symbolic_operators::BinaryOp;
use std::collections::HashMap;

/// Values of the variables during evaluation
pub type Environment = HashMap<Variable, f64>;

/// Function compiled from an expression by [`Expr::lambdify`]
pub type CompiledFn = Box<dyn Fn(&[f64]) -> Result<f64, EvalError> + Send + Sync>;

fn check_divisor(op: BinaryOp, rhs: f64) -> Result<(), EvalError> {
    if op == BinaryOp::Divide && rhs == 0.0 {
        Err(ArithmeticError::DivisionByZero.into())
    } else {
        Ok(())
    }
}

impl Expr {
    /// DIRECT EXPRESSION EVALUATION

    /// Evaluates the expression with the variable values from `env`.
    ///
    /// # Errors
    /// - `EvalError::UnboundVariable` if a variable of the tree is absent from `env`
    /// - `EvalError::Arithmetic` if a divisor evaluates to exactly zero
    ///
    /// # Examples
    /// ```
    /// use RustedSymDiff::symbolic::symbolic_engine::{Expr, Variable};
    /// use RustedSymDiff::symbolic::symbolic_eval::Environment;
    /// let f = Expr::var('x', 0) * Expr::Const(2);
    /// let env = Environment::from([(Variable::new('x', 0), 3.0)]);
    /// assert_eq!(f.eval_expression(&env), Ok(6.0));
    /// ```
    pub fn eval_expression(&self, env: &Environment) -> Result<f64, EvalError> {
        match self {
            Expr::Const(val) => Ok(*val as f64),
            Expr::Var(var) => env
                .get(var)
                .copied()
                .ok_or(EvalError::UnboundVariable(*var)),
            Expr::Unary(op, arg) => Ok(op.eval(arg.eval_expression(env)?)),
            Expr::Binary(op, lhs, rhs) => {
                let rhs = rhs.eval_expression(env)?;
                check_divisor(*op, rhs)?;
                let lhs = lhs.eval_expression(env)?;
                op.eval(lhs, rhs)
            }
        }
    }

    /// LAMBDIFICATION - Converting Symbolic Expressions to Executable Functions

    /// Compiles the expression into a closure of the values of `vars`, in that order.
    ///
    /// # Errors
    /// `EvalError::UnboundVariable` if the tree uses a variable that is not in `vars`. The
    /// returned closure itself fails with `EvalError::ArgumentCount` when called with a slice of
    /// the wrong length, and with `EvalError::Arithmetic` on a zero divisor.
    ///
    /// # Examples
    /// ```
    /// use RustedSymDiff::symbolic::symbolic_engine::{Expr, Variable};
    /// let (x, y) = (Variable::new('x', 0), Variable::new('y', 0));
    /// let f = Expr::Var(x) - Expr::Var(y);
    /// let func = f.lambdify(&[x, y]).unwrap();
    /// assert_eq!(func(&[5.0, 2.0]), Ok(3.0));
    /// ```
    pub fn lambdify(&self, vars: &[Variable]) -> Result<CompiledFn, EvalError> {
        let expected = vars.len();
        let body = self.compile(vars)?;
        Ok(Box::new(move |args: &[f64]| -> Result<f64, EvalError> {
            if args.len() != expected {
                return Err(EvalError::ArgumentCount {
                    expected,
                    found: args.len(),
                });
            }
            body(args)
        }))
    }

    /// Compiles a function of one variable.
    pub fn lambdify1D(
        &self,
        var: &Variable,
    ) -> Result<Box<dyn Fn(f64) -> Result<f64, EvalError> + Send + Sync>, EvalError> {
        let body = self.compile(std::slice::from_ref(var))?;
        Ok(Box::new(move |x: f64| body(&[x])))
    }

    fn compile(&self, vars: &[Variable]) -> Result<CompiledFn, EvalError> {
        match self {
            Expr::Const(val) => {
                let val = *val as f64;
                Ok(Box::new(move |_: &[f64]| -> Result<f64, EvalError> { Ok(val) }))
            }
            Expr::Var(var) => {
                let index = vars
                    .iter()
                    .position(|v| v == var)
                    .ok_or(EvalError::UnboundVariable(*var))?;
                Ok(Box::new(move |args: &[f64]| -> Result<f64, EvalError> { Ok(args[index]) }))
            }
            Expr::Unary(op, arg) => {
                let op = *op;
                let arg_fn = arg.compile(vars)?;
                Ok(Box::new(move |args: &[f64]| -> Result<f64, EvalError> {
                    Ok(op.eval(arg_fn(args)?))
                }))
            }
            Expr::Binary(op, lhs, rhs) => {
                let op = *op;
                let lhs_fn = lhs.compile(vars)?;
                let rhs_fn = rhs.compile(vars)?;
                Ok(Box::new(move |args: &[f64]| -> Result<f64, EvalError> {
                    let rhs = rhs_fn(args)?;
                    check_divisor(op, rhs)?;
                    op.eval(lhs_fn(args)?, rhs)
                }))
            }
        }
    }
}
