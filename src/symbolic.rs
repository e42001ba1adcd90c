#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// # Operator registry
/// the closed sets of unary (`sin`, `cos`, `lg`, `ln`, `-`) and binary (`+ - * / ^`) operators,
/// their display names and numeric rules
pub mod symbolic_operators;
/// error types of evaluation and configuration
pub mod symbolic_errors;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) builds expression trees over integer constants and indexed variables
/// 2) differentiates them analytically and simplifies the result
/// 3) turns them into strings (infix or TeX) and numbers
///# Example#
/// ```
/// use RustedSymDiff::symbolic::symbolic_engine::{Expr, Variable};
/// use RustedSymDiff::symbolic::symbolic_eval::Environment;
/// let x = Expr::var('x', 0);
/// let f = x.clone() * x.clone().sin();
/// println!("f = {}", f);
/// // differentiate with respect to x_0, then clean the result up
/// let df_dx = f.diff(&Variable::new('x', 0));
/// println!("df_dx = {}, simplified: {}", df_dx, df_dx.simplify());
/// // evaluate with x_0 = 2
/// let env = Environment::from([(Variable::new('x', 0), 2.0)]);
/// let value = df_dx.eval_expression(&env).unwrap();
/// assert!((value - (2f64.sin() + 2.0 * 2f64.cos())).abs() < 1e-12);
/// // or compile once and call many times
/// let func = df_dx.lambdify(&[Variable::new('x', 0)]).unwrap();
/// assert_eq!(func(&[2.0]), Ok(value));
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
/// analytical derivatives, gradients and the numeric check of a derivative
/// Example#
/// ```
/// use RustedSymDiff::symbolic::symbolic_engine::{Expr, Variable};
/// use RustedSymDiff::symbolic::symbolic_eval::Environment;
/// let f = Expr::var('x', 0).cos();
/// // compare numerical and analytical derivatives on 100 points of [0, 10]:
/// // the norm of the difference is returned together with norm < max_norm
/// let (norm, res) = f
///     .compare_num1D(&Variable::new('x', 0), &Environment::new(), 0.0, 10.0, 100, 1e-6)
///     .unwrap();
/// println!("norm = {}, res = {}", norm, res);
/// ```
pub mod symbolic_engine_derivatives;
/// ordered rewrite rules applied at the root of a tree
pub mod symbolic_simplify;
pub mod symbolic_display;
/// evaluation with an environment and compilation into closures
pub mod symbolic_eval;
///______________________________________________________________________________________________________________________________________________
/// numeric helpers: linspace, finite differences, norm
/// _____________________________________________________________________________________________________________________________________________
pub mod utils;
mod symbolic_engine_tests;
