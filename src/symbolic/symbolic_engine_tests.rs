//___________________________________TESTS____________________________________
// end-to-end behaviour of the engine: build -> differentiate -> simplify -> render / evaluate

#[cfg(test)]
mod tests {
    use crate::symbolic::symbolic_engine::{Expr, Variable};
    use crate::symbolic::symbolic_errors::{ArithmeticError, EvalError};
    use crate::symbolic::symbolic_eval::Environment;
    use crate::symbolic::symbolic_operators::{BinaryOp, UnaryOp};
    use crate::{indexed_var, indexed_vars};
    use approx::assert_relative_eq;
    use std::collections::HashMap;

    fn x0() -> Variable {
        Variable::new('x', 0)
    }

    fn sample_expressions() -> Vec<Expr> {
        let x = Expr::var('x', 0);
        let y = Expr::var('y', 3);
        vec![
            x.clone(),
            y.clone(),
            x.clone().sin(),
            -x.clone(),
            -Expr::Const(5),
            x.clone() + Expr::Const(0),
            x.clone() * y.clone(),
            (x.clone() - y.clone()).ln(),
            x.clone().pow(y.clone()) / x.clone().cos(),
            x.clone().sqrt().lg(),
        ]
    }

    #[test]
    fn test_scenario_render() {
        let x = indexed_var!('x', 0);
        let f = x.clone() + x.sin();
        assert_eq!(f.render(), "x_0 + sin(x_0)");
    }

    #[test]
    fn test_scenario_derivative_before_and_after_simplification() {
        let x = indexed_var!('x', 0);
        let f = x.clone() + x.clone().sin();
        let df = f.diff(&x0());
        assert_eq!(df, Expr::Const(1) + x.clone().cos() * Expr::Const(1));
        assert_eq!(df.render(), "1 + (cos(x_0) * 1)");
        // the product sits below an Add that matches no rule
        assert_eq!(df.simplify(), df);
        assert_eq!(df.matching_rule(), None);
    }

    #[test]
    fn test_scenario_evaluate() {
        let f = Expr::var('x', 0) * Expr::Const(2);
        let env = Environment::from([(x0(), 3.0)]);
        assert_eq!(f.eval_expression(&env), Ok(6.0));

        let f = Expr::Const(5) / Expr::Const(0);
        assert_eq!(
            f.eval_expression(&Environment::new()),
            Err(EvalError::Arithmetic(ArithmeticError::DivisionByZero))
        );
    }

    #[test]
    fn test_derivative_of_leaves() {
        let vars = [x0(), Variable::new('x', 1), Variable::new('y', 0)];
        for c in [-3, 0, 1, 42, i64::MAX] {
            for var in &vars {
                assert_eq!(Expr::Const(c).diff(var), Expr::Const(0));
            }
        }
        for v in &vars {
            for w in &vars {
                let expected = if v == w { 1 } else { 0 };
                assert_eq!(Expr::Var(*v).diff(w), Expr::Const(expected));
            }
        }
    }

    #[test]
    fn test_simplify_identities() {
        for x in sample_expressions() {
            assert_eq!((x.clone() * Expr::Const(1)).simplify(), x.simplify());
            assert_eq!((Expr::Const(1) * x.clone()).simplify(), x.simplify());
            assert_eq!((x.clone() * Expr::Const(0)).simplify(), Expr::Const(0));
            assert_eq!((Expr::Const(0) * x.clone()).simplify(), Expr::Const(0));
            assert_eq!((x.clone() + Expr::Const(0)).simplify(), x);
            assert_eq!((Expr::Const(0) + x.clone()).simplify(), x);
        }
    }

    #[test]
    fn test_division_by_zero_for_any_dividend() {
        let mut env = Environment::from([(x0(), 0.5)]);
        for anything in sample_expressions() {
            let f = anything / Expr::Const(0);
            assert_eq!(
                f.eval_expression(&env),
                Err(EvalError::Arithmetic(ArithmeticError::DivisionByZero))
            );
            env.insert(Variable::new('y', 3), 2.0);
        }
    }

    fn leaves() -> Vec<Expr> {
        vec![
            Expr::var('x', 0),
            Expr::var('x', 1),
            Expr::Const(0),
            Expr::Const(-1),
        ]
    }

    /// `leaves` plus every tree with one more level of operators on top of `smaller`
    fn grow(leaves: &[Expr], smaller: &[Expr]) -> Vec<Expr> {
        let mut trees = leaves.to_vec();
        for op in UnaryOp::all() {
            trees.extend(smaller.iter().map(|arg| Expr::unary(op, arg.clone())));
        }
        for op in BinaryOp::all() {
            for lhs in smaller {
                for rhs in smaller {
                    trees.push(Expr::binary(op, lhs.clone(), rhs.clone()));
                }
            }
        }
        trees
    }

    fn assert_distinct_renderings(trees: &[Expr], rendered: &mut HashMap<String, Expr>) {
        for tree in trees {
            if let Some(previous) = rendered.insert(tree.render(), tree.clone()) {
                assert_eq!(&previous, tree, "two trees render as {}", tree);
            }
        }
    }

    #[test]
    fn test_render_is_injective() {
        let leaves = leaves();
        let depth_1 = grow(&leaves, &leaves);
        let depth_2 = grow(&leaves, &depth_1);
        let mut rendered = HashMap::new();
        assert_distinct_renderings(&depth_2, &mut rendered);
        assert_eq!(rendered.len(), depth_2.len());

        // third level over a smaller alphabet, with one side of binary nodes kept a leaf
        let small_leaves = [Expr::var('x', 0), Expr::Const(-1)];
        let small_1 = grow(&small_leaves, &small_leaves);
        let small_2 = grow(&small_leaves, &small_1);
        let mut depth_3 = Vec::new();
        for tree in &small_2 {
            for op in UnaryOp::all() {
                depth_3.push(Expr::unary(op, tree.clone()));
            }
            for op in BinaryOp::all() {
                for leaf in &small_leaves {
                    depth_3.push(Expr::binary(op, tree.clone(), leaf.clone()));
                    depth_3.push(Expr::binary(op, leaf.clone(), tree.clone()));
                }
            }
        }
        assert_distinct_renderings(&depth_3, &mut rendered);
    }

    #[test]
    fn test_cos_derivative_matches_finite_differences() {
        let f = Expr::var('x', 0).cos();
        let (norm, ok) = f
            .compare_num1D(&x0(), &Environment::new(), 0.5, 2.0, 50, 1e-5)
            .unwrap();
        assert!(ok, "norm = {}", norm);
        let df = f.diff(&x0());
        let env = Environment::from([(x0(), 1.0)]);
        assert_relative_eq!(df.eval_expression(&env).unwrap(), -(1f64.sin()), epsilon = 1e-12);
    }

    #[test]
    fn test_derivatives_match_finite_differences() {
        let x = Expr::var('x', 0);
        let y = Expr::var('y', 0);
        let functions = vec![
            x.clone().square() * x.clone().sin() / x.clone().ln(),
            x.clone().sqrt() - x.clone().ln() * y.clone(),
            (x.clone() * y.clone()).pow(x.clone()),
            -(x.clone().cos() + Expr::Const(3) * x.clone()),
        ];
        let env = Environment::from([(Variable::new('y', 0), 0.7)]);
        for f in functions {
            let (norm, ok) = f.compare_num1D(&x0(), &env, 1.5, 3.0, 40, 1e-5).unwrap();
            assert!(ok, "derivative of {} is off by {}", f, norm);
        }
    }

    #[test]
    fn test_compare_num1D_reports_eval_errors() {
        let f = Expr::var('x', 0) * Expr::var('z', 9);
        assert_eq!(
            f.compare_num1D(&x0(), &Environment::new(), 0.0, 1.0, 10, 1e-5),
            Err(EvalError::UnboundVariable(Variable::new('z', 9)))
        );
    }

    #[test]
    fn test_substitution_then_derivative() {
        let (xs, vars) = indexed_vars!(2, 'x');
        // f(x_0, x_1) = x_0 * x_1, then x_1 := sin(x_0)
        let f = xs[0].clone() * xs[1].clone();
        let g = f.substitute_variable(&vars[1], &xs[0].clone().sin());
        assert_eq!(g, xs[0].clone() * xs[0].clone().sin());
        assert!(!g.contains_variable(&vars[1]));
        assert_eq!(g.variables(), vec![vars[0]]);

        let env = Environment::from([(vars[0], 0.3)]);
        let expected = 0.3f64.sin() + 0.3 * 0.3f64.cos();
        assert_relative_eq!(
            g.diff(&vars[0]).eval_expression(&env).unwrap(),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_set_variable() {
        let (xs, vars) = indexed_vars!(2, 'x');
        let f = xs[0].clone() / xs[1].clone();
        let g = f.set_variable(&vars[1], 4);
        assert_eq!(g, xs[0].clone() / Expr::Const(4));
        // the input tree is left as it was
        assert_eq!(f.variables(), vars);
    }

    #[test]
    fn test_builders_by_name() {
        let x = Expr::var('x', 0);
        assert_eq!(Expr::apply_unary("ln", x.clone()).unwrap(), x.clone().ln());
        assert_eq!(
            Expr::apply_binary("-", x.clone(), Expr::Const(1)).unwrap(),
            Expr::binary(BinaryOp::Subtract, x.clone(), Expr::Const(1))
        );
        assert_eq!(
            Expr::apply_unary("exp", x.clone()),
            Err(EvalError::UnsupportedOperator("exp".to_string()))
        );
    }

    #[test]
    fn test_lambdified_derivative() {
        let (xs, vars) = indexed_vars!(2, 'x');
        let f = xs[0].clone().square() * xs[1].clone().cos();
        let grad = f.diff_multi_args(&vars);
        let funcs: Vec<_> = grad
            .iter()
            .map(|df| df.lambdify(&vars).unwrap())
            .collect();
        let (a, b) = (1.5, 0.25);
        assert_relative_eq!(funcs[0](&[a, b]).unwrap(), 2.0 * a * b.cos(), epsilon = 1e-12);
        assert_relative_eq!(funcs[1](&[a, b]).unwrap(), -(a * a) * b.sin(), epsilon = 1e-12);
    }

    #[test]
    fn test_tex_of_derivative() {
        let x = Expr::var('x', 0);
        let df = x.clone().sin().n_th_derivative(&x0(), 1);
        assert_eq!(df.to_tex(), "$cos(x_0)$");
        let df = x.clone().square().diff(&x0());
        assert_eq!(df.to_tex(), df.render());
    }
}
