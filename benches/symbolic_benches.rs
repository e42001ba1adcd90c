use RustedSymDiff::symbolic::symbolic_engine::{Expr, Variable};
use RustedSymDiff::symbolic::symbolic_eval::Environment;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// x_0^2 * sin(x_1) / ln(x_0 + x_2) - cos(x_0 * x_1) + ... over `n` variables
fn test_expression(n: usize) -> (Expr, Vec<Variable>) {
    let (xs, vars) = Expr::IndexedVars(n, 'x');
    let mut expr = Expr::Const(0);
    for i in 0..n {
        let (a, b) = (xs[i].clone(), xs[(i + 1) % n].clone());
        let term = a.clone().square() * b.clone().sin() / (a.clone() + b.clone()).ln()
            - (a * b).cos();
        expr = expr + term;
    }
    (expr, vars)
}

fn bench_diff(c: &mut Criterion) {
    let (expr, vars) = test_expression(10);
    c.bench_function("diff 10 variables", |b| {
        b.iter(|| black_box(&expr).diff(black_box(&vars[0])))
    });
    c.bench_function("gradient 10 variables", |b| {
        b.iter(|| black_box(&expr).diff_multi_args(&vars))
    });
    c.bench_function("parallel gradient 10 variables", |b| {
        b.iter(|| black_box(&expr).par_diff_multi_args(&vars))
    });
}

fn bench_simplify(c: &mut Criterion) {
    let (expr, vars) = test_expression(10);
    let derivative = expr.diff(&vars[0]);
    c.bench_function("simplify derivative", |b| {
        b.iter(|| black_box(&derivative).simplify_repeatedly(16))
    });
}

fn bench_eval(c: &mut Criterion) {
    let (expr, vars) = test_expression(10);
    let values: Vec<f64> = (0..vars.len()).map(|i| 1.0 + 0.1 * i as f64).collect();
    let env: Environment = vars.iter().copied().zip(values.iter().copied()).collect();
    c.bench_function("eval_expression", |b| {
        b.iter(|| black_box(&expr).eval_expression(&env))
    });
    if let Ok(func) = expr.lambdify(&vars) {
        c.bench_function("lambdified", |b| b.iter(|| func(black_box(values.as_slice()))));
    }
}

criterion_group!(benches, bench_diff, bench_simplify, bench_eval);
criterion_main!(benches);
