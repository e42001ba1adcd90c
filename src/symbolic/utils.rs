// numeric helpers used to cross-check analytical derivatives

/// `num_values` evenly spaced points from `start` to `end`, both ends included.
pub fn linspace(start: f64, end: f64, num_values: usize) -> Vec<f64> {
    if num_values == 1 {
        return vec![start];
    }
    let mut values = Vec::with_capacity(num_values);
    let step = (end - start) / (num_values as f64 - 1.0);

    for i in 0..num_values {
        let value = start + (i as f64 * step);
        values.push(value);
    }

    values
}

/// Central finite difference of `f` at every point of `x_values`.
///
/// The first failing evaluation of `f` is returned as the error.
pub fn numerical_derivative<F, E>(f: F, x_values: &[f64], h: f64) -> Result<Vec<f64>, E>
where
    F: Fn(f64) -> Result<f64, E>,
{
    let mut derivatives = Vec::with_capacity(x_values.len());

    for &x in x_values {
        let f_x_plus_h = f(x + h)?;
        let f_x_minus_h = f(x - h)?;
        let derivative = (f_x_plus_h - f_x_minus_h) / (2.0 * h);
        derivatives.push(derivative);
    }

    Ok(derivatives)
}

/// Euclidean distance between `x` and `y` divided by their length, `0` for empty slices.
pub fn norm(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    if x.is_empty() {
        return 0.0;
    }
    let distance = x
        .iter()
        .zip(y)
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        .sqrt();
    distance / x.len() as f64
}
