//! Polynomial least-squares fitting for the segment scanners.
//!
//! Fits `y = b0 + b1*t + ... + bd*t^d` over a segment with the index
//! regressor rescaled to `[0, 1]` for numerical conditioning. The
//! normal equations are solved by Cholesky decomposition.

/// Residual sum of squares of a degree-`degree` polynomial fit.
///
/// Segments with at most `degree + 1` points are interpolated exactly
/// and have zero residual. If the decomposition fails (near-collinear
/// basis), the residual falls back to squared deviations from the mean.
pub fn polyfit_rss(segment: &[f64], degree: usize) -> f64 {
    let n = segment.len();
    if n <= degree + 1 {
        return 0.0;
    }

    let p = degree + 1;
    let scale = 1.0 / (n - 1) as f64;

    // Assemble X'X and X'y over the Vandermonde basis [1, t, ..., t^d].
    let mut xtx = vec![vec![0.0; p]; p];
    let mut xty = vec![0.0; p];
    let mut basis = vec![0.0; p];

    for (i, &y) in segment.iter().enumerate() {
        let t = i as f64 * scale;
        let mut v = 1.0;
        for b in basis.iter_mut() {
            *b = v;
            v *= t;
        }
        for j in 0..p {
            xty[j] += basis[j] * y;
            for k in 0..p {
                xtx[j][k] += basis[j] * basis[k];
            }
        }
    }

    // Small ridge on the diagonal for numerical stability.
    for (j, row) in xtx.iter_mut().enumerate() {
        row[j] += 1e-8;
    }

    let beta = match solve_symmetric(&xtx, &xty) {
        Some(beta) => beta,
        None => return fallback_rss(segment),
    };

    let mut rss = 0.0;
    for (i, &y) in segment.iter().enumerate() {
        let t = i as f64 * scale;
        let mut fit = 0.0;
        let mut v = 1.0;
        for &b in &beta {
            fit += b * v;
            v *= t;
        }
        let r = y - fit;
        rss += r * r;
    }
    rss.max(0.0)
}

/// Squared deviations from the mean, used when the full fit degenerates.
fn fallback_rss(segment: &[f64]) -> f64 {
    let n = segment.len();
    if n == 0 {
        return 0.0;
    }
    let mean = segment.iter().sum::<f64>() / n as f64;
    segment.iter().map(|x| (x - mean).powi(2)).sum()
}

/// Solve a symmetric positive definite system via Cholesky decomposition.
fn solve_symmetric(a: &[Vec<f64>], b: &[f64]) -> Option<Vec<f64>> {
    let n = b.len();
    if n == 0 || a.len() != n {
        return None;
    }

    // A = L @ L'
    let mut l = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..=i {
            let mut sum = a[i][j];
            for k in 0..j {
                sum -= l[i][k] * l[j][k];
            }
            if i == j {
                if sum <= 0.0 {
                    return None;
                }
                l[i][j] = sum.sqrt();
            } else {
                l[i][j] = sum / l[j][j];
            }
        }
    }

    // Forward substitution: L @ y = b
    let mut y = vec![0.0; n];
    for i in 0..n {
        let mut sum = b[i];
        for j in 0..i {
            sum -= l[i][j] * y[j];
        }
        y[i] = sum / l[i][i];
    }

    // Backward substitution: L' @ x = y
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut sum = y[i];
        for j in (i + 1)..n {
            sum -= l[j][i] * x[j];
        }
        x[i] = sum / l[i][i];
    }

    Some(x)
}
