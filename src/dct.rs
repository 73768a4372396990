//! Fast type-II discrete cosine transform (Project Nayuki's recursive
//! split), used by the Image-Code.
//!
//! The length must be a power of two. The transform is unscaled:
//! `out[k] = Σ v[i]·cos(π·(i+½)·k/n)`.

use crate::error::{IsccError, Result};
use std::f64::consts::PI;

/// Transform `v` and return the coefficient vector.
pub fn dct(v: &[f64]) -> Result<Vec<f64>> {
    let n = v.len();
    if n == 0 || !n.is_power_of_two() {
        return Err(IsccError::InvalidInput(format!(
            "dct length must be a power of two, got {n}"
        )));
    }
    Ok(dct_inner(v))
}

fn dct_inner(v: &[f64]) -> Vec<f64> {
    let n = v.len();
    if n == 1 {
        return v.to_vec();
    }
    let half = n / 2;
    let mut alpha: Vec<f64> = (0..half).map(|i| v[i] + v[n - 1 - i]).collect();
    let mut beta: Vec<f64> = (0..half)
        .map(|i| (v[i] - v[n - 1 - i]) / (((i as f64 + 0.5) * PI / n as f64).cos() * 2.0))
        .collect();
    alpha = dct_inner(&alpha);
    beta = dct_inner(&beta);
    let mut out = Vec::with_capacity(n);
    for i in 0..half - 1 {
        out.push(alpha[i]);
        out.push(beta[i] + beta[i + 1]);
    }
    out.push(alpha[half - 1]);
    out.push(beta[half - 1]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(got: &[f64], want: &[f64]) {
        assert_eq!(got.len(), want.len());
        for (g, w) in got.iter().zip(want) {
            assert!((g - w).abs() < 1e-9, "{g} != {w}");
        }
    }

    #[test]
    fn matches_direct_evaluation() {
        let v = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let direct: Vec<f64> = (0..8)
            .map(|k| {
                (0..8)
                    .map(|i| v[i] * ((i as f64 + 0.5) * k as f64 * PI / 8.0).cos())
                    .sum()
            })
            .collect();
        assert_close(&dct(&v).unwrap(), &direct);
    }

    #[test]
    fn length_one_is_identity() {
        assert_eq!(dct(&[42.0]).unwrap(), vec![42.0]);
    }

    #[test]
    fn rejects_non_power_of_two() {
        assert!(dct(&[]).is_err());
        assert!(dct(&[1.0, 2.0, 3.0]).is_err());
    }
}
