//! One Markov step: `state' = state · M`.
//!
//! The product is not renormalised.  Because every row of `M` sums to 1,
//! total mass is preserved for any non-negative input, whether or not it is
//! a probability distribution.

use crate::{ChainError, ChainResult, TransitionMatrix};

/// Advance `state` one step through `matrix`, returning the new vector.
///
/// # Errors
///
/// [`ChainError::DimensionMismatch`] if `state.len() != matrix.dim()`.
pub fn step(matrix: &TransitionMatrix, state: &[f64]) -> ChainResult<Vec<f64>> {
    let mut out = vec![0.0; matrix.dim()];
    step_into(matrix, state, &mut out)?;
    Ok(out)
}

/// As [`step`], writing into a caller-owned buffer (overwritten, not
/// accumulated).
///
/// # Errors
///
/// [`ChainError::DimensionMismatch`] if `state` or `out` is the wrong length;
/// `out` is untouched in that case.
pub fn step_into(matrix: &TransitionMatrix, state: &[f64], out: &mut [f64]) -> ChainResult<()> {
    let n = matrix.dim();
    if state.len() != n {
        return Err(ChainError::DimensionMismatch { expected: n, got: state.len(), what: "state" });
    }
    if out.len() != n {
        return Err(ChainError::DimensionMismatch { expected: n, got: out.len(), what: "output" });
    }

    out.fill(0.0);
    for (mass, row) in state.iter().zip(matrix.rows()) {
        if *mass == 0.0 {
            continue;
        }
        for (dst, p) in out.iter_mut().zip(row) {
            *dst += mass * p;
        }
    }
    Ok(())
}
