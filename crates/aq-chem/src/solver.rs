//! Bounded fixed-point solver.
//!
//! The DIC/HCO3 cases have no closed form: CO₃²⁻ depends on the dissolved CO₂
//! concentration, which depends back on CO₃²⁻ through the mass balance. One
//! generic kernel serves both derivations.

use aq_core::{AqError, AqResult, Real};

use crate::constants::{K1, K2};

/// Fixed-point solver configuration.
#[derive(Debug, Clone, Copy)]
pub struct FixedPointConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance on successive iterates
    pub tolerance: Real,
}

impl Default for FixedPointConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            tolerance: 1e-6,
        }
    }
}

/// Fixed-point iteration result.
#[derive(Debug, Clone, Copy)]
pub struct FixedPointOutcome {
    /// Converged value
    pub value: Real,
    /// Iterations taken
    pub iterations: usize,
    /// Final |next − previous|
    pub error: Real,
}

/// Iterate `x → step(x)` until successive iterates differ by at most
/// `config.tolerance`.
///
/// Fails with `ConvergenceFailure` when the iteration bound is reached, and
/// propagates any error raised by `step` itself.
pub fn fixed_point<F>(seed: Real, step: F, config: &FixedPointConfig) -> AqResult<FixedPointOutcome>
where
    F: Fn(Real) -> AqResult<Real>,
{
    let mut x = seed;
    for iteration in 1..=config.max_iterations {
        let next = step(x)?;
        let error = (next - x).abs();
        x = next;
        if error <= config.tolerance {
            return Ok(FixedPointOutcome {
                value: x,
                iterations: iteration,
                error,
            });
        }
    }
    Err(AqError::ConvergenceFailure {
        what: format!("maximum iterations {} reached", config.max_iterations),
    })
}

/// Solve for dissolved CO₂ given DIC and HCO3 (both mol/L).
///
/// Seeds with `dic − hco3` (carbonate assumed negligible), then refines: each
/// step derives CO₃²⁻ from the current CO₂ through the two dissociation
/// constants and re-applies the mass balance.
///
/// `hco3 = 0` makes the update divide by zero, and a non-positive CO₂ iterate
/// makes the divisor degenerate; both fail with `ConvergenceFailure`.
pub fn solve_co2_from_dic_hco3(dic: Real, hco3: Real, config: &FixedPointConfig) -> AqResult<Real> {
    if hco3 <= 0.0 {
        return Err(AqError::ConvergenceFailure {
            what: format!("zero divisor: HCO3 = {hco3} mol/L"),
        });
    }

    let seed = dic - hco3;
    let outcome = fixed_point(
        seed,
        |co2| {
            if co2 <= 0.0 {
                return Err(AqError::ConvergenceFailure {
                    what: format!("non-positive CO2 iterate: {co2} mol/L"),
                });
            }
            let co3 = (K2 * hco3) / (co2 * (K1 / hco3));
            Ok(dic - hco3 - co3)
        },
        config,
    )?;
    Ok(outcome.value)
}
