//! Parameter sweep generation for the charting front ends.
//!
//! The two observed usage patterns are a linear pH sweep at fixed PCO2 and a
//! geometric HCO3 sweep at fixed DIC; the range type covers both spacings.

use aq_core::{AqError, AqResult, Real};
use std::fmt;

/// Spacing of sweep points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SweepSpacing {
    /// Fixed additive step
    Linear { step: Real },
    /// Fixed multiplicative factor
    Geometric { factor: Real },
}

/// One-dimensional sweep over an independent variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRange {
    pub start: Real,
    pub end: Real,
    pub spacing: SweepSpacing,
}

impl SweepRange {
    /// Linear sweep: `start, start + step, …` up to and including `end`.
    pub fn linear(start: Real, end: Real, step: Real) -> AqResult<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(AqError::InvalidValue {
                what: "sweep step",
                value: step,
            });
        }
        if !start.is_finite() || !end.is_finite() || end < start {
            return Err(AqError::InvalidValue {
                what: "sweep bounds",
                value: end,
            });
        }
        Ok(Self {
            start,
            end,
            spacing: SweepSpacing::Linear { step },
        })
    }

    /// Geometric sweep: `start, start · factor, …` up to the last point
    /// not exceeding `end`.
    pub fn geometric(start: Real, end: Real, factor: Real) -> AqResult<Self> {
        if !factor.is_finite() || factor <= 1.0 {
            return Err(AqError::InvalidValue {
                what: "sweep factor",
                value: factor,
            });
        }
        if !start.is_finite() || start <= 0.0 {
            return Err(AqError::InvalidValue {
                what: "sweep start",
                value: start,
            });
        }
        if !end.is_finite() || end < start {
            return Err(AqError::InvalidValue {
                what: "sweep bounds",
                value: end,
            });
        }
        Ok(Self {
            start,
            end,
            spacing: SweepSpacing::Geometric { factor },
        })
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<Real> {
        match self.spacing {
            SweepSpacing::Linear { step } => self.generate_linear(step),
            SweepSpacing::Geometric { factor } => self.generate_geometric(factor),
        }
    }

    fn generate_linear(&self, step: Real) -> Vec<Real> {
        // start + i·step rather than accumulation, so the endpoint lands
        // despite rounding; clamp keeps it exact
        let slack = step * 1e-9;
        let mut points = Vec::new();
        let mut i = 0usize;
        loop {
            let v = self.start + i as Real * step;
            if v > self.end + slack {
                break;
            }
            points.push(v.min(self.end));
            i += 1;
        }
        points
    }

    fn generate_geometric(&self, factor: Real) -> Vec<Real> {
        let mut points = Vec::new();
        let mut v = self.start;
        while v <= self.end {
            points.push(v);
            v *= factor;
        }
        points
    }
}

impl fmt::Display for SweepSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear { step } => write!(f, "linear (step {step})"),
            Self::Geometric { factor } => write!(f, "geometric (factor {factor})"),
        }
    }
}

impl fmt::Display for SweepRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sweep from {} to {}, {}", self.start, self.end, self.spacing)
    }
}
