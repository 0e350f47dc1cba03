//! Equilibrium constants of the aqueous carbonate system.
//!
//! All three constants hold for one implicit temperature; temperature and
//! ionic-strength dependence is out of scope.

/// Henry's law constant [mol/(L·atm)]: solubility of CO₂ in water.
pub const KH: f64 = 3.3e-2;

/// First dissociation constant [mol/L]: H₂CO₃ ⇌ HCO₃⁻ + H⁺.
pub const K1: f64 = 4.3e-7;

/// Second dissociation constant [mol/L]: HCO₃⁻ ⇌ CO₃²⁻ + H⁺.
pub const K2: f64 = 4.7e-11;
