//! aq-chem: carbonate-system equilibrium chemistry for aquacarb.
//!
//! Provides:
//! - Equilibrium constants (Henry's law + two dissociation constants)
//! - Pure conversion formulas between carbonate species
//! - Bounded fixed-point solver for the DIC/HCO3 cases
//! - CarbonateSystem aggregate (full speciation from one input pair)
//! - Parameter sweeps for the charting front ends
//!
//! # Example
//!
//! ```
//! use aq_chem::CarbonateSystem;
//! use aq_core::{CarbonSpecies, Concentration, Ph};
//!
//! let pco2 = Concentration::new(CarbonSpecies::PCO2, 4.0e-4).unwrap();
//! let ph = Ph::new(8.1).unwrap();
//!
//! let system = CarbonateSystem::from_gas_and_ph(pco2, ph).unwrap();
//! println!("HCO3- = {} mol/L", system.hco3_mol_per_l());
//! ```

pub mod constants;
pub mod equilibrium;
pub mod solver;
pub mod sweep_executor;
pub mod sweeps;
pub mod system;

// Re-exports for ergonomics
pub use solver::{FixedPointConfig, FixedPointOutcome, fixed_point, solve_co2_from_dic_hco3};
pub use sweep_executor::{SpeciationSweep, sweep_hco3_at_fixed_dic, sweep_ph_at_fixed_pco2};
pub use sweeps::{SweepRange, SweepSpacing};
pub use system::CarbonateSystem;
