//! Sweep execution: one carbonate system per sample.
//!
//! Connects sweep ranges with aggregate construction and produces arrays
//! suitable for plotting. Individual samples may fail to construct — the
//! model's recovered pH leaves the 0..14 scale as HCO3 approaches DIC, and
//! the solver rejects degenerate inputs — so failures are recorded per
//! point, not propagated.

use aq_core::{AqResult, CarbonSpecies, Concentration, Ph, Real};

use crate::sweeps::SweepRange;
use crate::system::CarbonateSystem;

/// Result of a speciation sweep.
#[derive(Debug, Clone)]
pub struct SpeciationSweep {
    /// Independent variable values (the sweep parameter)
    pub independent_values: Vec<Real>,
    /// Computed systems (None entries for failed points)
    pub systems: Vec<Option<CarbonateSystem>>,
    /// Number of successful constructions
    pub num_successful: usize,
    /// Number of failed constructions
    pub num_failed: usize,
}

impl SpeciationSweep {
    /// Get PCO2 array in atm (excluding failed points)
    pub fn pco2_atm(&self) -> Vec<Real> {
        self.systems
            .iter()
            .filter_map(|s| s.as_ref().map(|sys| sys.pco2_atm()))
            .collect()
    }

    /// Get pH array (excluding failed points)
    pub fn ph(&self) -> Vec<Real> {
        self.systems
            .iter()
            .filter_map(|s| s.as_ref().map(|sys| sys.ph()))
            .collect()
    }

    /// Get CO2(aq) array in mol/L (excluding failed points)
    pub fn co2aq_mol_per_l(&self) -> Vec<Real> {
        self.systems
            .iter()
            .filter_map(|s| s.as_ref().map(|sys| sys.co2aq_mol_per_l()))
            .collect()
    }

    /// Get H2CO3 array in mol/L (excluding failed points)
    pub fn h2co3_mol_per_l(&self) -> Vec<Real> {
        self.systems
            .iter()
            .filter_map(|s| s.as_ref().map(|sys| sys.h2co3_mol_per_l()))
            .collect()
    }

    /// Get HCO3 array in mol/L (excluding failed points)
    pub fn hco3_mol_per_l(&self) -> Vec<Real> {
        self.systems
            .iter()
            .filter_map(|s| s.as_ref().map(|sys| sys.hco3_mol_per_l()))
            .collect()
    }

    /// Get CO3 array in mol/L (excluding failed points)
    pub fn co3_mol_per_l(&self) -> Vec<Real> {
        self.systems
            .iter()
            .filter_map(|s| s.as_ref().map(|sys| sys.co3_mol_per_l()))
            .collect()
    }

    /// Get independent values corresponding to successful systems
    pub fn successful_independent_values(&self) -> Vec<Real> {
        self.independent_values
            .iter()
            .zip(&self.systems)
            .filter_map(|(val, sys)| sys.as_ref().map(|_| *val))
            .collect()
    }
}

/// Sweep pH at fixed PCO2: one closed-form system per sample.
pub fn sweep_ph_at_fixed_pco2(range: &SweepRange, pco2_atm: Real) -> AqResult<SpeciationSweep> {
    let pco2 = Concentration::new(CarbonSpecies::PCO2, pco2_atm)?;

    let points = range.generate_points();
    let mut systems = Vec::with_capacity(points.len());
    let mut num_successful = 0;
    let mut num_failed = 0;

    for ph_value in &points {
        match Ph::new(*ph_value).and_then(|ph| CarbonateSystem::from_gas_and_ph(pco2, ph)) {
            Ok(system) => {
                systems.push(Some(system));
                num_successful += 1;
            }
            Err(_) => {
                systems.push(None);
                num_failed += 1;
            }
        }
    }

    Ok(SpeciationSweep {
        independent_values: points,
        systems,
        num_successful,
        num_failed,
    })
}

/// Sweep HCO3 at fixed DIC: one solver-backed system per sample.
pub fn sweep_hco3_at_fixed_dic(
    range: &SweepRange,
    dic_mol_per_l: Real,
) -> AqResult<SpeciationSweep> {
    let dic = Concentration::new(CarbonSpecies::DIC, dic_mol_per_l)?;

    let points = range.generate_points();
    let mut systems = Vec::with_capacity(points.len());
    let mut num_successful = 0;
    let mut num_failed = 0;

    for hco3_value in &points {
        match Concentration::new(CarbonSpecies::HCO3, *hco3_value)
            .and_then(|hco3| CarbonateSystem::from_hco3_and_dic(hco3, dic))
        {
            Ok(system) => {
                systems.push(Some(system));
                num_successful += 1;
            }
            Err(_) => {
                systems.push(None);
                num_failed += 1;
            }
        }
    }

    Ok(SpeciationSweep {
        independent_values: points,
        systems,
        num_successful,
        num_failed,
    })
}
