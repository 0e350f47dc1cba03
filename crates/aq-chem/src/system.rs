//! The carbonate-system aggregate: full speciation from one input pair.

use aq_core::{AqResult, CarbonSpecies, Concentration, Ph, Real};

use crate::equilibrium;

/// Complete speciation of one aqueous carbonate system.
///
/// Holds the six dependent quantities. Constructed atomically from either
/// (PCO2, pH) or (HCO3, DIC); a formula or validation failure during
/// construction propagates and no value is produced. Immutable afterwards,
/// so instances are freely shareable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarbonateSystem {
    pco2: Concentration,
    ph: Ph,
    co2aq: Concentration,
    h2co3: Concentration,
    hco3: Concentration,
    co3: Concentration,
}

impl CarbonateSystem {
    /// Closed-form path from the gas-side pair (PCO2, pH).
    ///
    /// Derivation order: CO2(aq) from Henry's law, H2CO3 from the hydration
    /// identity, then HCO3 and CO3 through the two dissociations.
    pub fn from_gas_and_ph(pco2: Concentration, ph: Ph) -> AqResult<Self> {
        let co2aq = Concentration::new(CarbonSpecies::CO2Aq, equilibrium::co2aq_from_pco2(pco2)?)?;
        let h2co3 =
            Concentration::new(CarbonSpecies::H2CO3, equilibrium::h2co3_from_co2aq(co2aq)?)?;
        let hco3 = Concentration::new(
            CarbonSpecies::HCO3,
            equilibrium::hco3_from_h2co3_ph(h2co3, ph)?,
        )?;
        let co3 = Concentration::new(
            CarbonSpecies::CO3,
            equilibrium::co3_from_hco3_ph(hco3, ph)?,
        )?;

        Ok(Self {
            pco2,
            ph,
            co2aq,
            h2co3,
            hco3,
            co3,
        })
    }

    /// Iterative path from the carbon-side pair (HCO3, DIC).
    ///
    /// CO3 comes out of the fixed-point solve; the mass balance then gives
    /// H2CO3, and PCO2 and pH follow. A negative mass-balance remainder or a
    /// derived pH off the 0..14 scale fails construction.
    pub fn from_hco3_and_dic(hco3: Concentration, dic: Concentration) -> AqResult<Self> {
        let co3 = Concentration::new(
            CarbonSpecies::CO3,
            equilibrium::co3_from_dic_hco3(dic, hco3)?,
        )?;
        let h2co3 = Concentration::new(
            CarbonSpecies::H2CO3,
            equilibrium::h2co3_from_mass_balance(dic, hco3, co3)?,
        )?;
        let co2aq =
            Concentration::new(CarbonSpecies::CO2Aq, equilibrium::co2aq_from_h2co3(h2co3)?)?;
        let pco2 = Concentration::new(CarbonSpecies::PCO2, equilibrium::pco2_from_co2aq(co2aq)?)?;
        let ph = Ph::new(equilibrium::ph_from_h2co3_hco3(h2co3, hco3)?)?;

        Ok(Self {
            pco2,
            ph,
            co2aq,
            h2co3,
            hco3,
            co3,
        })
    }

    pub fn pco2_atm(&self) -> Real {
        self.pco2.value()
    }

    pub fn ph(&self) -> Real {
        self.ph.value()
    }

    pub fn co2aq_mol_per_l(&self) -> Real {
        self.co2aq.value()
    }

    pub fn h2co3_mol_per_l(&self) -> Real {
        self.h2co3.value()
    }

    pub fn hco3_mol_per_l(&self) -> Real {
        self.hco3.value()
    }

    pub fn co3_mol_per_l(&self) -> Real {
        self.co3.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{K1, K2, KH};
    use aq_core::AqError;

    #[test]
    fn gas_path_matches_formula_chain() {
        // PCO2 = 4e-4 atm, pH 8.10; expected values computed from the
        // formulas in double precision
        let pco2 = Concentration::new(CarbonSpecies::PCO2, 4.0e-4).unwrap();
        let ph = Ph::new(8.10).unwrap();
        let system = CarbonateSystem::from_gas_and_ph(pco2, ph).unwrap();

        let h_plus = 10f64.powf(-8.10);
        let co2aq = KH * 4.0e-4;
        let hco3 = K1 * co2aq / h_plus;
        let co3 = K2 * hco3 / h_plus;

        assert_eq!(system.pco2_atm(), 4.0e-4);
        assert_eq!(system.ph(), 8.10);
        assert_eq!(system.co2aq_mol_per_l(), co2aq);
        assert_eq!(system.h2co3_mol_per_l(), co2aq);
        assert_eq!(system.hco3_mol_per_l(), hco3);
        assert_eq!(system.co3_mol_per_l(), co3);

        // Magnitude spot checks: CO2aq = 1.32e-5 mol/L, HCO3 ~ 7.1e-4 mol/L
        assert!((system.co2aq_mol_per_l() - 1.32e-5).abs() < 1e-18);
        assert!(system.hco3_mol_per_l() > 7.0e-4 && system.hco3_mol_per_l() < 7.3e-4);
        assert!(system.co3_mol_per_l() > 0.0 && system.co3_mol_per_l() < 1e-5);
    }

    #[test]
    fn carbon_path_satisfies_mass_balance() {
        let hco3 = Concentration::new(CarbonSpecies::HCO3, 1.0e-8).unwrap();
        let dic = Concentration::new(CarbonSpecies::DIC, 1.0e-4).unwrap();
        let system = CarbonateSystem::from_hco3_and_dic(hco3, dic).unwrap();

        // DIC = H2CO3 + HCO3 + CO3 holds exactly by construction
        let sum =
            system.h2co3_mol_per_l() + system.hco3_mol_per_l() + system.co3_mol_per_l();
        assert!((sum - 1.0e-4).abs() < 1e-12);

        assert!(system.h2co3_mol_per_l() >= 0.0);
        assert_eq!(system.co2aq_mol_per_l(), system.h2co3_mol_per_l());
        assert_eq!(system.pco2_atm(), system.co2aq_mol_per_l() / KH);
        assert!(system.ph() > 0.0 && system.ph() < 14.0);
    }

    #[test]
    fn zero_hco3_fails_construction() {
        let hco3 = Concentration::new(CarbonSpecies::HCO3, 0.0).unwrap();
        let dic = Concentration::new(CarbonSpecies::DIC, 1.0e-4).unwrap();

        let err = CarbonateSystem::from_hco3_and_dic(hco3, dic).unwrap_err();
        assert!(matches!(err, AqError::ConvergenceFailure { .. }));
    }

    #[test]
    fn construction_is_deterministic() {
        let pco2 = Concentration::new(CarbonSpecies::PCO2, 4.0e-4).unwrap();
        let ph = Ph::new(8.10).unwrap();

        let a = CarbonateSystem::from_gas_and_ph(pco2, ph).unwrap();
        let b = CarbonateSystem::from_gas_and_ph(pco2, ph).unwrap();
        assert_eq!(a, b);

        let hco3 = Concentration::new(CarbonSpecies::HCO3, 1.0e-8).unwrap();
        let dic = Concentration::new(CarbonSpecies::DIC, 1.0e-4).unwrap();

        let c = CarbonateSystem::from_hco3_and_dic(hco3, dic).unwrap();
        let d = CarbonateSystem::from_hco3_and_dic(hco3, dic).unwrap();
        assert_eq!(c, d);
    }
}
