//! Pure conversion formulas between carbonate species.
//!
//! Grouped by responsibility: Henry's law, the hydration identity
//! (CO2(aq) ≡ H2CO3), mass balance, the two dissociation equilibria, and the
//! two iterative DIC/HCO3 derivations.
//!
//! Every function takes already-validated value types and returns the raw
//! derived number; callers wrap results back into value types where an
//! invariant (non-negativity, the pH scale) must hold. Passing a value tagged
//! with the wrong species role fails with `MissingInput`: the quantity the
//! formula needs was not supplied.

use aq_core::{AqError, AqResult, CarbonSpecies, Concentration, Ph, Real};

use crate::constants::{K1, K2, KH};
use crate::solver::{self, FixedPointConfig};

fn require(c: Concentration, species: CarbonSpecies) -> AqResult<Real> {
    if c.species() != species {
        return Err(AqError::MissingInput {
            what: species.key(),
        });
    }
    Ok(c.value())
}

/// Henry's law, liquid → gas: PCO2 = CO2(aq) / KH, in atm.
pub fn pco2_from_co2aq(co2aq: Concentration) -> AqResult<Real> {
    Ok(require(co2aq, CarbonSpecies::CO2Aq)? / KH)
}

/// Henry's law, gas → liquid: CO2(aq) = KH · PCO2, in mol/L.
pub fn co2aq_from_pco2(pco2: Concentration) -> AqResult<Real> {
    Ok(KH * require(pco2, CarbonSpecies::PCO2)?)
}

/// The model equates dissolved CO₂ and carbonic acid concentrations.
pub fn co2aq_from_h2co3(h2co3: Concentration) -> AqResult<Real> {
    require(h2co3, CarbonSpecies::H2CO3)
}

/// Inverse of [`co2aq_from_h2co3`]; the same identity.
pub fn h2co3_from_co2aq(co2aq: Concentration) -> AqResult<Real> {
    require(co2aq, CarbonSpecies::CO2Aq)
}

/// Mass balance: H2CO3 = DIC − HCO3 − CO3.
///
/// May be negative for chemically inconsistent inputs; not guarded here.
pub fn h2co3_from_mass_balance(
    dic: Concentration,
    hco3: Concentration,
    co3: Concentration,
) -> AqResult<Real> {
    Ok(require(dic, CarbonSpecies::DIC)?
        - require(hco3, CarbonSpecies::HCO3)?
        - require(co3, CarbonSpecies::CO3)?)
}

/// First dissociation: HCO3 = K1 · H2CO3 / 10^(−pH).
pub fn hco3_from_h2co3_ph(h2co3: Concentration, ph: Ph) -> AqResult<Real> {
    let h_plus = 10f64.powf(-ph.value());
    Ok(K1 * require(h2co3, CarbonSpecies::H2CO3)? / h_plus)
}

/// Second dissociation: CO3 = K2 · HCO3 / 10^(−pH).
pub fn co3_from_hco3_ph(hco3: Concentration, ph: Ph) -> AqResult<Real> {
    let h_plus = 10f64.powf(-ph.value());
    Ok(K2 * require(hco3, CarbonSpecies::HCO3)? / h_plus)
}

/// Recover pH from the first dissociation: hPlus = K1 · H2CO3 / HCO3.
///
/// Returns −ln(hPlus), natural logarithm. The forward dissociation formulas
/// use the base-10 `10^(−pH)` convention; both conventions are kept exactly
/// as the model defines them, so a pH produced here does not invert
/// [`hco3_from_h2co3_ph`].
pub fn ph_from_h2co3_hco3(h2co3: Concentration, hco3: Concentration) -> AqResult<Real> {
    let h_plus = K1 * require(h2co3, CarbonSpecies::H2CO3)? / require(hco3, CarbonSpecies::HCO3)?;
    Ok(-h_plus.ln())
}

/// Carbonate from DIC and HCO3. No closed form exists; the converged
/// dissolved CO₂ is folded back through the mass balance.
pub fn co3_from_dic_hco3(dic: Concentration, hco3: Concentration) -> AqResult<Real> {
    let dic_v = require(dic, CarbonSpecies::DIC)?;
    let hco3_v = require(hco3, CarbonSpecies::HCO3)?;
    let co2 = solver::solve_co2_from_dic_hco3(dic_v, hco3_v, &FixedPointConfig::default())?;
    Ok(dic_v - hco3_v - co2)
}

/// PCO2 from DIC and HCO3: the converged dissolved CO₂ through Henry's law.
pub fn pco2_from_dic_hco3(dic: Concentration, hco3: Concentration) -> AqResult<Real> {
    let dic_v = require(dic, CarbonSpecies::DIC)?;
    let hco3_v = require(hco3, CarbonSpecies::HCO3)?;
    let co2 = solver::solve_co2_from_dic_hco3(dic_v, hco3_v, &FixedPointConfig::default())?;
    Ok(co2 / KH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conc(species: CarbonSpecies, value: Real) -> Concentration {
        Concentration::new(species, value).unwrap()
    }

    #[test]
    fn henrys_law_both_directions() {
        let pco2 = conc(CarbonSpecies::PCO2, 4.0e-4);
        let co2aq = co2aq_from_pco2(pco2).unwrap();
        assert!((co2aq - 1.32e-5).abs() < 1e-18);

        let back = pco2_from_co2aq(conc(CarbonSpecies::CO2Aq, co2aq)).unwrap();
        assert!((back - 4.0e-4).abs() < 1e-12);
    }

    #[test]
    fn dissociation_formulas_match_hand_computation() {
        let ph = Ph::new(8.10).unwrap();
        let h_plus = 10f64.powf(-8.10);

        let h2co3 = conc(CarbonSpecies::H2CO3, 1.32e-5);
        let hco3 = hco3_from_h2co3_ph(h2co3, ph).unwrap();
        assert!((hco3 - K1 * 1.32e-5 / h_plus).abs() < 1e-18);

        let co3 = co3_from_hco3_ph(conc(CarbonSpecies::HCO3, hco3), ph).unwrap();
        assert!((co3 - K2 * hco3 / h_plus).abs() < 1e-18);
    }

    #[test]
    fn mass_balance_may_go_negative() {
        // Chemically inconsistent inputs are the caller's problem here
        let h2co3 = h2co3_from_mass_balance(
            conc(CarbonSpecies::DIC, 1.0e-6),
            conc(CarbonSpecies::HCO3, 2.0e-6),
            conc(CarbonSpecies::CO3, 0.0),
        )
        .unwrap();
        assert!(h2co3 < 0.0);
    }

    #[test]
    fn ph_recovery_uses_natural_log() {
        let h2co3 = conc(CarbonSpecies::H2CO3, 9.999e-5);
        let hco3 = conc(CarbonSpecies::HCO3, 1.0e-8);
        let ph = ph_from_h2co3_hco3(h2co3, hco3).unwrap();

        let h_plus = K1 * 9.999e-5 / 1.0e-8;
        assert!((ph - (-h_plus.ln())).abs() < 1e-12);
    }

    #[test]
    fn wrong_species_role_is_a_missing_input() {
        // A DIC value is not the CO2(aq) the formula needs
        let err = pco2_from_co2aq(conc(CarbonSpecies::DIC, 1.0e-5)).unwrap_err();
        assert!(matches!(err, AqError::MissingInput { what: "CO2aq" }));

        let err = co3_from_dic_hco3(
            conc(CarbonSpecies::HCO3, 1.0e-8),
            conc(CarbonSpecies::HCO3, 1.0e-8),
        )
        .unwrap_err();
        assert!(matches!(err, AqError::MissingInput { what: "DIC" }));
    }

    #[test]
    fn co3_from_dic_hco3_matches_mass_balance() {
        let dic = conc(CarbonSpecies::DIC, 1.0e-4);
        let hco3 = conc(CarbonSpecies::HCO3, 1.0e-8);

        let co3 = co3_from_dic_hco3(dic, hco3).unwrap();
        assert!(co3 >= 0.0);

        // CO3 and the converged CO2 partition the remainder exactly
        let co2 = solver::solve_co2_from_dic_hco3(1.0e-4, 1.0e-8, &FixedPointConfig::default())
            .unwrap();
        assert_eq!(co3, 1.0e-4 - 1.0e-8 - co2);
    }

    #[test]
    fn pco2_from_dic_hco3_is_converged_co2_over_kh() {
        let dic = conc(CarbonSpecies::DIC, 1.0e-4);
        let hco3 = conc(CarbonSpecies::HCO3, 1.0e-8);

        let pco2 = pco2_from_dic_hco3(dic, hco3).unwrap();
        let co2 = solver::solve_co2_from_dic_hco3(1.0e-4, 1.0e-8, &FixedPointConfig::default())
            .unwrap();
        assert_eq!(pco2, co2 / KH);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use aq_core::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn henrys_law_roundtrip(x in 0.0_f64..1.0) {
            let co2aq = Concentration::new(CarbonSpecies::CO2Aq, x).unwrap();
            let pco2 = pco2_from_co2aq(co2aq).unwrap();
            let back = co2aq_from_pco2(
                Concentration::new(CarbonSpecies::PCO2, pco2).unwrap(),
            ).unwrap();
            let tol = Tolerances { abs: 1e-12, rel: 1e-12 };
            prop_assert!(nearly_equal(back, x, tol));
        }
    }
}
