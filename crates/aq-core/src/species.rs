//! Carbonate species tags and validated value types.

use crate::error::{AqError, AqResult};
use crate::numeric::{Real, ensure_finite};

/// Species roles of the aqueous carbonate system.
///
/// The tag identifies which quantity a [`Concentration`] carries; it has no
/// behavior beyond naming and unit labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarbonSpecies {
    /// Dissolved CO₂ (CO2(aq))
    CO2Aq,
    /// Carbonic acid (H₂CO₃)
    H2CO3,
    /// Bicarbonate (HCO₃⁻)
    HCO3,
    /// Carbonate (CO₃²⁻)
    CO3,
    /// Total dissolved inorganic carbon
    DIC,
    /// Partial pressure of CO₂
    PCO2,
}

impl CarbonSpecies {
    pub const ALL: [CarbonSpecies; 6] = [
        CarbonSpecies::CO2Aq,
        CarbonSpecies::H2CO3,
        CarbonSpecies::HCO3,
        CarbonSpecies::CO3,
        CarbonSpecies::DIC,
        CarbonSpecies::PCO2,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CarbonSpecies::CO2Aq => "CO2aq",
            CarbonSpecies::H2CO3 => "H2CO3",
            CarbonSpecies::HCO3 => "HCO3",
            CarbonSpecies::CO3 => "CO3",
            CarbonSpecies::DIC => "DIC",
            CarbonSpecies::PCO2 => "PCO2",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            CarbonSpecies::CO2Aq => "CO2(aq)",
            CarbonSpecies::H2CO3 => "H2CO3",
            CarbonSpecies::HCO3 => "HCO3-",
            CarbonSpecies::CO3 => "CO3--",
            CarbonSpecies::DIC => "DIC",
            CarbonSpecies::PCO2 => "PCO2",
        }
    }

    /// Unit the value is carried in: mol/L for dissolved species, atm for PCO2.
    pub fn unit(&self) -> &'static str {
        match self {
            CarbonSpecies::PCO2 => "atm",
            _ => "mol/L",
        }
    }
}

impl std::str::FromStr for CarbonSpecies {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CO2AQ" | "CO2(AQ)" | "CO2" => Ok(CarbonSpecies::CO2Aq),
            "H2CO3" | "CARBONIC ACID" => Ok(CarbonSpecies::H2CO3),
            "HCO3" | "HCO3-" | "BICARBONATE" => Ok(CarbonSpecies::HCO3),
            "CO3" | "CO3--" | "CO32-" | "CARBONATE" => Ok(CarbonSpecies::CO3),
            "DIC" => Ok(CarbonSpecies::DIC),
            "PCO2" => Ok(CarbonSpecies::PCO2),
            _ => Err("unknown species"),
        }
    }
}

/// Concentration of one species role.
///
/// Units: mol/L for all roles except [`CarbonSpecies::PCO2`], which is carried
/// in atm. The value is validated once at construction and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Concentration {
    species: CarbonSpecies,
    value: Real,
}

impl Concentration {
    /// Create a validated concentration.
    ///
    /// Rejects negative and non-finite values.
    pub fn new(species: CarbonSpecies, value: Real) -> AqResult<Self> {
        let value = ensure_finite(value, species.key())?;
        if value < 0.0 {
            return Err(AqError::InvalidValue {
                what: species.key(),
                value,
            });
        }
        Ok(Self { species, value })
    }

    /// Create from a possibly-absent raw input (optional CLI flags, form
    /// fields). An absent value is a missing input, not an invalid one.
    pub fn from_optional(species: CarbonSpecies, value: Option<Real>) -> AqResult<Self> {
        let value = value.ok_or(AqError::MissingInput {
            what: species.key(),
        })?;
        Self::new(species, value)
    }

    pub fn species(&self) -> CarbonSpecies {
        self.species
    }

    pub fn value(&self) -> Real {
        self.value
    }
}

pub const PH_MIN: Real = 0.0;
pub const PH_MAX: Real = 14.0;

/// pH of the solution, bounded to the conventional 0..=14 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ph {
    value: Real,
}

impl Ph {
    /// Create a validated pH value.
    pub fn new(value: Real) -> AqResult<Self> {
        if !value.is_finite() || !(PH_MIN..=PH_MAX).contains(&value) {
            return Err(AqError::InvalidRange {
                what: "pH",
                value,
                min: PH_MIN,
                max: PH_MAX,
            });
        }
        Ok(Self { value })
    }

    /// Create from a possibly-absent raw input.
    pub fn from_optional(value: Option<Real>) -> AqResult<Self> {
        let value = value.ok_or(AqError::MissingInput { what: "pH" })?;
        Self::new(value)
    }

    pub fn value(&self) -> Real {
        self.value
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn non_negative_values_always_construct(v in 0.0_f64..1.0e3) {
            let c = Concentration::new(CarbonSpecies::CO2Aq, v).unwrap();
            prop_assert_eq!(c.value(), v);
        }

        #[test]
        fn negative_values_never_construct(v in -1.0e3_f64..-f64::MIN_POSITIVE) {
            let err = Concentration::new(CarbonSpecies::CO2Aq, v).unwrap_err();
            prop_assert!(matches!(err, AqError::InvalidValue { .. }));
        }

        #[test]
        fn ph_in_scale_always_constructs(v in 0.0_f64..=14.0) {
            prop_assert_eq!(Ph::new(v).unwrap().value(), v);
        }
    }
}
