//! Cost parameters per indicator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_IMPLEMENTATION_MONTHS;
use crate::errors::CatalogError;
use crate::types::IndicatorCode;

/// How the base cost's unit of change relates to the raw gap.
///
/// Base costs are quoted per "natural" increment (0.1 beds, half an index
/// point, R$100 of income); the scale converts a raw gap into a count of
/// those increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitScale {
    /// Base cost is per unit of the raw value.
    Raw,
    /// Base cost is per 0.1 unit.
    PerTenth,
    /// Base cost is per 0.5 unit.
    PerHalf,
    /// Base cost is per 100 units.
    PerHundred,
    /// Base cost is per 1000 units.
    PerThousand,
}

impl UnitScale {
    /// Number of base-cost increments contained in `gap`.
    pub fn increments(&self, gap: f64) -> f64 {
        match self {
            Self::Raw => gap,
            Self::PerTenth => gap * 10.0,
            Self::PerHalf => gap * 2.0,
            Self::PerHundred => gap / 100.0,
            Self::PerThousand => gap / 1000.0,
        }
    }
}

/// Cost-model parameters for one indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostParameters {
    /// Currency per increment of improvement.
    pub base_cost: f64,
    /// Dampens cost per increment. Strictly positive.
    pub elasticity: f64,
    pub implementation_months: u32,
    pub unit_scale: UnitScale,
    pub description: String,
}

impl CostParameters {
    pub fn new(
        base_cost: f64,
        elasticity: f64,
        implementation_months: u32,
        unit_scale: UnitScale,
        description: impl Into<String>,
    ) -> Self {
        Self {
            base_cost,
            elasticity,
            implementation_months,
            unit_scale,
            description: description.into(),
        }
    }

    pub fn validate(&self, indicator: IndicatorCode) -> Result<(), CatalogError> {
        if !self.elasticity.is_finite() || self.elasticity <= 0.0 {
            return Err(CatalogError::InvalidCostParameters {
                indicator,
                message: format!("elasticity must be positive, got {}", self.elasticity),
            });
        }
        if !self.base_cost.is_finite() || self.base_cost < 0.0 {
            return Err(CatalogError::InvalidCostParameters {
                indicator,
                message: format!("base cost must be non-negative, got {}", self.base_cost),
            });
        }
        if self.implementation_months == 0 || self.implementation_months > MAX_IMPLEMENTATION_MONTHS {
            return Err(CatalogError::InvalidCostParameters {
                indicator,
                message: format!(
                    "implementation months must be in 1..={MAX_IMPLEMENTATION_MONTHS}, got {}",
                    self.implementation_months
                ),
            });
        }
        Ok(())
    }
}

/// Cost parameters keyed by indicator code.
#[derive(Debug, Clone, Default)]
pub struct CostTable {
    entries: BTreeMap<IndicatorCode, CostParameters>,
}

impl CostTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference costs for the standard catalog.
    pub fn standard() -> Self {
        use IndicatorCode::*;
        use UnitScale::*;
        let p = CostParameters::new;
        let entries = [
            (LifeExpectancy, p(5_500_000.0, 0.65, 36, Raw, "Primary care network expansion and preventive programs")),
            (InfantMortality, p(3_200_000.0, 0.55, 24, Raw, "Prenatal care, neonatal units, and community health agents")),
            (HospitalBedsPer1000, p(850_000.0, 0.80, 18, PerTenth, "Hospital bed capacity, per 0.1 beds per 1,000")),
            (DoctorsPer1000, p(620_000.0, 0.75, 24, PerTenth, "Physician recruitment and retention, per 0.1 doctors per 1,000")),
            (VaccinationCoverage, p(180_000.0, 0.90, 12, Raw, "Vaccination campaigns and cold-chain logistics")),
            (LiteracyRate, p(950_000.0, 0.70, 30, Raw, "Adult literacy and youth education programs")),
            (EducationQualityIndex, p(1_800_000.0, 0.60, 36, PerHalf, "Teacher training and school management, per 0.5 index points")),
            (SchoolAttendance, p(420_000.0, 0.85, 18, Raw, "School transport, meals, and active search for dropouts")),
            (SanitationCoverage, p(2_400_000.0, 0.50, 48, Raw, "Sewage collection and treatment networks")),
            (WaterSupply, p(1_600_000.0, 0.60, 36, Raw, "Treated water distribution networks")),
            (ElectricityAccess, p(700_000.0, 0.85, 18, Raw, "Grid extension and household connections")),
            (PavedRoads, p(1_300_000.0, 0.70, 30, Raw, "Urban paving and drainage")),
            (AverageIncome, p(400_000.0, 0.55, 48, PerHundred, "Productive inclusion and job training, per R$100 of income")),
            (GdpPerCapita, p(250_000.0, 0.50, 60, PerThousand, "Local economic development, per R$1,000 of GDP per capita")),
            (UnemploymentRate, p(900_000.0, 0.60, 24, Raw, "Employment services and small-business credit")),
            (PovertyRate, p(1_100_000.0, 0.55, 36, Raw, "Social assistance and cash-transfer coverage")),
        ];
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Insert or replace parameters, validating them first.
    pub fn insert(
        &mut self,
        code: IndicatorCode,
        params: CostParameters,
    ) -> Result<(), CatalogError> {
        params.validate(code)?;
        self.entries.insert(code, params);
        Ok(())
    }

    pub fn with(mut self, code: IndicatorCode, params: CostParameters) -> Result<Self, CatalogError> {
        self.insert(code, params)?;
        Ok(self)
    }

    pub fn get(&self, code: IndicatorCode) -> Option<&CostParameters> {
        self.entries.get(&code)
    }

    pub fn get_mut(&mut self, code: IndicatorCode) -> Option<&mut CostParameters> {
        self.entries.get_mut(&code)
    }

    /// Re-validate every entry (used after in-place overrides).
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (code, params) in &self.entries {
            params.validate(*code)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_covers_every_code() {
        let table = CostTable::standard();
        for code in IndicatorCode::ALL {
            assert!(table.get(*code).is_some(), "missing cost for {code}");
        }
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_life_expectancy_reference_values() {
        let table = CostTable::standard();
        let p = table.get(IndicatorCode::LifeExpectancy).unwrap();
        assert_eq!(p.base_cost, 5_500_000.0);
        assert_eq!(p.elasticity, 0.65);
        assert_eq!(p.unit_scale, UnitScale::Raw);
    }

    #[test]
    fn test_unit_scale_increments() {
        assert_eq!(UnitScale::Raw.increments(3.0), 3.0);
        assert_eq!(UnitScale::PerTenth.increments(0.5), 5.0);
        assert_eq!(UnitScale::PerHalf.increments(1.5), 3.0);
        assert_eq!(UnitScale::PerHundred.increments(250.0), 2.5);
        assert_eq!(UnitScale::PerThousand.increments(4000.0), 4.0);
    }

    #[test]
    fn test_standard_unit_scales() {
        let table = CostTable::standard();
        let scale = |c| table.get(c).unwrap().unit_scale;
        assert_eq!(scale(IndicatorCode::HospitalBedsPer1000), UnitScale::PerTenth);
        assert_eq!(scale(IndicatorCode::DoctorsPer1000), UnitScale::PerTenth);
        assert_eq!(scale(IndicatorCode::EducationQualityIndex), UnitScale::PerHalf);
        assert_eq!(scale(IndicatorCode::AverageIncome), UnitScale::PerHundred);
        assert_eq!(scale(IndicatorCode::GdpPerCapita), UnitScale::PerThousand);
        assert_eq!(scale(IndicatorCode::SanitationCoverage), UnitScale::Raw);
    }

    #[test]
    fn test_zero_elasticity_rejected() {
        let mut table = CostTable::new();
        let err = table
            .insert(
                IndicatorCode::PavedRoads,
                CostParameters::new(1.0, 0.0, 12, UnitScale::Raw, "x"),
            )
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCostParameters { .. }));
    }

    #[test]
    fn test_negative_base_cost_rejected() {
        let params = CostParameters::new(-5.0, 1.0, 12, UnitScale::Raw, "x");
        assert!(params.validate(IndicatorCode::PavedRoads).is_err());
    }

    #[test]
    fn test_implementation_months_bounded() {
        for months in [0, MAX_IMPLEMENTATION_MONTHS + 1, u32::MAX] {
            let params = CostParameters::new(1.0, 1.0, months, UnitScale::Raw, "x");
            assert!(params.validate(IndicatorCode::PavedRoads).is_err(), "{months}");
        }
        let params = CostParameters::new(1.0, 1.0, MAX_IMPLEMENTATION_MONTHS, UnitScale::Raw, "x");
        assert!(params.validate(IndicatorCode::PavedRoads).is_ok());
    }
}
