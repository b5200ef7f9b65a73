//! Indicator catalog: the single source of truth for active indicators.

use crate::errors::CatalogError;
use crate::types::{Category, IndicatorCode, IndicatorDefinition};

/// Ordered, duplicate-free list of indicator definitions.
#[derive(Debug, Clone)]
pub struct IndicatorCatalog {
    definitions: Vec<IndicatorDefinition>,
}

impl IndicatorCatalog {
    /// Build a catalog from definitions, rejecting duplicate codes.
    pub fn new(definitions: Vec<IndicatorDefinition>) -> Result<Self, CatalogError> {
        for (i, def) in definitions.iter().enumerate() {
            if definitions[..i].iter().any(|d| d.code == def.code) {
                return Err(CatalogError::DuplicateIndicator(def.code));
            }
        }
        Ok(Self { definitions })
    }

    /// The standard sixteen-indicator catalog.
    pub fn standard() -> Self {
        use Category::*;
        use IndicatorCode::*;
        let def = IndicatorDefinition::new;
        Self {
            definitions: vec![
                def(LifeExpectancy, "Life expectancy", Health, true, "years"),
                def(InfantMortality, "Infant mortality", Health, false, "per 1,000 live births"),
                def(HospitalBedsPer1000, "Hospital beds", Health, true, "beds per 1,000 inhabitants"),
                def(DoctorsPer1000, "Doctors", Health, true, "doctors per 1,000 inhabitants"),
                def(VaccinationCoverage, "Vaccination coverage", Health, true, "%"),
                def(LiteracyRate, "Literacy rate", Education, true, "%"),
                def(EducationQualityIndex, "Basic education quality index", Education, true, "index (0-10)"),
                def(SchoolAttendance, "School attendance", Education, true, "%"),
                def(SanitationCoverage, "Sewage coverage", Infrastructure, true, "%"),
                def(WaterSupply, "Treated water supply", Infrastructure, true, "%"),
                def(ElectricityAccess, "Electricity access", Infrastructure, true, "%"),
                def(PavedRoads, "Paved roads", Infrastructure, true, "%"),
                def(AverageIncome, "Average household income", Economic, true, "R$ per month"),
                def(GdpPerCapita, "GDP per capita", Economic, true, "R$ per year"),
                def(UnemploymentRate, "Unemployment rate", Economic, false, "%"),
                def(PovertyRate, "Poverty rate", Economic, false, "%"),
            ],
        }
    }

    pub fn definitions(&self) -> &[IndicatorDefinition] {
        &self.definitions
    }

    pub fn get(&self, code: IndicatorCode) -> Option<&IndicatorDefinition> {
        self.definitions.iter().find(|d| d.code == code)
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &IndicatorDefinition> {
        self.definitions.iter().filter(move |d| d.category == category)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for IndicatorCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
