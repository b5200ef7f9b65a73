//! Indicator codes, categories, and static definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of indicators the engine knows about.
///
/// The catalog decides which of these are active; nothing outside this
/// enum can be looked up on a municipality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorCode {
    LifeExpectancy,
    InfantMortality,
    #[serde(rename = "hospital_beds_per_1000")]
    HospitalBedsPer1000,
    #[serde(rename = "doctors_per_1000")]
    DoctorsPer1000,
    VaccinationCoverage,
    LiteracyRate,
    EducationQualityIndex,
    SchoolAttendance,
    SanitationCoverage,
    WaterSupply,
    ElectricityAccess,
    PavedRoads,
    AverageIncome,
    GdpPerCapita,
    UnemploymentRate,
    PovertyRate,
}

impl IndicatorCode {
    pub const ALL: &'static [IndicatorCode] = &[
        Self::LifeExpectancy,
        Self::InfantMortality,
        Self::HospitalBedsPer1000,
        Self::DoctorsPer1000,
        Self::VaccinationCoverage,
        Self::LiteracyRate,
        Self::EducationQualityIndex,
        Self::SchoolAttendance,
        Self::SanitationCoverage,
        Self::WaterSupply,
        Self::ElectricityAccess,
        Self::PavedRoads,
        Self::AverageIncome,
        Self::GdpPerCapita,
        Self::UnemploymentRate,
        Self::PovertyRate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::LifeExpectancy => "life_expectancy",
            Self::InfantMortality => "infant_mortality",
            Self::HospitalBedsPer1000 => "hospital_beds_per_1000",
            Self::DoctorsPer1000 => "doctors_per_1000",
            Self::VaccinationCoverage => "vaccination_coverage",
            Self::LiteracyRate => "literacy_rate",
            Self::EducationQualityIndex => "education_quality_index",
            Self::SchoolAttendance => "school_attendance",
            Self::SanitationCoverage => "sanitation_coverage",
            Self::WaterSupply => "water_supply",
            Self::ElectricityAccess => "electricity_access",
            Self::PavedRoads => "paved_roads",
            Self::AverageIncome => "average_income",
            Self::GdpPerCapita => "gdp_per_capita",
            Self::UnemploymentRate => "unemployment_rate",
            Self::PovertyRate => "poverty_rate",
        }
    }

    /// Parse a snake_case code.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == s)
    }

    /// The health indicator whose gaps are always high priority.
    pub fn is_critical_health(&self) -> bool {
        matches!(self, Self::InfantMortality)
    }
}

impl fmt::Display for IndicatorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Indicator category. Also the unit of scheduling: one phase per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Health,
    Education,
    Infrastructure,
    Economic,
}

impl Category {
    /// Fixed order used for phase sequencing and category summaries.
    pub const ORDER: [Category; 4] = [
        Self::Health,
        Self::Education,
        Self::Infrastructure,
        Self::Economic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Education => "education",
            Self::Infrastructure => "infrastructure",
            Self::Economic => "economic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static definition of an indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorDefinition {
    pub code: IndicatorCode,
    pub label: String,
    pub category: Category,
    pub higher_is_better: bool,
    pub unit: String,
}

impl IndicatorDefinition {
    pub fn new(
        code: IndicatorCode,
        label: impl Into<String>,
        category: Category,
        higher_is_better: bool,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            code,
            label: label.into(),
            category,
            higher_is_better,
            unit: unit.into(),
        }
    }
}
