//! Deterministic synthetic municipality datasets.
//! Same seed → same dataset across runs and platforms.

use civitas_core::errors::DatasetError;
use civitas_core::types::{IndicatorCode, Municipality};
use civitas_core::Dataset;

/// Dataset size presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureSize {
    /// 25 municipalities: unit test scale
    Micro,
    /// 250 municipalities: one small state
    Small,
    /// 1,000 municipalities: a large state
    Medium,
    /// 5,570 municipalities: national scale
    Large,
}

impl FixtureSize {
    pub fn municipality_count(&self) -> usize {
        match self {
            Self::Micro => 25,
            Self::Small => 250,
            Self::Medium => 1_000,
            Self::Large => 5_570,
        }
    }
}

const STATES: &[&str] = &[
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB",
    "PR", "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

/// Fraction of indicator values left absent.
const ABSENT_RATE: f64 = 0.05;

/// Indicator range as (value at composite 0.4, value at composite 0.9,
/// relative noise).
fn indicator_profile(code: IndicatorCode) -> (f64, f64, f64) {
    match code {
        IndicatorCode::LifeExpectancy => (66.0, 79.0, 0.02),
        IndicatorCode::InfantMortality => (30.0, 8.0, 0.15),
        IndicatorCode::HospitalBedsPer1000 => (0.8, 3.5, 0.20),
        IndicatorCode::DoctorsPer1000 => (0.4, 3.0, 0.20),
        IndicatorCode::VaccinationCoverage => (70.0, 97.0, 0.05),
        IndicatorCode::LiteracyRate => (72.0, 98.0, 0.03),
        IndicatorCode::EducationQualityIndex => (3.5, 6.8, 0.10),
        IndicatorCode::SchoolAttendance => (85.0, 99.0, 0.02),
        IndicatorCode::SanitationCoverage => (20.0, 92.0, 0.15),
        IndicatorCode::WaterSupply => (60.0, 99.0, 0.06),
        IndicatorCode::ElectricityAccess => (90.0, 100.0, 0.01),
        IndicatorCode::PavedRoads => (25.0, 90.0, 0.15),
        IndicatorCode::AverageIncome => (900.0, 3_800.0, 0.12),
        IndicatorCode::GdpPerCapita => (9_000.0, 65_000.0, 0.20),
        IndicatorCode::UnemploymentRate => (16.0, 6.0, 0.15),
        IndicatorCode::PovertyRate => (45.0, 5.0, 0.15),
    }
}

/// Generate `size` municipalities whose indicators track their composite
/// index with multiplicative noise.
pub fn generate_municipalities(size: FixtureSize, seed: u64) -> Vec<Municipality> {
    let mut rng = SimpleRng::new(seed);
    (0..size.municipality_count())
        .map(|i| generate_municipality(i, &mut rng))
        .collect()
}

/// Same as [`generate_municipalities`], wrapped in an indexed dataset.
pub fn generate_dataset(size: FixtureSize, seed: u64) -> Result<Dataset, DatasetError> {
    Dataset::new(generate_municipalities(size, seed))
}

fn generate_municipality(index: usize, rng: &mut SimpleRng) -> Municipality {
    let state = STATES[(rng.next_u64() as usize) % STATES.len()];
    // log-uniform between 1,000 and ~3,000,000
    let population = 10f64.powf(3.0 + rng.next_f64() * 3.5).round() as i64;
    let composite = 0.4 + rng.next_f64() * 0.5;
    let t = (composite - 0.4) / 0.5;

    let mut municipality = Municipality::new(
        format!("{:07}", 1_100_000 + index),
        format!("Municipality {index}"),
        state,
        population,
        (composite * 1000.0).round() / 1000.0,
    );
    for &code in IndicatorCode::ALL {
        if rng.next_f64() < ABSENT_RATE {
            continue;
        }
        let (low, high, noise) = indicator_profile(code);
        let base = low + (high - low) * t;
        let jitter = 1.0 + (rng.next_f64() * 2.0 - 1.0) * noise;
        let value = (base * jitter * 100.0).round() / 100.0;
        municipality.indicators.insert(code, value.max(0.0));
    }
    municipality
}

/// Xorshift64 PRNG. Not for anything but fixtures.
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}
