use serde::Serialize;

pub mod features;

use features::{FeatureVector, ct_trend};

pub const NOL3_MIN: f64 = 0.0;
pub const NOL3_MAX: f64 = 1.0;
pub const CT_MIN: u32 = 0;
pub const CT_MAX: u32 = 1000;

pub const DEFAULT_NOL3: f64 = 0.2;
pub const DEFAULT_CT_BASELINE: u32 = 500;
pub const DEFAULT_CT_MONTH3: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RasStatus {
    #[serde(rename = "Wild-type")]
    WildType,
    Mutant,
}

impl RasStatus {
    pub fn label(self) -> &'static str {
        match self {
            RasStatus::WildType => "Wild-type",
            RasStatus::Mutant => "Mutant",
        }
    }

    pub fn encode(self) -> f64 {
        match self {
            RasStatus::WildType => 0.0,
            RasStatus::Mutant => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MsiStatus {
    #[serde(rename = "MSS")]
    Mss,
    #[serde(rename = "MSI-H")]
    MsiH,
}

impl MsiStatus {
    pub fn label(self) -> &'static str {
        match self {
            MsiStatus::Mss => "MSS",
            MsiStatus::MsiH => "MSI-H",
        }
    }

    pub fn encode(self) -> f64 {
        match self {
            MsiStatus::Mss => 0.0,
            MsiStatus::MsiH => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("{field} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PatientInput {
    pub ras: RasStatus,
    pub msi: MsiStatus,
    pub nol3: f64,
    pub ct_baseline: u32,
    pub ct_month3: u32,
}

impl Default for PatientInput {
    fn default() -> Self {
        Self {
            ras: RasStatus::WildType,
            msi: MsiStatus::Mss,
            nol3: DEFAULT_NOL3,
            ct_baseline: DEFAULT_CT_BASELINE,
            ct_month3: DEFAULT_CT_MONTH3,
        }
    }
}

impl PatientInput {
    /// Rejects values the input widgets would never produce.
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.nol3.is_finite() || self.nol3 < NOL3_MIN || self.nol3 > NOL3_MAX {
            return Err(InputError::OutOfRange {
                field: "nol3",
                value: self.nol3,
                min: NOL3_MIN,
                max: NOL3_MAX,
            });
        }
        check_ct("ct_baseline", self.ct_baseline)?;
        check_ct("ct_month3", self.ct_month3)?;
        Ok(())
    }

    pub fn features(&self) -> FeatureVector {
        FeatureVector {
            ras: self.ras.encode(),
            msi: self.msi.encode(),
            nol3: self.nol3,
            ct_trend: ct_trend(self.ct_baseline, self.ct_month3),
        }
    }
}

fn check_ct(field: &'static str, value: u32) -> Result<(), InputError> {
    if value > CT_MAX {
        return Err(InputError::OutOfRange {
            field,
            value: f64::from(value),
            min: f64::from(CT_MIN),
            max: f64::from(CT_MAX),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
