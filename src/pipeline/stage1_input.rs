use crate::input::{InputError, MsiStatus, PatientInput, RasStatus};

/// Values as they arrive from the command line, categories already parsed.
#[derive(Debug, Clone, Copy)]
pub struct Stage1Params {
    pub ras: RasStatus,
    pub msi: MsiStatus,
    pub nol3: f64,
    pub ct_baseline: u32,
    pub ct_month3: u32,
}

pub fn run_stage1(params: &Stage1Params) -> Result<PatientInput, InputError> {
    let input = PatientInput {
        ras: params.ras,
        msi: params.msi,
        nol3: params.nol3,
        ct_baseline: params.ct_baseline,
        ct_month3: params.ct_month3,
    };
    input.validate()?;

    let features = input.features();
    tracing::debug!(
        ras = features.ras,
        msi = features.msi,
        nol3 = features.nol3,
        ct_trend = features.ct_trend,
        "patient features assembled"
    );

    Ok(input)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_input.rs"]
mod tests;
