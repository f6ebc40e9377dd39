pub const FEATURE_NAMES: [&str; 4] = ["ras", "msi", "nol3", "ct_trend"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureField {
    Ras,
    Msi,
    Nol3,
    CtTrend,
}

impl FeatureField {
    pub fn name(self) -> &'static str {
        match self {
            FeatureField::Ras => "ras",
            FeatureField::Msi => "msi",
            FeatureField::Nol3 => "nol3",
            FeatureField::CtTrend => "ct_trend",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ras" => Some(FeatureField::Ras),
            "msi" => Some(FeatureField::Msi),
            "nol3" => Some(FeatureField::Nol3),
            "ct_trend" => Some(FeatureField::CtTrend),
            _ => None,
        }
    }
}

/// One model input. Fields are read by name, never by position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub ras: f64,
    pub msi: f64,
    pub nol3: f64,
    pub ct_trend: f64,
}

impl FeatureVector {
    pub fn value(&self, field: FeatureField) -> f64 {
        match field {
            FeatureField::Ras => self.ras,
            FeatureField::Msi => self.msi,
            FeatureField::Nol3 => self.nol3,
            FeatureField::CtTrend => self.ct_trend,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeatureError {
    #[error("unknown feature name: {0}")]
    UnknownFeature(String),
    #[error("duplicate feature name: {0}")]
    DuplicateFeature(String),
}

/// Column layout shared by the trainer and every inference call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureOrder {
    fields: Vec<FeatureField>,
}

impl FeatureOrder {
    pub fn from_names(names: &[&str]) -> Result<Self, FeatureError> {
        let mut fields = Vec::with_capacity(names.len());
        for name in names {
            let field = FeatureField::from_name(name)
                .ok_or_else(|| FeatureError::UnknownFeature(name.to_string()))?;
            if fields.contains(&field) {
                return Err(FeatureError::DuplicateFeature(name.to_string()));
            }
            fields.push(field);
        }
        Ok(Self { fields })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn fields(&self) -> &[FeatureField] {
        &self.fields
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name()).collect()
    }

    pub fn row(&self, features: &FeatureVector) -> Vec<f64> {
        self.fields.iter().map(|&f| features.value(f)).collect()
    }

    /// Row-major matrix, one row per vector.
    pub fn matrix(&self, rows: &[FeatureVector]) -> Vec<f64> {
        let mut out = Vec::with_capacity(rows.len() * self.fields.len());
        for row in rows {
            for &field in &self.fields {
                out.push(row.value(field));
            }
        }
        out
    }
}

/// Relative ctDNA drop from baseline to month 3; a zero baseline divides by 1.
pub fn ct_trend(ct_baseline: u32, ct_month3: u32) -> f64 {
    let baseline = f64::from(ct_baseline);
    let month3 = f64::from(ct_month3);
    (baseline - month3) / baseline.max(1.0)
}
