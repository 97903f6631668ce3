// ---------------------------------------------------------------------------
// EigenvalueSeries – the parsed second column of an .xvg file
// ---------------------------------------------------------------------------

/// Eigenvalues in file order. Rank of an entry is its position + 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EigenvalueSeries {
    values: Vec<f64>,
}

impl EigenvalueSeries {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of eigenvalues.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no data line qualified.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Total variance (sum of all eigenvalues).
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

// ---------------------------------------------------------------------------
// VarianceProfile – proportions derived from a series
// ---------------------------------------------------------------------------

/// Percentage share of each eigenvalue, parallel to a 1-based rank vector.
#[derive(Debug, Clone, PartialEq)]
pub struct VarianceProfile {
    /// Sum of the eigenvalues the proportions were computed against.
    pub total: f64,
    /// `1..=N`, same order as the source series.
    pub ranks: Vec<u32>,
    /// `value / total * 100` per eigenvalue.
    pub proportions: Vec<f64>,
}

impl VarianceProfile {
    pub fn len(&self) -> usize {
        self.proportions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proportions.is_empty()
    }

    /// Percentage of variance explained by the first `k` components
    /// (all of them when `k` exceeds the length).
    pub fn cumulative(&self, k: usize) -> f64 {
        self.proportions.iter().take(k).sum()
    }
}
