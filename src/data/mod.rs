/// Data layer: core types, loading, and variance analysis.
///
/// Architecture:
/// ```text
///   eigenval.xvg
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  skip #/@ lines, parse column 2 → EigenvalueSeries
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ analysis │  value / total × 100 → VarianceProfile (ranks, %)
///   └──────────┘
/// ```

pub mod analysis;
pub mod loader;
pub mod model;
