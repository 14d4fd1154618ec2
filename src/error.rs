use thiserror::Error;

/// Errors from curve construction.
///
/// There are no fatal conditions in this crate: construction over any set
/// of finite parameters succeeds, and point queries never fail. The only
/// rejection is malformed numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TrackError {
    /// A parameter was NaN or infinite. The caller is expected to keep the
    /// previous geometry in effect and treat this as a diagnostic.
    #[error("non-finite value {value} for parameter {name}")]
    NonFiniteParam { name: &'static str, value: f64 },
}
