/// Tolerance used by `f32` approximate comparisons.
pub const EPSILON: f32 = 1e-5;
/// Tolerance used by `f64` approximate comparisons.
pub const EPSILON_F64: f64 = 1e-10;
/// Minimum interval between repeats of the same rate-limited warning.
pub const WARN_INTERVAL_SECS: u64 = 1;
