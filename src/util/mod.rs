use crate::core::prelude::*;
use tracing_subscriber::fmt::time::OffsetTime;

pub mod assert;
pub mod ex_math;
pub mod linalg;
pub mod log;

pub mod gg_float {
    use num_traits::Float;

    /// Returns `0.0` for either signed zero and `x` otherwise, so that `-0.0` and `0.0` agree
    /// wherever a float is reduced to its bits.
    pub fn force_positive_zero<F: Float>(x: F) -> F {
        if x.is_zero() { F::zero() } else { x }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn negative_zero_becomes_positive() {
            assert_eq!(force_positive_zero(-0.0_f32).to_bits(), 0.0_f32.to_bits());
            assert_eq!(force_positive_zero(-0.0_f64).to_bits(), 0.0_f64.to_bits());
            assert_eq!(force_positive_zero(-1.5_f32), -1.5);
            assert!(force_positive_zero(f64::NAN).is_nan());
        }
    }
}

/// Installs a `tracing` subscriber that writes to stderr with microsecond UTC timestamps and
/// source locations.
///
/// Fails if a global subscriber is already installed.
pub fn setup_log() -> Result<()> {
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_log_only_installs_once() {
        // Another test may have got there first.
        let _ = setup_log();
        assert!(setup_log().is_err());
    }
}
