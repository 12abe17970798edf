use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};
use std::time::Instant;

/// When each rate-limited call site last emitted, keyed by `file:line`.
pub static LAST_LOG: LazyLock<Mutex<HashMap<String, Instant>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Returns true if the call site `loc` has not emitted in the last `seconds` seconds, and records
/// that it is about to.
pub fn should_emit(loc: String, seconds: u64) -> bool {
    // A poisoned map only loses rate limiting, so keep logging.
    let Ok(mut last_log) = LAST_LOG.lock() else {
        return true;
    };
    if last_log
        .get(&loc)
        .is_some_and(|then| then.elapsed().as_secs() < seconds)
    {
        return false;
    }
    last_log.insert(loc, Instant::now());
    true
}

macro_rules! warn_every_seconds {
    ($seconds:expr, $($args:expr),+) => {
        if $crate::util::log::should_emit(
            $crate::util::assert::current_location!(),
            $seconds,
        ) {
            $crate::core::prelude::warn!($($args),+);
        }
    };
}
#[allow(unused_imports)]
pub(crate) use warn_every_seconds;
