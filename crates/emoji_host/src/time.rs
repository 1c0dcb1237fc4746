//! Time helpers shared by store adapters.

use std::cell::Cell;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

thread_local! {
    static LAST_ASSIGNED_TIMESTAMP_MS: Cell<u64> = const { Cell::new(0) };
}

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Returns a monotonic unix millisecond timestamp for record ids and
/// creation times.
///
/// Values are strictly increasing within the current process even when the
/// system clock does not advance, so ids assigned in one session never
/// collide and newest-first ordering stays stable.
pub fn next_monotonic_timestamp_ms() -> u64 {
    let now = unix_time_ms_now();
    LAST_ASSIGNED_TIMESTAMP_MS.with(|last| {
        let next = now.max(last.get().saturating_add(1));
        last.set(next);
        next
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotonic_timestamps_strictly_increase() {
        let first = next_monotonic_timestamp_ms();
        let second = next_monotonic_timestamp_ms();
        let third = next_monotonic_timestamp_ms();
        assert!(second > first);
        assert!(third > second);
    }
}
