//! Key auto-repeat engine
//!
//! Called every frame, but only scans the key table when at least
//! `interval` milliseconds passed since the last scan. Repeats are gated by
//! each key's own delay measured against the clock, so the repeat rate does
//! not depend on the frame rate.

use super::key_table::KeyTable;
use super::keys::Key;
use crate::foundation::time::{TickTimer, Ticks};

/// Throttled scanner that finds keys due for a repeated press
#[derive(Debug, Clone, Copy)]
pub struct AutoRepeat {
    timer: TickTimer,
    interval: Ticks,
}

impl AutoRepeat {
    /// Engine whose throttle window starts at `now`
    pub const fn new(interval: Ticks, now: Ticks) -> Self {
        Self {
            timer: TickTimer::started_at(now),
            interval,
        }
    }

    /// Scan `keys` and call `fire(key, ticks_since_first_press)` for every
    /// held key whose repeat delay has elapsed
    ///
    /// Returns `false` without scanning when throttled. Fired keys get
    /// `last_fire = now`.
    pub fn poll(&mut self, now: Ticks, keys: &mut KeyTable, mut fire: impl FnMut(Key, Ticks)) -> bool {
        if self.timer.ticks_elapsed(now) < self.interval {
            return false;
        }
        self.timer.restart(now);

        for &key in &Key::ALL {
            let record = keys.get_mut(key);
            if !record.repeat_due(now) {
                continue;
            }
            let elapsed = now - record.first_press;
            record.last_fire = now;
            fire(key, elapsed);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hold(keys: &mut KeyTable, key: Key, at: Ticks) {
        let record = keys.get_mut(key);
        record.pressed = true;
        record.first_press = at;
        record.last_fire = at;
    }

    #[test]
    fn test_throttle_skips_close_polls() {
        let mut keys = KeyTable::new(0);
        hold(&mut keys, Key::A, 0);
        let mut engine = AutoRepeat::new(10, 0);
        let mut fired = 0;

        assert!(engine.poll(10, &mut keys, |_, _| fired += 1));
        assert!(!engine.poll(19, &mut keys, |_, _| fired += 1));
        assert_eq!(fired, 1);
        assert!(engine.poll(20, &mut keys, |_, _| fired += 1));
        assert_eq!(fired, 2);
    }

    #[test]
    fn test_only_due_keys_fire() {
        let mut keys = KeyTable::new(100);
        hold(&mut keys, Key::Left, 0);
        hold(&mut keys, Key::Right, 60);
        let mut engine = AutoRepeat::new(10, 0);
        let mut fired = Vec::new();

        engine.poll(100, &mut keys, |key, elapsed| fired.push((key, elapsed)));

        assert_eq!(fired, vec![(Key::Left, 100)]);
        assert_eq!(keys.get(Key::Left).last_fire, 100);
        assert_eq!(keys.get(Key::Right).last_fire, 60);
    }

    #[test]
    fn test_released_keys_are_skipped() {
        let mut keys = KeyTable::new(0);
        hold(&mut keys, Key::B, 0);
        keys.get_mut(Key::B).pressed = false;
        let mut engine = AutoRepeat::new(10, 0);
        let mut fired = 0;

        engine.poll(500, &mut keys, |_, _| fired += 1);
        assert_eq!(fired, 0);
    }
}
