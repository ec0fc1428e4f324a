//! Per-key press state and repeat timing

use super::keys::Key;
use crate::foundation::time::{Ticks, UNSET_TICKS};

/// State of one key
///
/// `first_press` and `last_fire` only mean something while `pressed` is set;
/// they are left stale after release and rewritten on the next down edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRecord {
    /// Whether the key is currently held
    pub pressed: bool,
    /// When the key went down
    pub first_press: Ticks,
    /// When the last key press (first or repeated) was fired
    pub last_fire: Ticks,
    /// Minimum interval between repeated key presses
    pub repeat_delay: Ticks,
}

impl KeyRecord {
    /// Released key with the given repeat delay
    pub const fn new(repeat_delay: Ticks) -> Self {
        Self {
            pressed: false,
            first_press: UNSET_TICKS,
            last_fire: UNSET_TICKS,
            repeat_delay,
        }
    }

    /// Whether a repeated press is due at `now`
    pub const fn repeat_due(&self, now: Ticks) -> bool {
        self.pressed && now - self.last_fire >= self.repeat_delay
    }
}

/// Fixed-size table of [`KeyRecord`], one per [`Key`]
#[derive(Debug, Clone)]
pub struct KeyTable {
    records: [KeyRecord; Key::COUNT],
}

impl KeyTable {
    /// Table with every key released and the same repeat delay
    pub const fn new(default_delay: Ticks) -> Self {
        Self {
            records: [KeyRecord::new(default_delay); Key::COUNT],
        }
    }

    /// Record for `key`
    pub const fn get(&self, key: Key) -> &KeyRecord {
        &self.records[key.index()]
    }

    /// Mutable record for `key`
    pub fn get_mut(&mut self, key: Key) -> &mut KeyRecord {
        &mut self.records[key.index()]
    }

    /// Whether `key` is held
    pub const fn is_pressed(&self, key: Key) -> bool {
        self.get(key).pressed
    }

    /// Set the repeat delay of one key
    pub fn set_delay(&mut self, key: Key, delay: Ticks) {
        self.get_mut(key).repeat_delay = delay;
    }

    /// Held keys in table order
    pub fn pressed_keys(&self) -> impl Iterator<Item = Key> + '_ {
        Key::ALL
            .iter()
            .copied()
            .filter(|&key| self.records[key.index()].pressed)
    }

    /// Number of held keys
    pub fn pressed_count(&self) -> usize {
        self.records.iter().filter(|r| r.pressed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_released() {
        let table = KeyTable::new(30);
        assert_eq!(table.pressed_count(), 0);
        assert_eq!(table.get(Key::A).repeat_delay, 30);
        assert_eq!(table.get(Key::A).last_fire, UNSET_TICKS);
    }

    #[test]
    fn test_pressed_keys_in_table_order() {
        let mut table = KeyTable::new(30);
        table.get_mut(Key::Z).pressed = true;
        table.get_mut(Key::Escape).pressed = true;
        table.get_mut(Key::Numpad4).pressed = true;

        let pressed: Vec<_> = table.pressed_keys().collect();
        assert_eq!(pressed, vec![Key::Escape, Key::Z, Key::Numpad4]);
    }

    #[test]
    fn test_repeat_due() {
        let mut record = KeyRecord::new(50);
        assert!(!record.repeat_due(1000));

        record.pressed = true;
        record.last_fire = 100;
        assert!(!record.repeat_due(149));
        assert!(record.repeat_due(150));
    }

    #[test]
    fn test_set_delay_only_affects_one_key() {
        let mut table = KeyTable::new(30);
        table.set_delay(Key::Up, 200);
        assert_eq!(table.get(Key::Up).repeat_delay, 200);
        assert_eq!(table.get(Key::Down).repeat_delay, 30);
    }
}
