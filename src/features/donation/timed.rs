//! Values that clear themselves after a delay
//!
//! The owner schedules its own timer and passes the returned `Expiry` back
//! when it fires. Setting a new value bumps the generation, so a timer left
//! over from an earlier value is ignored instead of clearing the newer one.

/// Token handed out by `TimedSlot::set`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Expiry(u64);

#[derive(Debug)]
pub struct TimedSlot<T> {
    value: Option<T>,
    generation: u64,
}

impl<T> Default for TimedSlot<T> {
    fn default() -> Self {
        Self {
            value: None,
            generation: 0,
        }
    }
}

impl<T> TimedSlot<T> {
    pub fn set(&mut self, value: T) -> Expiry {
        self.generation += 1;
        self.value = Some(value);
        Expiry(self.generation)
    }

    /// Clear if `expiry` belongs to the current value; returns whether it did
    pub fn expire(&mut self, expiry: Expiry) -> bool {
        if expiry.0 == self.generation && self.value.is_some() {
            self.value = None;
            true
        } else {
            false
        }
    }

    /// Clear immediately; no-op when already empty
    pub fn clear(&mut self) {
        self.value = None;
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expire_current() {
        let mut slot = TimedSlot::default();
        let expiry = slot.set("hello");
        assert_eq!(slot.get(), Some(&"hello"));

        assert!(slot.expire(expiry));
        assert!(!slot.is_set());
    }

    #[test]
    fn test_stale_expiry_is_ignored() {
        let mut slot = TimedSlot::default();
        let first = slot.set("first");
        let second = slot.set("second");

        assert!(!slot.expire(first));
        assert_eq!(slot.get(), Some(&"second"));

        assert!(slot.expire(second));
        assert!(!slot.is_set());
    }

    #[test]
    fn test_clear_then_expire() {
        let mut slot = TimedSlot::default();
        let expiry = slot.set(());
        slot.clear();
        slot.clear();
        assert!(!slot.expire(expiry));
        assert!(!slot.is_set());
    }
}
