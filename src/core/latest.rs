/// Most recent value by request order, not by arrival order.
///
/// Responses may complete out of order. A response is only accepted when it was requested after
/// the one currently held, so a slow stale response never overwrites a fresher one.
#[must_use]
pub struct Latest<T> {
    inner: Option<(u64, T)>,
}

impl<T> Default for Latest<T> {
    fn default() -> Self {
        Self { inner: None }
    }
}

impl<T> Latest<T> {
    /// Offer the value requested with the sequence number.
    ///
    /// Returns the accepted value, or `None` if the value is stale and has been dropped.
    pub fn offer(&mut self, sequence: u64, value: T) -> Option<&T> {
        if self.inner.as_ref().is_some_and(|(current, _)| sequence <= *current) {
            return None;
        }
        Some(&self.inner.insert((sequence, value)).1)
    }

    #[must_use]
    pub fn sequence(&self) -> Option<u64> {
        self.inner.as_ref().map(|(sequence, _)| *sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_offer_is_accepted() {
        let mut latest = Latest::default();
        assert_eq!(latest.sequence(), None);
        assert_eq!(latest.offer(3, "c"), Some(&"c"));
        assert_eq!(latest.sequence(), Some(3));
    }

    #[test]
    fn stale_offer_is_dropped() {
        let mut latest = Latest::default();
        latest.offer(1, "b");
        assert_eq!(latest.offer(0, "a"), None);
        assert_eq!(latest.offer(1, "b again"), None);
        assert_eq!(latest.sequence(), Some(1));
    }

    #[test]
    fn newer_offer_replaces() {
        let mut latest = Latest::default();
        latest.offer(0, 1);
        assert_eq!(latest.offer(2, 3), Some(&3));
        assert_eq!(latest.sequence(), Some(2));
    }
}
