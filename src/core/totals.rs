use std::collections::BTreeMap;

use crate::{
    core::label::Label,
    quantity::{Zero, power::Gigawatts},
};

/// Accumulated totals by label, and by group name once aggregated.
///
/// Looking up an unknown key yields zero: a label whose fields were all absent is
/// indistinguishable from a label whose fields were all zero.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Totals(BTreeMap<Label, Gigawatts>);

impl Totals {
    pub fn get(&self, key: &str) -> Gigawatts {
        self.0.get(key).copied().unwrap_or(Gigawatts::ZERO)
    }

    #[cfg(test)]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Add the value to the key, initializing an unseen key with zero.
    pub fn accumulate(&mut self, key: &Label, value: Gigawatts) {
        *self.0.entry(key.clone()).or_insert(Gigawatts::ZERO) += value;
    }

    /// Set the key, replacing any previous total.
    pub fn insert(&mut self, key: Label, value: Gigawatts) {
        self.0.insert(key, value);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_is_zero() {
        let totals = Totals::default();
        assert_eq!(totals.get("Coal"), Gigawatts::ZERO);
        assert!(!totals.contains("Coal"));
    }

    #[test]
    fn accumulate_ok() {
        let mut totals = Totals::default();
        totals.accumulate(&Label::from("Gas"), Gigawatts(5.0));
        totals.accumulate(&Label::from("Gas"), Gigawatts(3.0));
        assert_eq!(totals.get("Gas"), Gigawatts(8.0));
        assert_eq!(totals.len(), 1);
    }
}
