use std::fmt::{Display, Formatter};

use crate::{core::label::Label, fmt::FormattedShare, quantity::power::Gigawatts};

/// One line of a breakdown: a label, its value and its share of the total.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayRow {
    pub label: Label,
    pub value: Gigawatts,

    /// `None` when there is no positive total to divide by.
    pub share: Option<f64>,
}

impl DisplayRow {
    pub fn format(label: impl Into<Label>, value: Gigawatts, total: Option<Gigawatts>) -> Self {
        let share = total.filter(|total| total.0 > 0.0).map(|total| value / total);
        Self { label: label.into(), value, share }
    }

    pub const fn formatted_share(&self) -> FormattedShare {
        FormattedShare(self.share)
    }
}

impl Display for DisplayRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({})", self.label, self.value, self.formatted_share())
    }
}
