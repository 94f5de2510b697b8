use serde::{Deserialize, Serialize};

use crate::{
    core::{label::Label, totals::Totals},
    quantity::power::Gigawatts,
};

/// Named collection of labels summed into one category, such as `Fossils`.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupDefinition {
    pub name: Label,
    pub members: Vec<Label>,
}

impl GroupDefinition {
    pub fn new<L: Into<Label>>(
        name: impl Into<Label>,
        members: impl IntoIterator<Item = L>,
    ) -> Self {
        Self { name: name.into(), members: members.into_iter().map(Into::into).collect() }
    }

    /// Sum the member totals, counting a missing member as zero.
    pub fn total(&self, totals: &Totals) -> Gigawatts {
        self.members.iter().map(|member| totals.get(member)).sum()
    }
}

/// Add the group totals next to the label totals.
///
/// Groups are evaluated in order and written under their own names, so a group may refer to a
/// group defined before it. Each call is an independent grouping: totals of alternate groupings
/// over the same labels must not be added together.
pub fn aggregate(label_totals: &Totals, groups: &[GroupDefinition]) -> Totals {
    let mut totals = label_totals.clone();
    for group in groups {
        let total = group.total(&totals);
        totals.insert(group.name.clone(), total);
    }
    totals
}
