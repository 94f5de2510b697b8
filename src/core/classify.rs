//! Merging raw telemetry channels into display labels.

use std::collections::HashSet;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::{
    core::{label::Label, snapshot::RawSnapshot, totals::Totals},
    prelude::*,
    quantity::power::Gigawatts,
};

/// Ordered many-to-one mapping from a raw field name to its display label.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FieldMapEntries", into = "FieldMapEntries")]
pub struct FieldMap(Vec<(String, Label)>);

impl FieldMap {
    /// Build the map, rejecting fields which would be counted twice.
    pub fn try_new<F, L>(entries: impl IntoIterator<Item = (F, L)>) -> Result<Self>
    where
        F: Into<String>,
        L: Into<Label>,
    {
        let entries =
            entries.into_iter().map(|(field, label)| (field.into(), label.into())).collect_vec();
        let mut seen = HashSet::with_capacity(entries.len());
        for (field, _) in &entries {
            ensure!(!field.is_empty(), "empty field name");
            ensure!(seen.insert(field.as_str()), "field `{field}` is mapped more than once");
        }
        Ok(Self(entries))
    }

    /// Labels in the order of their first appearance.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.0.iter().map(|(_, label)| label).unique()
    }

    /// Sum every mapped field into its label.
    ///
    /// Every label of the map is present in the output, absent fields count as zero and unmapped
    /// fields are ignored.
    pub fn classify(&self, snapshot: &RawSnapshot) -> Totals {
        let mut totals = Totals::default();
        for (field, label) in &self.0 {
            totals.accumulate(label, Gigawatts(snapshot.reading(field).or_zero()));
        }
        totals
    }
}

/// Serialized form, which keeps the document order of the fields.
#[serde_as]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
struct FieldMapEntries(#[serde_as(as = "serde_with::Map<_, _>")] Vec<(String, Label)>);

impl TryFrom<FieldMapEntries> for FieldMap {
    type Error = Error;

    fn try_from(entries: FieldMapEntries) -> Result<Self> {
        Self::try_new(entries.0)
    }
}

impl From<FieldMap> for FieldMapEntries {
    fn from(map: FieldMap) -> Self {
        Self(map.0)
    }
}
