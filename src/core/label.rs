use std::{borrow::Borrow, ops::Deref};

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Display name of a merged source or of a group, such as `Gas` or `Fossils`.
#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl From<String> for Label {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl From<&str> for Label {
    fn from(label: &str) -> Self {
        Self(label.to_owned())
    }
}

impl Deref for Label {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for Label {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
