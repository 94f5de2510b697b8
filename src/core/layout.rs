//! Static configuration of the breakdown: which fields merge into which labels, how labels are
//! grouped, and how the result is laid out.

use std::{
    collections::{BTreeMap, HashMap, HashSet},
    fmt::{Display, Formatter},
    fs,
    path::Path,
    str::FromStr,
};

use comfy_table::Color;
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::{
    core::{classify::FieldMap, group::GroupDefinition, label::Label},
    prelude::*,
};

const DEFAULT_FIELDS: [(&str, &str); 20] = [
    // Generation:
    ("coal", "Coal"),
    ("ccgt", "Gas"),
    ("ocgt", "Gas"),
    ("solar", "Solar"),
    ("embedded_wind", "Wind"),
    ("wind", "Wind"),
    ("hydro", "Hydroelectric"),
    ("nuclear", "Nuclear"),
    ("biomass", "Biomass"),
    ("pumped", "Pumped storage"),
    // Interconnectors:
    ("nemo", "Belgium"),
    ("viking", "Denmark"),
    ("ifa", "France"),
    ("ifa2", "France"),
    ("eleclink", "France"),
    ("moyle", "Ireland"),
    ("ewic", "Ireland"),
    ("greenlink", "Ireland"),
    ("britned", "Netherlands"),
    ("nsl", "Norway"),
];

const SOURCES: [&str; 7] = ["Coal", "Gas", "Solar", "Wind", "Hydroelectric", "Nuclear", "Biomass"];

const INTERCONNECTORS: [&str; 6] =
    ["Belgium", "Denmark", "France", "Ireland", "Netherlands", "Norway"];

const DEFAULT_COLOURS: [(&str, Colour); 16] = [
    ("Coal", Colour(0x63, 0x63, 0x63)),
    ("Gas", Colour(0xfd, 0x8d, 0x3c)),
    ("Solar", Colour(0xff, 0xd7, 0x00)),
    ("Wind", Colour(0xad, 0xd8, 0xe6)),
    ("Hydroelectric", Colour(0x2b, 0x8c, 0xbe)),
    ("Nuclear", Colour(0x75, 0x6b, 0xb1)),
    ("Biomass", Colour(0xd9, 0x5f, 0x0e)),
    ("Belgium", Colour(0x66, 0xc2, 0xa5)),
    ("Denmark", Colour(0xfc, 0x8d, 0x62)),
    ("France", Colour(0x8d, 0xa0, 0xcb)),
    ("Ireland", Colour(0xe7, 0x8a, 0xc3)),
    ("Netherlands", Colour(0xa6, 0xd8, 0x54)),
    ("Norway", Colour(0xff, 0xd9, 0x2f)),
    ("Renewables", Colour(0x31, 0xa3, 0x54)),
    ("Fossils", Colour(0xe4, 0x1a, 0x1c)),
    ("Others", Colour(0x37, 0x7e, 0xb8)),
];

#[must_use]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Layout {
    /// Groups listed in the contribution table, each followed by its members.
    #[serde(default)]
    pub contributions: Vec<Label>,

    /// Raw field name to label.
    pub fields: FieldMap,

    /// Macro groups, evaluated in order.
    #[serde(default)]
    pub groups: Vec<GroupDefinition>,

    /// Breakdown views over labels and groups.
    #[serde(default)]
    pub sections: Vec<Section>,

    #[serde(default)]
    pub colours: BTreeMap<Label, Colour>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            contributions: ["Fossils", "Renewables", "Others", "Interconnectors"]
                .into_iter()
                .map(Label::from)
                .collect(),
            fields: FieldMap::try_new(DEFAULT_FIELDS).expect("default fields must be unique"),
            groups: vec![
                GroupDefinition::new("Fossils", ["Coal", "Gas"]),
                GroupDefinition::new("Renewables", ["Solar", "Wind", "Hydroelectric"]),
                GroupDefinition::new("Others", ["Nuclear", "Biomass"]),
                GroupDefinition::new("Interconnectors", INTERCONNECTORS),
                GroupDefinition::new("Storage", ["Pumped storage"]),
            ],
            sections: vec![
                Section::new("Generation by Type", ["Fossils", "Renewables", "Others"]),
                Section::new("Generation by Source", SOURCES),
                Section::new("Interconnectors", INTERCONNECTORS),
                Section::new("Storage", ["Pumped storage"]),
            ],
            colours: DEFAULT_COLOURS
                .into_iter()
                .map(|(key, colour)| (Label::from(key), colour))
                .collect(),
        }
    }
}

impl Layout {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read the layout from `{}`", path.display()))?;
        let layout: Self = toml::from_str(&text)
            .with_context(|| format!("failed to parse the layout from `{}`", path.display()))?;
        layout.validate()?;
        info!(n_groups = layout.groups.len(), n_sections = layout.sections.len(), "loaded");
        Ok(layout)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the cross-references which the field map alone cannot.
    ///
    /// Within one view, every label must be counted at most once: contribution groups may not
    /// share members, and a section may not list a group together with any of its members.
    pub fn validate(&self) -> Result {
        let mut group_names = HashSet::with_capacity(self.groups.len());
        for group in &self.groups {
            ensure!(!group.name.is_empty(), "empty group name");
            ensure!(group_names.insert(&group.name), "group `{}` is defined twice", group.name);
        }
        let nested = self.nested_members();

        let mut owners: HashMap<&Label, &Label> = HashMap::new();
        for name in &self.contributions {
            ensure!(group_names.contains(name), "contribution group `{name}` is not defined");
            for member in nested.get(name).into_iter().flatten().copied() {
                if let Some(owner) = owners.insert(member, name) {
                    bail!("`{member}` is counted in both `{owner}` and `{name}` contributions");
                }
            }
        }

        for section in &self.sections {
            ensure!(!section.keys.is_empty(), "section `{}` has no keys", section.title);
            let mut keys = HashSet::with_capacity(section.keys.len());
            for key in &section.keys {
                ensure!(keys.insert(key), "section `{}` lists `{key}` twice", section.title);
            }
            for key in &section.keys {
                let Some(members) = nested.get(key) else { continue };
                if let Some(member) = section.keys.iter().find(|other| members.contains(other)) {
                    bail!(
                        "section `{}` lists `{key}` together with its member `{member}`",
                        section.title,
                    );
                }
            }
        }
        Ok(())
    }

    /// Members of every group, including the members of the earlier groups it refers to.
    fn nested_members(&self) -> HashMap<&Label, HashSet<&Label>> {
        let mut nested: HashMap<&Label, HashSet<&Label>> =
            HashMap::with_capacity(self.groups.len());
        for group in &self.groups {
            let mut members = HashSet::with_capacity(group.members.len());
            for member in &group.members {
                members.insert(member);
                if let Some(inner) = nested.get(member) {
                    members.extend(inner.iter().copied());
                }
            }
            nested.insert(&group.name, members);
        }
        nested
    }

    /// Colour for the label or group, grey when none is configured.
    pub fn colour_of(&self, key: &str) -> Colour {
        self.colours.get(key).copied().unwrap_or(Colour::FALLBACK)
    }
}

/// Titled breakdown view: an ordered list of labels and group names.
#[must_use]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Section {
    pub title: String,
    pub keys: Vec<Label>,
}

impl Section {
    pub fn new<L: Into<Label>>(
        title: impl Into<String>,
        keys: impl IntoIterator<Item = L>,
    ) -> Self {
        Self { title: title.into(), keys: keys.into_iter().map(Into::into).collect() }
    }
}

/// `#rrggbb` colour.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, SerializeDisplay, DeserializeFromStr)]
pub struct Colour(pub u8, pub u8, pub u8);

impl Colour {
    pub const FALLBACK: Self = Self(0xcc, 0xcc, 0xcc);
}

impl FromStr for Colour {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let hex = text.strip_prefix('#').unwrap_or(text);
        let hex = match hex.len() {
            3 => hex.chars().flat_map(|digit| [digit, digit]).collect(),
            6 => hex.to_owned(),
            _ => bail!("`{text}` is not a `#rrggbb` colour"),
        };
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|channel| u8::from_str_radix(channel, 16).ok())
                .with_context(|| format!("`{text}` is not a `#rrggbb` colour"))
        };
        Ok(Self(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Display for Colour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl From<Colour> for Color {
    fn from(colour: Colour) -> Self {
        Self::Rgb { r: colour.0, g: colour.1, b: colour.2 }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_is_valid() -> Result {
        Layout::default().validate()
    }

    #[test]
    fn default_labels() {
        let layout = Layout::default();
        let labels: Vec<&str> = layout.fields.labels().map(|label| &**label).collect();
        assert_eq!(
            labels,
            [
                "Coal",
                "Gas",
                "Solar",
                "Wind",
                "Hydroelectric",
                "Nuclear",
                "Biomass",
                "Pumped storage",
                "Belgium",
                "Denmark",
                "France",
                "Ireland",
                "Netherlands",
                "Norway",
            ]
        );
    }

    #[test]
    fn toml_round_trip() -> Result {
        let layout = Layout::default();
        assert_eq!(toml::from_str::<Layout>(&layout.to_toml()?)?, layout);
        Ok(())
    }

    #[test]
    fn read_custom_layout_ok() -> Result {
        let mut file = tempfile::NamedTempFile::new()?;
        // language=toml
        file.write_all(
            br##"
                contributions = ["Thermal"]

                [fields]
                coal = "Coal"
                ccgt = "Gas"
                ocgt = "Gas"

                [[groups]]
                name = "Thermal"
                members = ["Coal", "Gas"]

                [[sections]]
                title = "Mix"
                keys = ["Thermal"]

                [[sections]]
                title = "Fuels"
                keys = ["Coal", "Gas"]

                [colours]
                Thermal = "#f00"
            "##,
        )?;
        let layout = Layout::read_from(file.path())?;
        assert_eq!(layout.groups, [GroupDefinition::new("Thermal", ["Coal", "Gas"])]);
        assert_eq!(layout.colour_of("Thermal"), Colour(0xff, 0, 0));
        assert_eq!(layout.colour_of("Coal"), Colour::FALLBACK);
        Ok(())
    }

    #[test]
    fn duplicate_field_is_rejected() {
        let text = "[fields]\ncoal = \"Coal\"\ncoal = \"Gas\"\n";
        assert!(toml::from_str::<Layout>(text).is_err());
    }

    #[test]
    fn undefined_contribution_is_rejected() {
        let mut layout = Layout::default();
        layout.contributions.push(Label::from("Fusion"));
        assert!(layout.validate().is_err());
    }

    #[test]
    fn shared_contribution_member_is_rejected() {
        let mut layout = Layout::default();
        layout.groups.push(GroupDefinition::new("Thermal", ["Coal", "Nuclear"]));
        layout.contributions.push(Label::from("Thermal"));
        assert!(layout.validate().is_err());
    }

    #[test]
    fn nested_contribution_member_is_rejected() {
        let mut layout = Layout::default();
        layout.groups.push(GroupDefinition::new("Thermal", ["Fossils", "Nuclear"]));
        layout.contributions = vec![Label::from("Fossils"), Label::from("Thermal")];
        assert!(layout.validate().is_err());
    }

    #[test]
    fn alternate_grouping_outside_contributions_ok() -> Result {
        let mut layout = Layout::default();
        layout.groups.push(GroupDefinition::new("Thermal", ["Coal", "Gas", "Nuclear"]));
        layout.sections.push(Section::new("Heat", ["Thermal", "Solar"]));
        layout.validate()
    }

    #[test]
    fn section_with_group_and_member_is_rejected() {
        let mut layout = Layout::default();
        layout.sections.push(Section::new("Mix", ["Fossils", "Coal"]));
        assert!(layout.validate().is_err());
    }

    #[test]
    fn section_with_nested_member_is_rejected() {
        let mut layout = Layout::default();
        layout.groups.push(GroupDefinition::new("Thermal", ["Fossils", "Nuclear"]));
        layout.sections.push(Section::new("Mix", ["Gas", "Thermal"]));
        assert!(layout.validate().is_err());
    }

    #[test]
    fn section_with_repeated_key_is_rejected() {
        let mut layout = Layout::default();
        layout.sections.push(Section::new("Mix", ["Wind", "Wind"]));
        assert!(layout.validate().is_err());
    }

    #[test]
    fn duplicate_group_is_rejected() {
        let mut layout = Layout::default();
        layout.groups.push(GroupDefinition::new("Fossils", ["Coal"]));
        assert!(layout.validate().is_err());
    }

    #[test]
    fn colour_ok() -> Result {
        assert_eq!("#fd8d3c".parse::<Colour>()?, Colour(0xfd, 0x8d, 0x3c));
        assert_eq!("ccc".parse::<Colour>()?, Colour::FALLBACK);
        assert_eq!(Colour(0xad, 0xd8, 0xe6).to_string(), "#add8e6");
        Ok(())
    }

    #[test]
    fn bad_colour_is_rejected() {
        assert!("#12345".parse::<Colour>().is_err());
        assert!("#gggggg".parse::<Colour>().is_err());
        assert!("#ééé".parse::<Colour>().is_err());
    }
}
