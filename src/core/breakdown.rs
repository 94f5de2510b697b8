use crate::{
    core::{
        group::aggregate,
        label::Label,
        layout::Layout,
        row::DisplayRow,
        snapshot::RawSnapshot,
        summary::Summary,
        totals::Totals,
    },
    prelude::*,
    quantity::power::Gigawatts,
};

/// Everything the views need from one snapshot.
///
/// Computed from scratch for every snapshot: nothing is carried over between calls.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct Breakdown {
    /// Shares are relative to the total generation.
    pub total: Option<Gigawatts>,

    /// Label and group totals.
    pub totals: Totals,

    pub summary: Summary,
    pub sections: Vec<SectionRows>,
    pub contributions: Vec<Contribution>,
}

#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct SectionRows {
    pub title: String,
    pub rows: Vec<DisplayRow>,
}

/// Group row followed by the rows of its members.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct Contribution {
    pub group: DisplayRow,
    pub members: Vec<DisplayRow>,
}

impl Breakdown {
    #[instrument(skip_all)]
    pub fn new(layout: &Layout, snapshot: &RawSnapshot) -> Self {
        if snapshot.total_generation.is_absent() {
            warn!("the total generation is missing, shares are unavailable");
        }
        let total = snapshot.total_generation.value().map(Gigawatts);
        let totals = aggregate(&layout.fields.classify(snapshot), &layout.groups);
        debug!(?total, n_totals = totals.len(), "aggregated");

        let row = |key: &Label| DisplayRow::format(key.clone(), totals.get(key), total);
        let sections = layout
            .sections
            .iter()
            .map(|section| SectionRows {
                title: section.title.clone(),
                rows: section.keys.iter().map(row).collect(),
            })
            .collect();
        let contributions = layout
            .contributions
            .iter()
            .filter_map(|name| layout.groups.iter().find(|group| group.name == *name))
            .map(|group| Contribution {
                group: row(&group.name),
                members: group.members.iter().map(row).collect(),
            })
            .collect();

        Self { total, summary: Summary::from(snapshot), sections, contributions, totals }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn snapshot() -> RawSnapshot {
        RawSnapshot::default()
            .with("coal", 10.0)
            .with("ccgt", 5.0)
            .with("ocgt", 3.0)
            .with("solar", 2.0)
            .with_total_generation(20.0)
    }

    #[test]
    fn fossils_are_ninety_percent() {
        let breakdown = Breakdown::new(&Layout::default(), &snapshot());
        assert_eq!(breakdown.totals.get("Gas"), Gigawatts(8.0));
        assert_eq!(breakdown.totals.get("Coal"), Gigawatts(10.0));
        assert_eq!(breakdown.totals.get("Solar"), Gigawatts(2.0));
        assert_eq!(breakdown.totals.get("Fossils"), Gigawatts(18.0));

        let by_type = &breakdown.sections[0];
        assert_eq!(by_type.title, "Generation by Type");
        assert_eq!(by_type.rows[0].label, "Fossils");
        assert_eq!(by_type.rows[0].formatted_share().to_string(), "90.0%");
    }

    #[test]
    fn sections_keep_configured_order() {
        let breakdown = Breakdown::new(&Layout::default(), &snapshot());
        let titles = breakdown.sections.iter().map(|section| section.title.as_str()).collect_vec();
        assert_eq!(
            titles,
            ["Generation by Type", "Generation by Source", "Interconnectors", "Storage"]
        );
        let by_source = breakdown.sections[1].rows.iter().map(|row| &*row.label).collect_vec();
        assert_eq!(
            by_source,
            ["Coal", "Gas", "Solar", "Wind", "Hydroelectric", "Nuclear", "Biomass"]
        );
    }

    #[test]
    fn contributions_ok() {
        let breakdown = Breakdown::new(&Layout::default(), &snapshot());
        let groups = breakdown.contributions.iter().map(|c| &*c.group.label).collect_vec();
        assert_eq!(groups, ["Fossils", "Renewables", "Others", "Interconnectors"]);

        let fossils = &breakdown.contributions[0];
        assert_eq!(fossils.group.value, Gigawatts(18.0));
        assert_eq!(fossils.members[0].label, "Coal");
        assert_eq!(fossils.members[0].formatted_share().to_string(), "50.0%");
        assert_eq!(fossils.members[1].formatted_share().to_string(), "40.0%");
    }

    #[test]
    fn missing_total_gives_placeholders() {
        let snapshot = RawSnapshot::default().with("coal", 1.0);
        let breakdown = Breakdown::new(&Layout::default(), &snapshot);
        assert_eq!(breakdown.total, None);
        for row in breakdown.sections.iter().flat_map(|section| &section.rows) {
            assert_eq!(row.formatted_share().to_string(), "–");
        }
    }

    #[test]
    fn idempotent() {
        let layout = Layout::default();
        let snapshot = snapshot();
        let first = Breakdown::new(&layout, &snapshot);
        let second = Breakdown::new(&layout, &snapshot);
        assert_eq!(first, second);
        let render = |breakdown: &Breakdown| {
            breakdown
                .sections
                .iter()
                .flat_map(|section| &section.rows)
                .map(ToString::to_string)
                .join("\n")
        };
        assert_eq!(render(&first), render(&second));
    }
}
