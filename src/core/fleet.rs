//! Capacity of the power plant and storage fleets, summed by category.

use crate::{
    core::{label::Label, layout::Colour, row::DisplayRow, totals::Totals},
    quantity::power::Gigawatts,
};

/// Category of a site which does not report one.
pub const UNKNOWN: &str = "Unknown";

/// Ordered category colours, as shown in the legend.
pub struct Palette(&'static [(&'static str, Colour)]);

impl Palette {
    pub const FALLBACK: Colour = Colour(0x80, 0x80, 0x80);

    pub const FUELS: Self = Self(&[
        ("Coal", Colour(0x00, 0x00, 0x00)),
        ("Gas", Colour(0xff, 0x8c, 0x00)),
        ("Oil", Colour(0x8b, 0x45, 0x13)),
        ("Hydro", Colour(0x00, 0x00, 0xff)),
        ("Nuclear", Colour(0x80, 0x00, 0x80)),
        ("Solar", Colour(0xff, 0xd7, 0x00)),
        ("Wind", Colour(0x00, 0x80, 0x00)),
        ("Biomass", Colour(0x00, 0x64, 0x00)),
        ("Wave and Tidal", Colour(0xff, 0xff, 0x00)),
        ("Storage", Colour(0x80, 0x80, 0x80)),
        ("Waste", Colour(0xff, 0x00, 0x00)),
        ("Cogeneration", Colour(0xff, 0xc0, 0xcb)),
    ]);

    pub const STATUSES: Self = Self(&[
        ("Operational", Colour(0x00, 0x00, 0xff)),
        ("De-Commissioned", Colour(0xff, 0x00, 0x00)),
        ("Contracted", Colour(0x00, 0x80, 0x00)),
        (UNKNOWN, Self::FALLBACK),
    ]);

    pub fn colour_of(&self, category: &str) -> Colour {
        self.0
            .iter()
            .find(|(known, _)| *known == category)
            .map_or(Self::FALLBACK, |(_, colour)| *colour)
    }

    fn position(&self, category: &str) -> usize {
        self.0.iter().position(|(known, _)| *known == category).unwrap_or(self.0.len())
    }
}

/// Category total with its share of the whole fleet.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryRow {
    pub row: DisplayRow,
    pub n_sites: usize,
}

/// Sum the capacities by category.
///
/// Categories follow the palette order. Those missing from the palette follow in the order of
/// their first appearance.
pub fn summarize<'a>(
    sites: impl IntoIterator<Item = (&'a str, Gigawatts)>,
    palette: &Palette,
) -> Vec<CategoryRow> {
    let mut totals = Totals::default();
    let mut categories: Vec<(&str, usize)> = Vec::new();
    for (category, capacity) in sites {
        totals.accumulate(&Label::from(category), capacity);
        match categories.iter_mut().find(|(known, _)| *known == category) {
            Some((_, n_sites)) => *n_sites += 1,
            None => categories.push((category, 1)),
        }
    }
    categories.sort_by_key(|(category, _)| palette.position(category));

    let total: Gigawatts = categories.iter().map(|(category, _)| totals.get(category)).sum();
    categories
        .into_iter()
        .map(|(category, n_sites)| CategoryRow {
            row: DisplayRow::format(category, totals.get(category), Some(total)),
            n_sites,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn summarize_ok() {
        let sites = [
            ("Wind", Gigawatts(0.5)),
            ("Gas", Gigawatts(1.0)),
            ("Geothermal", Gigawatts(0.25)),
            ("Wind", Gigawatts(0.25)),
        ];
        let rows = summarize(sites, &Palette::FUELS);
        let labels = rows.iter().map(|category| &*category.row.label).collect_vec();
        assert_eq!(labels, ["Gas", "Wind", "Geothermal"]);
        assert_eq!(rows[1].n_sites, 2);
        assert_eq!(rows[1].row.value, Gigawatts(0.75));
        assert_eq!(rows[0].row.formatted_share().to_string(), "50.0%");
        assert_eq!(rows[2].row.formatted_share().to_string(), "12.5%");
    }

    #[test]
    fn empty_fleet() {
        assert!(summarize(Vec::<(&str, Gigawatts)>::new(), &Palette::STATUSES).is_empty());
    }

    #[test]
    fn zero_capacity_has_no_share() {
        let rows = summarize([(UNKNOWN, Gigawatts(0.0))], &Palette::STATUSES);
        assert_eq!(rows[0].n_sites, 1);
        assert_eq!(rows[0].row.share, None);
    }

    #[test]
    fn colour_of_ok() {
        assert_eq!(Palette::FUELS.colour_of("Gas"), Colour(0xff, 0x8c, 0x00));
        assert_eq!(Palette::FUELS.colour_of("Geothermal"), Palette::FALLBACK);
        assert_eq!(Palette::STATUSES.colour_of(UNKNOWN), Palette::FALLBACK);
    }
}
