use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    api::{feed::FeedItem, plants::PowerPlant, storage::StorageProject},
    core::{
        breakdown::{Breakdown, Contribution},
        fleet::{CategoryRow, Palette},
        layout::Layout,
        row::DisplayRow,
        summary::Summary,
        trend::Trend,
    },
    fmt::{FormattedOption, FormattedTime},
    quantity::{
        Zero,
        energy::KilowattHours,
        power::{Gigawatts, Kilowatts, Megawatts},
    },
};

const SWATCH: &str = "■";

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_summary_table(summary: &Summary) -> Table {
    let transfers_colour = match summary.transfers {
        Some(transfers) if transfers < Gigawatts::ZERO => Color::Red,
        Some(_) => Color::Green,
        None => Color::Reset,
    };
    let mut table = new_table();
    table.set_header(vec!["", "Value"]);
    table.add_row(vec![
        Cell::new("Total generation"),
        Cell::new(FormattedOption(summary.total_generation)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Imports (+) / Exports (-)"),
        Cell::new(FormattedOption(summary.transfers))
            .set_alignment(CellAlignment::Right)
            .fg(transfers_colour),
    ]);
    table.add_row(vec![
        Cell::new("Demand"),
        Cell::new(FormattedOption(summary.demand)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Price (APX)"),
        Cell::new(FormattedOption(summary.price)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Emissions"),
        Cell::new(FormattedOption(summary.emissions)).set_alignment(CellAlignment::Right),
    ]);
    table
}

fn row_cells(row: &DisplayRow, layout: &Layout, indent: bool) -> Vec<Cell> {
    let label = if indent { format!("  {}", row.label) } else { row.label.to_string() };
    let label = Cell::new(label);
    vec![
        Cell::new(SWATCH).fg(layout.colour_of(&row.label).into()),
        if indent { label.add_attribute(Attribute::Dim) } else { label },
        Cell::new(row.value.amount()).set_alignment(CellAlignment::Right),
        Cell::new(row.formatted_share()).set_alignment(CellAlignment::Right),
    ]
}

/// Every section of the breakdown, each headed by its title.
pub fn build_breakdown_table(breakdown: &Breakdown, layout: &Layout) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(""),
        Cell::new("Source"),
        Cell::new(Gigawatts::SUFFIX).set_alignment(CellAlignment::Right),
        Cell::new("%").set_alignment(CellAlignment::Right),
    ]);
    for section in &breakdown.sections {
        table.add_row(vec![
            Cell::new(""),
            Cell::new(&section.title).add_attribute(Attribute::Bold),
            Cell::new(""),
            Cell::new(""),
        ]);
        for row in &section.rows {
            table.add_row(row_cells(row, layout, true));
        }
    }
    table
}

/// Groups followed by their members.
pub fn build_contribution_table(contributions: &[Contribution], layout: &Layout) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(""),
        Cell::new("Category"),
        Cell::new(Gigawatts::SUFFIX).set_alignment(CellAlignment::Right),
        Cell::new("%").set_alignment(CellAlignment::Right),
    ]);
    for contribution in contributions {
        table.add_row(
            row_cells(&contribution.group, layout, false)
                .into_iter()
                .map(|cell| cell.add_attribute(Attribute::Bold)),
        );
        for member in &contribution.members {
            table.add_row(row_cells(member, layout, true));
        }
    }
    table
}

pub fn build_trend_table(trend: &Trend) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Time"),
        Cell::new(trend.metric.title()).set_alignment(CellAlignment::Right),
    ]);
    for point in &trend.points {
        let time =
            point.time.as_deref().map(|raw| FormattedTime { raw, compact: trend.compact_ticks });
        table.add_row(vec![
            Cell::new(FormattedOption(time)),
            Cell::new(FormattedOption(point.value.value().map(|value| format!("{value:.2}"))))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_feed_table(items: &[FeedItem]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Fetched", "Published", "Source", "Title"]);
    for item in items {
        let published_at =
            item.payload.published_at.as_deref().map(|raw| FormattedTime { raw, compact: true });
        let title = match item.payload.description.as_deref() {
            Some(description) if !description.is_empty() => {
                format!("{}\n{description}", item.headline())
            }
            _ => item.headline().to_owned(),
        };
        table.add_row(vec![
            Cell::new(FormattedTime { raw: &item.fetched_at, compact: true }),
            Cell::new(FormattedOption(published_at)).add_attribute(Attribute::Dim),
            Cell::new(item.source.to_uppercase()).fg(Color::Cyan),
            Cell::new(title),
        ]);
    }
    table
}

pub fn build_plant_table(plants: &[PowerPlant]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(""),
        Cell::new("Name"),
        Cell::new("Fuel"),
        Cell::new(Megawatts::SUFFIX).set_alignment(CellAlignment::Right),
        Cell::new("Location"),
    ]);
    for plant in plants {
        table.add_row(vec![
            Cell::new(SWATCH).fg(Palette::FUELS.colour_of(plant.fuel()).into()),
            Cell::new(&plant.name),
            Cell::new(plant.fuel()),
            Cell::new(FormattedOption(plant.capacity().map(Megawatts::amount)))
                .set_alignment(CellAlignment::Right),
            Cell::new(plant.location).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

pub fn build_storage_table(projects: &[StorageProject]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(""),
        Cell::new("Name"),
        Cell::new("Status"),
        Cell::new("Type"),
        Cell::new(KilowattHours::SUFFIX).set_alignment(CellAlignment::Right),
        Cell::new(Kilowatts::SUFFIX).set_alignment(CellAlignment::Right),
        Cell::new("Commissioned"),
        Cell::new("Location"),
    ]);
    for project in projects {
        table.add_row(vec![
            Cell::new(SWATCH).fg(Palette::STATUSES.colour_of(project.status()).into()),
            Cell::new(&project.name),
            Cell::new(project.status()),
            Cell::new(FormattedOption(project.storage_type.as_deref())),
            Cell::new(FormattedOption(project.capacity().map(KilowattHours::amount)))
                .set_alignment(CellAlignment::Right),
            Cell::new(FormattedOption(project.rated_power().map(Kilowatts::amount)))
                .set_alignment(CellAlignment::Right),
            Cell::new(FormattedOption(project.commissioned_date.as_deref())),
            Cell::new(project.location).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

/// Category totals, such as the plant capacity by fuel.
pub fn build_category_table(title: &str, rows: &[CategoryRow], palette: &Palette) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(""),
        Cell::new(title),
        Cell::new("Sites").set_alignment(CellAlignment::Right),
        Cell::new(Gigawatts::SUFFIX).set_alignment(CellAlignment::Right),
        Cell::new("%").set_alignment(CellAlignment::Right),
    ]);
    for CategoryRow { row, n_sites } in rows {
        table.add_row(vec![
            Cell::new(SWATCH).fg(palette.colour_of(&row.label).into()),
            Cell::new(&row.label),
            Cell::new(n_sites).set_alignment(CellAlignment::Right),
            Cell::new(row.value.amount()).set_alignment(CellAlignment::Right),
            Cell::new(row.formatted_share()).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
