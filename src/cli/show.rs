use clap::Parser;
use tokio::try_join;

use crate::{
    api::{Api, grid::Window},
    core::{
        breakdown::Breakdown,
        layout::Layout,
        trend::{Metric, Trend},
    },
    prelude::*,
    tables::{
        build_breakdown_table,
        build_contribution_table,
        build_summary_table,
        build_trend_table,
    },
};

#[derive(Parser)]
pub struct ShowArgs {
    #[clap(long, env = "GRID_WINDOW", value_enum, default_value = "live")]
    window: Window,

    /// Do not fetch the price and emission trends.
    #[clap(long)]
    no_trends: bool,
}

impl ShowArgs {
    #[instrument(skip_all, fields(window = %self.window))]
    pub async fn run(self, api: &Api, layout: &Layout) -> Result {
        let (snapshot, series) = if self.no_trends {
            (api.get_snapshot(self.window).await?, Vec::new())
        } else {
            try_join!(api.get_snapshot(self.window), api.get_trend_series(self.window))?
        };

        print_breakdown(&Breakdown::new(layout, &snapshot), layout);
        for metric in Metric::ALL {
            let trend = Trend::new(metric, &series, self.window.has_compact_ticks());
            if !trend.is_empty() {
                println!("{}", build_trend_table(&trend));
            }
        }
        Ok(())
    }
}

pub fn print_breakdown(breakdown: &Breakdown, layout: &Layout) {
    println!("{}", build_summary_table(&breakdown.summary));
    println!("{}", build_breakdown_table(breakdown, layout));
    if !breakdown.contributions.is_empty() {
        println!("{}", build_contribution_table(&breakdown.contributions, layout));
    }
}
