use std::future::Future;

use chrono::Local;
use clap::Parser;

use crate::{
    api::{Api, grid::Window},
    cli::{ctrl_c, show::print_breakdown},
    core::{breakdown::Breakdown, layout::Layout, snapshot::RawSnapshot},
    poller::{Fetch, Poller},
    prelude::*,
};

#[derive(Parser)]
pub struct WatchArgs {
    #[clap(long, env = "GRID_WINDOW", value_enum, default_value = "live")]
    window: Window,

    #[clap(long, env = "GRID_POLLING_INTERVAL", default_value = "1min")]
    interval: humantime::Duration,
}

impl WatchArgs {
    #[instrument(skip_all, fields(window = %self.window, interval = %self.interval))]
    pub async fn run(self, api: Api, layout: &Layout) -> Result {
        Poller::builder()
            .source(Snapshots { api, window: self.window })
            .interval(self.interval)
            .build()
            .run(ctrl_c(), |snapshot| {
                println!("{}", Local::now().format("%H:%M:%S"));
                print_breakdown(&Breakdown::new(layout, snapshot), layout);
            })
            .await
    }
}

#[derive(Clone)]
struct Snapshots {
    api: Api,
    window: Window,
}

impl Fetch for Snapshots {
    type Output = RawSnapshot;

    fn fetch(&self) -> impl Future<Output = Result<RawSnapshot>> + Send {
        self.api.get_snapshot(self.window)
    }
}
