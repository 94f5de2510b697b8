mod api;
mod feed;
mod layout;
mod plants;
mod show;
mod storage;
mod watch;

use clap::{Parser, Subcommand};

use crate::{
    cli::{
        api::ApiArgs,
        feed::FeedArgs,
        layout::LayoutArgs,
        plants::PlantsArgs,
        show::ShowArgs,
        storage::StorageArgs,
        watch::WatchArgs,
    },
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    api: ApiArgs,

    #[clap(flatten)]
    layout: LayoutArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a snapshot once and print the breakdown.
    #[clap(name = "show")]
    Show(ShowArgs),

    /// Keep polling and print every fresh breakdown.
    #[clap(name = "watch")]
    Watch(WatchArgs),

    /// Print the news feed.
    #[clap(name = "feed")]
    Feed(FeedArgs),

    /// List the power plants and their capacity by fuel.
    #[clap(name = "plants")]
    Plants(PlantsArgs),

    /// List the storage projects and their rated power by status.
    #[clap(name = "storage")]
    Storage(StorageArgs),

    /// Print the effective layout as TOML, for use with `--layout`.
    #[clap(name = "layout")]
    Layout,
}

impl Args {
    pub async fn run(self) -> Result {
        let layout = self.layout.load()?;
        match self.command {
            Command::Show(args) => args.run(&self.api.new_client()?, &layout).await,
            Command::Watch(args) => args.run(self.api.new_client()?, &layout).await,
            Command::Feed(args) => args.run(self.api.new_client()?).await,
            Command::Plants(args) => args.run(&self.api.new_client()?).await,
            Command::Storage(args) => args.run(&self.api.new_client()?).await,
            Command::Layout => {
                print!("{}", layout.to_toml()?);
                Ok(())
            }
        }
    }
}

/// Resolve on Ctrl-C.
async fn ctrl_c() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!("failed to listen for Ctrl-C: {error:#}");
        std::future::pending::<()>().await;
    }
    info!("interrupted");
}
