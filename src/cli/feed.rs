use std::future::Future;

use clap::Parser;

use crate::{
    api::{Api, feed::FeedItem},
    cli::ctrl_c,
    poller::{Fetch, Poller},
    prelude::*,
    tables::build_feed_table,
};

#[derive(Parser)]
pub struct FeedArgs {
    #[clap(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    page: u32,

    #[clap(long, env = "FEED_PAGE_SIZE", default_value = "25")]
    page_size: u32,

    /// Keep reloading the page.
    #[clap(long)]
    follow: bool,

    #[clap(long, env = "FEED_RELOAD_INTERVAL", default_value = "1min")]
    interval: humantime::Duration,
}

impl FeedArgs {
    pub async fn run(self, api: Api) -> Result {
        let source = Page { api, page: self.page, page_size: self.page_size };
        if !self.follow {
            println!("{}", build_feed_table(&source.fetch().await?));
            return Ok(());
        }
        Poller::builder()
            .source(source)
            .interval(self.interval)
            .build()
            .run(ctrl_c(), |items| println!("{}", build_feed_table(items)))
            .await
    }
}

#[derive(Clone)]
struct Page {
    api: Api,
    page: u32,
    page_size: u32,
}

impl Fetch for Page {
    type Output = Vec<FeedItem>;

    fn fetch(&self) -> impl Future<Output = Result<Vec<FeedItem>>> + Send {
        self.api.get_feed(self.page, self.page_size)
    }
}
