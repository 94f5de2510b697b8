//! Timer-driven fetching of fresh values.

use std::{future::Future, time::Duration};

use bon::Builder;
use tokio::{
    select,
    task::JoinSet,
    time::{MissedTickBehavior, interval},
};

use crate::{core::latest::Latest, prelude::*};

/// Source of fresh values for the [`Poller`].
pub trait Fetch: Clone + Send + Sync + 'static {
    type Output: Send + 'static;

    fn fetch(&self) -> impl Future<Output = Result<Self::Output>> + Send;
}

#[derive(Builder)]
pub struct Poller<S> {
    source: S,

    #[builder(into)]
    interval: Duration,
}

impl<S: Fetch> Poller<S> {
    /// Fetch right away and then on every tick, until `shutdown` resolves.
    ///
    /// Fetches run concurrently and may complete out of order. Only a value requested later than
    /// the last accepted one reaches `on_update`, older ones are dropped. On shutdown, the timer
    /// stops and the fetches still in flight are aborted.
    pub async fn run(
        self,
        shutdown: impl Future<Output = ()>,
        mut on_update: impl FnMut(&S::Output),
    ) -> Result {
        ensure!(!self.interval.is_zero(), "the polling interval must be non-zero");
        let mut interval = interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut in_flight = JoinSet::new();
        let mut latest = Latest::default();
        let mut next_sequence = 0_u64;
        tokio::pin!(shutdown);

        loop {
            select! {
                () = &mut shutdown => {
                    info!(n_in_flight = in_flight.len(), "shutting down…");
                    break;
                }

                _ = interval.tick() => {
                    let sequence = next_sequence;
                    next_sequence += 1;
                    debug!(sequence, "fetching…");
                    let source = self.source.clone();
                    in_flight.spawn(async move { (sequence, source.fetch().await) });
                }

                Some(joined) = in_flight.join_next() => {
                    let (sequence, result) = joined.context("the fetch task has crashed")?;
                    match result {
                        Ok(value) => {
                            let current = latest.sequence();
                            if let Some(value) = latest.offer(sequence, value) {
                                on_update(value);
                            } else {
                                warn!(sequence, ?current, "discarding a stale response");
                            }
                        }
                        Err(error) => {
                            warn!(sequence, "failed to fetch: {error:#}");
                        }
                    }
                }
            }
        }

        in_flight.shutdown().await;
        Ok(())
    }
}
