use clap::Parser;

use crate::{
    api::Api,
    core::fleet::{Palette, summarize},
    prelude::*,
    quantity::{Zero, power::Gigawatts},
    tables::{build_category_table, build_storage_table},
};

#[derive(Parser)]
pub struct StorageArgs {
    /// Only print the rated power by status.
    #[clap(long)]
    summary_only: bool,
}

impl StorageArgs {
    #[instrument(skip_all)]
    pub async fn run(self, api: &Api) -> Result {
        let mut projects = api.get_storage_projects().await?;
        let n_projects = projects.len();
        projects.retain(|project| project.location.is_known());
        if projects.len() != n_projects {
            info!(
                n_skipped = n_projects - projects.len(),
                "skipped the storage projects without coordinates",
            );
        }

        if !self.summary_only {
            println!("{}", build_storage_table(&projects));
        }
        let rated_powers = projects.iter().map(|project| {
            (project.status(), project.rated_power().map_or(Gigawatts::ZERO, Gigawatts::from))
        });
        let rows = summarize(rated_powers, &Palette::STATUSES);
        println!("{}", build_category_table("Status", &rows, &Palette::STATUSES));
        Ok(())
    }
}
