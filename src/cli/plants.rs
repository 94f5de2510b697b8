use clap::Parser;

use crate::{
    api::Api,
    core::fleet::{Palette, summarize},
    prelude::*,
    quantity::{Zero, power::Gigawatts},
    tables::{build_category_table, build_plant_table},
};

#[derive(Parser)]
pub struct PlantsArgs {
    /// Only print the capacity by fuel.
    #[clap(long)]
    summary_only: bool,
}

impl PlantsArgs {
    #[instrument(skip_all)]
    pub async fn run(self, api: &Api) -> Result {
        let mut plants = api.get_power_plants().await?;
        let n_plants = plants.len();
        plants.retain(|plant| plant.location.is_known());
        if plants.len() != n_plants {
            info!(n_skipped = n_plants - plants.len(), "skipped the plants without coordinates");
        }

        if !self.summary_only {
            println!("{}", build_plant_table(&plants));
        }
        let capacities = plants
            .iter()
            .map(|plant| (plant.fuel(), plant.capacity().map_or(Gigawatts::ZERO, Gigawatts::from)));
        let rows = summarize(capacities, &Palette::FUELS);
        println!("{}", build_category_table("Fuel", &rows, &Palette::FUELS));
        Ok(())
    }
}
