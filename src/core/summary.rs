use crate::{
    core::snapshot::RawSnapshot,
    quantity::{intensity::GramsPerKilowattHour, power::Gigawatts, price::PoundsPerMegawattHour},
};

/// Headline figures of a snapshot, `None` where the feed did not report them.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Summary {
    pub total_generation: Option<Gigawatts>,

    /// Imports are positive, exports are negative.
    pub transfers: Option<Gigawatts>,

    pub demand: Option<Gigawatts>,

    /// APX day-ahead price.
    pub price: Option<PoundsPerMegawattHour>,

    pub emissions: Option<GramsPerKilowattHour>,
}

impl From<&RawSnapshot> for Summary {
    fn from(snapshot: &RawSnapshot) -> Self {
        Self {
            total_generation: snapshot.total_generation.value().map(Gigawatts),
            transfers: snapshot.total_transfers.value().map(Gigawatts),
            demand: snapshot.total_demand.value().map(Gigawatts),
            price: snapshot.price.value().map(PoundsPerMegawattHour),
            emissions: snapshot.emissions.value().map(GramsPerKilowattHour),
        }
    }
}
