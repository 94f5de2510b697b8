pub mod breakdown;
pub mod classify;
pub mod fleet;
pub mod group;
pub mod label;
pub mod latest;
pub mod layout;
pub mod location;
pub mod reading;
pub mod row;
pub mod snapshot;
pub mod summary;
pub mod totals;
pub mod trend;
