#[macro_use]
pub mod macros;

pub mod energy;
pub mod intensity;
pub mod power;
pub mod price;
mod zero;

pub use self::zero::Zero;
