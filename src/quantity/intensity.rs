//! Carbon intensity of the generation mix.

quantity!(GramsPerKilowattHour, via: f64, suffix: "gCO₂/kWh", precision: 2);
