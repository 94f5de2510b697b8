quantity!(PoundsPerMegawattHour, via: f64, suffix: "£/MWh", precision: 2);
