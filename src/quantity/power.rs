use std::ops::Div;

quantity!(Gigawatts, via: f64, suffix: "GW", precision: 2);
quantity!(Megawatts, via: f64, suffix: "MW", precision: 1);
quantity!(Kilowatts, via: f64, suffix: "kW", precision: 0);

impl From<Megawatts> for Gigawatts {
    fn from(megawatts: Megawatts) -> Self {
        Self(megawatts.0 / 1000.0)
    }
}

impl From<Kilowatts> for Gigawatts {
    fn from(kilowatts: Kilowatts) -> Self {
        Self(kilowatts.0 / 1_000_000.0)
    }
}

impl Div<Self> for Gigawatts {
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::Zero;

    #[test]
    fn display_rounds_to_two_decimals() {
        assert_eq!(Gigawatts(12.345).to_string(), "12.35 GW");
        assert_eq!(Gigawatts(0.0).to_string(), "0.00 GW");
        assert_eq!(Gigawatts(-1.5).to_string(), "-1.50 GW");
    }

    #[test]
    fn amount_has_no_suffix() {
        assert_eq!(Gigawatts::ZERO.amount(), "0.00");
        assert_eq!(Gigawatts(7.0).amount(), "7.00");
    }

    #[test]
    fn into_gigawatts_ok() {
        assert_eq!(Gigawatts::from(Megawatts(1320.0)), Gigawatts(1.32));
        assert_eq!(Gigawatts::from(Kilowatts(50_000.0)), Gigawatts(0.05));
    }

    #[test]
    fn sum_ok() {
        let total: Gigawatts = [Gigawatts(1.25), Gigawatts(2.5)].into_iter().sum();
        assert_eq!(total, Gigawatts(3.75));
    }
}
