//! Threshold tables backing the step-function adjustments.
//!
//! Each table is an ordered list of exclusive upper bounds. A key maps to the value of the
//! first step whose bound it falls below, or to the table's fallback once every bound has
//! been passed. Integer keys express "greater than N" as "not below N + 1".

/// One rung of a step function: keys strictly below `below` map to `value`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Step<K, V> {
    pub(crate) below: K,
    pub(crate) value: V,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct StepTable<K: 'static, V: 'static> {
    steps: &'static [Step<K, V>],
    otherwise: V,
}

impl<K: 'static, V: 'static> StepTable<K, V> {
    pub(crate) const fn new(steps: &'static [Step<K, V>], otherwise: V) -> Self {
        Self { steps, otherwise }
    }
}

impl<K, V> StepTable<K, V>
where
    K: PartialOrd + Copy + 'static,
    V: Copy + 'static,
{
    pub(crate) fn lookup(&self, key: K) -> V {
        self.steps
            .iter()
            .find(|step| key < step.below)
            .map(|step| step.value)
            .unwrap_or(self.otherwise)
    }

    #[cfg(test)]
    pub(crate) fn steps(&self) -> &'static [Step<K, V>] {
        self.steps
    }
}

/// Monthly health premium for a single adult, by age.
pub(crate) const HEALTH_BASE_MONTHLY: StepTable<u32, f64> = StepTable::new(
    &[
        Step { below: 30, value: 250.0 },
        Step { below: 40, value: 350.0 },
        Step { below: 50, value: 450.0 },
    ],
    600.0,
);

/// Auto base-rate surcharge by vehicle age in years. Vehicles older than ten years get
/// the discount.
pub(crate) const VEHICLE_AGE_ADJUSTMENT: StepTable<u32, f64> = StepTable::new(
    &[
        Step { below: 3, value: 30.0 },
        Step { below: 11, value: 0.0 },
    ],
    -20.0,
);

/// Auto base-rate adjustment by annual mileage. Only mileage above 15,000 is surcharged.
pub(crate) const MILEAGE_ADJUSTMENT: StepTable<u32, f64> = StepTable::new(
    &[
        Step {
            below: 8_000,
            value: -15.0,
        },
        Step {
            below: 15_001,
            value: 0.0,
        },
    ],
    25.0,
);

/// Home premium multiplier by construction year. Homes built after 2010 are discounted.
pub(crate) const YEAR_BUILT_ADJUSTMENT: StepTable<i32, f64> = StepTable::new(
    &[
        Step {
            below: 1980,
            value: 1.2,
        },
        Step {
            below: 2011,
            value: 1.0,
        },
    ],
    0.9,
);
