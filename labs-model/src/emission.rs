use std::fmt;

use ordered_float::OrderedFloat;

use crate::error::{Error, Result};

/// A closed frequency band in MHz in which an appliance emits.
///
/// The bounds are stored as ordered floats so that two ranges with the same
/// bounds compare (and hash) equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmissionRange {
    min_mhz: OrderedFloat<f64>,
    max_mhz: OrderedFloat<f64>,
}

impl EmissionRange {
    pub fn new(min_mhz: f64, max_mhz: f64) -> Result<Self> {
        if min_mhz.is_nan() || max_mhz.is_nan() {
            return Err(Error::InvalidEmission("bounds must be numbers"));
        }
        if min_mhz < 0.0 {
            return Err(Error::InvalidEmission("lower bound must not be negative"));
        }
        if max_mhz < min_mhz {
            return Err(Error::InvalidEmission(
                "upper bound must not be below the lower bound",
            ));
        }
        Ok(EmissionRange {
            min_mhz: OrderedFloat(positive_zero(min_mhz)),
            max_mhz: OrderedFloat(positive_zero(max_mhz)),
        })
    }

    pub fn min_mhz(&self) -> f64 {
        self.min_mhz.into_inner()
    }

    pub fn max_mhz(&self) -> f64 {
        self.max_mhz.into_inner()
    }

    /// Whether this band overlaps the query band `[q_min, q_max]`.
    ///
    /// Touching bounds count as an overlap.
    pub fn intersects(&self, q_min: f64, q_max: f64) -> Result<bool> {
        check_query(q_min, q_max)?;
        Ok(!(self.max_mhz() < q_min || self.min_mhz() > q_max))
    }
}

// -0.0 is stored as 0.0, so a range has exactly one representation
fn positive_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

pub(crate) fn check_query(q_min: f64, q_max: f64) -> Result<()> {
    if q_min.is_nan() || q_max.is_nan() {
        return Err(Error::InvalidQuery("bounds must be numbers"));
    }
    if q_min < 0.0 || q_max < 0.0 {
        return Err(Error::InvalidQuery("bounds must not be negative"));
    }
    if q_min > q_max {
        return Err(Error::InvalidQuery(
            "lower bound must not exceed the upper bound",
        ));
    }
    Ok(())
}

impl fmt::Display for EmissionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}–{:.0} MHz", self.min_mhz(), self.max_mhz())
    }
}
