//! Firing-time distribution records and their reduction
//!
//! Each place carries a discrete probability mass function over integer delay
//! offsets, bounded by `(min_time, max_time)`. A record stores the two bounds
//! followed by one mass per offset `j` in `0..=floor(max_time - min_time)`;
//! the mass count is derived from the bounds, never stored. Reduction folds
//! the masses into the distribution's expectation.

/// Number of masses implied by a record's bounds.
///
/// `floor(max_time - min_time) + 1` for a non-negative span. A negative or
/// NaN span implies an empty distribution, matching the legacy decoder's
/// loop bound `j <= max_time - min_time`.
pub fn count_masses(min_time: f64, max_time: f64) -> usize {
    let span = max_time - min_time;
    if span >= 0.0 {
        // the cast saturates for absurd (e.g. infinite) spans
        (span.floor() as usize).saturating_add(1)
    } else {
        0
    }
}

/// Reduction result for one place's distribution
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaceStats {
    /// 1-based place index, following the net file order
    pub place: usize,
    /// Total probability mass, kept as a diagnostic quantity
    pub sum_prob: f64,
    /// Expectation of the firing delay: sum of mass[j] * j
    pub average: f64,
}

/// Streaming accumulator over a record's masses, in offset order
#[derive(Clone, Copy, Debug, Default)]
pub struct ExpectationAccumulator {
    sum_prob: f64,
    average: f64,
}

impl ExpectationAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold in the mass at integer delay offset `offset`
    pub fn add_mass(&mut self, offset: usize, mass: f64) {
        self.sum_prob += mass;
        self.average += mass * offset as f64;
    }

    /// Finish the reduction for the given 1-based place index
    pub fn into_stats(self, place: usize) -> PlaceStats {
        PlaceStats {
            place,
            sum_prob: self.sum_prob,
            average: self.average,
        }
    }
}

/// In-memory form of one place's record, used by the write side and tests.
///
/// The streaming read path never builds one of these; records are reduced
/// mass by mass as they are decoded. `masses.len()` is expected to equal
/// `count_masses(min_time, max_time)`, since the on-disk length is derived
/// from the bounds alone.
#[derive(Clone, Debug, PartialEq)]
pub struct DistributionRecord {
    pub min_time: f64,
    pub max_time: f64,
    pub masses: Vec<f64>,
}

impl DistributionRecord {
    /// Reduce the in-memory record, same accumulation order as the stream
    pub fn stats(&self, place: usize) -> PlaceStats {
        let mut acc = ExpectationAccumulator::new();
        for (j, &mass) in self.masses.iter().enumerate() {
            acc.add_mass(j, mass);
        }
        acc.into_stats(place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_masses_inclusive_range() {
        assert_eq!(count_masses(0.0, 0.0), 1);
        assert_eq!(count_masses(0.0, 2.0), 3);
        assert_eq!(count_masses(1.0, 3.5), 3); // fractional span floors
        assert_eq!(count_masses(-2.0, 2.0), 5);
    }

    #[test]
    fn test_count_masses_negative_span_is_empty() {
        assert_eq!(count_masses(3.0, 1.0), 0);
        assert_eq!(count_masses(0.0, -0.5), 0);
    }

    #[test]
    fn test_count_masses_nan_span_is_empty() {
        assert_eq!(count_masses(f64::NAN, 2.0), 0);
        assert_eq!(count_masses(0.0, f64::NAN), 0);
    }

    #[test]
    fn test_expectation_formula() {
        let record = DistributionRecord {
            min_time: 0.0,
            max_time: 2.0,
            masses: vec![0.2, 0.3, 0.5],
        };
        let stats = record.stats(1);
        assert_eq!(stats.place, 1);
        assert_eq!(stats.average, 0.2 * 0.0 + 0.3 * 1.0 + 0.5 * 2.0);
        assert_eq!(stats.sum_prob, 0.2 + 0.3 + 0.5);
    }

    #[test]
    fn test_empty_record_reduces_to_zero() {
        let record = DistributionRecord {
            min_time: 5.0,
            max_time: 1.0,
            masses: vec![],
        };
        let stats = record.stats(7);
        assert_eq!(stats.average, 0.0);
        assert_eq!(stats.sum_prob, 0.0);
    }
}
