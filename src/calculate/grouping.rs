//! Grouping and averaging helpers shared by the aggregators.

use std::collections::BTreeMap;

use crate::models::Side;

/// Team code → side → value.
pub type TeamSideMap<V> = BTreeMap<String, BTreeMap<Side, V>>;

/// Accumulator keyed by team and side.
///
/// Buckets exist only once something was written to them, so a team/side
/// pair with no qualifying rows never shows up in the output.
#[derive(Debug, Clone)]
pub struct TeamSideTable<V> {
    inner: TeamSideMap<V>,
}

impl<V> Default for TeamSideTable<V> {
    fn default() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }
}

impl<V: Default> TeamSideTable<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the bucket for `(team, side)`, creating it on first access.
    pub fn slot(&mut self, team: &str, side: Side) -> &mut V {
        self.inner
            .entry(team.to_string())
            .or_default()
            .entry(side)
            .or_default()
    }
}

impl<V> TeamSideTable<V> {
    /// Finish every bucket with `f`.
    pub fn finish<W>(self, mut f: impl FnMut(V) -> W) -> TeamSideMap<W> {
        self.inner
            .into_iter()
            .map(|(team, sides)| {
                let sides = sides.into_iter().map(|(side, v)| (side, f(v))).collect();
                (team, sides)
            })
            .collect()
    }

    pub fn into_map(self) -> TeamSideMap<V> {
        self.inner
    }
}

/// Running arithmetic mean.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Mean {
    sum: f64,
    count: u32,
}

impl Mean {
    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// `None` until a value has been pushed.
    pub fn value(&self) -> Option<f64> {
        ratio(self.sum, self.count as f64)
    }

    /// Mean of a bucket that is known to be non-empty.
    pub fn value_or_zero(&self) -> f64 {
        self.value().unwrap_or(0.0)
    }
}

/// `numerator / denominator`, undefined when the denominator is zero.
pub fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    let value = numerator / denominator;
    value.is_finite().then_some(value)
}

/// Rate of `count` out of `total`, in percent.
pub fn percentage(count: u32, total: usize) -> Option<f64> {
    ratio(count as f64 * 100.0, total as f64)
}

/// Per-minute rate of a value over an average game length in minutes.
pub fn per_minute(value: f64, minutes: Option<f64>) -> Option<f64> {
    ratio(value, minutes?)
}
