//! Percentile fee-rate estimator over recent mempool samples, with IQR
//! outlier trimming, small-sample fallback, and a TTL'd cache.

use std::time::{Duration, Instant};

/// Fallback rates used whenever too few plausible samples survive
/// filtering -- also what a caller sees on an empty mempool response.
const FALLBACK_LOW: u64 = 1;
const FALLBACK_NORMAL: u64 = 1;
const FALLBACK_HIGH: u64 = 2;
const FALLBACK_URGENT: u64 = 3;

const MIN_PLAUSIBLE_RATE: f64 = 0.5;
const MAX_PLAUSIBLE_RATE: f64 = 100.0;
const MIN_SAMPLE_COUNT: usize = 10;
const RATE_CLAMP_MIN: u64 = 1;
const RATE_CLAMP_MAX: u64 = 50;

const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// One priority tier a caller can request a fee rate for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    Low,
    Normal,
    High,
    Urgent,
}

/// One pending mempool entry as seen by the estimator. Populated by the
/// caller from its `MempoolSource` collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MempoolEntry {
    pub fee: i64,
    pub mass: i64,
    pub is_orphan: bool,
}

impl MempoolEntry {
    pub fn new(fee: i64, mass: i64, is_orphan: bool) -> Self {
        Self { fee, mass, is_orphan }
    }
}

/// A full set of recommendations, plus the provenance a caller needs to
/// judge how much to trust them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeRecommendations {
    pub low: u64,
    pub normal: u64,
    pub high: u64,
    pub urgent: u64,
    pub based_on_samples: usize,
    pub mempool_size: usize,
}

impl FeeRecommendations {
    fn fallback(mempool_size: usize) -> Self {
        Self {
            low: FALLBACK_LOW,
            normal: FALLBACK_NORMAL,
            high: FALLBACK_HIGH,
            urgent: FALLBACK_URGENT,
            based_on_samples: 0,
            mempool_size,
        }
    }

    pub fn rate_for(&self, priority: Priority) -> u64 {
        match priority {
            Priority::Low => self.low,
            Priority::Normal => self.normal,
            Priority::High => self.high,
            Priority::Urgent => self.urgent,
        }
    }
}

fn clamp_rate(value: f64) -> u64 {
    (value.round() as i64).clamp(RATE_CLAMP_MIN as i64, RATE_CLAMP_MAX as i64) as u64
}

/// Nearest-rank percentile over an already-sorted slice.
fn percentile(sorted: &[f64], pct: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let rank = ((pct / 100.0) * (sorted.len() - 1) as f64).round() as usize;
    sorted[rank.min(sorted.len() - 1)]
}

fn quartile_bounds(sorted: &[f64]) -> (f64, f64) {
    let q1 = percentile(sorted, 25.0);
    let q3 = percentile(sorted, 75.0);
    let iqr = q3 - q1;
    (q1 - 1.5 * iqr, q3 + 1.5 * iqr)
}

/// Computes recommendations from a raw mempool sample with no caching.
fn compute(entries: &[MempoolEntry]) -> FeeRecommendations {
    let mempool_size = entries.len();

    let mut rates: Vec<f64> = entries
        .iter()
        .filter(|e| !e.is_orphan && e.mass > 0 && e.fee > 0)
        .map(|e| e.fee as f64 / e.mass as f64)
        .filter(|rate| (MIN_PLAUSIBLE_RATE..=MAX_PLAUSIBLE_RATE).contains(rate))
        .collect();

    if rates.len() < MIN_SAMPLE_COUNT {
        log::warn!("fee estimator falling back: only {} plausible samples of {mempool_size}", rates.len());
        return FeeRecommendations::fallback(mempool_size);
    }

    rates.sort_by(|a, b| a.partial_cmp(b).expect("rates are never NaN"));
    let (lower, upper) = quartile_bounds(&rates);
    let trimmed: Vec<f64> = rates.into_iter().filter(|r| *r >= lower && *r <= upper).collect();

    if trimmed.len() < MIN_SAMPLE_COUNT {
        log::warn!("fee estimator falling back: only {} samples survived IQR trimming", trimmed.len());
        return FeeRecommendations::fallback(mempool_size);
    }

    FeeRecommendations {
        low: clamp_rate(percentile(&trimmed, 25.0)),
        normal: clamp_rate(percentile(&trimmed, 50.0)),
        high: clamp_rate(percentile(&trimmed, 75.0)),
        urgent: clamp_rate(percentile(&trimmed, 90.0)),
        based_on_samples: trimmed.len(),
        mempool_size,
    }
}

/// Caches the last computed [`FeeRecommendations`] for `ttl`, recomputing
/// on the next call to [`Self::estimate`] once the cache has expired.
pub struct FeeEstimator {
    ttl: Duration,
    cached: Option<(Instant, FeeRecommendations)>,
}

impl FeeEstimator {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, cached: None }
    }

    pub fn with_default_ttl() -> Self {
        Self::new(DEFAULT_TTL)
    }

    /// Returns the cached recommendations if still fresh, otherwise
    /// recomputes from `entries` and refreshes the cache.
    pub fn estimate(&mut self, entries: &[MempoolEntry]) -> FeeRecommendations {
        if let Some((fetched_at, cached)) = &self.cached {
            if fetched_at.elapsed() < self.ttl {
                log::trace!("fee estimator cache hit");
                return *cached;
            }
        }
        let recommendations = compute(entries);
        self.cached = Some((Instant::now(), recommendations));
        recommendations
    }

    pub fn clear_cache(&mut self) {
        self.cached = None;
    }
}
