// src/fit/mod.rs
//! Discrete power-law fitting of integer distributions.
//!
//! The scaling exponent is the approximate discrete MLE
//! `α = 1 + n / Σ ln(x / (k_min - 0.5))` over the tail `x >= k_min`, and the
//! cutoff `k_min` is the candidate whose fitted law is closest to the data in
//! Kolmogorov-Smirnov distance.

pub mod zeta;

use serde::Serialize;

use crate::error::{CharnetError, Result};
use crate::graph::EncounterGraph;

/// Fewer distinct values than this cannot be fitted.
pub const MIN_SUPPORT: usize = 2;

/// One `(x, P(X >= x))` sample of an inverse CDF.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub x: u64,
    pub y: f64,
}

/// Outcome of a power-law fit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitResult {
    pub alpha: f64,
    pub k_min: u64,
    pub ks_distance: f64,
    /// Number of samples with `x >= k_min`.
    pub tail_size: usize,
    /// Empirical inverse CDF over the whole support, ascending in `x`.
    pub empirical: Vec<CurvePoint>,
    /// Fitted inverse CDF for `x >= k_min`, anchored to `empirical` at `k_min`.
    pub fitted: Vec<CurvePoint>,
}

/// Sorted distinct values with their multiplicities.
struct Support {
    values: Vec<(u64, usize)>,
    total: usize,
}

impl Support {
    fn new(samples: &[u64]) -> Self {
        let mut sorted: Vec<u64> = samples.iter().copied().filter(|&x| x > 0).collect();
        sorted.sort_unstable();

        let mut values: Vec<(u64, usize)> = Vec::new();
        for x in sorted {
            match values.last_mut() {
                Some((v, count)) if *v == x => *count += 1,
                _ => values.push((x, 1)),
            }
        }
        let total = values.iter().map(|(_, c)| c).sum();
        Self { values, total }
    }
}

/// Power-law fitter; see the module docs for the estimator.
#[derive(Debug, Clone, Copy)]
pub struct PowerLawFitter {
    min_support: usize,
}

impl Default for PowerLawFitter {
    fn default() -> Self {
        Self {
            min_support: MIN_SUPPORT,
        }
    }
}

impl PowerLawFitter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires at least `n` distinct values (never fewer than [`MIN_SUPPORT`]).
    #[must_use]
    pub fn with_min_support(mut self, n: usize) -> Self {
        self.min_support = n.max(MIN_SUPPORT);
        self
    }

    /// Fits the positive values of `samples`; zeros are ignored.
    ///
    /// # Errors
    /// Returns `InsufficientData` if the support is too small.
    pub fn fit(&self, book: &str, samples: &[u64]) -> Result<FitResult> {
        let support = Support::new(samples);
        let distinct = support.values.len();
        if distinct < self.min_support {
            return Err(CharnetError::InsufficientData {
                book: book.to_string(),
                distinct,
                required: self.min_support,
            });
        }

        let best = select_cutoff(&support);
        let empirical = inverse_cdf_of(&support);
        let fitted = fitted_tail(&empirical, best.alpha, best.k_min);

        Ok(FitResult {
            alpha: best.alpha,
            k_min: best.k_min,
            ks_distance: best.ks,
            tail_size: best.tail_size,
            empirical,
            fitted,
        })
    }

    /// Fits the degree distribution of a graph, isolated vertices excluded.
    ///
    /// # Errors
    /// Returns `InsufficientData` if the degrees take too few distinct values.
    pub fn fit_degrees(&self, graph: &EncounterGraph) -> Result<FitResult> {
        let degrees: Vec<u64> = graph.degree_sequence().into_iter().map(|d| d as u64).collect();
        self.fit(graph.name(), &degrees)
    }
}

struct Candidate {
    alpha: f64,
    k_min: u64,
    ks: f64,
    tail_size: usize,
}

/// Scans every distinct value but the largest as `k_min`.
///
/// The largest value is skipped: its tail is a single point mass that any
/// steep enough exponent matches perfectly.
#[allow(clippy::cast_precision_loss)]
fn select_cutoff(support: &Support) -> Candidate {
    let vals = &support.values;
    let d = vals.len();

    // Suffix sums of counts and of count * ln(x).
    let mut tail_count = vec![0_usize; d + 1];
    let mut tail_ln = vec![0.0_f64; d + 1];
    for i in (0..d).rev() {
        let (x, c) = vals[i];
        tail_count[i] = tail_count[i + 1] + c;
        tail_ln[i] = tail_ln[i + 1] + c as f64 * (x as f64).ln();
    }

    let mut best: Option<Candidate> = None;
    for c in 0..d.saturating_sub(1) {
        let k_min = vals[c].0;
        let m = tail_count[c];
        let denom = tail_ln[c] - m as f64 * (k_min as f64 - 0.5).ln();
        let alpha = 1.0 + m as f64 / denom;
        let ks = ks_statistic(&vals[c..], m, alpha, k_min);
        if ks.is_nan() {
            continue;
        }
        if best.as_ref().map_or(true, |b| ks < b.ks) {
            best = Some(Candidate {
                alpha,
                k_min,
                ks,
                tail_size: m,
            });
        }
    }

    // Only reachable if every candidate produced NaN; fall back to the full support.
    best.unwrap_or_else(|| {
        let k_min = vals.first().map_or(1, |v| v.0);
        let all: Vec<u64> = vals
            .iter()
            .flat_map(|&(x, c)| std::iter::repeat(x).take(c))
            .collect();
        let (alpha, tail_size) = mle_alpha(&all, k_min).unwrap_or((f64::NAN, 0));
        Candidate {
            alpha,
            k_min,
            ks: f64::NAN,
            tail_size,
        }
    })
}

/// Approximate discrete MLE of `α` over `samples >= k_min`.
///
/// Returns `(α, tail size)`, or `None` when the tail is empty or `k_min` is 0.
/// A tail of one repeated value is fine: every log term is `ln(x / (x - 0.5))`,
/// which is strictly positive.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mle_alpha(samples: &[u64], k_min: u64) -> Option<(f64, usize)> {
    if k_min == 0 {
        return None;
    }
    let shift = k_min as f64 - 0.5;
    let (n, sum) = samples
        .iter()
        .filter(|&&x| x >= k_min)
        .fold((0_usize, 0.0_f64), |(n, s), &x| (n + 1, s + (x as f64 / shift).ln()));
    (n > 0).then(|| (1.0 + n as f64 / sum, n))
}

/// `P(X >= x)` of a discrete power law with exponent `alpha` starting at `k_min`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn tail_ccdf(alpha: f64, k_min: u64, x: u64) -> f64 {
    if x <= k_min {
        return 1.0;
    }
    let (k, x) = (k_min as f64, x as f64);
    (k / x).powf(alpha) * zeta::hurwitz_zeta_scaled(alpha, x) / zeta::hurwitz_zeta_scaled(alpha, k)
}

/// Largest gap between the empirical and fitted CDFs of the tail.
#[allow(clippy::cast_precision_loss)]
fn ks_statistic(tail: &[(u64, usize)], m: usize, alpha: f64, k_min: u64) -> f64 {
    let mut seen = 0_usize;
    let mut max_gap = 0.0_f64;
    for &(x, c) in tail {
        seen += c;
        let empirical = seen as f64 / m as f64;
        let theoretical = 1.0 - tail_ccdf(alpha, k_min, x + 1);
        let gap = (empirical - theoretical).abs();
        if gap.is_nan() {
            return f64::NAN;
        }
        max_gap = max_gap.max(gap);
    }
    max_gap
}

/// Empirical `P(X >= x)` at every distinct positive value of `samples`.
#[must_use]
pub fn inverse_cdf(samples: &[u64]) -> Vec<CurvePoint> {
    inverse_cdf_of(&Support::new(samples))
}

#[allow(clippy::cast_precision_loss)]
fn inverse_cdf_of(support: &Support) -> Vec<CurvePoint> {
    let total = support.total as f64;
    let mut below = 0_usize;
    support
        .values
        .iter()
        .map(|&(x, c)| {
            let y = 1.0 - below as f64 / total;
            below += c;
            CurvePoint { x, y }
        })
        .collect()
}

fn fitted_tail(empirical: &[CurvePoint], alpha: f64, k_min: u64) -> Vec<CurvePoint> {
    let anchor = empirical
        .iter()
        .find(|p| p.x == k_min)
        .map_or(1.0, |p| p.y);
    empirical
        .iter()
        .filter(|p| p.x >= k_min)
        .map(|p| CurvePoint {
            x: p.x,
            y: anchor * tail_ccdf(alpha, k_min, p.x),
        })
        .collect()
}
