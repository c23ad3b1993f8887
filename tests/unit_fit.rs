// tests/unit_fit.rs
use charnet_core::error::CharnetError;
use charnet_core::fit::{mle_alpha, tail_ccdf, PowerLawFitter};
use charnet_core::graph::{EncounterGraph, GraphBuilder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALPHA: f64 = 2.5;
const K_MIN: u64 = 10;
const SAMPLES: usize = 20_000;

/// Exact discrete power-law draw: the largest `x` with `P(X >= x) >= u`.
fn draw(rng: &mut StdRng, alpha: f64, k_min: u64) -> u64 {
    let u: f64 = 1.0 - rng.gen::<f64>();
    let (mut lo, mut hi) = (k_min, k_min);
    while tail_ccdf(alpha, k_min, hi + 1) >= u {
        lo = hi + 1;
        hi = hi * 2 + 1;
    }
    while lo < hi {
        let mid = (lo + hi + 1) / 2;
        if tail_ccdf(alpha, k_min, mid) >= u {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}

fn sample(seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..SAMPLES).map(|_| draw(&mut rng, ALPHA, K_MIN)).collect()
}

#[test]
fn test_mle_recovers_alpha_at_known_cutoff() {
    let xs = sample(7);
    let (alpha, n) = mle_alpha(&xs, K_MIN).unwrap();
    assert_eq!(n, SAMPLES);
    assert!((alpha - ALPHA).abs() < 0.05, "alpha = {alpha}");
}

#[test]
fn test_fit_recovers_alpha() {
    let xs = sample(42);
    let fit = PowerLawFitter::new().fit("synthetic", &xs).unwrap();
    assert!((fit.alpha - ALPHA).abs() < 0.05, "alpha = {}", fit.alpha);
    assert!(fit.k_min >= K_MIN);
    assert!(fit.ks_distance < 0.05);
    assert_eq!(fit.empirical.first().map(|p| p.y), Some(1.0));
    assert!(fit.empirical.windows(2).all(|w| w[0].x < w[1].x));
}

#[test]
fn test_cutoff_never_takes_largest_value() {
    let xs = [1, 1, 1, 2, 2, 3, 40];
    let fit = PowerLawFitter::new().fit("b", &xs).unwrap();
    assert!(fit.k_min < 40);
    assert!(fit.tail_size >= 2);
}

#[test]
fn test_single_value_sequence_is_insufficient_but_tail_fits() {
    let err = PowerLawFitter::new().fit("b", &[3, 3, 3]).unwrap_err();
    assert!(matches!(err, CharnetError::InsufficientData { required: 2, .. }));

    let (alpha, n) = mle_alpha(&[3, 3, 3], 3).unwrap();
    assert_eq!(n, 3);
    assert!(alpha.is_finite() && alpha > 1.0);
}

#[test]
fn test_ccdf_is_decreasing() {
    let ys: Vec<f64> = (K_MIN..K_MIN + 50).map(|x| tail_ccdf(ALPHA, K_MIN, x)).collect();
    assert!(ys.windows(2).all(|w| w[0] > w[1]));
    // Large arguments stay finite and positive.
    let far = tail_ccdf(4.0, 500, 1_000_000);
    assert!(far > 0.0 && far < 1e-8);
}

#[test]
fn test_fit_degrees_of_regular_graph_is_insufficient() {
    let mut g = EncounterGraph::new("ring");
    GraphBuilder::new()
        .build_str(&mut g, "AA a\nAB b\nAC c\n\n1:AA,AB;AB,AC;AA,AC\n")
        .unwrap();
    let err = PowerLawFitter::new().fit_degrees(&g).unwrap_err();
    assert!(matches!(
        err,
        CharnetError::InsufficientData { ref book, distinct: 1, required: 2 } if book == "ring"
    ));
}

#[test]
fn test_fit_degrees_ignores_isolated_vertices() {
    let mut g = EncounterGraph::new("star");
    GraphBuilder::new()
        .build_str(&mut g, "AA a\nAB b\nAC c\nAD d\nAE e\n\n1:AA,AB;AA,AC;AA,AD\n")
        .unwrap();
    let fit = PowerLawFitter::new().fit_degrees(&g).unwrap();
    let xs: Vec<u64> = fit.empirical.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![1, 3]);
}
