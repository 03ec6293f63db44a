extern crate polyploid_genotypes;
#[macro_use]
extern crate approx;

use polyploid_genotypes::utils::dirichlet::Dirichlet;
use polyploid_genotypes::utils::errors::GenotypeError;
use polyploid_genotypes::utils::math_utils::MathUtils;

const COUNTS: [f64; 3] = [20.0, 25.0, 35.0];
const PROBABILITIES: [f64; 3] = [0.25, 0.25, 0.5];

// n! / (x_1! ... x_k!) * prod p_i^x_i with the factorials summed term by term in log space.
fn reference_multinomial(counts: &[usize], probabilities: &[f64]) -> f64 {
    let log_factorial = |n: usize| (1..=n).map(|i| (i as f64).ln()).sum::<f64>();
    let total = counts.iter().sum::<usize>();
    let log_density = log_factorial(total)
        + counts
            .iter()
            .zip(probabilities.iter())
            .map(|(count, prob)| *count as f64 * prob.ln() - log_factorial(*count))
            .sum::<f64>();
    log_density.exp()
}

#[test]
fn test_multinomial_density() {
    let density = MathUtils::multinomial_density(&COUNTS, &PROBABILITIES);
    assert!(density > 0.0 && density <= 1.0);
    assert_relative_eq!(density, 0.004314945556806791, max_relative = 1e-9);
    assert_relative_eq!(
        density,
        reference_multinomial(&[20, 25, 35], &PROBABILITIES),
        max_relative = 1e-9
    );
    assert_relative_eq!(
        MathUtils::log_multinomial_density(&COUNTS, &PROBABILITIES),
        density.ln(),
        epsilon = 1e-12
    );
}

#[test]
fn test_multinomial_binomial_case() {
    // 4 choose 2 * 0.5^4
    assert_relative_eq!(
        MathUtils::multinomial_density(&[2.0, 2.0], &[0.5, 0.5]),
        0.375,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        MathUtils::multinomial_density(&[0.0, 0.0], &[0.5, 0.5]),
        1.0,
        max_relative = 1e-12
    );
}

#[test]
fn test_zero_probabilities_are_dropped() {
    let with_zero = MathUtils::multinomial_density(&[20.0, 0.0, 25.0, 35.0], &[0.25, 0.0, 0.25, 0.5]);
    assert_relative_eq!(
        with_zero,
        MathUtils::multinomial_density(&COUNTS, &PROBABILITIES),
        max_relative = 1e-12
    );

    // counts observed for a dropped allele are ignored rather than making the density zero
    let ignored = MathUtils::multinomial_density(&[2.0, 5.0], &[1.0, 0.0]);
    assert_relative_eq!(ignored, 1.0, max_relative = 1e-12);

    let with_zero = MathUtils::dirichlet_multinomial_density(
        &[20.0, 3.0, 25.0, 35.0],
        &[0.25, 0.0, 0.25, 0.5],
        9.0,
    );
    assert_relative_eq!(
        with_zero,
        MathUtils::dirichlet_multinomial_density(&COUNTS, &PROBABILITIES, 9.0),
        max_relative = 1e-12
    );
}

#[test]
fn test_invalid_inputs_propagate() {
    assert!(MathUtils::multinomial_density(&[1.0, 2.0], &[f64::NAN, 0.5]).is_nan());
    assert!(MathUtils::multinomial_density(&[1.0, 2.0], &[-0.5, 1.5]).is_nan());
}

#[test]
fn test_dirichlet_multinomial_density() {
    let density = MathUtils::dirichlet_multinomial_density(&COUNTS, &PROBABILITIES, 9.0);
    assert!(density > 0.0 && density <= 1.0);
    assert_relative_eq!(density, 0.0008780835528747761, max_relative = 1e-8);
    assert_relative_eq!(
        MathUtils::log_dirichlet_multinomial_density(&COUNTS, &PROBABILITIES, 9.0),
        density.ln(),
        epsilon = 1e-12
    );
}

#[test]
fn test_dirichlet_multinomial_converges_to_multinomial() {
    let multinomial = MathUtils::multinomial_density(&COUNTS, &PROBABILITIES);
    let mut previous_error = f64::INFINITY;
    for alpha in [10.0, 100.0, 1000.0, 10000.0, 100000.0].iter() {
        let density = MathUtils::dirichlet_multinomial_density(&COUNTS, &PROBABILITIES, *alpha);
        let error = (density - multinomial).abs();
        assert!(
            error < previous_error,
            "alpha {} error {} previous {}",
            alpha,
            error,
            previous_error
        );
        previous_error = error;
    }
    assert_relative_eq!(
        MathUtils::dirichlet_multinomial_density(&COUNTS, &PROBABILITIES, 1e6),
        multinomial,
        max_relative = 1e-3
    );
}

#[test]
fn test_densities_are_deterministic() {
    let first = MathUtils::dirichlet_multinomial_density(&COUNTS, &PROBABILITIES, 9.0);
    let second = MathUtils::dirichlet_multinomial_density(&COUNTS, &PROBABILITIES, 9.0);
    assert_eq!(first.to_bits(), second.to_bits());

    let first = MathUtils::multinomial_density(&COUNTS, &PROBABILITIES);
    let second = MathUtils::multinomial_density(&COUNTS, &PROBABILITIES);
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_dirichlet() {
    let dirichlet = Dirichlet::from_probabilities(&PROBABILITIES, 9.0);
    assert_eq!(dirichlet.size(), 3);
    assert_relative_eq!(dirichlet.concentration(), 9.0);
    let weights = dirichlet.mean_weights();
    for (weight, prob) in weights.iter().zip(PROBABILITIES.iter()) {
        assert_relative_eq!(*weight, *prob, epsilon = 1e-12);
    }
    assert_relative_eq!(
        dirichlet.log_dirichlet_multinomial(&COUNTS),
        MathUtils::log_dirichlet_multinomial_density(&COUNTS, &PROBABILITIES, 9.0),
        epsilon = 1e-12
    );

    let explicit = Dirichlet::new(&[2.25, 2.25, 4.5]);
    assert_relative_eq!(explicit.concentration(), 9.0);
    assert_relative_eq!(
        explicit.log_dirichlet_multinomial(&COUNTS),
        dirichlet.log_dirichlet_multinomial(&COUNTS),
        epsilon = 1e-12
    );

    // a flat Dirichlet(1, 1) makes every split of n counts equally likely
    let flat = Dirichlet::symmetric_dirichlet(2, 2.0).unwrap();
    for k in 0..=6 {
        assert_relative_eq!(
            flat.log_dirichlet_multinomial(&[k as f64, (6 - k) as f64]).exp(),
            1.0 / 7.0,
            max_relative = 1e-9
        );
    }

    assert_eq!(
        Dirichlet::symmetric_dirichlet(2, 0.0),
        Err(GenotypeError::InvalidConcentration(0.0))
    );
}

#[test]
fn test_log10_helpers() {
    assert_relative_eq!(MathUtils::log10_factorial(5.0), 120.0_f64.log10(), epsilon = 1e-9);
    assert_relative_eq!(MathUtils::log10_factorial(0.0), 0.0, epsilon = 1e-12);
    assert_relative_eq!(
        MathUtils::log10_binomial_coefficient(10.0, 3.0),
        120.0_f64.log10(),
        epsilon = 1e-9
    );
    assert_relative_eq!(MathUtils::log_to_log10(10.0_f64.ln()), 1.0, epsilon = 1e-12);
    assert_relative_eq!(MathUtils::log10_to_log(1.0), 10.0_f64.ln(), epsilon = 1e-12);
    assert_eq!(MathUtils::binomial_coefficient(6, 3), 20);
    assert_eq!(MathUtils::binomial_coefficient(2, 3), 0);
}

#[test]
fn test_normalize_sum_to_one() {
    let normalized = MathUtils::normalize_sum_to_one(vec![1.0, 3.0, 4.0]);
    assert_relative_eq!(normalized[0], 0.125);
    assert_relative_eq!(normalized[1], 0.375);
    assert_relative_eq!(normalized[2], 0.5);
    assert!(MathUtils::normalize_sum_to_one(Vec::new()).is_empty());
    assert!(MathUtils::is_valid_probability(0.5));
    assert!(!MathUtils::is_valid_probability(1.5));
}
