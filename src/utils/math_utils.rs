use statrs::function::gamma::ln_gamma;
use crate::utils::dirichlet::Dirichlet;

lazy_static! {
    pub static ref LOG10_E: f64 = std::f64::consts::E.log10();
    pub static ref LN_10: f64 = (10.0_f64).ln();
}

pub struct MathUtils {}

impl MathUtils {
    /**
     * Converts LN to LOG10
     * @param ln log(x)
     * @return log10(x)
     */
    pub fn log_to_log10(ln: f64) -> f64 {
        ln * *LOG10_E
    }

    pub fn log10_to_log(log10: f64) -> f64 {
        log10 * *LN_10
    }

    /**
     * log10(n!) computed through the log gamma function so that non-integer and very large
     * arguments are supported.
     */
    pub fn log10_factorial(n: f64) -> f64 {
        MathUtils::log_to_log10(ln_gamma(n + 1.0))
    }

    /**
     * @see #binomialCoefficient(int, int) with log10 applied to result
     */
    pub fn log10_binomial_coefficient(n: f64, k: f64) -> f64 {
        MathUtils::log10_factorial(n)
            - MathUtils::log10_factorial(k)
            - MathUtils::log10_factorial(n - k)
    }

    /**
     * Exact binomial coefficient. Returns 0 when k > n, which the combinatorial number system
     * relies upon for allele 0.
     */
    pub fn binomial_coefficient(n: usize, k: usize) -> usize {
        num::integer::binomial(n, k)
    }

    /**
     * Keeps only the categories with a non-zero probability. The comparison is exact, a tiny
     * probability is still kept.
     */
    fn non_zero_categories(counts: &[f64], probabilities: &[f64]) -> (Vec<f64>, Vec<f64>) {
        counts
            .iter()
            .zip(probabilities.iter())
            .filter(|(_, prob)| **prob != 0.0)
            .map(|(count, prob)| (*count, *prob))
            .unzip()
    }

    /**
     * Natural log of the multinomial probability mass function.
     *
     * Categories whose probability is exactly zero are dropped from both vectors beforehand.
     * No further validation is done: negative or NaN inputs propagate into a NaN result.
     *
     * @param counts observed count per category
     * @param probabilities category probabilities, summing to one over the non-zero categories
     */
    pub fn log_multinomial_density(counts: &[f64], probabilities: &[f64]) -> f64 {
        let (counts, probabilities) = MathUtils::non_zero_categories(counts, probabilities);
        let total = counts.iter().sum::<f64>();

        ln_gamma(total + 1.0)
            + counts
                .iter()
                .zip(probabilities.iter())
                .map(|(count, prob)| count * prob.ln() - ln_gamma(count + 1.0))
                .sum::<f64>()
    }

    pub fn multinomial_density(counts: &[f64], probabilities: &[f64]) -> f64 {
        MathUtils::log_multinomial_density(counts, probabilities).exp()
    }

    /**
     * Natural log of the Dirichlet-multinomial probability mass function where the Dirichlet
     * concentration of each category is {@code alpha * probability}.
     *
     * Zero probability categories are dropped as in {@link #log_multinomial_density}. Alpha must be
     * strictly positive; otherwise the result is NaN or infinite.
     */
    pub fn log_dirichlet_multinomial_density(
        counts: &[f64],
        probabilities: &[f64],
        alpha: f64,
    ) -> f64 {
        let (counts, probabilities) = MathUtils::non_zero_categories(counts, probabilities);
        Dirichlet::from_probabilities(&probabilities, alpha).log_dirichlet_multinomial(&counts)
    }

    pub fn dirichlet_multinomial_density(counts: &[f64], probabilities: &[f64], alpha: f64) -> f64 {
        MathUtils::log_dirichlet_multinomial_density(counts, probabilities, alpha).exp()
    }

    /**
     * normalizes the real-space probability array.
     *
     * Does not assume anything about the values in the array, beyond that no elements are below 0.  It's ok
     * to have values in the array of > 1, or have the sum go above 0.
     *
     * @param array the array to be normalized
     * @return a newly allocated array corresponding the normalized values in array
     */
    pub fn normalize_sum_to_one(mut array: Vec<f64>) -> Vec<f64> {
        if array.is_empty() {
            return array;
        }

        let sum = array.iter().sum::<f64>();
        assert!(
            sum >= 0.0,
            "Values in probability array sum to a negative number"
        );
        array.iter_mut().for_each(|x| *x /= sum);

        array
    }

    pub fn is_valid_probability(result: f64) -> bool {
        (0.0..=1.0).contains(&result)
    }
}
