use statrs::function::gamma::ln_gamma;
use crate::utils::errors::GenotypeError;

/// Concentration parameters of a Dirichlet distribution over allele categories.
#[derive(Debug, Clone, PartialEq)]
pub struct Dirichlet {
    alpha: Vec<f64>,
    concentration: f64,
}

impl Dirichlet {
    pub fn new(alpha: &[f64]) -> Dirichlet {
        Dirichlet {
            alpha: alpha.to_vec(),
            concentration: alpha.iter().sum(),
        }
    }

    /**
     * Create a symmetric distribution Dir(a/K, a/K, a/K . . .) where K is the number of states and
     * a is the concentration.
     */
    pub fn symmetric_dirichlet(
        num_states: usize,
        concentration: f64,
    ) -> Result<Dirichlet, GenotypeError> {
        if num_states == 0 {
            return Err(GenotypeError::LengthMismatch {
                expected: 1,
                found: 0,
            });
        }
        if !(concentration > 0.0) {
            return Err(GenotypeError::InvalidConcentration(concentration));
        }

        Ok(Dirichlet::new(&vec![
            concentration / (num_states as f64);
            num_states
        ]))
    }

    /**
     * Dirichlet centred on the given category probabilities with overall concentration alpha, so that
     * each category receives alpha * probability. Larger alpha means less overdispersion.
     *
     * The overall concentration stays alpha even when the probabilities do not sum to one.
     */
    pub fn from_probabilities(probabilities: &[f64], alpha: f64) -> Dirichlet {
        Dirichlet {
            alpha: probabilities.iter().map(|prob| alpha * prob).collect(),
            concentration: alpha,
        }
    }

    pub fn concentration(&self) -> f64 {
        self.concentration
    }

    pub fn mean_weights(&self) -> Vec<f64> {
        let sum = self.alpha.iter().sum::<f64>();
        self.alpha.iter().map(|x| *x / sum).collect()
    }

    /**
     * Natural log of the probability of observing {@code counts} when the category probabilities are
     * first drawn from this Dirichlet, i.e. the Dirichlet-multinomial mass function.
     *
     * The counts are aligned with the concentration vector by position.
     */
    pub fn log_dirichlet_multinomial(&self, counts: &[f64]) -> f64 {
        let n = counts.iter().sum::<f64>();
        let total =
            ln_gamma(n + 1.0) + ln_gamma(self.concentration) - ln_gamma(n + self.concentration);

        let individual = counts
            .iter()
            .zip(self.alpha.iter())
            .map(|(count, alpha_i)| {
                ln_gamma(count + 1.0) + ln_gamma(*alpha_i) - ln_gamma(alpha_i + count)
            })
            .sum::<f64>();

        total - individual
    }

    pub fn size(&self) -> usize {
        self.alpha.len()
    }
}
