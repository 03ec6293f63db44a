use ndarray::Array2;

use crate::genotype::genotype_allele_counts::GenotypeAlleleCounts;
use crate::genotype::genotype_enumerator::GenotypeEnumerator;
use crate::utils::errors::GenotypeError;
use crate::utils::math_utils::MathUtils;

/// Read count model used when scoring genotypes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LikelihoodModel {
    Multinomial,
    /// Overdispersed counts; larger alpha approaches the multinomial.
    DirichletMultinomial { alpha: f64 },
}

impl LikelihoodModel {
    pub fn density(&self, counts: &[f64], probabilities: &[f64]) -> f64 {
        match self {
            LikelihoodModel::Multinomial => MathUtils::multinomial_density(counts, probabilities),
            LikelihoodModel::DirichletMultinomial { alpha } => {
                MathUtils::dirichlet_multinomial_density(counts, probabilities, *alpha)
            }
        }
    }
}

/**
 * Scores every genotype of a fixed ploidy and allele count against allele frequencies or observed
 * per-allele read counts.
 *
 * <p>The calculator keeps the allele-first offset table (see
 * {@link GenotypeEnumerator#build_allele_first_genotype_offset_table}) so that genotypes can be ranked with
 * ploidy table lookups, and the full genotype table in index order.</p>
 */
#[derive(Clone, Debug)]
pub struct GenotypeLikelihoodCalculator {
    /**
     * Ploidy for this calculator.
     */
    ploidy: usize,
    /**
     * Number of genotyping alleles for this calculator.
     */
    allele_count: usize,
    /**
     * Offset table for this calculator, [p][a] is the number of ploidy p genotypes before the first one
     * containing allele a.
     */
    allele_first_genotype_offset_by_ploidy: Array2<usize>,
    /**
     * Genotype table for this calculator, indexed by genotype index.
     */
    genotype_allele_counts: Vec<GenotypeAlleleCounts>,
}

impl GenotypeLikelihoodCalculator {
    /**
     * Largest genotype count a calculator accepts.
     */
    pub const MAXIMUM_GENOTYPE_COUNT: usize = 1 << 20;
    /**
     * Genotype tables beyond this size are built with a warning.
     */
    pub const MAXIMUM_STRONG_REF_GENOTYPE_PER_PLOIDY: usize = 1000;

    pub fn new(
        ploidy: usize,
        allele_count: usize,
    ) -> Result<GenotypeLikelihoodCalculator, GenotypeError> {
        let too_many = GenotypeError::TooManyGenotypes {
            ploidy,
            allele_count,
        };
        let allele_first_genotype_offset_by_ploidy =
            GenotypeEnumerator::build_allele_first_genotype_offset_table(ploidy, allele_count)
                .ok_or_else(|| too_many.clone())?;

        let genotype_count = allele_first_genotype_offset_by_ploidy[[ploidy, allele_count]];
        if genotype_count > Self::MAXIMUM_GENOTYPE_COUNT {
            return Err(too_many);
        }

        debug!(
            "Genotype count {} Ploidy {} Allele Count {}",
            genotype_count, ploidy, allele_count
        );
        if genotype_count > Self::MAXIMUM_STRONG_REF_GENOTYPE_PER_PLOIDY {
            warn!(
                "Building a table of {} genotypes for ploidy {} and {} alleles",
                genotype_count, ploidy, allele_count
            );
        }

        let mut genotype_allele_counts = Vec::with_capacity(genotype_count);
        if genotype_count > 0 {
            let mut current = GenotypeAlleleCounts::first(ploidy);
            for _ in 1..genotype_count {
                let next = current.next();
                genotype_allele_counts.push(current);
                current = next;
            }
            genotype_allele_counts.push(current);
        }

        Ok(GenotypeLikelihoodCalculator {
            ploidy,
            allele_count,
            allele_first_genotype_offset_by_ploidy,
            genotype_allele_counts,
        })
    }

    pub fn ploidy(&self) -> usize {
        self.ploidy
    }

    pub fn allele_count(&self) -> usize {
        self.allele_count
    }

    pub fn genotype_count(&self) -> usize {
        self.genotype_allele_counts.len()
    }

    /**
     * Returns the genotype associated to a particular likelihood index.
     *
     * Panics if the index is not lower than the genotype count.
     */
    pub fn genotype_allele_counts_at(&self, index: usize) -> &GenotypeAlleleCounts {
        if index >= self.genotype_count() {
            panic!(
                "Invalid likelihood index {} >= {} (Genotype count for n-alleles = {} and {}",
                index,
                self.genotype_count(),
                self.allele_count,
                self.ploidy
            );
        }
        &self.genotype_allele_counts[index]
    }

    /**
     * Give a list of alleles, returns the likelihood array index.
     * @param allele_indices the indices of the alleles in the genotype, there should be as many repetition of an
     *                      index as copies of that allele in the genotype. Allele indices do not need to be sorted in
     *                      any particular way.
     */
    pub fn alleles_to_index(&self, allele_indices: &[usize]) -> Result<usize, GenotypeError> {
        if allele_indices.len() != self.ploidy {
            return Err(GenotypeError::LengthMismatch {
                expected: self.ploidy,
                found: allele_indices.len(),
            });
        }

        let mut sorted = allele_indices.to_vec();
        sorted.sort_unstable();
        GenotypeEnumerator::check_genotype(&sorted, self.allele_count)?;

        Ok(self.sorted_alleles_to_index(&sorted))
    }

    /**
     * Returns the likelihood index given the dense allele counts, position a holding the copies of allele a.
     */
    pub fn allele_counts_to_index(&self, allele_counts: &[usize]) -> Result<usize, GenotypeError> {
        if allele_counts.len() != self.allele_count {
            return Err(GenotypeError::LengthMismatch {
                expected: self.allele_count,
                found: allele_counts.len(),
            });
        }

        let sorted = allele_counts
            .iter()
            .enumerate()
            .flat_map(|(allele, count)| std::iter::repeat(allele).take(*count))
            .collect::<Vec<usize>>();
        if sorted.len() != self.ploidy {
            return Err(GenotypeError::LengthMismatch {
                expected: self.ploidy,
                found: sorted.len(),
            });
        }

        Ok(self.sorted_alleles_to_index(&sorted))
    }

    fn sorted_alleles_to_index(&self, sorted: &[usize]) -> usize {
        sorted
            .iter()
            .enumerate()
            .map(|(position, allele)| self.allele_first_genotype_offset_by_ploidy[[position + 1, *allele]])
            .sum()
    }

    /**
     * Hardy-Weinberg prior of each genotype given population allele frequencies: the multinomial probability
     * of the genotype's allele dosages.
     */
    pub fn genotype_priors(&self, allele_frequencies: &[f64]) -> Result<Vec<f64>, GenotypeError> {
        self.check_allele_values(allele_frequencies)?;

        Ok(self
            .genotype_allele_counts
            .iter()
            .map(|genotype| {
                let dosages = self.dosages(genotype);
                MathUtils::multinomial_density(&dosages, allele_frequencies)
            })
            .collect())
    }

    /**
     * Probability of the observed per-allele read counts under each genotype.
     *
     * <p>A read samples one chromosome copy uniformly and then reports its allele, except with probability
     * {@code sequencing_error} where it reports an allele uniformly at random. With no error, alleles absent
     * from the genotype have probability zero and are dropped before scoring.</p>
     */
    pub fn genotype_likelihoods(
        &self,
        read_counts: &[f64],
        sequencing_error: f64,
        model: LikelihoodModel,
    ) -> Result<Vec<f64>, GenotypeError> {
        self.check_allele_values(read_counts)?;
        if let LikelihoodModel::DirichletMultinomial { alpha } = model {
            if !(alpha > 0.0) {
                return Err(GenotypeError::InvalidConcentration(alpha));
            }
        }

        let error_share = sequencing_error / self.allele_count as f64;
        let likelihoods = self
            .genotype_allele_counts
            .iter()
            .map(|genotype| {
                let probabilities = self
                    .dosages(genotype)
                    .iter()
                    .map(|dosage| {
                        (1.0 - sequencing_error) * dosage / self.ploidy as f64 + error_share
                    })
                    .collect::<Vec<f64>>();
                // reads on an allele the genotype cannot emit rule the genotype out
                if probabilities
                    .iter()
                    .zip(read_counts.iter())
                    .any(|(prob, reads)| *prob == 0.0 && *reads > 0.0)
                {
                    return 0.0;
                }
                model.density(read_counts, &probabilities)
            })
            .collect::<Vec<f64>>();
        trace!("Genotype likelihoods {:?}", likelihoods);

        Ok(likelihoods)
    }

    /**
     * Combines priors and likelihoods into posterior genotype probabilities that sum to one.
     */
    pub fn genotype_posteriors(
        &self,
        priors: &[f64],
        likelihoods: &[f64],
    ) -> Result<Vec<f64>, GenotypeError> {
        for values in [priors, likelihoods].iter() {
            if values.len() != self.genotype_count() {
                return Err(GenotypeError::LengthMismatch {
                    expected: self.genotype_count(),
                    found: values.len(),
                });
            }
        }

        let unnormalized = priors
            .iter()
            .zip(likelihoods.iter())
            .map(|(prior, likelihood)| prior * likelihood)
            .collect::<Vec<f64>>();

        let total = unnormalized.iter().sum::<f64>();
        if unnormalized.iter().any(|weight| !(*weight >= 0.0)) || !(total > 0.0 && total.is_finite())
        {
            return Err(GenotypeError::InvalidPosteriorWeights(total));
        }

        Ok(MathUtils::normalize_sum_to_one(unnormalized))
    }

    fn dosages(&self, genotype: &GenotypeAlleleCounts) -> Vec<f64> {
        genotype
            .allele_counts_by_index(self.allele_count - 1)
            .into_iter()
            .map(|count| count as f64)
            .collect()
    }

    fn check_allele_values(&self, values: &[f64]) -> Result<(), GenotypeError> {
        if values.len() != self.allele_count {
            return Err(GenotypeError::LengthMismatch {
                expected: self.allele_count,
                found: values.len(),
            });
        }
        Ok(())
    }
}
