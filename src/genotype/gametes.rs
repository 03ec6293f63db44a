use itertools::Itertools;
use ndarray::{s, Array2, ArrayView1};

use crate::utils::errors::GenotypeError;
use crate::utils::math_utils::MathUtils;

/**
 * Enumerates the gametes a genotype can produce under random chromosome segregation, each gamete
 * carrying half of the genotype's chromosome copies.
 */
pub struct GameteEnumerator {}

impl GameteEnumerator {
    /**
     * Returns a matrix containing every gamete genotype, one per row, with ploidy / 2 columns.
     *
     * <p>Chromosome copies are treated as distinct slots, so the result has exactly C(ploidy, ploidy / 2) rows.
     * When the genotype repeats an allele the same gamete appears several times; the repetitions encode the
     * relative frequency of that gamete and are intentional.</p>
     *
     * <p>The ploidy should be even. This is not checked, see {@link #check_genotype}; an odd ploidy is
     * rounded down.</p>
     */
    pub fn make_gametes(genotype: &[usize]) -> Array2<usize> {
        let gamete_ploidy = genotype.len() / 2;
        GameteEnumerator::choose_slots(ArrayView1::from(genotype), gamete_ploidy)
    }

    /**
     * Every choice of {@code gamete_ploidy} slots from {@code genotype}, keeping slot order. The first chosen
     * slot runs over [0, n - k]; the remaining k - 1 are chosen from the slots after it.
     */
    fn choose_slots(genotype: ArrayView1<usize>, gamete_ploidy: usize) -> Array2<usize> {
        let ploidy = genotype.len();
        let gamete_count = MathUtils::binomial_coefficient(ploidy, gamete_ploidy);
        let mut result = Array2::zeros([gamete_count, gamete_ploidy]);

        match gamete_ploidy {
            0 => {}
            1 => {
                result.column_mut(0).assign(&genotype);
            }
            _ => {
                let mut row = 0;
                for first_slot in 0..=(ploidy - gamete_ploidy) {
                    let remaining = GameteEnumerator::choose_slots(
                        genotype.slice(s![first_slot + 1..]),
                        gamete_ploidy - 1,
                    );
                    let end_row = row + remaining.nrows();

                    result
                        .slice_mut(s![row..end_row, 0])
                        .fill(genotype[first_slot]);
                    result
                        .slice_mut(s![row..end_row, 1..])
                        .assign(&remaining);
                    row = end_row;
                }
            }
        }

        result
    }

    /**
     * Collapses the rows of {@link #make_gametes} into distinct gametes paired with their relative frequency.
     * Gametes are reported in the order they first appear and the frequencies sum to one.
     */
    pub fn gamete_frequencies(genotype: &[usize]) -> Vec<(Vec<usize>, f64)> {
        let gametes = GameteEnumerator::make_gametes(genotype);
        let total = gametes.nrows() as f64;
        let counts = gametes.rows().into_iter().map(|row| row.to_vec()).counts();

        gametes
            .rows()
            .into_iter()
            .map(|row| row.to_vec())
            .unique()
            .map(|gamete| {
                let frequency = counts[&gamete] as f64 / total;
                (gamete, frequency)
            })
            .collect()
    }

    /**
     * Gametes are only defined for genotypes with an even number of chromosome copies.
     */
    pub fn check_genotype(genotype: &[usize]) -> Result<(), GenotypeError> {
        if genotype.len() % 2 != 0 {
            return Err(GenotypeError::OddPloidy(genotype.len()));
        }
        Ok(())
    }
}
