use ndarray::{s, Array2};
use statrs::function::gamma::ln_gamma;

use crate::utils::errors::GenotypeError;
use crate::utils::math_utils::MathUtils;

/**
 * Enumeration and ranking of unphased genotypes.
 *
 * <p>A genotype is represented as the sorted (non-decreasing) vector of the allele indices it carries,
 * one entry per chromosome copy, so the tetraploid genotype with three copies of allele 1 and one copy of
 * allele 2 is <b>[1,1,1,2]</b>.</p>
 *
 * <p>Genotypes are ranked following the VCF standard: first by their largest allele, then recursively by
 * the ranking of the remaining ploidy - 1 alleles. For example, for ploidy 3:</p>
 *
 * <table>
 *     <th>Index</th><th>Genotype</th>
 *     <tr><td>0</td><td><b>0/0/0</b></td></tr>
 *     <tr><td>1</td><td><b>0/0/1</b></td></tr>
 *     <tr><td>2</td><td><b>0/1/1</b></td></tr>
 *     <tr><td>3</td><td><b>1/1/1</b></td></tr>
 *     <tr><td>4</td><td><b>0/0/2</b></td></tr>
 *     <tr><td>5</td><td><b>0/1/2</b></td></tr>
 *     <tr><td>6</td><td><b>1/1/2</b></td></tr>
 *     <tr><td>7</td><td><b>0/2/2</b></td></tr>
 *     <tr><td>8</td><td><b>1/2/2</b></td></tr>
 *     <tr><td>9</td><td><b>2/2/2</b></td></tr>
 *     <tr><td>10</td><td><b>0/0/3</b></td></tr>
 *     <tr><td>...</td><td>...</td></tr>
 * </table>
 *
 * The index of a genotype in this order is given by the combinatorial number system, see
 * {@link #index_genotype}.
 */
pub struct GenotypeEnumerator {}

impl GenotypeEnumerator {
    /**
     * Returns the number of possible genotypes given the ploidy and number of different alleles,
     * (ploidy + alleles - 1)! / (ploidy! * (alleles - 1)!).
     *
     * Computed in log space and rounded to the nearest integer to absorb floating point error.
     *
     * @param ploidy the requested ploidy.
     * @param allele_count the requested number of alleles.
     *
     * @return the number of genotypes given ploidy and allele count (0 or greater).
     */
    pub fn genotype_count(ploidy: usize, allele_count: usize) -> usize {
        if allele_count == 0 {
            return 0;
        }

        let log_count = ln_gamma((ploidy + allele_count) as f64)
            - ln_gamma((ploidy + 1) as f64)
            - ln_gamma(allele_count as f64);

        (log_count.exp() + 0.5) as usize
    }

    /**
     * Lists every genotype of the given ploidy over {@code allele_count} alleles in VCF order.
     *
     * <p>Row <i>i</i> of the result is the genotype with index <i>i</i>, and the matrix has as many columns
     * as the ploidy. Within a row allele indices are sorted in non-decreasing order.</p>
     *
     * <p>The genotypes whose largest allele is <i>a</i> form a contiguous block starting at row
     * {@code genotype_count(ploidy, a)}; within that block the first ploidy - 1 columns enumerate the
     * genotypes of ploidy - 1 restricted to alleles [0, a].</p>
     *
     * ploidy = 1, alleles = 5 : [ {A}, {B}, {C}, {D}, {E} ]
     * ploidy = 2, alleles = 3 : [ {AA}, {AB}, {BB}, {AC}, {BC}, {CC} ]
     */
    pub fn enumerate_genotypes(ploidy: usize, allele_count: usize) -> Array2<usize> {
        let genotype_count = GenotypeEnumerator::genotype_count(ploidy, allele_count);
        let mut result = Array2::zeros([genotype_count, ploidy]);

        match ploidy {
            0 => {}
            1 => {
                for allele in 0..allele_count {
                    result[[allele, 0]] = allele;
                }
            }
            _ => {
                for allele in 0..allele_count {
                    let start_row = GenotypeEnumerator::genotype_count(ploidy, allele);
                    let lower_ploidy = GenotypeEnumerator::enumerate_genotypes(ploidy - 1, allele + 1);
                    let end_row = start_row + lower_ploidy.nrows();

                    result
                        .slice_mut(s![start_row..end_row, 0..ploidy - 1])
                        .assign(&lower_ploidy);
                    result
                        .slice_mut(s![start_row..end_row, ploidy - 1])
                        .fill(allele);
                }
            }
        }

        result
    }

    /**
     * Returns the index of a genotype, i.e. the row in which it appears in the output of
     * {@link #enumerate_genotypes}.
     *
     * <p>The genotype must already be sorted in non-decreasing order. This is not checked; an unsorted
     * genotype produces a meaningless index. Use {@link #check_genotype} first if in doubt.</p>
     *
     * <p>The index is the sum over 1-based positions <i>m</i> of C(g<sub>m</sub> + m - 1, m), which is
     * computed in O(ploidy).</p>
     */
    pub fn index_genotype(genotype: &[usize]) -> usize {
        genotype
            .iter()
            .enumerate()
            .map(|(position, allele)| {
                let m = position + 1;
                MathUtils::binomial_coefficient(allele + m - 1, m)
            })
            .sum()
    }

    /**
     * Inverse of {@link #index_genotype}: returns the sorted genotype of the requested ploidy found at
     * {@code index}.
     *
     * <p>Working from the highest position down, the allele chosen for position <i>m</i> is the largest
     * <i>g</i> with C(g + m - 1, m) no greater than the remaining index. The allele found for a position
     * bounds the search for the one below it.</p>
     */
    pub fn genotype_from_index(index: usize, ploidy: usize) -> Vec<usize> {
        let mut genotype = vec![0; ploidy];
        let mut remaining = index;
        let mut upper_allele = None;

        for m in (1..=ploidy).rev() {
            let mut allele = 0;
            while upper_allele.map_or(true, |upper| allele < upper)
                && MathUtils::binomial_coefficient(allele + m, m) <= remaining
            {
                allele += 1;
            }

            remaining -= MathUtils::binomial_coefficient(allele + m - 1, m);
            genotype[m - 1] = allele;
            upper_allele = Some(allele);
        }

        genotype
    }

    /**
     * Checks the preconditions of {@link #index_genotype} and of allele counting: every allele must be
     * lower than {@code allele_count} and the alleles must be sorted.
     */
    pub fn check_genotype(genotype: &[usize], allele_count: usize) -> Result<(), GenotypeError> {
        if let Some(allele) = genotype.iter().find(|allele| **allele >= allele_count) {
            return Err(GenotypeError::AlleleOutOfRange {
                allele: *allele,
                allele_count,
            });
        }

        if genotype.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(GenotypeError::UnsortedGenotype);
        }

        Ok(())
    }

    /**
     * Build the table with the genotype offsets based on ploidy and the maximum allele index with representation
     * in the genotype.
     *
     * <p>The value at position <i>[p][a]</i> indicates how many genotypes of ploidy <i>p</i> there are before
     * the first one that contains allele <i>a</i>, which is the same as {@code genotype_count(p, a)}.</p>
     *
     * For example, considering ploidy 3 and alleles A, B, C, D, etc ... (indexed 0, 1, 2, ... respectively):
     * [3][A] == [3][0] == 0 as the first genotype AAA contains A.
     * [3][C] == [3][2] == 4 as the first genotype that contains C, AAC follows: AAA AAB ABB BBB
     *
     * This value are calculated recursively as follows:
     *
     * Offset[p][a] := Offset[p-1][a] + Offset[p][a-1] when a > 0, p > 0
     *                 0                               when a == 0
     *                 1                               otherwise
     *
     * 0 1 1  1  1  1   1 ...
     * 0 1 2  3  4  5   6 ...
     * 0 1 3  6 10 15  21 ...
     * 0 1 4 10 20 35  56 ...
     *
     * Returns None when any entry overflows.
     */
    pub fn build_allele_first_genotype_offset_table(
        ploidy: usize,
        allele_count: usize,
    ) -> Option<Array2<usize>> {
        let row_count = ploidy + 1;
        let col_count = allele_count + 1;

        let mut result = Array2::<usize>::zeros([row_count, col_count]);
        result.slice_mut(s![0, 1..col_count]).fill(1);

        for p in 1..row_count {
            for a in 1..col_count {
                result[[p, a]] = result[[p, a - 1]].checked_add(result[[p - 1, a]])?;
            }
        }

        Some(result)
    }
}
