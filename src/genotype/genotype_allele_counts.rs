use crate::genotype::genotype_enumerator::GenotypeEnumerator;
use crate::utils::math_utils::MathUtils;

/**
 * Returns the copy number of each allele in a genotype.
 *
 * <p>The result always has {@code allele_count} positions where position <i>a</i> holds how many of the
 * genotype's chromosome copies carry allele <i>a</i>. The genotype need not be sorted but every allele
 * must be lower than {@code allele_count}, otherwise this panics on the out of bounds access.</p>
 *
 * <p>For example [1,1,1,2] with 4 alleles gives [0,3,1,0].</p>
 */
pub fn allele_copy(genotype: &[usize], allele_count: usize) -> Vec<usize> {
    let mut result = vec![0; allele_count];
    for allele in genotype {
        result[*allele] += 1;
    }
    result
}

/**
 * Collection of allele counts for a genotype. It encompasses what alleles are present in the genotype and in what number.
 *
 * <p>Only alleles with a non-zero count are stored, as (allele index, count) pairs sorted by allele index.
 * Each present allele therefore has a <i>rank</i>, its 0-based position amongst the present alleles.</p>
 *
 * <p>For example, tetraploid genotype 2/4/4/7 is stored as <b>[(2,1),(4,2),(7,1)]</b>; the rank of <b>4</b> is 1.</p>
 *
 * <p>Each instance also carries its own index, its 0-based ordinal amongst all genotypes of the same ploidy
 * in the order produced by {@link GenotypeEnumerator#enumerate_genotypes}.</p>
 */
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenotypeAlleleCounts {
    ploidy: usize,
    index: usize,
    sorted_allele_counts: Vec<(usize, usize)>,
}

impl GenotypeAlleleCounts {
    /**
     * Instantiates the first genotype possible provided a total ploidy, i.e. all copies of allele 0.
     */
    pub fn first(ploidy: usize) -> GenotypeAlleleCounts {
        let sorted_allele_counts = if ploidy == 0 {
            Vec::new()
        } else {
            vec![(0, ploidy)]
        };

        GenotypeAlleleCounts {
            ploidy,
            index: 0,
            sorted_allele_counts,
        }
    }

    /**
     * Builds the allele counts of an explicit genotype. The genotype must be sorted, as required by
     * {@link GenotypeEnumerator#index_genotype}, which provides the index.
     */
    pub fn from_genotype(genotype: &[usize]) -> GenotypeAlleleCounts {
        let mut sorted_allele_counts: Vec<(usize, usize)> = Vec::new();
        for allele in genotype {
            match sorted_allele_counts.last_mut() {
                Some((last, count)) if *last == *allele => *count += 1,
                _ => sorted_allele_counts.push((*allele, 1)),
            }
        }

        GenotypeAlleleCounts {
            ploidy: genotype.len(),
            index: GenotypeEnumerator::index_genotype(genotype),
            sorted_allele_counts,
        }
    }

    pub fn ploidy(&self) -> usize {
        self.ploidy
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn distinct_allele_count(&self) -> usize {
        self.sorted_allele_counts.len()
    }

    /**
     * Calculates the next genotype in likelihood indexing order.
     *
     * Only the two lowest present alleles need inspecting: the lowest allele gives up one copy, which
     * moves up to the next allele index, and any remaining copies of it fall back to allele 0.
     */
    pub fn next(&self) -> GenotypeAlleleCounts {
        let sorted_allele_counts = match self.sorted_allele_counts.as_slice() {
            // only one possible genotype with zero ploidy
            [] => return self.clone(),
            // A -> B , D -> E etc...
            [(allele, _)] if self.ploidy == 1 => vec![(allele + 1, 1)],
            // AAAAA -> AAAAB, DDD -> AAE etc...
            [(allele, count)] => vec![(0, count - 1), (allele + 1, 1)],
            [(allele0, count0), (allele1, count1), rest @ ..] => {
                let allele0_plus_1 = allele0 + 1;
                let consecutive = allele0_plus_1 == *allele1;

                let mut head = Vec::with_capacity(self.sorted_allele_counts.len() + 1);
                if *count0 > 1 {
                    head.push((0, count0 - 1));
                }
                if consecutive {
                    head.push((*allele1, count1 + 1));
                } else {
                    head.push((allele0_plus_1, 1));
                    head.push((*allele1, *count1));
                }
                head.extend_from_slice(rest);
                head
            }
        };

        GenotypeAlleleCounts {
            ploidy: self.ploidy,
            index: self.index + 1,
            sorted_allele_counts,
        }
    }

    /**
     * Returns the rank of an allele in the genotype by its index.
     *
     * @return Ok(rank) if the allele is present, otherwise Err with the rank at which it would be inserted.
     */
    pub fn allele_rank_for(&self, allele: usize) -> Result<usize, usize> {
        self.sorted_allele_counts
            .binary_search_by_key(&allele, |(present, _)| *present)
    }

    /**
     * Returns the index of the allele from its rank in the genotype.
     *
     * Panics if {@code rank} is outside [0, distinct_allele_count).
     */
    pub fn allele_index_at(&self, rank: usize) -> usize {
        if rank >= self.distinct_allele_count() {
            panic!(
                "The requested rank {} is out of range [0, {})",
                rank,
                self.distinct_allele_count()
            );
        }
        self.sorted_allele_counts[rank].0
    }

    /**
     * Returns the count of an allele in the genotype given is rank in the genotype (not the allele index itself).
     */
    pub fn allele_count_at(&self, rank: usize) -> usize {
        if rank >= self.distinct_allele_count() {
            panic!(
                "The requested rank {} is out of range [0, {})",
                rank,
                self.distinct_allele_count()
            );
        }
        self.sorted_allele_counts[rank].1
    }

    /**
     * Returns the count of an allele in the genotype given it index.
     *
     * @return 0 if the allele is not present in the genotype, 1 or more otherwise.
     */
    pub fn allele_count_for(&self, allele: usize) -> usize {
        match self.allele_rank_for(allele) {
            Ok(rank) => self.sorted_allele_counts[rank].1,
            Err(_) => 0,
        }
    }

    /**
     * Returns the largest allele index present in the genotype, None when ploidy is 0.
     */
    pub fn maximum_allele_index(&self) -> Option<usize> {
        self.sorted_allele_counts.last().map(|(allele, _)| *allele)
    }

    /**
     * Returns the allele counts for each allele index up to the maximum, that is an array of exactly
     * {@code maximum_allele_index + 1} positions where the position is the allele index. Alleles above the
     * maximum are ignored.
     */
    pub fn allele_counts_by_index(&self, maximum_allele_index: usize) -> Vec<usize> {
        let mut result = vec![0; maximum_allele_index + 1];
        self.sorted_allele_counts
            .iter()
            .take_while(|(allele, _)| *allele <= maximum_allele_index)
            .for_each(|(allele, count)| result[*allele] = *count);

        result
    }

    /**
     * Expands the counts back into the sorted genotype vector, with as many repetitions of each allele
     * as its count.
     */
    pub fn as_genotype(&self) -> Vec<usize> {
        self.sorted_allele_counts
            .iter()
            .flat_map(|(allele, count)| std::iter::repeat(*allele).take(*count))
            .collect()
    }

    /**
     * log10 of the number of ways the genotype's alleles can be assigned to its ordered chromosome
     * copies, ploidy! / (count_1! * ... * count_n!).
     */
    pub fn log10_combination_count(&self) -> f64 {
        MathUtils::log10_factorial(self.ploidy as f64)
            - self
                .sorted_allele_counts
                .iter()
                .map(|(_, count)| MathUtils::log10_factorial(*count as f64))
                .sum::<f64>()
    }
}
