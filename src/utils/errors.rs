use thiserror::Error;

/// Failures reported by the validation helpers. The numeric kernels never produce these,
/// callers opt in by checking their inputs first.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenotypeError {
    #[error("Allele {allele} is out of range for {allele_count} alleles")]
    AlleleOutOfRange { allele: usize, allele_count: usize },
    #[error("Genotype alleles must be sorted in non-decreasing order")]
    UnsortedGenotype,
    #[error("Gametes can only be generated for an even ploidy, found {0}")]
    OddPloidy(usize),
    #[error("Expected {expected} values but found {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("The number of genotypes is too large for ploidy {ploidy} and allele count {allele_count}")]
    TooManyGenotypes { ploidy: usize, allele_count: usize },
    #[error("Dirichlet concentration must be positive, found {0}")]
    InvalidConcentration(f64),
    #[error("Prior and likelihood products must be non-negative with a positive finite sum, found sum {0}")]
    InvalidPosteriorWeights(f64),
}
