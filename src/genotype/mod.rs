pub mod gametes;
pub mod genotype_allele_counts;
pub mod genotype_enumerator;
pub mod genotype_likelihood_calculator;
