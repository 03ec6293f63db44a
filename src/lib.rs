// Stats
extern crate ndarray;
extern crate num;
extern crate statrs;

// Utilities
extern crate itertools;
extern crate thiserror;

#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;

pub mod genotype;
pub mod utils;

pub use genotype::gametes::GameteEnumerator;
pub use genotype::genotype_allele_counts::{allele_copy, GenotypeAlleleCounts};
pub use genotype::genotype_enumerator::GenotypeEnumerator;
pub use genotype::genotype_likelihood_calculator::{GenotypeLikelihoodCalculator, LikelihoodModel};
pub use utils::errors::GenotypeError;
pub use utils::math_utils::MathUtils;
