pub mod dirichlet;
pub mod errors;
pub mod math_utils;
