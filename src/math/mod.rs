pub mod matrix;
pub mod utils;

pub use matrix::Matrix;
