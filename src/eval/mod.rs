pub mod accuracy;

pub use accuracy::{argmax, subset_accuracy};
