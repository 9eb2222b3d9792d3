pub mod calculator;
pub mod category;

pub use calculator::{BmiCalculator, Error, UnitsType};
pub use category::BmiCategory;
