pub use crate::dataset::housing::{load_housing, load_housing_owned};
