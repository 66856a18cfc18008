pub use crate::regression::{LinearRegression, RegressionSolver, predict_line};
pub use crate::traits::RegressorCommonGetterFunctions;
