use crate::error::ModelError;

/// Getters shared by the iterative regression models
pub trait RegressorCommonGetterFunctions {
    /// Gets the current setting for fitting the intercept term
    ///
    /// # Returns
    ///
    /// * `bool` - Returns `true` if the model includes an intercept term, `false` otherwise
    fn get_fit_intercept(&self) -> bool;

    /// Gets the current learning rate
    ///
    /// The learning rate controls the step size in each iteration of gradient descent.
    fn get_learning_rate(&self) -> f64;

    /// Gets the maximum number of iterations
    fn get_max_iterations(&self) -> usize;

    /// Gets the convergence tolerance threshold
    ///
    /// Training stops when the relative change in cost between consecutive
    /// iterations is less than this value.
    fn get_tolerance(&self) -> f64;

    /// Returns the actual number of iterations performed during the last model fitting.
    ///
    /// # Returns
    ///
    /// - `Ok(usize)` - The number of iterations if the model has been fitted
    /// - `Err(ModelError::NotFitted)` - If the model has not been fitted yet
    fn get_actual_iterations(&self) -> Result<usize, ModelError>;
}
