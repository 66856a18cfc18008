use super::*;
pub use crate::traits::RegressorCommonGetterFunctions;
use log::{debug, info};
use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, ArrayView1, ArrayView2, Axis};
use rayon::prelude::*;

/// Number of rows at which predictions are computed in parallel
const LINEAR_REGRESSION_PARALLEL_THRESHOLD: usize = 1000;

/// Standard deviations below this are treated as constant features
const CONSTANT_FEATURE_EPSILON: f64 = 1e-12;

/// # Linear Regression model implementation
///
/// Fits `y = x · coefficients + intercept` either by batch gradient descent
/// or by solving the least squares problem directly. Supports multivariate
/// inputs and an optional intercept term.
///
/// ## Fields
///
/// - `coefficients` - Model coefficients (slopes), None before training
/// - `intercept` - Model intercept, None before training
/// - `fit_intercept` - Whether to include an intercept term in the model
/// - `learning_rate` - Learning rate for gradient descent
/// - `max_iter` - Maximum number of iterations for gradient descent
/// - `tol` - Relative convergence tolerance on the cost
/// - `solver` - How the coefficients are estimated
/// - `n_iter` - Number of iterations the algorithm ran for after fitting
///
/// ## Examples
/// ```rust
/// use rustyimg::regression::*;
/// use ndarray::array;
///
/// let mut model = LinearRegression::new(true, 0.01, 1000, 1e-9, RegressionSolver::NormalEquation).unwrap();
///
/// let x = array![[1.0], [2.0], [3.0], [4.0]];
/// let y = array![5.0, 7.0, 9.0, 11.0];
///
/// model.fit(x.view(), y.view()).unwrap();
///
/// let slope = model.get_coefficients().unwrap()[0];
/// let intercept = model.get_intercept().unwrap();
/// assert!((slope - 2.0).abs() < 1e-9);
/// assert!((intercept - 3.0).abs() < 1e-9);
///
/// let predictions = model.predict(array![[10.0]].view()).unwrap();
/// assert!((predictions[0] - 23.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct LinearRegression {
    /// Coefficients (slopes)
    coefficients: Option<Array1<f64>>,
    /// Intercept
    intercept: Option<f64>,
    /// Whether to fit an intercept
    fit_intercept: bool,
    /// Learning rate
    learning_rate: f64,
    /// Maximum number of iterations
    max_iter: usize,
    /// Convergence tolerance
    tol: f64,
    /// Coefficient estimation strategy
    solver: RegressionSolver,
    /// Number of iterations the algorithm ran for after fitting
    n_iter: Option<usize>,
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self {
            coefficients: None,
            intercept: None,
            fit_intercept: true,
            learning_rate: 0.01,
            max_iter: 1000,
            tol: 1e-6,
            solver: RegressionSolver::default(),
            n_iter: None,
        }
    }
}

impl RegressorCommonGetterFunctions for LinearRegression {
    fn get_fit_intercept(&self) -> bool {
        self.fit_intercept
    }
    fn get_learning_rate(&self) -> f64 {
        self.learning_rate
    }
    fn get_max_iterations(&self) -> usize {
        self.max_iter
    }
    fn get_tolerance(&self) -> f64 {
        self.tol
    }
    fn get_actual_iterations(&self) -> Result<usize, ModelError> {
        self.n_iter.ok_or(ModelError::NotFitted)
    }
}

impl LinearRegression {
    /// Creates a new linear regression model with custom parameters
    ///
    /// # Returns
    ///
    /// - `Ok(LinearRegression)` - An unfitted model
    /// - `Err(ModelError::InputValidationError)` - If the learning rate or tolerance is not positive
    ///   and finite, or `max_iterations` is zero
    pub fn new(
        fit_intercept: bool,
        learning_rate: f64,
        max_iterations: usize,
        tolerance: f64,
        solver: RegressionSolver,
    ) -> Result<Self, ModelError> {
        validate_learning_rate(learning_rate)?;
        validate_max_iterations(max_iterations)?;
        validate_tolerance(tolerance)?;

        Ok(LinearRegression {
            coefficients: None,
            intercept: None,
            fit_intercept,
            learning_rate,
            max_iter: max_iterations,
            tol: tolerance,
            solver,
            n_iter: None,
        })
    }

    get_field!(get_solver, solver, RegressionSolver);

    /// Returns the model coefficients if the model has been fitted
    ///
    /// # Returns
    ///
    /// - `Ok(Array1<f64>)` - One coefficient per feature
    /// - `Err(ModelError::NotFitted)` - If the model has not been fitted yet
    pub fn get_coefficients(&self) -> Result<Array1<f64>, ModelError> {
        self.coefficients.clone().ok_or(ModelError::NotFitted)
    }

    /// Returns the intercept term if the model has been fitted
    ///
    /// # Returns
    ///
    /// - `Ok(f64)` - The intercept value (0.0 when `fit_intercept` is false)
    /// - `Err(ModelError::NotFitted)` - If the model has not been fitted yet
    pub fn get_intercept(&self) -> Result<f64, ModelError> {
        self.intercept.ok_or(ModelError::NotFitted)
    }

    /// Fits the linear regression model
    ///
    /// # Parameters
    ///
    /// - `x` - Feature matrix, each row is a sample, each column is a feature
    /// - `y` - Target variable vector
    ///
    /// # Returns
    ///
    /// - `Ok(&mut self)` - Returns mutable reference to self for method chaining
    /// - `Err(ModelError::InputValidationError)` - Input does not match expectation
    /// - `Err(ModelError::ProcessingError)` - If the optimization produced non-finite values
    ///   or the least squares system could not be solved
    pub fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<&mut Self, ModelError> {
        preliminary_check(&x, Some(&y))?;

        let (weights, intercept, n_iter) = match self.solver {
            RegressionSolver::GradientDescent => self.fit_gradient_descent(x, y)?,
            RegressionSolver::NormalEquation => self.fit_normal_equation(x, y)?,
        };

        self.coefficients = Some(weights);
        self.intercept = Some(intercept);
        self.n_iter = Some(n_iter);

        info!(
            "Linear regression ({:?}) finished after {} iteration(s), intercept: {}",
            self.solver, n_iter, intercept
        );

        Ok(self)
    }

    /// Batch gradient descent on standardized features.
    fn fit_gradient_descent(
        &self,
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
    ) -> Result<(Array1<f64>, f64, usize), ModelError> {
        let n_samples = x.nrows() as f64;
        let n_features = x.ncols();

        let means = if self.fit_intercept {
            x.mean_axis(Axis(0)).ok_or_else(|| {
                ModelError::ProcessingError("Cannot compute feature means".to_string())
            })?
        } else {
            // without an intercept the features may only be rescaled, not centered
            Array1::zeros(n_features)
        };
        let scales = x
            .std_axis(Axis(0), 0.0)
            .mapv(|s| if s < CONSTANT_FEATURE_EPSILON { 1.0 } else { s });
        let z = (&x - &means) / &scales;

        let mut weights = Array1::<f64>::zeros(n_features);
        let mut intercept = 0.0;
        let mut prev_cost = f64::INFINITY;
        let mut n_iter = 0;

        while n_iter < self.max_iter {
            n_iter += 1;

            let errors = z.dot(&weights) + intercept - y;
            let cost = errors.dot(&errors) / (2.0 * n_samples);

            if !cost.is_finite() {
                return Err(ModelError::ProcessingError(
                    "Cost calculation resulted in NaN or infinite value".to_string(),
                ));
            }

            let gradients = z.t().dot(&errors) / n_samples;
            weights.scaled_add(-self.learning_rate, &gradients);
            if self.fit_intercept {
                intercept -= self.learning_rate * errors.sum() / n_samples;
            }

            if weights.iter().any(|w| !w.is_finite()) || !intercept.is_finite() {
                return Err(ModelError::ProcessingError(
                    "Parameter update resulted in NaN or infinite values".to_string(),
                ));
            }

            if (prev_cost - cost).abs() <= self.tol * cost.max(1.0) {
                debug!("gradient descent converged at iteration {}, cost: {}", n_iter, cost);
                break;
            }
            prev_cost = cost;
        }

        // map back to the original feature scale
        let coefficients = &weights / &scales;
        let intercept = if self.fit_intercept {
            intercept - coefficients.dot(&means)
        } else {
            0.0
        };
        Ok((coefficients, intercept, n_iter))
    }

    /// Least squares through the SVD of the design matrix.
    fn fit_normal_equation(
        &self,
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
    ) -> Result<(Array1<f64>, f64, usize), ModelError> {
        let (n_samples, n_features) = x.dim();
        let n_columns = n_features + usize::from(self.fit_intercept);

        let design = DMatrix::from_fn(n_samples, n_columns, |i, j| {
            if j < n_features { x[[i, j]] } else { 1.0 }
        });
        let target = DVector::from_iterator(n_samples, y.iter().copied());

        let solution = design
            .svd(true, true)
            .solve(&target, 1e-12)
            .map_err(|e| ModelError::ProcessingError(format!("Least squares solve failed: {}", e)))?;

        let weights = Array1::from_iter(solution.iter().take(n_features).copied());
        let intercept = if self.fit_intercept {
            solution[n_features]
        } else {
            0.0
        };
        Ok((weights, intercept, 1))
    }

    /// Makes predictions using the trained model
    ///
    /// # Parameters
    ///
    /// * `x` - Prediction data, each row is a sample, each column is a feature
    ///
    /// # Returns
    ///
    /// - `Ok(Array1<f64>)` - A vector of predictions
    /// - `Err(ModelError::NotFitted)` - If the model has not been fitted yet
    /// - `Err(ModelError::InputValidationError)` - If number of features does not match training data
    pub fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<f64>, ModelError> {
        let (Some(coeffs), Some(intercept)) = (&self.coefficients, self.intercept) else {
            return Err(ModelError::NotFitted);
        };

        preliminary_check::<_, ndarray::OwnedRepr<f64>>(&x, None)?;

        if x.ncols() != coeffs.len() {
            return Err(ModelError::InputValidationError(format!(
                "Number of features does not match training data, x columns: {}, coefficients: {}",
                x.ncols(),
                coeffs.len()
            )));
        }

        let predictions = if x.nrows() >= LINEAR_REGRESSION_PARALLEL_THRESHOLD {
            Array1::from(
                x.axis_iter(Axis(0))
                    .into_par_iter()
                    .map(|row| intercept + row.dot(coeffs))
                    .collect::<Vec<f64>>(),
            )
        } else {
            x.dot(coeffs) + intercept
        };

        if predictions.iter().any(|p| !p.is_finite()) {
            return Err(ModelError::ProcessingError(
                "Prediction calculation resulted in NaN or infinite values".to_string(),
            ));
        }

        Ok(predictions)
    }

    /// Fits the model to the training data and then makes predictions on the same data.
    ///
    /// # Returns
    ///
    /// - `Ok(Array1<f64>)` - The predicted values for the input data
    /// - `Err(ModelError)` - Any error of [`LinearRegression::fit`] or [`LinearRegression::predict`]
    pub fn fit_predict(
        &mut self,
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
    ) -> Result<Array1<f64>, ModelError> {
        self.fit(x, y)?;
        self.predict(x)
    }

    /// Coefficient of determination (R²) of the predictions on `x` against `y`
    ///
    /// A constant target has no variance to explain; a perfect fit on it scores 1.0, anything else 0.0.
    pub fn score(&self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<f64, ModelError> {
        preliminary_check(&x, Some(&y))?;
        let predictions = self.predict(x)?;

        let residual = &y - &predictions;
        let sse = residual.dot(&residual);
        let mean = y.mean().unwrap_or(0.0);
        let sst = y.iter().map(|v| (v - mean).powi(2)).sum::<f64>();

        if sst == 0.0 {
            return Ok(if sse == 0.0 { 1.0 } else { 0.0 });
        }
        Ok(1.0 - sse / sst)
    }
}

/// Evaluates the line `slope * x + intercept` at every point of `x`
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use rustyimg::regression::predict_line;
///
/// let prices = predict_line(array![650.0, 1200.0].view(), 1000.0, 50000.0);
/// assert_eq!(prices, array![700000.0, 1250000.0]);
/// ```
pub fn predict_line(x: ArrayView1<f64>, slope: f64, intercept: f64) -> Array1<f64> {
    x.mapv(|v| slope * v + intercept)
}
