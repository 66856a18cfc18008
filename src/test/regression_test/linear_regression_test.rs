use super::*;

fn line_data() -> (Array2<f64>, Array1<f64>) {
    // y = 2x + 3
    let x = array![[1.0], [2.0], [3.0], [4.0], [5.0]];
    let y = array![5.0, 7.0, 9.0, 11.0, 13.0];
    (x, y)
}

// Test default initialization of LinearRegression
#[test]
fn test_linear_regression_default() {
    let model = LinearRegression::default();
    assert!(model.get_fit_intercept());
    assert_eq!(model.get_learning_rate(), 0.01);
    assert_eq!(model.get_max_iterations(), 1000);
    assert_eq!(model.get_tolerance(), 1e-6);
    assert_eq!(model.get_solver(), RegressionSolver::GradientDescent);
}

#[test]
fn test_linear_regression_new_validates_parameters() {
    assert!(LinearRegression::new(true, 0.1, 100, 1e-6, RegressionSolver::GradientDescent).is_ok());
    for (lr, max_iter, tol) in [
        (0.0, 100, 1e-6),
        (-0.1, 100, 1e-6),
        (f64::NAN, 100, 1e-6),
        (0.1, 0, 1e-6),
        (0.1, 100, 0.0),
        (0.1, 100, f64::INFINITY),
    ] {
        assert!(matches!(
            LinearRegression::new(true, lr, max_iter, tol, RegressionSolver::GradientDescent),
            Err(ModelError::InputValidationError(_))
        ));
    }
}

#[test]
fn test_linear_regression_not_fitted() {
    let model = LinearRegression::default();
    let x = array![[1.0]];
    assert_eq!(model.get_coefficients().unwrap_err(), ModelError::NotFitted);
    assert_eq!(model.get_intercept().unwrap_err(), ModelError::NotFitted);
    assert_eq!(model.get_actual_iterations().unwrap_err(), ModelError::NotFitted);
    assert_eq!(model.predict(x.view()).unwrap_err(), ModelError::NotFitted);
}

#[test]
fn test_normal_equation_recovers_line() {
    let (x, y) = line_data();
    let mut model =
        LinearRegression::new(true, 0.01, 1000, 1e-6, RegressionSolver::NormalEquation).unwrap();
    model.fit(x.view(), y.view()).unwrap();

    assert_abs_diff_eq!(model.get_coefficients().unwrap()[0], 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(model.get_intercept().unwrap(), 3.0, epsilon = 1e-9);
    assert_eq!(model.get_actual_iterations().unwrap(), 1);
    assert_abs_diff_eq!(model.score(x.view(), y.view()).unwrap(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_gradient_descent_recovers_line() {
    let (x, y) = line_data();
    let mut model =
        LinearRegression::new(true, 0.1, 10000, 1e-12, RegressionSolver::GradientDescent).unwrap();
    model.fit(x.view(), y.view()).unwrap();

    assert_abs_diff_eq!(model.get_coefficients().unwrap()[0], 2.0, epsilon = 1e-3);
    assert_abs_diff_eq!(model.get_intercept().unwrap(), 3.0, epsilon = 1e-3);
    let iterations = model.get_actual_iterations().unwrap();
    assert!(iterations > 1 && iterations <= 10000);
}

#[test]
fn test_fit_without_intercept() {
    let x = array![[1.0], [2.0], [3.0], [4.0]];
    let y = array![3.0, 6.0, 9.0, 12.0];
    for solver in [RegressionSolver::NormalEquation, RegressionSolver::GradientDescent] {
        let mut model = LinearRegression::new(false, 0.1, 10000, 1e-12, solver).unwrap();
        model.fit(x.view(), y.view()).unwrap();
        assert_abs_diff_eq!(model.get_coefficients().unwrap()[0], 3.0, epsilon = 1e-3);
        assert_eq!(model.get_intercept().unwrap(), 0.0);
    }
}

#[test]
fn test_normal_equation_multivariate() {
    // y = 1.5 a - 2 b + 4
    let x = array![
        [1.0, 0.0],
        [0.0, 1.0],
        [2.0, 1.0],
        [3.0, 5.0],
        [4.0, 2.0],
        [-1.0, 3.0]
    ];
    let y = x.map_axis(Axis(1), |row| 1.5 * row[0] - 2.0 * row[1] + 4.0);

    let mut model =
        LinearRegression::new(true, 0.01, 1000, 1e-6, RegressionSolver::NormalEquation).unwrap();
    let predictions = model.fit_predict(x.view(), y.view()).unwrap();

    let coefficients = model.get_coefficients().unwrap();
    assert_abs_diff_eq!(coefficients[0], 1.5, epsilon = 1e-9);
    assert_abs_diff_eq!(coefficients[1], -2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(model.get_intercept().unwrap(), 4.0, epsilon = 1e-9);
    for (p, t) in predictions.iter().zip(y.iter()) {
        assert_abs_diff_eq!(*p, *t, epsilon = 1e-9);
    }
}

// Both solvers must agree on noisy data
#[test]
fn test_solvers_agree_on_noisy_data() {
    let mut rng = StdRng::seed_from_u64(42);
    let n = 200;
    let x = Array2::from_shape_fn((n, 2), |_| rng.random_range(-10.0..10.0));
    let y = Array1::from_shape_fn(n, |i| {
        0.7 * x[[i, 0]] + 3.0 * x[[i, 1]] - 5.0 + rng.random_range(-0.5..0.5)
    });

    let mut exact =
        LinearRegression::new(true, 0.01, 1000, 1e-6, RegressionSolver::NormalEquation).unwrap();
    exact.fit(x.view(), y.view()).unwrap();

    let mut iterative =
        LinearRegression::new(true, 0.1, 100000, 1e-15, RegressionSolver::GradientDescent).unwrap();
    iterative.fit(x.view(), y.view()).unwrap();

    let a = exact.get_coefficients().unwrap();
    let b = iterative.get_coefficients().unwrap();
    assert_abs_diff_eq!(a[0], b[0], epsilon = 1e-4);
    assert_abs_diff_eq!(a[1], b[1], epsilon = 1e-4);
    assert_abs_diff_eq!(
        exact.get_intercept().unwrap(),
        iterative.get_intercept().unwrap(),
        epsilon = 1e-4
    );
    assert_abs_diff_eq!(a[0], 0.7, epsilon = 0.05);
    assert_abs_diff_eq!(a[1], 3.0, epsilon = 0.05);
    assert!(exact.score(x.view(), y.view()).unwrap() > 0.99);
}

#[test]
fn test_fit_rejects_invalid_input() {
    let mut model = LinearRegression::default();

    let empty = Array2::<f64>::zeros((0, 1));
    let no_targets = Array1::<f64>::zeros(0);
    assert!(matches!(
        model.fit(empty.view(), no_targets.view()),
        Err(ModelError::InputValidationError(_))
    ));

    let x = array![[1.0], [f64::NAN]];
    let y = array![1.0, 2.0];
    assert!(matches!(
        model.fit(x.view(), y.view()),
        Err(ModelError::InputValidationError(_))
    ));

    let x = array![[1.0], [2.0]];
    let y = array![1.0, 2.0, 3.0];
    assert!(matches!(
        model.fit(x.view(), y.view()),
        Err(ModelError::InputValidationError(_))
    ));
}

#[test]
fn test_predict_feature_mismatch() {
    let (x, y) = line_data();
    let mut model = LinearRegression::default();
    model.fit(x.view(), y.view()).unwrap();
    let wide = array![[1.0, 2.0]];
    assert!(matches!(
        model.predict(wide.view()),
        Err(ModelError::InputValidationError(_))
    ));
}

// Large inputs are predicted in parallel
#[test]
fn test_predict_large_input() {
    let (x, y) = line_data();
    let mut model =
        LinearRegression::new(true, 0.01, 1000, 1e-6, RegressionSolver::NormalEquation).unwrap();
    model.fit(x.view(), y.view()).unwrap();

    let many = Array2::from_shape_fn((2500, 1), |(i, _)| i as f64);
    let predictions = model.predict(many.view()).unwrap();
    assert_eq!(predictions.len(), 2500);
    for (i, p) in predictions.iter().enumerate() {
        assert_relative_eq!(*p, 2.0 * i as f64 + 3.0, epsilon = 1e-6);
    }
}

#[test]
fn test_fit_constant_target() {
    let x = array![[1.0], [2.0], [3.0]];
    let y = array![4.0, 4.0, 4.0];
    let mut model =
        LinearRegression::new(true, 0.01, 1000, 1e-6, RegressionSolver::NormalEquation).unwrap();
    model.fit(x.view(), y.view()).unwrap();
    assert_abs_diff_eq!(model.get_coefficients().unwrap()[0], 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(model.get_intercept().unwrap(), 4.0, epsilon = 1e-9);
}

#[test]
fn test_predict_line() {
    let x = array![0.0, 1.0, -2.0];
    assert_eq!(predict_line(x.view(), 3.0, 1.0), array![1.0, 4.0, -5.0]);
}

#[test]
fn test_regression_solver_serde_roundtrip() {
    let json = serde_json::to_string(&RegressionSolver::NormalEquation).unwrap();
    let back: RegressionSolver = serde_json::from_str(&json).unwrap();
    assert_eq!(back, RegressionSolver::NormalEquation);
    assert_eq!(RegressionSolver::default(), RegressionSolver::GradientDescent);
}
