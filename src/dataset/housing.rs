use log::warn;
use ndarray::prelude::*;
use std::sync::OnceLock;

/// Raw square footage and sale price records, one `sqft,price` pair per line
const HOUSING_RAW: &str = "\
sqft,price
650,772000
785,998000
1200,1208500
1400,1412000
1540,1534500
1650,1650250
1725,1725000
1850,1857500
2100,2120000
2300,2305000
";

// Use `OnceLock` for thread-safe delayed initialization
static HOUSING_DATA: OnceLock<(Array1<&'static str>, Array2<f64>, Array1<f64>)> =
    OnceLock::new();

/// Parses the raw records into headers, a one-column feature matrix and the target prices.
///
/// Records that do not hold two numeric fields are skipped with a warning.
fn load_housing_internal() -> (Array1<&'static str>, Array2<f64>, Array1<f64>) {
    let mut lines = HOUSING_RAW.trim().lines();
    let headers: Vec<&'static str> = lines
        .next()
        .map(|header| header.split(',').collect())
        .unwrap_or_default();

    let mut square_footage = Vec::new();
    let mut prices = Vec::new();
    for line in lines {
        let mut cols = line.split(',').map(|v| v.trim().parse::<f64>().ok());
        match (cols.next().flatten(), cols.next().flatten()) {
            (Some(sqft), Some(price)) => {
                square_footage.push(sqft);
                prices.push(price);
            }
            _ => warn!("skipping malformed housing record: {:?}", line),
        }
    }

    let features = Array1::from_vec(square_footage).insert_axis(Axis(1));
    (Array1::from_vec(headers), features, Array1::from_vec(prices))
}

/// Loads the housing dataset with memoization
///
/// Ten houses described by their square footage, with the sale price as
/// the target. The relationship is close to linear, which makes the data a
/// convenient check for [`crate::regression::LinearRegression`].
///
/// # Returns
///
/// * A tuple containing:
///     - `&'static Array1<&'static str>`: Column headers (`sqft`, `price`)
///     - `&'static Array2<f64>`: Feature matrix with shape (10, 1) holding square footage
///     - `&'static Array1<f64>`: Sale prices
///
/// # Examples
/// ```rust
/// use rustyimg::dataset::housing::load_housing;
///
/// let (headers, features, prices) = load_housing();
/// assert_eq!(headers.len(), 2);
/// assert_eq!(features.shape(), &[10, 1]);
/// assert_eq!(prices.len(), 10);
/// ```
pub fn load_housing() -> (
    &'static Array1<&'static str>,
    &'static Array2<f64>,
    &'static Array1<f64>,
) {
    let (headers, features, prices) = HOUSING_DATA.get_or_init(load_housing_internal);
    (headers, features, prices)
}

/// Loads the housing dataset and returns owned copies
///
/// For read-only access, prefer `load_housing()` which returns references.
pub fn load_housing_owned() -> (Array1<&'static str>, Array2<f64>, Array1<f64>) {
    let (headers, features, prices) = load_housing();
    (headers.clone(), features.clone(), prices.clone())
}
