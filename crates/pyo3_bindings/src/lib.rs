//! PyO3 bindings for recur-scan Rust components.
//!
//! Exposes the feature engine to Python:
//! - Transaction record
//! - Per-transaction feature dictionaries
//! - Batch feature computation
//! - Logging setup

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;
use tracing_subscriber::EnvFilter;

use recur_core::{Error as RustError, Transaction as RustTransaction, TransactionId};
use recur_features::{FeatureEngine, FeatureMap, FeatureValue};

fn to_py_err(err: RustError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

// ============================================================================
// Python-exposed Types
// ============================================================================

/// Transaction id as passed from Python: `int` or `str`.
#[derive(FromPyObject)]
enum PyTransactionId {
    Int(i64),
    Str(String),
}

impl From<PyTransactionId> for TransactionId {
    fn from(id: PyTransactionId) -> Self {
        match id {
            PyTransactionId::Int(id) => TransactionId::Int(id),
            PyTransactionId::Str(id) => TransactionId::Str(id),
        }
    }
}

/// A single transaction from a user's history.
#[pyclass]
#[derive(Clone)]
pub struct Transaction {
    pub id: TransactionId,
    #[pyo3(get, set)]
    pub user_id: String,
    #[pyo3(get, set)]
    pub name: String,
    #[pyo3(get, set)]
    pub amount: f64,
    /// ISO `YYYY-MM-DD` date.
    #[pyo3(get, set)]
    pub date: String,
}

#[pymethods]
impl Transaction {
    #[new]
    fn new(
        id: PyTransactionId,
        user_id: String,
        name: String,
        amount: f64,
        date: String,
    ) -> PyResult<Self> {
        let tx = Transaction {
            id: id.into(),
            user_id,
            name,
            amount,
            date,
        };
        // Reject bad dates at construction rather than at feature time
        tx.to_rust()?;
        Ok(tx)
    }

    /// Identifier, returned as the `int` or `str` it was given as.
    #[getter]
    fn id(&self, py: Python<'_>) -> PyObject {
        match &self.id {
            TransactionId::Int(id) => (*id).into_py(py),
            TransactionId::Str(id) => id.as_str().into_py(py),
        }
    }

    #[setter]
    fn set_id(&mut self, id: PyTransactionId) {
        self.id = id.into();
    }

    fn __repr__(&self) -> String {
        let id = match &self.id {
            TransactionId::Int(id) => id.to_string(),
            TransactionId::Str(id) => format!("{id:?}"),
        };
        format!(
            "Transaction(id={}, user_id={:?}, name={:?}, amount={}, date={:?})",
            id, self.user_id, self.name, self.amount, self.date
        )
    }
}

impl Transaction {
    fn to_rust(&self) -> PyResult<RustTransaction> {
        RustTransaction::parse(
            self.id.clone(),
            self.user_id.as_str(),
            self.name.as_str(),
            self.amount,
            &self.date,
        )
        .map_err(to_py_err)
    }
}

fn to_rust_all(transactions: &[Transaction]) -> PyResult<Vec<RustTransaction>> {
    transactions.iter().map(Transaction::to_rust).collect()
}

fn features_to_dict<'py>(py: Python<'py>, features: &FeatureMap) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    for (name, value) in features {
        match *value {
            FeatureValue::Count(n) => dict.set_item(name.as_str(), n)?,
            FeatureValue::Real(x) => dict.set_item(name.as_str(), x)?,
        }
    }
    Ok(dict)
}

// ============================================================================
// Python-exposed Engine Classes
// ============================================================================

/// Feature engine with a fixed amount-range tolerance.
#[pyclass]
pub struct PyFeatureEngine {
    inner: FeatureEngine,
}

#[pymethods]
impl PyFeatureEngine {
    #[new]
    #[pyo3(signature = (tolerance = 0.1))]
    fn new(tolerance: f64) -> PyResult<Self> {
        Ok(PyFeatureEngine {
            inner: FeatureEngine::with_tolerance(tolerance).map_err(to_py_err)?,
        })
    }

    /// Range tolerance used for the amount-range features.
    #[getter]
    fn tolerance(&self) -> f64 {
        self.inner.tolerance()
    }

    /// Compute the feature dictionary for one transaction.
    ///
    /// Raises ValueError if `transactions` is empty or lacks `transaction`.
    fn get_features<'py>(
        &self,
        py: Python<'py>,
        transaction: &Transaction,
        transactions: Vec<Transaction>,
    ) -> PyResult<Bound<'py, PyDict>> {
        let target = transaction.to_rust()?;
        let all = to_rust_all(&transactions)?;
        let features = self.inner.try_get_features(&target, &all).map_err(to_py_err)?;
        features_to_dict(py, &features)
    }

    /// Compute feature dictionaries for every transaction in the collection.
    fn get_features_for_all<'py>(
        &self,
        py: Python<'py>,
        transactions: Vec<Transaction>,
    ) -> PyResult<Vec<Bound<'py, PyDict>>> {
        let all = to_rust_all(&transactions)?;
        self.inner
            .get_features_for_all(&all)
            .iter()
            .map(|features| features_to_dict(py, features))
            .collect()
    }
}

// ============================================================================
// Module Functions
// ============================================================================

/// Compute the feature dictionary for one transaction.
#[pyfunction]
#[pyo3(signature = (transaction, transactions, tolerance = 0.1))]
fn get_features<'py>(
    py: Python<'py>,
    transaction: &Transaction,
    transactions: Vec<Transaction>,
    tolerance: f64,
) -> PyResult<Bound<'py, PyDict>> {
    PyFeatureEngine::new(tolerance)?.get_features(py, transaction, transactions)
}

/// Install a tracing subscriber filtered by `level` (e.g. "debug",
/// "recur_features=debug").
#[pyfunction]
#[pyo3(signature = (level = "info"))]
fn init_logging(level: &str) -> PyResult<()> {
    let filter = EnvFilter::try_new(level).map_err(|e| PyValueError::new_err(e.to_string()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| PyRuntimeError::new_err(e.to_string()))
}

// ============================================================================
// Module Definition
// ============================================================================

/// recur-scan core - Rust feature engine for Python.
#[pymodule]
fn recur_scan_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Types
    m.add_class::<Transaction>()?;

    // Engine classes
    m.add_class::<PyFeatureEngine>()?;

    // Functions
    m.add_function(wrap_pyfunction!(get_features, m)?)?;
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;

    Ok(())
}
