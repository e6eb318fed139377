//! PyO3 wrapper for TunedRng

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::rng::{BitSource, RngError, ShiftPair, TunedRng};
use crate::tuning::OfflineTuner;

fn to_py_err(e: RngError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Python wrapper for the tuned generator
///
/// # Example (from Python)
///
/// ```python
/// from tuned_rng_core_rs import TunedRng
///
/// rng = TunedRng(0xDEADBEEF, 0xBEEFDEAD, (4, 58))
/// roll = rng.next_int_range(1, 7)
/// ```
#[pyclass(name = "TunedRng")]
pub struct PyTunedRng {
    inner: TunedRng,
}

#[pymethods]
impl PyTunedRng {
    /// Create a generator; `(0, 0)` selects the default pair, `(1, 1)` tunes
    #[new]
    #[pyo3(signature = (seed, increment, shift_pair = (0, 0)))]
    fn new(seed: i64, increment: i64, shift_pair: (i32, i32)) -> Self {
        Self {
            inner: TunedRng::new(seed, increment, ShiftPair::from(shift_pair)),
        }
    }

    fn next_bits(&mut self, bit_count: u32) -> PyResult<u32> {
        self.inner.next_bits(bit_count).map_err(to_py_err)
    }

    fn next_int(&mut self) -> i32 {
        self.inner.next_int()
    }

    fn next_int_until(&mut self, until: i32) -> PyResult<i32> {
        self.inner.next_int_until(until).map_err(to_py_err)
    }

    fn next_int_range(&mut self, from: i32, until: i32) -> PyResult<i32> {
        self.inner.next_int_range(from, until).map_err(to_py_err)
    }

    fn next_long(&mut self) -> i64 {
        self.inner.next_long()
    }

    fn next_boolean(&mut self) -> bool {
        self.inner.next_boolean()
    }

    fn next_double(&mut self) -> f64 {
        self.inner.next_double()
    }

    fn next_double_range(&mut self, from: f64, until: f64) -> PyResult<f64> {
        self.inner.next_double_range(from, until).map_err(to_py_err)
    }

    /// Resolved shift pair as a tuple
    fn shift_pair(&self) -> (i32, i32) {
        let pair = self.inner.shift_pair();
        (pair.xor_base, pair.rot_base)
    }
}

/// Run the default offline search; returns `(xor_base, rot_base, score)`
#[pyfunction]
pub fn tune_shift_pair(seed: i64, increment: i64) -> (i32, i32, f64) {
    let result = OfflineTuner::default().tune(seed, increment);
    (
        result.shift_pair.xor_base,
        result.shift_pair.rot_base,
        result.score,
    )
}
