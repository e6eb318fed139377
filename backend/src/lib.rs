//! Tuned RNG Core - Rust Engine
//!
//! Deterministic, shift-pair tunable pseudo-random bit generation with an
//! offline parameter search and a range-keyed generator registry.
//!
//! # Architecture
//!
//! - **rng**: Seed mixing, shift pairs, the mixing network and the draw contract
//! - **tuning**: Offline shift-pair search and persisted tuning records
//! - **registry**: One generator per output range
//! - **store**: Read side of persisted tuning tables
//! - **events**: Registry event log
//! - **shuffle**: Swap-count shuffle built on the draw contract
//!
//! # Critical Invariants
//!
//! 1. Same seed, increment and shift pair produce the same sequence
//! 2. The derived LCG increment is always odd
//! 3. Every derived shift amount lies in `[0, 63]`
//! 4. NOT cryptographically secure

// Module declarations
pub mod config;
pub mod events;
pub mod registry;
pub mod rng;
pub mod shuffle;
pub mod store;
pub mod tuning;

// Re-exports for convenience
pub use config::{RegistryConfig, TunerConfig};
pub use events::{EventLog, RecordSource, RegistryEvent};
pub use registry::{InstanceRegistry, SharedRng};
pub use rng::{resolve_shift_pair, BitSource, RngError, ShiftPair, TunedRng};
pub use shuffle::shuffle;
pub use store::{JsonFileStore, MemoryTuneStore, StoreError, TuneStore, TuneTable};
pub use tuning::{OfflineTuner, RangeKey, TuneError, TuneResult};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn tuned_rng_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyTunedRng>()?;
    m.add_function(wrap_pyfunction!(ffi::generator::tune_shift_pair, m)?)?;
    Ok(())
}
