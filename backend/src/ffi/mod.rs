//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings exposing the tuned generator and the offline tuner to
//! Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: only the generator contract and tuning entry points
//! 2. **Simple types**: integers, floats and tuples at the boundary
//! 3. **Safe errors**: precondition violations become `ValueError`

pub mod generator;
