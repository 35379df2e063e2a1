//! Binds the scope decoder to JVM class files parsed by `ristretto_classfile`.

pub mod error;
pub mod params;
pub mod pool;

pub use error::{JavaScopeError, Result};
pub use params::{named_parameters, parameter_slots};
pub use pool::{class_pool, decode_method_scopes};
