pub mod core;
pub mod error;
pub mod iterative;
pub mod sensitivity;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
