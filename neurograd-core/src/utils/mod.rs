//! Helpers shared by the unit tests, the integration tests and the demo.

pub mod testing;
