//! Test support utilities for pgpdrop integration tests.
//!
//! Provides key-ring fixtures, error assertions, log capture and an
//! isolated gpg home for interop tests, and raw packet editing.

#![allow(dead_code)]

pub mod assertions;
pub mod capture;
pub mod fixtures;
pub mod gpg;
pub mod skip;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use capture::*;
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use gpg::*;
#[allow(unused_imports)]
pub use packets::*;
