//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a slice of the client
//! surface against a scripted daemon transport. No socket or device is
//! required.

mod error_tests;
mod exec_tests;
mod file_tests;
mod mock_daemon;
mod path_tests;
mod rom_tests;
