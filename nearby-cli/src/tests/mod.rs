//! Shared test harness modules for the Nearby CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod categories_unit;
mod helpers;
mod list_unit;
