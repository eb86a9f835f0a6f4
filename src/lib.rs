//! Semi-monthly salary and budget engine.
//!
//! This crate computes the two pay periods of a month (26th-10th and
//! 11th-25th), the working days and gross wage in each, net salary after
//! fixed statutory contributions, allowances and a simplified withholding
//! tax, and a percentage split of the net salary across budget categories.
//! A small form layer keeps the calculator draft in a pluggable key/value
//! store so a session survives restarts.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod session;
pub mod storage;
