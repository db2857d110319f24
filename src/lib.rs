//! Evolution - computational comparison of mutation models
//!
//! How long does random mutation take to find a fixed genome? This crate
//! measures it two ways, all genes at once versus one gene at a time, and
//! reports mean mutations, wall time, and the implied years to evolve.

pub mod build_info;
pub mod constants;
pub mod simulator;
