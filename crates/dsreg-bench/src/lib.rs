//! Workload generator and benchmark utilities for `dsreg-core`.
//!
//! This crate provides deterministic generation of union/find operation
//! sequences and weighted graphs for benchmarking and property testing.

pub mod correctness;
pub mod generator;

pub use generator::{
    Op, Shape, SizeTier, Workload, WorkloadConfig, generate_weighted_graph, generate_workload,
    replay,
};
