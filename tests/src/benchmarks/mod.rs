//! # Quantum-Chain Benchmarks
//!
//! Performance benchmarks for the ENR entry layer.
