//! # ENR Entry Benchmarks
//!
//! | Area | Operations |
//! |------|------------|
//! | Scalars | port encode/decode |
//! | Addresses | generic, structured v4/v6 round-trips |
//! | Records | client dispatch, full record listing |

use criterion::{criterion_group, criterion_main};
use qc_tests::benchmarks::qc_enr_entries;

criterion_group!(benches, qc_enr_entries::register_benchmarks);

criterion_main!(benches);
