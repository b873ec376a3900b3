//! Benchmark crate for rsprintf; see `benches/`.
