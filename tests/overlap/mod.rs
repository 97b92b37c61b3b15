//! Overlapping-execution proofs

mod proof;
