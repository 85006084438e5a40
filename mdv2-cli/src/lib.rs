//! Library side of the mdv2 CLI: inspection transforms, the timing harness and
//! the built-in samples. Kept out of main.rs so they can be tested directly.

pub mod bench;
pub mod samples;
pub mod transforms;
