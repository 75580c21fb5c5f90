pub mod orchestration;

pub use orchestration::{bump, resolve_raw_input, BumpOutcome, BumpRequest};
