#![forbid(unsafe_code)]

mod demo;
pub mod workload;

pub use demo::{DemoOutcome, demo_scenario};
pub use workload::{StressReport, Workload};
