//! Config → tokens → (runtime injection) → foreground child.
pub mod process;
pub mod runtime;
pub mod settings;
mod startup;
pub mod tokenizer;

pub use startup::{
    prepare_command, run_launcher, run_with_locator, LaunchExit, INTERNAL_FAILURE_CODE,
};
