pub mod clock;
pub mod paths;
pub mod tracing_setup;
