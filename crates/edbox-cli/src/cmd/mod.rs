pub mod completions;
pub mod identity;
pub mod thread;
