//! Command implementations.

pub mod send;
pub mod watch;

pub use send::run_send;
pub use watch::run_watch;
