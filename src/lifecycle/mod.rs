//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     KittyConfig → basic router + routes → options → Server
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     trigger → server stops accepting → drains in-flight requests → exits
//! ```

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{recv_shutdown, Shutdown};
pub use signals::{spawn_signal_handler, wait_for_signal};
pub use startup::{configure_server, StartupError};
