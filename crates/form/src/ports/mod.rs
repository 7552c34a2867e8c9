//! Environment boundary: persistence, navigation, and the redirect timer.
//!
//! The core only ever talks to these traits. Hosts plug in their own
//! implementations; the ones here cover headless use and tests.

mod navigator;
mod scheduler;
mod store;

pub use navigator::{LogNavigator, Navigator};
pub use scheduler::{RedirectHandle, RedirectScheduler, TokioScheduler};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, UnavailableStore};
