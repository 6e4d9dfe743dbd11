//! Core systems for listcascade.
//!
//! This crate provides the reactive plumbing the cascade is built on:
//!
//! - **Signal/Slot System**: Synchronous, type-safe observer registration
//! - **Property System**: Interior-mutable component state
//! - **Logging**: `tracing` target names for per-subsystem filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use listcascade_core::Signal;
//!
//! // Create a signal that notifies when a selection changes
//! let selection_changed = Signal::<Vec<String>>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = selection_changed.connect(|keys| {
//!     println!("Selected: {:?}", keys);
//! });
//!
//! // Emit the signal; every slot runs before emit returns
//! selection_changed.emit(vec!["citrus".to_string()]);
//!
//! // Disconnect when done
//! selection_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use listcascade_core::{Property, Signal};
//!
//! struct Counter {
//!     value: Property<i32>,
//!     value_changed: Signal<i32>,
//! }
//!
//! impl Counter {
//!     fn increment(&self) {
//!         // Emit after the write so the lock is released first
//!         let new_value = self.value.update(|v| {
//!             *v += 1;
//!             *v
//!         });
//!         self.value_changed.emit(new_value);
//!     }
//! }
//!
//! let counter = Counter { value: Property::new(0), value_changed: Signal::new() };
//! counter.increment();
//! assert_eq!(counter.value.with(|v| *v), 1);
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod signal;

pub use error::SignalError;
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
