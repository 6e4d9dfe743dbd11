//! Selection and row-argument models shared by every selector.
//!
//! # Core Types
//!
//! - `Selection`: The ordered set of selected keys carried by signals
//! - `SelectionPolicy`: Selection mode plus the empty-selection rule
//! - `SelectionState`: One selector's selection under its policy
//! - `ListItemArgs` / `ArgsConverter`: What a list widget needs to draw a row

mod args;
pub mod selection;

pub use args::{category_args, item_args, ArgsConverter, ListItemArgs, DEFAULT_ROW_HEIGHT};
pub use selection::{Selection, SelectionMode, SelectionPolicy, SelectionState};
