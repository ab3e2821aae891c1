//! FleetShape flat configuration form
//!
//! The infrastructure engine keeps resource attributes as a flat map of dotted
//! keys to strings. This crate decodes that form into a dynamic value tree that
//! API converters can walk, and encodes trees back into flat maps.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐  FlatMap::expand  ┌──────────────────────┐
//! │  FlatMap             │ ────────────────▶ │  Value / Record      │
//! │  "listener.#" = "1"  │                   │  List, Map, Set, ... │
//! │  "listener.0.lb_port"│ ◀──────────────── │                      │
//! └──────────────────────┘     flatten       └──────────┬───────────┘
//!                                                       │
//!                                           fleetshape-aws converters
//! ```

pub mod error;
mod expand;
pub mod flatten;
pub mod hashcode;
pub mod map;
pub mod set;
pub mod value;

// Re-exports
pub use error::{Result, ShapeError};
pub use flatten::{flatten, flatten_all};
pub use map::FlatMap;
pub use set::{HashFn, StringSet};
pub use value::{Record, Value};
