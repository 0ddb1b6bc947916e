//! Protoforge Model
//!
//! In-memory prototype records and their serialization contract.
//!
//! # Core Concepts
//!
//! - [`Component`]: one attached behavior, a kind plus ordered fields
//! - [`Prototype`]: an entity definition with a fixed serialized key order
//! - [`FieldValue`] / [`Fields`]: schema-free, insertion-ordered field data
//!
//! # Example
//!
//! ```
//! use protoforge_model::{Component, Prototype};
//!
//! let door = Prototype::new()
//!     .with_id("BigDoor")
//!     .with_name("big door")
//!     .with_component(Component::new("Sprite").with_field("sprite", "door.rsi"));
//!
//! let record = door.serialize();
//! assert_eq!(record.keys().next().map(String::as_str), Some("type"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod component;
pub mod prototype;
pub mod styleguide;
pub mod value;

pub use component::{Component, TYPE_KEY};
pub use prototype::{Prototype, DEFAULT_KIND, FIXED_KEYS};
pub use styleguide::{styleguide_rank, STYLEGUIDE_ORDER};
pub use value::{fields_to_yaml, FieldValue, Fields};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
