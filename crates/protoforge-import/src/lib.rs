//! Protoforge Import
//!
//! Derives starter prototypes from sprite bundle folders.
//!
//! Folder `big_red_door.rsi` becomes:
//!
//! ```text
//! - type: entity
//!   id: BigRedDoor
//!   name: big red door
//!   description: ''
//!   components:
//!   - type: Sprite
//!     sprite: ''
//!   - type: Icon
//!     sprite: ''
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod importer;
pub mod naming;

pub use error::{ImportError, ImportResult};
pub use importer::{
    from_folder, from_rsi, ImportSettings, RsiImporter, BUNDLE_COMPONENTS, SPRITE_FIELD,
};
pub use naming::{bundle_stem, display_name, pascal_case};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
