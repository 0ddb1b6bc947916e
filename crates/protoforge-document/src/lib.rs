//! Protoforge Document
//!
//! Merges prototype records into existing YAML documents.
//!
//! # Core Operations
//!
//! - **Load**: read an existing document's record list ([`load_records`])
//! - **Append**: add serialized prototypes after the existing records
//!   ([`DocumentWriter::append`])
//! - **Format**: separate top-level records with blank lines
//!   ([`separate_records`])
//!
//! A merge round-trips the document through plain YAML values, so comments
//! and manual formatting in the original file are lost.
//!
//! # Example
//!
//! ```rust,ignore
//! use protoforge_document::append_to_file;
//! use protoforge_model::Prototype;
//!
//! let door = Prototype::new().with_id("BigDoor").with_name("big door");
//! let report = append_to_file("Resources/Prototypes/doors.yml", &[door])?;
//! println!("{} records", report.total());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod document;
pub mod error;
pub mod format;
pub mod writer;

pub use document::{ensure_document_path, load_records, parse_records, DOCUMENT_EXTENSIONS};
pub use error::{DocumentError, DocumentResult};
pub use format::{separate_records, RECORD_START};
pub use writer::{append_to_file, render_records, AppendReport, DocumentSettings, DocumentWriter};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
