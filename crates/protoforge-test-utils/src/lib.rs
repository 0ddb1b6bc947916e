//! Testing utilities for Protoforge workspace
//!
//! Shared fixtures: throwaway documents, asset bundle trees and sample
//! prototypes.

#![allow(missing_docs)]

use protoforge_model::{Component, Prototype};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Document with two existing records and a comment that a merge drops
pub const SEED_DOCUMENT: &str = "\
# Doors, hand maintained
- type: entity
  id: WoodenDoor
  name: wooden door
  components:
  - type: Sprite
    sprite: Structures/wooden_door.rsi

- type: entity
  parent: WoodenDoor
  id: IronDoor
  name: iron door
  description: Heavier.
  components: []
";

/// Write `contents` to `name` inside a fresh temp dir
pub fn document_with(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    (dir, path)
}

/// Fresh `doors.yml` holding [`SEED_DOCUMENT`]
pub fn seeded_document() -> (TempDir, PathBuf) {
    document_with("doors.yml", SEED_DOCUMENT)
}

/// Temp dir containing one empty directory per bundle name
pub fn bundle_tree(names: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in names {
        create_bundle(dir.path(), name);
    }
    dir
}

/// Create a bundle directory with a minimal meta file
pub fn create_bundle(parent: &Path, name: &str) -> PathBuf {
    let path = parent.join(name);
    fs::create_dir_all(&path).unwrap();
    fs::write(path.join("meta.json"), "{\"version\": 1, \"states\": []}").unwrap();
    path
}

/// Prototype with every fixed field and one component set
pub fn sample_prototype(id: &str) -> Prototype {
    Prototype::new()
        .with_parent("BaseDoor")
        .with_id(id)
        .with_name(id.to_lowercase())
        .with_description("Generated for tests.")
        .with_component(Component::new("Sprite").with_field("sprite", "Structures/door.rsi"))
        .with_component(Component::new("Physics").with_field("mass", 50))
        .with_extra("suffix", "test")
}
