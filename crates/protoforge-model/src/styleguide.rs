//! Styleguide component ordering
//!
//! The preferred order in which well-known components appear on a
//! prototype. This is a hint only: serialization never reorders components.

/// Well-known component kinds in preferred order
pub const STYLEGUIDE_ORDER: [&str; 6] = [
    "Sprite",
    "Icon",
    "Appearance",
    "SnapGrid",
    "Collidable",
    "Physics",
];

/// Rank of a component kind; unknown kinds rank after every known one
#[must_use]
pub fn styleguide_rank(kind: &str) -> usize {
    STYLEGUIDE_ORDER
        .iter()
        .position(|known| *known == kind)
        .unwrap_or(STYLEGUIDE_ORDER.len())
}
