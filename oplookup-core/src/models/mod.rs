//! Data models for 1Password Connect resources
//!
//! These types mirror the JSON shapes returned by the Connect API. They are
//! read-only snapshots: nothing in this crate mutates or persists them.

mod item;
mod vault;

pub use item::{Field, Item, ItemSummary, Section, SectionRef};
pub use vault::{Vault, VaultRef};
