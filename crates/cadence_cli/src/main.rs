//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `cadence_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use cadence_core::{default_collection, Category};

fn main() {
    let defaults = default_collection();
    println!("cadence_core version={}", cadence_core::core_version());
    println!("list version={}", defaults.version);
    for category in Category::ALL {
        println!("{category} items={}", defaults.list(category).len());
    }
}
