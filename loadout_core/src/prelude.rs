//! Prelude module for convenient imports
//!
//! ```rust
//! use loadout_core::prelude::*;
//! ```

// Core types
pub use crate::item::{Item, Plug, PlugDefinition, Socket};
pub use crate::types::{Affinity, EnergyType, EquipmentSlot, ModCategory, StatKind};

// Locks
pub use crate::lock::{add_lock, remove_lock, Lock, LockedArmor2ModMap, LockedMap};

// Filtering
pub use crate::filter::{filter_items, ItemsBySlot};
pub use crate::perks::filtered_perks_and_plug_sets;
pub use crate::mixes::enumerate_stat_mixes;

// Config
pub use crate::config::{BuilderSettings, SpecialtySockets};
