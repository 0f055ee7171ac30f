//! loadout_core - Item filtering and lock reconciliation for loadout building
//!
//! This library provides:
//! - Lock: user constraints on a slot, with pure add/remove editing
//! - Compatibility predicates: lock, mod and energy matching for items
//! - filter_items: per-slot candidate pools that satisfy every lock
//! - filtered_perks_and_plug_sets: perks and mod plug sets still selectable
//! - enumerate_stat_mixes: stat mixes reachable by swapping perks

pub mod compat;
pub mod config;
pub mod filter;
pub mod item;
pub mod lock;
pub mod mixes;
pub mod perks;
pub mod prelude;
pub mod stats;
pub mod types;

// Re-export core types for convenience
pub use compat::{
    can_slot_mod, energy_compatible, is_loadout_builder_item, item_affinity, matches_lock,
    total_base_stats_with_masterwork,
};
pub use config::{BuilderConfig, BuilderSettings, ConfigError, ModSocketMetadata, SpecialtySockets};
pub use filter::{filter_items, FilteredItems, ItemsBySlot};
pub use item::{Item, ItemSockets, ItemStat, Plug, PlugDefinition, Socket};
pub use lock::{add_lock, locks_equal, remove_lock, Lock, LockKind, LockedArmor2Mod, LockedArmor2ModMap, LockedMap};
pub use mixes::{enumerate_stat_mixes, find_alt_perks_for_mix};
pub use perks::{filtered_perks_and_plug_sets, FilteredPerksAndPlugSets};
pub use stats::StatMix;
pub use types::{Affinity, EnergyType, EquipmentSlot, ItemId, ModCategory, StatKind, TierType};
