//! Locks - User constraints on what may go in a slot

mod editor;

pub use editor::{add_lock, locks_equal, remove_lock};

use crate::item::{Item, PlugDefinition};
use crate::types::{Affinity, EquipmentSlot, ModCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Elemental affinity required by a burn lock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnItem {
    pub affinity: Affinity,
    #[serde(default)]
    pub display_name: String,
}

/// A single constraint on a slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Lock {
    /// Pin exactly this item
    Item {
        item: Box<Item>,
        bucket: EquipmentSlot,
    },
    /// Never use this item
    Exclude {
        item: Box<Item>,
        bucket: EquipmentSlot,
    },
    /// Require an elemental affinity
    Burn {
        burn: BurnItem,
        bucket: EquipmentSlot,
    },
    /// Require a socket that offers this perk
    Perk {
        perk: PlugDefinition,
        bucket: EquipmentSlot,
    },
    /// Require a free, energy compatible socket drawing from `plug_set_hash`
    Mod {
        #[serde(rename = "mod")]
        mod_def: PlugDefinition,
        plug_set_hash: u32,
        bucket: EquipmentSlot,
    },
}

/// Discriminant of [`Lock`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockKind {
    Item,
    Exclude,
    Burn,
    Perk,
    Mod,
}

impl LockKind {
    pub const ALL: [LockKind; 5] = [
        LockKind::Item,
        LockKind::Exclude,
        LockKind::Burn,
        LockKind::Perk,
        LockKind::Mod,
    ];
}

impl Lock {
    /// Pin an item in its own slot
    pub fn item(item: Item) -> Self {
        let bucket = item.slot;
        Lock::Item {
            item: Box::new(item),
            bucket,
        }
    }

    /// Exclude an item from its own slot
    pub fn exclude(item: Item) -> Self {
        let bucket = item.slot;
        Lock::Exclude {
            item: Box::new(item),
            bucket,
        }
    }

    pub fn burn(affinity: Affinity, bucket: EquipmentSlot) -> Self {
        Lock::Burn {
            burn: BurnItem {
                affinity,
                display_name: affinity.short_name().to_string(),
            },
            bucket,
        }
    }

    pub fn perk(perk: PlugDefinition, bucket: EquipmentSlot) -> Self {
        Lock::Perk { perk, bucket }
    }

    pub fn mod_lock(mod_def: PlugDefinition, plug_set_hash: u32, bucket: EquipmentSlot) -> Self {
        Lock::Mod {
            mod_def,
            plug_set_hash,
            bucket,
        }
    }

    pub fn kind(&self) -> LockKind {
        match self {
            Lock::Item { .. } => LockKind::Item,
            Lock::Exclude { .. } => LockKind::Exclude,
            Lock::Burn { .. } => LockKind::Burn,
            Lock::Perk { .. } => LockKind::Perk,
            Lock::Mod { .. } => LockKind::Mod,
        }
    }

    /// Slot this lock applies to
    pub fn bucket(&self) -> EquipmentSlot {
        match self {
            Lock::Item { bucket, .. }
            | Lock::Exclude { bucket, .. }
            | Lock::Burn { bucket, .. }
            | Lock::Perk { bucket, .. }
            | Lock::Mod { bucket, .. } => *bucket,
        }
    }
}

/// Active locks per slot. A slot without locks has no entry.
pub type LockedMap = HashMap<EquipmentSlot, Vec<Lock>>;

/// An armor 2.0 mod picked in the mod picker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LockedArmor2Mod {
    /// Distinguishes repeated picks of the same mod
    pub key: u32,
    #[serde(rename = "mod")]
    pub mod_def: PlugDefinition,
    pub category: ModCategory,
}

/// Picked armor 2.0 mods per mod category
pub type LockedArmor2ModMap = HashMap<ModCategory, Vec<LockedArmor2Mod>>;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kind: LockKind) -> Lock {
        let helmet = Item::new("h1", 1, "Helm", EquipmentSlot::Helmet);
        match kind {
            LockKind::Item => Lock::item(helmet),
            LockKind::Exclude => Lock::exclude(helmet),
            LockKind::Burn => Lock::burn(Affinity::Arc, EquipmentSlot::Helmet),
            LockKind::Perk => Lock::perk(PlugDefinition::new(10, "Perk", 1), EquipmentSlot::Helmet),
            LockKind::Mod => Lock::mod_lock(
                PlugDefinition::new(20, "Mod", ModCategory::Helmet.plug_category_hash()),
                300,
                EquipmentSlot::Helmet,
            ),
        }
    }

    #[test]
    fn test_every_kind_round_trips_through_kind() {
        for kind in LockKind::ALL {
            let lock = sample(kind);
            assert_eq!(lock.kind(), kind);
            assert_eq!(lock.bucket(), EquipmentSlot::Helmet);
        }
    }

    #[test]
    fn test_lock_json_is_tagged_by_type() {
        let lock = sample(LockKind::Mod);
        let value = serde_json::to_value(&lock).unwrap();
        assert_eq!(value["type"], "mod");
        assert_eq!(value["mod"]["hash"], 20);
        assert_eq!(value["plug_set_hash"], 300);

        let back: Lock = serde_json::from_value(value).unwrap();
        assert_eq!(back, lock);
    }

    #[test]
    fn test_item_lock_uses_item_slot() {
        let boots = Item::new("b", 2, "Boots", EquipmentSlot::Leg);
        assert_eq!(Lock::item(boots).bucket(), EquipmentSlot::Leg);
    }
}
