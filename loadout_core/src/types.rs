//! Core types shared by the filtering, locking and reconciliation modules

use serde::{Deserialize, Serialize};
use std::fmt;

/// Equipment slot (inventory bucket) an item lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    Helmet,
    Gauntlets,
    Chest,
    Leg,
    ClassItem,
    Kinetic,
    Energy,
    Power,
    Ghost,
}

impl EquipmentSlot {
    /// Get all equipment slots
    pub fn all() -> &'static [EquipmentSlot] {
        &[
            EquipmentSlot::Helmet,
            EquipmentSlot::Gauntlets,
            EquipmentSlot::Chest,
            EquipmentSlot::Leg,
            EquipmentSlot::ClassItem,
            EquipmentSlot::Kinetic,
            EquipmentSlot::Energy,
            EquipmentSlot::Power,
            EquipmentSlot::Ghost,
        ]
    }

    /// Slots that accept locks in the loadout builder
    pub fn lockable() -> &'static [EquipmentSlot] {
        &[
            EquipmentSlot::Helmet,
            EquipmentSlot::Gauntlets,
            EquipmentSlot::Chest,
            EquipmentSlot::Leg,
            EquipmentSlot::ClassItem,
        ]
    }

    /// Whether this slot belongs to the armor category
    pub fn in_armor(self) -> bool {
        Self::lockable().contains(&self)
    }
}

/// Plug category of armor 2.0 mods, one per armor slot plus general mods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModCategory {
    General,
    Helmet,
    Gauntlets,
    Chest,
    Leg,
    ClassItem,
}

impl ModCategory {
    pub const ALL: [ModCategory; 6] = [
        ModCategory::General,
        ModCategory::Helmet,
        ModCategory::Gauntlets,
        ModCategory::Chest,
        ModCategory::Leg,
        ModCategory::ClassItem,
    ];

    pub fn plug_category_hash(self) -> u32 {
        match self {
            ModCategory::General => 2487827355,
            ModCategory::Helmet => 2912171003,
            ModCategory::Gauntlets => 3422420680,
            ModCategory::Chest => 1526202480,
            ModCategory::Leg => 2111701510,
            ModCategory::ClassItem => 912441879,
        }
    }

    pub fn from_plug_category_hash(hash: u32) -> Option<ModCategory> {
        Self::ALL.into_iter().find(|c| c.plug_category_hash() == hash)
    }

    /// Mod category that slots into an armor slot
    pub fn for_slot(slot: EquipmentSlot) -> Option<ModCategory> {
        match slot {
            EquipmentSlot::Helmet => Some(ModCategory::Helmet),
            EquipmentSlot::Gauntlets => Some(ModCategory::Gauntlets),
            EquipmentSlot::Chest => Some(ModCategory::Chest),
            EquipmentSlot::Leg => Some(ModCategory::Leg),
            EquipmentSlot::ClassItem => Some(ModCategory::ClassItem),
            EquipmentSlot::Kinetic
            | EquipmentSlot::Energy
            | EquipmentSlot::Power
            | EquipmentSlot::Ghost => None,
        }
    }
}

/// Elemental energy type of an armor piece or the cost type of a mod
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyType {
    /// Wildcard, fits any item energy
    Any,
    Arc,
    Thermal,
    Void,
}

impl EnergyType {
    pub fn affinity(self) -> Affinity {
        match self {
            EnergyType::Any => Affinity::Any,
            EnergyType::Arc => Affinity::Arc,
            EnergyType::Thermal => Affinity::Solar,
            EnergyType::Void => Affinity::Void,
        }
    }
}

/// Damage type carried by legacy items and weapons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    None,
    Kinetic,
    Arc,
    Thermal,
    Void,
    Raid,
}

impl DamageType {
    /// `None` has no affinity name
    pub fn affinity(self) -> Option<Affinity> {
        match self {
            DamageType::None => None,
            DamageType::Kinetic => Some(Affinity::Kinetic),
            DamageType::Arc => Some(Affinity::Arc),
            DamageType::Thermal => Some(Affinity::Solar),
            DamageType::Void => Some(Affinity::Void),
            DamageType::Raid => Some(Affinity::Raid),
        }
    }
}

/// Short elemental name shared by energy and damage types, used by burn locks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Affinity {
    Any,
    Kinetic,
    Arc,
    Solar,
    Void,
    Raid,
}

impl Affinity {
    pub fn short_name(self) -> &'static str {
        match self {
            Affinity::Any => "any",
            Affinity::Kinetic => "kinetic",
            Affinity::Arc => "arc",
            Affinity::Solar => "solar",
            Affinity::Void => "void",
            Affinity::Raid => "raid",
        }
    }
}

impl fmt::Display for Affinity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Item rarity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierType {
    #[default]
    Unknown,
    Currency,
    Basic,
    Common,
    Rare,
    Superior,
    Exotic,
}

/// Sub-type tag of an inventory definition, only the cosmetic ones matter here
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemSubType {
    #[default]
    None,
    Ornament,
    Shader,
    Mask,
}

/// Display style of a socket category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocketCategoryStyle {
    #[default]
    Unknown,
    Reusable,
    Consumable,
    Unlockable,
    Intrinsic,
    EnergyMeter,
    LargePerk,
    Abilities,
    Supers,
}

/// Armor stats that make up a stat mix, in their fixed display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Mobility,
    Resilience,
    Recovery,
    Discipline,
    Intellect,
    Strength,
}

/// Number of stats in a stat mix
pub const STAT_COUNT: usize = 6;

impl StatKind {
    /// Fixed stat order. Totals are only ever summed over this list.
    pub const ALL: [StatKind; STAT_COUNT] = [
        StatKind::Mobility,
        StatKind::Resilience,
        StatKind::Recovery,
        StatKind::Discipline,
        StatKind::Intellect,
        StatKind::Strength,
    ];

    /// Manifest stat hash
    pub fn hash(self) -> u32 {
        match self {
            StatKind::Mobility => 2996146975,
            StatKind::Resilience => 392767087,
            StatKind::Recovery => 1943323491,
            StatKind::Discipline => 1735777505,
            StatKind::Intellect => 144602215,
            StatKind::Strength => 4244567218,
        }
    }

    /// Position of this stat in [`StatKind::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            StatKind::Mobility => "Mobility",
            StatKind::Resilience => "Resilience",
            StatKind::Recovery => "Recovery",
            StatKind::Discipline => "Discipline",
            StatKind::Intellect => "Intellect",
            StatKind::Strength => "Strength",
        }
    }
}

/// Unique instance identifier of an item
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId(s)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
