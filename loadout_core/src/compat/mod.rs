//! Compatibility predicates - Does an item satisfy a lock, a mod or an energy requirement?
//!
//! Everything here is a pure function of its inputs.

mod specialty;

pub use specialty::{
    is_armor2_mod, specialty_mod_slot_display_name, specialty_socket, specialty_socket_metadata,
};

use crate::config::SpecialtySockets;
use crate::item::{masterwork_socket_hashes, Item, PlugDefinition};
use crate::lock::Lock;
use crate::types::{Affinity, EnergyType, SocketCategoryStyle, StatKind};

/// Stat points a full masterwork adds to every stat of a modern armor piece
pub const MASTERWORK_STAT_BONUS: i32 = 2;

/// Whether an item can go through the loadout builder at all (armor only)
pub fn is_loadout_builder_item(item: &Item) -> bool {
    item.slot.in_armor()
}

/// Elemental short name of an item: its energy type for modern armor,
/// otherwise its damage type
pub fn item_affinity(item: &Item) -> Option<Affinity> {
    match item.energy {
        Some(energy) if item.is_destiny2() => Some(energy.energy_type.affinity()),
        _ => item.element.and_then(|element| element.affinity()),
    }
}

/// Whether a mod's energy cost fits the item's energy type
pub fn energy_compatible(item: &Item, mod_def: &PlugDefinition) -> bool {
    let Some(cost) = mod_def.energy_cost() else {
        return true;
    };
    let Some(energy) = item.energy else {
        return true;
    };
    cost.energy_type == energy.energy_type || cost.energy_type == EnergyType::Any
}

/// Can this mod be slotted onto this item?
///
/// Either the item's specialty socket accepts the mod's plug category, or
/// one of its sockets draws from the locked plug set.
pub fn can_slot_mod(
    item: &Item,
    mod_def: &PlugDefinition,
    plug_set_hash: u32,
    specialty: &SpecialtySockets,
) -> bool {
    if !item.is_destiny2() || !energy_compatible(item, mod_def) {
        return false;
    }

    let fits_specialty = match (specialty_socket_metadata(item, specialty), mod_def.plug_category_hash()) {
        (Some(meta), Some(category)) => meta.compatible_plug_category_hashes.contains(&category),
        _ => false,
    };

    fits_specialty
        || item
            .socket_list()
            .iter()
            .any(|socket| socket.offers_plug_set(plug_set_hash))
}

/// Whether an item satisfies a single lock
pub fn matches_lock(item: &Item, lock: &Lock, specialty: &SpecialtySockets) -> bool {
    match lock {
        Lock::Exclude { item: excluded, .. } => item.id != excluded.id,
        Lock::Burn { burn, .. } => item_affinity(item) == Some(burn.affinity),
        Lock::Mod {
            mod_def,
            plug_set_hash,
            ..
        } => can_slot_mod(item, mod_def, *plug_set_hash, specialty),
        Lock::Perk { perk, .. } => {
            item.is_destiny2()
                && item.sockets.is_some()
                && item
                    .socket_list()
                    .iter()
                    .any(|socket| socket.offers_plug(perk.hash))
        }
        Lock::Item { item: pinned, .. } => item.id == pinned.id,
    }
}

/// Sum of the item's base stats over the fixed stat list, each clamped at 0.
///
/// Modern armor (sockets plus energy) gets a masterwork adjustment: a flat
/// bonus per stat when `assume_masterwork` is set, otherwise the stats of
/// inserted plugs outside the energy meter sockets are added on top of base.
/// Legacy items are never adjusted. This approximates the game's stat
/// calculation and is known to drift from it.
pub fn total_base_stats_with_masterwork(item: &Item, assume_masterwork: bool) -> i32 {
    let mut base_stats = [0i32; StatKind::ALL.len()];
    for kind in StatKind::ALL {
        base_stats[kind.index()] = item.stat(kind).map(|s| s.base).unwrap_or(0);
    }

    // Energy marks armor 2.0
    let modern_sockets = match (&item.sockets, item.energy) {
        (Some(sockets), Some(_)) if item.is_destiny2() => Some(sockets),
        _ => None,
    };

    if let Some(sockets) = modern_sockets {
        if assume_masterwork {
            for stat in base_stats.iter_mut() {
                *stat = stat.saturating_add(MASTERWORK_STAT_BONUS);
            }
        } else {
            let masterwork_hashes = masterwork_socket_hashes(sockets, SocketCategoryStyle::EnergyMeter);

            for socket in &sockets.sockets {
                let Some(plug) = &socket.plug else { continue };
                if plug.stats.is_none() || masterwork_hashes.contains(&plug.hash()) {
                    continue;
                }
                for kind in StatKind::ALL {
                    let stat = &mut base_stats[kind.index()];
                    *stat = stat.saturating_add(plug.stat(kind));
                }
            }
        }
    }

    base_stats
        .iter()
        .fold(0i32, |total, &stat| total.saturating_add(stat.max(0)))
}
