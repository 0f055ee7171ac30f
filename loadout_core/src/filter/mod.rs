//! Slot filter - Reduce the item pool to the candidates each slot may still use

use crate::compat::{energy_compatible, matches_lock, total_base_stats_with_masterwork};
use crate::config::{BuilderSettings, SpecialtySockets};
use crate::item::Item;
use crate::lock::{Lock, LockedArmor2ModMap, LockedMap};
use crate::types::{EquipmentSlot, ModCategory};
use std::collections::HashMap;

/// Available items grouped by slot
pub type ItemsBySlot = HashMap<EquipmentSlot, Vec<Item>>;

/// Filtered candidates per slot, borrowed from the pool
pub type FilteredItems<'a> = HashMap<EquipmentSlot, Vec<&'a Item>>;

/// The item pinned by an item lock, if the slot has one
pub fn pinned_item(locks: Option<&[Lock]>) -> Option<&Item> {
    locks.unwrap_or(&[]).iter().find_map(|lock| match lock {
        Lock::Item { item, .. } => Some(item.as_ref()),
        _ => None,
    })
}

/// Filter the item pool down given the locks, picked mods and settings.
///
/// Per slot:
/// 1. A slot with an item lock collapses to the pool's copy of that item and is
///    otherwise left alone. A pinned item missing from the pool leaves the
///    slot empty.
/// 2. `admission` is applied to the slot's items; if nothing passes, the whole
///    slot is kept so that valid sets can still be built.
/// 3. Lockable slots then keep only items that satisfy every lock, fit the
///    energy of every mod picked for the slot's mod category, and reach
///    `minimum_stat_total` (class items are exempt from the stat floor).
pub fn filter_items<'a, F>(
    items: Option<&'a ItemsBySlot>,
    locked_map: &LockedMap,
    locked_armor2_mods: &LockedArmor2ModMap,
    settings: &BuilderSettings,
    specialty: &SpecialtySockets,
    admission: F,
) -> FilteredItems<'a>
where
    F: Fn(&Item) -> bool,
{
    let mut filtered: FilteredItems<'a> = HashMap::new();

    let Some(items) = items else {
        return filtered;
    };

    for (&slot, slot_items) in items {
        let locked = locked_map.get(&slot).map(Vec::as_slice);

        if let Some(pinned) = pinned_item(locked) {
            let in_pool: Vec<&Item> = slot_items.iter().find(|item| item.id == pinned.id).into_iter().collect();
            if in_pool.is_empty() {
                log::debug!("{:?} pinned to {} ({}) which is not in the pool", slot, pinned.name, pinned.id);
            } else {
                log::debug!("{:?} pinned to {} ({})", slot, pinned.name, pinned.id);
            }
            filtered.insert(slot, in_pool);
            continue;
        }

        let mut admitted: Vec<&Item> = slot_items.iter().filter(|item| admission(item)).collect();
        if admitted.is_empty() {
            log::debug!(
                "Filter rejected all {} items in {:?}, keeping them all",
                slot_items.len(),
                slot
            );
            admitted = slot_items.iter().collect();
        }
        filtered.insert(slot, admitted);
    }

    for &slot in EquipmentSlot::lockable() {
        let locked = locked_map.get(&slot).map(Vec::as_slice).unwrap_or(&[]);
        if pinned_item(Some(locked)).is_some() {
            continue;
        }

        let locked_mods = ModCategory::for_slot(slot)
            .and_then(|category| locked_armor2_mods.get(&category))
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        let Some(candidates) = filtered.get_mut(&slot) else {
            continue;
        };

        let before = candidates.len();
        candidates.retain(|item| {
            locked.iter().all(|lock| matches_lock(item, lock, specialty))
                && locked_mods
                    .iter()
                    .all(|locked_mod| energy_compatible(item, &locked_mod.mod_def))
                && (slot == EquipmentSlot::ClassItem
                    || total_base_stats_with_masterwork(item, settings.assume_masterwork)
                        >= settings.minimum_stat_total)
        });

        log::debug!(
            "{:?}: kept {} of {} items after locks and stat floor",
            slot,
            candidates.len(),
            before
        );
    }

    filtered
}
