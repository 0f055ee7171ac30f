//! Perk and mod-socket reconciliation
//!
//! Given the locks already placed on a slot and the slot's candidates, work
//! out which further perks and mod plug sets can still be picked.

mod exclusions;

pub use exclusions::{
    filter_plugs, ARCHETYPE_PLUG_CATEGORY, EMPTY_MOD_SLOT_PLUG_CATEGORY, MASTERWORK_IDENTIFIER,
    MODIFICATIONS_BUCKET, UNWANTED_ITEM_CATEGORIES, UNWANTED_PLUG_CATEGORIES,
};

use crate::compat::energy_compatible;
use crate::item::{Item, PlugDefinition};
use crate::lock::Lock;
use std::collections::{HashMap, HashSet};

/// Perks and plug sets still selectable in a slot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredPerksAndPlugSets {
    /// Perks on items that also carry every locked perk, keyed by plug hash
    pub perks: HashMap<u32, PlugDefinition>,
    /// Plug sets left free on items that can hold every locked mod
    pub plug_set_hashes: HashSet<u32>,
}

impl FilteredPerksAndPlugSets {
    pub fn has_perk(&self, plug_hash: u32) -> bool {
        self.perks.contains_key(&plug_hash)
    }

    pub fn has_plug_set(&self, plug_set_hash: u32) -> bool {
        self.plug_set_hashes.contains(&plug_set_hash)
    }

    pub fn is_empty(&self) -> bool {
        self.perks.is_empty() && self.plug_set_hashes.is_empty()
    }
}

/// The mod sockets of one item, as a multiset of plug set hashes.
///
/// Each locked mod claims one socket. Sockets sharing a plug set are
/// interchangeable, so claiming greedily is enough.
#[derive(Debug, Clone, Default)]
struct PlugSetPool {
    plug_set_hashes: Vec<u32>,
}

impl PlugSetPool {
    fn for_item(item: &Item) -> Self {
        let plug_set_hashes = item
            .socket_list()
            .iter()
            .filter(|socket| !socket.is_perk)
            .filter_map(|socket| socket.plug_set_hash())
            .collect();
        PlugSetPool { plug_set_hashes }
    }

    /// Take one socket drawing from `plug_set_hash`, false if none are left
    fn claim(&mut self, plug_set_hash: u32) -> bool {
        match self.plug_set_hashes.iter().position(|&h| h == plug_set_hash) {
            Some(index) => {
                self.plug_set_hashes.swap_remove(index);
                true
            }
            None => false,
        }
    }

    fn remaining(&self) -> impl Iterator<Item = u32> + '_ {
        self.plug_set_hashes.iter().copied()
    }
}

/// Why an item can't contribute options to its slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mismatch {
    ModEnergy(u32),
    NoFreeSocket(u32),
    MissingPerk(u32),
}

/// Check an item against the slot's locks, claiming a mod socket for every
/// mod lock. Returns the item's leftover plug sets when everything fits.
fn reconcile_item(item: &Item, locked: &[Lock], perks: &[&PlugDefinition]) -> Result<PlugSetPool, Mismatch> {
    let mut pool = if item.is_destiny2() {
        PlugSetPool::for_item(item)
    } else {
        PlugSetPool::default()
    };

    for lock in locked {
        if let Lock::Mod {
            mod_def,
            plug_set_hash,
            ..
        } = lock
        {
            if !item.is_destiny2() || !energy_compatible(item, mod_def) {
                return Err(Mismatch::ModEnergy(mod_def.hash));
            }
            if !pool.claim(*plug_set_hash) {
                return Err(Mismatch::NoFreeSocket(*plug_set_hash));
            }
        }
    }

    for lock in locked {
        if let Lock::Perk { perk, .. } = lock {
            if !perks.iter().any(|plug| plug.hash == perk.hash) {
                return Err(Mismatch::MissingPerk(perk.hash));
            }
        }
    }

    Ok(pool)
}

/// Perks and plug sets that can still be picked for a slot.
///
/// Perks are gathered from items that also have every perk locked in the
/// slot; plug sets from items that can also hold every locked mod, minus the
/// sockets those mods occupy. With no locks there is nothing to reconcile
/// against and the result is empty.
pub fn filtered_perks_and_plug_sets(locked: Option<&[Lock]>, items: &[&Item]) -> FilteredPerksAndPlugSets {
    let mut result = FilteredPerksAndPlugSets::default();

    let locked = match locked {
        Some(locked) if !locked.is_empty() => locked,
        _ => return result,
    };

    for item in items {
        let item_perks: Vec<&PlugDefinition> = if item.is_destiny2() {
            item.socket_list()
                .iter()
                .filter(|socket| filter_plugs(socket))
                .flat_map(|socket| socket.plug_options.iter().map(|option| &option.plug_item))
                .collect()
        } else {
            Vec::new()
        };

        match reconcile_item(item, locked, &item_perks) {
            Ok(pool) => {
                result.plug_set_hashes.extend(pool.remaining());
                for perk in item_perks {
                    result.perks.entry(perk.hash).or_insert_with(|| perk.clone());
                }
            }
            Err(mismatch) => {
                log::trace!("{} ({}) can't take the slot's locks: {:?}", item.name, item.id, mismatch);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Plug, Socket};
    use crate::types::{EnergyType, EquipmentSlot};

    const GENERAL_SET: u32 = 100;
    const HELMET_SET: u32 = 200;

    fn perk_def(hash: u32) -> PlugDefinition {
        PlugDefinition::new(hash, format!("Perk {hash}"), 12345)
    }

    fn helmet(id: &str, energy: EnergyType, mod_sets: &[u32], perks: &[u32]) -> Item {
        let mut item = Item::new(id, 1, id, EquipmentSlot::Helmet).with_energy(energy, 10);
        for &set in mod_sets {
            item = item.with_socket(Socket::mod_socket(1, set));
        }
        if !perks.is_empty() {
            let options = perks.iter().map(|&h| Plug::new(perk_def(h))).collect();
            item = item.with_socket(Socket::perk(options));
        }
        item
    }

    fn mod_lock(hash: u32, plug_set_hash: u32, energy: EnergyType) -> Lock {
        Lock::mod_lock(
            PlugDefinition::new(hash, "Mod", 2912171003).with_energy_cost(energy, 2),
            plug_set_hash,
            EquipmentSlot::Helmet,
        )
    }

    #[test]
    fn test_no_locks_gives_empty_sets() {
        let item = helmet("a", EnergyType::Arc, &[GENERAL_SET], &[1]);
        assert!(filtered_perks_and_plug_sets(None, &[&item]).is_empty());
        assert!(filtered_perks_and_plug_sets(Some(&[]), &[&item]).is_empty());
    }

    #[test]
    fn test_shared_plug_set_needs_two_sockets() {
        let locks = vec![
            mod_lock(1, GENERAL_SET, EnergyType::Any),
            mod_lock(2, GENERAL_SET, EnergyType::Any),
        ];
        let one_socket = helmet("one", EnergyType::Arc, &[GENERAL_SET, HELMET_SET], &[]);
        let two_sockets = helmet("two", EnergyType::Arc, &[GENERAL_SET, GENERAL_SET], &[]);

        let result = filtered_perks_and_plug_sets(Some(&locks), &[&one_socket]);
        assert!(result.is_empty());

        let result = filtered_perks_and_plug_sets(Some(&locks), &[&two_sockets]);
        // Both general sockets are occupied
        assert!(result.plug_set_hashes.is_empty());

        let three = helmet("three", EnergyType::Arc, &[GENERAL_SET, GENERAL_SET, HELMET_SET], &[]);
        let result = filtered_perks_and_plug_sets(Some(&locks), &[&three]);
        assert_eq!(result.plug_set_hashes, HashSet::from([HELMET_SET]));
    }

    #[test]
    fn test_leftover_plug_sets_are_reported() {
        let locks = vec![mod_lock(1, GENERAL_SET, EnergyType::Void)];
        let item = helmet("a", EnergyType::Void, &[GENERAL_SET, GENERAL_SET, HELMET_SET], &[]);
        let result = filtered_perks_and_plug_sets(Some(&locks), &[&item]);
        assert!(result.has_plug_set(GENERAL_SET));
        assert!(result.has_plug_set(HELMET_SET));
    }

    #[test]
    fn test_energy_mismatch_disqualifies() {
        let locks = vec![mod_lock(1, GENERAL_SET, EnergyType::Thermal)];
        let arc = helmet("arc", EnergyType::Arc, &[GENERAL_SET, HELMET_SET], &[7]);
        let solar = helmet("solar", EnergyType::Thermal, &[GENERAL_SET, HELMET_SET], &[8]);

        let result = filtered_perks_and_plug_sets(Some(&locks), &[&arc, &solar]);
        assert!(result.has_perk(8));
        assert!(!result.has_perk(7));
        assert_eq!(result.plug_set_hashes, HashSet::from([HELMET_SET]));
    }

    #[test]
    fn test_perk_lock_limits_perks_to_matching_items() {
        let locks = vec![Lock::perk(perk_def(1), EquipmentSlot::Helmet)];
        let with = helmet("with", EnergyType::Arc, &[GENERAL_SET], &[1, 2]);
        let without = helmet("without", EnergyType::Arc, &[HELMET_SET], &[3, 4]);

        let result = filtered_perks_and_plug_sets(Some(&locks), &[&with, &without]);
        let mut perks: Vec<u32> = result.perks.keys().copied().collect();
        perks.sort();
        assert_eq!(perks, vec![1, 2]);
        assert_eq!(result.plug_set_hashes, HashSet::from([GENERAL_SET]));
    }

    #[test]
    fn test_other_lock_kinds_are_ignored() {
        let locks = vec![Lock::burn(crate::types::Affinity::Void, EquipmentSlot::Helmet)];
        let item = helmet("arc", EnergyType::Arc, &[GENERAL_SET], &[5]);
        let result = filtered_perks_and_plug_sets(Some(&locks), &[&item]);
        assert!(result.has_perk(5));
        assert!(result.has_plug_set(GENERAL_SET));
    }

    #[test]
    fn test_randomized_plug_set_backs_a_socket() {
        const RANDOM_SET: u32 = 300;
        let locks = vec![mod_lock(1, RANDOM_SET, EnergyType::Any)];
        let item = Item::new("rolled", 1, "Rolled Helm", EquipmentSlot::Helmet)
            .with_energy(EnergyType::Arc, 10)
            .with_socket(Socket::randomized_mod_socket(1, RANDOM_SET))
            .with_socket(Socket::mod_socket(1, HELMET_SET));

        let result = filtered_perks_and_plug_sets(Some(&locks), &[&item]);
        assert_eq!(result.plug_set_hashes, HashSet::from([HELMET_SET]));
    }

    #[test]
    fn test_reusable_plug_set_shadows_randomized() {
        const RANDOM_SET: u32 = 300;
        let mut socket = Socket::mod_socket(1, GENERAL_SET);
        socket.definition.randomized_plug_set_hash = Some(RANDOM_SET);
        let item = Item::new("both", 1, "Helm", EquipmentSlot::Helmet)
            .with_energy(EnergyType::Arc, 10)
            .with_socket(socket);

        let random_lock = vec![mod_lock(1, RANDOM_SET, EnergyType::Any)];
        assert!(filtered_perks_and_plug_sets(Some(&random_lock), &[&item]).is_empty());

        let general_lock = vec![mod_lock(1, GENERAL_SET, EnergyType::Any)];
        let mut pool = PlugSetPool::for_item(&item);
        assert!(pool.claim(GENERAL_SET));
        assert_eq!(pool.remaining().count(), 0);
        assert!(reconcile_item(&item, &general_lock, &[]).is_ok());
        assert_eq!(
            reconcile_item(&item, &random_lock, &[]).err(),
            Some(Mismatch::NoFreeSocket(RANDOM_SET))
        );
    }

    #[test]
    fn test_claim_consumes_one_occurrence() {
        let mut pool = PlugSetPool {
            plug_set_hashes: vec![1, 2, 1],
        };
        assert!(pool.claim(1));
        assert!(pool.claim(1));
        assert!(!pool.claim(1));
        assert_eq!(pool.remaining().collect::<Vec<_>>(), vec![2]);
    }
}
