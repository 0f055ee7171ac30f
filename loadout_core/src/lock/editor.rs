//! Pure add/remove operations on a slot's lock list
//!
//! Lists are never modified in place. An empty list is represented as `None`.

use super::Lock;

/// Add a lock to the lock list for a slot.
///
/// Locking an item clears every other lock in the slot, and a slot holds at
/// most one burn lock. Any other lock is only added if it isn't there yet.
pub fn add_lock(lock: Lock, locked: Option<&[Lock]>) -> Option<Vec<Lock>> {
    let locked = locked.unwrap_or(&[]);

    match lock {
        Lock::Item { .. } => Some(vec![lock]),
        Lock::Burn { .. } => {
            let mut new_locks: Vec<Lock> = locked
                .iter()
                .filter(|existing| !matches!(existing, Lock::Burn { .. }))
                .cloned()
                .collect();
            new_locks.push(lock);
            Some(new_locks)
        }
        Lock::Exclude { .. } | Lock::Perk { .. } | Lock::Mod { .. } => {
            if !locked.iter().any(|existing| locks_equal(existing, &lock)) {
                let mut new_locks = locked.to_vec();
                new_locks.push(lock);
                return Some(new_locks);
            }

            if locked.is_empty() {
                None
            } else {
                Some(locked.to_vec())
            }
        }
    }
}

/// Remove every lock equal to `lock` from a slot's lock list
pub fn remove_lock(lock: &Lock, locked: Option<&[Lock]>) -> Option<Vec<Lock>> {
    let new_locks: Vec<Lock> = locked
        .unwrap_or(&[])
        .iter()
        .filter(|existing| !locks_equal(existing, lock))
        .cloned()
        .collect();

    if new_locks.is_empty() {
        None
    } else {
        Some(new_locks)
    }
}

/// Type-aware lock equality: kinds must match, then the identifying field is compared
pub fn locks_equal(first: &Lock, second: &Lock) -> bool {
    match first {
        Lock::Item { item, .. } => {
            matches!(second, Lock::Item { item: other, .. } if other.id == item.id)
        }
        Lock::Exclude { item, .. } => {
            matches!(second, Lock::Exclude { item: other, .. } if other.id == item.id)
        }
        Lock::Mod { mod_def, .. } => {
            matches!(second, Lock::Mod { mod_def: other, .. } if other.hash == mod_def.hash)
        }
        Lock::Perk { perk, .. } => {
            matches!(second, Lock::Perk { perk: other, .. } if other.hash == perk.hash)
        }
        Lock::Burn { burn, .. } => {
            matches!(second, Lock::Burn { burn: other, .. } if other.affinity == burn.affinity)
        }
    }
}
