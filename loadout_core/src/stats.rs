//! Stat vectors over the fixed stat list

use crate::item::Item;
use crate::lock::{Lock, LockedArmor2Mod};
use crate::types::{StatKind, STAT_COUNT};
use std::collections::HashMap;

/// One value per stat, ordered like [`StatKind::ALL`]
pub type StatMix = [i32; STAT_COUNT];

/// Current stat values of an item in fixed order, 0 for missing stats
pub fn ordered_stat_values(item: &Item) -> StatMix {
    StatKind::ALL.map(|kind| item.stat(kind).map(|s| s.value).unwrap_or(0))
}

/// Tier of a stat value (every 10 points is a tier)
pub fn stat_tier(stat: i32) -> i32 {
    stat.div_euclid(10)
}

/// Sum of a mix over the fixed stat list
pub fn mix_total(mix: &StatMix) -> i32 {
    mix.iter().fold(0i32, |total, &stat| total.saturating_add(stat))
}

/// Stat totals granted by the mods locked in a single slot.
///
/// Investment stats are summed as-is, which no longer matches how the game
/// applies mod stats.
pub fn locked_mod_stats(
    locks: Option<&[Lock]>,
    armor2_mods: Option<&[LockedArmor2Mod]>,
) -> HashMap<StatKind, i32> {
    let mut totals: HashMap<StatKind, i32> = HashMap::new();

    let legacy_mods = locks.unwrap_or(&[]).iter().filter_map(|lock| match lock {
        Lock::Mod { mod_def, .. } => Some(mod_def),
        _ => None,
    });
    let modern_mods = armor2_mods.unwrap_or(&[]).iter().map(|locked| &locked.mod_def);

    for mod_def in legacy_mods.chain(modern_mods) {
        for stat in &mod_def.investment_stats {
            let total = totals.entry(stat.stat).or_insert(0);
            *total = total.saturating_add(stat.value);
        }
    }

    totals
}

/// Comma separated names of an item's masterwork stats, `""` if none
pub fn masterwork_stat_names(item: &Item) -> String {
    item.masterwork
        .as_ref()
        .map(|mw| {
            mw.stats
                .iter()
                .map(|kind| kind.name())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}
