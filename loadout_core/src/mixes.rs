//! Stat mix enumeration by swapping single perks on legacy armor
//!
//! Armor without energy rolls its stats through selectable perks. Swapping
//! the selected perk of a socket for one of its alternatives shifts the
//! item's stats, and every such swap is layered on top of every mix found
//! so far.

use crate::item::{Item, Plug};
use crate::stats::{ordered_stat_values, StatMix};
use crate::types::StatKind;

/// Items need at least this many stats to be considered for mixes
const MIN_STATS_FOR_MIXES: usize = 3;

/// Enumerate the stat mixes reachable by swapping perks on `item`.
///
/// The item's current stats are mix #0. Every further mix is reported to
/// `on_mix` together with the alternative plugs that produce it; returning
/// `false` from the callback stops the search and discards every mix.
/// Otherwise all mixes are returned, #0 first.
///
/// Only legacy armor (Destiny 2 items with sockets but no energy) yields
/// more than its current mix.
pub fn enumerate_stat_mixes<'a, F>(item: &'a Item, mut on_mix: F) -> Vec<StatMix>
where
    F: FnMut(&StatMix, &[&'a Plug]) -> bool,
{
    match &item.stats {
        Some(stats) if stats.len() >= MIN_STATS_FOR_MIXES => {}
        _ => return Vec::new(),
    }

    let mut mixes: Vec<StatMix> = vec![ordered_stat_values(item)];
    let mut alt_perks: Vec<Vec<&'a Plug>> = vec![Vec::new()];

    let sockets = match (&item.sockets, item.energy) {
        (Some(sockets), None) if item.is_destiny2() => sockets,
        _ => return mixes,
    };

    for socket in &sockets.sockets {
        if socket.plug_options.len() <= 1 {
            continue;
        }
        let selected = socket.plug.as_ref();
        let selected_hash = selected.map(Plug::hash);

        for plug in &socket.plug_options {
            if Some(plug.hash()) == selected_hash || plug.stats.is_none() {
                continue;
            }

            // Only mixes found before this plug are extended by it
            let mix_count = mixes.len();
            for mix_index in 0..mix_count {
                let existing = mixes[mix_index];
                let option_mix: StatMix = StatKind::ALL.map(|kind| {
                    let selected_value = selected.map(|p| p.stat(kind)).unwrap_or(0);
                    existing[kind.index()]
                        .saturating_sub(selected_value)
                        .saturating_add(plug.stat(kind))
                });

                let mut plugs = alt_perks[mix_index].clone();
                plugs.push(plug);

                if !on_mix(&option_mix, &plugs) {
                    log::trace!("Stat mix search on {} stopped by caller", item.name);
                    return Vec::new();
                }

                alt_perks.push(plugs);
                mixes.push(option_mix);
            }
        }
    }

    mixes
}

/// Find the alternative perks that give `item` exactly `target` stats.
///
/// `Some(vec![])` means the item already has that mix.
pub fn find_alt_perks_for_mix<'a>(item: &'a Item, target: &StatMix) -> Option<Vec<&'a Plug>> {
    if item.stats.is_some() && &ordered_stat_values(item) == target {
        return Some(Vec::new());
    }

    let mut found = None;
    enumerate_stat_mixes(item, |mix, plugs| {
        if mix == target {
            found = Some(plugs.to_vec());
            return false;
        }
        true
    });
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{PlugDefinition, Socket};
    use crate::stats::mix_total;
    use crate::types::{EnergyType, EquipmentSlot};

    fn stat_plug(hash: u32, kind: StatKind, value: i32) -> Plug {
        Plug::new(PlugDefinition::new(hash, format!("Plug {hash}"), 3313201758)).with_stat(kind, value)
    }

    /// Legacy helmet: 10/10/10 in mobility/resilience/recovery, the mobility
    /// comes from the selected perk of the first socket.
    fn legacy_helmet() -> Item {
        Item::new("legacy", 1, "Legacy Helm", EquipmentSlot::Helmet)
            .with_stat(StatKind::Mobility, 10, 10)
            .with_stat(StatKind::Resilience, 10, 10)
            .with_stat(StatKind::Recovery, 10, 10)
            .with_socket(Socket::perk(vec![
                stat_plug(1, StatKind::Mobility, 3),
                stat_plug(2, StatKind::Resilience, 3),
            ]))
            .with_socket(Socket::perk(vec![
                stat_plug(3, StatKind::Recovery, 2),
                stat_plug(4, StatKind::Strength, 2),
            ]))
    }

    #[test]
    fn test_mixes_layer_on_previous_mixes() {
        let item = legacy_helmet();
        let mut seen = Vec::new();
        let mixes = enumerate_stat_mixes(&item, |mix, plugs| {
            seen.push((*mix, plugs.iter().map(|p| p.hash()).collect::<Vec<_>>()));
            true
        });

        assert_eq!(
            mixes,
            vec![
                [10, 10, 10, 0, 0, 0],
                [7, 13, 10, 0, 0, 0],
                [10, 10, 8, 0, 0, 2],
                [7, 13, 8, 0, 0, 2],
            ]
        );
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].1, vec![2]);
        assert_eq!(seen[1].1, vec![4]);
        assert_eq!(seen[2].1, vec![2, 4]);
    }

    #[test]
    fn test_callback_abort_discards_mixes() {
        let item = legacy_helmet();
        let mut calls = 0;
        let mixes = enumerate_stat_mixes(&item, |_, _| {
            calls += 1;
            calls < 2
        });
        assert!(mixes.is_empty());
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_modern_armor_only_has_current_mix() {
        let item = legacy_helmet().with_energy(EnergyType::Arc, 10);
        let mixes = enumerate_stat_mixes(&item, |_, _| panic!("no alternatives expected"));
        assert_eq!(mixes, vec![[10, 10, 10, 0, 0, 0]]);
    }

    #[test]
    fn test_too_few_stats_gives_nothing() {
        let item = Item::new("i", 1, "Helm", EquipmentSlot::Helmet).with_stat(StatKind::Mobility, 5, 5);
        assert!(enumerate_stat_mixes(&item, |_, _| true).is_empty());
    }

    #[test]
    fn test_plugs_without_stats_are_skipped() {
        let item = legacy_helmet().with_socket(Socket::perk(vec![
            Plug::new(PlugDefinition::new(10, "Statless A", 1)),
            Plug::new(PlugDefinition::new(11, "Statless B", 1)),
        ]));
        assert_eq!(enumerate_stat_mixes(&item, |_, _| true).len(), 4);
    }

    #[test]
    fn test_selected_plug_need_not_be_first_option() {
        let first = stat_plug(1, StatKind::Mobility, 3);
        let selected = stat_plug(2, StatKind::Resilience, 3);
        let item = Item::new("legacy", 1, "Legacy Helm", EquipmentSlot::Helmet)
            .with_stat(StatKind::Mobility, 10, 10)
            .with_stat(StatKind::Resilience, 10, 10)
            .with_stat(StatKind::Recovery, 10, 10)
            .with_socket(
                Socket::perk(vec![])
                    .with_options(vec![first, selected.clone()])
                    .with_plug(selected),
            );

        let mixes = enumerate_stat_mixes(&item, |_, _| true);
        assert_eq!(mixes, vec![[10, 10, 10, 0, 0, 0], [13, 7, 10, 0, 0, 0]]);
        // Swapping a perk moves stats around without changing the total
        assert!(mixes.iter().all(|mix| mix_total(mix) == 30));
    }

    #[test]
    fn test_extreme_stats_saturate() {
        let item = Item::new("legacy", 1, "Legacy Helm", EquipmentSlot::Helmet)
            .with_stat(StatKind::Mobility, i32::MAX, i32::MAX)
            .with_stat(StatKind::Resilience, 0, 0)
            .with_stat(StatKind::Recovery, 0, 0)
            .with_socket(Socket::perk(vec![
                stat_plug(1, StatKind::Mobility, -5),
                stat_plug(2, StatKind::Mobility, 3),
            ]));

        let mixes = enumerate_stat_mixes(&item, |_, _| true);
        assert_eq!(mixes[1][StatKind::Mobility.index()], i32::MAX);
        assert_eq!(mix_total(&mixes[1]), i32::MAX);
    }

    #[test]
    fn test_find_alt_perks() {
        let item = legacy_helmet();
        let plugs = find_alt_perks_for_mix(&item, &[7, 13, 8, 0, 0, 2]).unwrap();
        assert_eq!(plugs.iter().map(|p| p.hash()).collect::<Vec<_>>(), vec![2, 4]);

        assert_eq!(find_alt_perks_for_mix(&item, &[10, 10, 10, 0, 0, 0]), Some(Vec::new()));
        assert_eq!(find_alt_perks_for_mix(&item, &[99, 0, 0, 0, 0, 0]), None);
    }
}
