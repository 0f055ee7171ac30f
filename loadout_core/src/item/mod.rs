//! Item - The equipment pieces the builder filters

mod socket;

pub use socket::{
    masterwork_socket_hashes, EnergyCost, InvestmentStat, ItemSockets, Plug, PlugDefinition,
    PlugInfo, Socket, SocketCategory, SocketDefinition,
};

use crate::types::{DamageType, EnergyType, EquipmentSlot, ItemId, StatKind, TierType};
use serde::{Deserialize, Serialize};

/// A single stat line on an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStat {
    pub kind: StatKind,
    /// Roll without any plug contributions
    pub base: i32,
    /// Current value including inserted plugs
    pub value: i32,
}

/// Energy attribute of modern (armor 2.0) pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEnergy {
    pub energy_type: EnergyType,
    pub energy_capacity: u32,
}

/// Masterwork state of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Masterwork {
    pub tier: u32,
    #[serde(default)]
    pub stats: Vec<StatKind>,
}

/// An equippable item instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Inventory definition hash
    pub hash: u32,
    pub name: String,
    pub slot: EquipmentSlot,
    #[serde(default = "default_destiny_version")]
    pub destiny_version: u8,
    #[serde(default)]
    pub tier: TierType,
    /// Damage type, only meaningful for items without energy
    #[serde(default)]
    pub element: Option<DamageType>,
    #[serde(default)]
    pub energy: Option<ItemEnergy>,
    #[serde(default)]
    pub stats: Option<Vec<ItemStat>>,
    #[serde(default)]
    pub sockets: Option<ItemSockets>,
    #[serde(default)]
    pub masterwork: Option<Masterwork>,
}

fn default_destiny_version() -> u8 {
    2
}

impl Item {
    /// Create a bare Destiny 2 item with no stats or sockets
    pub fn new(id: impl Into<ItemId>, hash: u32, name: impl Into<String>, slot: EquipmentSlot) -> Self {
        Item {
            id: id.into(),
            hash,
            name: name.into(),
            slot,
            destiny_version: default_destiny_version(),
            tier: TierType::Superior,
            element: None,
            energy: None,
            stats: None,
            sockets: None,
            masterwork: None,
        }
    }

    pub fn with_tier(mut self, tier: TierType) -> Self {
        self.tier = tier;
        self
    }

    pub fn with_destiny_version(mut self, version: u8) -> Self {
        self.destiny_version = version;
        self
    }

    pub fn with_element(mut self, element: DamageType) -> Self {
        self.element = Some(element);
        self
    }

    pub fn with_energy(mut self, energy_type: EnergyType, energy_capacity: u32) -> Self {
        self.energy = Some(ItemEnergy {
            energy_type,
            energy_capacity,
        });
        self
    }

    /// Add (or replace) a stat line
    pub fn with_stat(mut self, kind: StatKind, base: i32, value: i32) -> Self {
        let stats = self.stats.get_or_insert_with(Vec::new);
        stats.retain(|s| s.kind != kind);
        stats.push(ItemStat { kind, base, value });
        self
    }

    /// Append a socket, assigning it the next socket index
    pub fn with_socket(mut self, mut socket: Socket) -> Self {
        let sockets = self.sockets.get_or_insert_with(ItemSockets::default);
        socket.socket_index = sockets.sockets.len();
        sockets.sockets.push(socket);
        self
    }

    pub fn with_socket_category(mut self, category: SocketCategory) -> Self {
        self.sockets
            .get_or_insert_with(ItemSockets::default)
            .categories
            .push(category);
        self
    }

    pub fn with_masterwork(mut self, masterwork: Masterwork) -> Self {
        self.masterwork = Some(masterwork);
        self
    }

    pub fn is_destiny2(&self) -> bool {
        self.destiny_version == 2
    }

    /// Look up a stat line by kind
    pub fn stat(&self, kind: StatKind) -> Option<&ItemStat> {
        self.stats.as_ref()?.iter().find(|s| s.kind == kind)
    }

    /// All sockets, empty when the item has none
    pub fn socket_list(&self) -> &[Socket] {
        self.sockets.as_ref().map(|s| s.sockets.as_slice()).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_stat_replaces_existing() {
        let item = Item::new("1", 100, "Helm", EquipmentSlot::Helmet)
            .with_stat(StatKind::Mobility, 10, 10)
            .with_stat(StatKind::Mobility, 12, 14);
        assert_eq!(item.stats.as_ref().map(Vec::len), Some(1));
        assert_eq!(item.stat(StatKind::Mobility).map(|s| s.value), Some(14));
    }

    #[test]
    fn test_sockets_are_indexed_in_order() {
        let item = Item::new("1", 100, "Helm", EquipmentSlot::Helmet)
            .with_socket(Socket::perk(vec![]))
            .with_socket(Socket::perk(vec![]));
        let indexes: Vec<usize> = item.socket_list().iter().map(|s| s.socket_index).collect();
        assert_eq!(indexes, vec![0, 1]);
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{"id":"42","hash":7,"name":"Boots","slot":"leg"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert!(item.is_destiny2());
        assert!(item.energy.is_none());
        assert!(item.socket_list().is_empty());
    }
}
