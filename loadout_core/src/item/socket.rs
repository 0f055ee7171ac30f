//! Sockets and the plugs that go in them

use crate::types::{EnergyType, ItemSubType, SocketCategoryStyle, StatKind, TierType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Energy cost of a mod
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyCost {
    pub energy_cost: u32,
    pub energy_type: EnergyType,
}

/// Plug-specific part of an inventory definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlugInfo {
    pub plug_category_hash: u32,
    #[serde(default)]
    pub plug_category_identifier: String,
    #[serde(default)]
    pub energy_cost: Option<EnergyCost>,
}

/// Stat granted by a plug definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentStat {
    pub stat: StatKind,
    pub value: i32,
}

/// Inventory definition of anything that can be plugged into a socket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlugDefinition {
    pub hash: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub item_type_display_name: String,
    #[serde(default)]
    pub item_sub_type: ItemSubType,
    #[serde(default)]
    pub item_category_hashes: Vec<u32>,
    #[serde(default)]
    pub tier_type: TierType,
    #[serde(default)]
    pub bucket_type_hash: u32,
    #[serde(default)]
    pub recovery_bucket_type_hash: Option<u32>,
    /// Set on mods tracked through collections (armor 2.0 mods)
    #[serde(default)]
    pub collectible_hash: Option<u32>,
    #[serde(default)]
    pub plug: Option<PlugInfo>,
    #[serde(default)]
    pub investment_stats: Vec<InvestmentStat>,
}

impl PlugDefinition {
    /// Create a rare-tier definition in the given plug category
    pub fn new(hash: u32, name: impl Into<String>, plug_category_hash: u32) -> Self {
        PlugDefinition {
            hash,
            name: name.into(),
            item_type_display_name: String::new(),
            item_sub_type: ItemSubType::None,
            item_category_hashes: Vec::new(),
            tier_type: TierType::Rare,
            bucket_type_hash: 0,
            recovery_bucket_type_hash: None,
            collectible_hash: None,
            plug: Some(PlugInfo {
                plug_category_hash,
                plug_category_identifier: String::new(),
                energy_cost: None,
            }),
            investment_stats: Vec::new(),
        }
    }

    pub fn with_tier(mut self, tier: TierType) -> Self {
        self.tier_type = tier;
        self
    }

    pub fn with_category_identifier(mut self, identifier: impl Into<String>) -> Self {
        if let Some(plug) = self.plug.as_mut() {
            plug.plug_category_identifier = identifier.into();
        }
        self
    }

    pub fn with_energy_cost(mut self, energy_type: EnergyType, energy_cost: u32) -> Self {
        if let Some(plug) = self.plug.as_mut() {
            plug.energy_cost = Some(EnergyCost {
                energy_cost,
                energy_type,
            });
        }
        self
    }

    pub fn with_investment_stat(mut self, stat: StatKind, value: i32) -> Self {
        self.investment_stats.push(InvestmentStat { stat, value });
        self
    }

    pub fn plug_category_hash(&self) -> Option<u32> {
        self.plug.as_ref().map(|p| p.plug_category_hash)
    }

    pub fn energy_cost(&self) -> Option<&EnergyCost> {
        self.plug.as_ref()?.energy_cost.as_ref()
    }
}

/// A plug as it appears on a specific item, with its resolved stat contributions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plug {
    pub plug_item: PlugDefinition,
    #[serde(default)]
    pub stats: Option<HashMap<StatKind, i32>>,
}

impl Plug {
    pub fn new(plug_item: PlugDefinition) -> Self {
        Plug {
            plug_item,
            stats: None,
        }
    }

    pub fn with_stat(mut self, kind: StatKind, value: i32) -> Self {
        self.stats.get_or_insert_with(HashMap::new).insert(kind, value);
        self
    }

    /// Contribution to one stat, 0 when absent
    pub fn stat(&self, kind: StatKind) -> i32 {
        self.stats
            .as_ref()
            .and_then(|s| s.get(&kind))
            .copied()
            .unwrap_or(0)
    }

    pub fn hash(&self) -> u32 {
        self.plug_item.hash
    }
}

/// Static definition of a socket on the item definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SocketDefinition {
    pub socket_type_hash: u32,
    #[serde(default)]
    pub reusable_plug_set_hash: Option<u32>,
    #[serde(default)]
    pub randomized_plug_set_hash: Option<u32>,
}

/// A socket on an item instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Socket {
    pub socket_index: usize,
    /// Currently inserted plug
    #[serde(default)]
    pub plug: Option<Plug>,
    #[serde(default)]
    pub plug_options: Vec<Plug>,
    pub is_perk: bool,
    #[serde(default)]
    pub definition: SocketDefinition,
}

impl Socket {
    /// A perk socket offering the given options, the first one inserted
    pub fn perk(plug_options: Vec<Plug>) -> Self {
        Socket {
            socket_index: 0,
            plug: plug_options.first().cloned(),
            plug_options,
            is_perk: true,
            definition: SocketDefinition::default(),
        }
    }

    /// An empty mod socket drawing from a reusable plug set
    pub fn mod_socket(socket_type_hash: u32, reusable_plug_set_hash: u32) -> Self {
        Socket {
            socket_index: 0,
            plug: None,
            plug_options: Vec::new(),
            is_perk: false,
            definition: SocketDefinition {
                socket_type_hash,
                reusable_plug_set_hash: Some(reusable_plug_set_hash),
                randomized_plug_set_hash: None,
            },
        }
    }

    /// An empty mod socket drawing from a randomized plug set
    pub fn randomized_mod_socket(socket_type_hash: u32, randomized_plug_set_hash: u32) -> Self {
        Socket {
            socket_index: 0,
            plug: None,
            plug_options: Vec::new(),
            is_perk: false,
            definition: SocketDefinition {
                socket_type_hash,
                reusable_plug_set_hash: None,
                randomized_plug_set_hash: Some(randomized_plug_set_hash),
            },
        }
    }

    pub fn with_plug(mut self, plug: Plug) -> Self {
        self.plug = Some(plug);
        self
    }

    pub fn with_options(mut self, plug_options: Vec<Plug>) -> Self {
        self.plug_options = plug_options;
        self
    }

    /// Plug set backing a mod socket, reusable taking precedence over randomized
    pub fn plug_set_hash(&self) -> Option<u32> {
        self.definition
            .reusable_plug_set_hash
            .or(self.definition.randomized_plug_set_hash)
    }

    /// Whether either plug set of this socket is `plug_set_hash`
    pub fn offers_plug_set(&self, plug_set_hash: u32) -> bool {
        self.definition.reusable_plug_set_hash == Some(plug_set_hash)
            || self.definition.randomized_plug_set_hash == Some(plug_set_hash)
    }

    pub fn offers_plug(&self, plug_hash: u32) -> bool {
        self.plug_options.iter().any(|p| p.hash() == plug_hash)
    }
}

/// Grouping of sockets for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocketCategory {
    pub style: SocketCategoryStyle,
    pub socket_indexes: Vec<usize>,
}

/// All sockets of an item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemSockets {
    pub sockets: Vec<Socket>,
    #[serde(default)]
    pub categories: Vec<SocketCategory>,
}

/// Hashes of the plugs currently inserted in sockets of categories with `style`
pub fn masterwork_socket_hashes(sockets: &ItemSockets, style: SocketCategoryStyle) -> Vec<u32> {
    sockets
        .categories
        .iter()
        .filter(|category| category.style == style)
        .flat_map(|category| category.socket_indexes.iter())
        .filter_map(|&index| sockets.sockets.get(index))
        .filter_map(|socket| socket.plug.as_ref().map(Plug::hash))
        .collect()
}
