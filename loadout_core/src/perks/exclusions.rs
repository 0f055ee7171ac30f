//! Which plugs are worth offering in the perk picker

use crate::item::Socket;
use crate::types::{ItemSubType, TierType};

/// Plug categories that are never shown
pub const UNWANTED_PLUG_CATEGORIES: [u32; 7] = [
    3313201758, // Mobility, Restorative, and Resilience perks
    1514141499, // Void damage resistance
    1514141501, // Arc damage resistance
    1514141500, // Solar damage resistance
    2973005342, // Shaders
    3356843615, // Ornaments
    2457930460, // Empty masterwork slot
];

/// Item categories that are never shown
pub const UNWANTED_ITEM_CATEGORIES: [u32; 3] = [
    1742617626, // Armor Mods: Ornaments
    1875601085, // Armor Mods: Glow Effects
    1404791674, // Ghost Mods: Projections
];

/// Archetype / intrinsic perks, only kept on exotics
pub const ARCHETYPE_PLUG_CATEGORY: u32 = 1744546145;

/// Empty mod slot placeholders (basic tier)
pub const EMPTY_MOD_SLOT_PLUG_CATEGORY: u32 = 3347429529;

/// Inventory bucket every real mod lives in
pub const MODIFICATIONS_BUCKET: u32 = 3313201758;

/// Plug category identifiers containing this are masterwork or energy plugs
pub const MASTERWORK_IDENTIFIER: &str = "masterworks";

/// Filter out sockets whose plugs we don't want to show in the perk picker.
///
/// The decision is made on the socket's inserted plug.
pub fn filter_plugs(socket: &Socket) -> bool {
    let Some(plug) = &socket.plug else {
        return false;
    };
    let plug_item = &plug.plug_item;
    let Some(info) = &plug_item.plug else {
        return false;
    };

    // Armor 2.0 mods are picked separately
    if plug_item.collectible_hash.is_some() {
        return false;
    }

    if matches!(plug_item.item_sub_type, ItemSubType::Ornament | ItemSubType::Shader) {
        return false;
    }

    if UNWANTED_PLUG_CATEGORIES.contains(&info.plug_category_hash)
        || plug_item
            .item_category_hashes
            .iter()
            .any(|h| UNWANTED_ITEM_CATEGORIES.contains(h))
    {
        return false;
    }

    if info.plug_category_hash == ARCHETYPE_PLUG_CATEGORY && plug_item.tier_type != TierType::Exotic {
        return false;
    }

    if info.plug_category_hash == EMPTY_MOD_SLOT_PLUG_CATEGORY && plug_item.tier_type == TierType::Basic {
        return false;
    }

    if info.plug_category_identifier.contains(MASTERWORK_IDENTIFIER) {
        return false;
    }

    // Empty sockets are common tier
    if plug_item.tier_type == TierType::Common {
        return false;
    }

    // Only real mods outside perk sockets
    if !socket.is_perk
        && (plug_item.bucket_type_hash != MODIFICATIONS_BUCKET
            || plug_item.recovery_bucket_type_hash.unwrap_or(0) == 0)
    {
        return false;
    }

    true
}
