//! Specialty (seasonal) mod socket lookups

use crate::config::{ModSocketMetadata, SpecialtySockets};
use crate::item::{Item, PlugDefinition, Socket};
use crate::types::ModCategory;

/// The specialty mod socket of a Destiny 2 armor piece, if it has one
pub fn specialty_socket<'a>(item: &'a Item, specialty: &SpecialtySockets) -> Option<&'a Socket> {
    if !item.is_destiny2() || !item.slot.in_armor() {
        return None;
    }
    item.socket_list()
        .iter()
        .find(|socket| specialty.is_specialty_socket_type(socket.definition.socket_type_hash))
}

/// Metadata for the item's specialty mod socket, if it has one
pub fn specialty_socket_metadata<'a>(
    item: &Item,
    specialty: &'a SpecialtySockets,
) -> Option<&'a ModSocketMetadata> {
    let socket = specialty_socket(item, specialty)?;
    specialty.by_socket_type_hash(socket.definition.socket_type_hash)
}

/// Display name of whatever sits in the specialty socket, `""` when there is none
pub fn specialty_mod_slot_display_name<'a>(item: &'a Item, specialty: &SpecialtySockets) -> &'a str {
    specialty_socket(item, specialty)
        .and_then(|socket| socket.plug.as_ref())
        .map(|plug| plug.plug_item.item_type_display_name.as_str())
        .unwrap_or("")
}

/// Whether a mod definition is an armor 2.0 mod, slot-bound or seasonal
pub fn is_armor2_mod(mod_def: &PlugDefinition, specialty: &SpecialtySockets) -> bool {
    match mod_def.plug_category_hash() {
        Some(category) => {
            ModCategory::from_plug_category_hash(category).is_some()
                || specialty.is_specialty_mod_category(category)
        }
        None => false,
    }
}
