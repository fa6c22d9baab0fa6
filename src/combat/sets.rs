//! Themed four-piece equipment sets
//!
//! A set identity is a derived predicate, never persisted: players must wear
//! all four pieces, autonomous actors match by template name. Each set grants
//! one discipline-specific effect read by the resolver or modifier layer.

use crate::actor::equipment::ItemId;
use crate::actor::{Actor, ActorKind};

/// The themed sets combat recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetBonus {
    /// Melee: 1-in-8 chance per attack to zero the defence roll, and the
    /// wearer's melee attacks ignore the victim's protection prayer
    WardedBulwark,
    /// Melee: adds a fraction of the victim's vitality deficit to the max hit
    Gravethirst,
}

/// Helm, body, legs, weapon ids for the Warded Bulwark set
pub const WARDED_BULWARK_PIECES: [ItemId; 4] =
    [ItemId(3101), ItemId(3103), ItemId(3105), ItemId(3107)];

/// Helm, body, legs, weapon ids for the Gravethirst set
pub const GRAVETHIRST_PIECES: [ItemId; 4] =
    [ItemId(3201), ItemId(3203), ItemId(3205), ItemId(3207)];

/// Template name carrying the Warded Bulwark effect
pub const WARDED_BULWARK_TEMPLATE: &str = "Bulwark Sentinel";

/// Template name carrying the Gravethirst effect
pub const GRAVETHIRST_TEMPLATE: &str = "Gravethirst Revenant";

/// Does `actor` currently carry the full set?
pub fn has_full_set(actor: &Actor, set: SetBonus) -> bool {
    let (pieces, template) = match set {
        SetBonus::WardedBulwark => (&WARDED_BULWARK_PIECES, WARDED_BULWARK_TEMPLATE),
        SetBonus::Gravethirst => (&GRAVETHIRST_PIECES, GRAVETHIRST_TEMPLATE),
    };
    match &actor.kind {
        ActorKind::Player(state) => state.equipment.contains_all(pieces),
        ActorKind::Autonomous(state) => state.name == template,
    }
}
