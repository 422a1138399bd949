//! Pacing rules layered over the static graph: the combat gate throttle and
//! the rest pseudo-option.

use smallvec::SmallVec;
use tracing::debug;

use crate::actor::Character;

use super::{Scene, SceneCategory, SceneId, SceneOption};

/// Non-combat transitions required between fights.
pub const DECISIONS_BETWEEN_FIGHTS: u32 = 3;
pub const REST_LABEL: &str = "Rest (+10 health)";
pub const REST_HEAL: i32 = 10;

/// Narrative stand-in used when a fight is attempted too early.
pub fn filler_for(combat: &SceneId) -> SceneId {
    let filler = match combat.as_str() {
        "combat_wolf" => "distant_echo",
        "combat_spectre" => "mist_forest",
        "combat_guardian" => "corrupt_clearing",
        _ => "crossroads",
    };
    SceneId::from(filler)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateDecision {
    pub destination: SceneId,
    pub redirected: bool,
}

/// Applies the combat gate to a menu choice and advances the counter.
///
/// Combat destinations are swapped for their filler while the counter is
/// below the threshold; the swap itself counts as a step. Every other
/// non-ending destination counts as a step. Only a combat victory resets
/// the counter.
pub fn apply_gate(hero: &mut Character, destination: SceneId) -> GateDecision {
    match destination.category() {
        SceneCategory::Combat if hero.decisions_since_combat < DECISIONS_BETWEEN_FIGHTS => {
            hero.decisions_since_combat += 1;
            let filler = filler_for(&destination);
            debug!(
                from = %destination,
                to = %filler,
                decisions = hero.decisions_since_combat,
                "combat gated"
            );
            GateDecision {
                destination: filler,
                redirected: true,
            }
        }
        SceneCategory::Combat | SceneCategory::Ending => GateDecision {
            destination,
            redirected: false,
        },
        SceneCategory::Narrative | SceneCategory::Shop => {
            hero.decisions_since_combat += 1;
            GateDecision {
                destination,
                redirected: false,
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEntry<'a> {
    Go(&'a SceneOption),
    Rest,
}

impl MenuEntry<'_> {
    pub fn label(&self) -> &str {
        match self {
            MenuEntry::Go(option) => &option.label,
            MenuEntry::Rest => REST_LABEL,
        }
    }
}

/// The menu as displayed: the scene's own options plus the rest entry while
/// the hero still has rests and the scene is plain narrative.
pub fn effective_menu<'a>(
    id: &SceneId,
    scene: &'a Scene,
    hero: &Character,
) -> SmallVec<[MenuEntry<'a>; 6]> {
    let mut menu: SmallVec<[MenuEntry<'a>; 6]> =
        scene.options.iter().map(MenuEntry::Go).collect();
    if id.category() == SceneCategory::Narrative && hero.can_rest() {
        menu.push(MenuEntry::Rest);
    }
    menu
}

/// Heals up to [`REST_HEAL`]. Resting at full health is refused and does not
/// use up a rest. Returns the health gained.
pub fn rest(hero: &mut Character) -> Option<i32> {
    if !hero.can_rest() || hero.missing_health() == 0 {
        return None;
    }
    hero.rests_used += 1;
    Some(hero.heal(REST_HEAL))
}
