pub mod items;
pub mod monsters;

use crate::actor::HeroClass;

pub const STARTING_COINS: i32 = 10;
pub const POWER_USES_PER_COMBAT: i32 = 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClassProfile {
    pub health: i32,
    pub damage: i32,
    pub power: &'static str,
    pub blurb: &'static str,
}

/// Base stats per class. `Drifter` is the catch-all for unrecognised names.
pub fn class_profile(class: HeroClass) -> ClassProfile {
    match class {
        HeroClass::Warrior => ClassProfile {
            health: 120,
            damage: 15,
            power: "Mighty blow",
            blurb: "High health and steady strength",
        },
        HeroClass::Mage => ClassProfile {
            health: 70,
            damage: 22,
            power: "Fireball",
            blurb: "Low health, explosive damage",
        },
        HeroClass::Explorer => ClassProfile {
            health: 90,
            damage: 12,
            power: "Quick strike",
            blurb: "Balanced and versatile",
        },
        HeroClass::Thief => ClassProfile {
            health: 85,
            damage: 14,
            power: "Sneak attack",
            blurb: "Fast with critical damage",
        },
        HeroClass::Drifter => ClassProfile {
            health: 80,
            damage: 10,
            power: "Basic strike",
            blurb: "No training to speak of",
        },
    }
}

pub fn intro_lines() -> Vec<&'static str> {
    vec![
        "You slowly open your eyes and find yourself in the middle of an unknown forest.",
        "You don't remember how you got here.",
        "The air is cold, and all you hear is the wind in the trees and the distant song of animals.",
        "Everything seems normal, but soon you notice something odd: every sound has a precise direction, as if the forest wanted to guide you... or confuse you.",
        "In the distance you make out a rushing river, and on the other side a trail hidden in the undergrowth.",
        "Your instinct tells you that you are not alone. Something, or someone, is watching your steps.",
        "The forest keeps ancient secrets and you have been dragged here to uncover them.",
        "Your goal is to find the way out... or perhaps something more: a hidden sanctuary that seems to hold the key to this place.",
        "Be ready: every decision you make will change your path.",
        "The forest can lead you to freedom... or trap you forever.",
    ]
}
