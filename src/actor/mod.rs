mod enemy;

pub use enemy::{Ability, Enemy};

use crate::data::{class_profile, ClassProfile, POWER_USES_PER_COMBAT, STARTING_COINS};

pub const MAX_RESTS: u32 = 3;
pub const DEFAULT_NAME: &str = "Adventurer";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HeroClass {
    Warrior,
    Mage,
    Explorer,
    Thief,
    Drifter,
}

pub const PLAYABLE_CLASSES: [HeroClass; 4] = [
    HeroClass::Warrior,
    HeroClass::Mage,
    HeroClass::Explorer,
    HeroClass::Thief,
];

impl HeroClass {
    /// Case-insensitive lookup. An empty name picks the explorer, anything
    /// unrecognised becomes a drifter.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "" | "explorer" => HeroClass::Explorer,
            "warrior" => HeroClass::Warrior,
            "mage" => HeroClass::Mage,
            "thief" => HeroClass::Thief,
            _ => HeroClass::Drifter,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HeroClass::Warrior => "Warrior",
            HeroClass::Mage => "Mage",
            HeroClass::Explorer => "Explorer",
            HeroClass::Thief => "Thief",
            HeroClass::Drifter => "Drifter",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    pub class: HeroClass,
    pub level: i32,
    pub health: i32,
    pub max_health: i32,
    pub damage: i32,
    pub power_name: &'static str,
    pub power_uses: i32,
    pub coins: i32,
    pub vigor_amulet: bool,
    pub rests_used: u32,
    pub has_key_stone: bool,
    pub decisions_since_combat: u32,
    pub fights_won: u32,
    pub progress: i32,
}

impl Character {
    pub fn new(name: &str, class: HeroClass, level: i32) -> Self {
        let name = name.trim();
        let level = level.max(1);
        let profile = class_profile(class);
        let (max_health, damage) = scaled_stats(&profile, level);
        Self {
            name: if name.is_empty() {
                DEFAULT_NAME.to_string()
            } else {
                name.to_string()
            },
            class,
            level,
            health: max_health,
            max_health,
            damage,
            power_name: profile.power,
            power_uses: POWER_USES_PER_COMBAT,
            coins: STARTING_COINS,
            vigor_amulet: false,
            rests_used: 0,
            has_key_stone: false,
            decisions_since_combat: 0,
            fights_won: 0,
            progress: 0,
        }
    }

    /// Back to a fresh run: stats from the class profile, starting purse, no
    /// flags or counters. Only the retry-after-defeat path calls this.
    pub fn restore(&mut self) {
        *self = Self::new(&self.name, self.class, self.level);
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn missing_health(&self) -> i32 {
        (self.max_health - self.health).max(0)
    }

    /// Heals up to `amount`, never past max. Returns what was actually gained.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let gained = amount.max(0).min(self.missing_health());
        self.health += gained;
        gained
    }

    /// Lethal damage, floored at zero.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount.max(0)).max(0);
    }

    /// Non-lethal damage: scripted hazards leave the hero standing at 1.
    pub fn graze(&mut self, amount: i32) {
        self.health = (self.health - amount.max(0)).max(1.min(self.health));
    }

    pub fn can_rest(&self) -> bool {
        self.rests_used < MAX_RESTS
    }
}

fn scaled_stats(profile: &ClassProfile, level: i32) -> (i32, i32) {
    let extra = level - 1;
    (profile.health + extra * 10, profile.damage + extra)
}
