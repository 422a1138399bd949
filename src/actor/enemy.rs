/// Tagged on-hit modifiers an enemy may roll during its turn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Ability {
    /// Extra flat damage.
    Bleed { chance: f64 },
    /// Enemy recovers health.
    Drain { chance: f64 },
    /// Permanently dulls the hero's damage and weakens their attacks every
    /// fourth turn.
    Stun { chance: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub name: String,
    pub health: i32,
    pub max_health: i32,
    pub damage: i32,
    pub abilities: Vec<Ability>,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn has_stun(&self) -> bool {
        self.abilities
            .iter()
            .any(|ability| matches!(ability, Ability::Stun { .. }))
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount.max(0)).max(0);
    }

    pub fn recover(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.max_health);
    }
}
