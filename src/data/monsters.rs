use crate::actor::{Ability, Enemy};

#[derive(Clone, Debug, PartialEq)]
pub struct EnemyTemplate {
    pub name: &'static str,
    pub hp: i32,
    pub damage: i32,
    pub abilities: &'static [Ability],
}

const SHADOW_WOLF: EnemyTemplate = EnemyTemplate::new(
    "Shadow Wolf",
    70,
    14,
    &[Ability::Bleed { chance: 0.25 }],
);

const FOREST_SPECTRE: EnemyTemplate = EnemyTemplate::new(
    "Forest Spectre",
    90,
    16,
    &[Ability::Drain { chance: 0.3 }],
);

const CORRUPTED_GUARDIAN: EnemyTemplate = EnemyTemplate::new(
    "Corrupted Guardian",
    120,
    20,
    &[Ability::Stun { chance: 0.2 }],
);

const SHADOW_BEAST: EnemyTemplate = EnemyTemplate::new("Shadow Beast", 80, 12, &[]);

impl EnemyTemplate {
    /// Staged catalogue. Anything outside 1 and 2 gets the guardian on purpose:
    /// stage numbers past the end mean "hardest".
    pub fn for_stage(stage: u8) -> &'static Self {
        match stage {
            1 => &SHADOW_WOLF,
            2 => &FOREST_SPECTRE,
            _ => &CORRUPTED_GUARDIAN,
        }
    }

    pub fn shadow_beast() -> &'static Self {
        &SHADOW_BEAST
    }

    pub fn spawn(&self) -> Enemy {
        Enemy {
            name: self.name.to_string(),
            health: self.hp,
            max_health: self.hp,
            damage: self.damage,
            abilities: self.abilities.to_vec(),
        }
    }

    const fn new(name: &'static str, hp: i32, damage: i32, abilities: &'static [Ability]) -> Self {
        Self {
            name,
            hp,
            damage,
            abilities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_catalogue_clamps_to_guardian() {
        assert_eq!(EnemyTemplate::for_stage(1).name, "Shadow Wolf");
        assert_eq!(EnemyTemplate::for_stage(2).hp, 90);
        for stage in [0, 3, 4, 200] {
            let template = EnemyTemplate::for_stage(stage);
            assert_eq!(template.hp, 120);
            assert_eq!(template.damage, 20);
            assert_eq!(template.abilities, &[Ability::Stun { chance: 0.2 }]);
        }
    }

    #[test]
    fn spawned_enemy_starts_at_full_health() {
        let enemy = EnemyTemplate::shadow_beast().spawn();
        assert_eq!(enemy.health, 80);
        assert_eq!(enemy.max_health, 80);
        assert_eq!(enemy.damage, 12);
        assert!(enemy.abilities.is_empty());
    }
}
