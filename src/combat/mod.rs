//! Turn-based duel between the hero and one enemy.
//!
//! Each round the hero picks an action; the enemy answers unless a defend or
//! heal already used up its turn. Per-combat limits live on [`Combat`], so
//! they reset with every encounter.

pub mod defeat;

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    actor::{Ability, Character, Enemy},
    audio::Cue,
    data::{POWER_USES_PER_COMBAT, monsters::EnemyTemplate},
    render::Tone,
    scene::{Encounter, SceneId, SceneOutcome},
    session::PlayContext,
};

pub const DEFEND_LIMIT: u32 = 2;
pub const HEAL_LIMIT: u32 = 3;
pub const HEAL_AMOUNT: i32 = 15;
pub const COUNTER_DAMAGE: i32 = 5;
pub const SPECIAL_BONUS: i32 = 10;
pub const STRONG_ATTACK_BONUS: i32 = 5;
pub const BLEED_DAMAGE: i32 = 4;
pub const DRAIN_HEAL: i32 = 6;
const STRONG_ATTACK_CHANCE: f64 = 0.5;
const STUN_WEAK_TURN: u32 = 4;
const REWARD_MIN: i32 = 5;
const REWARD_MAX: i32 = 15;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayerAction {
    Attack,
    Special,
    Defend,
    Heal,
}

impl PlayerAction {
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(PlayerAction::Attack),
            "2" => Some(PlayerAction::Special),
            "3" => Some(PlayerAction::Defend),
            "4" => Some(PlayerAction::Heal),
            _ => None,
        }
    }
}

/// Why an action did not happen. A rejected action costs no turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionRejected {
    #[error("You have no special power uses left.")]
    PowerExhausted,
    #[error("You cannot defend any more in this combat.")]
    DefendExhausted,
    #[error("You cannot heal any more in this combat.")]
    HealExhausted,
    #[error("Your health is already full.")]
    AlreadyHealthy,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CombatPhase {
    PlayerTurn,
    Victory,
    Defeat,
}

#[derive(Clone, Debug)]
pub struct Combat {
    pub enemy: Enemy,
    encounter: Encounter,
    turn: u32,
    defends_used: u32,
    heals_used: u32,
}

impl Combat {
    pub fn new(encounter: Encounter) -> Self {
        let template = match encounter {
            Encounter::Beast => EnemyTemplate::shadow_beast(),
            Encounter::Stage(stage) => EnemyTemplate::for_stage(stage),
        };
        Self::against(encounter, template.spawn())
    }

    pub fn against(encounter: Encounter, enemy: Enemy) -> Self {
        Self {
            enemy,
            encounter,
            turn: 0,
            defends_used: 0,
            heals_used: 0,
        }
    }

    pub fn defends_left(&self) -> u32 {
        DEFEND_LIMIT - self.defends_used
    }

    pub fn heals_left(&self) -> u32 {
        HEAL_LIMIT - self.heals_used
    }

    pub fn phase(&self, hero: &Character) -> CombatPhase {
        if !self.enemy.is_alive() {
            CombatPhase::Victory
        } else if !hero.is_alive() {
            CombatPhase::Defeat
        } else {
            CombatPhase::PlayerTurn
        }
    }

    /// One full round: the hero's action, then the enemy's answer when it
    /// still has one. Rejected actions leave every counter untouched.
    pub fn resolve_turn(
        &mut self,
        hero: &mut Character,
        action: PlayerAction,
        ctx: &mut PlayContext<'_>,
    ) -> Result<CombatPhase, ActionRejected> {
        self.check(hero, action)?;
        self.turn += 1;
        let enemy_turn_spent = self.player_acts(hero, action, ctx);
        if self.enemy.is_alive() && !enemy_turn_spent {
            self.enemy_acts(hero, ctx);
        }
        let phase = self.phase(hero);
        debug!(
            turn = self.turn,
            ?action,
            hero = hero.health,
            enemy = self.enemy.health,
            ?phase,
            "round resolved"
        );
        Ok(phase)
    }

    fn check(&self, hero: &Character, action: PlayerAction) -> Result<(), ActionRejected> {
        match action {
            PlayerAction::Attack => Ok(()),
            PlayerAction::Special if hero.power_uses <= 0 => Err(ActionRejected::PowerExhausted),
            PlayerAction::Defend if self.defends_used >= DEFEND_LIMIT => {
                Err(ActionRejected::DefendExhausted)
            }
            PlayerAction::Heal if self.heals_used >= HEAL_LIMIT => {
                Err(ActionRejected::HealExhausted)
            }
            PlayerAction::Heal if hero.missing_health() == 0 => Err(ActionRejected::AlreadyHealthy),
            PlayerAction::Special | PlayerAction::Defend | PlayerAction::Heal => Ok(()),
        }
    }

    /// Returns `true` when the action already spent the enemy's turn.
    fn player_acts(
        &mut self,
        hero: &mut Character,
        action: PlayerAction,
        ctx: &mut PlayContext<'_>,
    ) -> bool {
        match action {
            PlayerAction::Attack => {
                ctx.frontend.play_cue(Cue::Sword);
                let mut damage = hero.damage;
                if self.enemy.has_stun() && self.turn % STUN_WEAK_TURN == 0 {
                    ctx.frontend.narrate(
                        Tone::Dim,
                        "The corrupt aura throws off your aim (-20% damage this turn).",
                    );
                    damage = damage * 4 / 5;
                }
                self.enemy.take_damage(damage);
                ctx.frontend.narrate(Tone::Plain, &format!("You strike for {damage} damage."));
                false
            }
            PlayerAction::Special => {
                ctx.frontend.play_cue(Cue::Sword);
                let damage = hero.damage + SPECIAL_BONUS;
                hero.power_uses -= 1;
                self.enemy.take_damage(damage);
                ctx.frontend.narrate(
                    Tone::Plain,
                    &format!("You unleash {} for {damage} damage!", hero.power_name),
                );
                false
            }
            PlayerAction::Defend => {
                ctx.frontend.play_cue(Cue::Shield);
                self.defends_used += 1;
                self.enemy.take_damage(COUNTER_DAMAGE);
                ctx.frontend.narrate(
                    Tone::Good,
                    &format!("You block everything and counter for {COUNTER_DAMAGE}."),
                );
                true
            }
            PlayerAction::Heal => {
                ctx.frontend.play_cue(Cue::Heal);
                let healed = hero.heal(HEAL_AMOUNT);
                self.heals_used += 1;
                let retaliation = ctx.dice.roll(1, 10);
                hero.graze(retaliation);
                ctx.frontend.narrate(
                    Tone::Good,
                    &format!(
                        "You heal {healed}. {} seizes the moment and hurts you (-{retaliation}). Health: {}",
                        self.enemy.name, hero.health
                    ),
                );
                true
            }
        }
    }

    fn enemy_acts(&mut self, hero: &mut Character, ctx: &mut PlayContext<'_>) {
        let mut damage = self.enemy.damage;
        let may_strike_hard = match self.encounter {
            Encounter::Beast => true,
            Encounter::Stage(stage) => stage > 1,
        };
        if may_strike_hard && ctx.dice.chance(STRONG_ATTACK_CHANCE) {
            damage += STRONG_ATTACK_BONUS;
            ctx.frontend.narrate(
                Tone::Bad,
                &format!("{} launches a fierce attack!", self.enemy.name),
            );
        }

        let abilities = self.enemy.abilities.clone();
        for ability in abilities {
            match ability {
                Ability::Bleed { chance } => {
                    if ctx.dice.chance(chance) {
                        damage += BLEED_DAMAGE;
                        ctx.frontend.narrate(
                            Tone::Bad,
                            &format!(
                                "{} tears into you and you bleed (+{BLEED_DAMAGE}).",
                                self.enemy.name
                            ),
                        );
                    }
                }
                Ability::Drain { chance } => {
                    if ctx.dice.chance(chance) {
                        self.enemy.recover(DRAIN_HEAL);
                        ctx.frontend.narrate(
                            Tone::Magic,
                            &format!("{} drains your energy (+{DRAIN_HEAL}).", self.enemy.name),
                        );
                    }
                }
                Ability::Stun { chance } => {
                    if ctx.dice.chance(chance) {
                        hero.damage = (hero.damage * 9 / 10).max(1);
                        ctx.frontend.narrate(
                            Tone::Bad,
                            &format!(
                                "{} stuns you: your damage drops to {}.",
                                self.enemy.name, hero.damage
                            ),
                        );
                    }
                }
            }
        }

        let damage = damage.max(0);
        hero.take_damage(damage);
        ctx.frontend.narrate(Tone::Bad, &format!("You take {damage} damage."));
    }

    fn show_status(&self, hero: &Character, ctx: &mut PlayContext<'_>) {
        ctx.frontend.narrate(
            Tone::Good,
            &format!("\nYour health: {} / {}", hero.health, hero.max_health),
        );
        ctx.frontend.narrate(
            Tone::Bad,
            &format!("{} - Health: {}", self.enemy.name, self.enemy.health),
        );
        ctx.frontend.narrate(Tone::Plain, "Choose your action:");
        ctx.frontend.narrate(Tone::Plain, "1. Attack");
        ctx.frontend.narrate(
            Tone::Plain,
            &format!(
                "2. Special power ({}) [{} uses]",
                hero.power_name, hero.power_uses
            ),
        );
        ctx.frontend.narrate(
            Tone::Plain,
            &format!(
                "3. Defend (counter {COUNTER_DAMAGE} damage) [{} uses]",
                self.defends_left()
            ),
        );
        ctx.frontend.narrate(
            Tone::Plain,
            &format!("4. Heal (+{HEAL_AMOUNT}) [{} uses]", self.heals_left()),
        );
    }
}

/// Runs an encounter to its end and says where the story goes next.
///
/// Victory pays 5-15 coins, counts the win, reopens the combat gate and leads
/// to `victory`. Defeat hands over to [`defeat::handle`]. A closed input
/// stream counts as fleeing into the dark ending.
pub fn run(
    hero: &mut Character,
    encounter: Encounter,
    victory: &SceneId,
    ctx: &mut PlayContext<'_>,
) -> SceneOutcome {
    let mut combat = Combat::new(encounter);
    hero.power_uses = POWER_USES_PER_COMBAT;
    info!(enemy = %combat.enemy.name, ?encounter, "combat started");
    ctx.frontend.play_cue(Cue::CombatTheme);
    ctx.frontend.narrate(Tone::Bad, &format!("{} appears!", combat.enemy.name));

    loop {
        match combat.phase(hero) {
            CombatPhase::Victory => return claim_victory(hero, &combat, victory, ctx),
            CombatPhase::Defeat => {
                info!(enemy = %combat.enemy.name, turns = combat.turn, "hero defeated");
                return defeat::handle(hero, ctx);
            }
            CombatPhase::PlayerTurn => {}
        }

        combat.show_status(hero, ctx);
        let Some(answer) = ctx.frontend.prompt("Action (1-4): ") else {
            ctx.frontend.narrate(Tone::Dim, "You flee into the shadows...");
            return SceneOutcome::GoTo(SceneId::dark_ending());
        };
        let Some(action) = PlayerAction::from_input(&answer) else {
            ctx.frontend.narrate(Tone::Bad, "Invalid action.");
            continue;
        };
        if let Err(rejected) = combat.resolve_turn(hero, action, ctx) {
            ctx.frontend.narrate(Tone::Warning, &rejected.to_string());
        }
    }
}

fn claim_victory(
    hero: &mut Character,
    combat: &Combat,
    victory: &SceneId,
    ctx: &mut PlayContext<'_>,
) -> SceneOutcome {
    ctx.frontend.play_cue(Cue::Victory);
    ctx.frontend.narrate(
        Tone::Good,
        &format!("You have defeated {}!", combat.enemy.name),
    );
    let reward = ctx.dice.roll(REWARD_MIN, REWARD_MAX);
    hero.coins += reward;
    hero.fights_won += 1;
    hero.decisions_since_combat = 0;
    hero.progress = match combat.encounter {
        Encounter::Beast => hero.progress.max(1),
        Encounter::Stage(_) => hero.progress + 1,
    };
    ctx.frontend.narrate(
        Tone::Loot,
        &format!("You earn {reward} coins. Total: {}", hero.coins),
    );
    info!(
        enemy = %combat.enemy.name,
        turns = combat.turn,
        reward,
        next = %victory,
        "combat won"
    );
    SceneOutcome::GoTo(victory.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        actor::HeroClass,
        rng::testing::{LoadedDice, SequenceDice},
        scripted_input::ScriptedInput,
    };

    fn warrior() -> Character {
        Character::new("Finn", HeroClass::Warrior, 1)
    }

    #[test]
    fn attacking_the_beast_wins_deterministically() {
        let mut hero = warrior();
        hero.decisions_since_combat = 3;
        let mut script = ScriptedInput::from_answers(vec!["1"; 6]);
        let mut dice = LoadedDice;
        let victory = SceneId::from("forest_respite");

        let outcome = run(
            &mut hero,
            Encounter::Beast,
            &victory,
            &mut PlayContext::new(&mut script, &mut dice),
        );

        assert_eq!(outcome, SceneOutcome::GoTo(victory));
        // 80 HP / 15 per hit: six swings, five normal 12-damage replies.
        assert_eq!(script.remaining(), 0);
        assert_eq!(hero.health, 120 - 5 * 12);
        assert_eq!(hero.coins, 15);
        assert_eq!(hero.fights_won, 1);
        assert_eq!(hero.decisions_since_combat, 0);
        assert_eq!(hero.progress, 1);
        assert_eq!(script.cues.first(), Some(&Cue::CombatTheme));
        assert_eq!(script.cues.last(), Some(&Cue::Victory));
    }

    #[test]
    fn defend_blocks_and_counters() {
        let mut hero = warrior();
        let mut combat = Combat::new(Encounter::Beast);
        let mut script = ScriptedInput::default();
        let mut dice = SequenceDice::new(vec![], vec![true, true, true]);
        let mut ctx = PlayContext::new(&mut script, &mut dice);

        let phase = combat.resolve_turn(&mut hero, PlayerAction::Defend, &mut ctx);

        assert_eq!(phase, Ok(CombatPhase::PlayerTurn));
        assert_eq!(hero.health, 120);
        assert_eq!(combat.enemy.health, 80 - COUNTER_DAMAGE);
        assert_eq!(combat.defends_left(), 1);
    }

    #[test]
    fn heal_is_capped_per_combat() {
        let mut hero = warrior();
        hero.health = 20;
        let mut combat = Combat::new(Encounter::Beast);
        let mut script = ScriptedInput::default();
        let mut dice = LoadedDice;
        let mut ctx = PlayContext::new(&mut script, &mut dice);

        for _ in 0..HEAL_LIMIT {
            assert_eq!(
                combat.resolve_turn(&mut hero, PlayerAction::Heal, &mut ctx),
                Ok(CombatPhase::PlayerTurn)
            );
        }
        // Each heal nets +15 minus a 1-point retaliation.
        assert_eq!(hero.health, 20 + 3 * 14);
        assert_eq!(combat.heals_left(), 0);

        let before = (hero.health, combat.enemy.health, combat.turn);
        assert_eq!(
            combat.resolve_turn(&mut hero, PlayerAction::Heal, &mut ctx),
            Err(ActionRejected::HealExhausted)
        );
        assert_eq!(before, (hero.health, combat.enemy.health, combat.turn));
        assert_eq!(combat.turn, 3);
    }

    #[test]
    fn defend_is_capped_per_combat() {
        let mut hero = warrior();
        let mut combat = Combat::new(Encounter::Beast);
        let mut script = ScriptedInput::default();
        let mut dice = LoadedDice;
        let mut ctx = PlayContext::new(&mut script, &mut dice);

        for _ in 0..DEFEND_LIMIT {
            assert!(combat.resolve_turn(&mut hero, PlayerAction::Defend, &mut ctx).is_ok());
        }
        let before = (hero.health, combat.enemy.health, combat.turn);
        assert_eq!(
            combat.resolve_turn(&mut hero, PlayerAction::Defend, &mut ctx),
            Err(ActionRejected::DefendExhausted)
        );
        assert_eq!(before, (hero.health, combat.enemy.health, combat.turn));

        let fresh = Combat::new(Encounter::Beast);
        assert_eq!(fresh.defends_left(), DEFEND_LIMIT);
    }

    #[test]
    fn heal_at_full_health_is_a_free_no_op() {
        let mut hero = warrior();
        let mut combat = Combat::new(Encounter::Stage(1));
        let mut script = ScriptedInput::default();
        let mut dice = SequenceDice::new(vec![10], vec![true]);
        let mut ctx = PlayContext::new(&mut script, &mut dice);

        let result = combat.resolve_turn(&mut hero, PlayerAction::Heal, &mut ctx);

        assert_eq!(result, Err(ActionRejected::AlreadyHealthy));
        assert_eq!(hero.health, hero.max_health);
        assert_eq!(hero.coins, 10);
        assert_eq!(combat.heals_left(), HEAL_LIMIT);
        assert_eq!(combat.turn, 0);
    }

    #[test]
    fn heal_triggers_retaliation_instead_of_enemy_turn() {
        let mut hero = warrior();
        hero.health = 50;
        let mut combat = Combat::new(Encounter::Beast);
        let mut script = ScriptedInput::default();
        let mut dice = SequenceDice::new(vec![7], vec![true]);
        let mut ctx = PlayContext::new(&mut script, &mut dice);

        combat
            .resolve_turn(&mut hero, PlayerAction::Heal, &mut ctx)
            .expect("heal allowed");

        assert_eq!(hero.health, 50 + HEAL_AMOUNT - 7);
        assert_eq!(combat.enemy.health, 80);
        assert_eq!(combat.heals_left(), HEAL_LIMIT - 1);
    }

    #[test]
    fn heal_only_covers_the_deficit_and_retaliation_cannot_kill() {
        let mut hero = warrior();
        hero.health = 115;
        let mut combat = Combat::new(Encounter::Beast);
        let mut script = ScriptedInput::default();
        let mut dice = SequenceDice::new(vec![10], vec![]);
        let mut ctx = PlayContext::new(&mut script, &mut dice);
        combat
            .resolve_turn(&mut hero, PlayerAction::Heal, &mut ctx)
            .expect("heal allowed");
        assert_eq!(hero.health, 110);

        let mut weak = warrior();
        weak.max_health = 5;
        weak.health = 1;
        let mut dice = SequenceDice::new(vec![10], vec![]);
        let mut ctx = PlayContext::new(&mut script, &mut dice);
        combat
            .resolve_turn(&mut weak, PlayerAction::Heal, &mut ctx)
            .expect("heal allowed");
        assert_eq!(weak.health, 1);
    }

    #[test]
    fn special_power_is_limited_and_hits_harder() {
        let mut hero = warrior();
        let mut combat = Combat::new(Encounter::Stage(3));
        let mut script = ScriptedInput::default();
        let mut dice = LoadedDice;
        let mut ctx = PlayContext::new(&mut script, &mut dice);

        combat
            .resolve_turn(&mut hero, PlayerAction::Special, &mut ctx)
            .expect("first use");
        assert_eq!(combat.enemy.health, 120 - 25);
        combat
            .resolve_turn(&mut hero, PlayerAction::Special, &mut ctx)
            .expect("second use");
        assert_eq!(hero.power_uses, 0);
        assert_eq!(
            combat.resolve_turn(&mut hero, PlayerAction::Special, &mut ctx),
            Err(ActionRejected::PowerExhausted)
        );
        assert_eq!(combat.turn, 2);
    }

    #[test]
    fn stun_aura_weakens_every_fourth_attack() {
        let mut hero = warrior();
        hero.max_health = 1000;
        hero.health = 1000;
        let mut combat = Combat::new(Encounter::Stage(3));
        let mut script = ScriptedInput::default();
        let mut dice = LoadedDice;
        let mut ctx = PlayContext::new(&mut script, &mut dice);

        for _ in 0..3 {
            combat
                .resolve_turn(&mut hero, PlayerAction::Attack, &mut ctx)
                .expect("attack");
        }
        assert_eq!(combat.enemy.health, 120 - 45);
        combat
            .resolve_turn(&mut hero, PlayerAction::Attack, &mut ctx)
            .expect("attack");
        assert_eq!(combat.enemy.health, 120 - 45 - 12);
    }

    #[test]
    fn enemy_abilities_apply_when_rolled() {
        let mut script = ScriptedInput::default();

        let mut hero = warrior();
        let mut wolf = Combat::new(Encounter::Stage(1));
        let mut dice = SequenceDice::new(vec![], vec![true]);
        let mut ctx = PlayContext::new(&mut script, &mut dice);
        wolf.resolve_turn(&mut hero, PlayerAction::Attack, &mut ctx)
            .expect("attack");
        assert_eq!(hero.health, 120 - (14 + BLEED_DAMAGE));

        let mut hero = warrior();
        let mut spectre = Combat::new(Encounter::Stage(2));
        // strong attack roll, then drain roll
        let mut dice = SequenceDice::new(vec![], vec![true, true]);
        let mut ctx = PlayContext::new(&mut script, &mut dice);
        spectre
            .resolve_turn(&mut hero, PlayerAction::Attack, &mut ctx)
            .expect("attack");
        assert_eq!(hero.health, 120 - (16 + STRONG_ATTACK_BONUS));
        assert_eq!(spectre.enemy.health, 90 - 15 + DRAIN_HEAL);

        let mut hero = warrior();
        let mut guardian = Combat::new(Encounter::Stage(3));
        let mut dice = SequenceDice::new(vec![], vec![false, true, false, true]);
        let mut ctx = PlayContext::new(&mut script, &mut dice);
        guardian
            .resolve_turn(&mut hero, PlayerAction::Attack, &mut ctx)
            .expect("attack");
        assert_eq!(hero.damage, 13);
        guardian
            .resolve_turn(&mut hero, PlayerAction::Attack, &mut ctx)
            .expect("attack");
        assert_eq!(hero.damage, 11);
    }

    #[test]
    fn drain_never_exceeds_max_health() {
        let mut hero = warrior();
        let mut spectre = Combat::new(Encounter::Stage(2));
        let mut script = ScriptedInput::default();
        let mut dice = SequenceDice::new(vec![], vec![false, true]);
        let mut ctx = PlayContext::new(&mut script, &mut dice);
        spectre
            .resolve_turn(&mut hero, PlayerAction::Defend, &mut ctx)
            .expect("defend");
        spectre
            .resolve_turn(&mut hero, PlayerAction::Heal, &mut ctx)
            .expect_err("already healthy");
        assert_eq!(spectre.enemy.health, 85);
        hero.damage = 0;
        spectre
            .resolve_turn(&mut hero, PlayerAction::Attack, &mut ctx)
            .expect("attack");
        assert_eq!(spectre.enemy.health, 90);
    }

    #[test]
    fn stage_one_never_rolls_strong_attacks() {
        let mut hero = warrior();
        let mut wolf = Combat::against(
            Encounter::Stage(1),
            Enemy {
                name: "Pup".to_string(),
                health: 100,
                max_health: 100,
                damage: 3,
                abilities: Vec::new(),
            },
        );
        let mut script = ScriptedInput::default();
        let mut dice = SequenceDice::new(vec![], vec![true; 8]);
        let mut ctx = PlayContext::new(&mut script, &mut dice);
        wolf.resolve_turn(&mut hero, PlayerAction::Attack, &mut ctx)
            .expect("attack");
        assert_eq!(hero.health, 117);
    }

    #[test]
    fn combat_terminates_for_any_seed() {
        for seed in 0..25 {
            for encounter in [Encounter::Beast, Encounter::Stage(1), Encounter::Stage(3)] {
                let mut hero = Character::new("Finn", HeroClass::Mage, 1);
                let mut combat = Combat::new(encounter);
                let mut script = ScriptedInput::default();
                let mut dice = crate::rng::seeded_dice(Some(seed));
                let mut ctx = PlayContext::new(&mut script, &mut dice);
                let mut rounds = 0;
                while combat.phase(&hero) == CombatPhase::PlayerTurn {
                    combat
                        .resolve_turn(&mut hero, PlayerAction::Attack, &mut ctx)
                        .expect("attack always allowed");
                    rounds += 1;
                    assert!(rounds <= 120, "seed {seed} did not terminate");
                }
            }
        }
    }

    #[test]
    fn invalid_input_costs_nothing_and_losing_reaches_the_defeat_prompt() {
        let mut hero = Character::new("Finn", HeroClass::Mage, 1);
        hero.health = 10;
        let mut answers = vec!["9", "attack", "1"];
        answers.push("n");
        let mut script = ScriptedInput::from_answers(answers);
        let mut dice = LoadedDice;
        let outcome = run(
            &mut hero,
            Encounter::Stage(3),
            &SceneId::from("guardian_echo"),
            &mut PlayContext::new(&mut script, &mut dice),
        );
        assert_eq!(outcome, SceneOutcome::GoTo(SceneId::dark_ending()));
        assert_eq!(hero.health, 0);
        assert!(script.said("Invalid action."));
        assert!(script.said("You have been defeated..."));
        assert_eq!(hero.fights_won, 0);
    }

    #[test]
    fn closed_input_flees() {
        let mut hero = warrior();
        let mut script = ScriptedInput::default();
        let mut dice = LoadedDice;
        let outcome = run(
            &mut hero,
            Encounter::Beast,
            &SceneId::from("forest_respite"),
            &mut PlayContext::new(&mut script, &mut dice),
        );
        assert_eq!(outcome, SceneOutcome::GoTo(SceneId::dark_ending()));
    }

    #[test]
    fn power_uses_refill_per_combat() {
        let mut hero = warrior();
        hero.power_uses = 0;
        let mut script = ScriptedInput::from_answers(["2", "2", "1", "1", "1", "1"]);
        let mut dice = LoadedDice;
        let outcome = run(
            &mut hero,
            Encounter::Beast,
            &SceneId::from("forest_respite"),
            &mut PlayContext::new(&mut script, &mut dice),
        );
        assert_eq!(outcome, SceneOutcome::GoTo(SceneId::from("forest_respite")));
        assert_eq!(hero.power_uses, 0);
    }
}
