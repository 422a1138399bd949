use tracing::debug;

use crate::{
    actor::Character,
    audio::Cue,
    combat, maze,
    render::Tone,
    session::PlayContext,
    shop,
};

use super::{Fortune, SceneAction, SceneOutcome};

/// Runs the action attached to a scene and reports where to go next.
pub fn perform(
    action: &SceneAction,
    hero: &mut Character,
    ctx: &mut PlayContext<'_>,
) -> SceneOutcome {
    debug!(?action, "scene action");
    match action {
        SceneAction::Combat { encounter, victory } => combat::run(hero, *encounter, victory, ctx),
        SceneAction::Maze => maze::run(hero, ctx),
        SceneAction::Shop { back } => shop::run(hero, back, ctx),
        SceneAction::TakeKeyItem => {
            if !hero.has_key_stone {
                hero.has_key_stone = true;
                ctx.frontend.narrate(
                    Tone::Magic,
                    "You pocket a smooth stone carved with a glowing rune.",
                );
            }
            SceneOutcome::Stay
        }
        SceneAction::Trap {
            damage,
            per_progress,
            next,
        } => {
            let hurt = damage + per_progress * hero.progress;
            hero.graze(hurt);
            ctx.frontend.narrate(
                Tone::Bad,
                &format!("You lose {hurt} health. Health: {}", hero.health),
            );
            SceneOutcome::GoTo(next.clone())
        }
        SceneAction::Mend { amount, next } => {
            let gained = hero.heal(*amount);
            ctx.frontend.play_cue(Cue::Heal);
            ctx.frontend.narrate(
                Tone::Good,
                &format!("You recover {gained} health. Health: {}", hero.health),
            );
            SceneOutcome::GoTo(next.clone())
        }
        SceneAction::Redirect { next } => SceneOutcome::GoTo(next.clone()),
        SceneAction::KeyItemFork {
            with_item,
            without_item,
        } => {
            if hero.has_key_stone {
                SceneOutcome::GoTo(with_item.clone())
            } else {
                SceneOutcome::GoTo(without_item.clone())
            }
        }
        SceneAction::Chest { fortune, next } => {
            ctx.frontend.play_cue(Cue::ChestOpen);
            match fortune {
                Fortune::Good => good_chest(hero, ctx),
                Fortune::Bad => bad_chest(hero, ctx),
            }
            SceneOutcome::GoTo(next.clone())
        }
    }
}

fn good_chest(hero: &mut Character, ctx: &mut PlayContext<'_>) {
    ctx.frontend.play_cue(Cue::ChestGood);
    if ctx.dice.chance(0.5) {
        if hero.missing_health() == 0 {
            hero.coins += 1;
            ctx.frontend.narrate(
                Tone::Loot,
                "A healing draught, but you are unhurt. You sell the flask for 1 coin.",
            );
        } else {
            let gained = hero.heal(ctx.dice.roll(10, 15));
            ctx.frontend.narrate(
                Tone::Good,
                &format!("A healing draught restores {gained} health."),
            );
        }
    } else {
        let found = ctx.dice.roll(2, 5);
        hero.coins += found;
        ctx.frontend.narrate(Tone::Loot, &format!("You find {found} coins."));
    }
}

fn bad_chest(hero: &mut Character, ctx: &mut PlayContext<'_>) {
    ctx.frontend.play_cue(Cue::ChestBad);
    if ctx.dice.chance(0.5) {
        let lost = ctx.dice.roll(1, 3).min(hero.coins);
        hero.coins -= lost;
        ctx.frontend.narrate(
            Tone::Bad,
            &format!("A cursed mist eats {lost} of your coins."),
        );
    } else {
        let hurt = ctx.dice.roll(5, 10);
        hero.graze(hurt);
        ctx.frontend.narrate(
            Tone::Bad,
            &format!("A hidden needle pricks you for {hurt} damage."),
        );
    }
}
