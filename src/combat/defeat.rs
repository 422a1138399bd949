use tracing::info;

use crate::{
    actor::Character,
    audio::Cue,
    render::Tone,
    scene::{SceneId, SceneOutcome},
    session::PlayContext,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum RetryAnswer {
    Yes,
    No,
}

fn parse_retry(answer: Option<&str>) -> Option<RetryAnswer> {
    let Some(answer) = answer else {
        return Some(RetryAnswer::No);
    };
    let answer = answer.trim().to_lowercase();
    if answer.starts_with('y') {
        Some(RetryAnswer::Yes)
    } else if answer.is_empty() || answer.starts_with('n') {
        Some(RetryAnswer::No)
    } else {
        None
    }
}

/// Asks whether to start over. Yes restores the hero and requests a restart;
/// no, an empty answer or a closed input ends in darkness. Anything else asks
/// again.
pub fn handle(hero: &mut Character, ctx: &mut PlayContext<'_>) -> SceneOutcome {
    ctx.frontend.play_cue(Cue::Defeat);
    ctx.frontend.narrate(Tone::Bad, "You have been defeated...");
    loop {
        let answer = ctx.frontend.prompt("Try again from the start? (y/n): ");
        match parse_retry(answer.as_deref()) {
            Some(RetryAnswer::Yes) => {
                hero.restore();
                info!(hero = %hero.name, "retrying after defeat");
                return SceneOutcome::Restart;
            }
            Some(RetryAnswer::No) => return SceneOutcome::GoTo(SceneId::dark_ending()),
            None => ctx
                .frontend
                .narrate(Tone::Warning, "Invalid option. Answer y or n."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{actor::HeroClass, rng::testing::LoadedDice, scripted_input::ScriptedInput};

    fn defeated_hero() -> Character {
        let mut hero = Character::new("Finn", HeroClass::Explorer, 1);
        hero.health = 0;
        hero.coins = 33;
        hero
    }

    #[test]
    fn yes_restores_and_restarts() {
        let mut hero = defeated_hero();
        let mut script = ScriptedInput::from_answers(["maybe", "Yes"]);
        let mut dice = LoadedDice;
        let outcome = handle(&mut hero, &mut PlayContext::new(&mut script, &mut dice));
        assert_eq!(outcome, SceneOutcome::Restart);
        assert_eq!(hero.health, hero.max_health);
        assert_eq!(hero.coins, 10);
        assert_eq!(script.prompts.len(), 2);
        assert!(script.cues.contains(&Cue::Defeat));
    }

    #[test]
    fn no_empty_or_eof_end_darkly() {
        for answers in [vec!["n"], vec![""], vec![]] {
            let mut hero = defeated_hero();
            let mut script = ScriptedInput::from_answers(answers);
            let mut dice = LoadedDice;
            let outcome = handle(&mut hero, &mut PlayContext::new(&mut script, &mut dice));
            assert_eq!(outcome, SceneOutcome::GoTo(SceneId::dark_ending()));
            assert_eq!(hero.coins, 33);
        }
    }
}
