use tracing::info;

use crate::{
    actor::{Character, HeroClass, PLAYABLE_CLASSES},
    audio::Cue,
    data::{class_profile, intro_lines},
    render::Tone,
    session::PlayContext,
};

/// Prologue and character creation. `None` means the player declined or the
/// input closed before a hero existed.
pub fn create_character(ctx: &mut PlayContext<'_>) -> Option<Character> {
    let skip_prose = wants_to_skip(ctx)?;
    ctx.frontend.play_cue(Cue::AdventureTheme);
    if !skip_prose {
        for line in intro_lines() {
            ctx.frontend.narrate(Tone::Plain, line);
        }
    }

    if !ready(ctx)? {
        ctx.frontend.narrate(Tone::Dim, "The forest will wait. Come back when you are ready.");
        return None;
    }

    let name = ctx.frontend.prompt("What is your name, traveller? ")?;
    let class = choose_class(ctx)?;
    let hero = Character::new(&name, class, 1);
    info!(hero = %hero.name, class = class.as_str(), "character created");

    ctx.frontend.narrate(Tone::Title, "\nYour adventurer:");
    ctx.frontend.narrate(
        Tone::Plain,
        &format!("{} the {}", hero.name, hero.class.as_str()),
    );
    ctx.frontend.narrate(
        Tone::Good,
        &format!("Health: {}/{}", hero.health, hero.max_health),
    );
    ctx.frontend.narrate(Tone::Plain, &format!("Damage: {}", hero.damage));
    ctx.frontend.narrate(
        Tone::Magic,
        &format!("Special power: {} ({} uses)", hero.power_name, hero.power_uses),
    );
    ctx.frontend.narrate(Tone::Loot, &format!("Coins: {}", hero.coins));
    Some(hero)
}

/// Only an answer starting with `y` skips; anything else shows the prologue.
fn wants_to_skip(ctx: &mut PlayContext<'_>) -> Option<bool> {
    let answer = ctx.frontend.prompt("Skip the introduction? (y/n): ")?;
    Some(answer.trim().to_lowercase().starts_with('y'))
}

fn ready(ctx: &mut PlayContext<'_>) -> Option<bool> {
    loop {
        let answer = ctx
            .frontend
            .prompt("Are you ready for the adventure? (y/n): ")?;
        match answer.trim().to_lowercase().chars().next() {
            Some('y') => return Some(true),
            Some('n') => return Some(false),
            _ => ctx.frontend.narrate(Tone::Warning, "Answer y or n."),
        }
    }
}

fn choose_class(ctx: &mut PlayContext<'_>) -> Option<HeroClass> {
    ctx.frontend.narrate(Tone::Title, "Choose your class:");
    for class in PLAYABLE_CLASSES {
        let profile = class_profile(class);
        ctx.frontend.narrate(
            Tone::Plain,
            &format!(
                "- {}: {} ({} HP, {} damage, {})",
                class.as_str(),
                profile.blurb,
                profile.health,
                profile.damage,
                profile.power
            ),
        );
    }
    loop {
        let answer = ctx.frontend.prompt("Class: ")?;
        let class = HeroClass::from_name(&answer);
        if !answer.trim().is_empty() && PLAYABLE_CLASSES.contains(&class) {
            return Some(class);
        }
        ctx.frontend.narrate(
            Tone::Warning,
            "Unknown class. Pick warrior, mage, explorer or thief.",
        );
    }
}
