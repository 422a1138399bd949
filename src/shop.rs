use thiserror::Error;
use tracing::{debug, info};

use crate::{
    actor::Character,
    audio::Cue,
    data::items::{ShopEffect, ShopItem, shop_catalogue},
    render::Tone,
    scene::{SceneId, SceneOutcome},
    session::PlayContext,
};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error("Not enough coins: it costs {price} and you have {balance}.")]
    InsufficientFunds { price: i32, balance: i32 },
    #[error("You already own the {item}.")]
    AlreadyOwned { item: &'static str },
}

/// Charges the exact price and applies the effect, or changes nothing.
pub fn purchase(hero: &mut Character, item: &ShopItem) -> Result<(), PurchaseError> {
    if matches!(item.effect, ShopEffect::VigorAmulet { .. }) && hero.vigor_amulet {
        return Err(PurchaseError::AlreadyOwned { item: item.name });
    }
    if hero.coins < item.price {
        return Err(PurchaseError::InsufficientFunds {
            price: item.price,
            balance: hero.coins,
        });
    }
    hero.coins -= item.price;
    match item.effect {
        ShopEffect::Heal { amount } => {
            hero.heal(amount);
        }
        ShopEffect::FullHeal => hero.health = hero.max_health,
        ShopEffect::Sharpen { bonus } => hero.damage += bonus,
        ShopEffect::VigorAmulet { bonus } => {
            hero.vigor_amulet = true;
            hero.max_health += bonus;
            hero.heal(bonus);
        }
        ShopEffect::RestorePower { uses } => hero.power_uses = uses,
    }
    debug!(item = item.name, coins = hero.coins, "purchase applied");
    Ok(())
}

fn cue_for(effect: ShopEffect) -> Cue {
    match effect {
        ShopEffect::Heal { .. } | ShopEffect::FullHeal | ShopEffect::VigorAmulet { .. } => {
            Cue::Heal
        }
        ShopEffect::Sharpen { .. } => Cue::Sharpen,
        ShopEffect::RestorePower { .. } => Cue::Select,
    }
}

fn show_menu(hero: &Character, catalogue: &[ShopItem], ctx: &mut PlayContext<'_>) {
    ctx.frontend.narrate(
        Tone::Loot,
        &format!(
            "\nCoins: {}  Health: {}/{}  Damage: {}  Power uses: {}",
            hero.coins, hero.health, hero.max_health, hero.damage, hero.power_uses
        ),
    );
    for (idx, item) in catalogue.iter().enumerate() {
        ctx.frontend.narrate(
            Tone::Plain,
            &format!(
                "{}. {} ({}) - {} coins",
                idx + 1,
                item.name,
                item.description,
                item.price
            ),
        );
    }
    ctx.frontend.narrate(Tone::Plain, &format!("{}. Leave", catalogue.len() + 1));
}

/// The merchant's counter. Loops until the hero leaves, then returns to
/// `back`. An empty answer or a closed input also leaves.
pub fn run(hero: &mut Character, back: &SceneId, ctx: &mut PlayContext<'_>) -> SceneOutcome {
    let catalogue = shop_catalogue();
    info!(coins = hero.coins, "shop opened");
    ctx.frontend.play_cue(Cue::ShopTheme);
    ctx.frontend.narrate(Tone::Title, "A hooded merchant spreads out their wares.");

    loop {
        show_menu(hero, &catalogue, ctx);
        let Some(answer) = ctx.frontend.prompt("What do you buy? ") else {
            break;
        };
        let answer = answer.trim();
        if answer.is_empty() {
            break;
        }
        let choice = answer.parse::<usize>().ok().filter(|n| *n >= 1);
        match choice {
            Some(n) if n == catalogue.len() + 1 => break,
            Some(n) if n <= catalogue.len() => {
                let item = &catalogue[n - 1];
                match purchase(hero, item) {
                    Ok(()) => {
                        ctx.frontend.play_cue(cue_for(item.effect));
                        ctx.frontend.narrate(Tone::Good, &format!("You bought the {}.", item.name));
                    }
                    Err(rejected) => ctx.frontend.narrate(Tone::Warning, &rejected.to_string()),
                }
            }
            _ => ctx.frontend.narrate(Tone::Bad, "Invalid option."),
        }
    }

    ctx.frontend.narrate(Tone::Dim, "You leave the merchant behind.");
    SceneOutcome::GoTo(back.clone())
}
