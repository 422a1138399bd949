//! Random rolls behind a trait so combat, chests and the maze can be replayed.

use bracket_random::prelude::RandomNumberGenerator;

/// Source of every random decision the game makes.
pub trait Dice {
    /// Roll an integer in `[min, max]` inclusive.
    fn roll(&mut self, min: i32, max: i32) -> i32;

    /// Returns `true` with the given probability in `[0.0, 1.0]`.
    fn chance(&mut self, probability: f64) -> bool;
}

/// Concrete callers must go through the trait (`Dice::roll(&mut rng, ..)`):
/// the inherent `RandomNumberGenerator::roll` takes a `DiceType` instead.
impl Dice for RandomNumberGenerator {
    fn roll(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.range(min, max + 1)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.rand::<f64>() < probability
    }
}

pub fn seeded_dice(seed: Option<u64>) -> RandomNumberGenerator {
    match seed {
        Some(seed) => RandomNumberGenerator::seeded(seed),
        None => RandomNumberGenerator::new(),
    }
}

/// Fisher-Yates over any slice, driven by `dice`.
pub fn shuffle<T>(items: &mut [T], dice: &mut dyn Dice) {
    for i in (1..items.len()).rev() {
        let j = dice.roll(0, i as i32) as usize;
        items.swap(i, j);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_rolls_stay_inclusive() {
        let mut rng = seeded_dice(Some(7));
        for _ in 0..500 {
            let value = Dice::roll(&mut rng, 5, 15);
            assert!((5..=15).contains(&value));
        }
        assert_eq!(Dice::roll(&mut rng, 3, 3), 3);
    }

    #[test]
    fn certain_and_impossible_chances() {
        let mut rng = seeded_dice(Some(11));
        for _ in 0..100 {
            assert!(rng.chance(1.0));
            assert!(!rng.chance(0.0));
        }
    }

    #[test]
    fn shuffle_keeps_every_element() {
        let mut rng = seeded_dice(Some(3));
        let mut items = [1, 2, 3, 4];
        shuffle(&mut items, &mut rng);
        let mut sorted = items;
        sorted.sort_unstable();
        assert_eq!(sorted, [1, 2, 3, 4]);
    }
}
