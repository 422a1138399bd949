use serde::Deserialize;

/// Sound moments the core announces. Playback belongs to the frontend and is
/// fire-and-forget; the core never waits on or inspects the result.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    AdventureTheme,
    CombatTheme,
    Victory,
    Defeat,
    Sword,
    Shield,
    Heal,
    Sharpen,
    ShopTheme,
    Select,
    ForestSteps,
    SolidSteps,
    RiverAmbience,
    RiverCrossing,
    CaveAmbience,
    ChestOpen,
    ChestGood,
    ChestBad,
    Meditation,
    Echo,
    Angel,
}

impl Cue {
    /// Sound file stem for this cue.
    pub fn asset(&self) -> &'static str {
        match self {
            Cue::AdventureTheme => "ADVENTURE-1",
            Cue::CombatTheme => "FIGHT-1",
            Cue::Victory => "WINBATTLE-1",
            Cue::Defeat => "LOSE-1",
            Cue::Sword => "SWORD-1",
            Cue::Shield => "SHIELD-1",
            Cue::Heal => "HEAL-1",
            Cue::Sharpen => "SHARP-1",
            Cue::ShopTheme => "STORE-1",
            Cue::Select => "SELECT3-1",
            Cue::ForestSteps => "FORESTWALK-1",
            Cue::SolidSteps => "SOLIDWALK-1",
            Cue::RiverAmbience => "RIVER-1",
            Cue::RiverCrossing => "CROSSRIVER-1",
            Cue::CaveAmbience => "CAVE-1",
            Cue::ChestOpen => "CHEST-1",
            Cue::ChestGood => "POSITIVE-1",
            Cue::ChestBad => "BAD-1",
            Cue::Meditation => "MEDITATION-1",
            Cue::Echo => "ECHO-1",
            Cue::Angel => "ANGEL-1",
        }
    }
}
