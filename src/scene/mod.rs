pub mod actions;
pub mod gate;

use std::{borrow::Borrow, collections::HashMap, fmt};

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::audio::Cue;

pub const START_SCENE: &str = "start";
pub const FALLBACK_SCENE: &str = "deep_trail";
pub const DARK_ENDING: &str = "ending_dark";

const BUILTIN_SCENES: &str = include_str!("../../assets/scenes.json");

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct SceneId(String);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SceneCategory {
    Narrative,
    Combat,
    Shop,
    Ending,
}

impl SceneId {
    pub fn start() -> Self {
        Self::from(START_SCENE)
    }

    pub fn dark_ending() -> Self {
        Self::from(DARK_ENDING)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Categories come from the id prefix alone.
    pub fn category(&self) -> SceneCategory {
        if self.0.starts_with("ending") {
            SceneCategory::Ending
        } else if self.0.starts_with("combat") {
            SceneCategory::Combat
        } else if self.0.starts_with("shop") {
            SceneCategory::Shop
        } else {
            SceneCategory::Narrative
        }
    }
}

impl From<&str> for SceneId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Borrow<str> for SceneId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    Forest,
    #[default]
    Solid,
}

impl Terrain {
    pub fn footsteps(self) -> Cue {
        match self {
            Terrain::Forest => Cue::ForestSteps,
            Terrain::Solid => Cue::SolidSteps,
        }
    }
}

/// Which foe a combat scene spawns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encounter {
    /// The default shadow beast; every enemy turn may be a strong attack.
    Beast,
    /// Staged catalogue entry; strong attacks only past stage 1.
    Stage(u8),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fortune {
    Good,
    Bad,
}

/// Side effect attached to a scene, run before its menu is shown.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneAction {
    Combat {
        encounter: Encounter,
        victory: SceneId,
    },
    Maze,
    Shop {
        back: SceneId,
    },
    TakeKeyItem,
    Trap {
        damage: i32,
        #[serde(default)]
        per_progress: i32,
        next: SceneId,
    },
    Mend {
        amount: i32,
        next: SceneId,
    },
    Redirect {
        next: SceneId,
    },
    KeyItemFork {
        with_item: SceneId,
        without_item: SceneId,
    },
    Chest {
        fortune: Fortune,
        next: SceneId,
    },
}

impl SceneAction {
    fn targets(&self) -> Vec<&SceneId> {
        match self {
            SceneAction::Combat { victory, .. } => vec![victory],
            SceneAction::Maze | SceneAction::TakeKeyItem => Vec::new(),
            SceneAction::Shop { back } => vec![back],
            SceneAction::Trap { next, .. }
            | SceneAction::Mend { next, .. }
            | SceneAction::Redirect { next }
            | SceneAction::Chest { next, .. } => vec![next],
            SceneAction::KeyItemFork {
                with_item,
                without_item,
            } => vec![with_item, without_item],
        }
    }
}

/// Result of running a scene action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SceneOutcome {
    /// Fall through to the scene's menu.
    Stay,
    /// Leave immediately, skipping the menu and combat gating.
    GoTo(SceneId),
    /// Retry after defeat: the session starts over.
    Restart,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SceneOption {
    pub label: String,
    pub to: SceneId,
    #[serde(default)]
    pub cue: Option<Cue>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Scene {
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub options: Vec<SceneOption>,
    #[serde(default)]
    pub action: Option<SceneAction>,
    #[serde(default)]
    pub terrain: Terrain,
    #[serde(default)]
    pub ambience: Option<Cue>,
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("scene data is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("required scene `{0}` is missing")]
    MissingScene(&'static str),
    #[error("scene `{scene}` repeats option label `{label}`")]
    DuplicateLabel { scene: String, label: String },
}

/// Immutable id → scene table built once per process.
#[derive(Clone, Debug)]
pub struct SceneGraph {
    scenes: HashMap<SceneId, Scene>,
}

impl SceneGraph {
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(BUILTIN_SCENES)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let scenes: HashMap<SceneId, Scene> = serde_json::from_str(raw)?;
        let graph = Self { scenes };
        for required in [START_SCENE, FALLBACK_SCENE, DARK_ENDING] {
            if !graph.scenes.contains_key(required) {
                return Err(ContentError::MissingScene(required));
            }
        }
        for (id, scene) in &graph.scenes {
            let mut seen = Vec::with_capacity(scene.options.len());
            for option in &scene.options {
                if seen.contains(&option.label.as_str()) {
                    return Err(ContentError::DuplicateLabel {
                        scene: id.to_string(),
                        label: option.label.clone(),
                    });
                }
                seen.push(option.label.as_str());
            }
        }
        for (from, to) in graph.dangling_references() {
            warn!(%from, %to, "scene points at an unknown scene");
        }
        Ok(graph)
    }

    pub fn get(&self, id: &str) -> Option<&Scene> {
        self.scenes.get(id)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    #[cfg(test)]
    pub fn ids(&self) -> impl Iterator<Item = &SceneId> {
        self.scenes.keys()
    }

    /// Every (source, target) pair whose target is not a known scene.
    pub fn dangling_references(&self) -> Vec<(SceneId, SceneId)> {
        let mut dangling = Vec::new();
        for (id, scene) in &self.scenes {
            let targets = scene
                .options
                .iter()
                .map(|option| &option.to)
                .chain(scene.action.iter().flat_map(SceneAction::targets));
            for target in targets {
                if !self.scenes.contains_key(target) {
                    dangling.push((id.clone(), target.clone()));
                }
            }
        }
        dangling.sort();
        dangling
    }
}
