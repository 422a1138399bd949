//! The scene loop: owns the hero, walks the graph, applies action outcomes
//! and the pacing rules, and stops at an ending.

use tracing::{debug, info, warn};

use crate::{
    actor::{Character, MAX_RESTS},
    audio::Cue,
    render::{Frontend, SceneView, Tone, status_line},
    rng::Dice,
    scene::{
        FALLBACK_SCENE, Scene, SceneCategory, SceneGraph, SceneId, SceneOutcome, actions,
        gate::{self, MenuEntry},
    },
};

/// The collaborators every component needs, passed down explicitly.
pub struct PlayContext<'a> {
    pub frontend: &'a mut dyn Frontend,
    pub dice: &'a mut dyn Dice,
}

impl<'a> PlayContext<'a> {
    pub fn new(frontend: &'a mut dyn Frontend, dice: &'a mut dyn Dice) -> Self {
        Self { frontend, dice }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Ending(SceneId),
    /// Input closed at a scene menu.
    Abandoned,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Finished(SessionEnd),
}

pub struct Session<'g> {
    pub hero: Character,
    graph: &'g SceneGraph,
    current: SceneId,
}

impl<'g> Session<'g> {
    pub fn new(hero: Character, graph: &'g SceneGraph) -> Self {
        Self {
            hero,
            graph,
            current: SceneId::start(),
        }
    }

    pub fn run(&mut self, ctx: &mut PlayContext<'_>) -> SessionEnd {
        info!(hero = %self.hero.name, class = self.hero.class.as_str(), "session started");
        loop {
            if let Step::Finished(end) = self.step(ctx) {
                info!(?end, fights_won = self.hero.fights_won, "session finished");
                return end;
            }
        }
    }

    /// Plays the current scene once and moves to the next one.
    pub fn step(&mut self, ctx: &mut PlayContext<'_>) -> Step {
        // SceneGraph refuses to load without the fallback scene.
        let Some((id, scene)) = self.resolve_current() else {
            return Step::Finished(SessionEnd::Abandoned);
        };
        debug!(scene = %id, "entering scene");

        if id.category() == SceneCategory::Ending {
            render(scene, Vec::new(), ctx);
            if id == SceneId::dark_ending() {
                let _ = ctx.frontend.prompt("Press Enter to finish...");
            }
            return Step::Finished(SessionEnd::Ending(id));
        }

        if let Some(action) = &scene.action {
            if scene.options.is_empty() {
                render(scene, Vec::new(), ctx);
            }
            match actions::perform(action, &mut self.hero, ctx) {
                SceneOutcome::Stay => {}
                SceneOutcome::GoTo(next) => {
                    self.current = next;
                    return Step::Continue;
                }
                SceneOutcome::Restart => {
                    info!(hero = %self.hero.name, "restarting from the first scene");
                    self.current = SceneId::start();
                    return Step::Continue;
                }
            }
        }

        self.choose(&id, scene, ctx)
    }

    /// Unknown ids are logged and replaced by the fallback scene.
    fn resolve_current(&mut self) -> Option<(SceneId, &'g Scene)> {
        let graph = self.graph;
        if graph.get(self.current.as_str()).is_none() {
            warn!(scene = %self.current, fallback = FALLBACK_SCENE, "unknown scene");
            self.current = SceneId::from(FALLBACK_SCENE);
        }
        graph
            .get(self.current.as_str())
            .map(|scene| (self.current.clone(), scene))
    }

    fn choose(&mut self, id: &SceneId, scene: &'g Scene, ctx: &mut PlayContext<'_>) -> Step {
        loop {
            let menu = gate::effective_menu(id, scene, &self.hero);
            if menu.is_empty() {
                warn!(scene = %id, "scene has nowhere to go");
                self.current = SceneId::from(FALLBACK_SCENE);
                return Step::Continue;
            }
            render(scene, menu.iter().map(|entry| entry.label().to_string()).collect(), ctx);
            ctx.frontend.narrate(Tone::Dim, &status_line(&self.hero));

            let Some(answer) = ctx.frontend.prompt("Choose an option: ") else {
                return Step::Finished(SessionEnd::Abandoned);
            };
            let picked = answer
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|idx| menu.get(idx));
            match picked {
                None => ctx.frontend.narrate(Tone::Bad, "Invalid option."),
                Some(MenuEntry::Rest) => match gate::rest(&mut self.hero) {
                    Some(gained) => {
                        ctx.frontend.play_cue(Cue::Meditation);
                        ctx.frontend.narrate(
                            Tone::Good,
                            &format!(
                                "You rest a while and recover {gained} health. Rests left: {}",
                                MAX_RESTS - self.hero.rests_used
                            ),
                        );
                    }
                    None => ctx
                        .frontend
                        .narrate(Tone::Warning, "You are already at full health."),
                },
                Some(MenuEntry::Go(option)) => {
                    let decision = gate::apply_gate(&mut self.hero, option.to.clone());
                    if decision.redirected {
                        ctx.frontend.narrate(
                            Tone::Dim,
                            "The forest is quiet for now. You need to explore a little more before the next fight.",
                        );
                    }
                    ctx.frontend.play_cue(Cue::Select);
                    if let Some(cue) = option.cue {
                        ctx.frontend.play_cue(cue);
                    }
                    self.announce_arrival(&decision.destination, ctx);
                    debug!(from = %id, to = %decision.destination, "transition");
                    self.current = decision.destination;
                    return Step::Continue;
                }
            }
        }
    }

    fn announce_arrival(&self, destination: &SceneId, ctx: &mut PlayContext<'_>) {
        let Some(next) = self.graph.get(destination.as_str()) else {
            return;
        };
        if matches!(
            destination.category(),
            SceneCategory::Narrative | SceneCategory::Shop
        ) {
            ctx.frontend.play_cue(next.terrain.footsteps());
        }
        if let Some(ambience) = next.ambience {
            ctx.frontend.play_cue(ambience);
        }
    }
}

fn render(scene: &Scene, options: Vec<String>, ctx: &mut PlayContext<'_>) {
    ctx.frontend.render(&SceneView {
        title: scene.title.clone(),
        text: scene.text.clone(),
        options,
    });
}
