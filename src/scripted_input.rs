use std::{
    collections::VecDeque,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use tracing::{debug, info};

use crate::{
    audio::Cue,
    render::{Frontend, SceneView, Tone},
};

/// Replays canned answers and keeps a transcript of everything shown.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
    pub views: Vec<SceneView>,
    pub lines: Vec<(Tone, String)>,
    pub cues: Vec<Cue>,
    echo: bool,
}

impl ScriptedInput {
    /// One answer per line. Blank lines are real answers (an empty Enter);
    /// lines starting with `#` are comments.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut answers = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim_start().starts_with('#') {
                continue;
            }
            answers.push(line.trim().to_string());
        }
        info!(answers = answers.len(), "loaded input script");
        let mut script = Self::from_answers(answers);
        script.echo = true;
        Ok(script)
    }

    pub fn from_answers<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    #[cfg(test)]
    pub fn said(&self, needle: &str) -> bool {
        self.lines.iter().any(|(_, line)| line.contains(needle))
    }

    #[cfg(test)]
    pub fn titles(&self) -> Vec<&str> {
        self.views.iter().map(|view| view.title.as_str()).collect()
    }
}

impl Frontend for ScriptedInput {
    fn render(&mut self, view: &SceneView) {
        if self.echo {
            println!("\n{}\n{}", view.title, view.text);
            for (idx, option) in view.options.iter().enumerate() {
                println!("{}. {option}", idx + 1);
            }
        }
        self.views.push(view.clone());
    }

    fn narrate(&mut self, tone: Tone, line: &str) {
        if self.echo {
            println!("{line}");
        }
        self.lines.push((tone, line.to_string()));
    }

    fn prompt(&mut self, message: &str) -> Option<String> {
        self.prompts.push(message.to_string());
        let answer = self.answers.pop_front();
        if self.echo {
            println!("{message}{}", answer.as_deref().unwrap_or("<eof>"));
        }
        answer
    }

    fn play_cue(&mut self, cue: Cue) {
        debug!(cue = cue.asset(), "scripted cue");
        self.cues.push(cue);
    }
}
