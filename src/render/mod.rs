use std::io::{self, BufRead, Write};

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use tracing::{debug, warn};

use crate::{actor::Character, audio::Cue};

/// Colour family for a narrated line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Title,
    Good,
    Bad,
    Warning,
    Loot,
    Magic,
    Dim,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Plain => Color::Reset,
            Tone::Title => Color::Cyan,
            Tone::Good => Color::Green,
            Tone::Bad => Color::Red,
            Tone::Warning => Color::Yellow,
            Tone::Loot => Color::DarkYellow,
            Tone::Magic => Color::Magenta,
            Tone::Dim => Color::DarkGrey,
        }
    }
}

/// What a scene looks like once the session has resolved its effective menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneView {
    pub title: String,
    pub text: String,
    pub options: Vec<String>,
}

/// Everything the core needs from the outside world.
pub trait Frontend {
    fn render(&mut self, view: &SceneView);

    fn narrate(&mut self, tone: Tone, line: &str);

    /// Blocking line read. `None` means the stream was closed or interrupted
    /// and is handled as a cancel by every caller.
    fn prompt(&mut self, message: &str) -> Option<String>;

    fn play_cue(&mut self, cue: Cue);
}

pub fn status_line(hero: &Character) -> String {
    format!(
        "{} the {} · HP {}/{} · DMG {} · Coins {}",
        hero.name,
        hero.class.as_str(),
        hero.health,
        hero.max_health,
        hero.damage,
        hero.coins
    )
}

/// Plain stdin/stdout frontend with ANSI colours.
pub struct TerminalFrontend<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl TerminalFrontend<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalFrontend<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn write_line(&mut self, color: Color, bold: bool, line: &str) -> io::Result<()> {
        queue!(self.output, SetForegroundColor(color))?;
        if bold {
            queue!(self.output, SetAttribute(Attribute::Bold))?;
        }
        queue!(
            self.output,
            Print(line),
            SetAttribute(Attribute::Reset),
            ResetColor,
            Print("\n")
        )?;
        self.output.flush()
    }

    fn draw_scene(&mut self, view: &SceneView) -> io::Result<()> {
        queue!(self.output, Print("\n"))?;
        self.write_line(Color::Cyan, true, &view.title)?;
        queue!(self.output, Print("\n"))?;
        for line in view.text.lines() {
            self.write_line(Color::Green, false, line)?;
        }
        for (idx, option) in view.options.iter().enumerate() {
            queue!(
                self.output,
                SetForegroundColor(Color::Yellow),
                Print(idx + 1),
                ResetColor,
                Print(format!(". {option}\n"))
            )?;
        }
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> Frontend for TerminalFrontend<R, W> {
    fn render(&mut self, view: &SceneView) {
        if let Err(err) = self.draw_scene(view) {
            warn!(%err, "failed to draw scene");
        }
    }

    fn narrate(&mut self, tone: Tone, line: &str) {
        let bold = matches!(tone, Tone::Title | Tone::Bad);
        if let Err(err) = self.write_line(tone.color(), bold, line) {
            warn!(%err, "failed to write line");
        }
    }

    fn prompt(&mut self, message: &str) -> Option<String> {
        if let Err(err) = queue!(self.output, Print(message)).and_then(|()| self.output.flush()) {
            warn!(%err, "failed to write prompt");
        }
        let mut buffer = String::new();
        match self.input.read_line(&mut buffer) {
            Ok(0) => None,
            Ok(_) => Some(buffer.trim().to_string()),
            Err(err) => {
                warn!(%err, "input stream failed");
                None
            }
        }
    }

    fn play_cue(&mut self, cue: Cue) {
        debug!(cue = cue.asset(), "cue");
    }
}
