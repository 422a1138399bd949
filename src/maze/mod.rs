use bracket_geometry::prelude::Point;
use bracket_pathfinding::prelude::{Algorithm2D, BaseMap, a_star_search};
use smallvec::SmallVec;
use tracing::debug;

use crate::{
    actor::Character,
    audio::Cue,
    render::Tone,
    rng::{Dice, shuffle},
    scene::{SceneOutcome, SceneId},
    session::PlayContext,
};

const CARDINALS: [Point; 4] = [
    Point { x: 1, y: 0 },
    Point { x: -1, y: 0 },
    Point { x: 0, y: 1 },
    Point { x: 0, y: -1 },
];
const VIEW_RADIUS: i32 = 2;
const TRAP_CHANCE: f64 = 0.5;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Path,
}

/// Square grid carved by a randomized depth-first walk from the top-left
/// corner. The exit corner is forced open afterwards.
#[derive(Clone, Debug)]
pub struct Maze {
    pub size: i32,
    cells: Vec<Cell>,
}

/// 7 below progress 2, 9 below progress 4, 11 afterwards.
pub fn size_for_progress(progress: i32) -> i32 {
    if progress < 2 {
        7
    } else if progress < 4 {
        9
    } else {
        11
    }
}

impl Maze {
    pub fn walled(size: i32) -> Self {
        let size = size.max(1);
        Self {
            size,
            cells: vec![Cell::Wall; (size * size) as usize],
        }
    }

    pub fn carve(size: i32, dice: &mut dyn Dice) -> Self {
        let mut maze = Self::walled(size);
        let origin = maze.start();
        maze.set(origin, Cell::Path);

        // Frames are (cell, shuffled directions, next direction to try).
        let mut stack = vec![(origin, maze.shuffled_dirs(dice), 0usize)];
        while let Some((cell, dirs, next)) = stack.last_mut() {
            if *next >= dirs.len() {
                stack.pop();
                continue;
            }
            let dir = dirs[*next];
            *next += 1;
            let cell = *cell;
            let target = Point::new(cell.x + dir.x * 2, cell.y + dir.y * 2);
            if is_uncarved(&maze, target) {
                maze.set(Point::new(cell.x + dir.x, cell.y + dir.y), Cell::Path);
                maze.set(target, Cell::Path);
                let dirs = maze.shuffled_dirs(dice);
                stack.push((target, dirs, 0));
            }
        }

        let exit = maze.exit();
        maze.set(exit, Cell::Path);
        maze
    }

    fn shuffled_dirs(&self, dice: &mut dyn Dice) -> [Point; 4] {
        let mut dirs = CARDINALS;
        shuffle(&mut dirs, dice);
        dirs
    }

    pub fn start(&self) -> Point {
        Point::new(0, 0)
    }

    pub fn exit(&self) -> Point {
        Point::new(self.size - 1, self.size - 1)
    }

    fn idx(&self, point: Point) -> Option<usize> {
        if self.in_bounds(point) {
            Some((point.y * self.size + point.x) as usize)
        } else {
            None
        }
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0 && point.x < self.size && point.y >= 0 && point.y < self.size
    }

    pub fn cell(&self, point: Point) -> Option<Cell> {
        self.idx(point).map(|idx| self.cells[idx])
    }

    fn set(&mut self, point: Point, cell: Cell) {
        if let Some(idx) = self.idx(point) {
            self.cells[idx] = cell;
        }
    }

    pub fn is_open(&self, point: Point) -> bool {
        self.cell(point) == Some(Cell::Path)
    }

    /// Shortest start-to-exit route including both ends, if the carve
    /// happened to connect them.
    pub fn solve(&self) -> Option<Vec<Point>> {
        let start = self.point2d_to_index(self.start());
        let end = self.point2d_to_index(self.exit());
        let path = a_star_search(start, end, self);
        if path.success {
            Some(
                path.steps
                    .into_iter()
                    .map(|idx| self.index_to_point2d(idx))
                    .collect(),
            )
        } else {
            None
        }
    }

    /// Partial view centred on `player`, one string per row.
    pub fn view_around(&self, player: Point) -> Vec<String> {
        let exit = self.exit();
        let mut rows = Vec::new();
        for y in (player.y - VIEW_RADIUS).max(0)..(player.y + VIEW_RADIUS + 1).min(self.size) {
            let mut row = String::new();
            for x in (player.x - VIEW_RADIUS).max(0)..(player.x + VIEW_RADIUS + 1).min(self.size) {
                let point = Point::new(x, y);
                row.push(if point == player {
                    'P'
                } else if point == exit {
                    'X'
                } else if self.is_open(point) {
                    '.'
                } else {
                    '#'
                });
            }
            rows.push(row);
        }
        rows
    }
}

fn is_uncarved(maze: &Maze, point: Point) -> bool {
    maze.cell(point) == Some(Cell::Wall)
}

impl BaseMap for Maze {
    fn is_opaque(&self, idx: usize) -> bool {
        self.cells.get(idx).is_none_or(|cell| *cell == Cell::Wall)
    }

    fn get_available_exits(&self, idx: usize) -> SmallVec<[(usize, f32); 10]> {
        let mut exits = SmallVec::new();
        let point = self.index_to_point2d(idx);
        for dir in CARDINALS {
            let dest = Point::new(point.x + dir.x, point.y + dir.y);
            if self.is_open(dest) {
                exits.push((self.point2d_to_index(dest), 1.0));
            }
        }
        exits
    }

    fn get_pathing_distance(&self, idx1: usize, idx2: usize) -> f32 {
        let p1 = self.index_to_point2d(idx1);
        let p2 = self.index_to_point2d(idx2);
        ((p1.x - p2.x).abs() + (p1.y - p2.y).abs()) as f32
    }
}

impl Algorithm2D for Maze {
    fn dimensions(&self) -> Point {
        Point::new(self.size, self.size)
    }

    fn in_bounds(&self, point: Point) -> bool {
        Maze::in_bounds(self, point)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Move {
    Step(Point),
    Abandon,
}

fn parse_move(input: &str) -> Option<Move> {
    match input.trim().to_lowercase().as_str() {
        "w" => Some(Move::Step(Point::new(0, -1))),
        "s" => Some(Move::Step(Point::new(0, 1))),
        "a" => Some(Move::Step(Point::new(-1, 0))),
        "d" => Some(Move::Step(Point::new(1, 0))),
        "q" => Some(Move::Abandon),
        _ => None,
    }
}

/// Plays one maze encounter for `hero`.
///
/// Moves cost budget only when they land; bumping a wall is free. Every
/// `max(6, size / 2)` landed steps a trap may spring. Escaping raises
/// progress and leads to the mountain when the hero carries the key stone,
/// the cave otherwise. Quitting, running out of steps or dying ends darkly.
pub fn run(hero: &mut Character, ctx: &mut PlayContext<'_>) -> SceneOutcome {
    let size = size_for_progress(hero.progress);
    let maze = Maze::carve(size, ctx.dice);
    debug!(
        size,
        shortest = ?maze.solve().map(|path| path.len()),
        "maze carved"
    );
    ctx.frontend.narrate(
        Tone::Title,
        &format!("You enter a mystic maze ({size}x{size}). Find the exit (X). Use WASD."),
    );

    let exit = maze.exit();
    let max_steps = size * size * 2;
    let trap_interval = (size / 2).max(6);
    let mut player = maze.start();
    let mut steps = 0;

    while player != exit && steps < max_steps && hero.is_alive() {
        ctx.frontend.narrate(Tone::Good, &maze.view_around(player).join("\n"));
        let Some(answer) = ctx.frontend.prompt("Move (w/a/s/d, q to quit): ") else {
            return SceneOutcome::GoTo(SceneId::dark_ending());
        };
        let delta = match parse_move(&answer) {
            Some(Move::Step(delta)) => delta,
            Some(Move::Abandon) => return SceneOutcome::GoTo(SceneId::dark_ending()),
            None => {
                ctx.frontend.narrate(Tone::Dim, "Invalid input.");
                continue;
            }
        };
        let target = Point::new(player.x + delta.x, player.y + delta.y);
        if !maze.is_open(target) {
            ctx.frontend.narrate(Tone::Warning, "You bump into a wall.");
            continue;
        }
        player = target;
        steps += 1;
        if steps % trap_interval == 0 && ctx.dice.chance(TRAP_CHANCE) {
            let damage = 5 + hero.progress * 3;
            hero.take_damage(damage);
            ctx.frontend.narrate(
                Tone::Bad,
                &format!("A hidden trap wounds you (-{damage}). Health: {}", hero.health),
            );
        }
    }

    if player == exit && hero.is_alive() {
        hero.progress += 1;
        ctx.frontend.play_cue(Cue::ChestGood);
        ctx.frontend.narrate(
            Tone::Good,
            "You escape the maze! You feel you have grown in experience.",
        );
        let next = if hero.has_key_stone {
            "mountain"
        } else {
            "cave"
        };
        return SceneOutcome::GoTo(SceneId::from(next));
    }

    ctx.frontend.narrate(Tone::Bad, "You fail in the maze...");
    SceneOutcome::GoTo(SceneId::dark_ending())
}
