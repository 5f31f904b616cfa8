mod direction;
mod grid;
mod snake;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::{Board, Cell};
use self::snake::Snake;
use crate::app::Screen;
use crate::command::Command;
use crate::config::Tempo;
use crate::consts;
use crate::scores::ScoreBoard;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::io;
use std::time::{Duration, Instant};

/// The running simulation plus its scheduling state.
///
/// One instance covers any number of runs: a terminated run is restarted in
/// place via [`Game::reset`].
#[derive(Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    board: Board,
    snake: Snake,
    food: Cell,
    score: u32,
    state: GameState,
    tempo: Tempo,
    scores: Box<dyn ScoreBoard>,
    /// Best score on record, shown in the score bar
    best: u32,
    /// Did the run that just ended set a new high score?
    new_best: bool,
    /// Deadline for the next tick; `None` whenever no tick is scheduled
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(tempo: Tempo, scores: Box<dyn ScoreBoard>) -> Game {
        Game::new_with_rng(tempo, scores, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(tempo: Tempo, scores: Box<dyn ScoreBoard>, rng: R) -> Game<R> {
        let best = scores.best();
        Game {
            rng,
            board: Board::default(),
            snake: Snake::new(consts::INITIAL_HEAD, consts::INITIAL_HEADING),
            food: consts::INITIAL_FOOD,
            score: 0,
            state: GameState::Running,
            tempo,
            scores,
            best,
            new_best: false,
            next_tick: None,
        }
    }

    /// Wait for the next tick deadline or the next input event, whichever
    /// comes first, and act on it.  While the run is terminated there is no
    /// deadline and this just blocks on input.
    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        if self.running() {
            if self.next_tick.is_none() {
                self.next_tick = Some(Instant::now() + self.tick_interval());
            }
            let when = self.next_tick.expect("next_tick should be Some");
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.advance();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// Interval between ticks at the current score
    fn tick_interval(&self) -> Duration {
        self.tempo.interval(self.score)
    }

    /// Advance the simulation by one tick: apply any pending turn, move the
    /// head one cell, and either terminate the run, eat, or drag the tail.
    ///
    /// Stepping onto the cell the tail currently occupies counts as a
    /// collision, even though the tail would vacate it this tick.
    fn advance(&mut self) {
        if !self.running() {
            return;
        }
        let heading = self.snake.commit_heading();
        let head = self.snake.head().step(heading);
        if !self.board.contains(head) || self.snake.contains(head) {
            self.die();
            return;
        }
        let fed = head == self.food;
        self.snake.advance(head, fed);
        if fed {
            self.score += 1;
            self.place_food();
        }
    }

    /// Pick a new cell for the food by uniform sampling, retrying until it
    /// lands off the snake
    fn place_food(&mut self) {
        loop {
            let cell = Cell::new(
                self.rng.random_range(0..self.board.size()),
                self.rng.random_range(0..self.board.size()),
            );
            if !self.snake.contains(cell) {
                self.food = cell;
                return;
            }
        }
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match self.state {
            GameState::Running => {
                match Command::from_key_event(event.as_key_press_event()?)? {
                    Command::Quit | Command::Q => return Some(Screen::Quit),
                    Command::Up => self.snake.turn(Direction::North),
                    Command::Down => self.snake.turn(Direction::South),
                    Command::Left => self.snake.turn(Direction::West),
                    Command::Right => self.snake.turn(Direction::East),
                    Command::R => (),
                }
            }
            GameState::Dead => match Command::from_key_event(event.as_key_press_event()?)? {
                Command::R => self.reset(),
                Command::Quit | Command::Q => return Some(Screen::Quit),
                _ => (),
            },
        }
        None
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }

    /// Terminate the run: freeze the snake, cancel the scheduled tick, and
    /// report the final score to the score board
    fn die(&mut self) {
        self.state = GameState::Dead;
        self.next_tick = None;
        self.new_best = self.scores.record(self.score);
        if self.new_best {
            self.best = self.score;
        }
    }

    /// Restore the initial snake, food, heading, and score and start a fresh
    /// run.  The best score on record is untouched.
    pub(crate) fn reset(&mut self) {
        self.snake = Snake::new(consts::INITIAL_HEAD, consts::INITIAL_HEADING);
        self.food = consts::INITIAL_FOOD;
        self.score = 0;
        self.state = GameState::Running;
        self.new_best = false;
        self.next_tick = None;
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, block_area, msg_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(" Score: {}   Best: {}", self.score, self.best),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let side = u16::try_from(self.board.size()).unwrap_or(0);
        let block_area = center_rect(
            block_area,
            Size {
                width: side.saturating_add(2),
                height: side.saturating_add(2),
            },
        );
        Block::bordered().render(block_area, buf);

        let mut canvas = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for &cell in self.snake.cells().iter().skip(1) {
            canvas.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        canvas.draw_cell(self.food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if self.state == GameState::Dead {
            canvas.draw_cell(
                self.snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            canvas.draw_cell(self.snake.head(), self.snake.head_symbol(), consts::SNAKE_STYLE);
        }

        if self.state == GameState::Dead {
            let mut spans = vec![Span::raw(format!(" — GAME OVER — Score: {}", self.score))];
            if self.new_best {
                spans.push(Span::styled(" — New High Score!", consts::NEW_BEST_STYLE));
            }
            spans.push(Span::raw("  Restart ("));
            spans.push(Span::styled("r", consts::KEY_STYLE));
            spans.push(Span::raw(") — Quit ("));
            spans.push(Span::styled("q", consts::KEY_STYLE));
            spans.push(Span::raw(")"));
            Line::from(spans).render(msg_area, buf);
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, cell: Cell, symbol: char, style: Style) {
        let Ok(cx) = u16::try_from(cell.x) else {
            return;
        };
        let Ok(cy) = u16::try_from(cell.y) else {
            return;
        };
        let Some(x) = self.area.x.checked_add(cx) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(cy) else {
            return;
        };
        if let Some(buf_cell) = self.buf.cell_mut((x, y)) {
            buf_cell.set_char(symbol);
            buf_cell.set_style(Style::reset().patch(style));
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Dead,
}
