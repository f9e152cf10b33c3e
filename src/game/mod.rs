mod direction;
mod grid;
mod snake;
use self::direction::Direction;
use self::grid::Bounds;
use self::snake::Snake;
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::sound::{Bell, Cue};
use crate::startup::ScoreTable;
use crate::util::{center_rect, get_display_area, Globals};
use crossterm::event::{poll, read, Event};
use rand::{seq::IteratorRandom, Rng};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
    Frame,
};
use std::collections::HashSet;
use std::time::Instant;

/// One game of snake: the playing field, the session counters, and the
/// tick-driven state machine that advances them.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    globals: Globals,
    score: u32,
    lives: u32,
    snake: Snake,
    food: Position,
    bounds: Bounds,
    phase: Phase,
    bell: Bell,

    /// Deadline for the next simulation tick.  `None` whenever the clock is
    /// stopped (awaiting the first move, paused, or game over); re-armed
    /// lazily, so stopping an already-stopped clock is a no-op.
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(globals: Globals) -> Self {
        Game::new_with_rng(globals, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(globals: Globals, rng: R) -> Game<R> {
        let bounds = Bounds::square(consts::TILE_COUNT);
        let bell = Bell::new(globals.config.sound);
        let mut game = Game {
            rng,
            globals,
            score: 0,
            lives: consts::STARTING_LIVES,
            snake: Snake::spawn(bounds),
            food: Position::ORIGIN,
            bounds,
            phase: Phase::AwaitingFirstMove,
            bell,
            next_tick: None,
        };
        game.place_food();
        game
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        if self.phase == Phase::Running {
            let when = *self
                .next_tick
                .get_or_insert_with(|| Instant::now() + consts::TICK_PERIOD);
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

    /// Run one simulation tick: move the snake one cell in its direction of
    /// travel and resolve what it ran into.
    fn advance(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(direction) = self.snake.direction() else {
            return;
        };
        match direction.advance(self.snake.head(), self.bounds) {
            // The self-collision test runs against the pre-move body, so
            // turning straight into the neck or chasing the tail both count.
            Some(head) if !self.snake.contains(head) => {
                let ate = head == self.food;
                self.snake.advance(head, ate);
                if ate {
                    self.eat_food();
                }
            }
            _ => self.lose_life(),
        }
    }

    fn eat_food(&mut self) {
        self.score += consts::FOOD_SCORE;
        if self.globals.profile.update_high_score(self.score) {
            self.globals.persist();
        }
        self.place_food();
        self.bell.play(Cue::FoodEaten);
    }

    fn lose_life(&mut self) {
        debug_assert!(self.lives > 0, "collision resolved after game over");
        self.lives = self.lives.saturating_sub(1);
        self.next_tick = None;
        if self.lives > 0 {
            // Score and high score survive a life loss; only the snake and
            // the food are reset.
            self.snake = Snake::spawn(self.bounds);
            self.place_food();
            self.phase = Phase::AwaitingFirstMove;
            self.bell.play(Cue::LifeLost);
        } else {
            self.phase = Phase::GameOver;
            let name = self.globals.profile.username.clone();
            self.globals.profile.leaderboard.record(name, self.score);
            self.globals.persist();
            self.bell.play(Cue::GameOver);
        }
    }

    /// Move the food to a cell chosen uniformly from those not occupied by
    /// the snake.  If the snake has somehow filled the entire grid, the food
    /// stays where it is.
    fn place_food(&mut self) {
        let occupied = self.snake.cells().iter().copied().collect::<HashSet<_>>();
        if let Some(pos) = self
            .bounds
            .positions()
            .filter(|p| !occupied.contains(p))
            .choose(&mut self.rng)
        {
            self.food = pos;
        }
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match self.phase {
            Phase::AwaitingFirstMove | Phase::Running => {
                if event == Event::FocusLost {
                    self.toggle_pause();
                } else {
                    match Command::from_key_event(event.as_key_press_event()?)? {
                        Command::Quit => return Some(Screen::Quit),
                        Command::Up => self.steer(Direction::North),
                        Command::Left => self.steer(Direction::West),
                        Command::Down => self.steer(Direction::South),
                        Command::Right => self.steer(Direction::East),
                        Command::Pause | Command::Esc => self.toggle_pause(),
                        _ => (),
                    }
                }
            }
            Phase::Paused => match Command::from_key_event(event.as_key_press_event()?)? {
                Command::Pause | Command::Esc | Command::Enter => self.toggle_pause(),
                Command::M => {
                    return Some(Screen::Start(crate::startup::StartScreen::new(
                        self.globals.clone(),
                    )))
                }
                Command::Quit | Command::Q => return Some(Screen::Quit),
                _ => (),
            },
            Phase::GameOver => {
                match Command::from_key_event(event.as_key_press_event()?)? {
                    Command::R => return Some(Screen::Game(Game::new(self.globals.clone()))),
                    Command::M => {
                        return Some(Screen::Start(crate::startup::StartScreen::new(
                            self.globals.clone(),
                        )))
                    }
                    Command::Quit | Command::Q => return Some(Screen::Quit),
                    _ => (),
                }
            }
        }
        None
    }

    /// Accept a directional input.  The first accepted turn of a life starts
    /// the clock and clears the "press an arrow key" banner.
    fn steer(&mut self, direction: Direction) {
        if self.snake.steer(direction) && self.phase == Phase::AwaitingFirstMove {
            self.phase = Phase::Running;
        }
    }

    /// Toggle the pause state.  Pausing stops the tick clock outright rather
    /// than gating the simulation; resuming re-arms it from scratch.  Has no
    /// effect after game over.
    fn toggle_pause(&mut self) {
        match self.phase {
            Phase::Running | Phase::AwaitingFirstMove => {
                self.phase = Phase::Paused;
                self.next_tick = None;
            }
            Phase::Paused => {
                self.phase = if self.snake.direction().is_some() {
                    Phase::Running
                } else {
                    Phase::AwaitingFirstMove
                };
            }
            Phase::GameOver => (),
        }
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [status_area, board_area, msg_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);

        Line::styled(
            format!(
                " Score: {}   Best: {}   {}",
                self.score, self.globals.profile.high_score, self.globals.profile.username
            ),
            consts::STATUS_BAR_STYLE,
        )
        .render(status_area, buf);
        let mut hearts = Line::default();
        for i in 0..consts::STARTING_LIVES {
            if i < self.lives {
                hearts.push_span(Span::styled(
                    consts::HEART_SYMBOL.to_string(),
                    consts::HEART_STYLE,
                ));
            } else {
                hearts.push_span(Span::raw(consts::LOST_HEART_SYMBOL.to_string()));
            }
            hearts.push_span(" ");
        }
        hearts.right_aligned().render(status_area, buf);

        let mut block_size = self.bounds.size();
        block_size.width = block_size.width.saturating_add(2);
        block_size.height = block_size.height.saturating_add(2);
        let block_area = center_rect(board_area, block_size);
        Block::bordered().render(block_area, buf);

        let mut board = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        board.draw_cell(self.food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        for &p in self.snake.cells().iter().skip(1) {
            board.draw_cell(p, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        if self.phase == Phase::GameOver {
            board.draw_cell(
                self.snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            board.draw_cell(
                self.snake.head(),
                self.snake.head_symbol(),
                consts::SNAKE_STYLE,
            );
        }

        match self.phase {
            Phase::Running => (),
            Phase::AwaitingFirstMove => {
                Line::from("Press an arrow key to start!")
                    .centered()
                    .render(msg_area, buf);
            }
            Phase::Paused => {
                let pause_area = center_rect(
                    display,
                    Size {
                        width: 20,
                        height: 3,
                    },
                );
                let block = Block::bordered()
                    .title(" PAUSED ")
                    .title_alignment(Alignment::Center)
                    .padding(Padding::horizontal(1))
                    .style(Style::reset());
                let inner = block.inner(pause_area);
                block.render(pause_area, buf);
                Line::from_iter([
                    Span::raw("Resume ("),
                    Span::styled("Space", consts::KEY_STYLE),
                    Span::raw(")"),
                ])
                .render(inner, buf);
            }
            Phase::GameOver => {
                let table = ScoreTable(&self.globals);
                let table_area = center_rect(
                    board_area,
                    Size {
                        width: ScoreTable::WIDTH,
                        height: table.height(),
                    },
                );
                Clear.render(table_area, buf);
                table.render(table_area, buf);
                Line::from_iter([
                    Span::raw("GAME OVER!  Restart ("),
                    Span::styled("r", consts::KEY_STYLE),
                    Span::raw(")  Start Screen ("),
                    Span::styled("m", consts::KEY_STYLE),
                    Span::raw(")  Quit ("),
                    Span::styled("q", consts::KEY_STYLE),
                    Span::raw(")"),
                ])
                .centered()
                .render(msg_area, buf);
            }
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    /// The snake is placed but not yet moving; the clock is stopped until
    /// the first directional input of this life.
    AwaitingFirstMove,
    Running,
    Paused,
    GameOver,
}
