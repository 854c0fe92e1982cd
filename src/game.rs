use rand::Rng;
use tracing::{debug, info};

use crate::audio::{Cue, CuePlayer};
use crate::food;
use crate::grid::{Cell, Direction, Grid, Tile};
use crate::snake::{Collision, Snake};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum GameState {
    Playing,
    GameOver,
}

/// What a single tick did.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Tick {
    /// Nothing moved; the game is over.
    Idle,
    Moved,
    Ate,
    Crashed(Collision),
}

impl Collision {
    /// The cue played for this kind of crash.
    pub fn cue(self) -> Cue {
        match self {
            Collision::Wall => Cue::Explosion,
            Collision::Body => Cue::Crash,
        }
    }
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    pub snake: Vec<Tile>,
    pub food: Tile,
    pub score: u32,
    /// Present only once the game is over.
    pub game_over: Option<[String; 3]>,
}

impl Frame {
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }
}

pub struct Game {
    grid: Grid,
    state: GameState,
    snake: Snake,
    food: Cell,
    next_direction: Option<Direction>,
}

impl Game {
    pub fn new<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Self {
        Game {
            grid,
            state: GameState::Playing,
            snake: Snake::new(&grid),
            food: food::generate(&grid, rng),
            next_direction: None,
        }
    }

    /// Builds a game around an existing snake and food cell.
    pub fn with_parts(grid: Grid, snake: Snake, food: Cell) -> Self {
        Game {
            grid,
            state: GameState::Playing,
            snake,
            food,
            next_direction: None,
        }
    }

    /// Buffers a direction change for the next tick. Ignored once the game
    /// is over. The latest request before a tick wins.
    pub fn steer(&mut self, dir: Direction) {
        if self.state == GameState::Playing {
            self.next_direction = Some(dir);
        }
    }

    /// Starts a new round. Only honoured after a game over.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.state != GameState::GameOver {
            return false;
        }
        self.snake.reset(&self.grid);
        self.food = food::generate(&self.grid, rng);
        self.next_direction = None;
        self.state = GameState::Playing;
        info!("restarted");
        true
    }

    pub fn tick<R, P>(&mut self, rng: &mut R, audio: &mut P) -> Tick
    where
        R: Rng + ?Sized,
        P: CuePlayer + ?Sized,
    {
        if self.state == GameState::GameOver {
            return Tick::Idle;
        }

        if let Some(dir) = self.next_direction.take() {
            self.snake.set_direction(dir);
        }
        self.snake.advance();

        let mut outcome = Tick::Moved;
        if self.snake.head() == self.food {
            audio.play(Cue::Eat);
            self.snake.grow();
            self.food = food::generate(&self.grid, rng);
            debug!(score = self.snake.score(), food = ?self.food, "ate");
            outcome = Tick::Ate;
        }

        if let Some(collision) = self.snake.check_collision(&self.grid) {
            audio.play(collision.cue());
            audio.play(Cue::GameOver);
            self.state = GameState::GameOver;
            info!(?collision, score = self.snake.score(), "game over");
            return Tick::Crashed(collision);
        }

        outcome
    }

    pub fn frame(&self) -> Frame {
        let score = self.snake.score();
        Frame {
            width: self.grid.pixel_width(),
            height: self.grid.pixel_height(),
            snake: self.snake.body().map(|&cell| self.grid.tile(cell)).collect(),
            food: self.grid.tile(self.food),
            score,
            game_over: (self.state == GameState::GameOver).then(|| {
                [
                    "Game Over!".to_owned(),
                    format!("Final Score: {score}"),
                    "Press SPACE to restart".to_owned(),
                ]
            }),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.snake.score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Silent;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grid() -> Grid {
        Grid::new(40, 30, 20)
    }

    fn far_food() -> Cell {
        Cell::new(39, 0)
    }

    #[test]
    fn buffered_steer_applies_on_tick() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = Game::with_parts(grid(), Snake::new(&grid()), far_food());
        game.steer(Direction::Down);
        assert_eq!(game.snake().direction(), Direction::Right);
        game.tick(&mut rng, &mut Silent);
        assert_eq!(game.snake().direction(), Direction::Down);
        assert_eq!(game.snake().head(), Cell::new(10, 16));
    }

    #[test]
    fn latest_steer_before_tick_wins() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = Game::with_parts(grid(), Snake::new(&grid()), far_food());
        game.steer(Direction::Up);
        game.steer(Direction::Down);
        game.tick(&mut rng, &mut Silent);
        assert_eq!(game.snake().direction(), Direction::Down);
    }

    #[test]
    fn reversal_is_rejected_at_tick() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = Game::with_parts(grid(), Snake::new(&grid()), far_food());
        game.steer(Direction::Left);
        assert_eq!(game.tick(&mut rng, &mut Silent), Tick::Moved);
        assert_eq!(game.snake().direction(), Direction::Right);
        assert_eq!(game.snake().head(), Cell::new(11, 15));
    }

    #[test]
    fn eating_grows_and_respawns_food() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut game = Game::with_parts(grid(), Snake::new(&grid()), Cell::new(11, 15));
        assert_eq!(game.tick(&mut rng, &mut Silent), Tick::Ate);
        assert_eq!(game.score(), 10);
        assert_eq!(game.snake().desired_length(), 4);
        assert!(game.grid().contains(game.food()));
        game.tick(&mut rng, &mut Silent);
        assert_eq!(game.snake().len(), 4);
    }

    #[test]
    fn wall_crash_leaves_score_alone() {
        let mut rng = StdRng::seed_from_u64(3);
        let snake = Snake::from_cells([Cell::new(39, 5), Cell::new(38, 5)], Direction::Right)
            .expect("non-empty body");
        let mut game = Game::with_parts(grid(), snake, Cell::new(0, 0));
        assert_eq!(game.tick(&mut rng, &mut Silent), Tick::Crashed(Collision::Wall));
        assert_eq!(game.state(), GameState::GameOver);
        assert_eq!(game.score(), 0);
        assert_eq!(game.food(), Cell::new(0, 0));
    }

    #[test]
    fn game_over_freezes_the_board() {
        let mut rng = StdRng::seed_from_u64(3);
        let snake = Snake::from_cells([Cell::new(39, 5), Cell::new(38, 5)], Direction::Right)
            .expect("non-empty body");
        let mut game = Game::with_parts(grid(), snake, Cell::new(0, 0));
        game.tick(&mut rng, &mut Silent);
        let head = game.snake().head();
        game.steer(Direction::Up);
        assert_eq!(game.tick(&mut rng, &mut Silent), Tick::Idle);
        assert_eq!(game.snake().head(), head);
        assert_eq!(game.snake().direction(), Direction::Right);
    }

    #[test]
    fn restart_is_ignored_while_playing() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = Game::new(grid(), &mut rng);
        let food = game.food();
        assert!(!game.restart(&mut rng));
        assert_eq!(game.food(), food);
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn frame_has_no_panel_while_playing() {
        let game = Game::with_parts(grid(), Snake::new(&grid()), Cell::new(2, 3));
        let frame = game.frame();
        assert_eq!(frame.snake.len(), 3);
        assert_eq!(frame.snake[0], Tile { x: 200.0, y: 300.0, size: 20.0 });
        assert_eq!(frame.food, Tile { x: 40.0, y: 60.0, size: 20.0 });
        assert_eq!(frame.score_text(), "Score: 0");
        assert_eq!(frame.game_over, None);
        assert_eq!((frame.width, frame.height), (800.0, 600.0));
    }

    #[test]
    fn frame_shows_final_score_after_crash() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut snake = Snake::from_cells([Cell::new(39, 5), Cell::new(38, 5)], Direction::Right)
            .expect("non-empty body");
        snake.grow();
        snake.grow();
        let mut game = Game::with_parts(grid(), snake, Cell::new(0, 0));
        game.tick(&mut rng, &mut Silent);
        let panel = game.frame().game_over.expect("game over panel");
        assert_eq!(panel[0], "Game Over!");
        assert_eq!(panel[1], "Final Score: 20");
        assert_eq!(panel[2], "Press SPACE to restart");
    }
}
