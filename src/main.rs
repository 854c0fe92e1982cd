use ggez::event::{self, EventHandler};
use ggez::input::keyboard::KeyInput;
use ggez::{Context, GameResult};
use tracing::info;
use tracing_subscriber::EnvFilter;

use snake_arcade::{render, Command, Game, GameConfig, SoundBank, Speaker};

struct App {
    game: Game,
    sounds: SoundBank,
    ticks_per_second: u32,
}

impl App {
    fn new(ctx: &mut Context, config: &GameConfig) -> Self {
        let sounds = SoundBank::load(ctx, &config.sound_dir);
        let game = Game::new(config.grid(), &mut rand::thread_rng());
        App {
            game,
            sounds,
            ticks_per_second: config.ticks_per_second,
        }
    }
}

impl EventHandler for App {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while ctx.time.check_update_time(self.ticks_per_second) {
            let mut speaker = Speaker::new(&mut self.sounds, ctx);
            self.game.tick(&mut rand::thread_rng(), &mut speaker);
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        render::present(ctx, &self.game.frame())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeat: bool) -> GameResult {
        let Some(command) = input.keycode.and_then(Command::from_keycode) else {
            return Ok(());
        };
        match command {
            Command::Steer(dir) => self.game.steer(dir),
            Command::Restart => {
                self.game.restart(&mut rand::thread_rng());
            }
            Command::Quit => {
                info!(score = self.game.score(), "quitting");
                ctx.request_quit();
            }
        }
        Ok(())
    }
}

fn main() -> GameResult {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = GameConfig::load()?;
    let grid = config.grid();
    info!(
        width = grid.width,
        height = grid.height,
        tps = config.ticks_per_second,
        "starting snake"
    );

    let window_setup = ggez::conf::WindowSetup::default()
        .title("Snake Game")
        .vsync(true);
    let window_mode = ggez::conf::WindowMode::default()
        .dimensions(grid.pixel_width(), grid.pixel_height())
        .resizable(false);

    let (mut ctx, event_loop) = ggez::ContextBuilder::new("snake_arcade", "snake_arcade")
        .add_resource_path(config.resource_dir.clone())
        .window_setup(window_setup)
        .window_mode(window_mode)
        .build()?;

    let app = App::new(&mut ctx, &config);
    event::run(ctx, event_loop, app)
}
