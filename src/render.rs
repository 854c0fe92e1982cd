use ggez::graphics::{self, Canvas, Color, DrawMode, DrawParam, Mesh, Rect, Text, TextAlign, TextLayout};
use ggez::mint::Point2;
use ggez::{Context, GameResult};

use crate::game::Frame;
use crate::grid::Tile;

pub const BACKGROUND_COLOR: Color = Color::BLACK;
const SNAKE_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const FOOD_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const TEXT_COLOR: Color = Color::WHITE;

/// Pixels left empty between neighbouring tiles.
const TILE_GAP: f32 = 2.0;
const SCORE_SCALE: f32 = 36.0;
const PANEL_SCALE: f32 = 48.0;
const PANEL_LINE_SPACING: f32 = 60.0;

fn tile_rect(tile: Tile) -> Rect {
    let size = (tile.size - TILE_GAP).max(1.0);
    Rect::new(tile.x, tile.y, size, size)
}

fn fill(ctx: &mut Context, canvas: &mut Canvas, tile: Tile, color: Color) -> GameResult {
    let mesh = Mesh::new_rectangle(ctx, DrawMode::fill(), tile_rect(tile), color)?;
    canvas.draw(&mesh, DrawParam::default());
    Ok(())
}

/// Draws one frame onto `canvas`: snake, food, score and, when present, the
/// centred game-over panel.
pub fn draw_frame(ctx: &mut Context, canvas: &mut Canvas, frame: &Frame) -> GameResult {
    for &tile in &frame.snake {
        fill(ctx, canvas, tile, SNAKE_COLOR)?;
    }
    fill(ctx, canvas, frame.food, FOOD_COLOR)?;

    let mut score_text = Text::new(frame.score_text());
    score_text.set_scale(SCORE_SCALE);
    canvas.draw(
        &score_text,
        DrawParam::default()
            .dest(Point2 { x: 10.0, y: 10.0 })
            .color(TEXT_COLOR),
    );

    if let Some(lines) = &frame.game_over {
        let center_x = frame.width / 2.0;
        let center_y = frame.height / 2.0;
        for (i, line) in lines.iter().enumerate() {
            let mut text = Text::new(line.as_str());
            text.set_scale(PANEL_SCALE).set_layout(TextLayout {
                h_align: TextAlign::Middle,
                v_align: TextAlign::Begin,
            });
            let y = center_y + (i as f32 - 1.0) * PANEL_LINE_SPACING;
            canvas.draw(
                &text,
                DrawParam::default()
                    .dest(Point2 { x: center_x, y })
                    .color(TEXT_COLOR),
            );
        }
    }

    Ok(())
}

/// Clears the frame and draws `frame` onto it.
pub fn present(ctx: &mut Context, frame: &Frame) -> GameResult {
    let mut canvas = graphics::Canvas::from_frame(ctx, BACKGROUND_COLOR);
    draw_frame(ctx, &mut canvas, frame)?;
    canvas.finish(ctx)
}
