//! Screen text and where it goes, in grid cells.
//!
//! Text blocks start 40% down the grid and are horizontally centered on their
//! widest line, with every line left-aligned to the same column. Lines are two
//! cells apart so they stay distinct on renderers that pack two grid rows into
//! one line of output.

use tui_snake_core::GridGeometry;

use crate::types::{Cell, ColorRole, FontRole};

pub const MENU_TITLE: &str = "HOW TO PLAY:";
pub const MENU_LINES: [&str; 3] = [
    "- Arrow Keys to Move",
    "- Enter to Start / Restart",
    "- Q to Exit",
];
pub const GAME_OVER_TITLE: &str = "GAME OVER!";

const LINE_SPACING: i32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub text: String,
    pub position: Cell,
    pub font: FontRole,
    pub color: ColorRole,
}

/// Instructions shown before the first game.
pub fn menu_screen(geometry: &GridGeometry) -> Vec<TextLine> {
    let mut lines = vec![(MENU_TITLE.to_string(), FontRole::Title, ColorRole::TitleText)];
    lines.extend(
        MENU_LINES
            .iter()
            .map(|l| (l.to_string(), FontRole::Body, ColorRole::BodyText)),
    );
    place_block(geometry, lines)
}

/// Final score and high score.
pub fn game_over_screen(geometry: &GridGeometry, score: u32, high_score: u32) -> Vec<TextLine> {
    place_block(
        geometry,
        vec![
            (
                GAME_OVER_TITLE.to_string(),
                FontRole::Title,
                ColorRole::TitleText,
            ),
            (
                format!("Score: {score}"),
                FontRole::Score,
                ColorRole::ScoreText,
            ),
            (
                format!("High Score: {high_score}"),
                FontRole::Score,
                ColorRole::HighScoreText,
            ),
        ],
    )
}

/// Where the running score is drawn: near the bottom-left corner.
pub fn score_position(geometry: &GridGeometry) -> Cell {
    Cell::new(
        (geometry.columns() * 3 / 100).max(1),
        geometry.rows() * 92 / 100,
    )
}

fn place_block(
    geometry: &GridGeometry,
    lines: Vec<(String, FontRole, ColorRole)>,
) -> Vec<TextLine> {
    let widest = lines
        .iter()
        .map(|(text, _, _)| text.chars().count() as i32)
        .max()
        .unwrap_or(0);
    let x = ((geometry.columns() - widest) / 2).max(0);
    let top = geometry.rows() * 2 / 5;

    lines
        .into_iter()
        .enumerate()
        .map(|(i, (text, font, color))| TextLine {
            text,
            position: Cell::new(x, top + LINE_SPACING * i as i32),
            font,
            color,
        })
        .collect()
}
