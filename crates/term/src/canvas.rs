//! TerminalCanvas: the terminal implementation of [`Renderer`].
//!
//! Draw calls update a logical scene (one color role per grid cell plus text
//! spans). `present` composes the scene into a framebuffer and hands it to a
//! [`TerminalScreen`], which only sends what changed.
//!
//! Two grid rows share one terminal row: each terminal character is an upper
//! half block whose foreground is the upper cell and whose background is the
//! lower cell. A 40x40 grid therefore needs 42x22 terminal cells with the
//! border, which fits a standard 80x24 terminal. Text spans take one terminal
//! column per character and sit on the terminal row of their grid row.

use std::io::{self, Write};

use anyhow::Result;

use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use crate::palette::Palette;
use crate::renderer::TerminalScreen;
use crate::types::{Cell, ColorRole, FontRole, Renderer};

const UPPER_HALF: char = '▀';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewportSource {
    /// Ask the terminal at every present.
    Terminal,
    Fixed(Viewport),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TextSpan {
    position: Cell,
    content: String,
    font: FontRole,
    color: ColorRole,
}

/// Everything drawn since the last clear.
#[derive(Debug, Clone)]
struct Scene {
    columns: u16,
    rows: u16,
    cells: Vec<ColorRole>,
    texts: Vec<TextSpan>,
}

impl Scene {
    fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            cells: vec![ColorRole::Background; columns as usize * rows as usize],
            texts: Vec::new(),
        }
    }

    fn clear(&mut self) {
        self.cells.fill(ColorRole::Background);
        self.texts.clear();
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        let inside = cell.x >= 0
            && cell.y >= 0
            && cell.x < i32::from(self.columns)
            && cell.y < i32::from(self.rows);
        inside.then(|| cell.y as usize * self.columns as usize + cell.x as usize)
    }

    fn role_at(&self, x: u16, y: u16) -> ColorRole {
        self.index(Cell::new(i32::from(x), i32::from(y)))
            .map(|i| self.cells[i])
            .unwrap_or(ColorRole::Background)
    }
}

pub struct TerminalCanvas<W: Write = io::Stdout> {
    screen: TerminalScreen<W>,
    palette: Palette,
    viewport: ViewportSource,
    scene: Scene,
    fb: FrameBuffer,
}

impl TerminalCanvas<io::Stdout> {
    /// A canvas on stdout for a `columns` x `rows` grid.
    pub fn stdout(columns: u16, rows: u16) -> Self {
        Self {
            screen: TerminalScreen::stdout(),
            palette: Palette::classic(),
            viewport: ViewportSource::Terminal,
            scene: Scene::new(columns, rows),
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.screen.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.screen.exit()
    }
}

impl<W: Write> TerminalCanvas<W> {
    /// A canvas writing to `out` with a fixed viewport (no terminal queries).
    pub fn with_writer(columns: u16, rows: u16, out: W, viewport: Viewport) -> Self {
        Self {
            screen: TerminalScreen::new(out),
            palette: Palette::classic(),
            viewport: ViewportSource::Fixed(viewport),
            scene: Scene::new(columns, rows),
            fb: FrameBuffer::new(viewport.width, viewport.height),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Terminal size needed to show the whole grid with its border.
    pub fn required_viewport(&self) -> Viewport {
        Viewport::new(
            self.scene.columns + 2,
            self.scene.rows.div_ceil(2) + 2,
        )
    }

    /// The last composed frame.
    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn screen(&self) -> &TerminalScreen<W> {
        &self.screen
    }

    fn current_viewport(&self) -> Viewport {
        match self.viewport {
            ViewportSource::Fixed(vp) => vp,
            ViewportSource::Terminal => crossterm::terminal::size()
                .map(|(w, h)| Viewport::new(w, h))
                .unwrap_or_else(|_| Viewport::new(80, 24)),
        }
    }

    /// Compose the scene into the framebuffer, centered in `viewport`.
    fn compose(&mut self, viewport: Viewport) {
        self.fb.resize(viewport.width, viewport.height);
        self.fb.fill(Glyph::default());

        let frame = self.required_viewport();
        let start_x = viewport.width.saturating_sub(frame.width) / 2;
        let start_y = viewport.height.saturating_sub(frame.height) / 2;
        let inner_x = start_x + 1;
        let inner_y = start_y + 1;

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(
            &mut self.fb,
            start_x,
            start_y,
            frame.width,
            frame.height,
            border,
        );

        for ty in 0..self.scene.rows.div_ceil(2) {
            for x in 0..self.scene.columns {
                let upper = self.scene.role_at(x, ty * 2);
                let lower = self.scene.role_at(x, ty * 2 + 1);
                let style = CellStyle::new(self.palette.color(upper), self.palette.color(lower));
                self.fb
                    .set(inner_x + x, inner_y + ty, Glyph::new(UPPER_HALF, style));
            }
        }

        let limit_x = inner_x + self.scene.columns;
        let background = self.palette.color(ColorRole::Background);
        for span in &self.scene.texts {
            if span.position.x < 0 || span.position.y < 0 {
                continue;
            }
            let tx = inner_x.saturating_add(span.position.x as u16);
            let ty = inner_y.saturating_add((span.position.y / 2) as u16);
            let mut style = CellStyle::new(self.palette.color(span.color), background);
            if matches!(span.font, FontRole::Title | FontRole::Score) {
                style = style.bold();
            }
            self.fb
                .put_str_clipped(tx, ty, &span.content, style, limit_x);
        }
    }
}

impl<W: Write> Renderer for TerminalCanvas<W> {
    fn clear(&mut self) -> Result<()> {
        self.scene.clear();
        Ok(())
    }

    fn draw_cell(&mut self, cell: Cell, color: ColorRole) -> Result<()> {
        if let Some(i) = self.scene.index(cell) {
            self.scene.cells[i] = color;
        }
        Ok(())
    }

    fn draw_text(
        &mut self,
        content: &str,
        position: Cell,
        font: FontRole,
        color: ColorRole,
    ) -> Result<()> {
        let span = TextSpan {
            position,
            content: content.to_string(),
            font,
            color,
        };
        match self.scene.texts.iter_mut().find(|t| t.position == position) {
            Some(existing) => *existing = span,
            None => self.scene.texts.push(span),
        }
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        let viewport = self.current_viewport();
        self.compose(viewport);
        self.screen.draw(&self.fb)
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.set(x, y, Glyph::new('┌', style));
    fb.set(x + w - 1, y, Glyph::new('┐', style));
    fb.set(x, y + h - 1, Glyph::new('└', style));
    fb.set(x + w - 1, y + h - 1, Glyph::new('┘', style));

    for dx in 1..w - 1 {
        fb.set(x + dx, y, Glyph::new('─', style));
        fb.set(x + dx, y + h - 1, Glyph::new('─', style));
    }
    for dy in 1..h - 1 {
        fb.set(x, y + dy, Glyph::new('│', style));
        fb.set(x + w - 1, y + dy, Glyph::new('│', style));
    }
}
