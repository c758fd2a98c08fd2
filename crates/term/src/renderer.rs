//! TerminalScreen: flushes framebuffers to a terminal, sending only what changed.
//!
//! The first frame (and any frame after a size change) is a full redraw. After
//! that each row is scanned for runs of changed glyphs and only those runs are
//! re-emitted, with style changes coalesced.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};

pub const WINDOW_TITLE: &str = "Snake";

/// A horizontal run of changed glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

pub struct TerminalScreen<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalScreen<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Raw mode, alternate screen, hidden cursor, window title.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        encode_enter_into(&mut self.buf)?;
        self.flush_buf()?;
        self.last = None;
        Ok(())
    }

    /// Undo everything [`enter`](Self::enter) changed.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Draw `fb`, diffing against the previously drawn frame.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match &self.last {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(prev, fb, &mut self.buf)?;
            }
            _ => encode_full_into(fb, &mut self.buf)?,
        }
        self.flush_buf()?;

        match &mut self.last {
            Some(prev) => prev.clone_from(fb),
            None => self.last = Some(fb.clone()),
        }
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
/// Escape sequences that set up the game screen.
pub fn encode_enter_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::SetTitle(WINDOW_TITLE))?;
    out.queue(terminal::EnterAlternateScreen)?;
    out.queue(cursor::Hide)?;
    out.queue(terminal::DisableLineWrap)?;
    Ok(())
}

pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut styler = Styler::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for glyph in fb.row(y) {
            styler.print(out, *glyph)?;
        }
    }
    reset_into(out)
}

/// Encode only the changed runs between `prev` and `next` into `out`.
///
/// Both frames must have the same dimensions.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut styler = Styler::default();
    for run in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(run.x, run.y))?;
        let row = next.row(run.y);
        for glyph in &row[run.x as usize..(run.x + run.len) as usize] {
            styler.print(out, *glyph)?;
        }
    }
    reset_into(out)
}

/// Runs of glyphs that differ between two equally sized frames, row by row.
pub fn changed_runs<'a>(
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
) -> impl Iterator<Item = Run> + 'a {
    (0..next.height()).flat_map(move |y| {
        let a = prev.row(y);
        let b = next.row(y);
        let mut x = 0usize;
        std::iter::from_fn(move || {
            let differs = |i: usize| a.get(i) != b.get(i);
            while x < b.len() && !differs(x) {
                x += 1;
            }
            if x >= b.len() {
                return None;
            }
            let start = x;
            while x < b.len() && differs(x) {
                x += 1;
            }
            Some(Run {
                x: start as u16,
                y,
                len: (x - start) as u16,
            })
        })
    })
}

/// Emits style changes only when the style actually differs.
#[derive(Default)]
struct Styler {
    current: Option<CellStyle>,
}

impl Styler {
    fn print(&mut self, out: &mut Vec<u8>, glyph: Glyph) -> Result<()> {
        if self.current != Some(glyph.style) {
            out.queue(SetAttribute(Attribute::Reset))?;
            out.queue(SetForegroundColor(to_color(glyph.style.fg)))?;
            out.queue(SetBackgroundColor(to_color(glyph.style.bg)))?;
            if glyph.style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            self.current = Some(glyph.style);
        }
        out.queue(Print(glyph.ch))?;
        Ok(())
    }
}

fn reset_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(ch: char) -> Glyph {
        Glyph::new(ch, CellStyle::default())
    }

    #[test]
    fn enter_sequence_sets_title_and_alternate_screen() {
        let mut out = Vec::new();
        encode_enter_into(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\x1b]0;Snake\x07"));
        assert!(text.contains("\x1b[?1049h"));
        assert!(text.contains("\x1b[?25l"));
    }

    #[test]
    fn changed_runs_coalesce_adjacent_glyphs() {
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);
        for x in 1..=3 {
            b.set(x, 0, glyph('X'));
        }
        b.set(5, 1, glyph('Y'));

        let runs: Vec<Run> = changed_runs(&a, &b).collect();
        assert_eq!(
            runs,
            vec![Run { x: 1, y: 0, len: 3 }, Run { x: 5, y: 1, len: 1 }]
        );
    }

    #[test]
    fn identical_frames_have_no_runs() {
        let a = FrameBuffer::new(4, 4);
        assert_eq!(changed_runs(&a, &a.clone()).count(), 0);
    }

    #[test]
    fn second_identical_draw_writes_only_resets() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.put_str(0, 0, "ab", CellStyle::default());

        let mut screen = TerminalScreen::new(Vec::new());
        screen.draw(&fb).unwrap();
        let first = screen.get_ref().len();
        screen.draw(&fb).unwrap();
        let second = screen.get_ref().len() - first;

        let mut resets = Vec::new();
        reset_into(&mut resets).unwrap();
        assert_eq!(second, resets.len());
        assert!(first > second);
    }

    #[test]
    fn full_redraw_prints_every_glyph() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(0, 0, "abc", CellStyle::default());
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("abc"));
    }
}
