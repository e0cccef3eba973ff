//! Render collaborator interface and a plain-text renderer.

use std::io::{self, Write};

use crate::automaton::GridSize;
use crate::state::State;

/// A read-only view of one generation handed to a renderer.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    /// Row-major 0/1 cells; cell `i` sits at `(i mod width, i div width)`.
    pub cells: &'a [u8],
    pub size: GridSize,
    pub generation: u64,
}

impl<'a> Frame<'a> {
    pub fn of(state: &'a State) -> Self {
        Frame {
            cells: state.cells(),
            size: state.size(),
            generation: state.generation(),
        }
    }

    pub fn rows(&self) -> std::slice::Chunks<'a, u8> {
        self.cells.chunks(self.size.width())
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }
}

/// Something that can display a generation.
pub trait Renderer {
    fn render(&mut self, frame: Frame<'_>) -> io::Result<()>;
}

/// Draws `#` for live cells and `.` for dead ones, one grid row per line.
pub struct TextRenderer<W: Write> {
    out: W,
    /// Emit an ANSI clear-screen before each frame.
    clear_screen: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        TextRenderer {
            out,
            clear_screen: false,
        }
    }

    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, frame: Frame<'_>) -> io::Result<()> {
        let width = frame.size.width();
        let mut text = String::with_capacity((width + 1) * frame.size.height() + 64);

        if self.clear_screen {
            text.push_str("\x1b[2J\x1b[H");
        }
        text.push_str(&format!(
            "generation {} ({} alive)\n",
            frame.generation,
            frame.live_count()
        ));
        for row in frame.rows() {
            text.extend(row.iter().map(|&c| if c != 0 { '#' } else { '.' }));
            text.push('\n');
        }

        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_renderer_layout() {
        let mut state = State::new(3, 2).unwrap();
        state.set_cell(0, 0, true);
        state.set_cell(2, 1, true);

        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(Frame::of(&state)).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text, "generation 0 (2 alive)\n#..\n..#\n");
    }

    #[test]
    fn test_frame_rows() {
        let state = State::from_cells(2, 3, vec![1, 0, 0, 1, 1, 1]).unwrap();
        let frame = Frame::of(&state);

        let rows: Vec<&[u8]> = frame.rows().collect();
        assert_eq!(rows, vec![&[1, 0][..], &[0, 1][..], &[1, 1][..]]);
        assert_eq!(frame.live_count(), 4);
    }
}
