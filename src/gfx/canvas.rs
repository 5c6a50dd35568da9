//! A grid of texels that frames are drawn into.

use num::Integer;

use crate::actor::Actor;
use crate::gfx::texel::Texel;
use crate::gfx::texel::Weight;

/// A `cols` by `rows` grid of [`Texel`]s, stored in row-major order.
// Invariant: self.cells.len() == self.cols * self.rows
#[derive(Clone, PartialEq, Debug)]
pub struct Canvas {
  cols: usize,
  rows: usize,
  cells: Box<[Texel]>,
}

impl Canvas {
  /// Creates a new, blank `Canvas`.
  pub fn new(cols: usize, rows: usize) -> Self {
    Self {
      cols,
      rows,
      cells: vec![Texel::empty(); cols * rows].into_boxed_slice(),
    }
  }

  /// Returns the dimensions of this canvas, as `(cols, rows)`.
  pub fn dims(&self) -> (usize, usize) {
    (self.cols, self.rows)
  }

  /// Blanks every cell.
  pub fn clear(&mut self) {
    for tx in self.cells.iter_mut() {
      *tx = Texel::empty();
    }
  }

  /// Gets the texel at `(col, row)`.
  ///
  /// Returns `None` if that cell is out-of-bounds.
  pub fn get(&self, col: usize, row: usize) -> Option<&Texel> {
    if col >= self.cols || row >= self.rows {
      return None;
    }
    self.cells.get(col + row * self.cols)
  }

  /// Gets a mutable reference to the texel at `(col, row)`.
  ///
  /// Returns `None` if that cell is out-of-bounds.
  pub fn get_mut(&mut self, col: usize, row: usize) -> Option<&mut Texel> {
    if col >= self.cols || row >= self.rows {
      return None;
    }
    self.cells.get_mut(col + row * self.cols)
  }

  /// Writes `text` left-to-right starting at `(col, row)`, using `style` for
  /// color and weight. Whatever runs off the canvas is dropped.
  pub fn print(&mut self, col: i64, row: i64, text: &str, style: Texel) {
    if row < 0 {
      return;
    }
    for (i, c) in text.chars().enumerate() {
      let col = col + i as i64;
      if col < 0 {
        continue;
      }
      match self.get_mut(col as usize, row as usize) {
        Some(tx) => *tx = style.with_glyph(c),
        None => break,
      }
    }
  }

  /// Draws `actor`, whose position is in simulation units of `cell_size` per
  /// cell.
  ///
  /// Actors with a font larger than `font_size` are drawn bold.
  pub fn draw_actor(&mut self, actor: &Actor, cell_size: i64, font_size: u16) {
    let pos = actor.position();
    let weight = if actor.font_size() > font_size {
      Weight::Bold
    } else {
      Weight::Normal
    };
    let style = Texel::empty().with_fg(actor.color()).with_weight(weight);

    let col = Integer::div_floor(&pos.x(), &cell_size);
    let row = Integer::div_floor(&pos.y(), &cell_size);
    self.print(col, row, actor.text(), style);
  }

  /// Returns an iterator over every cell and its texel, in row-major order.
  pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Texel)> + '_ {
    let cols = self.cols;
    self
      .cells
      .iter()
      .enumerate()
      .map(move |(i, tx)| (i % cols, i / cols, tx))
  }
}
