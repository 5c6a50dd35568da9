//! Texels, terminal elements.
//!
//! A *texel* is our abstraction for a cell in a terminal: a glyph plus the
//! styling it should be printed with. See the [`Texel`] type for more info.

pub use palette::named as colors;

/// An RGB color, as carried by actors and texels.
pub type Rgb = palette::Srgb<u8>;

/// A character weight.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[allow(missing_docs)]
#[rustfmt::skip]
pub enum Weight {
  Normal, Bold,
}

/// A "terminal element", analogous to a pixel or voxel.
///
/// A texel consists of a "glyph" (a printable character), an optional
/// foreground color, and a weight. A texel with no glyph is blank.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Texel {
  glyph: Option<char>,
  fg: Option<Rgb>,
  weight: Weight,
}

impl Texel {
  /// Creates a new blank texel.
  #[inline]
  pub fn empty() -> Self {
    Self {
      glyph: None,
      fg: None,
      weight: Weight::Normal,
    }
  }

  /// Creates a new colorless texel with the given glyph.
  #[inline]
  pub fn new(glyph: char) -> Self {
    Self {
      glyph: Some(glyph),
      ..Self::empty()
    }
  }

  /// Returns this texel's glyph.
  #[inline]
  pub fn glyph(self) -> Option<char> {
    self.glyph
  }

  /// Returns a copy of this texel with the given glyph.
  #[inline]
  pub fn with_glyph(mut self, glyph: impl Into<Option<char>>) -> Self {
    self.glyph = glyph.into();
    self
  }

  /// Returns this texel's foreground color, if it has one.
  #[inline]
  pub fn fg(self) -> Option<Rgb> {
    self.fg
  }

  /// Returns a copy of this texel with the given foreground color.
  #[inline]
  pub fn with_fg(mut self, color: impl Into<Option<Rgb>>) -> Self {
    self.fg = color.into();
    self
  }

  /// Returns this texel's weight.
  #[inline]
  pub fn weight(self) -> Weight {
    self.weight
  }

  /// Returns a copy of this texel with the given weight.
  #[inline]
  pub fn with_weight(mut self, weight: Weight) -> Self {
    self.weight = weight;
    self
  }
}

impl Default for Texel {
  fn default() -> Self {
    Self::empty()
  }
}
