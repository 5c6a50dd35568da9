//! `curses` helper library.
//!
//! Note that this module doesn't *actually* use `libcurses`, and merely
//! emulates its behavior at a high level in terms of crossterm.

use std::io;
use std::mem;
use std::time::Duration;

use crossterm::cursor;
use crossterm::style;
use crossterm::terminal;

use crate::actor::Actor;
use crate::config::Settings;
use crate::error::Result;
use crate::gfx::canvas::Canvas;
use crate::gfx::texel::colors;
use crate::gfx::texel::Texel;
use crate::gfx::texel::Weight;
use crate::gfx::Video;
use crate::input::CloseSignal;
use crate::timing::FrameTimer;

/// A terminal window, one terminal cell per board cell.
pub struct Curses<W: io::Write = io::Stdout> {
  w: W,
  open: bool,
  close: CloseSignal,

  cell_size: i64,
  font_size: u16,
  frame_rate: u32,
  show_fps: bool,

  scratch: Canvas,
  // What the terminal currently shows; `None` forces a full redraw.
  baked: Option<Canvas>,
  timer: FrameTimer,
}

impl Curses {
  /// Creates a window on `stdout` sized for `settings`.
  ///
  /// The terminal is left untouched until [`Video::open_window()`] is called.
  pub fn new(settings: &Settings, close: CloseSignal) -> Curses {
    Curses::with(io::stdout(), settings, close)
  }
}

impl<W: io::Write> Curses<W> {
  /// Creates a window that writes to `w`.
  pub fn with(w: W, settings: &Settings, close: CloseSignal) -> Curses<W> {
    let cols = settings.cols.max(0) as usize;
    let rows = settings.rows.max(0) as usize;
    Curses {
      w,
      open: false,
      close,
      cell_size: settings.cell_size,
      font_size: settings.font_size,
      frame_rate: settings.frame_rate,
      show_fps: settings.show_fps,
      scratch: Canvas::new(cols, rows),
      baked: None,
      timer: FrameTimer::new(),
    }
  }

  /// Returns the frame currently being built.
  pub fn scratch(&self) -> &Canvas {
    &self.scratch
  }

  /// Returns the underlying writer.
  pub fn writer(&self) -> &W {
    &self.w
  }

  /// Queues the draw calls for every cell of `self.scratch` that differs from
  /// what is on screen.
  fn draw_scene(&mut self) -> io::Result<()> {
    for (col, row, tx) in self.scratch.cells() {
      let unchanged = self
        .baked
        .as_ref()
        .and_then(|b| b.get(col, row))
        .map_or(false, |old| old == tx);
      if unchanged {
        continue;
      }

      let fg = match tx.fg() {
        Some(rgb) => style::Color::Rgb {
          r: rgb.red,
          g: rgb.green,
          b: rgb.blue,
        },
        None => style::Color::Reset,
      };
      let attr = match tx.weight() {
        Weight::Bold => style::Attribute::Bold,
        Weight::Normal => style::Attribute::NormalIntensity,
      };

      crossterm::queue!(
        self.w,
        cursor::MoveTo(col as u16, row as u16),
        style::SetAttribute(attr),
        style::SetForegroundColor(fg),
        style::Print(tx.glyph().unwrap_or(' ')),
      )?;
    }
    Ok(())
  }

  /// Clean up whatever mess the terminal made.
  fn cleanup(&mut self) -> io::Result<()> {
    crossterm::execute!(
      self.w,
      style::ResetColor,
      terminal::LeaveAlternateScreen,
      cursor::Show,
      terminal::EnableLineWrap,
    )?;
    terminal::disable_raw_mode()?;
    self.w.flush()
  }
}

impl<W: io::Write> Video for Curses<W> {
  fn open_window(&mut self) -> Result<()> {
    if self.open {
      return Ok(());
    }

    crossterm::execute!(
      self.w,
      terminal::EnterAlternateScreen,
      cursor::Hide,
      terminal::DisableLineWrap,
      terminal::Clear(terminal::ClearType::All),
    )?;
    terminal::enable_raw_mode()?;

    self.open = true;
    self.baked = None;
    let (cols, rows) = self.scratch.dims();
    tracing::debug!(cols, rows, "window opened");
    Ok(())
  }

  fn close_window(&mut self) -> Result<()> {
    if !self.open {
      return Ok(());
    }
    self.open = false;
    self.cleanup()?;
    tracing::debug!(frames = self.timer.frame_count(), "window closed");
    Ok(())
  }

  fn is_window_open(&self) -> bool {
    self.open && !self.close.is_requested()
  }

  fn width(&self) -> i64 {
    self.scratch.dims().0 as i64 * self.cell_size
  }

  fn height(&self) -> i64 {
    self.scratch.dims().1 as i64 * self.cell_size
  }

  fn clear_buffer(&mut self) -> Result<()> {
    self.scratch.clear();
    Ok(())
  }

  fn draw_actors(&mut self, actors: &[&Actor]) -> Result<()> {
    for actor in actors {
      self.scratch.draw_actor(actor, self.cell_size, self.font_size);
    }
    Ok(())
  }

  fn flush_buffer(&mut self) -> Result<()> {
    if self.show_fps {
      let fps = self.timer.measure_fps(Duration::from_millis(500));
      let row = self.scratch.dims().1 as i64 - 1;
      let style = Texel::empty().with_fg(colors::RED);
      self.scratch.print(0, row, &format!("fps: {:.2}", fps), style);
    }

    self.draw_scene()?;
    self.w.flush()?;

    let (cols, rows) = self.scratch.dims();
    let old = mem::replace(&mut self.scratch, Canvas::new(cols, rows));
    self.baked = Some(old);

    self.timer.end_frame(self.frame_rate);
    Ok(())
  }
}

impl<W: io::Write> Drop for Curses<W> {
  fn drop(&mut self) {
    if self.open {
      self.open = false;
      let _ = self.cleanup();
    }
  }
}
