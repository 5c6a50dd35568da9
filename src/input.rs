//! Input processing utilties.

use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;
use std::time::Duration;

pub use crossterm::event::KeyCode;
pub use crossterm::event::KeyEvent;
pub use crossterm::event::KeyEventKind;
pub use crossterm::event::KeyModifiers;

use crate::error::Result;
use crate::geo::Point;

/// A source of directional input.
pub trait Input {
  /// Returns the direction the player is currently asking for.
  ///
  /// Each component is -1, 0 or 1. This is called once per frame; inputs that
  /// arrive between calls and cancel each other out are lost.
  fn get_direction(&mut self) -> Result<Point>;
}

/// A shared flag used to ask the window to close.
///
/// The keyboard raises it when the player quits; the window reports itself
/// closed once it is raised.
#[derive(Clone, Default, Debug)]
pub struct CloseSignal(Rc<Cell<bool>>);

impl CloseSignal {
  /// Creates a new, lowered `CloseSignal`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Raises the signal.
  pub fn request(&self) {
    self.0.set(true);
  }

  /// Returns whether the signal has been raised.
  pub fn is_requested(&self) -> bool {
    self.0.get()
  }
}

/// A tracker for a frame's key presses.
///
/// Due to the nature of teletype terminals, the only inputs we can really
/// capture are key-presses as recorded by the VT100 emulator; there is no such
/// thing as a key being "held". Holding a direction down works through the
/// terminal's key repeat.
pub struct Keyboard {
  keys: HashSet<KeyCode>,
  close: CloseSignal,
}

impl Keyboard {
  /// Creates a new `Keyboard` that raises `close` when the player quits.
  pub fn new(close: CloseSignal) -> Self {
    Self {
      keys: HashSet::new(),
      close,
    }
  }

  /// Records a single key event for the current frame.
  pub fn handle(&mut self, e: KeyEvent) {
    if e.kind == KeyEventKind::Release {
      return;
    }

    let code = match e.code {
      KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
      k => k,
    };

    let ctrl_c = code == KeyCode::Char('c')
      && e.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl_c || code == KeyCode::Esc || code == KeyCode::Char('q') {
      self.close.request();
      return;
    }

    self.keys.insert(code);
  }

  /// Returns the direction described by this frame's key presses.
  ///
  /// Arrow keys and WASD both work; opposite directions cancel.
  pub fn direction(&self) -> Point {
    let pressed = |arrow, letter| {
      self.keys.contains(&arrow) || self.keys.contains(&KeyCode::Char(letter))
    };
    let axis = |neg: bool, pos: bool| pos as i64 - neg as i64;

    Point::new(
      axis(pressed(KeyCode::Left, 'a'), pressed(KeyCode::Right, 'd')),
      axis(pressed(KeyCode::Up, 'w'), pressed(KeyCode::Down, 's')),
    )
  }

  /// Clears last frame's key presses and collects new ones from `stdin`,
  /// without blocking.
  pub fn start_frame(&mut self) -> Result<()> {
    use crossterm::event;

    self.keys.clear();
    while event::poll(Duration::default())? {
      if let event::Event::Key(e) = event::read()? {
        self.handle(e);
      }
    }
    Ok(())
  }
}

impl Input for Keyboard {
  fn get_direction(&mut self) -> Result<Point> {
    self.start_frame()?;
    Ok(self.direction())
  }
}
