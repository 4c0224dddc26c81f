//! # Windowing options
//!
//! The `learnopengl` crate wraps shader programs and textures, but it doesn’t give you a way to
//! create an OpenGL context: that’s the job of windowing crates, such as `learnopengl-glfw`. This
//! crate holds the types every windowing crate understands, so that programs describe the window
//! they want without caring which library opens it:
//!
//! - [`WindowDim`]: dimension of a window and its mode (windowed, fullscreen, fullscreen
//!   restricted).
//! - [`WindowOpt`]: an opaque type giving access to hints to customize the window integration, such
//!   as whether the cursor should be hidden or not.

#![deny(missing_docs)]

/// Dimension metrics.
///
///   - `Windowed { width, height }` opens in windowed mode with the wished resolution.
///   - `Fullscreen` opens in fullscreen mode by using the primary monitor resolution.
///   - `FullscreenRestricted { width, height }` is a mix between `Windowed` and `Fullscreen`. It
///     opens in fullscreen mode by using the wished resolution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WindowDim {
  /// Windowed mode.
  Windowed {
    /// Width of the window.
    width: u32,
    /// Height of the window.
    height: u32,
  },
  /// Fullscreen mode (adapt to your screen).
  Fullscreen,
  /// Fullscreen mode with restricted viewport dimension.
  FullscreenRestricted {
    /// Width of the window.
    width: u32,
    /// Height of the window.
    height: u32,
  },
}

/// Cursor mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CursorMode {
  /// The cursor is always visible.
  Visible,
  /// The cursor exists yet has been disabled.
  Invisible,
  /// The cursor is disabled.
  Disabled,
}

/// Different window options.
///
/// Feel free to look at the different methods available to tweak the options. You may want to start
/// with `default()` though.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WindowOpt {
  dim: WindowDim,
  cursor_mode: CursorMode,
  num_samples: Option<u32>,
  visible: bool,
}

impl Default for WindowOpt {
  /// Defaults:
  ///
  /// - `dim` set to an 800×600 window.
  /// - `cursor_mode` set to `CursorMode::Visible`.
  /// - `num_samples` set to `None`.
  /// - `visible` set to `true`.
  fn default() -> Self {
    WindowOpt {
      dim: WindowDim::Windowed {
        width: 800,
        height: 600,
      },
      cursor_mode: CursorMode::Visible,
      num_samples: None,
      visible: true,
    }
  }
}

impl WindowOpt {
  /// Set the dimension of the window.
  #[inline]
  pub fn set_dim(self, dim: WindowDim) -> Self {
    WindowOpt { dim, ..self }
  }

  /// Get the dimension of the window.
  #[inline]
  pub fn dim(&self) -> &WindowDim {
    &self.dim
  }

  /// Hide, unhide or disable the cursor. Default to `CursorMode::Visible`.
  #[inline]
  pub fn set_cursor_mode(self, mode: CursorMode) -> Self {
    WindowOpt {
      cursor_mode: mode,
      ..self
    }
  }

  /// Get the cursor mode.
  #[inline]
  pub fn cursor_mode(&self) -> CursorMode {
    self.cursor_mode
  }

  /// Set the number of samples to use for multisampling.
  ///
  /// Pass `None` to disable multisampling.
  #[inline]
  pub fn set_num_samples<S>(self, samples: S) -> Self
  where
    S: Into<Option<u32>>,
  {
    WindowOpt {
      num_samples: samples.into(),
      ..self
    }
  }

  /// Get the number of samples to use in multisampling, if any.
  #[inline]
  pub fn num_samples(&self) -> Option<u32> {
    self.num_samples
  }

  /// Show or hide the window. A hidden window still gets a working OpenGL context.
  #[inline]
  pub fn set_visible(self, visible: bool) -> Self {
    WindowOpt { visible, ..self }
  }

  /// Whether the window is shown.
  #[inline]
  pub fn visible(&self) -> bool {
    self.visible
  }
}
