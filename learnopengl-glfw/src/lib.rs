//! [GLFW](https://crates.io/crates/glfw) surface for the `learnopengl` wrappers.
//!
//! [`GlfwSurface`] initializes GLFW, opens a window with an OpenGL 3.3 core, forward-compatible
//! context, loads the OpenGL functions and builds the [`GL33`] backend. Programs then poll events
//! from [`GlfwSurface::events_rx`] and render through [`GlfwSurface::context`].

#![deny(missing_docs)]

use glfw::{self, Context as _, Glfw, InitError, Window, WindowEvent, WindowMode};
use learnopengl::context::GraphicsContext;
pub use learnopengl_gl::gl33::StateQueryError;
use learnopengl_gl::GL33;
use learnopengl_windowing::{CursorMode, WindowDim, WindowOpt};
use std::{convert::Infallible, error, fmt, os::raw::c_void, sync::mpsc::Receiver};

/// Error that can be risen while creating a surface.
#[non_exhaustive]
#[derive(Debug)]
pub enum GlfwSurfaceError<E> {
  /// Initialization of the surface went wrong.
  ///
  /// This variant exposes a **glfw** error for further information about what went wrong.
  InitError(InitError),

  /// Window creation failed.
  WindowCreationFailed,

  /// No primary monitor detected.
  NoPrimaryMonitor,

  /// No available video mode.
  NoVideoMode,

  /// User error.
  UserError(E),

  /// The graphics state is not available.
  ///
  /// This error is generated when the initialization code is called on a thread on which the
  /// graphics state has already been acquired.
  GraphicsStateError(StateQueryError),
}

impl<E> fmt::Display for GlfwSurfaceError<E>
where
  E: fmt::Display,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      GlfwSurfaceError::InitError(ref e) => write!(f, "initialization error: {}", e),
      GlfwSurfaceError::WindowCreationFailed => f.write_str("failed to create window"),
      GlfwSurfaceError::NoPrimaryMonitor => f.write_str("no primary monitor"),
      GlfwSurfaceError::NoVideoMode => f.write_str("no video mode"),
      GlfwSurfaceError::UserError(ref e) => write!(f, "user error: {}", e),
      GlfwSurfaceError::GraphicsStateError(ref e) => {
        write!(f, "failed to get graphics state: {}", e)
      }
    }
  }
}

impl<E> From<InitError> for GlfwSurfaceError<E> {
  fn from(e: InitError) -> Self {
    GlfwSurfaceError::InitError(e)
  }
}

impl<E> error::Error for GlfwSurfaceError<E>
where
  E: 'static + error::Error,
{
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      GlfwSurfaceError::InitError(e) => Some(e),
      GlfwSurfaceError::UserError(e) => Some(e),
      GlfwSurfaceError::GraphicsStateError(e) => Some(e),
      _ => None,
    }
  }
}

/// GLFW surface.
///
/// This type is a helper that exposes two important concepts: the GLFW event receiver that you can
/// use to poll events and the [`GL33Context`], which allows you to create shader programs and
/// textures and to perform the rendering part.
#[derive(Debug)]
pub struct GlfwSurface {
  /// Wrapped GLFW events queue.
  pub events_rx: Receiver<(f64, WindowEvent)>,

  /// Wrapped OpenGL 3.3 context.
  pub context: GL33Context,
}

impl GlfwSurface {
  /// Initialize GLFW and create a window with your own code.
  ///
  /// The OpenGL hints (3.3, core profile, forward compatible) are already set when `create_window`
  /// runs; you can override or complete them. The returned window is made current.
  pub fn new<E>(
    create_window: impl FnOnce(
      &mut Glfw,
    )
      -> Result<(Window, Receiver<(f64, WindowEvent)>), GlfwSurfaceError<E>>,
  ) -> Result<Self, GlfwSurfaceError<E>> {
    #[cfg(feature = "log-errors")]
    let error_cbk = glfw::LOG_ERRORS;
    #[cfg(not(feature = "log-errors"))]
    let error_cbk = glfw::FAIL_ON_ERRORS;

    let mut glfw = glfw::init(error_cbk)?;

    // OpenGL hints
    glfw.window_hint(glfw::WindowHint::OpenGlProfile(
      glfw::OpenGlProfileHint::Core,
    ));
    glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
    glfw.window_hint(glfw::WindowHint::ContextVersionMajor(3));
    glfw.window_hint(glfw::WindowHint::ContextVersionMinor(3));

    let (mut window, events_rx) = create_window(&mut glfw)?;

    window.make_current();

    // init OpenGL
    gl::load_with(|s| window.get_proc_address(s) as *const c_void);

    let gl = GL33::new().map_err(GlfwSurfaceError::GraphicsStateError)?;
    let context = GL33Context { window, gl };
    let surface = GlfwSurface { events_rx, context };

    log::debug!("GLFW surface created");

    Ok(surface)
  }

  /// Initialize GLFW and open a window titled `title` according to `win_opt`.
  ///
  /// Key, close and framebuffer size events are polled.
  pub fn new_gl33(
    title: &str,
    win_opt: WindowOpt,
  ) -> Result<Self, GlfwSurfaceError<Infallible>> {
    GlfwSurface::new(|glfw| {
      glfw.window_hint(glfw::WindowHint::Samples(win_opt.num_samples()));
      glfw.window_hint(glfw::WindowHint::Visible(win_opt.visible()));

      let (mut window, events_rx) = match *win_opt.dim() {
        WindowDim::Windowed { width, height } => glfw
          .create_window(width, height, title, WindowMode::Windowed)
          .ok_or(GlfwSurfaceError::WindowCreationFailed)?,

        WindowDim::Fullscreen => glfw.with_primary_monitor(|glfw, monitor| {
          let monitor = monitor.ok_or(GlfwSurfaceError::NoPrimaryMonitor)?;
          let vmode = monitor
            .get_video_mode()
            .ok_or(GlfwSurfaceError::NoVideoMode)?;
          let (w, h) = (vmode.width, vmode.height);

          glfw
            .create_window(w, h, title, WindowMode::FullScreen(monitor))
            .ok_or(GlfwSurfaceError::WindowCreationFailed)
        })?,

        WindowDim::FullscreenRestricted { width, height } => {
          glfw.with_primary_monitor(|glfw, monitor| {
            let monitor = monitor.ok_or(GlfwSurfaceError::NoPrimaryMonitor)?;

            glfw
              .create_window(width, height, title, WindowMode::FullScreen(monitor))
              .ok_or(GlfwSurfaceError::WindowCreationFailed)
          })?
        }
      };

      window.set_key_polling(true);
      window.set_close_polling(true);
      window.set_framebuffer_size_polling(true);

      match win_opt.cursor_mode() {
        CursorMode::Visible => window.set_cursor_mode(glfw::CursorMode::Normal),
        CursorMode::Invisible => window.set_cursor_mode(glfw::CursorMode::Hidden),
        CursorMode::Disabled => window.set_cursor_mode(glfw::CursorMode::Disabled),
      }

      Ok((window, events_rx))
    })
  }
}

/// OpenGL 3.3 context.
///
/// This type also re-exports the GLFW window, if you need access to it.
#[derive(Debug)]
pub struct GL33Context {
  /// Wrapped GLFW window.
  pub window: Window,

  /// OpenGL 3.3 state.
  gl: GL33,
}

impl GL33Context {
  /// Size of the window’s framebuffer, in pixels.
  pub fn framebuffer_size(&self) -> (i32, i32) {
    self.window.get_framebuffer_size()
  }

  /// Make the viewport cover a framebuffer of `width`×`height` pixels.
  ///
  /// Call this on every [`WindowEvent::FramebufferSize`].
  pub fn set_viewport_size(&mut self, width: i32, height: i32) {
    self.gl.set_viewport(0, 0, width, height);
  }
}

unsafe impl GraphicsContext for GL33Context {
  type Backend = GL33;

  fn backend(&mut self) -> &mut Self::Backend {
    &mut self.gl
  }
}
