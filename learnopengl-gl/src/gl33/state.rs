//! Graphics state.

use gl::types::*;
use std::cell::RefCell;
use std::error;
use std::fmt;
use std::marker::PhantomData;

// TLS synchronization barrier for `GLState`.
thread_local!(static TLS_ACQUIRE_GFX_STATE: RefCell<Option<()>> = RefCell::new(Some(())));

/// Cached value.
///
/// A cached value is used to prevent issuing costy GPU commands if we know the target value is
/// already set to what the command tries to set. For instance, if you ask for the texture unit `1`
/// twice in a row, only the first request reaches OpenGL.
#[derive(Debug)]
struct Cached<T>(Option<T>)
where
  T: PartialEq;

impl<T> Cached<T>
where
  T: PartialEq,
{
  /// Cache a value.
  fn new(initial: T) -> Self {
    Cached(Some(initial))
  }

  /// Explicitly invalidate a value.
  ///
  /// This is necessary when we want to be able to force a GPU command to run.
  fn invalidate(&mut self) {
    self.0 = None;
  }

  fn set(&mut self, value: T) {
    self.0 = Some(value);
  }

  /// Check if the cached value is invalid regarding a value.
  ///
  /// A non-cached value (i.e. empty) is always invalid whatever compared value. If a value is
  /// already cached, then it’s invalid if it’s not equal ([`PartialEq`]) to the input value.
  fn is_invalid(&self, new_val: &T) -> bool {
    match &self.0 {
      Some(ref t) => t != new_val,
      _ => true,
    }
  }
}

/// The graphics state.
///
/// This type represents the current state of a given graphics context. It acts as a forward-gate to
/// the few global settings the wrappers and programs touch, adding a small cache layer over it to
/// prevent from issuing the same API call (with the same parameters) twice.
#[derive(Debug)]
pub struct GLState {
  _a: PhantomData<*const ()>, // !Send and !Sync

  // viewport
  viewport: Cached<[GLint; 4]>,

  // clear buffers
  clear_color: Cached<[GLfloat; 4]>,

  // depth test
  depth_test: Cached<bool>,

  // texture
  current_texture_unit: Cached<GLuint>,
  bound_textures: Vec<GLuint>, // 2D texture bound to each unit

  // shader program
  current_program: GLuint,
}

impl GLState {
  /// Create a new `GLState`.
  ///
  /// > Note: keep in mind you can create only one per thread.
  pub(crate) fn new() -> Result<Self, StateQueryError> {
    TLS_ACQUIRE_GFX_STATE.with(|rc| {
      let mut inner = rc.borrow_mut();

      match *inner {
        Some(_) => {
          inner.take();
          Self::get_from_context()
        }

        None => Err(StateQueryError::UnavailableGLState),
      }
    })
  }

  /// Get a `GLState` from the current OpenGL context.
  fn get_from_context() -> Result<Self, StateQueryError> {
    unsafe {
      let viewport = Cached::new(get_ctx_viewport()?);
      let clear_color = Cached::new(get_ctx_clear_color()?);
      let depth_test = Cached::new(get_ctx_depth_test()?);
      let current_texture_unit = Cached::new(get_ctx_current_texture_unit()?);
      let bound_textures = vec![0; 16]; // 16 is the platform minimal requirement per stage
      let current_program = get_ctx_current_program()?;

      log::debug!(
        "acquired OpenGL state (viewport: {:?}, texture unit: {:?})",
        viewport.0,
        current_texture_unit.0
      );

      Ok(GLState {
        _a: PhantomData,
        viewport,
        clear_color,
        depth_test,
        current_texture_unit,
        bound_textures,
        current_program,
      })
    }
  }

  /// Forget the cached viewport; the next [`GL33::set_viewport`](crate::GL33::set_viewport) always
  /// reaches OpenGL.
  pub fn invalidate_viewport(&mut self) {
    self.viewport.invalidate()
  }

  /// Forget the cached clear color.
  pub fn invalidate_clear_color(&mut self) {
    self.clear_color.invalidate()
  }

  /// Forget the cached depth test state.
  pub fn invalidate_depth_test(&mut self) {
    self.depth_test.invalidate()
  }

  /// Forget the cached texture unit.
  pub fn invalidate_texture_unit(&mut self) {
    self.current_texture_unit.invalidate()
  }

  /// Forget every cached texture binding.
  pub fn invalidate_bound_textures(&mut self) {
    for t in &mut self.bound_textures {
      *t = 0;
    }
  }

  /// Forget the cached shader program.
  pub fn invalidate_shader_program(&mut self) {
    self.current_program = 0;
  }

  pub(crate) fn create_texture(&mut self) -> GLuint {
    let mut texture = 0;

    unsafe { gl::GenTextures(1, &mut texture) };
    texture
  }

  pub(crate) unsafe fn set_viewport(&mut self, viewport: [GLint; 4]) {
    if self.viewport.is_invalid(&viewport) {
      gl::Viewport(viewport[0], viewport[1], viewport[2], viewport[3]);
      self.viewport.set(viewport);
    }
  }

  pub(crate) unsafe fn set_clear_color(&mut self, clear_color: [GLfloat; 4]) {
    if self.clear_color.is_invalid(&clear_color) {
      gl::ClearColor(
        clear_color[0],
        clear_color[1],
        clear_color[2],
        clear_color[3],
      );
      self.clear_color.set(clear_color);
    }
  }

  pub(crate) unsafe fn set_depth_test(&mut self, depth_test: bool) {
    if self.depth_test.is_invalid(&depth_test) {
      if depth_test {
        gl::Enable(gl::DEPTH_TEST);
      } else {
        gl::Disable(gl::DEPTH_TEST);
      }

      self.depth_test.set(depth_test);
    }
  }

  pub(crate) unsafe fn set_texture_unit(&mut self, unit: u32) {
    if self.current_texture_unit.is_invalid(&unit) {
      gl::ActiveTexture(gl::TEXTURE0 + unit);
      self.current_texture_unit.set(unit);
    }
  }

  pub(crate) unsafe fn bind_texture(&mut self, handle: GLuint) {
    let unit = match self.current_texture_unit.0 {
      Some(unit) => unit as usize,

      // unknown unit: bind without caching
      None => {
        gl::BindTexture(gl::TEXTURE_2D, handle);
        return;
      }
    };

    match self.bound_textures.get(unit).cloned() {
      Some(handle_) if handle != handle_ => {
        gl::BindTexture(gl::TEXTURE_2D, handle);
        self.bound_textures[unit] = handle;
      }

      None => {
        gl::BindTexture(gl::TEXTURE_2D, handle);

        // not enough registered texture units; let’s grow a bit more
        self.bound_textures.resize(unit + 1, 0);
        self.bound_textures[unit] = handle;
      }

      _ => (), // cached
    }
  }

  // OpenGL unbinds a deleted texture from every unit it was bound to
  pub(crate) fn forget_texture(&mut self, handle: GLuint) {
    for t in self.bound_textures.iter_mut().filter(|t| **t == handle) {
      *t = 0;
    }
  }

  pub(crate) unsafe fn use_program(&mut self, handle: GLuint) {
    if self.current_program != handle {
      gl::UseProgram(handle);
      self.current_program = handle;
    }
  }
}

/// An error that might happen when the context is queried.
#[non_exhaustive]
#[derive(Debug)]
pub enum StateQueryError {
  /// The [`GLState`] object is unavailable.
  ///
  /// That might occur if the current thread doesn’t support allocating a new graphics state. It
  /// might happen if you try to have more than one state on the same thread, for instance.
  UnavailableGLState,
  /// Corrupted depth test state.
  UnknownDepthTestState(GLboolean),
  /// Corrupted active texture unit.
  UnknownTextureUnit(GLint),
}

impl fmt::Display for StateQueryError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StateQueryError::UnavailableGLState => write!(f, "unavailable graphics state"),
      StateQueryError::UnknownDepthTestState(ref s) => write!(f, "unknown depth test state: {}", s),
      StateQueryError::UnknownTextureUnit(ref u) => write!(f, "unknown texture unit: {}", u),
    }
  }
}

impl error::Error for StateQueryError {}

unsafe fn get_ctx_viewport() -> Result<[GLint; 4], StateQueryError> {
  let mut data = [0; 4];
  gl::GetIntegerv(gl::VIEWPORT, data.as_mut_ptr());
  Ok(data)
}

unsafe fn get_ctx_clear_color() -> Result<[GLfloat; 4], StateQueryError> {
  let mut data = [0.; 4];
  gl::GetFloatv(gl::COLOR_CLEAR_VALUE, data.as_mut_ptr());
  Ok(data)
}

unsafe fn get_ctx_depth_test() -> Result<bool, StateQueryError> {
  let state = gl::IsEnabled(gl::DEPTH_TEST);

  match state {
    gl::TRUE => Ok(true),
    gl::FALSE => Ok(false),
    _ => Err(StateQueryError::UnknownDepthTestState(state)),
  }
}

unsafe fn get_ctx_current_texture_unit() -> Result<GLuint, StateQueryError> {
  let mut active_texture = gl::TEXTURE0 as GLint;
  gl::GetIntegerv(gl::ACTIVE_TEXTURE, &mut active_texture);

  (active_texture as GLuint)
    .checked_sub(gl::TEXTURE0)
    .ok_or(StateQueryError::UnknownTextureUnit(active_texture))
}

unsafe fn get_ctx_current_program() -> Result<GLuint, StateQueryError> {
  let mut used = 0 as GLint;
  gl::GetIntegerv(gl::CURRENT_PROGRAM, &mut used);
  Ok(used as GLuint)
}
