//! OpenGL 3.3 backend.
//!
//! This module implements an OpenGL 3.3 backend for the shader and texture wrappers. The backend
//! type is [`GL33`].

mod shader;
mod state;
mod texture;

pub use self::shader::{Program, Stage};
pub use self::state::GLState;
pub use self::state::StateQueryError;
pub use self::texture::Texture;
use gl::types::*;
use std::cell::RefCell;
use std::rc::Rc;

/// An OpenGL 3.3 backend.
///
/// Besides implementing the backend traits, this type gives access to the few pieces of global
/// state the getting-started programs need: viewport, clear color, depth test and active texture
/// unit. Each setter only reaches OpenGL when the value actually changes.
#[derive(Debug)]
pub struct GL33 {
  pub(crate) state: Rc<RefCell<GLState>>,
}

impl GL33 {
  /// Create a new OpenGL 3.3 backend.
  ///
  /// An OpenGL context must be current on the calling thread. Only one backend can be created per
  /// thread; subsequent calls fail with [`StateQueryError::UnavailableGLState`].
  pub fn new() -> Result<Self, StateQueryError> {
    GLState::new().map(|state| GL33 {
      state: Rc::new(RefCell::new(state)),
    })
  }

  /// Internal access to the backend state.
  ///
  /// # Unsafety
  ///
  /// This method is **highly unsafe** as it exposes the internals of the backend. Playing with it should be done with
  /// extreme caution.
  pub unsafe fn state(&self) -> &Rc<RefCell<GLState>> {
    &self.state
  }

  /// Set the viewport, in pixels.
  pub fn set_viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
    unsafe {
      self
        .state
        .borrow_mut()
        .set_viewport([x, y, width, height])
    }
  }

  /// Set the color used to clear the color buffer.
  pub fn set_clear_color(&mut self, rgba: [f32; 4]) {
    unsafe { self.state.borrow_mut().set_clear_color(rgba) }
  }

  /// Enable or disable depth testing.
  pub fn set_depth_test(&mut self, enabled: bool) {
    unsafe { self.state.borrow_mut().set_depth_test(enabled) }
  }

  /// Clear the color buffer, and the depth buffer if `depth` is set.
  pub fn clear(&mut self, depth: bool) {
    let mut mask: GLbitfield = gl::COLOR_BUFFER_BIT;

    if depth {
      mask |= gl::DEPTH_BUFFER_BIT;
    }

    unsafe { gl::Clear(mask) }
  }

  /// Select the texture unit subsequent texture binds apply to.
  pub fn active_texture(&mut self, unit: u32) {
    unsafe { self.state.borrow_mut().set_texture_unit(unit) }
  }
}
