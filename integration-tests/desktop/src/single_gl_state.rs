use learnopengl_gl::gl33::StateQueryError;
use learnopengl_gl::GL33;

pub fn fixture() {
  let _surface = crate::hidden_surface("Single GL state");

  match GL33::new() {
    Err(StateQueryError::UnavailableGLState) => (),
    Err(e) => panic!("unexpected error: {}", e),
    Ok(_) => panic!("a second backend was created on the same thread"),
  }
}
