//! Open a window and clear it with a dark teal every frame.
//!
//! Press <escape> to quit or close the window.

mod common;

use learnopengl::context::GraphicsContext as _;

fn main() {
  let mut surface = common::init();

  while common::handle_events(&mut surface) {
    surface.context.backend().clear(false);
    common::swap_buffers(&mut surface);
  }
}
