//! Render a single orange triangle.
//!
//! Press <escape> to quit or close the window.

mod common;

use common::{or_exit, VertexArray};
use learnopengl::context::GraphicsContext as _;
use learnopengl::shader::ShaderProgram;

const VS: &str = include_str!("hello-triangle-vs.glsl");
const FS: &str = include_str!("hello-triangle-fs.glsl");

#[rustfmt::skip]
const VERTICES: [f32; 9] = [
  -0.5, -0.5, 0.0, // left
   0.5, -0.5, 0.0, // right
   0.0,  0.5, 0.0, // top
];

fn main() {
  let mut surface = common::init();

  let program = or_exit(
    ShaderProgram::from_strings(&mut surface.context, VS, FS),
    "cannot create shader program",
  );
  let triangle = VertexArray::new(&VERTICES, &[3]);

  while common::handle_events(&mut surface) {
    surface.context.backend().clear(false);

    program.use_program();
    triangle.draw_arrays(3);

    common::swap_buffers(&mut surface);
  }
}
