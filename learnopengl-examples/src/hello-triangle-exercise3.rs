//! Render two triangles with two different programs: an orange one and a yellow one.
//!
//! Press <escape> to quit or close the window.

mod common;

use common::{or_exit, VertexArray};
use learnopengl::context::GraphicsContext as _;
use learnopengl::shader::ShaderProgram;

const VS: &str = include_str!("hello-triangle-vs.glsl");
const ORANGE_FS: &str = include_str!("hello-triangle-fs.glsl");
const YELLOW_FS: &str = include_str!("hello-triangle-yellow-fs.glsl");

#[rustfmt::skip]
const VERTICES: [f32; 18] = [
  // first triangle
  -0.9,  -0.5, 0.0, // left
  -0.0,  -0.5, 0.0, // right
  -0.45,  0.5, 0.0, // top
  // second triangle
   0.0,  -0.5, 0.0, // left
   0.9,  -0.5, 0.0, // right
   0.45,  0.5, 0.0, // top
];

fn main() {
  let mut surface = common::init();

  let orange = or_exit(
    ShaderProgram::from_strings(&mut surface.context, VS, ORANGE_FS),
    "cannot create orange shader program",
  );
  let yellow = or_exit(
    ShaderProgram::from_strings(&mut surface.context, VS, YELLOW_FS),
    "cannot create yellow shader program",
  );

  let (first, second) = VERTICES.split_at(9);
  let first = VertexArray::new(first, &[3]);
  let second = VertexArray::new(second, &[3]);

  while common::handle_events(&mut surface) {
    surface.context.backend().clear(false);

    orange.use_program();
    first.draw_arrays(3);

    yellow.use_program();
    second.draw_arrays(3);

    common::swap_buffers(&mut surface);
  }
}
