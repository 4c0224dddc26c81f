//! Render the interpolated triangle shifted to the right through an `offset` uniform. The shader
//! sources are read from disk at startup.
//!
//! The vertex and fragment shader paths can be passed as first and second arguments.
//!
//! Press <escape> to quit or close the window.

mod common;

use common::{or_exit, VertexArray};
use learnopengl::context::GraphicsContext as _;
use learnopengl::shader::ShaderProgram;

const VS_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src/shaders-exercise2-vs.glsl");
const FS_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src/shaders-exercise2-fs.glsl");

#[rustfmt::skip]
const VERTICES: [f32; 18] = [
  // positions      // colors
   0.5, -0.5, 0.0,  1.0, 0.0, 0.0, // bottom right
  -0.5, -0.5, 0.0,  0.0, 1.0, 0.0, // bottom left
   0.0,  0.5, 0.0,  0.0, 0.0, 1.0, // top
];

fn main() {
  let mut surface = common::init();

  let mut program = or_exit(
    ShaderProgram::from_files(
      &mut surface.context,
      common::path_arg(1, VS_PATH),
      common::path_arg(2, FS_PATH),
    ),
    "cannot create shader program",
  );
  let triangle = VertexArray::new(&VERTICES, &[3, 3]);

  while common::handle_events(&mut surface) {
    surface.context.backend().clear(false);

    program.use_program();
    or_exit(program.set_uniform("offset", 0.5f32), "cannot set offset");
    triangle.draw_arrays(3);

    common::swap_buffers(&mut surface);
  }
}
