//! Render a quad textured with an image loaded from disk and tinted with vertex colors.
//!
//! The image path can be passed as first argument; it defaults to
//! `resources/textures/container.jpg`.
//!
//! Press <escape> to quit or close the window.

mod common;

use common::{or_exit, VertexArray};
use learnopengl::context::GraphicsContext as _;
use learnopengl::shader::ShaderProgram;

const VS: &str = include_str!("texture-vs.glsl");
const FS: &str = include_str!("texture-fs.glsl");

#[rustfmt::skip]
const VERTICES: [f32; 32] = [
  // positions      // colors       // texture coords
   0.5,  0.5, 0.0,  1.0, 0.0, 0.0,  1.0, 1.0, // top right
   0.5, -0.5, 0.0,  0.0, 1.0, 0.0,  1.0, 0.0, // bottom right
  -0.5, -0.5, 0.0,  0.0, 0.0, 1.0,  0.0, 0.0, // bottom left
  -0.5,  0.5, 0.0,  1.0, 1.0, 0.0,  0.0, 1.0, // top left
];

const INDICES: [u32; 6] = [
  0, 1, 3, // first triangle
  1, 2, 3, // second triangle
];

fn main() {
  let mut surface = common::init();

  let program = or_exit(
    ShaderProgram::from_strings(&mut surface.context, VS, FS),
    "cannot create shader program",
  );
  let quad = VertexArray::with_indices(&VERTICES, &INDICES, &[3, 3, 2]);

  let path = common::path_arg(1, "resources/textures/container.jpg");
  let texture = common::load_texture(&mut surface.context, &path, false);

  while common::handle_events(&mut surface) {
    surface.context.backend().clear(false);

    texture.bind();
    program.use_program();
    quad.draw_elements(INDICES.len());

    common::swap_buffers(&mut surface);
  }
}
