//! Render a quad mixing two textures sampled from two texture units.
//!
//! The image paths can be passed as first and second arguments; they default to
//! `resources/textures/container.jpg` and `resources/textures/awesomeface.jpg`. The second image is
//! flipped vertically.
//!
//! Press <escape> to quit or close the window.

mod common;

use common::{or_exit, VertexArray};
use learnopengl::context::GraphicsContext as _;
use learnopengl::shader::ShaderProgram;

const VS: &str = include_str!("texture-vs.glsl");
const FS: &str = include_str!("textures-combined-fs.glsl");

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

  let mut program = or_exit(
    ShaderProgram::from_strings(&mut surface.context, VS, FS),
    "cannot create shader program",
  );
  let quad = VertexArray::with_indices(&VERTICES, &INDICES, &[3, 3, 2]);

  let container = common::path_arg(1, "resources/textures/container.jpg");
  let face = common::path_arg(2, "resources/textures/awesomeface.jpg");
  let texture1 = common::load_texture(&mut surface.context, &container, false);
  let texture2 = common::load_texture(&mut surface.context, &face, true);

  // tell each sampler which texture unit it reads from
  program.use_program();
  or_exit(program.set_uniform("texture1", 0), "cannot set texture1");
  or_exit(program.set_uniform("texture2", 1), "cannot set texture2");

  while common::handle_events(&mut surface) {
    let gl = surface.context.backend();
    gl.clear(false);

    gl.active_texture(0);
    texture1.bind();
    gl.active_texture(1);
    texture2.bind();

    program.use_program();
    quad.draw_elements(INDICES.len());

    common::swap_buffers(&mut surface);
  }
}
