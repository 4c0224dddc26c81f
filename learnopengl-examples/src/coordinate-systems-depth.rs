//! Render a textured cube spinning over time, seen through a perspective projection with depth
//! testing enabled.
//!
//! The image paths can be passed as first and second arguments; they default to
//! `resources/textures/container.jpg` and `resources/textures/awesomeface.jpg`.
//!
//! Press <escape> to quit or close the window.

mod common;

use cgmath::{perspective, vec3, Deg, InnerSpace as _, Matrix4, Rad, Vector3};
use common::{or_exit, VertexArray, CUBE_VERTICES, SCREEN_HEIGHT, SCREEN_WIDTH};
use learnopengl::context::GraphicsContext as _;
use learnopengl::shader::ShaderProgram;

const VS: &str = include_str!("coordinate-systems-vs.glsl");
const FS: &str = include_str!("coordinate-systems-fs.glsl");

fn main() {
  let mut surface = common::init();

  let mut program = or_exit(
    ShaderProgram::from_strings(&mut surface.context, VS, FS),
    "cannot create shader program",
  );
  let cube = VertexArray::new(&CUBE_VERTICES, &[3, 2]);

  let container = common::path_arg(1, "resources/textures/container.jpg");
  let face = common::path_arg(2, "resources/textures/awesomeface.jpg");
  let texture1 = common::load_texture(&mut surface.context, &container, false);
  let texture2 = common::load_texture(&mut surface.context, &face, true);

  let view: Matrix4<f32> = Matrix4::from_translation(vec3(0., 0., -3.));
  let projection: Matrix4<f32> = perspective(
    Deg(45.),
    SCREEN_WIDTH as f32 / SCREEN_HEIGHT as f32,
    0.1,
    100.,
  );

  program.use_program();
  or_exit(program.set_uniform("texture1", 0), "cannot set texture1");
  or_exit(program.set_uniform("texture2", 1), "cannot set texture2");
  or_exit(program.set_uniform::<[[f32; 4]; 4]>("view", view.into()), "cannot set view");
  or_exit(
    program.set_uniform::<[[f32; 4]; 4]>("projection", projection.into()),
    "cannot set projection",
  );

  surface.context.backend().set_depth_test(true);

  let axis: Vector3<f32> = vec3(0.5, 1., 0.).normalize();

  while common::handle_events(&mut surface) {
    let t = surface.context.window.glfw.get_time() as f32;

    let gl = surface.context.backend();
    gl.clear(true);

    gl.active_texture(0);
    texture1.bind();
    gl.active_texture(1);
    texture2.bind();

    let model: Matrix4<f32> = Matrix4::from_axis_angle(axis, Rad(t));

    program.use_program();
    or_exit(program.set_uniform::<[[f32; 4]; 4]>("model", model.into()), "cannot set model");
    cube.draw_arrays(36);

    common::swap_buffers(&mut surface);
  }
}
