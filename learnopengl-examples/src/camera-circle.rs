//! Render ten textured cubes scattered in space, with a camera orbiting the origin.
//!
//! The image paths can be passed as first and second arguments; they default to
//! `resources/textures/container.jpg` and `resources/textures/awesomeface.jpg`.
//!
//! Press <escape> to quit or close the window.

mod common;

use cgmath::{perspective, vec3, Deg, InnerSpace as _, Matrix4, Point3, Vector3};
use common::{or_exit, VertexArray, CUBE_VERTICES, SCREEN_HEIGHT, SCREEN_WIDTH};
use learnopengl::context::GraphicsContext as _;
use learnopengl::shader::ShaderProgram;

const VS: &str = include_str!("coordinate-systems-vs.glsl");
const FS: &str = include_str!("coordinate-systems-fs.glsl");

// distance from the camera to the origin
const RADIUS: f32 = 10.;

const CUBE_POSITIONS: [[f32; 3]; 10] = [
  [0.0, 0.0, 0.0],
  [2.0, 5.0, -15.0],
  [-1.5, -2.2, -2.5],
  [-3.8, -2.0, -12.3],
  [2.4, -0.4, -3.5],
  [-1.7, 3.0, -7.5],
  [1.3, -2.0, -2.5],
  [1.5, 2.0, -2.5],
  [1.5, 0.2, -1.5],
  [-1.3, 1.0, -1.5],
];

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

  let projection: Matrix4<f32> = perspective(
    Deg(45.),
    SCREEN_WIDTH as f32 / SCREEN_HEIGHT as f32,
    0.1,
    100.,
  );

  program.use_program();
  or_exit(program.set_uniform("texture1", 0), "cannot set texture1");
  or_exit(program.set_uniform("texture2", 1), "cannot set texture2");
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

    let eye = Point3::new(t.sin() * RADIUS, 0., t.cos() * RADIUS);
    let view: Matrix4<f32> = Matrix4::look_at_rh(eye, Point3::new(0., 0., 0.), Vector3::unit_y());

    program.use_program();
    or_exit(program.set_uniform::<[[f32; 4]; 4]>("view", view.into()), "cannot set view");

    for (i, &position) in CUBE_POSITIONS.iter().enumerate() {
      let angle = Deg(20. * i as f32);
      let model: Matrix4<f32> =
        Matrix4::from_translation(position.into()) * Matrix4::from_axis_angle(axis, angle);

      or_exit(program.set_uniform::<[[f32; 4]; 4]>("model", model.into()), "cannot set model");
      cube.draw_arrays(36);
    }

    common::swap_buffers(&mut surface);
  }
}
