use learnopengl::shader::{ShaderProgram, UniformError};

const VS: &str = "
#version 330 core
layout (location = 0) in vec3 aPos;
uniform float offset;
uniform mat4 model;

void main() {
  gl_Position = model * vec4(aPos.x + offset, aPos.y, aPos.z, 1.0);
}";

const FS: &str = "
#version 330 core
out vec4 FragColor;
uniform sampler2D tex;

void main() {
  FragColor = texture(tex, vec2(0.5));
}";

const IDENTITY: [[f32; 4]; 4] = [
  [1., 0., 0., 0.],
  [0., 1., 0., 0.],
  [0., 0., 1., 0.],
  [0., 0., 0., 1.],
];

pub fn fixture() {
  let mut surface = crate::hidden_surface("Shader uniforms");
  let mut program = ShaderProgram::from_strings(&mut surface.context, VS, FS).expect("program");

  program.use_program();

  program.set_uniform("offset", 0.5f32).expect("offset");
  program.set_uniform("model", IDENTITY).expect("model");
  program.set_uniform("tex", 0).expect("tex");

  let location = program.uniform_location("offset");
  assert!(location.is_some());
  assert_eq!(program.uniform_location("offset"), location);

  assert_eq!(
    program.set_uniform("view", IDENTITY),
    Err(UniformError::Unknown("view".to_owned()))
  );

  let mut offset = 0.;
  unsafe {
    gl::GetUniformfv(
      program.repr().handle(),
      location.unwrap_or(-1),
      &mut offset,
    );
    assert_eq!(gl::GetError(), gl::NO_ERROR);
  }
  assert_eq!(offset, 0.5);
}
