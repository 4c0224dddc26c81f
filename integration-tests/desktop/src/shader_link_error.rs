use learnopengl::shader::{ProgramError, ShaderProgram};

const VS: &str = "
#version 330 core
layout (location = 0) in vec3 aPos;

void main() {
  gl_Position = vec4(aPos, 1.0);
}";

// reads a varying the vertex shader never writes
const FS: &str = "
#version 330 core
in vec3 vColor;
out vec4 FragColor;

void main() {
  FragColor = vec4(vColor, 1.0);
}";

pub fn fixture() {
  let mut surface = crate::hidden_surface("Shader link error");

  match ShaderProgram::from_strings(&mut surface.context, VS, FS) {
    Err(ProgramError::LinkFailed(log)) => println!("link log: {}", log),
    Err(e) => panic!("unexpected error: {}", e),
    Ok(_) => panic!("mismatching stages linked"),
  }
}
