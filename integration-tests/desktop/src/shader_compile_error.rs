use learnopengl::shader::{ProgramError, ShaderProgram, StageError, StageType};

const VS: &str = "
#version 330 core
layout (location = 0) in vec3 aPos;

void main() {
  gl_Position = vec4(aPos, 1.0)
}";

const FS: &str = "
#version 330 core
out vec4 FragColor;

void main() {
  FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}";

pub fn fixture() {
  let mut surface = crate::hidden_surface("Shader compile error");

  match ShaderProgram::from_strings(&mut surface.context, VS, FS) {
    Err(ProgramError::StageError(StageError::CompilationFailed(StageType::VertexShader, log))) => {
      assert!(!log.trim().is_empty(), "empty compilation log");
      println!("compilation log: {}", log);
    }

    Err(e) => panic!("unexpected error: {}", e),
    Ok(_) => panic!("a vertex shader missing a semicolon compiled"),
  }
}
