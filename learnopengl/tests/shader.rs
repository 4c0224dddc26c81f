mod common;

use common::{Call, Mock};
use learnopengl::shader::{ProgramError, ShaderProgram, StageError, StageType, UniformError, UniformValue};

const VS: &str = "
#version 330 core
layout (location = 0) in vec3 aPos;
uniform float offset;

void main() {
  gl_Position = vec4(aPos.x + offset, aPos.y, aPos.z, 1.0);
}";

const FS: &str = "
#version 330 core
out vec4 FragColor;

void main() {
  FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}";

#[test]
fn create_releases_stages_after_link() {
  let mut mock = Mock::new();
  let program = ShaderProgram::from_strings(&mut mock, VS, FS).unwrap();

  assert_eq!(
    mock.calls(),
    vec![
      Call::CreateStage(1, StageType::VertexShader),
      Call::CreateStage(2, StageType::FragmentShader),
      Call::CreateProgram(3),
      Call::DeleteStage(2),
      Call::DeleteStage(1),
    ]
  );

  drop(program);
  assert_eq!(mock.calls().last(), Some(&Call::DeleteProgram(3)));
}

#[test]
fn compilation_error_carries_stage_and_log() {
  let mut mock = Mock::new().fail_compile(StageType::VertexShader, "0:2(3): error: syntax error");

  match ShaderProgram::from_strings(&mut mock, "void main( {", FS) {
    Err(ProgramError::StageError(StageError::CompilationFailed(ty, log))) => {
      assert_eq!(ty, StageType::VertexShader);
      assert_eq!(log, "0:2(3): error: syntax error");
    }

    Err(e) => panic!("unexpected error: {}", e),
    Ok(_) => panic!("program created from a broken vertex shader"),
  }

  // the fragment stage is never attempted
  assert_eq!(
    mock.count(|c| matches!(c, Call::CreateStage(_, StageType::FragmentShader))),
    0
  );
}

#[test]
fn compiled_sibling_is_released_on_compilation_error() {
  let mut mock = Mock::new().fail_compile(StageType::FragmentShader, "0:1(1): error: unexpected end");

  let result = ShaderProgram::from_strings(&mut mock, VS, "void main() {");
  assert!(matches!(
    result,
    Err(ProgramError::StageError(StageError::CompilationFailed(
      StageType::FragmentShader,
      _
    )))
  ));

  let calls = mock.calls();
  assert!(calls.contains(&Call::DeleteStage(1)));
  assert!(calls.contains(&Call::DeleteStage(2)));
  assert_eq!(mock.count(|c| matches!(c, Call::CreateProgram(_))), 0);
}

#[test]
fn link_error_releases_everything() {
  let mut mock = Mock::new().fail_link("error: fragment shader input `vColor' has no matching output");

  match ShaderProgram::from_strings(&mut mock, VS, FS) {
    Err(ProgramError::LinkFailed(log)) => assert!(log.contains("vColor")),
    Err(e) => panic!("unexpected error: {}", e),
    Ok(_) => panic!("program linked"),
  }

  let calls = mock.calls();
  assert!(calls.contains(&Call::DeleteProgram(3)));
  assert!(calls.contains(&Call::DeleteStage(1)));
  assert!(calls.contains(&Call::DeleteStage(2)));
}

#[test]
fn missing_source_file_allocates_nothing() {
  let mut mock = Mock::new();
  let dir = common::scratch_dir("missing-shader");

  let result = ShaderProgram::from_files(&mut mock, dir.join("nope.vs"), dir.join("nope.fs"));

  match result {
    Err(ProgramError::SourceUnreadable(path, _)) => assert_eq!(path, dir.join("nope.vs")),
    Err(e) => panic!("unexpected error: {}", e),
    Ok(_) => panic!("program created from missing files"),
  }

  assert!(mock.calls().is_empty());
}

#[test]
fn from_files_reads_both_stages() {
  let mut mock = Mock::new().with_uniform("offset", 0);
  let dir = common::scratch_dir("shader-files");
  std::fs::write(dir.join("vertex.glsl"), VS).unwrap();
  std::fs::write(dir.join("fragment.glsl"), FS).unwrap();

  let program = ShaderProgram::from_files(&mut mock, dir.join("vertex.glsl"), dir.join("fragment.glsl"));

  assert!(program.is_ok());
  assert_eq!(mock.count(|c| matches!(c, Call::CreateStage(..))), 2);
}

#[test]
fn set_known_uniform() {
  let mut mock = Mock::new().with_uniform("offset", 4);
  let mut program = ShaderProgram::from_strings(&mut mock, VS, FS).unwrap();

  program.use_program();
  program.set_uniform("offset", 0.5f32).unwrap();

  let calls = mock.calls();
  assert!(calls.contains(&Call::UseProgram(3)));
  assert_eq!(
    calls.last(),
    Some(&Call::SetUniform(4, UniformValue::Float(0.5)))
  );
}

#[test]
fn unknown_uniform_is_reported() {
  let mut mock = Mock::new().with_uniform("offset", 0);
  let mut program = ShaderProgram::from_strings(&mut mock, VS, FS).unwrap();

  program.use_program();

  assert_eq!(
    program.set_uniform("model", 1),
    Err(UniformError::Unknown("model".to_owned()))
  );
  assert_eq!(mock.count(|c| matches!(c, Call::SetUniform(..))), 0);
}

#[test]
fn uniform_locations_are_cached() {
  let mut mock = Mock::new().with_uniform("texture1", 2);
  let mut program = ShaderProgram::from_strings(&mut mock, VS, FS).unwrap();

  assert_eq!(program.uniform_location("texture1"), Some(2));
  assert_eq!(program.uniform_location("texture1"), Some(2));
  program.set_uniform("texture1", 0).unwrap();

  assert_eq!(
    mock.count(|c| matches!(c, Call::UniformLocation(_, name) if name == "texture1")),
    1
  );
}

#[test]
fn missing_uniforms_are_cached_too() {
  let mut mock = Mock::new();
  let mut program = ShaderProgram::from_strings(&mut mock, VS, FS).unwrap();

  assert!(program.set_uniform("view", 1.0f32).is_err());
  assert!(program.set_uniform("view", 2.0f32).is_err());
  assert_eq!(program.uniform_location("view"), None);

  assert_eq!(mock.count(|c| matches!(c, Call::UniformLocation(..))), 1);
}

#[test]
fn matrices_dispatch_with_their_layout() {
  let mut mock = Mock::new().with_uniform("projection", 1).with_uniform("view", 2);
  let mut program = ShaderProgram::from_strings(&mut mock, VS, FS).unwrap();
  let m: [[f32; 4]; 4] = [
    [1., 2., 3., 4.],
    [5., 6., 7., 8.],
    [9., 10., 11., 12.],
    [13., 14., 15., 16.],
  ];

  program.set_uniform("projection", m).unwrap();
  program
    .set_uniform("view", UniformValue::mat4_row_major(m))
    .unwrap();

  let calls = mock.calls();
  assert!(calls.contains(&Call::SetUniform(
    1,
    UniformValue::Mat4 {
      columns: m,
      transpose: false
    }
  )));
  assert!(calls.contains(&Call::SetUniform(
    2,
    UniformValue::Mat4 {
      columns: m,
      transpose: true
    }
  )));
}
