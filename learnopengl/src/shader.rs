//! Shader API.
//!
//! A [`ShaderProgram`] is made of exactly two stages, a vertex shader and a fragment shader. Both
//! stages are compiled independently, then linked together. Stage objects only live for the time
//! of the link: they’re released as soon as the link has been attempted, whatever its outcome.
//!
//! Uniforms are set by name. The first lookup of a name asks the backend for its location and
//! caches the result, “not found” included, for the whole life of the program.

use std::collections::HashMap;
use std::error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::backend::shader::Shader;
use crate::context::GraphicsContext;

/// A shader stage type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StageType {
  /// Vertex shader.
  VertexShader,
  /// Fragment shader.
  FragmentShader,
}

impl fmt::Display for StageType {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StageType::VertexShader => f.write_str("vertex shader"),
      StageType::FragmentShader => f.write_str("fragment shader"),
    }
  }
}

/// Errors that shader stages can emit.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StageError {
  /// The backend couldn’t allocate a stage object.
  CreationFailed(StageType),
  /// Occurs when a shader fails to compile. The `String` is the compilation log, verbatim.
  CompilationFailed(StageType, String),
}

impl StageError {
  /// Create a compilation error.
  pub fn compilation_failed(ty: StageType, reason: impl Into<String>) -> Self {
    StageError::CompilationFailed(ty, reason.into())
  }
}

impl fmt::Display for StageError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StageError::CreationFailed(ty) => write!(f, "cannot create {}", ty),
      StageError::CompilationFailed(ty, ref r) => write!(f, "{} compilation error: {}", ty, r),
    }
  }
}

impl error::Error for StageError {}

/// Errors that a [`ShaderProgram`] can generate.
#[non_exhaustive]
#[derive(Debug)]
pub enum ProgramError {
  /// A shader source file couldn’t be read.
  SourceUnreadable(PathBuf, io::Error),
  /// A shader stage failed to compile.
  StageError(StageError),
  /// The backend couldn’t allocate a program object.
  CreationFailed(String),
  /// Program link failed. You can inspect the reason by looking at the contained `String`.
  LinkFailed(String),
}

impl ProgramError {
  /// Create a link error.
  pub fn link_failed(reason: impl Into<String>) -> Self {
    ProgramError::LinkFailed(reason.into())
  }
}

impl fmt::Display for ProgramError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      ProgramError::SourceUnreadable(ref path, ref e) => {
        write!(f, "cannot read shader source {}: {}", path.display(), e)
      }

      ProgramError::StageError(ref e) => write!(f, "shader program has stage error: {}", e),

      ProgramError::CreationFailed(ref s) => write!(f, "cannot create shader program: {}", s),

      ProgramError::LinkFailed(ref s) => write!(f, "shader program failed to link: {}", s),
    }
  }
}

impl error::Error for ProgramError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      ProgramError::SourceUnreadable(_, e) => Some(e),
      ProgramError::StageError(e) => Some(e),
      _ => None,
    }
  }
}

impl From<StageError> for ProgramError {
  fn from(e: StageError) -> Self {
    ProgramError::StageError(e)
  }
}

/// Errors related to uniform assignment.
///
/// Those are reported conditions: it’s up to the caller to decide whether they are fatal.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UniformError {
  /// The linked program has no active uniform with this name.
  Unknown(String),
}

impl UniformError {
  /// Create an unknown uniform error.
  pub fn unknown(name: impl Into<String>) -> Self {
    UniformError::Unknown(name.into())
  }
}

impl fmt::Display for UniformError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      UniformError::Unknown(ref name) => write!(f, "unknown {} uniform", name),
    }
  }
}

impl error::Error for UniformError {}

/// Value that can be sent to a uniform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
  /// 32-bit signed integer (`int`, or a sampler’s texture unit).
  Int(i32),
  /// 32-bit float (`float`).
  Float(f32),
  /// 4×4 float matrix (`mat4`).
  ///
  /// `columns` is column-major, which is what the GPU expects. Set `transpose` only if you laid
  /// the matrix out row by row.
  Mat4 {
    /// The sixteen floats, one array per column.
    columns: [[f32; 4]; 4],
    /// Whether the backend must transpose the matrix while uploading it.
    transpose: bool,
  },
}

impl UniformValue {
  /// A matrix which rows are laid out one after the other.
  pub fn mat4_row_major(rows: [[f32; 4]; 4]) -> Self {
    UniformValue::Mat4 {
      columns: rows,
      transpose: true,
    }
  }
}

impl From<i32> for UniformValue {
  fn from(x: i32) -> Self {
    UniformValue::Int(x)
  }
}

impl From<f32> for UniformValue {
  fn from(x: f32) -> Self {
    UniformValue::Float(x)
  }
}

impl From<[[f32; 4]; 4]> for UniformValue {
  fn from(columns: [[f32; 4]; 4]) -> Self {
    UniformValue::Mat4 {
      columns,
      transpose: false,
    }
  }
}

/// A linked vertex + fragment shader program.
///
/// The GPU program is released when this value is dropped.
pub struct ShaderProgram<B>
where
  B: ?Sized + Shader,
{
  repr: B::ProgramRepr,
  locations: HashMap<String, Option<i32>>,
}

impl<B> ShaderProgram<B>
where
  B: ?Sized + Shader,
{
  /// Compile `vertex` and `fragment` and link them into a program.
  ///
  /// Stage objects are released before this function returns, on success as on error.
  pub fn from_strings<C>(ctx: &mut C, vertex: &str, fragment: &str) -> Result<Self, ProgramError>
  where
    C: ?Sized + GraphicsContext<Backend = B>,
  {
    let backend = ctx.backend();

    let vertex = unsafe { backend.new_stage(StageType::VertexShader, vertex) }
      .map_err(warn_stage_error)?;
    let fragment = unsafe { backend.new_stage(StageType::FragmentShader, fragment) }
      .map_err(warn_stage_error)?;

    let repr = unsafe { backend.new_program(&vertex, &fragment) }.map_err(|e| {
      log::warn!("{}", e);
      e
    })?;

    log::debug!("shader program linked");

    Ok(ShaderProgram {
      repr,
      locations: HashMap::new(),
    })
  }

  /// Read the vertex and fragment sources from files and build a program out of them.
  ///
  /// Nothing is allocated on the GPU if one of the files can’t be read.
  pub fn from_files<C>(
    ctx: &mut C,
    vertex_path: impl AsRef<Path>,
    fragment_path: impl AsRef<Path>,
  ) -> Result<Self, ProgramError>
  where
    C: ?Sized + GraphicsContext<Backend = B>,
  {
    let vertex = read_source(vertex_path.as_ref())?;
    let fragment = read_source(fragment_path.as_ref())?;

    Self::from_strings(ctx, &vertex, &fragment)
  }

  /// Make this program the active one for subsequent draw calls and uniform assignments.
  pub fn use_program(&self) {
    unsafe { B::use_program(&self.repr) }
  }

  /// Location of the uniform `name`, if the program has one.
  ///
  /// Only the first call for a given name reaches the backend.
  pub fn uniform_location(&mut self, name: &str) -> Option<i32> {
    if let Some(&location) = self.locations.get(name) {
      return location;
    }

    let location = unsafe { B::uniform_location(&self.repr, name) };
    self.locations.insert(name.to_owned(), location);
    location
  }

  /// Assign `value` to the uniform `name`.
  ///
  /// The program must be in use (see [`ShaderProgram::use_program`]).
  pub fn set_uniform<V>(&mut self, name: &str, value: V) -> Result<(), UniformError>
  where
    V: Into<UniformValue>,
  {
    let location = self
      .uniform_location(name)
      .ok_or_else(|| UniformError::unknown(name))?;

    unsafe { B::set_uniform(&self.repr, location, &value.into()) };

    Ok(())
  }

  /// Backend representation of the program.
  pub fn repr(&self) -> &B::ProgramRepr {
    &self.repr
  }
}

fn read_source(path: &Path) -> Result<String, ProgramError> {
  fs::read_to_string(path).map_err(|e| ProgramError::SourceUnreadable(path.to_owned(), e))
}

fn warn_stage_error(e: StageError) -> StageError {
  log::warn!("{}", e);
  e
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn matrices_are_column_major_by_default() {
    let m: [[f32; 4]; 4] = [[1., 0., 0., 0.], [0., 1., 0., 0.], [0., 0., 1., 0.], [3., 4., 5., 1.]];

    assert_eq!(
      UniformValue::from(m),
      UniformValue::Mat4 {
        columns: m,
        transpose: false
      }
    );
    assert_eq!(
      UniformValue::mat4_row_major(m),
      UniformValue::Mat4 {
        columns: m,
        transpose: true
      }
    );
  }

  #[test]
  fn compilation_error_display_carries_log() {
    let e = ProgramError::from(StageError::compilation_failed(
      StageType::FragmentShader,
      "0:3(1): error: syntax error",
    ));

    assert_eq!(
      e.to_string(),
      "shader program has stage error: fragment shader compilation error: 0:3(1): error: syntax error"
    );
  }
}
