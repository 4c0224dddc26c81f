//! Shader backend interface.
//!
//! This interface defines the low-level API shader stages and programs must implement to be usable
//! with [`ShaderProgram`].
//!
//! Representations are expected to release their GPU object when dropped: [`ShaderProgram`] relies
//! on it to free stage objects right after linking, whatever the outcome.
//!
//! [`ShaderProgram`]: crate::shader::ShaderProgram

use crate::shader::{ProgramError, StageError, StageType, UniformValue};

/// Shader stages and programs.
pub unsafe trait Shader {
  /// Backend representation of a compiled shader stage.
  type StageRepr;

  /// Backend representation of a linked shader program.
  type ProgramRepr;

  /// Create and compile a new shader stage of type `ty` out of `src`.
  ///
  /// On compilation failure, the diagnostic log must be returned verbatim in
  /// [`StageError::CompilationFailed`] and the stage object released.
  unsafe fn new_stage(&mut self, ty: StageType, src: &str) -> Result<Self::StageRepr, StageError>;

  /// Create a program, attach `vertex` and `fragment` and link it.
  ///
  /// On link failure, the diagnostic log must be returned in [`ProgramError::LinkFailed`] and the
  /// program object released.
  unsafe fn new_program(
    &mut self,
    vertex: &Self::StageRepr,
    fragment: &Self::StageRepr,
  ) -> Result<Self::ProgramRepr, ProgramError>;

  /// Make the program the active one.
  unsafe fn use_program(program: &Self::ProgramRepr);

  /// Resolve a uniform name to its location in the program, if it exists.
  unsafe fn uniform_location(program: &Self::ProgramRepr, name: &str) -> Option<i32>;

  /// Assign a value to the uniform at `location` of the currently active program.
  unsafe fn set_uniform(program: &Self::ProgramRepr, location: i32, value: &UniformValue);
}
