//! In-memory backend recording every call it receives.

#![allow(dead_code)]

use learnopengl::backend::shader::Shader;
use learnopengl::backend::texture::Texture;
use learnopengl::context::GraphicsContext;
use learnopengl::shader::{ProgramError, StageError, StageType, UniformValue};
use learnopengl::texture::TextureParameter;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
  CreateStage(u32, StageType),
  DeleteStage(u32),
  CreateProgram(u32),
  DeleteProgram(u32),
  UseProgram(u32),
  UniformLocation(u32, String),
  SetUniform(i32, UniformValue),
  CreateTexture(u32),
  DeleteTexture(u32),
  BindTexture(u32),
  ParameterInt(TextureParameter, i32),
  ParameterFloat(TextureParameter, f32),
  UploadRgba(u32, u32, usize),
  GenerateMipmap,
}

#[derive(Debug, Default)]
pub struct Log {
  calls: Vec<Call>,
}

impl Log {
  fn push(&mut self, call: Call) {
    self.calls.push(call);
  }
}

#[derive(Debug, Default)]
pub struct Mock {
  log: Rc<RefCell<Log>>,
  next_handle: u32,
  compile_failures: HashMap<StageType, String>,
  link_failure: Option<String>,
  // name -> location of the uniforms active in every linked program
  uniforms: HashMap<String, i32>,
}

impl Mock {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn fail_compile(mut self, ty: StageType, log: &str) -> Self {
    self.compile_failures.insert(ty, log.to_owned());
    self
  }

  pub fn fail_link(mut self, log: &str) -> Self {
    self.link_failure = Some(log.to_owned());
    self
  }

  pub fn with_uniform(mut self, name: &str, location: i32) -> Self {
    self.uniforms.insert(name.to_owned(), location);
    self
  }

  pub fn calls(&self) -> Vec<Call> {
    self.log.borrow().calls.clone()
  }

  pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
    self.log.borrow().calls.iter().filter(|c| pred(c)).count()
  }

  fn handle(&mut self) -> u32 {
    self.next_handle += 1;
    self.next_handle
  }
}

unsafe impl GraphicsContext for Mock {
  type Backend = Mock;

  fn backend(&mut self) -> &mut Self::Backend {
    self
  }
}

pub struct Stage {
  handle: u32,
  log: Rc<RefCell<Log>>,
}

impl Drop for Stage {
  fn drop(&mut self) {
    self.log.borrow_mut().push(Call::DeleteStage(self.handle));
  }
}

pub struct Program {
  pub handle: u32,
  log: Rc<RefCell<Log>>,
  uniforms: HashMap<String, i32>,
}

impl Drop for Program {
  fn drop(&mut self) {
    self.log.borrow_mut().push(Call::DeleteProgram(self.handle));
  }
}

unsafe impl Shader for Mock {
  type StageRepr = Stage;

  type ProgramRepr = Program;

  unsafe fn new_stage(&mut self, ty: StageType, _: &str) -> Result<Self::StageRepr, StageError> {
    let handle = self.handle();
    self.log.borrow_mut().push(Call::CreateStage(handle, ty));

    let stage = Stage {
      handle,
      log: self.log.clone(),
    };

    match self.compile_failures.get(&ty) {
      Some(log) => Err(StageError::compilation_failed(ty, log.clone())),
      None => Ok(stage),
    }
  }

  unsafe fn new_program(
    &mut self,
    _: &Self::StageRepr,
    _: &Self::StageRepr,
  ) -> Result<Self::ProgramRepr, ProgramError> {
    let handle = self.handle();
    self.log.borrow_mut().push(Call::CreateProgram(handle));

    let program = Program {
      handle,
      log: self.log.clone(),
      uniforms: self.uniforms.clone(),
    };

    match self.link_failure {
      Some(ref log) => Err(ProgramError::link_failed(log.clone())),
      None => Ok(program),
    }
  }

  unsafe fn use_program(program: &Self::ProgramRepr) {
    program
      .log
      .borrow_mut()
      .push(Call::UseProgram(program.handle));
  }

  unsafe fn uniform_location(program: &Self::ProgramRepr, name: &str) -> Option<i32> {
    program
      .log
      .borrow_mut()
      .push(Call::UniformLocation(program.handle, name.to_owned()));
    program.uniforms.get(name).copied()
  }

  unsafe fn set_uniform(program: &Self::ProgramRepr, location: i32, value: &UniformValue) {
    program
      .log
      .borrow_mut()
      .push(Call::SetUniform(location, *value));
  }
}

pub struct Tex {
  pub handle: u32,
  log: Rc<RefCell<Log>>,
}

impl Drop for Tex {
  fn drop(&mut self) {
    self.log.borrow_mut().push(Call::DeleteTexture(self.handle));
  }
}

unsafe impl Texture for Mock {
  type TextureRepr = Tex;

  unsafe fn new_texture(&mut self) -> Self::TextureRepr {
    let handle = self.handle();
    self.log.borrow_mut().push(Call::CreateTexture(handle));

    Tex {
      handle,
      log: self.log.clone(),
    }
  }

  unsafe fn bind_texture(texture: &Self::TextureRepr) {
    texture
      .log
      .borrow_mut()
      .push(Call::BindTexture(texture.handle));
  }

  unsafe fn set_parameter_int(texture: &Self::TextureRepr, param: TextureParameter, value: i32) {
    texture
      .log
      .borrow_mut()
      .push(Call::ParameterInt(param, value));
  }

  unsafe fn set_parameter_float(texture: &Self::TextureRepr, param: TextureParameter, value: f32) {
    texture
      .log
      .borrow_mut()
      .push(Call::ParameterFloat(param, value));
  }

  unsafe fn upload_rgba(texture: &Self::TextureRepr, width: u32, height: u32, texels: &[u8]) {
    let mut log = texture.log.borrow_mut();
    log.push(Call::UploadRgba(width, height, texels.len()));
    log.push(Call::GenerateMipmap);
  }
}

/// A fresh, empty directory under the system temporary directory.
pub fn scratch_dir(name: &str) -> PathBuf {
  static COUNTER: AtomicUsize = AtomicUsize::new(0);

  let dir = std::env::temp_dir().join(format!(
    "learnopengl-{}-{}-{}",
    name,
    std::process::id(),
    COUNTER.fetch_add(1, Ordering::Relaxed)
  ));

  let _ = std::fs::remove_dir_all(&dir);
  std::fs::create_dir_all(&dir).unwrap();
  dir
}
