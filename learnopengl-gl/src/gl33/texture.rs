use crate::gl33::{state::GLState, GL33};
use gl::{self, types::*};
use learnopengl::{backend::texture::Texture as TextureBackend, texture::TextureParameter};
use std::{cell::RefCell, os::raw::c_void, rc::Rc};

/// A 2D texture.
#[derive(Debug)]
pub struct Texture {
  pub(crate) handle: GLuint, // handle to the GPU texture object
  state: Rc<RefCell<GLState>>,
}

impl Drop for Texture {
  fn drop(&mut self) {
    unsafe {
      gl::DeleteTextures(1, &self.handle);
    }

    self.state.borrow_mut().forget_texture(self.handle);
  }
}

impl Texture {
  /// OpenGL name of the texture.
  pub fn handle(&self) -> GLuint {
    self.handle
  }
}

unsafe impl TextureBackend for GL33 {
  type TextureRepr = Texture;

  unsafe fn new_texture(&mut self) -> Self::TextureRepr {
    let handle = self.state.borrow_mut().create_texture();

    Texture {
      handle,
      state: self.state.clone(),
    }
  }

  unsafe fn bind_texture(texture: &Self::TextureRepr) {
    texture.state.borrow_mut().bind_texture(texture.handle);
  }

  unsafe fn set_parameter_int(_: &Self::TextureRepr, param: TextureParameter, value: i32) {
    gl::TexParameteri(gl::TEXTURE_2D, opengl_parameter(param), value);
  }

  unsafe fn set_parameter_float(_: &Self::TextureRepr, param: TextureParameter, value: f32) {
    gl::TexParameterf(gl::TEXTURE_2D, opengl_parameter(param), value);
  }

  unsafe fn upload_rgba(_: &Self::TextureRepr, width: u32, height: u32, texels: &[u8]) {
    gl::TexImage2D(
      gl::TEXTURE_2D,
      0,
      gl::RGBA as GLint,
      width as GLsizei,
      height as GLsizei,
      0,
      gl::RGBA,
      gl::UNSIGNED_BYTE,
      texels.as_ptr() as *const c_void,
    );

    gl::GenerateMipmap(gl::TEXTURE_2D);
  }
}

fn opengl_parameter(param: TextureParameter) -> GLenum {
  match param {
    TextureParameter::WrapS => gl::TEXTURE_WRAP_S,
    TextureParameter::WrapT => gl::TEXTURE_WRAP_T,
    TextureParameter::WrapR => gl::TEXTURE_WRAP_R,
    TextureParameter::MinFilter => gl::TEXTURE_MIN_FILTER,
    TextureParameter::MagFilter => gl::TEXTURE_MAG_FILTER,
    TextureParameter::MinLod => gl::TEXTURE_MIN_LOD,
    TextureParameter::MaxLod => gl::TEXTURE_MAX_LOD,
    TextureParameter::BaseLevel => gl::TEXTURE_BASE_LEVEL,
    TextureParameter::MaxLevel => gl::TEXTURE_MAX_LEVEL,
    TextureParameter::LodBias => gl::TEXTURE_LOD_BIAS,
    TextureParameter::CompareMode => gl::TEXTURE_COMPARE_MODE,
    TextureParameter::CompareFunc => gl::TEXTURE_COMPARE_FUNC,
  }
}
