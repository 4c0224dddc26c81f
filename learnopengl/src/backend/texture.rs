//! Texture backend interface.
//!
//! This interface defines the low-level API 2D textures must implement to be usable with
//! [`Texture2D`].
//!
//! Apart from [`Texture::bind_texture`], every operation applies to the texture currently bound to
//! the 2D target, not to the representation passed as argument; the representation is handed over so
//! that backends can track state if they need to.
//!
//! [`Texture2D`]: crate::texture::Texture2D

use crate::texture::TextureParameter;

/// 2D textures.
pub unsafe trait Texture {
  /// Backend representation of a texture.
  type TextureRepr;

  /// Allocate a new texture handle.
  unsafe fn new_texture(&mut self) -> Self::TextureRepr;

  /// Bind the texture to the 2D target of the currently active texture unit.
  unsafe fn bind_texture(texture: &Self::TextureRepr);

  /// Set an integer-valued sampling parameter.
  unsafe fn set_parameter_int(texture: &Self::TextureRepr, param: TextureParameter, value: i32);

  /// Set a float-valued sampling parameter.
  unsafe fn set_parameter_float(texture: &Self::TextureRepr, param: TextureParameter, value: f32);

  /// Upload tightly packed RGBA8 texels as the whole level-0 image and generate the mipmap chain.
  ///
  /// `texels` is exactly `width * height * 4` bytes long.
  unsafe fn upload_rgba(texture: &Self::TextureRepr, width: u32, height: u32, texels: &[u8]);
}
