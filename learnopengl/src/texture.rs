//! Texture API.
//!
//! A [`Texture2D`] owns one GPU 2D texture. Its sampling parameters are set one by one with
//! [`Texture2D::set_parameter`] and its content comes from an image file decoded by
//! [`Texture2D::load`].
//!
//! Both operations act on the texture currently bound to the 2D target: bind the texture first with
//! [`Texture2D::bind`].

use std::collections::HashMap;
use std::error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use image::error::{ImageFormatHint, UnsupportedError, UnsupportedErrorKind};
use image::{imageops, ImageError, ImageFormat, ImageReader};

use crate::backend::texture::Texture as TextureBackend;
use crate::context::GraphicsContext;

pub use image::RgbaImage;

/// Sampling parameter of a texture.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TextureParameter {
  /// Wrapping along the horizontal axis.
  WrapS,
  /// Wrapping along the vertical axis.
  WrapT,
  /// Wrapping along the depth axis.
  WrapR,
  /// Minification filter.
  MinFilter,
  /// Magnification filter.
  MagFilter,
  /// Lowest defined level of detail.
  MinLod,
  /// Highest defined level of detail.
  MaxLod,
  /// Index of the lowest defined mipmap level.
  BaseLevel,
  /// Index of the highest defined mipmap level.
  MaxLevel,
  /// Bias added to the level of detail before sampling.
  LodBias,
  /// Depth comparison mode.
  CompareMode,
  /// Depth comparison function.
  CompareFunc,
}

impl fmt::Display for TextureParameter {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      TextureParameter::WrapS => f.write_str("wrap S"),
      TextureParameter::WrapT => f.write_str("wrap T"),
      TextureParameter::WrapR => f.write_str("wrap R"),
      TextureParameter::MinFilter => f.write_str("minification filter"),
      TextureParameter::MagFilter => f.write_str("magnification filter"),
      TextureParameter::MinLod => f.write_str("minimum LOD"),
      TextureParameter::MaxLod => f.write_str("maximum LOD"),
      TextureParameter::BaseLevel => f.write_str("base level"),
      TextureParameter::MaxLevel => f.write_str("max level"),
      TextureParameter::LodBias => f.write_str("LOD bias"),
      TextureParameter::CompareMode => f.write_str("compare mode"),
      TextureParameter::CompareFunc => f.write_str("compare function"),
    }
  }
}

/// Value of a sampling parameter.
///
/// Only [`ParamValue::Int`] and [`ParamValue::Float`] can reach the GPU; the other variants exist so
/// that values coming from untyped sources can be handed over as-is and rejected with a proper
/// error.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
  /// Integer or enumerated constant (`GL_REPEAT`, `GL_LINEAR`, …).
  Int(i32),
  /// Float value.
  Float(f32),
  /// Boolean value; unsupported.
  Bool(bool),
  /// String value; unsupported.
  Str(String),
}

impl ParamValue {
  /// Name of the carried type.
  pub fn type_name(&self) -> &'static str {
    match *self {
      ParamValue::Int(_) => "integer",
      ParamValue::Float(_) => "float",
      ParamValue::Bool(_) => "boolean",
      ParamValue::Str(_) => "string",
    }
  }
}

impl fmt::Display for ParamValue {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      ParamValue::Int(x) => write!(f, "{}", x),
      ParamValue::Float(x) => write!(f, "{}", x),
      ParamValue::Bool(x) => write!(f, "{}", x),
      ParamValue::Str(ref x) => write!(f, "{:?}", x),
    }
  }
}

impl From<i32> for ParamValue {
  fn from(x: i32) -> Self {
    ParamValue::Int(x)
  }
}

// OpenGL enumerated constants are unsigned but fit in the signed setter
impl From<u32> for ParamValue {
  fn from(x: u32) -> Self {
    ParamValue::Int(x as i32)
  }
}

impl From<f32> for ParamValue {
  fn from(x: f32) -> Self {
    ParamValue::Float(x)
  }
}

impl From<bool> for ParamValue {
  fn from(x: bool) -> Self {
    ParamValue::Bool(x)
  }
}

impl<'a> From<&'a str> for ParamValue {
  fn from(x: &'a str) -> Self {
    ParamValue::Str(x.to_owned())
  }
}

impl From<String> for ParamValue {
  fn from(x: String) -> Self {
    ParamValue::Str(x)
  }
}

/// Errors that might happen when working with textures.
#[non_exhaustive]
#[derive(Debug)]
pub enum TextureError {
  /// The image file couldn’t be opened or read.
  FileOpen {
    /// Path of the image.
    path: PathBuf,
    /// Underlying I/O error.
    source: io::Error,
  },
  /// The image container is unrecognized, unsupported (only PNG and JPEG are) or corrupt.
  Decode {
    /// Path of the image.
    path: PathBuf,
    /// Underlying decoding error.
    source: ImageError,
  },
  /// The decoded RGBA rows are not tightly packed.
  UnsupportedStride {
    /// Row stride, in bytes.
    stride: usize,
    /// Width of the image, in pixels.
    width: usize,
  },
  /// A sampling parameter was given a value which is neither an integer nor a float.
  UnsupportedParameterType {
    /// The parameter that was being set.
    parameter: TextureParameter,
    /// The rejected value.
    value: ParamValue,
  },
}

impl fmt::Display for TextureError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      TextureError::FileOpen {
        ref path,
        ref source,
      } => write!(f, "cannot open {}: {}", path.display(), source),

      TextureError::Decode {
        ref path,
        ref source,
      } => write!(f, "cannot decode {}: {}", path.display(), source),

      TextureError::UnsupportedStride { stride, width } => write!(
        f,
        "unsupported stride {} (expected {} for a width of {})",
        stride,
        width * 4,
        width
      ),

      TextureError::UnsupportedParameterType {
        parameter,
        ref value,
      } => write!(
        f,
        "unsupported {} value {} for {}",
        value.type_name(),
        value,
        parameter
      ),
    }
  }
}

impl error::Error for TextureError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      TextureError::FileOpen { source, .. } => Some(source),
      TextureError::Decode { source, .. } => Some(source),
      _ => None,
    }
  }
}

/// A GPU 2D texture.
///
/// The GPU texture is released when this value is dropped.
pub struct Texture2D<B>
where
  B: ?Sized + TextureBackend,
{
  repr: B::TextureRepr,
  params: HashMap<TextureParameter, ParamValue>,
}

impl<B> Texture2D<B>
where
  B: ?Sized + TextureBackend,
{
  /// Allocate a new texture.
  ///
  /// The texture is not bound and has no content yet.
  pub fn new<C>(ctx: &mut C) -> Self
  where
    C: ?Sized + GraphicsContext<Backend = B>,
  {
    let repr = unsafe { ctx.backend().new_texture() };

    Texture2D {
      repr,
      params: HashMap::new(),
    }
  }

  /// Bind this texture to the 2D target of the currently active texture unit.
  pub fn bind(&self) {
    unsafe { B::bind_texture(&self.repr) }
  }

  /// Set a sampling parameter of the currently bound texture.
  ///
  /// Only integers and floats are accepted. A successfully set value is recorded and can be read
  /// back with [`Texture2D::parameter`]; a rejected value leaves the GPU and the record untouched.
  pub fn set_parameter<V>(&mut self, parameter: TextureParameter, value: V) -> Result<(), TextureError>
  where
    V: Into<ParamValue>,
  {
    let value = value.into();

    match value {
      ParamValue::Int(x) => unsafe { B::set_parameter_int(&self.repr, parameter, x) },
      ParamValue::Float(x) => unsafe { B::set_parameter_float(&self.repr, parameter, x) },
      ParamValue::Bool(_) | ParamValue::Str(_) => {
        return Err(TextureError::UnsupportedParameterType { parameter, value });
      }
    }

    self.params.insert(parameter, value);

    Ok(())
  }

  /// Last value successfully set for `parameter`.
  pub fn parameter(&self, parameter: TextureParameter) -> Option<&ParamValue> {
    self.params.get(&parameter)
  }

  /// Every parameter set so far along with its last value.
  pub fn parameters(&self) -> impl Iterator<Item = (&TextureParameter, &ParamValue)> {
    self.params.iter()
  }

  /// Decode the image at `path`, upload it as the content of the currently bound texture and
  /// generate its mipmaps.
  ///
  /// The image can be mirrored horizontally and / or vertically on its way to the GPU. The decoded
  /// RGBA texels are returned. Every call uploads again.
  pub fn load(
    &self,
    path: impl AsRef<Path>,
    flip_horizontal: bool,
    flip_vertical: bool,
  ) -> Result<RgbaImage, TextureError> {
    let path = path.as_ref();
    let rgba = decode_rgba(path, flip_horizontal, flip_vertical)?;
    let (width, height) = rgba.dimensions();

    unsafe { B::upload_rgba(&self.repr, width, height, rgba.as_raw()) };

    log::debug!("uploaded {} ({}×{})", path.display(), width, height);

    Ok(rgba)
  }

  /// Backend representation of the texture.
  pub fn repr(&self) -> &B::TextureRepr {
    &self.repr
  }
}

/// Decode a PNG or JPEG image into tightly packed RGBA8 texels.
///
/// `flip_horizontal` mirrors columns, `flip_vertical` mirrors rows.
pub fn decode_rgba(
  path: impl AsRef<Path>,
  flip_horizontal: bool,
  flip_vertical: bool,
) -> Result<RgbaImage, TextureError> {
  let path = path.as_ref();
  let file_open = |source| TextureError::FileOpen {
    path: path.to_owned(),
    source,
  };
  let decode = |source| TextureError::Decode {
    path: path.to_owned(),
    source,
  };

  let file = File::open(path).map_err(file_open)?;
  let reader = ImageReader::new(BufReader::new(file))
    .with_guessed_format()
    .map_err(file_open)?;

  match reader.format() {
    Some(ImageFormat::Png) | Some(ImageFormat::Jpeg) => (),
    format => return Err(decode(unsupported_format(format))),
  }

  let mut rgba = reader.decode().map_err(decode)?.into_rgba8();

  let stride = rgba.sample_layout().height_stride;
  let width = rgba.width() as usize;
  if stride != width * 4 {
    return Err(TextureError::UnsupportedStride { stride, width });
  }

  if flip_horizontal {
    imageops::flip_horizontal_in_place(&mut rgba);
  }

  if flip_vertical {
    imageops::flip_vertical_in_place(&mut rgba);
  }

  Ok(rgba)
}

fn unsupported_format(format: Option<ImageFormat>) -> ImageError {
  let hint = format
    .map(ImageFormatHint::Exact)
    .unwrap_or(ImageFormatHint::Unknown);

  ImageError::Unsupported(UnsupportedError::from_format_and_kind(
    hint.clone(),
    UnsupportedErrorKind::Format(hint),
  ))
}
