mod common;

use common::{Call, Mock};
use image::{Rgb, RgbImage, Rgba, RgbaImage};
use learnopengl::texture::{decode_rgba, ParamValue, Texture2D, TextureError, TextureParameter};
use std::path::{Path, PathBuf};

// GL_REPEAT, GL_LINEAR
const REPEAT: u32 = 0x2901;
const LINEAR: u32 = 0x2601;

// every pixel is unique so that mirroring is observable
fn gradient(dir: &Path) -> PathBuf {
  let path = dir.join("gradient.png");
  let img = RgbaImage::from_fn(64, 64, |x, y| Rgba([(x * 4) as u8, (y * 4) as u8, 128, 255]));
  img.save(&path).unwrap();
  path
}

#[test]
fn decode_png_tightly_packed() {
  let dir = common::scratch_dir("decode-png");
  let rgba = decode_rgba(gradient(&dir), false, false).unwrap();

  assert_eq!(rgba.dimensions(), (64, 64));
  assert_eq!(rgba.sample_layout().height_stride, 64 * 4);
  assert_eq!(rgba.as_raw().len(), 64 * 64 * 4);
  assert_eq!(rgba.get_pixel(3, 5), &Rgba([12, 20, 128, 255]));
}

#[test]
fn horizontal_flip_mirrors_columns() {
  let dir = common::scratch_dir("flip-h");
  let path = gradient(&dir);
  let straight = decode_rgba(&path, false, false).unwrap();
  let flipped = decode_rgba(&path, true, false).unwrap();

  for y in 0..64 {
    assert_eq!(flipped.get_pixel(0, y), straight.get_pixel(63, y));
    assert_eq!(flipped.get_pixel(63, y), straight.get_pixel(0, y));
  }
}

#[test]
fn vertical_flip_mirrors_rows() {
  let dir = common::scratch_dir("flip-v");
  let path = gradient(&dir);
  let straight = decode_rgba(&path, false, false).unwrap();
  let flipped = decode_rgba(&path, false, true).unwrap();

  for x in 0..64 {
    assert_eq!(flipped.get_pixel(x, 0), straight.get_pixel(x, 63));
  }
}

#[test]
fn both_flips() {
  let dir = common::scratch_dir("flip-hv");
  let path = gradient(&dir);
  let straight = decode_rgba(&path, false, false).unwrap();
  let flipped = decode_rgba(&path, true, true).unwrap();

  assert_eq!(flipped.get_pixel(0, 0), straight.get_pixel(63, 63));
  assert_eq!(flipped.get_pixel(10, 20), straight.get_pixel(53, 43));
}

#[test]
fn decode_jpeg_as_opaque_rgba() {
  let dir = common::scratch_dir("decode-jpeg");
  let path = dir.join("container.jpg");
  RgbImage::from_pixel(16, 8, Rgb([200, 120, 40]))
    .save(&path)
    .unwrap();

  let rgba = decode_rgba(&path, false, false).unwrap();

  assert_eq!(rgba.dimensions(), (16, 8));
  assert_eq!(rgba.sample_layout().height_stride, 16 * 4);
  assert!(rgba.pixels().all(|p| p[3] == 255));
}

#[test]
fn nonexistent_file() {
  let dir = common::scratch_dir("nonexistent");

  match decode_rgba(dir.join("container.jpg"), false, false) {
    Err(TextureError::FileOpen { path, .. }) => assert_eq!(path, dir.join("container.jpg")),
    Err(e) => panic!("unexpected error: {}", e),
    Ok(_) => panic!("decoded a file that doesn’t exist"),
  }
}

#[test]
fn bmp_is_rejected() {
  let dir = common::scratch_dir("bmp");
  let path = dir.join("pixel.bmp");

  // 1×1 24-bit BMP, one red pixel
  let mut bmp = Vec::new();
  bmp.extend_from_slice(b"BM");
  bmp.extend_from_slice(&58u32.to_le_bytes());
  bmp.extend_from_slice(&[0; 4]);
  bmp.extend_from_slice(&54u32.to_le_bytes());
  bmp.extend_from_slice(&40u32.to_le_bytes());
  bmp.extend_from_slice(&1i32.to_le_bytes());
  bmp.extend_from_slice(&1i32.to_le_bytes());
  bmp.extend_from_slice(&1u16.to_le_bytes());
  bmp.extend_from_slice(&24u16.to_le_bytes());
  bmp.extend_from_slice(&[0; 24]);
  bmp.extend_from_slice(&[0, 0, 255, 0]);
  std::fs::write(&path, bmp).unwrap();

  assert!(matches!(
    decode_rgba(&path, false, false),
    Err(TextureError::Decode { .. })
  ));
}

#[test]
fn corrupt_png_is_rejected() {
  let dir = common::scratch_dir("corrupt");
  let path = dir.join("broken.png");
  let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
  bytes.extend_from_slice(b"definitely not chunks");
  std::fs::write(&path, bytes).unwrap();

  assert!(matches!(
    decode_rgba(&path, false, false),
    Err(TextureError::Decode { .. })
  ));
}

#[test]
fn unknown_container_is_rejected() {
  let dir = common::scratch_dir("unknown");
  let path = dir.join("notes.txt");
  std::fs::write(&path, "some text").unwrap();

  assert!(matches!(
    decode_rgba(&path, false, false),
    Err(TextureError::Decode { .. })
  ));
}

#[test]
fn new_texture_allocates_one_handle() {
  let mut mock = Mock::new();
  let tex = Texture2D::new(&mut mock);

  assert_eq!(mock.calls(), vec![Call::CreateTexture(tex.repr().handle)]);

  drop(tex);
  assert_eq!(mock.calls().last(), Some(&Call::DeleteTexture(1)));
}

#[test]
fn integer_and_float_parameters() {
  let mut mock = Mock::new();
  let mut tex = Texture2D::new(&mut mock);

  tex.bind();
  tex.set_parameter(TextureParameter::WrapS, REPEAT).unwrap();
  tex.set_parameter(TextureParameter::MinFilter, LINEAR).unwrap();
  tex.set_parameter(TextureParameter::LodBias, 0.25f32).unwrap();

  assert_eq!(
    mock.calls(),
    vec![
      Call::CreateTexture(1),
      Call::BindTexture(1),
      Call::ParameterInt(TextureParameter::WrapS, REPEAT as i32),
      Call::ParameterInt(TextureParameter::MinFilter, LINEAR as i32),
      Call::ParameterFloat(TextureParameter::LodBias, 0.25),
    ]
  );

  assert_eq!(
    tex.parameter(TextureParameter::WrapS),
    Some(&ParamValue::Int(REPEAT as i32))
  );
  assert_eq!(
    tex.parameter(TextureParameter::LodBias),
    Some(&ParamValue::Float(0.25))
  );
  assert_eq!(tex.parameter(TextureParameter::MagFilter), None);
  assert_eq!(tex.parameters().count(), 3);
}

#[test]
fn last_value_wins() {
  let mut mock = Mock::new();
  let mut tex = Texture2D::new(&mut mock);

  tex.set_parameter(TextureParameter::MaxLevel, 4).unwrap();
  tex.set_parameter(TextureParameter::MaxLevel, 2).unwrap();

  assert_eq!(
    tex.parameter(TextureParameter::MaxLevel),
    Some(&ParamValue::Int(2))
  );
}

#[test]
fn boolean_and_string_parameters_are_rejected() {
  let mut mock = Mock::new();
  let mut tex = Texture2D::new(&mut mock);

  match tex.set_parameter(TextureParameter::WrapT, true) {
    Err(TextureError::UnsupportedParameterType { parameter, value }) => {
      assert_eq!(parameter, TextureParameter::WrapT);
      assert_eq!(value, ParamValue::Bool(true));
    }

    r => panic!("boolean accepted: {:?}", r),
  }

  assert!(matches!(
    tex.set_parameter(TextureParameter::MagFilter, "linear"),
    Err(TextureError::UnsupportedParameterType { .. })
  ));

  assert_eq!(tex.parameter(TextureParameter::WrapT), None);
  assert_eq!(tex.parameter(TextureParameter::MagFilter), None);
  assert_eq!(mock.calls(), vec![Call::CreateTexture(1)]);
}

#[test]
fn load_uploads_and_generates_mipmaps() {
  let dir = common::scratch_dir("load");
  let path = gradient(&dir);
  let mut mock = Mock::new();
  let tex = Texture2D::new(&mut mock);

  tex.bind();
  let rgba = tex.load(&path, false, true).unwrap();
  tex.load(&path, false, false).unwrap();

  assert_eq!(rgba.dimensions(), (64, 64));
  assert_eq!(
    mock.calls(),
    vec![
      Call::CreateTexture(1),
      Call::BindTexture(1),
      Call::UploadRgba(64, 64, 64 * 64 * 4),
      Call::GenerateMipmap,
      Call::UploadRgba(64, 64, 64 * 64 * 4),
      Call::GenerateMipmap,
    ]
  );
}

#[test]
fn failed_load_uploads_nothing() {
  let dir = common::scratch_dir("failed-load");
  let mut mock = Mock::new();
  let tex = Texture2D::new(&mut mock);

  assert!(tex.load(dir.join("awesomeface.png"), false, false).is_err());
  assert_eq!(mock.count(|c| matches!(c, Call::UploadRgba(..))), 0);
}
