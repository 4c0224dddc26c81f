use image::{Rgba, RgbaImage};
use learnopengl::texture::{ParamValue, Texture2D, TextureParameter};

pub fn fixture() {
  let mut surface = crate::hidden_surface("Texture load");

  let path = std::env::temp_dir().join(format!("learnopengl-fixture-{}.png", std::process::id()));
  RgbaImage::from_fn(64, 64, |x, y| Rgba([(x * 4) as u8, (y * 4) as u8, 0, 255]))
    .save(&path)
    .expect("write PNG");

  let mut texture = Texture2D::new(&mut surface.context);
  texture.bind();

  texture
    .set_parameter(TextureParameter::WrapS, gl::REPEAT)
    .expect("wrap S");
  texture
    .set_parameter(TextureParameter::MinFilter, gl::LINEAR_MIPMAP_LINEAR)
    .expect("min filter");
  texture
    .set_parameter(TextureParameter::MaxLod, 8.0f32)
    .expect("max LOD");
  assert!(texture
    .set_parameter(TextureParameter::MagFilter, "linear")
    .is_err());

  let rgba = texture.load(&path, true, false).expect("load");
  assert_eq!(rgba.dimensions(), (64, 64));
  assert_eq!(rgba.get_pixel(0, 0), &Rgba([252, 0, 0, 255]));

  let (mut width, mut height, mut wrap_s, mut max_lod) = (0, 0, 0, 0.);
  unsafe {
    gl::GetTexLevelParameteriv(gl::TEXTURE_2D, 0, gl::TEXTURE_WIDTH, &mut width);
    gl::GetTexLevelParameteriv(gl::TEXTURE_2D, 0, gl::TEXTURE_HEIGHT, &mut height);
    gl::GetTexParameteriv(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, &mut wrap_s);
    gl::GetTexParameterfv(gl::TEXTURE_2D, gl::TEXTURE_MAX_LOD, &mut max_lod);
    assert_eq!(gl::GetError(), gl::NO_ERROR);
  }

  assert_eq!((width, height), (64, 64));
  assert_eq!(wrap_s, gl::REPEAT as i32);
  assert_eq!(max_lod, 8.);
  assert_eq!(
    texture.parameter(TextureParameter::MinFilter),
    Some(&ParamValue::Int(gl::LINEAR_MIPMAP_LINEAR as i32))
  );
  assert_eq!(texture.parameter(TextureParameter::MagFilter), None);

  let _ = std::fs::remove_file(&path);
}
