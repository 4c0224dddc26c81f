//! Pieces shared by every program: window creation, event handling, error reporting, vertex
//! arrays and texture setup.

// not every program uses every helper
#![allow(dead_code)]

use gl::types::*;
use glfw::{Action, Key, WindowEvent};
use learnopengl::context::GraphicsContext as _;
use learnopengl::texture::{Texture2D, TextureParameter};
use learnopengl_gl::GL33;
use learnopengl_glfw::{GL33Context, GlfwSurface};
use learnopengl_windowing::{WindowDim, WindowOpt};
use std::env;
use std::fmt;
use std::mem;
use std::os::raw::c_void;
use std::path::{Path, PathBuf};
use std::process;
use std::ptr;

pub const SCREEN_WIDTH: u32 = 800;
pub const SCREEN_HEIGHT: u32 = 600;

/// Color every program clears the screen with.
pub const CLEAR_COLOR: [f32; 4] = [0.2, 0.3, 0.3, 1.0];

/// Log `result`’s error and exit the process, or unwrap its value.
pub fn or_exit<T, E>(result: Result<T, E>, what: &str) -> T
where
  E: fmt::Display,
{
  match result {
    Ok(t) => t,
    Err(e) => {
      log::error!("{}: {}", what, e);
      process::exit(1);
    }
  }
}

/// Initialize logging and open the 800×600 “LearnOpenGL” window.
pub fn init() -> GlfwSurface {
  env_logger::init();

  let dim = WindowDim::Windowed {
    width: SCREEN_WIDTH,
    height: SCREEN_HEIGHT,
  };
  let mut surface = or_exit(
    GlfwSurface::new_gl33("LearnOpenGL", WindowOpt::default().set_dim(dim)),
    "cannot create the GLFW surface",
  );

  // the framebuffer might be bigger than the window (high-DPI screens)
  let (width, height) = surface.context.framebuffer_size();
  surface.context.set_viewport_size(width, height);
  surface.context.backend().set_clear_color(CLEAR_COLOR);

  surface
}

/// Poll the pending events.
///
/// Framebuffer resizes are mapped to the viewport. Returns `false` once the program must quit,
/// because the window was closed or <escape> was pressed.
pub fn handle_events(surface: &mut GlfwSurface) -> bool {
  surface.context.window.glfw.poll_events();

  for (_, event) in glfw::flush_messages(&surface.events_rx) {
    match event {
      WindowEvent::Close | WindowEvent::Key(Key::Escape, _, Action::Press, _) => return false,

      WindowEvent::FramebufferSize(width, height) => {
        surface.context.set_viewport_size(width, height);
      }

      _ => (),
    }
  }

  !surface.context.window.should_close()
}

/// Path given as the `index`-th command line argument, or `default`.
pub fn path_arg(index: usize, default: &str) -> PathBuf {
  env::args()
    .nth(index)
    .map(PathBuf::from)
    .unwrap_or_else(|| PathBuf::from(default))
}

/// Create a repeating, linearly filtered texture out of the image at `path`.
///
/// The texture is left bound to the active texture unit.
pub fn load_texture(context: &mut GL33Context, path: &Path, flip_vertical: bool) -> Texture2D<GL33> {
  let mut texture = Texture2D::new(context);

  texture.bind();

  for (param, value) in [
    (TextureParameter::WrapS, gl::REPEAT),
    (TextureParameter::WrapT, gl::REPEAT),
    (TextureParameter::MinFilter, gl::LINEAR),
    (TextureParameter::MagFilter, gl::LINEAR),
  ] {
    or_exit(
      texture.set_parameter(param, value),
      "cannot set texture parameter",
    );
  }

  let image = or_exit(
    texture.load(path, false, flip_vertical),
    "cannot load texture",
  );
  log::info!(
    "{}: {:?}, stride {}, {} bytes",
    path.display(),
    image.dimensions(),
    image.sample_layout().height_stride,
    image.as_raw().len()
  );

  texture
}

/// A vertex array object along with its vertex buffer and optional element buffer.
///
/// Vertices are tightly packed `f32` attributes; `layout` gives the number of components of each
/// attribute, in location order.
pub struct VertexArray {
  vao: GLuint,
  vbo: GLuint,
  ebo: Option<GLuint>,
}

impl VertexArray {
  pub fn new(vertices: &[f32], layout: &[usize]) -> Self {
    Self::build(vertices, None, layout)
  }

  pub fn with_indices(vertices: &[f32], indices: &[u32], layout: &[usize]) -> Self {
    Self::build(vertices, Some(indices), layout)
  }

  fn build(vertices: &[f32], indices: Option<&[u32]>, layout: &[usize]) -> Self {
    let mut vao = 0;
    let mut vbo = 0;
    let mut ebo = None;

    unsafe {
      gl::GenVertexArrays(1, &mut vao);
      gl::GenBuffers(1, &mut vbo);

      // the VAO records the attribute layout and the element buffer binding
      gl::BindVertexArray(vao);

      gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
      gl::BufferData(
        gl::ARRAY_BUFFER,
        mem::size_of_val(vertices) as GLsizeiptr,
        vertices.as_ptr() as *const c_void,
        gl::STATIC_DRAW,
      );

      if let Some(indices) = indices {
        let mut handle = 0;
        gl::GenBuffers(1, &mut handle);
        gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, handle);
        gl::BufferData(
          gl::ELEMENT_ARRAY_BUFFER,
          mem::size_of_val(indices) as GLsizeiptr,
          indices.as_ptr() as *const c_void,
          gl::STATIC_DRAW,
        );
        ebo = Some(handle);
      }

      let stride = (layout.iter().sum::<usize>() * mem::size_of::<f32>()) as GLsizei;
      let mut offset = 0;

      for (location, &components) in layout.iter().enumerate() {
        gl::VertexAttribPointer(
          location as GLuint,
          components as GLint,
          gl::FLOAT,
          gl::FALSE,
          stride,
          (offset * mem::size_of::<f32>()) as *const c_void,
        );
        gl::EnableVertexAttribArray(location as GLuint);
        offset += components;
      }

      gl::BindBuffer(gl::ARRAY_BUFFER, 0);
      gl::BindVertexArray(0);
    }

    VertexArray { vao, vbo, ebo }
  }

  /// Draw `count` vertices as triangles.
  pub fn draw_arrays(&self, count: usize) {
    unsafe {
      gl::BindVertexArray(self.vao);
      gl::DrawArrays(gl::TRIANGLES, 0, count as GLsizei);
    }
  }

  /// Draw `count` indexed vertices as triangles.
  pub fn draw_elements(&self, count: usize) {
    unsafe {
      gl::BindVertexArray(self.vao);
      gl::DrawElements(
        gl::TRIANGLES,
        count as GLsizei,
        gl::UNSIGNED_INT,
        ptr::null(),
      );
    }
  }
}

impl Drop for VertexArray {
  fn drop(&mut self) {
    unsafe {
      gl::DeleteVertexArrays(1, &self.vao);
      gl::DeleteBuffers(1, &self.vbo);

      if let Some(ebo) = self.ebo {
        gl::DeleteBuffers(1, &ebo);
      }
    }
  }
}

/// Swap the back and front buffers.
pub fn swap_buffers(surface: &mut GlfwSurface) {
  use glfw::Context as _;

  surface.context.window.swap_buffers();
}

/// A unit cube centered on the origin: 36 vertices made of a position and texture coordinates.
#[rustfmt::skip]
pub const CUBE_VERTICES: [f32; 180] = [
  // back face
  -0.5, -0.5, -0.5,  0.0, 0.0,
   0.5, -0.5, -0.5,  1.0, 0.0,
   0.5,  0.5, -0.5,  1.0, 1.0,
   0.5,  0.5, -0.5,  1.0, 1.0,
  -0.5,  0.5, -0.5,  0.0, 1.0,
  -0.5, -0.5, -0.5,  0.0, 0.0,
  // front face
  -0.5, -0.5,  0.5,  0.0, 0.0,
   0.5, -0.5,  0.5,  1.0, 0.0,
   0.5,  0.5,  0.5,  1.0, 1.0,
   0.5,  0.5,  0.5,  1.0, 1.0,
  -0.5,  0.5,  0.5,  0.0, 1.0,
  -0.5, -0.5,  0.5,  0.0, 0.0,
  // left face
  -0.5,  0.5,  0.5,  1.0, 0.0,
  -0.5,  0.5, -0.5,  1.0, 1.0,
  -0.5, -0.5, -0.5,  0.0, 1.0,
  -0.5, -0.5, -0.5,  0.0, 1.0,
  -0.5, -0.5,  0.5,  0.0, 0.0,
  -0.5,  0.5,  0.5,  1.0, 0.0,
  // right face
   0.5,  0.5,  0.5,  1.0, 0.0,
   0.5,  0.5, -0.5,  1.0, 1.0,
   0.5, -0.5, -0.5,  0.0, 1.0,
   0.5, -0.5, -0.5,  0.0, 1.0,
   0.5, -0.5,  0.5,  0.0, 0.0,
   0.5,  0.5,  0.5,  1.0, 0.0,
  // bottom face
  -0.5, -0.5, -0.5,  0.0, 1.0,
   0.5, -0.5, -0.5,  1.0, 1.0,
   0.5, -0.5,  0.5,  1.0, 0.0,
   0.5, -0.5,  0.5,  1.0, 0.0,
  -0.5, -0.5,  0.5,  0.0, 0.0,
  -0.5, -0.5, -0.5,  0.0, 1.0,
  // top face
  -0.5,  0.5, -0.5,  0.0, 1.0,
   0.5,  0.5, -0.5,  1.0, 1.0,
   0.5,  0.5,  0.5,  1.0, 0.0,
   0.5,  0.5,  0.5,  1.0, 0.0,
  -0.5,  0.5,  0.5,  0.0, 0.0,
  -0.5,  0.5, -0.5,  0.0, 1.0,
];
