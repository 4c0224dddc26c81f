//! # Shader program and texture wrappers
//!
//! This crate gathers the two reusable pieces of the LearnOpenGL getting-started programs:
//!
//! - [`ShaderProgram`](shader::ShaderProgram): compiles a vertex and a fragment shader, links them
//!   and assigns uniforms by name, caching uniform locations.
//! - [`Texture2D`](texture::Texture2D): owns a 2D texture, sets its sampling parameters and uploads
//!   PNG / JPEG images into it, generating mipmaps.
//!
//! # Implementation and architecture
//!
//! The crate doesn’t call any graphics API by itself. Both wrappers are parametered by a _backend_
//! type (by convention, the type variable `B`) implementing the traits of the
//! [`backend`] module. The OpenGL 3.3 backend lives in the `learnopengl-gl` crate and a GLFW
//! windowing crate, `learnopengl-glfw`, creates the window, the OpenGL context and hands you a
//! [`GraphicsContext`](context::GraphicsContext) to create resources with.
//!
//! # Binding state
//!
//! OpenGL keeps a global “currently bound” state per context: the program in use, the texture bound
//! to each texture unit. The wrappers don’t hide it:
//!
//! - [`ShaderProgram::set_uniform`](shader::ShaderProgram::set_uniform) assigns to the program in
//!   use; call [`ShaderProgram::use_program`](shader::ShaderProgram::use_program) first.
//! - [`Texture2D::set_parameter`](texture::Texture2D::set_parameter) and
//!   [`Texture2D::load`](texture::Texture2D::load) act on the bound texture; call
//!   [`Texture2D::bind`](texture::Texture2D::bind) first.
//!
//! Everything must happen on the thread owning the graphics context.

#![deny(missing_docs)]

pub mod backend;
pub mod context;
pub mod shader;
pub mod texture;
