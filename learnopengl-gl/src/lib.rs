//! OpenGL backends.
//!
//! This crate exports an [OpenGL](https://www.khronos.org/opengl/) 3.3 backend for the `learnopengl`
//! shader and texture wrappers. The backend type is [`GL33`]; you typically don’t build it yourself
//! but get it from a windowing crate, such as `learnopengl-glfw`, once an OpenGL context is current.

pub mod gl33;

pub use gl33::GL33;
