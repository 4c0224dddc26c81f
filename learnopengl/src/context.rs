//! Graphics context.
//!
//! A graphics context is an object that abstracts all the low-level operations that happen on a
//! graphics device. This crate doesn’t create such contexts: windowing crates (for instance
//! `learnopengl-glfw`) do it for you and hand you a type implementing [`GraphicsContext`].
//!
//! # On context and threads
//!
//! - An object which type implements `GraphicsContext` must be `!Send` and `!Sync`. This enforces that it
//!   cannot be moved nor shared between threads. Backends carrying their graphics state are very likely to
//!   be `!Send` and `!Sync` automatically.
//! - You can only create a single context per thread.
//! - Every resource ([`ShaderProgram`], [`Texture2D`]) must be created and used on the thread owning the
//!   context it was created with.
//!
//! [`ShaderProgram`]: crate::shader::ShaderProgram
//! [`Texture2D`]: crate::texture::Texture2D

/// Class of graphics context.
///
/// Such a context must not be Send nor Sync, which means that you cannot share it between
/// threads in any way (move / borrow).
pub unsafe trait GraphicsContext {
  /// Backend type the context drives.
  type Backend: ?Sized;

  /// Access the underlying backend.
  fn backend(&mut self) -> &mut Self::Backend;
}
