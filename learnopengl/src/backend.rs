//! Backend interfacing.
//!
//! The traits in this module are the whole surface the wrappers of this crate call into. A backend
//! (such as `learnopengl-gl`’s `GL33`) implements them; the wrappers stay generic over it.

pub mod shader;
pub mod texture;
