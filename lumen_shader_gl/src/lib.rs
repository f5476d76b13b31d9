/*!
# Lumen Shader - OpenGL Backend

OpenGL implementation of the `lumen_shader` driver seam.

[`GlDriver`] forwards every `Driver` call to a `glow::Context`. The GL context
must already be current on the calling thread; creating windows and contexts
is left to the application (glutin, sdl2, winit + glutin-winit, ...).
*/

mod gl_driver;

pub use gl_driver::{create_context, GlDriver};

// Re-export the bindings so callers can build a `glow::Context`
pub use glow;
