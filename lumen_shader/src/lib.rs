/*!
# Lumen Shader

Shader program management for the Lumen renderer.

This crate loads vertex and fragment shader sources, compiles and links them
into a GPU program, and uploads uniform values by name. Every GPU operation goes
through the [`Driver`](lumen::Driver) trait, so the backend (OpenGL via
`lumen_shader_gl`, or a recording mock in tests) is chosen by the caller.

## Architecture

- **Driver**: The native graphics API seam (shader/program objects, uniforms)
- **Context**: Explicit handle to the thread's current graphics context
- **ShaderProgram**: Owns one linked program handle, released on drop
- **UniformValue**: Typed uniform payloads (bool, int, float, vec3, vec4, mat4)
- **Diagnostics**: Global logger slot used by the `engine_*` macros
*/

// Internal modules
mod error;
mod diagnostics;
mod context;
mod driver;
mod program;
pub mod log;

#[cfg(test)]
mod testing;

// Main lumen namespace module
pub mod lumen {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger registry
    pub use crate::diagnostics::Diagnostics;

    // Graphics context and configuration
    pub use crate::context::{Config, Context, MissingSourcePolicy, DEFAULT_INFO_LOG_CAPACITY};

    // Driver seam and handle types
    pub use crate::driver::{Driver, ProgramId, ShaderId, ShaderStage, UniformLocation};

    // Shader programs
    pub use crate::program::{ProgramDesc, ShaderProgram, ShaderSource, UniformValue};

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
    }
}

// Re-export math library at crate root
pub use glam;
