/// Driver trait - the graphics API operations a shader program needs

use std::fmt;
use std::num::NonZeroU32;

use crate::error::Result;

// ============================================================================
// Handle types
// ============================================================================

/// Shader stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment/Pixel shader
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("Vertex"),
            ShaderStage::Fragment => f.write_str("Fragment"),
        }
    }
}

/// Driver-assigned name of a compiled shader stage object
///
/// Zero is never a valid name, so it is not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderId(pub NonZeroU32);

/// Driver-assigned name of a program object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramId(pub NonZeroU32);

/// Driver-resolved upload slot of a uniform within one linked program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformLocation(pub u32);

impl ShaderId {
    /// Wrap a raw driver name; `None` for zero
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    /// Raw driver name
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl ProgramId {
    /// Wrap a raw driver name; `None` for zero
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    /// Raw driver name
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

// ============================================================================
// Driver trait
// ============================================================================

/// Native graphics driver operations
///
/// Each method is a direct, synchronous call into the driver bound to the
/// calling thread. Implemented by backends (e.g. `lumen_shader_gl::GlDriver`)
/// and by the test mock. Status and log queries take `&mut self` as well:
/// backends may track state across any call.
///
/// Upload methods take `Option<UniformLocation>`; `None` is the driver's
/// "not found" location and the upload is a no-op.
pub trait Driver {
    /// Create an empty shader object for `stage`
    fn create_shader(&mut self, stage: ShaderStage) -> Result<ShaderId>;

    /// Replace the source text of a shader object
    fn shader_source(&mut self, shader: ShaderId, source: &str);

    /// Compile the current source of a shader object
    fn compile_shader(&mut self, shader: ShaderId);

    /// Whether the last compilation succeeded
    fn shader_compile_status(&mut self, shader: ShaderId) -> bool;

    /// Full compiler log of a shader object
    fn shader_info_log(&mut self, shader: ShaderId) -> String;

    /// Release a shader object
    fn delete_shader(&mut self, shader: ShaderId);

    /// Create an empty program object
    fn create_program(&mut self) -> Result<ProgramId>;

    /// Attach a compiled stage to a program
    fn attach_shader(&mut self, program: ProgramId, shader: ShaderId);

    /// Link all attached stages
    fn link_program(&mut self, program: ProgramId);

    /// Whether the last link succeeded
    fn program_link_status(&mut self, program: ProgramId) -> bool;

    /// Full linker log of a program object
    fn program_info_log(&mut self, program: ProgramId) -> String;

    /// Release a program object
    fn delete_program(&mut self, program: ProgramId);

    /// Make `program` the current program, or unbind with `None`
    fn use_program(&mut self, program: Option<ProgramId>);

    /// Resolve a uniform name against a linked program
    fn uniform_location(&mut self, program: ProgramId, name: &str) -> Option<UniformLocation>;

    /// Upload one `int` (also used for `bool`)
    fn uniform_1_i32(&mut self, location: Option<UniformLocation>, value: i32);

    /// Upload one `float`
    fn uniform_1_f32(&mut self, location: Option<UniformLocation>, value: f32);

    /// Upload a `vec3`
    fn uniform_3_f32(&mut self, location: Option<UniformLocation>, x: f32, y: f32, z: f32);

    /// Upload a `vec4`
    fn uniform_4_f32(&mut self, location: Option<UniformLocation>, x: f32, y: f32, z: f32, w: f32);

    /// Upload a `mat4` given as 16 floats
    fn uniform_matrix_4_f32(
        &mut self,
        location: Option<UniformLocation>,
        transpose: bool,
        value: &[f32; 16],
    );
}
