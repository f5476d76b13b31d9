/// GlDriver - OpenGL implementation of the Driver trait

use glow::HasContext;
use lumen_shader::engine_err;
use lumen_shader::lumen::{
    Config, Context, Driver, ProgramId, Result, ShaderId, ShaderStage, UniformLocation,
};

/// OpenGL driver
///
/// Owns the `glow::Context`. All calls assume that context is current on the
/// calling thread, which is what `lumen::Context` guarantees by staying on it.
pub struct GlDriver {
    gl: glow::Context,
}

impl GlDriver {
    /// Wrap a loaded GL context
    pub fn new(gl: glow::Context) -> Self {
        Self { gl }
    }

    /// Underlying bindings, for draw calls outside the shader seam
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// Give the bindings back
    pub fn into_inner(self) -> glow::Context {
        self.gl
    }
}

/// Build a `lumen::Context` driven by OpenGL
///
/// # Example
///
/// ```no_run
/// use lumen_shader::lumen::Config;
/// # fn load(_: &str) -> *const std::ffi::c_void { std::ptr::null() }
///
/// let gl = unsafe { glow::Context::from_loader_function(|name| load(name)) };
/// let context = lumen_shader_gl::create_context(gl, Config::default());
/// ```
pub fn create_context(gl: glow::Context, config: Config) -> Context {
    Context::new(GlDriver::new(gl), config)
}

// ============================================================================
// Handle conversions
// ============================================================================

pub(crate) fn gl_stage(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

pub(crate) fn native_shader(shader: ShaderId) -> glow::NativeShader {
    glow::NativeShader(shader.0)
}

pub(crate) fn native_program(program: ProgramId) -> glow::NativeProgram {
    glow::NativeProgram(program.0)
}

pub(crate) fn native_location(location: Option<UniformLocation>) -> Option<glow::NativeUniformLocation> {
    location.map(|l| glow::NativeUniformLocation(l.0))
}

// ============================================================================
// Driver implementation
// ============================================================================

impl Driver for GlDriver {
    fn create_shader(&mut self, stage: ShaderStage) -> Result<ShaderId> {
        let shader = unsafe { self.gl.create_shader(gl_stage(stage)) }
            .map_err(|e| engine_err!("lumen::gl", "glCreateShader({:?}) failed: {}", stage, e))?;
        Ok(ShaderId(shader.0))
    }

    fn shader_source(&mut self, shader: ShaderId, source: &str) {
        unsafe { self.gl.shader_source(native_shader(shader), source) }
    }

    fn compile_shader(&mut self, shader: ShaderId) {
        unsafe { self.gl.compile_shader(native_shader(shader)) }
    }

    fn shader_compile_status(&mut self, shader: ShaderId) -> bool {
        unsafe { self.gl.get_shader_compile_status(native_shader(shader)) }
    }

    fn shader_info_log(&mut self, shader: ShaderId) -> String {
        unsafe { self.gl.get_shader_info_log(native_shader(shader)) }
    }

    fn delete_shader(&mut self, shader: ShaderId) {
        unsafe { self.gl.delete_shader(native_shader(shader)) }
    }

    fn create_program(&mut self) -> Result<ProgramId> {
        let program = unsafe { self.gl.create_program() }
            .map_err(|e| engine_err!("lumen::gl", "glCreateProgram failed: {}", e))?;
        Ok(ProgramId(program.0))
    }

    fn attach_shader(&mut self, program: ProgramId, shader: ShaderId) {
        unsafe { self.gl.attach_shader(native_program(program), native_shader(shader)) }
    }

    fn link_program(&mut self, program: ProgramId) {
        unsafe { self.gl.link_program(native_program(program)) }
    }

    fn program_link_status(&mut self, program: ProgramId) -> bool {
        unsafe { self.gl.get_program_link_status(native_program(program)) }
    }

    fn program_info_log(&mut self, program: ProgramId) -> String {
        unsafe { self.gl.get_program_info_log(native_program(program)) }
    }

    fn delete_program(&mut self, program: ProgramId) {
        unsafe { self.gl.delete_program(native_program(program)) }
    }

    fn use_program(&mut self, program: Option<ProgramId>) {
        unsafe { self.gl.use_program(program.map(native_program)) }
    }

    fn uniform_location(&mut self, program: ProgramId, name: &str) -> Option<UniformLocation> {
        unsafe { self.gl.get_uniform_location(native_program(program), name) }
            .map(|location| UniformLocation(location.0))
    }

    fn uniform_1_i32(&mut self, location: Option<UniformLocation>, value: i32) {
        let location = native_location(location);
        unsafe { self.gl.uniform_1_i32(location.as_ref(), value) }
    }

    fn uniform_1_f32(&mut self, location: Option<UniformLocation>, value: f32) {
        let location = native_location(location);
        unsafe { self.gl.uniform_1_f32(location.as_ref(), value) }
    }

    fn uniform_3_f32(&mut self, location: Option<UniformLocation>, x: f32, y: f32, z: f32) {
        let location = native_location(location);
        unsafe { self.gl.uniform_3_f32(location.as_ref(), x, y, z) }
    }

    fn uniform_4_f32(&mut self, location: Option<UniformLocation>, x: f32, y: f32, z: f32, w: f32) {
        let location = native_location(location);
        unsafe { self.gl.uniform_4_f32(location.as_ref(), x, y, z, w) }
    }

    fn uniform_matrix_4_f32(
        &mut self,
        location: Option<UniformLocation>,
        transpose: bool,
        value: &[f32; 16],
    ) {
        let location = native_location(location);
        unsafe { self.gl.uniform_matrix_4_f32_slice(location.as_ref(), transpose, value) }
    }
}

#[cfg(test)]
#[path = "gl_driver_tests.rs"]
mod tests;
