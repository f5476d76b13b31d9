/// Mock Driver for unit tests (no GPU required)
///
/// Records every driver call in order so tests can assert the exact call
/// sequence a shader program issues. Compilation fails for empty or
/// whitespace-only sources, mimicking a real GLSL compiler.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::driver::{Driver, ProgramId, ShaderId, ShaderStage, UniformLocation};
use crate::engine_bail;
use crate::error::Result;

/// Info log returned for empty sources
pub const EMPTY_SOURCE_LOG: &str = "ERROR: 0:1: '' : syntax error: #version directive missing";

// ============================================================================
// Recorded calls
// ============================================================================

/// One recorded driver call
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    CreateShader { stage: ShaderStage, shader: ShaderId },
    ShaderSource { shader: ShaderId, source: String },
    CompileShader(ShaderId),
    ShaderCompileStatus(ShaderId),
    ShaderInfoLog(ShaderId),
    DeleteShader(ShaderId),
    CreateProgram(ProgramId),
    AttachShader { program: ProgramId, shader: ShaderId },
    LinkProgram(ProgramId),
    ProgramLinkStatus(ProgramId),
    ProgramInfoLog(ProgramId),
    DeleteProgram(ProgramId),
    UseProgram(Option<ProgramId>),
    UniformLocation { program: ProgramId, name: String },
    Uniform1i { location: Option<UniformLocation>, value: i32 },
    Uniform1f { location: Option<UniformLocation>, value: f32 },
    Uniform3f { location: Option<UniformLocation>, value: [f32; 3] },
    Uniform4f { location: Option<UniformLocation>, value: [f32; 4] },
    UniformMatrix4f { location: Option<UniformLocation>, transpose: bool, value: [f32; 16] },
}

/// Shared handle to the recorded calls
pub type CallLog = Rc<RefCell<Vec<MockCall>>>;

// ============================================================================
// Mock Driver
// ============================================================================

/// Mock driver that tracks calls without a GPU
#[derive(Debug)]
pub struct MockDriver {
    calls: CallLog,
    next_name: u32,
    sources: HashMap<ShaderId, (ShaderStage, String)>,
    compile_errors: HashMap<ShaderStage, String>,
    link_error: Option<String>,
    uniforms: HashMap<String, u32>,
    refuse_objects: bool,
}

impl MockDriver {
    /// Create a mock where every non-empty source compiles and links
    pub fn new() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
            next_name: 1,
            sources: HashMap::new(),
            compile_errors: HashMap::new(),
            link_error: None,
            uniforms: HashMap::new(),
            refuse_objects: false,
        }
    }

    /// Declare an active uniform; locations are assigned in declaration order
    pub fn with_uniform(mut self, name: &str) -> Self {
        let location = self.uniforms.len() as u32;
        self.uniforms.insert(name.to_string(), location);
        self
    }

    /// Make every compilation of `stage` fail with `log`
    pub fn with_compile_error(mut self, stage: ShaderStage, log: &str) -> Self {
        self.compile_errors.insert(stage, log.to_string());
        self
    }

    /// Make linking fail with `log`
    pub fn with_link_error(mut self, log: &str) -> Self {
        self.link_error = Some(log.to_string());
        self
    }

    /// Make shader and program creation fail
    pub fn refusing_objects(mut self) -> Self {
        self.refuse_objects = true;
        self
    }

    /// Shared handle to the call log; stays valid after the mock is boxed
    pub fn call_log(&self) -> CallLog {
        self.calls.clone()
    }

    fn record(&self, call: MockCall) {
        self.calls.borrow_mut().push(call);
    }

    fn allocate_name(&mut self) -> u32 {
        let name = self.next_name;
        self.next_name += 1;
        name
    }

    fn compile_failure(&self, shader: ShaderId) -> Option<String> {
        let (stage, source) = self.sources.get(&shader)?;
        if let Some(log) = self.compile_errors.get(stage) {
            return Some(log.clone());
        }
        if source.trim().is_empty() {
            return Some(EMPTY_SOURCE_LOG.to_string());
        }
        None
    }
}

impl Driver for MockDriver {
    fn create_shader(&mut self, stage: ShaderStage) -> Result<ShaderId> {
        if self.refuse_objects {
            engine_bail!("lumen::mock", "create_shader: refused {:?} shader", stage);
        }
        let shader = match ShaderId::new(self.allocate_name()) {
            Some(shader) => shader,
            None => engine_bail!("lumen::mock", "create_shader: name space exhausted"),
        };
        self.sources.insert(shader, (stage, String::new()));
        self.record(MockCall::CreateShader { stage, shader });
        Ok(shader)
    }

    fn shader_source(&mut self, shader: ShaderId, source: &str) {
        if let Some(entry) = self.sources.get_mut(&shader) {
            entry.1 = source.to_string();
        }
        self.record(MockCall::ShaderSource { shader, source: source.to_string() });
    }

    fn compile_shader(&mut self, shader: ShaderId) {
        self.record(MockCall::CompileShader(shader));
    }

    fn shader_compile_status(&mut self, shader: ShaderId) -> bool {
        self.record(MockCall::ShaderCompileStatus(shader));
        self.compile_failure(shader).is_none()
    }

    fn shader_info_log(&mut self, shader: ShaderId) -> String {
        self.record(MockCall::ShaderInfoLog(shader));
        self.compile_failure(shader).unwrap_or_default()
    }

    fn delete_shader(&mut self, shader: ShaderId) {
        self.sources.remove(&shader);
        self.record(MockCall::DeleteShader(shader));
    }

    fn create_program(&mut self) -> Result<ProgramId> {
        if self.refuse_objects {
            engine_bail!("lumen::mock", "create_program: refused");
        }
        let program = match ProgramId::new(self.allocate_name()) {
            Some(program) => program,
            None => engine_bail!("lumen::mock", "create_program: name space exhausted"),
        };
        self.record(MockCall::CreateProgram(program));
        Ok(program)
    }

    fn attach_shader(&mut self, program: ProgramId, shader: ShaderId) {
        self.record(MockCall::AttachShader { program, shader });
    }

    fn link_program(&mut self, program: ProgramId) {
        self.record(MockCall::LinkProgram(program));
    }

    fn program_link_status(&mut self, program: ProgramId) -> bool {
        self.record(MockCall::ProgramLinkStatus(program));
        self.link_error.is_none()
    }

    fn program_info_log(&mut self, program: ProgramId) -> String {
        self.record(MockCall::ProgramInfoLog(program));
        self.link_error.clone().unwrap_or_default()
    }

    fn delete_program(&mut self, program: ProgramId) {
        self.record(MockCall::DeleteProgram(program));
    }

    fn use_program(&mut self, program: Option<ProgramId>) {
        self.record(MockCall::UseProgram(program));
    }

    fn uniform_location(&mut self, program: ProgramId, name: &str) -> Option<UniformLocation> {
        self.record(MockCall::UniformLocation { program, name: name.to_string() });
        self.uniforms.get(name).copied().map(UniformLocation)
    }

    fn uniform_1_i32(&mut self, location: Option<UniformLocation>, value: i32) {
        self.record(MockCall::Uniform1i { location, value });
    }

    fn uniform_1_f32(&mut self, location: Option<UniformLocation>, value: f32) {
        self.record(MockCall::Uniform1f { location, value });
    }

    fn uniform_3_f32(&mut self, location: Option<UniformLocation>, x: f32, y: f32, z: f32) {
        self.record(MockCall::Uniform3f { location, value: [x, y, z] });
    }

    fn uniform_4_f32(&mut self, location: Option<UniformLocation>, x: f32, y: f32, z: f32, w: f32) {
        self.record(MockCall::Uniform4f { location, value: [x, y, z, w] });
    }

    fn uniform_matrix_4_f32(
        &mut self,
        location: Option<UniformLocation>,
        transpose: bool,
        value: &[f32; 16],
    ) {
        self.record(MockCall::UniformMatrix4f { location, transpose, value: *value });
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_driver_tests.rs"]
mod tests;
