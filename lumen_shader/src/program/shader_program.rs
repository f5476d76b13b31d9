/// ShaderProgram - one linked vertex + fragment program
///
/// Construction reads both sources, compiles each stage, links them and
/// releases the intermediate stage objects. A `ShaderProgram` only exists for
/// a successfully linked program; every failure is logged and returned.
/// The program handle is released exactly once, by `delete` or on drop.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use glam::{Mat4, Vec3, Vec4};

use crate::context::{Config, Context, MissingSourcePolicy};
use crate::driver::{Driver, ProgramId, ShaderId, ShaderStage, UniformLocation};
use crate::error::{Error, Result};
use crate::program::{ProgramDesc, ShaderSource, UniformValue};
use crate::{engine_debug, engine_error, engine_info, engine_trace, engine_warn};

const SOURCE: &str = "lumen::ShaderProgram";

/// A linked GPU program owned by this value
///
/// Not `Clone`: the handle has exactly one owner. Moving the program into
/// [`delete`](Self::delete) (or dropping it) releases the handle, so any use
/// afterwards is rejected by the compiler.
///
/// # Example
///
/// ```no_run
/// use lumen_shader::glam::{Mat4, Vec3};
/// use lumen_shader::lumen::{Context, ShaderProgram};
/// # fn context() -> Context { unimplemented!() }
///
/// let context = context();
/// let program = ShaderProgram::create(&context, "shaders/lit.vert", "shaders/lit.frag")?;
/// program.bind();
/// program.set_mat4("u_model", &Mat4::IDENTITY);
/// program.set_vec3("u_light_dir", Vec3::new(0.0, -1.0, 0.0));
/// program.delete();
/// # Ok::<(), lumen_shader::lumen::Error>(())
/// ```
#[derive(Debug)]
pub struct ShaderProgram {
    id: ProgramId,
    label: String,
    context: Context,
}

impl ShaderProgram {
    /// Build a program from a vertex and a fragment shader file
    ///
    /// # Errors
    ///
    /// - `SourceUnreadable` if a file cannot be read and the context uses
    ///   `MissingSourcePolicy::Fail`
    /// - `CompileFailed` for the first stage (vertex, then fragment) that did
    ///   not compile
    /// - `LinkFailed` if both stages compiled but linking did not succeed
    /// - `BackendError` if the driver refused to create an object
    pub fn create(
        context: &Context,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self> {
        Self::from_desc(context, ProgramDesc::from_files(vertex_path, fragment_path))
    }

    /// Build a program from in-memory sources
    pub fn from_sources(
        context: &Context,
        label: &str,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self> {
        Self::from_desc(context, ProgramDesc::from_sources(label, vertex_source, fragment_source))
    }

    /// Build a program from a descriptor
    ///
    /// Both sources are loaded before the first driver call. Under
    /// `MissingSourcePolicy::CompileEmpty`, one unreadable file empties both
    /// stages.
    pub fn from_desc(context: &Context, desc: ProgramDesc) -> Result<Self> {
        let config = context.config();
        engine_debug!(
            SOURCE,
            "Building program '{}' from {} and {}",
            desc.label,
            desc.vertex.describe(),
            desc.fragment.describe()
        );

        let (vertex_source, fragment_source) =
            match (load_source(config, &desc.vertex)?, load_source(config, &desc.fragment)?) {
                (Some(vertex), Some(fragment)) => (vertex, fragment),
                _ => {
                    engine_warn!(SOURCE, "Compiling both stages of '{}' from empty sources", desc.label);
                    (Cow::Borrowed(""), Cow::Borrowed(""))
                }
            };

        let id = context.with_driver(|driver| {
            build_program(driver, config, &desc.label, &vertex_source, &fragment_source)
        })?;

        engine_info!(
            SOURCE,
            "Program '{}' linked (id {}, context '{}')",
            desc.label,
            id.get(),
            config.label
        );

        Ok(Self {
            id,
            label: desc.label,
            context: context.clone(),
        })
    }

    /// Driver handle of this program
    pub fn id(&self) -> ProgramId {
        self.id
    }

    /// Name used in log lines
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Context this program belongs to
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Make this the current program of its context
    pub fn bind(&self) {
        self.context.bind_program(self.id);
    }

    /// Whether this program is the current program of its context
    pub fn is_bound(&self) -> bool {
        self.context.is_current(self.id)
    }

    /// Release the program handle
    ///
    /// Equivalent to dropping the program; provided to make release explicit
    /// at call sites.
    pub fn delete(self) {
        drop(self);
    }

    /// Resolve a uniform name against this program
    ///
    /// One driver query per call. `None` when the program has no active
    /// uniform with this name.
    pub fn uniform_location(&self, name: &str) -> Option<UniformLocation> {
        self.context
            .with_driver(|driver| driver.uniform_location(self.id, name))
    }

    /// Upload a uniform value by name
    ///
    /// Issues one location query and one typed upload. Uploads go to the
    /// context's current program, so bind this program first. Unknown names
    /// reach the driver as the "not found" location, which it ignores.
    pub fn set_uniform(&self, name: &str, value: impl Into<UniformValue>) {
        let value = value.into();
        let location = self.uniform_location(name);
        if location.is_none() {
            engine_trace!(
                SOURCE,
                "Uniform '{}' ({}) not found in program '{}'",
                name,
                value.glsl_type(),
                self.label
            );
        }
        self.context.with_driver(|driver| value.upload(driver, location));
    }

    pub fn set_bool(&self, name: &str, value: bool) {
        self.set_uniform(name, value);
    }

    pub fn set_int(&self, name: &str, value: i32) {
        self.set_uniform(name, value);
    }

    pub fn set_float(&self, name: &str, value: f32) {
        self.set_uniform(name, value);
    }

    pub fn set_vec3(&self, name: &str, value: Vec3) {
        self.set_uniform(name, value);
    }

    pub fn set_vec4(&self, name: &str, value: Vec4) {
        self.set_uniform(name, value);
    }

    pub fn set_mat4(&self, name: &str, value: &Mat4) {
        self.set_uniform(name, value);
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        self.context.release_program(self.id);
        engine_debug!(SOURCE, "Program '{}' (id {}) deleted", self.label, self.id.get());
    }
}

// ============================================================================
// Build steps
// ============================================================================

/// A stage object that went through compilation
struct CompiledStage {
    stage: ShaderStage,
    id: ShaderId,
    /// Bounded compiler log when compilation failed
    failure: Option<String>,
}

/// Source text of one stage; `None` when the file is unreadable and the
/// policy is `CompileEmpty`
fn load_source<'a>(config: &Config, source: &'a ShaderSource) -> Result<Option<Cow<'a, str>>> {
    let path = match source {
        ShaderSource::Inline(text) => return Ok(Some(Cow::Borrowed(text.as_str()))),
        ShaderSource::File(path) => path,
    };

    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(Cow::Owned(text))),
        Err(e) => {
            engine_error!(SOURCE, "Failed to read shader source '{}': {}", path.display(), e);
            match config.missing_source {
                MissingSourcePolicy::Fail => Err(Error::SourceUnreadable {
                    path: path.clone(),
                    message: e.to_string(),
                }),
                MissingSourcePolicy::CompileEmpty => Ok(None),
            }
        }
    }
}

fn build_program(
    driver: &mut dyn Driver,
    config: &Config,
    label: &str,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<ProgramId> {
    let vertex = compile_stage(driver, config, label, ShaderStage::Vertex, vertex_source)?;
    let fragment = match compile_stage(driver, config, label, ShaderStage::Fragment, fragment_source) {
        Ok(fragment) => fragment,
        Err(e) => {
            driver.delete_shader(vertex.id);
            return Err(e);
        }
    };

    let result = link_stages(driver, config, label, &vertex, &fragment);

    // Stage objects are not needed once linking is over, whatever the outcome
    driver.delete_shader(vertex.id);
    driver.delete_shader(fragment.id);

    result
}

fn compile_stage(
    driver: &mut dyn Driver,
    config: &Config,
    label: &str,
    stage: ShaderStage,
    source: &str,
) -> Result<CompiledStage> {
    let id = driver.create_shader(stage)?;
    driver.shader_source(id, source);
    driver.compile_shader(id);

    let failure = if driver.shader_compile_status(id) {
        None
    } else {
        let log = bounded_info_log(driver.shader_info_log(id), config.info_log_capacity);
        engine_error!(SOURCE, "{} shader of '{}' failed to compile: {}", stage, label, log);
        Some(log)
    };

    Ok(CompiledStage { stage, id, failure })
}

fn link_stages(
    driver: &mut dyn Driver,
    config: &Config,
    label: &str,
    vertex: &CompiledStage,
    fragment: &CompiledStage,
) -> Result<ProgramId> {
    for stage in [vertex, fragment] {
        if let Some(log) = &stage.failure {
            return Err(Error::CompileFailed { stage: stage.stage, log: log.clone() });
        }
    }

    let program = driver.create_program()?;
    driver.attach_shader(program, vertex.id);
    driver.attach_shader(program, fragment.id);
    driver.link_program(program);

    if !driver.program_link_status(program) {
        let log = bounded_info_log(driver.program_info_log(program), config.info_log_capacity);
        engine_error!(SOURCE, "Program '{}' failed to link: {}", label, log);
        driver.delete_program(program);
        return Err(Error::LinkFailed { log });
    }

    Ok(program)
}

/// Truncate a driver log to fit a `capacity`-byte buffer that also holds the
/// NUL terminator, on a char boundary, and drop trailing whitespace
pub(crate) fn bounded_info_log(mut log: String, capacity: usize) -> String {
    let max_len = capacity.saturating_sub(1);
    if log.len() > max_len {
        let mut end = max_len;
        while !log.is_char_boundary(end) {
            end -= 1;
        }
        log.truncate(end);
    }
    let trimmed = log.trim_end().len();
    log.truncate(trimmed);
    log
}

#[cfg(test)]
#[path = "shader_program_tests.rs"]
mod tests;
