/// Graphics context handle
///
/// The native driver keeps a per-thread "current program" slot. `Context`
/// makes that state explicit: it owns the driver, remembers which program is
/// bound, and is passed to every program operation. It is an `Rc` handle, so
/// it (and every program holding it) stays on the thread that created it.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::driver::{Driver, ProgramId};

/// Default size of the compiler/linker log buffer, in bytes, terminator included
pub const DEFAULT_INFO_LOG_CAPACITY: usize = 512;

/// What to do when a shader source file cannot be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingSourcePolicy {
    /// Return `Error::SourceUnreadable` before touching the driver
    #[default]
    Fail,
    /// Log the I/O error and compile both stages from empty strings.
    /// The driver then rejects them and `Error::CompileFailed` is returned.
    CompileEmpty,
}

/// Context configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Log buffer size in bytes; logs kept in errors hold at most one byte less
    pub info_log_capacity: usize,
    /// Behaviour for unreadable shader files
    pub missing_source: MissingSourcePolicy,
    /// Name used in log lines
    pub label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            info_log_capacity: DEFAULT_INFO_LOG_CAPACITY,
            missing_source: MissingSourcePolicy::Fail,
            label: "Lumen Context".to_string(),
        }
    }
}

struct ContextState {
    driver: RefCell<Box<dyn Driver>>,
    current_program: Cell<Option<ProgramId>>,
    config: Config,
}

/// Handle to the calling thread's graphics context
///
/// Cloning is cheap and yields another handle to the same context.
///
/// # Example
///
/// ```no_run
/// use lumen_shader::lumen::{Config, Context, ShaderProgram};
/// # fn driver() -> Box<dyn lumen_shader::lumen::Driver> { unimplemented!() }
///
/// let context = Context::from_boxed(driver(), Config::default());
/// let program = ShaderProgram::create(&context, "shaders/basic.vert", "shaders/basic.frag")?;
/// program.bind();
/// assert_eq!(context.current_program(), Some(program.id()));
/// # Ok::<(), lumen_shader::lumen::Error>(())
/// ```
#[derive(Clone)]
pub struct Context {
    state: Rc<ContextState>,
}

impl Context {
    /// Wrap a driver bound to the calling thread
    pub fn new<D: Driver + 'static>(driver: D, config: Config) -> Self {
        Self::from_boxed(Box::new(driver), config)
    }

    /// Wrap an already boxed driver
    pub fn from_boxed(driver: Box<dyn Driver>, config: Config) -> Self {
        crate::engine_debug!(
            "lumen::Context",
            "Context '{}' created (info log capacity {} bytes, missing sources: {:?})",
            config.label,
            config.info_log_capacity,
            config.missing_source
        );
        Self {
            state: Rc::new(ContextState {
                driver: RefCell::new(driver),
                current_program: Cell::new(None),
                config,
            }),
        }
    }

    /// Configuration this context was created with
    pub fn config(&self) -> &Config {
        &self.state.config
    }

    /// Program currently bound through this context
    pub fn current_program(&self) -> Option<ProgramId> {
        self.state.current_program.get()
    }

    /// Whether `program` is the bound program
    pub fn is_current(&self, program: ProgramId) -> bool {
        self.current_program() == Some(program)
    }

    /// Unbind whatever program is current
    pub fn unbind(&self) {
        self.with_driver(|driver| driver.use_program(None));
        self.state.current_program.set(None);
        crate::engine_trace!("lumen::Context", "Program unbound");
    }

    /// Whether two handles refer to the same context
    pub fn same_context(&self, other: &Context) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// Bind `program` and record it as current
    pub(crate) fn bind_program(&self, program: ProgramId) {
        self.with_driver(|driver| driver.use_program(Some(program)));
        self.state.current_program.set(Some(program));
        crate::engine_trace!("lumen::Context", "Program {} bound", program.get());
    }

    /// Delete `program`, clearing the current slot if it was bound
    pub(crate) fn release_program(&self, program: ProgramId) {
        self.with_driver(|driver| driver.delete_program(program));
        if self.is_current(program) {
            self.state.current_program.set(None);
        }
    }

    /// Run `f` with exclusive access to the driver
    ///
    /// Must not be re-entered from inside `f`.
    pub(crate) fn with_driver<R>(&self, f: impl FnOnce(&mut dyn Driver) -> R) -> R {
        let mut driver = self.state.driver.borrow_mut();
        f(&mut **driver)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("label", &self.state.config.label)
            .field("current_program", &self.current_program())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
