/// Program module - shader program construction and uniform uploads

pub mod program_desc;
pub mod shader_program;
pub mod uniform;

pub use program_desc::*;
pub use shader_program::*;
pub use uniform::*;
