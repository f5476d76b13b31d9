/// ProgramDesc - what a shader program is built from

use std::path::{Path, PathBuf};

/// Where the text of one shader stage comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderSource {
    /// Read the whole file as text when the program is built
    File(PathBuf),
    /// Source text given directly
    Inline(String),
}

impl ShaderSource {
    /// Short description for log lines
    pub fn describe(&self) -> String {
        match self {
            ShaderSource::File(path) => path.display().to_string(),
            ShaderSource::Inline(text) => format!("<inline, {} bytes>", text.len()),
        }
    }
}

/// Descriptor for creating a shader program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramDesc {
    /// Name used in log lines
    pub label: String,
    /// Vertex stage source
    pub vertex: ShaderSource,
    /// Fragment stage source
    pub fragment: ShaderSource,
}

impl ProgramDesc {
    /// Vertex and fragment sources read from files; the label joins both paths
    pub fn from_files(vertex_path: impl AsRef<Path>, fragment_path: impl AsRef<Path>) -> Self {
        let vertex_path = vertex_path.as_ref();
        let fragment_path = fragment_path.as_ref();
        Self {
            label: format!("{} + {}", vertex_path.display(), fragment_path.display()),
            vertex: ShaderSource::File(vertex_path.to_path_buf()),
            fragment: ShaderSource::File(fragment_path.to_path_buf()),
        }
    }

    /// Vertex and fragment sources given as text
    pub fn from_sources(
        label: impl Into<String>,
        vertex_source: impl Into<String>,
        fragment_source: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            vertex: ShaderSource::Inline(vertex_source.into()),
            fragment: ShaderSource::Inline(fragment_source.into()),
        }
    }
}
