/// Error types shared across the core library
use std::io;

use thiserror::Error;

/// Errors raised by component access on a [`Vector3`](crate::Vector3)
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    #[error("invalid component index {0}, expected 0, 1 or 2")]
    InvalidIndex(usize),
}

/// Errors raised while loading a mesh
#[derive(Error, Debug)]
pub enum MeshError {
    #[error("failed to read mesh: {0}")]
    Io(#[from] io::Error),
    /// `index` is the 1-based value as written in the file.
    #[error("face {face} references vertex {index} but the mesh has {vertex_count} vertices")]
    FaceIndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },
}

/// Failure reported by an image encoder
///
/// The code is always nonzero and is used as the process exit status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct EncodeError {
    code: i32,
    message: String,
}

impl EncodeError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        debug_assert_ne!(code, 0, "encoder error codes must be nonzero");
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors raised by a full render run
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Mesh(#[from] MeshError),
    #[error("error encoding image: {0}")]
    Encode(#[from] EncodeError),
}

impl RenderError {
    /// Exit status for the process: the encoder's own code, or 1 for mesh failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            RenderError::Mesh(_) => 1,
            RenderError::Encode(e) => e.code(),
        }
    }
}
