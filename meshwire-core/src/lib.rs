/// Meshwire Core Library - mesh loading and wireframe rasterization
///
/// This library loads OBJ meshes, projects their vertices onto a pixel grid
/// and draws points or triangle outlines into an RGBA frame buffer that is
/// handed to an image encoder.

pub mod encode;
pub mod error;
pub mod geometry;
pub mod obj;
pub mod pipeline;
pub mod projection;
pub mod raster;
pub mod vector;

// Re-export commonly used types
pub use encode::{ImageEncoder, PngEncoder};
pub use error::{EncodeError, MeshError, RenderError, VectorError};
pub use geometry::{Face, Mesh};
pub use pipeline::{PolygonMode, RenderMode, RenderOptions, RenderSummary, Segment};
pub use projection::{Projector, DEFAULT_SCALE};
pub use raster::FrameBuffer;
pub use vector::Vector3;
