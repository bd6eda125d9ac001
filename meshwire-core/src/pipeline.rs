/// Render pipeline: load a mesh, rasterize it, hand the pixels to an encoder
use std::path::Path;

use image::Rgba;
use log::{debug, info};

use crate::encode::ImageEncoder;
use crate::error::RenderError;
use crate::geometry::Mesh;
use crate::obj;
use crate::projection::{Projector, DEFAULT_SCALE};
use crate::raster::{FrameBuffer, WHITE};
use crate::vector::Vector3;

/// What to draw for each mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// One pixel per vertex
    Points,
    /// Triangle outlines
    #[default]
    Wireframe,
}

/// How faces with more than three corners are outlined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolygonMode {
    /// Only the triangle formed by the first three corners
    #[default]
    FirstTriangle,
    /// Every triangle of the fan around the first corner
    Fan,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub scale: f32,
    pub mode: RenderMode,
    pub polygon_mode: PolygonMode,
    pub color: Rgba<u8>,
}

impl RenderOptions {
    pub fn projector(&self) -> Projector {
        Projector::with_scale(self.width, self.height, self.scale)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            scale: DEFAULT_SCALE,
            mode: RenderMode::default(),
            polygon_mode: PolygonMode::default(),
            color: WHITE,
        }
    }
}

/// A projected edge in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: (i32, i32),
    pub end: (i32, i32),
}

impl Segment {
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// Counts reported after a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    pub vertices: usize,
    pub faces: usize,
    /// Pixels plotted in point mode, segments drawn in wireframe mode
    pub primitives: usize,
}

/// Triangle edges of every face, in face order
///
/// Each triangle yields edges 0-1, 1-2, 2-0. Faces with fewer than three
/// corners are skipped.
pub fn wireframe_segments(
    mesh: &Mesh,
    projector: &Projector,
    polygon_mode: PolygonMode,
) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(mesh.faces.len() * 3);

    for face in &mesh.faces {
        let triangles: Vec<[Vector3; 3]> = match polygon_mode {
            PolygonMode::FirstTriangle => mesh.first_triangle(face).into_iter().collect(),
            PolygonMode::Fan => match mesh.face_vertices(face) {
                Some(corners) if corners.len() >= 3 => corners
                    .windows(2)
                    .skip(1)
                    .map(|pair| [corners[0], pair[0], pair[1]])
                    .collect(),
                _ => Vec::new(),
            },
        };

        for triangle in triangles {
            let [a, b, c] = triangle.map(|v| projector.project(&v));
            segments.push(Segment { start: a, end: b });
            segments.push(Segment { start: b, end: c });
            segments.push(Segment { start: c, end: a });
        }
    }

    segments
}

/// Plot every vertex as a single pixel. Returns the number of pixels on the canvas.
pub fn draw_points(
    framebuffer: &mut FrameBuffer,
    mesh: &Mesh,
    projector: &Projector,
    color: Rgba<u8>,
) -> usize {
    let mut plotted = 0;
    for vertex in &mesh.vertices {
        let (x, y) = projector.project(vertex);
        if framebuffer.plot(x, y, color) {
            plotted += 1;
        }
    }
    plotted
}

/// Outline every face. Returns the number of segments drawn.
pub fn draw_wireframe(
    framebuffer: &mut FrameBuffer,
    mesh: &Mesh,
    projector: &Projector,
    polygon_mode: PolygonMode,
    color: Rgba<u8>,
) -> usize {
    let segments = wireframe_segments(mesh, projector, polygon_mode);
    for segment in &segments {
        let (x0, y0) = segment.start;
        let (x1, y1) = segment.end;
        framebuffer.draw_line(x0, y0, x1, y1, color);
    }
    segments.len()
}

/// Rasterize a mesh into a fresh frame buffer
pub fn render(mesh: &Mesh, options: &RenderOptions) -> (FrameBuffer, usize) {
    let mut framebuffer = FrameBuffer::new(options.width, options.height);
    let projector = options.projector();

    let primitives = match options.mode {
        RenderMode::Points => draw_points(&mut framebuffer, mesh, &projector, options.color),
        RenderMode::Wireframe => draw_wireframe(
            &mut framebuffer,
            mesh,
            &projector,
            options.polygon_mode,
            options.color,
        ),
    };
    debug!("{:?} render produced {} primitives", options.mode, primitives);

    (framebuffer, primitives)
}

/// Load `mesh_path`, render it and write the result to `output_path`
pub fn run<E: ImageEncoder>(
    mesh_path: &Path,
    output_path: &Path,
    options: &RenderOptions,
    encoder: &E,
) -> Result<RenderSummary, RenderError> {
    let mesh = obj::load_obj(mesh_path)?;
    info!(
        "loaded {} ({} vertices, {} faces)",
        mesh_path.display(),
        mesh.vertices.len(),
        mesh.faces.len()
    );

    let (framebuffer, primitives) = render(&mesh, options);
    encoder.encode(
        output_path,
        framebuffer.pixels(),
        framebuffer.width(),
        framebuffer.height(),
    )?;
    info!("wrote {}", output_path.display());

    Ok(RenderSummary {
        vertices: mesh.vertices.len(),
        faces: mesh.faces.len(),
        primitives,
    })
}
