/// Wavefront OBJ loader for the `v` / `f` subset
///
/// Vertex lines take up to three coordinates; missing ones default to zero.
/// Face lines take `vertex/texture/normal` index triples and keep only the
/// vertex index. Every other record type is skipped.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, trace};
use nom::{
    bytes::complete::take_till1,
    character::complete::{char, digit1, space0, space1},
    combinator::{map, map_res},
    multi::{many0, many_m_n},
    number::complete::float,
    sequence::{preceded, tuple},
    IResult,
};

use crate::error::MeshError;
use crate::geometry::{Face, Mesh};
use crate::vector::Vector3;

/// One classified line of an OBJ file
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Vertex(Vector3),
    /// Vertex indices as written in the file (1-based)
    Face(Vec<u32>),
    Ignored,
}

/// Classify and parse a single line
pub fn parse_record(line: &str) -> Record {
    let Ok((rest, tag)) = record_tag(line) else {
        return Record::Ignored;
    };

    match tag {
        "v" => {
            let coords = vertex_coords(rest).map(|(_, c)| c).unwrap_or_default();
            let mut vertex = Vector3::default();
            for (i, value) in coords.into_iter().enumerate() {
                vertex[i] = value;
            }
            Record::Vertex(vertex)
        }
        "f" => Record::Face(face_indices(rest).map(|(_, f)| f).unwrap_or_default()),
        _ => Record::Ignored,
    }
}

/// Parse an OBJ stream into a mesh
pub fn parse_obj<R: BufRead>(reader: R) -> Result<Mesh, MeshError> {
    let mut mesh = Mesh::new();

    for line in reader.lines() {
        let line = line?;
        match parse_record(&line) {
            Record::Vertex(vertex) => {
                trace!("vertex {}", vertex);
                mesh.add_vertex(vertex);
            }
            Record::Face(indices) => {
                let face = indices
                    .into_iter()
                    .map(|index| {
                        index
                            .checked_sub(1)
                            .ok_or_else(|| MeshError::FaceIndexOutOfRange {
                                face: mesh.faces.len(),
                                index,
                                vertex_count: mesh.vertices.len(),
                            })
                    })
                    .collect::<Result<Face, _>>()?;
                mesh.add_face(face);
            }
            Record::Ignored => {}
        }
    }

    if let Some((face, index)) = mesh.find_invalid_index() {
        return Err(MeshError::FaceIndexOutOfRange {
            face,
            index: index + 1,
            vertex_count: mesh.vertices.len(),
        });
    }

    debug!(
        "parsed mesh with {} vertices and {} faces",
        mesh.vertices.len(),
        mesh.faces.len()
    );
    Ok(mesh)
}

pub fn parse_obj_str(input: &str) -> Result<Mesh, MeshError> {
    parse_obj(input.as_bytes())
}

/// Open and parse an OBJ file
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Mesh, MeshError> {
    let file = File::open(path.as_ref())?;
    debug!("loading mesh from {}", path.as_ref().display());
    parse_obj(BufReader::new(file))
}

fn record_tag(input: &str) -> IResult<&str, &str> {
    preceded(space0, take_till1(|c: char| c.is_whitespace()))(input)
}

fn vertex_coords(input: &str) -> IResult<&str, Vec<f32>> {
    many_m_n(0, 3, preceded(space1, float))(input)
}

fn index(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |s: &str| s.parse::<u32>())(input)
}

fn index_triple(input: &str) -> IResult<&str, (u32, u32, u32)> {
    tuple((index, preceded(char('/'), index), preceded(char('/'), index)))(input)
}

/// Vertex indices of consecutive triples; stops at the first token of another shape
fn face_indices(input: &str) -> IResult<&str, Vec<u32>> {
    many0(map(preceded(space1, index_triple), |(vertex, _, _)| vertex))(input)
}
