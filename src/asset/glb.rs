//! Minimal reader for binary glTF (`.glb`) containers.
//!
//! Only the JSON chunk is decoded. Each mesh is reduced to its axis-aligned
//! bounds, taken from the `min`/`max` of its POSITION accessors and carried
//! through the node hierarchy, which is all the showcase needs to lay out and
//! paint a model.

use std::collections::{HashMap, HashSet};

use egui::Color32;
use glam::{Mat4, Quat, Vec3};
use serde::Deserialize;

use crate::error::AssetError;
use crate::scene::BoxPrimitive;

const GLB_MAGIC: u32 = 0x4654_6C67; // "glTF"
const GLB_VERSION: u32 = 2;
const CHUNK_JSON: u32 = 0x4E4F_534A; // "JSON"
const CHUNK_BIN: u32 = 0x004E_4942; // "BIN\0"
const HEADER_LEN: usize = 12;
const CHUNK_HEADER_LEN: usize = 8;
const MAX_NODE_DEPTH: usize = 64;

/// Meshes whose largest local dimension exceeds this are treated as walls.
pub const WALL_LIKE_THRESHOLD: f32 = 0.3;

#[derive(Debug, Deserialize)]
struct Gltf {
    scene: Option<usize>,
    #[serde(default)]
    scenes: Vec<GltfScene>,
    #[serde(default)]
    nodes: Vec<GltfNode>,
    #[serde(default)]
    meshes: Vec<GltfMesh>,
    #[serde(default)]
    accessors: Vec<GltfAccessor>,
}

#[derive(Debug, Deserialize)]
struct GltfScene {
    #[serde(default)]
    nodes: Vec<usize>,
}

#[derive(Debug, Deserialize)]
struct GltfNode {
    name: Option<String>,
    mesh: Option<usize>,
    #[serde(default)]
    children: Vec<usize>,
    matrix: Option<[f32; 16]>,
    translation: Option<[f32; 3]>,
    rotation: Option<[f32; 4]>,
    scale: Option<[f32; 3]>,
}

impl GltfNode {
    fn local_transform(&self) -> Mat4 {
        if let Some(matrix) = self.matrix {
            return Mat4::from_cols_array(&matrix);
        }
        let translation = self.translation.map(Vec3::from_array).unwrap_or(Vec3::ZERO);
        let rotation = self.rotation.map(Quat::from_array).unwrap_or(Quat::IDENTITY);
        let scale = self.scale.map(Vec3::from_array).unwrap_or(Vec3::ONE);
        Mat4::from_scale_rotation_translation(scale, rotation, translation)
    }
}

#[derive(Debug, Deserialize)]
struct GltfMesh {
    name: Option<String>,
    #[serde(default)]
    primitives: Vec<GltfPrimitive>,
}

#[derive(Debug, Deserialize)]
struct GltfPrimitive {
    #[serde(default)]
    attributes: HashMap<String, usize>,
}

#[derive(Debug, Deserialize)]
struct GltfAccessor {
    min: Option<Vec<f32>>,
    max: Option<Vec<f32>>,
}

/// Bounds of one mesh instance in model space
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBounds {
    pub name: String,
    pub min: Vec3,
    pub max: Vec3,
    /// Extent of the mesh geometry before node transforms
    pub local_size: Vec3,
}

impl MeshBounds {
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn is_wall_like(&self) -> bool {
        self.local_size.max_element() > WALL_LIKE_THRESHOLD
    }
}

/// Centre-and-scale transform that fits a model into a cube of a given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTransform {
    pub center: Vec3,
    pub scale: f32,
}

impl FitTransform {
    pub fn apply(&self, point: Vec3) -> Vec3 {
        (point - self.center) * self.scale
    }
}

/// The decoded parts of a model the showcase cares about.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelScene {
    meshes: Vec<MeshBounds>,
}

impl ModelScene {
    pub fn new(meshes: Vec<MeshBounds>) -> Self {
        Self { meshes }
    }

    pub fn meshes(&self) -> &[MeshBounds] {
        &self.meshes
    }

    /// Union of every mesh's bounds; `None` for a model without meshes.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        self.meshes.iter().fold(None, |acc, mesh| match acc {
            None => Some((mesh.min, mesh.max)),
            Some((min, max)) => Some((min.min(mesh.min), max.max(mesh.max))),
        })
    }

    pub fn wall_mesh_count(&self) -> usize {
        self.meshes.iter().filter(|mesh| mesh.is_wall_like()).count()
    }

    /// Centre the model on the origin and scale its largest side to `fit_size`.
    pub fn fit_transform(&self, fit_size: f32) -> Result<FitTransform, AssetError> {
        let (min, max) = self.bounds().ok_or(AssetError::DegenerateBounds)?;
        let max_dim = (max - min).max_element();
        if !(max_dim > 0.0 && max_dim.is_finite()) {
            return Err(AssetError::DegenerateBounds);
        }
        Ok(FitTransform {
            center: (min + max) / 2.0,
            scale: fit_size / max_dim,
        })
    }

    /// One box per mesh, wall-like meshes in `wall_color`.
    pub fn to_box_primitives(&self, fit: FitTransform, wall_color: Color32, other_color: Color32) -> Vec<BoxPrimitive> {
        self.meshes
            .iter()
            .map(|mesh| BoxPrimitive {
                source: None,
                position: fit.apply(mesh.center()),
                size: mesh.size() * fit.scale,
                rotation_degrees: 0.0,
                color: if mesh.is_wall_like() { wall_color } else { other_color },
            })
            .collect()
    }
}

fn read_u32(bytes: &[u8], offset: usize) -> Result<u32, AssetError> {
    bytes
        .get(offset..offset + 4)
        .and_then(|slice| slice.try_into().ok())
        .map(u32::from_le_bytes)
        .ok_or_else(|| AssetError::InvalidGlb(format!("truncated at byte {offset}")))
}

/// Decode a `.glb` file into per-mesh bounds.
pub fn parse_glb(bytes: &[u8]) -> Result<ModelScene, AssetError> {
    if bytes.len() < HEADER_LEN {
        return Err(AssetError::InvalidGlb("file shorter than the GLB header".into()));
    }
    if read_u32(bytes, 0)? != GLB_MAGIC {
        return Err(AssetError::InvalidGlb("bad magic".into()));
    }
    let version = read_u32(bytes, 4)?;
    if version != GLB_VERSION {
        return Err(AssetError::InvalidGlb(format!("unsupported version {version}")));
    }
    let declared = read_u32(bytes, 8)? as usize;
    if declared > bytes.len() {
        return Err(AssetError::InvalidGlb(format!(
            "declared length {declared} exceeds file size {}",
            bytes.len()
        )));
    }

    let chunk_len = read_u32(bytes, HEADER_LEN)? as usize;
    let chunk_type = read_u32(bytes, HEADER_LEN + 4)?;
    if chunk_type != CHUNK_JSON {
        return Err(AssetError::InvalidGlb("first chunk is not JSON".into()));
    }
    let start = HEADER_LEN + CHUNK_HEADER_LEN;
    let json = start
        .checked_add(chunk_len)
        .filter(|&end| end <= declared)
        .and_then(|end| bytes.get(start..end))
        .ok_or_else(|| AssetError::InvalidGlb("JSON chunk runs past the end of the file".into()))?;

    parse_gltf_json(json)
}

/// Decode the glTF JSON document itself.
pub fn parse_gltf_json(json: &[u8]) -> Result<ModelScene, AssetError> {
    let gltf: Gltf = serde_json::from_slice(json).map_err(|err| AssetError::InvalidJson(err.to_string()))?;

    let mut meshes = Vec::new();
    if gltf.nodes.is_empty() {
        for index in 0..gltf.meshes.len() {
            push_mesh(&gltf, index, None, Mat4::IDENTITY, &mut meshes)?;
        }
    } else {
        for root in root_nodes(&gltf) {
            visit_node(&gltf, root, Mat4::IDENTITY, 0, &mut meshes)?;
        }
    }

    log::debug!("Parsed glTF with {} mesh instance(s)", meshes.len());
    Ok(ModelScene::new(meshes))
}

fn root_nodes(gltf: &Gltf) -> Vec<usize> {
    if !gltf.scenes.is_empty() {
        let index = gltf.scene.unwrap_or(0);
        if let Some(scene) = gltf.scenes.get(index) {
            return scene.nodes.clone();
        }
    }
    let children: HashSet<usize> = gltf.nodes.iter().flat_map(|node| node.children.iter().copied()).collect();
    (0..gltf.nodes.len()).filter(|index| !children.contains(index)).collect()
}

fn visit_node(
    gltf: &Gltf,
    index: usize,
    parent: Mat4,
    depth: usize,
    meshes: &mut Vec<MeshBounds>,
) -> Result<(), AssetError> {
    if depth > MAX_NODE_DEPTH {
        return Err(AssetError::InvalidJson("node hierarchy too deep or cyclic".into()));
    }
    let node = gltf
        .nodes
        .get(index)
        .ok_or_else(|| AssetError::InvalidJson(format!("node {index} does not exist")))?;
    let world = parent * node.local_transform();

    if let Some(mesh) = node.mesh {
        push_mesh(gltf, mesh, node.name.as_deref(), world, meshes)?;
    }
    for &child in &node.children {
        visit_node(gltf, child, world, depth + 1, meshes)?;
    }
    Ok(())
}

fn push_mesh(
    gltf: &Gltf,
    index: usize,
    node_name: Option<&str>,
    transform: Mat4,
    meshes: &mut Vec<MeshBounds>,
) -> Result<(), AssetError> {
    let mesh = gltf
        .meshes
        .get(index)
        .ok_or_else(|| AssetError::InvalidJson(format!("mesh {index} does not exist")))?;

    let mut local: Option<(Vec3, Vec3)> = None;
    for primitive in &mesh.primitives {
        let Some(&accessor_index) = primitive.attributes.get("POSITION") else {
            continue;
        };
        let (min, max) = accessor_bounds(gltf, accessor_index)?;
        local = Some(match local {
            None => (min, max),
            Some((lo, hi)) => (lo.min(min), hi.max(max)),
        });
    }
    let Some((local_min, local_max)) = local else {
        log::warn!("Mesh {index} has no POSITION data, skipping");
        return Ok(());
    };

    let (min, max) = transform_bounds(transform, local_min, local_max);
    let name = node_name
        .map(str::to_owned)
        .or_else(|| mesh.name.clone())
        .unwrap_or_else(|| format!("mesh {index}"));
    meshes.push(MeshBounds {
        name,
        min,
        max,
        local_size: local_max - local_min,
    });
    Ok(())
}

fn accessor_bounds(gltf: &Gltf, index: usize) -> Result<(Vec3, Vec3), AssetError> {
    let accessor = gltf
        .accessors
        .get(index)
        .ok_or_else(|| AssetError::InvalidJson(format!("accessor {index} does not exist")))?;
    match (accessor.min.as_deref(), accessor.max.as_deref()) {
        (Some([min_x, min_y, min_z, ..]), Some([max_x, max_y, max_z, ..])) => Ok((
            Vec3::new(*min_x, *min_y, *min_z),
            Vec3::new(*max_x, *max_y, *max_z),
        )),
        _ => Err(AssetError::InvalidJson(format!("accessor {index} lacks min/max"))),
    }
}

fn transform_bounds(transform: Mat4, min: Vec3, max: Vec3) -> (Vec3, Vec3) {
    let mut lo = Vec3::splat(f32::INFINITY);
    let mut hi = Vec3::splat(f32::NEG_INFINITY);
    for i in 0..8 {
        let corner = Vec3::new(
            if i & 1 != 0 { max.x } else { min.x },
            if i & 2 != 0 { max.y } else { min.y },
            if i & 4 != 0 { max.z } else { min.z },
        );
        let point = transform.transform_point3(corner);
        lo = lo.min(point);
        hi = hi.max(point);
    }
    (lo, hi)
}

/// Wrap a glTF JSON document (and optional binary buffer) in a GLB container.
pub fn write_glb(json: &str, bin: Option<&[u8]>) -> Vec<u8> {
    let mut json = json.as_bytes().to_vec();
    while json.len() % 4 != 0 {
        json.push(b' ');
    }
    let mut bin = bin.map(<[u8]>::to_vec);
    if let Some(bin) = bin.as_mut() {
        while bin.len() % 4 != 0 {
            bin.push(0);
        }
    }

    let total = HEADER_LEN
        + CHUNK_HEADER_LEN
        + json.len()
        + bin.as_ref().map_or(0, |bin| CHUNK_HEADER_LEN + bin.len());

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&GLB_MAGIC.to_le_bytes());
    out.extend_from_slice(&GLB_VERSION.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.extend_from_slice(&(json.len() as u32).to_le_bytes());
    out.extend_from_slice(&CHUNK_JSON.to_le_bytes());
    out.extend_from_slice(&json);
    if let Some(bin) = bin {
        out.extend_from_slice(&(bin.len() as u32).to_le_bytes());
        out.extend_from_slice(&CHUNK_BIN.to_le_bytes());
        out.extend_from_slice(&bin);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ROOMS: &str = r#"{
        "asset": {"version": "2.0"},
        "scene": 0,
        "scenes": [{"nodes": [0]}],
        "nodes": [
            {"name": "house", "children": [1, 2], "translation": [10.0, 0.0, 0.0]},
            {"name": "wall", "mesh": 0},
            {"name": "lamp", "mesh": 1, "scale": [2.0, 2.0, 2.0]}
        ],
        "meshes": [
            {"name": "wall_mesh", "primitives": [{"attributes": {"POSITION": 0}}]},
            {"primitives": [{"attributes": {"POSITION": 1}}]}
        ],
        "accessors": [
            {"min": [-2.0, 0.0, -0.1], "max": [2.0, 1.0, 0.1]},
            {"min": [-0.05, 0.0, -0.05], "max": [0.05, 0.1, 0.05]}
        ]
    }"#;

    #[test]
    fn parses_bounds_through_the_node_hierarchy() {
        let scene = parse_glb(&write_glb(TWO_ROOMS, None)).unwrap();
        assert_eq!(scene.meshes().len(), 2);

        let wall = &scene.meshes()[0];
        assert_eq!(wall.name, "wall");
        assert_eq!(wall.min, Vec3::new(8.0, 0.0, -0.1));
        assert_eq!(wall.max, Vec3::new(12.0, 1.0, 0.1));
        assert!(wall.is_wall_like());

        let lamp = &scene.meshes()[1];
        assert!(lamp.max.abs_diff_eq(Vec3::new(10.1, 0.2, 0.1), 1e-5));
        assert!(!lamp.is_wall_like());
    }

    #[test]
    fn fit_transform_centres_and_scales_to_fit() {
        let scene = parse_glb(&write_glb(TWO_ROOMS, None)).unwrap();
        let fit = scene.fit_transform(2.5).unwrap();
        assert_eq!(fit.center, Vec3::new(10.0, 0.5, 0.0));
        assert!((fit.scale - 2.5 / 4.0).abs() < 1e-6);
        assert_eq!(fit.apply(Vec3::new(12.0, 0.5, 0.0)), Vec3::new(1.25, 0.0, 0.0));
    }

    #[test]
    fn wall_like_meshes_take_the_wall_color() {
        let scene = parse_glb(&write_glb(TWO_ROOMS, None)).unwrap();
        let fit = scene.fit_transform(2.5).unwrap();
        let boxes = scene.to_box_primitives(fit, Color32::RED, Color32::GRAY);
        assert_eq!(boxes[0].color, Color32::RED);
        assert_eq!(boxes[1].color, Color32::GRAY);
    }

    #[test]
    fn rejects_bad_magic() {
        let mut bytes = write_glb(TWO_ROOMS, None);
        bytes[0] = b'x';
        assert_eq!(parse_glb(&bytes), Err(AssetError::InvalidGlb("bad magic".into())));
    }

    #[test]
    fn rejects_other_versions() {
        let mut bytes = write_glb(TWO_ROOMS, None);
        bytes[4] = 1;
        assert!(matches!(parse_glb(&bytes), Err(AssetError::InvalidGlb(_))));
    }

    #[test]
    fn rejects_truncated_files() {
        let bytes = write_glb(TWO_ROOMS, None);
        assert!(matches!(parse_glb(&bytes[..40]), Err(AssetError::InvalidGlb(_))));
        assert!(matches!(parse_glb(&bytes[..6]), Err(AssetError::InvalidGlb(_))));
    }

    #[test]
    fn rejects_oversized_chunk_lengths() {
        let mut bytes = write_glb(TWO_ROOMS, None);
        bytes[HEADER_LEN..HEADER_LEN + 4].copy_from_slice(&u32::MAX.to_le_bytes());
        assert_eq!(
            parse_glb(&bytes),
            Err(AssetError::InvalidGlb("JSON chunk runs past the end of the file".into()))
        );
    }

    #[test]
    fn rejects_broken_json() {
        let bytes = write_glb("{\"nodes\": [", None);
        assert!(matches!(parse_glb(&bytes), Err(AssetError::InvalidJson(_))));
    }

    #[test]
    fn rejects_cyclic_hierarchies() {
        let json = r#"{"nodes": [{"children": [1]}, {"children": [0]}], "scenes": [{"nodes": [0]}]}"#;
        assert!(matches!(parse_glb(&write_glb(json, None)), Err(AssetError::InvalidJson(_))));
    }

    #[test]
    fn empty_or_flat_models_are_degenerate() {
        assert_eq!(ModelScene::default().fit_transform(2.5), Err(AssetError::DegenerateBounds));

        let point = ModelScene::new(vec![MeshBounds {
            name: "dot".into(),
            min: Vec3::ONE,
            max: Vec3::ONE,
            local_size: Vec3::ZERO,
        }]);
        assert_eq!(point.fit_transform(2.5), Err(AssetError::DegenerateBounds));
    }

    #[test]
    fn binary_chunk_is_ignored() {
        let bytes = write_glb(TWO_ROOMS, Some(&[1, 2, 3]));
        assert_eq!(parse_glb(&bytes).unwrap().meshes().len(), 2);
    }
}
