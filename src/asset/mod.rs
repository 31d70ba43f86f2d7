//! Loading and caching of the 3D models shown in the showcase.

mod cache;
mod glb;
mod loader;

pub use cache::{AssetCache, ModelResult, SharedModel};
pub use glb::{FitTransform, MeshBounds, ModelScene, WALL_LIKE_THRESHOLD, parse_glb, parse_gltf_json, write_glb};
#[cfg(not(target_arch = "wasm32"))]
pub use loader::FileAssetLoader;
pub use loader::{AssetLoader, MemoryAssetLoader};

/// A small two-room house as a GLB, used when no model file is shipped with
/// the build (the web target) and as a fixture.
pub fn sample_house_glb() -> Vec<u8> {
    // (name, min, max) of each mesh in metres
    const PARTS: [(&str, [f32; 3], [f32; 3]); 8] = [
        ("floor", [-4.0, -0.1, -3.0], [4.0, 0.0, 3.0]),
        ("wall_north", [-4.0, 0.0, -3.0], [4.0, 2.6, -2.8]),
        ("wall_south", [-4.0, 0.0, 2.8], [4.0, 2.6, 3.0]),
        ("wall_west", [-4.0, 0.0, -2.8], [-3.8, 2.6, 2.8]),
        ("wall_east", [3.8, 0.0, -2.8], [4.0, 2.6, 2.8]),
        ("wall_partition", [-0.1, 0.0, -2.8], [0.1, 2.6, 0.6]),
        ("table", [1.5, 0.0, -1.0], [1.7, 0.25, -0.8]),
        ("lamp", [-2.0, 0.0, 1.0], [-1.85, 0.28, 1.15]),
    ];

    let nodes: Vec<_> = PARTS
        .iter()
        .enumerate()
        .map(|(index, (name, ..))| serde_json::json!({ "name": name, "mesh": index }))
        .collect();
    let meshes: Vec<_> = (0..PARTS.len())
        .map(|index| serde_json::json!({ "primitives": [{ "attributes": { "POSITION": index } }] }))
        .collect();
    let accessors: Vec<_> = PARTS
        .iter()
        .map(|(_, min, max)| serde_json::json!({ "type": "VEC3", "componentType": 5126, "count": 8, "min": min, "max": max }))
        .collect();

    let document = serde_json::json!({
        "asset": { "version": "2.0", "generator": "floorplan_builder" },
        "scene": 0,
        "scenes": [{ "nodes": (0..PARTS.len()).collect::<Vec<_>>() }],
        "nodes": nodes,
        "meshes": meshes,
        "accessors": accessors,
    });
    write_glb(&document.to_string(), None)
}
