//! OBJ/MTL geometry conversion for the avatar mesh.
//!
//! Parsing is left to `tobj`; this module only reshapes its flat buffers
//! into engine meshes and materials.

// Standard library and external crates
use std::cell::Cell;
use std::io::{Cursor, Read};

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use constants::manifest::{MTL_FILE, OBJ_FILE};

// Crate engine modules
use crate::engine::assets::avatar_bundle::AvatarBundle;
use crate::error::AvatarError;

#[derive(Debug, Clone, PartialEq)]
pub struct AvatarMaterial {
    pub name: String,
    pub diffuse: [f32; 3],
    pub opacity: f32,
}

impl AvatarMaterial {
    fn from_mtl(material: &tobj::Material) -> Self {
        Self {
            name: material.name.clone(),
            diffuse: material.diffuse.unwrap_or([1.0, 1.0, 1.0]),
            opacity: material.dissolve.unwrap_or(1.0),
        }
    }

    /// Engine material. Always double-sided so back faces of the avatar stay visible.
    pub fn to_standard_material(&self) -> StandardMaterial {
        let [r, g, b] = self.diffuse;
        StandardMaterial {
            base_color: Color::srgba(r, g, b, self.opacity),
            alpha_mode: if self.opacity < 1.0 {
                AlphaMode::Blend
            } else {
                AlphaMode::Opaque
            },
            cull_mode: None,
            double_sided: true,
            ..default()
        }
    }
}

impl Default for AvatarMaterial {
    fn default() -> Self {
        Self {
            name: String::from("default"),
            diffuse: [1.0, 1.0, 1.0],
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AvatarMesh {
    pub name: String,
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
    /// Index into `AvatarModel::materials`.
    pub material: Option<usize>,
}

impl AvatarMesh {
    fn from_obj(model: &tobj::Model) -> Self {
        let mesh = &model.mesh;
        Self {
            name: model.name.clone(),
            positions: mesh
                .positions
                .chunks_exact(3)
                .map(|p| [p[0], p[1], p[2]])
                .collect(),
            normals: mesh
                .normals
                .chunks_exact(3)
                .map(|n| [n[0], n[1], n[2]])
                .collect(),
            // OBJ texture space has its origin bottom-left
            uvs: mesh
                .texcoords
                .chunks_exact(2)
                .map(|t| [t[0], 1.0 - t[1]])
                .collect(),
            indices: mesh.indices.clone(),
            material: mesh.material_id,
        }
    }

    pub fn to_mesh(&self) -> Mesh {
        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        )
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, self.positions.clone())
        .with_inserted_indices(Indices::U32(self.indices.clone()));

        if self.uvs.len() == self.positions.len() {
            mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, self.uvs.clone());
        }

        if self.normals.len() == self.positions.len() {
            mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, self.normals.clone());
        } else {
            mesh.compute_normals();
        }

        mesh
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvatarModel {
    pub meshes: Vec<AvatarMesh>,
    pub materials: Vec<AvatarMaterial>,
}

/// Parse `scene.mtl` and `scene.obj` from the bundle. The bundled material
/// library is bound exactly once, whatever `mtllib` lines the OBJ carries.
pub fn parse_avatar_model(bundle: &AvatarBundle) -> Result<AvatarModel, AvatarError> {
    let mtl_text = bundle.text(MTL_FILE)?;
    let obj_text = bundle.text(OBJ_FILE)?;

    let (mtl_materials, mtl_names) = tobj::load_mtl_buf(&mut Cursor::new(mtl_text.as_bytes()))
        .map_err(|source| AvatarError::Parse {
            file: MTL_FILE.to_string(),
            source,
        })?;

    let load_options = tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    };

    // tobj only consults the material loader on `mtllib`, so lead with one
    let mtllib = format!("mtllib {MTL_FILE}\n");
    let mut obj_reader = Cursor::new(mtllib.as_bytes()).chain(Cursor::new(obj_text.as_bytes()));

    let resolved = Cell::new(false);
    let (models, materials) = tobj::load_obj_buf(&mut obj_reader, &load_options, |_material_path| {
        if resolved.replace(true) {
            Ok((Vec::new(), Default::default()))
        } else {
            Ok((mtl_materials.clone(), mtl_names.clone()))
        }
    })
    .map_err(|source| AvatarError::Parse {
        file: OBJ_FILE.to_string(),
        source,
    })?;

    let materials = materials.map_err(|source| AvatarError::Parse {
        file: MTL_FILE.to_string(),
        source,
    })?;

    Ok(AvatarModel {
        meshes: models.iter().map(AvatarMesh::from_obj).collect(),
        materials: materials.iter().map(AvatarMaterial::from_mtl).collect(),
    })
}
