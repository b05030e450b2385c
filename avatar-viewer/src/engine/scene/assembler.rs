// Standard library and external crates
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::render_settings::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR};

// Crate engine modules
use crate::engine::assets::avatar_bundle::AvatarBundle;
use crate::engine::camera::orbit_camera::{OrbitCamera, look_at_target};
use crate::engine::core::app_state::AppState;
use crate::engine::mesh::avatar_model::{AvatarMaterial, AvatarModel, parse_avatar_model};
use crate::engine::scene::gizmos::MarkerCubeFactory;
use crate::engine::systems::fps_tracking::spawn_fps_overlay;
use crate::engine::systems::viewport::primary_window_aspect;

#[derive(Component)]
pub struct Avatar;

/// Build the whole scene from the decoded bundle. Parsing happens first so a
/// malformed model leaves nothing half-spawned.
pub fn assemble_scene(
    mut commands: Commands,
    bundle: Res<AvatarBundle>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut marker_factory: ResMut<MarkerCubeFactory>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let model = match parse_avatar_model(&bundle) {
        Ok(model) => model,
        Err(err) => {
            error!("{err}");
            next_state.set(AppState::Failed);
            return;
        }
    };

    spawn_avatar(&mut commands, &mut meshes, &mut materials, &model);

    let position = bundle.camera.position.to_vec3();
    let direction = bundle.camera.direction.to_vec3();
    info!("Camera position {position}, direction {direction}");

    // Direction marker, position marker, then one at the origin
    marker_factory.spawn_marker(&mut commands, &mut meshes, &mut materials, Some(direction));
    marker_factory.spawn_marker(&mut commands, &mut meshes, &mut materials, Some(position));
    marker_factory.spawn_marker(&mut commands, &mut meshes, &mut materials, None);
    debug!("{} marker cubes created this session", marker_factory.created());

    let orbit = OrbitCamera::looking_from(position, look_at_target(position, direction));
    spawn_camera(&mut commands, orbit.transform(), primary_window_aspect(&windows));
    commands.insert_resource(orbit);

    spawn_lighting(&mut commands);
    spawn_fps_overlay(&mut commands);

    info!("✓ Avatar scene assembled");
    next_state.set(AppState::Running);
}

fn spawn_avatar(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    model: &AvatarModel,
) {
    let material_handles: Vec<Handle<StandardMaterial>> = model
        .materials
        .iter()
        .map(|material| {
            debug!("Material '{}' diffuse {:?}", material.name, material.diffuse);
            materials.add(material.to_standard_material())
        })
        .collect();
    let fallback = materials.add(AvatarMaterial::default().to_standard_material());

    commands
        .spawn((Avatar, Transform::default(), Visibility::default()))
        .with_children(|parent| {
            for mesh in &model.meshes {
                let material = mesh
                    .material
                    .and_then(|index| material_handles.get(index))
                    .unwrap_or(&fallback)
                    .clone();

                parent.spawn((
                    Name::new(mesh.name.clone()),
                    Mesh3d(meshes.add(mesh.to_mesh())),
                    MeshMaterial3d(material),
                ));
            }
        });

    info!(
        "Avatar spawned: {} meshes, {} materials",
        model.meshes.len(),
        model.materials.len()
    );
}

fn spawn_camera(commands: &mut Commands, transform: Transform, aspect_ratio: f32) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            aspect_ratio,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        transform,
    ));
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::scene_manifest::SceneManifest;
    use crate::engine::scene::gizmos::MarkerCube;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use bevy::state::app::StatesPlugin;

    const AVATAR_OBJ: &str = "mtllib scene.mtl
o Body
v -0.5 0.0 0.0
v 0.5 0.0 0.0
v 0.0 1.0 0.0
v 0.0 1.0 1.0
usemtl Skin
f 1 2 3
f 2 4 3
";

    const AVATAR_MTL: &str = "newmtl Skin
Kd 0.9 0.7 0.6
";

    fn manifest_json(obj: &str, mtl: &str) -> String {
        serde_json::json!({
            "files": {
                "scene.obj": { "content": STANDARD.encode(obj) },
                "scene.mtl": { "content": STANDARD.encode(mtl) },
                "icon.png": { "content": "aGVsbG8=" }
            },
            "camera": {
                "position": { "x": 1.0, "y": 2.0, "z": 3.0 },
                "direction": { "x": 0.0, "y": 0.0, "z": 1.0 }
            }
        })
        .to_string()
    }

    fn assembly_app(bundle: AvatarBundle) -> App {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .init_state::<AppState>()
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<MarkerCubeFactory>()
            .insert_resource(bundle)
            .add_systems(Update, assemble_scene);
        app
    }

    fn decode(json: &str) -> AvatarBundle {
        let manifest: SceneManifest = serde_json::from_str(json).unwrap();
        AvatarBundle::decode(manifest).unwrap()
    }

    #[test]
    fn end_to_end_manifest_builds_the_scene() {
        let bundle = decode(&manifest_json(AVATAR_OBJ, AVATAR_MTL));
        assert_eq!(
            bundle.file("icon.png").unwrap().data_uri(),
            Some("data:image/png;base64,aGVsbG8=")
        );

        let mut app = assembly_app(bundle);
        app.update();
        let world = app.world_mut();

        let mut cameras = world.query_filtered::<(&Transform, &Projection), With<Camera3d>>();
        let (transform, projection) = cameras.single(world).unwrap();
        assert!(transform.translation.abs_diff_eq(Vec3::new(1.0, 2.0, 3.0), 1e-4));
        let Projection::Perspective(perspective) = projection else {
            panic!("camera is not perspective");
        };
        assert!((perspective.fov - 70f32.to_radians()).abs() < 1e-6);
        assert_eq!(perspective.near, 0.1);
        assert_eq!(perspective.far, 1000.0);

        let orbit = world.resource::<OrbitCamera>();
        assert!(orbit.target.abs_diff_eq(Vec3::new(1.0, 2.0, -2.5), 1e-4));

        let mut markers = world.query_filtered::<&Transform, With<MarkerCube>>();
        let mut marker_positions: Vec<Vec3> =
            markers.iter(world).map(|t| t.translation).collect();
        marker_positions.sort_by(|a, b| a.z.total_cmp(&b.z));
        assert_eq!(
            marker_positions,
            vec![Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 2.0, 3.0)]
        );
        assert_eq!(world.resource::<MarkerCubeFactory>().created(), 3);

        let mut avatars = world.query_filtered::<&Children, With<Avatar>>();
        assert_eq!(avatars.single(world).unwrap().len(), 1);

        assert!(matches!(
            world.resource::<NextState<AppState>>(),
            NextState::Pending(AppState::Running)
        ));
    }

    #[test]
    fn malformed_model_spawns_nothing() {
        let bundle = decode(&manifest_json("f 1 2 x\n", AVATAR_MTL));

        let mut app = assembly_app(bundle);
        app.update();
        let world = app.world_mut();

        let mut cameras = world.query_filtered::<Entity, With<Camera3d>>();
        assert_eq!(cameras.iter(world).count(), 0);
        let mut markers = world.query_filtered::<Entity, With<MarkerCube>>();
        assert_eq!(markers.iter(world).count(), 0);
        assert!(matches!(
            world.resource::<NextState<AppState>>(),
            NextState::Pending(AppState::Failed)
        ));
    }
}
