// Standard library and external crates
use bevy::prelude::*;
use constants::marker::{MARKER_GREEN, MARKER_RED, MARKER_SIZE};

// Crate engine modules
use crate::engine::mesh::marker_cube::create_wireframe_cube_mesh;

#[derive(Component)]
pub struct MarkerCube;

/// Wireframe marker factory. The counter lives for the whole session and
/// alternates marker colours green, red, green...
#[derive(Resource, Default, Debug)]
pub struct MarkerCubeFactory {
    created: u32,
}

impl MarkerCubeFactory {
    pub fn created(&self) -> u32 {
        self.created
    }

    /// Colour for the next cube, advancing the counter.
    pub fn next_colour(&mut self) -> u32 {
        let colour = if self.created % 2 == 0 {
            MARKER_GREEN
        } else {
            MARKER_RED
        };
        self.created += 1;
        colour
    }

    /// Spawn one marker cube. `None` leaves it at the default (origin) placement.
    pub fn spawn_marker(
        &mut self,
        commands: &mut Commands,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
        position: Option<Vec3>,
    ) -> Entity {
        let colour = self.next_colour();
        let material = materials.add(StandardMaterial {
            base_color: hex_colour(colour),
            unlit: true,
            ..default()
        });

        let transform = position.map_or(Transform::default(), Transform::from_translation);

        commands
            .spawn((
                Mesh3d(meshes.add(create_wireframe_cube_mesh(MARKER_SIZE))),
                MeshMaterial3d(material),
                transform,
                MarkerCube,
            ))
            .id()
    }
}

/// `0xRRGGBB` to an sRGB colour.
pub fn hex_colour(hex: u32) -> Color {
    Color::srgb_u8(
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colours_alternate_starting_green() {
        let mut factory = MarkerCubeFactory::default();
        let colours: Vec<u32> = (0..6).map(|_| factory.next_colour()).collect();

        assert_eq!(
            colours,
            vec![
                MARKER_GREEN,
                MARKER_RED,
                MARKER_GREEN,
                MARKER_RED,
                MARKER_GREEN,
                MARKER_RED
            ]
        );
        assert_eq!(factory.created(), 6);
    }

    #[test]
    fn hex_colour_splits_channels() {
        assert_eq!(hex_colour(0x00ff00), Color::srgb_u8(0, 255, 0));
        assert_eq!(hex_colour(0xff0000), Color::srgb_u8(255, 0, 0));
    }

    #[test]
    fn markers_spawn_at_requested_positions() {
        let mut world = World::new();
        world.init_resource::<Assets<Mesh>>();
        world.init_resource::<Assets<StandardMaterial>>();

        let mut factory = MarkerCubeFactory::default();
        let mut queue = bevy::ecs::world::CommandQueue::default();
        let spawned = world.resource_scope(|world, mut meshes: Mut<Assets<Mesh>>| {
            world.resource_scope(|world, mut materials: Mut<Assets<StandardMaterial>>| {
                let mut commands = Commands::new(&mut queue, world);
                [Some(Vec3::new(0.0, 0.0, 1.0)), Some(Vec3::new(1.0, 2.0, 3.0)), None]
                    .into_iter()
                    .map(|position| {
                        factory.spawn_marker(&mut commands, &mut meshes, &mut materials, position)
                    })
                    .collect::<Vec<_>>()
            })
        });
        queue.apply(&mut world);

        let translations: Vec<Vec3> = spawned
            .iter()
            .map(|entity| world.get::<Transform>(*entity).unwrap().translation)
            .collect();
        assert_eq!(
            translations,
            vec![Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO]
        );
        assert_eq!(world.resource::<Assets<StandardMaterial>>().len(), 3);
        assert_eq!(factory.created(), 3);
    }
}
