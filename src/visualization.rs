use bevy::asset::RenderAssetUsages;
use bevy::color::palettes::css::*;
use bevy::prelude::*;

use crate::constants::{LANDER_BASE_OFFSET, LANDER_HEIGHT, LANDER_WIDTH};
use crate::simulation::{Outcome, Session};

// View configuration
const WORLD_TO_SCREEN_SCALE: f32 = 5.0;
const GROUND_OFFSET: f32 = -250.0; // pixels from screen center to world y = 0
const FLAME_HEIGHT: f32 = 1.2; // meters
const FLAME_WIDTH: f32 = 0.8;

#[derive(Component)]
pub struct Lander;

#[derive(Component)]
pub struct Flame;

/// Material handles for the lander body in its two looks.
#[derive(Resource)]
pub struct LanderMaterials {
    flying: Handle<ColorMaterial>,
    wrecked: Handle<ColorMaterial>,
}

pub fn world_to_screen(pos: Vec2, view_center: f32) -> Vec2 {
    Vec2::new(
        (pos.x - view_center) * WORLD_TO_SCREEN_SCALE,
        pos.y * WORLD_TO_SCREEN_SCALE + GROUND_OFFSET,
    )
}

// Terrain midpoint maps to the horizontal center of the screen.
fn view_center(session: &Session) -> f32 {
    let (start, end) = session.terrain.span();
    (start + end) / 2.0
}

fn triangle_mesh(width: f32, height: f32) -> Mesh {
    let mut mesh = Mesh::new(
        bevy::render::render_resource::PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );

    let half_height = (height / 2.0) * WORLD_TO_SCREEN_SCALE;
    let half_width = (width / 2.0) * WORLD_TO_SCREEN_SCALE;

    let vertices = [
        [0.0, half_height, 0.0],          // apex
        [-half_width, -half_height, 0.0], // bottom left
        [half_width, -half_height, 0.0],  // bottom right
    ];
    let indices = [0u32, 1, 2];
    let normals = [[0.0, 0.0, 1.0]; 3];
    let uvs = [[0.5, 0.0], [0.0, 1.0], [1.0, 1.0]];

    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices.to_vec());
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals.to_vec());
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs.to_vec());
    mesh.insert_indices(bevy::render::mesh::Indices::U32(indices.to_vec()));
    mesh
}

pub fn spawn_visualization(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let lander_materials = LanderMaterials {
        flying: materials.add(ColorMaterial::from_color(GHOST_WHITE)),
        wrecked: materials.add(ColorMaterial::from_color(ORANGE_RED)),
    };

    commands
        .spawn((
            Mesh2d(meshes.add(triangle_mesh(LANDER_WIDTH, LANDER_HEIGHT))),
            MeshMaterial2d(lander_materials.flying.clone()),
            Transform::from_xyz(0.0, 0.0, 1.0),
            Lander,
        ))
        .with_children(|parent| {
            // Exhaust flame hangs below the base; shown only while burning.
            parent.spawn((
                Mesh2d(meshes.add(triangle_mesh(FLAME_WIDTH, FLAME_HEIGHT))),
                MeshMaterial2d(materials.add(ColorMaterial::from_color(GOLD))),
                Transform::from_xyz(
                    0.0,
                    -(LANDER_BASE_OFFSET + FLAME_HEIGHT / 2.0) * WORLD_TO_SCREEN_SCALE,
                    0.9,
                )
                .with_rotation(Quat::from_rotation_z(std::f32::consts::PI)),
                Visibility::Hidden,
                Flame,
            ));
        });

    commands.insert_resource(lander_materials);
}

pub fn update_visualization(
    session: Res<Session>,
    materials: Res<LanderMaterials>,
    mut lander: Query<
        (&mut Transform, &mut MeshMaterial2d<ColorMaterial>),
        With<Lander>,
    >,
    mut flame: Query<&mut Visibility, With<Flame>>,
) {
    let Ok((mut transform, mut material)) = lander.get_single_mut() else {
        return;
    };

    let screen = world_to_screen(session.craft.position, view_center(&session));
    transform.translation.x = screen.x;
    transform.translation.y = screen.y;
    transform.rotation = Quat::from_rotation_z(session.craft.angle);

    material.0 = if session.outcome == Outcome::Crashed {
        materials.wrecked.clone()
    } else {
        materials.flying.clone()
    };

    if let Ok(mut visibility) = flame.get_single_mut() {
        *visibility = if session.craft.thrusting {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}

/// Draws the ground profile and highlights the pad. Gizmos are immediate
/// mode, so a level switch needs no despawn/respawn bookkeeping.
pub fn draw_terrain(session: Res<Session>, mut gizmos: Gizmos) {
    let center = view_center(&session);
    let profile: Vec<Vec2> = session
        .terrain
        .points()
        .iter()
        .map(|&p| world_to_screen(p, center))
        .collect();
    gizmos.linestrip_2d(profile, FOREST_GREEN);

    let (pad_start, pad_end) = session.terrain.pad_span();
    let pad_y = session.terrain.pad_height();
    let a = world_to_screen(Vec2::new(pad_start, pad_y), center);
    let b = world_to_screen(Vec2::new(pad_end, pad_y), center);
    gizmos.line_2d(a, b, GOLD);
    // Beacon ticks at the pad corners.
    let tick = Vec2::Y * 6.0;
    gizmos.line_2d(a, a + tick, GOLD);
    gizmos.line_2d(b, b + tick, GOLD);
}
