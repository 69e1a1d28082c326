use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use respawn_points::prelude::*;

// Relative to the assets/ directory
const ACTIVATE_CLIP: &str = "sounds/checkpoint_activate.wav";
const RESPAWN_CLIP: &str = "sounds/player_respawn.wav";
const HUM_CLIP: &str = "sounds/checkpoint_hum.wav";

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Respawn Points".into(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .add_plugins(RapierDebugRenderPlugin::default())
        .add_plugins((CheckpointPlugin, PlayerPlugin))
        .add_systems(Startup, setup_level)
        .add_systems(Update, log_activations)
        .run();
}

fn setup_level(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 6.0, 12.0).looking_at(Vec3::ZERO, Vec3::Y),
        SpatialListener::new(0.3),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 3_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Three floating platforms with a gap between each
    let platform_mesh = meshes.add(Cuboid::new(8.0, 1.0, 8.0));
    let platform_material = materials.add(Color::srgb(0.45, 0.5, 0.55));
    let platform_centres = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, -12.0),
        Vec3::new(0.0, 2.0, -24.0),
    ];
    for centre in platform_centres {
        commands.spawn((
            Mesh3d(platform_mesh.clone()),
            MeshMaterial3d(platform_material.clone()),
            Transform::from_translation(centre),
            RigidBody::Fixed,
            Collider::cuboid(4.0, 0.5, 4.0),
        ));
    }

    let sfx = CheckpointSfx {
        activate: Some(asset_server.load(ACTIVATE_CLIP)),
        respawn: Some(asset_server.load(RESPAWN_CLIP)),
        ambient_loop: Some(asset_server.load(HUM_CLIP)),
        volume: 0.8,
    };
    let looks = CheckpointLooks {
        pad: meshes.add(Cylinder::new(0.8, 0.1)),
        pad_material: materials.add(Color::srgb(0.3, 0.3, 0.35)),
        spark: meshes.add(Sphere::new(0.15)),
        active: materials.add(Color::srgb(0.2, 0.9, 0.4)),
        inactive: materials.add(Color::srgb(0.8, 0.2, 0.2)),
        burst: materials.add(Color::srgb(1.0, 0.9, 0.4)),
    };

    let start = spawn_checkpoint(
        &mut commands,
        &looks,
        sfx.clone(),
        platform_centres[0] + Vec3::Y * 0.55,
        None,
    );
    for centre in &platform_centres[1..] {
        spawn_checkpoint(
            &mut commands,
            &looks,
            sfx.clone(),
            *centre + Vec3::Y * 0.55,
            Some(start),
        );
    }

    commands.spawn((
        Mesh3d(meshes.add(Capsule3d::new(0.4, 1.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.2, 0.7, 0.9))),
        Transform::from_xyz(0.0, 2.0, 0.0),
        Player::default(),
        RigidBody::Dynamic,
        Collider::capsule_y(0.5, 0.4),
        LockedAxes::ROTATION_LOCKED,
        Velocity::zero(),
        ActiveEvents::COLLISION_EVENTS,
    ));
}

struct CheckpointLooks {
    pad: Handle<Mesh>,
    pad_material: Handle<StandardMaterial>,
    spark: Handle<Mesh>,
    active: Handle<StandardMaterial>,
    inactive: Handle<StandardMaterial>,
    burst: Handle<StandardMaterial>,
}

// `initial` of None makes this checkpoint the level start
fn spawn_checkpoint(
    commands: &mut Commands,
    looks: &CheckpointLooks,
    sfx: CheckpointSfx,
    position: Vec3,
    initial: Option<Entity>,
) -> Entity {
    let checkpoint = match initial {
        Some(start) => Checkpoint::following(start),
        None => Checkpoint::start(),
    };

    commands
        .spawn((
            checkpoint,
            sfx,
            Mesh3d(looks.pad.clone()),
            MeshMaterial3d(looks.pad_material.clone()),
            Transform::from_translation(position),
            Collider::cylinder(1.0, 0.8),
            Sensor,
            ActiveEvents::COLLISION_EVENTS,
        ))
        .with_children(|parent| {
            parent.spawn((
                Name::new(EMITTER_ACTIVE),
                ParticleEmitter::default(),
                Mesh3d(looks.spark.clone()),
                MeshMaterial3d(looks.active.clone()),
                Transform::from_xyz(0.0, 0.6, 0.0),
            ));
            parent.spawn((
                Name::new(EMITTER_INACTIVE),
                ParticleEmitter::default(),
                Mesh3d(looks.spark.clone()),
                MeshMaterial3d(looks.inactive.clone()),
                Transform::from_xyz(0.0, 0.6, 0.0),
            ));
            for (i, name) in EMITTER_RESPAWN.into_iter().enumerate() {
                parent.spawn((
                    Name::new(name),
                    ParticleEmitter::default(),
                    Mesh3d(looks.spark.clone()),
                    MeshMaterial3d(looks.burst.clone()),
                    Transform::from_xyz(0.0, 0.9 + 0.4 * i as f32, 0.0)
                        .with_scale(Vec3::splat(1.5 + i as f32)),
                ));
            }
            parent.spawn((
                Name::new(SPOTLIGHT),
                SpotLight {
                    range: 8.0,
                    outer_angle: 0.6,
                    ..default()
                },
                Transform::from_xyz(0.0, 4.0, 0.0).looking_at(Vec3::ZERO, Vec3::Z),
            ));
        })
        .id()
}

fn log_activations(mut activated: EventReader<CheckpointActivatedEvent>) {
    for event in activated.read() {
        info!(
            "Progress saved at {} (was {:?})",
            event.checkpoint, event.previous
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn demo_sound_clips_ship_with_the_crate() {
        let assets = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        for clip in [ACTIVATE_CLIP, RESPAWN_CLIP, HUM_CLIP] {
            assert!(assets.join(clip).is_file(), "missing demo clip {clip}");
        }
    }
}
