//! Physika demo
//!
//! Builds a row of collidable points from the configuration, places them in
//! the world through the configured rigid frame, and logs the result.

use std::sync::Arc;

use physika::config::AppConfig;
use physika_framework::{
    CollidableObject, CollidablePoints, CollidableWorld, CollisionType, DataType3d,
    FrameworkError, MechanicalState, RigidMapping, RigidTransform,
};
use physika_math::{Matrix3x3, Vector3};

/// Determinant tolerance for calling the frame a proper rotation
const ROTATION_TOLERANCE: f64 = 1e-6;

fn run(config: &AppConfig) -> Result<(), FrameworkError> {
    log::info!("Matrix storage backend: {}", Matrix3x3::<f64>::backend());

    let rotation = config.frame.rotation;
    let det = rotation.determinant();
    log::info!("Frame rotation (det = {}):\n{}", det, rotation);
    if (det - 1.0).abs() > ROTATION_TOLERANCE {
        log::warn!("Frame rotation is not a proper rotation (det = {})", det);
    }

    let frame = RigidTransform::new(rotation, config.frame.translation);
    let mapping = RigidMapping::<DataType3d>::new(frame)?;

    let positions: Vec<_> = (0..config.points.count)
        .map(|i| Vector3::new([i as f64 * config.points.spacing, 0.0, 0.0]))
        .collect();
    let mut state = MechanicalState::<DataType3d>::from_positions(&positions);
    for v in state.velocities.as_mut_slice() {
        *v = config.points.velocity;
    }

    let mut points = CollidablePoints::<DataType3d>::new().with_mapping(Arc::new(mapping));
    points.set_radius(config.points.radius);
    points.initialize()?;
    points.update_collidable_object(&state)?;

    for (i, p) in points.positions().iter().enumerate() {
        log::info!(
            "Point {}: local [{}, {}, {}] -> world [{}, {}, {}]",
            i,
            positions[i][0],
            positions[i][1],
            positions[i][2],
            p[0],
            p[1],
            p[2]
        );
    }

    // A second point set at the origin, masked so it only meets spheres
    let mut anchor = CollidablePoints::<DataType3d>::new();
    anchor.set_collision_mask(CollisionType::SPHERES);

    let mut world = CollidableWorld::new();
    world.add(points, state);
    world.add(anchor, MechanicalState::from_positions(&[Vector3::zeros()]));
    world.add(
        CollidablePoints::new(),
        MechanicalState::from_positions(&[Vector3::new([0.0, 0.0, 1.0])]),
    );

    world.initialize_all()?;
    world.sync_collidables()?;
    world.sync_mechanical_states()?;

    let pairs = world.candidate_pairs();
    log::info!(
        "{} collidable objects, {} candidate pairs",
        world.len(),
        pairs.len()
    );

    Ok(())
}

fn main() {
    let loaded = AppConfig::load();

    let log_level = loaded
        .as_ref()
        .map(|config| config.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting Physika");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    if let Err(e) = run(&config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
