use glam::Vec2;
use rapier2d::parry::shape::Ball;
use rapier2d::prelude::*;
use std::collections::HashMap;

use super::collision::CollisionLayer;

/// Physics world that manages all physics simulation
pub struct PhysicsWorld {
    /// Gravity vector
    gravity: Vector<Real>,

    /// Integration parameters for the physics simulation
    integration_parameters: IntegrationParameters,

    /// Physics pipeline handles collision detection and solving
    physics_pipeline: PhysicsPipeline,

    /// Island manager for sleeping bodies
    island_manager: IslandManager,

    /// Broad phase collision detection
    broad_phase: DefaultBroadPhase,

    /// Narrow phase collision detection
    narrow_phase: NarrowPhase,

    /// Impulse joint set
    impulse_joint_set: ImpulseJointSet,

    /// Multibody joint set
    multibody_joint_set: MultibodyJointSet,

    /// CCD solver for fast-moving objects
    ccd_solver: CCDSolver,

    /// Rigid body set
    rigid_body_set: RigidBodySet,

    /// Collider set
    collider_set: ColliderSet,

    /// Spatial index for overlap queries
    query_pipeline: QueryPipeline,

    /// Mapping from bodies to game entity ids
    body_to_entity: HashMap<RigidBodyHandle, u32>,
}

impl PhysicsWorld {
    /// Create a new physics world with default settings
    pub fn new() -> Self {
        Self::with_gravity(vector![0.0, -9.81])
    }

    /// Create a new physics world with custom gravity
    pub fn with_gravity(gravity: Vector<Real>) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        // Fixed timestep of 1/60 seconds (60 FPS)
        integration_parameters.dt = 1.0 / 60.0;

        Self {
            gravity,
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            query_pipeline: QueryPipeline::new(),
            body_to_entity: HashMap::new(),
        }
    }

    /// Step the physics simulation forward by one timestep
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
        self.sync_queries();
    }

    /// Bring collider poses and the query index up to date with bodies
    /// moved or colliders toggled outside a step
    fn sync_queries(&mut self) {
        self.rigid_body_set
            .propagate_modified_body_positions_to_colliders(&mut self.collider_set);
        self.query_pipeline
            .update(&self.rigid_body_set, &self.collider_set);
    }

    /// Add a rigid body to the physics world
    pub fn add_rigid_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.rigid_body_set.insert(body)
    }

    /// Add a collider attached to a rigid body
    pub fn add_collider(
        &mut self,
        collider: Collider,
        parent_handle: RigidBodyHandle,
    ) -> ColliderHandle {
        let handle =
            self.collider_set
                .insert_with_parent(collider, parent_handle, &mut self.rigid_body_set);
        self.sync_queries();
        handle
    }

    /// Remove a rigid body and all its attached colliders
    pub fn remove_rigid_body(&mut self, handle: RigidBodyHandle) {
        self.rigid_body_set.remove(
            handle,
            &mut self.island_manager,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            true, // remove attached colliders
        );
        self.body_to_entity.remove(&handle);
        self.sync_queries();
    }

    /// Associate a game entity id with a rigid body
    pub fn set_entity_mapping(&mut self, body_handle: RigidBodyHandle, entity_id: u32) {
        self.body_to_entity.insert(body_handle, entity_id);
    }

    /// Get the entity id owning a collider, through its parent body
    pub fn entity_for_collider(&self, handle: ColliderHandle) -> Option<u32> {
        let parent = self.collider_set.get(handle)?.parent()?;
        self.body_to_entity.get(&parent).copied()
    }

    /// Current translation of a body
    pub fn position(&self, handle: RigidBodyHandle) -> Option<Vec2> {
        self.rigid_body_set.get(handle).map(|body| {
            let t = body.translation();
            Vec2::new(t.x, t.y)
        })
    }

    /// Teleport a body
    pub fn set_position(&mut self, handle: RigidBodyHandle, position: Vec2) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.set_translation(vector![position.x, position.y], true);
        }
        self.sync_queries();
    }

    /// Current linear velocity of a body
    pub fn velocity(&self, handle: RigidBodyHandle) -> Option<Vec2> {
        self.rigid_body_set.get(handle).map(|body| {
            let v = body.linvel();
            Vec2::new(v.x, v.y)
        })
    }

    /// Overwrite the linear velocity of a body
    pub fn set_velocity(&mut self, handle: RigidBodyHandle, velocity: Vec2) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.set_linvel(vector![velocity.x, velocity.y], true);
        }
    }

    /// Apply an instantaneous change of velocity, independent of mass
    pub fn add_velocity(&mut self, handle: RigidBodyHandle, delta: Vec2) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            let v = *body.linvel();
            body.set_linvel(vector![v.x + delta.x, v.y + delta.y], true);
        }
    }

    /// Enable or disable a collider; disabled colliders are invisible to the
    /// solver and to overlap queries
    pub fn set_collider_enabled(&mut self, handle: ColliderHandle, enabled: bool) {
        if let Some(collider) = self.collider_set.get_mut(handle) {
            collider.set_enabled(enabled);
        }
        self.sync_queries();
    }

    /// Check if a collider is currently enabled
    pub fn is_collider_enabled(&self, handle: ColliderHandle) -> bool {
        self.collider_set
            .get(handle)
            .map(|collider| collider.is_enabled())
            .unwrap_or(false)
    }

    /// All enabled colliders on `layer` overlapping a circle
    pub fn overlap_circle(
        &self,
        center: Vec2,
        radius: Real,
        layer: CollisionLayer,
    ) -> Vec<ColliderHandle> {
        let ball = Ball::new(radius);
        let ball_pos = Isometry::translation(center.x, center.y);
        let filter = QueryFilter::new().groups(layer.query_groups());

        let mut hits = Vec::new();
        self.query_pipeline.intersections_with_shape(
            &self.rigid_body_set,
            &self.collider_set,
            &ball_pos,
            &ball,
            filter,
            |handle| {
                hits.push(handle);
                true // keep searching
            },
        );
        hits
    }

    /// Check if anything on `layer` overlaps a circle
    pub fn any_overlap(&self, center: Vec2, radius: Real, layer: CollisionLayer) -> bool {
        !self.overlap_circle(center, radius, layer).is_empty()
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
