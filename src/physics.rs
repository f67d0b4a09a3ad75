//! The fixed-timestep tick integrator.
//!
//! [`Physics`] owns the loaded map's [`FootholdTree`] and drives one
//! object's kinematic state through a full tick: accumulate gravity,
//! friction and applied forces into accelerations, advance the speeds,
//! clamp the pending move against terrain, advance the position, then
//! re-derive the terrain linkage. Within a tick the order is fixed —
//! clamping runs before re-derivation because the clamped position is what
//! the linkage is derived from. Across objects the order is irrelevant;
//! objects never interact here.

use crate::constants::{
    FLY_FRICTION, GRAVITY_FORCE, GROUND_FRICTION, GROUND_SLIP, REST_SPEED, SLOPE_FACTOR,
    SLOPE_GRADIENT_CAP,
};
use crate::foothold_tree::FootholdTree;
use crate::physics_object::{ObjectKind, PhysicsObject};

/// The per-tick integrator for one loaded map.
#[derive(Debug, Clone, Default)]
pub struct Physics {
    fht: FootholdTree,
}

impl Physics {
    /// Wraps a built foothold tree for simulation.
    pub const fn new(fht: FootholdTree) -> Self {
        Self { fht }
    }

    /// Read access to the underlying terrain.
    pub const fn fht(&self) -> &FootholdTree {
        &self.fht
    }

    /// Runs one full simulation tick for one object.
    pub fn move_object(&self, phobj: &mut PhysicsObject) {
        match phobj.kind {
            ObjectKind::Normal => {
                Self::move_normal(phobj);
                self.fht.limit_movement(phobj);
            }
            ObjectKind::Flying => {
                Self::move_flying(phobj);
                self.fht.limit_movement(phobj);
            }
            ObjectKind::Fixated => {}
        }

        phobj.advance();
        self.fht.update_fh(phobj);
    }

    /// Walking integration: forces and ground drag while grounded, gravity
    /// while airborne. Slow grounded objects with no drive come to rest.
    fn move_normal(phobj: &mut PhysicsObject) {
        phobj.vacc = 0.0;
        phobj.hacc = 0.0;

        if phobj.onground {
            phobj.vacc += phobj.vforce;
            phobj.hacc += phobj.hforce;

            if phobj.hacc == 0.0 && phobj.hspeed.abs() < REST_SPEED {
                phobj.hspeed = 0.0;
            } else {
                let inertia = phobj.hspeed / GROUND_SLIP;
                let slope = phobj.fhslope.clamp(-SLOPE_GRADIENT_CAP, SLOPE_GRADIENT_CAP);

                phobj.hacc -=
                    (GROUND_FRICTION + SLOPE_FACTOR * (1.0 + slope * -inertia)) * inertia;
            }
        } else if !phobj.no_gravity {
            phobj.vacc += GRAVITY_FORCE;
        }

        phobj.hforce = 0.0;
        phobj.vforce = 0.0;

        phobj.hspeed += phobj.hacc;
        phobj.vspeed += phobj.vacc;
    }

    /// Flying integration: damped free flight on both axes, no gravity,
    /// no terrain attachment.
    fn move_flying(phobj: &mut PhysicsObject) {
        phobj.hacc = phobj.hforce;
        phobj.vacc = phobj.vforce;
        phobj.hforce = 0.0;
        phobj.vforce = 0.0;

        phobj.hacc -= FLY_FRICTION * phobj.hspeed;
        phobj.vacc -= FLY_FRICTION * phobj.vspeed;

        phobj.hspeed += phobj.hacc;
        phobj.vspeed += phobj.vacc;

        if phobj.hacc == 0.0 && phobj.hspeed.abs() < REST_SPEED {
            phobj.hspeed = 0.0;
        }

        if phobj.vacc == 0.0 && phobj.vspeed.abs() < REST_SPEED {
            phobj.vspeed = 0.0;
        }
    }

    /// Spawn placement helper: the point one unit above the ground under
    /// `position`, falling back to the bottom world border.
    pub fn get_y_below(&self, position: (i16, i16)) -> (i16, i16) {
        let ground = self.fht.get_y_below(position);

        (position.0, ground.saturating_sub(1))
    }
}
