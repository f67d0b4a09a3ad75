//! Per-object kinematic state mutated once per simulation tick.
//!
//! Every moving entity (character, mob, drop, projectile) embeds one
//! [`PhysicsObject`]. The tick integrator writes forces into it, the
//! foothold tree clamps its pending move and re-derives its terrain linkage,
//! and the owner reads the result for gameplay logic and render
//! interpolation.

/// A scalar tracked across one tick boundary for render interpolation.
///
/// Holds the current value and the value before the last mutation so a
/// renderer can blend between fixed-timestep states.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Linear {
    now: f64,
    before: f64,
}

impl Linear {
    /// Current value.
    pub const fn get(&self) -> f64 {
        self.now
    }

    /// Value before the last mutation.
    pub const fn last(&self) -> f64 {
        self.before
    }

    /// Blend between the previous and current value; `alpha` in `[0, 1]`.
    pub fn interpolated(&self, alpha: f64) -> f64 {
        self.before + (self.now - self.before) * alpha
    }

    /// Sets both current and previous value (teleport, no blending).
    pub fn set(&mut self, value: f64) {
        self.now = value;
        self.before = value;
    }

    /// Replaces the current value, shifting it into the previous slot.
    pub fn assign(&mut self, value: f64) {
        self.before = self.now;
        self.now = value;
    }

    /// Adds to the current value, shifting it into the previous slot.
    pub fn add(&mut self, delta: f64) {
        self.before = self.now;
        self.now += delta;
    }

    /// Collapses the previous value onto the current one.
    pub fn normalize(&mut self) {
        self.before = self.now;
    }
}

/// How the integrator moves an object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ObjectKind {
    /// Walks on terrain under gravity.
    #[default]
    Normal,
    /// Anchored in place; never reattaches to terrain once linked.
    Fixated,
    /// Ignores terrain attachment and gravity; damped free flight.
    Flying,
}

/// Kinematic state for one simulated object.
///
/// Fields are public by design: the object is owned exclusively by its
/// entity, and the integrator/tree pair read-modify-write it once per tick.
/// The one-shot request flags (`turn_at_edges`, `check_below`) are set by
/// gameplay code and cleared by the resolver once acted upon.
#[derive(Debug, Clone, Default)]
pub struct PhysicsObject {
    /// Horizontal position, previous and current.
    pub x: Linear,
    /// Vertical position, previous and current. Positive y points down.
    pub y: Linear,
    pub hspeed: f64,
    pub vspeed: f64,
    /// Force accumulators, consumed and zeroed by the integrator each tick.
    pub hforce: f64,
    pub vforce: f64,
    /// Accelerations computed by the integrator for the current tick.
    pub hacc: f64,
    pub vacc: f64,
    /// Current foothold id, 0 when airborne over nothing.
    pub fhid: u16,
    /// Gradient of the current foothold.
    pub fhslope: f64,
    /// Depth layer of the current foothold; 0 means not yet assigned.
    pub fhlayer: u8,
    /// Landing height recorded when jump-down eligibility was granted.
    pub groundbelow: f64,
    /// True when `y` exactly equals the current foothold's ground height.
    pub onground: bool,
    /// True when a jump-down to a lower foothold is currently allowed.
    pub enablejd: bool,
    pub kind: ObjectKind,
    /// Suppresses gravity for `Normal` objects while airborne.
    pub no_gravity: bool,
    /// One-shot: treat the chain's dead end as a wall on the next clamp.
    pub turn_at_edges: bool,
    /// One-shot: recompute jump-down eligibility on the next resolution.
    pub check_below: bool,
}

impl PhysicsObject {
    /// Creates an object at the given position with everything else at rest.
    pub fn new(x: f64, y: f64) -> Self {
        let mut obj = Self::default();
        obj.set_x(x);
        obj.set_y(y);
        obj
    }

    /// Current x.
    pub const fn crnt_x(&self) -> f64 {
        self.x.get()
    }

    /// Current y.
    pub const fn crnt_y(&self) -> f64 {
        self.y.get()
    }

    /// Tentative x after this tick's horizontal motion.
    pub fn next_x(&self) -> f64 {
        self.x.get() + self.hspeed
    }

    /// Tentative y after this tick's vertical motion.
    pub fn next_y(&self) -> f64 {
        self.y.get() + self.vspeed
    }

    /// Whether the object moves horizontally this tick.
    pub fn hmobile(&self) -> bool {
        self.hspeed != 0.0
    }

    /// Whether the object moves vertically this tick.
    pub fn vmobile(&self) -> bool {
        self.vspeed != 0.0
    }

    /// Teleports horizontally without render blending.
    pub fn set_x(&mut self, x: f64) {
        self.x.set(x);
    }

    /// Teleports vertically without render blending.
    pub fn set_y(&mut self, y: f64) {
        self.y.set(y);
    }

    /// Stops horizontal motion at `x` (wall or edge clamp).
    pub fn limit_x(&mut self, x: f64) {
        self.x.assign(x);
        self.hspeed = 0.0;
    }

    /// Stops vertical motion at `y` (landing or border clamp).
    pub fn limit_y(&mut self, y: f64) {
        self.y.assign(y);
        self.vspeed = 0.0;
    }

    /// Advances the position by the current speeds.
    pub fn advance(&mut self) {
        self.x.add(self.hspeed);
        self.y.add(self.vspeed);
    }

    /// Collapses interpolation history; call once per rendered frame.
    pub fn normalize(&mut self) {
        self.x.normalize();
        self.y.normalize();
    }
}
