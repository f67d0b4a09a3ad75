//! Full-tick integration through [`footing::Physics`]: force application,
//! friction, gravity, landing and the clamp-before-rederive ordering.

mod common;

use approx::assert_relative_eq;
use common::{grounded_on, leaf, linked, tree};
use footing::{ObjectKind, Physics, PhysicsObject, GRAVITY_FORCE};

fn flat_floor_physics() -> Physics {
    Physics::new(tree(&[(1, leaf(0, 50, 100, 50))]))
}

#[test]
fn gravity_accelerates_airborne_objects() {
    let physics = flat_floor_physics();
    let mut obj = PhysicsObject::new(50.0, 0.0);

    physics.move_object(&mut obj);

    assert_relative_eq!(obj.vspeed, GRAVITY_FORCE);
    assert_relative_eq!(obj.crnt_y(), GRAVITY_FORCE);
}

#[test]
fn a_dropped_object_lands_exactly_on_the_ground() {
    let physics = flat_floor_physics();
    let mut obj = PhysicsObject::new(50.0, 0.0);

    for _ in 0..200 {
        physics.move_object(&mut obj);
        if obj.onground {
            break;
        }
    }

    assert!(obj.onground, "object should land within the tick budget");
    assert_eq!(obj.fhid, 1);
    let ground = physics.fht().get_fh(1).ground_below(obj.crnt_x());
    assert!(
        obj.crnt_y() == ground,
        "grounded y must equal the ground height exactly"
    );
}

#[test]
fn no_gravity_objects_hover() {
    let physics = flat_floor_physics();
    let mut obj = PhysicsObject::new(50.0, 0.0);
    obj.no_gravity = true;

    physics.move_object(&mut obj);

    assert_relative_eq!(obj.vspeed, 0.0);
    assert_relative_eq!(obj.crnt_y(), 0.0);
}

#[test]
fn ground_friction_decays_horizontal_speed() {
    let physics = flat_floor_physics();
    let mut obj = grounded_on(physics.fht(), 1, 10.0);
    obj.hspeed = 5.0;

    physics.move_object(&mut obj);

    assert!(obj.hspeed > 0.0 && obj.hspeed < 5.0);
}

#[test]
fn slow_grounded_objects_come_to_rest() {
    let physics = flat_floor_physics();
    let mut obj = grounded_on(physics.fht(), 1, 50.0);
    obj.hspeed = 0.05;

    physics.move_object(&mut obj);

    assert_relative_eq!(obj.hspeed, 0.0);
}

#[test]
fn applied_force_is_consumed_by_the_tick() {
    let physics = flat_floor_physics();
    let mut obj = grounded_on(physics.fht(), 1, 50.0);
    obj.hforce = 1.0;

    physics.move_object(&mut obj);

    assert!(obj.hspeed > 0.0);
    assert_relative_eq!(obj.hforce, 0.0);
}

#[test]
fn a_full_tick_carries_a_walker_across_a_slope_seam() {
    let physics = Physics::new(tree(&[
        (1, linked(0, 50, 100, 50, 0, 2)),
        (2, linked(100, 50, 200, 100, 1, 0)),
    ]));
    let mut obj = grounded_on(physics.fht(), 1, 99.0);
    obj.hspeed = 5.0;

    physics.move_object(&mut obj);

    assert_eq!(obj.fhid, 2, "the chain edge is followed within one tick");
    assert!(obj.onground, "slope follow keeps the walker grounded");
    let ground = physics.fht().get_fh(2).ground_below(obj.crnt_x());
    assert!(obj.crnt_y() == ground);
}

#[test]
fn flying_objects_ignore_gravity_and_damp_out() {
    let physics = flat_floor_physics();
    let mut obj = PhysicsObject::new(50.0, 0.0);
    obj.kind = ObjectKind::Flying;
    obj.hspeed = 10.0;

    physics.move_object(&mut obj);

    assert_relative_eq!(obj.vspeed, 0.0);
    assert!(obj.hspeed < 10.0);
}

#[test]
fn fixated_objects_do_not_move() {
    let physics = flat_floor_physics();
    let mut obj = grounded_on(physics.fht(), 1, 50.0);
    obj.kind = ObjectKind::Fixated;
    obj.hforce = 5.0;
    obj.vforce = 5.0;

    physics.move_object(&mut obj);

    assert_relative_eq!(obj.crnt_x(), 50.0);
    assert_relative_eq!(obj.crnt_y(), 50.0);
}

#[test]
fn spawn_placement_sits_one_unit_above_the_ground() {
    let physics = flat_floor_physics();

    assert_eq!(physics.get_y_below((50, 0)), (50, 49));
    // Off the map, the bottom border stands in for the ground.
    let border = physics.fht().get_borders().second();
    assert_eq!(physics.get_y_below((500, 0)), (500, border - 1));
}

#[test]
fn render_interpolation_blends_between_tick_states() {
    let physics = flat_floor_physics();
    let mut obj = grounded_on(physics.fht(), 1, 10.0);
    obj.hspeed = 4.0;

    obj.normalize();
    physics.move_object(&mut obj);

    assert_relative_eq!(obj.x.last(), 10.0);
    let midpoint = obj.x.interpolated(0.5);
    assert!(midpoint > 10.0 && midpoint < obj.crnt_x());
}
