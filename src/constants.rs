/// Physics and world-geometry constants used across the resolver.
///
/// The integration constants match the authored terrain data; changing them
/// retunes every moving object on every map.
pub const GRAVITY_FORCE: f64 = 0.14;
pub const GROUND_FRICTION: f64 = 0.3;
pub const SLOPE_FACTOR: f64 = 0.1;
pub const GROUND_SLIP: f64 = 3.0;
pub const FLY_FRICTION: f64 = 0.05;
/// Speeds below this magnitude snap to zero once acceleration stops.
pub const REST_SPEED: f64 = 0.1;
/// Maximum slope gradient that still affects ground drag.
pub const SLOPE_GRADIENT_CAP: f64 = 0.5;
/// Horizontal inset from the outermost foothold edges to the world walls.
pub const WALL_INSET: i16 = 25;
/// Padding above the topmost foothold edge to the world ceiling.
pub const BORDER_TOP_PADDING: i16 = 300;
/// Padding below the bottommost foothold edge to the world floor.
pub const BORDER_BOTTOM_PADDING: i16 = 100;
/// Height of the band probed above an object's feet for blocking walls.
pub const WALL_PROBE_HEIGHT: i16 = 50;
/// Largest vertical gap to a lower foothold that still allows jumping down.
pub const JUMP_DOWN_RANGE: f64 = 600.0;
