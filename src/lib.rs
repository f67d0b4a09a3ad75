//! Library crate providing the footing terrain resolver.
//!
//! `footing` resolves point-mass objects against pre-authored 2D side-view
//! terrain: piecewise-linear chains of floors, slopes and walls organised in
//! depth layers ("footholds"). Each simulation tick the resolver clamps an
//! object's tentative move against terrain and world bounds, then re-derives
//! which foothold the object rests on along with its slope, layer, grounded
//! flag and jump-down eligibility.
//!
//! The crate is deliberately narrow: no rendering, no object-object
//! collision, no rigid bodies — one point mass against static terrain,
//! inside a single-threaded fixed-timestep loop. The [`FootholdTree`] is
//! read-only after map load and safe to share across every object simulated
//! in a tick.
pub mod constants;
pub mod error;
pub mod foothold;
pub mod foothold_tree;
pub mod logging;
pub mod map;
pub mod physics;
pub mod physics_object;
pub mod range;

pub use constants::*;

// Re-export commonly used items
pub use error::MapError;
pub use foothold::Foothold;
pub use foothold_tree::FootholdTree;
pub use logging::init as init_logging;
pub use map::{load_tree, FootholdData, FootholdSource};
pub use physics::Physics;
pub use physics_object::{Linear, ObjectKind, PhysicsObject};
pub use range::Range;

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use footing::prelude::*;
    //! ```

    pub use crate::foothold::Foothold;
    pub use crate::foothold_tree::FootholdTree;
    pub use crate::map::{load_tree, FootholdData, FootholdSource};
    pub use crate::physics::Physics;
    pub use crate::physics_object::{ObjectKind, PhysicsObject};
    pub use crate::range::Range;
}
