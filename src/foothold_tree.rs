//! The terrain engine: foothold storage, spatial index, and the two
//! per-tick resolution algorithms.
//!
//! [`FootholdTree`] owns every foothold of the loaded map together with a
//! by-column index and the derived world bounds. It is built once per map
//! load, is read-only afterwards, and can therefore be shared freely across
//! all objects simulated in the same tick. Per object and per tick, callers
//! run [`FootholdTree::limit_movement`] (clamp the pending move against
//! walls, floors and world borders) followed by [`FootholdTree::update_fh`]
//! (re-derive which foothold the object rests on), in that order: the
//! clamped position feeds the terrain re-derivation.
//!
//! Every method here is total: unknown foothold ids resolve to the null
//! sentinel, lookups that find nothing fall back to the world borders, and
//! no simulation path panics or returns an error.

use hashbrown::HashMap;
use log::warn;

use crate::constants::{
    BORDER_BOTTOM_PADDING, BORDER_TOP_PADDING, JUMP_DOWN_RANGE, WALL_INSET, WALL_PROBE_HEIGHT,
};
use crate::foothold::{Foothold, NULL_FOOTHOLD};
use crate::map::FootholdSource;
use crate::physics_object::{ObjectKind, PhysicsObject};
use crate::range::Range;

/// All footholds of one map plus the derived spatial index and bounds.
#[derive(Debug, Clone, Default)]
pub struct FootholdTree {
    footholds: HashMap<u16, Foothold>,
    /// Every non-wall foothold id, indexed under every integer x it spans.
    footholds_by_x: HashMap<i16, Vec<u16>>,
    walls: Range<i16>,
    borders: Range<i16>,
}

impl FootholdTree {
    /// Builds the tree from a parsed authored description.
    ///
    /// Leaves with non-numeric layer or id keys, an id of 0 (reserved for
    /// "none") or degenerate single-point geometry are logged and dropped;
    /// the rest of the map still builds. World bounds derive from the
    /// surviving footholds: walls are inset [`WALL_INSET`] from the
    /// outermost edges, borders padded by [`BORDER_TOP_PADDING`] and
    /// [`BORDER_BOTTOM_PADDING`].
    pub fn from_source(source: &FootholdSource) -> Self {
        let mut footholds = HashMap::new();
        let mut footholds_by_x: HashMap<i16, Vec<u16>> = HashMap::new();

        let mut leftw: i16 = 30000;
        let mut rightw: i16 = -30000;
        let mut botb: i16 = -30000;
        let mut topb: i16 = 30000;

        for (layer_name, groups) in &source.0 {
            let layer: u8 = match layer_name.parse() {
                Ok(layer) => layer,
                Err(err) => {
                    warn!("skipping foothold layer {layer_name:?}: {err}");
                    continue;
                }
            };

            for group in groups.values() {
                for (id_name, data) in group {
                    let id: u16 = match id_name.parse() {
                        Ok(id) => id,
                        Err(err) => {
                            warn!("skipping foothold {id_name:?} on layer {layer}: {err}");
                            continue;
                        }
                    };

                    if id == 0 {
                        warn!("skipping foothold with reserved id 0 on layer {layer}");
                        continue;
                    }

                    if data.x1 == data.x2 && data.y1 == data.y2 {
                        warn!("skipping degenerate foothold {id} on layer {layer}");
                        continue;
                    }

                    let foothold = Foothold::new(
                        id,
                        layer,
                        Range::new(data.x1, data.x2),
                        Range::new(data.y1, data.y2),
                        data.prev,
                        data.next,
                    );

                    leftw = leftw.min(foothold.l());
                    rightw = rightw.max(foothold.r());
                    botb = botb.max(foothold.b());
                    topb = topb.min(foothold.t());

                    if !foothold.is_wall() {
                        for x in foothold.l()..=foothold.r() {
                            footholds_by_x.entry(x).or_default().push(id);
                        }
                    }

                    footholds.insert(id, foothold);
                }
            }
        }

        Self {
            footholds,
            footholds_by_x,
            walls: Range::new(
                leftw.saturating_add(WALL_INSET),
                rightw.saturating_sub(WALL_INSET),
            ),
            borders: Range::new(
                topb.saturating_sub(BORDER_TOP_PADDING),
                botb.saturating_add(BORDER_BOTTOM_PADDING),
            ),
        }
    }

    /// Whether the tree holds no footholds at all.
    pub fn is_empty(&self) -> bool {
        self.footholds.is_empty()
    }

    /// Looks up a foothold, resolving unknown ids to the null sentinel.
    pub fn get_fh(&self, fhid: u16) -> &Foothold {
        self.footholds.get(&fhid).unwrap_or(&NULL_FOOTHOLD)
    }

    /// World x bounds for camera and movement clamping.
    pub const fn get_walls(&self) -> &Range<i16> {
        &self.walls
    }

    /// World y bounds (ceiling, floor) used as the terrain fallback.
    pub const fn get_borders(&self) -> &Range<i16> {
        &self.borders
    }

    /// Clamps the object's pending move against walls, ground and borders.
    ///
    /// Horizontal: a wall reported by [`Self::get_wall`] (or, for objects
    /// with the one-shot `turn_at_edges` request, the chain's dead end)
    /// stops the move exactly at the wall coordinate when the tick's path
    /// straddles it; the request flag is cleared once consumed. Vertical: a
    /// path crossing from above the current foothold's ground band to at or
    /// below it lands exactly on the ground, after which the horizontal
    /// clamp re-runs because the landing may change which foothold governs
    /// it. Anything still unbounded clamps to the world borders.
    pub fn limit_movement(&self, phobj: &mut PhysicsObject) {
        if phobj.hmobile() {
            let crnt_x = phobj.crnt_x();
            let next_x = phobj.next_x();

            let left = phobj.hspeed < 0.0;
            let mut wall = self.get_wall(phobj.fhid, left, phobj.next_y());
            let mut collision = if left {
                crnt_x >= wall && next_x <= wall
            } else {
                crnt_x <= wall && next_x >= wall
            };

            if !collision && phobj.turn_at_edges {
                wall = self.get_edge(phobj.fhid, left);
                collision = if left {
                    crnt_x >= wall && next_x <= wall
                } else {
                    crnt_x <= wall && next_x >= wall
                };
            }

            if collision {
                phobj.limit_x(wall);
                phobj.turn_at_edges = false;
            }
        }

        if phobj.vmobile() {
            let crnt_y = phobj.crnt_y();
            let next_y = phobj.next_y();

            let fh = self.get_fh(phobj.fhid);
            let landed = phobj.fhid != 0 && {
                let ground_before = fh.ground_below(phobj.crnt_x());
                let ground_after = fh.ground_below(phobj.next_x());

                if crnt_y <= ground_before && next_y >= ground_after {
                    phobj.limit_y(ground_after);
                    // The landing height may put a different foothold in
                    // charge of horizontal blocking.
                    self.limit_movement(phobj);
                    true
                } else {
                    false
                }
            };

            if !landed {
                if next_y < f64::from(self.borders.first()) {
                    phobj.limit_y(f64::from(self.borders.first()));
                } else if next_y > f64::from(self.borders.second()) {
                    phobj.limit_y(f64::from(self.borders.second()));
                }
            }
        }
    }

    /// Re-derives the object's terrain linkage from its clamped position.
    ///
    /// Grounded objects follow their chain across edges before falling back
    /// to a column lookup; airborne objects only ever use the column lookup,
    /// and when that finds nothing the state is deliberately left untouched
    /// so an object crossing a slope discontinuity does not stutter for the
    /// one tick it hovers over a seam. A grounded object that walks off the
    /// end of everything stays linked to its last foothold, clamped into
    /// that foothold's span, rather than being left attached to nothing.
    pub fn update_fh(&self, phobj: &mut PhysicsObject) {
        if phobj.kind == ObjectKind::Fixated && phobj.fhid > 0 {
            return;
        }

        let cur = *self.get_fh(phobj.fhid);
        let mut checkslope = false;

        let x = phobj.crnt_x();
        let y = phobj.crnt_y();

        if phobj.onground {
            if x.floor() > f64::from(cur.r()) {
                phobj.fhid = cur.next();
            } else if x.ceil() < f64::from(cur.l()) {
                phobj.fhid = cur.prev();
            }

            if phobj.fhid == 0 {
                phobj.fhid = self.get_fhid_below(x, y);
            } else {
                checkslope = true;
            }
        } else {
            let below = self.get_fhid_below(x, y);

            // No foothold under an airborne object this tick: keep the
            // previous linkage so slope seams do not stutter.
            if below == 0 {
                return;
            }

            phobj.fhid = below;
        }

        if phobj.fhid == 0 {
            // Walked past a chain end with nothing below: stay linked to
            // the old foothold, clamped into its span, and let gravity
            // take over next tick.
            phobj.fhslope = 0.0;
            phobj.onground = false;
            phobj.enablejd = false;
            phobj.check_below = false;
            phobj.fhid = cur.id();
            phobj.limit_x(f64::from(cur.x1()));
            return;
        }

        let next = *self.get_fh(phobj.fhid);
        phobj.fhslope = next.slope();

        let ground = next.ground_below(x);

        if phobj.vspeed == 0.0 && checkslope && (cur.slope() != 0.0 || next.slope() != 0.0) {
            let mut vdelta = phobj.fhslope.abs();

            if phobj.fhslope < 0.0 {
                vdelta *= ground - y;
            } else if phobj.fhslope > 0.0 {
                vdelta *= y - ground;
            }

            // Walking fast enough to cover the height difference keeps the
            // object glued to the floor across the slope change.
            if phobj.hspeed > 0.0 && vdelta <= phobj.hspeed {
                phobj.y.assign(ground);
            } else if phobj.hspeed < 0.0 && vdelta >= phobj.hspeed {
                phobj.y.assign(ground);
            }
        }

        phobj.onground = phobj.crnt_y() == ground;

        if phobj.enablejd || phobj.check_below {
            let belowid = self.get_fhid_below(x, next.ground_below(x) + 1.0);

            if belowid > 0 {
                let nextground = self.get_fh(belowid).ground_below(x);
                phobj.enablejd = (nextground - ground) < JUMP_DOWN_RANGE;
                phobj.groundbelow = ground + 1.0;
            } else {
                phobj.enablejd = false;
            }

            phobj.check_below = false;
        }

        if phobj.fhlayer == 0 || phobj.onground {
            phobj.fhlayer = next.layer();
        }
    }

    /// The x coordinate of the nearest blocking wall in the direction of
    /// travel, probing the chain one and two footholds ahead within a
    /// [`WALL_PROBE_HEIGHT`] band above the object's feet. Falls back to
    /// the world walls when the chain has no blocking wall nearby.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Foothold geometry keeps y within i16; the band saturates otherwise."
    )]
    fn get_wall(&self, curid: u16, left: bool, fy: f64) -> f64 {
        let shorty = fy as i16;
        let band = Range::new(
            shorty.saturating_sub(WALL_PROBE_HEIGHT),
            shorty.saturating_sub(1),
        );
        let cur = self.get_fh(curid);

        if left {
            let prev = self.get_fh(cur.prev());

            if prev.is_blocking(&band) {
                return f64::from(cur.l());
            }

            let prev_prev = self.get_fh(prev.prev());

            if prev_prev.is_blocking(&band) {
                return f64::from(prev.l());
            }

            return f64::from(self.walls.first());
        }

        let next = self.get_fh(cur.next());

        if next.is_blocking(&band) {
            return f64::from(cur.r());
        }

        let next_next = self.get_fh(next.next());

        if next_next.is_blocking(&band) {
            return f64::from(next.r());
        }

        f64::from(self.walls.second())
    }

    /// The x coordinate of the chain's dead end in the direction of travel,
    /// used as a pseudo-wall for objects that turn at edges. Chains longer
    /// than two footholds ahead fall back to the world walls.
    fn get_edge(&self, curid: u16, left: bool) -> f64 {
        let fh = self.get_fh(curid);

        if left {
            if fh.prev() == 0 {
                return f64::from(fh.l());
            }

            let prev = self.get_fh(fh.prev());

            if prev.prev() == 0 {
                return f64::from(prev.l());
            }

            return f64::from(self.walls.first());
        }

        if fh.next() == 0 {
            return f64::from(fh.r());
        }

        let next = self.get_fh(fh.next());

        if next.next() == 0 {
            return f64::from(next.r());
        }

        f64::from(self.walls.second())
    }

    /// Finds the foothold whose ground is nearest at or below `(fx, fy)`
    /// when projected straight down through the column at `round(fx)`.
    ///
    /// Returns 0 when no foothold in that column has ground between `fy`
    /// and the bottom world border. Among equally near candidates the first
    /// one encountered wins; well-formed maps do not overlap floors in one
    /// column, so the tie-break is stability, not semantics.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Column lookup rounds into i16; floats outside saturate to empty columns."
    )]
    pub fn get_fhid_below(&self, fx: f64, fy: f64) -> u16 {
        let mut ret = 0_u16;
        let mut comp = f64::from(self.borders.second());

        let x = fx.round() as i16;

        if let Some(ids) = self.footholds_by_x.get(&x) {
            for &id in ids {
                let ycomp = self.get_fh(id).ground_below(fx);

                if ycomp < fy || ycomp > comp {
                    continue;
                }

                if ret == 0 || ycomp < comp {
                    comp = ycomp;
                    ret = id;
                }
            }
        }

        ret
    }

    /// One-shot static query for spawn placement: the ground height of the
    /// nearest foothold under `position`, or the bottom world border.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Ground heights of authored footholds fit i16 like their endpoints."
    )]
    pub fn get_y_below(&self, position: (i16, i16)) -> i16 {
        let (x, y) = position;
        let fhid = self.get_fhid_below(f64::from(x), f64::from(y));

        if fhid > 0 {
            self.get_fh(fhid).ground_below(f64::from(x)) as i16
        } else {
            self.borders.second()
        }
    }
}
