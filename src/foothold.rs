//! The terrain segment value type.
//!
//! A [`Foothold`] is one authored edge of walkable terrain: a flat floor, a
//! slope, or a vertical wall. Footholds on the same layer link into chains
//! through `prev`/`next` ids; id `0` is reserved for "none" and doubles as
//! the chain-end marker. All footholds are immutable once the map is built.

use crate::range::Range;

/// Sentinel returned for unknown foothold ids. Neither wall nor floor.
pub const NULL_FOOTHOLD: Foothold = Foothold::null();

/// One immutable edge of terrain with its chain links and depth layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Foothold {
    id: u16,
    prev: u16,
    next: u16,
    layer: u8,
    horizontal: Range<i16>,
    vertical: Range<i16>,
}

impl Foothold {
    /// Creates a foothold from authored endpoints and chain links.
    pub const fn new(
        id: u16,
        layer: u8,
        horizontal: Range<i16>,
        vertical: Range<i16>,
        prev: u16,
        next: u16,
    ) -> Self {
        Self {
            id,
            prev,
            next,
            layer,
            horizontal,
            vertical,
        }
    }

    /// The null sentinel: id 0, empty ranges, no neighbours.
    pub const fn null() -> Self {
        Self {
            id: 0,
            prev: 0,
            next: 0,
            layer: 0,
            horizontal: Range::new(0, 0),
            vertical: Range::new(0, 0),
        }
    }

    pub const fn id(&self) -> u16 {
        self.id
    }

    /// Id of the neighbouring foothold to the left, 0 at a chain end.
    pub const fn prev(&self) -> u16 {
        self.prev
    }

    /// Id of the neighbouring foothold to the right, 0 at a chain end.
    pub const fn next(&self) -> u16 {
        self.next
    }

    /// Depth layer separating visually overlapping but independent chains.
    pub const fn layer(&self) -> u8 {
        self.layer
    }

    pub const fn horizontal(&self) -> &Range<i16> {
        &self.horizontal
    }

    pub const fn vertical(&self) -> &Range<i16> {
        &self.vertical
    }

    /// Leftmost x.
    pub fn l(&self) -> i16 {
        self.horizontal.smaller()
    }

    /// Rightmost x.
    pub fn r(&self) -> i16 {
        self.horizontal.greater()
    }

    /// Topmost y.
    pub fn t(&self) -> i16 {
        self.vertical.smaller()
    }

    /// Bottommost y.
    pub fn b(&self) -> i16 {
        self.vertical.greater()
    }

    pub const fn x1(&self) -> i16 {
        self.horizontal.first()
    }

    pub const fn x2(&self) -> i16 {
        self.horizontal.second()
    }

    pub const fn y1(&self) -> i16 {
        self.vertical.first()
    }

    pub const fn y2(&self) -> i16 {
        self.vertical.second()
    }

    /// A wall blocks horizontally and can never be stood on.
    pub fn is_wall(&self) -> bool {
        self.id != 0 && self.horizontal.empty()
    }

    /// A floor is perfectly flat; anything else with width is a slope.
    pub fn is_floor(&self) -> bool {
        self.id != 0 && self.vertical.empty()
    }

    /// Whether this foothold ends its chain on the left.
    pub fn is_left_edge(&self) -> bool {
        self.id != 0 && self.prev == 0
    }

    /// Whether this foothold ends its chain on the right.
    pub fn is_right_edge(&self) -> bool {
        self.id != 0 && self.next == 0
    }

    /// Whether `x` lies within the horizontal span.
    pub fn hcontains(&self, x: i16) -> bool {
        self.id != 0 && self.horizontal.contains(x)
    }

    /// Whether `y` lies within the vertical span.
    pub fn vcontains(&self, y: i16) -> bool {
        self.id != 0 && self.vertical.contains(y)
    }

    /// Whether this foothold is a wall overlapping the probed band.
    pub fn is_blocking(&self, band: &Range<i16>) -> bool {
        self.is_wall() && self.vertical.overlaps(band)
    }

    /// Gradient of the edge; 0 for walls, flat floors and the null sentinel.
    pub fn slope(&self) -> f64 {
        if self.horizontal.empty() {
            0.0
        } else {
            f64::from(self.vertical.delta()) / f64::from(self.horizontal.delta())
        }
    }

    /// Height of the walkable surface at column `x`.
    ///
    /// Evaluates the edge's line equation; flat floors short-circuit to `y1`
    /// so the result is exact there regardless of `x`.
    pub fn ground_below(&self, x: f64) -> f64 {
        if self.is_floor() {
            f64::from(self.y1())
        } else {
            self.slope() * (x - f64::from(self.x1())) + f64::from(self.y1())
        }
    }
}

impl Default for Foothold {
    fn default() -> Self {
        Self::null()
    }
}
