use std::ops::{Add, AddAssign, Mul, Neg};

/// Position or displacement in logical pixels.
///
/// Gameplay coordinates are kept as multiples of the configured cell size;
/// alignment is a caller invariant established by configuration validation.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct GridVec {
    pub x: i32,
    pub y: i32,
}

impl GridVec {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when both coordinates are multiples of `cell_size`.
    #[must_use]
    pub fn is_cell_aligned(self, cell_size: i32) -> bool {
        cell_size > 0 && self.x % cell_size == 0 && self.y % cell_size == 0
    }
}

impl Add for GridVec {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for GridVec {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Mul<i32> for GridVec {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for GridVec {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// Axis-aligned rectangle in logical pixels, half-open on right and bottom.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Rect {
    pub pos: GridVec,
    pub size: GridVec,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(pos: GridVec, size: GridVec) -> Self {
        Self { pos, size }
    }

    /// Creates a rectangle from raw coordinates.
    #[must_use]
    pub const fn from_coords(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: GridVec::new(x, y),
            size: GridVec::new(width, height),
        }
    }

    #[must_use]
    pub const fn left(self) -> i32 {
        self.pos.x
    }

    #[must_use]
    pub const fn top(self) -> i32 {
        self.pos.y
    }

    #[must_use]
    pub const fn right(self) -> i32 {
        self.pos.x + self.size.x
    }

    #[must_use]
    pub const fn bottom(self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Returns true when the rectangles overlap by at least one pixel.
    ///
    /// Rectangles that only touch along an edge do not intersect. Wall and
    /// eat checks rely on this.
    #[must_use]
    pub fn intersects(self, other: Self) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Returns this rectangle shrunk by `amount` pixels per axis, keeping the center.
    #[must_use]
    pub fn deflated(self, amount: i32) -> Self {
        Self {
            pos: GridVec::new(self.pos.x + amount / 2, self.pos.y + amount / 2),
            size: GridVec::new(self.size.x - amount, self.size.y - amount),
        }
    }

    /// Returns true when `point` lies inside the rectangle.
    #[must_use]
    pub fn contains(self, point: GridVec) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}
