use ratatui::style::Color;

use crate::grid::{GridVec, Rect};

/// A themed glyph drawn once per covered cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Sprite {
    pub glyph: &'static str,
    pub color: Color,
}

/// How an entity is painted.
///
/// An entity is either a solid color fill or a sprite, never both.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Appearance {
    Color(Color),
    Sprite(Sprite),
}

/// A positioned rectangular object on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Entity {
    position: GridVec,
    size: GridVec,
    appearance: Appearance,
}

impl Entity {
    /// Creates an entity at `position` with the given size and appearance.
    #[must_use]
    pub const fn new(position: GridVec, size: GridVec, appearance: Appearance) -> Self {
        Self {
            position,
            size,
            appearance,
        }
    }

    /// Returns the top-left position.
    #[must_use]
    pub const fn position(self) -> GridVec {
        self.position
    }

    /// Returns the entity size.
    #[must_use]
    pub const fn size(self) -> GridVec {
        self.size
    }

    /// Returns the occupied rectangle.
    #[must_use]
    pub const fn bounds(self) -> Rect {
        Rect::new(self.position, self.size)
    }

    /// Returns the current appearance.
    #[must_use]
    pub const fn appearance(self) -> Appearance {
        self.appearance
    }

    /// Moves the entity to `position`. The position is not validated.
    pub fn move_to(&mut self, position: GridVec) {
        self.position = position;
    }

    /// Replaces the appearance.
    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::{Appearance, Entity, Sprite};
    use crate::grid::{GridVec, Rect};

    #[test]
    fn bounds_follow_the_position() {
        let mut entity = Entity::new(
            GridVec::new(100, 50),
            GridVec::new(10, 10),
            Appearance::Color(Color::Green),
        );
        assert_eq!(entity.bounds(), Rect::from_coords(100, 50, 10, 10));

        entity.move_to(GridVec::new(110, 50));
        assert_eq!(entity.bounds(), Rect::from_coords(110, 50, 10, 10));
    }

    #[test]
    fn move_to_accepts_any_position() {
        let mut entity = Entity::new(
            GridVec::ZERO,
            GridVec::new(10, 10),
            Appearance::Color(Color::Green),
        );

        entity.move_to(GridVec::new(-30, 9999));

        assert_eq!(entity.position(), GridVec::new(-30, 9999));
    }

    #[test]
    fn appearance_swaps_between_color_and_sprite() {
        let sprite = Sprite {
            glyph: "●",
            color: Color::Red,
        };
        let mut entity = Entity::new(
            GridVec::ZERO,
            GridVec::new(10, 10),
            Appearance::Color(Color::Yellow),
        );

        entity.set_appearance(Appearance::Sprite(sprite));

        assert_eq!(entity.appearance(), Appearance::Sprite(sprite));
    }
}
