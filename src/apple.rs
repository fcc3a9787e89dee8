use rand::Rng;

use crate::entity::{Appearance, Entity};
use crate::grid::{GridVec, Rect};

/// Upper bound on relocation attempts before giving up.
const MAX_RELOCATE_ATTEMPTS: u32 = 10_000;

/// The single food item active on the board.
///
/// Relocation avoids the walls but not the snake; an apple under the body
/// is eaten the moment the head passes over it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Apple {
    entity: Entity,
}

impl Apple {
    /// Creates an apple occupying one cell at `position`.
    #[must_use]
    pub const fn new(position: GridVec, cell_size: i32, appearance: Appearance) -> Self {
        Self {
            entity: Entity::new(position, GridVec::new(cell_size, cell_size), appearance),
        }
    }

    /// Spawns an apple on a random wall-free cell.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        cell_size: i32,
        appearance: Appearance,
        area: Rect,
        walls: &[Rect],
    ) -> Self {
        let mut apple = Self::new(GridVec::ZERO, cell_size, appearance);
        apple.relocate(rng, area, walls);
        apple
    }

    /// Moves the apple to a fresh random cell.
    ///
    /// Samples a point uniformly inside `area` (edges inclusive), snaps it
    /// down onto the cell grid, and resamples while the snapped cell touches
    /// a wall. Snapping can push an edge sample onto a wall, so the rejection
    /// step is load bearing even though `area` lies inside the walls.
    pub fn relocate<R: Rng + ?Sized>(&mut self, rng: &mut R, area: Rect, walls: &[Rect]) {
        let size = self.entity.size();

        for _ in 0..MAX_RELOCATE_ATTEMPTS {
            let sampled = GridVec::new(
                rng.gen_range(area.left()..=area.right()),
                rng.gen_range(area.top()..=area.bottom()),
            );
            let snapped = GridVec::new(sampled.x / size.x * size.x, sampled.y / size.y * size.y);

            let bounds = Rect::new(snapped, size);
            if walls.iter().all(|wall| !bounds.intersects(*wall)) {
                self.entity.move_to(snapped);
                return;
            }
        }

        panic!(
            "relocate: no wall-free cell in a {}×{} area after {} attempts",
            area.size.x, area.size.y, MAX_RELOCATE_ATTEMPTS,
        );
    }

    /// Returns the top-left position.
    #[must_use]
    pub fn position(&self) -> GridVec {
        self.entity.position()
    }

    /// Returns the occupied rectangle.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.entity.bounds()
    }

    /// Returns the underlying entity for rendering.
    #[must_use]
    pub fn entity(&self) -> Entity {
        self.entity
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::style::Color;

    use super::Apple;
    use crate::config::GameConfig;
    use crate::entity::Appearance;
    use crate::grid::GridVec;

    #[test]
    fn relocation_lands_on_wall_free_aligned_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = GameConfig::default();
        let walls = config.walls();
        let mut apple = Apple::new(GridVec::ZERO, config.cell_size, Appearance::Color(Color::Red));

        for _ in 0..100 {
            apple.relocate(&mut rng, config.playable_area(), &walls);

            let position = apple.position();
            assert!(position.is_cell_aligned(config.cell_size));
            assert!(
                walls.iter().all(|wall| !apple.bounds().intersects(*wall)),
                "apple at {position:?} touches a wall"
            );
            assert!(config.window_rect().contains(position));
        }
    }

    #[test]
    fn relocation_finds_the_only_free_cell() {
        // A 3×3-cell window leaves exactly one cell inside the walls.
        let config = GameConfig {
            window: GridVec::new(30, 30),
            ..GameConfig::default()
        };
        let walls = config.walls();
        let mut rng = StdRng::seed_from_u64(11);
        let mut apple = Apple::new(GridVec::ZERO, config.cell_size, Appearance::Color(Color::Red));

        for _ in 0..50 {
            apple.relocate(&mut rng, config.playable_area(), &walls);
            assert_eq!(apple.position(), GridVec::new(10, 10));
        }
    }

    #[test]
    fn spawned_apple_is_immediately_valid() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = GameConfig::default();
        let walls = config.walls();

        let apple = Apple::spawn(
            &mut rng,
            config.cell_size,
            Appearance::Color(Color::Red),
            config.playable_area(),
            &walls,
        );

        assert!(apple.position().is_cell_aligned(config.cell_size));
        assert!(walls.iter().all(|wall| !apple.bounds().intersects(*wall)));
    }
}
