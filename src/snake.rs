use crate::apple::Apple;
use crate::entity::{Appearance, Entity};
use crate::grid::{GridVec, Rect};
use crate::input::Direction;

/// The player-controlled segmented body.
///
/// Segments are stored tail first: `segments[0]` is the tail tip and the
/// last element is the head. The collision window and the movement shift
/// both index against that layout.
#[derive(Debug, Clone)]
pub struct SnakeBody {
    segments: Vec<Entity>,
    head_position: GridVec,
    /// Current movement step per tick, always one cell along one axis.
    direction: GridVec,
    /// Tail position recorded before the most recent move.
    last_tail_position: GridVec,
    cell_size: i32,
    segment_appearance: Appearance,
}

impl SnakeBody {
    /// Creates a snake of `length` segments with the head at `head`,
    /// extending left and moving right.
    #[must_use]
    pub fn new(
        head: GridVec,
        cell_size: i32,
        length: usize,
        head_appearance: Appearance,
        segment_appearance: Appearance,
    ) -> Self {
        assert!(length > 0, "snake needs at least one segment");

        let mut positions = Vec::with_capacity(length);
        let mut position = head;
        for _ in 0..length {
            positions.push(position);
            position += Direction::Left.step(cell_size);
        }
        positions.reverse();

        Self::from_positions(positions, Direction::Right, cell_size, segment_appearance)
            .with_head_appearance(head_appearance)
    }

    /// Creates a snake from explicit segment positions (tail first, head last).
    #[must_use]
    pub fn from_positions(
        positions: Vec<GridVec>,
        direction: Direction,
        cell_size: i32,
        appearance: Appearance,
    ) -> Self {
        assert!(!positions.is_empty(), "snake needs at least one segment");

        let size = GridVec::new(cell_size, cell_size);
        let head_position = positions[positions.len() - 1];
        let last_tail_position = positions[0];
        let segments = positions
            .into_iter()
            .map(|position| Entity::new(position, size, appearance))
            .collect();

        Self {
            segments,
            head_position,
            direction: direction.step(cell_size),
            last_tail_position,
            cell_size,
            segment_appearance: appearance,
        }
    }

    fn with_head_appearance(mut self, appearance: Appearance) -> Self {
        if let Some(head) = self.segments.last_mut() {
            head.set_appearance(appearance);
        }
        self
    }

    /// Advances the body one step in the current direction.
    ///
    /// Every segment takes the position of its neighbor toward the head;
    /// the pre-move tail position is kept for [`Self::grow`].
    pub fn move_forward(&mut self) {
        self.last_tail_position = self.tail().position();
        self.head_position += self.direction;

        let last = self.segments.len() - 1;
        for i in 0..last {
            let ahead = self.segments[i + 1].position();
            self.segments[i].move_to(ahead);
        }
        self.segments[last].move_to(self.head_position);
    }

    /// Appends one segment at the position the tail vacated this tick.
    ///
    /// Must be called in the same tick as the eat that triggered it, before
    /// the next move.
    pub fn grow(&mut self) {
        let size = GridVec::new(self.cell_size, self.cell_size);
        let segment = Entity::new(self.last_tail_position, size, self.segment_appearance);
        self.segments.insert(0, segment);
    }

    /// Steers the snake, ignoring exact reversals of the current direction.
    pub fn change_direction(&mut self, requested: Direction) {
        let step = requested.step(self.cell_size);
        if step != -self.direction {
            self.direction = step;
        }
    }

    /// Returns true when the head hits the body or a wall.
    ///
    /// The self-hit scan skips the last two segments: the head itself and
    /// its trailing neighbor. Wall hits use rectangle intersection.
    #[must_use]
    pub fn check_collision(&self, walls: &[Rect]) -> bool {
        let cutoff = self.segments.len().saturating_sub(2);
        let self_hit = self.segments[..cutoff]
            .iter()
            .any(|segment| segment.position() == self.head_position);
        if self_hit {
            return true;
        }

        let head_bounds = self.head_bounds();
        walls.iter().any(|wall| head_bounds.intersects(*wall))
    }

    /// Returns true when the head overlaps the apple.
    #[must_use]
    pub fn check_eat(&self, apple: &Apple) -> bool {
        self.head_bounds().intersects(apple.bounds())
    }

    /// Returns the head position.
    #[must_use]
    pub fn head_position(&self) -> GridVec {
        self.head_position
    }

    /// Returns the current movement step.
    #[must_use]
    pub fn direction(&self) -> GridVec {
        self.direction
    }

    /// Returns the tail position vacated by the most recent move.
    #[must_use]
    pub fn last_tail_position(&self) -> GridVec {
        self.last_tail_position
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over segments from tail to head.
    pub fn segments(&self) -> impl Iterator<Item = &Entity> {
        self.segments.iter()
    }

    fn tail(&self) -> &Entity {
        self.segments
            .first()
            .expect("snake body always contains at least one segment")
    }

    fn head_bounds(&self) -> Rect {
        Rect::new(
            self.head_position,
            GridVec::new(self.cell_size, self.cell_size),
        )
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::SnakeBody;
    use crate::apple::Apple;
    use crate::entity::Appearance;
    use crate::grid::{GridVec, Rect};
    use crate::input::Direction;

    const CELL: i32 = 10;

    fn green() -> Appearance {
        Appearance::Color(Color::Green)
    }

    fn snake_at(head: GridVec) -> SnakeBody {
        SnakeBody::new(head, CELL, 5, Appearance::Color(Color::Yellow), green())
    }

    fn positions(snake: &SnakeBody) -> Vec<GridVec> {
        snake.segments().map(|segment| segment.position()).collect()
    }

    #[test]
    fn new_snake_extends_left_of_the_head() {
        let snake = snake_at(GridVec::new(100, 50));

        assert_eq!(
            positions(&snake),
            vec![
                GridVec::new(60, 50),
                GridVec::new(70, 50),
                GridVec::new(80, 50),
                GridVec::new(90, 50),
                GridVec::new(100, 50),
            ]
        );
        assert_eq!(snake.head_position(), GridVec::new(100, 50));
        assert_eq!(snake.direction(), Direction::Right.step(CELL));
    }

    #[test]
    fn move_forward_shifts_every_segment_once() {
        let mut snake = snake_at(GridVec::new(100, 50));

        snake.move_forward();

        assert_eq!(
            positions(&snake),
            vec![
                GridVec::new(70, 50),
                GridVec::new(80, 50),
                GridVec::new(90, 50),
                GridVec::new(100, 50),
                GridVec::new(110, 50),
            ]
        );
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.last_tail_position(), GridVec::new(60, 50));
    }

    #[test]
    fn grow_reoccupies_the_vacated_tail_cell() {
        let mut snake = snake_at(GridVec::new(100, 50));

        snake.move_forward();
        snake.grow();

        assert_eq!(snake.len(), 6);
        assert_eq!(
            snake.segments().next().map(|segment| segment.position()),
            Some(GridVec::new(60, 50))
        );
    }

    #[test]
    fn reversal_is_ignored() {
        let mut snake = snake_at(GridVec::new(100, 50));

        snake.change_direction(Direction::Left);
        snake.move_forward();

        assert_eq!(snake.head_position(), GridVec::new(110, 50));
    }

    #[test]
    fn repeated_direction_change_is_idempotent() {
        let mut snake = snake_at(GridVec::new(100, 50));

        snake.change_direction(Direction::Up);
        snake.change_direction(Direction::Up);
        snake.move_forward();

        assert_eq!(snake.head_position(), GridVec::new(100, 40));
    }

    #[test]
    fn two_turns_in_one_tick_apply_in_order() {
        let mut snake = snake_at(GridVec::new(100, 50));

        // Up then Left: the second turn is legal against the first, so the
        // snake ends up moving opposite where it started the tick.
        snake.change_direction(Direction::Up);
        snake.change_direction(Direction::Left);
        snake.move_forward();

        assert_eq!(snake.head_position(), GridVec::new(90, 50));
    }

    #[test]
    fn u_turn_into_the_body_collides() {
        // U-shaped body, head at (110, 60) about to move up into (110, 50).
        let mut snake = SnakeBody::from_positions(
            vec![
                GridVec::new(100, 50),
                GridVec::new(110, 50),
                GridVec::new(120, 50),
                GridVec::new(120, 60),
                GridVec::new(110, 60),
            ],
            Direction::Up,
            CELL,
            green(),
        );

        snake.move_forward();

        assert_eq!(snake.head_position(), GridVec::new(110, 50));
        assert!(snake.check_collision(&[]));
    }

    #[test]
    fn head_and_trailing_neighbor_are_tolerated() {
        // The last two segments share the head cell; the scan must skip them.
        let snake = SnakeBody::from_positions(
            vec![
                GridVec::new(100, 50),
                GridVec::new(110, 50),
                GridVec::new(110, 50),
            ],
            Direction::Right,
            CELL,
            green(),
        );

        assert!(!snake.check_collision(&[]));
    }

    #[test]
    fn wall_hit_uses_rectangle_intersection() {
        let walls = [Rect::from_coords(710, 0, 10, 480)];
        let mut snake = snake_at(GridVec::new(700, 50));

        assert!(!snake.check_collision(&walls));

        snake.move_forward();

        assert_eq!(snake.head_position(), GridVec::new(710, 50));
        assert!(snake.check_collision(&walls));
    }

    #[test]
    fn collision_check_is_repeatable() {
        let walls = [Rect::from_coords(0, 0, 720, 10)];
        let snake = snake_at(GridVec::new(100, 50));

        assert!(!snake.check_collision(&walls));
        assert!(!snake.check_collision(&walls));
    }

    #[test]
    fn eat_requires_cell_overlap() {
        let snake = snake_at(GridVec::new(100, 50));
        let on_head = Apple::new(GridVec::new(100, 50), CELL, green());
        let adjacent = Apple::new(GridVec::new(110, 50), CELL, green());

        assert!(snake.check_eat(&on_head));
        assert!(!snake.check_eat(&adjacent));
    }
}
