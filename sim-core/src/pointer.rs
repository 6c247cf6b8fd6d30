use glam::Vec2;

/// Last known pointer position and the radius it repels particles within.
///
/// The position is `None` until the first pointer event and again after
/// the pointer leaves the surface, so "no pointer" can never be mistaken for
/// a pointer resting at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pos: Option<Vec2>,
    pub influence_radius: f32,
}

impl PointerState {
    pub fn new(influence_radius: f32) -> Self {
        Self {
            pos: None,
            influence_radius,
        }
    }

    pub fn move_to(&mut self, pos: Vec2) {
        self.pos = Some(pos);
    }

    pub fn leave(&mut self) {
        self.pos = None;
    }

    pub fn position(&self) -> Option<Vec2> {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_absent_not_at_origin() {
        let pointer = PointerState::new(100.0);
        assert_eq!(pointer.position(), None);
    }

    #[test]
    fn tracks_moves_and_leave() {
        let mut pointer = PointerState::new(100.0);

        pointer.move_to(Vec2::ZERO);
        assert_eq!(pointer.position(), Some(Vec2::ZERO));

        pointer.move_to(Vec2::new(4.0, 5.0));
        assert_eq!(pointer.position(), Some(Vec2::new(4.0, 5.0)));

        pointer.leave();
        assert_eq!(pointer.position(), None);
    }
}
