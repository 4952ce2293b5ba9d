/// Index into a fixed list that advances one step per tick and wraps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rotation {
    index: usize,
    len: usize,
    active: bool,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len, active: true }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves to the next item. Returns `None` once released or when there
    /// is nothing to rotate through.
    pub fn tick(&mut self) -> Option<usize> {
        if !self.active || self.len == 0 {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }

    pub fn release(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_after_a_full_cycle() {
        let mut rotation = Rotation::new(3);
        assert_eq!(rotation.index(), 0);
        let seen: Vec<_> = (0..3).filter_map(|_| rotation.tick()).collect();
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[test]
    fn every_step_is_successor_mod_len() {
        let mut rotation = Rotation::new(3);
        for _ in 0..10 {
            let before = rotation.index();
            assert_eq!(rotation.tick(), Some((before + 1) % 3));
        }
    }

    #[test]
    fn released_rotation_stops_updating() {
        let mut rotation = Rotation::new(3);
        rotation.tick();
        rotation.release();
        assert_eq!(rotation.tick(), None);
        assert_eq!(rotation.index(), 1);
    }

    #[test]
    fn empty_and_single_lists() {
        assert_eq!(Rotation::new(0).tick(), None);
        let mut single = Rotation::new(1);
        assert_eq!(single.tick(), Some(0));
    }
}
