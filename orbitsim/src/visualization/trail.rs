use std::collections::VecDeque;

/// One display-space sample of a body's past position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub body: usize,
    pub position: [f64; 2],
}

/// Bounded rendering trail; once full, the oldest samples are dropped.
///
/// Purely cosmetic, independent of the runner's sampled [`History`].
///
/// [`History`]: crate::simulation::runner::History
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<TrailPoint>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, body: usize, position: [f64; 2]) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(TrailPoint { body, position });
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_oldest_when_full() {
        let mut trail = Trail::new(3);
        for i in 0..5 {
            trail.push(i, [i as f64, 0.0]);
        }
        assert_eq!(trail.len(), 3);
        let bodies: Vec<_> = trail.iter().map(|p| p.body).collect();
        assert_eq!(bodies, [2, 3, 4]);
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut trail = Trail::new(0);
        trail.push(0, [1.0, 1.0]);
        assert!(trail.is_empty());
    }
}
