/// Walk direction of a [`PingPong`] cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Index that walks back and forth over `0..len`
///
/// Direction flips exactly at `0` and `len - 1`, so for `len = 4` the
/// visited positions are `0, 1, 2, 3, 2, 1, 0, 1, ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PingPong {
    position: usize,
    len: usize,
    direction: Direction,
}

impl PingPong {
    /// Cursor at position 0 walking forward
    pub const fn new(len: usize) -> Self {
        Self {
            position: 0,
            len,
            direction: Direction::Forward,
        }
    }

    pub const fn position(&self) -> usize {
        self.position
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move one step, turning around at either bound
    pub fn advance(&mut self) {
        if self.len < 2 {
            self.position = 0;
            return;
        }
        match self.direction {
            Direction::Forward => {
                if self.position + 1 >= self.len {
                    self.direction = Direction::Backward;
                    self.position -= 1;
                } else {
                    self.position += 1;
                }
            }
            Direction::Backward => {
                if self.position == 0 {
                    self.direction = Direction::Forward;
                    self.position = 1;
                } else {
                    self.position -= 1;
                }
            }
        }
    }
}
