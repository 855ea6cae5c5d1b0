use glam::Mat4;

/// Maximum number of transforms the stack can hold at once.
///
/// The scene never nests deeper than two levels; 32 leaves room for
/// hand-authored hierarchies without growing the buffer per frame.
pub const MAX_DEPTH: usize = 32;

/// LIFO scratchpad for composing model-view transforms during one render pass.
///
/// Every `push` must be balanced by a `pop` before the pass ends. Overflow,
/// popping an empty stack and leaving a pass unbalanced are caller bugs and
/// panic immediately.
#[derive(Debug, Clone, Default)]
pub struct TransformStack {
    entries: Vec<Mat4>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(MAX_DEPTH),
        }
    }

    /// Save a copy of `transform`
    pub fn push(&mut self, transform: Mat4) {
        assert!(
            self.entries.len() < MAX_DEPTH,
            "transform stack overflow: depth limit is {MAX_DEPTH}"
        );
        self.entries.push(transform);
    }

    /// Remove and return the most recently pushed transform
    pub fn pop(&mut self) -> Mat4 {
        match self.entries.pop() {
            Some(transform) => transform,
            None => panic!("transform stack underflow: pop on an empty stack"),
        }
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Panics unless the stack is back at `expected` depth.
    pub fn assert_depth(&self, expected: usize) {
        assert_eq!(
            self.entries.len(),
            expected,
            "unbalanced transform stack: every push needs a matching pop"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn push_pop_is_lifo() {
        let a = Mat4::from_translation(Vec3::X);
        let b = Mat4::from_scale(Vec3::splat(2.0));
        let mut stack = TransformStack::new();

        stack.push(a);
        stack.push(b);
        assert_eq!(stack.depth(), 2);

        assert_eq!(stack.pop(), b);
        assert_eq!(stack.pop(), a);
        assert!(stack.is_empty());
    }

    #[test]
    #[should_panic(expected = "underflow")]
    fn pop_on_empty_panics() {
        let mut stack = TransformStack::new();
        stack.push(Mat4::IDENTITY);
        stack.pop();
        stack.pop();
    }

    #[test]
    #[should_panic(expected = "overflow")]
    fn push_past_capacity_panics() {
        let mut stack = TransformStack::new();
        for _ in 0..=MAX_DEPTH {
            stack.push(Mat4::IDENTITY);
        }
    }

    #[test]
    fn fills_to_capacity() {
        let mut stack = TransformStack::new();
        for i in 0..MAX_DEPTH {
            stack.push(Mat4::from_translation(Vec3::new(i as f32, 0.0, 0.0)));
        }
        assert_eq!(stack.depth(), MAX_DEPTH);
        assert_eq!(
            stack.pop(),
            Mat4::from_translation(Vec3::new((MAX_DEPTH - 1) as f32, 0.0, 0.0))
        );
    }

    #[test]
    #[should_panic(expected = "unbalanced")]
    fn assert_depth_catches_missing_pop() {
        let mut stack = TransformStack::new();
        stack.push(Mat4::IDENTITY);
        stack.assert_depth(0);
    }
}
