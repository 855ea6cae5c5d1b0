use dice_scene::math::{TransformStack, MAX_DEPTH};
use glam::{Mat4, Vec3};

#[cfg(test)]
mod transform_stack_tests {
    use super::*;

    fn translate(x: f32) -> Mat4 {
        Mat4::from_translation(Vec3::new(x, 0.0, 0.0))
    }

    #[test]
    fn test_pop_returns_pushed_transforms_in_reverse() {
        let mut stack = TransformStack::new();
        stack.push(translate(1.0));
        stack.push(translate(2.0));
        stack.push(translate(3.0));

        assert_eq!(stack.depth(), 3);
        assert_eq!(stack.pop(), translate(3.0));
        assert_eq!(stack.pop(), translate(2.0));
        assert_eq!(stack.pop(), translate(1.0));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_push_stores_a_copy() {
        let mut stack = TransformStack::new();
        let mut current = translate(1.0);
        stack.push(current);
        current *= translate(5.0);

        assert_eq!(stack.pop(), translate(1.0));
        assert_eq!(current, translate(6.0));
    }

    #[test]
    fn test_fill_to_max_depth() {
        let mut stack = TransformStack::new();
        for i in 0..MAX_DEPTH {
            stack.push(translate(i as f32));
        }
        assert_eq!(stack.depth(), MAX_DEPTH);
        stack.assert_depth(MAX_DEPTH);
    }

    #[test]
    #[should_panic(expected = "overflow")]
    fn test_push_past_max_depth_panics() {
        let mut stack = TransformStack::new();
        for _ in 0..=MAX_DEPTH {
            stack.push(Mat4::IDENTITY);
        }
    }

    #[test]
    #[should_panic(expected = "underflow")]
    fn test_pop_on_empty_panics() {
        let mut stack = TransformStack::new();
        stack.pop();
    }

    #[test]
    #[should_panic(expected = "unbalanced")]
    fn test_unbalanced_pass_is_detected() {
        let mut stack = TransformStack::new();
        stack.push(Mat4::IDENTITY);
        stack.assert_depth(0);
    }
}
