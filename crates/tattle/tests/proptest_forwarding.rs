//! Property tests for argument forwarding.
//!
//! Whatever values reach a macro must reach the engine unchanged (when the
//! gate is open) or not at all (when it is closed).

mod common;

use common::{Call, RecordingEngine};
use proptest::prelude::*;
use tattle::gate::Operation;
use tattle::{Color, Context, Vec3};

/// Finite coordinates, mapped from an integer range so comparisons stay exact.
fn finite_f32() -> impl Strategy<Value = f32> {
    (-100_000i32..100_000i32).prop_map(|v| v as f32 * 0.01)
}

fn vec3_strategy() -> impl Strategy<Value = Vec3> {
    (finite_f32(), finite_f32(), finite_f32()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn color_strategy() -> impl Strategy<Value = Color> {
    (0u8..=255, 0u8..=255, 0u8..=255, 0u8..=255).prop_map(|(r, g, b, a)| {
        Color::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn draw_line_forwards_arguments_in_order(
        start in vec3_strategy(),
        end in vec3_strategy(),
        color in color_strategy(),
        duration in 0u16..600,
        depth_test in any::<bool>(),
    ) {
        let engine = RecordingEngine::new();
        let duration = f32::from(duration) * 0.1;
        tattle::draw_line!(engine: &engine, start, end, color, duration, depth_test);

        let expected: Vec<Call> = if Operation::DrawLine.is_enabled() {
            vec![Call::DrawLine { start, end, color, duration, depth_test }]
        } else {
            Vec::new()
        };
        prop_assert_eq!(engine.calls(), expected);
    }

    #[test]
    fn draw_ray_forwards_arguments_in_order(
        start in vec3_strategy(),
        dir in vec3_strategy(),
        color in color_strategy(),
    ) {
        let engine = RecordingEngine::new();
        tattle::draw_ray!(engine: &engine, start, dir, color);

        let expected: Vec<Call> = if Operation::DrawRay.is_enabled() {
            vec![Call::DrawRay { start, dir, color, duration: 0.0, depth_test: true }]
        } else {
            Vec::new()
        };
        prop_assert_eq!(engine.calls(), expected);
    }

    #[test]
    fn log_forwards_message_and_context(
        message in "[a-zA-Z0-9 _.:-]{0,64}",
        id in any::<u64>(),
        name in "[a-z_]{1,16}",
    ) {
        let engine = RecordingEngine::new();
        let context = Context::new(id, name);
        tattle::log_error!(engine: &engine, context: &context, message);

        let expected: Vec<Call> = if Operation::LogError.is_enabled() {
            vec![Call::message("log_error", &message, Some(&context))]
        } else {
            Vec::new()
        };
        prop_assert_eq!(engine.calls(), expected);
    }

    #[test]
    fn assert_forwards_condition_unchanged(condition in any::<bool>()) {
        let engine = RecordingEngine::new();
        tattle::assert_that!(engine: &engine, condition);

        let expected: Vec<Call> = if Operation::Assert.is_enabled() {
            vec![Call::Assert { condition, message: None, context: None }]
        } else {
            Vec::new()
        };
        prop_assert_eq!(engine.calls(), expected);
    }
}
