use criterion::{black_box, criterion_group, criterion_main, Criterion};

use flycam::{
    Button, CameraState, ControllerConfig, FlyController, InputSource, ModelTransform,
};

struct FixedInput {
    pressed: Vec<Button>,
    cursor: Option<(f32, f32)>,
}

impl InputSource for FixedInput {
    fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    fn cursor_position(&self) -> Option<(f32, f32)> {
        self.cursor
    }
}

/// Benchmark: idle frame (no keys, no cursor movement)
fn bench_update_idle(c: &mut Criterion) {
    let mut controller = FlyController::new(ControllerConfig::default());
    let mut camera = CameraState::new();
    let mut model = ModelTransform::new();
    let input = FixedInput {
        pressed: vec![],
        cursor: Some((400.0, 300.0)),
    };

    c.bench_function("update_idle", |b| {
        b.iter(|| {
            black_box(controller.update(
                black_box(&input),
                black_box(0.016),
                &mut camera,
                &mut model,
            ))
        })
    });
}

/// Benchmark: free-camera frame with several movement keys held
fn bench_update_free_camera(c: &mut Criterion) {
    let mut controller = FlyController::new(ControllerConfig::default());
    let mut camera = CameraState::new();
    let mut model = ModelTransform::new();
    let input = FixedInput {
        pressed: vec![Button::KeyW, Button::KeyD, Button::Space],
        cursor: Some((400.0, 300.0)),
    };

    c.bench_function("update_free_camera", |b| {
        b.iter(|| {
            black_box(controller.update(
                black_box(&input),
                black_box(0.016),
                &mut camera,
                &mut model,
            ))
        })
    });
}

/// Benchmark: object-transform frame with translate + rotate + scale held
fn bench_update_object_transform(c: &mut Criterion) {
    let mut controller = FlyController::new(ControllerConfig::default());
    let mut camera = CameraState::new();
    let mut model = ModelTransform::new();
    let input = FixedInput {
        pressed: vec![
            Button::MouseRight,
            Button::KeyW,
            Button::KeyQ,
            Button::KeyR,
        ],
        cursor: Some((400.0, 300.0)),
    };

    c.bench_function("update_object_transform", |b| {
        b.iter(|| {
            black_box(controller.update(
                black_box(&input),
                black_box(0.016),
                &mut camera,
                &mut model,
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_update_idle,
    bench_update_free_camera,
    bench_update_object_transform
);
criterion_main!(benches);
