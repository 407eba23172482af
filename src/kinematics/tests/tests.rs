use approx::assert_abs_diff_eq;

use super::*;
use crate::core::{Colors, Direction, ManualClock, Vector};
use crate::render::{DrawOp, RecordingSurface};

fn coordinator() -> ForceCoordinator<RecordingSurface, ManualClock> {
    ForceCoordinator::with_clock(RecordingSurface::new(300.0, 150.0), ManualClock::new(0.0))
}

fn shape(w: f64, h: f64) -> crate::core::RenderShape {
    crate::core::RenderShape::new(w, h, 1, Colors::new("gold", "black"))
}

#[test]
fn origin_is_surface_center() {
    let c = coordinator();
    assert_eq!(c.origin(), Point::new(150.0, 75.0, 0));
}

#[test]
fn forces_become_acceleration_without_mass() {
    let mut c = coordinator();
    let obj = PhysicsObject::new(shape(8.0, 16.0), 10.0, Behavior::Inert)
        .with_force(Vector::toward(Direction::E, 3.0))
        .with_force(Vector::toward(Direction::N, 4.0));
    let id = c.add_object(obj);

    c.step(2.0).unwrap();
    let o = c.object(id).unwrap();
    assert_abs_diff_eq!(o.acceleration.x(), 3.0, epsilon = 1e-9);
    assert_abs_diff_eq!(o.acceleration.y(), 4.0, epsilon = 1e-9);
    assert_abs_diff_eq!(o.velocity.x(), 6.0, epsilon = 1e-9);
    assert_abs_diff_eq!(o.velocity.y(), 8.0, epsilon = 1e-9);
    assert_abs_diff_eq!(o.position.x(), 12.0, epsilon = 1e-9);
    assert_abs_diff_eq!(o.position.y(), 16.0, epsilon = 1e-9);
}

#[test]
fn render_clears_then_paints_at_mapped_position() {
    let mut c = coordinator();
    let obj = PhysicsObject::new(shape(8.0, 16.0), 10.0, Behavior::Inert)
        .with_velocity(Vector::from_components(12.0, 16.0));
    c.add_object(obj);
    c.step(1.0).unwrap();

    let ops = c.surface().ops();
    assert_eq!(ops.len(), 2);
    assert!(matches!(ops[0], DrawOp::Clear { .. }));
    match &ops[1] {
        DrawOp::Fill { x, y, style, .. } => {
            assert_abs_diff_eq!(*x, 162.0, epsilon = 1e-9);
            assert_abs_diff_eq!(*y, 59.0, epsilon = 1e-9);
            assert_eq!(style, "gold");
        }
        other => panic!("expected fill, got {other:?}"),
    }

    c.surface_mut().clear_ops();
    c.step(0.0).unwrap();
    match &c.surface().ops()[0] {
        DrawOp::Clear { x, y, width, height } => {
            assert_abs_diff_eq!(*x, 161.0, epsilon = 1e-9);
            assert_abs_diff_eq!(*y, 58.0, epsilon = 1e-9);
            assert_eq!((*width, *height), (10.0, 18.0));
        }
        other => panic!("expected clear, got {other:?}"),
    }
}

#[test]
fn update_measures_elapsed_wall_time() {
    let clock = ManualClock::new(10_000.0);
    let mut c = ForceCoordinator::with_clock(RecordingSurface::new(300.0, 150.0), clock.clone());
    let id = c.add_object(
        PhysicsObject::new(shape(4.0, 4.0), 1.0, Behavior::Inert)
            .with_velocity(Vector::toward(Direction::E, 10.0)),
    );

    clock.advance_ms(50.0);
    c.update().unwrap();
    assert_abs_diff_eq!(c.stats().last_interval_s(), 0.05, epsilon = 1e-12);
    assert_abs_diff_eq!(c.object(id).unwrap().position.x(), 0.5, epsilon = 1e-9);

    clock.advance_ms(200.0);
    c.update().unwrap();
    assert_abs_diff_eq!(c.stats().last_interval_s(), 0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(c.object(id).unwrap().position.x(), 2.5, epsilon = 1e-9);
    assert_eq!(c.stats().ticks(), 2);
}

#[test]
fn objects_update_in_registration_order() {
    let mut c = coordinator();
    c.add_object(PhysicsObject::new(shape(1.0, 1.0), 1.0, Behavior::Inert).with_position(Vector::from_components(-10.0, 0.0)));
    c.add_object(PhysicsObject::new(shape(1.0, 1.0), 1.0, Behavior::Inert).with_position(Vector::from_components(10.0, 0.0)));
    c.step(0.0).unwrap();

    let fills: Vec<f64> = c
        .surface()
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Fill { x, .. } => Some(*x),
            _ => None,
        })
        .collect();
    assert_eq!(fills.len(), 2);
    assert_abs_diff_eq!(fills[0], 140.0, epsilon = 1e-9);
    assert_abs_diff_eq!(fills[1], 160.0, epsilon = 1e-9);
}

#[test]
fn standalone_object_is_not_loaded() {
    let mut obj = PhysicsObject::new(shape(1.0, 1.0), 1.0, Behavior::Inert);
    let mut surface = RecordingSurface::new(10.0, 10.0);
    assert!(matches!(obj.update(0.1, &mut surface), Err(SimError::NotLoaded)));
    assert!(surface.ops().is_empty());
    assert!(obj.geometry().is_none());
}

#[test]
fn bouncer_bounds_come_from_surface_at_load() {
    let mut c = coordinator();
    let id = c.add_object(PhysicsObject::new(shape(15.0, 10.0), 10.0, Behavior::bouncer()));
    match &c.object(id).unwrap().behavior {
        Behavior::Bouncer { bounds } => {
            assert_eq!(*bounds, BounceBounds { top: 75.0, bottom: -65.0, left: -150.0, right: 135.0 });
        }
        other => panic!("unexpected behavior {other:?}"),
    }
}

#[test]
fn bouncer_reflects_past_bounds() {
    let mut c = coordinator();
    let past_right = PhysicsObject::new(shape(15.0, 10.0), 10.0, Behavior::bouncer())
        .with_position(Vector::from_components(140.0, 0.0))
        .with_velocity(Vector::from_components(10.0, 5.0));
    let past_top = PhysicsObject::new(shape(15.0, 10.0), 10.0, Behavior::bouncer())
        .with_position(Vector::from_components(0.0, 80.0))
        .with_velocity(Vector::from_components(10.0, 5.0));
    let inside = PhysicsObject::new(shape(15.0, 10.0), 10.0, Behavior::bouncer())
        .with_velocity(Vector::from_components(10.0, 5.0));
    let a = c.add_object(past_right);
    let b = c.add_object(past_top);
    let d = c.add_object(inside);

    c.step(0.0).unwrap();

    let va = c.object(a).unwrap().velocity;
    assert_abs_diff_eq!(va.x(), -10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(va.y(), 5.0, epsilon = 1e-9);
    let vb = c.object(b).unwrap().velocity;
    assert_abs_diff_eq!(vb.x(), 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(vb.y(), -5.0, epsilon = 1e-9);
    let vd = c.object(d).unwrap().velocity;
    assert_abs_diff_eq!(vd.x(), 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(vd.y(), 5.0, epsilon = 1e-9);
}

#[test]
fn slider_turns_west_after_crossing_right_limit() {
    let mut c = coordinator();
    let id = c.add_object(
        PhysicsObject::new(shape(8.0, 16.0), 10.0, Behavior::slider())
            .with_velocity(Vector::toward(Direction::E, 1.0)),
    );

    c.step(25.0).unwrap();
    let o = c.object(id).unwrap();
    assert_abs_diff_eq!(o.position.x(), 25.0, epsilon = 1e-9);
    assert_abs_diff_eq!(o.velocity.x(), 1.0, epsilon = 1e-12);

    c.step(1.0).unwrap();
    let o = c.object(id).unwrap();
    assert_abs_diff_eq!(o.velocity.angle(), std::f64::consts::PI, epsilon = 1e-12);
    assert_abs_diff_eq!(o.velocity.magnitude(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(o.position.x(), 24.0, epsilon = 1e-9);
}

#[test]
fn slider_holds_velocity_inside_limits_and_turns_back_east() {
    let mut c = coordinator();
    let id = c.add_object(
        PhysicsObject::new(shape(8.0, 16.0), 10.0, Behavior::slider())
            .with_velocity(Vector::toward(Direction::E, 1.0)),
    );
    for _ in 0..20 {
        c.step(1.0).unwrap();
    }
    // Exactly on the limit is not past it.
    assert_abs_diff_eq!(c.object(id).unwrap().position.x(), 20.0, epsilon = 1e-9);
    c.step(1.0).unwrap();
    assert!(c.object(id).unwrap().velocity.x() > 0.0);
    c.step(1.0).unwrap();
    assert!(c.object(id).unwrap().velocity.x() < 0.0);

    c.object_mut(id).unwrap().position = Vector::from_components(-21.0, 0.0);
    c.step(1.0).unwrap();
    assert_abs_diff_eq!(c.object(id).unwrap().velocity.x(), 1.0, epsilon = 1e-12);
}

#[test]
fn centering_pulls_toward_middle() {
    let mut c = coordinator();
    let id = c.add_object(
        PhysicsObject::new(shape(8.0, 16.0), 10.0, Behavior::centering())
            .with_position(Vector::from_components(0.0, 30.0)),
    );
    c.step(0.0).unwrap();
    let o = c.object(id).unwrap();
    assert_abs_diff_eq!(o.acceleration.y(), -95.0, epsilon = 1e-9);
    assert_eq!(o.behavior, Behavior::Centering { pull: 95.0, band: 4.0, increment: 5.0 });

    c.object_mut(id).unwrap().position = Vector::from_components(0.0, -10.0);
    c.step(0.0).unwrap();
    assert_abs_diff_eq!(c.object(id).unwrap().acceleration.y(), 95.0, epsilon = 1e-9);
}

#[test]
fn centering_pull_grows_inside_band() {
    let mut c = coordinator();
    let id = c.add_object(
        PhysicsObject::new(shape(8.0, 16.0), 10.0, Behavior::centering())
            .with_position(Vector::from_components(0.0, 2.0)),
    );
    c.step(0.0).unwrap();
    let o = c.object(id).unwrap();
    assert_abs_diff_eq!(o.acceleration.y(), -95.0, epsilon = 1e-9);
    assert!(matches!(o.behavior, Behavior::Centering { pull, .. } if pull == 100.0));

    c.step(0.0).unwrap();
    let o = c.object(id).unwrap();
    assert_abs_diff_eq!(o.acceleration.y(), -100.0, epsilon = 1e-9);
    assert!(matches!(o.behavior, Behavior::Centering { pull, .. } if pull == 105.0));
}

#[test]
fn snapshot_carries_all_vectors() {
    let mut c = coordinator();
    c.add_object(PhysicsObject::new(shape(8.0, 16.0), 10.0, Behavior::slider()));
    let snap = c.snapshot();
    assert_eq!(snap[0].kind, "slider");
    assert_eq!(snap[0].mass, Some(10.0));
    assert!(snap[0].velocity.is_some());
    let json = crate::snapshot::to_json(&snap).unwrap();
    assert!(json.contains("\"kind\":\"slider\""));
}

#[test]
fn advance_integrates_without_painting() {
    use crate::simulation::{SimulatedObject, Tick};

    let mut c = coordinator();
    let id = c.add_object(
        PhysicsObject::new(shape(4.0, 4.0), 1.0, Behavior::Inert)
            .with_velocity(Vector::toward(Direction::N, 10.0)),
    );
    let mut obj = c.object(id).unwrap().clone();
    obj.advance(Tick { now_ms: 0.0, interval: 0.5 });
    assert_abs_diff_eq!(obj.position.y(), 5.0, epsilon = 1e-9);
    let fp = obj.current_footprint();
    assert_abs_diff_eq!(fp.y, 70.0, epsilon = 1e-9);
    assert_abs_diff_eq!(fp.x, 150.0, epsilon = 1e-9);
    assert!(c.surface().ops().is_empty());
}
