use canvas_kinematics::config::SceneConfig;
use canvas_kinematics::core::ManualClock;
use canvas_kinematics::input::KeyBindings;
use canvas_kinematics::render::RecordingSurface;
use canvas_kinematics::scenes;
use canvas_kinematics::{RunState, Simulation};

#[test]
fn keyboard_moves_player_through_queue() {
    let clock = ManualClock::new(0.0);
    let mut scene = scenes::occupancy_demo(
        RecordingSurface::new(300.0, 150.0),
        clock.clone(),
        &SceneConfig::default(),
    )
    .unwrap();
    let bindings = KeyBindings::default();

    for key in ["ArrowRight", "ArrowRight", "ArrowDown", "Shift"] {
        if let Some(intent) = bindings.translate(key) {
            scene.scheduler.handle_intent(intent, Some(scene.player)).unwrap();
        }
    }
    // Nothing moves until the next tick.
    assert_eq!(scene.scheduler.sim().object(scene.player).unwrap().x(), 10.0);

    clock.advance_ms(5.0);
    assert!(scene.scheduler.tick().unwrap());
    let player = scene.scheduler.sim().object(scene.player).unwrap();
    assert_eq!((player.x(), player.y()), (20.0, 15.0));
    assert_eq!(scene.scheduler.sim().stats().moves_accepted(), 3);
}

#[test]
fn player_cannot_walk_into_wall_or_off_surface() {
    let mut scene = scenes::occupancy_demo(
        RecordingSurface::new(300.0, 150.0),
        ManualClock::new(0.0),
        &SceneConfig::default(),
    )
    .unwrap();
    let player = scene.player;

    // Off the top edge.
    scene.scheduler.sim_mut().move_up(player, 11.0).unwrap();
    scene.scheduler.tick().unwrap();
    assert_eq!(scene.scheduler.sim().object(player).unwrap().y(), 10.0);

    // Down to the wall's top band, then push right into it.
    scene.scheduler.sim_mut().move_down(player, 40.0).unwrap();
    scene.scheduler.sim_mut().move_right(player, 73.0).unwrap();
    scene.scheduler.tick().unwrap();
    let p = scene.scheduler.sim().object(player).unwrap();
    // y 50..69 overlaps the wall rows; x 83..98 stays flush with x = 98.
    assert_eq!((p.x(), p.y(), p.right()), (83.0, 50.0, 98.0));

    scene.scheduler.sim_mut().move_right(player, 1.0).unwrap();
    scene.scheduler.tick().unwrap();
    assert_eq!(scene.scheduler.sim().object(player).unwrap().x(), 83.0);
    assert_eq!(scene.scheduler.sim().stats().moves_rejected(), 1);
}

#[test]
fn quit_key_stops_the_loop() {
    let mut scene = scenes::occupancy_demo(
        RecordingSurface::new(300.0, 150.0),
        ManualClock::new(0.0),
        &SceneConfig::default(),
    )
    .unwrap();
    let intent = KeyBindings::default().translate("Q").unwrap();
    scene.scheduler.handle_intent(intent, Some(scene.player)).unwrap();
    assert_eq!(scene.scheduler.state(), RunState::Stopped);
    assert!(!scene.scheduler.tick().unwrap());
    assert_eq!(scene.scheduler.sim().stats().ticks(), 0);
}

#[test]
fn paused_loop_keeps_queue_until_stepped() {
    let mut scene = scenes::occupancy_demo(
        RecordingSurface::new(300.0, 150.0),
        ManualClock::new(0.0),
        &SceneConfig::default(),
    )
    .unwrap();
    scene.scheduler.pause();
    scene.scheduler.sim_mut().move_right(scene.player, 5.0).unwrap();
    let iterations = scene.scheduler.run_for(3, |_| {}).unwrap();
    assert_eq!(iterations, 3);
    assert_eq!(scene.scheduler.sim().pending_moves().len(), 1);

    scene.scheduler.step().unwrap();
    assert_eq!(scene.scheduler.sim().object(scene.player).unwrap().x(), 15.0);
    assert!(scene.scheduler.sim().pending_moves().is_empty());
}

#[test]
fn footprints_follow_registration_order() {
    let scene = scenes::occupancy_demo(
        RecordingSurface::new(300.0, 150.0),
        ManualClock::new(0.0),
        &SceneConfig::default(),
    )
    .unwrap();
    let fps = scene.scheduler.sim().footprints();
    assert_eq!(fps.len(), 3);
    assert_eq!((fps[0].x, fps[0].right, fps[0].z), (98.0, 117.0, 1));
    assert_eq!(fps[1].z, 2);
    assert_eq!((fps[2].x, fps[2].bottom), (10.0, 29.0));
}
