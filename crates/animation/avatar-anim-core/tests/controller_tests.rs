use avatar_anim_core::{
    ActionOutcome, AvatarAnimationController, ClipMarker, ControllerConfig, ControllerError,
    Layer, ParamValue, StateId,
};
use avatar_anim_core::{params, states};
use avatar_test_fixtures::{clip, locomotion_bundle, RecordingAnimator};

fn attached() -> AvatarAnimationController<RecordingAnimator> {
    let mut controller =
        AvatarAnimationController::new(ControllerConfig::default(), locomotion_bundle());
    controller.attach(RecordingAnimator::new()).unwrap();
    controller
}

/// it should reject every action with NotReady until an animator is attached
#[test]
fn actions_are_not_ready_before_attach() {
    let mut controller: AvatarAnimationController<RecordingAnimator> =
        AvatarAnimationController::new(ControllerConfig::default(), locomotion_bundle());
    assert!(!controller.is_ready());
    assert_eq!(controller.jump(true), ActionOutcome::NotReady);
    assert_eq!(controller.land_on_feet(true), ActionOutcome::NotReady);
    assert_eq!(controller.equip(), ActionOutcome::NotReady);
    assert_eq!(controller.use_clip(&clip("lever_pull", 1.0)), ActionOutcome::NotReady);
}

#[test]
fn attach_is_exclusive_and_detach_returns_the_animator() {
    let mut controller = attached();
    assert_eq!(
        controller.attach(RecordingAnimator::new()),
        Err(ControllerError::AlreadyAttached)
    );
    let animator = controller.detach().unwrap();
    // The base locomotion set was pushed at attach time.
    assert_eq!(animator.binds.len(), 4);
    assert!(!controller.is_ready());
    assert!(matches!(controller.detach(), Err(ControllerError::NotAttached)));
}

/// it should play the stationary idle jump when carrying speed without a
/// commitment to move
#[test]
fn jump_with_residual_speed_is_an_idle_jump() {
    let mut controller = attached();
    controller.set_speed(0.2);
    assert_eq!(controller.jump(false), ActionOutcome::Performed);
    let fade = controller.animator().unwrap().last_fade().unwrap();
    assert_eq!(fade.state, states::IDLE_JUMP);
    assert_eq!(fade.layer, Layer::Default);
    assert!((fade.duration - 0.1).abs() < f32::EPSILON);
    // The jumping parameter stays untouched on the idle-jump path.
    assert!(controller
        .animator()
        .unwrap()
        .last_param(params::IS_JUMPING)
        .is_none());
}

/// it should raise the jumping parameter and fade to the selected set's jump
#[test]
fn moving_jump_uses_the_selected_state_set() {
    let mut controller = attached();
    controller.set_speed(0.2);
    assert_eq!(controller.jump(true), ActionOutcome::Performed);
    let fade = controller.animator().unwrap().last_fade().unwrap();
    assert_eq!(fade.state, StateId::from_name("Walking Jump Start"));
    assert_eq!(
        controller.animator().unwrap().last_param(params::IS_JUMPING),
        Some(ParamValue::Bool(true))
    );

    controller.set_running(true);
    let _ = controller.jump(true);
    let fade = controller.animator().unwrap().last_fade().unwrap();
    assert_eq!(fade.state, StateId::from_name("Running Jump Start"));
}

#[test]
fn jump_below_idle_threshold_is_a_normal_jump() {
    let mut controller = attached();
    controller.set_speed(0.0);
    let _ = controller.jump(false);
    let fade = controller.animator().unwrap().last_fade().unwrap();
    assert_eq!(fade.state, StateId::from_name("Walking Jump Start"));
}

#[test]
fn landing_states_follow_the_move_flag_and_fall_transition() {
    let mut controller = attached();
    let _ = controller.land_on_feet(true);
    let fade = controller.animator().unwrap().last_fade().unwrap();
    assert_eq!(fade.state, StateId::from_name("Walking Land To Move"));
    assert!((fade.duration - 0.1).abs() < f32::EPSILON);

    let _ = controller.land_on_feet(false);
    let fade = controller.animator().unwrap().last_fade().unwrap();
    assert_eq!(fade.state, StateId::from_name("Walking Land To Stop"));

    let _ = controller.land_hard();
    let fade = controller.animator().unwrap().last_fade().unwrap();
    assert_eq!(fade.state, StateId::from_name("Walking Land Hard Stop"));

    let _ = controller.land_and_fall();
    let fade = controller.animator().unwrap().last_fade().unwrap();
    assert_eq!(fade.state, StateId::from_name("Walking Land Fall"));

    let _ = controller.land_and_die();
    let fade = controller.animator().unwrap().last_fade().unwrap();
    assert_eq!(fade.state, StateId::from_name("Walking Land Fall Dead"));
}

/// it should keep fall states on the default layer even mid-combat
#[test]
fn falls_are_full_body_states() {
    let mut controller = attached();
    controller.set_weapon(Some(std::sync::Arc::new(avatar_test_fixtures::sword_config())));
    let _ = controller.equip();
    assert_eq!(controller.active_layer(), Layer::Combat);

    let _ = controller.start_controlled_fall();
    let fade = controller.animator().unwrap().last_fade().unwrap();
    assert_eq!(fade.state, StateId::from_name("Walking Controlled Fall"));
    assert_eq!(fade.layer, Layer::Default);

    let _ = controller.start_uncontrolled_fall();
    let fade = controller.animator().unwrap().last_fade().unwrap();
    assert_eq!(fade.state, StateId::from_name("Walking Falling Loop"));
    assert_eq!(fade.layer, Layer::Default);
}

#[test]
fn property_setters_mirror_parameters() {
    let mut controller = attached();
    controller.set_fall_distance(3.5);
    controller.set_crouching(true);
    controller.set_horizontal(-0.5);
    controller.set_attack_vertical(2);

    let animator = controller.animator().unwrap();
    assert_eq!(
        animator.last_param(params::FALL_DISTANCE),
        Some(ParamValue::Float(3.5))
    );
    assert_eq!(animator.last_param(params::CROUCH), Some(ParamValue::Bool(true)));
    assert_eq!(
        animator.last_param(params::HORIZONTAL),
        Some(ParamValue::Float(-0.5))
    );
    assert_eq!(
        animator.last_param(params::COMBAT_DIR_VERTICAL),
        Some(ParamValue::Int(2))
    );
    assert!(controller.is_crouching());
}

/// it should derive speed from the position delta through the single speed
/// write path
#[test]
fn update_probes_velocity_into_speed() {
    let mut controller = attached();
    controller.update(0.5, [0.0, 0.0, 0.0]);
    assert_eq!(controller.speed(), 0.0);

    controller.update(0.5, [1.0, 0.0, 0.0]);
    assert_eq!(controller.velocity(), [2.0, 0.0, 0.0]);
    assert_eq!(controller.speed(), 2.0);
    assert_eq!(
        controller.animator().unwrap().last_param(params::SPEED),
        Some(ParamValue::Float(2.0))
    );
}

#[test]
fn use_clip_binds_a_prepared_use_slot() {
    let mut controller = attached();
    let lever = clip("lever_pull", 1.0);
    assert_eq!(controller.use_clip(&lever), ActionOutcome::Performed);

    let bound = controller.animator().unwrap().last_bind("Use").unwrap();
    assert_eq!(bound.clip, lever);
    assert_eq!(
        bound.markers,
        vec![
            ClipMarker::Start { slot: "Use".into() },
            ClipMarker::Stop { slot: "Use".into() },
        ]
    );
    assert!(controller.active_table().get("Use").is_some());
}

#[test]
fn use_config_carries_tags() {
    let mut controller = attached();
    let config = avatar_anim_core::AnimationConfig {
        slot: "Use".to_string(),
        clip: clip("drink_potion", 1.8),
        tags: vec!["recover".to_string()],
    };
    assert_eq!(controller.use_config(&config), ActionOutcome::Performed);
    let bound = controller.animator().unwrap().last_bind("Use").unwrap();
    assert!(bound.markers.contains(&ClipMarker::Tag {
        slot: "Use".into(),
        tag: "recover".into()
    }));
}

/// it should leave play_animation_config ungated by busy-state
#[test]
fn play_animation_config_bypasses_the_busy_gate() {
    let mut controller = attached();
    controller.handle_event(&avatar_anim_core::LifecycleEvent::Started {
        slot: "Attack_Strong".to_string(),
    });
    assert!(controller.is_busy());

    let config = avatar_anim_core::AnimationConfig {
        slot: "Hit_Reaction".to_string(),
        clip: clip("hit_react", 0.9),
        tags: vec![],
    };
    assert_eq!(controller.play_animation_config(&config), ActionOutcome::Performed);
    assert!(controller.active_table().get("Hit_Reaction").is_some());
}
