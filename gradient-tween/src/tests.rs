use crate::*;

use alloc::string::ToString;

fn black_to_white() -> GradientState {
    GradientState::new([Rgb::BLACK, Rgb::WHITE], [0.0, 100.0], 0.0)
}

fn red_to_blue() -> GradientState {
    GradientState::new(
        [Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)],
        [0.0, 100.0],
        180.0,
    )
}

#[test]
fn midpoint_of_linear_transition_rounds_ties_up() {
    let mid = interpolate(&black_to_white(), &red_to_blue(), Easing::Linear.sample(0.5));
    assert_eq!(mid.angle, 90.0);
    assert_eq!(mid.top(), Rgb::new(128, 0, 0));
    assert_eq!(mid.bottom(), Rgb::new(128, 128, 255));
    assert_eq!(mid.positions, [0.0, 100.0]);
}

#[test]
fn zero_progress_reproduces_from() {
    let from = black_to_white();
    for easing in Easing::ALL {
        let s = interpolate(&from, &red_to_blue(), easing.sample(0.0));
        assert_eq!(s, from, "{easing}");
    }
}

#[test]
fn full_progress_reproduces_to_for_every_named_easing() {
    let to = red_to_blue();
    for easing in Easing::ALL {
        assert_eq!(easing.sample(1.0), 1.0, "{easing}");
        let s = interpolate(&black_to_white(), &to, easing.sample(1.0));
        assert_eq!(s, to, "{easing}");
    }
}

#[test]
fn fractional_endpoints_converge_after_rounding() {
    let from = GradientState::new([Rgb::BLACK, Rgb::WHITE], [12.3, 87.6], 33.3);
    let to = GradientState::new([Rgb::WHITE, Rgb::BLACK], [40.2, 60.7], 270.5);
    assert_eq!(interpolate(&from, &to, 1.0), to.rounded());
    assert_eq!(interpolate(&from, &to, 0.0), from.rounded());
}

#[test]
fn overshoot_extrapolates_without_clamping() {
    let from = GradientState::vertical(Rgb::BLACK, Rgb::BLACK);
    let to = GradientState::vertical(Rgb::WHITE, Rgb::WHITE);
    let s = interpolate(&from, &to, 1.25);
    assert_eq!(s.top(), Rgb::new(319, 319, 319));
    assert!(!s.top().is_in_gamut());
    assert_eq!(s.top().clamped(), Rgb::WHITE);

    let under = interpolate(&from, &to, -0.2);
    assert_eq!(under.top(), Rgb::new(-51, -51, -51));
}

#[test]
fn positions_and_angle_move_in_lock_step() {
    let from = GradientState::new([Rgb::BLACK, Rgb::BLACK], [0.0, 50.0], -90.0);
    let to = GradientState::new([Rgb::BLACK, Rgb::BLACK], [20.0, 100.0], 450.0);
    let s = interpolate(&from, &to, 0.25);
    assert_eq!(s.positions, [5.0, 63.0]);
    assert_eq!(s.angle, 45.0);
}

#[test]
fn css_matches_linear_gradient_shape() {
    let mid = interpolate(&black_to_white(), &red_to_blue(), 0.5);
    assert_eq!(
        mid.to_css(),
        "linear-gradient(90deg, rgba(128,0,0,1) 0%, rgba(128,128,255,1) 100%)"
    );

    let fractional = GradientState::new([Rgb::BLACK, Rgb::WHITE], [12.5, 87.5], 45.5);
    assert_eq!(
        fractional.to_string(),
        "linear-gradient(45.5deg, rgba(0,0,0,1) 12.5%, rgba(255,255,255,1) 87.5%)"
    );
}

#[test]
fn easing_registry_names_round_trip() {
    for easing in Easing::ALL {
        assert_eq!(easing.name().parse::<Easing>(), Ok(easing));
    }
    let err = "bounce".parse::<Easing>().unwrap_err();
    assert_eq!(err.name, "bounce");
    assert_eq!(err.to_string(), "unknown easing function: \"bounce\"");
    assert_eq!(Easing::default(), Easing::Linear);
}

#[test]
fn easing_curves_match_reference_values() {
    let close = |a: f64, b: f64| (a - b).abs() < 1e-12;
    assert!(close(Easing::EaseInQuad.sample(0.5), 0.25));
    assert!(close(Easing::EaseOutQuad.sample(0.5), 0.75));
    assert!(close(Easing::EaseInOutQuad.sample(0.25), 0.125));
    assert!(close(Easing::EaseInOutQuad.sample(0.75), 0.875));
    assert!(close(Easing::EaseInCubic.sample(0.5), 0.125));
    assert!(close(Easing::EaseOutCubic.sample(0.5), 0.875));
    assert!(close(Easing::EaseInOutCubic.sample(0.25), 0.0625));
    assert!(close(Easing::EaseInOutCubic.sample(0.75), 0.9375));
}

#[test]
fn easing_curves_are_total() {
    for easing in Easing::ALL {
        assert!(easing.sample(-3.0).is_finite());
        assert!(easing.sample(7.0).is_finite());
    }
    assert_eq!(Easing::EaseInQuad.sample(2.0), 4.0);
}

#[test]
fn custom_easing_is_sampled() {
    let overshoot = EasingFn::custom(|t| t * (3.0 - 2.0 * t));
    assert_eq!(overshoot.named(), None);
    assert_eq!(overshoot.sample(0.75), 1.125);
    assert_eq!(overshoot.sample(1.0), 1.0);

    let named = EasingFn::from(Easing::EaseOutCubic);
    assert_eq!(named.named(), Some(Easing::EaseOutCubic));
    assert_eq!(std::format!("{:?}", overshoot), "Custom(..)");
    assert_eq!(EasingFn::default().named(), Some(Easing::Linear));
}

#[test]
fn stepping_reaches_target_in_emergent_tick_count() {
    let from = GradientState::new([Rgb::new(10, 0, 0), Rgb::BLACK], [0.0, 100.0], 180.0);
    let to = GradientState::new([Rgb::new(0, 3, 0), Rgb::BLACK], [2.5, 100.0], 175.0);
    let expected = steps_between(&from, &to);
    assert_eq!(expected, 10);

    let mut current = from;
    let mut ticks = 0;
    while current != to {
        current = step_toward(&current, &to);
        ticks += 1;
        assert!(ticks <= expected);
    }
    assert_eq!(ticks, expected);
}

#[test]
fn stepping_equal_states_is_a_fixed_point() {
    let s = red_to_blue();
    assert_eq!(steps_between(&s, &s), 0);
    assert_eq!(step_toward(&s, &s), s);
}

#[test]
fn reversed_swaps_stops_only() {
    let s = red_to_blue();
    let r = s.reversed();
    assert_eq!(r.top(), s.bottom());
    assert_eq!(r.bottom(), s.top());
    assert_eq!(r.positions, s.positions);
    assert_eq!(r.angle, s.angle);
}

#[cfg(feature = "serde")]
#[test]
fn gradient_state_uses_array_shape_in_json() {
    let s: GradientState = serde_json::from_str(
        r#"{ "colors": [[0,0,0],[255,255,255]], "positions": [0,100], "angle": 0 }"#,
    )
    .unwrap();
    assert_eq!(s, black_to_white());

    let json = serde_json::to_string(&Easing::EaseInOutCubic).unwrap();
    assert_eq!(json, "\"easeInOutCubic\"");
}
