//! Integration tests for identifier-based constraint mutation: padding and
//! dimension updates, completion callbacks, and the cooperative animation
//! driver.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use edgekit::{
    AnimationCurve, AnimationSettings, Dimension, EngineConfig, Insets, Rect, Side, Size,
    SnapAdaptable, SnapEdges, ViewHierarchy, ViewId,
};

const TOLERANCE: f64 = 0.001;

fn screen() -> (ViewHierarchy, ViewId) {
    let mut ui = ViewHierarchy::new();
    let root = ui.add_root("Screen", Rect::new(0.0, 0.0, 400.0, 800.0));
    (ui, root)
}

/// Linear settings keep interpolation checks exact.
fn linear(duration: f64) -> AnimationSettings {
    AnimationSettings {
        duration,
        delay: 0.0,
        damping: 1.0,
        velocity: 1.0,
        curve: AnimationCurve::Linear,
    }
}

fn flag() -> (Rc<Cell<u32>>, Box<dyn FnOnce()>) {
    let count = Rc::new(Cell::new(0u32));
    let observer = Rc::clone(&count);
    (count, Box::new(move || observer.set(observer.get() + 1)))
}

#[test]
fn test_padding_update_mutates_exactly_one_constant() {
    let (mut ui, root) = screen();
    let panel = ui.create_view("Panel");
    ui.add_view(panel, root, SnapEdges::All, Insets::all(20.0), Size::zero());

    ui.update_padding(
        Side::Left,
        panel,
        60.0,
        Some(AnimationSettings::none()),
        None,
    );

    let constants: Vec<(&str, f64)> = ui
        .constraints(root)
        .iter()
        .map(|constraint| (constraint.identifier.as_str(), constraint.constant))
        .collect();
    assert_eq!(
        constants,
        vec![
            ("Panel_top", 20.0),
            ("Panel_left", 60.0),
            ("Panel_right", -20.0),
            ("Panel_bottom", -20.0),
        ]
    );
    assert!(ui
        .frame(panel)
        .approx_eq(&Rect::new(60.0, 20.0, 320.0, 760.0), TOLERANCE));
}

#[test]
fn test_update_without_prior_attach_is_inert() {
    let mut ui = ViewHierarchy::new();
    ui.add_root("Screen", Rect::new(0.0, 0.0, 400.0, 800.0));
    let loose = ui.create_view("Loose");

    let (fired, completion) = flag();
    ui.update_dimension(Dimension::Width, loose, 100.0, None, Some(completion));

    assert_eq!(fired.get(), 0);
    assert_eq!(ui.frame(loose), Rect::zero());
    assert!(!ui.is_animating());
}

#[test]
fn test_update_with_no_matching_identifier_skips_completion() {
    let (mut ui, root) = screen();
    let panel = ui.create_view("Panel");
    // All four edges pinned: no width constraint to find.
    ui.add_view(panel, root, SnapEdges::All, Insets::zero(), Size::zero());

    let (fired, completion) = flag();
    ui.update_dimension(
        Dimension::Width,
        panel,
        100.0,
        Some(AnimationSettings::none()),
        Some(completion),
    );

    assert_eq!(fired.get(), 0);
    assert!(ui
        .frame(panel)
        .approx_eq(&Rect::new(0.0, 0.0, 400.0, 800.0), TOLERANCE));
}

#[test]
fn test_zero_duration_applies_synchronously() {
    let (mut ui, root) = screen();
    let badge = ui.create_view("Badge");
    ui.add_view(
        badge,
        root,
        SnapEdges::TopLeft,
        Insets::zero(),
        Size::new(40.0, 40.0),
    );

    let (fired, completion) = flag();
    ui.update_dimension(
        Dimension::Height,
        badge,
        90.0,
        Some(AnimationSettings::none()),
        Some(completion),
    );

    assert_eq!(fired.get(), 1);
    assert!((ui.frame(badge).height - 90.0).abs() < TOLERANCE);
    assert!(!ui.is_animating());
}

#[test]
fn test_animated_slide_in_settles_at_target() {
    // The drawer starts off-screen (left padding -250) and slides in by
    // updating the left padding to zero.
    let (mut ui, root) = screen();
    let drawer = ui.create_view("Drawer");
    ui.add_view(
        drawer,
        root,
        SnapEdges::TopLeftBottom,
        Insets {
            top: 20.0,
            left: -250.0,
            ..Insets::zero()
        },
        Size::new(250.0, 0.0),
    );
    assert!(ui
        .frame(drawer)
        .approx_eq(&Rect::new(-250.0, 20.0, 250.0, 780.0), TOLERANCE));

    let (fired, completion) = flag();
    ui.update_padding(Side::Left, drawer, 0.0, Some(linear(0.5)), Some(completion));

    // The constant changes in the pass; the presented frame settles over time.
    assert!((ui.frame(drawer).x + 250.0).abs() < TOLERANCE);
    assert!(ui.is_animating());
    assert_eq!(fired.get(), 0);

    ui.advance(Duration::from_millis(250));
    assert!((ui.frame(drawer).x + 125.0).abs() < TOLERANCE);
    assert_eq!(fired.get(), 0);

    ui.advance(Duration::from_millis(250));
    assert!(ui.frame(drawer).x.abs() < TOLERANCE);
    assert_eq!(fired.get(), 1);
    assert!(!ui.is_animating());

    // Further ticks change nothing and never re-fire the completion.
    ui.advance(Duration::from_millis(500));
    assert!(ui.frame(drawer).x.abs() < TOLERANCE);
    assert_eq!(fired.get(), 1);
}

#[test]
fn test_animation_delay_holds_the_presented_frame() {
    let (mut ui, root) = screen();
    let badge = ui.create_view("Badge");
    ui.add_view(
        badge,
        root,
        SnapEdges::TopLeft,
        Insets::zero(),
        Size::new(40.0, 40.0),
    );

    let settings = AnimationSettings {
        delay: 0.2,
        ..linear(0.2)
    };
    ui.update_dimension(Dimension::Width, badge, 80.0, Some(settings), None);

    ui.advance(Duration::from_millis(100));
    assert!((ui.frame(badge).width - 40.0).abs() < TOLERANCE);

    ui.advance(Duration::from_millis(200));
    assert!((ui.frame(badge).width - 60.0).abs() < TOLERANCE);

    ui.advance(Duration::from_millis(100));
    assert!((ui.frame(badge).width - 80.0).abs() < TOLERANCE);
}

#[test]
fn test_latest_update_wins_over_inflight_animation() {
    let (mut ui, root) = screen();
    let card = ui.create_view("Card");
    ui.add_view(
        card,
        root,
        SnapEdges::TopLeft,
        Insets::zero(),
        Size::new(100.0, 50.0),
    );

    let (first_fired, first_completion) = flag();
    ui.update_dimension(
        Dimension::Width,
        card,
        200.0,
        Some(linear(0.4)),
        Some(first_completion),
    );
    ui.advance(Duration::from_millis(200));
    assert!((ui.frame(card).width - 150.0).abs() < TOLERANCE);

    let (second_fired, second_completion) = flag();
    ui.update_dimension(
        Dimension::Width,
        card,
        300.0,
        Some(linear(0.4)),
        Some(second_completion),
    );

    // The first transition runs out its clock and still reports completion,
    // but the frame now follows the second update.
    ui.advance(Duration::from_millis(200));
    assert_eq!(first_fired.get(), 1);
    assert_eq!(second_fired.get(), 0);
    assert!((ui.frame(card).width - 225.0).abs() < TOLERANCE);

    ui.advance(Duration::from_millis(200));
    assert_eq!(second_fired.get(), 1);
    assert!((ui.frame(card).width - 300.0).abs() < TOLERANCE);
    assert!(!ui.is_animating());
}

#[test]
fn test_default_animation_comes_from_config() {
    let config = EngineConfig::default().with_default_animation(AnimationSettings::none());
    let mut ui = ViewHierarchy::with_config(config);
    let root = ui.add_root("Screen", Rect::new(0.0, 0.0, 400.0, 800.0));
    let badge = ui.create_view("Badge");
    ui.add_view(
        badge,
        root,
        SnapEdges::TopLeft,
        Insets::zero(),
        Size::new(40.0, 40.0),
    );

    // No explicit settings: the configured default (no animation) applies.
    let (fired, completion) = flag();
    ui.update_dimension(Dimension::Width, badge, 70.0, None, Some(completion));

    assert_eq!(fired.get(), 1);
    assert!((ui.frame(badge).width - 70.0).abs() < TOLERANCE);
    assert!(!ui.is_animating());
}

#[test]
fn test_spring_update_overshoots_then_settles() {
    let (mut ui, root) = screen();
    let sheet = ui.create_view("Sheet");
    ui.add_view(
        sheet,
        root,
        SnapEdges::TopLeft,
        Insets::zero(),
        Size::new(100.0, 50.0),
    );

    // Default damping (0.75) is underdamped: somewhere along the way the
    // presented width exceeds the 200.0 target before settling on it.
    ui.update_dimension(
        Dimension::Width,
        sheet,
        200.0,
        Some(AnimationSettings::with_duration(0.4)),
        None,
    );

    let mut max_width = f64::MIN;
    for _ in 0..40 {
        ui.advance(Duration::from_millis(10));
        max_width = max_width.max(ui.frame(sheet).width);
    }
    assert!(max_width > 200.0, "expected overshoot, max was {max_width}");
    assert!((ui.frame(sheet).width - 200.0).abs() < TOLERANCE);
    assert!(!ui.is_animating());
}

#[test]
fn test_updates_via_both_owners() {
    // Padding constraints are found in the parent's collection, dimension
    // constraints in the view's own; both mutate through the same surface.
    let (mut ui, root) = screen();
    let panel = ui.create_view("Panel");
    ui.add_view(
        panel,
        root,
        SnapEdges::TopRightLeft,
        Insets::zero(),
        Size::new(0.0, 150.0),
    );

    ui.update_padding(Side::Top, panel, 40.0, Some(AnimationSettings::none()), None);
    ui.update_dimension(
        Dimension::Height,
        panel,
        220.0,
        Some(AnimationSettings::none()),
        None,
    );

    assert!(ui
        .frame(panel)
        .approx_eq(&Rect::new(0.0, 40.0, 400.0, 220.0), TOLERANCE));

    assert!(ui
        .constraints(root)
        .iter()
        .any(|constraint| constraint.identifier == "Panel_top" && constraint.constant == 40.0));
    assert!(ui
        .constraints(panel)
        .iter()
        .any(|constraint| constraint.identifier == "Panel_height" && constraint.constant == 220.0));
}
