// tests/gallery_nav.rs
use lot_viewer::gallery::{Gallery, Swipe};

fn three() -> Gallery {
    Gallery::new(vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()])
}

#[test]
fn out_of_range_requests_clamp() {
    let mut g = three();
    g.set(-1);
    assert_eq!(g.index(), 0);
    g.set(5);
    assert_eq!(g.index(), 2);
    assert_eq!(g.current(), Some("c.jpg"));
}

#[test]
fn controls_disable_exactly_at_the_ends() {
    let mut g = three();

    g.set(0);
    assert!(!g.can_prev());
    assert!(g.can_next());

    g.set(1);
    assert!(g.can_prev());
    assert!(g.can_next());

    g.set(2);
    assert!(g.can_prev());
    assert!(!g.can_next());
}

#[test]
fn step_does_not_wrap() {
    let mut g = three();
    assert!(!g.step(-1));
    assert_eq!(g.index(), 0);

    assert!(g.step(1));
    assert!(g.step(1));
    assert!(!g.step(1));
    assert_eq!(g.index(), 2);
}

#[test]
fn thumbnails_skip_the_main_image() {
    let g = three();
    let thumbs: Vec<(usize, &str)> = g.thumbnails().collect();
    assert_eq!(thumbs, vec![(1, "b.jpg"), (2, "c.jpg")]);
}

#[test]
fn swipe_threshold_and_direction() {
    let mut s = Swipe::default();

    s.begin(200.0);
    assert_eq!(s.end(239.0), None); // 39 px: too short

    s.begin(200.0);
    assert_eq!(s.end(240.0), Some(-1)); // right swipe → previous

    s.begin(200.0);
    assert_eq!(s.end(150.0), Some(1)); // left swipe → next

    // end() consumes the gesture
    assert!(!s.is_tracking());
    assert_eq!(s.end(0.0), None);
}

#[test]
fn drag_that_never_began_is_not_a_swipe() {
    let mut s = Swipe::default();
    assert!(!s.is_tracking());

    s.begin(10.0);
    assert!(s.is_tracking());
    s.cancel(); // viewer closed mid-drag
    assert!(!s.is_tracking());
    assert_eq!(s.end(300.0), None);
}
