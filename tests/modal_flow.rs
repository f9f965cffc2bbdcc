// tests/modal_flow.rs
//
// Detail modal + fullscreen viewer driven purely by commands.
use lot_viewer::{
    core::csv::parse_records,
    modal::{Command::*, Layer, Modal},
    Record,
};

fn listings() -> Vec<Record> {
    parse_records(
        "Make,Model,Price,Year,Mileage,Interior,Image,Gallery,Description,Features\n\
         Honda,Civic,12345,2015,45000,Cloth,a.jpg,b.jpg; c.jpg,Clean,Bluetooth\n\
         Ford,Focus,,,,,,,,\n",
    )
}

#[test]
fn open_builds_detail_and_gallery() {
    let recs = listings();
    let mut m = Modal::default();
    assert_eq!(m.layer(), Layer::Closed);
    assert!(!m.scroll_locked());

    assert!(m.dispatch(OpenDetail(0), &recs));
    assert_eq!(m.layer(), Layer::Detail);
    assert!(m.scroll_locked());
    assert!(m.take_focus_request());
    assert!(!m.take_focus_request());

    let view = m.detail().unwrap();
    assert_eq!(view.title, "Honda Civic");
    assert_eq!(view.price, "$12,345");
    let specs: Vec<(&str, &str)> = view.specs.iter().map(|r| (r.label, r.value.as_str())).collect();
    assert_eq!(specs, vec![("Year", "2015"), ("Mileage", "45,000 miles"), ("Interior", "Cloth")]);
    assert_eq!(view.description, "Clean");
    assert_eq!(view.features, "Bluetooth");

    let g = m.gallery().unwrap();
    assert_eq!(g.urls(), ["a.jpg", "b.jpg", "c.jpg"]);
    assert_eq!(g.index(), 0);
}

#[test]
fn open_with_bad_index_is_ignored() {
    let recs = listings();
    let mut m = Modal::default();
    assert!(!m.dispatch(OpenDetail(9), &recs));
    assert_eq!(m.layer(), Layer::Closed);
}

#[test]
fn close_detail_and_escape_from_detail() {
    let recs = listings();
    let mut m = Modal::default();

    m.dispatch(OpenDetail(0), &recs);
    assert!(m.dispatch(CloseDetail, &recs));
    assert_eq!(m.layer(), Layer::Closed);
    assert!(!m.scroll_locked());

    m.dispatch(OpenDetail(1), &recs);
    assert!(m.dispatch(Escape, &recs));
    assert_eq!(m.layer(), Layer::Closed);
}

#[test]
fn fullscreen_only_from_detail() {
    let recs = listings();
    let mut m = Modal::default();
    assert!(!m.dispatch(OpenImage(1), &recs));
    assert_eq!(m.layer(), Layer::Closed);

    m.dispatch(OpenDetail(0), &recs);
    assert!(m.dispatch(OpenImage(2), &recs));
    assert_eq!(m.layer(), Layer::Fullscreen);
    assert_eq!(m.gallery().unwrap().index(), 2);
    assert!(m.scroll_locked());
}

#[test]
fn navigate_clamps_inside_fullscreen_only() {
    let recs = listings();
    let mut m = Modal::default();
    m.dispatch(OpenDetail(0), &recs);

    // Detail layer: arrows don't move the cursor
    assert!(!m.dispatch(Navigate(1), &recs));
    assert_eq!(m.gallery().unwrap().index(), 0);

    m.dispatch(OpenImage(1), &recs);
    assert!(m.dispatch(Navigate(1), &recs));
    assert_eq!(m.gallery().unwrap().index(), 2);
    assert!(!m.dispatch(Navigate(1), &recs));
    assert_eq!(m.gallery().unwrap().index(), 2);

    m.dispatch(Navigate(-5), &recs);
    assert_eq!(m.gallery().unwrap().index(), 0);
}

#[test]
fn close_image_returns_to_detail_escape_closes_both() {
    let recs = listings();
    let mut m = Modal::default();
    m.dispatch(OpenDetail(0), &recs);
    m.dispatch(OpenImage(1), &recs);

    assert!(m.dispatch(CloseImage, &recs));
    assert_eq!(m.layer(), Layer::Detail);
    assert_eq!(m.gallery().unwrap().index(), 1);

    // the detail close control is covered while the viewer is up
    m.dispatch(OpenImage(0), &recs);
    assert!(!m.dispatch(CloseDetail, &recs));
    assert_eq!(m.layer(), Layer::Fullscreen);

    assert!(m.dispatch(Escape, &recs));
    assert_eq!(m.layer(), Layer::Closed);
    assert!(m.detail().is_none());
}

#[test]
fn listing_without_images_has_no_fullscreen() {
    let recs = listings();
    let mut m = Modal::default();
    m.dispatch(OpenDetail(1), &recs);

    let view = m.detail().unwrap();
    assert_eq!(view.title, "Ford Focus");
    assert!(view.specs.is_empty());
    assert_eq!(view.price, "");

    assert!(m.gallery().unwrap().is_empty());
    assert!(!m.dispatch(OpenImage(0), &recs));
    assert_eq!(m.layer(), Layer::Detail);
}
