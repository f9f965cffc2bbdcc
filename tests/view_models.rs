// tests/view_models.rs
use lot_viewer::{
    config::consts::{CARD_PLACEHOLDER_IMG, DETAIL_PLACEHOLDER_IMG},
    core::csv::parse_records,
    view::{CardView, cards, detail::main_image},
};

#[test]
fn card_shows_formatted_fields_in_fixed_order() {
    let recs = parse_records(
        "Exterior Color,Fuel type,Transmission,Mileage,Year,Make,Model,Price,Image,Description\n\
         Blue,Gasoline,Automatic,45000,2015,Honda,Civic,12345,a.jpg,Clean",
    );
    let card = CardView::from_record(0, &recs[0]);

    assert_eq!(card.image_url, "a.jpg");
    assert_eq!(card.title, "Honda Civic");
    assert_eq!(card.price, "$12,345");
    assert_eq!(card.details, "2015 | 45,000 miles | Automatic | Gasoline | Blue");
    assert_eq!(card.description, "Clean");
}

#[test]
fn card_skips_blank_attributes_and_uses_placeholder() {
    let recs = parse_records("Make,Model,Year,Mileage,Transmission\nFord,,,80000,Manual");
    let card = CardView::from_record(3, &recs[0]);

    assert_eq!(card.index, 3);
    assert_eq!(card.image_url, CARD_PLACEHOLDER_IMG);
    assert_eq!(card.title, "Ford");
    assert_eq!(card.price, "");
    assert_eq!(card.details, "80,000 miles | Manual");
}

#[test]
fn cards_are_indexed_by_position() {
    let recs = parse_records("Make\nA\nB\nC");
    let idx: Vec<usize> = cards(&recs).iter().map(|c| c.index).collect();
    assert_eq!(idx, vec![0, 1, 2]);
}

#[test]
fn main_image_falls_back_to_placeholder() {
    assert_eq!(main_image(&[]), DETAIL_PLACEHOLDER_IMG);
    assert_eq!(main_image(&["x.jpg".to_string()]), "x.jpg");
}
