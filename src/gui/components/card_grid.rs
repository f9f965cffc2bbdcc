// src/gui/components/card_grid.rs
//
// Draws the listing cards (or the loading / error message) as a wrapping
// grid. A click, or Enter/Space on a focused card, opens its detail view.

use eframe::egui::{self, Color32, CursorIcon, RichText, Sense, vec2};

use crate::{
    config::consts::{CARD_IMG_H, CARD_W},
    gui::app::App,
    modal::Command,
    showroom::Grid,
    view::CardView,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let locked = app.showroom.modal().scroll_locked();
    let mut opened: Option<usize> = None;

    egui::ScrollArea::vertical()
        .id_salt("card_grid_scroll")
        .auto_shrink([false, false])
        .enable_scrolling(!locked)
        .show(ui, |ui| match app.showroom.grid() {
            Grid::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading listings…");
                });
            }
            Grid::Error(msg) => {
                ui.label(RichText::new(msg).color(Color32::RED).strong());
            }
            Grid::Cards(cards) if cards.is_empty() => {
                ui.weak("No listings.");
            }
            Grid::Cards(cards) => {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = vec2(14.0, 14.0);
                    for card in cards {
                        if card_widget(ui, card).clicked() {
                            opened = Some(card.index);
                        }
                    }
                });
            }
        });

    if let Some(i) = opened {
        logd!("UI: open card #{i}");
        app.dispatch(Command::OpenDetail(i));
    }
}

fn card_widget(ui: &mut egui::Ui, card: &CardView) -> egui::Response {
    let inner = egui::Frame::group(ui.style())
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(CARD_W);
            ui.vertical(|ui| {
                ui.add(
                    egui::Image::new(card.image_url.as_str())
                        .fit_to_exact_size(vec2(CARD_W, CARD_IMG_H))
                        .corner_radius(4.0),
                );
                ui.label(RichText::new(&card.title).strong().size(16.0));
                if !card.price.is_empty() {
                    ui.label(RichText::new(&card.price).color(ui.visuals().hyperlink_color));
                }
                if !card.details.is_empty() {
                    ui.small(&card.details);
                }
                if !card.description.is_empty() {
                    ui.add(egui::Label::new(&card.description).truncate());
                }
            });
        });

    let id = ui.id().with(("card", card.index));
    ui.interact(inner.response.rect, id, Sense::click())
        .on_hover_cursor(CursorIcon::PointingHand)
}
