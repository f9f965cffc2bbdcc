// src/gui/components/detail_modal.rs
//
// Listing detail: main image, thumbnail row, price, spec rows, description
// and features. The backdrop swallows clicks so nothing underneath reacts.

use eframe::egui::{self, CursorIcon, Id, RichText, Sense, vec2};

use crate::{
    gui::app::App,
    modal::{Command, Layer},
    view::detail::main_image,
};

const MODAL_W: f32 = 560.0;
const THUMB: egui::Vec2 = egui::Vec2::new(96.0, 64.0);

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let layer = app.showroom.modal().layer();
    if layer == Layer::Closed {
        return;
    }
    // Snapshot taken at open time; cloning keeps `app` free for dispatch.
    let (Some(view), Some(gallery)) = (
        app.showroom.modal().detail().cloned(),
        app.showroom.modal().gallery().cloned(),
    ) else {
        return;
    };
    let want_focus = layer == Layer::Detail && app.showroom.modal_mut().take_focus_request();

    let mut cmds: Vec<Command> = Vec::new();

    let resp = egui::Modal::new(Id::new("detail_modal")).show(ctx, |ui| {
        ui.set_width(MODAL_W);
        let max_h = ctx.screen_rect().height() * 0.85;

        egui::ScrollArea::vertical().max_height(max_h).show(ui, |ui| {
            let main = ui.add(
                egui::Image::new(main_image(gallery.urls()))
                    .max_width(MODAL_W)
                    .corner_radius(6.0)
                    .sense(Sense::click()),
            );
            if !gallery.is_empty() && main.on_hover_cursor(CursorIcon::ZoomIn).clicked() {
                cmds.push(Command::OpenImage(0));
            }

            if gallery.len() > 1 {
                ui.horizontal_wrapped(|ui| {
                    for (k, url) in gallery.thumbnails() {
                        let thumb = ui
                            .add(egui::Image::new(url).fit_to_exact_size(THUMB).sense(Sense::click()))
                            .on_hover_text(format!("Gallery {k}"));
                        if thumb.clicked() {
                            cmds.push(Command::OpenImage(k));
                        }
                    }
                });
            }

            ui.add_space(8.0);
            ui.label(RichText::new(&view.title).strong().size(22.0));
            if !view.price.is_empty() {
                ui.label(RichText::new(&view.price).size(18.0).color(ui.visuals().hyperlink_color));
            }

            if !view.specs.is_empty() {
                egui::Grid::new("detail_specs")
                    .num_columns(2)
                    .spacing(vec2(16.0, 4.0))
                    .show(ui, |ui| {
                        for row in &view.specs {
                            ui.weak(row.label);
                            ui.label(&row.value);
                            ui.end_row();
                        }
                    });
            }

            ui.add_space(8.0);
            ui.label(RichText::new("Description").strong());
            ui.label(&view.description);

            ui.add_space(8.0);
            ui.label(RichText::new("Features").strong());
            ui.label(&view.features);
        });

        ui.separator();
        ui.horizontal(|ui| {
            let close = ui.button("Close");
            if want_focus {
                close.request_focus();
            }
            if close.clicked() {
                cmds.push(Command::CloseDetail);
            }
        });
    });

    // Backdrop click. Only meaningful while the viewer isn't stacked on top.
    if layer == Layer::Detail && resp.should_close() {
        cmds.push(Command::CloseDetail);
    }

    for cmd in cmds {
        app.dispatch(cmd);
    }
}
