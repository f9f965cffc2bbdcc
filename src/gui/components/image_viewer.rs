// src/gui/components/image_viewer.rs
//
// Fullscreen gallery on top of the detail modal. Prev/next buttons, arrow
// keys (handled in App) and horizontal swipes move through the images.

use eframe::egui::{self, Align, Id, Layout, Sense, vec2};

use crate::{
    gui::app::App,
    modal::{Command, Layer},
};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    if app.showroom.modal().layer() != Layer::Fullscreen {
        return;
    }
    let Some(gallery) = app.showroom.modal().gallery().cloned() else { return };
    let Some(url) = gallery.current().map(String::from) else { return };
    let want_focus = app.showroom.modal_mut().take_focus_request();

    let screen = ctx.screen_rect().size();
    let max_img = vec2(screen.x * 0.85, screen.y * 0.75);

    let mut cmds: Vec<Command> = Vec::new();

    let resp = egui::Modal::new(Id::new("image_viewer")).show(ctx, |ui| {
        let img = ui.add(
            egui::Image::new(url.as_str())
                .max_size(max_img)
                .maintain_aspect_ratio(true)
                .sense(Sense::click_and_drag()),
        );

        // Swipe: judged once, when the drag ends.
        if img.drag_started() {
            if let Some(pos) = img.interact_pointer_pos() {
                app.swipe.begin(pos.x);
            }
        }
        if img.drag_stopped() && app.swipe.is_tracking() {
            let end_x = ctx.input(|i| i.pointer.latest_pos()).map(|p| p.x);
            match end_x.and_then(|x| app.swipe.end(x)) {
                Some(delta) => cmds.push(Command::Navigate(delta)),
                None => app.swipe.cancel(),
            }
        }

        ui.horizontal(|ui| {
            let prev = ui.add_enabled(gallery.can_prev(), egui::Button::new("◀ Prev"));
            if prev.clicked() {
                cmds.push(Command::Navigate(-1));
            }
            ui.label(format!("{} / {}", gallery.index() + 1, gallery.len()));
            let next = ui.add_enabled(gallery.can_next(), egui::Button::new("Next ▶"));
            if next.clicked() {
                cmds.push(Command::Navigate(1));
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let close = ui.button("✕ Close");
                if want_focus {
                    close.request_focus();
                }
                if close.clicked() {
                    cmds.push(Command::CloseImage);
                }
            });
        });
    });

    if resp.should_close() {
        cmds.push(Command::CloseImage);
    }

    for cmd in cmds {
        app.dispatch(cmd);
    }
}
