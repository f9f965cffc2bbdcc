// src/gui/app.rs
use std::{error::Error, time::Instant};

use eframe::egui::{self, Key, Modifiers};

use crate::{
    config::state::AppState,
    error::LoadError,
    gallery::Swipe,
    loader::{self, Loader, RefreshSchedule},
    modal::{Command, Layer},
    showroom::Showroom,
};

pub fn run(native: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Used Car Inventory",
        native,
        Box::new(move |cc| {
            // Card and gallery images are plain URLs; egui fetches + decodes them.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            let app = App::new(&cc.egui_ctx, state)?;
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub showroom: Showroom,

    loader: Loader,
    schedule: RefreshSchedule,

    // fullscreen viewer gesture in progress
    pub swipe: Swipe,
}

impl App {
    pub fn new(ctx: &egui::Context, mut state: AppState) -> Result<Self, LoadError> {
        let source = loader::source_for(&state.options.source)?;

        let repaint = ctx.clone();
        let loader = Loader::new(source).with_waker(move || repaint.request_repaint());
        let schedule = RefreshSchedule::new(state.options.refresh_interval);

        logf!(
            "Init: source={} refresh={:?}",
            state.options.source.describe(),
            state.options.refresh_interval
        );
        state.gui.status = s!("Loading…");

        Ok(Self {
            state,
            showroom: Showroom::new(),
            loader,
            schedule,
            swipe: Swipe::default(),
        })
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn dispatch(&mut self, cmd: Command) {
        if self.showroom.dispatch(cmd) && cmd == Command::CloseImage {
            self.swipe.cancel();
        }
    }

    /// Manual refresh from the top bar. Counts as a tick.
    pub fn refresh_now(&mut self) {
        logf!("Refresh: manual");
        self.schedule.restart(Instant::now());
        self.loader.spawn();
    }

    fn tick(&mut self) {
        if self.schedule.poll(Instant::now()) {
            self.loader.spawn();
        }
        for outcome in self.loader.drain() {
            self.showroom.apply(outcome);
        }
        self.state.gui.status = self.showroom.status_line();
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        if !self.showroom.modal().is_open() {
            return;
        }

        // Consumed here so egui's own modal handling never sees it.
        if ctx.input_mut(|i| i.consume_key(Modifiers::NONE, Key::Escape)) {
            self.dispatch(Command::Escape);
            self.swipe.cancel();
            return;
        }

        if self.showroom.modal().layer() == Layer::Fullscreen {
            let (left, right) = ctx.input_mut(|i| {
                (
                    i.consume_key(Modifiers::NONE, Key::ArrowLeft),
                    i.consume_key(Modifiers::NONE, Key::ArrowRight),
                )
            });
            if left { self.dispatch(Command::Navigate(-1)); }
            if right { self.dispatch(Command::Navigate(1)); }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick();
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            super::components::top_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::card_grid::draw(ui, self);
        });

        // Layers in stacking order: the viewer sits above the detail modal.
        super::components::detail_modal::draw(ctx, self);
        super::components::image_viewer::draw(ctx, self);

        // Wake up for the next scheduled refresh even if nothing moves.
        ctx.request_repaint_after(self.schedule.time_until_due(Instant::now()));
    }
}
