use eframe::egui;
use widget_core::{MountPoints, PageEnvironment, PortfolioPage, ScrollEvents};

use crate::{
    controller::{events::UiEvent, reducer::apply_ui_event},
    ui::{panels, scroll_animation::ScrollAnimation, theme},
};

pub struct PortfolioApp {
    page: PortfolioPage,
    scroll: ScrollEvents,
    search_draft: String,
    pending_events: Vec<UiEvent>,
    last_offset: f32,
    animation: Option<ScrollAnimation>,
    visuals_applied: bool,
}

impl PortfolioApp {
    pub fn new(env: &PageEnvironment, mount_points: &MountPoints) -> Self {
        let page = PortfolioPage::mount(mount_points, env);
        let search_draft = page
            .gallery
            .as_ref()
            .map(|gallery| gallery.query().search_text.clone())
            .unwrap_or_default();
        Self {
            page,
            scroll: env.scroll.clone(),
            search_draft,
            pending_events: Vec::new(),
            last_offset: env.scroll.offset(),
            animation: None,
            visuals_applied: false,
        }
    }

    fn process_ui_events(&mut self) {
        for event in self.pending_events.drain(..) {
            apply_ui_event(&mut self.page, &self.scroll, event);
        }
    }

    fn start_requested_scroll(&mut self, now: f64) {
        if let Some(request) = self.scroll.take_scroll_request() {
            self.animation = Some(ScrollAnimation::start(request, self.last_offset, now));
        }
    }

    fn show_page(&mut self, ctx: &egui::Context, now: f64) {
        let view = self.page.render();
        let query = self.page.gallery.as_ref().map(|gallery| gallery.query().clone());

        if let Some(banner) = &view.banner {
            panels::show_banner(ctx, banner, &mut self.pending_events);
        }
        if let Some(button) = &view.back_to_top {
            panels::show_back_to_top(ctx, button, &mut self.pending_events);
        }

        let forced_offset = self.animation.map(|animation| animation.offset_at(now));
        if self.animation.is_some_and(|animation| animation.is_finished(now)) {
            self.animation = None;
        }

        let search_draft = &mut self.search_draft;
        let pending_events = &mut self.pending_events;
        let output = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let mut area = egui::ScrollArea::vertical()
                    .id_salt("page_scroll")
                    .auto_shrink([false, false]);
                if let Some(offset) = forced_offset {
                    area = area.vertical_scroll_offset(offset);
                }
                area.show(ui, |ui| {
                    ui.heading("Projects");
                    ui.add_space(8.0);
                    if let (Some(query), Some(gallery)) = (&query, &view.gallery) {
                        panels::show_gallery_controls(ui, query, search_draft, pending_events);
                        ui.add_space(12.0);
                        panels::show_gallery(ui, gallery);
                    }
                    panels::show_host_sections(ui);
                })
            })
            .inner;

        let offset = output.state.offset.y;
        if (offset - self.last_offset).abs() > f32::EPSILON {
            self.last_offset = offset;
            self.pending_events.push(UiEvent::Scrolled(offset));
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.visuals_applied {
            theme::apply_page_visuals(ctx);
            self.visuals_applied = true;
        }

        let now = ctx.input(|input| input.time);
        self.process_ui_events();
        self.start_requested_scroll(now);
        self.show_page(ctx, now);

        if self.animation.is_some() || !self.pending_events.is_empty() {
            ctx.request_repaint();
        }
    }
}
