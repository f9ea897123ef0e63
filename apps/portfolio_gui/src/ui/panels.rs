//! Page sections drawn from widget view models. Panels never mutate widget
//! state; user input is queued as [`UiEvent`]s for the reducer.

use eframe::egui;
use shared::{QueryState, SortOrder, TagFilter, ViewMode};
use widget_core::{
    gallery::{self, CARD_GAP, SEARCH_PLACEHOLDER},
    BackToTopView, BannerView, GalleryContent, GalleryView, ProjectCard,
};

use crate::{controller::events::UiEvent, ui::theme};

/// Static sections of the host page around the widgets.
const HOST_SECTIONS: [(&str, &str); 3] = [
    (
        "About",
        "Front-end developer focused on accessible layouts, small interactive widgets, \
         and pages that load fast on any connection.",
    ),
    (
        "Skills",
        "Semantic HTML, modern CSS layout (grid and flexbox), vanilla JavaScript, \
         and interface design from wireframe to polished mock.",
    ),
    (
        "Contact",
        "Open to freelance work and collaborations. Reach out through the links in \
         the footer.",
    ),
];

pub fn show_banner(ctx: &egui::Context, view: &BannerView, events: &mut Vec<UiEvent>) {
    egui::TopBottomPanel::top("welcome_banner")
        .frame(
            egui::Frame::NONE
                .fill(theme::ACCENT)
                .inner_margin(egui::Margin::symmetric(16, 10)),
        )
        .show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    egui::RichText::new(view.headline)
                        .strong()
                        .color(egui::Color32::WHITE),
                );
                ui.label(egui::RichText::new(view.message).color(egui::Color32::WHITE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let dismiss = egui::Button::new(
                        egui::RichText::new(view.dismiss_label).color(theme::ACCENT),
                    )
                    .fill(egui::Color32::WHITE)
                    .corner_radius(6.0);
                    if ui.add(dismiss).clicked() {
                        events.push(UiEvent::DismissBanner);
                    }
                });
            });
        });
}

pub fn show_back_to_top(ctx: &egui::Context, view: &BackToTopView, events: &mut Vec<UiEvent>) {
    egui::Area::new(egui::Id::new("back_to_top"))
        .order(egui::Order::Foreground)
        .anchor(
            egui::Align2::RIGHT_BOTTOM,
            egui::vec2(-view.right_margin, -view.bottom_margin),
        )
        .show(ctx, |ui| {
            let button = egui::Button::new(egui::RichText::new(view.icon).size(18.0))
                .fill(egui::Color32::WHITE)
                .stroke(egui::Stroke::new(1.0, theme::CARD_BORDER))
                .corner_radius(16.0)
                .min_size(egui::vec2(36.0, 36.0));
            if ui.add(button).on_hover_text(view.label).clicked() {
                events.push(UiEvent::BackToTopClicked);
            }
        });
}

pub fn show_host_sections(ui: &mut egui::Ui) {
    for (heading, body) in HOST_SECTIONS {
        ui.add_space(24.0);
        ui.heading(heading);
        ui.add_space(4.0);
        ui.label(body);
    }
    ui.add_space(480.0);
}

/// Search box, tag and sort selectors, and the grid/list toggle.
pub fn show_gallery_controls(
    ui: &mut egui::Ui,
    query: &QueryState,
    search_draft: &mut String,
    events: &mut Vec<UiEvent>,
) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(12.0, 8.0);

        let search = egui::TextEdit::singleline(search_draft)
            .id_salt("project_search")
            .hint_text(SEARCH_PLACEHOLDER)
            .desired_width(240.0);
        if ui.add(search).changed() {
            events.push(UiEvent::SearchChanged(search_draft.clone()));
        }

        let mut tag_filter = query.tag_filter;
        egui::ComboBox::from_id_salt("tag_filter")
            .selected_text(tag_filter.label())
            .show_ui(ui, |ui| {
                for option in TagFilter::OPTIONS {
                    ui.selectable_value(&mut tag_filter, option, option.label());
                }
            });
        if tag_filter != query.tag_filter {
            events.push(UiEvent::TagFilterSelected(tag_filter));
        }

        let mut sort_order = query.sort_order;
        egui::ComboBox::from_id_salt("sort_order")
            .selected_text(sort_order.label())
            .show_ui(ui, |ui| {
                for option in SortOrder::OPTIONS {
                    ui.selectable_value(&mut sort_order, option, option.label());
                }
            });
        if sort_order != query.sort_order {
            events.push(UiEvent::SortOrderSelected(sort_order));
        }

        let mut view_mode = query.view_mode;
        for option in ViewMode::OPTIONS {
            ui.selectable_value(&mut view_mode, option, option.label());
        }
        if view_mode != query.view_mode {
            events.push(UiEvent::ViewModeSelected(view_mode));
        }
    });
}

pub fn show_gallery(ui: &mut egui::Ui, view: &GalleryView) {
    match &view.content {
        GalleryContent::Placeholder { message } => {
            theme::card_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(*message);
            });
        }
        GalleryContent::Cards { cards } => {
            let columns = gallery::columns_for(view.layout, ui.available_width());
            let gaps = CARD_GAP * (columns.saturating_sub(1)) as f32;
            let card_width = ((ui.available_width() - gaps) / columns as f32).max(120.0);

            egui::Grid::new("project_cards")
                .num_columns(columns)
                .spacing([CARD_GAP, CARD_GAP])
                .show(ui, |ui| {
                    for (index, card) in cards.iter().enumerate() {
                        show_card(ui, card, card_width);
                        if (index + 1) % columns == 0 {
                            ui.end_row();
                        }
                    }
                });
        }
    }
}

fn show_card(ui: &mut egui::Ui, card: &ProjectCard, width: f32) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(width - 2.0 * f32::from(theme::CARD_PADDING));
        ui.label(egui::RichText::new(card.title.as_str()).heading());
        ui.add_space(4.0);
        ui.label(card.description.as_str());
        if let Some(link) = &card.link {
            ui.add_space(4.0);
            ui.hyperlink_to(link.label, &link.href);
        }
    });
}
