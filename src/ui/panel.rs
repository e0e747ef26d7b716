//! Mission briefing panel for the selected project.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::focus::FocusController;
use crate::showcase::{self, ProjectInfo};
use crate::ui::icons;

mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(16, 16, 26, 235);
    pub const PANEL_BORDER: Color32 = Color32::from_rgb(60, 60, 80);
    pub const HEADING: Color32 = Color32::from_rgb(230, 230, 240);
    pub const BODY: Color32 = Color32::from_rgb(180, 180, 195);
    pub const MUTED: Color32 = Color32::from_rgb(130, 130, 150);
}

/// Project accent color as an egui color.
fn accent(project: &ProjectInfo) -> egui::Color32 {
    egui::Color32::from_rgb(
        (project.color.0 * 255.0) as u8,
        (project.color.1 * 255.0) as u8,
        (project.color.2 * 255.0) as u8,
    )
}

/// Render the briefing panel while a selection is active.
pub fn briefing_panel(mut contexts: EguiContexts, mut focus: ResMut<FocusController>) {
    let Some(id) = focus.selected else {
        return;
    };

    // Selection of an id with no registry entry shows nothing; the
    // selection itself stays valid.
    let Some(project) = showcase::find(id) else {
        return;
    };

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let accent = accent(project);
    let mut close_requested = false;

    egui::Window::new("mission_briefing")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::LEFT_CENTER, egui::vec2(24.0, 0.0))
        .frame(
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::same(16))
                .stroke(egui::Stroke::new(1.0, colors::PANEL_BORDER))
                .corner_radius(8),
        )
        .show(ctx, |ui| {
            ui.set_max_width(340.0);

            // Header
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("\u{25CF}").color(accent).size(12.0));
                ui.label(
                    egui::RichText::new("MISSION BRIEFING")
                        .color(colors::MUTED)
                        .monospace()
                        .size(11.0),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(egui::RichText::new(icons::CLOSE).size(14.0))
                        .on_hover_text("Close briefing")
                        .clicked()
                    {
                        close_requested = true;
                    }
                });
            });

            ui.label(
                egui::RichText::new(project.title)
                    .color(colors::HEADING)
                    .strong()
                    .size(22.0),
            );

            ui.separator();

            ui.label(egui::RichText::new(project.description).color(colors::BODY).size(13.0));

            ui.add_space(8.0);

            // Tech stack chips
            section_header(ui, icons::ROCKET, "TECHNOLOGY STACK", accent);
            ui.horizontal_wrapped(|ui| {
                for tech in project.tech {
                    egui::Frame::new()
                        .fill(accent.gamma_multiply(0.15))
                        .stroke(egui::Stroke::new(1.0, accent.gamma_multiply(0.4)))
                        .corner_radius(6)
                        .inner_margin(egui::Margin::symmetric(8, 3))
                        .show(ui, |ui| {
                            ui.label(egui::RichText::new(*tech).color(accent).size(12.0));
                        });
                }
            });

            if let Some(challenge) = project.challenge {
                ui.add_space(8.0);
                section_header(ui, icons::TARGET, "THE CHALLENGE", accent);
                ui.label(egui::RichText::new(challenge).color(colors::BODY).size(12.0));
            }

            if let Some(solution) = project.solution {
                ui.add_space(8.0);
                section_header(ui, icons::LIGHTBULB, "THE SOLUTION", accent);
                ui.label(egui::RichText::new(solution).color(colors::BODY).size(12.0));
            }

            if !project.impact.is_empty() {
                ui.add_space(8.0);
                section_header(ui, icons::TREND_UP, "IMPACT METRICS", accent);
                for metric in project.impact {
                    ui.label(
                        egui::RichText::new(format!("\u{2022} {metric}"))
                            .color(colors::BODY)
                            .size(12.0),
                    );
                }
            }

            if !project.features.is_empty() {
                ui.add_space(8.0);
                section_header(ui, icons::CHECKS, "FEATURES", accent);
                for feature in project.features {
                    ui.label(
                        egui::RichText::new(format!("\u{2022} {feature}"))
                            .color(colors::MUTED)
                            .size(12.0),
                    );
                }
            }

            // Links
            if project.live_url.is_some() || project.source_url.is_some() {
                ui.add_space(10.0);
                ui.separator();
                ui.horizontal(|ui| {
                    if let Some(url) = project.live_url {
                        ui.hyperlink_to(
                            egui::RichText::new(format!("{} View Live", icons::LINK_OUT))
                                .color(accent),
                            url,
                        );
                    }
                    if let Some(url) = project.source_url {
                        ui.hyperlink_to(
                            egui::RichText::new(format!("{} Source Code", icons::GITHUB))
                                .color(colors::BODY),
                            url,
                        );
                    }
                });
            }
        });

    if close_requested {
        focus.deselect();
    }
}

fn section_header(ui: &mut egui::Ui, icon: &str, title: &str, accent: egui::Color32) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(icon).color(accent).size(13.0));
        ui.label(
            egui::RichText::new(title)
                .color(colors::MUTED)
                .monospace()
                .size(11.0),
        );
    });
}
