//! Overlay widgets: header, roam hint, title plaques and the artwork detail panel
//!
//! The render functions only draw and report what was clicked; applying the
//! result to the gallery is left to the caller.

use atelier_core::Artwork;
use bevy_egui::egui;

use crate::types::UiLayout;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(0xd4, 0xa3, 0x73);
const TEXT: egui::Color32 = egui::Color32::from_rgb(0xfa, 0xed, 0xcd);
const PLAQUE_ARTIST: egui::Color32 = egui::Color32::from_rgb(0x88, 0x88, 0x88);

/// Plaque title height in world units; the artist line is 0.6 of it
pub const PLAQUE_TEXT_HEIGHT: f32 = 0.1;

/// Plaques projected smaller than this many pixels are not drawn
const PLAQUE_MIN_PX: f32 = 4.0;

/// Header opacity while an artwork is being inspected
const DIMMED: f32 = 0.5;

/// Buttons pressed on the detail panel this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Previous,
    Next,
    Close,
}

/// Year and medium line shown above the title
pub fn panel_kicker(artwork: &Artwork) -> String {
    format!("{} — {}", artwork.year, artwork.medium).to_uppercase()
}

pub fn artist_note(artwork: &Artwork) -> String {
    format!(
        "\"{} explores themes that resonate with the digital age while respecting classical composition.\"",
        artwork.artist
    )
}

/// Title and artist lines of the plaque under a frame
pub fn plaque_lines(artwork: &Artwork) -> (String, String) {
    (artwork.title.to_uppercase(), artwork.artist.clone())
}

/// Title plaque pinned to a projected point under an artwork.
///
/// `text_px` is the on-screen height of [`PLAQUE_TEXT_HEIGHT`] at that
/// point, so the label shrinks with distance like text on the wall would.
pub fn render_plaque(ctx: &egui::Context, index: usize, anchor: egui::Pos2, text_px: f32, artwork: &Artwork) {
    if text_px < PLAQUE_MIN_PX {
        return;
    }
    let (title, artist) = plaque_lines(artwork);

    egui::Area::new(egui::Id::new(("plaque", index)))
        .order(egui::Order::Background)
        .fixed_pos(anchor)
        .pivot(egui::Align2::CENTER_TOP)
        .interactable(false)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(title).size(text_px).color(TEXT));
                ui.label(
                    egui::RichText::new(artist)
                        .size(text_px * 0.6)
                        .color(PLAQUE_ARTIST),
                );
            });
        });
}

/// Title and controls hint in the top-left corner
pub fn render_header(ctx: &egui::Context, layout: &UiLayout, inspecting: bool) {
    let scale = layout.ui_scale();
    let margin = layout.margin();

    egui::Area::new(egui::Id::new("gallery_header"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(margin, margin))
        .interactable(false)
        .show(ctx, |ui| {
            if inspecting {
                ui.set_opacity(DIMMED);
            }
            ui.label(
                egui::RichText::new("NEO-ATELIER")
                    .size(40.0 * scale)
                    .color(ACCENT),
            );
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Use").color(TEXT));
                ui.label(egui::RichText::new("Arrows / WASD").strong().color(ACCENT));
                ui.label(egui::RichText::new("to move.").color(TEXT));
            });
            ui.label(egui::RichText::new("Click on a painting to inspect.").color(ACCENT));
        });
}

/// Pulsing prompt at the bottom of the screen, shown while roaming
pub fn render_explore_hint(ctx: &egui::Context, layout: &UiLayout) {
    let time = ctx.input(|i| i.time) as f32;
    let opacity = 0.6 + 0.4 * (time * 2.0).sin().abs();

    egui::Area::new(egui::Id::new("explore_hint"))
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -layout.margin()))
        .interactable(false)
        .show(ctx, |ui| {
            ui.set_opacity(opacity);
            ui.label(
                egui::RichText::new("EXPLORE THE SPACE")
                    .small()
                    .color(TEXT),
            );
        });
}

/// Right-hand detail panel for the inspected artwork
pub fn render_artwork_panel(
    ctx: &egui::Context,
    layout: &UiLayout,
    artwork: &Artwork,
    position_label: &str,
) -> Option<PanelAction> {
    let scale = layout.ui_scale();
    let mut action = None;

    egui::SidePanel::right("artwork_panel")
        .exact_width(layout.detail_panel_width())
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(16.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(egui::RichText::new("✕").size(18.0 * scale)).clicked() {
                    action = Some(PanelAction::Close);
                }
            });
            ui.add_space(24.0);

            ui.label(
                egui::RichText::new(panel_kicker(artwork))
                    .small()
                    .strong()
                    .color(ACCENT),
            );
            ui.label(
                egui::RichText::new(&artwork.title)
                    .size(32.0 * scale)
                    .color(TEXT),
            );
            ui.label(egui::RichText::new(&artwork.artist).italics());
            ui.separator();

            egui::ScrollArea::vertical()
                .max_height(layout.screen_height * 0.5)
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(&artwork.description).size(16.0 * scale));
                    ui.add_space(16.0);

                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.label(
                            egui::RichText::new("ARTIST NOTE")
                                .small()
                                .strong()
                                .color(ACCENT),
                        );
                        ui.label(egui::RichText::new(artist_note(artwork)).italics());
                    });
                });

            ui.add_space(16.0);
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("← PREVIOUS").clicked() {
                    action = Some(PanelAction::Previous);
                }
                ui.label(
                    egui::RichText::new(position_label)
                        .small()
                        .color(egui::Color32::GRAY),
                );
                if ui.button("NEXT →").clicked() {
                    action = Some(PanelAction::Next);
                }
            });
        });

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::Catalog;

    #[test]
    fn test_panel_text() {
        let catalog = Catalog::bundled().unwrap();
        let art = catalog.find("art-5").unwrap();
        assert_eq!(panel_kicker(art), "CIRCA 1950 — MIXED MEDIA");
        assert!(artist_note(art).starts_with("\"Unknown explores"));
    }

    #[test]
    fn test_plaque_lines() {
        let catalog = Catalog::bundled().unwrap();
        let art = catalog.find("art-1").unwrap();
        let (title, artist) = plaque_lines(art);
        assert_eq!(title, "THE SILENT VOID");
        assert_eq!(artist, art.artist);
    }
}
