//! Chartify Motion Main Application
//! One window with the bar, line and pie charts side by side, each with its
//! own controls.

use crate::charts::{BarChart, Chart, LineChart, PieChart, SvgRenderer};
use crate::config::AppConfig;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use egui::{RichText, ScrollArea};
use rand::rngs::StdRng;
use rand::SeedableRng;

const CHART_SPACING: f32 = 15.0;

/// A chart together with its controls.
struct ChartCard {
    chart: Box<dyn Chart>,
    panel: ControlPanel,
}

/// Main application window.
pub struct ChartsApp {
    cards: Vec<ChartCard>,
    chart_viewer: ChartViewer,
    rng: StdRng,
}

/// Frame clock in milliseconds.
fn frame_time(ctx: &egui::Context) -> f64 {
    ctx.input(|i| i.time) * 1000.0
}

impl ChartsApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let mut app = Self::with_charts(vec![
            Box::new(BarChart::new(config.bar)),
            Box::new(LineChart::new(config.line)),
            Box::new(PieChart::new(config.pie)),
        ]);
        app.initialize(frame_time(&cc.egui_ctx));
        app
    }

    fn with_charts(charts: Vec<Box<dyn Chart>>) -> Self {
        Self {
            cards: charts
                .into_iter()
                .map(|chart| ChartCard {
                    chart,
                    panel: ControlPanel::new(),
                })
                .collect(),
            chart_viewer: ChartViewer::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Draw every chart's first data set.
    fn initialize(&mut self, now: f64) {
        for card in &mut self.cards {
            match card.chart.initialize(&mut self.rng, now) {
                Ok(report) => card
                    .panel
                    .set_status(&format!("{} elements", report.entered)),
                Err(e) => {
                    tracing::warn!(chart = card.chart.title(), error = %e, "initialize failed");
                    card.panel.set_error(&format!("Error: {}", e));
                }
            }
        }
    }

    fn handle_update(card: &mut ChartCard, rng: &mut StdRng, now: f64) {
        match card.chart.on_activate(rng, now) {
            Ok(report) => card.panel.set_status(&format!(
                "{} elements (+{} / -{})",
                card.chart.element_count(),
                report.entered,
                report.exited
            )),
            Err(e) => {
                tracing::warn!(chart = card.chart.title(), error = %e, "update failed");
                card.panel.set_error(&format!("Error: {}", e));
            }
        }
    }

    /// Render the chart as it looks right now and put the SVG on the clipboard.
    fn handle_copy_svg(ctx: &egui::Context, card: &mut ChartCard, now: f64) {
        match SvgRenderer::render(&card.chart.scene(now)) {
            Ok(svg) => {
                tracing::info!(chart = card.chart.title(), bytes = svg.len(), "copied svg");
                ctx.copy_text(svg);
                card.panel.set_status("SVG copied to clipboard");
            }
            Err(e) => {
                tracing::warn!(chart = card.chart.title(), error = %e, "svg export failed");
                card.panel.set_error(&format!("Error: {}", e));
            }
        }
    }

    fn is_animating(&self, now: f64) -> bool {
        self.cards.iter().any(|card| card.chart.is_animating(now))
    }
}

impl eframe::App for ChartsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = frame_time(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
                ui.horizontal_top(|ui| {
                    for card in &mut self.cards {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(card.chart.title()).size(18.0).strong());
                            ui.add_space(8.0);

                            self.chart_viewer.show(ui, card.chart.as_mut(), now);

                            ui.add_space(8.0);
                            match card.panel.show(ui) {
                                ControlPanelAction::Update => {
                                    Self::handle_update(card, &mut self.rng, now)
                                }
                                ControlPanelAction::CopySvg => {
                                    Self::handle_copy_svg(ctx, card, now)
                                }
                                ControlPanelAction::None => {}
                            }
                        });
                        ui.add_space(CHART_SPACING);
                    }
                });
            });
        });

        // Keep frames coming until every transition has settled.
        if self.is_animating(now) {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartConfig;

    #[test]
    fn cards_report_animation_until_settled() {
        let mut app = ChartsApp::with_charts(vec![
            Box::new(BarChart::new(ChartConfig::sized(500.0, 300.0))),
            Box::new(PieChart::new(ChartConfig::sized(300.0, 300.0))),
        ]);
        app.rng = StdRng::seed_from_u64(5);
        app.initialize(0.0);
        assert!(!app.is_animating(0.0));
        assert!(app.cards.iter().all(|card| !card.panel.is_error));

        ChartsApp::handle_update(&mut app.cards[0], &mut app.rng, 100.0);
        assert!(app.is_animating(200.0));
        assert!(!app.is_animating(100.0 + 750.0));
    }

    #[test]
    fn update_before_initialize_sets_error_status() {
        let mut app =
            ChartsApp::with_charts(vec![Box::new(LineChart::new(ChartConfig::default()))]);
        ChartsApp::handle_update(&mut app.cards[0], &mut app.rng, 0.0);
        assert!(app.cards[0].panel.is_error);
    }
}
