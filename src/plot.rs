use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::errors::{SizingError, SizingResult};
use crate::sweep::driver::{CostCurve, SweepReport};

pub struct CostCurveApp {
    curves: Vec<CostCurve>,
}

impl CostCurveApp {
    pub fn new(report: &SweepReport) -> Self {
        CostCurveApp {
            curves: report.cost_curves(),
        }
    }
}

impl eframe::App for CostCurveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.curves.is_empty() {
                ui.label("No scenarios to plot");
                return;
            }

            Plot::new("cost_vs_range")
                .legend(Legend::default())
                .x_axis_label("Range (km)")
                .y_axis_label("Cost per passenger-km")
                .show(ui, |plot_ui| {
                    for curve in &self.curves {
                        let plot_points: PlotPoints = curve.points.clone().into();
                        plot_ui.line(Line::new(plot_points).name(&curve.name));
                    }
                });
        });
    }
}

/// Opens a window with one cost-vs-range line per scenario and blocks until it closes.
pub fn show_cost_curves(report: &SweepReport) -> SizingResult<()> {
    let app = CostCurveApp::new(report);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_title("Cost per passenger-km vs range"),
        ..Default::default()
    };

    eframe::run_native(
        "Cost vs range",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|err| SizingError::Plot(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::model::Aircraft;
    use crate::aircraft::params::AircraftParams;
    use crate::sweep::driver::{run_sweep, SweepSettings};

    #[test]
    fn test_one_curve_per_scenario() {
        let mut aircraft = Aircraft::new(AircraftParams::bwb_example());
        let report = run_sweep(&mut aircraft, &SweepSettings::default());

        let app = CostCurveApp::new(&report);

        assert_eq!(app.curves.len(), 9);
        assert!(app.curves.iter().all(|curve| curve.points.len() == 51));
        assert_eq!(app.curves[0].name, "fixed cost 60000");
    }
}
