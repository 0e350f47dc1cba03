use aq_chem::{SpeciationSweep, SweepRange, sweep_hco3_at_fixed_dic, sweep_ph_at_fixed_pco2};
use egui_plot::{Legend, Line, Plot, PlotPoints};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum ChartKind {
    /// Species concentrations vs pH at fixed PCO2
    #[default]
    SpeciesVsPh,
    /// PCO2 vs HCO3- at fixed DIC
    Pco2VsHco3,
}

pub struct AquacarbApp {
    chart: ChartKind,
    fixed_pco2_atm: f64,
    fixed_dic_mol_per_l: f64,
    cached_ph_sweep: Option<(f64, SpeciationSweep)>,
    cached_hco3_sweep: Option<(f64, SpeciationSweep)>,
}

impl AquacarbApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            chart: ChartKind::default(),
            fixed_pco2_atm: 4.0e-4,
            fixed_dic_mol_per_l: 1.0e-4,
            cached_ph_sweep: None,
            cached_hco3_sweep: None,
        }
    }

    fn ph_sweep(&mut self) -> Option<&SpeciationSweep> {
        let stale = self
            .cached_ph_sweep
            .as_ref()
            .is_none_or(|(pco2, _)| *pco2 != self.fixed_pco2_atm);
        if stale {
            let range = SweepRange::linear(0.0, 14.0, 0.1).ok()?;
            let sweep = sweep_ph_at_fixed_pco2(&range, self.fixed_pco2_atm).ok()?;
            self.cached_ph_sweep = Some((self.fixed_pco2_atm, sweep));
        }
        self.cached_ph_sweep.as_ref().map(|(_, sweep)| sweep)
    }

    fn hco3_sweep(&mut self) -> Option<&SpeciationSweep> {
        let stale = self
            .cached_hco3_sweep
            .as_ref()
            .is_none_or(|(dic, _)| *dic != self.fixed_dic_mol_per_l);
        if stale {
            let range = SweepRange::geometric(1.0e-8, self.fixed_dic_mol_per_l, 1.2).ok()?;
            let sweep = sweep_hco3_at_fixed_dic(&range, self.fixed_dic_mol_per_l).ok()?;
            self.cached_hco3_sweep = Some((self.fixed_dic_mol_per_l, sweep));
        }
        self.cached_hco3_sweep.as_ref().map(|(_, sweep)| sweep)
    }

    fn show_species_vs_ph(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Fixed PCO2 (atm):");
            ui.add(
                egui::Slider::new(&mut self.fixed_pco2_atm, 1.0e-6..=1.0e-1).logarithmic(true),
            );
        });
        ui.separator();

        let (ph, h2co3, hco3, co3) = match self.ph_sweep() {
            Some(sweep) => (
                sweep.successful_independent_values(),
                sweep.h2co3_mol_per_l(),
                sweep.hco3_mol_per_l(),
                sweep.co3_mol_per_l(),
            ),
            None => {
                ui.colored_label(egui::Color32::RED, "Sweep failed for the current PCO2");
                return;
            }
        };

        let mut lines = Vec::new();
        for (name, values) in [("H2CO3", &h2co3), ("HCO3-", &hco3), ("CO3--", &co3)] {
            // log-scale concentration axis, rendered as log10 values
            let points: Vec<[f64; 2]> = ph
                .iter()
                .zip(values.iter())
                .filter(|(_, v)| **v > 0.0)
                .map(|(x, v)| [*x, v.log10()])
                .collect();

            if !points.is_empty() {
                let plot_points: PlotPoints = points.into();
                lines.push(Line::new(plot_points).name(name));
            }
        }

        Plot::new("species_vs_ph")
            .legend(Legend::default())
            .x_axis_label("pH")
            .y_axis_label("log10 concentration (mol/L)")
            .show(ui, |plot_ui| {
                for line in lines {
                    plot_ui.line(line);
                }
            });
    }

    fn show_pco2_vs_hco3(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Fixed DIC (mol/L):");
            ui.add(
                egui::Slider::new(&mut self.fixed_dic_mol_per_l, 1.0e-7..=1.0e-2)
                    .logarithmic(true),
            );
        });
        ui.separator();

        let (hco3, pco2, num_failed) = match self.hco3_sweep() {
            Some(sweep) => (
                sweep.successful_independent_values(),
                sweep.pco2_atm(),
                sweep.num_failed,
            ),
            None => {
                ui.colored_label(egui::Color32::RED, "Sweep failed for the current DIC");
                return;
            }
        };

        if num_failed > 0 {
            ui.label(format!(
                "{num_failed} samples near HCO3- = DIC are ill-posed and were skipped"
            ));
        }

        let points: Vec<[f64; 2]> = hco3
            .iter()
            .zip(pco2.iter())
            .map(|(x, y)| [*x, *y])
            .collect();
        let plot_points: PlotPoints = points.into();
        let line = Line::new(plot_points).name("PCO2");

        Plot::new("pco2_vs_hco3")
            .legend(Legend::default())
            .x_axis_label("HCO3- concentration (mol/L)")
            .y_axis_label("PCO2 (atm)")
            .show(ui, |plot_ui| {
                plot_ui.line(line);
            });
    }
}

impl eframe::App for AquacarbApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("chart_selector").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Chart:");
                ui.selectable_value(&mut self.chart, ChartKind::SpeciesVsPh, "Species vs pH");
                ui.selectable_value(&mut self.chart, ChartKind::Pco2VsHco3, "PCO2 vs HCO3-");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.chart {
            ChartKind::SpeciesVsPh => self.show_species_vs_ph(ui),
            ChartKind::Pco2VsHco3 => self.show_pco2_vs_hco3(ui),
        });
    }
}
