use std::time::{Duration, Instant};

use eframe::egui;

use crate::ops::dev_time::{self, FALLBACK_MINUTES};
use crate::types::catalog::Catalog;
use crate::types::stage::StagePlan;
use crate::types::timer_state::ProcessTimer;
use crate::ui::calculator_panel::{self, Selection};
use crate::ui::catalog_panel::catalog_panel;
use crate::ui::timer_widget::timer_panel;

/// Converts wall-clock time into whole-second ticks. The timer state machine
/// itself never reads the clock; this driver is the only place real time
/// enters, and it is consulted only while a countdown is running.
pub struct TickDriver {
    last: Option<Instant>,
}

impl TickDriver {
    pub fn new() -> Self {
        TickDriver { last: None }
    }

    /// Whole seconds elapsed since the last call. Fractional remainders are
    /// carried over so ticks never drift.
    pub fn elapsed_whole_seconds(&mut self) -> u32 {
        let now = Instant::now();
        match self.last {
            None => {
                self.last = Some(now);
                0
            }
            Some(last) => {
                let secs = now.duration_since(last).as_secs();
                if secs > 0 {
                    self.last = Some(last + Duration::from_secs(secs));
                }
                secs as u32
            }
        }
    }

    /// Forget the reference instant. Called on every path that ends a
    /// countdown so a later start does not see a stale backlog of ticks.
    pub fn disarm(&mut self) {
        self.last = None;
    }
}

impl Default for TickDriver {
    fn default() -> Self {
        Self::new()
    }
}

pub struct AppState {
    pub catalog: Catalog,
    pub selection: Selection,
    pub temperature_c: f64,
    pub timer: ProcessTimer,
    pub tick_driver: TickDriver,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        let selection = Selection::for_catalog(&catalog);
        let mut state = AppState {
            catalog,
            selection,
            temperature_c: dev_time::REFERENCE_TEMP_C,
            timer: ProcessTimer::new(StagePlan::new(0)),
            tick_driver: TickDriver::new(),
        };
        state.timer = ProcessTimer::new(state.current_plan());
        state
    }

    /// Resolve the current selection and temperature into a stage plan.
    /// Untabulated pairs fall back to the documented 7-minute default.
    pub fn current_plan(&self) -> StagePlan {
        let minutes = calculator_panel::developer_minutes(&self.catalog, &self.selection)
            .unwrap_or(FALLBACK_MINUTES);
        let seconds =
            dev_time::temperature_adjusted_seconds(minutes, self.temperature_c).round() as u32;
        StagePlan::new(seconds)
    }
}

pub struct DevTankApp {
    pub state: AppState,
}

impl DevTankApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for DevTankApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Advance the countdown by however many whole seconds have passed
        // since the last frame, then keep frames coming while running.
        if self.state.timer.is_running() {
            for _ in 0..self.state.tick_driver.elapsed_whole_seconds() {
                self.state.timer.tick();
            }
            ctx.request_repaint_after(Duration::from_millis(100));
        } else {
            self.state.tick_driver.disarm();
        }

        // Selection or temperature changes re-resolve the plan; an active
        // countdown keeps the durations it was started with.
        self.state.timer.set_plan(self.state.current_plan());

        egui::SidePanel::left("catalog_panel")
            .min_width(240.0)
            .show(ctx, |ui| {
                catalog_panel(ui, &mut self.state.catalog, &mut self.state.selection);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                calculator_panel::calculator_panel(
                    ui,
                    &self.state.catalog,
                    &mut self.state.selection,
                );
                ui.add_space(16.0);
                ui.separator();
                timer_panel(ui, &mut self.state.timer, &mut self.state.temperature_c);
            });
        });
    }
}
