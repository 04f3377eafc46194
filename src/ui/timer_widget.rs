use eframe::egui;

use crate::ops::dev_time::{self, REFERENCE_TEMP_C, SECONDS_PER_DEGREE};
use crate::types::stage::Stage;
use crate::types::timer_state::ProcessTimer;

fn stage_color(stage: Stage) -> egui::Color32 {
    match stage {
        Stage::PreSoak => egui::Color32::from_rgb(147, 51, 234),
        Stage::Developer => egui::Color32::from_rgb(59, 130, 246),
        Stage::StopBath => egui::Color32::from_rgb(234, 179, 8),
        Stage::Fixer => egui::Color32::from_rgb(34, 197, 94),
        Stage::Wash => egui::Color32::from_rgb(14, 165, 233),
    }
}

pub fn timer_panel(ui: &mut egui::Ui, timer: &mut ProcessTimer, temperature_c: &mut f64) {
    ui.heading("冲洗进度 Development Progress");
    ui.separator();

    // Bath temperature input. Entry is constrained to the darkroom range;
    // the model itself extrapolates freely.
    ui.horizontal(|ui| {
        ui.label("温度设置 Temperature (°C)");
        ui.add(
            egui::DragValue::new(temperature_c)
                .speed(0.5)
                .range(15.0..=25.0),
        );
        if *temperature_c != REFERENCE_TEMP_C {
            let delta = ((REFERENCE_TEMP_C - *temperature_c) * SECONDS_PER_DEGREE).round() as i64;
            let sign = if delta > 0 { "+" } else { "-" };
            ui.label(format!("显影 {sign}{}秒 / {sign}{}s", delta.abs(), delta.abs()));
        }
    });

    ui.add_space(8.0);

    for stage in Stage::ALL {
        stage_card(ui, timer, stage);
        ui.add_space(6.0);
    }

    ui.horizontal(|ui| {
        if ui
            .add_enabled(timer.is_running(), egui::Button::new("暂停 Stop"))
            .clicked()
        {
            timer.stop();
        }
        if ui.button("重置 Reset").clicked() {
            timer.reset();
        }
    });
}

fn stage_card(ui: &mut egui::Ui, timer: &mut ProcessTimer, stage: Stage) {
    let color = stage_color(stage);
    let is_current = timer.current_stage() == Some(stage);
    let is_active = is_current && timer.is_running();
    let duration = timer.duration_of(stage);

    let fill = if is_active {
        color.gamma_multiply(0.25)
    } else {
        color.gamma_multiply(0.08)
    };

    egui::Frame::group(ui.style())
        .fill(fill)
        .stroke(egui::Stroke::new(if is_active { 2.0 } else { 1.0 }, color))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(format!("{} {}", stage.name_zh(), stage.name_en()))
                            .strong(),
                    );
                    ui.label(format!("🕐 {}", dev_time::format_mmss(duration)));
                    if stage.is_temperature_critical() {
                        ui.label(
                            egui::RichText::new("温度敏感 temperature critical")
                                .size(10.0)
                                .color(egui::Color32::GRAY),
                        );
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add_enabled(!timer.is_running(), egui::Button::new("开始 Start"))
                        .clicked()
                    {
                        timer.start(stage);
                    }
                    if is_current {
                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(dev_time::format_mmss(
                                    timer.seconds_remaining(),
                                ))
                                .size(28.0)
                                .strong(),
                            );
                            if let Some(next) = timer.next_agitation() {
                                let urgent = next <= 5;
                                let text = format!("↻ 搅拌 agitate {}", dev_time::format_mmss(next));
                                ui.label(if urgent {
                                    egui::RichText::new(text).color(egui::Color32::RED).strong()
                                } else {
                                    egui::RichText::new(text)
                                });
                            }
                        });
                    }
                });
            });
            let progress = timer.progress_percent(stage) / 100.0;
            ui.add(
                egui::ProgressBar::new(progress)
                    .fill(color)
                    .desired_height(6.0),
            );
        });
}
