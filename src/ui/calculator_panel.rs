use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::ops::dev_time::{self, IsoStop};
use crate::types::catalog::Catalog;

/// Calculator selection state that persists between frames.
#[derive(Debug, Clone)]
pub struct Selection {
    pub film_id: String,
    pub developer_id: String,
    pub stop: IsoStop,
    /// A freshly picked stop shows the standard time until the user
    /// confirms it; only a confirmed stop drives the computed duration.
    pub iso_confirmed: bool,
}

impl Selection {
    /// Select the first film and developer the catalog offers.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Selection {
            film_id: catalog
                .films()
                .first()
                .map(|f| f.id.clone())
                .unwrap_or_default(),
            developer_id: catalog
                .developers()
                .first()
                .map(|d| d.id.clone())
                .unwrap_or_default(),
            stop: IsoStop::BoxSpeed,
            iso_confirmed: true,
        }
    }

    pub fn pick_stop(&mut self, stop: IsoStop) {
        self.stop = stop;
        self.iso_confirmed = false;
    }

    pub fn confirm_stop(&mut self) {
        self.iso_confirmed = true;
    }
}

/// Development time in minutes for the current selection, or None when the
/// film/developer pair has no tabulated data. An unconfirmed stop falls back
/// to the standard time.
pub fn developer_minutes(catalog: &Catalog, selection: &Selection) -> Option<f64> {
    let times = catalog.times_for(&selection.film_id, &selection.developer_id);
    let stop = if selection.iso_confirmed {
        selection.stop
    } else {
        IsoStop::BoxSpeed
    };
    dev_time::duration_for_stop(times, stop)
}

fn stop_note(stop: IsoStop) -> Option<(&'static str, &'static str)> {
    match stop {
        IsoStop::PushTwo => Some((
            "极限推片（+2挡）会导致很高的对比度和明显的颗粒感。",
            "Extreme pushing (+2 stops) results in very high contrast and pronounced grain.",
        )),
        IsoStop::PushOne => Some((
            "推片（+1、+2挡）增加对比度和颗粒感，需要延长显影时间。",
            "Pushing (+1, +2 stops) increases contrast and grain. Extend development time.",
        )),
        IsoStop::PullOne => Some((
            "欠冲（-1、-2挡）降低对比度和颗粒感，需要缩短显影时间。",
            "Pulling (-1, -2 stops) reduces contrast and grain. Reduce development time.",
        )),
        IsoStop::PullTwo => Some((
            "极限欠冲（-2挡）会导致很低的对比度和柔和的色调。",
            "Extreme pulling (-2 stops) results in very low contrast and muted tones.",
        )),
        IsoStop::BoxSpeed => None,
    }
}

pub fn calculator_panel(ui: &mut egui::Ui, catalog: &Catalog, selection: &mut Selection) {
    ui.heading("推拉冲洗指南 Push/Pull Processing Guide");
    ui.separator();

    let Some(film) = catalog.film(&selection.film_id) else {
        ui.label("请先在左侧选择胶片 / Pick a film in the catalog panel");
        return;
    };

    // Stop picker, labelled with the effective ISO each stop would give
    ui.label(format!(
        "当前ISO设置 Current ISO Setting: {}",
        dev_time::effective_iso(film.iso, selection.stop)
    ));
    ui.horizontal(|ui| {
        for stop in IsoStop::ALL {
            let label = format!(
                "{} ({})",
                stop.label(),
                dev_time::effective_iso(film.iso, stop)
            );
            if ui
                .selectable_label(selection.stop == stop, label)
                .clicked()
            {
                selection.pick_stop(stop);
            }
        }
        if !selection.iso_confirmed && ui.button("确认 Confirm").clicked() {
            selection.confirm_stop();
        }
    });

    if let Some((zh, en)) = stop_note(selection.stop) {
        ui.label(egui::RichText::new(format!("⚠ {zh}")).color(egui::Color32::YELLOW));
        ui.label(egui::RichText::new(format!("⚠ {en}")).color(egui::Color32::YELLOW));
    }

    ui.add_space(8.0);

    match developer_minutes(catalog, selection) {
        Some(minutes) => {
            ui.label(
                egui::RichText::new(format!("显影时间 Development time: {minutes:.1} min"))
                    .size(20.0)
                    .strong(),
            );
            if !selection.iso_confirmed {
                ui.label("未确认的ISO设置按标准时间显示 / Unconfirmed stop shown at standard time");
            }
        }
        None => {
            ui.label(
                "该胶片与显影液组合暂无数据 / No data available for this film and developer combination",
            );
        }
    }

    ui.add_space(8.0);
    ui.label("全部参数 All stops:");
    stop_table(ui, catalog, selection);
}

/// Reference table: development time at every stop for the selected pair.
fn stop_table(ui: &mut egui::Ui, catalog: &Catalog, selection: &Selection) {
    let film = catalog.film(&selection.film_id);
    let times = catalog.times_for(&selection.film_id, &selection.developer_id);

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("挡位 Stop");
            });
            header.col(|ui| {
                ui.strong("相当于 ISO");
            });
            header.col(|ui| {
                ui.strong("时间 Time (min)");
            });
        })
        .body(|mut body| {
            for stop in IsoStop::ALL {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(stop.label());
                    });
                    row.col(|ui| {
                        match film {
                            Some(f) => {
                                ui.label(dev_time::effective_iso(f.iso, stop).to_string());
                            }
                            None => {
                                ui.label("—");
                            }
                        };
                    });
                    row.col(|ui| {
                        match dev_time::duration_for_stop(times, stop) {
                            Some(minutes) => {
                                ui.label(format!("{minutes:.1}"));
                            }
                            None => {
                                ui.label("暂无数据 no data");
                            }
                        };
                    });
                });
            }
        });
}
