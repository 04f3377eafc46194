use eframe::egui;
use tracing::warn;

use crate::types::catalog::Catalog;
use crate::ui::calculator_panel::Selection;

pub fn catalog_panel(ui: &mut egui::Ui, catalog: &mut Catalog, selection: &mut Selection) {
    ui.vertical(|ui| {
        ui.heading("器材目录 Catalog");
        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("导入 Load…").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Catalog", &["json"])
                    .pick_file()
                {
                    match Catalog::load_from_file(&path.to_string_lossy()) {
                        Ok(loaded) => {
                            *catalog = loaded;
                            *selection = Selection::for_catalog(catalog);
                        }
                        Err(e) => warn!(error = %e, "failed to load catalog"),
                    }
                }
            }
            if ui.button("导出 Save…").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Catalog", &["json"])
                    .save_file()
                {
                    if let Err(e) = catalog.save_to_file(&path.to_string_lossy()) {
                        warn!(error = %e, "failed to save catalog");
                    }
                }
            }
        });

        ui.add_space(8.0);

        if catalog.films().is_empty() {
            ui.label("目录为空 / Catalog is empty");
            return;
        }

        ui.label("胶片 Film Stock");
        let film_text = catalog
            .film(&selection.film_id)
            .map(|f| format!("{} / {} (ISO {})", f.name_zh, f.name_en, f.iso))
            .unwrap_or_else(|| "—".to_string());
        egui::ComboBox::from_id_salt("film_picker")
            .width(ui.available_width())
            .selected_text(film_text)
            .show_ui(ui, |ui| {
                for film in catalog.films() {
                    ui.selectable_value(
                        &mut selection.film_id,
                        film.id.clone(),
                        format!("{} / {} (ISO {})", film.name_zh, film.name_en, film.iso),
                    );
                }
            });

        ui.add_space(4.0);

        ui.label("显影液 Developer");
        let dev_text = catalog
            .developer(&selection.developer_id)
            .map(|d| format!("{} / {}", d.name_zh, d.name_en))
            .unwrap_or_else(|| "—".to_string());
        egui::ComboBox::from_id_salt("developer_picker")
            .width(ui.available_width())
            .selected_text(dev_text)
            .show_ui(ui, |ui| {
                for dev in catalog.developers() {
                    ui.selectable_value(
                        &mut selection.developer_id,
                        dev.id.clone(),
                        format!("{} / {}", dev.name_zh, dev.name_en),
                    );
                }
            });

        if let Some(dev) = catalog.developer(&selection.developer_id) {
            ui.label(
                egui::RichText::new(format!("{} / {}", dev.description_zh, dev.description_en))
                    .size(10.0)
                    .color(egui::Color32::GRAY),
            );
        }

        ui.add_space(8.0);
        ui.separator();
        ui.label(format!(
            "{} 种胶片 films · {} 种显影液 developers",
            catalog.films().len(),
            catalog.developers().len()
        ));
    });
}
