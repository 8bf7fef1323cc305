use crate::app::ShelfApp;
use crate::widgets;

/// Render the entry form, command buttons, and book table.
pub fn show(ui: &mut egui::Ui, app: &mut ShelfApp) {
    // Entry fields, two per row like the original form
    egui::Grid::new("book_fields")
        .num_columns(4)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Title:");
            ui.add(egui::TextEdit::singleline(&mut app.input.title).desired_width(240.0));
            ui.label("Author:");
            ui.add(egui::TextEdit::singleline(&mut app.input.author).desired_width(240.0));
            ui.end_row();

            ui.label("Year:");
            ui.add(egui::TextEdit::singleline(&mut app.input.year).desired_width(100.0));
            ui.label("ISBN:");
            ui.add(egui::TextEdit::singleline(&mut app.input.isbn).desired_width(140.0));
            ui.end_row();
        });

    ui.add_space(6.0);

    ui.horizontal(|ui| {
        if ui.button("View All").clicked() {
            app.refresh();
        }
        if ui.button("Search").clicked() {
            app.search();
        }
        if ui.button("Add").clicked() {
            app.add();
        }
        if ui.button("Update Selected").clicked() {
            app.update_selected();
        }
        if ui.button("Delete Selected").clicked() {
            app.request_delete();
        }
        if ui.button("Clear Fields").clicked() {
            app.clear_fields();
        }
        if ui.button("Close").clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });

    ui.separator();

    ui.horizontal(|ui| {
        ui.label(&app.status);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(app.catalog_path.display().to_string());
        });
    });

    ui.add_space(2.0);

    widgets::book_table::show(ui, app);
}
