use egui_extras::{Column, TableBuilder};

use shelf_catalog::Book;

use crate::app::ShelfApp;

/// Render the striped, clickable record table.
///
/// Clicking a row selects it and copies its values into the entry fields.
pub fn show(ui: &mut egui::Ui, app: &mut ShelfApp) {
    // Snapshot row data so the table closures don't hold a borrow of app
    let rows: Vec<Book> = app.books.clone();

    let text_height = egui::TextStyle::Body
        .resolve(ui.style())
        .size
        .max(ui.spacing().interact_size.y);
    let available_height = ui.available_height();

    let mut clicked: Option<usize> = None;

    let table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(48.0)) // ID
        .column(Column::initial(240.0).at_least(120.0)) // Title
        .column(Column::initial(180.0).at_least(100.0)) // Author
        .column(Column::initial(64.0).at_least(48.0)) // Year
        .column(Column::initial(130.0).at_least(80.0)) // ISBN
        .min_scrolled_height(0.0)
        .max_scroll_height(available_height);

    table
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("ID");
            });
            header.col(|ui| {
                ui.strong("Title");
            });
            header.col(|ui| {
                ui.strong("Author");
            });
            header.col(|ui| {
                ui.strong("Year");
            });
            header.col(|ui| {
                ui.strong("ISBN");
            });
        })
        .body(|body| {
            body.rows(text_height, rows.len(), |mut row| {
                let idx = row.index();
                let book = &rows[idx];
                row.set_selected(app.selected == Some(book.id));

                let mut cell = |ui: &mut egui::Ui, text: &str| {
                    let response = ui.add(egui::Label::new(text).sense(egui::Sense::click()));
                    if response.clicked() {
                        clicked = Some(idx);
                    }
                };

                row.col(|ui| cell(ui, &book.id.to_string()));
                row.col(|ui| cell(ui, &book.title));
                row.col(|ui| cell(ui, &book.author));
                row.col(|ui| cell(ui, &book.year.to_string()));
                row.col(|ui| cell(ui, &book.isbn.to_string()));
            });
        });

    if let Some(idx) = clicked {
        app.select_row(&rows[idx]);
    }
}
