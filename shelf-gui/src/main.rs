//! shelf GUI
//!
//! Desktop form for browsing and editing a book catalog: entry fields, a
//! record table, and add/search/update/delete commands over the store.

mod app;
mod settings;
mod views;
mod widgets;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([780.0, 520.0])
            .with_min_inner_size([600.0, 380.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Shelf Library Manager",
        options,
        Box::new(|cc| Ok(Box::new(app::ShelfApp::new(cc)))),
    )
}
