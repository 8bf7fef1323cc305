use std::path::{Path, PathBuf};

use shelf_catalog::{Book, BookInput};
use shelf_db::{BookStore, StorageError};

use crate::settings::{self, AppSettings, RecentCatalog};
use crate::views;

/// A modal message box.
pub struct Dialog {
    pub title: &'static str,
    pub text: String,
}

impl Dialog {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            title: "Error",
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            title: "Warning",
            text: text.into(),
        }
    }
}

/// Main application state.
pub struct ShelfApp {
    /// Open record store; `None` when the catalog failed to open.
    pub store: Option<BookStore>,

    /// Path of the catalog file behind `store`.
    pub catalog_path: PathBuf,

    /// Raw text of the four entry fields.
    pub input: BookInput,

    /// Rows currently shown in the table.
    pub books: Vec<Book>,

    /// id of the selected table row.
    pub selected: Option<i64>,

    /// Modal message box, if any.
    pub dialog: Option<Dialog>,

    /// Book id waiting for delete confirmation.
    pub confirm_delete: Option<i64>,

    /// One-line summary shown above the table.
    pub status: String,

    /// Persisted settings.
    pub settings: AppSettings,
}

impl ShelfApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings = settings::load_settings();
        let catalog_path = settings
            .current_catalog
            .clone()
            .unwrap_or_else(shelf_db::default_catalog_path);

        let mut app = Self {
            store: None,
            catalog_path: catalog_path.clone(),
            input: BookInput::default(),
            books: Vec::new(),
            selected: None,
            dialog: None,
            confirm_delete: None,
            status: String::new(),
            settings,
        };
        app.open_catalog(catalog_path);
        app
    }

    /// Switch to a catalog file, creating it (and its parent dir) if absent.
    pub fn open_catalog(&mut self, path: PathBuf) {
        // Release the previous handle before opening the new file
        self.store = None;
        self.clear_fields();

        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                self.books.clear();
                self.status.clear();
                self.dialog = Some(Dialog::error(format!(
                    "Could not create {}: {e}",
                    parent.display()
                )));
                return;
            }
        }

        match BookStore::open(&path) {
            Ok(store) => {
                log::info!("Opened catalog at {}", path.display());
                self.store = Some(store);
                self.catalog_path = path.clone();
                self.update_recent(&path);
                self.settings.current_catalog = Some(path);
                if let Err(e) = settings::save_settings(&self.settings) {
                    log::warn!("Failed to save settings: {}", e);
                }
                self.refresh();
            }
            Err(e) => {
                self.books.clear();
                self.status.clear();
                self.dialog = Some(Dialog::error(format!(
                    "Failed to open catalog at {}: {e}",
                    path.display()
                )));
            }
        }
    }

    /// Reload the table with every record (the View All command).
    pub fn refresh(&mut self) {
        let Some(store) = &self.store else { return };
        match store.list_all() {
            Ok(books) => {
                self.status = format!("{} books", books.len());
                self.books = books;
            }
            Err(e) => self.report_storage_error("load the catalog", e),
        }
    }

    /// Validate the entry fields and insert a new record.
    pub fn add(&mut self) {
        let fields = match self.input.parse() {
            Ok(fields) => fields,
            Err(e) => {
                self.dialog = Some(Dialog::warning(e.to_string()));
                return;
            }
        };
        let Some(store) = &self.store else { return };
        match store.insert(&fields.title, &fields.author, fields.year, fields.isbn) {
            Ok(id) => {
                log::info!("Added book #{id}");
                self.clear_fields();
                self.refresh();
            }
            Err(e) => self.report_storage_error("add the book", e),
        }
    }

    /// Run a search from the entry fields and show the matches.
    pub fn search(&mut self) {
        let filter = match self.input.parse_filter() {
            Ok(filter) => filter,
            Err(e) => {
                self.dialog = Some(Dialog::warning(e.to_string()));
                return;
            }
        };
        let Some(store) = &self.store else { return };
        match store.search(&filter) {
            Ok(books) => {
                self.status = format!("{} matches", books.len());
                self.books = books;
            }
            Err(e) => self.report_storage_error("search the catalog", e),
        }
    }

    /// Replace the selected record with the entry field values.
    pub fn update_selected(&mut self) {
        let Some(id) = self.selected else {
            self.dialog = Some(Dialog::warning("Select a book to update."));
            return;
        };
        let fields = match self.input.parse() {
            Ok(fields) => fields,
            Err(e) => {
                self.dialog = Some(Dialog::warning(e.to_string()));
                return;
            }
        };
        let Some(store) = &self.store else { return };
        match store.update(id, &fields.title, &fields.author, fields.year, fields.isbn) {
            Ok(()) => {
                log::info!("Updated book #{id}");
                self.clear_fields();
                self.refresh();
            }
            Err(e) => self.report_storage_error("update the book", e),
        }
    }

    /// Ask for confirmation before deleting the selected record.
    pub fn request_delete(&mut self) {
        match self.selected {
            Some(id) => self.confirm_delete = Some(id),
            None => self.dialog = Some(Dialog::warning("Select a book to delete.")),
        }
    }

    fn delete_confirmed(&mut self, id: i64) {
        let Some(store) = &self.store else { return };
        match store.delete(id) {
            Ok(()) => {
                log::info!("Deleted book #{id}");
                self.clear_fields();
                self.refresh();
            }
            Err(e) => self.report_storage_error("delete the book", e),
        }
    }

    /// Clear the entry fields and drop the table selection.
    pub fn clear_fields(&mut self) {
        self.input = BookInput::default();
        self.selected = None;
    }

    /// Populate the entry fields from a clicked table row.
    pub fn select_row(&mut self, book: &Book) {
        self.selected = Some(book.id);
        self.input = BookInput {
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year.to_string(),
            isbn: book.isbn.to_string(),
        };
    }

    fn report_storage_error(&mut self, action: &str, e: StorageError) {
        log::error!("Failed to {action}: {e}");
        self.dialog = Some(Dialog::error(format!("Failed to {action}: {e}")));
    }

    /// Add/move a path to the front of the recent-catalogs list.
    fn update_recent(&mut self, path: &Path) {
        let recent = &mut self.settings.recent_catalogs;
        recent.retain(|r| r.path != path);
        recent.insert(
            0,
            RecentCatalog {
                path: path.to_path_buf(),
                last_opened: chrono::Utc::now().to_rfc3339(),
            },
        );
        recent.truncate(10);
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open Catalog...").clicked() {
                    ui.close_menu();
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("SQLite catalog", &["db"])
                        .pick_file()
                    {
                        self.open_catalog(path);
                    }
                }
                if ui.button("New Catalog...").clicked() {
                    ui.close_menu();
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("SQLite catalog", &["db"])
                        .set_file_name("library.db")
                        .save_file()
                    {
                        self.open_catalog(path);
                    }
                }

                let recents = self.settings.recent_catalogs.clone();
                if !recents.is_empty() {
                    ui.separator();
                    let mut open_recent = None;
                    for recent in &recents {
                        if ui.button(recent.path.display().to_string()).clicked() {
                            open_recent = Some(recent.path.clone());
                            ui.close_menu();
                        }
                    }
                    if let Some(path) = open_recent {
                        self.open_catalog(path);
                    }
                }

                ui.separator();
                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
    }

    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(id) = self.confirm_delete {
            let mut choice = None;
            egui::Window::new("Confirm Delete")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label("Are you sure you want to delete the selected book?");
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.button("Delete").clicked() {
                            choice = Some(true);
                        }
                        if ui.button("Cancel").clicked() {
                            choice = Some(false);
                        }
                    });
                });
            if let Some(confirmed) = choice {
                self.confirm_delete = None;
                if confirmed {
                    self.delete_confirmed(id);
                }
            }
        }

        if let Some(dialog) = &self.dialog {
            let mut dismissed = false;
            egui::Window::new(dialog.title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(&dialog.text);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            if dismissed {
                self.dialog = None;
            }
        }
    }
}

impl eframe::App for ShelfApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.show_menu(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            views::catalog::show(ui, self);
        });

        self.show_dialogs(ctx);
    }
}
