/*!
 * Desktop viewer for countries-rs - REST Countries data browser
 *
 * A cross-platform desktop application providing:
 * - The full country table in the order the API returned it
 * - Region filter, sort column and sort direction selectors
 * - Download of the filtered and sorted rows as CSV
 *
 * Platform support: Windows, macOS, Linux
 */

use countries_rs::export::{self, EXPORT_FILE_NAME};
use countries_rs::format::{cell, LOCALES};
use countries_rs::{
    Client, ClientConfig, Column, CountryRecord, FetchCache, FetchError, LoadOutcome, SortOrder,
    TableView,
};
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([640.0, 400.0])
            .with_title("REST Countries - countries-rs"),
        ..Default::default()
    };

    eframe::run_native(
        "REST Countries",
        options,
        Box::new(|_cc| Ok(Box::new(CountriesApp::new(ClientConfig::from_env())))),
    )
}

type FetchResult = Result<Vec<CountryRecord>, FetchError>;

/// Main application state
struct CountriesApp {
    client: Option<Client>,
    cache: FetchCache,
    table: TableView,

    // Export options
    download_dir: PathBuf,
    locale: String,

    // UI state
    is_loading: bool,
    status_message: String,
    error_message: String,

    // Background fetch
    fetch_receiver: Option<mpsc::Receiver<FetchResult>>,
}

impl CountriesApp {
    fn new(config: ClientConfig) -> Self {
        let download_dir = dirs::download_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        let mut app = Self {
            client: None,
            cache: FetchCache::new(),
            table: TableView::default(),
            download_dir,
            locale: "en".to_string(),
            is_loading: false,
            status_message: String::new(),
            error_message: String::new(),
            fetch_receiver: None,
        };

        match Client::new(config) {
            Ok(client) => {
                app.client = Some(client);
                app.load();
            }
            Err(err) => app.apply_outcome(LoadOutcome::from_result(Err(err))),
        }
        app
    }

    /// Serve from the cache when possible, otherwise fetch on a helper thread.
    fn load(&mut self) {
        let Some(client) = self.client.clone() else {
            return;
        };
        if let Some(rows) = self.cache.get(client.endpoint()) {
            let rows = rows.to_vec();
            self.apply_outcome(LoadOutcome { rows, error: None });
            return;
        }

        self.is_loading = true;
        self.error_message.clear();
        self.status_message = "Loading data...".to_string();

        let (sender, receiver) = mpsc::channel();
        self.fetch_receiver = Some(receiver);
        thread::spawn(move || {
            let _ = sender.send(client.fetch());
        });
    }

    fn reload(&mut self) {
        if let Some(client) = &self.client {
            self.cache.invalidate(client.endpoint());
        }
        self.load();
    }

    /// Take the helper thread's result, if any. A thread that exits without sending
    /// clears the loading state and reports an error.
    fn check_fetch_result(&mut self) {
        let Some(receiver) = &self.fetch_receiver else {
            return;
        };
        let result = match receiver.try_recv() {
            Ok(result) => result,
            Err(mpsc::TryRecvError::Empty) => return,
            Err(mpsc::TryRecvError::Disconnected) => {
                self.is_loading = false;
                self.fetch_receiver = None;
                self.status_message.clear();
                self.error_message = "The fetch ended without a result.".to_string();
                return;
            }
        };
        self.is_loading = false;
        self.fetch_receiver = None;

        if let (Ok(rows), Some(client)) = (&result, &self.client) {
            self.cache.insert(client.endpoint(), rows.clone());
        }
        self.apply_outcome(LoadOutcome::from_result(result));
    }

    fn apply_outcome(&mut self, outcome: LoadOutcome) {
        match outcome.error {
            Some(err) => {
                self.error_message = err;
                self.status_message.clear();
            }
            None => {
                self.error_message.clear();
                self.status_message = format!("Loaded {} countries.", outcome.rows.len());
            }
        }
        self.table.set_rows(outcome.rows);
    }

    fn download(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_directory(&self.download_dir)
            .set_file_name(EXPORT_FILE_NAME)
            .add_filter("CSV", &["csv"])
            .save_file()
        else {
            return;
        };

        match export::save_csv(self.table.displayed(), &path) {
            Ok(()) => {
                if let Some(dir) = path.parent() {
                    self.download_dir = dir.to_path_buf();
                }
                self.status_message = format!(
                    "Saved {} rows to {}",
                    self.table.displayed().len(),
                    path.display()
                );
                self.error_message.clear();
            }
            Err(err) => self.error_message = format!("Failed to save CSV: {err:#}"),
        }
    }

    fn selectors_ui(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label("Filter by Region");
            let mut region = self.table.region().clone();
            egui::ComboBox::from_id_salt("region")
                .selected_text(region.label().to_string())
                .show_ui(ui, |ui| {
                    for option in self.table.region_options() {
                        let label = option.label().to_string();
                        ui.selectable_value(&mut region, option, label);
                    }
                });
            self.table.set_region(region);
        });

        ui.add_space(5.0);

        ui.group(|ui| {
            ui.label("Sort by Column");
            let mut sort = self.table.sort();
            ui.horizontal(|ui| {
                egui::ComboBox::from_id_salt("sort_column")
                    .selected_text(sort.column.label())
                    .show_ui(ui, |ui| {
                        for column in Column::ALL {
                            ui.selectable_value(&mut sort.column, column, column.label());
                        }
                    });
                ui.radio_value(&mut sort.order, SortOrder::Ascending, "Ascending");
                ui.radio_value(&mut sort.order, SortOrder::Descending, "Descending");
            });
            self.table.set_sort(sort);
        });

        ui.collapsing("Display Options", |ui| {
            ui.horizontal(|ui| {
                ui.label("Number format:");
                egui::ComboBox::from_id_salt("locale")
                    .selected_text(&self.locale)
                    .show_ui(ui, |ui| {
                        for (tag, name) in LOCALES {
                            ui.selectable_value(&mut self.locale, tag.to_string(), name);
                        }
                    });
            });
        });
    }

    fn table_ui(&self, ui: &mut egui::Ui, id: &str, rows: &[CountryRecord], max_height: f32) {
        egui::ScrollArea::both()
            .id_salt(id)
            .auto_shrink([false, false])
            .max_height(max_height)
            .show(ui, |ui| {
                egui::Grid::new(id)
                    .striped(true)
                    .min_col_width(60.0)
                    .show(ui, |ui| {
                        for column in Column::ALL {
                            ui.strong(column.label());
                        }
                        ui.end_row();
                        for row in rows {
                            for column in Column::ALL {
                                let text = cell(row, column, &self.locale);
                                if column.is_text() {
                                    ui.label(text);
                                } else {
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| ui.label(text),
                                    );
                                }
                            }
                            ui.end_row();
                        }
                    });
            });
    }
}

impl eframe::App for CountriesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_fetch_result();

        if self.is_loading {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Data Visualization: REST Countries API");
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!self.is_loading, egui::Button::new("Reload"))
                    .on_hover_text("Drop the cached result and fetch again")
                    .clicked()
                {
                    self.reload();
                }
                if self.is_loading {
                    ui.spinner();
                    ui.label("Loading...");
                }
            });

            if !self.status_message.is_empty() {
                ui.colored_label(egui::Color32::DARK_GREEN, &self.status_message);
            }
            if !self.error_message.is_empty() {
                ui.colored_label(egui::Color32::RED, &self.error_message);
            }

            ui.add_space(10.0);

            if self.table.is_empty() {
                if !self.is_loading {
                    ui.label("No data found to display.");
                }
                return;
            }

            egui::CollapsingHeader::new(format!(
                "Original data ({} countries)",
                self.table.source().len()
            ))
            .default_open(true)
            .show(ui, |ui| {
                self.table_ui(ui, "original_table", self.table.source(), 200.0);
            });
            ui.add_space(10.0);

            self.selectors_ui(ui);
            ui.add_space(10.0);

            ui.label(format!(
                "Filtered and sorted data ({} of {} countries):",
                self.table.displayed().len(),
                self.table.source().len()
            ));
            let max_height = ui.available_height() - 40.0;
            self.table_ui(ui, "filtered_table", self.table.displayed(), max_height);

            ui.add_space(5.0);
            if ui.button("Download filtered data").clicked() {
                self.download();
            }
        });
    }
}
