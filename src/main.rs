//! The GUI shell: an eframe window wiring user actions to the selection
//! session and pushing rendered forecasts into a scrollable text pane.
//!
//! Every workflow runs to completion on the UI thread via `block_on`; one
//! user action maps to one synchronous network-and-format pipeline.

use eframe::egui;
use pointcast::{
    parse_coordinates, point_forecast, render_forecast, ForecastKind, LatLon, NwsClient,
    PointcastError, Session, STATE_CODES,
};
use tokio::runtime::Runtime;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1400.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Pointcast",
        native_options,
        Box::new(|_cc| Ok(Box::new(PointcastApp::new()?))),
    )
}

struct ErrorDialog {
    title: &'static str,
    message: String,
}

struct PointcastApp {
    runtime: Runtime,
    session: Session,

    // Selection state
    state_choice: String,
    zone_names: Vec<String>,
    zone_choice: String,
    station_names: Vec<String>,
    station_choice: String,
    lat_text: String,
    lon_text: String,
    kind: ForecastKind,

    // Output surfaces
    display: String,
    error: Option<ErrorDialog>,
}

impl PointcastApp {
    fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        let client = NwsClient::builder().build()?;
        Ok(Self {
            runtime,
            session: Session::new(client),
            state_choice: String::new(),
            zone_names: Vec::new(),
            zone_choice: String::new(),
            station_names: Vec::new(),
            station_choice: String::new(),
            lat_text: String::new(),
            lon_text: String::new(),
            kind: ForecastKind::Hourly,
            display: String::new(),
            error: None,
        })
    }

    /// A state was picked: resolve its zones (the session auto-advances to
    /// the first zone's stations) and refresh both downstream combos.
    fn on_state_chosen(&mut self) {
        let state = self.state_choice.clone();
        match self
            .runtime
            .block_on(self.session.resolve_zones_for_state(&state))
        {
            Ok(zones) => {
                self.zone_names = zones;
                self.zone_choice = self.zone_names.first().cloned().unwrap_or_default();
                self.station_names = self.session.station_names().to_vec();
                self.station_choice = self.station_names.first().cloned().unwrap_or_default();
            }
            Err(err) => self.report_error(err),
        }
    }

    fn on_zone_chosen(&mut self) {
        let zone = self.zone_choice.clone();
        match self
            .runtime
            .block_on(self.session.resolve_stations_for_zone(&zone))
        {
            Ok(stations) => {
                self.station_names = stations;
                self.station_choice = self.station_names.first().cloned().unwrap_or_default();
            }
            Err(err) => self.report_error(err),
        }
    }

    fn on_station_search(&mut self) {
        let result = self.runtime.block_on(async {
            let location = self
                .session
                .resolve_coordinates_for_station(&self.station_choice)
                .await?;
            self.fetch_and_render(location).await
        });
        self.show_forecast(result);
    }

    fn on_coordinate_search(&mut self) {
        let location = match parse_coordinates(&self.lat_text, &self.lon_text) {
            Ok(location) => location,
            Err(err) => return self.report_error(err.into()),
        };
        let result = self.runtime.block_on(self.fetch_and_render(location));
        self.show_forecast(result);
    }

    async fn fetch_and_render(&self, location: LatLon) -> Result<String, PointcastError> {
        let periods = point_forecast(self.session.client(), location, self.kind)
            .await
            .map_err(PointcastError::from)?;
        render_forecast(self.kind, &periods).map_err(PointcastError::from)
    }

    fn show_forecast(&mut self, result: Result<String, PointcastError>) {
        match result {
            // Always replace the pane content wholesale.
            Ok(text) => self.display = text,
            Err(err) => self.report_error(err),
        }
    }

    /// The user-facing error sink: a modal dialog with a title and message.
    fn report_error(&mut self, err: PointcastError) {
        log::warn!("Workflow aborted: {}", err);
        let title = match err {
            PointcastError::Selection(_) => "Invalid Selection",
            PointcastError::Fetch(_) | PointcastError::Forecast(_) => "API Failed",
        };
        self.error = Some(ErrorDialog {
            title,
            message: err.to_string(),
        });
    }

    fn error_window(&mut self, ctx: &egui::Context) {
        let mut dismissed = false;
        if let Some(dialog) = &self.error {
            egui::Window::new(dialog.title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(&dialog.message);
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
        }
        if dismissed {
            self.error = None;
        }
    }
}

impl eframe::App for PointcastApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.error_window(ctx);

        let mut state_picked = false;
        let mut zone_picked = false;
        let mut search_station = false;
        let mut search_coords = false;

        egui::SidePanel::left("controls")
            .resizable(true)
            .show(ctx, |ui| {
                ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);
                ui.heading("Search by State, Zone, Station");

                ui.horizontal(|ui| {
                    ui.label("States");
                    egui::ComboBox::from_id_salt("state_combo")
                        .selected_text(self.state_choice.as_str())
                        .show_ui(ui, |ui| {
                            for code in STATE_CODES {
                                if ui
                                    .selectable_value(&mut self.state_choice, code.to_string(), code)
                                    .clicked()
                                {
                                    state_picked = true;
                                }
                            }
                        });
                });

                ui.horizontal(|ui| {
                    ui.label("Zones");
                    egui::ComboBox::from_id_salt("zone_combo")
                        .selected_text(self.zone_choice.as_str())
                        .show_ui(ui, |ui| {
                            for name in &self.zone_names {
                                if ui
                                    .selectable_value(&mut self.zone_choice, name.clone(), name)
                                    .clicked()
                                {
                                    zone_picked = true;
                                }
                            }
                        });
                });

                ui.horizontal(|ui| {
                    ui.label("Stations");
                    egui::ComboBox::from_id_salt("station_combo")
                        .selected_text(self.station_choice.as_str())
                        .show_ui(ui, |ui| {
                            for name in &self.station_names {
                                ui.selectable_value(&mut self.station_choice, name.clone(), name);
                            }
                        });
                });

                ui.separator();
                ui.heading("Search by Latitude, Longitude");

                ui.horizontal(|ui| {
                    ui.label("Latitude");
                    ui.text_edit_singleline(&mut self.lat_text);
                });
                ui.horizontal(|ui| {
                    ui.label("Longitude");
                    ui.text_edit_singleline(&mut self.lon_text);
                });

                ui.separator();

                ui.horizontal(|ui| {
                    egui::ComboBox::from_id_salt("kind_combo")
                        .selected_text(self.kind.to_string())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut self.kind, ForecastKind::Hourly, "Hourly");
                            ui.selectable_value(&mut self.kind, ForecastKind::Daily, "Daily");
                        });
                    if ui.button("Search by Station").clicked() {
                        search_station = true;
                    }
                    if ui.button("Search by Coordinates").clicked() {
                        search_coords = true;
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().auto_shrink([false; 2]).show(ui, |ui| {
                ui.monospace(self.display.as_str());
            });
        });

        if state_picked {
            self.on_state_chosen();
        }
        if zone_picked {
            self.on_zone_chosen();
        }
        if search_station {
            self.on_station_search();
        }
        if search_coords {
            self.on_coordinate_search();
        }
    }
}
