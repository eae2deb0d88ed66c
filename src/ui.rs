//! egui window wiring the five entry fields, three buttons and the record list to
//! the [`LogEditor`].

use std::{cell::RefCell, rc::Rc};

use eframe::egui;
use egui_extras::{Column as TableColumn, TableBuilder};

use hamlog::{
    config::AppConfig,
    editor::{
        controller::{EditorError, EditorResult, LogActions, LogEditor},
        events::EditorEvent,
        table::SortedView,
    },
    persist::{StoreError, sqlite::SqliteContactStore},
    types::{Column, ContactId},
};

/// Storage fault raised inside the event loop, handed back to `main`.
pub type FatalSlot = Rc<RefCell<Option<StoreError>>>;

const BUTTON_SIZE: [f32; 2] = [80.0, 22.0];
const ROW_HEIGHT: f32 = 18.0;
const ID_COLUMN_WIDTH: f32 = 30.0;

enum UiAction {
    Add,
    Modify,
    Delete,
    Select(ContactId),
}

struct HamLogApp {
    editor: LogEditor<SqliteContactStore>,
    view: SortedView,
    warning: Option<String>,
    fatal: FatalSlot,
}

/// Opens the log window and blocks until it closes.
pub fn run(
    config: &AppConfig,
    editor: LogEditor<SqliteContactStore>,
    fatal: FatalSlot,
) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&config.window_title)
            .with_inner_size(config.window_size)
            .with_min_inner_size([600.0, 300.0]),
        ..Default::default()
    };

    let app = HamLogApp {
        view: SortedView::new(editor.rows()),
        editor,
        warning: None,
        fatal,
    };

    eframe::run_native(
        &config.window_title,
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}

impl HamLogApp {
    fn entry_panel(&mut self, ui: &mut egui::Ui) -> Option<UiAction> {
        let mut action = None;
        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
            ui.vertical(|ui| {
                let fields = self.editor.fields_mut();
                egui::Grid::new("contact_fields")
                    .num_columns(2)
                    .spacing([8.0, 4.0])
                    .show(ui, |ui| {
                        for (label, value) in [
                            ("Callsign", &mut fields.callsign),
                            ("Frequency", &mut fields.frequency),
                            ("Mode", &mut fields.mode),
                            ("Date", &mut fields.date),
                            ("Time", &mut fields.time),
                        ] {
                            ui.label(label);
                            ui.text_edit_singleline(value);
                            ui.end_row();
                        }
                    });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.add_sized(BUTTON_SIZE, egui::Button::new("Add")).clicked() {
                        action = Some(UiAction::Add);
                    }
                    if ui.add_sized(BUTTON_SIZE, egui::Button::new("Modify")).clicked() {
                        action = Some(UiAction::Modify);
                    }
                    if ui.add_sized(BUTTON_SIZE, egui::Button::new("Delete")).clicked() {
                        action = Some(UiAction::Delete);
                    }
                });
            });
        });
        action
    }

    fn log_list(&mut self, ui: &mut egui::Ui) -> Option<ContactId> {
        let rows = self.view.rows();
        let table = self.view.table();
        let selected = self.editor.selected();
        let mut heading_clicked = None;
        let mut picked = None;

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .auto_shrink([false, false])
            .sense(egui::Sense::click())
            .column(TableColumn::exact(ID_COLUMN_WIDTH))
            .columns(TableColumn::remainder().at_least(60.0), 5)
            .header(20.0, |mut header| {
                for column in Column::ALL {
                    header.col(|ui| {
                        if ui.button(table.heading_label(column)).clicked() {
                            heading_clicked = Some(column);
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                    let rec = &rows[row.index()];
                    row.set_selected(selected == Some(rec.id));
                    row.col(|ui| {
                        ui.label(rec.id.to_string());
                    });
                    for column in &Column::ALL[1..] {
                        row.col(|ui| {
                            ui.label(rec.text(*column).unwrap_or_default());
                        });
                    }
                    if row.response().clicked() {
                        picked = Some(rec.id);
                    }
                });
            });

        if let Some(column) = heading_clicked {
            self.view.click_heading(column);
        }
        picked
    }

    fn warning_window(&mut self, ctx: &egui::Context) {
        let Some(message) = self.warning.as_deref() else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new(EditorError::WARNING_TITLE)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.warning = None;
        }
    }

    fn dispatch(&mut self, ctx: &egui::Context, result: EditorResult<EditorEvent>) {
        match result {
            Ok(EditorEvent::Selected { id }) => log::debug!("selected contact {id}"),
            Ok(event) => {
                log::debug!("editor event: {event:?}");
                self.view.rebuild(self.editor.rows());
            }
            Err(err @ EditorError::NothingSelected(_)) => {
                log::warn!("{err}");
                self.warning = Some(err.to_string());
            }
            Err(EditorError::UnknownRow(id)) => {
                log::debug!("ignoring selection of unlisted row {id}");
            }
            Err(EditorError::Store(err)) => {
                log::error!("storage fault, closing log: {err}");
                *self.fatal.borrow_mut() = Some(err);
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }
}

impl eframe::App for HamLogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut action = None;

        egui::TopBottomPanel::top("entry").show(ctx, |ui| {
            action = self.entry_panel(ui);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(id) = self.log_list(ui) {
                action = Some(UiAction::Select(id));
            }
        });
        self.warning_window(ctx);

        // The warning is modal: actions wait until it is dismissed.
        if self.warning.is_some() {
            return;
        }
        let Some(action) = action else {
            return;
        };
        let result = match action {
            UiAction::Add => self.editor.on_add(),
            UiAction::Modify => self.editor.on_modify(),
            UiAction::Delete => self.editor.on_delete(),
            UiAction::Select(id) => self.editor.on_select(id),
        };
        self.dispatch(ctx, result);
    }
}
