mod config;
mod controller;
mod error;
mod note;
mod ui;
mod utils;

use gtk::prelude::*; // Import common GTK traits
use gtk::{gio, glib, Application};

use config::Config;
use controller::NoteController;
use note::Note;

// Application ID (used by the system to identify the app)
const APP_ID: &str = "com.example.stickynote";

fn main() -> glib::ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // The note id is ours; GTK only gets the program name.
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "stickynote".to_string());
    let note_id = utils::parse_note_id(args.next().as_deref());

    let config = Config::load();
    let notes_dir = match utils::get_notes_dir(&config) {
        Ok(dir) => dir,
        Err(e) => {
            log::error!("{}", e);
            return glib::ExitCode::FAILURE;
        }
    };
    utils::ensure_notes_dir(&notes_dir);

    // NON_UNIQUE lets one process run per note instead of forwarding to the first.
    let app = Application::builder()
        .application_id(APP_ID)
        .flags(gio::ApplicationFlags::NON_UNIQUE)
        .build();

    app.connect_startup(|_| ui::install_css());

    // A single note per run; activation hands the controller over once.
    let pending = std::cell::RefCell::new(Some(NoteController::new(Note::new(&notes_dir, note_id))));
    app.connect_activate(move |app| {
        if let Some(controller) = pending.borrow_mut().take() {
            ui::build_ui(app, &config, controller);
        } else if let Some(window) = app.active_window() {
            window.present();
        }
    });

    app.run_with_args(&[program])
}
