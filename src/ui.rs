use gtk::prelude::*;
use gtk::{gdk, glib, Application, ApplicationWindow, CssProvider, ScrolledWindow, TextView};
use glib::clone;
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::Config;
use crate::controller::{NoteController, NoteEvent};

const WINDOW_TITLE: &str = "Sticky Note";
const TEXT_MARGIN: i32 = 15;

// Black page, white text, light gray caret.
const NOTE_CSS: &str = "
window.sticky-note,
window.sticky-note textview,
window.sticky-note textview text {
    background-color: #000000;
    color: #ffffff;
    caret-color: #d3d3d3;
}
";

/// Register the note colors for the default display.
pub fn install_css() {
    let provider = CssProvider::new();
    provider.load_from_data(NOTE_CSS);

    let Some(display) = gdk::Display::default() else {
        log::warn!("No display available, note colors not applied");
        return;
    };

    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

/// Build the note window and wire its buffer to `controller`.
pub fn build_ui(app: &Application, config: &Config, mut controller: NoteController) {
    let window = ApplicationWindow::builder()
        .application(app)
        .title(WINDOW_TITLE)
        .default_width(config.width)
        .default_height(config.height)
        .css_classes(vec!["sticky-note"])
        .build();

    let text_view = TextView::builder()
        .wrap_mode(gtk::WrapMode::Word)
        .left_margin(TEXT_MARGIN)
        .right_margin(TEXT_MARGIN)
        .top_margin(TEXT_MARGIN)
        .bottom_margin(TEXT_MARGIN)
        .build();

    let scrolled_window = ScrolledWindow::builder()
        .hscrollbar_policy(gtk::PolicyType::Automatic)
        .vscrollbar_policy(gtk::PolicyType::Automatic)
        .hexpand(true)
        .vexpand(true)
        .child(&text_view)
        .build();

    window.set_child(Some(&scrolled_window));

    // Fill the buffer before connecting "changed" so loading does not save.
    let buffer = text_view.buffer();
    buffer.set_text(controller.load());

    let controller = Rc::new(RefCell::new(controller));

    buffer.connect_changed(clone!(@strong controller => move |buffer| {
        controller.borrow_mut().handle(NoteEvent::Changed, buffer);
    }));

    window.connect_close_request(clone!(@strong controller, @strong buffer => move |_| {
        controller.borrow_mut().handle(NoteEvent::CloseRequested, &buffer);
        log::debug!("Close request handled, note is {:?}", controller.borrow().state());
        // The application quits once its last window is gone.
        glib::Propagation::Proceed
    }));

    log::info!(
        "Opened note {} at {}",
        controller.borrow().note().id,
        controller.borrow().note().path.display()
    );

    window.present();
}
