use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Route};
use crate::ui::detail::{DetailIntent, DetailState};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match app.route() {
        Route::Listing => handle_listing_key(app, key),
        Route::Detail => handle_detail_key(app, key),
    }
}

pub fn handle_paste(app: &mut App, text: String) {
    if app.route() == Route::Detail {
        app.dispatch_detail(DetailIntent::Paste(text));
    }
}

fn handle_listing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('s') => app.cycle_sort_field(),
        KeyCode::Char('o') => app.toggle_order(),
        KeyCode::Char('l') => app.cycle_limit(),
        KeyCode::Char('r') => app.refresh_countries(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Enter => app.open_selected(),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    let editing = app.detail().map(DetailState::is_editing).unwrap_or(false);

    match key.code {
        KeyCode::Esc => {
            if editing {
                app.dispatch_detail(DetailIntent::FocusGallery);
            } else {
                app.go_back();
            }
        }
        KeyCode::Tab => app.dispatch_detail(DetailIntent::FocusNext),
        KeyCode::BackTab => app.dispatch_detail(DetailIntent::FocusPrev),
        KeyCode::Enter if editing => app.submit_upload(),
        KeyCode::Up if !editing => app.dispatch_detail(DetailIntent::MoveImageSelection(-1)),
        KeyCode::Down if !editing => app.dispatch_detail(DetailIntent::MoveImageSelection(1)),
        KeyCode::Backspace if editing => app.dispatch_detail(DetailIntent::Backspace),
        KeyCode::Char(c) => {
            if editing {
                app.dispatch_detail(DetailIntent::Input(c));
            } else {
                match c {
                    'q' => app.request_quit(),
                    'b' => app.go_back(),
                    // Jump into the upload form.
                    'u' => app.dispatch_detail(DetailIntent::FocusNext),
                    _ => {}
                }
            }
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}
