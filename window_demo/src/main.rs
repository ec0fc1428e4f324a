//! Input event viewer
//!
//! Opens a window on the native backend and logs every normalized input
//! event. Pass a `.toml` or `.ron` window config as the first argument to
//! override the defaults. Escape closes, F toggles fullscreen, M toggles
//! maximized, C loads `cursor.png` from the working directory.

use std::cell::Cell;
use std::rc::Rc;

use platform_window::foundation::logging;
use platform_window::prelude::*;

#[derive(Default)]
struct Requests {
    quit: Cell<bool>,
    toggle_fullscreen: Cell<bool>,
    toggle_maximized: Cell<bool>,
    load_cursor: Cell<bool>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_level(log::LevelFilter::Info);

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading window config from {}", path);
            WindowConfig::load_from_file(&path)?
        }
        None => WindowConfig::default(),
    };

    let mut window: PlatformWindow<ActiveBackend> = PlatformWindow::new(&config)?;
    // Arrow keys repeat slower than the default
    for key in [Key::Up, Key::Down, Key::Left, Key::Right] {
        window.set_key_delay(key, 120);
    }

    let requests = Rc::new(Requests::default());
    let sink = requests.clone();
    window.set_input_handler(move |event| {
        match event.kind {
            InputEventType::KeyPress if event.auto_repeat_ticks > 0 => {
                log::debug!("{:?} repeat after {} ms", event.key_code, event.auto_repeat_ticks);
            }
            InputEventType::KeyText => log::info!("text {:?}", event.key_text),
            InputEventType::MouseMove => log::trace!("mouse {:?}", event.mouse_pos),
            _ => log::info!("{:?} {:?} {:?}", event.kind, event.key_code, event.modifiers),
        }

        if event.kind == InputEventType::KeyDown {
            match event.key_code {
                Key::Escape => sink.quit.set(true),
                Key::F => sink.toggle_fullscreen.set(true),
                Key::M => sink.toggle_maximized.set(true),
                Key::C => sink.load_cursor.set(true),
                _ => {}
            }
        }
    });
    window.set_on_resize(|size| log::info!("Resized to {}x{}", size.width, size.height));

    let close_requested = requests.clone();
    window.set_on_close(move || close_requested.quit.set(true));

    while !requests.quit.get() && !window.should_close() {
        window.poll();

        if requests.toggle_fullscreen.take() {
            let fullscreen = !window.is_fullscreen();
            window.set_fullscreen(fullscreen);
        }
        if requests.toggle_maximized.take() {
            if window.is_maximized() {
                window.restore();
            } else {
                window.maximize();
            }
        }
        if requests.load_cursor.take() {
            if let Ok(cursor) = window.load_mouse_cursor("cursor.png", Point::new(0, 0)) {
                window.set_mouse_cursor(cursor);
            }
        }

        window.swap_buffers();
    }

    window.destroy();
    Ok(())
}
