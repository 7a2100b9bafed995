use gloo_console::error;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = portfolio::start() {
        error!(format!("Portfolio scripts failed to start: {e}"));
    }
}
