use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Event, EventTarget};

use crate::error::Result;

/// Attach `handler` to `target` for the lifetime of the page.
///
/// Listeners are registered once at start-up and never removed, so the
/// closure is leaked instead of being kept alive by a guard.
pub fn listen<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(())
}
