use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Window resize listener that fires `callback` once resizing has been quiet
/// for `delay_ms`.
///
/// Charts and the map both redraw on resize, and a window drag emits dozens
/// of events per second. Each new event replaces the pending timeout, so only
/// the last one runs.
///
/// Returns `None` outside a browser window. Drop the listener to unsubscribe;
/// a pending timeout is cancelled with it.
///
/// ```rust,ignore
/// use_effect_with(container_ref.clone(), move |container_ref| {
///     let listener = debounced_resize_listener(move || redraw(), Config::RESIZE_DEBOUNCE_MS);
///     move || drop(listener)
/// });
/// ```
pub fn debounced_resize_listener<F>(callback: F, delay_ms: u32) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    Some(EventListener::new(&window, "resize", move |_| {
        let cb = Rc::clone(&callback);
        // Replacing the handle drops, and so cancels, the previous timeout
        pending.replace(Some(Timeout::new(delay_ms, move || cb())));
    }))
}
