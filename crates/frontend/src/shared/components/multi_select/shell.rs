use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Keys that dismiss an open dropdown regardless of focus
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

/// Binds outside-click and Escape dismissal while `is_open` holds.
///
/// Listeners live on the window and are removed as soon as the dropdown
/// closes or the owning component unmounts. Pointer events whose target sits
/// inside `root` never dismiss.
pub fn install_dismiss_listeners(
    root: NodeRef<Div>,
    is_open: Memo<bool>,
    on_dismiss: Callback<()>,
) {
    Effect::new(move |_| {
        if !is_open.get() {
            return;
        }

        let pointer = window_event_listener(ev::mousedown, move |event: ev::MouseEvent| {
            if !is_inside(root, &event) {
                on_dismiss.run(());
            }
        });
        let keyboard = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
            if is_dismiss_key(&event.key()) {
                on_dismiss.run(());
            }
        });

        // Runs before the next effect pass and when the owner is disposed
        on_cleanup(move || {
            pointer.remove();
            keyboard.remove();
        });
    });
}

fn is_inside(root: NodeRef<Div>, event: &web_sys::Event) -> bool {
    let Some(root) = root.get_untracked() else {
        return false;
    };
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .map(|node| root.contains(Some(&node)))
        .unwrap_or(false)
}
