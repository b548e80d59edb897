use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

struct Observer {
    observer: IntersectionObserver,
    // Must outlive the observer
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Invisible marker placed after the last list item.
///
/// Calls `on_visible` when the marker scrolls within `root_margin` of the
/// viewport. The observer is re-created each time `armed` becomes true, so a
/// marker that is still visible after a page arrives fires again.
#[component]
pub fn InfiniteScrollSentinel(
    #[prop(into)]
    armed: Signal<bool>,
    on_visible: Callback<()>,
    #[prop(optional, into)]
    root_margin: String,
    /// Content inside the marker (loading indicator)
    #[prop(optional)]
    children: Option<ChildrenFn>,
) -> impl IntoView {
    let marker = NodeRef::<Div>::new();
    let root_margin = if root_margin.is_empty() {
        "200px".to_string()
    } else {
        root_margin
    };

    Effect::new(move |previous: Option<Option<Observer>>| {
        // Disconnect the previous observer before deciding on a new one
        drop(previous);

        if !armed.get() {
            return None;
        }
        let element = marker.get()?;

        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            let visible = entries.iter().any(|entry| {
                entry
                    .unchecked_into::<IntersectionObserverEntry>()
                    .is_intersecting()
            });
            if visible {
                on_visible.run(());
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&root_margin);
        init.set_threshold(&JsValue::from_f64(0.0));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(&element);
                Some(Observer {
                    observer,
                    _callback: callback,
                })
            }
            Err(e) => {
                log::error!("IntersectionObserver unavailable: {:?}", e);
                None
            }
        }
    });

    view! {
        <div node_ref=marker class="infinite-scroll__sentinel">
            {children.map(|children| children())}
        </div>
    }
}
