//! Pan/zoom image surface used inside the photo modal.
//!
//! ARCHITECTURE
//! ============
//! All math lives in [`viewport::ZoomPanViewer`]; this component only maps
//! DOM events onto it and renders the resulting transform. Window-level
//! `pointermove`/`pointerup`/`pointercancel` listeners exist only while a
//! drag session is active, so releasing the pointer outside the image (or
//! the browser cancelling it) still ends the drag.

use leptos::prelude::*;
use viewport::{Point, ZoomPanViewer};

#[cfg(feature = "csr")]
struct DragListeners {
    moves: WindowListenerHandle,
    ups: WindowListenerHandle,
    cancels: WindowListenerHandle,
}

#[cfg(feature = "csr")]
impl DragListeners {
    fn release(self) {
        self.moves.remove();
        self.ups.remove();
        self.cancels.remove();
    }
}

/// Zoomable, draggable image with +/- controls.
///
/// Zoom and pan reset whenever `url` changes.
#[component]
pub fn ZoomableImage(#[prop(into)] url: Signal<String>) -> impl IntoView {
    let viewer = RwSignal::new(ZoomPanViewer::new());

    Effect::new(move || {
        url.track();
        viewer.update(ZoomPanViewer::reset);
    });

    #[cfg(feature = "csr")]
    let listeners = StoredValue::new_local(None::<DragListeners>);

    #[cfg(feature = "csr")]
    let release_listeners = move || {
        let mut taken = None;
        listeners.update_value(|slot| taken = slot.take());
        if let Some(active) = taken {
            active.release();
        }
    };

    #[cfg(feature = "csr")]
    on_cleanup(release_listeners);

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        let position = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
        let mut started = false;
        viewer.update(|v| started = v.on_pointer_down(position));
        if !started {
            return;
        }
        ev.prevent_default();

        #[cfg(feature = "csr")]
        {
            release_listeners();
            let moves = window_event_listener(leptos::ev::pointermove, move |ev| {
                let position = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
                viewer.update(|v| {
                    v.on_pointer_move(position);
                });
            });
            let ups = window_event_listener(leptos::ev::pointerup, move |_| {
                viewer.update(ZoomPanViewer::on_pointer_up);
                release_listeners();
            });
            let cancels = window_event_listener(leptos::ev::pointercancel, move |_| {
                viewer.update(ZoomPanViewer::on_pointer_cancel);
                release_listeners();
            });
            listeners.set_value(Some(DragListeners { moves, ups, cancels }));
        }
    };

    let on_wheel = move |ev: leptos::ev::WheelEvent| {
        ev.prevent_default();
        viewer.update(|v| v.on_wheel(ev.delta_y()));
    };

    let image_style = move || {
        viewer.with(|v| format!("transform: {}; transition: {};", v.css_transform(), v.css_transition()))
    };

    view! {
        <div
            class="zoomable"
            style:cursor=move || viewer.with(|v| v.cursor().as_css())
            on:wheel=on_wheel
            on:pointerdown=on_pointer_down
            on:click=move |ev| ev.stop_propagation()
        >
            <img
                class="zoomable__image"
                src=move || url.get()
                alt="Zoomable"
                draggable="false"
                style=image_style
            />
            <div class="zoomable__controls">
                <button
                    class="zoomable__button"
                    title="Zoom in"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        viewer.update(ZoomPanViewer::zoom_in);
                    }
                >
                    "+"
                </button>
                <button
                    class="zoomable__button"
                    title="Zoom out"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        viewer.update(ZoomPanViewer::zoom_out);
                    }
                >
                    "−"
                </button>
            </div>
        </div>
    }
}
