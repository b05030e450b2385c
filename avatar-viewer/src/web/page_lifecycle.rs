// Standard library and external crates
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use bevy::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use web_sys::{Event, window};

// Crate engine modules
use crate::engine::core::render_loop::RenderLoop;

/// Plugin stopping the render loop when the hosting page goes away.
pub struct PageLifecyclePlugin;

impl Plugin for PageLifecyclePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, stop_on_page_hide);

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_page_hide_listener);
    }
}

/// Set from the browser callback, drained by `stop_on_page_hide`.
#[derive(Resource, Clone, Default)]
pub struct PageHidden(Arc<AtomicBool>);

impl PageHidden {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn signal(&self) {
        self.0.store(true, Ordering::Release);
    }

    fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_page_hide_listener(mut commands: Commands) {
    let page_hidden = PageHidden::default();
    let flag = page_hidden.clone();

    let closure = Closure::wrap(Box::new(move |_event: Event| {
        flag.signal();
    }) as Box<dyn FnMut(Event)>);

    let Some(window) = window() else {
        warn!("Window object not available, render loop will not stop with the page");
        return;
    };

    if let Err(e) =
        window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())
    {
        error!("Failed to register pagehide listener: {:?}", e);
        return;
    }

    // Ownership moves to JS; the listener lives as long as the page
    closure.forget();
    commands.insert_resource(page_hidden);
}

fn stop_on_page_hide(page_hidden: Option<Res<PageHidden>>, mut render_loop: ResMut<RenderLoop>) {
    let Some(page_hidden) = page_hidden else {
        return;
    };

    if page_hidden.take() && render_loop.is_running() {
        info!("Page hidden, stopping render loop");
        render_loop.stop();
    }
}
