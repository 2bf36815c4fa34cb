//! Folio Web Platform
//!
//! Browser backend for the Folio page behaviours.
//!
//! This crate implements the Folio host traits over the DOM: the dock
//! container and items become a [`folio_dock::DockHost`], frame callbacks
//! come from `requestAnimationFrame`, preferences live in `localStorage`,
//! and page updates are written by a DOM [`folio_page::PageRenderer`].
//!
//! # Architecture
//!
//! The browser owns the event loop. The backend registers listeners and
//! intersection observers at load, converts each DOM event into a
//! [`folio_platform::Event`] and hands it to a single
//! [`folio_app::FolioApp`] held by the mounted page:
//!
//! - **pointerenter / pointermove / pointerleave, focusin / focusout** on
//!   the dock
//! - **resize / scroll** on the window
//! - **click / keydown** on the document
//! - **IntersectionObserver** entries for reveal targets and sections
//! - **requestAnimationFrame** callbacks, delivered as frame events
//!
//! # Usage
//!
//! ```ignore
//! // Built with: cargo build --target wasm32-unknown-unknown -p folio_platform_web
//! // The `start` export mounts the page once the module is instantiated.
//! ```
//!
//! On native targets only the pure conversion helpers are available.

pub mod input;
pub mod markup;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
pub mod logging;
#[cfg(target_arch = "wasm32")]
mod page;
#[cfg(target_arch = "wasm32")]
mod renderer;
#[cfg(target_arch = "wasm32")]
mod storage;

pub use input::{
    client_rect, convert_click, convert_key, convert_pointer, convert_visibility, offset_rect,
};
pub use markup::{config_from_markup, theme_attribute, ItemPatch};

#[cfg(target_arch = "wasm32")]
pub use dom::WebDock;
#[cfg(target_arch = "wasm32")]
pub use frame::RafScheduler;
#[cfg(target_arch = "wasm32")]
pub use page::WebPage;
#[cfg(target_arch = "wasm32")]
pub use renderer::DomRenderer;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;

#[cfg(target_arch = "wasm32")]
mod entry {
    use crate::{logging, markup, WebPage};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    thread_local! {
        static PAGE: RefCell<Option<Rc<RefCell<WebPage>>>> = const { RefCell::new(None) };
    }

    /// Mount the page behaviours on the current document
    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        logging::init("info");

        let source = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(markup::CONFIG_ID))
            .and_then(|element| element.text_content());
        let config = markup::config_from_markup(source.as_deref());

        let page = WebPage::mount(config).map_err(|err| JsValue::from_str(&err.to_string()))?;
        PAGE.with(|slot| *slot.borrow_mut() = Some(page));
        Ok(())
    }
}
