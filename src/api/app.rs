//! Mounted crossword application
//!
//! `mount` wires the loader, layout engine and DOM renderer together under a
//! root element. State is shared through `Rc<RefCell<..>>` on the browser's
//! single thread; cell listeners hold a `Weak` so the app can be dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use super::helpers::{deserialize_or_default, serialize};
use crate::dom::{CellHandler, DomRenderer};
use crate::html_layout::{AppView, CellEvent, GridSession, LayoutConfig, LayoutEngine};
use crate::loader::{decode_document, fetch_document, LoadFailure, LoadState, LoaderConfig};
use crate::models::PuzzleDocument;

/// Options accepted by `mount` and `mount_static`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MountOptions {
    #[serde(flatten)]
    pub loader: LoaderConfig,

    #[serde(flatten)]
    pub layout: LayoutConfig,

    /// Log at Debug instead of Info
    pub debug: bool,
}

struct AppState {
    load: LoadState,
    session: Option<GridSession>,
    engine: LayoutEngine,
    renderer: DomRenderer,
    handler: CellHandler,
}

impl AppState {
    fn view(&self) -> AppView {
        let highlight = self
            .session
            .as_ref()
            .map(|session| *session.highlight())
            .unwrap_or_default();
        self.engine.build_view(&self.load, &highlight)
    }

    fn render(&mut self) -> Result<(), JsValue> {
        let view = self.view();
        self.renderer.render(&view, &self.handler)
    }

    fn finish_load(&mut self, outcome: Result<PuzzleDocument, LoadFailure>) -> Result<(), JsValue> {
        if !self.load.resolve(outcome) {
            return Ok(());
        }

        if let Some(document) = self.load.document() {
            match self.session.as_mut() {
                Some(session) => session.replace_document(Rc::clone(document)),
                None => self.session = Some(GridSession::new(Rc::clone(document))),
            }
        }
        self.render()
    }

    fn on_cell_event(&mut self, event: CellEvent) -> Result<(), JsValue> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        if session.handle(event) {
            self.renderer.update_highlight(|pos| session.is_highlighted(pos))?;
        }
        Ok(())
    }
}

fn cell_handler(app: Weak<RefCell<AppState>>) -> CellHandler {
    Rc::new(move |event: CellEvent| {
        let Some(app) = app.upgrade() else {
            return;
        };
        let Ok(mut state) = app.try_borrow_mut() else {
            log::warn!("Dropped {:?}: app busy", event);
            return;
        };
        if let Err(e) = state.on_cell_event(event) {
            log::error!("Failed to update highlight: {:?}", e);
        }
    })
}

/// Handle to a mounted crossword. Keep it alive for as long as the grid
/// should stay interactive.
#[wasm_bindgen]
pub struct CrosswordApp {
    inner: Rc<RefCell<AppState>>,
}

impl CrosswordApp {
    fn create(root: Element, options: &MountOptions) -> Result<Self, JsValue> {
        let renderer = DomRenderer::new(root)?;
        let engine = LayoutEngine::new(options.layout.clone());

        let inner = Rc::new_cyclic(|weak: &Weak<RefCell<AppState>>| {
            RefCell::new(AppState {
                load: LoadState::Loading,
                session: None,
                engine,
                renderer,
                handler: cell_handler(weak.clone()),
            })
        });

        inner.borrow_mut().render()?;
        Ok(Self { inner })
    }

    /// Rust-side view of the page
    pub fn app_view(&self) -> AppView {
        self.inner.borrow().view()
    }
}

#[wasm_bindgen]
impl CrosswordApp {
    /// `"loading"`, `"ready"` or `"error"`
    pub fn state(&self) -> String {
        self.inner.borrow().load.name().to_string()
    }

    /// The current display list as a plain JS object
    pub fn view(&self) -> Result<JsValue, JsValue> {
        serialize(&self.app_view(), "Failed to serialize view")
    }

    /// Clue line of the highlighted word, if any
    #[wasm_bindgen(js_name = highlightedClue)]
    pub fn highlighted_clue(&self) -> Option<String> {
        let state = self.inner.borrow();
        state
            .session
            .as_ref()
            .and_then(|session| session.highlighted_word())
            .map(|word| word.clue_line())
    }
}

fn find_root(root_id: &str) -> Result<Element, JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("No browser document available"))?;

    document
        .get_element_by_id(root_id)
        .ok_or_else(|| JsValue::from_str(&format!("No element with id '{}'", root_id)))
}

fn apply_log_level(debug: bool) {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    log::set_max_level(level);
}

/// Mount the viewer under `#root_id` and request a puzzle.
///
/// Renders "Loading..." immediately; the grid or the error message replaces
/// it once the single request settles.
#[wasm_bindgen]
pub fn mount(root_id: &str, options: JsValue) -> Result<CrosswordApp, JsValue> {
    let options: MountOptions = deserialize_or_default(options, "Invalid mount options")?;
    apply_log_level(options.debug);

    let app = CrosswordApp::create(find_root(root_id)?, &options)?;
    log::info!(
        "Mounted on #{}; requesting category '{}'",
        root_id,
        options.loader.category
    );

    let inner = Rc::clone(&app.inner);
    let loader = options.loader;
    spawn_local(async move {
        let outcome = fetch_document(&loader).await;
        if let Err(e) = inner.borrow_mut().finish_load(outcome) {
            log::error!("Failed to render crossword: {:?}", e);
        }
    });

    Ok(app)
}

/// Mount the viewer with an already fetched payload; no network access.
#[wasm_bindgen(js_name = mountStatic)]
pub fn mount_static(root_id: &str, payload: &str, options: JsValue) -> Result<CrosswordApp, JsValue> {
    let options: MountOptions = deserialize_or_default(options, "Invalid mount options")?;
    apply_log_level(options.debug);

    let app = CrosswordApp::create(find_root(root_id)?, &options)?;
    let outcome = decode_document(payload, &options.loader);
    app.inner.borrow_mut().finish_load(outcome)?;

    Ok(app)
}
