//! DOM renderer
//!
//! Builds the page from an `AppView`. A full render happens once per load
//! state; after that only the `highlighted` class of existing cells is
//! toggled, so cell elements (and any letters typed into them) survive
//! pointer interaction.

use std::collections::HashMap;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::elements::{append, create, create_with_text};
use crate::html_layout::{AppView, CellEvent, ClueLists, GridDisplay, PointerKind, RenderCell};
use crate::models::{Direction, GridPos};

/// Callback invoked for every pointer gesture on a cell
pub type CellHandler = Rc<dyn Fn(CellEvent)>;

pub const LOADING_TEXT: &str = "Loading...";

pub struct DomRenderer {
    document: Document,
    root: Element,
    cells: HashMap<GridPos, Element>,
    listeners: Vec<EventListener>,
}

impl DomRenderer {
    /// Render into `root`, replacing its children on every full render
    pub fn new(root: Element) -> Result<Self, JsValue> {
        let document = root
            .owner_document()
            .ok_or_else(|| JsValue::from_str("root element has no owner document"))?;

        Ok(Self {
            document,
            root,
            cells: HashMap::new(),
            listeners: Vec::new(),
        })
    }

    /// Replace the page content with `view`
    pub fn render(&mut self, view: &AppView, handler: &CellHandler) -> Result<(), JsValue> {
        self.clear();

        match view {
            AppView::Loading => {
                append(&self.root, create_with_text(&self.document, "div", None, LOADING_TEXT)?)?;
            }
            AppView::Error { message } => {
                append(&self.root, create_with_text(&self.document, "div", Some("error"), message)?)?;
            }
            AppView::Ready { title, grid, clues } => {
                let app = append(&self.root, create(&self.document, "div", Some("App"))?)?;
                append(&app, create_with_text(&self.document, "h1", None, title)?)?;
                self.render_grid(&app, grid, handler)?;
                self.render_clues(&app, clues)?;
            }
        }
        Ok(())
    }

    /// Toggle the `highlighted` class on every rendered cell
    pub fn update_highlight(&self, is_highlighted: impl Fn(GridPos) -> bool) -> Result<(), JsValue> {
        for (pos, element) in &self.cells {
            element
                .class_list()
                .toggle_with_force("highlighted", is_highlighted(*pos))?;
        }
        Ok(())
    }

    fn clear(&mut self) {
        self.listeners.clear();
        self.cells.clear();
        self.root.set_inner_html("");
    }

    fn render_grid(&mut self, parent: &Element, grid: &GridDisplay, handler: &CellHandler) -> Result<(), JsValue> {
        let container = append(parent, create(&self.document, "div", Some("crossword-grid"))?)?;
        container.set_attribute(
            "style",
            &format!(
                "grid-template-columns: {}; grid-template-rows: {}",
                grid.template_columns, grid.template_rows
            ),
        )?;

        for cell in grid.iter_cells() {
            let element = append(&container, self.build_cell(cell)?)?;
            let pos = GridPos::new(cell.x, cell.y);

            for kind in PointerKind::ALL {
                let handler = Rc::clone(handler);
                self.listeners.push(EventListener::new(&element, kind.event_name(), move |_| {
                    handler(CellEvent::new(pos, kind))
                }));
            }
            self.cells.insert(pos, element);
        }
        Ok(())
    }

    fn build_cell(&self, cell: &RenderCell) -> Result<Element, JsValue> {
        let class_name = cell.class_name();
        let element = create(&self.document, "div", Some(class_name.as_str()))?;
        element.set_attribute("data-key", &cell.key)?;
        element.set_attribute("data-x", &cell.x.to_string())?;
        element.set_attribute("data-y", &cell.y.to_string())?;

        if !cell.badges.is_empty() {
            let numbers = append(&element, create(&self.document, "div", Some("cell-numbers"))?)?;
            for badge in &cell.badges {
                append(
                    &numbers,
                    create_with_text(&self.document, "span", Some(badge.class_name.as_str()), &badge.number)?,
                )?;
            }
        }

        if cell.active {
            let input = append(&element, create(&self.document, "input", Some("cell-input"))?)?;
            input.set_attribute("type", "text")?;
            input.set_attribute("maxlength", "1")?;
        }

        Ok(element)
    }

    fn render_clues(&self, parent: &Element, clues: &ClueLists) -> Result<(), JsValue> {
        let section = append(parent, create(&self.document, "div", Some("clues"))?)?;
        append(&section, create_with_text(&self.document, "h2", None, "Clues")?)?;
        let container = append(&section, create(&self.document, "div", Some("clues-container"))?)?;

        for (direction, lines) in [(Direction::Across, &clues.across), (Direction::Down, &clues.down)] {
            let class = format!("{}-clues", direction.css_class());
            let column = append(&container, create(&self.document, "div", Some(class.as_str()))?)?;
            append(&column, create_with_text(&self.document, "h3", None, direction.label())?)?;

            let list = append(&column, create(&self.document, "ul", None)?)?;
            for line in lines {
                append(&list, create_with_text(&self.document, "li", None, line)?)?;
            }
        }
        Ok(())
    }
}
