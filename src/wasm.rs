//! WebAssembly bindings for the rescue shelter.
//!
//! This module exposes a [`WasmShelter`] class to JavaScript. Every method
//! returns a JSON string so a browser page can render the results without
//! sharing Rust types.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::Result;
use crate::menu::parse_priority;
use crate::models::{AnimalView, SharedAnimal};
use crate::shelter::Shelter;

/// JavaScript-friendly lookup result.
#[derive(Debug, Clone, Serialize)]
pub struct JsLookup {
    pub found: bool,
    pub animal: Option<AnimalView>,
    pub message: String,
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

fn view(animal: &SharedAnimal) -> AnimalView {
    AnimalView::from(animal.as_ref())
}

#[cfg(target_arch = "wasm32")]
fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

// The browser console only exists on wasm32.
#[cfg(not(target_arch = "wasm32"))]
fn log(message: &str) {
    tracing::debug!("{message}");
}

/// A shelter owned by the JavaScript side.
#[wasm_bindgen(js_name = Shelter)]
#[derive(Default)]
pub struct WasmShelter {
    inner: Shelter,
}

#[wasm_bindgen(js_class = Shelter)]
impl WasmShelter {
    /// Creates an empty shelter.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmShelter {
        WasmShelter::default()
    }

    /// Rescues an animal and returns it as JSON.
    pub fn rescue(&mut self, name: &str, species: &str, priority: i32) -> String {
        let animal = self.inner.rescue(name, species, priority);
        log(&format!("{} has been rescued", animal.name()));
        to_json(&view(&animal))
    }

    /// Rescues an animal whose priority comes from a text field.
    ///
    /// Throws a JavaScript `Error` if the priority is not a whole number.
    #[wasm_bindgen(js_name = rescueFromText)]
    pub fn rescue_from_text(
        &mut self,
        name: &str,
        species: &str,
        priority: &str,
    ) -> Result<String, JsValue> {
        self.rescue_text(name, species, priority)
            .map_err(|e| js_sys::Error::new(&e.to_string()).into())
    }

    /// Searches the name tree.
    pub fn search(&self, name: &str) -> String {
        let result = match self.inner.search(name) {
            Some(animal) => JsLookup {
                found: true,
                animal: Some(view(animal)),
                message: format!("Found {} in the rescue system!", animal.name()),
            },
            None => JsLookup {
                found: false,
                animal: None,
                message: format!("No animal found with the name {name}"),
            },
        };
        to_json(&result)
    }

    /// Lists all animals in ascending name order as a JSON array.
    pub fn list(&self) -> String {
        let animals: Vec<AnimalView> = self.inner.list().iter().map(view).collect();
        to_json(&animals)
    }

    /// Adopts by name. The record is not removed.
    #[wasm_bindgen(js_name = adoptByName)]
    pub fn adopt_by_name(&self, name: &str) -> String {
        let result = match self.inner.adopt_by_name(name) {
            Some(animal) => JsLookup {
                found: true,
                animal: Some(view(animal)),
                message: format!("{} has been adopted!", animal.name()),
            },
            None => JsLookup {
                found: false,
                animal: None,
                message: format!("No animal found with the name {name}"),
            },
        };
        to_json(&result)
    }

    /// The highest-priority animal as JSON, or `null`.
    #[wasm_bindgen(js_name = peekPriority)]
    pub fn peek_priority(&self) -> String {
        to_json(&self.inner.peek_priority().map(view))
    }

    /// Removes the highest-priority animal and returns it as JSON, or `null`.
    #[wasm_bindgen(js_name = adoptByPriority)]
    pub fn adopt_by_priority(&mut self) -> String {
        let adopted = self.inner.adopt_by_priority();
        if let Some(animal) = &adopted {
            log(&format!("{} has been adopted due to priority", animal.name()));
        }
        to_json(&adopted.as_ref().map(view))
    }

    /// Number of animals in the name tree.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.inner.tree().len()
    }
}

impl WasmShelter {
    /// Rescues an animal whose priority is still text, returning it as JSON.
    ///
    /// Fails with [`crate::RescueError::InvalidPriority`] if the priority is not a
    /// whole number.
    pub fn rescue_text(&mut self, name: &str, species: &str, priority: &str) -> Result<String> {
        let priority = parse_priority(priority)?;
        Ok(self.rescue(name, species, priority))
    }
}

/// Get the version of the shelter library.
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
