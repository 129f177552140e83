//! Errors raised while wiring page features to the document, and the lookups
//! that raise them.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures that abort a single page feature.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
	/// No `window` (not running in a browser)
	#[error("window is not available")]
	NoWindow,

	/// No `document` on the window
	#[error("document is not available")]
	NoDocument,

	/// An element the feature depends on is absent
	#[error("element not found: {0}")]
	MissingElement(String),

	/// The canvas refused a 2d context
	#[error("canvas 2d context is not available")]
	NoContext,

	/// A DOM call threw
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for PageError {
	fn from(value: JsValue) -> Self {
		PageError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

/// The current document.
pub fn document() -> Result<web_sys::Document, PageError> {
	web_sys::window()
		.ok_or(PageError::NoWindow)?
		.document()
		.ok_or(PageError::NoDocument)
}

/// Looks up an element by id.
pub fn element_by_id(id: &str) -> Result<web_sys::Element, PageError> {
	document()?
		.get_element_by_id(id)
		.ok_or_else(|| PageError::MissingElement(format!("#{id}")))
}
