use crate::error::PreviewError;
use wasm_bindgen::JsCast;
use web_sys::{window, Document};

pub fn page_document() -> Result<Document, PreviewError> {
	let window = window().ok_or(PreviewError::NoWindow)?;
	window.document().ok_or(PreviewError::NoDocument)
}

/// Looks up an element by id and casts it to the element type the caller needs.
///
/// # Errors
///
/// Fails when no element has the id or when the element found is some other kind of element.
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, PreviewError> {
	let element = document
		.get_element_by_id(id)
		.ok_or_else(|| PreviewError::MissingElement(id.to_owned()))?;
	element
		.dyn_into()
		.map_err(|_| PreviewError::WrongElementType(id.to_owned()))
}
