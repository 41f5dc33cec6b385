//! Live preview of an image link typed into a form field.
//!
//! The page is expected to carry an image element with id `preview` and a text input with id `image_link`. Calling
//! [`pic_preview`] copies whatever is currently in the input into the image's `src`, which makes the browser load and
//! show it. Nothing about the link is checked.

use crate::dom::{element_by_id, page_document};
use crate::error::PreviewError;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlImageElement, HtmlInputElement};

pub const PREVIEW_ELEMENT_ID: &str = "preview";
pub const IMAGE_LINK_ELEMENT_ID: &str = "image_link";

/// Something with a current value that can be read, like a text input.
pub trait ValueSource {
	fn current_value(&self) -> String;
}

/// Something with a source that can be assigned, like an image.
pub trait SourceTarget {
	fn set_source(&self, source: &str);
}

/// Finds the elements involved in a preview by their ids.
pub trait ElementLookup {
	type Source: ValueSource;
	type Target: SourceTarget;

	fn value_source(&self, id: &str) -> Result<Self::Source, PreviewError>;
	fn source_target(&self, id: &str) -> Result<Self::Target, PreviewError>;
}

impl ValueSource for HtmlInputElement {
	fn current_value(&self) -> String {
		self.value()
	}
}

impl SourceTarget for HtmlImageElement {
	fn set_source(&self, source: &str) {
		self.set_src(source);
	}
}

impl ElementLookup for Document {
	type Source = HtmlInputElement;
	type Target = HtmlImageElement;

	fn value_source(&self, id: &str) -> Result<HtmlInputElement, PreviewError> {
		element_by_id(self, id)
	}

	fn source_target(&self, id: &str) -> Result<HtmlImageElement, PreviewError> {
		element_by_id(self, id)
	}
}

/// The ids of the two elements a preview connects.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PreviewElementIds {
	pub preview: String,
	pub image_link: String,
}

impl PreviewElementIds {
	pub fn new(preview: impl Into<String>, image_link: impl Into<String>) -> Self {
		Self {
			preview: preview.into(),
			image_link: image_link.into(),
		}
	}
}

impl Default for PreviewElementIds {
	fn default() -> Self {
		Self::new(PREVIEW_ELEMENT_ID, IMAGE_LINK_ELEMENT_ID)
	}
}

/// Assigns the source's current value, unchanged, as the target's source.
pub fn preview(source: &impl ValueSource, target: &impl SourceTarget) {
	target.set_source(&source.current_value());
}

/// Looks up both elements and runs the preview.
///
/// # Errors
///
/// Fails when either element can't be found. Nothing is modified in that case.
pub fn run_preview<L: ElementLookup>(lookup: &L, ids: &PreviewElementIds) -> Result<(), PreviewError> {
	let display = lookup.source_target(&ids.preview)?;
	let link = lookup.value_source(&ids.image_link)?;
	preview(&link, &display);
	Ok(())
}

/// Shows the image at the link in the `image_link` field in the `preview` image.
///
/// Throws a `TypeError` when either element is missing from the page.
///
/// The elements are also required to be an `<input>` and an `<img>`. Any other element with one of the ids throws
/// the same `TypeError` instead of having an unrelated `value` read or `src` property written.
#[wasm_bindgen]
pub fn pic_preview() -> Result<(), JsValue> {
	let document = page_document()?;
	run_preview(&document, &PreviewElementIds::default())?;
	Ok(())
}

/// Runs [`pic_preview`] every time the `image_link` field changes.
#[wasm_bindgen]
pub fn attach_pic_preview() -> Result<(), JsValue> {
	let ids = PreviewElementIds::default();
	let document = page_document()?;
	let link_field: HtmlInputElement = element_by_id(&document, &ids.image_link)?;

	let listener_ids = ids.clone();
	let input_handler = Closure::<dyn FnMut(Event) -> Result<(), JsValue>>::new(move |_event: Event| {
		run_preview(&document, &listener_ids)?;
		Ok(())
	});
	link_field.add_event_listener_with_callback("input", input_handler.as_ref().unchecked_ref())?;
	// The listener lives as long as the page.
	input_handler.forget();

	log::debug!("Attached image preview from #{} to #{}", ids.image_link, ids.preview);
	Ok(())
}
