use std::error::Error;
use std::fmt;
use wasm_bindgen::JsValue;

/// Errors that occur when the page doesn't have the elements a helper expects
#[derive(Debug, Eq, PartialEq)]
pub enum PreviewError {
	NoWindow,
	NoDocument,
	MissingElement(String),
	WrongElementType(String),
}

impl fmt::Display for PreviewError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NoWindow => write!(f, "No browser window is available"),
			Self::NoDocument => write!(f, "The browser window has no document"),
			Self::MissingElement(id) => write!(f, "No element with id \"{}\" exists on the page", id),
			Self::WrongElementType(id) => write!(f, "The element with id \"{}\" is not of the expected type", id),
		}
	}
}

impl Error for PreviewError {}

impl From<PreviewError> for JsValue {
	fn from(error: PreviewError) -> Self {
		let message = error.to_string();
		match error {
			PreviewError::MissingElement(_) | PreviewError::WrongElementType(_) => {
				js_sys::TypeError::new(&message).into()
			}
			PreviewError::NoWindow | PreviewError::NoDocument => js_sys::Error::new(&message).into(),
		}
	}
}
