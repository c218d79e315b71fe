//! Core business entities.

mod click;
mod short_url;

pub use click::{Click, NewClick};
pub use short_url::{NewShortUrl, ShortUrl};
