//! Form rendering module
//!
//! - `field_renderer`: labeled input box plus inline error line
//! - `simple_input_form`: the name/email form with its submit button

mod field_renderer;
mod simple_input_form;

pub use simple_input_form::draw_simple_input;
