pub mod renderer;

pub use renderer::{RenderError, TemplateRenderer};
