pub mod markdown;
pub mod json;
pub mod html;
pub mod svg;

pub use markdown::MarkdownFormatter;
pub use json::JsonFormatter;
pub use html::HtmlFormatter;
pub use svg::{render_gauge_svg, render_waterfall_svg};
