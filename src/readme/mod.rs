pub mod locator;
pub mod render;

pub use locator::ReadmeTarget;
pub use render::{ArticleRenderer, ReadmeRenderer, render_readme};
