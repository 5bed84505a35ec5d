mod indent;
mod line;
mod renderable;

pub use indent::Indent;
pub use line::Line;
pub use renderable::Renderable;
