pub mod ui;

pub use ui::{Draw, UIColor, UIElement, UIRect, UIRenderer};
