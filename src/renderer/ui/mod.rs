use glam::Vec2;

/// UI Color representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UIColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl UIColor {
    pub const WHITE: UIColor = UIColor {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: UIColor = UIColor {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// UI Rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UIRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl UIRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of `size` centred on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        let origin = center - size * 0.5;
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// UI Element type
#[derive(Debug, Clone, PartialEq)]
pub enum UIElement {
    Rect {
        rect: UIRect,
        color: UIColor,
        filled: bool,
        border_width: f32,
    },
    Texture {
        /// Atlas key of the texture
        key: String,
        rect: UIRect,
    },
    Text {
        text: String,
        position: Vec2,
        size: f32,
        color: UIColor,
    },
}

/// Immediate mode UI draw list.
///
/// Elements are collected each frame and handed to whatever backend
/// presents them.
#[derive(Debug, Default)]
pub struct UIRenderer {
    elements: Vec<UIElement>,
}

impl UIRenderer {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn begin_frame(&mut self) {
        self.elements.clear();
    }

    pub fn draw_rect(&mut self, rect: UIRect, color: UIColor) {
        self.elements.push(UIElement::Rect {
            rect,
            color,
            filled: true,
            border_width: 0.0,
        });
    }

    pub fn draw_rect_outline(&mut self, rect: UIRect, color: UIColor, border_width: f32) {
        self.elements.push(UIElement::Rect {
            rect,
            color,
            filled: false,
            border_width,
        });
    }

    pub fn draw_texture(&mut self, key: &str, rect: UIRect) {
        self.elements.push(UIElement::Texture {
            key: key.to_string(),
            rect,
        });
    }

    pub fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: UIColor) {
        self.elements.push(UIElement::Text {
            text: text.to_string(),
            position: Vec2::new(x, y),
            size,
            color,
        });
    }

    pub fn elements(&self) -> &[UIElement] {
        &self.elements
    }
}

/// Something that can put itself on screen at an anchor point.
///
/// Drawing only reads state.
pub trait Draw {
    fn draw(&self, ui: &mut UIRenderer, anchor: Vec2);
}
