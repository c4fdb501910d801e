//! Overlay placement relative to the caret.
//!
//! The overlay is rendered first so its size is known, then placed in one of
//! four quadrants around the caret depending on which directions would
//! overflow the viewport. Placement is exhaustive: if the overlay still does
//! not fit (e.g. wider than the viewport) it is allowed to overflow unless the
//! caller opts into [`OverlayPlacement::clamp_to`].

/// Axis-aligned rectangle in client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Measured width/height of the rendered overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Top-left corner of the overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OverlayRect {
    pub x: f64,
    pub y: f64,
}

impl OverlayRect {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which side of the caret the overlay opens towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    fn select(above: bool, left: bool) -> Self {
        match (above, left) {
            (true, true) => Quadrant::TopLeft,
            (true, false) => Quadrant::TopRight,
            (false, true) => Quadrant::BottomLeft,
            (false, false) => Quadrant::BottomRight,
        }
    }

    pub fn is_above(self) -> bool {
        matches!(self, Quadrant::TopLeft | Quadrant::TopRight)
    }

    pub fn is_left(self) -> bool {
        matches!(self, Quadrant::TopLeft | Quadrant::BottomLeft)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Quadrant::TopLeft => "top-left",
            Quadrant::TopRight => "top-right",
            Quadrant::BottomLeft => "bottom-left",
            Quadrant::BottomRight => "bottom-right",
        }
    }
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of [`position_overlay`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayPlacement {
    pub rect: OverlayRect,
    pub quadrant: Quadrant,
    /// Overlay size the placement was computed for.
    pub size: Size,
}

impl OverlayPlacement {
    /// Shift the overlay so it stays inside `viewport` where possible.
    ///
    /// An overlay larger than the viewport is pinned to the viewport origin
    /// on that axis. The quadrant is left untouched.
    pub fn clamp_to(self, viewport: &Rect) -> Self {
        let max_x = (viewport.width - self.size.width).max(0.0);
        let max_y = (viewport.height - self.size.height).max(0.0);
        Self {
            rect: OverlayRect::new(self.rect.x.clamp(0.0, max_x), self.rect.y.clamp(0.0, max_y)),
            ..self
        }
    }
}

/// Compute the overlay's top-left corner.
///
/// - above the caret when `caret.top + gap + overlay.height` exceeds the
///   viewport height, otherwise `gap` pixels below the caret top
/// - right-aligned to the caret's right edge when `caret.right + overlay.width`
///   exceeds the viewport width, otherwise starting at the caret's right edge
pub fn position_overlay(caret: &Rect, viewport: &Rect, overlay: Size, gap: f64) -> OverlayPlacement {
    let above = caret.top() + gap + overlay.height > viewport.height;
    let left = caret.right() + overlay.width > viewport.width;

    let y = if above {
        caret.top() - overlay.height
    } else {
        caret.top() + gap
    };
    let x = if left {
        caret.right() - overlay.width
    } else {
        caret.right()
    };

    OverlayPlacement {
        rect: OverlayRect::new(x, y),
        quadrant: Quadrant::select(above, left),
        size: overlay,
    }
}
