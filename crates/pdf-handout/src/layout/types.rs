//! Layout data types for handout pages

/// Which of the two stacked slots a source page occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotPosition {
    /// Top half, receives the lower-indexed page of a pair
    Upper,
    /// Bottom half, receives the higher-indexed page of a pair
    Lower,
}

impl SlotPosition {
    /// Resource name of the XObject drawn in this slot
    pub fn xobject_name(self) -> &'static str {
        match self {
            SlotPosition::Upper => "S0",
            SlotPosition::Lower => "S1",
        }
    }
}

/// A rectangular area in points (PDF user space, origin bottom-left)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Whether `other` lies entirely inside this rectangle (with a small tolerance)
    pub fn contains(&self, other: &Rect) -> bool {
        const EPS: f32 = 1e-3;
        other.x >= self.x - EPS
            && other.y >= self.y - EPS
            && other.right() <= self.right() + EPS
            && other.top() <= self.top() + EPS
    }

    /// Common area of two rectangles, `None` when they do not overlap
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let top = self.top().min(other.top());
        (right > x && top > y).then(|| Rect::new(x, y, right - x, top - y))
    }

    /// Whether the two rectangles share any area
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.top()
            && other.y < self.top()
    }
}

/// Final placement of a source page on an output page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagePlacement {
    /// Source page index (0-based)
    pub source_page: usize,
    /// Slot the page is drawn in
    pub slot: SlotPosition,
    /// Slot rectangle the page was fit into
    pub slot_rect: Rect,
    /// Position and size of the scaled page content
    pub content_rect: Rect,
    /// Uniform scale factor applied to the source page
    pub scale: f32,
    /// Visible source page box in source user space, before rotation
    pub source_box: Rect,
    /// Clockwise page rotation in degrees: 0, 90, 180 or 270
    pub rotation: u16,
}

impl PagePlacement {
    /// Transformation matrix (`cm` operands) mapping the source page box onto
    /// `content_rect`, turned the way a viewer displays the page.
    pub fn matrix(&self) -> [f32; 6] {
        let Rect {
            x: ox,
            y: oy,
            width: w,
            height: h,
        } = self.source_box;

        // Rotation about the box origin, landing in the displayed box
        let [a, b, c, d, e, f] = match self.rotation {
            90 => [0.0, -1.0, 1.0, 0.0, 0.0, w],
            180 => [-1.0, 0.0, 0.0, -1.0, w, h],
            270 => [0.0, 1.0, -1.0, 0.0, h, 0.0],
            _ => [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        };

        let s = self.scale;
        [
            a * s,
            b * s,
            c * s,
            d * s,
            s * (e - a * ox - c * oy) + self.content_rect.x,
            s * (f - b * ox - d * oy) + self.content_rect.y,
        ]
    }
}

/// Normalize a `/Rotate` value to 0, 90, 180 or 270.
///
/// Values that are not a multiple of 90 are invalid and treated as 0.
pub fn normalize_rotation(degrees: i64) -> u16 {
    match degrees.rem_euclid(360) {
        90 => 90,
        180 => 180,
        270 => 270,
        _ => 0,
    }
}
