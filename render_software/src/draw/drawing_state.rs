use crate::canvas::*;
use crate::pattern::*;
use crate::render::*;

use once_cell::sync::{Lazy};

use std::sync::*;

/// White is the initial fill pattern
static DEFAULT_FILL_PATTERN: Lazy<Arc<dyn Pattern>> = Lazy::new(|| {
    let pattern: Arc<dyn Pattern> = Arc::new(SolidPattern::new(Color::WHITE));
    pattern
});

/// Black is the initial stroke pattern
static DEFAULT_STROKE_PATTERN: Lazy<Arc<dyn Pattern>> = Lazy::new(|| {
    let pattern: Arc<dyn Pattern> = Arc::new(SolidPattern::new(Color::BLACK));
    pattern
});

///
/// Represents the active drawing state for a canvas
///
/// This is what `push_state()` saves and `pop_state()` restores. The path programs are not part of the state,
/// so popping a state never changes the geometry that has already been added to the path.
///
#[derive(Clone)]
pub struct DrawingState {
    /// The transform to apply to points added to a path
    pub (super) transform: Transform2D,

    /// The mask that limits where drawing operations can change the frame, or None to draw everywhere
    ///
    /// The mask is shared with the saved states, so it's only ever changed by replacing it or via `Arc::make_mut()`
    pub (super) clip_mask: Option<Arc<AlphaMask>>,

    /// The colour used for setting pixels and tinting glyphs
    pub (super) color: Color,

    /// The pattern used by fill operations
    pub (super) fill_pattern: Arc<dyn Pattern>,

    /// The pattern used by stroke operations
    pub (super) stroke_pattern: Arc<dyn Pattern>,

    /// Line width, caps, joins, winding rule and dash pattern
    pub (super) style: DrawingStyle,

    /// The start of the current subpath (in device coordinates)
    pub (super) start: Vector,

    /// The current position along the path (in device coordinates)
    pub (super) current: Vector,

    /// True if a subpath has been started
    pub (super) has_current: bool,
}

impl Default for DrawingState {
    fn default() -> Self {
        DrawingState {
            transform:      Transform2D::identity(),
            clip_mask:      None,
            color:          Color::TRANSPARENT,
            fill_pattern:   Arc::clone(&DEFAULT_FILL_PATTERN),
            stroke_pattern: Arc::clone(&DEFAULT_STROKE_PATTERN),
            style:          DrawingStyle::default(),
            start:          Vector::origin(),
            current:        Vector::origin(),
            has_current:    false,
        }
    }
}

impl DrawingState {
    ///
    /// Sets the colour along with the fill and stroke patterns
    ///
    pub fn solid_color(&mut self, color: Color) {
        let pattern: Arc<dyn Pattern> = Arc::new(SolidPattern::new(color));

        self.color          = color;
        self.fill_pattern   = Arc::clone(&pattern);
        self.stroke_pattern = pattern;
    }
}
