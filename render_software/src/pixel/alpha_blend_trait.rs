///
/// The factors that the source and destination pixels can be multiplied by when blending
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlphaFunction {
    One,
    OneMinusSourceAlpha,
}

///
/// A Porter-Duff compositing operation
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlphaOperation {
    SourceOver,
}

///
/// Trait implemented by pixel types that support alpha blending
///
/// Pixels are expected to have their alpha pre-multiplied into their colour components.
///
pub trait AlphaBlend : Sized {
    /// Blends this pixel (as the source) with a destination pixel using the specified functions for each side
    fn alpha_blend_with_function(self, dest: Self, source_alpha: AlphaFunction, dest_alpha: AlphaFunction) -> Self;

    /// Performs the specified alpha blending operation
    #[inline]
    fn alpha_blend(self, dest: Self, operation: AlphaOperation) -> Self {
        let (src, dst) = operation.functions();
        self.alpha_blend_with_function(dest, src, dst)
    }

    #[inline] fn source_over(self, dest: Self) -> Self        { self.alpha_blend(dest, AlphaOperation::SourceOver) }
}

impl AlphaOperation {
    ///
    /// Returns the alpha functions to use for the source and target for this alpha operation
    ///
    #[inline]
    pub const fn functions(&self) -> (AlphaFunction, AlphaFunction) {
        match self {
            AlphaOperation::SourceOver      => (AlphaFunction::One,                 AlphaFunction::OneMinusSourceAlpha),
        }
    }
}

impl AlphaFunction {
    ///
    /// The 8-bit factor (where 255 represents 1.0) described by this function for a source alpha value
    ///
    #[inline]
    pub fn factor(&self, src_alpha: u8) -> u8 {
        match self {
            AlphaFunction::One                  => 255,
            AlphaFunction::OneMinusSourceAlpha  => 255 - src_alpha,
        }
    }
}
