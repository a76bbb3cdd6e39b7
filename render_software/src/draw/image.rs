use super::canvas_drawing::*;

use crate::canvas::*;
use crate::pixel::*;
use crate::render::*;

impl Canvas {
    ///
    /// Draws an image with its top-left corner at the specified position
    ///
    pub fn draw_image(&mut self, image: &RgbaFrame, x: i64, y: i64) {
        self.draw_image_anchored(image, x, y, 0.0, 0.0);
    }

    ///
    /// Draws an image relative to an anchor point
    ///
    /// `(ax, ay)` is the point in the image, as a fraction of its size, that ends up at `(x, y)`: `(0.5, 0.5)` centres
    /// the image on the point, for example. The image goes through the current transform and the clip mask.
    ///
    pub fn draw_image_anchored(&mut self, image: &RgbaFrame, x: i64, y: i64, ax: f64, ay: f64) {
        let x           = x - (ax * image.width() as f64) as i64;
        let y           = y - (ay * image.height() as f64) as i64;
        let transform   = self.current_state.transform.translated(x as f64, y as f64);

        composite_image(&mut self.frame, self.current_state.clip_mask.as_deref(), &transform, image.width(), image.height(),
            |tx, ty| image.pixel(tx, ty).unwrap_or_default());
    }
}

///
/// Draws an image (supplied as a function that returns the premultiplied texel at a position) through a transform
///
/// Every frame pixel whose centre maps back inside the image is sampled bilinearly and composited with the
/// source-over operation, after multiplying by the alpha value of the clip mask at that pixel.
///
pub (super) fn composite_image<TTexelFn>(frame: &mut RgbaFrame, clip_mask: Option<&AlphaMask>, transform: &Transform2D, image_width: usize, image_height: usize, texel: TTexelFn)
where
    TTexelFn: Fn(usize, usize) -> U8RgbaPremultipliedPixel,
{
    if image_width == 0 || image_height == 0 { return; }

    let inverse = match transform.invert() {
        Some(inverse)   => inverse,
        None            => {
            trace!("Not drawing image: transform {:?} can't be inverted", transform);
            return;
        }
    };

    // Only the pixels inside the transformed image bounds need to be considered
    let (width, height) = (image_width as f64, image_height as f64);
    let corners         = [Vector::new(0.0, 0.0), Vector::new(width, 0.0), Vector::new(0.0, height), Vector::new(width, height)];
    let corners         = corners.iter().map(|corner| transform.apply(*corner)).collect::<Vec<_>>();

    let min_x           = corners.iter().map(|corner| corner.x).fold(f64::INFINITY, f64::min);
    let min_y           = corners.iter().map(|corner| corner.y).fold(f64::INFINITY, f64::min);
    let max_x           = corners.iter().map(|corner| corner.x).fold(f64::NEG_INFINITY, f64::max);
    let max_y           = corners.iter().map(|corner| corner.y).fold(f64::NEG_INFINITY, f64::max);

    if !min_x.is_finite() || !min_y.is_finite() || !max_x.is_finite() || !max_y.is_finite() { return; }

    let x_range         = (min_x.floor().max(0.0) as usize)..(max_x.ceil().min(frame.width() as f64).max(0.0) as usize);
    let y_range         = (min_y.floor().max(0.0) as usize)..(max_y.ceil().min(frame.height() as f64).max(0.0) as usize);

    for y in y_range {
        let row = frame.row_mut(y);

        for x in x_range.clone() {
            let mask_alpha = clip_mask.map(|mask| mask.alpha_at(x, y)).unwrap_or(255);
            if mask_alpha == 0 { continue; }

            let source = inverse.apply(Vector::new(x as f64 + 0.5, y as f64 + 0.5));
            if !(source.x >= 0.0 && source.x < width && source.y >= 0.0 && source.y < height) { continue; }

            let pixel   = bilinear_sample(&texel, image_width, image_height, source.x - 0.5, source.y - 0.5);
            let pixel   = pixel.scale_alpha(mask_alpha);
            row[x]      = pixel.source_over(row[x]);
        }
    }
}

///
/// Samples an image between texel centres, where texel `(n, m)` has its centre at `(n, m)`
///
/// Positions beyond the outer texel centres take their values from the nearest edge texels.
///
fn bilinear_sample<TTexelFn>(texel: &TTexelFn, width: usize, height: usize, x: f64, y: f64) -> U8RgbaPremultipliedPixel
where
    TTexelFn: Fn(usize, usize) -> U8RgbaPremultipliedPixel,
{
    let clamp_idx   = |pos: f64, size: usize| if pos <= 0.0 { 0 } else { (pos as usize).min(size-1) };

    let (x_floor, y_floor)  = (x.floor(), y.floor());
    let (tx, ty)            = (x - x_floor, y - y_floor);
    let (x0, x1)            = (clamp_idx(x_floor, width), clamp_idx(x_floor + 1.0, width));
    let (y0, y1)            = (clamp_idx(y_floor, height), clamp_idx(y_floor + 1.0, height));

    let p00 = texel(x0, y0).get_components();
    let p10 = texel(x1, y0).get_components();
    let p01 = texel(x0, y1).get_components();
    let p11 = texel(x1, y1).get_components();

    let mut result = [0u8; 4];
    for component in 0..4 {
        let top         = (p00[component] as f64) * (1.0-tx) + (p10[component] as f64) * tx;
        let bottom      = (p01[component] as f64) * (1.0-tx) + (p11[component] as f64) * tx;
        let value       = top * (1.0-ty) + bottom * ty;

        result[component] = value.round().max(0.0).min(255.0) as u8;
    }

    U8RgbaPremultipliedPixel::from_components(result)
}
