use flo_raster_software::*;
use flo_raster_software::pixel::*;
use flo_raster_software::render::*;
use flo_raster_software::canvas::*;

use std::sync::*;

const RED: U8RgbaPremultipliedPixel = U8RgbaPremultipliedPixel::from_components([255, 0, 0, 255]);

fn red_square(size: usize) -> RgbaFrame {
    RgbaFrame::from_pixels(size, size, vec![RED; size*size]).unwrap()
}

fn alpha(canvas: &Canvas, x: usize, y: usize) -> u8 {
    canvas.frame().pixel(x, y).unwrap().alpha()
}

#[test]
fn draw_image_at_position() {
    let mut canvas = Canvas::new(8, 8);

    canvas.draw_image(&red_square(2), 3, 3);

    assert!(canvas.frame().pixel(3, 3) == Some(RED));
    assert!(canvas.frame().pixel(4, 4) == Some(RED));
    assert!(alpha(&canvas, 2, 2) == 0);
    assert!(alpha(&canvas, 5, 5) == 0);
    assert!(alpha(&canvas, 5, 3) == 0);
}

#[test]
fn draw_image_anchored_at_centre() {
    let mut anchored    = Canvas::new(8, 8);
    let mut positioned  = Canvas::new(8, 8);

    anchored.draw_image_anchored(&red_square(2), 4, 4, 0.5, 0.5);
    positioned.draw_image(&red_square(2), 3, 3);

    assert!(anchored.frame() == positioned.frame());
}

#[test]
fn draw_image_through_transform() {
    let mut canvas = Canvas::new(8, 8);

    canvas.scale(2.0, 2.0);
    canvas.draw_image(&red_square(2), 1, 1);

    assert!(canvas.frame().pixel(2, 2) == Some(RED));
    assert!(canvas.frame().pixel(5, 5) == Some(RED));
    assert!(alpha(&canvas, 1, 1) == 0);
    assert!(alpha(&canvas, 6, 6) == 0);
}

#[test]
fn draw_image_blends_with_frame() {
    let mut canvas  = Canvas::new(4, 4);
    let half_red    = RgbaFrame::from_pixels(1, 1, vec![U8RgbaPremultipliedPixel::from_color(Color::from_rgba(1.0, 0.0, 0.0, 0.5))]).unwrap();

    canvas.background(Color::from_rgb(0.0, 0.0, 1.0));
    canvas.draw_image(&half_red, 1, 1);

    let pixel = canvas.frame().pixel(1, 1).unwrap().get_components();
    assert!(pixel == [128, 0, 127, 255], "{:?}", pixel);
}

#[test]
fn draw_image_through_clip_mask() {
    let mut canvas = Canvas::new(8, 8);

    canvas.draw_rectangle(0.0, 0.0, 4.0, 8.0);
    canvas.clip().unwrap();
    canvas.draw_image(&red_square(4), 2, 2);

    assert!(canvas.frame().pixel(3, 3) == Some(RED));
    assert!(alpha(&canvas, 4, 3) == 0);
}

#[test]
fn draw_image_with_degenerate_transform() {
    let mut canvas = Canvas::new(8, 8);

    canvas.scale(0.0, 1.0);
    canvas.draw_image(&red_square(2), 1, 1);

    assert!(canvas.frame().pixels().iter().all(|pixel| pixel.alpha() == 0));
}

#[test]
fn draw_image_off_the_frame() {
    let mut canvas = Canvas::new(8, 8);

    canvas.draw_image(&red_square(4), -2, -2);
    canvas.draw_image(&red_square(4), 100, 3);

    assert!(canvas.frame().pixel(0, 0) == Some(RED));
    assert!(canvas.frame().pixel(1, 1) == Some(RED));
    assert!(alpha(&canvas, 2, 2) == 0);
}

fn alpha_glyph(advance: f64) -> Glyph {
    Glyph::new(Vector::new(0.0, 0.0), GlyphBitmap::Alpha(Arc::new(AlphaMask::opaque(2, 2))), advance)
}

#[test]
fn measure_glyph_run() {
    let glyphs = vec![alpha_glyph(3.0), alpha_glyph(2.5), alpha_glyph(4.0)];

    assert!(measure_glyphs(&glyphs) == 9.5);
    assert!(measure_glyphs(&[]) == 0.0);
    assert!(glyphs[0].bitmap.size() == (2, 2));
}

#[test]
fn alpha_glyphs_use_current_color() {
    let mut canvas = Canvas::new(16, 8);

    canvas.set_color(Color::from_rgb(1.0, 0.0, 0.0));
    canvas.draw_glyphs(&[alpha_glyph(3.0), alpha_glyph(3.0)], 1.0, 1.0);

    assert!(canvas.frame().pixel(1, 1) == Some(RED));
    assert!(canvas.frame().pixel(2, 2) == Some(RED));
    assert!(alpha(&canvas, 3, 1) == 0);
    assert!(canvas.frame().pixel(4, 1) == Some(RED));
    assert!(canvas.frame().pixel(5, 2) == Some(RED));
    assert!(alpha(&canvas, 6, 1) == 0);
}

#[test]
fn glyphs_are_invisible_with_default_color() {
    let mut canvas = Canvas::new(8, 8);

    canvas.draw_glyphs(&[alpha_glyph(3.0)], 1.0, 1.0);

    assert!(canvas.frame().pixels().iter().all(|pixel| pixel.alpha() == 0));
}

#[test]
fn color_glyphs_are_drawn_as_images() {
    let mut canvas  = Canvas::new(8, 8);
    let glyph       = Glyph::new(Vector::new(1.0, -1.0), GlyphBitmap::Color(Arc::new(red_square(2))), 2.0);

    canvas.draw_glyphs(&[glyph], 2.0, 4.0);

    assert!(canvas.frame().pixel(3, 3) == Some(RED));
    assert!(canvas.frame().pixel(4, 4) == Some(RED));
    assert!(alpha(&canvas, 2, 3) == 0);
}

#[test]
fn anchored_glyphs() {
    let mut canvas = Canvas::new(16, 16);

    canvas.set_color(Color::from_rgb(1.0, 0.0, 0.0));

    // Right-aligned to x=10, and moved down by half the line height
    canvas.draw_glyphs_anchored(&[alpha_glyph(3.0), alpha_glyph(3.0)], 10.0, 4.0, 1.0, 0.5, 4.0);

    assert!(canvas.frame().pixel(4, 6) == Some(RED));
    assert!(canvas.frame().pixel(7, 6) == Some(RED));
    assert!(alpha(&canvas, 4, 4) == 0);
    assert!(alpha(&canvas, 3, 6) == 0);
}

#[test]
fn glyphs_through_clip_mask() {
    let mut canvas = Canvas::new(16, 8);

    canvas.set_color(Color::from_rgb(1.0, 0.0, 0.0));
    canvas.invert_mask();
    canvas.draw_glyphs(&[alpha_glyph(3.0)], 1.0, 1.0);

    assert!(canvas.frame().pixels().iter().all(|pixel| pixel.alpha() == 0));
}
