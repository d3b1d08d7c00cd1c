use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;

use crate::font::{self, FontLoad};

/// Two-line caption drawn in the middle of every icon.
const ICON_TEXT: &str = "AI\nPM";
const TEXT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

// Vertical gradient, blue at the top shading toward cyan at the bottom.
const GRADIENT_GREEN_BASE: u32 = 100;
const GRADIENT_GREEN_SPAN: u32 = 155;

/// Corner radius is 1/8 of the icon size, the caption 1/4.
const CORNER_RADIUS_DIV: u32 = 8;
const FONT_SIZE_DIV: u32 = 4;

/// Render one square icon at `size` px. Pure: same size and font always
/// produce the same pixels.
pub fn render_icon(size: u32, font: &FontLoad) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    fill_gradient(&mut img);
    draw_caption(&mut img, font);
    apply_corner_mask(&mut img);
    img
}

fn fill_gradient(img: &mut RgbaImage) {
    let size = img.height();
    for y in 0..size {
        let green = (GRADIENT_GREEN_BASE + GRADIENT_GREEN_SPAN * y / size) as u8;
        let row_color = Rgba([0, green, 255, 255]);
        for x in 0..img.width() {
            img.put_pixel(x, y, row_color);
        }
    }
}

fn draw_caption(img: &mut RgbaImage, font: &FontLoad) {
    let px = (img.width() / FONT_SIZE_DIV).max(1);
    match font {
        FontLoad::Loaded(font) => draw_caption_font(img, font, px),
        FontLoad::FellBackToDefault => draw_caption_builtin(img, px),
    }
}

fn draw_caption_font(img: &mut RgbaImage, font: &FontVec, px: u32) {
    let size = img.width() as i32;
    let scale = PxScale::from(px as f32);
    let scaled = font.as_scaled(scale);
    let line_height = (scaled.height() + scaled.line_gap()).ceil() as i32;

    let lines: Vec<&str> = ICON_TEXT.lines().collect();
    let block_height = line_height * lines.len() as i32;

    let mut y = (size - block_height) / 2;
    for line in lines {
        let x = (size - line_width(&scaled, line)) / 2;
        draw_text_mut(img, TEXT_COLOR, x, y, scale, font, line);
        y += line_height;
    }
}

fn line_width<F: Font>(scaled: &impl ScaleFont<F>, line: &str) -> i32 {
    let width: f32 = line
        .chars()
        .map(|c| scaled.h_advance(scaled.glyph_id(c)))
        .sum();
    width.ceil() as i32
}

// Fallback caption from the 5x7 bitmap glyphs, scaled in whole-pixel cells so
// the letters stay crisp at every size.
fn draw_caption_builtin(img: &mut RgbaImage, px: u32) {
    let size = img.width() as i32;
    let cell = (px / (font::GLYPH_ROWS as u32 + 1)).max(1) as i32;
    let advance = cell * (font::GLYPH_COLS as i32 + 1);
    let line_height = cell * (font::GLYPH_ROWS as i32 + 2);

    let lines: Vec<&str> = ICON_TEXT.lines().collect();
    let block_height = line_height * lines.len() as i32;

    let mut y = (size - block_height) / 2;
    for line in lines {
        let width = advance * line.chars().count() as i32 - cell;
        let mut x = (size - width) / 2;
        for c in line.chars() {
            if let Some(rows) = font::builtin_glyph(c) {
                draw_builtin_glyph(img, x, y, cell, &rows);
            }
            x += advance;
        }
        y += line_height;
    }
}

fn draw_builtin_glyph(img: &mut RgbaImage, x0: i32, y0: i32, cell: i32, rows: &[u8; font::GLYPH_ROWS]) {
    for (row, bits) in rows.iter().enumerate() {
        for col in 0..font::GLYPH_COLS {
            if bits >> (font::GLYPH_COLS - 1 - col) & 1 == 1 {
                fill_cell(img, x0 + col as i32 * cell, y0 + row as i32 * cell, cell);
            }
        }
    }
}

fn fill_cell(img: &mut RgbaImage, x0: i32, y0: i32, cell: i32) {
    for y in y0..y0 + cell {
        for x in x0..x0 + cell {
            if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
                img.put_pixel(x as u32, y as u32, TEXT_COLOR);
            }
        }
    }
}

// Final compositing step: everything outside the rounded rectangle goes fully
// transparent, independent of what the fill and caption put there.
fn apply_corner_mask(img: &mut RgbaImage) {
    let size = img.width();
    let radius = (size / CORNER_RADIUS_DIV) as f32;
    for y in 0..size {
        for x in 0..size {
            if !inside_rounded_rect(x as f32 + 0.5, y as f32 + 0.5, size as f32, radius) {
                img.put_pixel(x, y, TRANSPARENT);
            }
        }
    }
}

fn inside_rounded_rect(px: f32, py: f32, size: f32, radius: f32) -> bool {
    let dx = (radius - px).max(px - (size - radius)).max(0.0);
    let dy = (radius - py).max(py - (size - radius)).max(0.0);
    dx * dx + dy * dy <= radius * radius
}
