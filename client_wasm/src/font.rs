//! Tiny 5x7 bitmap font for score and prompt text
//!
//! Each glyph is seven rows; the low five bits of a row are its pixels,
//! leftmost column in bit 4.

use glam::Vec2;

pub const GLYPH_WIDTH: usize = 5;
pub const GLYPH_HEIGHT: usize = 7;
const ADVANCE: usize = GLYPH_WIDTH + 1;
// Font pixels per unit of text size
const UNITS_PER_SIZE: f32 = 10.0;

const BLANK: [u8; GLYPH_HEIGHT] = [0; GLYPH_HEIGHT];

/// Rows for `ch`; unknown characters render blank. Case is ignored.
pub fn glyph(ch: char) -> [u8; GLYPH_HEIGHT] {
    match ch.to_ascii_lowercase() {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'a' => [0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111],
        'b' => [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b11110],
        'c' => [0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110],
        'd' => [0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10001, 0b01111],
        'e' => [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110],
        'f' => [0b00110, 0b01001, 0b01000, 0b11100, 0b01000, 0b01000, 0b01000],
        'g' => [0b00000, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110],
        'h' => [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
        'i' => [0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110],
        'j' => [0b00010, 0b00000, 0b00110, 0b00010, 0b00010, 0b10010, 0b01100],
        'k' => [0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010],
        'l' => [0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'm' => [0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10001, 0b10001],
        'n' => [0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
        'o' => [0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
        'p' => [0b00000, 0b00000, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000],
        'q' => [0b00000, 0b00000, 0b01101, 0b10011, 0b01111, 0b00001, 0b00001],
        'r' => [0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000],
        's' => [0b00000, 0b00000, 0b01110, 0b10000, 0b01110, 0b00001, 0b11110],
        't' => [0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110],
        'u' => [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101],
        'v' => [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'w' => [0b00000, 0b00000, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010],
        'x' => [0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001],
        'y' => [0b00000, 0b00000, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110],
        'z' => [0b00000, 0b00000, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111],
        ':' => [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        _ => BLANK,
    }
}

/// Size of one font pixel for the given text size
fn pixel(size: f32) -> f32 {
    size / UNITS_PER_SIZE
}

pub fn text_width(text: &str, size: f32) -> f32 {
    let count = text.chars().count();
    if count == 0 {
        return 0.0;
    }
    (count * ADVANCE - 1) as f32 * pixel(size)
}

/// Rectangles (top-left, size) covering the lit pixels of `text`, centered
/// on `anchor.x` with the baseline at `anchor.y`. Horizontal runs within a
/// row are merged into one rectangle.
pub fn layout(text: &str, anchor: Vec2, size: f32) -> Vec<(Vec2, Vec2)> {
    let px = pixel(size);
    let left = anchor.x - text_width(text, size) / 2.0;
    let top = anchor.y - GLYPH_HEIGHT as f32 * px;
    let mut rects = Vec::new();

    for (index, ch) in text.chars().enumerate() {
        let glyph_left = left + (index * ADVANCE) as f32 * px;
        for (row, bits) in glyph(ch).iter().enumerate() {
            let y = top + row as f32 * px;
            let mut col = 0;
            while col < GLYPH_WIDTH {
                if !is_lit(*bits, col) {
                    col += 1;
                    continue;
                }
                let start = col;
                while col < GLYPH_WIDTH && is_lit(*bits, col) {
                    col += 1;
                }
                rects.push((
                    Vec2::new(glyph_left + start as f32 * px, y),
                    Vec2::new((col - start) as f32 * px, px),
                ));
            }
        }
    }
    rects
}

fn is_lit(bits: u8, col: usize) -> bool {
    bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0
}
