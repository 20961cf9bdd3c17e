//! Minimalistisches Bitmap-Text-Rendering für Sequenznummern.
//!
//! Eingebetteter 5×7 Bitmap-Font (Ziffern, Komma, Leerzeichen).
//! Glyph-Pixel werden als skalierte Blöcke direkt in die Pixmap gefüllt.

use glam::Vec2;
use tiny_skia::{Paint, Pixmap, Rect, Transform};

const CHAR_WIDTH: usize = 5;
const CHAR_HEIGHT: usize = 7;

/// 8 Richtungen für den Umriss.
const OUTLINE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Skalierungsfaktor für eine Schriftgröße in Pixeln (Glyph-Höhe).
pub fn scale_for_font_px(font_px: f32) -> u32 {
    ((font_px / CHAR_HEIGHT as f32).round() as u32).max(1)
}

/// Berechnet die Pixelbreite eines Texts.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    chars * CHAR_WIDTH as u32 * scale + (chars - 1) * scale
}

/// Berechnet die Pixelhöhe eines Texts.
pub fn text_height(scale: u32) -> u32 {
    CHAR_HEIGHT as u32 * scale
}

/// Zeichnet einen Text-String, `x`/`y` = obere linke Ecke.
///
/// Unbekannte Zeichen werden übersprungen, belegen aber ihren Platz.
pub fn draw_text(pixmap: &mut Pixmap, x: i32, y: i32, text: &str, color: [u8; 4], scale: u32) {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color[0], color[1], color[2], color[3]);
    paint.anti_alias = false;

    let char_w = (CHAR_WIDTH as i32) * scale as i32;
    let mut cursor_x = x;

    for ch in text.chars() {
        if let Some(glyph) = glyph_for(ch) {
            draw_glyph(pixmap, cursor_x, y, glyph, &paint, scale);
        }
        cursor_x += char_w + scale as i32;
    }
}

/// Zeichnet Text mit Umriss in 8 Richtungen.
///
/// Die Umrissbreite wächst mit der Skalierung (halbe Blockgröße, mindestens 1 px).
pub fn draw_text_outlined(
    pixmap: &mut Pixmap,
    x: i32,
    y: i32,
    text: &str,
    fill: [u8; 4],
    outline: [u8; 4],
    scale: u32,
) {
    let width = ((scale as i32 + 1) / 2).max(1);
    for &(dx, dy) in &OUTLINE_OFFSETS {
        draw_text(pixmap, x + dx * width, y + dy * width, text, outline, scale);
    }
    draw_text(pixmap, x, y, text, fill, scale);
}

/// Zeichnet eine umrandete Beschriftung zentriert um `center`.
pub fn draw_label_centered(
    pixmap: &mut Pixmap,
    center: Vec2,
    text: &str,
    font_px: f32,
    fill: [u8; 4],
    outline: [u8; 4],
) {
    let scale = scale_for_font_px(font_px);
    let x = (center.x - text_width(text, scale) as f32 / 2.0).round() as i32;
    let y = (center.y - text_height(scale) as f32 / 2.0).round() as i32;
    draw_text_outlined(pixmap, x, y, text, fill, outline, scale);
}

/// Zeichnet ein einzelnes Glyph.
fn draw_glyph(
    pixmap: &mut Pixmap,
    x: i32,
    y: i32,
    glyph: &[u8; CHAR_HEIGHT],
    paint: &Paint,
    scale: u32,
) {
    let block = scale as f32;
    for (row, &bits) in glyph.iter().enumerate() {
        for col in 0..CHAR_WIDTH {
            if bits & (1 << (CHAR_WIDTH - 1 - col)) == 0 {
                continue;
            }
            let px = x as f32 + col as f32 * block;
            let py = y as f32 + row as f32 * block;
            // Außerhalb liegende Blöcke clippt tiny-skia selbst
            if let Some(rect) = Rect::from_xywh(px, py, block, block) {
                pixmap.fill_rect(rect, paint, Transform::identity(), None);
            }
        }
    }
}

/// Gibt das Glyph für ein Zeichen zurück.
fn glyph_for(ch: char) -> Option<&'static [u8; CHAR_HEIGHT]> {
    match ch {
        '0'..='9' => Some(&DIGITS[ch as usize - '0' as usize]),
        ',' => Some(&COMMA),
        ' ' => Some(&SPACE),
        _ => None,
    }
}

// ── 5×7 Bitmap Font ─────────────────────────────────────────────────
// Jede Zeile ist ein Byte, Bits 4–0 repräsentieren die 5 Spalten.

#[rustfmt::skip]
static DIGITS: [[u8; CHAR_HEIGHT]; 10] = [
    // '0'
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    // '1'
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    // '2'
    [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
    // '3'
    [0b01110, 0b10001, 0b00001, 0b00110, 0b00001, 0b10001, 0b01110],
    // '4'
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    // '5'
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
    // '6'
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
    // '7'
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    // '8'
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    // '9'
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
];

#[rustfmt::skip]
static COMMA: [u8; CHAR_HEIGHT] =
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b00100, 0b01000];

static SPACE: [u8; CHAR_HEIGHT] = [0; CHAR_HEIGHT];

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(pixmap: &Pixmap, x: u32, y: u32) -> [u8; 4] {
        let c = pixmap.pixel(x, y).expect("Pixel im Bild").demultiply();
        [c.red(), c.green(), c.blue(), c.alpha()]
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("12", 1), 11); // 5+1+5
        assert_eq!(text_width("1", 1), 5);
        assert_eq!(text_width("", 1), 0);
        assert_eq!(text_width("1, 2", 2), 46); // 4*10 + 3*2
    }

    #[test]
    fn test_scale_for_font_px() {
        assert_eq!(scale_for_font_px(14.0), 2);
        assert_eq!(scale_for_font_px(28.0), 4);
        assert_eq!(scale_for_font_px(2.0), 1);
    }

    #[test]
    fn test_draw_digit_fills_blocks() {
        let mut pixmap = Pixmap::new(20, 20).expect("Pixmap");
        draw_text(&mut pixmap, 0, 0, "1", [255, 0, 0, 255], 2);
        // '1', Zeile 0 = 0b00100 → Spalte 2 → Pixel x 4..6
        assert_eq!(pixel(&pixmap, 4, 0), [255, 0, 0, 255]);
        assert_eq!(pixel(&pixmap, 5, 1), [255, 0, 0, 255]);
        assert_eq!(pixel(&pixmap, 0, 0)[3], 0);
    }

    #[test]
    fn test_outline_surrounds_fill() {
        let mut pixmap = Pixmap::new(20, 20).expect("Pixmap");
        draw_text_outlined(
            &mut pixmap,
            5,
            5,
            "1",
            [255, 0, 0, 255],
            [255, 255, 255, 255],
            1,
        );
        // Glyph-Pixel (Spalte 2, Zeile 0) in Füllfarbe, Nachbar darüber im Umriss
        assert_eq!(pixel(&pixmap, 7, 5), [255, 0, 0, 255]);
        assert_eq!(pixel(&pixmap, 7, 4), [255, 255, 255, 255]);
    }

    #[test]
    fn test_draw_out_of_bounds_does_not_panic() {
        let mut pixmap = Pixmap::new(10, 10).expect("Pixmap");
        draw_text(&mut pixmap, -5, -5, "88", [255, 0, 0, 255], 1);
        draw_label_centered(
            &mut pixmap,
            Vec2::new(9.0, 9.0),
            "12, 13",
            28.0,
            [255, 0, 0, 255],
            [255, 255, 255, 255],
        );
    }
}
