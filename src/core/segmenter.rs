//! Regionserkennung (Flood-Fill) für das automatische Umranden von Griffen.
//!
//! Ausgehend vom Tap-Pixel wächst eine 4-zusammenhängende Region über alle
//! Pixel, deren RGB-Abstand zur Startfarbe unter einer Schwelle liegt. Die
//! Pixel-Obergrenze hält die Latenz auf großflächig einfarbigen Bildern
//! (Himmel, Wand) beschränkt.

use super::annotation::Shape;
use glam::Vec2;
use image::RgbaImage;

/// Standard-Farbschwelle (euklidischer RGB-Abstand).
pub const COLOR_THRESHOLD: f32 = 40.0;
/// Maximale Regionsgröße in Pixeln.
pub const MAX_REGION_PIXELS: usize = 50_000;
/// Minimale Regionsgröße in Pixeln; kleinere Regionen gelten als Rauschen.
pub const MIN_REGION_PIXELS: usize = 10;
/// Zuschlag auf Breite/Höhe der Bounding-Box in Pixeln.
pub const REGION_PADDING: f32 = 10.0;
/// Maximaler Anteil der Canvas-Fläche, den eine Region-Bounding-Box belegen darf.
pub const MAX_AREA_FRACTION: f32 = 0.1;
/// Radius des Fallback-Kreises in Pixeln.
pub const DEFAULT_CIRCLE_RADIUS: f32 = 30.0;

/// Parameter der Regionserkennung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentParams {
    pub color_threshold: f32,
    pub max_region_pixels: usize,
    pub min_region_pixels: usize,
    pub padding: f32,
    pub max_area_fraction: f32,
    pub default_circle_radius: f32,
}

impl Default for SegmentParams {
    fn default() -> Self {
        Self {
            color_threshold: COLOR_THRESHOLD,
            max_region_pixels: MAX_REGION_PIXELS,
            min_region_pixels: MIN_REGION_PIXELS,
            padding: REGION_PADDING,
            max_area_fraction: MAX_AREA_FRACTION,
            default_circle_radius: DEFAULT_CIRCLE_RADIUS,
        }
    }
}

/// Zusammenhängende Region ähnlicher Farbe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Anzahl der Pixel in der Region (höchstens `max_region_pixels`)
    pub pixel_count: usize,
    /// Kleinste Pixel-Koordinate (x, y)
    pub min: [u32; 2],
    /// Größte Pixel-Koordinate (x, y), inklusiv
    pub max: [u32; 2],
}

impl Region {
    /// Ellipse um die Bounding-Box, Breite/Höhe um `padding` vergrößert.
    pub fn to_ellipse(&self, padding: f32) -> Shape {
        let min = Vec2::new(self.min[0] as f32, self.min[1] as f32);
        let max = Vec2::new(self.max[0] as f32, self.max[1] as f32);
        let extent = max - min + Vec2::splat(padding);
        Shape::ellipse((min + max) / 2.0, extent.x, extent.y)
    }
}

/// Grund, warum statt einer erkannten Region die Fallback-Form verwendet wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// Startpunkt liegt außerhalb des Bildes
    OutOfBounds,
    /// Region kleiner als `min_region_pixels`
    TooSmall,
    /// Bounding-Fläche größer als `max_area_fraction` der Canvas-Fläche
    TooLarge,
}

/// Ergebnis von [`trace_hold`].
#[derive(Debug, Clone, PartialEq)]
pub enum TraceOutcome {
    /// Region erkannt, Ellipse um die Region
    Traced { shape: Shape, region: Region },
    /// Keine brauchbare Region, Standardkreis am Startpunkt
    Fallback { shape: Shape, reason: FallbackReason },
}

impl TraceOutcome {
    /// Die zu übernehmende Form, unabhängig vom Ausgang.
    pub fn into_shape(self) -> Shape {
        match self {
            TraceOutcome::Traced { shape, .. } | TraceOutcome::Fallback { shape, .. } => shape,
        }
    }
}

/// Sucht die Region ähnlicher Farbe um `seed`.
///
/// Gibt `Err` zurück, wenn der Startpunkt außerhalb liegt oder die Region
/// weniger als `min_region_pixels` Pixel umfasst. Das Wachstum stoppt exakt
/// bei `max_region_pixels`.
pub fn find_region(
    image: &RgbaImage,
    seed: Vec2,
    params: &SegmentParams,
) -> Result<Region, FallbackReason> {
    let (width, height) = image.dimensions();
    if !seed.x.is_finite() || !seed.y.is_finite() || seed.x < 0.0 || seed.y < 0.0 {
        return Err(FallbackReason::OutOfBounds);
    }
    let start_x = seed.x.floor() as u32;
    let start_y = seed.y.floor() as u32;
    if start_x >= width || start_y >= height {
        return Err(FallbackReason::OutOfBounds);
    }

    let target = image.get_pixel(start_x, start_y).0;
    let threshold_sq = params.color_threshold * params.color_threshold;
    let is_similar = |px: [u8; 4]| {
        let dr = px[0] as f32 - target[0] as f32;
        let dg = px[1] as f32 - target[1] as f32;
        let db = px[2] as f32 - target[2] as f32;
        dr * dr + dg * dg + db * db <= threshold_sq
    };

    let w = width as usize;
    let mut visited = vec![false; w * height as usize];
    let mut stack = vec![(start_x, start_y)];
    let mut pixel_count = 0usize;
    let mut min = [start_x, start_y];
    let mut max = [start_x, start_y];

    while pixel_count < params.max_region_pixels {
        let Some((x, y)) = stack.pop() else {
            break;
        };
        let idx = y as usize * w + x as usize;
        if visited[idx] || !is_similar(image.get_pixel(x, y).0) {
            continue;
        }

        visited[idx] = true;
        pixel_count += 1;
        min = [min[0].min(x), min[1].min(y)];
        max = [max[0].max(x), max[1].max(y)];

        if x + 1 < width && !visited[idx + 1] {
            stack.push((x + 1, y));
        }
        if x > 0 && !visited[idx - 1] {
            stack.push((x - 1, y));
        }
        if y + 1 < height && !visited[idx + w] {
            stack.push((x, y + 1));
        }
        if y > 0 && !visited[idx - w] {
            stack.push((x, y - 1));
        }
    }

    if pixel_count < params.min_region_pixels {
        return Err(FallbackReason::TooSmall);
    }

    Ok(Region {
        pixel_count,
        min,
        max,
    })
}

/// Umrandet den Griff am Tap-Punkt.
///
/// Erkannte Regionen werden als Ellipse übernommen, sofern ihre
/// Bounding-Fläche nicht mehr als `max_area_fraction` des Bildes belegt
/// (sonst wurde vermutlich der Hintergrund geflutet). In allen anderen
/// Fällen entsteht ein Kreis mit `default_circle_radius` am Startpunkt.
pub fn trace_hold(image: &RgbaImage, seed: Vec2, params: &SegmentParams) -> TraceOutcome {
    let fallback = |reason| TraceOutcome::Fallback {
        shape: Shape::circle(seed, params.default_circle_radius),
        reason,
    };

    let region = match find_region(image, seed, params) {
        Ok(region) => region,
        Err(reason) => {
            log::debug!("Regionserkennung bei {:?}: {:?}", seed, reason);
            return fallback(reason);
        }
    };

    let shape = region.to_ellipse(params.padding);
    let Shape::Ellipse { width, height, .. } = shape else {
        return fallback(FallbackReason::TooSmall);
    };

    let canvas_area = image.width() as f32 * image.height() as f32;
    if width * height > canvas_area * params.max_area_fraction {
        log::debug!(
            "Region zu groß ({:.0}x{:.0} px bei {:.0} px² Canvas), Fallback-Kreis",
            width,
            height,
            canvas_area
        );
        return fallback(FallbackReason::TooLarge);
    }

    log::debug!(
        "Region erkannt: {} Pixel, Box {:?}..{:?}",
        region.pixel_count,
        region.min,
        region.max
    );
    TraceOutcome::Traced { shape, region }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use image::Rgba;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn canvas_with_patch(size: u32, min: u32, max_excl: u32, color: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_fn(size, size, |x, y| {
            if (min..max_excl).contains(&x) && (min..max_excl).contains(&y) {
                color
            } else {
                WHITE
            }
        })
    }

    #[test]
    fn region_size_matches_uniform_patch() {
        let image = canvas_with_patch(200, 45, 55, RED);
        let region = find_region(&image, Vec2::new(50.0, 50.0), &SegmentParams::default())
            .expect("Region erwartet");

        assert_eq!(region.pixel_count, 100);
        assert_eq!(region.min, [45, 45]);
        assert_eq!(region.max, [54, 54]);
    }

    #[test]
    fn similar_colors_within_threshold_join_region() {
        let mut image = canvas_with_patch(100, 10, 20, RED);
        // Leicht abweichendes Rot (Abstand 30) zählt noch zur Region
        image.put_pixel(20, 15, Rgba([235, 20, 10, 255]));
        // Abstand > 40 nicht mehr
        image.put_pixel(21, 15, Rgba([200, 30, 10, 255]));

        let region = find_region(&image, Vec2::new(12.0, 12.0), &SegmentParams::default())
            .expect("Region erwartet");
        assert_eq!(region.pixel_count, 101);
        assert_eq!(region.max, [20, 19]);
    }

    #[test]
    fn diagonal_neighbors_are_not_connected() {
        let mut image = canvas_with_patch(60, 10, 20, RED);
        image.put_pixel(20, 20, RED);
        for x in 21..40 {
            image.put_pixel(x, 20, RED);
        }

        let region = find_region(&image, Vec2::new(15.0, 15.0), &SegmentParams::default())
            .expect("Region erwartet");
        assert_eq!(region.pixel_count, 100);
    }

    #[test]
    fn region_is_truncated_exactly_at_cap() {
        let image = RgbaImage::from_pixel(300, 300, WHITE);
        let params = SegmentParams {
            max_region_pixels: 5_000,
            ..SegmentParams::default()
        };

        let region =
            find_region(&image, Vec2::new(150.0, 150.0), &params).expect("Region erwartet");
        assert_eq!(region.pixel_count, 5_000);
    }

    #[test]
    fn tiny_region_is_rejected() {
        let image = canvas_with_patch(50, 10, 13, RED);
        assert_eq!(
            find_region(&image, Vec2::new(11.0, 11.0), &SegmentParams::default()),
            Err(FallbackReason::TooSmall)
        );
    }

    #[test]
    fn out_of_bounds_seed_is_rejected() {
        let image = RgbaImage::from_pixel(20, 20, WHITE);
        let params = SegmentParams::default();
        assert_eq!(
            find_region(&image, Vec2::new(20.0, 5.0), &params),
            Err(FallbackReason::OutOfBounds)
        );
        assert_eq!(
            find_region(&image, Vec2::new(-1.0, 5.0), &params),
            Err(FallbackReason::OutOfBounds)
        );
    }

    #[test]
    fn trace_hold_builds_padded_ellipse() {
        let image = canvas_with_patch(200, 45, 55, RED);
        let outcome = trace_hold(&image, Vec2::new(50.0, 50.0), &SegmentParams::default());

        let TraceOutcome::Traced {
            shape:
                Shape::Ellipse {
                    center,
                    width,
                    height,
                    radius,
                },
            ..
        } = outcome
        else {
            panic!("Ellipse erwartet, erhalten: {outcome:?}");
        };
        assert_relative_eq!(center.x, 49.5);
        assert_relative_eq!(center.y, 49.5);
        assert_relative_eq!(width, 19.0);
        assert_relative_eq!(height, 19.0);
        assert_relative_eq!(radius, 9.5);
    }

    #[test]
    fn trace_hold_falls_back_on_background_flood() {
        let image = RgbaImage::from_pixel(100, 100, WHITE);
        let seed = Vec2::new(30.0, 40.0);
        let outcome = trace_hold(&image, seed, &SegmentParams::default());

        match outcome {
            TraceOutcome::Fallback {
                shape: Shape::Circle { center, radius },
                reason: FallbackReason::TooLarge,
            } => {
                assert_eq!(center, seed);
                assert_relative_eq!(radius, DEFAULT_CIRCLE_RADIUS);
            }
            other => panic!("Fallback erwartet, erhalten: {other:?}"),
        }
    }

    #[test]
    fn trace_hold_falls_back_on_noise() {
        let mut image = RgbaImage::from_pixel(100, 100, WHITE);
        image.put_pixel(10, 10, RED);
        let outcome = trace_hold(&image, Vec2::new(10.5, 10.5), &SegmentParams::default());
        assert!(matches!(
            outcome,
            TraceOutcome::Fallback {
                reason: FallbackReason::TooSmall,
                ..
            }
        ));
    }
}
