use std::path::Path;

use anyhow::{Context, Result};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Polygon, Rgb,
};

use crate::models::{Assessment, PropertyAssessment, RiskLevel, Trend};
use crate::scoring::level::{level_rgb, RISK_LEVELS};

const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN: f32 = 18.0;
const COVER_HDR_H: f32 = 64.0;

type Rgb3 = (f32, f32, f32);

// ── Palette ───────────────────────────────────────────────────────────────────
const BG:           Rgb3 = (1.00, 1.00, 1.00);
const PANEL:        Rgb3 = (1.00, 1.00, 1.00);
const PANEL_ALT:    Rgb3 = (0.95, 0.96, 0.99);
const PANEL_BORDER: Rgb3 = (0.85, 0.87, 0.92);
const ACCENT_FROM:  Rgb3 = (0.06, 0.46, 0.43); // teal
const ACCENT_TO:    Rgb3 = (0.13, 0.30, 0.62); // slate blue
const TEXT_PRI:     Rgb3 = (0.07, 0.08, 0.14);
const TEXT_SEC:     Rgb3 = (0.36, 0.40, 0.52);
const TEXT_MUT:     Rgb3 = (0.58, 0.63, 0.72);
const WHITE:        Rgb3 = (1.00, 1.00, 1.00);
const WHITE_DIM:    Rgb3 = (0.82, 0.92, 0.95);

const R_BADGE: f32 = 1.5;

// ── Property table layout ─────────────────────────────────────────────────────
const T_END: f32 = PAGE_W - MARGIN;
const ROW_H: f32 = 8.0;
const HDR_H: f32 = 9.0;
const COL_X: [f32; 6] = [
    MARGIN,         // property
    MARGIN + 62.0,  // id
    MARGIN + 96.0,  // risk
    MARGIN + 112.0, // safety
    MARGIN + 128.0, // level badge
    MARGIN + 156.0, // trend
];
const TABLE_BOTTOM: f32 = 24.0;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render a PDF report: cover page with level summary → property table pages.
pub fn render(assessment: &Assessment, input_path: &Path, output_path: &Path) -> Result<()> {
    let source_name = input_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("inspections");

    let doc = PdfDocument::empty("Property Risk Report");

    add_cover_page(&doc, assessment, source_name)?;
    add_table_pages(&doc, &assessment.properties)?;

    let bytes = doc.save_to_bytes()?;
    std::fs::write(output_path, &bytes)
        .with_context(|| format!("Failed to write PDF to {}", output_path.display()))?;

    log::info!("PDF report written to {}", output_path.display());
    println!("PDF report written to: {}", output_path.display());
    Ok(())
}

// ── Cover page ────────────────────────────────────────────────────────────────

fn add_cover_page(doc: &PdfDocumentReference, assessment: &Assessment, source_name: &str) -> Result<()> {
    let (page_idx, layer_idx) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Cover");
    let layer = doc.get_page(page_idx).get_layer(layer_idx);

    let font_b = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let font_r = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    fill_rect(&layer, 0.0, 0.0, PAGE_W, PAGE_H, BG);

    let hdr_bot = PAGE_H - COVER_HDR_H;
    fill_gradient_h(&layer, 0.0, hdr_bot, PAGE_W, COVER_HDR_H, ACCENT_FROM, ACCENT_TO, 28);

    set_color(&layer, WHITE_DIM);
    layer.use_text(
        format!("risk-scorer v{}", env!("CARGO_PKG_VERSION")),
        7.5, Mm(PAGE_W - MARGIN - 30.0), Mm(PAGE_H - 10.5), &font_r,
    );

    set_color(&layer, WHITE);
    layer.use_text("Property Risk", 28.0, Mm(MARGIN), Mm(PAGE_H - 26.0), &font_b);
    set_color(&layer, WHITE_DIM);
    layer.use_text("Report", 28.0, Mm(MARGIN), Mm(PAGE_H - 41.0), &font_b);

    // ── Source + date ─────────────────────────────────────────────────────────
    let info_y = hdr_bot - 14.0;
    set_color(&layer, TEXT_MUT);
    layer.use_text("INSPECTIONS", 6.5, Mm(MARGIN), Mm(info_y + 4.0), &font_b);
    set_color(&layer, TEXT_PRI);
    layer.use_text(truncate(source_name, 48), 10.0, Mm(MARGIN), Mm(info_y - 1.5), &font_b);
    set_color(&layer, TEXT_SEC);
    let inspected = assessment.inspected_on.as_deref().unwrap_or("date not recorded");
    layer.use_text(
        format!("Inspected  {}   |   {} scale", inspected, assessment.scale),
        9.0, Mm(MARGIN), Mm(info_y - 8.0), &font_r,
    );

    // ── Stat cards (total + one per level) ────────────────────────────────────
    let rule_y = info_y - 16.0;
    draw_hline(&layer, MARGIN, T_END, rule_y, PANEL_BORDER);
    set_color(&layer, TEXT_MUT);
    layer.use_text("OVERVIEW", 6.5, Mm(MARGIN), Mm(rule_y - 7.0), &font_b);

    let card_y = rule_y - 40.0;
    let card_h = 26.0f32;
    let gap = 3.0f32;
    let card_w = (T_END - MARGIN - gap * 4.0) / 5.0;

    draw_stat_card(
        &layer, MARGIN, card_y, card_w, card_h,
        "TOTAL", &assessment.properties.len().to_string(), ACCENT_TO,
        &font_r, &font_b,
    );
    for (i, level) in RiskLevel::ALL.iter().rev().enumerate() {
        let cx = MARGIN + (card_w + gap) * (i + 1) as f32;
        let label = level.to_string();
        draw_stat_card(
            &layer, cx, card_y, card_w, card_h,
            &label, &assessment.count(*level).to_string(), level_color(*level),
            &font_r, &font_b,
        );
    }

    // ── Level reference ───────────────────────────────────────────────────────
    let section_y = card_y - 13.0;
    draw_hline(&layer, MARGIN, T_END, section_y, PANEL_BORDER);
    set_color(&layer, TEXT_MUT);
    layer.use_text("RISK LEVELS", 6.5, Mm(MARGIN), Mm(section_y - 7.5), &font_b);

    for (j, config) in RISK_LEVELS.iter().rev().enumerate() {
        let iy = section_y - 16.0 - j as f32 * 11.0;
        fill_rounded_rect(&layer, MARGIN, iy + 1.0, 3.0, 3.0, 1.5, level_color(config.level));
        set_color(&layer, TEXT_PRI);
        layer.use_text(config.label, 8.5, Mm(MARGIN + 6.0), Mm(iy + 1.5), &font_b);
        set_color(&layer, TEXT_SEC);
        layer.use_text(config.description, 8.0, Mm(MARGIN + 6.0), Mm(iy - 3.5), &font_r);
    }

    draw_footer(&layer, &font_r);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn draw_stat_card(
    layer: &PdfLayerReference,
    x: f32, y: f32, w: f32, h: f32,
    label: &str,
    value: &str,
    accent: Rgb3,
    font_r: &IndirectFontRef,
    font_b: &IndirectFontRef,
) {
    fill_rounded_rect(layer, x, y, w, h, R_BADGE, PANEL);
    stroke_rounded_rect(layer, x, y, w, h, R_BADGE, PANEL_BORDER);
    fill_rect(layer, x, y + h - 2.0, w, 2.0, accent);

    set_color(layer, accent);
    layer.use_text(value, 20.0, Mm(x + 4.0), Mm(y + h * 0.38), font_b);

    set_color(layer, TEXT_MUT);
    layer.use_text(label, 6.0, Mm(x + 4.0), Mm(y + 3.5), font_r);
}

// ── Property table ────────────────────────────────────────────────────────────

fn add_table_pages(doc: &PdfDocumentReference, properties: &[PropertyAssessment]) -> Result<()> {
    let font_b = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let font_r = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    let top = PAGE_H - MARGIN - 14.0;
    let rows_per_page = (((top - HDR_H - TABLE_BOTTOM) / ROW_H) as usize).max(1);

    let chunks: Vec<&[PropertyAssessment]> = if properties.is_empty() {
        vec![properties]
    } else {
        properties.chunks(rows_per_page).collect()
    };
    let page_count = chunks.len();

    for (page_no, chunk) in chunks.into_iter().enumerate() {
        let (page_idx, layer_idx) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Properties");
        let layer = doc.get_page(page_idx).get_layer(layer_idx);

        fill_rect(&layer, 0.0, 0.0, PAGE_W, PAGE_H, BG);

        set_color(&layer, TEXT_PRI);
        layer.use_text("Properties", 16.0, Mm(MARGIN), Mm(PAGE_H - MARGIN - 4.0), &font_b);
        set_color(&layer, TEXT_MUT);
        layer.use_text(
            format!("Page {} of {}", page_no + 1, page_count),
            7.5, Mm(T_END - 20.0), Mm(PAGE_H - MARGIN - 4.0), &font_r,
        );

        // Header row
        let hdr_y = top - HDR_H;
        fill_rect(&layer, MARGIN, hdr_y, T_END - MARGIN, HDR_H, PANEL_ALT);
        set_color(&layer, TEXT_SEC);
        for (x, title) in COL_X.iter().zip(["PROPERTY", "ID", "RISK", "SAFETY", "LEVEL", "TREND"]) {
            layer.use_text(title, 6.5, Mm(x + 1.5), Mm(hdr_y + 3.2), &font_b);
        }

        if chunk.is_empty() {
            set_color(&layer, TEXT_SEC);
            layer.use_text("No properties found.", 9.0, Mm(MARGIN + 1.5), Mm(hdr_y - 7.0), &font_r);
        }

        let mut cur_y = hdr_y;
        for (i, property) in chunk.iter().enumerate() {
            let row_bot = cur_y - ROW_H;
            if i % 2 == 1 {
                fill_rect(&layer, MARGIN, row_bot, T_END - MARGIN, ROW_H, PANEL_ALT);
            }
            let text_y = row_bot + 2.8;

            set_color(&layer, TEXT_PRI);
            layer.use_text(truncate(&property.name, 34), 8.0, Mm(COL_X[0] + 1.5), Mm(text_y), &font_b);
            set_color(&layer, TEXT_SEC);
            layer.use_text(truncate(&property.id, 18), 7.5, Mm(COL_X[1] + 1.5), Mm(text_y), &font_r);
            set_color(&layer, TEXT_PRI);
            layer.use_text(format!("{:.0}", property.overall.value), 8.0, Mm(COL_X[2] + 1.5), Mm(text_y), &font_b);
            set_color(&layer, TEXT_SEC);
            layer.use_text(format!("{:.0}", property.safety), 8.0, Mm(COL_X[3] + 1.5), Mm(text_y), &font_r);

            // Level badge
            let level = property.overall.level;
            let badge_y = row_bot + 1.6;
            fill_rounded_rect(&layer, COL_X[4] + 1.0, badge_y, 25.0, 4.8, R_BADGE, level_color(level));
            set_color(&layer, WHITE);
            layer.use_text(level.to_string(), 6.5, Mm(COL_X[4] + 3.0), Mm(badge_y + 1.3), &font_b);

            let (trend, trend_color) = match property.trend {
                Some(Trend::Improving) => ("improving", level_color(RiskLevel::Low)),
                Some(Trend::Stable) => ("stable", TEXT_SEC),
                Some(Trend::Worsening) => ("worsening", level_color(RiskLevel::Critical)),
                None => ("-", TEXT_MUT),
            };
            set_color(&layer, trend_color);
            layer.use_text(trend, 7.5, Mm(COL_X[5] + 1.5), Mm(text_y), &font_r);

            draw_hline(&layer, MARGIN, T_END, row_bot, PANEL_BORDER);
            cur_y = row_bot;
        }

        draw_footer(&layer, &font_r);
    }

    Ok(())
}

fn draw_footer(layer: &PdfLayerReference, font_r: &IndirectFontRef) {
    draw_hline(layer, MARGIN, T_END, 20.0, PANEL_BORDER);
    set_color(layer, TEXT_MUT);
    layer.use_text(
        format!("Generated by risk-scorer v{}", env!("CARGO_PKG_VERSION")),
        7.5, Mm(MARGIN), Mm(14.0), font_r,
    );
}

// ── Drawing helpers ───────────────────────────────────────────────────────────

fn level_color(level: RiskLevel) -> Rgb3 {
    let (r, g, b) = level_rgb(level);
    (f32::from(r) / 255.0, f32::from(g) / 255.0, f32::from(b) / 255.0)
}

fn rgb((r, g, b): Rgb3) -> Color {
    Color::Rgb(Rgb { r, g, b, icc_profile: None })
}

fn set_color(layer: &PdfLayerReference, color: Rgb3) {
    layer.set_fill_color(rgb(color));
}

fn fill_rect(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32, color: Rgb3) {
    fill_ring(layer, vec![
        (Point::new(Mm(x),     Mm(y)),     false),
        (Point::new(Mm(x + w), Mm(y)),     false),
        (Point::new(Mm(x + w), Mm(y + h)), false),
        (Point::new(Mm(x),     Mm(y + h)), false),
    ], color);
}

fn fill_rounded_rect(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32, r: f32, color: Rgb3) {
    fill_ring(layer, rounded_rect_ring(x, y, w, h, r), color);
}

fn fill_ring(layer: &PdfLayerReference, ring: Vec<(Point, bool)>, color: Rgb3) {
    layer.set_fill_color(rgb(color));
    layer.add_polygon(Polygon {
        rings: vec![ring],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    });
    layer.set_fill_color(rgb((0.0, 0.0, 0.0)));
}

fn stroke_rounded_rect(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32, r: f32, color: Rgb3) {
    layer.set_outline_color(rgb(color));
    layer.set_outline_thickness(0.4);
    layer.add_polygon(Polygon {
        rings: vec![rounded_rect_ring(x, y, w, h, r)],
        mode: PaintMode::Stroke,
        winding_order: WindingOrder::NonZero,
    });
    layer.set_outline_color(rgb((0.0, 0.0, 0.0)));
    layer.set_outline_thickness(1.0);
}

/// Polygon ring approximating a rounded rectangle, 8 segments per corner.
fn rounded_rect_ring(x: f32, y: f32, w: f32, h: f32, r: f32) -> Vec<(Point, bool)> {
    const SEGS: usize = 8;
    let r = r.min(w / 2.0).min(h / 2.0);
    let corners = [
        (x + w - r, y + r,     270.0f32),
        (x + w - r, y + h - r, 0.0f32),
        (x + r,     y + h - r, 90.0f32),
        (x + r,     y + r,     180.0f32),
    ];

    let mut pts = Vec::with_capacity(corners.len() * (SEGS + 1));
    for (cx, cy, start) in corners {
        for i in 0..=SEGS {
            let angle = (start + 90.0 * i as f32 / SEGS as f32).to_radians();
            pts.push((Point::new(Mm(cx + r * angle.cos()), Mm(cy + r * angle.sin())), false));
        }
    }
    pts
}

fn draw_hline(layer: &PdfLayerReference, x1: f32, x2: f32, y: f32, color: Rgb3) {
    layer.set_outline_color(rgb(color));
    layer.set_outline_thickness(0.3);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(x1), Mm(y)), false),
            (Point::new(Mm(x2), Mm(y)), false),
        ],
        is_closed: false,
    });
    layer.set_outline_color(rgb((0.0, 0.0, 0.0)));
    layer.set_outline_thickness(1.0);
}

/// Left-to-right gradient made of `steps` vertical strips.
#[allow(clippy::too_many_arguments)]
fn fill_gradient_h(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32, from: Rgb3, to: Rgb3, steps: usize) {
    let step_w = w / steps as f32;
    for i in 0..steps {
        let t = i as f32 / (steps - 1).max(1) as f32;
        let color = (
            from.0 + (to.0 - from.0) * t,
            from.1 + (to.1 - from.1) * t,
            from.2 + (to.2 - from.2) * t,
        );
        // strips overlap slightly to hide rounding gaps
        fill_rect(layer, x + i as f32 * step_w, y, step_w + 0.6, h, color);
    }
}

fn truncate(s: &str, max: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() > max {
        format!("{}...", chars[..max.saturating_sub(3)].iter().collect::<String>())
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::assess;
    use crate::config::Config;
    use crate::inspection::{InspectionFile, PropertyRecord};
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Leeds", 10), "Leeds");
        assert_eq!(truncate("Leeds Retail Park", 8), "Leeds...");
    }

    #[test]
    fn test_level_color_in_unit_range() {
        for level in RiskLevel::ALL {
            let (r, g, b) = level_color(level);
            assert!((0.0..=1.0).contains(&r));
            assert!((0.0..=1.0).contains(&g));
            assert!((0.0..=1.0).contains(&b));
        }
    }

    #[test]
    fn test_render_writes_pdf() {
        let properties = (0..40)
            .map(|i| PropertyRecord {
                id: format!("store-{:03}", i),
                name: format!("Store {}", i),
                scores: [("electrical".to_string(), f64::from(i) * 2.5)].into_iter().collect(),
                previous: HashMap::new(),
                readings: Vec::new(),
            })
            .collect();
        let file = InspectionFile {
            properties,
            ..InspectionFile::default()
        };
        let assessment = assess(&Config::default(), &file);

        let dir = TempDir::new().unwrap();
        let out = dir.path().join("report.pdf");
        render(&assessment, Path::new("sites.toml"), &out).unwrap();

        let bytes = std::fs::read(&out).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
