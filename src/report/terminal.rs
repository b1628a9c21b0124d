use std::path::Path;

use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{Assessment, Classification, PropertyAssessment, RiskLevel, Trend};
use crate::scoring::level::{level_rgb, HIGH_MAX, LOW_MAX, MEDIUM_MAX, RISK_LEVELS};
use crate::scoring::risk_level_config;

/// Render a colored terminal report.
pub fn render(assessment: &Assessment, path: &Path, verbose: bool, quiet: bool) -> Result<()> {
    let total = assessment.properties.len();

    if quiet {
        let counts: Vec<String> = RiskLevel::ALL
            .iter()
            .rev()
            .map(|level| {
                format!(
                    "{}: {}",
                    title_case(*level),
                    paint(&assessment.count(*level).to_string(), *level)
                )
            })
            .collect();
        println!("Total: {}  {}", total, counts.join("  "));
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "risk-scorer".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Inspections: {}", path.display());
    match &assessment.inspected_on {
        Some(date) => println!(" Scale: {}  Inspected: {}\n", assessment.scale, date),
        None => println!(" Scale: {}\n", assessment.scale),
    }

    // Summary box
    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(
        " │  {:<48} │",
        format!("Properties assessed : {}", total)
    );
    for level in RiskLevel::ALL.iter().rev() {
        let count = assessment.count(*level);
        // padding is applied before coloring so escape codes do not skew the box
        let line = format!("●  {:<15} : {:>4}", risk_level_config(*level).label, count);
        println!(" │  {} │", paint(&format!("{:<48}", line), *level));
    }
    println!(" └────────────────────────────────────────────────────┘\n");

    if total == 0 {
        println!(" No properties found.\n");
        return Ok(());
    }

    println!(" {} Properties by overall risk:\n", "[RISK]".bold());
    render_property_table(&assessment.properties);
    println!();

    let flagged: Vec<&PropertyAssessment> = assessment
        .properties
        .iter()
        .filter(|p| !p.clamped.is_empty() || !p.ignored.is_empty())
        .collect();
    if !flagged.is_empty() {
        println!(" {} Input problems:\n", "[WARN]".yellow().bold());
        for property in flagged {
            if !property.clamped.is_empty() {
                println!(
                    "   {} clamped to [0, 100]: {}",
                    property.id,
                    property.clamped.join(", ")
                );
            }
            if !property.ignored.is_empty() {
                println!(
                    "   {} unconfigured categories: {}",
                    property.id,
                    property.ignored.join(", ")
                );
            }
        }
        println!();
    }

    // Verbose: per-category breakdown for each property
    if verbose {
        for property in &assessment.properties {
            println!(
                " {} {} ({})\n",
                "[DETAIL]".cyan().bold(),
                property.name,
                property.id
            );
            render_category_table(property);
            println!();
        }
    }

    Ok(())
}

fn render_property_table(properties: &[PropertyAssessment]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Property").add_attribute(Attribute::Bold),
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Risk").add_attribute(Attribute::Bold),
            Cell::new("Level").add_attribute(Attribute::Bold),
            Cell::new("Safety").add_attribute(Attribute::Bold),
            Cell::new("Trend").add_attribute(Attribute::Bold),
        ]);

    for property in properties {
        let trend = match property.trend {
            Some(Trend::Improving) => Cell::new("▼ improving").fg(Color::Green),
            Some(Trend::Stable) => Cell::new("● stable").fg(Color::DarkGrey),
            Some(Trend::Worsening) => Cell::new("▲ worsening").fg(Color::Red),
            None => Cell::new("—").fg(Color::DarkGrey),
        };

        table.add_row(vec![
            Cell::new(&property.name),
            Cell::new(&property.id),
            Cell::new(format!("{:.0}", property.overall.value))
                .set_alignment(CellAlignment::Right),
            level_cell(property.overall.level),
            Cell::new(format!("{:.0}", property.safety)).set_alignment(CellAlignment::Right),
            trend.set_alignment(CellAlignment::Center),
        ]);
    }

    println!("{}", table);
}

fn render_category_table(property: &PropertyAssessment) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("Risk").add_attribute(Attribute::Bold),
            Cell::new("Level").add_attribute(Attribute::Bold),
            Cell::new("Action").add_attribute(Attribute::Bold),
        ]);

    for score in &property.categories {
        table.add_row(vec![
            Cell::new(&score.category),
            Cell::new(format!("{:.0}", score.value)).set_alignment(CellAlignment::Right),
            level_cell(score.level),
            Cell::new(&score.description),
        ]);
    }

    println!("{}", table);
}

/// Render the result of classifying a single score.
pub fn render_classification(c: &Classification) {
    println!();
    println!(
        " {}  {}",
        paint(c.label, c.level).bold(),
        format!("({} score {})", c.scale, c.input).dimmed()
    );
    if !c.valid {
        println!(
            " {} input is outside [0, 100] and was clamped",
            "[WARN]".yellow().bold()
        );
    }
    println!(" Risk score   : {:.1}", c.risk_score);
    println!(" Safety score : {:.1}", c.safety_score);
    println!(" {}", c.description);
    println!(
        " Style        : {} {} {}",
        c.style.color, c.style.background, c.style.border
    );
    println!(" Chart color  : {}\n", c.chart_color);
}

/// Render the reference table of every risk level.
pub fn render_levels() {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Level").add_attribute(Attribute::Bold),
            Cell::new("Scores").add_attribute(Attribute::Bold),
            Cell::new("Description").add_attribute(Attribute::Bold),
            Cell::new("Color").add_attribute(Attribute::Bold),
        ]);

    let ranges = [
        format!("≤ {}", LOW_MAX),
        format!("> {} – {}", LOW_MAX, MEDIUM_MAX),
        format!("> {} – {}", MEDIUM_MAX, HIGH_MAX),
        format!("> {}", HIGH_MAX),
    ];
    for (config, range) in RISK_LEVELS.iter().zip(ranges) {
        table.add_row(vec![
            level_cell(config.level),
            Cell::new(range),
            Cell::new(config.description),
            Cell::new(config.chart_color),
        ]);
    }

    println!("{}", table);
}

fn level_cell(level: RiskLevel) -> Cell {
    let (r, g, b) = level_rgb(level);
    Cell::new(risk_level_config(level).label).fg(Color::Rgb { r, g, b })
}

fn paint(text: &str, level: RiskLevel) -> ColoredString {
    let (r, g, b) = level_rgb(level);
    text.truecolor(r, g, b)
}

fn title_case(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "Low",
        RiskLevel::Medium => "Medium",
        RiskLevel::High => "High",
        RiskLevel::Critical => "Critical",
    }
}
