use std::collections::HashMap;

use crate::config::Config;
use crate::inspection::{InspectionFile, PropertyRecord};
use crate::models::{Assessment, Classification, PropertyAssessment, ScoreScale};
use crate::scoring::scale::clamp_risk;
use crate::scoring::{
    calculate_overall_risk, create_risk_score, normalize_to_risk_scale, risk_level_color,
    risk_level_config, risk_level_display, risk_level_styles, risk_to_safety_score, risk_trend,
    safety_to_risk_score, score_to_risk_level, validate_risk_score,
};

/// Classify one score given in `scale`.
pub fn classify(score: f64, scale: ScoreScale) -> Classification {
    let risk_score = match scale {
        ScoreScale::Risk => clamp_risk(score),
        ScoreScale::Safety => safety_to_risk_score(score),
    };
    let level = score_to_risk_level(risk_score);

    Classification {
        input: score,
        scale,
        valid: validate_risk_score(score),
        risk_score,
        safety_score: risk_to_safety_score(risk_score),
        level,
        label: risk_level_display(risk_score),
        description: risk_level_config(level).description,
        style: risk_level_styles(risk_score),
        chart_color: risk_level_color(risk_score),
    }
}

/// Assess every property in `file` against the configured categories.
///
/// Properties are ordered by overall risk, highest first.
pub fn assess(config: &Config, file: &InspectionFile) -> Assessment {
    let mut properties: Vec<PropertyAssessment> = file
        .properties
        .iter()
        .map(|record| assess_property(config, file.scale, record))
        .collect();

    properties.sort_by(|a, b| {
        b.overall
            .value
            .total_cmp(&a.overall.value)
            .then_with(|| a.id.cmp(&b.id))
    });

    Assessment {
        scale: file.scale,
        inspected_on: file.inspected_on.clone(),
        properties,
    }
}

fn assess_property(config: &Config, scale: ScoreScale, record: &PropertyRecord) -> PropertyAssessment {
    let mut notes = Notes::default();

    let current = collect_scores(config, scale, record, &mut notes);
    let overall_value = calculate_overall_risk(&config.categories, &current);

    let categories = config
        .categories
        .iter()
        .map(|c| {
            let value = current.get(&c.id).copied().unwrap_or(0.0);
            create_risk_score(value, Some(c.display_name()))
        })
        .collect();

    let previous_overall = if record.previous.is_empty() {
        None
    } else {
        let mut previous = HashMap::with_capacity(record.previous.len());
        for (id, raw) in &record.previous {
            if config.category(id).is_some() {
                let label = format!("previous.{}", id);
                previous.insert(id.clone(), to_risk(scale, *raw, &label, &mut notes));
            }
        }
        Some(calculate_overall_risk(&config.categories, &previous))
    };

    let trend = previous_overall.map(|prev| risk_trend(overall_value, prev));

    if !notes.ignored.is_empty() {
        log::warn!(
            "{}: ignoring scores for unconfigured categories: {}",
            record.id,
            notes.ignored.join(", ")
        );
    }

    PropertyAssessment {
        id: record.id.clone(),
        name: if record.name.is_empty() {
            record.id.clone()
        } else {
            record.name.clone()
        },
        overall: create_risk_score(overall_value, None),
        safety: risk_to_safety_score(overall_value),
        categories,
        previous_overall,
        trend,
        clamped: notes.clamped,
        ignored: notes.ignored,
    }
}

#[derive(Default)]
struct Notes {
    clamped: Vec<String>,
    ignored: Vec<String>,
}

/// Current risk scores keyed by configured category id. Explicit scores win
/// over gauge readings for the same category.
fn collect_scores(
    config: &Config,
    scale: ScoreScale,
    record: &PropertyRecord,
    notes: &mut Notes,
) -> HashMap<String, f64> {
    let mut scores = HashMap::with_capacity(config.categories.len());

    let mut explicit: Vec<(&String, &f64)> = record.scores.iter().collect();
    explicit.sort_by(|a, b| a.0.cmp(b.0));

    for (id, raw) in explicit {
        if config.category(id).is_none() {
            notes.ignored.push(id.clone());
            continue;
        }
        scores.insert(id.clone(), to_risk(scale, *raw, id, notes));
    }

    for reading in &record.readings {
        if config.category(&reading.category).is_none() {
            notes.ignored.push(reading.category.clone());
            continue;
        }
        if scores.contains_key(&reading.category) {
            log::warn!(
                "{}: reading for `{}` ignored, an explicit score is present",
                record.id,
                reading.category
            );
            continue;
        }
        let normalized = normalize_to_risk_scale(reading.value, reading.min, reading.max);
        log::debug!(
            "{}: reading {} on [{}, {}] for `{}` normalized to {}",
            record.id,
            reading.value,
            reading.min,
            reading.max,
            reading.category,
            normalized
        );
        scores.insert(
            reading.category.clone(),
            to_risk(scale, normalized, &reading.category, notes),
        );
    }

    scores
}

/// Convert a raw score in `scale` to a clamped risk score, noting clamping.
fn to_risk(scale: ScoreScale, raw: f64, label: &str, notes: &mut Notes) -> f64 {
    if !validate_risk_score(raw) {
        log::warn!("score {}={} is outside [0, 100] and was clamped", label, raw);
        notes.clamped.push(format!("{}={}", label, raw));
    }
    match scale {
        ScoreScale::Risk => clamp_risk(raw),
        ScoreScale::Safety => safety_to_risk_score(raw),
    }
}
