//! Parse Command
//!
//! Show the intent extracted from a prompt.
//!
//! Usage:
//!   uiforge parse "create a UserProfile component" [--typescript] [--style tailwind]
//!   uiforge parse "..." --explain -f json

use tracing::warn;

use crate::cli::Output;
use crate::config::OutputFormat;
use crate::intent::{IntentBreakdown, IntentParser};
use crate::types::{Intent, RequestOptions, Result};

pub fn run(
    prompt: &str,
    options: &RequestOptions,
    format: OutputFormat,
    explain: bool,
    min_confidence: f64,
) -> Result<()> {
    let breakdown = IntentParser::new().analyze(prompt, options);
    let intent = breakdown.clone().into_intent();
    let low_confidence = !intent.meets(min_confidence);

    match format {
        OutputFormat::Json => {
            if low_confidence {
                warn!(
                    confidence = intent.confidence,
                    threshold = min_confidence,
                    "intent below confidence threshold"
                );
            }
            println!("{}", render_json(&intent, &breakdown, explain)?);
        }
        OutputFormat::Text => {
            let output = Output::new();
            render_text(&output, &intent, &breakdown, explain);
            if low_confidence {
                output.warning(&format!(
                    "Confidence {:.2} is below the configured minimum {:.2}",
                    intent.confidence, min_confidence
                ));
            }
        }
    }

    Ok(())
}

pub fn render_json(intent: &Intent, breakdown: &IntentBreakdown, explain: bool) -> Result<String> {
    if !explain {
        return Ok(serde_json::to_string_pretty(intent)?);
    }

    let report = serde_json::json!({
        "intent": intent,
        "stages": {
            "normalized": breakdown.normalized,
            "type": {
                "value": breakdown.component_type.type_name,
                "confidence": breakdown.component_type.confidence,
                "keyword": breakdown.component_type.keyword,
            },
            "name": {
                "value": breakdown.name.name,
                "confidence": breakdown.name.confidence,
                "pattern": breakdown.name.pattern.as_str(),
            },
            "features": {
                "value": breakdown.features.features,
                "confidence": breakdown.features.confidence,
            },
        },
    });

    Ok(serde_json::to_string_pretty(&report)?)
}

fn render_text(output: &Output, intent: &Intent, breakdown: &IntentBreakdown, explain: bool) {
    output.header("Intent");
    output.field("Type", &intent.component_type);
    output.field(
        "Name",
        if intent.has_name() {
            intent.component_name.as_str()
        } else {
            "(none)"
        },
    );
    let features = if intent.features.is_empty() {
        "(none)".to_string()
    } else {
        intent
            .features
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    output.field("Features", &features);
    output.confidence("Confidence", intent.confidence);

    if explain {
        output.section("Stages");
        output.field("Normalized", &format!("\"{}\"", breakdown.normalized));
        output.confidence("Type", breakdown.component_type.confidence);
        if let Some(keyword) = breakdown.component_type.keyword {
            output.field("  keyword", keyword);
        }
        output.confidence("Name", breakdown.name.confidence);
        output.field("  pattern", breakdown.name.pattern.as_str());
        output.confidence("Features", breakdown.features.confidence);
    }
}
