use std::fmt::{self, Write as _};

use laudo_core::models::narrative::{NarrativeGenerator, NarrativeReport, NarrativeRequest};
use laudo_knowledge::DEFAULT_TECHNIQUE;
use tracing::{info, warn};

use crate::assemble::AssembledReport;

pub const DEFAULT_OBSERVATIONS: &str = "Exame realizado conforme protocolo institucional.";

/// Narrative sections derived directly from the assembled report.
pub fn deterministic_narrative(report: &AssembledReport) -> NarrativeReport {
    NarrativeReport {
        technique: report
            .technique
            .clone()
            .unwrap_or_else(|| DEFAULT_TECHNIQUE.to_string()),
        report: report.findings.join("\n"),
        conclusion: report
            .conclusions
            .iter()
            .map(|c| format!("- {c}"))
            .collect::<Vec<_>>()
            .join("\n"),
        observations: Some(DEFAULT_OBSERVATIONS.to_string()),
    }
}

/// Ask `generator` for a narrative, falling back to
/// [`deterministic_narrative`] when there is none or it fails.
///
/// Never fails: report generation must not depend on the collaborator.
pub fn narrate(
    generator: Option<&dyn NarrativeGenerator>,
    request: &NarrativeRequest,
    assembled: &AssembledReport,
) -> NarrativeReport {
    let Some(generator) = generator else {
        return deterministic_narrative(assembled);
    };

    match generator.generate(request) {
        Ok(narrative) => {
            info!(generator = generator.name(), "narrative generated");
            narrative
        }
        Err(error) => {
            warn!(
                generator = generator.name(),
                %error,
                "narrative generation failed, using assembled report"
            );
            deterministic_narrative(assembled)
        }
    }
}

/// Full report text with the narrative sections in place of the
/// findings/conclusion lists. Header and guidance come from `assembled`.
pub fn render_narrative(assembled: &AssembledReport, narrative: &NarrativeReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_narrative(&mut out, assembled, narrative);
    out
}

fn write_narrative(
    out: &mut String,
    assembled: &AssembledReport,
    narrative: &NarrativeReport,
) -> fmt::Result {
    assembled.write_header(out)?;
    writeln!(out)?;
    writeln!(out, "TÉCNICA:")?;
    writeln!(out, "{}", narrative.technique.trim())?;
    writeln!(out)?;
    writeln!(out, "ACHADOS:")?;
    writeln!(out, "{}", narrative.report.trim())?;
    writeln!(out)?;
    writeln!(out, "CONCLUSÃO:")?;
    writeln!(out, "{}", narrative.conclusion.trim())?;
    if let Some(observations) = narrative.observations.as_deref().map(str::trim)
        && !observations.is_empty()
    {
        writeln!(out)?;
        writeln!(out, "OBSERVAÇÕES:")?;
        writeln!(out, "{observations}")?;
    }
    assembled.write_guidance(out)
}
