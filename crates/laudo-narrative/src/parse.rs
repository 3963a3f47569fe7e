//! Split model output into report sections.

use laudo_core::models::narrative::NarrativeReport;

pub const DEFAULT_CONCLUSION: &str = "Achados conforme descrito acima.";

pub const GENERATED_OBSERVATIONS: &str =
    "Laudo gerado com suporte de IA local. Revisado e validado pelo médico responsável.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Technique,
    Report,
    Conclusion,
}

/// Recognise a section header line, returning the section and any text
/// that follows the header on the same line.
fn section_header(line: &str) -> Option<(Section, &str)> {
    let trimmed = line.trim().trim_start_matches(['#', '*', ' ']);
    for (names, section) in [
        (&["TÉCNICA", "TECNICA"][..], Section::Technique),
        (&["RELATÓRIO", "RELATORIO"][..], Section::Report),
        (&["CONCLUSÃO", "CONCLUSAO"][..], Section::Conclusion),
    ] {
        for name in names {
            let Some(prefix) = trimmed.get(..name.len()) else {
                continue;
            };
            if prefix.to_uppercase() != *name {
                continue;
            }
            let rest = trimmed[name.len()..].trim_start_matches(['*', ' ']);
            if rest.is_empty() {
                return Some((section, ""));
            }
            if let Some(inline) = rest.strip_prefix(':') {
                return Some((section, inline.trim_start_matches(['*', ' '])));
            }
        }
    }
    None
}

/// Collapse runs of blank lines to a single blank line and trim.
fn tidy(lines: &[&str]) -> String {
    let mut out: Vec<&str> = Vec::new();
    for line in lines {
        let blank = line.trim().is_empty();
        if blank && out.last().is_none_or(|l| l.trim().is_empty()) {
            continue;
        }
        out.push(line.trim_end());
    }
    while out.last().is_some_and(|l| l.trim().is_empty()) {
        out.pop();
    }
    out.join("\n")
}

/// Parse generated text into technique / report / conclusion.
///
/// The prompt ends with `TÉCNICA:`, so text before the first header is
/// taken as the technique when the model did not repeat that header.
/// Missing sections fall back to `default_technique`, the whole text,
/// and [`DEFAULT_CONCLUSION`] respectively.
pub fn parse_generated(text: &str, default_technique: &str) -> NarrativeReport {
    let mut preamble = Vec::new();
    let mut technique = Vec::new();
    let mut report = Vec::new();
    let mut conclusion = Vec::new();
    let mut seen_header = false;
    let mut current = Section::Preamble;

    for line in text.lines() {
        let content = match section_header(line) {
            Some((section, inline)) => {
                seen_header = true;
                current = section;
                if inline.is_empty() {
                    continue;
                }
                inline
            }
            None => line,
        };
        match current {
            Section::Preamble => preamble.push(content),
            Section::Technique => technique.push(content),
            Section::Report => report.push(content),
            Section::Conclusion => conclusion.push(content),
        }
    }

    let whole = tidy(&text.trim().lines().collect::<Vec<_>>());
    if !seen_header {
        return NarrativeReport {
            technique: default_technique.to_string(),
            report: whole,
            conclusion: DEFAULT_CONCLUSION.to_string(),
            observations: Some(GENERATED_OBSERVATIONS.to_string()),
        };
    }

    let mut technique = tidy(&technique);
    if technique.is_empty() {
        technique = tidy(&preamble);
    }
    if technique.is_empty() {
        technique = default_technique.to_string();
    }
    let report = match tidy(&report) {
        r if r.is_empty() => whole,
        r => r,
    };
    let conclusion = match tidy(&conclusion) {
        c if c.is_empty() => DEFAULT_CONCLUSION.to_string(),
        c => c,
    };

    NarrativeReport {
        technique,
        report,
        conclusion,
        observations: Some(GENERATED_OBSERVATIONS.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_case_and_accent_tolerant() {
        assert_eq!(section_header("TÉCNICA:"), Some((Section::Technique, "")));
        assert_eq!(section_header("**Relatório:**"), Some((Section::Report, "")));
        assert_eq!(section_header("## CONCLUSAO"), Some((Section::Conclusion, "")));
        assert_eq!(
            section_header("Conclusão: Exame normal."),
            Some((Section::Conclusion, "Exame normal."))
        );
    }

    #[test]
    fn sentences_starting_with_a_header_word_are_content() {
        assert_eq!(section_header("Técnica habitual empregada."), None);
        assert_eq!(section_header("Relatórios anteriores indisponíveis."), None);
    }

    #[test]
    fn tidy_collapses_blank_runs() {
        assert_eq!(tidy(&["", "a", "", "", "", "b", "  ", ""]), "a\n\nb");
    }
}
