use laudo_core::models::report::ReportHeader;
use laudo_engine::assemble::{AssembledReport, ReportAssembler};
use laudo_engine::rules::SelectionRules;
use laudo_engine::store::FindingStateStore;
use laudo_export::docx::generate_docx;
use laudo_export::paginate::{paginate, wrap_line};
use laudo_export::render::{render_default, render_template};
use laudo_export::styles::{DocumentStyles, PageLayout};
use laudo_knowledge::KnowledgeBase;
use pretty_assertions::assert_eq;

fn report(exam: Option<&str>, findings: &[&str]) -> AssembledReport {
    let kb = KnowledgeBase::global();
    let rules = SelectionRules::new(kb);
    let mut store = FindingStateStore::new();
    if let Some(exam) = exam {
        for finding in findings {
            rules.toggle(&mut store, exam, finding, true).unwrap();
        }
    }
    let header = ReportHeader {
        doctor_name: "Dr. Carlos Lima".to_string(),
        patient_name: "Ana Costa".to_string(),
        ..ReportHeader::default()
    };
    ReportAssembler::new(kb).assemble(exam, &header, &store).unwrap()
}

#[test]
fn default_template_matches_plain_text_rendering() {
    let with_guidance = report(Some("abdome-total"), &["colelitiase", "baco-normal"]);
    assert_eq!(render_default(&with_guidance).unwrap(), with_guidance.render_text());

    let no_exam = report(None, &[]);
    assert_eq!(render_default(&no_exam).unwrap(), no_exam.render_text());
}

#[test]
fn default_template_omits_empty_guidance() {
    let mut assembled = report(Some("abdome-total"), &["colelitiase"]);
    assembled.guidance.clear();

    let text = render_default(&assembled).unwrap();
    assert!(!text.contains("ORIENTAÇÕES"));
    assert_eq!(text, assembled.render_text());
}

#[test]
fn custom_letterhead_template() {
    let assembled = report(Some("abdome-total"), &["colelitiase"]);
    let template = "CLÍNICA SÃO LUCAS\n{{ header.patient_name }} / {{ header.patient_gender }}\n{{ conclusions | length }} conclusão(ões)";

    let text = render_template("clinica.txt", template, &assembled).unwrap();
    assert_eq!(text, "CLÍNICA SÃO LUCAS\nAna Costa / [Gênero]\n1 conclusão(ões)");
}

#[test]
fn broken_template_is_a_parse_error() {
    let assembled = report(None, &[]);
    let err = render_template("broken.txt", "{% for x in %}", &assembled).unwrap_err();
    assert!(matches!(err, laudo_export::error::ExportError::TemplateParse(_)));
}

#[test]
fn docx_output_is_a_zip_archive() {
    let assembled = report(Some("cervical-tireoide"), &["tireoide-normal"]);
    let bytes = generate_docx(&assembled.render_text(), &DocumentStyles::default()).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn wrap_keeps_short_lines_and_blank_lines() {
    assert_eq!(wrap_line("Fígado sem alterações.", 40), vec!["Fígado sem alterações."]);
    assert_eq!(wrap_line("", 40), vec![""]);
}

#[test]
fn wrap_breaks_on_word_boundaries_counting_characters() {
    assert_eq!(
        wrap_line("Vesícula biliar normodistendida, de paredes finas", 20),
        vec!["Vesícula biliar", "normodistendida, de", "paredes finas"]
    );
}

#[test]
fn wrap_hard_splits_long_words() {
    assert_eq!(wrap_line("ab abcdefghij c", 4), vec!["ab", "abcd", "efgh", "ij c"]);
}

#[test]
fn paginate_groups_wrapped_lines() {
    let layout = PageLayout {
        chars_per_line: 10,
        lines_per_page: 2,
    };
    let pages = paginate("um dois tres quatro\n\ncinco", &layout);

    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0].number, 1);
    assert_eq!(pages[0].lines, vec!["um dois", "tres"]);
    assert_eq!(pages[1].lines, vec!["quatro", ""]);
    assert_eq!(pages[2].number, 3);
    assert_eq!(pages[2].lines, vec!["cinco"]);
}

#[test]
fn every_rendered_line_fits_the_layout() {
    let assembled = report(Some("abdome-total"), &["esteatose-hepatica", "colelitiase", "cisto-renal"]);
    let layout = PageLayout::default();

    let pages = paginate(&assembled.render_text(), &layout);
    assert!(!pages.is_empty());
    for page in &pages {
        assert!(page.lines.len() <= layout.lines_per_page);
        for line in &page.lines {
            assert!(line.chars().count() <= layout.chars_per_line, "{line}");
        }
    }
}
