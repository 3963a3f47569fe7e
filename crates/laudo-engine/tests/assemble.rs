use laudo_core::models::finding::{Category, FindingDefinition};
use laudo_core::models::report::ReportHeader;
use laudo_core::models::selection::{FindingInstance, Laterality};
use laudo_engine::assemble::{NO_FINDINGS_LINE, ReportAssembler};
use laudo_engine::rules::SelectionRules;
use laudo_engine::store::FindingStateStore;
use laudo_knowledge::{Exam, KnowledgeBase};
use laudo_knowledge::guidance::{NO_ALTERATIONS_CONCLUSION, NO_ALTERATIONS_GUIDANCE};
use pretty_assertions::assert_eq;

const THYROID: &str = "US Cervical - Tireoide";
const ABDOMEN: &str = "US Abdome - Total";
const PELVIS: &str = "pelve-feminina";

fn kb() -> &'static KnowledgeBase {
    KnowledgeBase::global()
}

fn select(exam: &str, findings: &[&str]) -> FindingStateStore {
    let rules = SelectionRules::new(kb());
    let mut store = FindingStateStore::new();
    for finding in findings {
        rules.toggle(&mut store, exam, finding, true).unwrap();
    }
    store
}

fn header() -> ReportHeader {
    ReportHeader {
        doctor_name: "Dra. Ana Souza".to_string(),
        doctor_crm: "123456-SP".to_string(),
        patient_name: "Maria Silva".to_string(),
        patient_birth_date: "01/02/1980".to_string(),
        patient_gender: "Feminino".to_string(),
    }
}

#[test]
fn multi_instance_nodule_renders_one_line_per_instance() {
    let rules = SelectionRules::new(kb());
    let mut store = select(THYROID, &["nodulo-tireoidiano"]);
    rules.set_quantity(&mut store, THYROID, "nodulo-tireoidiano", "2").unwrap();
    rules
        .set_instance(&mut store, THYROID, "nodulo-tireoidiano", 0, FindingInstance::new("8", Some(Laterality::Right)))
        .unwrap();
    rules
        .set_instance(&mut store, THYROID, "nodulo-tireoidiano", 1, FindingInstance::new("5", Some(Laterality::Left)))
        .unwrap();

    let report = ReportAssembler::new(kb())
        .assemble(Some(THYROID), &header(), &store)
        .unwrap();

    assert_eq!(
        report.findings,
        vec![
            "Nódulo tireoidiano, circunscrito, sem halo hipoecóico ou calcificações. (Direito, Tamanho: 8 mm)",
            "Nódulo tireoidiano, circunscrito, sem halo hipoecóico ou calcificações. (Esquerdo, Tamanho: 5 mm)",
        ]
    );
    assert_eq!(
        report.conclusions,
        vec!["Nódulo tireoidiano. Sugere-se avaliação endocrinológica e, se necessário, punção aspirativa por agulha fina (PAAF)."]
    );
    assert_eq!(
        report.guidance,
        vec!["Avaliação endocrinológica; considerar PAAF conforme classificação TI-RADS."]
    );
}

#[test]
fn empty_selection_uses_generic_sentences() {
    let report = ReportAssembler::new(kb())
        .assemble(Some(THYROID), &header(), &FindingStateStore::new())
        .unwrap();

    assert_eq!(report.findings, vec![NO_FINDINGS_LINE]);
    assert_eq!(report.conclusions, vec![NO_ALTERATIONS_CONCLUSION]);
    assert_eq!(report.guidance, vec![NO_ALTERATIONS_GUIDANCE]);
}

#[test]
fn normal_category_renders_default_text() {
    let store = select(ABDOMEN, &["figado-normal"]);
    let report = ReportAssembler::new(kb())
        .assemble(Some(ABDOMEN), &header(), &store)
        .unwrap();

    let liver = &kb().categories(ABDOMEN).unwrap()[0];
    assert_eq!(report.findings, vec![liver.default_normal_text.clone()]);
    assert_eq!(report.conclusions, vec!["Fígado sem alterações."]);
    // No conclusion carries guidance, so the routine follow-up applies.
    assert_eq!(report.guidance, vec![NO_ALTERATIONS_GUIDANCE]);
}

#[test]
fn absent_iud_states_absence() {
    let store = select(PELVIS, &["diu-ausente"]);
    let report = ReportAssembler::new(kb())
        .assemble(Some(PELVIS), &header(), &store)
        .unwrap();

    assert_eq!(report.findings, vec!["Não há DIU no interior da cavidade uterina."]);
    assert_eq!(report.conclusions, vec!["Ausência de DIU na cavidade uterina."]);
}

struct BareExam {
    categories: Vec<Category>,
}

impl Exam for BareExam {
    fn id(&self) -> &str {
        "exame-teste"
    }

    fn name(&self) -> &str {
        "US Teste"
    }

    fn technique(&self) -> &str {
        "Técnica de teste."
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }
}

#[test]
fn normal_variant_without_conclusion_uses_generic_sentence() {
    let exam = BareExam {
        categories: vec![Category::new(
            "Baço",
            "Baço de dimensões normais.",
            vec![
                FindingDefinition::new("baco-teste-normal", "Normal", "Baço de dimensões normais.").normal(),
                FindingDefinition::new("baco-teste-aumentado", "Aumentado", "Baço aumentado."),
            ],
        )],
    };
    let kb = KnowledgeBase::from_exams(vec![Box::new(exam)]);
    let rules = SelectionRules::new(&kb);
    let mut store = FindingStateStore::new();
    rules.toggle(&mut store, "US Teste", "baco-teste-normal", true).unwrap();

    let report = ReportAssembler::new(&kb)
        .assemble(Some("US Teste"), &header(), &store)
        .unwrap();

    assert_eq!(report.findings, vec!["Baço de dimensões normais."]);
    assert_eq!(report.conclusions, vec![NO_ALTERATIONS_CONCLUSION]);
    assert_eq!(report.guidance, vec![NO_ALTERATIONS_GUIDANCE]);
}

#[test]
fn untouched_categories_are_absent() {
    let store = select(ABDOMEN, &["colelitiase"]);
    let report = ReportAssembler::new(kb())
        .assemble(Some(ABDOMEN), &header(), &store)
        .unwrap();

    assert_eq!(report.findings.len(), 1);
    assert!(report.findings[0].starts_with("Vesícula biliar normodistendida"));
    assert!(!report.findings.iter().any(|l| l.starts_with("Fígado")));
}

#[test]
fn findings_follow_catalogue_order_not_selection_order() {
    let store = select(ABDOMEN, &["espessamento-bexiga", "esplenomegalia", "esteatose-hepatica"]);
    let report = ReportAssembler::new(kb())
        .assemble(Some(ABDOMEN), &header(), &store)
        .unwrap();

    assert!(report.findings[0].starts_with("Fígado"));
    assert!(report.findings[1].starts_with("Baço"));
    assert_eq!(report.findings[2], "Espessamento parietal da bexiga.");
}

#[test]
fn shared_conclusions_are_deduplicated() {
    let rules = SelectionRules::new(kb());
    let mut store = select(ABDOMEN, &["cisto-renal"]);
    rules.set_quantity(&mut store, ABDOMEN, "cisto-renal", "3").unwrap();

    let report = ReportAssembler::new(kb())
        .assemble(Some(ABDOMEN), &header(), &store)
        .unwrap();

    assert_eq!(report.findings.len(), 3);
    assert_eq!(report.conclusions.len(), 1);
}

#[test]
fn shared_guidance_is_deduplicated() {
    let store = select(PELVIS, &["polipo-endometrial", "hiperplasia-endometrial"]);
    let report = ReportAssembler::new(kb())
        .assemble(Some(PELVIS), &header(), &store)
        .unwrap();

    assert_eq!(report.conclusions.len(), 2);
    assert_eq!(report.guidance, vec!["Avaliação ginecológica; considerar histeroscopia."]);
}

#[test]
fn sizes_render_only_for_sized_findings_and_when_present() {
    let rules = SelectionRules::new(kb());
    let mut store = select(ABDOMEN, &["esplenomegalia", "calcificacao-hepatica"]);
    rules.set_size(&mut store, ABDOMEN, "esplenomegalia", "14,2").unwrap();
    rules.set_size(&mut store, ABDOMEN, "calcificacao-hepatica", "   ").unwrap();

    let report = ReportAssembler::new(kb())
        .assemble(Some(ABDOMEN), &header(), &store)
        .unwrap();

    assert_eq!(
        report.findings,
        vec![
            "Foco de calcificação de aspecto residual localizado no fígado.",
            "Baço com dimensões aumentadas, morfologia habitual e ecotextura homogênea. (Tamanho: 14,2 mm)",
        ]
    );
}

#[test]
fn multi_occurrence_without_instances_contributes_nothing() {
    let rules = SelectionRules::new(kb());
    let mut store = select(ABDOMEN, &["calculo-bexiga", "colelitiase"]);
    rules.set_quantity(&mut store, ABDOMEN, "calculo-bexiga", "").unwrap();

    let report = ReportAssembler::new(kb())
        .assemble(Some(ABDOMEN), &header(), &store)
        .unwrap();

    assert!(report.findings.iter().all(|line| !line.contains("bexiga")));
    assert!(!report.conclusions.iter().any(|c| c == "Cálculo vesical."));
    assert_eq!(report.findings.len(), 1);
}

#[test]
fn only_zero_instance_findings_fall_back_to_no_findings() {
    let rules = SelectionRules::new(kb());
    let mut store = select(THYROID, &["nodulo-tireoidiano"]);
    rules.set_quantity(&mut store, THYROID, "nodulo-tireoidiano", "").unwrap();
    assert_eq!(store.get("nodulo-tireoidiano").instances.len(), 0);

    let report = ReportAssembler::new(kb())
        .assemble(Some(THYROID), &header(), &store)
        .unwrap();

    assert_eq!(report.findings, vec![NO_FINDINGS_LINE]);
    assert_eq!(report.conclusions, vec![NO_ALTERATIONS_CONCLUSION]);
}

#[test]
fn assembly_is_idempotent_and_leaves_store_untouched() {
    let store = select(ABDOMEN, &["colelitiase", "esteatose-hepatica"]);
    let before = store.clone();
    let assembler = ReportAssembler::new(kb());

    let first = assembler.assemble(Some(ABDOMEN), &header(), &store).unwrap();
    let second = assembler.assemble(Some(ABDOMEN), &header(), &store).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.render_text(), second.render_text());
    assert_eq!(store, before);
}

#[test]
fn missing_exam_type_yields_placeholder_report() {
    let report = ReportAssembler::new(kb())
        .assemble(None, &ReportHeader::default(), &FindingStateStore::new())
        .unwrap();

    let expected = "\
LAUDO DE ULTRASSOM

MÉDICO RESPONSÁVEL:
Nome: [Nome do Médico]
CRM: [CRM do Médico]

DADOS DO PACIENTE:
Nome: [Nome do Paciente]
Data de Nascimento: [DD/MM/AAAA]
Gênero: [Gênero]

EXAME:
Tipo de Exame: [Tipo de Exame]

ACHADOS:
Não foram descritos achados específicos.

CONCLUSÃO:
- Exame ultrassonográfico sem alterações significativas.

ORIENTAÇÕES:
- Seguimento clínico de rotina, a critério do médico assistente.
";
    assert_eq!(report.render_text(), expected);
}

#[test]
fn rendered_report_has_fixed_section_order() {
    let store = select(THYROID, &["tireoide-normal"]);
    let report = ReportAssembler::new(kb())
        .assemble(Some(THYROID), &header(), &store)
        .unwrap();

    let expected = "\
LAUDO DE ULTRASSOM

MÉDICO RESPONSÁVEL:
Nome: Dra. Ana Souza
CRM: 123456-SP

DADOS DO PACIENTE:
Nome: Maria Silva
Data de Nascimento: 01/02/1980
Gênero: Feminino

EXAME:
Tipo de Exame: US Cervical - Tireoide
Técnica: Exame realizado com transdutor linear de alta frequência na modalidade bidimensional e modo Doppler colorido.

ACHADOS:
Tireoide com dimensões normais, contornos regulares, ecotextura homogênea e simétrica, sem nódulos, cistos ou sinais de inflamação.

CONCLUSÃO:
- Tireoide sem alterações.

ORIENTAÇÕES:
- Seguimento clínico de rotina, a critério do médico assistente.
";
    assert_eq!(report.render_text(), expected);
}

#[test]
fn unknown_exam_type_is_an_error() {
    let result = ReportAssembler::new(kb()).assemble(Some("US Joelho"), &header(), &FindingStateStore::new());
    assert!(result.is_err());
}
