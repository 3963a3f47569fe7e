use laudo_core::error::GenerationError;
use laudo_core::models::narrative::{NarrativeGenerator, NarrativeReport, NarrativeRequest};
use laudo_core::models::report::ReportHeader;
use laudo_engine::assemble::{AssembledReport, ReportAssembler};
use laudo_engine::narrative::{DEFAULT_OBSERVATIONS, deterministic_narrative, narrate, render_narrative};
use laudo_engine::rules::SelectionRules;
use laudo_engine::store::FindingStateStore;
use laudo_knowledge::KnowledgeBase;
use pretty_assertions::assert_eq;

const ABDOMEN: &str = "US Abdome - Total";

struct Canned;

impl NarrativeGenerator for Canned {
    fn name(&self) -> &str {
        "canned"
    }

    fn generate(&self, request: &NarrativeRequest) -> Result<NarrativeReport, GenerationError> {
        Ok(NarrativeReport {
            technique: "Técnica padrão.".to_string(),
            report: format!("{} achado(s).", request.findings.len()),
            conclusion: "Conclusão gerada.".to_string(),
            observations: None,
        })
    }
}

struct Offline;

impl NarrativeGenerator for Offline {
    fn name(&self) -> &str {
        "offline"
    }

    fn generate(&self, _request: &NarrativeRequest) -> Result<NarrativeReport, GenerationError> {
        Err(GenerationError::Unavailable("connection refused".to_string()))
    }
}

fn assembled() -> AssembledReport {
    let kb = KnowledgeBase::global();
    let rules = SelectionRules::new(kb);
    let mut store = FindingStateStore::new();
    rules.toggle(&mut store, ABDOMEN, "colelitiase", true).unwrap();
    rules.toggle(&mut store, ABDOMEN, "esteatose-hepatica", true).unwrap();

    let header = ReportHeader {
        patient_name: "João Pereira".to_string(),
        patient_gender: "Masculino".to_string(),
        ..ReportHeader::default()
    };
    ReportAssembler::new(kb)
        .assemble(Some(ABDOMEN), &header, &store)
        .unwrap()
}

#[test]
fn narrative_request_carries_patient_and_findings() {
    let report = assembled();
    let request = report.narrative_request(Some(54), Some("Dor abdominal".to_string()));

    assert_eq!(request.exam_type, ABDOMEN);
    assert_eq!(request.patient_name, "João Pereira");
    assert_eq!(request.gender.as_deref(), Some("Masculino"));
    assert_eq!(request.age, Some(54));
    assert_eq!(request.findings, report.findings);
}

#[test]
fn generator_output_is_used_when_available() {
    let report = assembled();
    let request = report.narrative_request(None, None);

    let narrative = narrate(Some(&Canned), &request, &report);
    assert_eq!(narrative.report, "2 achado(s).");
}

#[test]
fn failing_generator_falls_back_to_assembled_report() {
    let report = assembled();
    let request = report.narrative_request(None, None);

    let narrative = narrate(Some(&Offline), &request, &report);
    assert_eq!(narrative, deterministic_narrative(&report));
}

#[test]
fn missing_generator_falls_back_to_assembled_report() {
    let report = assembled();
    let request = report.narrative_request(None, None);

    let narrative = narrate(None, &request, &report);
    assert_eq!(narrative.technique, report.technique.clone().unwrap());
    assert_eq!(narrative.report, report.findings.join("\n"));
    assert_eq!(
        narrative.conclusion,
        "- Esteatose hepática (infiltração gordurosa). Recomenda-se acompanhamento clínico e controle de fatores de risco.\n\
         - Colelitíase. Recomenda-se avaliação cirúrgica para colecistectomia, se sintomático."
    );
    assert_eq!(narrative.observations.as_deref(), Some(DEFAULT_OBSERVATIONS));
}

#[test]
fn narrative_render_keeps_header_and_guidance() {
    let report = assembled();
    let narrative = narrate(Some(&Canned), &report.narrative_request(None, None), &report);
    let text = render_narrative(&report, &narrative);

    let technique = text.find("TÉCNICA:\nTécnica padrão.").unwrap();
    let findings = text.find("ACHADOS:\n2 achado(s).").unwrap();
    let conclusion = text.find("CONCLUSÃO:\nConclusão gerada.").unwrap();
    let guidance = text.find("ORIENTAÇÕES:").unwrap();

    assert!(text.starts_with("LAUDO DE ULTRASSOM\n"));
    assert!(technique < findings && findings < conclusion && conclusion < guidance);
    assert!(!text.contains("OBSERVAÇÕES:"));
    assert!(text.ends_with(".\n"));
}
