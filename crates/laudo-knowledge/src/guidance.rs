//! Conclusion → next-step guidance.
//!
//! Guidance is authored per finding and indexed by that finding's
//! conclusion sentence, so lookups stay in sync with the catalogue text.
//! Unmapped conclusions are normal and simply yield no guidance.

use std::collections::HashMap;

use crate::Exam;

/// Conclusion used when a report has no positive statement at all.
pub const NO_ALTERATIONS_CONCLUSION: &str = "Exame ultrassonográfico sem alterações significativas.";

/// Guidance attached to [`NO_ALTERATIONS_CONCLUSION`].
pub const NO_ALTERATIONS_GUIDANCE: &str =
    "Seguimento clínico de rotina, a critério do médico assistente.";

const FETAL_MEDICINE_REFERRAL: &str =
    "Encaminhamento para serviço de referência em medicina fetal.";

/// Recommended next step per finding id.
const FINDING_GUIDANCE: &[(&str, &str)] = &[
    // Cervical
    (
        "tireoidite-autoimune",
        "Correlacionar com função tireoidiana (TSH, T4 livre) e anticorpos antitireoidianos.",
    ),
    (
        "nodulo-tireoidiano",
        "Avaliação endocrinológica; considerar PAAF conforme classificação TI-RADS.",
    ),
    (
        "cisto-tireoidiano",
        "Controle ultrassonográfico em 12 meses, a critério clínico.",
    ),
    (
        "linfonodomegalia",
        "Correlação clínico-laboratorial e controle ultrassonográfico em 4 a 6 semanas.",
    ),
    // Abdomen
    (
        "esteatose-hepatica",
        "Controle de fatores de risco metabólicos e acompanhamento clínico.",
    ),
    (
        "cirrose-hepatica",
        "Acompanhamento hepatológico com rastreamento ultrassonográfico semestral.",
    ),
    (
        "hemangioma-hepatico",
        "Considerar ressonância magnética ou tomografia com contraste para confirmação diagnóstica.",
    ),
    (
        "hipertensao-portal",
        "Acompanhamento hepatológico; considerar endoscopia digestiva alta.",
    ),
    (
        "colelitiase",
        "Avaliação cirúrgica eletiva, especialmente se houver sintomas.",
    ),
    (
        "colecistite",
        "Avaliação cirúrgica de urgência.",
    ),
    (
        "polipo-vesicular",
        "Controle ultrassonográfico em 6 a 12 meses.",
    ),
    (
        "calculo-renal",
        "Avaliação urológica e orientação de hidratação adequada.",
    ),
    (
        "pielonefrite",
        "Correlação com exame de urina e avaliação clínica.",
    ),
    // Female pelvis
    (
        "mioma-uterino",
        "Acompanhamento ginecológico com ultrassonografia seriada.",
    ),
    (
        "polipo-endometrial",
        "Avaliação ginecológica; considerar histeroscopia.",
    ),
    (
        "hiperplasia-endometrial",
        "Avaliação ginecológica; considerar histeroscopia.",
    ),
    (
        "cisto-ovariano-simples",
        "Controle ultrassonográfico após o próximo ciclo menstrual.",
    ),
    (
        "cisto-hemorragico",
        "Controle ultrassonográfico após o próximo ciclo menstrual.",
    ),
    (
        "endometrioma",
        "Avaliação ginecológica especializada.",
    ),
    (
        "diu-mal-posicionado",
        "Avaliação ginecológica para reposicionamento ou retirada do dispositivo.",
    ),
    // Obstetrics
    (
        "gestacao-inicial",
        "Controle ultrassonográfico em 10 a 14 dias.",
    ),
    (
        "gestacao-viavel",
        "Seguimento pré-natal de rotina.",
    ),
    (
        "gestacao-anembrionada",
        "Avaliação obstétrica para definição de conduta.",
    ),
    (
        "morte-embrionaria",
        "Avaliação obstétrica para definição de conduta.",
    ),
    (
        "aborto-retido",
        "Avaliação obstétrica para definição de conduta.",
    ),
    (
        "gestacao-ectopica",
        "Avaliação obstétrica de urgência.",
    ),
    (
        "rciu",
        "Dopplervelocimetria obstétrica e acompanhamento em medicina fetal.",
    ),
    (
        "placenta-previa",
        "Controle ultrassonográfico evolutivo e planejamento da via de parto.",
    ),
    (
        "descolamento-placentario",
        "Avaliação obstétrica de emergência.",
    ),
    (
        "colo-curto",
        "Avaliação obstétrica para prevenção de parto prematuro.",
    ),
    (
        "oi-aberto",
        "Avaliação obstétrica para prevenção de parto prematuro.",
    ),
    ("hernia-diafragmatica", FETAL_MEDICINE_REFERRAL),
    ("espinha-bifida", FETAL_MEDICINE_REFERRAL),
    ("gastrosquise", FETAL_MEDICINE_REFERRAL),
];

/// Finding ids that carry authored guidance.
pub fn guided_finding_ids() -> impl Iterator<Item = &'static str> {
    FINDING_GUIDANCE.iter().map(|(id, _)| *id)
}

/// Static lookup from conclusion sentence to recommended next step.
#[derive(Debug, Clone, Default)]
pub struct GuidanceTable {
    by_conclusion: HashMap<String, String>,
}

impl GuidanceTable {
    /// Index the authored guidance by the conclusion text of each finding.
    pub fn build(exams: &[Box<dyn Exam>]) -> Self {
        let mut by_conclusion = HashMap::new();
        by_conclusion.insert(
            NO_ALTERATIONS_CONCLUSION.to_string(),
            NO_ALTERATIONS_GUIDANCE.to_string(),
        );

        for (finding_id, guidance) in FINDING_GUIDANCE {
            let conclusion = exams
                .iter()
                .flat_map(|e| e.categories())
                .flat_map(|c| &c.findings)
                .find(|f| f.id == *finding_id)
                .and_then(|f| f.conclusion_text.as_deref());

            match conclusion {
                Some(text) => {
                    by_conclusion.insert(text.to_string(), guidance.to_string());
                }
                None => {
                    tracing::warn!(finding_id, "guidance entry has no matching conclusion");
                }
            }
        }

        Self { by_conclusion }
    }

    pub fn guidance_for(&self, conclusion: &str) -> Option<&str> {
        self.by_conclusion.get(conclusion).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_conclusion.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_conclusion.is_empty()
    }
}
