use laudo_core::models::finding::{Category, FindingDefinition};

use crate::Exam;

/// First-trimester obstetric ultrasound.
pub struct ObstetricFirstTrimester;

impl Exam for ObstetricFirstTrimester {
    fn id(&self) -> &str {
        "obstetrico-1-trimestre"
    }

    fn name(&self) -> &str {
        "US Obstétrico - 1º Trimestre"
    }

    fn technique(&self) -> &str {
        "Exame realizado com transdutor convexo/endocavitário multifrequencial na modalidade bidimensional e Doppler colorido quando indicado."
    }

    fn categories(&self) -> &[Category] {
        static CATEGORIES: std::sync::LazyLock<Vec<Category>> = std::sync::LazyLock::new(|| {
            vec![Category::new(
                "Gestação",
                "Gestação tópica viável.",
                vec![
                    FindingDefinition::new(
                        "gestacao-inicial",
                        "Gestação Inicial (sem embrião visível)",
                        "Útero gravídico, contendo saco gestacional de paredes regulares e implantação tópica, ainda sem evidência de eco embrionário.",
                    )
                    .sized()
                    .concluding("Gestação inicial. Sugere-se controle ultrassonográfico em 10-14 dias."),
                    FindingDefinition::new(
                        "gestacao-viavel",
                        "Gestação Tópica Viável",
                        "Gestação tópica, com embrião único, vivo, com atividade cardíaca presente.",
                    )
                    .normal()
                    .sized()
                    .concluding("Gestação tópica única e viável."),
                    FindingDefinition::new(
                        "gestacao-anembrionada",
                        "Gestação Anembrionada",
                        "Formação cística na cavidade uterina com reação decidual marginal, sugestiva de saco gestacional. Não se observa embrião ou vesícula vitelínica.",
                    )
                    .sized()
                    .concluding("Gestação anembrionada. Correlacionar com Beta-HCG quantitativo e, a critério clínico, reavaliar por ultrassonografia."),
                    FindingDefinition::new(
                        "morte-embrionaria",
                        "Morte Embrionária",
                        "Embrião sem batimentos cardíacos e sem movimentos corporais.",
                    )
                    .sized()
                    .concluding("Gestação inviável. Morte embrionária."),
                    FindingDefinition::new(
                        "aborto-retido",
                        "Aborto Retido",
                        "Saco gestacional de contornos levemente irregulares, com implantação tópica, contendo embrião sem batimentos cardíacos.",
                    )
                    .concluding("Gestação interrompida (aborto retido)."),
                    FindingDefinition::new(
                        "descolamento-ovular",
                        "Descolamento Ovular",
                        "Presença de coleção hipoecogênica adjacente ao contorno do saco gestacional.",
                    )
                    .sized()
                    .concluding("Descolamento ovular. Repouso e acompanhamento médico."),
                    FindingDefinition::new(
                        "gestacao-gemelar",
                        "Gestação Gemelar",
                        "Gestação gemelar bicoriônica biamniótica com embriões vivos.",
                    )
                    .concluding("Gestação gemelar viável."),
                    FindingDefinition::new(
                        "gestacao-ectopica",
                        "Gestação Ectópica",
                        "Não se observa saco gestacional no interior da cavidade uterina. Presença de massa anexial complexa.",
                    )
                    .concluding("Achados sugestivos de gestação ectópica. Correlacionar com Beta-HCG e avaliação clínica urgente."),
                ],
            )]
        });
        &CATEGORIES
    }
}
