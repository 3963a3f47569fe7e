use laudo_core::models::finding::{Category, FindingDefinition};

use crate::Exam;

/// Cervical ultrasound: thyroid, salivary glands and cervical lymph nodes.
pub struct CervicalThyroid;

impl Exam for CervicalThyroid {
    fn id(&self) -> &str {
        "cervical-tireoide"
    }

    fn name(&self) -> &str {
        "US Cervical - Tireoide"
    }

    fn technique(&self) -> &str {
        "Exame realizado com transdutor linear de alta frequência na modalidade bidimensional e modo Doppler colorido."
    }

    fn categories(&self) -> &[Category] {
        static CATEGORIES: std::sync::LazyLock<Vec<Category>> = std::sync::LazyLock::new(|| {
            vec![
                Category::new(
                    "Tireoide",
                    "Tireoide com dimensões normais, contornos regulares, ecotextura homogênea e simétrica, sem nódulos, cistos ou sinais de inflamação.",
                    vec![
                        FindingDefinition::new(
                            "tireoide-normal",
                            "Normal",
                            "Tireoide com dimensões normais, contornos regulares, ecotextura homogênea e simétrica, sem nódulos, cistos ou sinais de inflamação.",
                        )
                        .normal()
                        .concluding("Tireoide sem alterações."),
                        FindingDefinition::new(
                            "tireoidite-autoimune",
                            "Tireoidite Autoimune (Hashimoto)",
                            "Parênquima apresenta textura heterogênea, observando-se áreas de menor ecogenicidade de permeio de limites mal definidos (podendo traduzir áreas de infiltrado linfocítico). Ao mapeamento dúplex-Doppler colorido, observa-se vascularização difusamente aumentada.",
                        )
                        .concluding("Alteração textural tireoidiana difusa e hipervascularização ao mapeamento colorido. Este padrão é compatível com tireoidite autoimune."),
                        FindingDefinition::new(
                            "nodulo-tireoidiano",
                            "Nódulo Tireoidiano",
                            "Nódulo tireoidiano, circunscrito, sem halo hipoecóico ou calcificações.",
                        )
                        .sized()
                        .lateral()
                        .multiple()
                        .characteristics(&[
                            "Hipoecogênico",
                            "Isoecogênico",
                            "Hiperecogênico",
                            "Heterogêneo",
                            "Circunscrito",
                            "Com halo",
                            "Sem halo",
                            "Com microcalcificações",
                            "Sem microcalcificações",
                        ])
                        .concluding("Nódulo tireoidiano. Sugere-se avaliação endocrinológica e, se necessário, punção aspirativa por agulha fina (PAAF)."),
                        FindingDefinition::new(
                            "cisto-tireoidiano",
                            "Cisto Tireoidiano",
                            "Cisto tireoidiano de paredes finas e conteúdo anecóico.",
                        )
                        .sized()
                        .lateral()
                        .multiple()
                        .concluding("Cisto tireoidiano. Geralmente benigno, acompanhamento conforme critério clínico."),
                        FindingDefinition::new(
                            "hipotireoidismo",
                            "Hipotireoidismo",
                            "Tireoide de dimensões reduzidas e contornos regulares. Parênquima com ecogenicidade reduzida e difusamente heterogêneo sem a caracterização de lesões focais definidas.",
                        )
                        .concluding("Os aspectos descritos são compatíveis com diagnóstico clínico proposto de tireoidite."),
                    ],
                ),
                Category::new(
                    "Glândulas Submandibulares",
                    "Glândulas submandibulares com dimensões, contornos e ecotextura normais.",
                    vec![
                        FindingDefinition::new(
                            "submandibulares-normal",
                            "Normal",
                            "Glândulas submandibulares com dimensões, contornos e ecotextura normais.",
                        )
                        .normal()
                        .concluding("Glândulas submandibulares sem alterações."),
                        FindingDefinition::new(
                            "sialoadenite",
                            "Sialoadenite",
                            "Morfologia globosa, contornos pouco irregulares e dimensões discretamente aumentadas. Ecotextura glandular difusamente heterogênea. Ao mapeamento colorido observa-se vascularização aumentada.",
                        )
                        .lateral()
                        .concluding("Sinais ultrassonográficos de sialoadenite submandibular."),
                    ],
                ),
                Category::new(
                    "Linfonodos Cervicais",
                    "Linfonodos cervicais de aspecto e dimensões habituais.",
                    vec![
                        FindingDefinition::new(
                            "linfonodos-normal",
                            "Normal",
                            "Linfonodos cervicais de aspecto e dimensões habituais.",
                        )
                        .normal()
                        .concluding("Linfonodos cervicais sem alterações."),
                        FindingDefinition::new(
                            "linfonodomegalia",
                            "Linfonodomegalia",
                            "Observam-se linfonodos cervicais com aspecto hipoecóico e dimensões aumentadas.",
                        )
                        .sized()
                        .multiple()
                        .concluding("Linfonodomegalia cervical. Correlacionar com dados clínicos."),
                    ],
                ),
                Category::new(
                    "Glândulas Parótidas",
                    "Glândulas parótidas com forma, contornos, topografia e dimensões normais.",
                    vec![
                        FindingDefinition::new(
                            "parotidas-normal",
                            "Normal",
                            "Glândulas parótidas com forma, contornos, topografia e dimensões normais.",
                        )
                        .normal()
                        .concluding("Glândulas parótidas sem alterações."),
                        FindingDefinition::new(
                            "parotidite",
                            "Parotidite",
                            "Glândulas parótidas têm forma, contornos e topografia normais, notando-se aumento das dimensões da parótida, que apresenta fina alteração ecotextural.",
                        )
                        .lateral()
                        .concluding("Sinais sugestivos de parotidite."),
                    ],
                ),
            ]
        });
        &CATEGORIES
    }
}
