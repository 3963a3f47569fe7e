use laudo_core::models::finding::{Category, FindingDefinition};

use crate::Exam;

/// Second- and third-trimester obstetric ultrasound, including a basic
/// morphology survey.
pub struct ObstetricLaterTrimesters;

impl Exam for ObstetricLaterTrimesters {
    fn id(&self) -> &str {
        "obstetrico-2-3-trimestre"
    }

    fn name(&self) -> &str {
        "US Obstétrico - 2º/3º Trimestre"
    }

    fn technique(&self) -> &str {
        "Exame realizado com transdutor convexo multifrequencial na modalidade bidimensional e Doppler colorido quando indicado."
    }

    fn categories(&self) -> &[Category] {
        static CATEGORIES: std::sync::LazyLock<Vec<Category>> = std::sync::LazyLock::new(|| {
            vec![
                Category::new(
                    "Biometria Fetal",
                    "Biometria fetal compatível com idade gestacional estimada.",
                    vec![
                        FindingDefinition::new(
                            "biometria-adequada",
                            "Biometria Adequada",
                            "Parâmetros biométricos adequados para a idade gestacional.",
                        )
                        .normal()
                        .concluding("Biometria fetal adequada para idade gestacional."),
                        FindingDefinition::new(
                            "rciu",
                            "Restrição de Crescimento (RCIU)",
                            "Sinais de restrição do crescimento com peso no percentil < 10.",
                        )
                        .concluding("Restrição de crescimento intrauterino (RCIU). Acompanhamento especializado e Doppler."),
                        FindingDefinition::new(
                            "macrossomia",
                            "Macrossomia Fetal",
                            "Peso fetal estimado acima do percentil 90 para idade gestacional.",
                        )
                        .concluding("Macrossomia fetal. Correlacionar com diabetes gestacional."),
                    ],
                ),
                Category::new(
                    "Placenta",
                    "Placenta de inserção tópica, grau adequado para idade gestacional.",
                    vec![
                        FindingDefinition::new(
                            "placenta-normal",
                            "Placenta Tópica",
                            "Placenta com inserção tópica, grau de Grannum adequado, espessura normal.",
                        )
                        .normal()
                        .concluding("Placenta tópica sem alterações."),
                        FindingDefinition::new(
                            "placenta-previa",
                            "Placenta Prévia",
                            "Placenta com inserção baixa, insinuando-se no segmento inferior do útero, margeando/recobrindo o óstio cervical interno.",
                        )
                        .concluding("Placenta prévia marginal/total. Controle evolutivo e via de parto cesariana."),
                        FindingDefinition::new(
                            "descolamento-placentario",
                            "Descolamento Prematuro de Placenta (DPP)",
                            "Observa-se hematoma heterogêneo intraplacentário ou retroplacentário.",
                        )
                        .sized()
                        .concluding("Descolamento prematuro de placenta. Emergência obstétrica."),
                    ],
                ),
                Category::new(
                    "Líquido Amniótico",
                    "Volume de líquido amniótico normal.",
                    vec![
                        FindingDefinition::new(
                            "la-normal",
                            "Volume Normal",
                            "Volume de líquido amniótico normal. ILA (Índice de Líquido Amniótico) adequado.",
                        )
                        .normal()
                        .concluding("Volume de líquido amniótico normal."),
                        FindingDefinition::new(
                            "oligoidramnio",
                            "Oligoidrâmnio",
                            "Volume de líquido amniótico reduzido. ILA < 5 cm.",
                        )
                        .concluding("Oligoidrâmnio. Acompanhamento especializado."),
                        FindingDefinition::new(
                            "polidramnio",
                            "Polidrâmnio",
                            "Volume de líquido amniótico aumentado. ILA > 25 cm.",
                        )
                        .concluding("Polidrâmnio. Investigar causas (diabetes, malformações)."),
                    ],
                ),
                Category::new(
                    "Colo Uterino",
                    "Colo uterino com comprimento adequado, orifício interno fechado.",
                    vec![
                        FindingDefinition::new(
                            "colo-gestante-normal",
                            "Colo Normal",
                            "Colo uterino com comprimento adequado (> 25mm), orifício interno fechado.",
                        )
                        .normal()
                        .sized()
                        .concluding("Colo uterino sem alterações."),
                        FindingDefinition::new(
                            "colo-curto",
                            "Colo Curto (< 25mm)",
                            "Colo uterino com comprimento reduzido (menor que 25mm).",
                        )
                        .sized()
                        .concluding("Colo uterino curto. Risco aumentado para parto prematuro. Acompanhamento especializado."),
                        FindingDefinition::new(
                            "oi-aberto",
                            "Orifício Interno Aberto",
                            "Canal endocervical virtual, porém observa-se abertura do orifício cervical interno.",
                        )
                        .concluding("Orifício interno aberto. Risco de incompetência istmo-cervical."),
                    ],
                ),
                Category::new(
                    "Morfologia Fetal",
                    "Morfologia fetal sem alterações aparentes ao método.",
                    vec![
                        FindingDefinition::new(
                            "morfologia-normal",
                            "Normal",
                            "Morfologia fetal sem alterações aparentes ao método.",
                        )
                        .normal()
                        .concluding("Morfologia fetal normal."),
                        FindingDefinition::new(
                            "hernia-diafragmatica",
                            "Hérnia Diafragmática",
                            "Observa-se conteúdo abdominal no tórax fetal, sugestivo de hérnia diafragmática.",
                        )
                        .concluding("Achado sugestivo de hérnia diafragmática. Encaminhar para medicina fetal."),
                        FindingDefinition::new(
                            "espinha-bifida",
                            "Espinha Bífida",
                            "Observa-se defeito de fechamento da coluna vertebral, sugestivo de espinha bífida.",
                        )
                        .concluding("Achado sugestivo de espinha bífida. Encaminhar para medicina fetal."),
                        FindingDefinition::new(
                            "pe-torto",
                            "Pé Torto",
                            "Observa-se deformidade do(s) pé(s) fetal(is).",
                        )
                        .concluding("Achado de pé torto. Avaliação ortopédica após nascimento."),
                        FindingDefinition::new(
                            "gastrosquise",
                            "Gastrosquise",
                            "Observa-se evisceração de alças intestinais através de defeito da parede abdominal.",
                        )
                        .concluding("Achado compatível com gastrosquise. Encaminhar para medicina fetal e cirurgia pediátrica."),
                    ],
                ),
            ]
        });
        &CATEGORIES
    }
}
