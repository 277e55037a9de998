//! Synthetic demo dataset for the Nexo engines
//!
//! Immutable, process-wide fixtures: the ingestion stage definitions the
//! sequencer walks through, the keyword rule table the responder answers
//! from, and the chart series attached to the sales answer. Constructors
//! only; nothing here holds state.
//!
//! Rule order is part of the demo contract: "ventas viernes" is evaluated
//! before "stock bajo", so a query mentioning both resolves to the sales
//! answer. Do not reorder.

#![warn(unreachable_pub)]

use nexo_core::{AnswerBundle, ChartRef, Predicate, Responder, ResponseRule, SalesPoint, Stage};

/// The four simulated ingestion stages shown on the processing screen
#[must_use]
pub fn processing_stages() -> Vec<Stage> {
    vec![
        Stage::new(
            "Leyendo archivos",
            "Analizando estructura y formato de los documentos...",
            vec![
                "ventas_demo.xlsx - 1,847 filas detectadas".into(),
                "inventario_demo.csv - 89 productos".into(),
                "recetas_demo.pdf - 35 páginas".into(),
            ],
        ),
        Stage::new(
            "Extrayendo entidades",
            "Identificando platillos, ingredientes y proveedores...",
            vec![
                "15 platillos identificados".into(),
                "12 ingredientes principales".into(),
                "5 proveedores detectados".into(),
            ],
        ),
        Stage::new(
            "Generando relaciones",
            "Conectando entidades en el grafo de conocimiento...",
            vec![
                "45 recetas mapeadas".into(),
                "67 conexiones proveedor-ingrediente".into(),
                "1,847 transacciones vinculadas".into(),
            ],
        ),
        Stage::new(
            "Calculando predicciones",
            "Ejecutando modelos de demanda y alertas...",
            vec![
                "Predicción 7 días generada".into(),
                "3 alertas críticas detectadas".into(),
                "Top 5 platillos calculado".into(),
            ],
        ),
    ]
}

/// The ordered chat rule table, first match wins
#[must_use]
pub fn response_rules() -> Vec<ResponseRule> {
    vec![
        ResponseRule::new(
            Predicate::any(["viernes", "venta"]),
            AnswerBundle::new(
                "Los Tacos al Pastor son el platillo más vendido los viernes, con un promedio \
                 de 156 órdenes. Esto representa un 35% más que cualquier otro día de la semana. \
                 El patrón se debe a: 1) Fin de semana = mayor afluencia, 2) Promoción de \
                 \"Viernes de Tacos\" activa, 3) Tendencia histórica consistente desde hace 8 meses.",
                vec![
                    "Análisis de datos de ventas (últimos 12 meses)".into(),
                    "Identificación de patrón semanal".into(),
                    "Correlación con promociones activas".into(),
                    "Validación con tendencia histórica".into(),
                ],
            )
            .with_chart(ChartRef::SalesByDay),
        ),
        ResponseRule::new(
            Predicate::any(["stock", "inventario", "bajo"]),
            AnswerBundle::new(
                "Actualmente hay 3 ingredientes con stock crítico: Aguacate (2 kg, 1 día de \
                 cobertura), Chile Ancho (1.5 kg, 2 días) y Limón (bajo mínimo). Recomiendo \
                 contactar a Verduras Frescas MX para un pedido urgente. Tienen el mejor tiempo \
                 de entrega (24h) y calificación de 4.7.",
                vec![
                    "Revisión de inventario actual".into(),
                    "Cálculo de cobertura por consumo promedio".into(),
                    "Identificación de proveedor óptimo".into(),
                    "Generación de recomendación".into(),
                ],
            ),
        ),
        ResponseRule::new(
            Predicate::any(["predicción", "prediccion", "semana"]),
            AnswerBundle::new(
                "Para los próximos 7 días, predigo un aumento del 25% en ventas generales. Los \
                 platillos con mayor demanda esperada son: Birria de Res (110 órdenes/día, \
                 confianza alta) debido al clima frío, y Ceviche de Camarón (78 órdenes/día, \
                 confianza media) por inicio de cuaresma. Sugiero aumentar stock de Camarón y \
                 Carne de Res.",
                vec![
                    "Análisis de patrones estacionales".into(),
                    "Consideración de factores externos (clima, eventos)".into(),
                    "Modelo predictivo basado en históricos".into(),
                    "Cálculo de nivel de confianza".into(),
                ],
            ),
        ),
    ]
}

/// The fallback bundle for queries no rule matches
#[must_use]
pub fn default_bundle() -> AnswerBundle {
    AnswerBundle::new(
        "Entiendo tu pregunta. Basándome en los datos del restaurante, puedo ayudarte con \
         información sobre ventas, inventario, proveedores o predicciones. ¿Podrías ser más \
         específico sobre qué aspecto te gustaría analizar?",
        vec![
            "Procesamiento de lenguaje natural".into(),
            "Búsqueda en base de conocimiento".into(),
            "Preparación de respuesta contextual".into(),
        ],
    )
}

/// A responder wired with the demo rule table and fallback
#[must_use]
pub fn responder() -> Responder {
    Responder::new(response_rules(), default_bundle())
}

/// Weekly sales series backing the [`ChartRef::SalesByDay`] attachment
#[must_use]
pub fn sales_by_day() -> Vec<SalesPoint> {
    vec![
        SalesPoint::new("Lun", 8500, 3400, 60),
        SalesPoint::new("Mar", 7200, 2880, 60),
        SalesPoint::new("Mié", 7800, 3120, 60),
        SalesPoint::new("Jue", 9100, 3640, 60),
        SalesPoint::new("Vie", 14500, 5800, 60),
        SalesPoint::new("Sáb", 16200, 6480, 60),
        SalesPoint::new("Dom", 12500, 5000, 60),
    ]
}

/// The assistant's opening message
#[must_use]
pub fn welcome_text() -> String {
    "¡Hola! Soy tu copiloto de negocio. Puedo ayudarte a analizar ventas, revisar inventario, \
     ver predicciones y mucho más. ¿En qué puedo ayudarte hoy?"
        .into()
}

/// Prompts shown under an empty conversation
#[must_use]
pub fn suggested_questions() -> Vec<String> {
    vec![
        "¿Por qué los tacos vendieron más el viernes?".into(),
        "¿Qué ingredientes tienen stock bajo?".into(),
        "¿Cuál es la predicción de ventas para esta semana?".into(),
        "Muéstrame los top 5 platillos del mes".into(),
        "¿Qué proveedor tiene mejor calificación?".into(),
        "¿Cuánto margen tengo en promedio?".into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_stage_has_details() {
        let stages = processing_stages();
        assert_eq!(stages.len(), 4);
        assert!(stages.iter().all(|s| !s.details.is_empty()));
    }

    #[test]
    fn rule_table_order() {
        let rules = response_rules();
        assert_eq!(rules.len(), 3);
        // "ventas viernes" must stay first: it wins overlapping queries
        assert!(rules[0].bundle.text.contains("Tacos al Pastor"));
        assert_eq!(rules[0].bundle.chart, Some(ChartRef::SalesByDay));
        assert!(rules[1].bundle.text.contains("stock crítico"));
        assert!(rules[2].bundle.text.contains("próximos 7 días"));
    }

    #[test]
    fn sales_series_covers_the_week() {
        let series = sales_by_day();
        assert_eq!(series.len(), 7);
        assert_eq!(series[4].day, "Vie");
        assert_eq!(series[4].sales, 14500);
    }

    #[test]
    fn fixtures_build_a_valid_sequencer() {
        let seq = nexo_core::Sequencer::new(processing_stages(), Default::default());
        assert!(seq.is_ok());
    }
}
