//! Demo responder behavior over the real fixture rule table

use nexo_core::ChartRef;
use pretty_assertions::assert_eq;

#[test]
fn viernes_query_returns_sales_bundle_with_chart() {
    let responder = nexo_fixtures::responder();
    let bundle = responder.answer("¿Qué ventas tuve el viernes?");

    assert!(bundle.text.contains("Tacos al Pastor"));
    assert_eq!(bundle.chart, Some(ChartRef::SalesByDay));
    assert_eq!(bundle.steps.len(), 4);
}

#[test]
fn stock_query_returns_inventory_bundle() {
    let responder = nexo_fixtures::responder();
    let bundle = responder.answer("tengo stock bajo de queso");

    // "stock" and "bajo" are both rule-2 keywords; no rule-1 keyword present
    assert!(bundle.text.contains("stock crítico"));
    assert!(bundle.chart.is_none());
}

#[test]
fn overlapping_keywords_resolve_by_rule_order() {
    let responder = nexo_fixtures::responder();
    // Contains "stock" (rule 2) and "viernes" (rule 1): rule 1 is listed
    // first and wins
    let bundle = responder.answer("revisa el stock del viernes");

    assert!(bundle.text.contains("Tacos al Pastor"));
}

#[test]
fn prediction_query_without_sales_keywords() {
    let responder = nexo_fixtures::responder();
    let bundle = responder.answer("¿qué esperas para la próxima semana?");

    assert!(bundle.text.contains("próximos 7 días"));
}

#[test]
fn prediction_wording_with_ventas_hits_the_sales_rule_first() {
    // Same behavior as the original demo: "predicción de ventas" contains
    // "venta", which rule 1 claims before rule 3 is consulted
    let responder = nexo_fixtures::responder();
    let bundle = responder.answer("¿Cuál es la predicción de ventas para esta semana?");

    assert!(bundle.text.contains("Tacos al Pastor"));
}

#[test]
fn unmatched_query_gets_default_bundle() {
    let responder = nexo_fixtures::responder();
    let bundle = responder.answer("hola");

    assert_eq!(bundle, nexo_fixtures::default_bundle());
}

#[test]
fn empty_query_gets_default_bundle() {
    let responder = nexo_fixtures::responder();
    let bundle = responder.answer("");

    assert_eq!(bundle, nexo_fixtures::default_bundle());
}

#[test]
fn answers_are_bit_identical_across_calls() {
    let responder = nexo_fixtures::responder();
    for query in ["¿Qué ventas tuve el viernes?", "stock", "hola", ""] {
        assert_eq!(responder.answer(query), responder.answer(query));
    }
}

#[test]
fn every_query_is_answered() {
    // Total function: arbitrary text always produces a bundle
    let responder = nexo_fixtures::responder();
    for query in nexo_fixtures::suggested_questions() {
        let bundle = responder.answer(&query);
        assert!(!bundle.text.is_empty());
        assert!(!bundle.steps.is_empty());
    }
}
