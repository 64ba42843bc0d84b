mod common;

use sclight_analyzer::value::Value;
use sclight_analyzer::Analyzer;

#[test]
fn if_true_branch() {
    let analyzer = Analyzer::new();
    let result = analyzer.analyze(
        "IF Sensor_1 AND NOT Falha THEN Motor := TRUE; ELSE Motor := FALSE; END_IF",
        &common::plant_snapshot(),
    );

    assert_eq!(result.classified_type, "if");
    assert!(result.narrative.contains("IF Sensor_1 AND NOT Falha"));
    assert!(result.narrative.contains("  Sensor_1 = TRUE"));
    assert!(result.narrative.contains("  Falha = FALSE"));
    assert!(result.narrative.contains("Condição: VERDADEIRA"));
    assert_eq!(result.assignments.len(), 1);
    assert_eq!(result.assignments[0].value, Value::Bool(true));
}

#[test]
fn if_condition_operands_are_broken_down() {
    let analyzer = Analyzer::new();
    let result = analyzer.analyze(
        "IF Sensor_1 AND Falha THEN Motor := TRUE; END_IF",
        &common::plant_snapshot(),
    );

    assert!(result.narrative.contains("  Sensor_1 → TRUE"));
    assert!(result.narrative.contains("  Falha → FALSE"));
    assert!(result.narrative.contains("Condição: FALSA"));
    assert!(result.narrative.contains("Nenhum bloco executado"));
    assert!(result.assignments.is_empty());
}

#[test]
fn literal_if_branches() {
    let analyzer = Analyzer::new();
    let snapshot = common::plant_snapshot();

    let result = analyzer.analyze("IF TRUE THEN X := 1; ELSE X := 2; END_IF", &snapshot);
    assert!(result.narrative.contains("Condição: VERDADEIRA"));
    assert_eq!(result.assignments[0].value, Value::Number(1.0));
    assert!(result.narrative.contains("X = 1 [INT]"));

    let result = analyzer.analyze("IF FALSE THEN X := 1; END_IF", &snapshot);
    assert!(result.narrative.contains("Condição: FALSA"));
    assert!(result.narrative.contains("Nenhum bloco executado"));
    assert!(result.assignments.is_empty());
    assert!(!result.narrative.contains("X ="));
}

#[test]
fn if_with_unbound_condition_name() {
    let analyzer = Analyzer::new();
    // Unbound names read as 0, so the condition is false.
    let result = analyzer.analyze(
        "IF Inexistente THEN Motor := TRUE; END_IF",
        &common::plant_snapshot(),
    );
    assert!(result.narrative.contains("  Inexistente = 0"));
    assert!(result.narrative.contains("Condição: FALSA"));
}

#[test]
fn unterminated_if_is_a_soft_failure() {
    let analyzer = Analyzer::new();
    let result = analyzer.analyze("IF Sensor_1 THEN Motor := TRUE;", &common::plant_snapshot());
    assert!(result.success);
    assert_eq!(result.classified_type, "if");
    assert_eq!(result.narrative, "");
    assert!(result.assignments.is_empty());
}

#[test]
fn for_loop_described_once() {
    let analyzer = Analyzer::new();
    let result = analyzer.analyze(
        "FOR i := 1 TO 10 DO Soma := Soma + i; END_FOR",
        &common::plant_snapshot(),
    );

    assert_eq!(result.classified_type, "for");
    assert!(result
        .narrative
        .contains("FOR: i varia de 1 até 10, passo 1 (corpo analisado uma única vez)"));
    assert_eq!(result.assignments.len(), 1);
}

#[test]
fn while_and_repeat_and_case() {
    let analyzer = Analyzer::new();
    let snapshot = common::plant_snapshot();

    let result = analyzer.analyze("WHILE Passo < 10 DO Passo := Passo + 1; END_WHILE", &snapshot);
    assert_eq!(result.classified_type, "while");
    assert!(result.narrative.contains("WHILE: repete enquanto Passo < 10"));

    let result = analyzer.analyze("REPEAT X := X + 1; UNTIL X > 5 END_REPEAT", &snapshot);
    assert_eq!(result.classified_type, "repeat");
    assert!(result.narrative.contains("REPEAT: repete até que X > 5"));

    let result = analyzer.analyze("CASE Passo OF 1: A := 1; 3: A := 3; END_CASE", &snapshot);
    assert_eq!(result.classified_type, "case");
    assert!(result
        .narrative
        .contains("CASE: seleção sobre Passo (valor atual: 3)"));
}

#[test]
fn timer_and_counter_are_described_not_simulated() {
    let analyzer = Analyzer::new();
    let snapshot = common::plant_snapshot();

    let result = analyzer.analyze("TON(IN := Sensor_1, PT := T#5s);", &snapshot);
    assert_eq!(result.classified_type, "timer");
    assert!(result.narrative.contains("TON: temporizador"));
    assert!(result.narrative.contains("Comportamento descrito, não simulado"));
    assert!(result.assignments.is_empty());

    let result = analyzer.analyze("CTU(CU := Sensor_1, PV := 10);", &snapshot);
    assert_eq!(result.classified_type, "counter");
    assert!(result.narrative.contains("CTU: contador crescente"));
}

#[test]
fn if_wins_over_enclosing_loop() {
    let analyzer = Analyzer::new();
    let result = analyzer.analyze(
        "FOR i := 1 TO 3 DO IF Sensor_1 THEN Y := 1; END_IF END_FOR",
        &common::plant_snapshot(),
    );
    assert_eq!(result.classified_type, "if");
}
