use sclight_analyzer::snapshot::{TagSnapshot, TagState};

/// Standard snapshot shared by the integration tests.
pub fn plant_snapshot() -> TagSnapshot {
    let mut snapshot = TagSnapshot::new();
    snapshot.insert("Sensor_1", TagState::of("TRUE", "BOOL"));
    snapshot.insert("Falha", TagState::of("FALSE", "BOOL"));
    snapshot.insert("Nivel", TagState::of("7.5", "REAL"));
    snapshot.insert("Passo", TagState::of("3", "INT"));
    snapshot
}
