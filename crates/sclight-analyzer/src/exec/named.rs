//! Timer and counter instruction descriptions.
//!
//! Instructions are described, never simulated: each detected instruction
//! contributes a fixed explanatory step, and the surrounding statements go
//! through the plain scanner.

use sclight_syntax::{CounterKind, TimerKind};

use crate::context::RunContext;

use super::plain::execute_plain;

fn timer_description(kind: TimerKind) -> &'static str {
    match kind {
        TimerKind::OnDelay => {
            "TON: temporizador com atraso na ativação (Q liga após IN permanecer TRUE pelo tempo PT)"
        }
        TimerKind::OffDelay => {
            "TOF: temporizador com atraso na desativação (Q desliga após IN ficar FALSE pelo tempo PT)"
        }
        TimerKind::Pulse => {
            "TP: gerador de pulso (Q permanece TRUE por PT após borda de subida em IN)"
        }
        TimerKind::RetentiveOnDelay => {
            "TONR: temporizador retentivo (acumula tempo enquanto IN for TRUE; zera pela entrada R)"
        }
    }
}

fn counter_description(kind: CounterKind) -> &'static str {
    match kind {
        CounterKind::Up => {
            "CTU: contador crescente (CV incrementa a cada borda em CU; QU liga quando CV >= PV)"
        }
        CounterKind::Down => {
            "CTD: contador decrescente (CV decrementa a cada borda em CD; QD liga quando CV <= 0)"
        }
        CounterKind::UpDown => {
            "CTUD: contador bidirecional (CU incrementa e CD decrementa CV; QU/QD conforme PV)"
        }
    }
}

/// Describes a timer instruction and scans surrounding statements once.
pub fn execute_timer(ctx: &mut RunContext, kind: TimerKind, source: &str) {
    ctx.step(timer_description(kind));
    ctx.step("Comportamento descrito, não simulado");
    execute_plain(ctx, source);
}

/// Describes a counter instruction and scans surrounding statements once.
pub fn execute_counter(ctx: &mut RunContext, kind: CounterKind, source: &str) {
    ctx.step(counter_description(kind));
    ctx.step("Comportamento descrito, não simulado");
    execute_plain(ctx, source);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::TagSnapshot;

    #[test]
    fn timer_description_and_plain_tail() {
        let mut ctx = RunContext::seeded(&TagSnapshot::new());
        execute_timer(
            &mut ctx,
            TimerKind::OnDelay,
            "Timer1(IN := Start, PT := T#5s); Pronto := TRUE;",
        );
        assert!(ctx.steps[0].starts_with("TON: temporizador"));
        // Formal parameters are not assignments; the trailing statement is.
        assert_eq!(ctx.assignments.len(), 1);
        assert_eq!(ctx.assignments[0].variable_name, "Pronto");
    }

    #[test]
    fn counter_description() {
        let mut ctx = RunContext::seeded(&TagSnapshot::new());
        execute_counter(&mut ctx, CounterKind::UpDown, "CTUD(CU := A, CD := B);");
        assert!(ctx.steps[0].starts_with("CTUD: contador bidirecional"));
        assert!(ctx.assignments.is_empty());
    }
}
