// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tests for the scalar kinds a traced ordinal accepts, declared from outside the crate

use std::time::Duration;

use traced_ordinal::{
    ordinal_enum, CancelationMode, MemorySink, Nanoseconds, Ordinal, TracedOrdinal,
};

ordinal_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum PresentPhase: i64 {
        Early = -2,
        OnTime = 0,
        Late = 3,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum RefreshRate: u16 {
        Hz60 = 60,
        Hz120 = 120,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Skew: i8 {
        Behind = -1,
        Level = 0,
    }
}

#[test]
fn test_enum_converts_to_discriminant() {
    assert_eq!(PresentPhase::Late.to_i64(), 3);
    assert_eq!(RefreshRate::Hz120.to_i64(), 120);
}

#[test]
fn test_signed_enum_splits_tracks() -> anyhow::Result<()> {
    let sink = MemorySink::new();
    let mut phase = TracedOrdinal::with_sink("phase", PresentPhase::OnTime, &sink);
    phase.set(PresentPhase::Early);
    phase.set(PresentPhase::Late);

    assert_eq!(phase.get(), PresentPhase::Late);
    assert_eq!(sink.samples_for("phase"), vec![0, 0, 3]);
    assert_eq!(sink.samples_for("phaseNegative"), vec![2, 0]);

    let json: serde_json::Value = serde_json::from_str(&sink.to_json()?)?;
    assert_eq!(json[1]["track"], "phaseNegative");
    assert_eq!(json[1]["value"], 2);
    Ok(())
}

#[test]
fn test_narrow_signed_enum_keeps_sign() {
    assert_eq!(std::mem::size_of::<Skew>(), std::mem::size_of::<i8>());
    assert_eq!(Skew::Behind.to_i64(), -1);
    assert!(Skew::Behind.is_negative());

    let sink = MemorySink::new();
    let mut skew = TracedOrdinal::with_sink("S", Skew::Behind, &sink);
    skew.set(Skew::Level);

    let rendered: Vec<String> = sink.samples().iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["SNegative=1", "S=0", "S=0", "SNegative=0"]);
}

#[test]
fn test_unsigned_enum_never_uses_negative_track() {
    let sink = MemorySink::new();
    let mut rate = TracedOrdinal::with_sink("refreshRate", RefreshRate::Hz60, &sink);
    rate.set(RefreshRate::Hz120);

    assert!(!rate.has_gone_negative());
    assert_eq!(sink.samples_for("refreshRate"), vec![60, 120]);
    assert!(sink.samples_for("refreshRateNegative").is_empty());
}

#[test]
fn test_cancelation_mode_is_traceable() {
    let sink = MemorySink::new();
    let mut mode = TracedOrdinal::with_sink("cancelMode", CancelationMode::All, &sink);
    mode.set(CancelationMode::Hover);

    assert_eq!(sink.samples_for("cancelMode"), vec![0, 4]);
}

#[test]
fn test_duration_converts_to_nanosecond_ticks() -> anyhow::Result<()> {
    let frame = Nanoseconds::try_from(Duration::from_millis(16))?;
    assert_eq!(frame.to_i64(), 16_000_000);

    let sink = MemorySink::new();
    let mut budget = TracedOrdinal::with_sink("frameBudget", frame, &sink);
    budget.set(frame - Nanoseconds::from_millis(20));

    assert_eq!(sink.last_value("frameBudgetNegative"), Some(4_000_000));
    assert_eq!(sink.last_value("frameBudget"), Some(0));
    Ok(())
}

#[test]
fn test_bool_and_integers() {
    let sink = MemorySink::new();
    let mut visible = TracedOrdinal::with_sink("visible", true, &sink);
    visible.set(false);
    let mut depth = TracedOrdinal::with_sink("depth", -1isize, &sink);
    depth.update(|d| d + 1);

    assert_eq!(sink.samples_for("visible"), vec![1, 0]);
    assert_eq!(sink.samples_for("depthNegative"), vec![1, 0]);
    assert_eq!(sink.samples_for("depth"), vec![0, 0]);
}
