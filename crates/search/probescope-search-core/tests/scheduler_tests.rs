use probescope_search_core::{
    run, Algorithm, Command, Config, CoreEvent, Engine, Inputs, Outputs, PlaybackCommand, Request,
    SearchResult, SessionId, SessionState,
};

fn mk_evens(n: usize) -> Vec<i32> {
    (0..n).map(|i| (i * 2) as i32).collect()
}

fn mk_result(n: usize, target: i32, algorithm: Algorithm) -> SearchResult {
    run(&mk_evens(n), target, algorithm)
}

fn start_inputs(entry_index: usize, result: SearchResult, array_len: usize) -> Inputs {
    Inputs::one(Request::Start {
        entry_index,
        result,
        array_len,
    })
}

/// Drive one tick with no requests and clone the outputs.
fn tick(eng: &mut Engine, dt_ms: f32) -> Outputs {
    eng.update(dt_ms, Inputs::default()).clone()
}

fn started_session(outputs: &Outputs) -> SessionId {
    outputs
        .events
        .iter()
        .find_map(|e| match e {
            CoreEvent::PlaybackStarted { session } => Some(*session),
            _ => None,
        })
        .expect("PlaybackStarted event")
}

/// it should emit settle-in, highlights in trace order, then the settled marker
#[test]
fn command_stream_order() {
    let result = mk_result(121, 88, Algorithm::Binary);
    let probes = result.trace.probes.clone();
    let found = result.found_index.unwrap();

    let mut eng = Engine::new(Config::default());
    let first = eng.update(0.0, start_inputs(44, result, 121)).clone();
    let session = started_session(&first);

    let mut commands: Vec<Command> = first.commands;
    // A minute of playback far exceeds the schedule.
    commands.extend(tick(&mut eng, 60_000.0).commands);

    assert!(matches!(
        commands[0].command,
        PlaybackCommand::SettleIn { anchor: 44, columns: 11, .. }
    ));
    assert_eq!(commands.len(), probes.len() + 2);
    for (probe, cmd) in probes.iter().zip(&commands[1..]) {
        match cmd.command {
            PlaybackCommand::Highlight {
                index, comparison, ..
            } => {
                assert_eq!(index, probe.probed_index);
                assert_eq!(comparison, probe.comparison);
            }
            ref other => panic!("expected Highlight, got {other:?}"),
        }
    }
    assert_eq!(
        commands.last().unwrap().command,
        PlaybackCommand::Settled { index: found }
    );

    // All commands belong to the one session and offsets never regress.
    let mut prev = f32::NEG_INFINITY;
    for cmd in &commands {
        assert_eq!(cmd.session, Some(session));
        assert!(cmd.at_ms >= prev);
        prev = cmd.at_ms;
    }
}

/// it should emit only settle-in and no-match for an empty array
#[test]
fn empty_array_settle_and_no_match() {
    let result = run(&[], 5, Algorithm::Binary);
    let mut eng = Engine::new(Config::default());
    let mut commands = eng.update(0.0, start_inputs(0, result, 0)).commands.clone();
    commands.extend(tick(&mut eng, 60_000.0).commands);

    assert_eq!(commands.len(), 2);
    match &commands[0].command {
        PlaybackCommand::SettleIn { delays_ms, .. } => assert!(delays_ms.is_empty()),
        other => panic!("expected SettleIn, got {other:?}"),
    }
    assert_eq!(commands[1].command, PlaybackCommand::NoMatch);
}

/// it should end an absent-target run with NoMatch, never Settled
#[test]
fn absent_target_no_match() {
    let result = run(&[1, 3, 5, 7], 4, Algorithm::Binary);
    let mut eng = Engine::new(Config::default());
    eng.update(0.0, start_inputs(0, result, 4));
    let commands = tick(&mut eng, 60_000.0).commands;

    assert!(commands
        .iter()
        .all(|c| !matches!(c.command, PlaybackCommand::Settled { .. })));
    assert_eq!(commands.last().unwrap().command, PlaybackCommand::NoMatch);
}

/// it should emit zero commands from a superseded session after a new start
#[test]
fn supersede_cancels_previous_session() {
    let mut eng = Engine::new(Config::default());

    let first = eng
        .update(0.0, start_inputs(10, mk_result(121, 88, Algorithm::Binary), 121))
        .clone();
    let s1 = started_session(&first);

    // Let the first session emit its settle-in and an early highlight.
    let early = tick(&mut eng, 1_000.0);
    assert!(early.commands.iter().all(|c| c.session == Some(s1)));

    // Supersede mid-flight.
    let takeover = eng
        .update(0.0, start_inputs(50, mk_result(121, 88, Algorithm::Binary), 121))
        .clone();
    let s2 = started_session(&takeover);
    assert_ne!(s1, s2);
    assert!(takeover
        .events
        .contains(&CoreEvent::PlaybackCancelled { session: s1 }));

    // From the takeover tick onward, nothing references the first session.
    let mut commands = takeover.commands;
    for _ in 0..10 {
        commands.extend(tick(&mut eng, 10_000.0).commands);
    }
    assert!(!commands.is_empty());
    assert!(commands.iter().all(|c| c.session == Some(s2)));
}

/// it should treat cancel as idempotent
#[test]
fn cancel_is_idempotent() {
    let mut eng = Engine::new(Config::default());
    let first = eng
        .update(0.0, start_inputs(0, mk_result(50, 40, Algorithm::Binary), 50))
        .clone();
    let session = started_session(&first);

    let cancelled = eng
        .update(0.0, Inputs::one(Request::Cancel { session }))
        .clone();
    assert!(cancelled
        .events
        .contains(&CoreEvent::PlaybackCancelled { session }));
    assert_eq!(eng.session_state(), None);

    // Second cancel: nothing left to do.
    let again = eng
        .update(0.0, Inputs::one(Request::Cancel { session }))
        .clone();
    assert!(again.is_empty());
}

/// it should ignore a cancel for a session that is not live
#[test]
fn cancel_wrong_session_is_noop() {
    let mut eng = Engine::new(Config::default());
    let first = eng
        .update(0.0, start_inputs(0, mk_result(50, 40, Algorithm::Binary), 50))
        .clone();
    let live = started_session(&first);

    let stale = SessionId(live.0 + 100);
    let out = eng
        .update(0.0, Inputs::one(Request::Cancel { session: stale }))
        .clone();
    assert!(!out.events.iter().any(|e| matches!(
        e,
        CoreEvent::PlaybackCancelled { .. }
    )));
    assert_eq!(eng.session_state().map(|(id, _)| id), Some(live));
}

/// it should reset to base state with or without a live session, idempotently
#[test]
fn reset_idempotent() {
    let mut eng = Engine::new(Config::default());

    // Reset with nothing active: just the uniform reset command.
    let idle_reset = eng.update(0.0, Inputs::one(Request::Reset)).clone();
    assert_eq!(idle_reset.commands.len(), 1);
    assert_eq!(idle_reset.commands[0].command, PlaybackCommand::ResetAll);
    assert_eq!(idle_reset.commands[0].session, None);
    assert!(idle_reset.events.contains(&CoreEvent::ResetApplied));

    // Reset over a live session cancels it first.
    let first = eng
        .update(0.0, start_inputs(0, mk_result(50, 40, Algorithm::Binary), 50))
        .clone();
    let session = started_session(&first);
    let live_reset = eng.update(0.0, Inputs::one(Request::Reset)).clone();
    assert!(live_reset
        .events
        .contains(&CoreEvent::PlaybackCancelled { session }));
    assert!(live_reset.events.contains(&CoreEvent::ResetApplied));
    assert_eq!(eng.session_state(), None);

    // Back-to-back resets observe the same end state.
    let second = eng.update(0.0, Inputs::one(Request::Reset)).clone();
    assert_eq!(second.commands, idle_reset.commands);
    assert!(tick(&mut eng, 10_000.0).is_empty());
}

/// it should fall back to anchor 0 for an out-of-range entry index
#[test]
fn out_of_range_entry_anchors_at_zero() {
    let mut eng = Engine::new(Config::default());
    let out = eng
        .update(0.0, start_inputs(999, mk_result(50, 40, Algorithm::Binary), 50))
        .clone();
    match &out.commands[0].command {
        PlaybackCommand::SettleIn {
            anchor, delays_ms, ..
        } => {
            assert_eq!(*anchor, 0);
            assert_eq!(delays_ms[0], 0.0);
        }
        other => panic!("expected SettleIn, got {other:?}"),
    }
}

/// it should cap commands per tick and carry the remainder over in order
#[test]
fn command_cap_backpressure() {
    let cfg = Config {
        max_commands_per_tick: 4,
        ..Default::default()
    };
    let mut eng = Engine::new(cfg);
    // Absent target: linear search probes all 50 elements.
    let result = mk_result(50, 41, Algorithm::Linear);
    let total = result.trace.len() + 2;

    let first = eng.update(0.0, start_inputs(0, result, 50)).clone();
    let mut commands = first.commands;

    // One enormous tick makes the whole schedule due at once; the cap
    // spreads emission across subsequent ticks.
    loop {
        let out = tick(&mut eng, 100_000.0);
        assert!(out.commands.len() <= 4);
        if out.is_empty() {
            break;
        }
        commands.extend(out.commands);
    }

    assert_eq!(commands.len(), total);
    assert_eq!(commands.last().unwrap().command, PlaybackCommand::NoMatch);
    let mut prev = f32::NEG_INFINITY;
    for cmd in &commands {
        assert!(cmd.at_ms >= prev);
        prev = cmd.at_ms;
    }
}

/// it should hold in Settling for the configured tail, then finish
#[test]
fn settling_tail_then_done() {
    let cfg = Config::default();
    let tail = cfg.settle_tail_ms;
    let mut eng = Engine::new(cfg);

    let first = eng
        .update(0.0, start_inputs(44, mk_result(121, 88, Algorithm::Binary), 121))
        .clone();
    let session = started_session(&first);
    let duration = eng.session_total_duration_ms().expect("active session");

    // Jump to just past the terminal command but inside the tail.
    let out = tick(&mut eng, duration - tail + 1.0);
    assert!(out
        .events
        .iter()
        .any(|e| matches!(e, CoreEvent::PlaybackSettled { .. })));
    assert_eq!(
        eng.session_state(),
        Some((session, SessionState::Settling))
    );

    // The tail elapses: Done, and the surface is free.
    let done = tick(&mut eng, tail);
    assert!(done
        .events
        .contains(&CoreEvent::PlaybackFinished { session }));
    assert_eq!(eng.session_state(), None);
}

/// it should produce identical outputs for the same request and dt sequence (determinism)
#[test]
fn determinism_same_sequence_same_outputs() {
    let mk = || {
        let mut eng = Engine::new(Config::default());
        eng.update(0.0, start_inputs(10, mk_result(121, 88, Algorithm::Binary), 121));
        eng
    };
    let mut e1 = mk();
    let mut e2 = mk();

    let seq = [16.0, 16.0, 400.0, 0.0, 350.0, 5_000.0, 16.0];
    for dt in seq {
        let o1 = serde_json::to_string(e1.update(dt, Inputs::default())).unwrap();
        let o2 = serde_json::to_string(e2.update(dt, Inputs::default())).unwrap();
        assert_eq!(o1, o2);
    }
}
