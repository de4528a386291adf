//! Scenario tests driving the crate the way a host would: a configuration,
//! a stream of heading samples, and a sink collecting tone requests.

use std::io::Write;

use disha_cue::config::{CompassConfig, SharedConfig};
use disha_cue::host::mock::{MockToneSink, ScriptedHeadings, SharedActivity};
use disha_cue::{CompassEngine, CompassRuntime, CueAction, ToneDispatcher};

/// Tick a runtime once per scripted sample (plus the seed tick).
fn drain<H, A, S>(runtime: &mut CompassRuntime<H, A, S>, ticks: usize)
where
    H: disha_cue::HeadingSource,
    A: disha_cue::ActivitySource,
    S: disha_cue::ToneSink,
{
    for _ in 0..ticks {
        runtime.tick().unwrap();
    }
}

#[test]
fn full_sweep_cues_each_cardinal_once() {
    // One clockwise turn in 10° steps, starting off-axis at 5°
    let script: Vec<f32> = (0..=36).map(|i| 5.0 + 10.0 * i as f32).collect();
    let ticks = script.len();

    let sink = MockToneSink::new();
    let mut runtime = CompassRuntime::new(
        SharedConfig::new(CompassConfig::default()),
        ScriptedHeadings::new(script),
        SharedActivity::new(),
        sink.clone(),
    )
    .unwrap();
    drain(&mut runtime, ticks);

    // East, South, West, then North as the turn closes
    let frequencies: Vec<u16> = sink.played().iter().map(|c| c.frequency_hz).collect();
    assert_eq!(frequencies, [1500, 1000, 500, 2000]);
}

#[test]
fn wobble_around_north_cues_once_until_retreat() {
    let script = [5.0, -5.0, 5.0, -5.0, -50.0, 5.0];
    let ticks = script.len();

    let sink = MockToneSink::new();
    let mut runtime = CompassRuntime::new(
        SharedConfig::new(CompassConfig::default()),
        ScriptedHeadings::new(script),
        SharedActivity::new(),
        sink.clone(),
    )
    .unwrap();
    drain(&mut runtime, ticks);

    // First crossing fires; wobble inside the band is suppressed; only
    // after retreating past 45° does the next crossing fire.
    assert_eq!(sink.played().len(), 2);
    assert!(sink.played().iter().all(|c| c.frequency_hz == 2000));
}

#[test]
fn silent_north_stays_quiet() {
    let mut config = CompassConfig::default();
    config.points[0].action = CueAction::Silent;
    let mut engine = CompassEngine::from_config(&config).unwrap();

    let cues = engine.update(-5.0, 5.0, false);
    assert!(cues.is_empty());
    assert!(!engine.status().points[0].suppressed);
}

#[test]
fn combat_suppression_end_to_end() {
    let config = CompassConfig {
        suppress_when_busy: true,
        ..Default::default()
    };
    let sink = MockToneSink::new();
    let activity = SharedActivity::new();
    let mut runtime = CompassRuntime::new(
        SharedConfig::new(config),
        ScriptedHeadings::new([5.0, -5.0, -10.0, 5.0]),
        activity.clone(),
        sink.clone(),
    )
    .unwrap();

    runtime.tick().unwrap(); // seed at 5°
    activity.set_busy(true);
    runtime.tick().unwrap(); // crossing to -5° while busy: silent
    runtime.tick().unwrap(); // drift to -10° while busy
    assert!(sink.played().is_empty());
    assert!(runtime.engine().status().points.iter().all(|p| !p.suppressed));

    activity.set_busy(false);
    runtime.tick().unwrap(); // crossing back to 5°: fires
    assert_eq!(sink.played().len(), 1);
    assert_eq!(sink.played()[0].frequency_hz, 2000);
}

#[test]
fn config_file_loads_with_defaults_and_clamping() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
suppression_angle_deg = 90.0

[[points]]
name = "North"
bearing_deg = 0.0
frequency_hz = 50

[[points]]
name = "South"
bearing_deg = 180.0
action = "silent"
"#
    )
    .unwrap();

    let config = CompassConfig::from_file(file.path()).unwrap();
    assert_eq!(config.suppression_angle_deg, 45.0); // clamped
    assert_eq!(config.points.len(), 2);
    assert_eq!(config.points[0].frequency_hz, 300); // clamped
    assert_eq!(config.points[0].duration_ms, 200); // defaulted
    assert_eq!(config.points[1].action, CueAction::Silent);
}

#[test]
fn cues_flow_through_the_dispatcher() {
    let recorder = MockToneSink::new();
    let (channel_sink, dispatcher) = ToneDispatcher::spawn(recorder.clone()).unwrap();

    let mut runtime = CompassRuntime::new(
        SharedConfig::new(CompassConfig::default()),
        ScriptedHeadings::new([5.0, -5.0]),
        SharedActivity::new(),
        channel_sink,
    )
    .unwrap();
    drain(&mut runtime, 2);
    drop(runtime);

    dispatcher.join();
    assert_eq!(recorder.played().len(), 1);
    assert_eq!(recorder.played()[0].frequency_hz, 2000);
}

#[test]
fn live_retuning_during_a_run() {
    let config = SharedConfig::new(CompassConfig::default());
    let sink = MockToneSink::new();
    let mut runtime = CompassRuntime::new(
        config.clone(),
        ScriptedHeadings::new([5.0, -5.0, -50.0, 5.0]),
        SharedActivity::new(),
        sink.clone(),
    )
    .unwrap();

    runtime.tick().unwrap(); // seed
    runtime.tick().unwrap(); // first crossing at stock 2000 Hz
    config.update(|c| c.points[0].frequency_hz = 3000);
    runtime.tick().unwrap(); // retreat, applies new config
    runtime.tick().unwrap(); // second crossing at 3000 Hz

    let frequencies: Vec<u16> = sink.played().iter().map(|c| c.frequency_hz).collect();
    assert_eq!(frequencies, [2000, 3000]);
}
