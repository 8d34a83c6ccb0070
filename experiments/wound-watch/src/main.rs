use medic_base::{init_stdout_logger, log, log_fatal};
use medic_guidance::{GuidanceError, GuidanceMonitor, MonitorConfig, RecordingEvent, RecordingState};
use medic_speech::{SpeechError, SpeechSpeaker, Utterance};
use medic_vision::{CameraConfig, ClassificationResult, ReplaySource, RuleSet};
use std::time::Duration;
use tokio::sync::{mpsc, watch};

/// Logs advisories instead of synthesizing them.
struct LogSpeaker;

impl SpeechSpeaker for LogSpeaker {
    async fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError> {
        log::info!("speak (rate {}): {}", utterance.rate, utterance.text);
        Ok(())
    }

    fn cancel(&mut self) {
        log::debug!("speech cancelled");
    }
}

fn parse_interval(arg: Option<&String>) -> Duration {
    let Some(arg) = arg else {
        return MonitorConfig::default().interval;
    };
    match arg.parse::<u64>() {
        Ok(ms) if ms > 0 => Duration::from_millis(ms),
        _ => log_fatal!("invalid interval '{}', expected milliseconds", arg),
    }
}

fn parse_rule_set(arg: Option<&String>) -> RuleSet {
    match arg.map(String::as_str) {
        None => RuleSet::Extended,
        Some("legacy") => RuleSet::Legacy,
        Some(other) => log_fatal!("unknown rule set '{}', expected 'legacy'", other),
    }
}

/// Prints each result as one JSON line.
async fn print_results(mut results: mpsc::Receiver<ClassificationResult>) {
    while let Some(result) = results.recv().await {
        match serde_json::to_string(&result) {
            Ok(line) => println!("{}", line),
            Err(error) => log::error!("could not serialize result: {}", error),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_stdout_logger();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <image-dir> [interval-ms] [legacy]", args[0]);
        std::process::exit(1);
    }

    let config = MonitorConfig {
        interval: parse_interval(args.get(2)),
        rule_set: parse_rule_set(args.get(3)),
        ..Default::default()
    };

    let mut state = RecordingState::default();
    let source = match ReplaySource::open(&args[1], &CameraConfig::default()) {
        Ok(source) => source,
        Err(error) => {
            state = state.apply(RecordingEvent::CameraFailed);
            log::error!("{} ({}, {:?})", medic_guidance::CAMERA_ERROR_MESSAGE, error, state);
            return Err(GuidanceError::from(error).into());
        }
    };

    state = state.apply(RecordingEvent::Start);
    let (_state_tx, state_rx) = watch::channel(state);
    let (results_tx, results_rx) = mpsc::channel(16);
    let printer = tokio::spawn(print_results(results_rx));

    log::info!("watching {} images, press Ctrl-C to stop", source.len());
    let mut monitor = GuidanceMonitor::new(source, LogSpeaker, config)?;

    let outcome = tokio::select! {
        outcome = monitor.run(state_rx, results_tx) => outcome,
        _ = tokio::signal::ctrl_c() => {
            state = state.apply(RecordingEvent::Stop);
            log::info!("stopping, recording state {:?}", state);
            Ok(())
        }
    };
    // results sender is gone with the run future, so the printer drains and ends
    printer
        .await
        .map_err(|error| GuidanceError::Channel(error.to_string()))?;

    outcome?;
    Ok(())
}
