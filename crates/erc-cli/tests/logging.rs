//! Captures log output from a real run. A global subscriber can only be
//! installed once per process, so this file holds a single test.

use std::fs;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing::level_filters::LevelFilter;

use erc_cli::config::RunConfig;
use erc_cli::logging::{LogConfig, LogFormat, REDACTED_VALUE, init_logging_with_writer};
use erc_cli::pipeline::run;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn trace_logs_redact_cell_values() {
    let capture = Capture::default();
    let sink = capture.clone();
    init_logging_with_writer(
        &LogConfig {
            level_filter: LevelFilter::TRACE,
            use_env_filter: false,
            with_ansi: false,
            format: LogFormat::Compact,
            ..LogConfig::default()
        },
        move || sink.clone(),
    );

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.csv");
    fs::write(
        &input,
        "Ship To Country,Ship To Phone,Buyer Name,Item Title\n\
         United States,555-1111,Jane Q Public,Lamp\n",
    )
    .unwrap();
    let config = RunConfig::default().with_overrides(Some(input), None);

    run(&config, true).unwrap();

    let logs = capture.contents();
    assert!(logs.contains("stage complete"));
    assert!(logs.contains("kept cell"));
    assert!(logs.contains(REDACTED_VALUE));
    assert!(!logs.contains("Jane Q"));
    assert!(!logs.contains("555-1111"));
}
