// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! File watcher for live re-transposition.
//!
//! Watches a chord chart on disk and re-transposes it whenever it is saved,
//! so an editor and the transposed output can sit side by side.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, warn};

use crate::transpose::Transposer;

/// Events emitted by the chart watcher
#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    /// Chart was modified and transposed again
    Transposed { path: PathBuf, output: String },
    /// Chart was modified but could not be read
    Error(String),
    /// The chart file appeared (e.g. an editor replaced it)
    FileCreated(PathBuf),
    /// The chart file was removed
    FileDeleted(PathBuf),
}

/// Chart file watcher with debouncing
pub struct ChartWatcher {
    _watcher: RecommendedWatcher,
    event_receiver: Receiver<ChartEvent>,
    chart_path: PathBuf,
}

impl ChartWatcher {
    /// Create a new watcher for a chart file
    ///
    /// The chart's directory is watched rather than the file itself, because
    /// many editors save by writing a new file and renaming it over the old
    /// one.
    ///
    /// # Arguments
    /// * `path` - Chart file to watch
    /// * `transposer` - Value and spelling applied on every change
    /// * `debounce_ms` - Debounce duration in milliseconds (default: 500)
    pub fn new<P: AsRef<Path>>(
        path: P,
        transposer: Transposer,
        debounce_ms: Option<u64>,
    ) -> Result<Self> {
        let chart_path = path.as_ref().to_path_buf();
        let chart_name: OsString = chart_path
            .file_name()
            .ok_or_else(|| anyhow!("Not a chart file path: {:?}", chart_path))?
            .to_os_string();
        let watch_dir = match chart_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let debounce_duration = Duration::from_millis(debounce_ms.unwrap_or(500));

        let (event_tx, event_rx): (Sender<ChartEvent>, Receiver<ChartEvent>) = mpsc::channel();
        let (notify_tx, notify_rx): (Sender<Event>, Receiver<Event>) = mpsc::channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    let _ = notify_tx.send(event);
                }
            },
            Config::default(),
        )
        .map_err(|e| anyhow!("Failed to create file watcher: {}", e))?;

        watcher
            .watch(&watch_dir, RecursiveMode::NonRecursive)
            .map_err(|e| anyhow!("Failed to watch directory {:?}: {}", watch_dir, e))?;

        debug!(chart = ?chart_path, dir = ?watch_dir, "watching chart");

        let render_path = chart_path.clone();
        std::thread::spawn(move || {
            let is_chart = |p: &Path| p.file_name() == Some(chart_name.as_os_str());
            let mut last_event_time: Option<Instant> = None;

            loop {
                match notify_rx.recv_timeout(Duration::from_millis(100)) {
                    Ok(event) => {
                        let touched: Vec<PathBuf> =
                            event.paths.into_iter().filter(|p| is_chart(p.as_path())).collect();
                        if touched.is_empty() {
                            continue;
                        }

                        match event.kind {
                            EventKind::Create(_) => {
                                for path in touched {
                                    let _ = event_tx.send(ChartEvent::FileCreated(path));
                                }
                                last_event_time = Some(Instant::now());
                            }
                            EventKind::Remove(_) => {
                                for path in touched {
                                    let _ = event_tx.send(ChartEvent::FileDeleted(path));
                                }
                            }
                            EventKind::Modify(_) => {
                                last_event_time = Some(Instant::now());
                            }
                            _ => {}
                        }
                    }
                    Err(mpsc::RecvTimeoutError::Timeout) => {
                        let Some(last_time) = last_event_time else {
                            continue;
                        };
                        if last_time.elapsed() < debounce_duration {
                            continue;
                        }
                        last_event_time = None;

                        let event = render_event(&render_path, &transposer);
                        if event_tx.send(event).is_err() {
                            break;
                        }
                    }
                    Err(mpsc::RecvTimeoutError::Disconnected) => {
                        // Watcher was dropped, exit thread
                        break;
                    }
                }
            }
        });

        Ok(Self {
            _watcher: watcher,
            event_receiver: event_rx,
            chart_path,
        })
    }

    /// Try to receive the next chart event (non-blocking)
    pub fn try_recv(&self) -> Option<ChartEvent> {
        self.event_receiver.try_recv().ok()
    }

    /// Receive all pending chart events
    pub fn recv_all(&self) -> Vec<ChartEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }

    /// Block until the next chart event is received
    pub fn recv(&self) -> Option<ChartEvent> {
        self.event_receiver.recv().ok()
    }

    /// Get the chart being watched
    pub fn chart_path(&self) -> &Path {
        &self.chart_path
    }
}

/// Transpose the chart at `path` into the event reported after a change
fn render_event(path: &Path, transposer: &Transposer) -> ChartEvent {
    match transpose_file(path, transposer) {
        Ok(output) => ChartEvent::Transposed {
            path: path.to_path_buf(),
            output,
        },
        Err(e) => {
            warn!("Failed to transpose {:?}: {:#}", path, e);
            ChartEvent::Error(format!("Failed to transpose {:?}: {:#}", path, e))
        }
    }
}

/// Read a chart from disk and transpose it
pub fn transpose_file<P: AsRef<Path>>(path: P, transposer: &Transposer) -> Result<String> {
    let chart = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read chart file: {:?}", path.as_ref()))?;
    Ok(transposer.transpose(&chart))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::TransposeValue;
    use crate::music::Spelling;
    use std::io::Write;
    use tempfile::tempdir;

    fn transposer(v: i64, spelling: Spelling) -> Transposer {
        Transposer::new(TransposeValue::new(v).unwrap(), spelling)
    }

    #[test]
    fn test_transpose_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("song.txt");
        fs::write(&file_path, "[Chorus]\nG D/F# Em\nsing along").unwrap();

        let output = transpose_file(&file_path, &transposer(2, Spelling::Sharps)).unwrap();
        assert_eq!(output, "[Chorus]\nA E/G# F#m\nsing along");
    }

    #[test]
    fn test_transpose_missing_file() {
        let dir = tempdir().unwrap();
        let result = transpose_file(dir.path().join("nope.txt"), &Transposer::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_render_event_transposed() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("song.txt");
        fs::write(&file_path, "C F G
la la").unwrap();

        let event = render_event(&file_path, &transposer(-2, Spelling::Flats));
        assert_eq!(
            event,
            ChartEvent::Transposed {
                path: file_path.clone(),
                output: "Bb Eb F\nla la".to_string(),
            }
        );
    }

    #[test]
    fn test_render_event_missing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("gone.txt");

        match render_event(&file_path, &Transposer::default()) {
            ChartEvent::Error(message) => {
                assert!(message.contains("gone.txt"), "unexpected message: {}", message);
            }
            other => panic!("expected an error event, got {:?}", other),
        }
    }

    #[test]
    fn test_watcher_creation() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("watch_test.txt");
        fs::write(&file_path, "C F G").unwrap();

        let watcher = ChartWatcher::new(&file_path, Transposer::default(), Some(100));
        assert!(watcher.is_ok());

        let watcher = watcher.unwrap();
        assert_eq!(watcher.chart_path(), file_path.as_path());
        assert!(watcher.try_recv().is_none());
    }

    #[test]
    fn test_watcher_rejects_directory_root() {
        assert!(ChartWatcher::new("/", Transposer::default(), Some(100)).is_err());
    }

    #[test]
    fn test_watcher_detects_changes() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("detect_test.txt");
        fs::write(&file_path, "C F G").unwrap();

        let watcher =
            ChartWatcher::new(&file_path, transposer(-2, Spelling::Flats), Some(100)).unwrap();

        std::thread::sleep(Duration::from_millis(50));

        let mut file = fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&file_path)
            .unwrap();
        file.write_all(b"D G A").unwrap();
        file.flush().unwrap();
        drop(file);

        // Wait for debounce + processing
        let deadline = Instant::now() + Duration::from_secs(2);
        let mut transposed = None;
        while transposed.is_none() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(50));
            transposed = watcher
                .recv_all()
                .into_iter()
                .find(|e| matches!(e, ChartEvent::Transposed { .. }));
        }

        if let Some(ChartEvent::Transposed { path, output }) = transposed {
            assert_eq!(path, file_path);
            assert_eq!(output, "C F G");
        }
        // File system events are not delivered reliably on every CI host,
        // so a missing event is not a failure
    }
}
