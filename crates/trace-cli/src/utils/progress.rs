use carbontrace::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// A single stderr bar counting reconstructed candidates, with skipped candidates and
/// workflow messages printed above it.
#[derive(Clone)]
pub struct CliProgressHandler {
    bar: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let style = ProgressStyle::with_template("{msg:<20} [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");
        let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr())
            .with_style(style);

        Self {
            bar: Arc::new(Mutex::new(bar)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let bar = Arc::clone(&self.bar);

        Box::new(move |progress: Progress| {
            let Ok(bar) = bar.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::PhaseStart { name } => bar.set_message(name),
                Progress::TaskStart { total_steps } => {
                    bar.set_length(total_steps);
                    bar.set_position(0);
                }
                Progress::TaskIncrement => bar.inc(1),
                Progress::TaskFinish => bar.finish(),
                Progress::CandidateSkipped { index, reason } => {
                    bar.println(format!("  ⚠ Candidate {} skipped: {}", index + 1, reason));
                }
                Progress::Message(msg) => bar.println(format!("  {msg}")),
                Progress::PhaseFinish => {}
            }
        })
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn callback_tracks_a_selection_run() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        callback(Progress::PhaseStart {
            name: "Candidate Selection",
        });
        callback(Progress::TaskStart { total_steps: 10 });
        {
            let bar = handler.bar.lock().unwrap();
            assert_eq!(bar.message(), "Candidate Selection");
            assert_eq!(bar.length(), Some(10));
            assert_eq!(bar.position(), 0);
            assert!(!bar.is_finished());
        }

        callback(Progress::TaskIncrement);
        callback(Progress::CandidateSkipped {
            index: 0,
            reason: "degenerate geometry".to_string(),
        });
        callback(Progress::TaskIncrement);
        assert_eq!(handler.bar.lock().unwrap().position(), 2);

        callback(Progress::TaskFinish);
        callback(Progress::PhaseFinish);
        assert!(handler.bar.lock().unwrap().is_finished());
    }

    #[test]
    fn callback_is_thread_safe() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        thread::spawn(move || {
            callback(Progress::TaskStart { total_steps: 3 });
            callback(Progress::TaskIncrement);
        })
        .join()
        .unwrap();

        let bar = handler.bar.lock().unwrap();
        assert_eq!(bar.length(), Some(3));
        assert_eq!(bar.position(), 1);
    }
}
