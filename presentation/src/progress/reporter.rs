//! Progress reporting while an answer is being fetched

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use oneword_application::FetchProgressNotifier;
use oneword_domain::{Answer, Question, preview};
use std::sync::Mutex;
use std::time::Duration;

const SPINNER_TICK: Duration = Duration::from_millis(80);
const QUESTION_PREVIEW_LEN: usize = 48;

/// Spinner shown on stderr while the backend request is in flight
pub struct SpinnerProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn finish(&self, message: String) {
        let taken = self.spinner.lock().ok().and_then(|mut slot| slot.take());
        if let Some(pb) = taken {
            pb.finish_with_message(message);
        }
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchProgressNotifier for SpinnerProgress {
    fn on_request_start(&self, question: &Question, backend: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(backend.to_string());
        pb.set_message(preview(question.content(), QUESTION_PREVIEW_LEN));
        pb.enable_steady_tick(SPINNER_TICK);

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_answer(&self, answer: &Answer) {
        self.finish(format!("{} {}", "v".green(), answer));
    }

    fn on_failure(&self, message: &str) {
        self.finish(format!("{} {}", "x".red(), message));
    }
}
