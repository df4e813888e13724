use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const SPINNER_TICK_MS: u64 = 80;

/// A stderr spinner shown while a screening run is in flight. The catalogs
/// are small, so a spinner rather than a step counter is enough.
pub fn screening_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner().with_message(message.to_string());
    pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_carries_its_message() {
        let pb = screening_spinner("screening");
        assert_eq!(pb.message(), "screening");
        pb.finish_and_clear();
        assert!(pb.is_finished());
    }
}
