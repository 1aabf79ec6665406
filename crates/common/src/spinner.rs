use cliclack::{spinner, ProgressBar};

use crate::{config::global_config, logger};

/// A terminal spinner that degrades to plain log lines in verbose mode, so
/// captured command output is not interleaved with spinner redraws.
pub struct Spinner {
    msg: String,
    bar: Option<ProgressBar>,
}

impl Spinner {
    pub fn new(msg: &str) -> Self {
        if global_config().verbose {
            logger::info(msg);
            return Self {
                msg: msg.to_owned(),
                bar: None,
            };
        }
        let bar = spinner();
        bar.start(msg);
        Self {
            msg: msg.to_owned(),
            bar: Some(bar),
        }
    }

    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.stop(self.msg);
        }
    }

    pub fn fail(self) {
        if let Some(bar) = self.bar {
            bar.error(self.msg);
        }
    }
}
