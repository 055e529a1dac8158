//! Conversion from CLI options to the engine-facing request.

use crate::config::SharedOptions;
use drover_engine::BuildRequest;

impl SharedOptions {
    /// Build the request forwarded to every engine call this mode makes.
    pub fn to_request(&self) -> BuildRequest {
        let mut request = BuildRequest::new()
            .assume_tty(self.assume_tty)
            .delete_conflicting_outputs(self.delete_conflicting_outputs)
            .fail_on_severe(self.fail_on_severe)
            .low_resources_mode(self.low_resources_mode)
            .verbose(self.verbose);

        if let Some(key) = &self.config_key {
            request = request.config_key(key);
        }
        if let Some(dir) = &self.output_dir {
            request = request.output_dir(dir);
        }
        request
    }
}
