//! Shell-wide state: the special parameters `$$`, `$?`, and `$!`.
//!
//! This plays the role the C original's file-scope globals play: `pid`,
//! `status`, and `bgpid` are fields of [`Shell`] instead, threaded through
//! the main loop, with their textual forms regenerated on each mutation
//! rather than cached across calls.

use smallsh_syntax::SpecialParams;

/// Process-wide shell state: the three special parameters and their textual
/// representations.
#[derive(Debug)]
pub struct Shell {
    pid: String,
    status: i32,
    status_text: String,
    bgpid: String,
}

impl Shell {
    /// Creates fresh shell state for process `pid`, with `status` at `0` and
    /// `bgpid` empty, as specified.
    pub fn new(pid: nix::unistd::Pid) -> Self {
        Shell {
            pid: pid.as_raw().to_string(),
            status: 0,
            status_text: "0".to_string(),
            bgpid: String::new(),
        }
    }

    /// The last foreground child's exit code (or 128+signal), as an integer.
    pub fn status(&self) -> i32 {
        self.status
    }

    /// Sets `$?` and regenerates its textual form.
    pub fn set_status(&mut self, status: i32) {
        self.status = status;
        self.status_text = status.to_string();
    }

    /// Sets `$!` to `pid`'s textual form.
    pub fn set_bgpid(&mut self, pid: nix::unistd::Pid) {
        self.bgpid = pid.as_raw().to_string();
    }

    /// Borrows the current special-parameter values for use by the expander.
    pub fn as_special_params(&self) -> SpecialParams<'_> {
        SpecialParams {
            pid: &self.pid,
            status: &self.status_text,
            bgpid: &self.bgpid,
        }
    }
}
