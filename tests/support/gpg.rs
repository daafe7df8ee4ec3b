//! Isolated gpg home for interop tests.
//!
//! Every call passes `--homedir`, so the user's real key ring is never
//! touched and tests can run in parallel.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

pub struct GpgHome {
    pub dir: TempDir,
}

impl GpgHome {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create gpg home");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o700))
                .expect("failed to restrict gpg home");
        }
        Self { dir }
    }

    /// Run gpg with `args`, feeding `stdin`.
    pub fn run(&self, args: &[&str], stdin: &[u8]) -> Output {
        let mut child = Command::new("gpg")
            .arg("--homedir")
            .arg(self.dir.path())
            .args(["--batch", "--yes", "--quiet", "--trust-model", "always"])
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn gpg");

        child
            .stdin
            .take()
            .expect("gpg stdin")
            .write_all(stdin)
            .expect("failed to write to gpg");
        child.wait_with_output().expect("gpg did not finish")
    }

    /// Import key material, panicking on failure.
    pub fn import(&self, keys: &[u8]) {
        let output = self.run(&["--import"], keys);
        assert!(
            output.status.success(),
            "gpg --import failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
}
