// code-tour/src/checks.rs
//! Quick maintenance checks against the host project. These are advisory
//! diagnostics, not a CI gate: every failure mode (spawn error, non-zero
//! exit, timeout) is reported inline and the remaining checks still run.

use std::{
    io::{
        BufRead,
        Read,
        Write,
    },
    path::Path,
    process::{
        Command,
        ExitStatus,
        Stdio,
    },
    thread,
    time::{
        Duration,
        Instant,
    },
};

/// One maintenance action. `background` entries are launched detached after
/// an interactive confirmation instead of being waited on.
pub struct CheckSpec {
    pub description: &'static str,
    pub argv: &'static [&'static str],
    pub background: bool,
}

/// The fixed check sequence, run in order.
pub const CHECKS: &[CheckSpec] = &[
    CheckSpec {
        description: "Compile check",
        argv: &["cargo", "check"],
        background: false,
    },
    CheckSpec {
        description: "Format check",
        argv: &["cargo", "fmt", "--check"],
        background: false,
    },
    CheckSpec {
        description: "Start server (background)",
        argv: &["cargo", "run"],
        background: true,
    },
];

/// Worst-case stall bound for one foreground check.
pub const CHECK_TIMEOUT: Duration = Duration::from_secs(30);

/// Captured stdout/stderr are cut to this many characters before display.
const OUTPUT_CAP: usize = 500;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

const RULE: &str = "============================================================";

enum Outcome {
    Completed {
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },
    TimedOut,
}

/// Run the fixed check sequence against the project at `root`. `input` is
/// read only for the background-launch confirmation.
pub fn run_checks(
    out: &mut impl Write,
    input: &mut impl BufRead,
    root: &Path,
) -> std::io::Result<()> {
    writeln!(out, "\n{RULE}")?;
    writeln!(out, "Quick checks")?;
    writeln!(out, "{RULE}")?;
    run_sequence(out, input, root, CHECKS, CHECK_TIMEOUT)
}

fn run_sequence(
    out: &mut impl Write,
    input: &mut impl BufRead,
    root: &Path,
    checks: &[CheckSpec],
    timeout: Duration,
) -> std::io::Result<()> {
    for spec in checks {
        writeln!(out, "\n{}:", spec.description)?;
        writeln!(out, "Command: {}", spec.argv.join(" "))?;

        if spec.background {
            writeln!(out, "This keeps running after launch; stop it with Ctrl+C or pkill.")?;
            write!(out, "Continue? (y/N): ")?;
            out.flush()?;
            let mut answer = String::new();
            input.read_line(&mut answer)?;
            if !answer.trim().eq_ignore_ascii_case("y") {
                writeln!(out, "skipped")?;
                continue;
            }
            match spawn_detached(spec.argv, root) {
                Ok(()) => writeln!(out, "started in background")?,
                Err(e) => writeln!(out, "error: {e}")?,
            }
            continue;
        }

        match run_with_timeout(spec.argv, root, timeout) {
            Ok(Outcome::Completed { status, stdout, stderr }) => {
                if status.success() {
                    writeln!(out, "ok")?;
                    if !stdout.trim().is_empty() {
                        writeln!(out, "{}", truncate_chars(&stdout, OUTPUT_CAP))?;
                    }
                } else {
                    writeln!(out, "failed ({status})")?;
                    if !stderr.trim().is_empty() {
                        writeln!(out, "{}", truncate_chars(&stderr, OUTPUT_CAP))?;
                    }
                }
            }
            Ok(Outcome::TimedOut) => {
                writeln!(out, "timed out after {}s", timeout.as_secs())?;
            }
            Err(e) => writeln!(out, "error: {e}")?,
        }
    }
    Ok(())
}

/// Foreground run with a hard deadline. Stdout/stderr are drained on reader
/// threads while the child is polled with `try_wait` — a chatty child must
/// never block on a full pipe and get mistaken for a hang. The child is
/// killed once the deadline passes.
fn run_with_timeout(argv: &[&str], root: &Path, timeout: Duration) -> std::io::Result<Outcome> {
    let mut child = Command::new(argv[0])
        .args(&argv[1..])
        .current_dir(root)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let stdout_drain = spawn_drain(child.stdout.take());
    let stderr_drain = spawn_drain(child.stderr.take());

    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Outcome::Completed {
                status,
                stdout: join_drain(stdout_drain),
                stderr: join_drain(stderr_drain),
            });
        }
        if Instant::now() >= deadline {
            // best effort: the child may exit between the poll and the kill
            let _ = child.kill();
            let _ = child.wait();
            // readers see EOF once the child is gone
            drop(join_drain(stdout_drain));
            drop(join_drain(stderr_drain));
            return Ok(Outcome::TimedOut);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Slurp one pipe to the end on its own thread.
fn spawn_drain<R>(pipe: Option<R>) -> thread::JoinHandle<Vec<u8>>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        buf
    })
}

fn join_drain(handle: thread::JoinHandle<Vec<u8>>) -> String {
    let bytes = handle.join().unwrap_or_default();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Fire-and-forget launch: no pipes, no handle kept, nothing reaped. The
/// user owns the process from here.
fn spawn_detached(argv: &[&str], root: &Path) -> std::io::Result<()> {
    Command::new(argv[0])
        .args(&argv[1..])
        .current_dir(root)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

fn truncate_chars(s: &str, cap: usize) -> &str {
    match s.char_indices().nth(cap) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
