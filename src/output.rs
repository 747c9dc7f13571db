use console::style;
use tracing::debug;

/// Destination for user-facing notices, errors and rendered output.
pub trait Reporter {
    fn notice(&self, message: &str);
    fn error(&self, message: &str);
    fn print(&self, text: &str);
}

/// Writes notices and errors to stderr and rendered output to stdout.
#[derive(Debug, Default)]
pub struct TerminalReporter;

impl Reporter for TerminalReporter {
    fn notice(&self, message: &str) {
        debug!(text = message, "output:notice");
        eprintln!("{} {}", style("Notice:").cyan().bold(), message);
    }

    fn error(&self, message: &str) {
        debug!(text = message, "output:error");
        eprintln!("{} {}", style("Error:").red().bold(), message);
    }

    fn print(&self, text: &str) {
        println!("{text}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn captured_logs(f: impl FnOnce()) -> String {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = capture.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_notice_keeps_event_name_and_text() {
        let logs = captured_logs(|| TerminalReporter.notice("Opening README in browser"));
        assert!(logs.contains("output:notice"), "{logs}");
        assert!(logs.contains("text=\"Opening README in browser\""), "{logs}");
    }

    #[test]
    fn test_error_keeps_event_name_and_text() {
        let logs = captured_logs(|| TerminalReporter.error("Unable to locate foo plugin."));
        assert!(logs.contains("output:error"), "{logs}");
        assert!(logs.contains("text=\"Unable to locate foo plugin.\""), "{logs}");
    }
}
