use colored::Colorize;
use gs1_forms::Notifier;

/// Prints rejection messages to stderr
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }
}
