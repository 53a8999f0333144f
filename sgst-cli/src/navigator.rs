//! Terminal renderings of navigation requests and notices.

use colored::Colorize;
use sgst_client::navigation::{ROUTE_HOME, ROUTE_LOGIN, ROUTE_TALLERES};
use sgst_client::{NavigateOptions, Navigator, Notice, NoticeLevel, Notifier};
use std::sync::atomic::{AtomicBool, Ordering};

/// Turns route changes into hints, and remembers what happened so the
/// session can be persisted accordingly.
#[derive(Debug, Default)]
pub struct CliNavigator {
    login_required: AtomicBool,
    taller_required: AtomicBool,
}

impl CliNavigator {
    /// A redirect to the login page happened: the stored cookies are dead.
    pub fn login_required(&self) -> bool {
        self.login_required.load(Ordering::Relaxed)
    }

    pub fn taller_required(&self) -> bool {
        self.taller_required.load(Ordering::Relaxed)
    }
}

impl Navigator for CliNavigator {
    fn navigate(&self, to: &str, _options: NavigateOptions) {
        match to {
            ROUTE_TALLERES => {
                if !self.taller_required.swap(true, Ordering::Relaxed) {
                    eprintln!("{} Run `sgst taller select <id>`", "→".cyan());
                }
            },
            ROUTE_LOGIN => eprintln!("{} Run `sgst login`", "→".cyan()),
            ROUTE_HOME => tracing::debug!("navigated home"),
            other => tracing::debug!("navigation to {} ignored", other),
        }
    }

    fn hard_redirect(&self, to: &str) {
        if to == ROUTE_LOGIN {
            if !self.login_required.swap(true, Ordering::Relaxed) {
                eprintln!("{} Session expired. Run `sgst login`", "✗".red());
            }
        } else {
            tracing::debug!("hard redirect to {} ignored", to);
        }
    }
}

#[derive(Debug, Default)]
pub struct CliNotifier {
    problem_shown: AtomicBool,
}

impl CliNotifier {
    /// An error or warning already reached the user.
    pub fn problem_shown(&self) -> bool {
        self.problem_shown.load(Ordering::Relaxed)
    }
}

impl Notifier for CliNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => println!("{} {}", "✓".green(), notice.message),
            NoticeLevel::Warning => {
                self.problem_shown.store(true, Ordering::Relaxed);
                eprintln!("{} {}", "!".yellow(), notice.message.yellow());
            },
            NoticeLevel::Error => {
                self.problem_shown.store(true, Ordering::Relaxed);
                eprintln!("{} {}", "✗".red(), notice.message.red());
            },
        }
    }
}
