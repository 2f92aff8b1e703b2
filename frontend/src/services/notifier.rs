use crate::helpers::show_toast;

/// Receiver of user-facing error and status messages.
pub trait Notifier {
    fn notify(&self, title: &str, description: &str);
}

impl<N: Notifier> Notifier for &N {
    fn notify(&self, title: &str, description: &str) {
        (**self).notify(title, description)
    }
}

/// Shows messages as toasts and mirrors them to the browser console.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ToastNotifier;

impl Notifier for ToastNotifier {
    fn notify(&self, title: &str, description: &str) {
        gloo_console::warn!(format!("{}: {}", title, description));
        show_toast(title, description);
    }
}
