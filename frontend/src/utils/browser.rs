use web_sys::Window;

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn alert(message: &str) -> Result<(), String> {
    window()?
        .alert_with_message(message)
        .map_err(|_| "Failed to show alert".to_string())
}

pub fn set_location(path: &str) -> Result<(), String> {
    window()?
        .location()
        .set_href(path)
        .map_err(|_| format!("Failed to navigate to {}", path))
}

/// Shows a message the user has to acknowledge.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Issues full-page navigation commands.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        if let Err(err) = alert(message) {
            log::error!("{}: {}", err, message);
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&self, path: &str) {
        if let Err(err) = set_location(path) {
            log::error!("{}", err);
        }
    }
}
