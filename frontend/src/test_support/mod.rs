#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::pages::login::view_model::LoginServices;
    use crate::utils::browser::{Navigator, Notifier};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    pub struct RecordingNotifier {
        messages: RefCell<Vec<String>>,
    }

    impl RecordingNotifier {
        pub fn messages(&self) -> Vec<String> {
            self.messages.borrow().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    #[derive(Default)]
    pub struct RecordingNavigator {
        paths: RefCell<Vec<String>>,
    }

    impl RecordingNavigator {
        pub fn paths(&self) -> Vec<String> {
            self.paths.borrow().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.paths.borrow_mut().push(path.to_string());
        }
    }

    pub fn recording_services() -> (
        LoginServices,
        Rc<RecordingNotifier>,
        Rc<RecordingNavigator>,
    ) {
        let notifier = Rc::new(RecordingNotifier::default());
        let navigator = Rc::new(RecordingNavigator::default());
        let services = LoginServices {
            notifier: notifier.clone(),
            navigator: navigator.clone(),
        };
        (services, notifier, navigator)
    }
}
