pub mod console;

pub use console::ConsoleInputDriver;

use std::io;
use std::time::Duration;

use crossterm::event::Event;

/// Source of input events for the event loop. Abstracted so tests can
/// feed scripted events without a real terminal.
pub trait InputDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
    fn set_mouse_capture(&mut self, _enabled: bool) -> io::Result<()> {
        Ok(())
    }
}

impl<T: InputDriver + ?Sized> InputDriver for &mut T {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        (**self).poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        (**self).read()
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        (**self).set_mouse_capture(enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    struct Scripted;
    impl InputDriver for Scripted {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            Ok(true)
        }

        fn read(&mut self) -> io::Result<Event> {
            Ok(Event::Key(KeyEvent::new(
                KeyCode::Char('x'),
                KeyModifiers::NONE,
            )))
        }
    }

    #[test]
    fn blanket_impl_for_mut_ref_works() {
        let mut d = Scripted;
        let mut r: &mut Scripted = &mut d;
        assert!(r.poll(Duration::from_millis(0)).unwrap());
        let ev = r.read().unwrap();
        assert!(matches!(ev, Event::Key(k) if k.code == KeyCode::Char('x')));
    }
}
