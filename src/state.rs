/// Shell-level flags that sit outside the window registry: boot splash,
/// lock screen, and which system overlay is currently open. Overlays are
/// mutually exclusive; opening one closes the others.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemState {
    booting: bool,
    locked: bool,
    launcher_open: bool,
    power_menu_open: bool,
    help_open: bool,
}

impl SystemState {
    pub fn new() -> Self {
        Self {
            booting: true,
            locked: false,
            launcher_open: false,
            power_menu_open: false,
            help_open: false,
        }
    }

    pub fn booting(&self) -> bool {
        self.booting
    }

    pub fn set_booting(&mut self, booting: bool) {
        self.booting = booting;
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
        if locked {
            self.close_overlays();
        }
    }

    pub fn launcher_open(&self) -> bool {
        self.launcher_open
    }

    pub fn set_launcher_open(&mut self, open: bool) {
        self.close_overlays();
        self.launcher_open = open;
    }

    pub fn toggle_launcher(&mut self) {
        let next = !self.launcher_open;
        self.set_launcher_open(next);
    }

    pub fn power_menu_open(&self) -> bool {
        self.power_menu_open
    }

    pub fn set_power_menu_open(&mut self, open: bool) {
        self.close_overlays();
        self.power_menu_open = open;
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn set_help_open(&mut self, open: bool) {
        self.close_overlays();
        self.help_open = open;
    }

    pub fn any_overlay_open(&self) -> bool {
        self.launcher_open || self.power_menu_open || self.help_open
    }

    fn close_overlays(&mut self) {
        self.launcher_open = false;
        self.power_menu_open = false;
        self.help_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boots_then_settles() {
        let mut s = SystemState::new();
        assert!(s.booting());
        s.set_booting(false);
        assert!(!s.booting());
        assert!(!s.any_overlay_open());
    }

    #[test]
    fn overlays_are_mutually_exclusive() {
        let mut s = SystemState::new();
        s.set_launcher_open(true);
        s.set_power_menu_open(true);
        assert!(!s.launcher_open());
        assert!(s.power_menu_open());
        s.set_help_open(true);
        assert!(!s.power_menu_open());
        assert!(s.help_open());
    }

    #[test]
    fn locking_closes_open_overlays() {
        let mut s = SystemState::new();
        s.set_launcher_open(true);
        s.set_locked(true);
        assert!(s.locked());
        assert!(!s.any_overlay_open());
    }
}
