//! Mobile navigation drawer

/// Open/closed state of the mobile navigation drawer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Drawer {
    open: bool,
}

impl Drawer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the drawer; returns true if it was closed
    pub fn open(&mut self) -> bool {
        self.set(true)
    }

    /// Close the drawer; returns true if it was open
    pub fn close(&mut self) -> bool {
        self.set(false)
    }

    /// Flip the drawer and return the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    fn set(&mut self, open: bool) -> bool {
        let changed = self.open != open;
        self.open = open;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_report_changes() {
        let mut drawer = Drawer::new();
        assert!(drawer.open());
        assert!(!drawer.open());
        assert!(drawer.close());
        assert!(!drawer.close());
    }

    #[test]
    fn test_toggle() {
        let mut drawer = Drawer::new();
        assert!(drawer.toggle());
        assert!(drawer.is_open());
        assert!(!drawer.toggle());
    }
}
