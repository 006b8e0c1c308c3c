// Round stopwatch shown on the HUD

/// Free-running stopwatch driven by frame time
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    elapsed: f32,
    running: bool,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to zero and start counting
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.running = true;
    }

    /// Freeze the current reading
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn update(&mut self, dt: f32) {
        if self.running {
            self.elapsed += dt;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Seconds with two decimals
    pub fn text(&self) -> String {
        format!("{:.2}", self.elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_idle_until_started() {
        let mut watch = Stopwatch::new();
        watch.update(1.0);
        assert_eq!(watch.text(), "0.00");
    }

    #[test]
    fn test_start_resets_and_runs() {
        let mut watch = Stopwatch::new();
        watch.start();
        watch.update(1.5);
        assert_relative_eq!(watch.elapsed(), 1.5);

        watch.start();
        assert_eq!(watch.elapsed(), 0.0);
        watch.update(0.25);
        assert_eq!(watch.text(), "0.25");
    }

    #[test]
    fn test_stop_freezes() {
        let mut watch = Stopwatch::new();
        watch.start();
        watch.update(2.0);
        watch.stop();
        watch.update(5.0);
        assert!(!watch.is_running());
        assert_eq!(watch.text(), "2.00");
    }
}
