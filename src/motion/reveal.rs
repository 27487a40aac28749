use crate::config::SiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    Full,
    /// `prefers-reduced-motion: reduce`
    Reduced,
}

/// Timing shared by every reveal on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealMotion {
    pub duration_ms: u32,
    pub offset_px: f64,
    pub preference: MotionPreference,
}

impl RevealMotion {
    pub fn from_config(config: &SiteConfig, preference: MotionPreference) -> Self {
        Self {
            duration_ms: config.reveal_duration_ms,
            offset_px: config.reveal_offset_px,
            preference,
        }
    }

    pub fn with_offset(mut self, offset_px: f64) -> Self {
        self.offset_px = offset_px;
        self
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn style(&self, revealed: bool, delay_ms: u32) -> RevealStyle {
        let reduced = self.preference == MotionPreference::Reduced;
        RevealStyle {
            opacity: if revealed { 1.0 } else { 0.0 },
            translate_y: if revealed || reduced { 0.0 } else { self.offset_px },
            duration_ms: if reduced { 0 } else { self.duration_ms },
            delay_ms: if reduced { 0 } else { delay_ms },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    pub translate_y: f64,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl RevealStyle {
    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px); transition: opacity {d}ms ease-out, transform {d}ms ease-out; transition-delay: {}ms;",
            self.opacity,
            self.translate_y,
            self.delay_ms,
            d = self.duration_ms,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn motion(preference: MotionPreference) -> RevealMotion {
        RevealMotion {
            duration_ms: 700,
            offset_px: 20.0,
            preference,
        }
    }

    #[test]
    fn hidden_then_revealed() {
        let m = motion(MotionPreference::Full);
        let hidden = m.style(false, 300);
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.translate_y, 20.0);
        assert_eq!(hidden.delay_ms, 300);

        let shown = m.style(true, 300);
        assert_eq!(shown.opacity, 1.0);
        assert_eq!(shown.translate_y, 0.0);
        assert_eq!(shown.duration_ms, 700);
    }

    #[test]
    fn reduced_motion_collapses_timing() {
        let shown = motion(MotionPreference::Reduced).style(true, 500);
        assert_eq!(shown.duration_ms, 0);
        assert_eq!(shown.delay_ms, 0);
        assert_eq!(shown.translate_y, 0.0);

        let hidden = motion(MotionPreference::Reduced).style(false, 500);
        assert_eq!(hidden.translate_y, 0.0);
    }

    #[test]
    fn css_carries_every_property() {
        let css = motion(MotionPreference::Full).style(false, 150).css();
        assert_eq!(
            css,
            "opacity: 0; transform: translateY(20px); transition: opacity 700ms ease-out, transform 700ms ease-out; transition-delay: 150ms;"
        );
    }
}
