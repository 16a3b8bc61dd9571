//! Declarative entrance and hover transitions.
//!
//! A [`Motion`] describes where an element starts before it is revealed and
//! how it travels to its resting state. Rendering is plain inline CSS, so the
//! same descriptor works on the server (hidden state) and after hydration.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    FadeIn,
    SlideUp,
    SlideLeft,
    SlideRight,
    ZoomIn,
}

impl Transition {
    fn hidden_transform(self) -> &'static str {
        match self {
            Transition::FadeIn => "none",
            Transition::SlideUp => "translateY(40px)",
            Transition::SlideLeft => "translateX(60px)",
            Transition::SlideRight => "translateX(-60px)",
            Transition::ZoomIn => "scale(0.85)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    Spring,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "cubic-bezier(0.16, 1, 0.3, 1)",
            Easing::EaseInOut => "cubic-bezier(0.65, 0, 0.35, 1)",
            Easing::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    pub transition: Transition,
    pub easing: Easing,
    pub duration_ms: u32,
    pub delay_ms: u32,
    /// Extra delay per item when the motion is applied to a list.
    pub stagger_ms: u32,
}

impl Motion {
    pub const fn new(transition: Transition) -> Self {
        Self {
            transition,
            easing: Easing::EaseOut,
            duration_ms: 600,
            delay_ms: 0,
            stagger_ms: 0,
        }
    }

    pub const fn duration(mut self, ms: u32) -> Self {
        self.duration_ms = ms;
        self
    }

    pub const fn delay(mut self, ms: u32) -> Self {
        self.delay_ms = ms;
        self
    }

    pub const fn stagger(mut self, ms: u32) -> Self {
        self.stagger_ms = ms;
        self
    }

    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Copy of this motion delayed for the `index`th item of a list.
    pub fn staggered(self, index: usize) -> Self {
        let extra = self.stagger_ms.saturating_mul(index as u32);
        Self {
            delay_ms: self.delay_ms.saturating_add(extra),
            ..self
        }
    }

    pub fn style(&self, revealed: bool) -> String {
        let (opacity, transform) = if revealed {
            ("1", "none")
        } else {
            ("0", self.transition.hidden_transform())
        };
        format!(
            "opacity: {opacity}; transform: {transform}; transition: opacity {d}ms {e} {l}ms, transform {d}ms {e} {l}ms;",
            d = self.duration_ms,
            e = self.easing.css(),
            l = self.delay_ms,
        )
    }
}

pub const HERO_TEXT: Motion = Motion::new(Transition::SlideRight).duration(800);
pub const HERO_IMAGE: Motion = Motion::new(Transition::ZoomIn)
    .duration(900)
    .delay(200)
    .easing(Easing::Spring);
pub const SECTION_HEADING: Motion = Motion::new(Transition::SlideUp);
pub const CARD: Motion = Motion::new(Transition::SlideUp).delay(100).stagger(150);
pub const SKILL_BADGE: Motion = Motion::new(Transition::ZoomIn).duration(400).stagger(60);
pub const TIMELINE_ITEM: Motion = Motion::new(Transition::SlideLeft).stagger(200);
pub const FADE: Motion = Motion::new(Transition::FadeIn).duration(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hover {
    Lift,
    Grow,
    Glow,
}

impl Hover {
    pub fn class(self) -> &'static str {
        match self {
            Hover::Lift => "transition-transform duration-300 hover:-translate-y-2",
            Hover::Grow => "transition-transform duration-200 hover:scale-110",
            Hover::Glow => "transition-shadow duration-300 hover:shadow-xl hover:shadow-cyan-500/30",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_and_revealed_styles() {
        let hidden = SECTION_HEADING.style(false);
        assert!(hidden.starts_with("opacity: 0; transform: translateY(40px);"));
        let shown = SECTION_HEADING.style(true);
        assert!(shown.starts_with("opacity: 1; transform: none;"));
        assert!(shown.contains("600ms cubic-bezier(0.16, 1, 0.3, 1) 0ms"));
    }

    #[test]
    fn stagger_adds_per_item_delay() {
        assert_eq!(CARD.staggered(0).delay_ms, 100);
        assert_eq!(CARD.staggered(2).delay_ms, 400);
        assert_eq!(HERO_TEXT.staggered(5).delay_ms, 0);
    }

    #[test]
    fn builder_overrides_defaults() {
        let m = Motion::new(Transition::FadeIn)
            .duration(250)
            .delay(50)
            .easing(Easing::Linear);
        assert_eq!(
            m.style(true),
            "opacity: 1; transform: none; transition: opacity 250ms linear 50ms, transform 250ms linear 50ms;"
        );
    }
}
