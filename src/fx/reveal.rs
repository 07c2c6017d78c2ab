use crate::{
    animation::{ease::Ease, tween::Tween},
    foundation::{core::Vec2, math::lerp},
    scrub::region::ScrollRegion,
};

const TITLE_FADE_FRACTION: f64 = 0.3;
const TITLE_SHIFT_X: f64 = -50.0;
const SECTION_TRIGGER_FRACTION: f64 = 0.85;
const SECTION_RISE: f64 = 30.0;
const SECTION_DURATION: f64 = 1.2;

/// Opacity and translation of one revealed element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    pub offset: Vec2,
}

/// Landing title that fades and slides left over the first part of the hero region.
///
/// Scrubbed: the style is a pure function of scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TitleFade {
    region: ScrollRegion,
}

impl TitleFade {
    /// Fade over the first 30% of a hero element at `top` with `height`.
    pub fn new(hero_top: f64, hero_height: f64) -> Self {
        Self {
            region: ScrollRegion::leading_fraction(hero_top, hero_height, TITLE_FADE_FRACTION),
        }
    }

    pub fn style_at(&self, scroll_y: f64) -> RevealStyle {
        let p = self.region.progress(scroll_y);
        RevealStyle {
            opacity: 1.0 - p,
            offset: Vec2::new(lerp(0.0, TITLE_SHIFT_X, p), 0.0),
        }
    }
}

/// Content element that rises and fades in once its top crosses 85% of the viewport.
#[derive(Clone, Copy, Debug)]
pub struct SectionReveal {
    top: f64,
    triggered: bool,
    progress: Tween,
}

impl SectionReveal {
    /// Element whose top edge sits at document offset `top`.
    pub fn new(top: f64) -> Self {
        Self {
            top,
            triggered: false,
            progress: Tween::settled(0.0),
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    /// Start the reveal once the element top reaches 85% of the viewport height. Fires once.
    pub fn on_scroll(&mut self, scroll_y: f64, viewport_height: f64) -> bool {
        if self.triggered {
            return false;
        }
        if scroll_y + viewport_height * SECTION_TRIGGER_FRACTION >= self.top {
            self.triggered = true;
            self.progress = Tween::new(0.0, 1.0, SECTION_DURATION, Ease::OutCubic);
            return true;
        }
        false
    }

    pub fn tick(&mut self, dt: f64) -> RevealStyle {
        if self.triggered {
            self.progress.advance(dt);
        }
        self.style()
    }

    pub fn style(&self) -> RevealStyle {
        let t = self.progress.value();
        RevealStyle {
            opacity: t,
            offset: Vec2::new(0.0, lerp(SECTION_RISE, 0.0, t)),
        }
    }
}

/// Every scroll-triggered fade on the page, registered at boot.
#[derive(Clone, Debug)]
pub struct RevealSet {
    pub title: TitleFade,
    pub sections: Vec<SectionReveal>,
}

/// Styles for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealFrame {
    pub title: RevealStyle,
    pub sections: Vec<RevealStyle>,
}

impl RevealSet {
    pub fn new(title: TitleFade, section_tops: &[f64]) -> Self {
        Self {
            title,
            sections: section_tops.iter().copied().map(SectionReveal::new).collect(),
        }
    }

    /// Feed a scroll position; returns how many sections were triggered by it.
    pub fn on_scroll(&mut self, scroll_y: f64, viewport_height: f64) -> usize {
        self.sections
            .iter_mut()
            .map(|s| s.on_scroll(scroll_y, viewport_height))
            .filter(|&hit| hit)
            .count()
    }

    pub fn tick(&mut self, scroll_y: f64, dt: f64) -> RevealFrame {
        RevealFrame {
            title: self.title.style_at(scroll_y),
            sections: self.sections.iter_mut().map(|s| s.tick(dt)).collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fx/reveal.rs"]
mod tests;
