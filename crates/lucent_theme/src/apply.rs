//! Document application
//!
//! Writes a resolved theme to a [`StyleSink`] as CSS custom properties.
//! The sink is the single owner of applied document state; swapping in
//! [`MemorySink`] gives tests a recording double with no real document.
//!
//! Smooth application is an explicit two-step state machine: dim the root,
//! hold for [`FADE_HOLD`], then write every property and restore opacity.
//! A request arriving mid-fade supersedes the pending theme (latest wins,
//! queue depth 1) - it is never silently dropped.

use crate::resolver::ResolvedTheme;
use crate::tokens::SpacingToken;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Dim-to-apply hold during a smooth transition
pub const FADE_HOLD: Duration = Duration::from_millis(150);

/// Root opacity while dimmed
pub const FADE_OPACITY: f32 = 0.85;

impl ResolvedTheme {
    /// Emit the CSS custom property contract in stable order:
    /// `--color-*`, `--typography-*`, `--spacing-*`, `--animation-*`,
    /// `--effect-*`.
    pub fn css_variables(&self) -> Vec<(String, String)> {
        let mut vars = Vec::with_capacity(28);

        for (name, color) in self.colors.iter() {
            vars.push((format!("--color-{name}"), color.to_css()));
        }

        vars.push((
            "--typography-font-size".to_string(),
            self.typography.font_size.clone(),
        ));
        vars.push((
            "--typography-line-height".to_string(),
            format!("{}", self.typography.line_height),
        ));
        vars.push((
            "--typography-font-weight".to_string(),
            format!("{}", self.typography.font_weight),
        ));
        vars.push((
            "--typography-letter-spacing".to_string(),
            self.typography.letter_spacing.clone(),
        ));

        for &token in SpacingToken::all() {
            vars.push((
                format!("--spacing-{}", token.css_name()),
                format!("{}px", self.spacing.get(token)),
            ));
        }

        vars.push((
            "--animation-duration".to_string(),
            self.animation.duration_css(),
        ));
        vars.push((
            "--animation-easing".to_string(),
            self.animation.easing.to_css(),
        ));
        vars.push((
            "--animation-reduced-motion".to_string(),
            self.animation.reduced_motion.to_string(),
        ));

        vars.push(("--effect-blur".to_string(), self.effects.blur_css()));
        vars.push(("--effect-shadow".to_string(), self.effects.shadow.to_css()));
        vars.push((
            "--effect-brightness".to_string(),
            format!("{}", self.effects.brightness),
        ));
        vars.push((
            "--effect-contrast".to_string(),
            format!("{}", self.effects.contrast),
        ));

        vars
    }
}

/// The applied-configuration sink: whatever owns the document root.
///
/// Applying the same or a newer theme is always safe; implementations must
/// treat property writes as idempotent overwrites.
pub trait StyleSink {
    fn set_property(&mut self, name: &str, value: &str);
    fn remove_property(&mut self, name: &str);
    fn set_root_opacity(&mut self, opacity: f32);
}

/// Recording sink used by tests and headless hosts
pub struct MemorySink {
    properties: FxHashMap<String, String>,
    opacity: f32,
    writes: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            properties: FxHashMap::default(),
            opacity: 1.0,
            writes: 0,
        }
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Total number of property writes observed
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleSink for MemorySink {
    fn set_property(&mut self, name: &str, value: &str) {
        self.writes += 1;
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn remove_property(&mut self, name: &str) {
        self.properties.remove(name);
    }

    fn set_root_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }
}

/// Transition progress of the applier
enum TransitionState {
    Idle,
    Fading {
        since: Instant,
        pending: Arc<ResolvedTheme>,
    },
}

/// Writes resolved themes to a [`StyleSink`], one transition at a time.
///
/// Driven by `tick`: the owner calls it with the current instant until the
/// fade hold elapses and the pending theme lands. Reduced-motion themes and
/// non-smooth requests skip the fade entirely.
pub struct DocumentApplier<S: StyleSink> {
    sink: S,
    state: TransitionState,
    applied: Option<Arc<ResolvedTheme>>,
}

impl<S: StyleSink> DocumentApplier<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            state: TransitionState::Idle,
            applied: None,
        }
    }

    /// Request that `theme` become the applied document state.
    ///
    /// Immediate unless `smooth` is set and the theme does not request
    /// reduced motion. A smooth request during an in-flight fade replaces
    /// the pending theme without restarting the hold.
    pub fn apply(&mut self, theme: Arc<ResolvedTheme>, smooth: bool, now: Instant) {
        if !smooth || theme.animation.reduced_motion {
            if matches!(self.state, TransitionState::Fading { .. }) {
                // An immediate request cancels the fade outright
                self.sink.set_root_opacity(1.0);
                self.state = TransitionState::Idle;
            }
            self.write(&theme);
            self.applied = Some(theme);
            return;
        }

        match &mut self.state {
            TransitionState::Idle => {
                self.sink.set_root_opacity(FADE_OPACITY);
                self.state = TransitionState::Fading {
                    since: now,
                    pending: theme,
                };
            }
            TransitionState::Fading { pending, .. } => {
                tracing::debug!("superseding pending theme mid-transition");
                *pending = theme;
            }
        }
    }

    /// Advance the transition. Returns `true` if a theme landed this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        let TransitionState::Fading { since, pending } = &self.state else {
            return false;
        };
        if now.duration_since(*since) < FADE_HOLD {
            return false;
        }
        let theme = Arc::clone(pending);
        self.write(&theme);
        self.sink.set_root_opacity(1.0);
        self.applied = Some(theme);
        self.state = TransitionState::Idle;
        true
    }

    /// Instant at which the current fade can complete, if one is running
    pub fn fade_deadline(&self) -> Option<Instant> {
        match &self.state {
            TransitionState::Fading { since, .. } => Some(*since + FADE_HOLD),
            TransitionState::Idle => None,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, TransitionState::Fading { .. })
    }

    /// The most recently landed theme, if any
    pub fn applied(&self) -> Option<&Arc<ResolvedTheme>> {
        self.applied.as_ref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn write(&mut self, theme: &ResolvedTheme) {
        for (name, value) in theme.css_variables() {
            self.sink.set_property(&name, &value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::*;

    fn theme_with_weight(font_weight: u16) -> Arc<ResolvedTheme> {
        Arc::new(ResolvedTheme {
            colors: ColorTokens::default(),
            typography: TypographyTokens {
                font_weight,
                ..TypographyTokens::default()
            },
            spacing: SpacingTokens::default(),
            animation: AnimationTokens::default(),
            effects: EffectTokens::default(),
        })
    }

    fn reduced_motion_theme() -> Arc<ResolvedTheme> {
        Arc::new(ResolvedTheme {
            colors: ColorTokens::default(),
            typography: TypographyTokens::default(),
            spacing: SpacingTokens::default(),
            animation: AnimationTokens {
                duration: std::time::Duration::ZERO,
                easing: Easing::EaseInOut,
                reduced_motion: true,
            },
            effects: EffectTokens::default(),
        })
    }

    #[test]
    fn test_css_variable_contract_shape() {
        let vars = theme_with_weight(400).css_variables();
        assert_eq!(vars.len(), 28);
        assert_eq!(vars[0].0, "--color-primary");
        assert!(vars.iter().any(|(n, _)| n == "--spacing-xl"));
        assert!(vars.iter().any(|(n, v)| n == "--animation-duration" && v == "300ms"));
        assert!(vars.iter().any(|(n, v)| n == "--effect-blur" && v == "8px"));
    }

    #[test]
    fn test_immediate_apply_writes_through() {
        let mut applier = DocumentApplier::new(MemorySink::new());
        applier.apply(theme_with_weight(400), false, Instant::now());
        assert!(applier.applied().is_some());
        assert_eq!(applier.sink().opacity(), 1.0);
        assert_eq!(
            applier.sink().property("--typography-font-weight"),
            Some("400")
        );
    }

    #[test]
    fn test_smooth_apply_dims_then_lands_after_hold() {
        let mut applier = DocumentApplier::new(MemorySink::new());
        let start = Instant::now();
        applier.apply(theme_with_weight(400), true, start);
        assert!(applier.is_transitioning());
        assert_eq!(applier.sink().opacity(), FADE_OPACITY);
        assert!(applier.sink().is_empty());

        // Hold not yet elapsed
        assert!(!applier.tick(start + Duration::from_millis(100)));
        assert!(applier.sink().is_empty());

        assert!(applier.tick(start + FADE_HOLD));
        assert!(!applier.is_transitioning());
        assert_eq!(applier.sink().opacity(), 1.0);
        assert!(applier.applied().is_some());
    }

    #[test]
    fn test_mid_fade_request_supersedes_pending() {
        let mut applier = DocumentApplier::new(MemorySink::new());
        let start = Instant::now();
        applier.apply(theme_with_weight(400), true, start);
        applier.apply(theme_with_weight(700), true, start + Duration::from_millis(50));

        assert!(applier.tick(start + FADE_HOLD));
        // The later request won; the first was superseded, not queued behind
        assert_eq!(
            applier.sink().property("--typography-font-weight"),
            Some("700")
        );
        assert_eq!(
            applier.applied().unwrap().typography.font_weight,
            700
        );
    }

    #[test]
    fn test_reduced_motion_skips_fade() {
        let mut applier = DocumentApplier::new(MemorySink::new());
        applier.apply(reduced_motion_theme(), true, Instant::now());
        assert!(!applier.is_transitioning());
        assert!(applier.applied().is_some());
        assert_eq!(applier.sink().opacity(), 1.0);
    }

    #[test]
    fn test_immediate_request_cancels_fade() {
        let mut applier = DocumentApplier::new(MemorySink::new());
        let start = Instant::now();
        applier.apply(theme_with_weight(400), true, start);
        applier.apply(theme_with_weight(500), false, start + Duration::from_millis(10));
        assert!(!applier.is_transitioning());
        assert_eq!(applier.sink().opacity(), 1.0);
        assert_eq!(
            applier.sink().property("--typography-font-weight"),
            Some("500")
        );
    }
}
