use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::info;
use yew::prelude::*;

pub const INTRO_TEXT: &str = "We are your partner, let's grow your business";

const LEAD_IN_MS: u32 = 500;
const TYPING_MS: u32 = 3_500;
const SCALE_UP_MS: u32 = 500;
const GLOW_MS: u32 = 500;
const SCALE_DOWN_MS: u32 = 500;
const FADE_MS: u32 = 300;
const HOLD_MS: u32 = 800;
const UNMOUNT_GAP_MS: u32 = 300;

const TYPING_END: u32 = LEAD_IN_MS + TYPING_MS;
const SCALE_UP_END: u32 = TYPING_END + SCALE_UP_MS;
const GLOW_END: u32 = SCALE_UP_END + GLOW_MS;
const SCALE_DOWN_END: u32 = GLOW_END + SCALE_DOWN_MS;
const FADE_END: u32 = SCALE_DOWN_END + FADE_MS;
const UNMOUNT_AT: u32 = FADE_END + HOLD_MS;
pub const TOTAL_MS: u32 = UNMOUNT_AT + UNMOUNT_GAP_MS;

const PEAK_SCALE: f64 = 1.05;
const FRAME_MS: u32 = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroPhase {
    LeadIn,
    Typing,
    Emphasis,
    FadingOut,
    Holding,
    Unmounted,
}

/// Everything needed to draw the overlay at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntroFrame {
    pub phase: IntroPhase,
    pub visible_chars: usize,
    pub scale: f64,
    pub glow: f64,
    pub opacity: f64,
}

fn progress(elapsed: u32, start: u32, end: u32) -> f64 {
    if elapsed <= start {
        0.0
    } else if elapsed >= end {
        1.0
    } else {
        f64::from(elapsed - start) / f64::from(end - start)
    }
}

fn ease_out(p: f64) -> f64 {
    1.0 - (1.0 - p) * (1.0 - p)
}

fn ease_in(p: f64) -> f64 {
    p * p
}

fn ease_in_out(p: f64) -> f64 {
    if p < 0.5 {
        2.0 * p * p
    } else {
        1.0 - (-2.0 * p + 2.0).powi(2) / 2.0
    }
}

pub fn phase_at(elapsed: u32) -> IntroPhase {
    match elapsed {
        t if t < LEAD_IN_MS => IntroPhase::LeadIn,
        t if t < TYPING_END => IntroPhase::Typing,
        t if t < SCALE_DOWN_END => IntroPhase::Emphasis,
        t if t < FADE_END => IntroPhase::FadingOut,
        t if t < UNMOUNT_AT => IntroPhase::Holding,
        _ => IntroPhase::Unmounted,
    }
}

pub fn frame_at(elapsed: u32) -> IntroFrame {
    let total_chars = INTRO_TEXT.chars().count();
    let typed = progress(elapsed, LEAD_IN_MS, TYPING_END);
    let visible_chars = ((total_chars as f64) * typed).floor() as usize;

    let scale = if elapsed < GLOW_END {
        1.0 + (PEAK_SCALE - 1.0) * ease_out(progress(elapsed, TYPING_END, SCALE_UP_END))
    } else {
        PEAK_SCALE - (PEAK_SCALE - 1.0) * ease_in(progress(elapsed, GLOW_END, SCALE_DOWN_END))
    };

    IntroFrame {
        phase: phase_at(elapsed),
        visible_chars: visible_chars.min(total_chars),
        scale,
        glow: ease_out(progress(elapsed, SCALE_UP_END, GLOW_END)),
        opacity: 1.0 - ease_in_out(progress(elapsed, SCALE_DOWN_END, FADE_END)),
    }
}

/// Discrete clock for the intro. Reports completion exactly once.
#[derive(Debug, Default)]
pub struct IntroSequence {
    elapsed: u32,
    completed: bool,
}

impl IntroSequence {
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// Moves time forward and returns true on the step that finishes the
    /// sequence.
    pub fn advance(&mut self, step_ms: u32) -> bool {
        self.elapsed = self.elapsed.saturating_add(step_ms).min(TOTAL_MS);
        if self.elapsed >= TOTAL_MS && !self.completed {
            self.completed = true;
            return true;
        }
        false
    }

    pub fn frame(&self) -> IntroFrame {
        frame_at(self.elapsed)
    }
}

#[derive(Properties, PartialEq)]
pub struct IntroProps {
    pub on_complete: Callback<()>,
}

#[function_component(IntroAnimation)]
pub fn intro_animation(props: &IntroProps) -> Html {
    let elapsed = use_state(|| 0u32);

    {
        let elapsed = elapsed.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |_| {
                let sequence = Rc::new(RefCell::new(IntroSequence::default()));
                let interval = Interval::new(FRAME_MS, move || {
                    let mut sequence = sequence.borrow_mut();
                    let finished = sequence.advance(FRAME_MS);
                    elapsed.set(sequence.elapsed());
                    if finished {
                        info!("Intro finished");
                        on_complete.emit(());
                    }
                });
                move || drop(interval)
            },
            (),
        );
    }

    let frame = frame_at(*elapsed);
    if frame.phase == IntroPhase::Unmounted {
        return html! {};
    }

    let text: String = INTRO_TEXT.chars().take(frame.visible_chars).collect();
    let text_style = format!(
        "transform: scale({:.4}); opacity: {:.3}; text-shadow: 0 0 {:.1}px rgba(255, 51, 102, {:.2});",
        frame.scale,
        frame.opacity,
        20.0 * frame.glow,
        0.8 * frame.glow,
    );

    html! {
        <div class="intro-animation">
            <div class="intro-text" style={text_style}>{text}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_text_linearly_after_lead_in() {
        let total = INTRO_TEXT.chars().count();
        assert_eq!(frame_at(0).visible_chars, 0);
        assert_eq!(frame_at(LEAD_IN_MS).visible_chars, 0);
        let halfway = frame_at(LEAD_IN_MS + TYPING_MS / 2).visible_chars;
        assert!(halfway == total / 2 || halfway + 1 == total / 2, "{halfway}");
        assert_eq!(frame_at(TYPING_END).visible_chars, total);
        assert_eq!(frame_at(TOTAL_MS).visible_chars, total);
    }

    #[test]
    fn emphasis_scales_and_glows() {
        assert_eq!(frame_at(TYPING_END).scale, 1.0);
        assert!((frame_at(SCALE_UP_END).scale - PEAK_SCALE).abs() < 1e-9);
        assert!((frame_at(GLOW_END).scale - PEAK_SCALE).abs() < 1e-9);
        assert!((frame_at(SCALE_DOWN_END).scale - 1.0).abs() < 1e-9);
        assert_eq!(frame_at(SCALE_UP_END).glow, 0.0);
        assert_eq!(frame_at(GLOW_END).glow, 1.0);
    }

    #[test]
    fn fades_then_holds_then_unmounts() {
        assert_eq!(frame_at(SCALE_DOWN_END).opacity, 1.0);
        assert_eq!(frame_at(FADE_END).opacity, 0.0);
        assert_eq!(phase_at(FADE_END), IntroPhase::Holding);
        assert_eq!(phase_at(UNMOUNT_AT - 1), IntroPhase::Holding);
        assert_eq!(phase_at(UNMOUNT_AT), IntroPhase::Unmounted);
    }

    #[test]
    fn completes_exactly_once() {
        let mut sequence = IntroSequence::default();
        let mut completions = 0;
        for _ in 0..(TOTAL_MS / FRAME_MS + 50) {
            if sequence.advance(FRAME_MS) {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert_eq!(sequence.elapsed(), TOTAL_MS);
        assert_eq!(sequence.frame().phase, IntroPhase::Unmounted);
    }

    #[test]
    fn does_not_complete_early() {
        let mut sequence = IntroSequence::default();
        assert!(!sequence.advance(TOTAL_MS - 1));
        assert!(sequence.advance(1));
        assert!(!sequence.advance(1));
    }
}
