use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

// Browsers report ratios that land a hair under the threshold they fired for.
const RATIO_SLACK: f64 = 0.001;

// Small steps keep callbacks coming for sections much taller than the viewport.
const OBSERVER_STEPS: [f64; 6] = [0.0, 0.01, 0.025, 0.05, 0.1, config::REVEAL_THRESHOLD];

/// What an observer saw of a section at one moment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sighting {
    /// Share of the section inside the observed viewport.
    pub ratio: f64,
    pub visible_px: f64,
    /// Height of the observed viewport, root margin applied. Zero if unknown.
    pub viewport_px: f64,
}

impl Sighting {
    /// Whether the section covers `threshold` of itself or of the viewport,
    /// whichever is reached first.
    fn is_enough(&self, threshold: f64) -> bool {
        if self.ratio <= 0.0 && self.visible_px <= 0.0 {
            return false;
        }
        self.ratio + RATIO_SLACK >= threshold
            || (self.viewport_px > 0.0 && self.visible_px >= self.viewport_px * threshold)
    }
}

/// One-shot latch for a section's entrance.
#[derive(Debug, Default)]
pub struct RevealState {
    fired: bool,
}

impl RevealState {
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Feeds one observation. Returns true only the first time enough of the
    /// section is on screen.
    pub fn observe(&mut self, sighting: Sighting, threshold: f64) -> bool {
        if self.fired || !sighting.is_enough(threshold) {
            return false;
        }
        self.fired = true;
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub offset_px: u32,
}

pub fn reveal_style(revealed: bool, config: &RevealConfig) -> String {
    if revealed {
        format!(
            "opacity: 1; transform: translateY(0); filter: blur(0px); \
             transition: opacity {d}ms cubic-bezier(0.215, 0.61, 0.355, 1) {l}ms, \
             transform {d}ms cubic-bezier(0.215, 0.61, 0.355, 1) {l}ms, \
             filter {d}ms cubic-bezier(0.215, 0.61, 0.355, 1) {l}ms;",
            d = config.duration_ms,
            l = config.delay_ms,
        )
    } else {
        format!(
            "opacity: 0; transform: translateY({}px); filter: blur(10px);",
            config.offset_px
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct FadeInSectionProps {
    pub children: Children,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or(1_000)]
    pub duration_ms: u32,
    #[prop_or(50)]
    pub offset_px: u32,
    #[prop_or_default]
    pub class: Classes,
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn watch(
    element: &Element,
    mut on_visible: impl FnMut() + 'static,
) -> Result<(IntersectionObserver, ObserverCallback), JsValue> {
    let mut latch = RevealState::default();
    let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            let sighting = Sighting {
                ratio: entry.intersection_ratio(),
                visible_px: entry.intersection_rect().height(),
                viewport_px: entry.root_bounds().map_or(0.0, |bounds| bounds.height()),
            };
            if latch.observe(sighting, config::REVEAL_THRESHOLD) {
                on_visible();
                observer.disconnect();
            }
        }
    });

    let options = IntersectionObserverInit::new();
    let steps: Array = OBSERVER_STEPS.iter().map(|&step| JsValue::from_f64(step)).collect();
    options.set_threshold(&steps);
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);
    Ok((observer, callback))
}

#[function_component(FadeInSection)]
pub fn fade_in_section(props: &FadeInSectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let watcher = node.cast::<Element>().and_then(|element| {
                    let shown = revealed.clone();
                    match watch(&element, move || shown.set(true)) {
                        Ok(watcher) => Some(watcher),
                        Err(e) => {
                            warn!("Section reveal unavailable, showing immediately: {:?}", e);
                            None
                        }
                    }
                });
                if watcher.is_none() {
                    revealed.set(true);
                }
                move || {
                    if let Some((observer, callback)) = watcher {
                        debug!("Disconnecting section observer");
                        observer.disconnect();
                        drop(callback);
                    }
                }
            },
            (),
        );
    }

    let config = RevealConfig {
        delay_ms: props.delay_ms,
        duration_ms: props.duration_ms,
        offset_px: props.offset_px,
    };

    html! {
        <div ref={node} class={props.class.clone()} style={reveal_style(*revealed, &config)}>
            { for props.children.iter() }
        </div>
    }
}
