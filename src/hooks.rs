//! Hooks wiring the count-up, rotation and parallax state to browser
//! events. Every hook releases its timer, observer or listener in the
//! effect destructor.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent,
};
use yew::prelude::*;

use crate::config;
use crate::counter::CountUp;
use crate::dom;
use crate::parallax::{self, Bounds, ParallaxOffset};
use crate::rotation::Rotation;

type FrameLoop = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Counts from 0 to `target` over `duration_ms` the first time the returned
/// node scrolls into view.
#[hook]
pub fn use_count_up(target: u64, duration_ms: f64) -> (NodeRef, u64) {
    let node = use_node_ref();
    let value = use_state_eq(|| 0u64);

    {
        let node = node.clone();
        let value = value.clone();
        use_effect_with_deps(
            move |&(target, duration_ms): &(u64, f64)| {
                let counter = Rc::new(RefCell::new(CountUp::new(target, duration_ms)));
                let pending = Rc::new(Cell::new(None::<i32>));
                let frame: FrameLoop = Rc::new(RefCell::new(None));

                {
                    let counter = counter.clone();
                    let pending = pending.clone();
                    let handle = frame.clone();
                    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
                        pending.set(None);
                        let Some(step) = counter.borrow_mut().advance(now) else {
                            return;
                        };
                        value.set(step.value);
                        if !step.finished {
                            if let Some(next) = handle.borrow().as_ref() {
                                pending.set(dom::request_frame(next));
                            }
                        }
                    }) as Box<dyn FnMut(f64)>));
                }

                let on_visible = {
                    let counter = counter.clone();
                    let pending = pending.clone();
                    let frame = frame.clone();
                    Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                        let visible = entries
                            .iter()
                            .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
                        if !visible || !counter.borrow_mut().trigger(dom::now_ms()) {
                            return;
                        }
                        observer.disconnect();
                        if let Some(step) = frame.borrow().as_ref() {
                            pending.set(dom::request_frame(step));
                        }
                    }) as Box<dyn FnMut(Array, IntersectionObserver)>)
                };

                let observer = node.cast::<Element>().and_then(|element| {
                    let mut options = IntersectionObserverInit::new();
                    options.threshold(&JsValue::from_f64(config::COUNT_UP_THRESHOLD));
                    match IntersectionObserver::new_with_options(on_visible.as_ref().unchecked_ref(), &options) {
                        Ok(observer) => {
                            observer.observe(&element);
                            Some(observer)
                        }
                        Err(err) => {
                            warn!("Could not observe statistic: {:?}", err);
                            None
                        }
                    }
                });

                move || {
                    counter.borrow_mut().cancel();
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    if let Some(id) = pending.take() {
                        dom::cancel_frame(id);
                    }
                    // Breaks the closure's reference to itself.
                    frame.borrow_mut().take();
                    drop(on_visible);
                }
            },
            (target, duration_ms),
        );
    }

    (node, *value)
}

/// Index into a list of `len` items, advanced every `period_ms`.
#[hook]
pub fn use_rotation(len: usize, period_ms: u32) -> usize {
    let index = use_state_eq(|| 0usize);

    {
        let index = index.clone();
        use_effect_with_deps(
            move |&(len, period_ms): &(usize, u32)| {
                let rotation = Rc::new(RefCell::new(Rotation::new(len)));
                index.set(0);
                let interval = {
                    let rotation = rotation.clone();
                    Interval::new(period_ms, move || {
                        if let Some(next) = rotation.borrow_mut().tick() {
                            index.set(next);
                        }
                    })
                };
                move || {
                    rotation.borrow_mut().release();
                    drop(interval);
                }
            },
            (len, period_ms),
        );
    }

    *index
}

/// Tracks the pointer over the returned node and yields the offset a
/// background layer should be translated by.
#[hook]
pub fn use_parallax(strength: f64) -> (NodeRef, ParallaxOffset) {
    let node = use_node_ref();
    let offset = use_state_eq(ParallaxOffset::default);

    {
        let node = node.clone();
        let offset = offset.clone();
        use_effect_with_deps(
            move |&strength: &f64| {
                let listener = node.cast::<HtmlElement>().map(|container| {
                    let on_move = {
                        let container = container.clone();
                        Closure::wrap(Box::new(move |e: MouseEvent| {
                            let rect = container.get_bounding_client_rect();
                            let bounds = Bounds {
                                left: rect.left(),
                                top: rect.top(),
                                width: rect.width(),
                                height: rect.height(),
                            };
                            if let Some(next) =
                                parallax::offset(e.client_x() as f64, e.client_y() as f64, bounds, strength)
                            {
                                offset.set(next);
                            }
                        }) as Box<dyn FnMut(MouseEvent)>)
                    };
                    if let Err(err) =
                        container.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
                    {
                        warn!("Could not attach parallax listener: {:?}", err);
                    }
                    (container, on_move)
                });

                move || {
                    if let Some((container, on_move)) = listener {
                        let _ = container
                            .remove_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
                    }
                }
            },
            strength,
        );
    }

    (node, *offset)
}
