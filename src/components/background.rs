//! Decorative background: particles, floating shapes, gradient orbs and
//! the cursor trail.

use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use folio_core::effects::trail::{DOT_LIFETIME, FADE_DURATION};
use folio_core::effects::{generate_particles, orb_transform, CursorTrail, DotId, ShapeHover};
use futures::StreamExt;
use gloo::timers::future::TimeoutFuture;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::context::{use_scroll_y, use_site};
use crate::platform::events::{listen_pointer, PageEvent};
use crate::platform::timer::millis;

const SHAPE_COUNT: usize = 3;
const ORB_COUNT: usize = 2;

/// Remove `id` from the trail once `after` has elapsed
fn schedule(mut trail: Signal<CursorTrail>, id: DotId, after: Duration, fade: bool) {
    spawn(async move {
        TimeoutFuture::new(millis(after)).await;
        if fade {
            if trail.write().fade(id) {
                schedule(trail, id, FADE_DURATION, false);
            }
        } else {
            trail.write().remove(id);
        }
    });
}

#[component]
pub fn Background() -> Element {
    let site = use_site();
    let scroll_y = use_scroll_y();
    let mut hovered = use_signal(|| None::<usize>);
    let mut trail = use_signal(CursorTrail::default);

    let particles = use_hook(|| {
        let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);
        Rc::new(generate_particles(site.peek().particle_count, &mut rng))
    });

    let pointer = use_coroutine(move |mut rx: UnboundedReceiver<PageEvent>| async move {
        while let Some(event) = rx.next().await {
            let PageEvent::PointerMove(x, y) = event else {
                continue;
            };
            let (id, evicted) = trail.write().push(x, y);
            if let Some(old) = evicted {
                schedule(trail, old, FADE_DURATION, false);
            }
            schedule(trail, id, DOT_LIFETIME, true);
        }
    });

    use_hook(move || Rc::new(listen_pointer(move |event| pointer.send(event))));

    let scrolled = scroll_y();

    rsx! {
        div { class: "background", "aria-hidden": "true",
            div { id: "particles",
                for (i, particle) in particles.iter().enumerate() {
                    div { key: "{i}", class: "particle", style: "{particle.style()}" }
                }
            }
            for i in 0..SHAPE_COUNT {
                div {
                    key: "shape-{i}",
                    class: "shape shape-{i}",
                    style: "{ShapeHover(hovered() == Some(i)).style(i, scrolled)}",
                    onmouseenter: move |_| hovered.set(Some(i)),
                    onmouseleave: move |_| hovered.set(None),
                }
            }
            for i in 0..ORB_COUNT {
                div {
                    key: "orb-{i}",
                    class: "gradient-orb orb-{i}",
                    style: "transform: {orb_transform(i, scrolled)};",
                }
            }
        }
        for dot in trail.read().dots().iter() {
            div {
                key: "{dot.id}",
                class: if dot.fading { "trail-dot fading" } else { "trail-dot" },
                style: "left: {dot.x}px; top: {dot.y}px;",
            }
        }
    }
}
