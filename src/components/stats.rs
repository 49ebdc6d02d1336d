//! Stats and skills blocks, animated when first revealed.

use dioxus::prelude::*;
use folio_core::effects::CounterAnimation;
use gloo::timers::future::TimeoutFuture;

use crate::context::{reveal_class, use_is_revealed, use_revealed, use_site};

/// Reveal id of the stats grid
const STATS_ID: &str = "stats";
/// Reveal id of the skills list
const SKILLS_ID: &str = "skills-list";

/// One counter frame, roughly an animation frame
const COUNTER_FRAME_MS: u32 = 16;
/// Delay before the skill bars fill
const SKILL_FILL_DELAY_MS: u32 = 500;

#[component]
pub fn StatsGrid() -> Element {
    let site = use_site();
    let visible = use_is_revealed(STATS_ID);
    let stats = site.read().stats.clone();

    rsx! {
        div {
            id: STATS_ID,
            class: reveal_class("stats-grid", visible),
            "data-reveal": "true",
            for stat in stats {
                StatCounter { key: "{stat.label}", label: stat.label.clone(), target: stat.target }
            }
        }
    }
}

/// Counts up to `target` once the stats grid is revealed
#[component]
fn StatCounter(label: String, target: f64) -> Element {
    let revealed = use_revealed();
    let mut shown = use_signal(|| "0".to_string());
    let mut started = use_signal(|| false);

    use_effect(move || {
        if !revealed.read().contains(STATS_ID) || *started.peek() {
            return;
        }
        started.set(true);
        spawn(async move {
            let mut counter = CounterAnimation::new(target);
            while let Some(text) = counter.step() {
                shown.set(text);
                TimeoutFuture::new(COUNTER_FRAME_MS).await;
            }
        });
    });

    rsx! {
        div { class: "card stat-card",
            div { class: "stat-number", "data-target": "{target}", "{shown}" }
            div { class: "stat-label", "{label}" }
        }
    }
}

#[component]
pub fn SkillsList() -> Element {
    let site = use_site();
    let revealed = use_revealed();
    let visible = use_is_revealed(SKILLS_ID);
    let mut filled = use_signal(|| false);
    let mut scheduled = use_signal(|| false);

    use_effect(move || {
        if !revealed.read().contains(SKILLS_ID) || *scheduled.peek() {
            return;
        }
        scheduled.set(true);
        spawn(async move {
            TimeoutFuture::new(SKILL_FILL_DELAY_MS).await;
            filled.set(true);
        });
    });

    let skills = site.read().skills.clone();
    let fill = filled();

    rsx! {
        div {
            id: SKILLS_ID,
            class: reveal_class("card skills", visible),
            "data-reveal": "true",
            for skill in skills {
                div { key: "{skill.name}", class: "skill-item",
                    div { class: "skill-header",
                        span { "{skill.name}" }
                        span { class: "skill-level", "{skill.level}%" }
                    }
                    div { class: "skill-bar",
                        div {
                            class: "skill-progress",
                            "data-width": "{skill.level}",
                            style: if fill { "width: {skill.level}%;" } else { "width: 0;" },
                        }
                    }
                }
            }
        }
    }
}
