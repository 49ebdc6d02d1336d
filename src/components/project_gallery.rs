//! Filterable project cards.

use dioxus::prelude::*;
use folio_core::{Project, ProjectFilter};
use folio_ui::{Button, ButtonVariant, ChipOption, FilterChips, SearchInput};

use crate::components::ProjectModal;
use crate::context::{reveal_class, use_is_revealed, use_open_project, use_site};

const GRID_ID: &str = "projects-grid";

/// Filter chips, search box, the card grid and the details modal
#[component]
pub fn ProjectGallery() -> Element {
    let site = use_site();
    let mut open_project = use_open_project();
    let mut filter = use_signal(ProjectFilter::default);
    let visible = use_is_revealed(GRID_ID);

    let options: Vec<ChipOption> = site
        .read()
        .filters
        .iter()
        .map(|chip| ChipOption::new(&chip.label, &chip.value))
        .collect();
    let projects = site.read().projects.clone();
    let current = filter();
    let shown = projects
        .iter()
        .filter(|p| current.matches(&p.tag_string(), &p.card_text()))
        .count();

    let on_details = move |id: String| {
        if let Err(e) = site.read().project(&id) {
            tracing::warn!(error = %e, "Ignoring details request");
            return;
        }
        tracing::info!(project = %id, "Opening project details");
        open_project.set(Some(id));
    };

    rsx! {
        div { class: "project-controls",
            FilterChips {
                options,
                selected: current.tag.clone(),
                on_select: move |tag: String| {
                    tracing::debug!(%tag, "Project filter selected");
                    let next = filter().with_tag(tag);
                    filter.set(next);
                },
            }
            SearchInput {
                value: current.query.clone(),
                oninput: move |query: String| {
                    let next = filter().with_query(query);
                    filter.set(next);
                },
            }
        }

        div {
            id: GRID_ID,
            class: reveal_class("projects-grid", visible),
            "data-reveal": "true",
            for project in projects {
                ProjectCard {
                    key: "{project.id}",
                    hidden: !current.matches(&project.tag_string(), &project.card_text()),
                    project,
                    on_details,
                }
            }
        }

        if shown == 0 {
            p { class: "empty-state", "No projects match your filters." }
        }

        ProjectModal {}
    }
}

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: Project,
    hidden: bool,
    on_details: EventHandler<String>,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;
    let id = project.id.clone();

    rsx! {
        article {
            class: "card project",
            hidden: props.hidden,
            "data-tags": "{project.tag_string()}",
            h3 { "{project.title}" }
            p { "{project.summary}" }
            div { class: "tag-list",
                for tag in project.tags.iter() {
                    span { class: "tag", "{tag}" }
                }
            }
            div { class: "project-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    class: "project-btn".to_string(),
                    onclick: move |_| props.on_details.call(id.clone()),
                    "View details"
                }
                if let Some(demo) = project.demo.as_deref() {
                    a { class: "btn btn-ghost", href: "{demo}", "Live demo" }
                }
            }
        }
    }
}
