use shared::{partition_goals, AchievementLevel, AgePanel, Domain, DomainSection, Goal, LevelMap, SubAreaGroup};
use yew::prelude::*;

use crate::components::LevelSelect;

#[derive(Properties, PartialEq)]
pub struct GoalAccordionProps {
    pub goals: Vec<Goal>,
    pub levels: LevelMap,
    pub on_level_change: Callback<(String, AchievementLevel)>,
}

/// One collapsible section per domain; a single renderer handles every
/// (domain, sub-area, age bucket) combination.
#[function_component(GoalAccordion)]
pub fn goal_accordion(props: &GoalAccordionProps) -> Html {
    let sections = use_memo(props.goals.clone(), |goals| partition_goals(goals));
    let open_domain = use_state(|| Some(Domain::ALL[0]));

    html! {
        <div class="goal-accordion">
            {for sections.iter().map(|section| {
                let is_open = *open_domain == Some(section.domain);
                let on_toggle = {
                    let open_domain = open_domain.clone();
                    let domain = section.domain;
                    Callback::from(move |_: MouseEvent| {
                        open_domain.set(if is_open { None } else { Some(domain) });
                    })
                };

                html! {
                    <div class={classes!("accordion-item", is_open.then_some("open"))}>
                        <button type="button" class="accordion-header" onclick={on_toggle}>
                            <span>{section.domain.label()}</span>
                            {progress_badge(section, &props.levels)}
                        </button>
                        if is_open {
                            <div class="accordion-body">
                                {for section.groups.iter().map(|group| {
                                    render_group(group, &props.levels, &props.on_level_change)
                                })}
                            </div>
                        }
                    </div>
                }
            })}
        </div>
    }
}

fn progress_badge(section: &DomainSection, levels: &LevelMap) -> Html {
    let total = section.total_goals();
    if total == 0 {
        return html! {};
    }

    html! {
        <span class="badge">{format!("{}/{}", section.recorded_goals(levels), total)}</span>
    }
}

fn render_group(group: &SubAreaGroup, levels: &LevelMap, on_level_change: &Callback<(String, AchievementLevel)>) -> Html {
    html! {
        <div class="goal-group">
            if let Some(sub_area) = group.sub_area {
                <h4 class="sub-area-title">{sub_area.label()}</h4>
            }
            if group.panels.is_empty() {
                <p class="goal-group-empty">{"No goals in this area"}</p>
            }
            {for group.panels.iter().map(|panel| render_panel(panel, levels, on_level_change))}
        </div>
    }
}

fn render_panel(panel: &AgePanel, levels: &LevelMap, on_level_change: &Callback<(String, AchievementLevel)>) -> Html {
    html! {
        <div class="age-panel">
            <h5 class="age-panel-title">{panel.bucket.label()}</h5>
            {for panel.goals.iter().map(|goal| html! {
                <div key={goal.id.clone()} class="goal-row">
                    <span class="goal-name">{&goal.name}</span>
                    <LevelSelect
                        goal_id={goal.id.clone()}
                        value={levels.get(&goal.id)}
                        on_change={on_level_change.clone()}
                    />
                </div>
            })}
        </div>
    }
}
