//! Family Tree View Component
//!
//! Draws the assembled graph: SVG lines underneath, absolutely positioned
//! cards on top. The canvas scrolls when wider than the screen.

use leptos::prelude::*;

use crate::components::RelativeCard;
use crate::family_tree::{assemble, EdgeSegment, GraphNode};
use crate::selection::ChosenSet;
use crate::store::{use_app_store, AppStateStoreFields};

/// Empty margin around the outermost cards
const CANVAS_PADDING: f64 = 24.0;

/// Family tree canvas
///
/// # Arguments
/// * `on_select` - Called with the person id of a clicked (matched) card
/// * `chosen` - When given, chosen cards get a highlighted border
#[component]
pub fn FamilyTreeView(
    #[prop(into)] on_select: Callback<String>,
    #[prop(optional, into)] chosen: Option<Signal<ChosenSet>>,
) -> impl IntoView {
    let store = use_app_store();
    let graph = Memo::new(move |_| store.users().with(|people| assemble(people)));
    let bounds = move || graph.with(|g| g.bounds(CANVAS_PADDING));

    let canvas_style = move || {
        let (_, _, width, height) = bounds();
        format!("width: {}px; height: {}px;", width, height)
    };
    let view_box = move || {
        let (x, y, width, height) = bounds();
        format!("{} {} {} {}", x, y, width, height)
    };

    let missing = move || graph.with(|g| g.unmatched().count());

    view! {
        <div class="family-tree">
            <Show when=move || { missing() > 0 }>
                <p class="muted family-tree-note">
                    "Ещё не добавлены в семью: " {missing}
                </p>
            </Show>
            <div class="family-tree-canvas" style=canvas_style>
                <svg class="family-tree-edges" width="100%" height="100%" viewBox=view_box>
                    <For
                        each=move || graph.with(|g| g.segments())
                        key=|segment: &EdgeSegment| segment.id.clone()
                        children=move |segment: EdgeSegment| {
                            view! {
                                <line
                                    x1=segment.x1.to_string()
                                    y1=segment.y1.to_string()
                                    x2=segment.x2.to_string()
                                    y2=segment.y2.to_string()
                                    stroke="currentColor"
                                    stroke-width="2"
                                />
                            }
                        }
                    />
                </svg>
                <For
                    each=move || graph.with(|g| g.nodes.clone())
                    key=|node: &GraphNode| (node.label.clone(), node.person_id.clone(), node.photo.clone())
                    children=move |node: GraphNode| {
                        let (min_x, min_y, _, _) = bounds();
                        let style = format!("left: {}px; top: {}px;", node.x - min_x, node.y - min_y);
                        let is_chosen = {
                            let id = node.person_id.clone();
                            Signal::derive(move || match (&id, chosen) {
                                (Some(id), Some(chosen)) => chosen.with(|set| set.contains(id)),
                                _ => false,
                            })
                        };
                        view! {
                            <div class="family-tree-slot" style=style>
                                <RelativeCard node=node chosen=is_chosen on_select=on_select />
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
