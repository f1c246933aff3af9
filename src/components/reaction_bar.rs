//! Reaction Bar Component
//!
//! Reaction buttons with counts; the current session's pick is highlighted.

use std::collections::BTreeMap;

use leptos::prelude::*;

/// Reaction keys with their emoji
pub const REACTIONS: [(&str, &str); 3] = [("like", "👍"), ("love", "❤️"), ("wow", "😮")];

#[component]
pub fn ReactionBar(
    counts: BTreeMap<String, u32>,
    mine: Option<String>,
    #[prop(into)] on_react: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="reaction-bar">
            {REACTIONS
                .iter()
                .map(|(key, emoji)| {
                    let count = counts.get(*key).copied().unwrap_or(0);
                    let class = if mine.as_deref() == Some(*key) {
                        "reaction-btn active"
                    } else {
                        "reaction-btn"
                    };
                    let key = key.to_string();
                    view! {
                        <button class=class on:click=move |_| on_react.run(key.clone())>
                            {*emoji}
                            " "
                            {count}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
