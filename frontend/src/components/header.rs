use leptos::*;
use crate::config::{API_BASE, DEV_API_BASE, PROD_API_BASE};

/// Which analysis service this build talks to.
fn target_label(api_base: &str) -> &'static str {
    if api_base == DEV_API_BASE {
        "Local"
    } else if api_base == PROD_API_BASE {
        "Production"
    } else {
        "Custom"
    }
}

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">"DEFECT SCAN"</a>
            </div>
            <div class="header-right">
                <span class="badge" title=API_BASE>
                    {format!("API: {}", target_label(API_BASE))}
                </span>
            </div>
        </header>
    }
}
