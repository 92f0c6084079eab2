use yew::prelude::*;

use crate::utils::notice::Toast;

#[derive(Properties, PartialEq)]
pub struct ToastsProps {
    pub toasts: Vec<Toast>,
}

#[function_component]
pub fn Toasts(props: &ToastsProps) -> Html {
    html! {
        <div class="toasts" role="status">
            { for props.toasts.iter().map(|t| html! {
                <div class={t.level.class()}>{ t.message.clone() }</div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub page_name: AttrValue,
    #[prop_or_default]
    pub toasts: Vec<Toast>,
    #[prop_or_default]
    pub children: Children,
}

/// Sidebar navigation, breadcrumb and toasts around a dashboard page.
#[function_component]
pub fn Layout(props: &LayoutProps) -> Html {
    html! {
        <div class="layout">
            <aside class="sidebar">
                <a href="/dashboard">{ "Tableau de bord" }</a>
                <a href="/payroll">{ "Gestion des Paies" }</a>
                <a href="/performance">{ "Évaluations" }</a>
                <form method="post" action="/logout">
                    <button type="submit">{ "Déconnexion" }</button>
                </form>
            </aside>
            <main class="content">
                <h2 class="breadcrumb">{ props.page_name.clone() }</h2>
                <Toasts toasts={props.toasts.clone()} />
                { for props.children.iter() }
            </main>
        </div>
    }
}

/// Placeholder rendered when a list came back empty.
pub fn empty_state(message: &'static str) -> Html {
    html! { <div class="empty">{ message }</div> }
}
