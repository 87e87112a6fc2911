use approval_desk_shared::StatusFilter;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    /// Range text, `MM/DD/YYYY - MM/DD/YYYY`.
    pub date_range: String,
    pub status: StatusFilter,
    #[prop_or(false)]
    pub loading: bool,
    pub on_date_change: Callback<String>,
    pub on_status_change: Callback<StatusFilter>,
    pub on_search: Callback<()>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let on_status = {
        let on_status_change = props.on_status_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_status_change.emit(StatusFilter::from_select_value(&select.value()));
        })
    };

    let on_date = {
        let on_date_change = props.on_date_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_date_change.emit(input.value());
        })
    };

    let on_enter = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_search.emit(());
            }
        })
    };

    let on_click = {
        let on_search = props.on_search.clone();
        Callback::from(move |_: MouseEvent| on_search.emit(()))
    };

    html! {
        <div class={classes!("flex", "flex-wrap", "items-end", "gap-3")}>
            <label class={classes!("flex", "flex-col", "gap-1", "text-sm")}>
                <span class={classes!("text-[var(--muted)]")}>{ "Status" }</span>
                <select class={classes!("rounded-lg", "border", "border-[var(--border)]", "px-2", "py-1")} onchange={on_status}>
                    { for StatusFilter::ALL.iter().map(|filter| html! {
                        <option value={filter.as_str()} selected={*filter == props.status}>{ filter.label() }</option>
                    }) }
                </select>
            </label>
            <label class={classes!("flex", "flex-col", "gap-1", "text-sm")}>
                <span class={classes!("text-[var(--muted)]")}>{ "Date range" }</span>
                <input
                    type="text"
                    name="daterange"
                    placeholder="MM/DD/YYYY - MM/DD/YYYY"
                    class={classes!("w-64", "rounded-lg", "border", "border-[var(--border)]", "px-2", "py-1")}
                    value={props.date_range.clone()}
                    oninput={on_date}
                    onkeydown={on_enter}
                />
            </label>
            <button
                type="button"
                class={classes!("btn-fluent-primary", "!px-3", "!py-1")}
                onclick={on_click}
                disabled={props.loading}
            >
                { if props.loading { "Searching..." } else { "Search" } }
            </button>
        </div>
    }
}
