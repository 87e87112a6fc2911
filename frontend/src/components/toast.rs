use approval_desk_shared::notification::{NotifyLevel, Toast, ToastPosition};
use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

fn level_classes(level: NotifyLevel) -> Classes {
    match level {
        NotifyLevel::Success => classes!("bg-emerald-600", "text-white"),
        NotifyLevel::Info => classes!("bg-sky-600", "text-white"),
        NotifyLevel::Warning => classes!("bg-amber-500", "text-black"),
        NotifyLevel::Error => classes!("bg-red-600", "text-white"),
    }
}

fn position_classes(position: ToastPosition) -> Classes {
    match position {
        ToastPosition::TopRight => classes!("top-4", "right-4"),
        ToastPosition::BottomRight => classes!("bottom-4", "right-4"),
        ToastPosition::BottomLeft => classes!("bottom-4", "left-4"),
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub toast: Toast,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
pub fn toast_item(props: &ToastItemProps) -> Html {
    let notification = &props.toast.notification;
    let options = notification.options;

    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        Callback::from(move |_: ()| on_dismiss.emit(id))
    };

    let auto_timeout = {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), options.timeout_ms)
    };

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with(props.toast.id, move |_| {
            if options.timeout_ms > 0 {
                auto_timeout.reset();
            } else {
                auto_timeout.cancel();
            }
        });
    }

    let close_button = if options.close_button {
        let dismiss = dismiss.clone();
        let onclick = Callback::from(move |_: MouseEvent| dismiss.emit(()));
        html! {
            <button
                type="button"
                class={classes!(
                    "ml-3",
                    "inline-flex",
                    "h-6",
                    "w-6",
                    "items-center",
                    "justify-center",
                    "rounded-full",
                    "hover:bg-black/10",
                    "dark:hover:bg-white/15"
                )}
                aria-label="Close notification"
                {onclick}
            >
                { "×" }
            </button>
        }
    } else {
        Html::default()
    };

    let progress = if options.progress_bar && options.timeout_ms > 0 {
        let style = format!("animation: toast-progress {}ms linear forwards;", options.timeout_ms);
        html! { <div class={classes!("toast-progress", "h-1", "bg-white/60")} {style} /> }
    } else {
        Html::default()
    };

    html! {
        <div
            class={classes!(
                "toast",
                format!("toast-{}", notification.level.as_str()),
                "w-80",
                "overflow-hidden",
                "rounded-xl",
                "shadow-xl",
                level_classes(notification.level)
            )}
            role="status"
            aria-live="polite"
        >
            <div class={classes!("flex", "items-start", "px-4", "py-3", "text-sm")}>
                <div class={classes!("flex-1", "space-y-1")}>
                    <p class={classes!("font-semibold")}>{ notification.title.clone() }</p>
                    <p>{ notification.message.clone() }</p>
                </div>
                { close_button }
            </div>
            { progress }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    let Some(first) = props.toasts.first() else {
        return Html::default();
    };
    let position = first.notification.options.position;

    html! {
        <div class={classes!("fixed", "z-50", "flex", "flex-col", "gap-2", position_classes(position))}>
            { for props.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={props.on_dismiss.clone()} />
            }) }
        </div>
    }
}
