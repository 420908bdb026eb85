use dioxus::prelude::*;

/// Severity of a transient banner notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Warning,
    Error,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Success => "alert alert--success",
            AlertKind::Warning => "alert alert--warning",
            AlertKind::Error => "alert alert--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

/// Show a banner and schedule its auto-dismiss after 3 seconds. The banner
/// also carries a manual dismiss button.
pub fn push_alert(mut slot: Signal<Option<Alert>>, kind: AlertKind, message: impl Into<String>) {
    slot.set(Some(Alert {
        kind,
        message: message.into(),
    }));
    spawn(async move {
        tokio::time::sleep(std::time::Duration::from_secs(3)).await;
        slot.set(None);
    });
}

#[component]
pub fn AlertBanner(slot: Signal<Option<Alert>>) -> Element {
    let Some(alert) = slot() else {
        return rsx! {};
    };
    rsx! {
        div { class: alert.kind.class(),
            span { "{alert.message}" }
            button {
                class: "alert-dismiss",
                r#type: "button",
                onclick: move |_| slot.set(None),
                "×"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn BannerFixture(kind: AlertKind, message: String) -> Element {
        let slot = use_signal(move || Some(Alert { kind, message }));
        rsx! { AlertBanner { slot } }
    }

    fn render_banner(kind: AlertKind, message: &str) -> String {
        let mut dom = VirtualDom::new_with_props(
            BannerFixture,
            BannerFixtureProps {
                kind,
                message: message.to_string(),
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn warning_banner_renders_message_and_dismiss() {
        let html = render_banner(AlertKind::Warning, "Please enter student name");
        assert!(html.contains("Please enter student name"), "missing message in {html}");
        assert!(html.contains("alert--warning"), "missing kind class in {html}");
        assert!(html.contains("alert-dismiss"), "missing dismiss button in {html}");
    }

    #[test]
    fn banner_class_tracks_kind() {
        assert!(render_banner(AlertKind::Success, "saved").contains("alert--success"));
        assert!(render_banner(AlertKind::Error, "failed").contains("alert--error"));
    }
}
