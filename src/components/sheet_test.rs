use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn render_mode_defaults_to_wrapped() {
    assert_eq!(RenderMode::default(), RenderMode::Wrapped);
}

#[test]
fn sheet_side_defaults_to_right() {
    assert_eq!(SheetSide::default(), SheetSide::Right);
    assert_eq!(SheetSide::default().edge(), "right");
}

// =============================================================
// Class composition
// =============================================================

fn has_token(class: &str, token: &str) -> bool {
    class.split_whitespace().any(|t| t == token)
}

#[test]
fn left_anchors_to_opposite_edge_of_default() {
    let left = sheet_content_class(SheetSide::Left, None);
    let right = sheet_content_class(SheetSide::default(), None);
    assert!(has_token(&left, "left-0"));
    assert!(!has_token(&left, "right-0"));
    assert!(has_token(&right, "right-0"));
    assert!(!has_token(&right, "left-0"));
}

#[test]
fn top_and_bottom_anchor_to_opposite_edges() {
    let top = sheet_content_class(SheetSide::Top, None);
    let bottom = sheet_content_class(SheetSide::Bottom, None);
    assert!(has_token(&top, "top-0") && !has_token(&top, "bottom-0"));
    assert!(has_token(&bottom, "bottom-0") && !has_token(&bottom, "top-0"));
}

#[test]
fn left_and_right_sheets_span_full_height() {
    for side in SheetSide::ALL {
        let full_height = has_token(side.anchor_classes(), "h-full");
        assert_eq!(full_height, matches!(side, SheetSide::Left | SheetSide::Right), "{side:?}");
    }
}

#[test]
fn content_class_is_fixed_and_keeps_override_last() {
    let class = sheet_content_class(SheetSide::Bottom, Some("max-h-[50vh]"));
    let tokens: Vec<&str> = class.split_whitespace().collect();
    assert_eq!(tokens.first(), Some(&"fixed"));
    assert!(tokens.contains(&"bottom-0"));
    assert_eq!(tokens.last(), Some(&"max-h-[50vh]"));
}

#[test]
fn typography_wrappers_merge_overrides() {
    assert_eq!(title_class(None), "text-lg font-semibold text-foreground");
    assert_eq!(title_class(Some("text-xl")), "text-lg font-semibold text-foreground text-xl");
    assert_eq!(description_class(Some("italic")), "text-sm text-muted-foreground italic");
    assert!(header_class(None).starts_with("flex flex-col"));
    assert!(footer_class(Some("pt-4")).ends_with("pt-4"));
}

#[test]
fn state_name_matches_data_state_values() {
    assert_eq!(state_name(true), "open");
    assert_eq!(state_name(false), "closed");
}

// =============================================================
// Rendered markup
// =============================================================

#[cfg(feature = "ssr")]
mod render {
    use leptos::prelude::*;

    use crate::components::sheet::{
        RenderMode, Sheet, SheetClose, SheetContent, SheetHeader, SheetSide, SheetTitle, SheetTrigger,
    };

    /// Count opening element tags, ignoring closing tags and comment markers.
    fn element_count(html: &str) -> usize {
        html.match_indices('<')
            .filter(|(i, _)| {
                let rest = &html[i + 1..];
                !rest.starts_with('/') && !rest.starts_with('!')
            })
            .count()
    }

    #[test]
    fn unwrapped_trigger_renders_one_fewer_element() {
        let wrapped = Owner::new().with(|| {
            view! {
                <SheetTrigger>
                    <a href="#details">"Open"</a>
                </SheetTrigger>
            }
            .to_html()
        });
        let unwrapped = Owner::new().with(|| {
            view! {
                <SheetTrigger mode=RenderMode::Unwrapped>
                    <a href="#details">"Open"</a>
                </SheetTrigger>
            }
            .to_html()
        });

        assert_eq!(wrapped.matches("<button").count(), 1, "{wrapped}");
        assert_eq!(unwrapped.matches("<button").count(), 0, "{unwrapped}");
        assert_eq!(unwrapped.matches("<a href").count(), 1, "{unwrapped}");
        assert_eq!(element_count(&wrapped), element_count(&unwrapped) + 1);
    }

    #[test]
    fn close_control_follows_render_mode() {
        let wrapped = Owner::new().with(|| view! { <SheetClose>"Done"</SheetClose> }.to_html());
        let unwrapped = Owner::new().with(|| {
            view! {
                <SheetClose mode=RenderMode::Unwrapped>
                    <span>"Done"</span>
                </SheetClose>
            }
            .to_html()
        });

        assert!(wrapped.contains(r#"data-slot="sheet-close""#), "{wrapped}");
        assert!(!unwrapped.contains("<button"), "{unwrapped}");
    }

    #[test]
    fn sheet_root_adds_no_wrapper() {
        let html = Owner::new().with(|| {
            view! {
                <Sheet>
                    <span>"inside"</span>
                </Sheet>
            }
            .to_html()
        });
        assert_eq!(element_count(&html), 1, "{html}");
    }

    #[test]
    fn content_renders_side_and_open_state() {
        let left = Owner::new().with(|| {
            view! {
                <SheetContent open=Signal::derive(|| true) side=SheetSide::Left>
                    <p>"body"</p>
                </SheetContent>
            }
            .to_html()
        });
        let right = Owner::new().with(|| {
            view! {
                <SheetContent open=Signal::derive(|| false)>
                    <p>"body"</p>
                </SheetContent>
            }
            .to_html()
        });

        assert!(left.contains(r#"data-side="left""#), "{left}");
        assert!(left.contains(r#"data-state="open""#), "{left}");
        assert!(right.contains(r#"data-side="right""#), "{right}");
        assert!(right.contains(r#"data-state="closed""#), "{right}");
    }

    #[test]
    fn content_with_close_handler_adds_overlay_and_close_button_while_open() {
        let html = Owner::new().with(|| {
            let on_close = Callback::new(|()| {});
            view! {
                <SheetContent open=Signal::derive(|| true) on_close=on_close>
                    <p>"body"</p>
                </SheetContent>
            }
            .to_html()
        });
        assert!(html.contains(r#"data-slot="sheet-overlay""#), "{html}");
        assert!(html.contains(r#"aria-label="Close""#), "{html}");

        let closed = Owner::new().with(|| {
            let on_close = Callback::new(|()| {});
            view! {
                <SheetContent open=Signal::derive(|| false) on_close=on_close>
                    <p>"body"</p>
                </SheetContent>
            }
            .to_html()
        });
        assert!(!closed.contains("sheet-overlay"), "{closed}");
    }

    #[test]
    fn header_and_title_apply_overrides() {
        let html = Owner::new().with(|| {
            view! {
                <SheetHeader class="pb-2">
                    <SheetTitle class="text-xl">"Details"</SheetTitle>
                </SheetHeader>
            }
            .to_html()
        });
        assert!(html.contains("sm:text-left pb-2"), "{html}");
        assert!(html.contains("text-foreground text-xl"), "{html}");
        assert!(html.contains("<h2"), "{html}");
    }
}
