//! Slide-out sheet primitives.
//!
//! SYSTEM CONTEXT
//! ==============
//! A sheet is a panel anchored to one viewport edge. These components only
//! lay it out: whether it is open lives in the caller's state and is passed in
//! as a signal, and the trigger/close controls just run caller callbacks.
//!
//! DESIGN
//! ======
//! Callers choose explicitly whether a control wraps its child in a button
//! (`RenderMode::Wrapped`) or renders the child as-is (`RenderMode::Unwrapped`).
//! Class overrides are appended after each primitive's baseline tokens.

#[cfg(test)]
#[path = "sheet_test.rs"]
mod sheet_test;

use leptos::prelude::*;

use crate::util::class_list::{ClassList, merge_classes};

const OVERLAY_CLASSES: &str = "fixed inset-0 z-50 bg-black/80 \
    data-[state=open]:animate-in data-[state=closed]:animate-out \
    data-[state=closed]:fade-out-0 data-[state=open]:fade-in-0";

const CONTENT_CLASSES: &str = "fixed z-50 gap-4 bg-background p-6 shadow-lg transition ease-in-out \
    data-[state=open]:animate-in data-[state=closed]:animate-out \
    data-[state=closed]:duration-300 data-[state=open]:duration-500";

const CLOSE_ICON_CLASSES: &str = "absolute right-4 top-4 rounded-sm opacity-70 ring-offset-background \
    transition-opacity hover:opacity-100 focus:outline-none focus:ring-2 focus:ring-ring \
    focus:ring-offset-2 disabled:pointer-events-none data-[state=open]:bg-secondary";

const CONTROL_CLASSES: &str = "inline-flex items-center justify-center";
const HEADER_CLASSES: &str = "flex flex-col space-y-2 text-center sm:text-left";
const FOOTER_CLASSES: &str = "flex flex-col-reverse sm:flex-row sm:justify-end sm:space-x-2";
const TITLE_CLASSES: &str = "text-lg font-semibold text-foreground";
const DESCRIPTION_CLASSES: &str = "text-sm text-muted-foreground";

/// How a trigger or close control presents its child.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Wrap the child in a `<button type="button">`.
    #[default]
    Wrapped,
    /// The child is already actionable; render it unchanged.
    Unwrapped,
}

/// Viewport edge a sheet slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SheetSide {
    Top,
    #[default]
    Right,
    Bottom,
    Left,
}

impl SheetSide {
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Name of the anchored edge.
    pub fn edge(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }

    /// Positioning and slide classes for this edge.
    pub fn anchor_classes(self) -> &'static str {
        match self {
            Self::Top => {
                "inset-x-0 top-0 border-b data-[state=closed]:slide-out-to-top data-[state=open]:slide-in-from-top"
            }
            Self::Bottom => {
                "inset-x-0 bottom-0 border-t data-[state=closed]:slide-out-to-bottom data-[state=open]:slide-in-from-bottom"
            }
            Self::Left => {
                "inset-y-0 left-0 h-full w-3/4 border-r data-[state=closed]:slide-out-to-left data-[state=open]:slide-in-from-left sm:max-w-sm"
            }
            Self::Right => {
                "inset-y-0 right-0 h-full w-3/4 border-l data-[state=closed]:slide-out-to-right data-[state=open]:slide-in-from-right sm:max-w-sm"
            }
        }
    }
}

/// `data-state` value for an open flag.
pub fn state_name(open: bool) -> &'static str {
    if open { "open" } else { "closed" }
}

/// Full class attribute for a content pane.
pub fn sheet_content_class(side: SheetSide, class: Option<&str>) -> String {
    ClassList::new(CONTENT_CLASSES)
        .with(side.anchor_classes())
        .with_override(class)
        .to_string()
}

/// Sheet root. Renders its children without a wrapper element.
#[component]
pub fn Sheet(children: Children) -> impl IntoView {
    children()
}

/// Control that opens the sheet.
#[component]
pub fn SheetTrigger(
    #[prop(optional)] mode: RenderMode,
    #[prop(optional)] on_activate: Option<Callback<()>>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    activation_control("sheet-trigger", mode, on_activate, class, children)
}

/// Control that closes the sheet. Same shape as [`SheetTrigger`].
#[component]
pub fn SheetClose(
    #[prop(optional)] mode: RenderMode,
    #[prop(optional)] on_activate: Option<Callback<()>>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    activation_control("sheet-close", mode, on_activate, class, children)
}

fn activation_control(
    slot: &'static str,
    mode: RenderMode,
    on_activate: Option<Callback<()>>,
    class: Option<String>,
    children: Children,
) -> AnyView {
    match mode {
        RenderMode::Unwrapped => children(),
        RenderMode::Wrapped => {
            let class = merge_classes(CONTROL_CLASSES, class.as_deref());
            let on_click = move |_| {
                if let Some(on_activate) = on_activate {
                    on_activate.run(());
                }
            };
            view! {
                <button type="button" class=class data-slot=slot on:click=on_click>
                    {children()}
                </button>
            }
            .into_any()
        }
    }
}

/// Backdrop behind an open sheet.
#[component]
pub fn SheetOverlay(
    #[prop(into)] open: Signal<bool>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let class = merge_classes(OVERLAY_CLASSES, class.as_deref());
    let on_backdrop = move |_| {
        if let Some(on_click) = on_click {
            on_click.run(());
        }
    };

    view! {
        <div
            class=class
            data-slot="sheet-overlay"
            data-state=move || state_name(open.get())
            on:click=on_backdrop
        ></div>
    }
}

/// The sliding panel surface.
///
/// The pane stays mounted and reflects `open` through `data-state` and the
/// `hidden` attribute. When `on_close` is given, the pane also renders the
/// overlay, a corner close button, and closes on Escape.
#[component]
pub fn SheetContent(
    #[prop(into)] open: Signal<bool>,
    #[prop(optional)] side: SheetSide,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] on_close: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let class = sheet_content_class(side, class.as_deref());
    let close = move || {
        if let Some(on_close) = on_close {
            on_close.run(());
        }
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };
    let overlay_click = Callback::new(move |()| close());

    view! {
        <Show when=move || open.get() && on_close.is_some()>
            <SheetOverlay open=open on_click=overlay_click/>
        </Show>
        <div
            class=class
            role="dialog"
            aria-modal="true"
            tabindex="-1"
            data-slot="sheet-content"
            data-side=side.edge()
            data-state=move || state_name(open.get())
            hidden=move || !open.get()
            on:keydown=on_keydown
        >
            {children()}
            {on_close
                .is_some()
                .then(|| {
                    view! {
                        <button
                            type="button"
                            class=CLOSE_ICON_CLASSES
                            data-state=move || state_name(open.get())
                            on:click=move |_| close()
                            aria-label="Close"
                        >
                            "✕"
                            <span class="sr-only">"Close"</span>
                        </button>
                    }
                })}
        </div>
    }
}

/// Heading block at the top of a sheet.
#[component]
pub fn SheetHeader(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    let class = header_class(class.as_deref());
    view! { <div class=class data-slot="sheet-header">{children()}</div> }
}

/// Action row at the bottom of a sheet.
#[component]
pub fn SheetFooter(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    let class = footer_class(class.as_deref());
    view! { <div class=class data-slot="sheet-footer">{children()}</div> }
}

#[component]
pub fn SheetTitle(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    let class = title_class(class.as_deref());
    view! { <h2 class=class data-slot="sheet-title">{children()}</h2> }
}

#[component]
pub fn SheetDescription(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    let class = description_class(class.as_deref());
    view! { <p class=class data-slot="sheet-description">{children()}</p> }
}

pub fn header_class(class: Option<&str>) -> String {
    merge_classes(HEADER_CLASSES, class)
}

pub fn footer_class(class: Option<&str>) -> String {
    merge_classes(FOOTER_CLASSES, class)
}

pub fn title_class(class: Option<&str>) -> String {
    merge_classes(TITLE_CLASSES, class)
}

pub fn description_class(class: Option<&str>) -> String {
    merge_classes(DESCRIPTION_CLASSES, class)
}
