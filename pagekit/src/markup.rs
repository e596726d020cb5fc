//! The stock demo page.
//!
//! Builds the element tree every widget expects: the IDs and classes the
//! controllers look up, three FAQ entries, three dropdown options, three
//! tabs with the first one active and the signup form.

use pagedom::{Display, Document, Element, InputKind, Rect, Style};

use crate::form::{FORM_ID, Field, SUCCESS_ID};
use crate::widgets::{CLASS_MESSAGE, accordion, click_demo, counter, dropdown, hover_box};
use crate::widgets::{keyboard_echo, tabs, theme_toggle};

/// Where the hover box sits on screen.
pub const HOVER_BOX_RECT: Rect = Rect::new(40.0, 120.0, 300.0, 150.0);

pub const FAQ: [(&str, &str); 3] = [
    (
        "What is JavaScript?",
        "JavaScript is the programming language of the web.",
    ),
    (
        "What are events?",
        "Events are things that happen in the page, like clicks and key presses.",
    ),
    (
        "What is the DOM?",
        "The Document Object Model is the tree of elements a script can change.",
    ),
];

/// `(data-value, label)` of each dropdown option.
pub const DROPDOWN_OPTIONS: [(&str, &str); 3] = [
    ("javascript", "JavaScript"),
    ("python", "Python"),
    ("rust", "Rust"),
];

/// `(panel ID, button label, panel text)` of each tab.
pub const TABS: [(&str, &str, &str); 3] = [
    ("tab1", "Overview", "Switch between tabs to see different content."),
    ("tab2", "Details", "Only one panel is visible at a time."),
    ("tab3", "Summary", "Tabs keep related content in one place."),
];

pub fn demo_document() -> Document {
    Document::new(
        Element::body()
            .child(header())
            .child(event_section())
            .child(widget_section())
            .child(signup_section()),
    )
}

fn message(id: &str) -> Element {
    Element::paragraph("").id(id).class(CLASS_MESSAGE)
}

fn header() -> Element {
    Element::div().id("header").class("header").children([
        Element::heading("Interactive Web Page").id("title"),
        Element::button(theme_toggle::DARK_LABEL)
            .id(theme_toggle::BUTTON_ID)
            .class("btn"),
    ])
}

fn event_section() -> Element {
    Element::section().id("events").class("section").children([
        Element::heading("Event Handling").id("events-title"),
        Element::button("Click Me!")
            .id(click_demo::BUTTON_ID)
            .class("btn"),
        message(click_demo::MESSAGE_ID),
        Element::div()
            .id(hover_box::BOX_ID)
            .class("hover-box")
            .text("Hover over me!")
            .rect(HOVER_BOX_RECT),
        message(hover_box::MESSAGE_ID),
        Element::input(InputKind::Text).id(keyboard_echo::INPUT_ID),
        message(keyboard_echo::MESSAGE_ID),
    ])
}

fn widget_section() -> Element {
    Element::section().id("widgets").class("section").children([
        Element::heading("Interactive Elements").id("widgets-title"),
        Element::button("Count: 0")
            .id(counter::COUNTER_ID)
            .class("btn"),
        Element::button("Reset").id(counter::RESET_ID).class("btn"),
        faq(),
        dropdown_menu(),
        message(dropdown::MESSAGE_ID),
        tab_group(),
    ])
}

fn faq() -> Element {
    let mut entries = Vec::new();
    for (i, (question, answer)) in FAQ.iter().enumerate() {
        let n = i + 1;
        entries.push(
            Element::div()
                .id(format!("faq-{n}-question"))
                .class(accordion::QUESTION_CLASS)
                .children([
                    Element::span(*question).id(format!("faq-{n}-text")),
                    Element::span("+")
                        .id(format!("faq-{n}-icon"))
                        .class(accordion::ICON_CLASS),
                ]),
        );
        entries.push(
            Element::div()
                .id(format!("faq-{n}-answer"))
                .class(accordion::ANSWER_CLASS)
                .text(*answer),
        );
    }
    Element::div().id("faq").class("faq").children(entries)
}

fn dropdown_menu() -> Element {
    let options = DROPDOWN_OPTIONS.iter().map(|(value, label)| {
        Element::anchor(*label)
            .id(format!("option-{value}"))
            .data("value", *value)
    });
    Element::div().id("dropdown").class("dropdown").children([
        Element::button("Choose a language ▼")
            .id(dropdown::BUTTON_ID)
            .class("btn"),
        Element::div()
            .id(dropdown::CONTENT_ID)
            .class("dropdown-content")
            .children(options),
    ])
}

fn tab_group() -> Element {
    let buttons = TABS.iter().enumerate().map(|(i, (panel, label, _))| {
        let button = Element::button(*label)
            .id(format!("{panel}-button"))
            .class(tabs::BUTTON_CLASS)
            .data("tab", *panel);
        if i == 0 { button.class(tabs::ACTIVE_CLASS) } else { button }
    });
    let panels = TABS.iter().enumerate().map(|(i, (panel, _, text))| {
        let element = Element::div()
            .id(*panel)
            .class(tabs::PANEL_CLASS)
            .text(*text);
        if i == 0 { element.class(tabs::ACTIVE_CLASS) } else { element }
    });
    Element::div().id("tabs").class("tabs").children([
        Element::div().id("tab-buttons").children(buttons),
        Element::div().id("tab-panels").children(panels),
    ])
}

fn signup_section() -> Element {
    let fields = [
        (Field::FullName, "Full Name", InputKind::Text),
        (Field::Email, "Email", InputKind::Email),
        (Field::Password, "Password", InputKind::Password),
        (Field::ConfirmPassword, "Confirm Password", InputKind::Password),
        (Field::Age, "Age", InputKind::Number),
        (Field::Terms, "I agree to the terms and conditions", InputKind::Checkbox),
    ];
    let groups = fields.into_iter().map(|(field, label, kind)| {
        Element::div()
            .id(format!("{}-group", field.element_id()))
            .class("form-group")
            .children([
                Element::label(label).id(format!("{}-label", field.element_id())),
                Element::input(kind).id(field.element_id()),
                Element::span("").id(field.error_id()).class("error-message"),
            ])
    });

    Element::section().id("signup").class("section").children([
        Element::heading("Sign Up").id("signup-title"),
        Element::form()
            .id(FORM_ID)
            .children(groups)
            .child(Element::button("Create Account").id("submit-btn").class("btn")),
        Element::div()
            .id(SUCCESS_ID)
            .class("success-message")
            .text("🎉 Account created successfully!")
            .style(Style::new().display(Display::None)),
    ])
}
