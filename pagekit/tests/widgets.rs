use std::time::Duration;

use pagedom::{Color, Display, Document, Event, Key, Surface, Transform};
use pagekit::Page;
use pagekit::error::PageError;
use pagekit::widgets::EventResult;

fn text(page: &Page<Document>, id: &str) -> String {
    page.surface().text(id).unwrap()
}

fn class_name(page: &Page<Document>, id: &str) -> String {
    page.surface().get(id).unwrap().class_name()
}

fn has_class(page: &Page<Document>, id: &str, class: &str) -> bool {
    page.surface().has_class(id, class).unwrap()
}

fn click(page: &mut Page<Document>, id: &str) -> EventResult {
    page.dispatch(&Event::click(id)).unwrap()
}

fn type_into(page: &mut Page<Document>, id: &str, value: &str) {
    page.surface_mut().set_value(id, value).unwrap();
    page.dispatch(&Event::input(id)).unwrap();
}

// ============================================================================
// Click demo
// ============================================================================

#[test]
fn test_click_counts_and_presses() {
    let mut page = Page::demo();
    assert!(click(&mut page, "click-btn").is_handled());
    assert!(click(&mut page, "click-btn").is_handled());

    assert_eq!(text(&page, "click-message"), "🎉 Button clicked 2 time(s)!");
    assert_eq!(class_name(&page, "click-message"), "message success");
    assert_eq!(
        page.surface().style("click-btn").unwrap().transform,
        Some(Transform::Scale(0.95))
    );
}

#[test]
fn test_click_press_reverts_after_delay() {
    let mut page = Page::demo();
    click(&mut page, "click-btn");

    page.advance(Duration::from_millis(149)).unwrap();
    assert_eq!(
        page.surface().style("click-btn").unwrap().transform,
        Some(Transform::Scale(0.95))
    );
    page.advance(Duration::from_millis(1)).unwrap();
    assert_eq!(
        page.surface().style("click-btn").unwrap().transform,
        Some(Transform::Scale(1.0))
    );
}

#[test]
fn test_rapid_clicks_restart_the_press() {
    let mut page = Page::demo();
    click(&mut page, "click-btn");
    page.advance(Duration::from_millis(100)).unwrap();
    click(&mut page, "click-btn");
    assert_eq!(page.pending_timers(), 1);

    // The first release would have been due at 150 ms.
    page.advance(Duration::from_millis(100)).unwrap();
    assert_eq!(
        page.surface().style("click-btn").unwrap().transform,
        Some(Transform::Scale(0.95))
    );
    page.advance(Duration::from_millis(50)).unwrap();
    assert_eq!(
        page.surface().style("click-btn").unwrap().transform,
        Some(Transform::Scale(1.0))
    );
}

// ============================================================================
// Hover box
// ============================================================================

#[test]
fn test_hover_enter_and_leave() {
    let mut page = Page::demo();
    page.dispatch(&Event::MouseEnter {
        target: "hover-box".into(),
    })
    .unwrap();
    assert_eq!(text(&page, "mouse-message"), "🐭 Mouse entered the box!");
    assert_eq!(class_name(&page, "mouse-message"), "message success");

    page.dispatch(&Event::MouseLeave {
        target: "hover-box".into(),
    })
    .unwrap();
    assert_eq!(text(&page, "mouse-message"), "👋 Mouse left the box!");
    assert_eq!(class_name(&page, "mouse-message"), "message");
}

#[test]
fn test_hover_reports_relative_position() {
    let mut page = Page::demo();
    let rect = page.surface().bounding_rect("hover-box").unwrap();
    page.dispatch(&Event::MouseMove {
        target: "hover-box".into(),
        client_x: rect.x + 12.4,
        client_y: rect.y + 30.5,
    })
    .unwrap();
    assert_eq!(text(&page, "hover-box"), "Mouse at: (12, 31)");
}

// ============================================================================
// Keyboard echo
// ============================================================================

#[test]
fn test_typing_is_echoed() {
    let mut page = Page::demo();
    type_into(&mut page, "text-input", "héllo");
    assert_eq!(
        text(&page, "keyboard-message"),
        "⌨️ You typed: \"héllo\" (5 characters)"
    );
    assert_eq!(class_name(&page, "keyboard-message"), "message success");
}

#[test]
fn test_clearing_input_clears_message_only() {
    let mut page = Page::demo();
    type_into(&mut page, "text-input", "hi");
    type_into(&mut page, "text-input", "");
    assert_eq!(text(&page, "keyboard-message"), "");
    assert_eq!(class_name(&page, "keyboard-message"), "message success");
}

#[test]
fn test_enter_sends_and_clears() {
    let mut page = Page::demo();
    type_into(&mut page, "text-input", "hi");
    page.dispatch(&Event::key_press("text-input", Key::Enter))
        .unwrap();
    assert_eq!(
        text(&page, "keyboard-message"),
        "🚀 You pressed Enter! Message sent!"
    );
    assert_eq!(page.surface().value("text-input").unwrap(), "");

    // Other keys do nothing.
    page.dispatch(&Event::key_press("text-input", Key::Char('a')))
        .unwrap();
    assert_eq!(
        text(&page, "keyboard-message"),
        "🚀 You pressed Enter! Message sent!"
    );
}

// ============================================================================
// Theme toggle
// ============================================================================

#[test]
fn test_theme_toggles() {
    let mut page = Page::demo();
    assert_eq!(text(&page, "theme-toggle"), "🌙 Dark Mode");

    click(&mut page, "theme-toggle");
    assert!(has_class(&page, "body", "dark-theme"));
    assert_eq!(text(&page, "theme-toggle"), "☀️ Light Mode");

    click(&mut page, "theme-toggle");
    assert!(!has_class(&page, "body", "dark-theme"));
    assert_eq!(text(&page, "theme-toggle"), "🌙 Dark Mode");
}

// ============================================================================
// Counter
// ============================================================================

#[test]
fn test_counter_colors() {
    let mut page = Page::demo();
    let background = |page: &Page<Document>| {
        page.surface()
            .style("counter-btn")
            .unwrap()
            .background_color
    };

    for _ in 0..4 {
        click(&mut page, "counter-btn");
    }
    assert_eq!(text(&page, "counter-btn"), "Count: 4");
    assert_eq!(background(&page), None);

    click(&mut page, "counter-btn");
    assert_eq!(background(&page), Some(Color::rgb(0xdd, 0x6b, 0x20)));

    for _ in 0..5 {
        click(&mut page, "counter-btn");
    }
    assert_eq!(text(&page, "counter-btn"), "Count: 10");
    assert_eq!(background(&page), Some(Color::rgb(0xe5, 0x3e, 0x3e)));

    click(&mut page, "reset-btn");
    assert_eq!(text(&page, "counter-btn"), "Count: 0");
    assert_eq!(background(&page), Some(Color::rgb(0x66, 0x7e, 0xea)));
}

// ============================================================================
// FAQ accordion
// ============================================================================

fn open_answers(page: &Page<Document>) -> Vec<String> {
    page.surface()
        .elements_with_class("faq-answer")
        .into_iter()
        .filter(|id| has_class(page, id, "open"))
        .collect()
}

#[test]
fn test_faq_opens_one_at_a_time() {
    let mut page = Page::demo();
    assert!(open_answers(&page).is_empty());

    click(&mut page, "faq-1-question");
    assert_eq!(open_answers(&page), vec!["faq-1-answer"]);
    assert_eq!(text(&page, "faq-1-icon"), "−");
    assert!(has_class(&page, "faq-1-icon", "rotate"));

    click(&mut page, "faq-2-question");
    assert_eq!(open_answers(&page), vec!["faq-2-answer"]);
    assert_eq!(text(&page, "faq-1-icon"), "+");
    assert!(!has_class(&page, "faq-1-icon", "rotate"));
}

#[test]
fn test_faq_click_twice_closes() {
    let mut page = Page::demo();
    click(&mut page, "faq-3-question");
    click(&mut page, "faq-3-question");
    assert!(open_answers(&page).is_empty());
    assert_eq!(text(&page, "faq-3-icon"), "+");
}

#[test]
fn test_faq_click_on_icon_counts() {
    let mut page = Page::demo();
    click(&mut page, "faq-2-icon");
    assert_eq!(open_answers(&page), vec!["faq-2-answer"]);
}

#[test]
fn test_faq_at_most_one_open_under_any_sequence() {
    let mut page = Page::demo();
    let clicks = [1, 1, 2, 3, 3, 1, 2, 2, 2, 3];
    for n in clicks {
        click(&mut page, &format!("faq-{n}-question"));
        assert!(open_answers(&page).len() <= 1);
    }
}

#[test]
fn test_faq_without_icon_is_a_markup_error() {
    let mut page = Page::demo();
    click(&mut page, "faq-1-question");
    page.surface_mut().set_class_name("faq-3-icon", "").unwrap();

    let err = page.dispatch(&Event::click("faq-2-question")).unwrap_err();
    assert!(matches!(err, PageError::Markup { ref id, .. } if id == "faq-3-question"));
    // The open answer was left alone.
    assert_eq!(open_answers(&page), vec!["faq-1-answer"]);
    assert_eq!(text(&page, "faq-1-icon"), "−");
}

// ============================================================================
// Dropdown
// ============================================================================

#[test]
fn test_dropdown_toggle_and_select() {
    let mut page = Page::demo();
    click(&mut page, "dropdown-btn");
    assert!(has_class(&page, "dropdown-content", "show"));
    click(&mut page, "dropdown-btn");
    assert!(!has_class(&page, "dropdown-content", "show"));

    click(&mut page, "dropdown-btn");
    click(&mut page, "option-python");
    assert!(!has_class(&page, "dropdown-content", "show"));
    assert_eq!(text(&page, "dropdown-btn"), "Python ▼");
    assert_eq!(text(&page, "dropdown-message"), "📚 You selected: Python");
    assert_eq!(class_name(&page, "dropdown-message"), "message success");
}

#[test]
fn test_dropdown_closes_on_outside_click() {
    let mut page = Page::demo();
    click(&mut page, "dropdown-btn");
    assert!(click(&mut page, "counter-btn").is_handled());
    assert!(!has_class(&page, "dropdown-content", "show"));
    assert_eq!(text(&page, "counter-btn"), "Count: 1");
}

// ============================================================================
// Tabs
// ============================================================================

fn active_panels(page: &Page<Document>) -> Vec<String> {
    page.surface()
        .elements_with_class("tab-panel")
        .into_iter()
        .filter(|id| has_class(page, id, "active"))
        .collect()
}

#[test]
fn test_tabs_switch() {
    let mut page = Page::demo();
    assert_eq!(active_panels(&page), vec!["tab1"]);

    click(&mut page, "tab3-button");
    assert_eq!(active_panels(&page), vec!["tab3"]);
    assert!(has_class(&page, "tab3-button", "active"));
    assert!(!has_class(&page, "tab1-button", "active"));

    click(&mut page, "tab3-button");
    assert_eq!(active_panels(&page), vec!["tab3"]);
}

#[test]
fn test_tab_without_panel_is_a_markup_error() {
    let mut page = Page::demo();
    page.surface_mut().set_class_name("title", "tab-button").unwrap();
    let err = page.dispatch(&Event::click("title")).unwrap_err();
    assert!(matches!(err, PageError::Markup { .. }));
    // Nothing was deactivated.
    assert_eq!(active_panels(&page), vec!["tab1"]);
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_unknown_target_is_an_error() {
    let mut page = Page::demo();
    assert!(page.dispatch(&Event::click("nope")).is_err());
}

#[test]
fn test_click_on_plain_element_is_ignored() {
    let mut page = Page::demo();
    assert_eq!(click(&mut page, "title"), EventResult::Ignored);
}

#[test]
fn test_success_message_starts_hidden() {
    let page = Page::demo();
    assert_eq!(
        page.surface().style("success-message").unwrap().display,
        Some(Display::None)
    );
}
