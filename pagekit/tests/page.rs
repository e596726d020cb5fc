use std::time::Duration;

use pagedom::{Color, Display, Document, Event, Surface};
use pagekit::Page;
use pagekit::config::PageConfig;
use pagekit::form::Field;
use pagekit::markup::demo_document;

const ERROR_RED: Color = Color::rgb(0xe5, 0x3e, 0x3e);

fn fill(page: &mut Page<Document>, field: Field, value: &str) {
    page.surface_mut()
        .set_value(field.element_id(), value)
        .unwrap();
}

fn fill_valid(page: &mut Page<Document>) {
    fill(page, Field::FullName, "Jane Doe");
    fill(page, Field::Email, "jane@example.com");
    fill(page, Field::Password, "Abc12345");
    fill(page, Field::ConfirmPassword, "Abc12345");
    fill(page, Field::Age, "30");
    page.surface_mut()
        .set_checked(Field::Terms.element_id(), true)
        .unwrap();
}

fn error_text(page: &Page<Document>, field: Field) -> String {
    page.surface().text(field.error_id()).unwrap()
}

fn display(page: &Page<Document>, id: &str) -> Option<Display> {
    page.surface().style(id).unwrap().display
}

fn submit(page: &mut Page<Document>) {
    page.dispatch(&Event::submit("signup-form")).unwrap();
}

// ============================================================================
// Live validation
// ============================================================================

#[test]
fn test_blur_validates_one_field() {
    let mut page = Page::demo();
    fill(&mut page, Field::FullName, "A");
    page.dispatch(&Event::blur("fullname")).unwrap();

    assert_eq!(
        error_text(&page, Field::FullName),
        "Name must be at least 2 characters long"
    );
    assert_eq!(
        page.surface().style("fullname-error").unwrap().color,
        Some(ERROR_RED)
    );
    // Other fields stay quiet.
    assert_eq!(error_text(&page, Field::Email), "");

    fill(&mut page, Field::FullName, "Al");
    page.dispatch(&Event::blur("fullname")).unwrap();
    assert_eq!(error_text(&page, Field::FullName), "");
}

#[test]
fn test_password_validates_while_typing() {
    let mut page = Page::demo();
    fill(&mut page, Field::Password, "abc");
    page.dispatch(&Event::input("password")).unwrap();
    assert_eq!(
        error_text(&page, Field::Password),
        "Password must be at least 8 characters long"
    );

    fill(&mut page, Field::Password, "Abc12345");
    page.dispatch(&Event::input("password")).unwrap();
    assert_eq!(error_text(&page, Field::Password), "");
}

#[test]
fn test_blur_on_confirm_compares_passwords() {
    let mut page = Page::demo();
    fill(&mut page, Field::Password, "Abc12345");
    fill(&mut page, Field::ConfirmPassword, "Abc12346");
    page.dispatch(&Event::blur("confirm-password")).unwrap();
    assert_eq!(
        error_text(&page, Field::ConfirmPassword),
        "Passwords do not match"
    );
}

// ============================================================================
// Submit
// ============================================================================

#[test]
fn test_invalid_submit_shows_every_error() {
    let mut page = Page::demo();
    submit(&mut page);

    assert_eq!(error_text(&page, Field::FullName), "Full name is required");
    assert_eq!(error_text(&page, Field::Email), "Email is required");
    assert_eq!(error_text(&page, Field::Password), "Password is required");
    assert_eq!(
        error_text(&page, Field::ConfirmPassword),
        "Please confirm your password"
    );
    assert_eq!(error_text(&page, Field::Age), "Age is required");
    assert_eq!(
        error_text(&page, Field::Terms),
        "You must agree to the terms and conditions"
    );
    assert_eq!(display(&page, "success-message"), Some(Display::None));
    assert_eq!(page.pending_timers(), 0);
}

#[test]
fn test_valid_submit_then_reset() {
    let mut page = Page::demo();
    submit(&mut page);
    fill_valid(&mut page);
    submit(&mut page);

    for field in Field::ALL {
        assert_eq!(error_text(&page, field), "", "{field}");
    }
    assert_eq!(display(&page, "signup-form"), Some(Display::None));
    assert_eq!(display(&page, "success-message"), Some(Display::Block));

    page.advance(Duration::from_millis(2999)).unwrap();
    assert_eq!(display(&page, "success-message"), Some(Display::Block));

    page.advance(Duration::from_millis(1)).unwrap();
    assert_eq!(display(&page, "signup-form"), Some(Display::Block));
    assert_eq!(display(&page, "success-message"), Some(Display::None));
    for field in Field::ALL {
        assert_eq!(page.surface().value(field.element_id()).unwrap_or_default(), "");
    }
    assert!(!page.surface().is_checked("terms").unwrap());
}

#[test]
fn test_resubmit_restarts_the_reset() {
    let mut page = Page::demo();
    fill_valid(&mut page);
    submit(&mut page);
    page.advance(Duration::from_millis(2000)).unwrap();
    submit(&mut page);
    assert_eq!(page.pending_timers(), 1);

    page.advance(Duration::from_millis(2000)).unwrap();
    assert_eq!(display(&page, "success-message"), Some(Display::Block));
    page.advance(Duration::from_millis(1000)).unwrap();
    assert_eq!(display(&page, "success-message"), Some(Display::None));
}

#[test]
fn test_reset_delay_follows_config() {
    let config = PageConfig::new().form_reset(Duration::from_millis(500));
    let mut page = Page::new(demo_document(), config);
    fill_valid(&mut page);
    submit(&mut page);
    assert_eq!(page.next_deadline(), Some(Duration::from_millis(500)));
    assert_eq!(page.advance(Duration::from_millis(500)).unwrap(), 1);
    assert_eq!(display(&page, "signup-form"), Some(Display::Block));
}

#[test]
fn test_validate_all_reads_the_page() {
    let mut page = Page::demo();
    assert!(!page.validate_all().unwrap().is_valid());
    fill_valid(&mut page);
    assert!(page.validate_all().unwrap().is_valid());
    // Nothing is displayed.
    assert_eq!(error_text(&page, Field::FullName), "");
}

// ============================================================================
// Effects
// ============================================================================

#[test]
fn test_flash_message_clears_itself() {
    let mut page = Page::demo();
    page.flash("click-message", "Saved", None).unwrap();
    assert_eq!(page.surface().text("click-message").unwrap(), "Saved");

    page.advance(Duration::from_millis(3000)).unwrap();
    assert_eq!(page.surface().text("click-message").unwrap(), "");
    assert_eq!(
        page.surface().get("click-message").unwrap().class_name(),
        "message"
    );
}

#[test]
fn test_flash_again_extends() {
    let mut page = Page::demo();
    page.flash("click-message", "One", Some(Duration::from_millis(100)))
        .unwrap();
    page.advance(Duration::from_millis(50)).unwrap();
    page.flash("click-message", "Two", Some(Duration::from_millis(100)))
        .unwrap();
    page.advance(Duration::from_millis(60)).unwrap();
    assert_eq!(page.surface().text("click-message").unwrap(), "Two");
    page.advance(Duration::from_millis(40)).unwrap();
    assert_eq!(page.surface().text("click-message").unwrap(), "");
}

#[test]
fn test_animation_is_dropped_after_playing() {
    let mut page = Page::demo();
    page.animate("counter-btn", "pulse").unwrap();
    assert_eq!(
        page.surface().style("counter-btn").unwrap().animation.as_deref(),
        Some("pulse 0.5s ease-in-out")
    );
    page.advance(Duration::from_millis(500)).unwrap();
    assert_eq!(page.surface().style("counter-btn").unwrap().animation, None);
}

#[test]
fn test_effect_on_missing_element_fails() {
    let mut page = Page::demo();
    assert!(page.flash("nope", "x", None).is_err());
    assert_eq!(page.pending_timers(), 0);
}
