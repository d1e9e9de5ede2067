use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
pub(crate) fn assert_hx_endpoint(form: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let got_endpoint = form
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("{attribute} attribute missing"));

    assert_eq!(
        got_endpoint, endpoint,
        "want form with attribute {attribute}=\"{endpoint}\", got {got_endpoint:?}"
    );
}

#[track_caller]
fn must_get_input<'a>(form: &ElementRef<'a>, name: &str) -> ElementRef<'a> {
    form.select(&Selector::parse("input").unwrap())
        .find(|input| input.value().attr("name") == Some(name))
        .unwrap_or_else(|| panic!("No input found with name \"{name}\""))
}

#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    let input = must_get_input(form, name);
    let input_type = input.value().attr("type").unwrap_or_default();

    assert_eq!(
        input_type, type_,
        "want input {name} with type \"{type_}\", got {input_type:?}"
    );
    assert!(
        input.value().attr("required").is_some(),
        "want input with name {name} to have the required attribute but got none"
    );
}

#[track_caller]
pub(crate) fn assert_form_input_with_value(
    form: &ElementRef<'_>,
    name: &str,
    type_: &str,
    value: &str,
) {
    assert_form_input(form, name, type_);

    let input = must_get_input(form, name);
    let input_value = input.value().attr("value").unwrap_or_default();

    assert_eq!(
        input_value, value,
        "want input {name} with value \"{value}\", got {input_value:?}"
    );
}

/// Assert that the form has a radio button `name` with `value`, and whether it is checked.
#[track_caller]
pub(crate) fn assert_form_radio(form: &ElementRef<'_>, name: &str, value: &str, checked: bool) {
    let radio = form
        .select(&Selector::parse("input[type=radio]").unwrap())
        .find(|input| {
            input.value().attr("name") == Some(name) && input.value().attr("value") == Some(value)
        })
        .unwrap_or_else(|| {
            panic!("No radio button found with name \"{name}\" and value \"{value}\"")
        });

    assert_eq!(
        radio.value().attr("checked").is_some(),
        checked,
        "want radio {name}={value} checked to be {checked}"
    );
}

/// Assert that the form has an optional textarea `name` containing `text`.
#[track_caller]
pub(crate) fn assert_form_textarea(form: &ElementRef<'_>, name: &str, text: &str) {
    let textarea = form
        .select(&Selector::parse("textarea").unwrap())
        .find(|textarea| textarea.value().attr("name") == Some(name))
        .unwrap_or_else(|| panic!("No textarea found with name \"{name}\""));

    assert!(
        textarea.value().attr("required").is_none(),
        "want textarea {name} to be optional"
    );
    assert_eq!(textarea.text().collect::<String>(), text);
}

#[track_caller]
pub(crate) fn assert_form_submit_button_with_text(form: &ElementRef<'_>, text: &str) {
    let submit_button = form
        .select(&Selector::parse("button[type=submit]").unwrap())
        .next()
        .expect("No submit button found");

    let got_text = submit_button.text().collect::<String>();
    assert_eq!(text, got_text.trim());
}

/// Assert that the first error message in the form reads `want_error_message`.
#[track_caller]
pub(crate) fn assert_form_error_message(form: &ElementRef<'_>, want_error_message: &str) {
    let error_message = form
        .select(&Selector::parse("p.text-red-500").unwrap())
        .next()
        .expect("No error message found")
        .text()
        .collect::<String>();

    assert_eq!(want_error_message, error_message.trim());
}
