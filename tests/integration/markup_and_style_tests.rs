use counter_mvu::{ButtonPalette, Element};

use super::{given_a_mounted_counter, MOUNT_ID};

#[test]
fn given_a_mounted_counter_should_render_expected_markup() {
    let (document, _widget) = given_a_mounted_counter();

    assert_eq!(
        document.html(),
        concat!(
            r#"<div id="app">"#,
            r#"<div class="css-0">"#,
            r#"<div class="css-1">0</div>"#,
            r#"<div class="css-2">"#,
            r#"<button class="css-3">minus</button>"#,
            r#"<button class="css-4">plus</button>"#,
            "</div></div></div>",
        )
    );
}

#[test]
fn given_minus_and_plus_buttons_should_be_spaced_apart_in_that_order() {
    let (document, _widget) = given_a_mounted_counter();

    assert_eq!(
        document.button_labels(MOUNT_ID).unwrap(),
        vec!["minus", "plus"]
    );
    document
        .with_mounted(MOUNT_ID, |root, sheet| {
            let row = button_row(root);
            let style = sheet.style_of(row.class.as_ref().unwrap()).unwrap();
            assert_eq!(style.get("display"), Some("flex"));
            assert_eq!(style.get("justify-content"), Some("space-between"));
        })
        .unwrap();
}

#[test]
fn given_a_mounted_counter_should_center_the_count() {
    let (document, _widget) = given_a_mounted_counter();

    document
        .with_mounted(MOUNT_ID, |root, sheet| {
            let counter_mvu::Node::Element(counter) = &root.children[0] else {
                panic!("expected the counter element");
            };
            let style = sheet.style_of(counter.class.as_ref().unwrap()).unwrap();
            assert_eq!(style.get("justify-content"), Some("center"));
            assert_eq!(style.get("align-items"), Some("center"));
        })
        .unwrap();
}

#[test]
fn given_each_button_should_use_its_palette() {
    let (document, _widget) = given_a_mounted_counter();

    document
        .with_mounted(MOUNT_ID, |root, sheet| {
            for (label, palette) in [("minus", ButtonPalette::MINUS), ("plus", ButtonPalette::PLUS)] {
                let button = find_button(root, label);
                let style = sheet.style_of(button.class.as_ref().unwrap()).unwrap();

                let border = format!("2px solid {}", palette.color);
                assert_eq!(style.get("border"), Some(border.as_str()));
                assert_eq!(style.get("color"), Some(palette.color));
                assert_eq!(style.get("border-radius"), Some("3px"));
                assert_eq!(style.get("width"), Some("70px"));
                assert_eq!(style.get("height"), Some("28px"));
                assert_eq!(style.get("background-color"), Some("transparent"));
                assert_eq!(style.get_active("background-color"), Some(palette.active_color));
            }
        })
        .unwrap();
}

#[test]
fn given_repeated_renders_should_not_grow_the_stylesheet() {
    let (document, widget) = given_a_mounted_counter();
    let css_after_mount = document.stylesheet_css();

    for _ in 0..10 {
        widget.click_plus().unwrap();
    }
    assert_eq!(widget.count(), 10);

    assert_eq!(document.stylesheet_css(), css_after_mount);
    assert_eq!(css_after_mount.lines().count(), 7);
    assert!(css_after_mount.contains(".css-3:active{background-color:#7ec3c6;}"));
    assert!(css_after_mount.contains(".css-4:active{background-color:#f49bae;}"));
}

fn button_row(root: &Element) -> &Element {
    match &root.children[1] {
        counter_mvu::Node::Element(row) => row,
        other => panic!("expected the button row, found {other:?}"),
    }
}

fn find_button<'a>(root: &'a Element, label: &str) -> &'a Element {
    let mut found = None;
    root.walk(&mut |element| {
        if element.tag == "button" && element.text_content() == label {
            found = Some(element);
        }
    });
    found.unwrap_or_else(|| panic!("no {label} button"))
}
